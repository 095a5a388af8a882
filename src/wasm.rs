//! WASM entry points for browser and Node hosts.

use wasm_bindgen::prelude::*;

use crate::graph;
use crate::load::{MISSING_GRAPH_ERROR, schema_error};
use crate::parse;
use crate::validate;

/// Validate a schedules JSON document against a compiled graph JSON document.
/// Returns a JSON array of error strings; an empty array means valid.
#[wasm_bindgen]
pub fn validate_schedules_json(
    schedules_json: &str,
    compiled_graph_json: &str,
    prefix: Option<String>,
) -> JsValue {
    let result =
        validate_schedules_json_inner(schedules_json, compiled_graph_json, prefix.as_deref());
    serde_wasm_bindgen::to_value(&result).unwrap_or(JsValue::NULL)
}

pub fn validate_schedules_json_inner(
    schedules_json: &str,
    compiled_graph_json: &str,
    prefix: Option<&str>,
) -> Vec<String> {
    let graph = match graph::parse_graph(compiled_graph_json) {
        Ok(g) => g,
        Err(_) => return vec![MISSING_GRAPH_ERROR.to_string()],
    };

    let schedules = match parse::parse(schedules_json) {
        Ok(s) => s,
        Err(_) => return vec![schema_error()],
    };

    validate::validate_schedules(&schedules, &graph, prefix)
}

/// List every name a schedule may reference in the compiled graph JSON,
/// sorted. Returns `null` when the graph does not parse.
#[wasm_bindgen]
pub fn list_action_names(compiled_graph_json: &str) -> JsValue {
    match list_action_names_inner(compiled_graph_json) {
        Some(names) => serde_wasm_bindgen::to_value(&names).unwrap_or(JsValue::NULL),
        None => JsValue::NULL,
    }
}

pub fn list_action_names_inner(compiled_graph_json: &str) -> Option<Vec<String>> {
    let graph = graph::parse_graph(compiled_graph_json).ok()?;
    Some(graph::ActionIndex::from_graph(&graph).sorted_names())
}
