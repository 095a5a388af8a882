//! Load `schedules.json` from a project directory and validate it.

use std::path::Path;

use crate::error::LoadError;
use crate::graph::CompiledGraph;
use crate::parse;
use crate::validate::validate_schedules;

pub const SCHEDULES_JSON_PATH: &str = "schedules.json";

pub const MISSING_GRAPH_ERROR: &str = "Compiled graph not provided.";

/// Single error returned when the file is not a well-formed schedules document.
pub fn schema_error() -> String {
    format!(
        "{} does not contain valid JSON conforming to the SchedulesJSON schema.",
        SCHEDULES_JSON_PATH
    )
}

/// Read `<project_dir>/schedules.json` and validate it against `graph`.
///
/// A missing graph or a malformed document yields a single error and no
/// further checks. Failing to read the file is returned as `Err`.
pub fn validate_schedules_file(
    graph: Option<&CompiledGraph>,
    project_dir: &Path,
    prefix: Option<&str>,
) -> Result<Vec<String>, LoadError> {
    let Some(graph) = graph else {
        return Ok(vec![MISSING_GRAPH_ERROR.to_string()]);
    };

    let path = project_dir.join(SCHEDULES_JSON_PATH);
    tracing::debug!(path = %path.display(), "reading schedules file");
    let content = std::fs::read_to_string(&path).map_err(|source| LoadError::Read {
        path: path.clone(),
        source,
    })?;

    match parse::parse(&content) {
        Ok(schedules) => Ok(validate_schedules(&schedules, graph, prefix)),
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "schedules file does not match schema");
            Ok(vec![schema_error()])
        }
    }
}
