//! Compiled project graph: the upstream model schedules are checked against.

pub mod index;
pub mod types;

pub use index::ActionIndex;
pub use types::*;

/// Deserialize a compiled graph JSON string.
pub fn parse_graph(json: &str) -> Result<CompiledGraph, serde_json::Error> {
    serde_json::from_str::<CompiledGraph>(json)
}
