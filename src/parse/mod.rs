//! Parse phase: `schedules.json` text → Rust types.

pub mod types;

pub use types::*;

/// Deserialize a schedules JSON string into a `SchedulesFile`.
pub fn parse(json: &str) -> Result<SchedulesFile, serde_json::Error> {
    serde_json::from_str::<SchedulesFile>(json)
}
