//! Schedule validation phase.
//!
//! Checks a parsed schedules file for internal consistency and against the
//! actions defined in a compiled project graph. Problems are accumulated as
//! human-readable strings; nothing here fails.

pub mod cron;
pub mod email;
pub mod schedule_rules;

use std::collections::HashSet;

use crate::graph::{ActionIndex, CompiledGraph};
use crate::parse::types::SchedulesFile;

/// Validate every schedule in file order. Returns all errors found.
///
/// `prefix`, when non-empty, is prepended as `<prefix>_` to each
/// `options.actions` entry before it is looked up in the graph.
pub fn validate_schedules(
    schedules: &SchedulesFile,
    graph: &CompiledGraph,
    prefix: Option<&str>,
) -> Vec<String> {
    let mut errors = Vec::new();
    let mut seen_names = HashSet::new();
    let index = ActionIndex::from_graph(graph);

    for schedule in &schedules.schedules {
        schedule_rules::validate_schedule(
            schedule,
            &mut seen_names,
            &index,
            prefix,
            &mut errors,
        );
    }

    tracing::debug!(
        schedules = schedules.schedules.len(),
        errors = errors.len(),
        "validated schedules"
    );

    errors
}
