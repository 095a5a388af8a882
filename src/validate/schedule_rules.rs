//! Per-schedule content rules.
//!
//! Each rule appends to the shared error list and never stops the others from
//! running, so one pass reports every problem in a schedule.

use std::collections::HashSet;

use super::cron::is_valid_cron;
use super::email::is_valid_email;
use crate::graph::ActionIndex;
use crate::parse::types::Schedule;

/// Run every rule against one schedule.
///
/// `seen_names` carries the names of the schedules checked before this one.
pub fn validate_schedule(
    schedule: &Schedule,
    seen_names: &mut HashSet<String>,
    index: &ActionIndex,
    prefix: Option<&str>,
    errors: &mut Vec<String>,
) {
    name_required(schedule, errors);
    name_not_blank(schedule, errors);
    name_unique(schedule, seen_names, errors);
    cron_required(schedule, errors);
    cron_parses(schedule, errors);
    actions_exist(schedule, index, prefix, errors);
    emails_valid(schedule, errors);
}

fn name_required(schedule: &Schedule, errors: &mut Vec<String>) {
    if schedule.name.is_empty() {
        errors.push("Schedule name is required.".to_string());
    }
}

// An empty name is reported here as well as by `name_required`.
fn name_not_blank(schedule: &Schedule, errors: &mut Vec<String>) {
    if schedule.name.trim().is_empty() {
        errors.push("Schedule name must not be empty.".to_string());
    }
}

fn name_unique(schedule: &Schedule, seen_names: &mut HashSet<String>, errors: &mut Vec<String>) {
    if !seen_names.insert(schedule.name.clone()) {
        errors.push(format!(
            "Schedule name \"{}\" is not unique. All schedule names must be unique.",
            schedule.name
        ));
    }
}

fn cron_required(schedule: &Schedule, errors: &mut Vec<String>) {
    if schedule.cron.is_empty() {
        errors.push(format!("Cron expression is required on {}.", schedule.name));
    }
}

fn cron_parses(schedule: &Schedule, errors: &mut Vec<String>) {
    if !is_valid_cron(&schedule.cron) {
        errors.push(format!(
            "Schedule \"{}\" contains an invalid cron expression \"{}\".",
            schedule.name, schedule.cron
        ));
    }
}

fn actions_exist(
    schedule: &Schedule,
    index: &ActionIndex,
    prefix: Option<&str>,
    errors: &mut Vec<String>,
) {
    for action in schedule.actions() {
        let reference = prefixed_action_name(action, prefix);
        if !index.contains(&reference) {
            errors.push(format!(
                "Action \"{}\" included in schedule {} doesn't exist in the project.",
                reference, schedule.name
            ));
        }
    }
}

fn emails_valid(schedule: &Schedule, errors: &mut Vec<String>) {
    for email in schedule.emails() {
        if !is_valid_email(email) {
            errors.push(format!(
                "Schedule \"{}\" contains an invalid email address \"{}\".",
                schedule.name, email
            ));
        }
    }
}

/// `<prefix>_<action>` when a non-empty prefix is set, else `action` unchanged.
pub fn prefixed_action_name(action: &str, prefix: Option<&str>) -> String {
    match prefix {
        Some(p) if !p.is_empty() => format!("{}_{}", p, action),
        _ => action.to_string(),
    }
}
