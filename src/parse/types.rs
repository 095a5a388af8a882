//! Rust types for `schedules.json`.
//!
//! Every field is defaulted so that a structurally sound document with missing
//! values still deserializes; the validator reports those gaps as content
//! errors instead.

use serde::{Deserialize, Serialize};

// =============================================================================
// TOP-LEVEL DOCUMENT
// =============================================================================

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SchedulesFile {
    #[serde(default)]
    pub schedules: Vec<Schedule>,
}

// =============================================================================
// SCHEDULE
// =============================================================================

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Schedule {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub cron: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub options: Option<ScheduleOptions>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notification: Option<Notification>,
}

impl Schedule {
    pub fn new(name: impl Into<String>, cron: impl Into<String>) -> Self {
        Schedule {
            name: name.into(),
            cron: cron.into(),
            options: None,
            notification: None,
        }
    }

    /// Action references listed under `options.actions`, empty when absent.
    pub fn actions(&self) -> &[String] {
        self.options
            .as_ref()
            .map(|o| o.actions.as_slice())
            .unwrap_or_default()
    }

    /// Addresses listed under `notification.emails`, empty when absent.
    pub fn emails(&self) -> &[String] {
        self.notification
            .as_ref()
            .map(|n| n.emails.as_slice())
            .unwrap_or_default()
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleOptions {
    #[serde(default)]
    pub actions: Vec<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Notification {
    #[serde(default)]
    pub emails: Vec<String>,
}
