//! Automation workflow descriptors.
//!
//! The automation engine itself is external; these records only describe
//! what the Workflows page lists.

use crate::model::RecordId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TriggerType {
    Manual,
    Scheduled,
    Event,
}

impl TriggerType {
    pub const ALL: [Self; 3] = [Self::Manual, Self::Scheduled, Self::Event];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Manual => "manual",
            Self::Scheduled => "scheduled",
            Self::Event => "event",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|trigger| trigger.as_str() == value)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WorkflowStatus {
    Active,
    Paused,
    Error,
}

impl WorkflowStatus {
    pub const ALL: [Self; 3] = [Self::Active, Self::Paused, Self::Error];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Paused => "paused",
            Self::Error => "error",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|status| status.as_str() == value)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Workflow {
    pub id: RecordId,
    pub name: String,
    pub description: String,
    /// Identifier of the workflow inside the external automation engine.
    #[serde(default)]
    pub automation_id: String,
    pub trigger_type: TriggerType,
    pub crisis_zone_id: RecordId,
    pub is_active: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_run: Option<DateTime<Utc>>,
    #[serde(default)]
    pub last_run_failed: bool,
    pub created_at: DateTime<Utc>,
}

impl Workflow {
    /// Paused wins over a failed last run.
    pub fn status(&self) -> WorkflowStatus {
        if !self.is_active {
            WorkflowStatus::Paused
        } else if self.last_run_failed {
            WorkflowStatus::Error
        } else {
            WorkflowStatus::Active
        }
    }
}
