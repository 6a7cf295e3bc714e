//! Command/result contract to the record storage collaborator.
//!
//! # Responsibility
//! - Turn create/edit dialog submissions into explicit commands.
//! - Report typed outcomes and errors instead of discarding input.
//!
//! # Invariants
//! - Drafts are validated before any collection is mutated.
//! - A failed command leaves the store unchanged.

pub mod draft;
pub mod memory;

pub use draft::{SourceDraft, WorkflowDraft, ZoneDraft};
pub use memory::InMemoryStore;

use crate::model::dataset::Dataset;
use crate::model::{RecordId, RecordKind, ValidationError};
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type StoreResult<T> = Result<T, StoreError>;

#[derive(Debug, Clone, PartialEq)]
pub enum StoreCommand {
    CreateZone(ZoneDraft),
    CreateSource(SourceDraft),
    CreateWorkflow(WorkflowDraft),
    SetWorkflowActive { workflow_id: RecordId, active: bool },
    MarkAlertRead { alert_id: RecordId },
}

impl StoreCommand {
    /// Stable command name for diagnostics.
    pub fn name(&self) -> &'static str {
        match self {
            Self::CreateZone(_) => "create_zone",
            Self::CreateSource(_) => "create_source",
            Self::CreateWorkflow(_) => "create_workflow",
            Self::SetWorkflowActive { .. } => "set_workflow_active",
            Self::MarkAlertRead { .. } => "mark_alert_read",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandOutcome {
    Created { kind: RecordKind, id: RecordId },
    Updated { kind: RecordKind, id: RecordId },
    /// Command was valid but changed nothing.
    Unchanged { kind: RecordKind, id: RecordId },
}

impl CommandOutcome {
    pub fn id(&self) -> &str {
        match self {
            Self::Created { id, .. } | Self::Updated { id, .. } | Self::Unchanged { id, .. } => {
                id.as_str()
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum StoreError {
    Validation(ValidationError),
    NotFound { kind: RecordKind, id: RecordId },
    DuplicateName { kind: RecordKind, name: String },
}

impl StoreError {
    /// Metadata-only error code for logs; never carries user input.
    pub fn code(&self) -> &'static str {
        match self {
            Self::Validation(_) => "validation",
            Self::NotFound { .. } => "not_found",
            Self::DuplicateName { .. } => "duplicate_name",
        }
    }
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::NotFound { kind, id } => write!(f, "{kind} not found: {id}"),
            Self::DuplicateName { kind, name } => {
                write!(f, "{kind} named `{name}` already exists")
            }
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::NotFound { .. } | Self::DuplicateName { .. } => None,
        }
    }
}

impl From<ValidationError> for StoreError {
    fn from(value: ValidationError) -> Self {
        Self::Validation(value)
    }
}

/// Storage collaborator for dialog submissions.
pub trait RecordStore {
    fn execute(&mut self, command: StoreCommand) -> StoreResult<CommandOutcome>;

    /// Current authoritative collections.
    fn snapshot(&self) -> &Dataset;
}
