//! In-memory `RecordStore` over a [`Dataset`].

use crate::model::dataset::Dataset;
use crate::model::source::DataSource;
use crate::model::workflow::Workflow;
use crate::model::zone::CrisisZone;
use crate::model::{RecordId, RecordKind};
use crate::store::draft::{SourceDraft, WorkflowDraft, ZoneDraft};
use crate::store::{CommandOutcome, RecordStore, StoreCommand, StoreError, StoreResult};
use chrono::Utc;
use log::{info, warn};
use uuid::Uuid;

/// Applies commands to an owned dataset.
///
/// Created records are appended, so existing ordering is preserved.
pub struct InMemoryStore {
    dataset: Dataset,
    /// Owner id stamped on created zones.
    admin_id: String,
}

impl InMemoryStore {
    pub fn new(dataset: Dataset, admin_id: impl Into<String>) -> Self {
        Self {
            dataset,
            admin_id: admin_id.into(),
        }
    }

    pub fn into_dataset(self) -> Dataset {
        self.dataset
    }

    fn create_zone(&mut self, draft: ZoneDraft) -> StoreResult<CommandOutcome> {
        draft.validate()?;
        let name = draft.name.trim().to_string();
        let folded = name.to_lowercase();
        if self
            .dataset
            .zones
            .iter()
            .any(|zone| zone.name.to_lowercase() == folded)
        {
            return Err(StoreError::DuplicateName {
                kind: RecordKind::Zone,
                name,
            });
        }

        let now = Utc::now();
        let id = new_record_id();
        self.dataset.zones.push(CrisisZone {
            id: id.clone(),
            name,
            region: draft.region.trim().to_string(),
            country: draft.country.trim().to_string(),
            coordinates: None,
            status: draft.status,
            severity: draft.severity,
            description: draft.description.trim().to_string(),
            created_at: now,
            updated_at: now,
            admin_id: self.admin_id.clone(),
        });

        Ok(CommandOutcome::Created {
            kind: RecordKind::Zone,
            id,
        })
    }

    fn create_source(&mut self, draft: SourceDraft) -> StoreResult<CommandOutcome> {
        draft.validate()?;
        self.require_zone(&draft.crisis_zone_id)?;

        let id = new_record_id();
        self.dataset.sources.push(DataSource {
            id: id.clone(),
            name: draft.name.trim().to_string(),
            kind: draft.kind,
            url: draft.url.trim().to_string(),
            api_key: draft.api_key.filter(|key| !key.trim().is_empty()),
            is_active: true,
            crisis_zone_id: draft.crisis_zone_id,
            last_sync: None,
            error_count: 0,
            created_at: Utc::now(),
        });

        Ok(CommandOutcome::Created {
            kind: RecordKind::Source,
            id,
        })
    }

    fn create_workflow(&mut self, draft: WorkflowDraft) -> StoreResult<CommandOutcome> {
        draft.validate()?;
        self.require_zone(&draft.crisis_zone_id)?;

        let id = new_record_id();
        self.dataset.workflows.push(Workflow {
            id: id.clone(),
            name: draft.name.trim().to_string(),
            description: draft.description.trim().to_string(),
            automation_id: draft.automation_id.trim().to_string(),
            trigger_type: draft.trigger_type,
            crisis_zone_id: draft.crisis_zone_id,
            is_active: false,
            last_run: None,
            last_run_failed: false,
            created_at: Utc::now(),
        });

        Ok(CommandOutcome::Created {
            kind: RecordKind::Workflow,
            id,
        })
    }

    fn set_workflow_active(&mut self, id: RecordId, active: bool) -> StoreResult<CommandOutcome> {
        let workflow = self
            .dataset
            .workflows
            .iter_mut()
            .find(|workflow| workflow.id == id)
            .ok_or_else(|| StoreError::NotFound {
                kind: RecordKind::Workflow,
                id: id.clone(),
            })?;

        if workflow.is_active == active {
            return Ok(CommandOutcome::Unchanged {
                kind: RecordKind::Workflow,
                id,
            });
        }
        workflow.is_active = active;
        Ok(CommandOutcome::Updated {
            kind: RecordKind::Workflow,
            id,
        })
    }

    fn mark_alert_read(&mut self, id: RecordId) -> StoreResult<CommandOutcome> {
        let alert = self
            .dataset
            .alerts
            .iter_mut()
            .find(|alert| alert.id == id)
            .ok_or_else(|| StoreError::NotFound {
                kind: RecordKind::Alert,
                id: id.clone(),
            })?;

        if alert.is_read {
            return Ok(CommandOutcome::Unchanged {
                kind: RecordKind::Alert,
                id,
            });
        }
        alert.mark_read();
        Ok(CommandOutcome::Updated {
            kind: RecordKind::Alert,
            id,
        })
    }

    fn require_zone(&self, zone_id: &str) -> StoreResult<()> {
        if self.dataset.zone(zone_id).is_none() {
            return Err(StoreError::NotFound {
                kind: RecordKind::Zone,
                id: zone_id.to_string(),
            });
        }
        Ok(())
    }
}

impl RecordStore for InMemoryStore {
    fn execute(&mut self, command: StoreCommand) -> StoreResult<CommandOutcome> {
        let name = command.name();
        let result = match command {
            StoreCommand::CreateZone(draft) => self.create_zone(draft),
            StoreCommand::CreateSource(draft) => self.create_source(draft),
            StoreCommand::CreateWorkflow(draft) => self.create_workflow(draft),
            StoreCommand::SetWorkflowActive {
                workflow_id,
                active,
            } => self.set_workflow_active(workflow_id, active),
            StoreCommand::MarkAlertRead { alert_id } => self.mark_alert_read(alert_id),
        };

        match &result {
            Ok(outcome) => info!(
                "event=store_command module=store status=ok command={} id={}",
                name,
                outcome.id()
            ),
            Err(err) => warn!(
                "event=store_command module=store status=error command={} error_code={}",
                name,
                err.code()
            ),
        }
        result
    }

    fn snapshot(&self) -> &Dataset {
        &self.dataset
    }
}

fn new_record_id() -> RecordId {
    Uuid::new_v4().to_string()
}
