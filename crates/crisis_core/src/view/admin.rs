//! Admin Panel: overview cards, management lists and the create-zone dialog.
//!
//! # Invariants
//! - Overview cards are always computed; the list below them follows the tab.
//! - Dialog submission goes through `RecordStore`; input is never dropped.
//! - A successful submit closes the dialog and resets the draft to defaults.
//! - A failed submit keeps the dialog open with the draft and error intact.

use crate::aggregate::{count_by, Tally};
use crate::filter::FacetField;
use crate::model::dataset::Dataset;
use crate::model::source::{SourceHealthThresholds, SourceStatus};
use crate::model::workflow::{Workflow, WorkflowStatus};
use crate::model::zone::CrisisZone;
use crate::present::Icon;
use crate::store::{CommandOutcome, RecordStore, StoreCommand, StoreError, ZoneDraft};
use crate::view::sources::{source_rows, SourceRow};
use crate::view::StatCard;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum AdminTab {
    #[default]
    Overview,
    Zones,
    Sources,
    Workflows,
    Users,
}

impl AdminTab {
    pub const ALL: [Self; 5] = [
        Self::Overview,
        Self::Zones,
        Self::Sources,
        Self::Workflows,
        Self::Users,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Overview => "overview",
            Self::Zones => "zones",
            Self::Sources => "sources",
            Self::Workflows => "workflows",
            Self::Users => "users",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|tab| tab.as_str() == value)
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Overview => "Overview",
            Self::Zones => "Crisis Zones",
            Self::Sources => "Data Sources",
            Self::Workflows => "Workflows",
            Self::Users => "Users",
        }
    }
}

/// "Create Crisis Zone" dialog state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CreateZoneDialog {
    pub open: bool,
    pub draft: ZoneDraft,
    pub error: Option<String>,
}

impl CreateZoneDialog {
    pub fn open(&mut self) {
        self.open = true;
        self.error = None;
    }

    /// Closes without submitting; the draft is discarded.
    pub fn cancel(&mut self) {
        *self = Self::default();
    }

    pub fn submit<S: RecordStore>(&mut self, store: &mut S) -> Result<CommandOutcome, StoreError> {
        match store.execute(StoreCommand::CreateZone(self.draft.clone())) {
            Ok(outcome) => {
                *self = Self::default();
                Ok(outcome)
            }
            Err(err) => {
                self.error = Some(err.to_string());
                Err(err)
            }
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AdminState {
    pub tab: AdminTab,
    pub create_zone: CreateZoneDialog,
}

/// Shown on the Users tab; accounts live with the session provider.
pub const USERS_NOTICE: &str = "Manage user permissions and access levels";

/// Tab-specific content below the overview cards.
#[derive(Debug, Clone, PartialEq)]
pub enum AdminPanel<'a> {
    Overview,
    Zones(&'a [CrisisZone]),
    Sources(Vec<SourceRow<'a>>),
    Workflows {
        rows: &'a [Workflow],
        failing: usize,
    },
    Users,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AdminView<'a> {
    pub tab: AdminTab,
    pub overview: Vec<StatCard>,
    pub panel: AdminPanel<'a>,
    pub zones_by_status: Tally,
    pub sources_by_status: Tally,
    pub workflows_by_status: Tally,
}

pub fn admin_view<'a>(
    data: &'a Dataset,
    state: &AdminState,
    thresholds: &SourceHealthThresholds,
) -> AdminView<'a> {
    let sources = source_rows(&data.sources, thresholds);
    let zones_by_status = count_by(&data.zones, FacetField::Status);
    let sources_by_status = count_by(&sources, FacetField::Status);
    let workflows_by_status = count_by(&data.workflows, FacetField::Status);

    let active_workflows = workflows_by_status.get(WorkflowStatus::Active.as_str());
    let failing_workflows = workflows_by_status.get(WorkflowStatus::Error.as_str());
    let degraded_sources = sources_by_status.get(SourceStatus::Warning.as_str());

    let workflow_detail = if failing_workflows == 0 {
        "Running smoothly".to_string()
    } else {
        format!("{failing_workflows} failing")
    };

    let attention = degraded_sources + failing_workflows;
    let system_status = if attention == 0 {
        StatCard {
            title: "System Status",
            value: "Online".to_string(),
            detail: "All systems operational".to_string(),
            icon: Icon::Activity,
        }
    } else {
        StatCard {
            title: "System Status",
            value: "Degraded".to_string(),
            detail: if attention == 1 {
                "1 component needs attention".to_string()
            } else {
                format!("{attention} components need attention")
            },
            icon: Icon::Activity,
        }
    };

    let overview = vec![
        StatCard::count(
            "Total Crisis Zones",
            data.zones.len(),
            tally_detail(&zones_by_status),
            Icon::Globe,
        ),
        StatCard::count(
            "Data Sources",
            sources.len(),
            tally_detail(&sources_by_status),
            Icon::Database,
        ),
        StatCard::count(
            "Active Workflows",
            active_workflows,
            workflow_detail,
            Icon::Workflow,
        ),
        system_status,
    ];

    let panel = match state.tab {
        AdminTab::Overview => AdminPanel::Overview,
        AdminTab::Zones => AdminPanel::Zones(&data.zones),
        AdminTab::Sources => AdminPanel::Sources(sources),
        AdminTab::Workflows => AdminPanel::Workflows {
            rows: &data.workflows,
            failing: failing_workflows,
        },
        AdminTab::Users => AdminPanel::Users,
    };

    AdminView {
        tab: state.tab,
        overview,
        panel,
        zones_by_status,
        sources_by_status,
        workflows_by_status,
    }
}

/// `"2 active, 1 monitoring"` in first-seen order.
fn tally_detail(tally: &Tally) -> String {
    if tally.is_empty() {
        return "none".to_string();
    }
    tally
        .iter()
        .map(|(value, count)| format!("{count} {value}"))
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::{tally_detail, AdminTab};
    use crate::aggregate::Tally;

    #[test]
    fn tab_names_parse_back() {
        for tab in AdminTab::ALL {
            assert_eq!(AdminTab::parse(tab.as_str()), Some(tab));
        }
        assert_eq!(AdminTab::parse("settings"), None);
    }

    #[test]
    fn tally_detail_joins_counts_in_order() {
        let tally = ["active", "active", "monitoring"].into_iter().collect::<Tally>();
        assert_eq!(tally_detail(&tally), "2 active, 1 monitoring");
        assert_eq!(tally_detail(&Tally::new()), "none");
    }
}
