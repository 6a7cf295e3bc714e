//! Workflows page.

use crate::aggregate::{count_by, Tally};
use crate::filter::{filter_refs, Criteria, FacetChoice, FacetField};
use crate::model::dataset::Dataset;
use crate::model::workflow::Workflow;
use chrono::{DateTime, TimeZone};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WorkflowsState {
    pub query: String,
    pub trigger: FacetChoice,
    pub status: FacetChoice,
}

impl WorkflowsState {
    pub fn criteria(&self) -> Criteria {
        Criteria::new()
            .with_text(self.query.clone())
            .with_facet_choice(FacetField::TriggerType, self.trigger.clone())
            .with_facet_choice(FacetField::Status, self.status.clone())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct WorkflowsView<'a> {
    pub workflows: Vec<&'a Workflow>,
    pub by_status: Tally,
    pub by_trigger: Tally,
    pub total: usize,
}

pub fn workflows_view<'a, Tz: TimeZone>(
    data: &'a Dataset,
    state: &WorkflowsState,
    now: &DateTime<Tz>,
) -> WorkflowsView<'a> {
    WorkflowsView {
        workflows: filter_refs(&data.workflows, &state.criteria(), now),
        by_status: count_by(&data.workflows, FacetField::Status),
        by_trigger: count_by(&data.workflows, FacetField::TriggerType),
        total: data.workflows.len(),
    }
}
