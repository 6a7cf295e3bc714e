//! Materialized entity collections handed to the views.

use crate::model::alert::Alert;
use crate::model::report::Report;
use crate::model::source::DataSource;
use crate::model::workflow::Workflow;
use crate::model::zone::CrisisZone;
use serde::{Deserialize, Serialize};

/// All collections a page render may read from.
///
/// Ordering inside each collection is the upstream order and is preserved by
/// every filter pass.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Dataset {
    pub zones: Vec<CrisisZone>,
    pub reports: Vec<Report>,
    pub alerts: Vec<Alert>,
    pub sources: Vec<DataSource>,
    pub workflows: Vec<Workflow>,
}

impl Dataset {
    pub fn zone(&self, id: &str) -> Option<&CrisisZone> {
        self.zones.iter().find(|zone| zone.id == id)
    }

    pub fn reports_for_zone<'a>(&'a self, zone_id: &'a str) -> impl Iterator<Item = &'a Report> {
        self.reports
            .iter()
            .filter(move |report| report.crisis_zone_id == zone_id)
    }

    pub fn is_empty(&self) -> bool {
        self.zones.is_empty()
            && self.reports.is_empty()
            && self.alerts.is_empty()
            && self.sources.is_empty()
            && self.workflows.is_empty()
    }
}
