//! Crisis Zone Detail page.

use crate::model::alert::Alert;
use crate::model::dataset::Dataset;
use crate::model::report::Report;
use crate::model::source::SourceHealthThresholds;
use crate::model::workflow::Workflow;
use crate::model::zone::CrisisZone;
use crate::view::sources::SourceRow;

#[derive(Debug, Clone, PartialEq)]
pub struct ZoneDetail<'a> {
    pub zone: &'a CrisisZone,
    pub reports: Vec<&'a Report>,
    pub alerts: Vec<&'a Alert>,
    pub sources: Vec<SourceRow<'a>>,
    pub workflows: Vec<&'a Workflow>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ZoneDetailView<'a> {
    Found(ZoneDetail<'a>),
    NotFound { id: String },
}

/// Collects everything attached to zone `id`, in dataset order.
pub fn zone_detail_view<'a>(
    data: &'a Dataset,
    id: &str,
    thresholds: &SourceHealthThresholds,
) -> ZoneDetailView<'a> {
    let Some(zone) = data.zone(id) else {
        return ZoneDetailView::NotFound { id: id.to_string() };
    };
    let zone_id = zone.id.as_str();

    ZoneDetailView::Found(ZoneDetail {
        zone,
        reports: data.reports_for_zone(zone_id).collect(),
        alerts: data
            .alerts
            .iter()
            .filter(|alert| alert.crisis_zone_id == zone_id)
            .collect(),
        sources: data
            .sources
            .iter()
            .filter(|source| source.crisis_zone_id == zone_id)
            .map(|source| SourceRow::new(source, thresholds))
            .collect(),
        workflows: data
            .workflows
            .iter()
            .filter(|workflow| workflow.crisis_zone_id == zone_id)
            .collect(),
    })
}
