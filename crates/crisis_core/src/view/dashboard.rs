//! Dashboard page: zone/report search, facet filters and stat cards.

use crate::aggregate::count_where;
use crate::filter::{filter_refs, Criteria, DateWindow, FacetChoice, FacetField};
use crate::model::alert::Alert;
use crate::model::dataset::Dataset;
use crate::model::report::Report;
use crate::model::source::{SourceHealthThresholds, SourceStatus};
use crate::model::zone::{CrisisZone, Severity, ZoneStatus};
use crate::present::Icon;
use crate::view::{showing_label, StatCard};
use chrono::{DateTime, TimeZone};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DashboardTab {
    #[default]
    Zones,
    Reports,
    Alerts,
}

impl DashboardTab {
    pub fn label(self) -> &'static str {
        match self {
            Self::Zones => "Crisis Zones",
            Self::Reports => "Recent Reports",
            Self::Alerts => "Alerts",
        }
    }
}

/// Dashboard controls. One search box drives both zone and report lists.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DashboardState {
    pub search_query: String,
    pub severity: FacetChoice,
    pub status: FacetChoice,
    pub tab: DashboardTab,
}

impl DashboardState {
    pub fn new(tab: DashboardTab) -> Self {
        Self {
            tab,
            ..Self::default()
        }
    }

    pub fn set_search(&mut self, query: impl Into<String>) {
        self.search_query = query.into();
    }

    pub fn set_severity(&mut self, value: &str) {
        self.severity = FacetChoice::parse(value);
    }

    pub fn set_status(&mut self, value: &str) {
        self.status = FacetChoice::parse(value);
    }

    pub fn select_tab(&mut self, tab: DashboardTab) {
        self.tab = tab;
    }

    /// Name/region/country text plus severity and status facets.
    pub fn zone_criteria(&self) -> Criteria {
        Criteria::new()
            .with_text(self.search_query.clone())
            .with_facet_choice(FacetField::Severity, self.severity.clone())
            .with_facet_choice(FacetField::Status, self.status.clone())
    }

    /// Title/content/source text only; zone facets do not apply to reports.
    pub fn report_criteria(&self) -> Criteria {
        Criteria::new().with_text(self.search_query.clone())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct DashboardView<'a> {
    pub tab: DashboardTab,
    pub stats: Vec<StatCard>,
    pub zones: Vec<&'a CrisisZone>,
    pub zones_caption: String,
    pub reports: Vec<&'a Report>,
    pub reports_caption: String,
    /// Newest first.
    pub alerts: Vec<&'a Alert>,
}

pub fn dashboard_view<'a, Tz: TimeZone>(
    data: &'a Dataset,
    state: &DashboardState,
    thresholds: &SourceHealthThresholds,
    now: &DateTime<Tz>,
) -> DashboardView<'a> {
    let zones = filter_refs(&data.zones, &state.zone_criteria(), now);
    let reports = filter_refs(&data.reports, &state.report_criteria(), now);

    let mut alerts = data.alerts.iter().collect::<Vec<_>>();
    alerts.sort_by(|left, right| right.created_at.cmp(&left.created_at));

    DashboardView {
        tab: state.tab,
        stats: dashboard_stats(data, thresholds, now),
        zones_caption: showing_label(zones.len(), data.zones.len(), "crisis zones"),
        zones,
        reports_caption: showing_label(reports.len(), data.reports.len(), "reports"),
        reports,
        alerts,
    }
}

/// Stat cards, computed over the unfiltered collections.
pub fn dashboard_stats<Tz: TimeZone>(
    data: &Dataset,
    thresholds: &SourceHealthThresholds,
    now: &DateTime<Tz>,
) -> Vec<StatCard> {
    let active_zones = count_where(&data.zones, |zone| zone.status == ZoneStatus::Active);
    let critical_zones = count_where(&data.zones, |zone| zone.severity == Severity::Critical);

    let unread_alerts = count_where(&data.alerts, |alert| !alert.is_read);
    let critical_unread = count_where(&data.alerts, Alert::is_critical_unread);

    let today = Criteria::new().with_window(Some(DateWindow::Today));
    let reports_today = filter_refs(&data.reports, &today, now).len();
    let breaking = count_where(&data.reports, |report| report.is_breaking);

    let active_sources = count_where(&data.sources, |source| {
        source.status(thresholds) == SourceStatus::Active
    });

    vec![
        StatCard::count(
            "Active Crisis Zones",
            active_zones,
            format!("{critical_zones} critical"),
            Icon::Globe,
        ),
        StatCard::count(
            "Unread Alerts",
            unread_alerts,
            format!("{critical_unread} critical"),
            Icon::AlertTriangle,
        ),
        StatCard::count(
            "Reports Today",
            reports_today,
            format!("{breaking} breaking"),
            Icon::Activity,
        ),
        StatCard::count(
            "Data Sources",
            data.sources.len(),
            format!("{active_sources} active"),
            Icon::Database,
        ),
    ]
}
