use chrono::{DateTime, TimeZone, Utc};
use crisis_core::model::report::CredibilityBand;
use crisis_core::model::source::SourceHealthThresholds;
use crisis_core::present::{Icon, Presentation, Tone};
use crisis_core::view::admin::{admin_view, AdminPanel, AdminState, AdminTab};
use crisis_core::view::dashboard::{dashboard_view, DashboardState, DashboardTab};
use crisis_core::view::reports::{reports_view, ReportsState};
use crisis_core::view::sources::{sources_view, SourcesState};
use crisis_core::view::workflows::{workflows_view, WorkflowsState};
use crisis_core::view::zone_detail::{zone_detail_view, ZoneDetailView};
use crisis_core::{sample_dataset, Dataset, DateWindow, FacetChoice};

fn fixed_now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 6, 15, 18, 0, 0).unwrap()
}

fn thresholds() -> SourceHealthThresholds {
    SourceHealthThresholds::default()
}

#[test]
fn dashboard_stat_cards_use_unfiltered_collections() {
    let now = fixed_now();
    let data = sample_dataset(now);
    let mut state = DashboardState::default();
    state.set_search("sudan");

    let view = dashboard_view(&data, &state, &thresholds(), &now);

    let summary = view
        .stats
        .iter()
        .map(|card| (card.title, card.value.as_str(), card.detail.as_str()))
        .collect::<Vec<_>>();
    assert_eq!(
        summary,
        vec![
            ("Active Crisis Zones", "2", "1 critical"),
            ("Unread Alerts", "2", "1 critical"),
            ("Reports Today", "3", "2 breaking"),
            ("Data Sources", "5", "3 active"),
        ]
    );
    assert_eq!(view.zones_caption, "Showing 1 of 3 crisis zones");
}

#[test]
fn dashboard_search_drives_zones_and_reports() {
    let now = fixed_now();
    let data = sample_dataset(now);
    let mut state = DashboardState::new(DashboardTab::Reports);
    state.set_search("humanitarian");

    let view = dashboard_view(&data, &state, &thresholds(), &now);

    assert_eq!(view.tab, DashboardTab::Reports);
    assert!(view.zones.is_empty());
    let report_ids = view.reports.iter().map(|r| r.id.as_str()).collect::<Vec<_>>();
    assert_eq!(report_ids, vec!["2", "6"]);
    assert_eq!(view.reports_caption, "Showing 2 of 6 reports");
}

#[test]
fn dashboard_facets_narrow_zones_and_alerts_are_newest_first() {
    let now = fixed_now();
    let data = sample_dataset(now);
    let mut state = DashboardState::default();
    state.set_status("active");
    state.set_severity("high");

    let view = dashboard_view(&data, &state, &thresholds(), &now);

    let zone_ids = view.zones.iter().map(|z| z.id.as_str()).collect::<Vec<_>>();
    assert_eq!(zone_ids, vec!["2"]);
    let alert_ids = view.alerts.iter().map(|a| a.id.as_str()).collect::<Vec<_>>();
    assert_eq!(alert_ids, vec!["1", "2", "3"]);

    state.set_severity("all");
    state.set_status("all");
    let view = dashboard_view(&data, &state, &thresholds(), &now);
    assert_eq!(view.zones.len(), 3);
}

#[test]
fn reports_archive_summarizes_matches() {
    let now = fixed_now();
    let data = sample_dataset(now);
    let state = ReportsState {
        window: Some(DateWindow::Week),
        ..ReportsState::default()
    };

    let view = reports_view(&data, &state, &now);
    let summary = &view.summary;

    assert_eq!(summary.matched, 5);
    assert_eq!(summary.total, 6);
    assert_eq!(summary.by_source_type.get("verified"), 3);
    assert_eq!(summary.by_source_type.get("rumor"), 1);
    assert_eq!(summary.by_source_type.get("unverified"), 1);
    assert_eq!(summary.by_band.get("high"), 3);
    assert_eq!(summary.breaking, 1);
    assert_eq!(summary.verified_share, "60.0%");
    // (0.95 + 0.98 + 0.45 + 0.97 + 0.67) / 5
    assert_eq!(summary.average_label(), "0.80");
}

#[test]
fn reports_archive_with_no_matches_uses_sentinels() {
    let now = fixed_now();
    let data = sample_dataset(now);
    let mut state = ReportsState {
        query: "earthquake".to_string(),
        band: Some(CredibilityBand::Medium),
        breaking_only: true,
        ..ReportsState::default()
    };

    let view = reports_view(&data, &state, &now);
    assert!(view.reports.is_empty());
    assert_eq!(view.summary.average_label(), "N/A");
    assert_eq!(view.summary.verified_share, "0.0%");

    state.clear();
    assert_eq!(state, ReportsState::default());
    assert_eq!(reports_view(&data, &state, &now).reports.len(), 6);
}

#[test]
fn reports_archive_filters_by_zone_and_breaking() {
    let now = fixed_now();
    let data = sample_dataset(now);
    let state = ReportsState {
        crisis_zone: FacetChoice::parse("2"),
        breaking_only: true,
        ..ReportsState::default()
    };

    let view = reports_view(&data, &state, &now);
    let ids = view.reports.iter().map(|r| r.id.as_str()).collect::<Vec<_>>();
    assert_eq!(ids, vec!["6"]);
}

#[test]
fn sources_view_derives_status_and_active_share() {
    let now = fixed_now();
    let data = sample_dataset(now);

    let view = sources_view(&data, &SourcesState::default(), &thresholds(), &now);
    assert_eq!(view.total, 5);
    assert_eq!(view.active_share, "60.0%");
    assert_eq!(view.error_total, 5);
    assert_eq!(view.by_status.get("active"), 3);

    let warning_tone = view.rows[4].status.tone();
    assert_eq!(warning_tone, Tone::Yellow);

    let state = SourcesState {
        status: FacetChoice::parse("warning"),
        ..SourcesState::default()
    };
    let view = sources_view(&data, &state, &thresholds(), &now);
    assert_eq!(view.rows.len(), 1);
    assert_eq!(view.rows[0].source.name, "Telegram OSINT Channels");
    assert_eq!(view.shown_by_status.get("warning"), 1);
    assert_eq!(view.by_status.total(), 5);
}

#[test]
fn stricter_thresholds_change_derived_status() {
    let now = fixed_now();
    let data = sample_dataset(now);
    let strict = SourceHealthThresholds {
        warning_errors: 1,
        inactive_errors: 4,
    };

    let view = sources_view(&data, &SourcesState::default(), &strict, &now);
    assert_eq!(view.by_status.get("active"), 2);
    assert_eq!(view.by_status.get("warning"), 1);
    assert_eq!(view.by_status.get("inactive"), 2);
}

#[test]
fn workflows_view_counts_status_and_trigger() {
    let now = fixed_now();
    let data = sample_dataset(now);

    let view = workflows_view(&data, &WorkflowsState::default(), &now);
    assert_eq!(view.total, 3);
    assert_eq!(view.by_status.get("active"), 2);
    assert_eq!(view.by_status.get("paused"), 1);
    assert_eq!(view.by_trigger.get("manual"), 1);

    let state = WorkflowsState {
        status: FacetChoice::parse("paused"),
        ..WorkflowsState::default()
    };
    let view = workflows_view(&data, &state, &now);
    let names = view.workflows.iter().map(|w| w.name.as_str()).collect::<Vec<_>>();
    assert_eq!(names, vec!["Alert Generation"]);
}

#[test]
fn admin_overview_reports_per_status_counts() {
    let now = fixed_now();
    let data = sample_dataset(now);

    let view = admin_view(&data, &AdminState::default(), &thresholds());

    assert_eq!(view.tab, AdminTab::Overview);
    let cards = view
        .overview
        .iter()
        .map(|card| (card.title, card.value.as_str(), card.detail.as_str()))
        .collect::<Vec<_>>();
    assert_eq!(
        cards,
        vec![
            ("Total Crisis Zones", "3", "2 active, 1 monitoring"),
            ("Data Sources", "5", "3 active, 1 inactive, 1 warning"),
            ("Active Workflows", "2", "Running smoothly"),
            ("System Status", "Degraded", "1 component needs attention"),
        ]
    );
    assert_eq!(view.overview[3].icon, Icon::Activity);
    assert_eq!(view.panel, AdminPanel::Overview);
}

#[test]
fn admin_tab_selects_the_management_list() {
    let now = fixed_now();
    let mut data = sample_dataset(now);
    data.workflows[1].last_run_failed = true;

    let mut state = AdminState {
        tab: AdminTab::Workflows,
        ..AdminState::default()
    };
    let view = admin_view(&data, &state, &thresholds());
    let AdminPanel::Workflows { rows, failing } = &view.panel else {
        panic!("workflows tab should list workflows");
    };
    let names = rows.iter().map(|w| w.name.as_str()).collect::<Vec<_>>();
    assert_eq!(
        names,
        vec!["Ukraine Data Ingestion", "Fact-checking Pipeline", "Alert Generation"]
    );
    assert_eq!(*failing, 1);
    assert_eq!(view.workflows_by_status.get("error"), 1);

    state.tab = AdminTab::Sources;
    let view = admin_view(&data, &state, &thresholds());
    assert!(matches!(&view.panel, AdminPanel::Sources(rows) if rows.len() == 5));

    state.tab = AdminTab::Zones;
    let view = admin_view(&data, &state, &thresholds());
    assert!(matches!(view.panel, AdminPanel::Zones(zones) if zones.len() == 3));

    state.tab = AdminTab::Users;
    let view = admin_view(&data, &state, &thresholds());
    assert_eq!(view.panel, AdminPanel::Users);
}

#[test]
fn admin_system_status_is_online_without_warnings_or_failures() {
    let now = fixed_now();
    let mut data = sample_dataset(now);
    data.sources.retain(|source| source.error_count < 3);

    let view = admin_view(&data, &AdminState::default(), &thresholds());
    assert_eq!(view.overview[3].value, "Online");
    assert_eq!(view.overview[3].detail, "All systems operational");

    data.workflows[0].last_run_failed = true;
    let view = admin_view(&data, &AdminState::default(), &thresholds());
    assert_eq!(view.overview[2].detail, "1 failing");
    assert_eq!(view.overview[3].value, "Degraded");
}

#[test]
fn zone_detail_collects_related_records() {
    let now = fixed_now();
    let data = sample_dataset(now);

    let ZoneDetailView::Found(detail) = zone_detail_view(&data, "1", &thresholds()) else {
        panic!("zone 1 should exist");
    };
    assert_eq!(detail.zone.name, "Eastern Ukraine");
    let report_ids = detail.reports.iter().map(|r| r.id.as_str()).collect::<Vec<_>>();
    assert_eq!(report_ids, vec!["1", "3", "4"]);
    assert_eq!(detail.alerts.len(), 2);
    assert_eq!(detail.sources.len(), 3);
    assert_eq!(detail.workflows.len(), 2);
}

#[test]
fn zone_detail_for_unknown_id_is_not_found() {
    let data = Dataset::default();
    assert_eq!(
        zone_detail_view(&data, "missing", &thresholds()),
        ZoneDetailView::NotFound {
            id: "missing".to_string()
        }
    );
}
