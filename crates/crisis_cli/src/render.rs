//! Plain-text rendering of derived page views.

use crisis_core::aggregate::Tally;
use crisis_core::model::alert::Alert;
use crisis_core::model::report::Report;
use crisis_core::model::workflow::Workflow;
use crisis_core::model::zone::CrisisZone;
use crisis_core::nav::{NavEntry, Route};
use crisis_core::present::Presentation;
use crisis_core::view::admin::{AdminPanel, AdminView, USERS_NOTICE};
use crisis_core::view::dashboard::{DashboardTab, DashboardView};
use crisis_core::view::reports::ReportsView;
use crisis_core::view::sources::{SourceRow, SourcesView};
use crisis_core::view::workflows::WorkflowsView;
use crisis_core::view::zone_detail::{ZoneDetail, ZoneDetailView};
use crisis_core::view::StatCard;
use std::fmt::Write;

/// `[tone] value` badge for an enumerated value.
fn badge<P: Presentation>(value: P, label: &str) -> String {
    format!("[{}] {label}", value.tone().as_str())
}

fn heading(out: &mut String, title: &str) {
    let _ = writeln!(out, "\n{title}\n{}", "-".repeat(title.len()));
}

fn stat_cards(out: &mut String, cards: &[StatCard]) {
    for card in cards {
        let _ = writeln!(
            out,
            "{:<22} {:>8}  {} ({})",
            card.title,
            card.value,
            card.detail,
            card.icon.as_str()
        );
    }
}

fn tally_line(out: &mut String, label: &str, tally: &Tally) {
    let entries = tally
        .iter()
        .map(|(value, count)| format!("{value}={count}"))
        .collect::<Vec<_>>()
        .join(" ");
    let _ = writeln!(out, "{label}: {entries}");
}

fn zone_line(out: &mut String, zone: &CrisisZone) {
    let _ = writeln!(
        out,
        "{:<10} {:<28} {:<32} {:<22} {}",
        zone.id,
        zone.name,
        zone.location_label(),
        badge(zone.severity, zone.severity.as_str()),
        badge(zone.status, zone.status.as_str()),
    );
}

fn report_line(out: &mut String, report: &Report) {
    let breaking = if report.is_breaking { " BREAKING" } else { "" };
    let _ = writeln!(
        out,
        "{:<10} {:<48} {:<20} {:>5}{breaking}",
        report.id,
        report.title,
        badge(report.source_type, report.source_type.as_str()),
        report.credibility_score.percent_label(),
    );
}

fn alert_line(out: &mut String, alert: &Alert) {
    let read = if alert.is_read { "read" } else { "unread" };
    let _ = writeln!(
        out,
        "{:<10} {:<20} {:<40} {read}",
        alert.id,
        badge(alert.severity, alert.severity.as_str()),
        alert.title,
    );
}

fn source_line(out: &mut String, row: &SourceRow<'_>) {
    let _ = writeln!(
        out,
        "{:<10} {:<28} {:<14} {:<18} errors={}",
        row.source.id,
        row.source.name,
        badge(row.source.kind, row.source.kind.as_str()),
        badge(row.status, row.status.as_str()),
        row.source.error_count,
    );
}

fn workflow_line(out: &mut String, workflow: &Workflow) {
    let status = workflow.status();
    let _ = writeln!(
        out,
        "{:<10} {:<32} {:<18} {}",
        workflow.id,
        workflow.name,
        badge(workflow.trigger_type, workflow.trigger_type.as_str()),
        badge(status, status.as_str()),
    );
}

pub fn dashboard(view: &DashboardView<'_>) -> String {
    let mut out = String::new();
    stat_cards(&mut out, &view.stats);

    heading(&mut out, view.tab.label());
    match view.tab {
        DashboardTab::Zones => {
            let _ = writeln!(out, "{}", view.zones_caption);
            view.zones.iter().for_each(|zone| zone_line(&mut out, zone));
        }
        DashboardTab::Reports => {
            let _ = writeln!(out, "{}", view.reports_caption);
            view.reports
                .iter()
                .for_each(|report| report_line(&mut out, report));
        }
        DashboardTab::Alerts => {
            view.alerts.iter().for_each(|alert| alert_line(&mut out, alert));
        }
    }
    out
}

pub fn reports(view: &ReportsView<'_>) -> String {
    let mut out = String::new();
    let summary = &view.summary;
    let _ = writeln!(
        out,
        "{} of {} reports | avg credibility {} | verified {} | breaking {}",
        summary.matched,
        summary.total,
        summary.average_label(),
        summary.verified_share,
        summary.breaking,
    );
    tally_line(&mut out, "by source type", &summary.by_source_type);
    tally_line(&mut out, "by credibility", &summary.by_band);

    heading(&mut out, "Reports Archive");
    if view.reports.is_empty() {
        let _ = writeln!(out, "No reports match the current filters.");
    }
    view.reports
        .iter()
        .for_each(|report| report_line(&mut out, report));
    out
}

pub fn sources(view: &SourcesView<'_>) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{} sources | {} active | {} sync errors",
        view.total, view.active_share, view.error_total
    );
    tally_line(&mut out, "by status", &view.by_status);

    heading(&mut out, "Data Sources");
    view.rows.iter().for_each(|row| source_line(&mut out, row));
    out
}

pub fn workflows(view: &WorkflowsView<'_>) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{} workflows", view.total);
    tally_line(&mut out, "by status", &view.by_status);
    tally_line(&mut out, "by trigger", &view.by_trigger);

    heading(&mut out, "Workflows");
    view.workflows
        .iter()
        .for_each(|workflow| workflow_line(&mut out, workflow));
    out
}

pub fn admin(view: &AdminView<'_>) -> String {
    let mut out = String::new();
    stat_cards(&mut out, &view.overview);

    heading(&mut out, view.tab.label());
    match &view.panel {
        AdminPanel::Overview => {
            tally_line(&mut out, "zones", &view.zones_by_status);
            tally_line(&mut out, "sources", &view.sources_by_status);
            tally_line(&mut out, "workflows", &view.workflows_by_status);
        }
        AdminPanel::Zones(zones) => zones.iter().for_each(|zone| zone_line(&mut out, zone)),
        AdminPanel::Sources(rows) => rows.iter().for_each(|row| source_line(&mut out, row)),
        AdminPanel::Workflows { rows, failing } => {
            let _ = writeln!(out, "{} workflows, {failing} failing", rows.len());
            rows.iter()
                .for_each(|workflow| workflow_line(&mut out, workflow));
        }
        AdminPanel::Users => {
            let _ = writeln!(out, "{USERS_NOTICE}");
        }
    }
    out
}

pub fn zone_detail(view: &ZoneDetailView<'_>) -> String {
    let mut out = String::new();
    match view {
        ZoneDetailView::NotFound { id } => {
            let _ = writeln!(out, "Crisis zone not found: {id}");
        }
        ZoneDetailView::Found(detail) => zone_detail_found(&mut out, detail),
    }
    out
}

fn zone_detail_found(out: &mut String, detail: &ZoneDetail<'_>) {
    zone_line(out, detail.zone);
    if !detail.zone.description.is_empty() {
        let _ = writeln!(out, "{}", detail.zone.description);
    }

    heading(out, "Reports");
    detail.reports.iter().for_each(|report| report_line(out, report));
    heading(out, "Alerts");
    detail.alerts.iter().for_each(|alert| alert_line(out, alert));
    heading(out, "Data Sources");
    detail.sources.iter().for_each(|row| source_line(out, row));
    heading(out, "Workflows");
    detail
        .workflows
        .iter()
        .for_each(|workflow| workflow_line(out, workflow));
}

pub fn nav(route: &Route, title: &str, entries: &[NavEntry]) -> String {
    let mut out = String::new();
    let redirect = if route.redirected { " (redirected)" } else { "" };
    let _ = writeln!(out, "{title} -> {}{redirect}", route.path);
    for entry in entries {
        let marker = if entry.href == route.path { "*" } else { " " };
        let _ = writeln!(out, "{marker} {:<18} {}", entry.name, entry.href);
    }
    out
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};
    use crisis_core::model::source::SourceHealthThresholds;
    use crisis_core::view::admin::{admin_view, AdminState, AdminTab};
    use crisis_core::view::zone_detail::ZoneDetailView;
    use crisis_core::{navigation_for, resolve_route, sample_dataset, Role};

    #[test]
    fn nav_marks_active_entry_and_redirect() {
        let route = resolve_route("/admin", Role::Analyst);
        let text = super::nav(&route, "Dashboard", &navigation_for(Role::Analyst));

        let lines = text.lines().collect::<Vec<_>>();
        assert_eq!(lines[0], "Dashboard -> /dashboard (redirected)");
        assert!(lines[1].starts_with("* Dashboard"));
        assert!(lines[2].starts_with("  Data Sources"));
        assert!(!text.contains("/admin"));
    }

    #[test]
    fn nav_without_redirect_has_no_suffix() {
        let route = resolve_route("/reports", Role::Admin);
        let text = super::nav(&route, "Reports Archive", &navigation_for(Role::Admin));

        assert_eq!(text.lines().next(), Some("Reports Archive -> /reports"));
        assert!(text.contains("* Reports Archive"));
    }

    #[test]
    fn missing_zone_renders_not_found_line() {
        let view = ZoneDetailView::NotFound {
            id: "zone-404".to_string(),
        };
        assert_eq!(super::zone_detail(&view), "Crisis zone not found: zone-404\n");
    }

    #[test]
    fn admin_workflows_tab_lists_workflows_only() {
        let data = sample_dataset(Utc.with_ymd_and_hms(2024, 6, 15, 18, 0, 0).unwrap());
        let state = AdminState {
            tab: AdminTab::Workflows,
            ..AdminState::default()
        };
        let text = super::admin(&admin_view(&data, &state, &SourceHealthThresholds::default()));

        assert!(text.contains("\nWorkflows\n---------\n"));
        assert!(text.contains("3 workflows, 0 failing"));
        assert!(text.contains("Alert Generation"));
        assert!(!text.contains("Eastern Ukraine"));
    }
}
