//! Built-in sample collections.
//!
//! Used by the CLI when no data file is given, and by tests that need a
//! realistic mix of records. Timestamps are relative to the caller's `now`.

use crate::model::alert::{Alert, AlertSeverity};
use crate::model::dataset::Dataset;
use crate::model::report::{CredibilityScore, Report, SourceType};
use crate::model::source::{DataSource, SourceKind};
use crate::model::workflow::{TriggerType, Workflow};
use crate::model::zone::{Coordinates, CrisisZone, Severity, ZoneStatus};
use chrono::{DateTime, Duration, Utc};

const SAMPLE_ADMIN_ID: &str = "admin1";

/// Builds the sample dataset anchored at `now`.
pub fn sample_dataset(now: DateTime<Utc>) -> Dataset {
    Dataset {
        zones: sample_zones(now),
        reports: sample_reports(now),
        alerts: sample_alerts(now),
        sources: sample_sources(now),
        workflows: sample_workflows(now),
    }
}

fn sample_zones(now: DateTime<Utc>) -> Vec<CrisisZone> {
    let zone = |id: &str,
                name: &str,
                region: &str,
                country: &str,
                coordinates: Coordinates,
                status: ZoneStatus,
                severity: Severity,
                description: &str| CrisisZone {
        id: id.to_string(),
        name: name.to_string(),
        region: region.to_string(),
        country: country.to_string(),
        coordinates: Some(coordinates),
        status,
        severity,
        description: description.to_string(),
        created_at: now - Duration::days(90),
        updated_at: now,
        admin_id: SAMPLE_ADMIN_ID.to_string(),
    };

    vec![
        zone(
            "1",
            "Eastern Ukraine",
            "Eastern Europe",
            "Ukraine",
            Coordinates { lat: 48.0, lng: 37.8 },
            ZoneStatus::Active,
            Severity::Critical,
            "Ongoing conflict in eastern regions",
        ),
        zone(
            "2",
            "Gaza Strip",
            "Middle East",
            "Palestine",
            Coordinates { lat: 31.4, lng: 34.3 },
            ZoneStatus::Active,
            Severity::High,
            "Humanitarian crisis and conflict",
        ),
        zone(
            "3",
            "Sudan",
            "Africa",
            "Sudan",
            Coordinates { lat: 15.5, lng: 32.5 },
            ZoneStatus::Monitoring,
            Severity::Medium,
            "Political instability and humanitarian concerns",
        ),
    ]
}

#[allow(clippy::too_many_arguments)]
fn report(
    id: &str,
    title: &str,
    content: &str,
    source: &str,
    source_type: SourceType,
    score: f64,
    zone_id: &str,
    tags: &[&str],
    timestamp: DateTime<Utc>,
    is_breaking: bool,
) -> Report {
    Report {
        id: id.to_string(),
        title: title.to_string(),
        content: content.to_string(),
        source: source.to_string(),
        source_type,
        credibility_score: CredibilityScore::saturating(score),
        crisis_zone_id: zone_id.to_string(),
        tags: tags.iter().map(|tag| (*tag).to_string()).collect(),
        timestamp,
        is_breaking,
        related_reports: Vec::new(),
    }
}

fn sample_reports(now: DateTime<Utc>) -> Vec<Report> {
    vec![
        report(
            "1",
            "Civilian evacuation reported in eastern districts",
            "Local sources report organized evacuation of civilians from contested areas of eastern Ukraine.",
            "Reuters",
            SourceType::Verified,
            0.95,
            "1",
            &["evacuation", "civilians", "ukraine"],
            now - Duration::minutes(30),
            true,
        ),
        report(
            "2",
            "Humanitarian aid convoy reaches border",
            "International aid convoy successfully crossed border checkpoint.",
            "UN OCHA",
            SourceType::Verified,
            0.98,
            "2",
            &["humanitarian", "aid"],
            now - Duration::hours(2),
            false,
        ),
        report(
            "3",
            "Unconfirmed claims of bridge collapse near Kharkiv",
            "Social media posts claim a road bridge collapsed overnight; no official confirmation.",
            "Telegram channel",
            SourceType::Rumor,
            0.45,
            "1",
            &["infrastructure", "Ukraine"],
            now - Duration::hours(3),
            false,
        ),
        report(
            "4",
            "Power grid repairs resume after overnight strikes",
            "The national energy operator in Ukraine says crews restored supply to most districts.",
            "Associated Press",
            SourceType::Verified,
            0.97,
            "1",
            &["infrastructure", "energy"],
            now - Duration::hours(26),
            false,
        ),
        report(
            "5",
            "Displacement figures rise in Darfur camps",
            "Local NGO estimates suggest camp populations grew sharply this month.",
            "Sudan Tribune",
            SourceType::Unverified,
            0.67,
            "3",
            &["displacement", "camps"],
            now - Duration::days(3),
            false,
        ),
        report(
            "6",
            "Ceasefire talks scheduled for next week",
            "Diplomatic sources confirm negotiators will meet to discuss a humanitarian pause.",
            "BBC News",
            SourceType::Verified,
            0.96,
            "2",
            &["diplomacy", "ceasefire"],
            now - Duration::days(12),
            true,
        ),
    ]
}

fn sample_alerts(now: DateTime<Utc>) -> Vec<Alert> {
    let alert = |id: &str,
                 title: &str,
                 message: &str,
                 severity: AlertSeverity,
                 zone_id: &str,
                 is_read: bool,
                 created_at: DateTime<Utc>| Alert {
        id: id.to_string(),
        title: title.to_string(),
        message: message.to_string(),
        severity,
        crisis_zone_id: zone_id.to_string(),
        user_id: None,
        is_read,
        created_at,
    };

    vec![
        alert(
            "1",
            "Critical Update",
            "New reports of escalation in monitored zone",
            AlertSeverity::Critical,
            "1",
            false,
            now - Duration::minutes(15),
        ),
        alert(
            "2",
            "Data Source Alert",
            "RSS feed connection restored",
            AlertSeverity::Info,
            "2",
            false,
            now - Duration::minutes(45),
        ),
        alert(
            "3",
            "Source Error Rate",
            "Telegram OSINT collector is reporting repeated fetch errors",
            AlertSeverity::Warning,
            "1",
            true,
            now - Duration::hours(5),
        ),
    ]
}

fn sample_sources(now: DateTime<Utc>) -> Vec<DataSource> {
    let source = |id: &str,
                  name: &str,
                  kind: SourceKind,
                  url: &str,
                  is_active: bool,
                  zone_id: &str,
                  last_sync: Duration,
                  error_count: u32| DataSource {
        id: id.to_string(),
        name: name.to_string(),
        kind,
        url: url.to_string(),
        api_key: None,
        is_active,
        crisis_zone_id: zone_id.to_string(),
        last_sync: Some(now - last_sync),
        error_count,
        created_at: now - Duration::days(60),
    };

    vec![
        source(
            "1",
            "Reuters Crisis Feed",
            SourceKind::Rss,
            "https://feeds.reuters.com/crisis",
            true,
            "1",
            Duration::minutes(2),
            0,
        ),
        source(
            "2",
            "UN OCHA API",
            SourceKind::Api,
            "https://api.unocha.org/v1/reports",
            true,
            "2",
            Duration::minutes(5),
            0,
        ),
        source(
            "3",
            "OSINT Twitter Monitor",
            SourceKind::Social,
            "https://api.twitter.com/2/tweets/search/stream",
            false,
            "1",
            Duration::hours(1),
            0,
        ),
        source(
            "4",
            "BBC News API",
            SourceKind::News,
            "https://api.bbc.co.uk/news/world",
            true,
            "2",
            Duration::minutes(5),
            1,
        ),
        source(
            "5",
            "Telegram OSINT Channels",
            SourceKind::Osint,
            "https://osint.example.org/telegram",
            true,
            "1",
            Duration::minutes(40),
            4,
        ),
    ]
}

fn sample_workflows(now: DateTime<Utc>) -> Vec<Workflow> {
    let workflow = |id: &str,
                    name: &str,
                    description: &str,
                    automation_id: &str,
                    trigger_type: TriggerType,
                    zone_id: &str,
                    is_active: bool,
                    last_run: Duration| Workflow {
        id: id.to_string(),
        name: name.to_string(),
        description: description.to_string(),
        automation_id: automation_id.to_string(),
        trigger_type,
        crisis_zone_id: zone_id.to_string(),
        is_active,
        last_run: Some(now - last_run),
        last_run_failed: false,
        created_at: now - Duration::days(30),
    };

    vec![
        workflow(
            "1",
            "Ukraine Data Ingestion",
            "Automated collection from multiple sources",
            "wf-ingest-ua",
            TriggerType::Scheduled,
            "1",
            true,
            Duration::minutes(5),
        ),
        workflow(
            "2",
            "Fact-checking Pipeline",
            "Cross-reference reports for verification",
            "wf-factcheck",
            TriggerType::Event,
            "1",
            true,
            Duration::minutes(10),
        ),
        workflow(
            "3",
            "Alert Generation",
            "Generate alerts for critical updates",
            "wf-alerts",
            TriggerType::Manual,
            "2",
            false,
            Duration::hours(2),
        ),
    ]
}
