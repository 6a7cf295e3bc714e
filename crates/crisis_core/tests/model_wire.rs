use chrono::{TimeZone, Utc};
use crisis_core::model::report::{CredibilityBand, Report, SourceType};
use crisis_core::model::source::{DataSource, SourceKind};
use crisis_core::model::user::{Role, User};
use crisis_core::model::zone::{Severity, ZoneStatus};
use crisis_core::{sample_dataset, Dataset};
use serde_json::json;

#[test]
fn zone_serializes_with_camel_case_keys() {
    let data = sample_dataset(Utc.with_ymd_and_hms(2024, 6, 15, 18, 0, 0).unwrap());
    let value = serde_json::to_value(&data.zones[0]).unwrap();

    assert_eq!(value["status"], "active");
    assert_eq!(value["severity"], "critical");
    assert_eq!(value["adminId"], "admin1");
    assert_eq!(value["coordinates"]["lat"], 48.0);
    assert!(value.get("createdAt").is_some());
    assert!(value.get("admin_id").is_none());
}

#[test]
fn report_parses_from_wire_json() {
    let report: Report = serde_json::from_value(json!({
        "id": "r-9",
        "title": "Shelling reported overnight",
        "content": "Multiple districts affected.",
        "source": "Field team",
        "sourceType": "unverified",
        "credibilityScore": 0.5,
        "crisisZoneId": "1",
        "timestamp": "2024-06-15T08:00:00Z"
    }))
    .unwrap();

    assert_eq!(report.source_type, SourceType::Unverified);
    assert_eq!(report.credibility_band(), CredibilityBand::Medium);
    assert!(report.tags.is_empty());
    assert!(!report.is_breaking);
}

#[test]
fn out_of_range_credibility_is_rejected() {
    let parsed = serde_json::from_value::<Report>(json!({
        "id": "r-9",
        "title": "t",
        "content": "c",
        "source": "s",
        "sourceType": "verified",
        "credibilityScore": 1.2,
        "crisisZoneId": "1",
        "timestamp": "2024-06-15T08:00:00Z"
    }));
    assert!(parsed.is_err());
}

#[test]
fn unknown_enum_value_is_rejected() {
    let parsed = serde_json::from_value::<Dataset>(json!({
        "zones": [{
            "id": "z",
            "name": "n",
            "region": "r",
            "country": "c",
            "status": "escalating",
            "severity": "high",
            "description": "",
            "createdAt": "2024-06-15T08:00:00Z",
            "updatedAt": "2024-06-15T08:00:00Z",
            "adminId": "a"
        }]
    }));
    assert!(parsed.is_err());
}

#[test]
fn data_source_api_key_is_read_but_never_written() {
    let source: DataSource = serde_json::from_value(json!({
        "id": "s-1",
        "name": "Partner API",
        "type": "api",
        "url": "https://partner.example.org/v2",
        "apiKey": "secret-token",
        "isActive": true,
        "crisisZoneId": "2",
        "createdAt": "2024-06-01T00:00:00Z"
    }))
    .unwrap();

    assert_eq!(source.kind, SourceKind::Api);
    assert_eq!(source.api_key.as_deref(), Some("secret-token"));
    assert_eq!(source.error_count, 0);

    let value = serde_json::to_value(&source).unwrap();
    assert_eq!(value["type"], "api");
    assert!(value.get("apiKey").is_none());
}

#[test]
fn partial_dataset_defaults_missing_collections() {
    let data: Dataset = serde_json::from_value(json!({ "alerts": [] })).unwrap();
    assert!(data.is_empty());
}

#[test]
fn sample_dataset_survives_json_round_trip() {
    let data = sample_dataset(Utc.with_ymd_and_hms(2024, 6, 15, 18, 0, 0).unwrap());
    let text = serde_json::to_string(&data).unwrap();
    let parsed: Dataset = serde_json::from_str(&text).unwrap();

    assert_eq!(parsed.zones, data.zones);
    assert_eq!(parsed.reports, data.reports);
    assert_eq!(parsed.workflows, data.workflows);
    assert_eq!(parsed.zones[2].status, ZoneStatus::Monitoring);
    assert_eq!(parsed.zones[1].severity, Severity::High);
}

#[test]
fn user_label_falls_back_to_email() {
    let user: User = serde_json::from_value(json!({
        "id": "u-1",
        "email": "analyst@example.org",
        "displayName": "  ",
        "role": "analyst",
        "createdAt": "2024-06-01T00:00:00Z"
    }))
    .unwrap();

    assert_eq!(user.role, Role::Analyst);
    assert_eq!(user.label(), "analyst@example.org");
    assert!(!user.is_admin());
}
