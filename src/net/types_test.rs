use super::*;
use time::macros::datetime;

// =============================================================
// parse_template_set
// =============================================================

#[test]
fn parse_template_set_keeps_server_order() {
    let body = r#"{
        "zeta": {"groups": "roads", "last_caption": "quiet"},
        "alpha": {"groups": ""},
        "mid": {}
    }"#;
    let set = parse_template_set(body).unwrap();
    let names = set.templates.iter().map(|t| t.name.as_str()).collect::<Vec<_>>();
    assert_eq!(names, vec!["zeta", "alpha", "mid"]);
    assert_eq!(set.returned, 3);
}

#[test]
fn parse_template_set_fills_typed_fields() {
    let body = r#"{
        "harbor": {
            "groups": " coast, ,ships ,coast",
            "last_caption": "Two ferries docked",
            "last_screenshot_time": "2024-05-01 11:59:00",
            "next_screenshot_time": "2024-05-01T12:09:00",
            "notes": "north pier",
            "frequency": 10
        }
    }"#;
    let set = parse_template_set(body).unwrap();
    let harbor = &set.templates[0];
    assert_eq!(harbor.name, "harbor");
    assert_eq!(
        harbor.groups.iter().map(String::as_str).collect::<Vec<_>>(),
        vec!["coast", "ships"]
    );
    assert_eq!(harbor.last_caption, "Two ferries docked");
    assert_eq!(harbor.last_screenshot_time, Some(datetime!(2024-05-01 11:59:00 UTC)));
    assert_eq!(harbor.next_screenshot_time, Some(datetime!(2024-05-01 12:09:00 UTC)));
    assert_eq!(harbor.notes, "north pier");
}

#[test]
fn parse_template_set_defaults_missing_and_null_fields() {
    let set = parse_template_set(r#"{"bare": {"last_caption": null, "last_screenshot_time": ""}}"#).unwrap();
    let bare = &set.templates[0];
    assert!(bare.groups.is_empty());
    assert_eq!(bare.last_caption, "");
    assert_eq!(bare.last_screenshot_time, None);
}

#[test]
fn parse_template_set_skips_malformed_entries_but_counts_them() {
    let body = r#"{
        "good": {"groups": "a"},
        "not_object": 42,
        "bad_caption": {"last_caption": 7},
        "bad_time": {"last_screenshot_time": "last tuesday"},
        "": {"groups": "a"}
    }"#;
    let set = parse_template_set(body).unwrap();
    assert_eq!(set.templates.len(), 1);
    assert_eq!(set.templates[0].name, "good");
    assert_eq!(set.returned, 5);
}

#[test]
fn parse_template_set_rejects_non_object_body() {
    assert!(matches!(parse_template_set("[1, 2]"), Err(ApiError::Malformed(_))));
    assert!(matches!(parse_template_set("<html>"), Err(ApiError::Malformed(_))));
}

#[test]
fn parse_groups_trims_and_dedups() {
    let groups = parse_groups("b, a,,b ");
    assert_eq!(groups.into_iter().collect::<Vec<_>>(), vec!["a".to_owned(), "b".to_owned()]);
    assert!(parse_groups("").is_empty());
}

#[test]
fn parse_group_list_drops_blank_labels() {
    assert_eq!(parse_group_list(r#"["roads", " ", "coast"]"#).unwrap(), vec!["roads", "coast"]);
    assert!(matches!(parse_group_list(r#"{"a": 1}"#), Err(ApiError::Malformed(_))));
}

// =============================================================
// Metrics / scheduler / logs
// =============================================================

#[test]
fn system_metrics_deserializes_with_default_uptime() {
    let metrics: SystemMetrics = serde_json::from_str(r#"{"cpu_usage": 12.5, "memory_usage": 40}"#).unwrap();
    assert_eq!(metrics.cpu_usage, 12.5);
    assert_eq!(metrics.memory_usage, 40.0);
    assert_eq!(metrics.uptime, "");
}

#[test]
fn scheduler_status_uses_lowercase_wire_names() {
    let running: SchedulerStatusResponse = serde_json::from_str(r#"{"status": "running"}"#).unwrap();
    assert_eq!(running.status, SchedulerStatus::Running);
    assert_eq!(serde_json::to_string(&SchedulerStatus::Stopped).unwrap(), "\"stopped\"");
}

#[test]
fn scheduler_toggle_label_names_next_action() {
    assert_eq!(SchedulerStatus::Running.toggle_label(), "Stop Scheduler");
    assert_eq!(SchedulerStatus::Stopped.toggle_label(), "Start Scheduler");
}

#[test]
fn parse_log_batch_reads_rows_with_defaults() {
    let rows = parse_log_batch(
        r#"[{"timestamp": "2024-05-01 12:00:00", "level": "INFO", "source": "capture", "message": "ok"}, {"message": "partial"}]"#,
    )
    .unwrap();
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].level, "INFO");
    assert_eq!(rows[1].source, "");
    assert_eq!(rows[1].message, "partial");
}

#[test]
fn parse_log_batch_rejects_non_array() {
    assert!(matches!(parse_log_batch(r#"{"message": "x"}"#), Err(ApiError::Malformed(_))));
}

// =============================================================
// TemplateDraft
// =============================================================

#[test]
fn template_name_rules_match_server() {
    assert!(is_valid_template_name("cam_01.north-gate"));
    assert!(!is_valid_template_name(""));
    assert!(!is_valid_template_name("has space"));
    assert!(!is_valid_template_name("slash/name"));
    assert!(!is_valid_template_name(&"x".repeat(33)));
    assert!(is_valid_template_name(&"x".repeat(32)));
}

#[test]
fn draft_from_form_normalizes_fields() {
    let draft = TemplateDraft::from_form(" harbor ", " https://cam/1 ", "ships, coast", "60", "10", "note").unwrap();
    assert_eq!(draft.name, "harbor");
    assert_eq!(draft.url, "https://cam/1");
    assert_eq!(draft.groups, "coast,ships");
    assert_eq!(draft.frequency, 60);
    assert_eq!(draft.timeout, 10);
}

#[test]
fn draft_from_form_reports_first_broken_rule() {
    assert_eq!(
        TemplateDraft::from_form("bad name", "", "", "60", "10", ""),
        Err(DraftError::InvalidName)
    );
    assert_eq!(
        TemplateDraft::from_form("cam", "", "", "often", "10", ""),
        Err(DraftError::InvalidNumber("frequency"))
    );
    assert_eq!(
        TemplateDraft::from_form("cam", "", "", "600000", "10", ""),
        Err(DraftError::FrequencyTooLarge)
    );
    assert_eq!(
        TemplateDraft::from_form("cam", "", "", "10", "10", ""),
        Err(DraftError::TimeoutNotBelowFrequency)
    );
}

#[test]
fn draft_serializes_as_flat_json_object() {
    let draft = TemplateDraft::from_form("cam", "u", "g", "60", "5", "").unwrap();
    let value = serde_json::to_value(&draft).unwrap();
    assert_eq!(value["name"], "cam");
    assert_eq!(value["frequency"], 60);
    assert_eq!(value["groups"], "g");
}

#[test]
fn api_error_inline_messages_name_the_region() {
    assert_eq!(
        ApiError::Status(500).inline_message("templates"),
        "Error loading templates: server returned 500"
    );
    assert_eq!(
        ApiError::Network("offline".into()).inline_message("metrics"),
        "Error loading metrics: server unreachable"
    );
}
