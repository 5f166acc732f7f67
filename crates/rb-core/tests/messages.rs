//! Event log wire format.

use rb_core::message::KINDS;
use rb_core::{
    EditorMessage, EntityMessage, LayoutMessage, Message, NodeId, ReportMessage, Update,
};
use rb_model::{FilterPatch, FilterType};

fn decode(json: &str) -> Message {
    serde_json::from_str(json).expect("decode message")
}

#[test]
fn decodes_grouped_events() {
    assert_eq!(
        decode(r#"{"group": "editor", "kind": "tab_changed", "payload": 1}"#),
        Message::Editor(EditorMessage::TabChanged(1))
    );
    assert_eq!(
        decode(r#"{"group": "layout", "kind": "left_nav_toggled"}"#),
        Message::Layout(LayoutMessage::LeftNavToggled)
    );
    assert_eq!(
        decode(r#"{"group": "editor", "kind": "distinct_toggled", "payload": null}"#),
        Message::Editor(EditorMessage::DistinctToggled(None))
    );
    assert_eq!(decode(r#"{"group": "noop"}"#), Message::Noop);
}

#[test]
fn decodes_related_fields_payload() {
    let message = decode(
        r#"{
            "group": "report",
            "kind": "related_fields_succeeded",
            "payload": {
                "parent": "author",
                "related_fields": [{"field_name": "publisher", "verbose_name": "Publisher"}]
            }
        }"#,
    );
    let Message::Report(ReportMessage::RelatedFieldsSucceeded {
        parent,
        related_fields,
    }) = message
    else {
        panic!("expected related fields message");
    };
    assert_eq!(parent, NodeId::root("author"));
    assert_eq!(related_fields[0].field_name, "publisher");
}

#[test]
fn decodes_entity_update() {
    let message = decode(
        r#"{"group": "filter", "kind": "update_one",
            "payload": {"key": 0, "patch": {"filter_type": "gte", "filter_value": "18"}}}"#,
    );
    assert_eq!(
        message,
        Message::Filter(EntityMessage::UpdateOne(Update::new(
            0,
            FilterPatch {
                filter_type: Some(FilterType::Gte),
                filter_value: Some("18".to_string()),
                ..Default::default()
            }
        )))
    );
}

#[test]
fn unrecognized_kinds_decode_to_unknown() {
    assert_eq!(
        decode(r#"{"group": "router", "kind": "navigate", "payload": "/reports"}"#),
        Message::Unknown
    );
    assert_eq!(
        decode(r#"{"group": "editor", "kind": "set_colour"}"#),
        Message::Editor(EditorMessage::Unknown)
    );
    assert_eq!(
        decode(r#"{"group": "display_field", "kind": "upsert_many"}"#),
        Message::DisplayField(EntityMessage::Unknown)
    );
}

#[test]
fn unrecognized_kinds_with_payload_decode_to_unknown() {
    assert_eq!(
        decode(r#"{"group": "editor", "kind": "set_colour", "payload": "red"}"#),
        Message::Editor(EditorMessage::Unknown)
    );
    assert_eq!(
        decode(r#"{"group": "report", "kind": "generate_preview", "payload": {"id": 5}}"#),
        Message::Report(ReportMessage::Unknown)
    );
    assert_eq!(
        decode(r#"{"group": "layout", "kind": "theme_changed", "payload": "dark"}"#),
        Message::Layout(LayoutMessage::Unknown)
    );
    assert_eq!(
        decode(r#"{"group": "display_field", "kind": "upsert_many", "payload": [{"position": 0}]}"#),
        Message::DisplayField(EntityMessage::Unknown)
    );
    assert_eq!(
        decode(r#"{"group": "filter", "kind": "clear", "payload": null}"#),
        Message::Filter(EntityMessage::Unknown)
    );
}

#[test]
fn unknown_events_in_a_log_are_kept_in_order() {
    let log: Vec<Message> = serde_json::from_str(
        r#"[
            {"group": "editor", "kind": "set_colour", "payload": "red"},
            {"group": "editor", "kind": "tab_changed", "payload": 1}
        ]"#,
    )
    .expect("decode log");
    assert_eq!(
        log,
        vec![
            Message::Editor(EditorMessage::Unknown),
            Message::Editor(EditorMessage::TabChanged(1)),
        ]
    );
}

#[test]
fn listed_kind_with_malformed_payload_is_an_error() {
    let result =
        serde_json::from_str::<Message>(r#"{"group": "editor", "kind": "tab_changed", "payload": "two"}"#);
    assert!(result.is_err());
}

#[test]
fn event_without_group_is_an_error() {
    assert!(serde_json::from_str::<Message>(r#"{"kind": "tab_changed", "payload": 1}"#).is_err());
}

#[test]
fn encoded_event_decodes_to_itself() {
    let message = Message::DisplayField(EntityMessage::Reorder {
        key: 3,
        to_index: 0,
    });
    let json = serde_json::to_value(&message).expect("encode message");
    assert_eq!(json["group"], "display_field");
    assert_eq!(json["kind"], "reorder");
    assert_eq!(json["payload"]["to_index"], 0);
    assert_eq!(serde_json::from_value::<Message>(json).expect("decode"), message);
}

#[test]
fn kind_names_are_listed() {
    let samples = [
        Message::Editor(EditorMessage::TabChanged(0)),
        Message::Layout(LayoutMessage::RightNavToggled),
        Message::Report(ReportMessage::SetTitle(String::new())),
        Message::Filter(EntityMessage::DeleteOne(0)),
        Message::Noop,
    ];
    for message in samples {
        assert!(KINDS.contains(&message.kind()), "{} not listed", message.kind());
    }
}
