use notification_model::RawNotification;
use serde_json::json;

use super::test_db;

fn record(value: serde_json::Value) -> RawNotification {
    serde_json::from_value(value).unwrap()
}

#[test]
fn test_upsert_reports_new_ids() {
    let db = test_db();
    let first = record(json!({ "id": "10", "type": "follow" }));

    assert!(db.upsert_notification(&first).unwrap());
    assert!(!db.upsert_notification(&first).unwrap());
    assert_eq!(db.notification_count().unwrap(), 1);
}

#[test]
fn test_list_keeps_arrival_order() {
    let db = test_db();
    for id in ["5", "abc", "100"] {
        db.upsert_notification(&record(json!({ "id": id, "type": "bite" })))
            .unwrap();
    }
    // Re-storing does not move a record.
    db.upsert_notification(&record(json!({ "id": "5", "type": "bite", "seen": true })))
        .unwrap();

    let stored = db.list_notifications().unwrap();
    let ids: Vec<&str> = stored.iter().map(|n| n.id.as_str()).collect();
    assert_eq!(ids, vec!["5", "abc", "100"]);
    assert!(stored[0].seen);
}

#[test]
fn test_invalid_records_are_stored_verbatim() {
    let db = test_db();
    let like = record(json!({ "id": "7", "type": "like" }));
    db.upsert_notification(&like).unwrap();

    let got = db.get_notification("7").unwrap().unwrap();
    assert_eq!(got, like);
    assert!(!got.is_valid());
    assert!(db.get_notification("8").unwrap().is_none());
}

#[test]
fn test_empty_id_rejected() {
    let db = test_db();
    let bad = record(json!({ "id": "", "type": "follow" }));
    assert!(db.upsert_notification(&bad).is_err());
}
