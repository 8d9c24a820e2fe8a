// Tests for the raw-record adapter: the wishlist endpoint is loosely typed
// and every shape it emits must map onto a clean `WishlistItem`.
use serde_json::json;
use wishcal::model::{ItemKind, WishlistItem};

#[test]
fn full_record_maps_onto_an_item() {
    let raw = json!({
        "name": "Portal 2",
        "release_date": "1302912000",
        "type": "Game"
    });
    let item = WishlistItem::from_raw(620, &raw).unwrap();
    assert_eq!(item.id, 620);
    assert_eq!(item.name, "Portal 2");
    assert_eq!(item.kind, ItemKind::Game);
    assert_eq!(item.release_timestamp, Some(1302912000));
    assert!(!item.prerelease);
    assert_eq!(item.release_string, None);
}

#[test]
fn zero_or_missing_release_date_means_no_timestamp() {
    for raw in [
        json!({"name": "A", "release_date": 0}),
        json!({"name": "A", "release_date": "0"}),
        json!({"name": "A", "release_date": ""}),
        json!({"name": "A"}),
    ] {
        let item = WishlistItem::from_raw(1, &raw).unwrap();
        assert_eq!(item.release_timestamp, None, "raw: {}", raw);
    }
}

#[test]
fn numeric_release_date_is_accepted() {
    let raw = json!({"name": "A", "release_date": 1302912000});
    let item = WishlistItem::from_raw(1, &raw).unwrap();
    assert_eq!(item.release_timestamp, Some(1302912000));
}

#[test]
fn prerelease_marker_shapes() {
    for (value, expected) in [
        (json!({"name": "A", "prerelease": 1}), true),
        (json!({"name": "A", "prerelease": true}), true),
        (json!({"name": "A", "prerelease": "1"}), true),
        (json!({"name": "A", "prerelease": 0}), false),
        (json!({"name": "A"}), false),
    ] {
        let item = WishlistItem::from_raw(1, &value).unwrap();
        assert_eq!(item.prerelease, expected, "raw: {}", value);
    }
}

#[test]
fn blank_release_strings_are_dropped() {
    let raw = json!({"name": "A", "prerelease": 1, "release_string": "   "});
    let item = WishlistItem::from_raw(1, &raw).unwrap();
    assert_eq!(item.release_string, None);

    let raw = json!({"name": "A", "prerelease": 1, "release_string": " Q4 2030 "});
    let item = WishlistItem::from_raw(1, &raw).unwrap();
    assert_eq!(item.release_string.as_deref(), Some("Q4 2030"));
}

#[test]
fn records_without_a_name_are_unusable() {
    assert!(WishlistItem::from_raw(1, &json!({"release_date": 5})).is_none());
    assert!(WishlistItem::from_raw(1, &json!({"name": 42})).is_none());
}

#[test]
fn item_kinds_cover_dlc_and_unknowns() {
    let dlc = WishlistItem::from_raw(1, &json!({"name": "A", "type": "DLC"})).unwrap();
    assert_eq!(dlc.kind, ItemKind::Dlc);

    let app = WishlistItem::from_raw(1, &json!({"name": "A", "type": "Application"})).unwrap();
    assert_eq!(app.kind, ItemKind::Other("Application".to_string()));
}
