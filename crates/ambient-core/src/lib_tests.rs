use std::collections::BTreeSet;

use crate::{Classification, Colors};

#[test]
fn classification_from_flags() {
    assert_eq!(
        Classification::from_flags(true, false),
        Some(Classification::TypeOnly)
    );
    assert_eq!(
        Classification::from_flags(false, true),
        Some(Classification::ValueOnly)
    );
    assert_eq!(
        Classification::from_flags(true, true),
        Some(Classification::TypeAndValue)
    );
    assert_eq!(Classification::from_flags(false, false), None);
}

#[test]
fn classification_flags_round_trip() {
    for c in Classification::ALL {
        assert_eq!(Classification::from_flags(c.is_type(), c.is_value()), Some(c));
    }
}

#[test]
fn sorted_tags_render_alphabetically() {
    let tags: BTreeSet<_> = [
        Classification::ValueOnly,
        Classification::TypeAndValue,
        Classification::TypeOnly,
    ]
    .into_iter()
    .collect();

    let names: Vec<_> = tags.iter().map(|c| c.export_name()).collect();
    assert_eq!(names, vec!["TYPE", "TYPE_VALUE", "VALUE"]);
}

#[test]
fn classification_serializes_as_export_name() {
    let json = serde_json::to_string(&Classification::TypeAndValue).unwrap();
    assert_eq!(json, r#""TYPE_VALUE""#);
}

#[test]
fn colors_off_is_disabled() {
    assert!(!Colors::OFF.is_enabled());
    assert!(Colors::new(true).is_enabled());
    assert_eq!(Colors::OFF.tag(Classification::TypeOnly), "");
    assert_eq!(Colors::ON.tag(Classification::ValueOnly), "\x1b[32m");
}
