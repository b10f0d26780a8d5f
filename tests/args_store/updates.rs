//! Direct Update Tests
//!
//! Tests for update, update_from_delta and reset_args.

use crate::*;
use storyargs::prelude::*;

#[test]
fn test_update_is_shallow_per_key() {
    let mut store = seeded(json!({"a": "1", "obj": {"x": 1, "y": 2}}));

    store.update("id", &args(json!({"obj": {"y": 3}}))).unwrap();

    assert_eq!(store.get("id").unwrap(), args(json!({"a": "1", "obj": {"y": 3}})));
}

#[test]
fn test_update_accepts_any_value_shape() {
    let mut store = seeded(json!({"a": "1"}));

    store.update("id", &args(json!({"a": [1, 2], "b": null}))).unwrap();

    assert_eq!(store.get("id").unwrap(), args(json!({"a": [1, 2], "b": null})));
}

#[test]
fn test_update_unknown_story_changes_nothing() {
    let mut store = seeded(json!({"a": "1"}));

    let err = store.update("missing", &args(json!({"a": "2"}))).unwrap_err();

    assert!(err.is_not_found());
    assert!(!store.contains("missing"));
    assert_eq!(store.get("id").unwrap(), args(json!({"a": "1"})));
}

#[test]
fn test_delta_merges_structurally() {
    init_tracing();
    let mut store = seeded(json!({"obj": {"x": 1, "y": 2}}));
    let story = story_with_types(json!({
        "obj": {"type": {"name": "object", "value": {"name": "number"}}}
    }));

    store
        .update_from_delta(&story, &args(json!({"obj": {"y": 3}})))
        .unwrap();

    assert_eq!(store.get("id").unwrap(), args(json!({"obj": {"x": 1, "y": 3}})));
}

#[test]
fn test_delta_enforces_options() {
    let mut store = seeded(json!({"size": "small"}));
    let story = story_with_types(json!({
        "size": {"type": {"name": "enum"}, "options": ["small", "large"]}
    }));

    store
        .update_from_delta(&story, &args(json!({"size": "huge"})))
        .unwrap();
    assert_eq!(store.get("id").unwrap(), args(json!({"size": "small"})));

    store
        .update_from_delta(&story, &args(json!({"size": "large"})))
        .unwrap();
    assert_eq!(store.get("id").unwrap(), args(json!({"size": "large"})));
}

#[test]
fn test_reset_args_after_edits() {
    let mut store = seeded(json!({"a": "1", "b": "1"}));
    store
        .update("id", &args(json!({"a": "2", "b": "2", "c": "new"})))
        .unwrap();

    store.reset_args("id", Some(&["a", "c"][..])).unwrap();
    assert_eq!(store.get("id").unwrap(), args(json!({"a": "1", "b": "2"})));

    store.reset_args("id", None).unwrap();
    assert_eq!(store.get("id").unwrap(), args(json!({"a": "1", "b": "1"})));
}

#[test]
fn test_shared_update_through_facade_error() {
    let store = SharedArgsStore::new();
    let err = store.update("missing", &ArgSet::new()).unwrap_err();
    assert!(matches!(err, Error::NotFound(_)));
}
