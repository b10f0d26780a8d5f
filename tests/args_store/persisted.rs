//! Persisted State Tests
//!
//! Tests for update_from_persisted: coercion to declared shapes, options
//! enforcement and structural merging of partial values.

use crate::*;
use storyargs::prelude::*;

#[test]
fn test_url_style_strings_are_coerced() {
    init_tracing();
    let mut store = seeded(json!({"a": "1", "b": 1, "c": false}));
    let story = story_with_types(json!({
        "a": {"type": {"name": "string"}},
        "b": {"type": {"name": "number"}},
        "c": {"type": {"name": "boolean"}}
    }));

    store
        .update_from_persisted(&story, &persisted(json!({"a": 2, "b": "42", "c": "true"})))
        .unwrap();

    assert_eq!(store.get("id").unwrap(), args(json!({"a": "2", "b": 42, "c": true})));
}

#[test]
fn test_persisted_state_parsed_from_text() {
    let mut store = seeded(json!({"rating": 1.0}));
    let story = story_with_types(json!({"rating": {"type": {"name": "number"}}}));
    let state = persisted_from_json(r#"{"rating": "4.5", "stale": "x"}"#).unwrap();

    store.update_from_persisted(&story, &state).unwrap();

    assert_eq!(store.get("id").unwrap(), args(json!({"rating": 4.5})));
}

#[test]
fn test_unparseable_number_is_dropped() {
    let mut store = seeded(json!({"b": 1}));
    let story = story_with_types(json!({"b": {"type": {"name": "number"}}}));

    store
        .update_from_persisted(&story, &persisted(json!({"b": "not a number"})))
        .unwrap();

    assert_eq!(store.get("id").unwrap(), args(json!({"b": 1})));
}

#[test]
fn test_sparse_array_keeps_unsupplied_positions() {
    let mut store = seeded(json!({"list": ["1", "2", "3"]}));
    let story = story_with_types(json!({
        "list": {"type": {"name": "array", "value": {"name": "string"}}}
    }));

    // [, , "4"]
    store
        .update_from_persisted(&story, &persisted(json!({"list": [null, null, "4"]})))
        .unwrap();

    assert_eq!(store.get("id").unwrap(), args(json!({"list": ["1", "2", "4"]})));
}

#[test]
fn test_sparse_array_without_current_value_keeps_indices() {
    let mut store = seeded(json!({"a": "1"}));
    let story = story_with_types(json!({
        "b": {"type": {"name": "array", "value": {"name": "string"}}}
    }));

    store
        .update_from_persisted(&story, &persisted(json!({"b": [null, null, "4"]})))
        .unwrap();

    let current = store.get("id").unwrap();
    let b = current["b"].as_array().unwrap();
    assert_eq!(b.len(), 3);
    assert_eq!(b[2], Value::from("4"));
    assert_eq!(current, args(json!({"a": "1", "b": [null, null, "4"]})));
}

#[test]
fn test_nested_objects_merge_without_losing_keys() {
    let mut store = seeded(json!({"style": {"color": "red", "size": 1}}));
    let story = story_with_types(json!({
        "style": {"type": {"name": "object", "value": {"name": "string"}}}
    }));

    store
        .update_from_persisted(&story, &persisted(json!({"style": {"color": "blue"}})))
        .unwrap();

    assert_eq!(
        store.get("id").unwrap(),
        args(json!({"style": {"color": "blue", "size": 1}}))
    );
}

#[test]
fn test_options_filter_scalars_and_arrays() {
    let mut store = seeded(json!({"one": "a", "many": ["a"]}));
    let story = story_with_types(json!({
        "one": {"type": {"name": "enum"}, "options": ["a", "b"]},
        "many": {"type": {"name": "array", "value": {"name": "string"}}, "options": ["a", "b"]}
    }));

    store
        .update_from_persisted(&story, &persisted(json!({"one": "z", "many": ["b", "z"]})))
        .unwrap();
    assert_eq!(store.get("id").unwrap(), args(json!({"one": "a", "many": ["a"]})));

    store
        .update_from_persisted(&story, &persisted(json!({"one": "b", "many": ["b", "a"]})))
        .unwrap();
    assert_eq!(store.get("id").unwrap(), args(json!({"one": "b", "many": ["b", "a"]})));
}

#[test]
fn test_warn_config_does_not_change_outcome() {
    init_tracing();
    let mut quiet = seeded(json!({"one": "a"}));
    let mut loud = StoreBuilder::new().warn_on_invalid_options(true).build();
    loud.set_initial("id", &args(json!({"one": "a"})));

    let story = story_with_types(json!({
        "one": {"type": {"name": "enum"}, "options": ["a", "b"]}
    }));
    let state = persisted(json!({"one": "z"}));

    quiet.update_from_persisted(&story, &state).unwrap();
    loud.update_from_persisted(&story, &state).unwrap();

    assert_eq!(quiet.get("id").unwrap(), loud.get("id").unwrap());
}

#[test]
fn test_undescribed_keys_never_land() {
    let mut store = seeded(json!({"a": "1"}));
    let story = story_with_types(json!({"a": {"type": {"name": "string"}}}));

    store
        .update_from_persisted(&story, &persisted(json!({"a": "2", "ghost": "boo"})))
        .unwrap();

    assert_eq!(store.get("id").unwrap(), args(json!({"a": "2"})));
}

#[test]
fn test_unseeded_story_is_not_found() {
    let mut store = ArgsStore::new();
    let story = story_with_types(json!({"a": {"type": {"name": "string"}}}));

    let err: Error = store
        .update_from_persisted(&story, &persisted(json!({"a": "1"})))
        .unwrap_err()
        .into();

    assert!(err.is_not_found());
    assert!(!store.contains("id"));
}

#[test]
fn test_shared_store_admits_persisted_state() {
    let store = SharedArgsStore::new();
    store.set_initial("id", &args(json!({"b": 1})));
    let story = story_with_types(json!({"b": {"type": {"name": "number"}}}));

    store
        .update_from_persisted(&story, &persisted(json!({"b": "7"})))
        .unwrap();

    assert_eq!(store.get("id").unwrap(), args(json!({"b": 7})));
}
