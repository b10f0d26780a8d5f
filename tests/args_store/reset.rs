//! Implementation Change Tests
//!
//! Tests for reset_on_implementation_change across successive
//! regenerations of a story's defaults.

use crate::*;
use storyargs::prelude::*;

#[test]
fn test_untouched_story_follows_new_defaults() {
    init_tracing();
    let mut store = seeded(json!({"a": "1", "b": "1"}));
    let previous = story_with_initial(json!({"a": "1", "b": "1"}));
    let next = story_with_initial(json!({"a": "2", "c": "2"}));

    store.reset_on_implementation_change(&next, &previous).unwrap();

    assert_eq!(store.get("id").unwrap(), args(json!({"a": "2", "c": "2"})));
    assert_eq!(store.get_initial("id").unwrap(), args(json!({"a": "2", "c": "2"})));
}

#[test]
fn test_user_edits_survive_regeneration() {
    let mut store = seeded(json!({"a": "1", "b": "1"}));
    store
        .update("id", &args(json!({"a": "update", "c": "update"})))
        .unwrap();

    let previous = story_with_initial(json!({"a": "1", "b": "1"}));
    let next = story_with_initial(json!({"a": "2", "b": "2"}));
    store.reset_on_implementation_change(&next, &previous).unwrap();

    assert_eq!(
        store.get("id").unwrap(),
        args(json!({"a": "update", "b": "2", "c": "update"}))
    );
}

#[test]
fn test_edits_survive_several_regenerations() {
    let mut store = seeded(json!({"a": "1", "b": "1"}));
    store.update("id", &args(json!({"a": "mine"}))).unwrap();

    let v1 = story_with_initial(json!({"a": "1", "b": "1"}));
    let v2 = story_with_initial(json!({"a": "2", "b": "2"}));
    let v3 = story_with_initial(json!({"a": "3", "b": "3"}));

    store.reset_on_implementation_change(&v2, &v1).unwrap();
    store.reset_on_implementation_change(&v3, &v2).unwrap();

    assert_eq!(store.get("id").unwrap(), args(json!({"a": "mine", "b": "3"})));
}

#[test]
fn test_nested_edit_is_kept_whole() {
    let mut store = seeded(json!({"obj": {"x": 1, "y": 1}}));
    store.update("id", &args(json!({"obj": {"x": 9, "y": 1}}))).unwrap();

    let previous = story_with_initial(json!({"obj": {"x": 1, "y": 1}}));
    let next = story_with_initial(json!({"obj": {"x": 1, "y": 2}}));
    store.reset_on_implementation_change(&next, &previous).unwrap();

    assert_eq!(store.get("id").unwrap(), args(json!({"obj": {"x": 9, "y": 1}})));
}

#[test]
fn test_edit_back_to_default_adopts_new_default() {
    let mut store = seeded(json!({"a": "1"}));
    store.update("id", &args(json!({"a": "2"}))).unwrap();
    store.update("id", &args(json!({"a": "1"}))).unwrap();

    let previous = story_with_initial(json!({"a": "1"}));
    let next = story_with_initial(json!({"a": "new"}));
    store.reset_on_implementation_change(&next, &previous).unwrap();

    assert_eq!(store.get("id").unwrap(), args(json!({"a": "new"})));
}

#[test]
fn test_persisted_edits_count_as_user_edits() {
    let mut store = seeded(json!({"n": 1}));
    let typed = story_with_types(json!({"n": {"type": {"name": "number"}}}));
    store
        .update_from_persisted(&typed, &persisted(json!({"n": "5"})))
        .unwrap();

    let previous = story_with_initial(json!({"n": 1}));
    let next = story_with_initial(json!({"n": 2}));
    store.reset_on_implementation_change(&next, &previous).unwrap();

    assert_eq!(store.get("id").unwrap(), args(json!({"n": 5})));
}

#[test]
fn test_untouched_nan_default_is_replaced() {
    let mut nan_args = ArgSet::new();
    nan_args.insert("x".into(), Value::from(f64::NAN));
    let mut store = ArgsStore::new();
    store.set_initial("id", &nan_args);

    let previous = Story::new("id").with_initial_args(nan_args);
    let next = story_with_initial(json!({"x": 1.0}));
    store.reset_on_implementation_change(&next, &previous).unwrap();

    assert_eq!(store.get("id").unwrap(), args(json!({"x": 1.0})));
}

#[test]
fn test_mismatched_descriptors_conflict() {
    let mut store = seeded(json!({"a": "1"}));
    let previous = Story::new("other").with_initial_args(args(json!({"a": "1"})));
    let next = story_with_initial(json!({"a": "2"}));

    let err: Error = store
        .reset_on_implementation_change(&next, &previous)
        .unwrap_err()
        .into();

    assert!(err.is_conflict());
    assert_eq!(store.get("id").unwrap(), args(json!({"a": "1"})));
}

#[test]
fn test_reset_unseeded_story_is_not_found() {
    let mut store = ArgsStore::new();
    let story = story_with_initial(json!({"a": "1"}));

    let err = store
        .reset_on_implementation_change(&story, &story)
        .unwrap_err();

    assert!(err.is_not_found());
}
