use chrono::Utc;
use codeflix_catalog::{
    Category, DESCRIPTION_NULL_MESSAGE, NAME_EMPTY_MESSAGE, NAME_TOO_LONG_MESSAGE,
    NAME_TOO_SHORT_MESSAGE, NewCategory,
};
use codeflix_core::{DomainError, Entity};
use serde_json::json;
use std::thread;
use std::time::Duration;

const NAME: &str = "category name";
const DESCRIPTION: &str = "category description";

/// Sleep long enough that `Utc::now()` samples around construction differ.
fn tick() {
    thread::sleep(Duration::from_millis(2));
}

fn assert_validation_error(err: DomainError, expected: &str) {
    match err {
        DomainError::EntityValidation(msg) => assert_eq!(msg, expected),
        other => panic!("Expected EntityValidation error, got {other:?}"),
    }
}

#[test]
fn instantiate() {
    codeflix_observability::init();

    let before = Utc::now();
    tick();
    let category = Category::new(NAME, DESCRIPTION).unwrap();
    tick();
    let after = Utc::now();

    assert_eq!(category.name(), NAME);
    assert_eq!(category.description(), DESCRIPTION);
    assert!(!category.id().is_nil());
    assert!(category.created_at() > before);
    assert!(category.created_at() < after);
    assert!(category.is_active());
}

#[test]
fn instantiate_with_is_active() {
    for is_active in [true, false] {
        let before = Utc::now();
        tick();
        let category = Category::with_active(NAME, DESCRIPTION, is_active).unwrap();
        tick();
        let after = Utc::now();

        assert_eq!(category.name(), NAME);
        assert_eq!(category.description(), DESCRIPTION);
        assert!(!category.id().is_nil());
        assert!(category.created_at() > before);
        assert!(category.created_at() < after);
        assert_eq!(category.is_active(), is_active);
    }
}

#[test]
fn instantiate_error_when_name_is_empty() {
    for name in [Some(""), None, Some("   ")] {
        let input = NewCategory {
            name: name.map(str::to_string),
            description: Some("Category Description".to_string()),
            is_active: None,
        };
        let err = Category::create(input).unwrap_err();
        assert_validation_error(err, NAME_EMPTY_MESSAGE);
    }
}

#[test]
fn instantiate_error_when_description_is_null() {
    let input = NewCategory {
        name: Some("Category name".to_string()),
        description: None,
        is_active: None,
    };
    let err = Category::create(input).unwrap_err();
    assert_validation_error(err, DESCRIPTION_NULL_MESSAGE);
}

#[test]
fn instantiate_error_when_name_less_than_3_characters() {
    for name in ["1", "12", "a", "ac"] {
        let err = Category::new(name, "Category Description").unwrap_err();
        assert_validation_error(err, NAME_TOO_SHORT_MESSAGE);
    }
}

#[test]
fn instantiate_error_when_name_greater_than_255_characters() {
    let name = "a".repeat(256);
    let err = Category::new(name, "Category Description").unwrap_err();
    assert_validation_error(err, NAME_TOO_LONG_MESSAGE);
}

#[test]
fn identical_input_yields_distinct_ids() {
    let first = Category::new(NAME, DESCRIPTION).unwrap();
    let second = Category::new(NAME, DESCRIPTION).unwrap();
    assert_ne!(first.id(), second.id());
}

#[test]
fn json_input_with_nulls_reaches_validation() {
    let input: NewCategory =
        serde_json::from_value(json!({ "name": null, "description": "d" })).unwrap();
    assert_validation_error(Category::create(input).unwrap_err(), NAME_EMPTY_MESSAGE);

    let input: NewCategory =
        serde_json::from_value(json!({ "name": "Category name", "description": null }))
            .unwrap();
    assert_validation_error(Category::create(input).unwrap_err(), DESCRIPTION_NULL_MESSAGE);
}

#[test]
fn json_input_without_is_active_defaults_to_active() {
    let input: NewCategory =
        serde_json::from_value(json!({ "name": NAME, "description": DESCRIPTION })).unwrap();
    let category = Category::create(input).unwrap();
    assert!(category.is_active());

    let input: NewCategory = serde_json::from_value(
        json!({ "name": NAME, "description": DESCRIPTION, "is_active": false }),
    )
    .unwrap();
    let category = Category::create(input).unwrap();
    assert!(!category.is_active());
}

#[test]
fn validation_error_message_is_surfaced_verbatim() {
    let err = Category::new("", DESCRIPTION).unwrap_err();
    assert_eq!(err.to_string(), NAME_EMPTY_MESSAGE);
}
