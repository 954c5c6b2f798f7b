//! Catalog domain module.
//!
//! This crate contains business rules for catalog categories, implemented purely
//! as deterministic domain logic (no IO, no HTTP, no storage).

pub mod category;

pub use category::{
    Category, DESCRIPTION_NULL_MESSAGE, NAME_EMPTY_MESSAGE, NAME_MAX_LEN, NAME_MIN_LEN,
    NAME_TOO_LONG_MESSAGE, NAME_TOO_SHORT_MESSAGE, NewCategory, validate_category_fields,
};
