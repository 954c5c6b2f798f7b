//! Tracing and logging (shared setup).
//!
//! The catalog emits a `trace`-level `category created` event carrying
//! `category_id` and `is_active`; set `RUST_LOG=codeflix_catalog=trace` to
//! see it. Validation failures are returned to the caller and never logged.

/// Initialize process-wide observability (tracing/logging).
///
/// This is safe to call multiple times; subsequent calls become no-ops.
pub fn init() {
    tracing::init();
}

/// Tracing configuration (filters, layers).
pub mod tracing;
