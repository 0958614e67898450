//! Environment probing and pagination defaults.

use std::env;

/// Page size used when the UI-state collaborator has nothing persisted.
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Upper bound a caller-supplied page size is clamped to by
/// [`crate::services::PageStateStore`] implementations. The engine
/// itself only rejects zero; this keeps a corrupted persisted value
/// from requesting absurd slices.
pub const MAX_PAGE_SIZE: usize = 100;

/// Deployment environment, from `APP_ENV` (defaults to `development`).
pub fn get_environment() -> String {
    env::var("APP_ENV").unwrap_or_else(|_| "development".to_string())
}
