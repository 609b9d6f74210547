//! Version endpoint.

use crate::VERSION;

/// GET /api/version — fixed version string, no store access.
pub async fn get_version() -> &'static str {
    VERSION
}
