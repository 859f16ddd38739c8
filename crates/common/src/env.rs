//! Environment/runtime helpers
//!
//! Sanity checks run before a service starts accepting requests.

use tracing::warn;

/// Warn when the static assets directory is missing. Requests for assets will 404
/// but the service still starts. Returns whether the directory exists.
pub async fn check_static_dir(static_dir: &str) -> bool {
    match tokio::fs::metadata(static_dir).await {
        Ok(meta) if meta.is_dir() => true,
        Ok(_) => {
            warn!(%static_dir, "static path is not a directory; static assets will 404");
            false
        }
        Err(_) => {
            warn!(%static_dir, "static assets directory not found; static assets will 404");
            false
        }
    }
}
