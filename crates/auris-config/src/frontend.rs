use std::path::PathBuf;

use serde::Deserialize;

/// Static frontend hosting configuration
///
/// Points at a built frontend directory: `index.html` is served at `/` and
/// the `static/` subdirectory is mounted under `/static`.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FrontendConfig {
    /// Directory containing the frontend build output
    pub dir: PathBuf,
}
