//! Configuration module
//!
//! The run takes no flags or config file; this holds the constants the
//! services match against so they live in one place.

use marker_core::domain::project::SOFTWARE_PROJECT_TYPE;
use marker_core::domain::version::DEPLOYED_VERSION_NAME;

/// Run configuration
#[derive(Debug, Clone)]
pub struct RunConfig {
    /// Name of the released version every selected project must carry
    pub marker_name: String,

    /// Project type key selecting which projects are processed
    pub project_type: String,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            marker_name: DEPLOYED_VERSION_NAME.to_string(),
            project_type: SOFTWARE_PROJECT_TYPE.to_string(),
        }
    }
}
