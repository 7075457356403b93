//! Run orchestration
//!
//! Select projects of the configured type, then settle each one in turn.

use anyhow::Result;
use marker_client::IssueTracker;
use tracing::info;

use crate::config::RunConfig;
use crate::service::{self, RunSummary};

/// Ensure the marker version on every project of `config.project_type`
///
/// The project list is read once up front; projects added on the JIRA side
/// while the run is in progress are not seen.
pub async fn run(tracker: &dyn IssueTracker, config: &RunConfig) -> Result<RunSummary> {
    let projects = service::list_projects_of_type(tracker, &config.project_type).await?;

    let summary = service::ensure_all(tracker, &projects, config).await?;

    info!(
        found = summary.found,
        created = summary.created,
        "run complete"
    );

    Ok(summary)
}
