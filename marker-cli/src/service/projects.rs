//! Project filter
//!
//! Lists projects once and keeps those of the configured type.

use anyhow::{Context, Result};
use marker_client::IssueTracker;
use marker_core::domain::project::Project;
use tracing::{debug, info};

/// List every project whose type key equals `project_type`
///
/// One remote call. The remote order is preserved; nothing is re-sorted.
/// Errors are returned as-is, there is no retry.
pub async fn list_projects_of_type(
    tracker: &dyn IssueTracker,
    project_type: &str,
) -> Result<Vec<Project>> {
    let projects = tracker
        .list_projects()
        .await
        .context("Failed to list projects")?;

    let total = projects.len();
    let selected: Vec<Project> = projects
        .into_iter()
        .filter(|project| {
            let keep = project.is_of_type(project_type);
            if !keep {
                debug!(project = %project.name, project_type = %project.project_type_key, "skipping project");
            }
            keep
        })
        .collect();

    info!(total, selected = selected.len(), project_type, "projects listed");

    Ok(selected)
}
