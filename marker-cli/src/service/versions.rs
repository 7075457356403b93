//! Version ensurer
//!
//! For each selected project: list its versions, and create the released
//! marker version when none exists. Projects are processed one at a time
//! and the first failure stops the run.

use anyhow::{Context, Result};
use marker_client::IssueTracker;
use marker_core::domain::project::Project;
use marker_core::domain::version::Version;
use marker_core::dto::version::CreateVersion;
use tracing::{debug, info};

use crate::config::RunConfig;
use crate::output;

/// Terminal state of one project
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EnsureOutcome {
    /// A released marker already existed; the first one found
    Found(Version),
    /// No released marker existed; the version JIRA created
    Created(Version),
}

impl EnsureOutcome {
    pub fn version(&self) -> &Version {
        match self {
            EnsureOutcome::Found(version) => version,
            EnsureOutcome::Created(version) => version,
        }
    }
}

/// Counts over a completed run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub found: usize,
    pub created: usize,
}

impl RunSummary {
    fn record(&mut self, outcome: &EnsureOutcome) {
        match outcome {
            EnsureOutcome::Found(_) => self.found += 1,
            EnsureOutcome::Created(_) => self.created += 1,
        }
    }

    /// Number of projects that reached a terminal state
    pub fn total(&self) -> usize {
        self.found + self.created
    }
}

/// Make sure `project` has a released version named `config.marker_name`
///
/// When several released markers exist, the first one reported by JIRA
/// wins and the rest are left alone.
pub async fn ensure_marker_version(
    tracker: &dyn IssueTracker,
    project: &Project,
    config: &RunConfig,
) -> Result<EnsureOutcome> {
    output::print_checking(project);
    debug!(project = %project.name, project_id = %project.id, "listing versions");

    let versions = tracker
        .list_versions(&project.id)
        .await
        .with_context(|| format!("Failed to list versions of project {}", project))?;

    if let Some(existing) = versions
        .into_iter()
        .find(|version| version.is_released_marker(&config.marker_name))
    {
        output::print_found(&config.marker_name, &existing);
        debug!(project = %project.name, version = %existing, "marker already present");
        return Ok(EnsureOutcome::Found(existing));
    }

    let request = CreateVersion::released_marker(config.marker_name.clone(), project);
    let created = tracker
        .create_version(&request)
        .await
        .with_context(|| {
            format!(
                "Failed to create {} version for project {}",
                config.marker_name, project
            )
        })?;

    output::print_created(&config.marker_name, &created);
    info!(project = %project.name, version = %created, "marker version created");

    Ok(EnsureOutcome::Created(created))
}

/// Ensure the marker on every project, strictly in sequence
///
/// Project `i + 1` is not touched until project `i` has reached a terminal
/// state. The first error is returned and no later project is contacted.
pub async fn ensure_all(
    tracker: &dyn IssueTracker,
    projects: &[Project],
    config: &RunConfig,
) -> Result<RunSummary> {
    let mut summary = RunSummary::default();

    for project in projects {
        let outcome = ensure_marker_version(tracker, project, config).await?;
        debug!(project = %project.name, version = %outcome.version(), "project settled");
        summary.record(&outcome);
    }

    Ok(summary)
}
