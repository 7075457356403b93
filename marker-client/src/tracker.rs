//! Issue tracker capability
//!
//! The marker workflow only needs three remote operations. Services depend
//! on this trait rather than on `JiraClient` so they can run against a fake.

use async_trait::async_trait;
use marker_core::domain::project::Project;
use marker_core::domain::version::Version;
use marker_core::dto::version::CreateVersion;

use crate::JiraClient;
use crate::error::Result;

/// Remote operations consumed from the issue tracker
#[async_trait]
pub trait IssueTracker: Send + Sync {
    /// List every project visible to the authenticated identity
    async fn list_projects(&self) -> Result<Vec<Project>>;

    /// List the versions of one project
    async fn list_versions(&self, project_id: &str) -> Result<Vec<Version>>;

    /// Create a version and return the stored record
    async fn create_version(&self, req: &CreateVersion) -> Result<Version>;
}

#[async_trait]
impl IssueTracker for JiraClient {
    async fn list_projects(&self) -> Result<Vec<Project>> {
        JiraClient::list_projects(self).await
    }

    async fn list_versions(&self, project_id: &str) -> Result<Vec<Version>> {
        JiraClient::list_versions(self, project_id).await
    }

    async fn create_version(&self, req: &CreateVersion) -> Result<Version> {
        JiraClient::create_version(self, req).await
    }
}
