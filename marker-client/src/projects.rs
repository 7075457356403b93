//! Project-related API endpoints

use crate::JiraClient;
use crate::error::Result;
use marker_core::domain::project::Project;

impl JiraClient {
    // =============================================================================
    // Projects
    // =============================================================================

    /// List every project visible to the authenticated user
    ///
    /// # Returns
    /// Projects in the order JIRA returns them
    pub async fn list_projects(&self) -> Result<Vec<Project>> {
        let url = self.endpoint("project");
        tracing::debug!(url = %url, "listing projects");

        let response = self.authorized(self.client.get(&url)).send().await?;

        self.handle_response(response).await
    }
}
