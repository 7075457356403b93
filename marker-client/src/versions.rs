//! Version-related API endpoints

use crate::JiraClient;
use crate::error::Result;
use marker_core::domain::version::Version;
use marker_core::dto::version::CreateVersion;

impl JiraClient {
    // =============================================================================
    // Versions
    // =============================================================================

    /// List all versions of a project
    ///
    /// # Arguments
    /// * `project_id` - The numeric project id (or project key)
    ///
    /// # Returns
    /// The project's versions, archived ones included
    pub async fn list_versions(&self, project_id: &str) -> Result<Vec<Version>> {
        let url = self.endpoint(&format!("project/{}/versions", project_id));
        tracing::debug!(url = %url, project_id, "listing versions");

        let response = self.authorized(self.client.get(&url)).send().await?;

        self.handle_response(response).await
    }

    /// Create a version
    ///
    /// # Arguments
    /// * `req` - The version to create; `project_id` selects the owning project
    ///
    /// # Returns
    /// The version as stored by JIRA
    ///
    /// # Example
    /// ```no_run
    /// # use marker_client::JiraClient;
    /// # use marker_core::domain::credentials::Credentials;
    /// # use marker_core::dto::version::CreateVersion;
    /// # async fn example() -> marker_client::Result<()> {
    /// let client = JiraClient::from_credentials(&Credentials::new(
    ///     "https://jira.example.com",
    ///     "ops",
    ///     "secret",
    /// ))?;
    /// let version = client.create_version(&CreateVersion {
    ///     name: "Deployed".to_string(),
    ///     archived: false,
    ///     released: true,
    ///     project_id: "10000".to_string(),
    /// }).await?;
    /// # Ok(())
    /// # }
    /// ```
    pub async fn create_version(&self, req: &CreateVersion) -> Result<Version> {
        let url = self.endpoint("version");
        tracing::debug!(url = %url, project_id = %req.project_id, name = %req.name, "creating version");

        let response = self
            .authorized(self.client.post(&url))
            .json(req)
            .send()
            .await?;

        self.handle_response(response).await
    }
}
