//! Version DTOs for the JIRA REST API

use serde::{Deserialize, Serialize};

use crate::domain::project::Project;

/// Request body for `POST /rest/api/2/version`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateVersion {
    pub name: String,
    pub archived: bool,
    pub released: bool,
    pub project_id: String,
}

impl CreateVersion {
    /// A released, unarchived marker named `name` on `project`
    pub fn released_marker(name: impl Into<String>, project: &Project) -> Self {
        Self {
            name: name.into(),
            archived: false,
            released: true,
            project_id: project.id.clone(),
        }
    }
}
