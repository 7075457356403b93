//! Project domain model
//!
//! A project as returned by `GET /rest/api/2/project`.

use serde::{Deserialize, Serialize};

/// Project type key JIRA assigns to software (scrum/kanban) projects
pub const SOFTWARE_PROJECT_TYPE: &str = "software";

/// A JIRA project
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    /// Numeric project id, as a string (e.g., "10000")
    pub id: String,

    /// Short project key (e.g., "OPS")
    #[serde(default)]
    pub key: Option<String>,

    /// Display name
    pub name: String,

    /// Type classification: "software", "business", "service_desk", ...
    #[serde(default)]
    pub project_type_key: String,
}

impl Project {
    /// Whether this project is classified as `project_type`
    pub fn is_of_type(&self, project_type: &str) -> bool {
        self.project_type_key == project_type
    }
}

impl std::fmt::Display for Project {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.key {
            Some(key) => write!(f, "{} ({})", self.name, key),
            None => write!(f, "{}", self.name),
        }
    }
}
