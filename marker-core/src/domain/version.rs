//! Version domain model
//!
//! A project version (release marker) as returned by
//! `GET /rest/api/2/project/{id}/versions` and `POST /rest/api/2/version`.

use serde::{Deserialize, Deserializer, Serialize};

/// Name of the release marker every software project must carry
pub const DEPLOYED_VERSION_NAME: &str = "Deployed";

/// A JIRA project version
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Version {
    /// Version id; absent on some older JIRA payloads
    #[serde(default)]
    pub id: Option<String>,

    pub name: String,

    #[serde(default)]
    pub archived: bool,

    #[serde(default)]
    pub released: bool,

    /// Release date as reported by JIRA (e.g., "2024-03-01")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub release_date: Option<String>,

    /// Owning project id. JIRA sends this as a number on reads and accepts
    /// a string on writes, so both are normalized to a string here.
    #[serde(default, deserialize_with = "string_or_number")]
    pub project_id: String,
}

impl Version {
    /// Whether this version is a released marker named `name`
    pub fn is_released_marker(&self, name: &str) -> bool {
        self.name == name && self.released
    }
}

impl std::fmt::Display for Version {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name)?;
        if let Some(id) = &self.id {
            write!(f, " [id={}]", id)?;
        }
        write!(
            f,
            " released={} archived={} project={}",
            self.released, self.archived, self.project_id
        )
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum StringOrNumber {
    Text(String),
    Number(u64),
}

fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match StringOrNumber::deserialize(deserializer)? {
        StringOrNumber::Text(s) => s,
        StringOrNumber::Number(n) => n.to_string(),
    })
}
