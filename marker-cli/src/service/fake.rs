//! In-memory issue tracker for service tests
//!
//! Records every remote call in order. Versions created through it become
//! visible to later `list_versions` calls.

use async_trait::async_trait;
use marker_client::{ClientError, IssueTracker, Result};
use marker_core::domain::project::Project;
use marker_core::domain::version::Version;
use marker_core::dto::version::CreateVersion;
use std::collections::{HashMap, HashSet};
use std::sync::Mutex;

/// A remote call as seen by the fake
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    ListProjects,
    ListVersions(String),
    CreateVersion(CreateVersion),
}

#[derive(Default)]
pub struct FakeTracker {
    projects: Vec<Project>,
    versions: Mutex<HashMap<String, Vec<Version>>>,
    fail_projects: bool,
    fail_versions_for: HashSet<String>,
    fail_create_for: HashSet<String>,
    calls: Mutex<Vec<Call>>,
}

impl FakeTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_projects(mut self, projects: Vec<Project>) -> Self {
        self.projects = projects;
        self
    }

    pub fn with_versions(self, project_id: &str, versions: Vec<Version>) -> Self {
        self.versions
            .lock()
            .unwrap()
            .insert(project_id.to_string(), versions);
        self
    }

    /// `list_projects` answers 401
    pub fn failing_projects(mut self) -> Self {
        self.fail_projects = true;
        self
    }

    /// `list_versions(project_id)` answers 503
    pub fn failing_versions(mut self, project_id: &str) -> Self {
        self.fail_versions_for.insert(project_id.to_string());
        self
    }

    /// `create_version` for `project_id` answers 400
    pub fn failing_create(mut self, project_id: &str) -> Self {
        self.fail_create_for.insert(project_id.to_string());
        self
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    pub fn create_calls(&self) -> Vec<CreateVersion> {
        self.calls()
            .into_iter()
            .filter_map(|call| match call {
                Call::CreateVersion(req) => Some(req),
                _ => None,
            })
            .collect()
    }

    fn record(&self, call: Call) {
        self.calls.lock().unwrap().push(call);
    }
}

#[async_trait]
impl IssueTracker for FakeTracker {
    async fn list_projects(&self) -> Result<Vec<Project>> {
        self.record(Call::ListProjects);
        if self.fail_projects {
            return Err(ClientError::api_error(401, "Unauthorized"));
        }
        Ok(self.projects.clone())
    }

    async fn list_versions(&self, project_id: &str) -> Result<Vec<Version>> {
        self.record(Call::ListVersions(project_id.to_string()));
        if self.fail_versions_for.contains(project_id) {
            return Err(ClientError::api_error(503, "Service Unavailable"));
        }
        Ok(self
            .versions
            .lock()
            .unwrap()
            .get(project_id)
            .cloned()
            .unwrap_or_default())
    }

    async fn create_version(&self, req: &CreateVersion) -> Result<Version> {
        self.record(Call::CreateVersion(req.clone()));
        if self.fail_create_for.contains(&req.project_id) {
            return Err(ClientError::api_error(
                400,
                r#"{"errorMessages":[],"errors":{"name":"A version with this name already exists in this project."}}"#,
            ));
        }

        let mut versions = self.versions.lock().unwrap();
        let entry = versions.entry(req.project_id.clone()).or_default();
        let created = Version {
            id: Some(format!("{}", 10_000 + entry.len())),
            name: req.name.clone(),
            archived: req.archived,
            released: req.released,
            release_date: None,
            project_id: req.project_id.clone(),
        };
        entry.push(created.clone());
        Ok(created)
    }
}

pub fn project(id: &str, name: &str, project_type_key: &str) -> Project {
    Project {
        id: id.to_string(),
        key: None,
        name: name.to_string(),
        project_type_key: project_type_key.to_string(),
    }
}

pub fn version(name: &str, released: bool, project_id: &str) -> Version {
    Version {
        id: None,
        name: name.to_string(),
        archived: false,
        released,
        release_date: None,
        project_id: project_id.to_string(),
    }
}
