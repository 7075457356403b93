//! Service layer
//!
//! Business logic for the marker run. Services talk to JIRA only through
//! the `IssueTracker` trait so they can be exercised against a fake.

mod projects;
mod versions;

#[cfg(test)]
pub(crate) mod fake;

pub use projects::list_projects_of_type;
pub use versions::{RunSummary, ensure_all};
