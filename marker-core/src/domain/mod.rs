//! Core domain types
//!
//! These types mirror the subset of JIRA's REST representation that the
//! marker workflow consumes. Unknown fields on the wire are ignored.

pub mod credentials;
pub mod project;
pub mod version;
