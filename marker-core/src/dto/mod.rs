//! Data Transfer Objects sent to the JIRA REST API

pub mod version;
