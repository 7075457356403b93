//! Marker Core
//!
//! Core types shared by the JIRA client and the `ensure-deployed` CLI.
//!
//! This crate contains:
//! - Domain types: operator credentials and the JIRA entities we read (Project, Version)
//! - DTOs: request bodies sent to the JIRA REST API

pub mod domain;
pub mod dto;
