//! Operator-facing progress output
//!
//! Printed to stdout regardless of the log filter so the operator always
//! sees which project is being worked on.

use colored::*;
use marker_core::domain::project::Project;
use marker_core::domain::version::Version;

use crate::config::RunConfig;
use crate::service::RunSummary;

/// A project is about to be checked
pub fn print_checking(project: &Project) {
    println!("{} {} ...", "checking".cyan(), project.to_string().bold());
}

/// An existing marker was found
pub fn print_found(marker_name: &str, version: &Version) {
    println!(
        "  {} {}",
        format!("found {}:", marker_name).green(),
        version.to_string().dimmed()
    );
}

/// A marker was created
pub fn print_created(marker_name: &str, version: &Version) {
    println!(
        "  {} {}",
        format!("created {}:", marker_name).green().bold(),
        version
    );
}

/// The run finished
pub fn print_summary(summary: &RunSummary, config: &RunConfig) {
    println!();
    if summary.total() == 0 {
        println!(
            "{}",
            format!("No {} projects found.", config.project_type).yellow()
        );
        return;
    }

    println!(
        "{}",
        format!(
            "✓ {} {} project(s): {} already had {}, {} created",
            summary.total(),
            config.project_type,
            summary.found,
            config.marker_name,
            summary.created
        )
        .green()
        .bold()
    );
}
