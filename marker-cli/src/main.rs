//! ensure-deployed
//!
//! Prompts for JIRA credentials, then makes sure every software project on
//! the instance has a released "Deployed" version, one project at a time.

mod config;
mod output;
mod prompt;
mod run;
mod service;

use anyhow::{Context, Result};
use clap::Parser;
use marker_client::JiraClient;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::RunConfig;
use crate::prompt::StdioPrompter;

#[derive(Parser)]
#[command(name = "ensure-deployed", version)]
#[command(
    about = "Ensure every JIRA software project has a released \"Deployed\" version",
    long_about = None
)]
struct Cli {}

#[tokio::main]
async fn main() -> Result<()> {
    let _ = Cli::parse();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "ensure_deployed=info,marker_client=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = RunConfig::default();

    let credentials = prompt::prompt_credentials(&mut StdioPrompter::new())
        .context("Failed to read credentials")?;

    let client =
        JiraClient::from_credentials(&credentials).context("Failed to configure JIRA client")?;
    drop(credentials);

    info!(base_url = client.base_url(), username = client.username(), "JIRA client ready");

    let summary = run::run(&client, &config).await?;
    output::print_summary(&summary, &config);

    Ok(())
}
