//! Roster CLI - export every user of a GitLab instance to a CSV file.

mod config;
mod progress;

use std::path::Path;

use clap::Parser;
use roster::{DEFAULT_OUTPUT, GitLabClient, export_roster};
use tracing_subscriber::EnvFilter;

use crate::progress::LoggingReporter;

#[derive(Parser)]
#[command(name = "roster")]
#[command(version)]
#[command(about = "Export the user roster of a GitLab instance to CSV")]
#[command(
    long_about = "Roster pages through the /api/v4/users endpoint of a GitLab instance and \
writes every user (ID, username, name, email, state) to users.csv in the current \
directory."
)]
#[command(after_long_help = r#"EXAMPLES
    Export users.csv in the current directory:
        $ GITLAB_URL=https://gitlab.example.com GITLAB_TOKEN=glpat-... roster

ENVIRONMENT VARIABLES
    GITLAB_TOKEN    Personal access token (required)
    GITLAB_URL      Instance base URL, e.g. https://gitlab.example.com (required)
    RUST_LOG        Log filter (default: roster=info,roster_cli=info)
"#)]
struct Cli {}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let env_filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::new("roster=info,roster_cli=info"),
    };

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let _ = Cli::parse();

    if let Err(e) = run().await {
        tracing::error!("{}", e);
        std::process::exit(1);
    }
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let credentials = config::Config::load()?.credentials()?;
    tracing::debug!(?credentials, "Loaded configuration");

    let client = GitLabClient::new(&credentials);
    let progress = LoggingReporter::new().into_callback();

    export_roster(&client, Path::new(DEFAULT_OUTPUT), Some(&progress)).await?;

    Ok(())
}
