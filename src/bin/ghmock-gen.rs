//! Endpoint catalog generator.
//!
//! Fetches GitHub's OpenAPI description and writes one `EndpointPattern`
//! constant per operation to `src/endpoints.rs`.

use std::path::Path;
use std::process::{Command, ExitCode};

use clap::Parser;
use ghmock::cli::Cli;
use ghmock::codegen::{fetch_api_definition, parse_api_definition, render, ScrapeResult};
use ghmock::MockError;
use tabled::{Table, Tabled};
use tracing::Level;

const USER_AGENT: &str = concat!("ghmock-gen/", env!("CARGO_PKG_VERSION"));

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let level = if cli.debug { Level::DEBUG } else { Level::INFO };
    tracing_subscriber::fmt().with_max_level(level).init();
    tracing::debug!("running in debug mode");

    match run(&cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "endpoint generation failed");
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: &Cli) -> ghmock::Result<()> {
    let client = reqwest::Client::builder().user_agent(USER_AGENT).build()?;

    let definition = fetch_api_definition(&client, &cli.url).await?;
    let results = parse_api_definition(&definition)?;
    let rendered = render(&results);

    for skipped in &rendered.skipped {
        tracing::warn!(
            method = %skipped.method,
            pattern = %skipped.pattern,
            "not generated: name collision"
        );
    }

    if cli.dry_run {
        let rows: Vec<EndpointRow> = rendered.constants.iter().map(EndpointRow::from).collect();
        println!("{}", Table::new(rows));
        return Ok(());
    }

    std::fs::write(&cli.output, &rendered.source)?;
    tracing::info!(
        path = %cli.output.display(),
        constants = rendered.constants.len(),
        "wrote endpoint catalog"
    );

    if !cli.no_fmt {
        rustfmt(&cli.output)?;
    }

    Ok(())
}

/// Format the generated file, which also catches syntax errors in it.
fn rustfmt(path: &Path) -> ghmock::Result<()> {
    let status = Command::new("rustfmt")
        .args(["--edition", "2021"])
        .arg(path)
        .status()?;

    if !status.success() {
        return Err(MockError::Io(std::io::Error::other(format!(
            "rustfmt exited with {status}"
        ))));
    }

    Ok(())
}

/// Table row for dry-run output.
#[derive(Tabled)]
struct EndpointRow {
    #[tabled(rename = "Constant")]
    name: String,
    #[tabled(rename = "Method")]
    method: String,
    #[tabled(rename = "Pattern")]
    pattern: String,
}

impl From<&(String, ScrapeResult)> for EndpointRow {
    fn from((name, result): &(String, ScrapeResult)) -> Self {
        Self {
            name: name.clone(),
            method: result.method.clone(),
            pattern: result.pattern.clone(),
        }
    }
}
