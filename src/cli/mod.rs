//! CLI argument parsing types.
//!
//! This module provides the command-line interface structure for the
//! ghmock-gen binary.

use std::path::PathBuf;

use clap::Parser;

use crate::codegen::{DEFAULT_OUTPUT_PATH, GITHUB_OPENAPI_DEFINITION_URL};

/// Generate the GitHub endpoint catalog from the published OpenAPI description.
#[derive(Parser, Debug)]
#[command(name = "ghmock-gen", about = "Generate the GitHub endpoint catalog", version)]
pub struct Cli {
    /// Location of the OpenAPI description.
    #[arg(long, env = "GHMOCK_SCHEMA_URL", default_value = GITHUB_OPENAPI_DEFINITION_URL)]
    pub url: String,

    /// File to write the generated catalog to.
    #[arg(long, short, default_value = DEFAULT_OUTPUT_PATH)]
    pub output: PathBuf,

    /// Output debug information.
    #[arg(long, default_value = "false")]
    pub debug: bool,

    /// Print the endpoints as a table instead of writing the catalog.
    #[arg(long, default_value = "false")]
    pub dry_run: bool,

    /// Skip running rustfmt on the generated file.
    #[arg(long, default_value = "false")]
    pub no_fmt: bool,
}
