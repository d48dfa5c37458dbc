use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::{error, info, level_filters::LevelFilter};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use inventory_conformance::cli_style::get_styles;
use inventory_conformance::config::{CliConfig, FileConfig, RunnerConfig};
use inventory_conformance::{run_all_tests, ConsoleReporter};

fn parse_path(s: &str) -> Result<PathBuf> {
    let original_path = PathBuf::from(s);
    if original_path.is_absolute() {
        return Ok(original_path);
    }
    let cwd = std::env::current_dir()?;
    Ok(cwd.join(original_path))
}

/// Checks an inventory management API for conformance.
#[derive(Parser, Debug)]
#[command(styles=get_styles(), version)]
struct CliArgs {
    /// Base URL of the API under test [default: http://localhost:3000]
    pub base_url: Option<String>,

    /// Path to a TOML config file.
    #[clap(long, value_parser = parse_path)]
    pub config: Option<PathBuf>,

    /// Timeout in seconds for each request. Unset keeps the HTTP client defaults.
    #[clap(long)]
    pub timeout_sec: Option<u64>,
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli_args = CliArgs::parse();

    // Logs go to stderr, the report owns stdout.
    let _ = tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(
            EnvFilter::builder()
                .with_default_directive(LevelFilter::WARN.into())
                .with_env_var("LOG_LEVEL")
                .from_env_lossy(),
        )
        .try_init();

    match run(cli_args).await {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            error!("{:#}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run(cli_args: CliArgs) -> Result<bool> {
    let file_config = match &cli_args.config {
        Some(path) => {
            info!("Loading config from {:?}", path);
            Some(FileConfig::load(path)?)
        }
        None => None,
    };

    let cli_config = CliConfig {
        base_url: cli_args.base_url,
        request_timeout_sec: cli_args.timeout_sec,
    };
    let config =
        RunnerConfig::resolve(&cli_config, file_config).context("Invalid configuration")?;

    run_all_tests(config, &mut ConsoleReporter).await
}
