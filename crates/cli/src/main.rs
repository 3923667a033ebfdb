//! Bank Demo CLI - runs the scripted transaction demo
//!
//! Usage:
//! ```bash
//! bank-demo                          # run the demo
//! bank-demo run --json               # also print final balances as JSON
//! bank-demo --config demo.toml run   # override the withdrawal cap
//! bank-demo show-config
//! bank-demo -vv run                  # debug logs on stderr
//! ```

use anyhow::{Context, Result};
use bankdemo_scenario::{DemoConfig, Scenario, ScenarioRunner};
use clap::{ArgAction, Parser, Subcommand};
use std::io::{self, Write};
use std::path::PathBuf;
use tracing::Level;

mod display;

/// Bank Demo - account holders, accounts and validated transactions
#[derive(Parser)]
#[command(name = "bank-demo")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Configuration file (TOML)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Log verbosity on stderr (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the scripted demo and print the transcript
    Run {
        /// Print final balances as JSON after the transcript
        #[arg(long)]
        json: bool,
    },

    /// Print the effective configuration
    ShowConfig,
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        _ => Level::DEBUG,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(io::stderr)
        .init();
}

fn load_config(path: Option<&PathBuf>) -> Result<DemoConfig> {
    match path {
        Some(path) => DemoConfig::load_file(path)
            .with_context(|| format!("loading config from {}", path.display())),
        None => Ok(DemoConfig::default()),
    }
}

fn render_config(config: &DemoConfig) -> Result<String> {
    Ok(config.to_toml()?)
}

fn run(config: &DemoConfig, json: bool) -> Result<()> {
    let report = ScenarioRunner::from_config(config).run(&Scenario::bank_demo())?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    display::write_transcript(&mut out, &report)?;

    if json {
        writeln!(out, "{}", serde_json::to_string_pretty(report.final_balances())?)?;
    }

    let mismatches = report.mismatches();
    if !mismatches.is_empty() {
        tracing::warn!(count = mismatches.len(), "Scenario balances differ from narration");
    }
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = load_config(cli.config.as_ref())?;

    match cli.command.unwrap_or(Commands::Run { json: false }) {
        Commands::Run { json } => run(&config, json)?,
        Commands::ShowConfig => {
            print!("{}", render_config(&config)?);
        }
    }

    Ok(())
}
