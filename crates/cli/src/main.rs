mod config;
mod error;

use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use policy::{Policy, PolicyKind, Rule, Validator};
use serde::Serialize;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use config::Config;
use error::{Error, Result};

const CONFIG_FILE: &str = "clave.toml";

/// Exit status when at least one candidate was rejected.
const EXIT_REJECTED: u8 = 2;

#[derive(Parser)]
#[command(name = "clave")]
#[command(about = "Check candidate passwords against the Ganímedes and Calisto policies", long_about = None)]
#[command(version)]
struct Cli {
    /// Path to a config file (defaults to ./clave.toml when present)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate candidates, one per argument or one per stdin line
    Check {
        /// Policy to apply (ganimedes, calisto)
        #[arg(short, long)]
        policy: Option<PolicyKind>,
        /// Print one JSON object per candidate
        #[arg(long)]
        json: bool,
        /// Candidates to validate; reads stdin when omitted
        candidates: Vec<String>,
    },
    /// Show the checks a policy runs, in order
    Rules {
        /// Policy to describe (ganimedes, calisto)
        #[arg(short, long)]
        policy: Option<PolicyKind>,
    },
}

fn main() -> ExitCode {
    match run() {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<ExitCode> {
    let cli = Cli::parse();
    let config = load_config(cli.config.as_deref())?;
    init_logging(&config.log.level)?;

    match cli.command {
        Commands::Check {
            policy,
            json,
            candidates,
        } => cmd_check(policy.unwrap_or(config.policy), json, &candidates),
        Commands::Rules { policy } => {
            cmd_rules(policy.unwrap_or(config.policy))?;
            Ok(ExitCode::SUCCESS)
        }
    }
}

fn load_config(explicit: Option<&Path>) -> Result<Config> {
    if let Some(path) = explicit {
        if !path.exists() {
            return Err(Error::ConfigNotFound {
                path: path.to_path_buf(),
            });
        }
        return Ok(Config::load(path)?);
    }

    let path = Path::new(CONFIG_FILE);
    if path.exists() {
        Ok(Config::load(path)?)
    } else {
        Ok(Config::default())
    }
}

fn init_logging(level: &str) -> Result<()> {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(level).map_err(|e| Error::LogFilter {
            level: level.to_string(),
            reason: e.to_string(),
        })?,
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
    Ok(())
}

fn cmd_check(kind: PolicyKind, json: bool, candidates: &[String]) -> Result<ExitCode> {
    let validator = Validator::new(Policy::from(kind));
    info!(policy = validator.rule().name(), "checking candidates");

    let rejected = check_candidates(
        &validator,
        candidates,
        io::stdin().lock(),
        &mut io::stdout().lock(),
        json,
    )?;

    info!(rejected, "check finished");
    Ok(ExitCode::from(exit_status(rejected)))
}

/// Report on every candidate, taking them from `input` when `candidates`
/// is empty. Returns how many were rejected.
fn check_candidates(
    validator: &Validator,
    candidates: &[String],
    input: impl BufRead,
    out: &mut impl Write,
    json: bool,
) -> Result<usize> {
    let mut rejected = 0usize;

    if candidates.is_empty() {
        debug!("reading candidates from stdin");
        for line in input.lines() {
            if !report(&mut *out, validator, &line?, json)? {
                rejected += 1;
            }
        }
    } else {
        for candidate in candidates {
            if !report(&mut *out, validator, candidate, json)? {
                rejected += 1;
            }
        }
    }

    Ok(rejected)
}

fn exit_status(rejected: usize) -> u8 {
    if rejected > 0 { EXIT_REJECTED } else { 0 }
}

/// One line of `check --json` output.
#[derive(Debug, Serialize)]
struct Verdict {
    policy: PolicyKind,
    valid: bool,
    code: Option<&'static str>,
    message: Option<String>,
}

/// Write the verdict for one candidate. Returns whether it was accepted.
fn report(
    out: &mut impl Write,
    validator: &Validator,
    candidate: &str,
    json: bool,
) -> Result<bool> {
    let result = validator.is_valid(candidate);

    if json {
        let verdict = Verdict {
            policy: validator.rule().kind(),
            valid: result.is_ok(),
            code: result.as_ref().err().map(|e| e.code()),
            message: result.as_ref().err().map(|e| e.to_string()),
        };
        serde_json::to_writer(&mut *out, &verdict)?;
        writeln!(out)?;
    } else {
        match &result {
            Ok(()) => writeln!(out, "ok")?,
            Err(e) => writeln!(out, "rejected: {e}")?,
        }
    }

    Ok(result.is_ok())
}

fn cmd_rules(kind: PolicyKind) -> Result<()> {
    write_rules(&mut io::stdout().lock(), kind)
}

fn write_rules(out: &mut impl Write, kind: PolicyKind) -> Result<()> {
    let policy = Policy::from(kind);

    writeln!(out, "{}", policy.name())?;
    for (i, check) in policy.checks().iter().enumerate() {
        writeln!(out, "  {}. {check}", i + 1)?;
    }
    Ok(())
}
