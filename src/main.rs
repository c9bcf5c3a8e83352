use clap::{Parser, Subcommand};
use gitpane::config::Config;
use gitpane::git::{
    CommitOutcome, parse_branch_list, parse_diff, parse_hunk_header, parse_status_porcelain,
};
use gitpane::{AppResult, logging, output};
use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;
use tracing::debug;

#[derive(Parser)]
#[command(
    name = "gitpane",
    version,
    about = "Decode git status, branch, diff and commit output into JSON"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Config file (defaults to ~/.config/gitpane/config.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Log level: trace, debug, info, warn or error
    #[arg(long, global = true)]
    log_level: Option<String>,

    /// Pretty-print the JSON output
    #[arg(long, global = true)]
    pretty: bool,

    /// Read git output from this file instead of stdin
    #[arg(long, global = true)]
    input: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Command {
    /// Parse `git status --porcelain` output
    Status,
    /// Parse `git branch` output
    Branches,
    /// Parse `git diff` output for one file
    Diff {
        /// Path the diff belongs to
        file_path: String,
    },
    /// Extract the short SHA from `git commit` output
    CommitSha,
    /// Validate and decode a single `@@ ... @@` hunk header
    HunkHeader {
        #[arg(allow_hyphen_values = true)]
        line: String,
    },
}

fn main() {
    let cli = Cli::parse();

    let config = match load_config(&cli) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    logging::init(&config.logging.level);

    match run(&cli, &config) {
        Ok(json) => println!("{}", json),
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}

/// Merge the config file with command-line overrides
fn load_config(cli: &Cli) -> AppResult<Config> {
    let config = match &cli.config {
        Some(path) => Config::read_from(path)?,
        None => Config::read()?,
    };

    Ok(config.with_overrides(cli.log_level.as_deref(), cli.pretty)?)
}

fn run(cli: &Cli, config: &Config) -> AppResult<String> {
    let pretty = config.output.pretty;

    match &cli.command {
        Command::Status => {
            let entries = parse_status_porcelain(&read_input(cli)?)?;
            output::render(&entries, pretty)
        }
        Command::Branches => {
            let branches = parse_branch_list(&read_input(cli)?)?;
            output::render(&branches, pretty)
        }
        Command::Diff { file_path } => {
            let result = parse_diff(file_path, &read_input(cli)?)?;
            output::render(&result, pretty)
        }
        Command::CommitSha => {
            let outcome = CommitOutcome::from_output(&read_input(cli)?)?;
            output::render(&outcome, pretty)
        }
        Command::HunkHeader { line } => {
            let header = parse_hunk_header(line)?;
            output::render(&header, pretty)
        }
    }
}

fn read_input(cli: &Cli) -> AppResult<String> {
    let text = match &cli.input {
        Some(path) => fs::read_to_string(path)?,
        None => {
            let mut buf = String::new();
            io::stdin().read_to_string(&mut buf)?;
            buf
        }
    };

    debug!(bytes = text.len(), "read git output");
    Ok(text)
}
