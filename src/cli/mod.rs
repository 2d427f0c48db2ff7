//! CLI module for the tdop parser
//!
//! ## Commands
//!
//! - *(no arguments)* - Parse the built-in sample program and print its Graphviz graph
//! - `parse [FILE] [-c CODE]` - Print the bracketed tree
//! - `dot [FILE] [-c CODE]` - Print the Graphviz graph
//! - `lex [FILE] [-c CODE]` - Print one token per line
//! - `sql -c QUERY` - Parse a `select`/`update` statement
//!
//! When neither `FILE` nor `-c` is given, commands read the sample program.
//!
//! ## Design
//!
//! Command functions return `CliResult<T>` instead of calling `process::exit`.
//! Only the top-level `run()` function handles errors and exits.

// Enforce explicit error handling - no panicking in production code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

pub mod commands;

use std::fmt;
use std::path::PathBuf;
use std::process;

use clap::{Args, Parser, Subcommand};

// ============================================================================
// CLI Error handling
// ============================================================================

/// Exit code for CLI operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExitCode(pub i32);

impl ExitCode {
    pub const SUCCESS: ExitCode = ExitCode(0);
    pub const FAILURE: ExitCode = ExitCode(1);
}

/// Error type for CLI operations.
///
/// Contains a user-facing message and an exit code. The CLI entry point
/// catches these errors, prints the message, and exits with the code.
#[derive(Debug)]
pub struct CliError {
    /// User-facing error message (already formatted for display)
    pub message: String,
    /// Exit code to return to the shell
    pub exit_code: ExitCode,
}

impl CliError {
    pub fn new(message: impl Into<String>, exit_code: ExitCode) -> Self {
        Self {
            message: message.into(),
            exit_code,
        }
    }

    /// Create a failure error (exit code 1).
    pub fn failure(message: impl Into<String>) -> Self {
        Self::new(message, ExitCode::FAILURE)
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for CliError {}

/// Result type for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

const VERSION: &str = env!("CARGO_PKG_VERSION");

// ============================================================================
// Clap CLI definition
// ============================================================================

/// Top-down operator precedence parser
#[derive(Parser, Debug)]
#[command(name = "tdop")]
#[command(version = VERSION)]
#[command(about = "Parse a small imperative language and print its syntax tree", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Where the program text comes from.
#[derive(Args, Debug, Default)]
pub struct SourceArgs {
    /// Source file (default: the built-in sample program)
    #[arg(value_name = "FILE", conflicts_with = "code")]
    pub file: Option<PathBuf>,
    /// Inline source code
    #[arg(short = 'c', long = "command", value_name = "CODE")]
    pub code: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print the bracketed syntax tree
    Parse {
        #[command(flatten)]
        source: SourceArgs,
    },

    /// Print the syntax tree as a Graphviz digraph
    Dot {
        #[command(flatten)]
        source: SourceArgs,
        /// Name of the emitted digraph
        #[arg(long = "graph-name", value_name = "NAME", default_value = "ast")]
        graph_name: String,
    },

    /// Print the token stream (debug)
    Lex {
        #[command(flatten)]
        source: SourceArgs,
    },

    /// Parse a `select` or `update` statement
    Sql {
        /// Query text
        #[arg(short = 'c', long = "command", value_name = "QUERY")]
        query: String,
        /// Print the Graphviz digraph instead of the bracketed tree
        #[arg(long)]
        dot: bool,
    },
}

/// Run the CLI.
///
/// This is the only place where `process::exit` is called. All command
/// functions return `CliResult` and errors are handled here.
pub fn run() {
    let cli = Cli::parse();

    match execute(cli) {
        Ok(exit_code) => {
            if exit_code.0 != 0 {
                process::exit(exit_code.0);
            }
        }
        Err(e) => {
            if !e.message.is_empty() {
                eprintln!("{}", e.message);
            }
            process::exit(e.exit_code.0);
        }
    }
}

/// Dispatch a parsed command line.
pub fn execute(cli: Cli) -> CliResult<ExitCode> {
    let output = match cli.command {
        None => commands::dot_source(&SourceArgs::default(), "ast")?,
        Some(Command::Parse { source }) => commands::parse_source(&source)?,
        Some(Command::Dot { source, graph_name }) => commands::dot_source(&source, &graph_name)?,
        Some(Command::Lex { source }) => commands::lex_source(&source)?,
        Some(Command::Sql { query, dot }) => commands::sql_query(&query, dot)?,
    };
    println!("{output}");
    Ok(ExitCode::SUCCESS)
}
