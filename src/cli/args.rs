// src/cli/args.rs

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Stoat programming language front end
#[derive(Parser)]
#[command(name = "stoat")]
#[command(version = "0.1.0")]
#[command(about = "Stoat programming language front end", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Parse Stoat source files and report diagnostics (use "-" for stdin)
    Check {
        /// Paths to the .stoat files to check
        #[arg(value_name = "FILES", required = true)]
        files: Vec<String>,
    },
    /// Parse one file and print its AST projection
    Ast {
        /// Path to the .stoat file
        #[arg(value_name = "FILE")]
        file: PathBuf,
        /// Output projection
        #[arg(long, value_enum, default_value = "sexpr")]
        format: AstFormat,
    },
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum AstFormat {
    Sexpr,
    Json,
}
