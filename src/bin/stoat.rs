// src/bin/stoat.rs

use std::io::Read;
use std::process::ExitCode;

use clap::Parser as ClapParser;
use miette::NamedSource;
use tracing_subscriber::EnvFilter;

use stoat::cli::{AstFormat, Cli, Commands};
use stoat::errors::render_to_stderr;
use stoat::frontend::{JsonProjector, Parser, SexprPrinter};

fn main() -> ExitCode {
    // Initialize tracing if STOAT_LOG is set
    if let Ok(filter) = EnvFilter::try_from_env("STOAT_LOG") {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(true)
            .with_level(true)
            .with_writer(std::io::stderr)
            .init();
    }

    let cli = Cli::parse();
    match cli.command {
        Commands::Check { files } => check_files(&files),
        Commands::Ast { file, format } => print_ast(&file, format),
    }
}

fn check_files(files: &[String]) -> ExitCode {
    let mut had_error = false;
    for path in files {
        let source = match read_source(path) {
            Ok(s) => s,
            Err(e) => {
                eprintln!("error: could not read {}: {}", path, e);
                had_error = true;
                continue;
            }
        };
        if check_source(path, &source).is_err() {
            had_error = true;
        }
    }

    if had_error {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}

fn read_source(path: &str) -> std::io::Result<String> {
    if path == "-" {
        let mut source = String::new();
        std::io::stdin().read_to_string(&mut source)?;
        Ok(source)
    } else {
        std::fs::read_to_string(path)
    }
}

/// Parse one source; render the first diagnostic on failure.
fn check_source(path: &str, source: &str) -> Result<(), ()> {
    let display_path = if path == "-" { "<stdin>" } else { path };
    let mut parser = Parser::new(source);

    // Lexer errors come first: they point at the malformed literal
    // itself rather than the parse rule that tripped over it.
    if let Some(lex_error) = parser.lexer_errors().first() {
        let report = miette::Report::new(lex_error.clone())
            .with_source_code(NamedSource::new(display_path, source.to_string()));
        render_to_stderr(report.as_ref());
        return Err(());
    }

    match parser.parse_module() {
        Ok(_) => Ok(()),
        Err(e) => {
            let report = miette::Report::new(e.error)
                .with_source_code(NamedSource::new(display_path, source.to_string()));
            render_to_stderr(report.as_ref());
            Err(())
        }
    }
}

fn print_ast(file: &std::path::Path, format: AstFormat) -> ExitCode {
    let path = file.display().to_string();
    let source = match std::fs::read_to_string(file) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("error: could not read {}: {}", path, e);
            return ExitCode::FAILURE;
        }
    };

    let mut parser = Parser::new(&source);
    if let Some(lex_error) = parser.lexer_errors().first() {
        let report = miette::Report::new(lex_error.clone())
            .with_source_code(NamedSource::new(path.clone(), source.to_string()));
        render_to_stderr(report.as_ref());
        return ExitCode::FAILURE;
    }
    let module = match parser.parse_module() {
        Ok(m) => m,
        Err(e) => {
            let report = miette::Report::new(e.error)
                .with_source_code(NamedSource::new(path.clone(), source.to_string()));
            render_to_stderr(report.as_ref());
            return ExitCode::FAILURE;
        }
    };

    match format {
        AstFormat::Sexpr => {
            println!("{}", SexprPrinter::new(parser.interner()).module(&module));
        }
        AstFormat::Json => {
            let value = JsonProjector::new(parser.interner()).module(&module);
            match serde_json::to_string_pretty(&value) {
                Ok(text) => println!("{}", text),
                Err(e) => {
                    eprintln!("error: could not serialize AST: {}", e);
                    return ExitCode::FAILURE;
                }
            }
        }
    }
    ExitCode::SUCCESS
}
