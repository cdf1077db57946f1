//! Monkey
//!
//! This binary is the driver for the Monkey interpreter: it parses CLI
//! arguments, sets up logging, and either runs a source file once or starts
//! the interactive REPL.

mod repl;

use std::error::Error;
use std::fs;

use clap::{Parser as ClapParser, ValueEnum};
use log::error;
use monkey_lang::object::Object;

/// CLI surface: `monkey [OPTIONS] [FILE]`.
#[derive(ClapParser, Debug)]
#[command(author, version, about)]
struct Cli {
    /// Path to a Monkey source file to execute. Without this, starts the
    /// REPL.
    file: Option<std::path::PathBuf>,

    /// Log verbosity.
    #[arg(value_enum, short, long, default_value_t = LogLevel::default())]
    verbosity: LogLevel,
}

/// Mirrors the compiler CLI's own `LogLevel`: only critical errors are
/// logged by default, with `-v debug`/`-v trace` available for diagnosing
/// the parser's recovery behavior.
#[derive(ValueEnum, Clone, Default, Debug)]
enum LogLevel {
    #[default]
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<&LogLevel> for log::Level {
    fn from(value: &LogLevel) -> Self {
        match value {
            LogLevel::Error => log::Level::Error,
            LogLevel::Warn => log::Level::Warn,
            LogLevel::Info => log::Level::Info,
            LogLevel::Debug => log::Level::Debug,
            LogLevel::Trace => log::Level::Trace,
        }
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    let args = Cli::parse();
    simple_logger::init_with_level((&args.verbosity).into()).unwrap();

    match args.file {
        Some(path) => run_file(&path),
        None => {
            repl::start();
            Ok(())
        }
    }
}

/// File I/O failures (missing file, permission denied, invalid UTF-8)
/// propagate as an ordinary `io::Error` via `?` — they're a host-level
/// concern, not one of the language's own error domains. A clean parse/eval
/// that surfaces a parser or evaluation error exits the process directly,
/// the same way the teacher's loader errors do in its own `main`.
fn run_file(path: &std::path::Path) -> Result<(), Box<dyn Error>> {
    let source = fs::read_to_string(path)?;

    match monkey_lang::run(&source) {
        Ok(Object::Error(message)) => {
            error!("ERROR: {message}");
            std::process::exit(1);
        }
        Ok(result) => {
            if !matches!(result, Object::Null) {
                println!("{result}");
            }
            Ok(())
        }
        Err(errors) => {
            for message in errors {
                error!("{message}");
            }
            std::process::exit(1);
        }
    }
}
