use std::io::ErrorKind;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, ValueEnum};
use color_eyre::Result;
use simplelog::{ColorChoice, LevelFilter, TermLogger, TerminalMode};
use truth_rs::Config;

#[derive(Parser)]
#[command(author, version, about = "Truth tables for a tiny boolean-logic language")]
struct Cli {
    /// Program file
    #[arg(value_name = "FILE")]
    file: PathBuf,

    /// Enumerate every assignment in show_ones instead of pruning
    #[arg(long)]
    no_prune: bool,

    /// Print the variable names above each table
    #[arg(long)]
    header: bool,

    /// Verbosity of the log written to stderr
    #[arg(long, value_enum, default_value_t = LogLevel::Warn)]
    log_level: LogLevel,
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, ValueEnum)]
enum LogLevel {
    Off,
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Off => LevelFilter::Off,
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Trace => LevelFilter::Trace,
        }
    }
}

fn main() -> Result<ExitCode> {
    color_eyre::install()?;
    let cli = Cli::parse();

    TermLogger::init(
        cli.log_level.into(),
        simplelog::Config::default(),
        TerminalMode::Stderr,
        ColorChoice::Auto,
    )?;

    let source = match std::fs::read_to_string(&cli.file) {
        Ok(source) => source,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            eprintln!("Error: File '{}' not found.", cli.file.display());
            return Ok(ExitCode::FAILURE);
        }
        Err(e) => {
            eprintln!("Error during execution: {}", e);
            return Ok(ExitCode::FAILURE);
        }
    };

    let config = Config::default().with_pruning(!cli.no_prune).with_header(cli.header);
    match truth_rs::run_with_config(&source, config) {
        Ok(output) => {
            print!("{}", output);
            Ok(ExitCode::SUCCESS)
        }
        Err(e) => {
            eprintln!("Error during execution: {}", e);
            Ok(ExitCode::FAILURE)
        }
    }
}
