use std::{fs, io, path::PathBuf, process::ExitCode};

use clap::Parser;
use tracing_subscriber::{filter::LevelFilter, prelude::*};

use dmgen::{generate, print_error, Emitter, EmitterOptions, Result};

/// Generates interpreter handlers and dispatch tables for every Game Boy opcode.
#[derive(Debug, Parser)]
#[command(version)]
struct Args {
    /// Output file for the table and handler declarations.
    declarations: PathBuf,

    /// Output file for the table initialization and handler bodies.
    definitions: PathBuf,

    /// Type the handlers are implemented on.
    #[arg(long, default_value = "Cpu")]
    cpu_type: String,

    #[arg(long, default_value = "OpcodeHandlers")]
    handlers_trait: String,

    #[arg(long, default_value = "DispatchTables")]
    tables_type: String,

    /// More logging, repeat for more.
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

impl Args {
    fn level(&self) -> LevelFilter {
        match self.verbose {
            0 => LevelFilter::WARN,
            1 => LevelFilter::INFO,
            2 => LevelFilter::DEBUG,
            _ => LevelFilter::TRACE,
        }
    }

    fn options(&self) -> EmitterOptions {
        EmitterOptions {
            cpu_type: self.cpu_type.clone(),
            handlers_trait: self.handlers_trait.clone(),
            tables_type: self.tables_type.clone(),
        }
    }
}

fn run(args: &Args) -> Result<()> {
    let mut emitter = Emitter::new(args.options());
    generate(&mut emitter)?;
    let artifacts = emitter.finish();

    fs::write(&args.declarations, artifacts.declarations)?;
    fs::write(&args.definitions, artifacts.definitions)?;

    tracing::info!(
        declarations = %args.declarations.display(),
        definitions = %args.definitions.display(),
        "wrote artifacts"
    );
    Ok(())
}

fn main() -> ExitCode {
    let args = Args::parse();

    let stderr_format = tracing_subscriber::fmt::layer().with_writer(io::stderr);
    tracing_subscriber::registry()
        .with(stderr_format.with_filter(args.level()))
        .init();

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            print_error(&e);
            ExitCode::FAILURE
        }
    }
}
