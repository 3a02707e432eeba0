//! The microml toolchain CLI.
//!
//! Provides `flc run <file>` (parse, type-check, and interpret every
//! declaration in a file) and `flc build <file> [-o out.c]` (parse,
//! type-check, and lower every declaration to C text), grounded in
//! `snowc::main`'s `Cli`/`Commands`/`build`/`report_diagnostics` shape and
//! `main.py`'s file-mode compile loop.

use std::path::{Path, PathBuf};
use std::process;

use ariadne::{Label, Report, ReportKind, Source};
use clap::{Parser, Subcommand};
use fl_common::error::CoreError;
use fl_driver::Driver;

#[derive(Parser)]
#[command(name = "flc", version, about = "The microml toolchain")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Parse, type-check, and interpret every declaration in a source file
    Run {
        /// Path to a microml source file
        file: PathBuf,
    },
    /// Parse, type-check, and lower every declaration to C text
    Build {
        /// Path to a microml source file
        file: PathBuf,

        /// Output path for the generated C text (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Run { file } => run(&file),
        Commands::Build { file, output } => build(&file, output.as_deref()),
    };

    if let Err(code) = result {
        process::exit(code);
    }
}

/// Parse and type-check every declaration in `file`, per `main.py`'s
/// file-mode loop: repeatedly compile from the front of the remaining
/// source and slice past what was consumed. File mode aborts on the first
/// error, leaving every declaration compiled up to that point in place
/// only in the caller's mind -- the process exits before using any of it.
fn compile_file(file: &Path) -> Result<Driver, i32> {
    let source = std::fs::read_to_string(file).map_err(|e| {
        eprintln!("error: failed to read '{}': {e}", file.display());
        1
    })?;

    let mut driver = Driver::new(true);
    let mut remaining = source.as_str();
    while !remaining.trim().is_empty() {
        match driver.compile(remaining) {
            Ok(outcome) => {
                if outcome.redefined {
                    eprintln!("warning: redefinition of {}", outcome.name);
                }
                remaining = &remaining[outcome.stop as usize..];
            }
            Err(err) => {
                report_error(&source, &err);
                return Err(1);
            }
        }
    }
    Ok(driver)
}

fn run(file: &Path) -> Result<(), i32> {
    let driver = compile_file(file)?;
    fl_interp::interpret(driver.code(), driver.main()).map_err(|err| {
        eprintln!("{}", CoreError::from(err));
        1
    })
}

fn build(file: &Path, output: Option<&Path>) -> Result<(), i32> {
    let driver = compile_file(file)?;
    let program = fl_lower::lower_program(driver.code(), driver.main()).map_err(|err| {
        eprintln!("compiler: {err}");
        1
    })?;

    match output {
        Some(path) => std::fs::write(path, &program).map_err(|e| {
            eprintln!("error: failed to write '{}': {e}", path.display());
            1
        })?,
        None => print!("{program}"),
    }

    Ok(())
}

/// Render one compile-phase error via `ariadne` when it carries a byte
/// offset, falling back to the plain `module: message` form otherwise (an
/// unbound-name or similar semantic error has no single token to point at).
fn report_error(source: &str, err: &CoreError) {
    match err.offset {
        Some(start) => {
            let start = start as usize;
            let end = (start + 1).min(source.len()).max(start);
            let _ = Report::<std::ops::Range<usize>>::build(ReportKind::Error, start..end)
                .with_message(err.module.to_string())
                .with_label(Label::new(start..end).with_message(&err.message))
                .finish()
                .eprint(Source::from(source));
        }
        None => eprintln!("{err}"),
    }
}
