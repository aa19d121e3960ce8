use std::{io, path::PathBuf, process::ExitCode};

use assignlang::{
    Outcome,
    io::{FileSource, ReaderSource, StdoutSink},
    run,
};
use clap::{ArgAction, Parser};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// assignlang runs a program of integer assignments and prints the final value
/// of every variable.
///
/// Without FILE, the program is read from standard input up to the end of
/// input or the first blank line.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Exit with status 1 when the program fails. By default the exit status
    /// is 0 even after an error.
    #[arg(short, long)]
    strict_exit: bool,

    /// Increases the verbosity of diagnostics on stderr. Ignored when
    /// `RUST_LOG` is set.
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,

    /// Reads the program from this file instead of standard input.
    file: Option<PathBuf>,
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::registry().with(fmt::layer().with_writer(std::io::stderr)
                                                    .with_target(false))
                                  .with(filter)
                                  .init();
}

/// Maps the result of a run to the process exit status.
///
/// A failed program exits with 0, or with 1 under `--strict-exit`. I/O
/// failures always exit with 2.
fn exit_code(outcome: &io::Result<Outcome>, strict: bool) -> u8 {
    match outcome {
        Ok(Outcome::Failed(_)) if strict => 1,
        Ok(_) => 0,
        Err(_) => 2,
    }
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_tracing(args.verbose);

    let mut sink = StdoutSink;
    let outcome = match &args.file {
        Some(path) => run(&mut FileSource::new(path), &mut sink),
        None => run(&mut ReaderSource::stdin(), &mut sink),
    };

    if let Err(e) = &outcome {
        match &args.file {
            Some(path) => eprintln!("Failed to read '{}' or write the result: {e}",
                                    path.display()),
            None => eprintln!("Failed to read standard input or write the result: {e}"),
        }
    }

    ExitCode::from(exit_code(&outcome, args.strict_exit))
}
