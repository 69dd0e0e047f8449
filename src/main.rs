//! dsbox binary.
//!
//! Loads the registry from `--file`, then either runs a single `--query` or
//! an interactive prompt. Every modifying command is written back to the
//! file immediately.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use dsbox::command::{Outcome, Session, help};
use dsbox::config::{DEFAULT_CAPACITY, StoreConfig};
use dsbox::store::Registry;
use tracing::{debug, info};

/// Command line arguments.
#[derive(Parser, Debug)]
#[command(name = "dsbox")]
#[command(about = "Create, edit and persist named collections of string values")]
struct Args {
    /// Storage file, loaded on start and rewritten after every change
    #[arg(short, long, value_name = "PATH")]
    file: PathBuf,

    /// Run a single command instead of the interactive prompt
    #[arg(short, long, value_name = "CMD")]
    query: Option<String>,

    /// Maximum number of structures; a file holding more is refused
    #[arg(short, long, default_value_t = DEFAULT_CAPACITY)]
    capacity: usize,

    /// Verbose logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> ExitCode {
    let args = Args::parse();

    setup_tracing(args.verbose);

    let registry = Registry::with_config(StoreConfig::default().with_capacity(args.capacity));
    let mut session = match Session::open(&args.file, registry) {
        Ok(session) => session,
        Err(err) => {
            eprintln!("ERROR: {err}");
            return ExitCode::FAILURE;
        }
    };
    info!(path = %session.path().display(), entries = session.registry().len(), "Session opened");

    let result = match args.query {
        Some(query) => {
            run_line(&mut session, &query);
            Ok(())
        }
        None => repl(&mut session),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("ERROR: {err}");
            ExitCode::FAILURE
        }
    }
}

/// Prompt loop until `QUIT` or end of input.
fn repl(session: &mut Session) -> io::Result<()> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();

    for line in help::help_lines() {
        writeln!(stdout, "{line}")?;
    }

    let mut input = stdin.lock();
    let mut line = String::new();
    loop {
        write!(stdout, "> ")?;
        stdout.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            debug!("End of input");
            break;
        }

        let line = line.trim_end_matches(['\n', '\r']);
        if line.trim().is_empty() {
            continue;
        }
        if run_line(session, line).is_some_and(|outcome| outcome.quit) {
            break;
        }
    }
    Ok(())
}

/// Runs one line, printing its output or its error.
fn run_line(session: &mut Session, line: &str) -> Option<Outcome> {
    match session.run_line(line) {
        Ok(outcome) => {
            for out in &outcome.output {
                println!("{out}");
            }
            Some(outcome)
        }
        Err(err) => {
            eprintln!("ERROR: {err}");
            None
        }
    }
}

fn setup_tracing(verbose: bool) {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_env("DSBOX_LOG").unwrap_or_else(|_| {
        if verbose {
            EnvFilter::new("dsbox=debug")
        } else {
            EnvFilter::new("dsbox=warn")
        }
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}
