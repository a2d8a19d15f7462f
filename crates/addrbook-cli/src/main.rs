mod commands;
mod dispatcher;
mod error;
mod grammar;
mod render;
mod repl;
mod session;

use anyhow::{Context as _, Result};
use clap::Parser;
use std::io::{self, IsTerminal};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::debug;

use crate::error::{exit_code_for, report_error};
use crate::repl::{Repl, ReplOptions};
use crate::session::Session;
use addrbook_config as config;
use addrbook_core::local_today;
use addrbook_store::{paths, BookFile};

#[derive(Debug, Parser)]
#[command(name = "addrbook", version, about = "Interactive address book")]
struct Cli {
    /// Config file (default: $XDG_CONFIG_HOME/addrbook/config.toml)
    #[arg(long)]
    config: Option<PathBuf>,
    /// Session file; the extension picks the format (.json, .db, .csv)
    #[arg(long)]
    book: Option<PathBuf>,
    #[arg(long, short)]
    verbose: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let verbose = cli.verbose;
    init_logging(verbose);
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            report_error(&err, verbose);
            exit_code_for(&err)
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let Cli {
        config: config_path,
        book,
        verbose,
    } = cli;

    let app_config = config::load(config_path.clone()).with_context(|| "load config")?;
    if verbose {
        match config::resolve_config_path(config_path) {
            Ok(path) => {
                if path.exists() {
                    debug!(path = %path.display(), "config resolved");
                } else {
                    debug!(path = %path.display(), "config missing, using defaults");
                }
            }
            Err(err) => {
                debug!(error = %err, "config unavailable");
            }
        }
    }

    let book_path = paths::resolve_book_path(book.or_else(|| app_config.book_path.clone()))
        .with_context(|| "resolve address book path")?;
    debug!(path = %book_path.display(), "address book path resolved");

    let book_file = BookFile::new(&book_path)
        .with_context(|| format!("open address book {}", book_path.display()))?;
    let mut session = Session::open(book_file, app_config.page_size, local_today())
        .with_context(|| format!("load address book {}", book_path.display()))?;

    let stdin = io::stdin();
    let options = ReplOptions {
        pause_between_pages: app_config.pause_between_pages && stdin.is_terminal(),
        ..ReplOptions::default()
    };
    Repl::new(&mut session, stdin.lock(), io::stdout().lock(), options)
        .run()
        .with_context(|| "read commands")?;
    Ok(())
}

fn init_logging(verbose: bool) {
    use tracing_subscriber::{fmt, EnvFilter};
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let _ = fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .without_time()
        .try_init();
}
