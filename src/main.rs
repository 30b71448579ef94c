use std::error::Error;
use std::path::PathBuf;
use std::process;
use std::sync::Arc;

use clap::{Parser, ValueEnum};
use tracing::level_filters::LevelFilter;

use rusty_registry::logging::init_logging;
use rusty_registry::{run, run_async, AccountService, AccountsStore};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Mode {
    /// Read and handle operations on the current thread
    Sync,
    /// Stream operations through a reader task and a processor task
    Async,
}

/// Replays account operations from a CSV file and prints the responses as CSV.
#[derive(Parser, Debug)]
#[command(name = "rusty-registry")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// CSV file with columns op,id,email,username,credential,page,size
    input: PathBuf,

    /// Runner implementation
    #[arg(short, long, value_enum, default_value_t = Mode::Sync)]
    mode: Mode,

    /// Start from an empty store instead of the five seed accounts
    #[arg(long)]
    empty: bool,

    /// Log level used when RUST_LOG is not set (off, error, warn, info, debug, trace)
    #[arg(short, long, default_value = "warn")]
    log_level: LevelFilter,
}

fn main() {
    if let Err(err) = run_app(Args::parse()) {
        eprintln!("Error: {}", err);
        process::exit(1);
    }
}

fn run_app(args: Args) -> Result<(), Box<dyn Error + Send + Sync>> {
    init_logging(args.log_level)?;

    let store = if args.empty {
        AccountsStore::new()
    } else {
        AccountsStore::seeded()
    };
    let service = AccountService::new(Arc::new(store));

    match args.mode {
        Mode::Sync => run(&args.input, std::io::stdout(), &service)
            .map_err(|err| -> Box<dyn Error + Send + Sync> { err.to_string().into() }),
        Mode::Async => tokio::runtime::Runtime::new()?.block_on(run_async(
            args.input,
            std::io::stdout(),
            service,
        )),
    }
}
