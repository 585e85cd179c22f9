//! shoestock Binary
//!
//! Starts the interactive inventory menu.

use std::io;

use clap::Parser;
use shoestock::config::SyncStrategy;
use shoestock::menu::Shell;
use shoestock::{Config, Inventory};
use tracing_subscriber::{fmt, EnvFilter};

/// shoestock
#[derive(Parser, Debug)]
#[command(name = "shoestock")]
#[command(about = "Interactive inventory tracker for shoe stock")]
#[command(version)]
struct Args {
    /// Inventory file
    #[arg(short, long, default_value = "inventory.txt")]
    file: String,

    /// Currency symbol shown before costs and values
    #[arg(long, default_value = shoestock::record::DEFAULT_CURRENCY)]
    currency: String,

    /// Skip fsync after each file write
    #[arg(long)]
    no_sync: bool,

    /// Log filter used when RUST_LOG is not set
    #[arg(long, default_value = "warn,shoestock=info")]
    log_level: String,
}

fn main() {
    let args = Args::parse();

    // Logs go to stderr so they stay out of the menu on stdout
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&args.log_level));

    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .init();

    tracing::debug!("shoestock v{}", shoestock::VERSION);
    tracing::debug!("Inventory file: {}", args.file);

    let sync_strategy = if args.no_sync {
        SyncStrategy::None
    } else {
        SyncStrategy::EveryWrite
    };

    let config = Config::builder()
        .inventory_path(&args.file)
        .currency_symbol(args.currency)
        .sync_strategy(sync_strategy)
        .build();

    let mut inventory = Inventory::new(config);

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut shell = Shell::new(&mut inventory, stdin.lock(), stdout.lock());

    if let Err(e) = shell.run() {
        tracing::error!("Terminal error: {}", e);
        std::process::exit(1);
    }
}
