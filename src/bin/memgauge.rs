//! memgauge - live terminal gauge of a process's GC CPU fraction.
//!
//! Usage:
//!   memgauge                                         # synthetic data
//!   memgauge --url http://localhost:6060/debug/vars  # sample a live process
//!   memgauge -i 2 --log-file memgauge.log -vv        # 2 second interval, debug logs

use std::fs::OpenOptions;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use std::time::Duration;

use clap::Parser;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::filter::LevelFilter;

use memgauge::Config;
use memgauge::source::{HttpSource, RandomSource, StatsSource};
use memgauge::tui::Dashboard;

/// Live terminal gauge of a process's GC CPU fraction.
#[derive(Parser)]
#[command(name = "memgauge", about = "GC CPU fraction dashboard", version)]
struct Args {
    /// Stats endpoint to sample. Without it, synthetic values are shown.
    #[arg(long, value_name = "URL")]
    url: Option<String>,

    /// Sampling interval in seconds.
    #[arg(short, long, default_value = "1", value_parser = clap::value_parser!(u64).range(1..))]
    interval: u64,

    /// Timeout for a single stats request, in seconds.
    #[arg(long, default_value = "5", value_parser = clap::value_parser!(u64).range(1..))]
    timeout: u64,

    /// Write logs to this file. The dashboard owns the terminal, so logs are
    /// discarded when no file is given.
    #[arg(long, value_name = "PATH")]
    log_file: Option<PathBuf>,

    /// Increase logging verbosity (-v info, -vv debug, -vvv trace). Default is warn.
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() {
    let args = Args::parse();

    if let Some(ref path) = args.log_file
        && let Err(e) = init_logging(path, args.verbose)
    {
        eprintln!("Error: failed to open log file '{}': {}", path.display(), e);
        std::process::exit(1);
    }

    let config = Config {
        tick_rate: Duration::from_secs(args.interval),
        load_timeout: Duration::from_secs(args.timeout),
    };

    let source: Box<dyn StatsSource> = match args.url {
        Some(url) => {
            let client = match reqwest::blocking::Client::builder()
                .user_agent(concat!("memgauge/", env!("CARGO_PKG_VERSION")))
                .build()
            {
                Ok(client) => client,
                Err(e) => {
                    eprintln!("Error: failed to build HTTP client: {}", e);
                    std::process::exit(1);
                }
            };
            Box::new(HttpSource::with_client(client, url))
        }
        None => Box::new(RandomSource::new()),
    };

    if let Err(e) = memgauge::tui::run(Dashboard::new, source, config) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn init_logging(path: &Path, verbose: u8) -> io::Result<()> {
    let level = match verbose {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    };

    let file = OpenOptions::new().create(true).append(true).open(path)?;

    let filter = EnvFilter::builder()
        .with_default_directive(level.into())
        .from_env_lossy();

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(false)
        .init();

    Ok(())
}
