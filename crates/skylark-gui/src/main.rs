use anyhow::Result;
use clap::Parser;
use skylark_core::ProfileStore;
use std::path::PathBuf;

mod app;
mod worker;

#[derive(Parser)]
#[command(name = "skylark")]
#[command(author, version, about, long_about = None)]
#[command(
    about = "Desktop launcher for automated mobile-web browser sessions",
    long_about = "Skylark loads per-platform test parameters from an INI config file, \
                  lets you edit them for one run, and launches a single automated \
                  Chromium session against the fixed target page."
)]
struct Cli {
    /// Path to the profile config file
    #[arg(short, long, default_value = "config.ini", value_name = "FILE")]
    config: PathBuf,

    /// Explicit path to the Chromium executable (overrides the bundled one)
    #[arg(long, value_name = "FILE")]
    browser_path: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose);

    let store = ProfileStore::new(&cli.config);
    let profiles = store.load_or_init()?;
    tracing::info!(path = %store.path().display(), "profiles loaded");

    app::run_gui(profiles, cli.browser_path)
        .map_err(|e| anyhow::anyhow!("failed to run the GUI: {e}"))
}

fn init_logging(verbose: bool) {
    use tracing_subscriber::EnvFilter;

    let filter = if verbose {
        EnvFilter::new("skylark=debug,skylark_gui=debug,skylark_core=debug,skylark_browser=debug")
    } else {
        EnvFilter::new("skylark=info,skylark_gui=info,skylark_core=info,skylark_browser=info")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .init();
}
