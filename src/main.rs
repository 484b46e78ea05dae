//! Replay viewer — settings bootstrap entry point.
//!
//! Startup sequence:
//!   1. Resolve settings (process env over `.env` dotfile over defaults)
//!      and create the cache directory
//!   2. Init logger at the configured level
//!   3. Log the resolved record and print a status line

use tracing::info;

use replay_viewer::{config, error::AppError, logger};

fn main() {
    if let Err(e) = run() {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), AppError> {
    let settings = config::resolve()?;

    logger::init(&settings.log_level)?;

    info!(
        export_path = %settings.export_path.display(),
        cache_dir = %settings.cache_dir.display(),
        bind = %settings.bind_addr(),
        public_hosting = settings.public_hosting_mode,
        "settings resolved"
    );

    println!(
        "✓ Viewer configured: listening on {}, {} featured datasets",
        settings.bind_addr(),
        settings.featured_datasets.len()
    );

    Ok(())
}
