mod actions;
mod error;
mod resize;
mod transform;

use std::process::exit;
use tracing::{debug, error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use config::Config;
use actions::*;

fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "circularize=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    debug!("Logging initialized...");

    let config = match Config::new() {
        Ok(c) => c,
        Err(e) => {
            error!("Failed to init config: {}", e);
            exit(1)
        }
    };

    debug!("Config loaded...");

    let source = config.source_path();

    if !source.exists() {
        error!("Source image {} not found", source.display());
        exit(1)
    }

    let targets = config.target_paths();

    info!("Creating {} circular icon(s) from {}", targets.len(), source.display());

    // Each target loads its own copy of the source, a failure doesn't stop the next one
    for target in targets.iter() {
        make_circle(&source, target, config.size);
    }
}
