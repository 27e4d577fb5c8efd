//! loopreel - Entry Point

use chrono::{TimeDelta, Utc};
use clap::Parser;
use loopreel::config::{self, CliOverrides, ResolvedConfig};
use loopreel::model::AppError;
use loopreel::promo::{
    ExpiryStore, FileExpiryStore, MemoryExpiryStore, PromoCountdown, DEFAULT_PROMO_DURATION,
};
use loopreel::view::{self, ColorConfig, ViewerOptions};
use std::path::PathBuf;
use tracing::{info, warn};

/// loopreel - endless showcase carousel for the terminal
#[derive(Parser, Debug)]
#[command(name = "loopreel")]
#[command(version)]
#[command(about = "Terminal showcase carousel with an infinite-scroll illusion")]
pub struct Args {
    /// Path to JSONL item catalog (reads from stdin if not provided)
    pub file: Option<PathBuf>,

    /// Path to configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Auto-advance cadence in milliseconds (must be positive)
    #[arg(long, value_parser = clap::value_parser!(u64).range(1..))]
    pub cadence_ms: Option<u64>,

    /// Start with auto-advance off
    #[arg(long)]
    pub no_autoplay: bool,

    /// Hide the promo countdown
    #[arg(long)]
    pub no_promo: bool,

    /// Disable colors
    #[arg(long)]
    pub no_color: bool,
}

impl Args {
    fn cli_overrides(&self) -> CliOverrides {
        CliOverrides {
            cadence_ms: self.cadence_ms,
            no_autoplay: self.no_autoplay,
            no_promo: self.no_promo,
        }
    }
}

/// Load configuration with full precedence chain:
/// Defaults → Config File → Env Vars → CLI Args, then range checks.
fn resolve_config(args: &Args) -> Result<ResolvedConfig, AppError> {
    let config_file = config::load_config_with_precedence(args.config.clone())?;
    let merged = config::merge_config(config_file);
    let with_env = config::apply_env_overrides(merged);
    let resolved = config::apply_cli_overrides(with_env, args.cli_overrides());
    Ok(config::validate_config(resolved)?)
}

/// Start the promo countdown, falling back to an in-memory expiry when the
/// state file cannot be used.
fn start_promo(config: &ResolvedConfig) -> Result<PromoCountdown, AppError> {
    let duration = TimeDelta::from_std(config.promo_duration).unwrap_or(DEFAULT_PROMO_DURATION);
    let now = Utc::now();

    let store: Box<dyn ExpiryStore> =
        Box::new(FileExpiryStore::new(config.promo_state_path.clone()));
    match PromoCountdown::load_or_start(store, duration, now) {
        Ok(countdown) => Ok(countdown),
        Err(e) => {
            warn!(
                error = %e,
                path = %config.promo_state_path.display(),
                "Promo state file unusable; countdown will not persist"
            );
            Ok(PromoCountdown::load_or_start(
                Box::new(MemoryExpiryStore::default()),
                duration,
                now,
            )?)
        }
    }
}

fn run(args: Args) -> Result<(), AppError> {
    let config = resolve_config(&args)?;

    loopreel::logging::init(&config.log_file_path)?;

    info!(
        config = ?config,
        "Configuration loaded and resolved"
    );

    let source = loopreel::source::detect_catalog_source(args.file.clone())?;
    let source_label = source.describe();
    let catalog = source.load()?;

    let promo = if config.promo_enabled {
        Some(start_promo(&config)?)
    } else {
        None
    };

    let options = ViewerOptions {
        carousel: config.carousel_options(),
        autoplay: config.autoplay,
        colors: ColorConfig::from_env_and_args(args.no_color),
        source_label,
        promo,
    };

    view::run_with_source(catalog.items, options)?;
    Ok(())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    run(args)?;
    Ok(())
}
