//! Limited-time offer countdown shown in the status bar.
//!
//! The offer always ends `duration` after it started. The expiry is persisted
//! so restarting the app keeps counting down instead of starting over; once it
//! passes, a new period begins and is persisted again.

pub mod store;

pub use store::{ExpiryStore, FileExpiryStore, MemoryExpiryStore};

use chrono::{DateTime, TimeDelta, Utc};
use std::path::PathBuf;
use thiserror::Error;
use tracing::{debug, info, warn};

/// Default offer period: one hour.
pub const DEFAULT_PROMO_DURATION: TimeDelta = TimeDelta::hours(1);

/// Default location of the persisted expiry: `<state_dir>/loopreel/promo.json`.
///
/// Falls back to the working directory when no state dir is known.
pub fn default_promo_state_path() -> PathBuf {
    dirs::state_dir()
        .map(|dir| dir.join("loopreel").join("promo.json"))
        .unwrap_or_else(|| PathBuf::from("loopreel-promo.json"))
}

/// Errors from promo expiry persistence.
#[derive(Debug, Error)]
pub enum PromoError {
    /// Stored expiry exists but could not be read.
    #[error("Failed to read promo state at {path:?}: {source}")]
    Read {
        /// State file path.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Expiry could not be written.
    #[error("Failed to write promo state at {path:?}: {source}")]
    Write {
        /// State file path.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Expiry could not be encoded.
    #[error("Failed to encode promo state: {0}")]
    Encode(#[from] serde_json::Error),
}

/// Self-renewing countdown to a persisted expiry.
#[derive(Debug)]
pub struct PromoCountdown {
    store: Box<dyn ExpiryStore>,
    duration: TimeDelta,
    expires_at: DateTime<Utc>,
}

impl PromoCountdown {
    /// Resume the stored countdown if it is still in the future, otherwise start
    /// a new period at `now` and persist it.
    ///
    /// Non-positive durations, and durations that push the expiry past the
    /// representable date range, fall back to [`DEFAULT_PROMO_DURATION`].
    ///
    /// # Errors
    ///
    /// Returns `PromoError` if the store cannot be read or written.
    pub fn load_or_start(
        store: Box<dyn ExpiryStore>,
        duration: TimeDelta,
        now: DateTime<Utc>,
    ) -> Result<Self, PromoError> {
        let duration = if duration > TimeDelta::zero() {
            duration
        } else {
            DEFAULT_PROMO_DURATION
        };

        let mut countdown = Self {
            store,
            duration,
            expires_at: now,
        };

        match countdown.store.load()? {
            Some(stored) if stored > now => {
                debug!(expires_at = %stored, "Resuming stored promo countdown");
                countdown.expires_at = stored;
            }
            _ => countdown.renew(now)?,
        }

        Ok(countdown)
    }

    /// When the current period ends.
    pub fn expires_at(&self) -> DateTime<Utc> {
        self.expires_at
    }

    /// Length of one period.
    pub fn duration(&self) -> TimeDelta {
        self.duration
    }

    /// Time left, never negative.
    pub fn remaining(&self, now: DateTime<Utc>) -> TimeDelta {
        (self.expires_at - now).max(TimeDelta::zero())
    }

    /// Renew the period if it has run out. Returns true when a new period began.
    ///
    /// # Errors
    ///
    /// Returns `PromoError` if the new expiry cannot be persisted; the new
    /// expiry is still used in memory.
    pub fn tick(&mut self, now: DateTime<Utc>) -> Result<bool, PromoError> {
        if self.expires_at > now {
            return Ok(false);
        }
        self.renew(now)?;
        Ok(true)
    }

    /// Remaining time formatted as `MM:SS`.
    pub fn display(&self, now: DateTime<Utc>) -> String {
        format_remaining(self.expires_at - now)
    }

    fn renew(&mut self, now: DateTime<Utc>) -> Result<(), PromoError> {
        self.expires_at = match now.checked_add_signed(self.duration) {
            Some(expires_at) => expires_at,
            None => {
                warn!(
                    duration_secs = self.duration.num_seconds(),
                    "Promo period out of range; using the default period"
                );
                self.duration = DEFAULT_PROMO_DURATION;
                now.checked_add_signed(DEFAULT_PROMO_DURATION).unwrap_or(now)
            }
        };
        info!(expires_at = %self.expires_at, "Promo period started");
        self.store.save(self.expires_at)
    }
}

/// Format a remaining duration as `MM:SS`.
///
/// Seconds are floored and negative values show as `00:00`. Minutes are not
/// wrapped into hours, so 90 minutes shows as `90:00`.
pub fn format_remaining(remaining: TimeDelta) -> String {
    let total_seconds = remaining.num_seconds().max(0);
    format!("{:02}:{:02}", total_seconds / 60, total_seconds % 60)
}
