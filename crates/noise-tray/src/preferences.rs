//! Preferences surface.
//!
//! Settings live in the TOML config file; the Preferences menu entry opens
//! it with the desktop's default handler. The surface also owns the
//! sleep-timer request path back into the controller.

use crate::{AppCommand, AppError, AppResult};

use std::{panic::Location, path::PathBuf};

use error_location::ErrorLocation;
use tokio::sync::mpsc;
use tracing::{info, instrument, warn};

/// Settings surface of the indicator.
pub struct Preferences {
    config_path: PathBuf,
    command_tx: mpsc::Sender<AppCommand>,
    timer_requested: bool,
}

impl Preferences {
    /// Create the surface over the config file at `config_path`.
    pub fn new(config_path: PathBuf, command_tx: mpsc::Sender<AppCommand>) -> Self {
        Self {
            config_path,
            command_tx,
            timer_requested: false,
        }
    }

    /// Open the settings file with the desktop's default handler.
    #[instrument(skip(self))]
    pub fn show(&self) {
        match open::that(&self.config_path) {
            Ok(()) => info!(path = ?self.config_path, "Preferences opened"),
            Err(e) => warn!(error = %e, path = ?self.config_path, "Failed to open preferences"),
        }
    }

    /// Request a sleep timer from the controller.
    ///
    /// `enabled = false` cancels any pending timer. Safe to call repeatedly
    /// in either direction.
    #[track_caller]
    pub async fn set_sleep_timer(&mut self, enabled: bool, seconds: u64) -> AppResult<()> {
        self.command_tx
            .send(AppCommand::SetSleepTimer { enabled, seconds })
            .await
            .map_err(|e| AppError::ChannelSendFailed {
                message: format!("Failed to send sleep timer request: {}", e),
                location: ErrorLocation::from(Location::caller()),
            })?;

        self.timer_requested = enabled;
        Ok(())
    }

    /// Called by the controller when the armed timer fires.
    ///
    /// Drops the pending-timer marker and tells the user; the pause itself
    /// already happened, so notification failure is only logged.
    pub fn notify_timer_elapsed(&mut self) {
        self.timer_requested = false;

        if let Err(e) = notify_rust::Notification::new()
            .summary("Noise Tray")
            .body("Sleep timer elapsed, playback paused")
            .icon("audio-card-symbolic")
            .show()
        {
            warn!(error = %e, "Failed to post sleep timer notification");
        }
    }

    /// Whether a sleep timer has been requested and not yet observed firing.
    pub fn timer_requested(&self) -> bool {
        self.timer_requested
    }
}
