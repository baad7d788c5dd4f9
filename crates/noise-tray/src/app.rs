//! Tray indicator controller.
//!
//! Runs on the async runtime thread. Owns the transport state machine, the
//! now-playing rendering and the sleep timer, and relays menu activations
//! to the player. Every widget mutation crosses back to the UI thread
//! through the [`TraySurface`].

use crate::{
    AppCommand, AppError, AppResult, MenuIds, NowPlaying, Preferences, SleepTimer, TrayCommand,
    TraySurface, VisualState,
};

use std::{panic::Location, path::PathBuf, time::Duration};

use error_location::ErrorLocation;
use noise_tray_core::{IconRef, NOW_PLAYING_FALLBACK_ICON, Player};
use tokio::sync::mpsc;
use tracing::{debug, error, info, instrument, warn};
use tray_icon::menu::{MenuEvent, MenuId};
use tray_icon::{MouseButton, MouseButtonState, TrayIconEvent};

/// Main controller state.
pub struct App {
    pub(crate) player: Box<dyn Player + Send>,
    pub(crate) tray: Box<dyn TraySurface>,
    pub(crate) preferences: Preferences,
    pub(crate) homepage_url: String,
    pub(crate) command_tx: mpsc::Sender<AppCommand>,
    pub(crate) command_rx: mpsc::Receiver<AppCommand>,
    pub(crate) menu_ids: MenuIds,
    pub(crate) visual_state: VisualState,
    pub(crate) startup_play_guard: bool,
    pub(crate) sleep_timer: SleepTimer,
}

impl App {
    /// Run the controller event loop.
    #[instrument(skip(self))]
    pub(crate) async fn run(mut self) -> AppResult<()> {
        info!("Noise tray indicator starting");

        self.start_up()?;

        // Menu and tray-click events arrive on global crossbeam channels
        // with blocking recv(); persistent blocking tasks forward them into
        // tokio channels. Dropping the rx side fails the forwarder's next
        // send and ends its loop.
        let (menu_tx, mut menu_rx) = mpsc::channel(32);
        let menu_forwarder = tokio::task::spawn_blocking(move || {
            let receiver = MenuEvent::receiver();
            while let Ok(event) = receiver.recv() {
                if menu_tx.blocking_send(event).is_err() {
                    break;
                }
            }
        });

        let (click_tx, mut click_rx) = mpsc::channel(32);
        let click_forwarder = tokio::task::spawn_blocking(move || {
            let receiver = TrayIconEvent::receiver();
            while let Ok(event) = receiver.recv() {
                if click_tx.blocking_send(event).is_err() {
                    break;
                }
            }
        });

        loop {
            tokio::select! {
                Some(event) = menu_rx.recv() => {
                    if let Err(e) = self.handle_menu_activation(&event.id).await {
                        error!(error = ?e, "Failed to handle menu activation");
                    }
                }

                Some(event) = click_rx.recv() => {
                    if let Err(e) = self.handle_tray_click(&event) {
                        error!(error = ?e, "Failed to handle tray click");
                    }
                }

                Some(cmd) = self.command_rx.recv() => {
                    match cmd {
                        AppCommand::SetSleepTimer { enabled, seconds } => {
                            self.set_sleep_timer(enabled, seconds);
                        }
                        AppCommand::SleepTimerElapsed { timer_id } => {
                            if self.sleep_timer.acknowledge(timer_id) {
                                if let Err(e) = self.sleep_timer_elapsed() {
                                    error!(error = ?e, "Failed to handle sleep timer firing");
                                }
                            } else {
                                debug!(timer_id = %timer_id, "Ignoring firing from a replaced timer");
                            }
                        }
                        AppCommand::Shutdown => {
                            info!("Shutdown requested");
                            break;
                        }
                    }
                }

                else => {
                    info!("All channels closed, shutting down");
                    break;
                }
            }
        }

        drop(menu_rx);
        drop(click_rx);

        for (name, forwarder) in [("menu", menu_forwarder), ("tray-click", click_forwarder)] {
            match tokio::time::timeout(Duration::from_secs(1), forwarder).await {
                Ok(Ok(())) => info!(forwarder = name, "Event forwarder stopped cleanly"),
                Ok(Err(e)) => error!(forwarder = name, error = ?e, "Event forwarder task panicked"),
                Err(_) => info!(
                    forwarder = name,
                    "Event forwarder did not stop within timeout, \
                         will be cleaned up on exit"
                ),
            }
        }

        info!("Noise tray indicator shut down");

        Ok(())
    }

    /// Bring the indicator to a consistent paused state before revealing it.
    ///
    /// Order matters: the legacy remote control goes first, the paused
    /// state is rendered while the tray is still hidden, the startup play
    /// guard is armed, and only then does the indicator become visible.
    #[instrument(skip(self))]
    pub(crate) fn start_up(&mut self) -> AppResult<()> {
        // A second session-bus control surface double-signals transport changes.
        self.player.disconnect_legacy_remote_control();

        self.render(VisualState::Paused)?;
        self.startup_play_guard = true;

        self.tray.dispatch(TrayCommand::SetActive)?;
        self.update_now_playing()
    }

    /// Single wrapper around the transport play call.
    ///
    /// Some player builds auto-start playback on the first control
    /// interaction; exactly the first play request after startup is
    /// converted into a pause. The guard clears itself, so every later
    /// request reaches the transport unmodified.
    pub(crate) fn request_play(&mut self) -> AppResult<()> {
        if self.startup_play_guard {
            self.startup_play_guard = false;
            debug!("Startup play guard fired, pausing instead");
            self.player.pause();
            return self.render(VisualState::Paused);
        }

        self.player.play();
        self.render(VisualState::Playing)
    }

    /// The play/pause menu entry, also wired to the tray's secondary click.
    pub(crate) fn toggle_play_pause(&mut self) -> AppResult<()> {
        match self.visual_state {
            VisualState::Playing => {
                self.player.pause();
                self.render(VisualState::Paused)
            }
            VisualState::Paused => self.request_play(),
        }
    }

    /// Advance the rotation and refresh the now-playing entry.
    pub(crate) fn skip_next(&mut self) -> AppResult<()> {
        self.player.skip_next();
        self.update_now_playing()
    }

    /// Step the rotation back and refresh the now-playing entry.
    pub(crate) fn skip_previous(&mut self) -> AppResult<()> {
        self.player.skip_previous();
        self.update_now_playing()
    }

    /// Render `state` as one visual unit, then refresh the now-playing
    /// entry.
    ///
    /// Pure presentation: the visual state changes only here and no
    /// transport call is made.
    pub(crate) fn render(&mut self, state: VisualState) -> AppResult<()> {
        self.visual_state = state;
        self.tray.dispatch(TrayCommand::RenderState(state))?;
        self.update_now_playing()
    }

    /// Recompute the now-playing label and artwork from the player.
    ///
    /// Nothing is cached: the player owns the rotation, and a stale copy
    /// here would drift after skips.
    pub(crate) fn update_now_playing(&mut self) -> AppResult<()> {
        let label = format!("Now Playing: {}", self.player.current_noise_name());

        let icon = match self.player.current_noise_icon_uri() {
            Some(uri) => {
                let path = uri.strip_prefix("file://").unwrap_or(&uri);
                IconRef::File(PathBuf::from(path))
            }
            None => {
                debug!("Current noise has no artwork, using fallback icon");
                IconRef::Named(NOW_PLAYING_FALLBACK_ICON.to_string())
            }
        };

        self.tray
            .dispatch(TrayCommand::SetNowPlaying(NowPlaying { label, icon }))
    }

    /// Arm or cancel the single sleep timer.
    ///
    /// Idempotent in both directions; cancelling with nothing armed is a
    /// no-op.
    #[instrument(skip(self))]
    pub(crate) fn set_sleep_timer(&mut self, enabled: bool, seconds: u64) {
        if enabled {
            self.sleep_timer
                .arm(Duration::from_secs(seconds), self.command_tx.clone());
        } else {
            self.sleep_timer.disarm();
        }
    }

    /// An armed timer fired: notify the preferences surface, pause, render.
    pub(crate) fn sleep_timer_elapsed(&mut self) -> AppResult<()> {
        info!("Sleep timer elapsed, pausing playback");
        self.preferences.notify_timer_elapsed();
        self.player.pause();
        self.render(VisualState::Paused)
    }

    /// Route a menu activation through the explicit id table.
    #[instrument(skip(self))]
    async fn handle_menu_activation(&mut self, id: &MenuId) -> AppResult<()> {
        if *id == self.menu_ids.play_pause {
            self.toggle_play_pause()
        } else if *id == self.menu_ids.next {
            self.skip_next()
        } else if *id == self.menu_ids.previous {
            self.skip_previous()
        } else if *id == self.menu_ids.preferences {
            self.preferences.show();
            Ok(())
        } else if *id == self.menu_ids.about {
            self.open_homepage();
            Ok(())
        } else if *id == self.menu_ids.quit {
            self.quit().await
        } else {
            debug!(menu_id = ?id, "Activation for unknown menu item");
            Ok(())
        }
    }

    /// Secondary (middle) click on the tray icon mirrors the play/pause
    /// entry.
    fn handle_tray_click(&mut self, event: &TrayIconEvent) -> AppResult<()> {
        if let TrayIconEvent::Click {
            button: MouseButton::Middle,
            button_state: MouseButtonState::Up,
            ..
        } = event
        {
            return self.toggle_play_pause();
        }

        Ok(())
    }

    /// Cancel any pending timer and stop both event loops.
    ///
    /// The cancel is unconditional and tolerates a timer that was never
    /// armed, so quitting always succeeds.
    pub(crate) async fn quit(&mut self) -> AppResult<()> {
        info!("Quit requested");

        self.sleep_timer.disarm();
        self.tray.dispatch(TrayCommand::Shutdown)?;

        self.command_tx
            .send(AppCommand::Shutdown)
            .await
            .map_err(|e| AppError::ChannelSendFailed {
                message: format!("Failed to send shutdown command: {}", e),
                location: ErrorLocation::from(Location::caller()),
            })
    }

    /// Open the project homepage in the default browser.
    fn open_homepage(&self) {
        match open::that(&self.homepage_url) {
            Ok(()) => info!(url = %self.homepage_url, "Opened homepage"),
            Err(e) => warn!(error = %e, url = %self.homepage_url, "Failed to open homepage"),
        }
    }
}
