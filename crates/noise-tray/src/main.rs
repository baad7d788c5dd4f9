//! Noise Tray: system tray indicator for an ambient-noise player.

mod app;
mod app_command;
mod config;
mod error;
mod menu_spec;
mod preferences;
mod sleep_timer;
#[cfg(test)]
mod tests;
mod tray_command;
mod tray_manager;
mod tray_surface;
mod visual_state;

pub(crate) use {
    app::App,
    app_command::AppCommand,
    error::{AppError, Result as AppResult},
    preferences::Preferences,
    sleep_timer::SleepTimer,
    tray_command::{NowPlaying, TrayCommand},
    tray_manager::{MenuIds, TrayManager},
    tray_surface::TraySurface,
    visual_state::VisualState,
};

use crate::config::Config;

use noise_tray_core::{CatalogPlayer, NoiseLibrary, Player};
use tao::{
    event::Event,
    event_loop::{ControlFlow, EventLoopBuilder},
};
use tokio::sync::mpsc;
use tracing::{error, warn};

/// Application entry point.
fn main() {
    tracing_subscriber::fmt()
        .with_env_filter("noise_tray=debug")
        .init();

    let event_loop = EventLoopBuilder::<TrayCommand>::with_user_event().build();
    let tray_proxy = event_loop.create_proxy();

    let config = match Config::load() {
        Ok(c) => c,
        Err(e) => {
            error!("Failed to load config: {:?}", e);
            std::process::exit(1);
        }
    };

    // TrayManager lives on the main thread - TrayIcon is !Send on all platforms.
    let mut tray_manager = match TrayManager::new(&config) {
        Ok(tm) => tm,
        Err(e) => {
            error!("Failed to create TrayManager: {:?}", e);
            std::process::exit(1);
        }
    };

    event_loop.run(move |event, _, control_flow| {
        *control_flow = ControlFlow::Wait;

        match event {
            Event::UserEvent(cmd) => {
                match cmd {
                    TrayCommand::RenderState(state) => {
                        if let Err(e) = tray_manager.render_state(state) {
                            error!(error = ?e, "Failed to render tray state");
                        }
                    }
                    TrayCommand::SetNowPlaying(now) => {
                        if let Err(e) = tray_manager.set_now_playing(&now) {
                            error!(error = ?e, "Failed to update now playing");
                        }
                    }
                    TrayCommand::SetActive => {
                        if let Err(e) = tray_manager.set_active() {
                            error!(error = ?e, "Failed to show tray indicator");
                        }
                    }
                    TrayCommand::Shutdown => {
                        *control_flow = ControlFlow::ExitWithCode(0);
                    }
                }
                return;
            }
            Event::NewEvents(tao::event::StartCause::Init) => {
                let library = match config
                    .sounds_dir()
                    .and_then(|dir| NoiseLibrary::discover(&dir).map_err(AppError::from))
                {
                    Ok(library) => library,
                    Err(e) => {
                        warn!(error = %e, "Noise library unavailable, using built-in set");
                        NoiseLibrary::builtin()
                    }
                };
                let player: Box<dyn Player + Send> = Box::new(CatalogPlayer::new(library));

                let config_path = match Config::config_path() {
                    Ok(path) => path,
                    Err(e) => {
                        error!("Failed to resolve config path: {:?}", e);
                        std::process::exit(1);
                    }
                };

                let (command_tx, command_rx) = mpsc::channel(32);
                let preferences = Preferences::new(config_path, command_tx.clone());

                let tray_proxy = tray_proxy.clone();
                let menu_ids = tray_manager.menu_ids();
                let homepage_url = config.indicator.homepage_url.clone();

                // Spawn tokio runtime on separate thread.
                // TrayManager stays on the main thread.
                std::thread::spawn(move || {
                    let rt = match tokio::runtime::Runtime::new() {
                        Ok(rt) => rt,
                        Err(e) => {
                            error!("Failed to create tokio runtime: {:?}", e);
                            std::process::exit(1);
                        }
                    };

                    rt.block_on(async {
                        let app = App {
                            player,
                            tray: Box::new(tray_proxy),
                            preferences,
                            homepage_url,
                            command_tx,
                            command_rx,
                            menu_ids,
                            visual_state: VisualState::Paused,
                            startup_play_guard: false,
                            sleep_timer: SleepTimer::default(),
                        };

                        if let Err(e) = app.run().await {
                            error!(error = ?e, "Controller error");
                        }
                    });
                });
            }
            _ => {}
        }
    });
}
