//! Scripted doubles shared by the controller tests.

use crate::{
    App, AppResult, MenuIds, Preferences, SleepTimer, TrayCommand, TraySurface, VisualState,
};

use std::{
    path::PathBuf,
    sync::{Arc, Mutex},
};

use noise_tray_core::Player;
use tokio::sync::mpsc;
use tray_icon::menu::MenuId;

/// Shared record of transport calls made against the scripted player.
#[derive(Debug, Clone, Default)]
pub(crate) struct TransportLog(Arc<Mutex<Vec<&'static str>>>);

impl TransportLog {
    #[allow(clippy::unwrap_used)]
    fn push(&self, call: &'static str) {
        self.0.lock().unwrap().push(call);
    }

    #[allow(clippy::unwrap_used)]
    pub(crate) fn calls(&self) -> Vec<&'static str> {
        self.0.lock().unwrap().clone()
    }
}

/// Player double with a fixed noise and a shared call log.
pub(crate) struct ScriptedPlayer {
    log: TransportLog,
    playing: bool,
    noise_name: String,
    icon_uri: Option<String>,
}

impl ScriptedPlayer {
    pub(crate) fn new(noise_name: &str, icon_uri: Option<&str>) -> (Self, TransportLog) {
        let log = TransportLog::default();
        let player = Self {
            log: log.clone(),
            playing: false,
            noise_name: noise_name.to_string(),
            icon_uri: icon_uri.map(str::to_string),
        };
        (player, log)
    }
}

impl Player for ScriptedPlayer {
    fn is_playing(&self) -> bool {
        self.playing
    }

    fn play(&mut self) {
        self.playing = true;
        self.log.push("play");
    }

    fn pause(&mut self) {
        self.playing = false;
        self.log.push("pause");
    }

    fn skip_next(&mut self) {
        self.log.push("next");
    }

    fn skip_previous(&mut self) {
        self.log.push("previous");
    }

    fn current_noise_name(&self) -> String {
        self.noise_name.clone()
    }

    fn current_noise_icon_uri(&self) -> Option<String> {
        self.icon_uri.clone()
    }

    fn disconnect_legacy_remote_control(&mut self) {
        self.log.push("disconnect");
    }
}

/// Tray surface double that records every dispatched command.
#[derive(Debug, Clone, Default)]
pub(crate) struct RecordingTray(Arc<Mutex<Vec<TrayCommand>>>);

impl RecordingTray {
    #[allow(clippy::unwrap_used)]
    pub(crate) fn commands(&self) -> Vec<TrayCommand> {
        self.0.lock().unwrap().clone()
    }

    #[allow(clippy::unwrap_used)]
    pub(crate) fn clear(&self) {
        self.0.lock().unwrap().clear();
    }
}

impl TraySurface for RecordingTray {
    #[allow(clippy::unwrap_used)]
    fn dispatch(&self, cmd: TrayCommand) -> AppResult<()> {
        self.0.lock().unwrap().push(cmd);
        Ok(())
    }
}

fn test_menu_ids() -> MenuIds {
    MenuIds {
        play_pause: MenuId::new("play_pause_toggle"),
        next: MenuId::new("next"),
        previous: MenuId::new("previous"),
        preferences: MenuId::new("preferences"),
        about: MenuId::new("about"),
        quit: MenuId::new("quit"),
    }
}

/// Controller over scripted doubles, plus handles to observe both sides.
pub(crate) fn test_app(
    noise_name: &str,
    icon_uri: Option<&str>,
) -> (App, TransportLog, RecordingTray) {
    let (player, log) = ScriptedPlayer::new(noise_name, icon_uri);
    let tray = RecordingTray::default();
    let (command_tx, command_rx) = mpsc::channel(8);
    let preferences = Preferences::new(
        PathBuf::from("/nonexistent/config.toml"),
        command_tx.clone(),
    );

    let app = App {
        player: Box::new(player),
        tray: Box::new(tray.clone()),
        preferences,
        homepage_url: "https://example.invalid".to_string(),
        command_tx,
        command_rx,
        menu_ids: test_menu_ids(),
        visual_state: VisualState::Paused,
        startup_play_guard: false,
        sleep_timer: SleepTimer::default(),
    };

    (app, log, tray)
}
