use crate::{AppCommand, TrayCommand, VisualState, tests::support::test_app};

use noise_tray_core::{IconRef, NOW_PLAYING_FALLBACK_ICON};

/// WHAT: Startup renders Paused and arms the guard before activation
/// WHY: The tray must never flash an inconsistent state or trigger autoplay
#[test]
#[allow(clippy::unwrap_used)]
fn given_fresh_controller_when_starting_up_then_paused_rendered_before_active() {
    // Given: A fresh controller over a paused player
    let (mut app, log, tray) = test_app("Rain", None);

    // When: Running the startup sequence
    app.start_up().unwrap();

    // Then: The transport saw only the remote-control disconnect
    assert_eq!(log.calls(), vec!["disconnect"]);
    assert!(app.startup_play_guard);
    assert_eq!(app.visual_state, VisualState::Paused);

    // And: The paused render precedes activation
    let commands = tray.commands();
    assert_eq!(commands[0], TrayCommand::RenderState(VisualState::Paused));
    let active_at = commands
        .iter()
        .position(|cmd| *cmd == TrayCommand::SetActive)
        .unwrap();
    assert!(active_at > 0);
    assert!(matches!(
        commands.last(),
        Some(TrayCommand::SetNowPlaying(_))
    ));
}

/// WHAT: The first play request after startup pauses instead, once
/// WHY: Some player builds auto-start playback on the first control call
#[test]
#[allow(clippy::unwrap_used)]
fn given_armed_guard_when_play_requested_then_first_call_pauses_only() {
    // Given: A controller that completed startup
    let (mut app, log, _tray) = test_app("Rain", None);
    app.start_up().unwrap();

    // When: Toggling play/pause from Paused for the first time
    app.toggle_play_pause().unwrap();

    // Then: The transport was paused, not played, and the guard is gone
    assert_eq!(log.calls(), vec!["disconnect", "pause"]);
    assert_eq!(app.visual_state, VisualState::Paused);
    assert!(!app.startup_play_guard);

    // And: The second toggle reaches the transport unmodified
    app.toggle_play_pause().unwrap();
    assert_eq!(log.calls(), vec!["disconnect", "pause", "play"]);
    assert_eq!(app.visual_state, VisualState::Playing);
}

/// WHAT: Repeated play/pause cycles dispatch identical command sequences
/// WHY: Re-renders must be reproducible, never accumulating drift
#[test]
#[allow(clippy::unwrap_used)]
fn given_repeated_toggles_when_rendering_then_command_sequences_identical() {
    // Given: A controller past startup and its guarded first toggle
    let (mut app, _log, tray) = test_app("Rain", None);
    app.start_up().unwrap();
    app.toggle_play_pause().unwrap();
    app.toggle_play_pause().unwrap();
    assert_eq!(app.visual_state, VisualState::Playing);
    tray.clear();

    // When: Cycling pause -> play twice
    app.toggle_play_pause().unwrap();
    app.toggle_play_pause().unwrap();
    let first_cycle = tray.commands();
    tray.clear();

    app.toggle_play_pause().unwrap();
    app.toggle_play_pause().unwrap();
    let second_cycle = tray.commands();

    // Then: Both cycles rendered byte-identical command sequences
    assert_eq!(first_cycle, second_cycle);
    assert_eq!(app.visual_state, VisualState::Playing);
}

/// WHAT: Missing artwork renders the fixed fallback icon with a fresh label
/// WHY: The now-playing entry must never go stale or crash the render path
#[test]
#[allow(clippy::unwrap_used, clippy::panic)]
fn given_missing_artwork_when_updating_now_playing_then_fallback_icon_used() {
    // Given: A player whose artwork accessor yields nothing
    let (mut app, _log, tray) = test_app("Rain", None);

    // When: Recomputing the now-playing entry
    app.update_now_playing().unwrap();

    // Then: Label and fallback icon are dispatched together
    let commands = tray.commands();
    match commands.last().unwrap() {
        TrayCommand::SetNowPlaying(now) => {
            assert_eq!(now.label, "Now Playing: Rain");
            assert_eq!(
                now.icon,
                IconRef::Named(NOW_PLAYING_FALLBACK_ICON.to_string())
            );
        }
        other => panic!("expected SetNowPlaying, got {other:?}"),
    }
}

/// WHAT: A file:// artwork URI is rendered by its filesystem path
/// WHY: The player hands out URIs, the tray renders files
#[test]
#[allow(clippy::unwrap_used, clippy::panic)]
fn given_file_uri_artwork_when_updating_now_playing_then_path_rendered() {
    // Given: A player exposing artwork as a file:// URI
    let (mut app, _log, tray) = test_app("Storm", Some("file:///tmp/storm.png"));

    // When: Recomputing the now-playing entry
    app.update_now_playing().unwrap();

    // Then: The URI scheme is stripped down to the path
    let commands = tray.commands();
    match commands.last().unwrap() {
        TrayCommand::SetNowPlaying(now) => {
            assert_eq!(now.label, "Now Playing: Storm");
            assert_eq!(now.icon, IconRef::File("/tmp/storm.png".into()));
        }
        other => panic!("expected SetNowPlaying, got {other:?}"),
    }
}

/// WHAT: Skips call the transport and refresh now-playing, state unchanged
/// WHY: Changing noise must not flip the play/pause presentation
#[test]
#[allow(clippy::unwrap_used)]
fn given_paused_state_when_skipping_then_only_now_playing_refreshed() {
    // Given: A controller past startup, still Paused
    let (mut app, log, tray) = test_app("Rain", None);
    app.start_up().unwrap();
    tray.clear();

    // When: Skipping forward and back
    app.skip_next().unwrap();
    app.skip_previous().unwrap();

    // Then: The transport saw both skips and the state never changed
    assert_eq!(log.calls(), vec!["disconnect", "next", "previous"]);
    assert_eq!(app.visual_state, VisualState::Paused);

    // And: Only now-playing refreshes were dispatched
    let commands = tray.commands();
    assert_eq!(commands.len(), 2);
    assert!(
        commands
            .iter()
            .all(|cmd| matches!(cmd, TrayCommand::SetNowPlaying(_)))
    );
}

/// WHAT: Quit shuts both loops down even when no timer was ever armed
/// WHY: Cancelling an absent timer must be a harmless no-op
#[tokio::test]
#[allow(clippy::unwrap_used)]
async fn given_no_timer_when_quitting_then_shutdown_flows() {
    // Given: A controller that never armed a timer
    let (mut app, _log, tray) = test_app("Rain", None);

    // When: Quitting
    app.quit().await.unwrap();

    // Then: The UI loop and the controller loop both get shutdown commands
    assert_eq!(tray.commands().last(), Some(&TrayCommand::Shutdown));
    let cmd = app.command_rx.recv().await.unwrap();
    assert!(matches!(cmd, AppCommand::Shutdown));
}

/// WHAT: Quit cancels a pending sleep timer
/// WHY: A timer surviving quit would fire into a torn-down application
#[tokio::test]
#[allow(clippy::unwrap_used)]
async fn given_armed_timer_when_quitting_then_timer_cancelled() {
    // Given: A controller with an armed timer
    let (mut app, _log, _tray) = test_app("Rain", None);
    app.set_sleep_timer(true, 3600);
    assert!(app.sleep_timer.is_armed());

    // When: Quitting
    app.quit().await.unwrap();

    // Then: The timer is no longer pending
    assert!(!app.sleep_timer.is_armed());
}

/// WHAT: A timer firing notifies preferences, pauses and renders Paused
/// WHY: This is the full sleep-timer transition of the state machine
#[tokio::test]
#[allow(clippy::unwrap_used)]
async fn given_playing_state_when_sleep_timer_elapses_then_paused_and_notified() {
    // Given: A playing controller with a requested timer
    let (mut app, log, tray) = test_app("Rain", None);
    app.start_up().unwrap();
    app.toggle_play_pause().unwrap();
    app.toggle_play_pause().unwrap();
    assert_eq!(app.visual_state, VisualState::Playing);
    app.preferences.set_sleep_timer(true, 60).await.unwrap();
    assert!(app.preferences.timer_requested());
    tray.clear();

    // When: The timer transition runs
    app.sleep_timer_elapsed().unwrap();

    // Then: Transport paused, Paused rendered, preferences marker cleared
    assert_eq!(log.calls().last(), Some(&"pause"));
    assert_eq!(app.visual_state, VisualState::Paused);
    assert_eq!(
        tray.commands().first(),
        Some(&TrayCommand::RenderState(VisualState::Paused))
    );
    assert!(!app.preferences.timer_requested());
}
