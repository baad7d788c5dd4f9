use crate::{AppCommand, SleepTimer};

use std::time::Duration;

use tokio::{sync::mpsc, time::timeout};
use uuid::Uuid;

/// WHAT: Re-arming replaces the pending timer; only the replacement fires
/// WHY: Two live timers would pause playback at the wrong moment
#[tokio::test]
#[allow(clippy::unwrap_used)]
async fn given_armed_timer_when_rearmed_then_only_replacement_fires() {
    // Given: A long timer that gets replaced by a short one
    let (command_tx, mut command_rx) = mpsc::channel(8);
    let mut timer = SleepTimer::default();
    timer.arm(Duration::from_secs(3600), command_tx.clone());
    let replacement = timer.arm(Duration::from_millis(20), command_tx);

    // When: Waiting for a firing
    let fired = timeout(Duration::from_secs(1), command_rx.recv())
        .await
        .unwrap()
        .unwrap();

    // Then: Exactly the replacement fired
    assert!(
        matches!(fired, AppCommand::SleepTimerElapsed { timer_id } if timer_id == replacement)
    );

    // And: Nothing else ever fires
    assert!(
        timeout(Duration::from_millis(100), command_rx.recv())
            .await
            .is_err()
    );
}

/// WHAT: Disarming with nothing pending is a harmless no-op
/// WHY: Quit and repeated preference changes call this unconditionally
#[test]
fn given_no_timer_when_disarming_then_noop() {
    // Given: A timer handle that was never armed
    let mut timer = SleepTimer::default();
    assert!(!timer.is_armed());

    // When/Then: Disarming twice changes nothing and does not fail
    timer.disarm();
    timer.disarm();
    assert!(!timer.is_armed());
}

/// WHAT: A disarmed timer never fires
/// WHY: Disabling the sleep timer must actually cancel the pending pause
#[tokio::test]
async fn given_armed_timer_when_disarmed_then_never_fires() {
    // Given: An armed short timer
    let (command_tx, mut command_rx) = mpsc::channel(8);
    let mut timer = SleepTimer::default();
    timer.arm(Duration::from_millis(50), command_tx);

    // When: Disarming before it elapses
    timer.disarm();

    // Then: No firing is ever delivered
    assert!(!timer.is_armed());
    assert!(
        timeout(Duration::from_millis(200), command_rx.recv())
            .await
            .is_err()
    );
}

/// WHAT: Acknowledge accepts only the live timer's id, exactly once
/// WHY: A replaced timer's late firing must not pause playback
#[tokio::test]
async fn given_stale_firing_when_acknowledging_then_rejected() {
    // Given: An armed timer and an id from some earlier incarnation
    let (command_tx, _command_rx) = mpsc::channel(8);
    let mut timer = SleepTimer::default();
    let live = timer.arm(Duration::from_secs(3600), command_tx);
    let stale = Uuid::new_v4();

    // When/Then: The stale id is rejected and the timer stays pending
    assert!(!timer.acknowledge(stale));
    assert!(timer.is_armed());

    // And: The live id is accepted exactly once
    assert!(timer.acknowledge(live));
    assert!(!timer.is_armed());
    assert!(!timer.acknowledge(live));
}
