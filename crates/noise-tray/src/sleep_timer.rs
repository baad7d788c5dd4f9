//! One-shot delayed pause.

use crate::AppCommand;

use std::time::Duration;

use tokio::{sync::mpsc, task::JoinHandle, time};
use tracing::{debug, info};
use uuid::Uuid;

/// Handle to the single pending sleep timer, if any.
///
/// At most one timer is pending; arming again replaces the previous one.
/// The fire path never touches the tray or the player directly: it posts
/// [`AppCommand::SleepTimerElapsed`] back onto the controller loop, since
/// widgets may only be mutated from the UI path.
#[derive(Debug, Default)]
pub struct SleepTimer {
    pending: Option<(Uuid, JoinHandle<()>)>,
}

impl SleepTimer {
    /// Arm a timer that fires after `delay`, replacing any pending one.
    ///
    /// Returns the id of the new timer; firings carry it so a replaced
    /// timer's late delivery can be told apart from the live one.
    pub fn arm(&mut self, delay: Duration, command_tx: mpsc::Sender<AppCommand>) -> Uuid {
        self.disarm();

        let timer_id = Uuid::new_v4();
        let handle = tokio::spawn(async move {
            time::sleep(delay).await;
            // Fails only when the controller already shut down.
            let _ = command_tx
                .send(AppCommand::SleepTimerElapsed { timer_id })
                .await;
        });

        info!(timer_id = %timer_id, delay_secs = delay.as_secs(), "Sleep timer armed");
        self.pending = Some((timer_id, handle));
        timer_id
    }

    /// Cancel the pending timer.
    ///
    /// A no-op when none is armed or it already fired; quit paths call this
    /// unconditionally.
    pub fn disarm(&mut self) {
        if let Some((timer_id, handle)) = self.pending.take() {
            handle.abort();
            debug!(timer_id = %timer_id, "Sleep timer cancelled");
        }
    }

    /// Whether a timer is pending.
    pub fn is_armed(&self) -> bool {
        self.pending.is_some()
    }

    /// Accept a firing: clears the pending handle and returns true when
    /// `timer_id` is the live timer, false for a replaced timer's late
    /// delivery.
    pub fn acknowledge(&mut self, timer_id: Uuid) -> bool {
        match &self.pending {
            Some((pending_id, _)) if *pending_id == timer_id => {
                self.pending = None;
                true
            }
            _ => false,
        }
    }
}
