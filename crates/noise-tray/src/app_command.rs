use uuid::Uuid;

/// Commands sent from external collaborators to the controller loop.
#[derive(Debug, Clone)]
pub enum AppCommand {
    /// Arm or replace the sleep timer (`enabled`), or cancel it.
    SetSleepTimer {
        /// Whether a timer should be pending after this command.
        enabled: bool,
        /// Delay before the pause fires, in seconds.
        seconds: u64,
    },
    /// An armed sleep timer elapsed; marshaled onto the controller loop.
    SleepTimerElapsed {
        /// Correlates the firing with the arming; stale firings are dropped.
        timer_id: Uuid,
    },
    /// Request application shutdown.
    Shutdown,
}
