//! Dispatch seam between the controller and the UI thread.

use crate::{AppError, AppResult, TrayCommand};

use std::panic::Location;

use error_location::ErrorLocation;
use tao::event_loop::EventLoopProxy;

/// Sink for tray commands, implemented by the UI event loop.
///
/// The controller runs on the runtime thread; widgets may only be touched
/// on the UI thread, so every visual mutation crosses this boundary as a
/// [`TrayCommand`].
pub trait TraySurface: Send {
    /// Deliver `cmd` to the UI thread.
    fn dispatch(&self, cmd: TrayCommand) -> AppResult<()>;
}

impl TraySurface for EventLoopProxy<TrayCommand> {
    #[track_caller]
    fn dispatch(&self, cmd: TrayCommand) -> AppResult<()> {
        self.send_event(cmd).map_err(|e| AppError::ChannelSendFailed {
            message: format!("UI event loop is gone: {}", e),
            location: ErrorLocation::from(Location::caller()),
        })
    }
}
