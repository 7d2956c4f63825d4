//! User-facing notification sink.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components report fetch failures through the `Notify` seam, keeping the
//! reporting path mockable in tests while the browser build shows a real
//! blocking dialog.

/// Sink for messages that must interrupt the user.
pub trait Notify {
    /// Deliver one message to the user.
    fn notify(&self, message: &str);
}

/// Blocking browser dialog via `window.alert`. No-op outside the browser.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserAlert;

impl Notify for BrowserAlert {
    fn notify(&self, message: &str) {
        #[cfg(feature = "hydrate")]
        {
            if let Some(window) = web_sys::window() {
                let _ = window.alert_with_message(message);
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = message;
        }
    }
}
