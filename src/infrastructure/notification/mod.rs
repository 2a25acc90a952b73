//! Notification infrastructure module
//!
//! Desktop popups through notify-rust, or plain console output for
//! headless use.

mod console;
mod notify_rust;

pub use console::ConsoleNotifier;
pub use notify_rust::NotifyRustNotifier;

use crate::application::ports::Notifier;

/// Application name shown on desktop notifications
pub const APP_NAME: &str = "cliptrans";

/// Where notifications are delivered
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotifierKind {
    /// Desktop popup via notify-rust
    Desktop,
    /// Lines on stdout
    Console,
}

/// Create a notifier of the requested kind
pub fn create_notifier(kind: NotifierKind) -> Box<dyn Notifier> {
    match kind {
        NotifierKind::Desktop => Box::new(NotifyRustNotifier::new()),
        NotifierKind::Console => Box::new(ConsoleNotifier::new()),
    }
}
