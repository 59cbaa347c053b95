//! Notification collaborator seam.
//!
//! The store reports user-visible events (currently only "post deleted")
//! through this trait instead of printing anything itself. Each client
//! decides what a notification looks like: the CLI prints to the terminal,
//! tests record messages, embedders can wire up a toast.

use std::sync::Arc;

pub trait Notifier {
    /// Deliver a success notification with a human-readable message.
    fn success(&self, message: &str);
}

/// Discards every notification.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopNotifier;

impl Notifier for NoopNotifier {
    fn success(&self, _message: &str) {}
}

/// Lets one notifier be owned by the store and observed elsewhere.
impl<N: Notifier + ?Sized> Notifier for Arc<N> {
    fn success(&self, message: &str) {
        (**self).success(message)
    }
}
