//! User-facing failure notices.

use serde::Serialize;
use std::fmt;
use tokio::sync::mpsc;

/// One of the fixed messages shown to the user when an operation fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Notice {
    /// The requested amount exceeds the remote stock.
    OutOfStock,
    /// Adding a product failed for any other reason.
    AddFailed,
    /// The product to remove is not in the cart, or storage failed.
    RemoveFailed,
    /// Changing an amount failed for any other reason.
    UpdateFailed,
}

impl Notice {
    /// The user-facing message.
    pub fn message(&self) -> &'static str {
        match self {
            Notice::OutOfStock => "Requested quantity is out of stock",
            Notice::AddFailed => "Error adding product",
            Notice::RemoveFailed => "Error removing product",
            Notice::UpdateFailed => "Error updating product quantity",
        }
    }
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

/// Fire-and-forget sink for [`Notice`]s.
///
/// Called after the operation has already failed; it cannot change the
/// outcome.
pub trait Notifier: Send + Sync {
    /// Report a notice to the user.
    fn notify(&self, notice: Notice);
}

impl<F> Notifier for F
where
    F: Fn(Notice) + Send + Sync,
{
    fn notify(&self, notice: Notice) {
        self(notice)
    }
}

/// Logs notices through `tracing`. The default notifier.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn notify(&self, notice: Notice) {
        tracing::warn!(?notice, "{}", notice.message());
    }
}

/// Forwards notices into an unbounded channel, for UIs that drain them on
/// their own loop.
#[derive(Debug, Clone)]
pub struct ChannelNotifier {
    tx: mpsc::UnboundedSender<Notice>,
}

impl ChannelNotifier {
    /// Create a notifier and the receiver that observes it.
    pub fn channel() -> (Self, mpsc::UnboundedReceiver<Notice>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self { tx }, rx)
    }
}

impl Notifier for ChannelNotifier {
    fn notify(&self, notice: Notice) {
        // A dropped receiver means nobody is listening any more.
        let _ = self.tx.send(notice);
    }
}
