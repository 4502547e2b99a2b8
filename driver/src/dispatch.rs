use tokio::sync::broadcast;

use kernel::interface::dispatch::BookEventDispatcher;
use kernel::interface::event::BookEvent;
use kernel::KernelError;

/// Fans book events out to every current subscriber.
///
/// Events sent while nobody is subscribed are dropped. A subscriber that falls more than
/// `capacity` events behind misses the oldest ones.
#[derive(Debug, Clone)]
pub struct BroadcastEventDispatcher {
    sender: broadcast::Sender<BookEvent>,
}

impl BroadcastEventDispatcher {
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity.max(1));
        Self { sender }
    }

    pub fn subscribe(&self) -> broadcast::Receiver<BookEvent> {
        self.sender.subscribe()
    }
}

#[async_trait::async_trait]
impl BookEventDispatcher for BroadcastEventDispatcher {
    async fn dispatch(&self, event: BookEvent) -> error_stack::Result<(), KernelError> {
        match self.sender.send(event) {
            Ok(receivers) => tracing::trace!(receivers, "broadcast book event"),
            Err(broadcast::error::SendError(event)) => tracing::debug!(
                event = event.name(),
                book_id = %event.book_id(),
                "no subscriber for book event"
            ),
        }
        Ok(())
    }
}
