use crate::event::BookEvent;
use crate::KernelError;

#[async_trait::async_trait]
pub trait BookEventDispatcher: 'static + Sync + Send {
    async fn dispatch(&self, event: BookEvent) -> error_stack::Result<(), KernelError>;
}

pub trait DependOnBookEventDispatcher: 'static + Sync + Send {
    type BookEventDispatcher: BookEventDispatcher;
    fn book_event_dispatcher(&self) -> &Self::BookEventDispatcher;
}
