use crate::entity::BookId;
use crate::KernelError;

/// Hands out ids that no stored record uses yet.
#[async_trait::async_trait]
pub trait BookIdGenerator: 'static + Sync + Send {
    async fn generate(&self) -> error_stack::Result<BookId, KernelError>;
}

pub trait DependOnBookIdGenerator: 'static + Sync + Send {
    type BookIdGenerator: BookIdGenerator;
    fn book_id_generator(&self) -> &Self::BookIdGenerator;
}
