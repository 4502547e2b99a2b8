use crate::entity::{BookId, BookRecord};
use crate::KernelError;

/// Read side of the book store.
#[async_trait::async_trait]
pub trait BookRecordQuery: Sync + Send + 'static {
    async fn find_by_id(
        &self,
        id: &BookId,
    ) -> error_stack::Result<Option<BookRecord>, KernelError>;

    async fn exists_by_id(&self, id: &BookId) -> error_stack::Result<bool, KernelError>;

    /// Every stored record, in whatever order the store keeps them.
    async fn find_all(&self) -> error_stack::Result<Vec<BookRecord>, KernelError>;
}

pub trait DependOnBookRecordQuery: Sync + Send + 'static {
    type BookRecordQuery: BookRecordQuery;
    fn book_record_query(&self) -> &Self::BookRecordQuery;
}
