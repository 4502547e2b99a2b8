use crate::entity::BookRecord;
use crate::KernelError;

/// Write side of the book store.
#[async_trait::async_trait]
pub trait BookRecordModifier: 'static + Sync + Send {
    /// Inserts or replaces the record with the same id and returns what was stored.
    async fn create_or_update(
        &self,
        record: BookRecord,
    ) -> error_stack::Result<BookRecord, KernelError>;

    async fn delete(&self, record: &BookRecord) -> error_stack::Result<(), KernelError>;
}

pub trait DependOnBookRecordModifier: 'static + Sync + Send {
    type BookRecordModifier: BookRecordModifier;
    fn book_record_modifier(&self) -> &Self::BookRecordModifier;
}
