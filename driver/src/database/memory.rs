use std::sync::Arc;

use tokio::sync::RwLock;

use kernel::interface::query::BookRecordQuery;
use kernel::interface::update::BookRecordModifier;
use kernel::prelude::entity::{BookId, BookRecord};
use kernel::KernelError;

/// Book store kept in process memory. Clones share the same records.
#[derive(Debug, Clone, Default)]
pub struct InMemoryBookStore {
    records: Arc<RwLock<Vec<BookRecord>>>,
}

impl InMemoryBookStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait::async_trait]
impl BookRecordQuery for InMemoryBookStore {
    async fn find_by_id(
        &self,
        id: &BookId,
    ) -> error_stack::Result<Option<BookRecord>, KernelError> {
        let records = self.records.read().await;
        Ok(records.iter().find(|record| record.id() == id).cloned())
    }

    async fn exists_by_id(&self, id: &BookId) -> error_stack::Result<bool, KernelError> {
        let records = self.records.read().await;
        Ok(records.iter().any(|record| record.id() == id))
    }

    async fn find_all(&self) -> error_stack::Result<Vec<BookRecord>, KernelError> {
        Ok(self.records.read().await.clone())
    }
}

#[async_trait::async_trait]
impl BookRecordModifier for InMemoryBookStore {
    #[tracing::instrument(skip_all, fields(book_id = %record.id()))]
    async fn create_or_update(
        &self,
        record: BookRecord,
    ) -> error_stack::Result<BookRecord, KernelError> {
        let mut records = self.records.write().await;
        match records.iter_mut().find(|stored| stored.id() == record.id()) {
            Some(stored) => {
                tracing::trace!("replacing stored record");
                *stored = record.clone();
            }
            None => {
                tracing::trace!("inserting new record");
                records.push(record.clone());
            }
        }
        Ok(record)
    }

    #[tracing::instrument(skip_all, fields(book_id = %record.id()))]
    async fn delete(&self, record: &BookRecord) -> error_stack::Result<(), KernelError> {
        self.records
            .write()
            .await
            .retain(|stored| stored.id() != record.id());
        Ok(())
    }
}
