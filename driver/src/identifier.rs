use error_stack::Report;
use uuid::Uuid;

use kernel::interface::identifier::BookIdGenerator;
use kernel::interface::query::BookRecordQuery;
use kernel::prelude::entity::BookId;
use kernel::KernelError;

use crate::config::LibraryConfig;

type UuidSource = Box<dyn Fn() -> Uuid + Sync + Send>;

/// Draws random UUIDs until one is found that the store does not know yet.
pub struct UuidBookIdGenerator<Q> {
    query: Q,
    max_attempts: u32,
    source: UuidSource,
}

impl<Q: BookRecordQuery> UuidBookIdGenerator<Q> {
    pub fn new(query: Q, config: &LibraryConfig) -> Self {
        Self::with_source(query, *config.id_max_attempts(), Uuid::new_v4)
    }

    pub fn with_source(
        query: Q,
        max_attempts: u32,
        source: impl Fn() -> Uuid + Sync + Send + 'static,
    ) -> Self {
        Self {
            query,
            max_attempts,
            source: Box::new(source),
        }
    }
}

#[async_trait::async_trait]
impl<Q: BookRecordQuery> BookIdGenerator for UuidBookIdGenerator<Q> {
    async fn generate(&self) -> error_stack::Result<BookId, KernelError> {
        for attempt in 1..=self.max_attempts {
            let id = BookId::new((self.source)());
            if !self.query.exists_by_id(&id).await? {
                return Ok(id);
            }
            tracing::warn!(%id, attempt, "generated book id is already taken");
        }
        Err(Report::new(KernelError::IdGeneration).attach_printable(format!(
            "no unused book id after {} attempts",
            self.max_attempts
        )))
    }
}
