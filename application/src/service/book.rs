use error_stack::{Report, ResultExt};

use kernel::interface::clock::{Clock, DependOnClock};
use kernel::interface::dispatch::{BookEventDispatcher, DependOnBookEventDispatcher};
use kernel::interface::event::BookEvent;
use kernel::interface::identifier::{BookIdGenerator, DependOnBookIdGenerator};
use kernel::interface::query::{BookRecordQuery, DependOnBookRecordQuery};
use kernel::interface::update::{BookRecordModifier, DependOnBookRecordModifier};
use kernel::prelude::entity::{Book, BookId, BookRecord, BorrowedAt, Borrower, OccurredAt};
use kernel::KernelError;

/// Use cases of the book collection.
///
/// Every mutating use case looks the record up (or creates it), applies the domain operation,
/// persists the result and only then dispatches the matching [`BookEvent`]. A failure in any
/// step before dispatch ends the call without an event.
#[async_trait::async_trait]
pub trait BookCollection:
    'static
    + Sync
    + Send
    + DependOnBookRecordQuery
    + DependOnBookRecordModifier
    + DependOnBookIdGenerator
    + DependOnBookEventDispatcher
    + DependOnClock
{
    async fn add_book(&self, book: Book) -> error_stack::Result<BookRecord, KernelError> {
        let id = self.book_id_generator().generate().await?;
        let record = BookRecord::available(id, book);
        let record = self
            .book_record_modifier()
            .create_or_update(record)
            .await?;
        tracing::debug!(book_id = %record.id(), "stored new book");

        let event = BookEvent::added(record.id().clone(), OccurredAt::new(self.clock().now()));
        dispatch(self, event).await?;
        Ok(record)
    }

    async fn get_book(&self, id: &BookId) -> error_stack::Result<BookRecord, KernelError> {
        find_existing(self, id).await
    }

    async fn get_all_books(&self) -> error_stack::Result<Vec<BookRecord>, KernelError> {
        self.book_record_query().find_all().await
    }

    async fn update_book<F>(
        &self,
        id: &BookId,
        transform: F,
    ) -> error_stack::Result<BookRecord, KernelError>
    where
        F: FnOnce(BookRecord) -> BookRecord + Send,
    {
        let record = transform(find_existing(self, id).await?);
        let record = self
            .book_record_modifier()
            .create_or_update(record)
            .await?;
        tracing::debug!(book_id = %record.id(), "stored updated book");

        let event = BookEvent::updated(record.id().clone(), OccurredAt::new(self.clock().now()));
        dispatch(self, event).await?;
        Ok(record)
    }

    async fn remove_book(&self, id: &BookId) -> error_stack::Result<(), KernelError> {
        let record = find_existing(self, id).await?;
        self.book_record_modifier().delete(&record).await?;
        tracing::debug!(book_id = %record.id(), "deleted book");

        let event = BookEvent::removed(record.id().clone(), OccurredAt::new(self.clock().now()));
        dispatch(self, event).await
    }

    async fn borrow_book(
        &self,
        id: &BookId,
        borrower: Borrower,
    ) -> error_stack::Result<BookRecord, KernelError> {
        let requested_by = borrower.to_string();
        let record = find_existing(self, id)
            .await?
            .borrow(borrower, BorrowedAt::new(self.clock().now()))
            .attach_printable_lazy(|| format!("requested by {requested_by}"))?;
        let record = self
            .book_record_modifier()
            .create_or_update(record)
            .await?;
        tracing::debug!(book_id = %record.id(), borrower = %requested_by, "stored borrowed book");

        let event = BookEvent::borrowed(record.id().clone(), OccurredAt::new(self.clock().now()));
        dispatch(self, event).await?;
        Ok(record)
    }

    async fn return_book(&self, id: &BookId) -> error_stack::Result<BookRecord, KernelError> {
        let record = find_existing(self, id).await?.return_book()?;
        let record = self
            .book_record_modifier()
            .create_or_update(record)
            .await?;
        tracing::debug!(book_id = %record.id(), "stored returned book");

        let event = BookEvent::returned(record.id().clone(), OccurredAt::new(self.clock().now()));
        dispatch(self, event).await?;
        Ok(record)
    }
}

impl<T> BookCollection for T where
    T: DependOnBookRecordQuery
        + DependOnBookRecordModifier
        + DependOnBookIdGenerator
        + DependOnBookEventDispatcher
        + DependOnClock
{
}

async fn find_existing<T>(module: &T, id: &BookId) -> error_stack::Result<BookRecord, KernelError>
where
    T: DependOnBookRecordQuery + ?Sized,
{
    module
        .book_record_query()
        .find_by_id(id)
        .await?
        .ok_or_else(|| Report::new(KernelError::NotFound(id.clone())))
}

async fn dispatch<T>(module: &T, event: BookEvent) -> error_stack::Result<(), KernelError>
where
    T: DependOnBookEventDispatcher + ?Sized,
{
    let name = event.name();
    let book_id = event.book_id().clone();
    module.book_event_dispatcher().dispatch(event).await?;
    tracing::info!(%book_id, event = name, "dispatched book event");
    Ok(())
}
