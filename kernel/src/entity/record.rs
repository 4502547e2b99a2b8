mod borrowed_at;
mod borrower;
mod state;

pub use self::{borrowed_at::*, borrower::*, state::*};
use destructure::Destructure;
use error_stack::Report;
use serde::{Deserialize, Serialize};
use vodca::References;

use crate::entity::{Author, Book, BookId, NumberOfPages, Title};
use crate::KernelError;

/// A catalogued book together with its lending state.
///
/// Every operation consumes the record and hands back a new one carrying the same `id`.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize, References, Destructure)]
pub struct BookRecord {
    id: BookId,
    book: Book,
    state: LendingState,
}

impl BookRecord {
    pub fn new(id: BookId, book: Book, state: LendingState) -> Self {
        Self { id, book, state }
    }

    pub fn available(id: BookId, book: Book) -> Self {
        Self::new(id, book, LendingState::Available)
    }

    pub fn borrow(
        self,
        borrower: Borrower,
        at: BorrowedAt,
    ) -> error_stack::Result<Self, KernelError> {
        if self.state.is_borrowed() {
            return Err(Report::new(KernelError::AlreadyBorrowed(self.id)));
        }
        Ok(Self {
            state: LendingState::Borrowed {
                borrower,
                since: at,
            },
            ..self
        })
    }

    pub fn return_book(self) -> error_stack::Result<Self, KernelError> {
        if self.state.is_available() {
            return Err(Report::new(KernelError::AlreadyReturned(self.id)));
        }
        Ok(Self {
            state: LendingState::Available,
            ..self
        })
    }

    pub fn change_title(mut self, title: Title) -> Self {
        self.book.substitute(|book| *book.title = title);
        self
    }

    pub fn change_authors(mut self, authors: Vec<Author>) -> Self {
        self.book.substitute(|book| *book.authors = authors);
        self
    }

    pub fn change_number_of_pages(mut self, pages: Option<NumberOfPages>) -> Self {
        self.book.substitute(|book| *book.number_of_pages = pages);
        self
    }
}

#[cfg(test)]
mod test {
    use time::macros::datetime;
    use uuid::Uuid;

    use crate::entity::{
        Author, Book, BookId, BookRecord, BorrowedAt, Borrower, Isbn13, LendingState,
        NumberOfPages, Title,
    };
    use crate::KernelError;

    fn knight_of_the_seven_kingdoms() -> error_stack::Result<Book, KernelError> {
        Ok(Book::new(
            Isbn13::new("9780399593673")?,
            Title::new("A Knight of the Seven Kingdoms")?,
            vec![Author::new("George R. R. Martin")?],
            Some(NumberOfPages::new(368u32)?),
        ))
    }

    fn record() -> error_stack::Result<BookRecord, KernelError> {
        Ok(BookRecord::available(
            BookId::new(Uuid::new_v4()),
            knight_of_the_seven_kingdoms()?,
        ))
    }

    #[test]
    fn records_start_available() -> error_stack::Result<(), KernelError> {
        let record = record()?;
        assert_eq!(record.state(), &LendingState::Available);
        Ok(())
    }

    #[test]
    fn available_record_can_be_borrowed() -> error_stack::Result<(), KernelError> {
        let record = record()?;
        let id = record.id().clone();
        let borrower = Borrower::new("Duncan the Tall")?;
        let at = BorrowedAt::new(datetime!(2017-09-23 12:34:56.789 UTC));

        let borrowed = record.borrow(borrower.clone(), at.clone())?;

        assert_eq!(borrowed.id(), &id);
        assert_eq!(
            borrowed.state(),
            &LendingState::Borrowed {
                borrower,
                since: at
            }
        );
        Ok(())
    }

    #[test]
    fn returning_an_available_record_is_rejected() -> error_stack::Result<(), KernelError> {
        let record = record()?;
        let id = record.id().clone();

        let report = record.return_book().unwrap_err();

        assert_eq!(report.current_context(), &KernelError::AlreadyReturned(id));
        Ok(())
    }

    #[test]
    fn borrowed_record_can_be_returned() -> error_stack::Result<(), KernelError> {
        let original = record()?;
        let borrowed = original.clone().borrow(
            Borrower::new("Duncan the Tall")?,
            BorrowedAt::new(datetime!(2017-09-23 12:34:56.789 UTC)),
        )?;

        let returned = borrowed.return_book()?;

        assert_eq!(returned.state(), &LendingState::Available);
        assert_eq!(returned, original);
        Ok(())
    }

    #[test]
    fn borrowing_a_borrowed_record_is_rejected() -> error_stack::Result<(), KernelError> {
        let record = record()?;
        let id = record.id().clone();
        let at = BorrowedAt::new(datetime!(2017-09-23 12:34:56.789 UTC));
        let borrowed = record.borrow(Borrower::new("Duncan the Tall")?, at.clone())?;

        let report = borrowed.borrow(Borrower::new("Egg")?, at).unwrap_err();

        assert_eq!(report.current_context(), &KernelError::AlreadyBorrowed(id));
        Ok(())
    }

    #[test]
    fn title_can_be_changed() -> error_stack::Result<(), KernelError> {
        let changed = record()?.change_title(Title::new("New Title")?);
        assert_eq!(changed.book().title(), &Title::new("New Title")?);
        Ok(())
    }

    #[test]
    fn authors_can_be_changed_or_removed() -> error_stack::Result<(), KernelError> {
        let record = record()?;

        let changed = record.clone().change_authors(vec![Author::new("New Author")?]);
        assert_eq!(changed.book().authors(), &vec![Author::new("New Author")?]);

        let removed = record.change_authors(Vec::new());
        assert!(removed.book().authors().is_empty());
        Ok(())
    }

    #[test]
    fn number_of_pages_can_be_changed_or_removed() -> error_stack::Result<(), KernelError> {
        let record = record()?;

        let changed = record
            .clone()
            .change_number_of_pages(Some(NumberOfPages::new(256u32)?));
        assert_eq!(
            changed.book().number_of_pages(),
            &Some(NumberOfPages::new(256u32)?)
        );

        let removed = record.change_number_of_pages(None);
        assert_eq!(removed.book().number_of_pages(), &None);
        Ok(())
    }

    #[test]
    fn field_edits_leave_identity_and_state_alone() -> error_stack::Result<(), KernelError> {
        let borrowed = record()?.borrow(
            Borrower::new("Duncan the Tall")?,
            BorrowedAt::new(datetime!(2017-09-23 12:34:56.789 UTC)),
        )?;

        let changed = borrowed.clone().change_title(Title::new("The Hedge Knight")?);

        assert_eq!(changed.id(), borrowed.id());
        assert_eq!(changed.state(), borrowed.state());
        assert_eq!(changed.book().isbn(), borrowed.book().isbn());
        Ok(())
    }

    #[test]
    fn lending_state_is_tagged_when_serialized() -> error_stack::Result<(), KernelError> {
        let borrowed = LendingState::Borrowed {
            borrower: Borrower::new("Ann")?,
            since: BorrowedAt::new(datetime!(2017-09-23 12:34:56.789 UTC)),
        };
        let json = serde_json::to_value(&borrowed).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "status": "borrowed",
                "borrower": "Ann",
                "since": "2017-09-23T12:34:56.789Z",
            })
        );
        assert_eq!(
            serde_json::to_value(LendingState::Available).unwrap(),
            serde_json::json!({ "status": "available" })
        );
        Ok(())
    }
}
