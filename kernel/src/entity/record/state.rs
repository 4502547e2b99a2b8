use serde::{Deserialize, Serialize};

use crate::entity::{BorrowedAt, Borrower};

/// Lending state of a [`BookRecord`](crate::entity::BookRecord).
///
/// Who holds a book and since when only exists while it is borrowed.
#[derive(Debug, Clone, Default, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum LendingState {
    #[default]
    Available,
    Borrowed {
        borrower: Borrower,
        since: BorrowedAt,
    },
}

impl LendingState {
    pub fn is_available(&self) -> bool {
        matches!(self, Self::Available)
    }

    pub fn is_borrowed(&self) -> bool {
        matches!(self, Self::Borrowed { .. })
    }

    pub fn borrower(&self) -> Option<&Borrower> {
        match self {
            Self::Available => None,
            Self::Borrowed { borrower, .. } => Some(borrower),
        }
    }
}
