use serde::{Deserialize, Serialize};

use crate::entity::{BookId, OccurredAt};

const BOOK_ADDED: &str = "BookAdded";
const BOOK_UPDATED: &str = "BookUpdated";
const BOOK_REMOVED: &str = "BookRemoved";
const BOOK_BORROWED: &str = "BookBorrowed";
const BOOK_RETURNED: &str = "BookReturned";

/// Fact about a book that has already been persisted.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum BookEvent {
    #[serde(rename = "BookAdded")]
    Added {
        book_id: BookId,
        timestamp: OccurredAt<BookEvent>,
    },
    #[serde(rename = "BookUpdated")]
    Updated {
        book_id: BookId,
        timestamp: OccurredAt<BookEvent>,
    },
    #[serde(rename = "BookRemoved")]
    Removed {
        book_id: BookId,
        timestamp: OccurredAt<BookEvent>,
    },
    #[serde(rename = "BookBorrowed")]
    Borrowed {
        book_id: BookId,
        timestamp: OccurredAt<BookEvent>,
    },
    #[serde(rename = "BookReturned")]
    Returned {
        book_id: BookId,
        timestamp: OccurredAt<BookEvent>,
    },
}

impl BookEvent {
    pub fn added(book_id: BookId, timestamp: OccurredAt<BookEvent>) -> Self {
        Self::Added { book_id, timestamp }
    }

    pub fn updated(book_id: BookId, timestamp: OccurredAt<BookEvent>) -> Self {
        Self::Updated { book_id, timestamp }
    }

    pub fn removed(book_id: BookId, timestamp: OccurredAt<BookEvent>) -> Self {
        Self::Removed { book_id, timestamp }
    }

    pub fn borrowed(book_id: BookId, timestamp: OccurredAt<BookEvent>) -> Self {
        Self::Borrowed { book_id, timestamp }
    }

    pub fn returned(book_id: BookId, timestamp: OccurredAt<BookEvent>) -> Self {
        Self::Returned { book_id, timestamp }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Added { .. } => BOOK_ADDED,
            Self::Updated { .. } => BOOK_UPDATED,
            Self::Removed { .. } => BOOK_REMOVED,
            Self::Borrowed { .. } => BOOK_BORROWED,
            Self::Returned { .. } => BOOK_RETURNED,
        }
    }

    pub fn book_id(&self) -> &BookId {
        match self {
            Self::Added { book_id, .. }
            | Self::Updated { book_id, .. }
            | Self::Removed { book_id, .. }
            | Self::Borrowed { book_id, .. }
            | Self::Returned { book_id, .. } => book_id,
        }
    }

    pub fn timestamp(&self) -> &OccurredAt<BookEvent> {
        match self {
            Self::Added { timestamp, .. }
            | Self::Updated { timestamp, .. }
            | Self::Removed { timestamp, .. }
            | Self::Borrowed { timestamp, .. }
            | Self::Returned { timestamp, .. } => timestamp,
        }
    }
}
