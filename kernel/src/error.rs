use std::fmt::Display;

use error_stack::Context;

use crate::entity::BookId;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KernelError {
    NotFound(BookId),
    AlreadyBorrowed(BookId),
    AlreadyReturned(BookId),
    Persistence,
    Dispatch,
    Validation,
    IdGeneration,
}

/// Coarse grouping of [`KernelError`]s for callers that only care about the kind of failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    NotFound,
    NotPossible,
    Invalid,
    Failure,
}

impl KernelError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            KernelError::NotFound(_) => ErrorCategory::NotFound,
            KernelError::AlreadyBorrowed(_) | KernelError::AlreadyReturned(_) => {
                ErrorCategory::NotPossible
            }
            KernelError::Validation => ErrorCategory::Invalid,
            KernelError::Persistence | KernelError::Dispatch | KernelError::IdGeneration => {
                ErrorCategory::Failure
            }
        }
    }
}

impl Display for KernelError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            KernelError::NotFound(id) => write!(f, "The book with ID: {id} does not exist!"),
            KernelError::AlreadyBorrowed(id) => {
                write!(f, "The book with ID: {id} is already borrowed!")
            }
            KernelError::AlreadyReturned(id) => {
                write!(f, "The book with ID: {id} was already returned!")
            }
            KernelError::Persistence => write!(f, "Book store failure"),
            KernelError::Dispatch => write!(f, "Book event dispatch failure"),
            KernelError::Validation => write!(f, "Invalid value"),
            KernelError::IdGeneration => write!(f, "Could not generate an unused book ID"),
        }
    }
}

impl Context for KernelError {}
