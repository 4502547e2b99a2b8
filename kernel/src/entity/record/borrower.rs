use std::fmt::{Display, Formatter};

use error_stack::Report;
use serde::{Deserialize, Serialize};
use vodca::{AsRefln, Fromln};

use crate::entity::common::reject_blank;
use crate::KernelError;

/// Person holding a borrowed book.
#[derive(Debug, Clone, Eq, PartialEq, Hash, Serialize, Deserialize, Fromln, AsRefln)]
#[serde(try_from = "String")]
pub struct Borrower(String);

impl Borrower {
    pub fn new(name: impl Into<String>) -> error_stack::Result<Self, KernelError> {
        reject_blank("borrower", name.into()).map(Self)
    }
}

impl TryFrom<String> for Borrower {
    type Error = Report<KernelError>;
    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl Display for Borrower {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}
