use error_stack::Report;
use serde::{Deserialize, Serialize};
use vodca::{AsRefln, Fromln};

use crate::KernelError;

#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, Serialize, Deserialize, Fromln, AsRefln)]
#[serde(try_from = "u32")]
pub struct NumberOfPages(u32);

impl NumberOfPages {
    pub fn new(pages: impl Into<u32>) -> error_stack::Result<Self, KernelError> {
        let pages = pages.into();
        if pages == 0 {
            return Err(Report::new(KernelError::Validation)
                .attach_printable("a book has at least one page"));
        }
        Ok(Self(pages))
    }
}

impl TryFrom<u32> for NumberOfPages {
    type Error = Report<KernelError>;
    fn try_from(value: u32) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}
