use error_stack::Report;
use serde::{Deserialize, Serialize};
use vodca::{AsRefln, Fromln};

use crate::entity::common::reject_blank;
use crate::KernelError;

#[derive(Debug, Clone, Eq, PartialEq, Hash, Serialize, Deserialize, Fromln, AsRefln)]
#[serde(try_from = "String")]
pub struct Author(String);

impl Author {
    pub fn new(name: impl Into<String>) -> error_stack::Result<Self, KernelError> {
        reject_blank("author", name.into()).map(Self)
    }
}

impl TryFrom<String> for Author {
    type Error = Report<KernelError>;
    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}
