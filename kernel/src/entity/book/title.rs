use error_stack::Report;
use serde::{Deserialize, Serialize};
use vodca::{AsRefln, Fromln};

use crate::entity::common::reject_blank;
use crate::KernelError;

#[derive(Debug, Clone, Eq, PartialEq, Hash, Serialize, Deserialize, Fromln, AsRefln)]
#[serde(try_from = "String")]
pub struct Title(String);

impl Title {
    pub fn new(title: impl Into<String>) -> error_stack::Result<Self, KernelError> {
        reject_blank("title", title.into()).map(Self)
    }
}

impl TryFrom<String> for Title {
    type Error = Report<KernelError>;
    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}
