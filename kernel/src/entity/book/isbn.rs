use error_stack::Report;
use serde::{Deserialize, Serialize};
use vodca::{AsRefln, Fromln};

use crate::KernelError;

const ISBN_13_LENGTH: usize = 13;

/// ISBN in its 13 digit form, without separators.
#[derive(Debug, Clone, Eq, PartialEq, Hash, Serialize, Deserialize, Fromln, AsRefln)]
#[serde(try_from = "String")]
pub struct Isbn13(String);

impl Isbn13 {
    pub fn new(isbn: impl Into<String>) -> error_stack::Result<Self, KernelError> {
        let isbn = isbn.into();
        if isbn.len() != ISBN_13_LENGTH || !isbn.bytes().all(|byte| byte.is_ascii_digit()) {
            return Err(Report::new(KernelError::Validation)
                .attach_printable(format!("'{isbn}' is not a 13 digit ISBN")));
        }
        Ok(Self(isbn))
    }
}

impl TryFrom<String> for Isbn13 {
    type Error = Report<KernelError>;
    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

#[cfg(test)]
mod test {
    use crate::entity::Isbn13;
    use crate::KernelError;

    #[test]
    fn accepts_thirteen_digits() {
        let isbn = Isbn13::new("9780804139021").unwrap();
        assert_eq!(isbn.as_ref(), "9780804139021");
    }

    #[test]
    fn rejects_other_forms() {
        for raw in ["978080413902", "97808041390211", "978-0804139021", "978080413902X", ""] {
            let report = Isbn13::new(raw).unwrap_err();
            assert_eq!(report.current_context(), &KernelError::Validation);
        }
    }
}
