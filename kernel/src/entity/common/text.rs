use error_stack::Report;

use crate::KernelError;

pub(crate) fn reject_blank(field: &str, value: String) -> error_stack::Result<String, KernelError> {
    if value.trim().is_empty() {
        return Err(Report::new(KernelError::Validation)
            .attach_printable(format!("{field} must not be blank")));
    }
    Ok(value)
}
