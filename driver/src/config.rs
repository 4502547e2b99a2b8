use destructure::Mutation;
use error_stack::Report;
use vodca::References;

use kernel::KernelError;

use crate::env;
use crate::error::{ConvertError, DriverError};

const ID_MAX_ATTEMPTS: &str = "LIBRARY_ID_MAX_ATTEMPTS";
const EVENT_CAPACITY: &str = "LIBRARY_EVENT_CAPACITY";

#[derive(Debug, Clone, References, Mutation)]
pub struct LibraryConfig {
    /// How often the id generator may draw an id that is already taken before giving up.
    id_max_attempts: u32,
    event_capacity: usize,
}

impl Default for LibraryConfig {
    fn default() -> Self {
        Self {
            id_max_attempts: 16,
            event_capacity: 64,
        }
    }
}

impl LibraryConfig {
    /// Reads overrides from the environment (or a `.env` file). Unset keys keep their defaults.
    pub fn from_env() -> error_stack::Result<Self, KernelError> {
        let mut config = Self::default();
        if let Some(attempts) = read::<u32>(ID_MAX_ATTEMPTS).convert_error()? {
            reject_zero(ID_MAX_ATTEMPTS, attempts == 0)?;
            config.substitute(|config| *config.id_max_attempts = attempts);
        }
        if let Some(capacity) = read::<usize>(EVENT_CAPACITY).convert_error()? {
            reject_zero(EVENT_CAPACITY, capacity == 0)?;
            config.substitute(|config| *config.event_capacity = capacity);
        }
        Ok(config)
    }
}

fn reject_zero(key: &str, is_zero: bool) -> error_stack::Result<(), KernelError> {
    if is_zero {
        return Err(Report::new(KernelError::Validation)
            .attach_printable(format!("{key} must be greater than zero")));
    }
    Ok(())
}

fn read<T>(key: &str) -> Result<Option<T>, DriverError>
where
    T: std::str::FromStr<Err = std::num::ParseIntError>,
{
    match env(key) {
        Ok(raw) => Ok(Some(raw.trim().parse()?)),
        Err(DriverError::Env(dotenvy::Error::EnvVar(std::env::VarError::NotPresent))) => Ok(None),
        Err(error) => Err(error),
    }
}
