use crate::error::DriverError;

pub mod clock;
pub mod config;
pub mod database;
pub mod dispatch;
pub mod error;
pub mod identifier;
pub mod module;

pub(crate) fn env(key: &str) -> Result<String, DriverError> {
    dotenvy::var(key).map_err(DriverError::from)
}
