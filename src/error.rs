//! Failure kinds raised while turning an upload into events and trips.
//!
//! Per-line problems never show up here: they are logged and the line is
//! dropped. Only conditions that make the whole batch unusable become a
//! [`ProcessingError`].

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ProcessingError {
    #[error("{0}")]
    InvalidFormat(String),

    #[error("Invalid timezone: {time_zone} (city {city_id})")]
    UnknownTimeZone { city_id: i32, time_zone: String },

    #[error("Error reading CSV stream: {0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Upload(String),
}

impl ProcessingError {
    pub fn invalid_format(reason: impl Into<String>) -> Self {
        Self::InvalidFormat(reason.into())
    }

    pub fn upload(reason: impl Into<String>) -> Self {
        Self::Upload(reason.into())
    }

    /// Bad input from the caller, as opposed to a fault on our side.
    pub fn is_invalid_input(&self) -> bool {
        !matches!(self, Self::Io(_))
    }
}

pub type Result<T> = std::result::Result<T, ProcessingError>;
