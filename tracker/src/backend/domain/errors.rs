use thiserror::Error;

use super::date_codec::ParseError;

/// Errors surfaced to the caller of record store and calendar operations
#[derive(Debug, Error)]
pub enum TrackerError {
    #[error(transparent)]
    Parse(#[from] ParseError),
    #[error("{date} already holds {limit} drink records")]
    CapacityExceeded { date: String, limit: usize },
    #[error("{0} cannot be empty")]
    EmptyField(&'static str),
    #[error("Invalid month: {0}. Must be between 1 and 12")]
    InvalidMonth(u32),
    #[error("Year {0} is outside the supported calendar range")]
    InvalidYear(i32),
    #[error("id generator kept producing ids already in use (last: {0})")]
    DuplicateId(String),
    #[error("failed to persist tracker state: {0}")]
    Storage(#[from] anyhow::Error),
}
