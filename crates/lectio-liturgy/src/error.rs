use thiserror::Error;

/// Liturgical engine errors
#[derive(Error, Debug)]
pub enum LiturgyError {
    #[error("Invalid date: {0}")]
    InvalidDate(String),
}

pub type LiturgyResult<T> = std::result::Result<T, LiturgyError>;
