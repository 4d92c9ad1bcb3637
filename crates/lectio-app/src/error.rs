use thiserror::Error;

/// Application-level errors
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Invalid date slug: {0}")]
    InvalidSlug(String),

    #[error("Year {0} has no computable calendar")]
    UnsupportedYear(i32),
}
