use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// `min > max` was passed to a range draw.
    InvalidRange { min: i64, max: i64 },
    /// The range holds fewer than `count` distinct values.
    InsufficientSpan { min: i64, max: i64, count: usize },
}

pub type Result<T> = std::result::Result<T, Error>;

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidRange { min, max } => {
                write!(f, "invalid range: min {} is greater than max {}", min, max)
            }
            Error::InsufficientSpan { min, max, count } => write!(
                f,
                "range [{}, {}] cannot hold {} distinct values",
                min, max, count
            ),
        }
    }
}

impl std::error::Error for Error {}
