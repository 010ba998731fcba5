use thiserror::Error;

/// Errors that can occur when evaluating calendar rules.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    #[error("no Easter data for year {year}, supported years are 1900 to 2199")]
    YearOutOfRange { year: i32 },
}
