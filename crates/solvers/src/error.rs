use thiserror::Error;

use crate::BracketError;

/// Errors that can occur while finding a root.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum Error {
    #[error("invalid bracket: {0}")]
    InvalidBracket(#[from] BracketError),

    #[error("derivative is undefined at the initial guess x = {x}")]
    MissingDerivative { x: f64 },

    #[error("maximum number of function evaluations ({max_evaluations}) exceeded")]
    EvaluationsExceeded { max_evaluations: usize },

    #[error("root not bracketed: f({low}) = {f_low}, f({high}) = {f_high}")]
    NotBracketed {
        low: f64,
        high: f64,
        f_low: f64,
        f_high: f64,
    },
}
