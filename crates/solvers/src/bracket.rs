use thiserror::Error;

/// A closed search interval `[low, high]` with finite bounds and `low <= high`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bracket {
    low: f64,
    high: f64,
}

/// Reasons a solve is rejected before any evaluation.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum BracketError {
    #[error("bracket bound is not finite: {value}")]
    NonFinite { value: f64 },

    #[error("bracket is reversed: low {low} > high {high}")]
    Reversed { low: f64, high: f64 },

    #[error("guess {guess} lies outside [{low}, {high}]")]
    GuessOutside { guess: f64, low: f64, high: f64 },

    #[error("accuracy must be finite and positive, got {accuracy}")]
    Accuracy { accuracy: f64 },
}

impl Bracket {
    /// Creates a bracket from finite, ordered bounds.
    ///
    /// A zero-width bracket (`low == high`) is allowed.
    ///
    /// # Errors
    ///
    /// Returns an error if either bound is not finite or if `low > high`.
    pub fn new(low: f64, high: f64) -> Result<Self, BracketError> {
        if !low.is_finite() {
            return Err(BracketError::NonFinite { value: low });
        }
        if !high.is_finite() {
            return Err(BracketError::NonFinite { value: high });
        }
        if low > high {
            return Err(BracketError::Reversed { low, high });
        }
        Ok(Self { low, high })
    }

    /// Creates the bracket spanning two points given in either order.
    pub(crate) fn spanning(a: f64, b: f64) -> Self {
        if a <= b {
            Self { low: a, high: b }
        } else {
            Self { low: b, high: a }
        }
    }

    #[must_use]
    pub fn low(&self) -> f64 {
        self.low
    }

    #[must_use]
    pub fn high(&self) -> f64 {
        self.high
    }

    #[must_use]
    pub fn width(&self) -> f64 {
        self.high - self.low
    }

    /// Returns true if `x` lies in `[low, high]`.
    ///
    /// NaN is never contained.
    #[must_use]
    pub fn contains(&self, x: f64) -> bool {
        self.low <= x && x <= self.high
    }

    /// Checks that a starting guess lies within the bracket.
    pub(crate) fn check_guess(&self, guess: f64) -> Result<f64, BracketError> {
        if self.contains(guess) {
            Ok(guess)
        } else {
            Err(BracketError::GuessOutside {
                guess,
                low: self.low,
                high: self.high,
            })
        }
    }
}

/// Checks that a step-size accuracy is usable as a convergence threshold.
pub(crate) fn check_accuracy(accuracy: f64) -> Result<f64, BracketError> {
    if accuracy.is_finite() && accuracy > 0.0 {
        Ok(accuracy)
    } else {
        Err(BracketError::Accuracy { accuracy })
    }
}
