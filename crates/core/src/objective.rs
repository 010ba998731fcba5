/// Derivative of an objective at a point.
///
/// `Undefined` is a distinct state, not a numeric sentinel: a derivative of
/// exactly zero is `Defined(0.0)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Derivative {
    /// The derivative exists and has this value.
    Defined(f64),

    /// The objective provides no derivative at this point.
    Undefined,
}

impl Derivative {
    /// Returns the derivative value, if defined.
    #[must_use]
    pub fn value(self) -> Option<f64> {
        match self {
            Self::Defined(value) => Some(value),
            Self::Undefined => None,
        }
    }

    /// Returns true if the derivative is defined.
    #[must_use]
    pub fn is_defined(self) -> bool {
        matches!(self, Self::Defined(_))
    }
}

impl From<f64> for Derivative {
    fn from(value: f64) -> Self {
        Self::Defined(value)
    }
}

impl From<Option<f64>> for Derivative {
    fn from(value: Option<f64>) -> Self {
        value.map_or(Self::Undefined, Self::Defined)
    }
}

/// A real function whose root is sought.
///
/// Implementations must be pure and deterministic: solvers may evaluate the
/// same point more than once and count every paired value/derivative call
/// against their evaluation budget.
pub trait Objective {
    /// Returns the function value at `x`.
    fn value(&self, x: f64) -> f64;

    /// Returns the derivative at `x`, or [`Derivative::Undefined`].
    fn derivative(&self, x: f64) -> Derivative;

    /// Evaluates value and derivative together.
    fn evaluate(&self, x: f64) -> Evaluation {
        Evaluation {
            x,
            value: self.value(x),
            derivative: self.derivative(x),
        }
    }
}

impl<T: Objective + ?Sized> Objective for &T {
    fn value(&self, x: f64) -> f64 {
        (**self).value(x)
    }

    fn derivative(&self, x: f64) -> Derivative {
        (**self).derivative(x)
    }
}

/// A captured value/derivative pair at a point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Evaluation {
    pub x: f64,
    pub value: f64,
    pub derivative: Derivative,
}

/// An objective built from a value closure and a derivative closure.
///
/// Created by [`from_fns`].
#[derive(Debug, Clone, Copy)]
pub struct FnObjective<F, D> {
    value: F,
    derivative: D,
}

/// Builds an objective from two closures.
///
/// The derivative closure may return `f64`, for a derivative that is defined
/// everywhere, or `Option<f64>`, where `None` marks the derivative undefined.
///
/// # Example
///
/// ```
/// use rootline_core::{Derivative, Objective, from_fns};
///
/// let f = from_fns(|x: f64| x * x - 2.0, |x: f64| 2.0 * x);
/// assert_eq!(f.value(2.0), 2.0);
/// assert_eq!(f.derivative(2.0), Derivative::Defined(4.0));
/// ```
pub fn from_fns<F, D, R>(value: F, derivative: D) -> FnObjective<F, D>
where
    F: Fn(f64) -> f64,
    D: Fn(f64) -> R,
    R: Into<Derivative>,
{
    FnObjective { value, derivative }
}

impl<F, D, R> Objective for FnObjective<F, D>
where
    F: Fn(f64) -> f64,
    D: Fn(f64) -> R,
    R: Into<Derivative>,
{
    fn value(&self, x: f64) -> f64 {
        (self.value)(x)
    }

    fn derivative(&self, x: f64) -> Derivative {
        (self.derivative)(x).into()
    }
}

/// An objective with no derivative anywhere.
#[derive(Debug, Clone, Copy)]
pub struct ValueOnly<F>(pub F);

impl<F> Objective for ValueOnly<F>
where
    F: Fn(f64) -> f64,
{
    fn value(&self, x: f64) -> f64 {
        (self.0)(x)
    }

    fn derivative(&self, _x: f64) -> Derivative {
        Derivative::Undefined
    }
}
