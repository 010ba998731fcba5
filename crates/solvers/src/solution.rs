use crate::Iteration;

/// Indicates how the solve finished.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// The last step was smaller than the requested accuracy.
    Converged,

    /// Stopped early due to an observer decision.
    StoppedByObserver,
}

/// The algorithm that produced an iterate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    /// Plain Newton-Raphson.
    Newton,

    /// Newton-Raphson safeguarded by bisection.
    NewtonSafe,
}

/// The result of a root solve.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Solution {
    /// Final solver status.
    pub status: Status,

    /// Root estimate.
    pub root: f64,

    /// Method that produced the root estimate.
    pub method: Method,

    /// Objective evaluations performed, across both methods.
    pub evaluations: usize,
}

impl Solution {
    pub(crate) fn converged(method: Method, iteration: &Iteration) -> Self {
        Self::from_iteration(Status::Converged, method, iteration)
    }

    pub(crate) fn stopped(method: Method, iteration: &Iteration) -> Self {
        Self::from_iteration(Status::StoppedByObserver, method, iteration)
    }

    fn from_iteration(status: Status, method: Method, iteration: &Iteration) -> Self {
        Self {
            status,
            root: iteration.root(),
            method,
            evaluations: iteration.evaluations(),
        }
    }
}
