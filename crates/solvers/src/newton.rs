//! Newton-Raphson root finding with a bracket-preserving fallback.
//!
//! # Algorithm
//!
//! Starting from the guess, each step evaluates `f` and `f'` at the iterate
//! and moves by `dx = f / f'`. The solve converges once `|dx|` drops below the
//! requested accuracy.
//!
//! Newton is fast near a simple root but can jump arbitrarily far when `f'` is
//! small. Whenever an iterate lands outside `[low, high]` (or is NaN), the
//! solver hands the rest of the solve to [`NewtonSafe`](crate::NewtonSafe),
//! starting from the last in-bracket iterate with whatever evaluation budget
//! is left. This happens at most once per solve.
//!
//! # Errors
//!
//! - [`Error::MissingDerivative`] if the derivative is undefined at the guess
//! - [`Error::EvaluationsExceeded`] if the budget runs out, reporting the
//!   maximum configured on this solver even when the fallback ran out
//! - [`Error::NotBracketed`] if the fallback finds no sign change
//!
//! # Observer Events
//!
//! One [`Event::Evaluated`] per evaluation and one [`Event::Handoff`] when the
//! fallback takes over. [`Action::StopEarly`] returns the current iterate.
//!
//! [`Error::MissingDerivative`]: crate::Error::MissingDerivative
//! [`Error::EvaluationsExceeded`]: crate::Error::EvaluationsExceeded
//! [`Error::NotBracketed`]: crate::Error::NotBracketed
//! [`Event::Evaluated`]: crate::Event::Evaluated
//! [`Event::Handoff`]: crate::Event::Handoff
//! [`Action::StopEarly`]: crate::Action::StopEarly
//!
//! # Example
//!
//! ```
//! use rootline_core::from_fns;
//! use rootline_solvers::{Newton, Solver};
//!
//! let f = from_fns(|x: f64| x * x - 2.0, |x: f64| 2.0 * x);
//! let solution = Newton::default().solve(&f, 1e-10, 1.0, 0.0, 2.0).unwrap();
//!
//! assert!((solution.root - std::f64::consts::SQRT_2).abs() < 1e-10);
//! ```

mod state;

#[cfg(test)]
mod tests;

pub(crate) use state::{State, step};

use rootline_core::{Objective, Observer};

use crate::{Action, Config, Error, Event, Iteration, Solver, Transition};

/// Newton-Raphson solver.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Newton {
    config: Config,
}

impl Newton {
    /// Creates a solver with the given configuration.
    #[must_use]
    pub fn new(config: Config) -> Self {
        Self { config }
    }
}

impl Solver for Newton {
    fn config(&self) -> &Config {
        &self.config
    }

    fn config_mut(&mut self) -> &mut Config {
        &mut self.config
    }

    fn start<F, Obs>(
        &self,
        objective: &F,
        iteration: Iteration,
        observer: &mut Obs,
    ) -> Result<Transition, Error>
    where
        F: Objective + ?Sized,
        Obs: Observer<Event, Action>,
    {
        state::start(objective, iteration, observer)
    }
}
