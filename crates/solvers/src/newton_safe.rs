//! Newton-Raphson safeguarded by bisection.
//!
//! # Algorithm
//!
//! The solver first evaluates both bracket ends. If either is already within
//! accuracy of zero it is returned; if they share a sign the root is not
//! bracketed and the solve fails. The bracket is then oriented so that `f` is
//! negative at one end (`xl`) and positive at the other (`xh`).
//!
//! Each step tries a Newton step from the current iterate and falls back to
//! bisecting `[xl, xh]` when:
//! - the derivative is undefined,
//! - the Newton step would leave the bracket, or
//! - the Newton step is not shrinking fast enough (`|2f| > |dx_old f'|`).
//!
//! After each evaluation the bracket end with the same sign as `f` moves to the
//! new iterate, so the bracket never grows and every iterate stays inside it.
//! The solve converges once a step is smaller than the requested accuracy.
//!
//! Every evaluation counts against the budget, including the two bracket ends.
//!
//! # When to Use
//!
//! Directly, when a bracket with a sign change is known and robustness matters
//! more than the few extra evaluations. It is also the fallback that
//! [`Newton`](crate::Newton) hands over to.

mod state;


pub(crate) use state::{State, start, step};

use rootline_core::{Objective, Observer};

use crate::{Action, Config, Error, Event, Iteration, Solver, Transition};

/// Safeguarded Newton-Raphson solver.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NewtonSafe {
    config: Config,
}

impl NewtonSafe {
    /// Creates a solver with the given configuration.
    #[must_use]
    pub fn new(config: Config) -> Self {
        Self { config }
    }
}

impl Solver for NewtonSafe {
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
        start(objective, iteration, observer)
    }
}
