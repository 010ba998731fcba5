use rootline_core::{Evaluation, Objective};
use tracing::trace;

use crate::{Bracket, Error, budget::Budget};

/// State of one solve: the current iterate, the convergence threshold, the
/// bracket, and the evaluation budget.
///
/// An `Iteration` is created by [`Solver::solve`](crate::Solver::solve) and
/// moved through each strategy step. It never outlives the call.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Iteration {
    root: f64,
    accuracy: f64,
    bracket: Bracket,
    budget: Budget,
}

impl Iteration {
    pub(crate) fn new(root: f64, accuracy: f64, bracket: Bracket, max_evaluations: usize) -> Self {
        Self {
            root,
            accuracy,
            bracket,
            budget: Budget::new(max_evaluations),
        }
    }

    /// Current iterate.
    #[must_use]
    pub fn root(&self) -> f64 {
        self.root
    }

    /// Step-size threshold below which the solve has converged.
    #[must_use]
    pub fn accuracy(&self) -> f64 {
        self.accuracy
    }

    /// Bracket the solve was started with.
    #[must_use]
    pub fn bracket(&self) -> Bracket {
        self.bracket
    }

    /// Evaluations performed so far, across all phases.
    #[must_use]
    pub fn evaluations(&self) -> usize {
        self.budget.total()
    }

    /// Evaluations the current phase may still perform.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.budget.remaining()
    }

    pub(crate) fn set_root(&mut self, root: f64) {
        self.root = root;
    }

    /// Evaluates the objective at `x`, spending one unit of budget.
    ///
    /// No call is made once the budget is spent.
    pub(crate) fn evaluate<F>(&mut self, objective: &F, x: f64) -> Result<Evaluation, Error>
    where
        F: Objective + ?Sized,
    {
        self.budget.spend()?;
        let evaluation = objective.evaluate(x);
        trace!(
            x,
            value = evaluation.value,
            evaluations = self.budget.total(),
            "evaluated objective"
        );
        Ok(evaluation)
    }

    /// Starts a fallback phase at `guess` with the remaining budget.
    pub(crate) fn handoff(&self, guess: f64) -> Self {
        Self {
            root: guess,
            budget: self.budget.handoff(),
            ..*self
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::cell::Cell;

    use rootline_core::from_fns;

    #[test]
    fn evaluate_counts_each_call() {
        let calls = Cell::new(0);
        let f = from_fns(
            |x: f64| {
                calls.set(calls.get() + 1);
                x
            },
            |_: f64| 1.0,
        );
        let mut iteration = Iteration::new(0.5, 1e-8, Bracket::new(0.0, 1.0).unwrap(), 2);

        iteration.evaluate(&f, 0.1).unwrap();
        iteration.evaluate(&f, 0.2).unwrap();
        let err = iteration.evaluate(&f, 0.3).unwrap_err();

        assert_eq!(err, Error::EvaluationsExceeded { max_evaluations: 2 });
        assert_eq!(calls.get(), 2);
        assert_eq!(iteration.evaluations(), 2);
    }

    #[test]
    fn handoff_keeps_bracket_and_total() {
        let f = from_fns(|x: f64| x, |_: f64| 1.0);
        let mut iteration = Iteration::new(0.5, 1e-8, Bracket::new(0.0, 1.0).unwrap(), 10);
        iteration.evaluate(&f, 0.5).unwrap();

        let fallback = iteration.handoff(0.25);

        assert_eq!(fallback.root(), 0.25);
        assert_eq!(fallback.bracket(), iteration.bracket());
        assert_eq!(fallback.remaining(), 9);
        assert_eq!(fallback.evaluations(), 1);
    }
}
