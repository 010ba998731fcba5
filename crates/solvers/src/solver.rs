use rootline_core::{Objective, Observer};

use crate::{
    Action, Bracket, Config, ConfigError, Error, Event, Iteration, Newton, NewtonSafe, Solution,
    Transition, bracket::check_accuracy, machine,
};

mod sealed {
    pub trait Sealed {}
}

impl sealed::Sealed for Newton {}
impl sealed::Sealed for NewtonSafe {}

/// The contract shared by the root solvers.
///
/// [`solve`](Solver::solve) validates the inputs, creates the per-call
/// [`Iteration`], and runs the step loop. Each solver only decides how a solve
/// starts: which first evaluations to make and which phase to enter.
///
/// This trait is sealed. It is implemented by [`Newton`](crate::Newton) and
/// [`NewtonSafe`](crate::NewtonSafe) and cannot be implemented outside this
/// crate.
pub trait Solver: sealed::Sealed {
    /// Returns the solver configuration.
    fn config(&self) -> &Config;

    /// Returns the solver configuration for modification.
    fn config_mut(&mut self) -> &mut Config;

    /// Sets the evaluation budget for subsequent solves.
    ///
    /// # Errors
    ///
    /// Returns an error if `max_evaluations` is zero.
    fn set_max_evaluations(&mut self, max_evaluations: usize) -> Result<(), ConfigError> {
        *self.config_mut() = Config::new(max_evaluations)?;
        Ok(())
    }

    /// Makes the first evaluations of a solve and picks the starting phase.
    ///
    /// # Errors
    ///
    /// Returns an error if the solve cannot start from `iteration`.
    #[doc(hidden)]
    fn start<F, Obs>(
        &self,
        objective: &F,
        iteration: Iteration,
        observer: &mut Obs,
    ) -> Result<Transition, Error>
    where
        F: Objective + ?Sized,
        Obs: Observer<Event, Action>;

    /// Finds a root of `objective` in `[low, high]` starting from `guess`.
    ///
    /// The solve converges when a step is smaller than `accuracy`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidBracket`] before any evaluation if the bracket,
    /// guess, or accuracy is invalid, and the solver-specific errors described
    /// on each implementation otherwise.
    fn solve<F>(
        &self,
        objective: &F,
        accuracy: f64,
        guess: f64,
        low: f64,
        high: f64,
    ) -> Result<Solution, Error>
    where
        F: Objective + ?Sized,
    {
        self.solve_observed(objective, accuracy, guess, low, high, ())
    }

    /// Finds a root like [`solve`](Solver::solve), reporting each evaluation
    /// and handoff to `observer`.
    ///
    /// # Errors
    ///
    /// Same as [`solve`](Solver::solve).
    fn solve_observed<F, Obs>(
        &self,
        objective: &F,
        accuracy: f64,
        guess: f64,
        low: f64,
        high: f64,
        mut observer: Obs,
    ) -> Result<Solution, Error>
    where
        F: Objective + ?Sized,
        Obs: Observer<Event, Action>,
    {
        let bracket = Bracket::new(low, high)?;
        let guess = bracket.check_guess(guess)?;
        let accuracy = check_accuracy(accuracy)?;

        let iteration = Iteration::new(guess, accuracy, bracket, self.config().max_evaluations());
        let transition = self.start(objective, iteration, &mut observer)?;
        machine::run(objective, transition, &mut observer)
    }
}
