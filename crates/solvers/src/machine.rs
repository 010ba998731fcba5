use rootline_core::{Objective, Observer};
use tracing::debug;

use crate::{Action, Error, Event, Solution, newton, newton_safe};

/// The phase a solve is in.
///
/// A solve starts in either phase and may move from `Newton` to `Safe` once;
/// nothing moves back.
#[derive(Debug)]
pub(crate) enum Phase {
    Newton(newton::State),
    Safe(newton_safe::State),
}

/// The outcome of one step: the next phase to run, or a finished solve.
///
/// Values are produced by [`Solver::start`](crate::Solver::start) and by the
/// solvers' internal steps.
#[derive(Debug)]
pub struct Transition(Next);

#[derive(Debug)]
enum Next {
    Continue(Phase),
    Done(Solution),
}

impl Transition {
    pub(crate) fn newton(state: newton::State) -> Self {
        Self(Next::Continue(Phase::Newton(state)))
    }

    pub(crate) fn safe(state: newton_safe::State) -> Self {
        Self(Next::Continue(Phase::Safe(state)))
    }

    pub(crate) fn done(solution: Solution) -> Self {
        Self(Next::Done(solution))
    }
}

/// Steps the active phase until the solve finishes or fails.
pub(crate) fn run<F, Obs>(
    objective: &F,
    mut transition: Transition,
    observer: &mut Obs,
) -> Result<Solution, Error>
where
    F: Objective + ?Sized,
    Obs: Observer<Event, Action>,
{
    loop {
        let phase = match transition.0 {
            Next::Continue(phase) => phase,
            Next::Done(solution) => {
                debug!(
                    root = solution.root,
                    evaluations = solution.evaluations,
                    method = ?solution.method,
                    status = ?solution.status,
                    "root solve finished"
                );
                return Ok(solution);
            }
        };

        let step = match phase {
            Phase::Newton(state) => newton::step(objective, state, observer),
            Phase::Safe(state) => newton_safe::step(objective, state, observer),
        };

        transition = step.inspect_err(|error| debug!(%error, "root solve failed"))?;
    }
}
