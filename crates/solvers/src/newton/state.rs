use rootline_core::{Derivative, Objective, Observer};
use tracing::debug;

use crate::{Action, Error, Event, Iteration, Method, Solution, Transition, newton_safe};

/// Newton phase state: the iteration and the evaluation at its iterate.
#[derive(Debug)]
pub(crate) struct State {
    iteration: Iteration,
    value: f64,
    derivative: Derivative,
}

/// Evaluates the guess and enters the Newton phase.
///
/// An undefined derivative here is fatal. Later on it only forces a handoff.
pub(super) fn start<F, Obs>(
    objective: &F,
    mut iteration: Iteration,
    observer: &mut Obs,
) -> Result<Transition, Error>
where
    F: Objective + ?Sized,
    Obs: Observer<Event, Action>,
{
    let evaluation = iteration.evaluate(objective, iteration.root())?;
    if !evaluation.derivative.is_defined() {
        return Err(Error::MissingDerivative { x: evaluation.x });
    }

    let event = Event::evaluated(Method::Newton, &iteration, evaluation, iteration.bracket());
    if let Some(Action::StopEarly) = observer.observe(&event) {
        return Ok(Transition::done(Solution::stopped(
            Method::Newton,
            &iteration,
        )));
    }

    Ok(Transition::newton(State {
        iteration,
        value: evaluation.value,
        derivative: evaluation.derivative,
    }))
}

/// Takes one Newton step.
pub(crate) fn step<F, Obs>(
    objective: &F,
    state: State,
    observer: &mut Obs,
) -> Result<Transition, Error>
where
    F: Objective + ?Sized,
    Obs: Observer<Event, Action>,
{
    let State {
        mut iteration,
        value,
        derivative,
    } = state;

    // An undefined derivative gives a NaN step, which fails the bracket test.
    let dx = derivative.value().map_or(f64::NAN, |d| value / d);
    let root = iteration.root() - dx;

    if !iteration.bracket().contains(root) {
        return hand_off(objective, &iteration, root, observer);
    }

    iteration.set_root(root);
    if dx.abs() < iteration.accuracy() {
        return Ok(Transition::done(Solution::converged(
            Method::Newton,
            &iteration,
        )));
    }

    let evaluation = iteration.evaluate(objective, root)?;
    let event = Event::evaluated(Method::Newton, &iteration, evaluation, iteration.bracket());
    if let Some(Action::StopEarly) = observer.observe(&event) {
        return Ok(Transition::done(Solution::stopped(
            Method::Newton,
            &iteration,
        )));
    }

    Ok(Transition::newton(State {
        iteration,
        value: evaluation.value,
        derivative: evaluation.derivative,
    }))
}

/// Moves the solve to the safeguarded method, starting from the last
/// in-bracket iterate with the remaining budget.
fn hand_off<F, Obs>(
    objective: &F,
    iteration: &Iteration,
    rejected: f64,
    observer: &mut Obs,
) -> Result<Transition, Error>
where
    F: Objective + ?Sized,
    Obs: Observer<Event, Action>,
{
    let guess = iteration.root();
    let fallback = iteration.handoff(guess);

    debug!(
        rejected,
        guess,
        remaining = fallback.remaining(),
        "newton left the bracket, switching to safeguarded newton"
    );

    let event = Event::Handoff {
        rejected,
        guess,
        bracket: fallback.bracket(),
        remaining: fallback.remaining(),
    };
    if let Some(Action::StopEarly) = observer.observe(&event) {
        return Ok(Transition::done(Solution::stopped(
            Method::Newton,
            iteration,
        )));
    }

    newton_safe::start(objective, fallback, observer)
}
