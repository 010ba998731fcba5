use rootline_core::{Derivative, Evaluation, Objective, Observer};

use crate::{Action, Bracket, Error, Event, Iteration, Method, Solution, Transition};

/// Safeguarded phase state.
#[derive(Debug)]
pub(crate) struct State {
    iteration: Iteration,
    value: f64,
    derivative: Derivative,

    /// Bracket end where `f < 0`.
    xl: f64,

    /// Bracket end where `f > 0`.
    xh: f64,

    /// Last step.
    dx: f64,

    /// Step before last.
    dx_old: f64,
}

/// Outcome of evaluating one point and notifying the observer.
enum Outcome {
    Evaluated(Evaluation),
    Stopped,
}

/// Evaluates the bracket ends and the guess, then enters the safeguarded phase.
pub(crate) fn start<F, Obs>(
    objective: &F,
    mut iteration: Iteration,
    observer: &mut Obs,
) -> Result<Transition, Error>
where
    F: Objective + ?Sized,
    Obs: Observer<Event, Action>,
{
    let bracket = iteration.bracket();
    let accuracy = iteration.accuracy();

    let at_low = evaluate_at(objective, &mut iteration, bracket.low(), bracket, observer)?;
    let Outcome::Evaluated(low) = at_low else {
        return Ok(stopped(&iteration));
    };
    if low.value.abs() < accuracy {
        return Ok(converged_at(iteration, low.x));
    }

    let at_high = evaluate_at(objective, &mut iteration, bracket.high(), bracket, observer)?;
    let Outcome::Evaluated(high) = at_high else {
        return Ok(stopped(&iteration));
    };
    if high.value.abs() < accuracy {
        return Ok(converged_at(iteration, high.x));
    }

    if !changes_sign(low.value, high.value) {
        return Err(Error::NotBracketed {
            low: low.x,
            high: high.x,
            f_low: low.value,
            f_high: high.value,
        });
    }

    let (xl, xh) = if low.value < 0.0 {
        (low.x, high.x)
    } else {
        (high.x, low.x)
    };

    let guess = iteration.root();
    let at_guess = evaluate_at(objective, &mut iteration, guess, bracket, observer)?;
    let Outcome::Evaluated(initial) = at_guess else {
        return Ok(stopped(&iteration));
    };

    Ok(Transition::safe(State {
        iteration,
        value: initial.value,
        derivative: initial.derivative,
        xl,
        xh,
        dx: bracket.width(),
        dx_old: bracket.width(),
    }))
}

/// Takes one Newton or bisection step.
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
        mut xl,
        mut xh,
        dx: last_dx,
        dx_old,
    } = state;

    let x = iteration.root();
    let (root, dx) = match derivative.value() {
        Some(df) if newton_is_safe(x, value, df, xl, xh, dx_old) => {
            let dx = value / df;
            (x - dx, dx)
        }
        _ => {
            let dx = 0.5 * (xh - xl);
            (xl + dx, dx)
        }
    };

    iteration.set_root(root);
    if dx.abs() < iteration.accuracy() {
        return Ok(Transition::done(Solution::converged(
            Method::NewtonSafe,
            &iteration,
        )));
    }

    let evaluation = iteration.evaluate(objective, root)?;
    if evaluation.value < 0.0 {
        xl = root;
    } else {
        xh = root;
    }

    let event = Event::evaluated(
        Method::NewtonSafe,
        &iteration,
        evaluation,
        Bracket::spanning(xl, xh),
    );
    if let Some(Action::StopEarly) = observer.observe(&event) {
        return Ok(stopped(&iteration));
    }

    Ok(Transition::safe(State {
        iteration,
        value: evaluation.value,
        derivative: evaluation.derivative,
        xl,
        xh,
        dx,
        dx_old: last_dx,
    }))
}

/// Returns true if a Newton step from `x` lands in `[xl, xh]` and shrinks at
/// least twice as fast as the step before last.
///
/// Written so that a NaN anywhere yields false.
fn newton_is_safe(x: f64, f: f64, df: f64, xl: f64, xh: f64, dx_old: f64) -> bool {
    let in_bracket = ((x - xh) * df - f) * ((x - xl) * df - f) <= 0.0;
    let fast_enough = (2.0 * f).abs() <= (dx_old * df).abs();
    in_bracket && fast_enough
}

/// Returns true if two non-zero values have opposite signs.
///
/// Compares signs rather than testing the product, which can underflow to
/// zero. NaN never changes sign.
fn changes_sign(a: f64, b: f64) -> bool {
    !a.is_nan() && !b.is_nan() && (a > 0.0) != (b > 0.0)
}

fn evaluate_at<F, Obs>(
    objective: &F,
    iteration: &mut Iteration,
    x: f64,
    bracket: Bracket,
    observer: &mut Obs,
) -> Result<Outcome, Error>
where
    F: Objective + ?Sized,
    Obs: Observer<Event, Action>,
{
    let evaluation = iteration.evaluate(objective, x)?;
    let event = Event::evaluated(Method::NewtonSafe, iteration, evaluation, bracket);
    match observer.observe(&event) {
        Some(Action::StopEarly) => Ok(Outcome::Stopped),
        None => Ok(Outcome::Evaluated(evaluation)),
    }
}

fn stopped(iteration: &Iteration) -> Transition {
    Transition::done(Solution::stopped(Method::NewtonSafe, iteration))
}

fn converged_at(mut iteration: Iteration, root: f64) -> Transition {
    iteration.set_root(root);
    Transition::done(Solution::converged(Method::NewtonSafe, &iteration))
}
