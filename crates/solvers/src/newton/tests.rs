use std::{cell::Cell, f64::consts::SQRT_2};

use approx::assert_relative_eq;
use proptest::prelude::*;
use rootline_core::{Derivative, Objective, from_fns};

use crate::{
    Action, BracketError, Config, ConfigError, Error, Event, Method, Newton, Solver, Status,
};

/// f(x) = x² - 2, with f'(x) = 2x.
struct SquareMinusTwo {
    calls: Cell<usize>,
}

impl SquareMinusTwo {
    fn new() -> Self {
        Self {
            calls: Cell::new(0),
        }
    }
}

impl Objective for SquareMinusTwo {
    fn value(&self, x: f64) -> f64 {
        self.calls.set(self.calls.get() + 1);
        x * x - 2.0
    }

    fn derivative(&self, x: f64) -> Derivative {
        Derivative::Defined(2.0 * x)
    }
}

fn newton_with_budget(max_evaluations: usize) -> Newton {
    Newton::new(Config::new(max_evaluations).unwrap())
}

#[test]
fn finds_square_root_of_two() {
    let f = SquareMinusTwo::new();

    let solution = Newton::default()
        .solve(&f, 1e-8, 1.0, 0.0, 2.0)
        .expect("should converge");

    assert_eq!(solution.status, Status::Converged);
    assert_eq!(solution.method, Method::Newton);
    assert_relative_eq!(solution.root, SQRT_2, epsilon = 1e-8);
    assert_eq!(solution.evaluations, 5);
    assert_eq!(f.calls.get(), solution.evaluations);
}

#[test]
fn undefined_derivative_at_guess_fails() {
    let f = from_fns(
        |x: f64| x.powi(3),
        |x: f64| if x == 0.0 { None } else { Some(3.0 * x * x) },
    );

    let result = Newton::default().solve(&f, 1e-8, 0.0, -1.0, 1.0);

    assert_eq!(result, Err(Error::MissingDerivative { x: 0.0 }));
}

#[test]
fn missing_derivative_is_checked_before_observing() {
    let f = from_fns(|x: f64| x, |_: f64| None);

    let mut events = 0;
    let observer = |_: &Event| -> Option<Action> {
        events += 1;
        None
    };
    let result = Newton::default().solve_observed(&f, 1e-8, 0.5, 0.0, 1.0, observer);

    assert!(matches!(result, Err(Error::MissingDerivative { .. })));
    assert_eq!(events, 0);
}

#[test]
fn overshoot_hands_off_with_remaining_budget() {
    let f = SquareMinusTwo::new();

    let mut handoffs = Vec::new();
    let observer = |event: &Event| -> Option<Action> {
        if let Event::Handoff {
            rejected,
            guess,
            remaining,
            ..
        } = *event
        {
            handoffs.push((rejected, guess, remaining));
        }
        None
    };

    let solution = Newton::default()
        .solve_observed(&f, 1e-8, 0.1, 0.0, 2.0, observer)
        .expect("fallback should converge");

    // First step: 0.1 - (-1.99 / 0.2) = 10.05, past the upper bound.
    assert_eq!(handoffs.len(), 1);
    let (rejected, guess, remaining) = handoffs[0];
    assert_relative_eq!(rejected, 10.05, epsilon = 1e-12);
    assert_relative_eq!(guess, 0.1);
    assert_eq!(remaining, 99);

    assert_eq!(solution.method, Method::NewtonSafe);
    assert!((0.0..=2.0).contains(&solution.root));
    assert_relative_eq!(solution.root, SQRT_2, epsilon = 1e-8);
    assert_eq!(solution.evaluations, 9);
    assert_eq!(f.calls.get(), 9);
}

#[test]
fn never_returns_to_newton_after_handoff() {
    let f = SquareMinusTwo::new();

    let mut methods = Vec::new();
    let observer = |event: &Event| -> Option<Action> {
        if let Event::Evaluated { method, .. } = event {
            methods.push(*method);
        }
        None
    };

    Newton::default()
        .solve_observed(&f, 1e-8, 0.1, 0.0, 2.0, observer)
        .expect("should converge");

    assert_eq!(methods[0], Method::Newton);
    assert!(methods[1..].iter().all(|m| *m == Method::NewtonSafe));
}

#[test]
fn exceeding_budget_reports_configured_maximum() {
    let f = SquareMinusTwo::new();

    let result = newton_with_budget(2).solve(&f, 1e-8, 1.0, 0.0, 2.0);

    assert_eq!(
        result,
        Err(Error::EvaluationsExceeded { max_evaluations: 2 })
    );
    assert_eq!(f.calls.get(), 2, "no call after the budget is spent");
}

#[test]
fn exceeding_budget_after_handoff_reports_configured_maximum() {
    let f = SquareMinusTwo::new();

    let result = newton_with_budget(5).solve(&f, 1e-8, 0.1, 0.0, 2.0);

    assert_eq!(
        result,
        Err(Error::EvaluationsExceeded { max_evaluations: 5 })
    );
    assert_eq!(f.calls.get(), 5);
}

#[test]
fn zero_derivative_is_not_missing() {
    // f'(0) = 0 gives an infinite step, which triggers the fallback.
    let f = from_fns(|x: f64| x * x - 1.0, |x: f64| 2.0 * x);

    let solution = Newton::default()
        .solve(&f, 1e-8, 0.0, -0.5, 2.0)
        .expect("fallback should converge");

    assert_eq!(solution.method, Method::NewtonSafe);
    assert_relative_eq!(solution.root, 1.0, epsilon = 1e-8);
}

#[test]
fn derivative_lost_mid_iteration_hands_off() {
    // Only the guess has a derivative; the next iterate (0.5) does not.
    let f = from_fns(
        |x: f64| x - 1.0,
        |x: f64| if x == 0.0 { Some(2.0) } else { None },
    );

    let mut handoff_guess = None;
    let observer = |event: &Event| -> Option<Action> {
        if let Event::Handoff {
            rejected,
            guess,
            ..
        } = *event
        {
            assert!(rejected.is_nan());
            handoff_guess = Some(guess);
        }
        None
    };

    let solution = Newton::default()
        .solve_observed(&f, 1e-8, 0.0, 0.0, 2.0, observer)
        .expect("bisection should converge");

    assert_eq!(handoff_guess, Some(0.5));
    assert_eq!(solution.method, Method::NewtonSafe);
    assert!((solution.root - 1.0).abs() < 1e-8);
}

#[test]
fn invalid_inputs_fail_before_evaluating() {
    let f = SquareMinusTwo::new();
    let newton = Newton::default();

    assert!(matches!(
        newton.solve(&f, 1e-8, 3.0, 0.0, 2.0),
        Err(Error::InvalidBracket(BracketError::GuessOutside { .. }))
    ));
    assert!(matches!(
        newton.solve(&f, 1e-8, 1.0, 2.0, 0.0),
        Err(Error::InvalidBracket(BracketError::Reversed { .. }))
    ));
    assert!(matches!(
        newton.solve(&f, 0.0, 1.0, 0.0, 2.0),
        Err(Error::InvalidBracket(BracketError::Accuracy { .. }))
    ));
    assert!(matches!(
        newton.solve(&f, 1e-8, f64::NAN, 0.0, 2.0),
        Err(Error::InvalidBracket(BracketError::GuessOutside { .. }))
    ));

    assert_eq!(f.calls.get(), 0);
}

#[test]
fn observer_can_stop_iteration() {
    let f = SquareMinusTwo::new();

    let observer = |event: &Event| {
        let evaluations = match event {
            Event::Evaluated { evaluations, .. } => *evaluations,
            Event::Handoff { .. } => 0,
        };
        (evaluations >= 3).then_some(Action::StopEarly)
    };

    let solution = Newton::default()
        .solve_observed(&f, 1e-8, 1.0, 0.0, 2.0, observer)
        .expect("should stop cleanly");

    assert_eq!(solution.status, Status::StoppedByObserver);
    assert_eq!(solution.evaluations, 3);
    assert_eq!(f.calls.get(), 3);
    // Third evaluation is at the second Newton iterate.
    assert_relative_eq!(solution.root, 17.0 / 12.0, epsilon = 1e-12);
}

#[test]
fn budget_is_settable_per_instance() {
    let mut newton = Newton::default();

    assert_eq!(
        newton.set_max_evaluations(0),
        Err(ConfigError::ZeroEvaluations)
    );
    newton.set_max_evaluations(3).unwrap();
    assert_eq!(newton.config().max_evaluations(), 3);

    let result = newton.solve(&SquareMinusTwo::new(), 1e-8, 1.0, 0.0, 2.0);
    assert_eq!(
        result,
        Err(Error::EvaluationsExceeded { max_evaluations: 3 })
    );
}

#[test]
fn one_evaluation_per_event() {
    let f = SquareMinusTwo::new();

    let mut evaluated = 0;
    let mut last_count = 0;
    let observer = |event: &Event| -> Option<Action> {
        if let Event::Evaluated { evaluations, .. } = event {
            evaluated += 1;
            assert_eq!(*evaluations, last_count + 1);
            last_count = *evaluations;
        }
        None
    };

    let solution = Newton::default()
        .solve_observed(&f, 1e-10, 0.1, 0.0, 2.0, observer)
        .expect("should converge");

    assert_eq!(evaluated, solution.evaluations);
}

proptest! {
    #[test]
    fn converges_inside_bracket(root in 0.5_f64..5.0, guess in 0.1_f64..10.0) {
        let f = from_fns(move |x: f64| x * x - root * root, |x: f64| 2.0 * x);

        let solution = Newton::default().solve(&f, 1e-10, guess, 0.0, 10.0).unwrap();

        prop_assert!((0.0..=10.0).contains(&solution.root));
        prop_assert!((solution.root - root).abs() < 1e-8);
        prop_assert!(solution.evaluations <= Config::default().max_evaluations());
    }
}
