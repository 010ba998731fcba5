//! One-dimensional root solvers.
//!
//! Every solver implements [`Solver`], whose [`solve`](Solver::solve) method
//! validates the bracket, guess, and accuracy, then runs the solver's steps
//! against an evaluation budget until a step is smaller than the accuracy.
//!
//! # Solvers
//!
//! - [`newton`]: Newton-Raphson that hands over to the safeguarded method
//!   when an iterate leaves the bracket
//! - [`newton_safe`]: Newton-Raphson safeguarded by bisection, which keeps
//!   every iterate inside a shrinking bracket
//!
//! Objectives implement [`rootline_core::Objective`]. Observers implement
//! [`rootline_core::Observer<Event, Action>`](rootline_core::Observer).
//!
//! # Features
//!
//! - `serde`: derives `Serialize` and `Deserialize` for [`Config`].

mod action;
mod bracket;
mod budget;
mod config;
mod error;
mod event;
mod iteration;
mod machine;
mod solution;
mod solver;

pub mod newton;
pub mod newton_safe;

pub use action::Action;
pub use bracket::{Bracket, BracketError};
pub use config::{Config, ConfigError, DEFAULT_MAX_EVALUATIONS};
pub use error::Error;
pub use event::Event;
pub use iteration::Iteration;
pub use machine::Transition;
pub use newton::Newton;
pub use newton_safe::NewtonSafe;
pub use solution::{Method, Solution, Status};
pub use solver::Solver;
