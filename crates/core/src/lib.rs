//! Core traits and types for one-dimensional root finding.
//!
//! This crate defines the abstractions the solvers build on:
//!
//! - [`Objective`]: a function that supplies a value and, optionally, a
//!   derivative at a point
//! - [`Derivative`]: the derivative at a point, which may be undefined
//! - [`Evaluation`]: a captured value/derivative pair
//! - [`Observer`]: receives solver events and optionally returns control actions

mod objective;
mod observer;

pub use objective::{Derivative, Evaluation, FnObjective, Objective, ValueOnly, from_fns};
pub use observer::Observer;
