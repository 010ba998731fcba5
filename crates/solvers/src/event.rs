use rootline_core::Evaluation;

use crate::{Bracket, Iteration, Method};

/// Events emitted to an observer during a solve.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Event {
    /// The objective was evaluated.
    Evaluated {
        /// Method that requested the evaluation.
        method: Method,

        /// The evaluation itself.
        evaluation: Evaluation,

        /// Evaluations performed so far, including this one.
        evaluations: usize,

        /// Bracket in force after the evaluation.
        ///
        /// Newton reports the starting bracket; the safeguarded method
        /// reports its shrinking bracket.
        bracket: Bracket,
    },

    /// Newton left the bracket and handed the solve to the safeguarded method.
    Handoff {
        /// The out-of-bracket iterate Newton produced.
        rejected: f64,

        /// Starting point given to the safeguarded method.
        guess: f64,

        /// Bracket given to the safeguarded method.
        bracket: Bracket,

        /// Evaluations left for the safeguarded method.
        remaining: usize,
    },
}

impl Event {
    pub(crate) fn evaluated(
        method: Method,
        iteration: &Iteration,
        evaluation: Evaluation,
        bracket: Bracket,
    ) -> Self {
        Self::Evaluated {
            method,
            evaluation,
            evaluations: iteration.evaluations(),
            bracket,
        }
    }

    /// Returns the evaluation carried by this event, if any.
    #[must_use]
    pub fn evaluation(&self) -> Option<&Evaluation> {
        match self {
            Self::Evaluated { evaluation, .. } => Some(evaluation),
            Self::Handoff { .. } => None,
        }
    }
}
