use crate::Error;

/// Evaluation budget of one solver phase.
///
/// `limit` is what this phase may spend. `carried` counts evaluations spent by
/// earlier phases of the same solve, and `configured` is the maximum set on
/// the solver the caller invoked, which is what an exhausted budget reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Budget {
    limit: usize,
    used: usize,
    carried: usize,
    configured: usize,
}

impl Budget {
    pub(crate) fn new(max_evaluations: usize) -> Self {
        Self {
            limit: max_evaluations,
            used: 0,
            carried: 0,
            configured: max_evaluations,
        }
    }

    /// Records one evaluation, failing if the budget is already spent.
    pub(crate) fn spend(&mut self) -> Result<(), Error> {
        if self.used >= self.limit {
            return Err(Error::EvaluationsExceeded {
                max_evaluations: self.configured,
            });
        }
        self.used += 1;
        Ok(())
    }

    pub(crate) fn remaining(&self) -> usize {
        self.limit - self.used
    }

    /// Evaluations spent across all phases.
    pub(crate) fn total(&self) -> usize {
        self.carried + self.used
    }

    /// Budget for a fallback phase: whatever this phase has left.
    pub(crate) fn handoff(&self) -> Self {
        Self {
            limit: self.remaining(),
            used: 0,
            carried: self.total(),
            configured: self.configured,
        }
    }
}
