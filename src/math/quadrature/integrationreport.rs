use std::fmt;

/// How the adaptive loop stopped.
///
/// The driver itself still carries `±inf` in its running estimate; this tag
/// only makes the final state explicit for callers.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum IntegrationOutcome {
    Converged,
    DivergentPositive,
    DivergentNegative,
}

impl IntegrationOutcome {
    pub fn is_divergent(&self) -> bool {
        !matches!(self, IntegrationOutcome::Converged)
    }
}

impl fmt::Display for IntegrationOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IntegrationOutcome::Converged => write!(f, "converged"),
            IntegrationOutcome::DivergentPositive => write!(f, "divergent (+inf)"),
            IntegrationOutcome::DivergentNegative => write!(f, "divergent (-inf)"),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct IntegrationReport {
    value: f64,
    outcome: IntegrationOutcome,
    iterations: usize,
    panels: usize,
    evaluations: usize,
}

impl IntegrationReport {
    pub fn new(value: f64,
               outcome: IntegrationOutcome,
               iterations: usize,
               panels: usize,
               evaluations: usize) -> IntegrationReport {
        IntegrationReport {
            value,
            outcome,
            iterations,
            panels,
            evaluations,
        }
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    pub fn outcome(&self) -> IntegrationOutcome {
        self.outcome
    }

    /// Refinement passes performed; 0 for a degenerate `a == b` interval.
    pub fn iterations(&self) -> usize {
        self.iterations
    }

    /// Panels summed in the last pass.
    pub fn panels(&self) -> usize {
        self.panels
    }

    pub fn evaluations(&self) -> usize {
        self.evaluations
    }
}

impl fmt::Display for IntegrationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f,
               "{} ({}, {} iterations, {} panels, {} evaluations)",
               self.value,
               self.outcome,
               self.iterations,
               self.panels,
               self.evaluations)
    }
}
