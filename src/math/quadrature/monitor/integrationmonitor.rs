use std::fmt;

#[derive(Clone, PartialEq, Eq, Debug, Default)]
pub enum IntegrationCommand {
    #[default]
    Continue,
    Terminate(String),
}

impl fmt::Display for IntegrationCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IntegrationCommand::Continue => write!(f, "Continue"),
            IntegrationCommand::Terminate(reason) => write!(f, "Terminate: {}", reason),
        }
    }
}

/// Snapshot handed to monitors after each refinement pass.
#[derive(Clone, Debug, PartialEq)]
pub struct IterationState {
    iteration: usize,
    previous: f64,
    refined: f64,
    panels: usize,
    evaluations: usize,
    span: Option<(f64, f64)>,
}

impl IterationState {
    pub fn new(iteration: usize,
               previous: f64,
               refined: f64,
               panels: usize,
               evaluations: usize,
               span: Option<(f64, f64)>) -> IterationState {
        IterationState {
            iteration,
            previous,
            refined,
            panels,
            evaluations,
            span,
        }
    }

    /// 1-based.
    pub fn iteration(&self) -> usize {
        self.iteration
    }

    pub fn previous(&self) -> f64 {
        self.previous
    }

    pub fn refined(&self) -> f64 {
        self.refined
    }

    /// `|previous - refined|`; infinite while either side is infinite.
    pub fn change(&self) -> f64 {
        (self.previous - self.refined).abs()
    }

    pub fn panels(&self) -> usize {
        self.panels
    }

    /// Cumulative over the whole run.
    pub fn evaluations(&self) -> usize {
        self.evaluations
    }

    /// Finite part of `[a, b]` covered by the breakpoints.
    pub fn span(&self) -> Option<(f64, f64)> {
        self.span
    }
}

pub trait IntegrationMonitor {
    fn name(&self) -> &str;

    fn on_enter_integration(&mut self, a: f64, b: f64, tolerance: f64);

    fn on_iteration(&mut self, state: &IterationState);

    fn on_exit_integration(&mut self);

    fn integration_command(&self) -> IntegrationCommand;
}

impl fmt::Debug for dyn IntegrationMonitor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "IntegrationMonitor({})", self.name())
    }
}

impl fmt::Display for dyn IntegrationMonitor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "IntegrationMonitor({})", self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_command_display() {
        assert_eq!(IntegrationCommand::Continue.to_string(), "Continue");
        assert_eq!(
            IntegrationCommand::Terminate("budget".to_string()).to_string(),
            "Terminate: budget"
        );
        assert_eq!(IntegrationCommand::default(), IntegrationCommand::Continue);
    }

    #[test]
    fn test_iteration_state_change() {
        let state = IterationState::new(2, 1.5, 1.25, 4, 30, Some((0.0, 1.0)));
        assert_eq!(state.change(), 0.25);

        let first = IterationState::new(1, f64::INFINITY, 0.5, 2, 10, Some((-1.0, 0.0)));
        assert!(first.change().is_infinite());
    }
}
