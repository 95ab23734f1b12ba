use crate::math::quadrature::monitor::integrationmonitor::{
    IntegrationCommand,
    IntegrationMonitor,
    IterationState
};

/// Stops the run once `max_iterations` refinement passes have completed
/// without convergence.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct IterationLimitMonitor {
    max_iterations: usize,
    iterations: usize,
}

impl IterationLimitMonitor {
    pub fn new(max_iterations: usize) -> IterationLimitMonitor {
        IterationLimitMonitor {
            max_iterations,
            iterations: 0,
        }
    }

    pub fn max_iterations(&self) -> usize {
        self.max_iterations
    }
}

impl IntegrationMonitor for IterationLimitMonitor {
    fn name(&self) -> &str {
        "IterationLimitMonitor"
    }

    fn on_enter_integration(&mut self, _a: f64, _b: f64, _tolerance: f64) {
        self.iterations = 0;
    }

    fn on_iteration(&mut self, state: &IterationState) {
        self.iterations = state.iteration();
    }

    fn on_exit_integration(&mut self) {}

    fn integration_command(&self) -> IntegrationCommand {
        if self.iterations >= self.max_iterations {
            IntegrationCommand::Terminate(format!("iteration limit {} reached", self.max_iterations))
        } else {
            IntegrationCommand::Continue
        }
    }
}
