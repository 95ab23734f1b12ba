use crate::math::quadrature::monitor::integrationmonitor::{
    IntegrationCommand,
    IntegrationMonitor,
    IterationState
};

/// Observes nothing and never stops the run.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub struct NoOpMonitor;

impl NoOpMonitor {
    pub fn new() -> NoOpMonitor {
        NoOpMonitor
    }
}

impl IntegrationMonitor for NoOpMonitor {
    fn name(&self) -> &str {
        "NoOpMonitor"
    }

    fn on_enter_integration(&mut self, _a: f64, _b: f64, _tolerance: f64) {}

    fn on_iteration(&mut self, _state: &IterationState) {}

    fn on_exit_integration(&mut self) {}

    #[inline(always)]
    fn integration_command(&self) -> IntegrationCommand {
        IntegrationCommand::Continue
    }
}
