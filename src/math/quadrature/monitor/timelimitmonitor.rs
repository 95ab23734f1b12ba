use std::time::{Duration, Instant};

use crate::math::quadrature::monitor::integrationmonitor::{
    IntegrationCommand,
    IntegrationMonitor,
    IterationState
};

/// Wall-clock budget for one integration. The clock is read once per
/// refinement pass; a pass itself is never interrupted.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TimeLimitMonitor {
    time_limit: Duration,
    start_time: Instant,
}

impl TimeLimitMonitor {
    pub fn new(time_limit: Duration) -> TimeLimitMonitor {
        TimeLimitMonitor {
            time_limit,
            start_time: Instant::now(),
        }
    }

    pub fn time_limit(&self) -> Duration {
        self.time_limit
    }
}

impl IntegrationMonitor for TimeLimitMonitor {
    fn name(&self) -> &str {
        "TimeLimitMonitor"
    }

    fn on_enter_integration(&mut self, _a: f64, _b: f64, _tolerance: f64) {
        self.start_time = Instant::now();
    }

    fn on_iteration(&mut self, _state: &IterationState) {}

    fn on_exit_integration(&mut self) {}

    fn integration_command(&self) -> IntegrationCommand {
        if self.start_time.elapsed() >= self.time_limit {
            IntegrationCommand::Terminate("time limit reached".to_string())
        } else {
            IntegrationCommand::Continue
        }
    }
}
