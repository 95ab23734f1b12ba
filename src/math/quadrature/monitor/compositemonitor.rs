use crate::math::quadrature::monitor::integrationmonitor::{
    IntegrationCommand,
    IntegrationMonitor,
    IterationState
};

/// Fans every event out to its children in insertion order.
/// `integration_command` returns the first non-`Continue` answer.
pub struct CompositeMonitor<'a> {
    monitors: Vec<Box<dyn IntegrationMonitor + 'a>>,
}

impl<'a> Default for CompositeMonitor<'a> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> CompositeMonitor<'a> {
    pub fn new() -> CompositeMonitor<'a> {
        CompositeMonitor { monitors: Vec::new() }
    }

    pub fn add_monitor<M>(&mut self, monitor: M)
    where
        M: IntegrationMonitor + 'a,
    {
        self.monitors.push(Box::new(monitor));
    }

    pub fn add_monitor_boxed(&mut self, monitor: Box<dyn IntegrationMonitor + 'a>) {
        self.monitors.push(monitor);
    }

    pub fn monitors(&self) -> &[Box<dyn IntegrationMonitor + 'a>] {
        &self.monitors
    }

    pub fn len(&self) -> usize {
        self.monitors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.monitors.is_empty()
    }
}

impl<'a> FromIterator<Box<dyn IntegrationMonitor + 'a>> for CompositeMonitor<'a> {
    fn from_iter<I: IntoIterator<Item = Box<dyn IntegrationMonitor + 'a>>>(iter: I) -> Self {
        CompositeMonitor {
            monitors: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntegrationMonitor for CompositeMonitor<'a> {
    fn name(&self) -> &str {
        "CompositeMonitor"
    }

    fn on_enter_integration(&mut self, a: f64, b: f64, tolerance: f64) {
        for monitor in self.monitors.iter_mut() {
            monitor.on_enter_integration(a, b, tolerance);
        }
    }

    fn on_iteration(&mut self, state: &IterationState) {
        for monitor in self.monitors.iter_mut() {
            monitor.on_iteration(state);
        }
    }

    fn on_exit_integration(&mut self) {
        for monitor in self.monitors.iter_mut() {
            monitor.on_exit_integration();
        }
    }

    fn integration_command(&self) -> IntegrationCommand {
        self.monitors
            .iter()
            .map(|monitor| monitor.integration_command())
            .find(|command| *command != IntegrationCommand::Continue)
            .unwrap_or_default()
    }
}
