use std::cell::RefMut;
use std::fs::File;
use std::io::BufReader;
use std::time::Duration;

use serde::Deserialize;

use crate::manager::managererror::ManagerError;
use crate::manager::manager::{
    IManager,
    Manager
};
use crate::math::quadrature::adaptiveintegrator::AdaptiveIntegrator;
use crate::math::quadrature::integrationerror::IntegrationError;
use crate::math::quadrature::monitor::compositemonitor::CompositeMonitor;
use crate::math::quadrature::monitor::iterationlimitmonitor::IterationLimitMonitor;
use crate::math::quadrature::monitor::logmonitor::LogMonitor;
use crate::math::quadrature::monitor::timelimitmonitor::TimeLimitMonitor;

// ─────────────────────────────────────────────────────────────────────────────
// IntegratorSettings
// ─────────────────────────────────────────────────────────────────────────────
//
// One named integrator profile:
//
//   { "name": "precise", "tolerance": 1e-10,
//     "max_iterations": 30, "time_limit_ms": 2000, "log_every": 1 }
//
// Only "name" and "tolerance" are required. Without limits the run is
// unbounded.

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct IntegratorSettings {
    tolerance: f64,
    #[serde(default)]
    max_iterations: Option<usize>,
    #[serde(default)]
    time_limit_ms: Option<u64>,
    #[serde(default)]
    log_every: Option<usize>,
}

impl IntegratorSettings {
    pub fn new(tolerance: f64) -> Result<IntegratorSettings, IntegrationError> {
        IntegrationError::check_tolerance(tolerance)?;
        Ok(IntegratorSettings {
            tolerance,
            max_iterations: None,
            time_limit_ms: None,
            log_every: None,
        })
    }

    pub fn with_max_iterations(mut self, max_iterations: usize) -> IntegratorSettings {
        self.max_iterations = Some(max_iterations);
        self
    }

    pub fn with_time_limit(mut self, time_limit: Duration) -> IntegratorSettings {
        self.time_limit_ms = Some(u64::try_from(time_limit.as_millis()).unwrap_or(u64::MAX));
        self
    }

    pub fn with_log_every(mut self, log_every: usize) -> IntegratorSettings {
        self.log_every = Some(log_every);
        self
    }

    pub fn tolerance(&self) -> f64 {
        self.tolerance
    }

    pub fn max_iterations(&self) -> Option<usize> {
        self.max_iterations
    }

    pub fn time_limit(&self) -> Option<Duration> {
        self.time_limit_ms.map(Duration::from_millis)
    }

    pub fn log_every(&self) -> Option<usize> {
        self.log_every
    }

    pub fn integrator(&self) -> Result<AdaptiveIntegrator, IntegrationError> {
        AdaptiveIntegrator::new(self.tolerance)
    }

    /// Limits first, so a budget stop is reported before anything else.
    pub fn monitor(&self) -> CompositeMonitor<'static> {
        let mut monitor = CompositeMonitor::new();
        if let Some(max_iterations) = self.max_iterations {
            monitor.add_monitor(IterationLimitMonitor::new(max_iterations));
        }
        if let Some(time_limit) = self.time_limit() {
            monitor.add_monitor(TimeLimitMonitor::new(time_limit));
        }
        if let Some(log_every) = self.log_every {
            monitor.add_monitor(LogMonitor::stdout(log_every));
        }
        monitor
    }
}

fn get_integrator_settings_from_json(json_value: serde_json::Value) -> Result<IntegratorSettings, ManagerError> {
    let settings: IntegratorSettings = ManagerError::from_json_or_json_parse_error(json_value)?;
    IntegrationError::check_tolerance(settings.tolerance)?;
    Ok(settings)
}

pub struct IntegratorSettingsManager;

impl IntegratorSettingsManager {
    pub fn new() -> Manager<IntegratorSettings> {
        Manager::new(get_integrator_settings_from_json)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Configuration
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Deserialize)]
struct ConfigurationJsonProp {
    integrator: Vec<serde_json::Value>
}

pub struct Configuration {
    integrator_settings_manager: Manager<IntegratorSettings>
}

impl Default for Configuration {
    fn default() -> Self {
        Self::new()
    }
}

impl Configuration {
    pub fn new() -> Configuration {
        Configuration {
            integrator_settings_manager: IntegratorSettingsManager::new()
        }
    }

    pub fn integrator_settings_manager(&self) -> &Manager<IntegratorSettings> {
        &self.integrator_settings_manager
    }

    pub fn integrator_settings(&self, name: &str) -> Result<IntegratorSettings, ManagerError> {
        self.integrator_settings_manager.get(name)
    }

    pub fn integrator_settings_map(&self) -> RefMut<'_, std::collections::HashMap<String, IntegratorSettings>> {
        self.integrator_settings_manager.map()
    }

    pub fn from_json(&self, json_value: serde_json::Value) -> Result<(), ManagerError> {
        let json_prop: ConfigurationJsonProp = ManagerError::from_json_or_json_parse_error(json_value)?;
        self.integrator_settings_manager.insert_obj_from_json_vec(&json_prop.integrator)
    }

    pub fn from_reader(&self, file_path: &str) -> Result<(), ManagerError> {
        let file = File::open(file_path)?;
        let reader = BufReader::new(file);
        let json_value: serde_json::Value = serde_json::from_reader(reader)?;
        self.from_json(json_value)
    }
}
