use std::env;
use std::error::Error;

use booleint::configuration::{
    Configuration,
    IntegratorSettings
};
use booleint::math::quadrature::adaptiveintegrator::AdaptiveIntegrator;
use booleint::math::quadrature::integrationreport::IntegrationReport;

const DEFAULT_TOLERANCE: f64 = 1e-6;

// x^5 - x^4 + x^2 - 1
fn quintic(x: f64) -> f64 {
    let xsq = x * x;
    xsq * (xsq * x - xsq + 1.0) - 1.0
}

fn run<F>(settings: &IntegratorSettings,
          label: &str,
          f: &F,
          a: f64,
          b: f64) -> Result<IntegrationReport, Box<dyn Error>>
where
    F: Fn(f64) -> f64,
{
    let integrator: AdaptiveIntegrator = settings.integrator()?;
    let mut monitor = settings.monitor();
    let report = integrator.integrate_with_monitor(f, a, b, &mut monitor)?;
    println!("{}: {}", label, report);
    Ok(report)
}

/// Usage: `booleint [config.json profile-name]`
fn main() -> Result<(), Box<dyn Error>> {
    let args: Vec<String> = env::args().collect();
    let settings = match (args.get(1), args.get(2)) {
        (Some(config_path), Some(profile)) => {
            let config = Configuration::new();
            config.from_reader(config_path)?;
            config.integrator_settings(profile)?
        }
        _ => IntegratorSettings::new(DEFAULT_TOLERANCE)?,
    };

    run(&settings, "∫_0^5 x^5 - x^4 + x^2 - 1 dx", &quintic, 0.0, 5.0)?;
    run(&settings, "∫_-inf^0 e^x dx", &f64::exp, f64::NEG_INFINITY, 0.0)?;
    run(&settings, "∫_0^inf e^-x dx", &|x: f64| (-x).exp(), 0.0, f64::INFINITY)?;
    Ok(())
}
