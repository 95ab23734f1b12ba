use std::f64::consts::PI;

use approx::assert_abs_diff_eq;

use booleint::math::quadrature::adaptiveintegrator::{
    integrate,
    AdaptiveIntegrator
};
use booleint::math::quadrature::integrationreport::IntegrationOutcome;
use booleint::math::quadrature::monitor::noopmonitor::NoOpMonitor;

const NEG_INF: f64 = f64::NEG_INFINITY;
const INF: f64 = f64::INFINITY;

#[test]
fn test_exponential() {
    let h = 1e-8;
    let f = |x: f64| x.exp();

    assert_abs_diff_eq!(integrate(&f, NEG_INF, 0.0, h).unwrap(), 1.0, epsilon = h);
    assert_eq!(integrate(&f, 0.0, INF, h).unwrap(), INF);

    let g = |x: f64| -x.exp();
    assert_abs_diff_eq!(integrate(&g, NEG_INF, 0.0, h).unwrap(), -1.0, epsilon = h);
    assert_eq!(integrate(&g, 0.0, INF, h).unwrap(), NEG_INF);
}

#[test]
fn test_negative_exponential() {
    let h = 1e-8;
    let f = |x: f64| (-x).exp();

    assert_eq!(integrate(&f, NEG_INF, 0.0, h).unwrap(), INF);
    assert_abs_diff_eq!(integrate(&f, 0.0, INF, h).unwrap(), 1.0, epsilon = h);

    let g = |x: f64| -(-x).exp();
    assert_eq!(integrate(&g, NEG_INF, 0.0, h).unwrap(), NEG_INF);
    assert_abs_diff_eq!(integrate(&g, 0.0, INF, h).unwrap(), -1.0, epsilon = h);
}

#[test]
fn test_normal_half_line() {
    let f = |x: f64| (-x * x / 2.0).exp() / (2.0 * PI).sqrt();
    assert_abs_diff_eq!(integrate(&f, NEG_INF, 0.0, 1e-6).unwrap(), 0.5, epsilon = 1e-6);
    assert_abs_diff_eq!(integrate(&f, 0.0, INF, 1e-6).unwrap(), 0.5, epsilon = 1e-6);
}

#[test]
fn test_shifted_tails() {
    // ∫_{-inf}^{-3} e^x dx = e^-3, seeded by doubling -3
    let value = integrate(&f64::exp, NEG_INF, -3.0, 1e-10).unwrap();
    assert_abs_diff_eq!(value, (-3.0_f64).exp(), epsilon = 1e-10);

    // ∫_2^inf e^-x dx = e^-2
    let value = integrate(&|x: f64| (-x).exp(), 2.0, INF, 1e-10).unwrap();
    assert_abs_diff_eq!(value, (-2.0_f64).exp(), epsilon = 1e-10);
}

#[test]
fn test_tails_starting_inside_unit_interval() {
    let value = integrate(&f64::exp, NEG_INF, -0.5, 1e-10).unwrap();
    assert_abs_diff_eq!(value, (-0.5_f64).exp(), epsilon = 1e-9);

    let value = integrate(&|x: f64| (-x).exp(), 0.25, INF, 1e-10).unwrap();
    assert_abs_diff_eq!(value, (-0.25_f64).exp(), epsilon = 1e-9);
}

#[test]
fn test_full_line_cauchy() {
    // ∫ 1/(1+x²) = π; the algebraic tails shrink only like 1/L, so the
    // remaining error is about twice the last change
    let value = integrate(&|x: f64| 1.0 / (1.0 + x * x), NEG_INF, INF, 1e-4).unwrap();
    assert_abs_diff_eq!(value, PI, epsilon = 1e-3);
}

#[test]
fn test_sign_symmetry() {
    let cases: Vec<(fn(f64) -> f64, f64, f64)> = vec![
        (|x| x.exp(), NEG_INF, 0.0),
        (|x| x.exp(), 0.0, INF),
        (|x| (-x * x).exp(), NEG_INF, INF),
        (|x| x.cos() * x, -2.0, 5.0),
    ];
    for (f, a, b) in cases {
        let positive = integrate(&f, a, b, 1e-8).unwrap();
        let negative = integrate(&|x: f64| -f(x), a, b, 1e-8).unwrap();
        assert_eq!(negative, -positive);
    }
}

#[test]
fn test_report_tags_divergence() {
    let integrator = AdaptiveIntegrator::new(1e-8).unwrap();
    let mut monitor = NoOpMonitor::new();

    let report = integrator
        .integrate_with_monitor(&f64::exp, 0.0, INF, &mut monitor)
        .unwrap();
    assert_eq!(report.outcome(), IntegrationOutcome::DivergentPositive);
    assert!(report.outcome().is_divergent());

    let report = integrator
        .integrate_with_monitor(&f64::exp, NEG_INF, 0.0, &mut monitor)
        .unwrap();
    assert_eq!(report.outcome(), IntegrationOutcome::Converged);
    assert!(report.iterations() > 1);
}
