use crate::math::quadrature::breakpoints::Breakpoints;
use crate::math::quadrature::integrationerror::IntegrationError;
use crate::math::quadrature::integrationreport::{
    IntegrationOutcome,
    IntegrationReport
};
use crate::math::quadrature::monitor::integrationmonitor::{
    IntegrationCommand,
    IntegrationMonitor,
    IterationState
};
use crate::math::quadrature::monitor::noopmonitor::NoOpMonitor;
use crate::math::quadrature::panelrule::{
    BooleRule,
    PanelRule
};

// ─────────────────────────────────────────────────────────────────────────────
// AdaptiveIntegrator
// ─────────────────────────────────────────────────────────────────────────────
//
// Global refinement driver:
//
//   ret  = Boole(a, b)            (finite [a, b])
//        = +inf                   (any infinite end)
//   loop:
//     breakpoints = refine(breakpoints)
//     refined     = Σ Boole(p_i, p_{i+1}) over the finite panels
//     ret == refined == ±inf      -> divergent, return ±inf
//     |ret - refined| < tol       -> converged, return refined
//     ret = refined
//
// The loop has no iteration cap of its own. Budgets are imposed through an
// IntegrationMonitor (see IterationLimitMonitor / TimeLimitMonitor).

#[derive(Clone, Debug)]
pub struct AdaptiveIntegrator {
    tolerance: f64,
    rule: BooleRule,
}

impl AdaptiveIntegrator {
    pub fn new(tolerance: f64) -> Result<AdaptiveIntegrator, IntegrationError> {
        IntegrationError::check_tolerance(tolerance)?;
        Ok(AdaptiveIntegrator {
            tolerance,
            rule: BooleRule::boole(),
        })
    }

    pub fn tolerance(&self) -> f64 {
        self.tolerance
    }

    pub fn rule(&self) -> &BooleRule {
        &self.rule
    }

    /// Integral of `f` over `[a, b]`, or `±inf` if it is judged divergent.
    ///
    /// Runs until two successive estimates differ by less than the tolerance;
    /// an integrand that never settles (e.g. one returning NaN) keeps the
    /// loop running. Use [`AdaptiveIntegrator::integrate_with_monitor`] with a
    /// limiting monitor to bound the work.
    pub fn integrate<F>(&self, f: &F, a: f64, b: f64) -> Result<f64, IntegrationError>
    where
        F: Fn(f64) -> f64 + ?Sized,
    {
        let mut monitor = NoOpMonitor::new();
        self.integrate_with_monitor(f, a, b, &mut monitor)
            .map(|report| report.value())
    }

    pub fn integrate_with_monitor<F, M>(&self,
                                        f: &F,
                                        a: f64,
                                        b: f64,
                                        monitor: &mut M) -> Result<IntegrationReport, IntegrationError>
    where
        F: Fn(f64) -> f64 + ?Sized,
        M: IntegrationMonitor + ?Sized,
    {
        IntegrationError::check_interval(a, b)?;
        if a == b {
            return Ok(IntegrationReport::new(0.0, IntegrationOutcome::Converged, 0, 0, 0));
        }

        monitor.on_enter_integration(a, b, self.tolerance);
        let result = self.refine_until_stable(f, a, b, monitor);
        monitor.on_exit_integration();
        result
    }

    fn refine_until_stable<F, M>(&self,
                                 f: &F,
                                 a: f64,
                                 b: f64,
                                 monitor: &mut M) -> Result<IntegrationReport, IntegrationError>
    where
        F: Fn(f64) -> f64 + ?Sized,
        M: IntegrationMonitor + ?Sized,
    {
        let mut breakpoints = Breakpoints::new(a, b);
        let mut evaluations = 0;
        let mut ret = if breakpoints.has_infinite_end() {
            f64::INFINITY
        } else {
            evaluations += self.rule.nodes();
            self.rule.integrate(f, a, b)
        };

        let mut iteration = 0;
        loop {
            iteration += 1;
            breakpoints = breakpoints.refine();

            let refined: f64 = breakpoints
                .panels()
                .map(|(lhs, rhs)| self.rule.integrate(f, lhs, rhs))
                .sum();
            let panels = breakpoints.panel_count();
            evaluations += panels * self.rule.nodes();

            let state = IterationState::new(iteration,
                                            ret,
                                            refined,
                                            panels,
                                            evaluations,
                                            breakpoints.finite_span());
            monitor.on_iteration(&state);

            if let Some(outcome) = divergence(ret, refined) {
                return Ok(IntegrationReport::new(refined, outcome, iteration, panels, evaluations));
            }

            let converged = (ret - refined).abs() < self.tolerance;
            ret = refined;
            if converged {
                return Ok(IntegrationReport::new(ret,
                                                 IntegrationOutcome::Converged,
                                                 iteration,
                                                 panels,
                                                 evaluations));
            }

            if let IntegrationCommand::Terminate(reason) = monitor.integration_command() {
                return Err(IntegrationError::Terminated {
                    reason,
                    iterations: iteration,
                    last_estimate: ret,
                });
            }
        }
    }
}

/// Two successive estimates blown up in the same direction.
fn divergence(previous: f64, refined: f64) -> Option<IntegrationOutcome> {
    if previous == f64::INFINITY && refined == f64::INFINITY {
        Some(IntegrationOutcome::DivergentPositive)
    } else if previous == f64::NEG_INFINITY && refined == f64::NEG_INFINITY {
        Some(IntegrationOutcome::DivergentNegative)
    } else {
        None
    }
}

/// One-shot adaptive integration of `f` over `[a, b]` with Boole's rule.
///
/// `a` may be `-inf` and `b` may be `+inf`. Returns `±inf` when the integral
/// diverges.
///
/// ```
/// use booleint::math::quadrature::adaptiveintegrator::integrate;
///
/// let value = integrate(&f64::exp, f64::NEG_INFINITY, 0.0, 1e-8).unwrap();
/// assert!((value - 1.0).abs() < 1e-8);
/// ```
pub fn integrate<F>(f: &F, a: f64, b: f64, tolerance: f64) -> Result<f64, IntegrationError>
where
    F: Fn(f64) -> f64 + ?Sized,
{
    AdaptiveIntegrator::new(tolerance)?.integrate(f, a, b)
}
