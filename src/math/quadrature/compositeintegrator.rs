use crate::math::quadrature::integrationerror::IntegrationError;
use crate::math::quadrature::panelrule::{
    BooleRule,
    PanelRule,
    SimpsonRule
};
use crate::math::quadrature::stepgrid::StepGrid;

/// Fixed-step composite integration: one application of `rule` per gap of a
/// [`StepGrid`]. No error control; accuracy is set by the step width.
#[derive(Clone, Debug)]
pub struct CompositeIntegrator<R: PanelRule> {
    rule: R,
    step: f64,
}

impl<R: PanelRule> CompositeIntegrator<R> {
    pub fn new(rule: R, step: f64) -> Result<CompositeIntegrator<R>, IntegrationError> {
        IntegrationError::check_step_width(step)?;
        Ok(CompositeIntegrator { rule, step })
    }

    pub fn rule(&self) -> &R {
        &self.rule
    }

    pub fn step(&self) -> f64 {
        self.step
    }

    pub fn integrate<F>(&self, f: &F, a: f64, b: f64) -> Result<f64, IntegrationError>
    where
        F: Fn(f64) -> f64 + ?Sized,
    {
        let grid = StepGrid::new(a, b, self.step)?;
        Ok(grid
            .panels()
            .map(|(lhs, rhs)| self.rule.integrate(f, lhs, rhs))
            .sum())
    }
}

pub fn simpson_integrate<F>(f: &F, a: f64, b: f64, step: f64) -> Result<f64, IntegrationError>
where
    F: Fn(f64) -> f64 + ?Sized,
{
    CompositeIntegrator::new(SimpsonRule::simpson(), step)?.integrate(f, a, b)
}

pub fn boole_integrate<F>(f: &F, a: f64, b: f64, step: f64) -> Result<f64, IntegrationError>
where
    F: Fn(f64) -> f64 + ?Sized,
{
    CompositeIntegrator::new(BooleRule::boole(), step)?.integrate(f, a, b)
}
