use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum IntegrationError {
    #[error("invalid integration interval [{a}, {b}]")]
    InvalidInterval { a: f64, b: f64 },

    #[error("tolerance must be positive, got {0}")]
    NonPositiveTolerance(f64),

    #[error("step width must be positive and finite, got {0}")]
    InvalidStepWidth(f64),

    #[error("malformed breakpoint sequence: {0}")]
    MalformedBreakpoints(String),

    #[error("integration terminated after {iterations} iterations ({reason}), last estimate {last_estimate}")]
    Terminated {
        reason: String,
        iterations: usize,
        last_estimate: f64,
    },
}

impl IntegrationError {
    /// `a` may be `-inf`, `b` may be `+inf`; NaN endpoints and reversed bounds are rejected.
    pub fn check_interval(a: f64, b: f64) -> Result<(), IntegrationError> {
        let valid = !a.is_nan()
            && !b.is_nan()
            && a != f64::INFINITY
            && b != f64::NEG_INFINITY
            && a <= b;
        if valid {
            Ok(())
        } else {
            Err(IntegrationError::InvalidInterval { a, b })
        }
    }

    pub fn check_tolerance(tolerance: f64) -> Result<(), IntegrationError> {
        // `!(x > 0)` also catches NaN
        if !(tolerance > 0.0) {
            Err(IntegrationError::NonPositiveTolerance(tolerance))
        } else {
            Ok(())
        }
    }

    pub fn check_step_width(step: f64) -> Result<(), IntegrationError> {
        if step > 0.0 && step.is_finite() {
            Ok(())
        } else {
            Err(IntegrationError::InvalidStepWidth(step))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_interval() {
        assert!(IntegrationError::check_interval(0.0, 1.0).is_ok());
        assert!(IntegrationError::check_interval(2.0, 2.0).is_ok());
        assert!(IntegrationError::check_interval(f64::NEG_INFINITY, f64::INFINITY).is_ok());

        assert!(matches!(
            IntegrationError::check_interval(1.0, 0.0),
            Err(IntegrationError::InvalidInterval { .. })
        ));
        assert!(IntegrationError::check_interval(f64::INFINITY, f64::INFINITY).is_err());
        assert!(IntegrationError::check_interval(f64::NEG_INFINITY, f64::NEG_INFINITY).is_err());
        assert!(IntegrationError::check_interval(f64::NAN, 1.0).is_err());
        assert!(IntegrationError::check_interval(0.0, f64::NAN).is_err());
    }

    #[test]
    fn test_check_tolerance() {
        assert!(IntegrationError::check_tolerance(1e-12).is_ok());
        assert_eq!(
            IntegrationError::check_tolerance(0.0),
            Err(IntegrationError::NonPositiveTolerance(0.0))
        );
        assert!(IntegrationError::check_tolerance(-1.0).is_err());
        assert!(IntegrationError::check_tolerance(f64::NAN).is_err());
    }

    #[test]
    fn test_check_step_width() {
        assert!(IntegrationError::check_step_width(0.5).is_ok());
        assert!(IntegrationError::check_step_width(0.0).is_err());
        assert!(IntegrationError::check_step_width(f64::INFINITY).is_err());
    }

    #[test]
    fn test_display() {
        let error = IntegrationError::InvalidInterval { a: 3.0, b: 1.0 };
        assert_eq!(error.to_string(), "invalid integration interval [3, 1]");
    }
}
