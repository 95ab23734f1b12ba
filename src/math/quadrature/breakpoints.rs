use crate::math::quadrature::integrationerror::IntegrationError;

// ─────────────────────────────────────────────────────────────────────────────
// Breakpoints
// ─────────────────────────────────────────────────────────────────────────────
//
// Strictly increasing partition p[0] < p[1] < ... < p[n-1] of [a, b].
// An infinite value may only sit at p[0] (-inf) or p[n-1] (+inf); the panel
// touching it is never handed to a quadrature rule.
//
// refine() doubles the density:
//
//   [0, 2, 4]            -> [0, 1, 2, 3, 4]
//   [-inf, 0]            -> [-inf, -1, 0]           (bootstrap)
//   [-inf, -1, 0]        -> [-inf, -2, -1, -0.5, 0]
//   [-inf, +inf]         -> [-inf, 0, +inf]          (bootstrap)
//
// Next to an infinite end the "midpoint" is replaced by a synthetic boundary
// at 2x, x being the current inner boundary. An inner boundary of 0 (left by
// the (-inf, +inf) bootstrap) moves to -1 or 1 instead.

#[derive(Clone, Debug, PartialEq)]
pub struct Breakpoints {
    points: Vec<f64>,
}

impl Breakpoints {
    /// Two-point sequence `[a, b]`. Bounds are validated by the caller.
    pub fn new(a: f64, b: f64) -> Breakpoints {
        Breakpoints { points: vec![a, b] }
    }

    pub fn from_points(points: Vec<f64>) -> Result<Breakpoints, IntegrationError> {
        let n = points.len();
        if n < 2 {
            return Err(IntegrationError::MalformedBreakpoints(format!(
                "need at least 2 points, got {}",
                n
            )));
        }
        if points.iter().any(|x| x.is_nan()) {
            return Err(IntegrationError::MalformedBreakpoints("NaN breakpoint".to_owned()));
        }
        if points.windows(2).any(|pair| pair[0] >= pair[1]) {
            return Err(IntegrationError::MalformedBreakpoints(
                "points must be strictly increasing".to_owned(),
            ));
        }
        if points[1..(n - 1)].iter().any(|x| x.is_infinite()) {
            return Err(IntegrationError::MalformedBreakpoints(
                "infinite interior point".to_owned(),
            ));
        }
        Ok(Breakpoints { points })
    }

    pub fn points(&self) -> &[f64] {
        &self.points
    }

    pub fn first(&self) -> f64 {
        self.points[0]
    }

    pub fn last(&self) -> f64 {
        self.points[self.points.len() - 1]
    }

    pub fn has_infinite_end(&self) -> bool {
        self.first().is_infinite() || self.last().is_infinite()
    }

    /// Index range of the points bounding quadrature-able panels.
    fn active_range(&self) -> (usize, usize) {
        let start = if self.first() == f64::NEG_INFINITY { 1 } else { 0 };
        let end = if self.last() == f64::INFINITY {
            self.points.len() - 1
        } else {
            self.points.len()
        };
        (start, end.max(start))
    }

    /// Adjacent finite pairs, skipping the panels that touch an infinite end.
    pub fn panels(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        let (start, end) = self.active_range();
        self.points[start..end]
            .windows(2)
            .map(|pair| (pair[0], pair[1]))
    }

    pub fn panel_count(&self) -> usize {
        let (start, end) = self.active_range();
        (end - start).saturating_sub(1)
    }

    /// Smallest and largest finite breakpoint.
    pub fn finite_span(&self) -> Option<(f64, f64)> {
        let (start, end) = self.active_range();
        if start < end {
            Some((self.points[start], self.points[end - 1]))
        } else {
            None
        }
    }

    pub fn refine(&self) -> Breakpoints {
        if let Some(seeded) = self.bootstrap() {
            return seeded;
        }

        let n = self.points.len();
        let mut refined = Vec::with_capacity(2 * n - 1);
        for pair in self.points.windows(2) {
            let (lhs, rhs) = (pair[0], pair[1]);
            refined.push(lhs);
            let inserted = if lhs == f64::NEG_INFINITY {
                push_left(rhs)
            } else if rhs == f64::INFINITY {
                push_right(lhs)
            } else {
                midpoint(lhs, rhs)
            };
            refined.push(inserted);
        }
        refined.push(self.last());

        Breakpoints { points: refined }
    }

    /// First-refinement seeds near the origin for infinite intervals.
    fn bootstrap(&self) -> Option<Breakpoints> {
        if self.points.len() != 2 {
            return None;
        }
        let (a, b) = (self.first(), self.last());
        let seed = match (a == f64::NEG_INFINITY, b == f64::INFINITY) {
            (true, true) => 0.0,
            (true, false) if b >= 0.0 => -1.0,
            (false, true) if a <= 0.0 => 1.0,
            _ => return None,
        };
        Some(Breakpoints { points: vec![a, seed, b] })
    }
}

fn midpoint(lhs: f64, rhs: f64) -> f64 {
    (lhs + rhs) / 2.0
}

/// Doubles a negative boundary's distance from zero; a boundary at or right
/// of zero restarts from -1.
fn push_left(x: f64) -> f64 {
    if x < 0.0 { 2.0 * x } else { -1.0 }
}

fn push_right(x: f64) -> f64 {
    if x > 0.0 { 2.0 * x } else { 1.0 }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    const NEG_INF: f64 = f64::NEG_INFINITY;
    const INF: f64 = f64::INFINITY;

    fn refined(points: Vec<f64>) -> Vec<f64> {
        Breakpoints::from_points(points).unwrap().refine().points().to_vec()
    }

    #[test]
    fn test_finite_doubling() {
        assert_eq!(refined(vec![0.0, 2.0, 4.0]), vec![0.0, 1.0, 2.0, 3.0, 4.0]);
    }

    #[test]
    fn test_doubling_law_preserves_originals() {
        let original = vec![-3.0, -1.25, 0.0, 0.5, 7.0];
        let output = refined(original.clone());
        assert_eq!(output.len(), 2 * original.len() - 1);
        for (i, x) in original.iter().enumerate() {
            assert_eq!(output[2 * i], *x);
        }
        for i in 0..(original.len() - 1) {
            assert_eq!(output[2 * i + 1], (original[i] + original[i + 1]) / 2.0);
        }
    }

    #[rstest]
    #[case(vec![NEG_INF, INF], vec![NEG_INF, 0.0, INF])]
    #[case(vec![NEG_INF, 0.0], vec![NEG_INF, -1.0, 0.0])]
    #[case(vec![NEG_INF, 5.0], vec![NEG_INF, -1.0, 5.0])]
    #[case(vec![0.0, INF], vec![0.0, 1.0, INF])]
    #[case(vec![-2.0, INF], vec![-2.0, 1.0, INF])]
    fn test_bootstrap(#[case] input: Vec<f64>, #[case] expected: Vec<f64>) {
        assert_eq!(refined(input), expected);
    }

    #[rstest]
    #[case(vec![NEG_INF, -3.0], vec![NEG_INF, -6.0, -3.0])]
    #[case(vec![4.0, INF], vec![4.0, 8.0, INF])]
    #[case(vec![NEG_INF, -0.5], vec![NEG_INF, -1.0, -0.5])]
    #[case(vec![0.25, INF], vec![0.25, 0.5, INF])]
    fn test_bootstrap_falls_through_to_doubling(#[case] input: Vec<f64>, #[case] expected: Vec<f64>) {
        assert_eq!(refined(input), expected);
    }

    #[test]
    fn test_left_infinite_doubles_outward() {
        assert_eq!(
            refined(vec![NEG_INF, -1.0, 0.0]),
            vec![NEG_INF, -2.0, -1.0, -0.5, 0.0]
        );
        assert_eq!(
            refined(vec![NEG_INF, -2.0, -1.0, -0.5, 0.0]),
            vec![NEG_INF, -4.0, -2.0, -1.5, -1.0, -0.75, -0.5, -0.25, 0.0]
        );
    }

    #[test]
    fn test_small_boundary_keeps_doubling() {
        let mut breakpoints = Breakpoints::new(0.125, INF);
        for expected in [0.25, 0.5, 1.0, 2.0] {
            breakpoints = breakpoints.refine();
            let points = breakpoints.points();
            assert_eq!(points[points.len() - 2], expected);
        }
    }

    #[test]
    fn test_boundary_across_origin_restarts() {
        assert_eq!(refined(vec![NEG_INF, 3.0, 5.0]), vec![NEG_INF, -1.0, 3.0, 4.0, 5.0]);
        assert_eq!(refined(vec![-5.0, -3.0, INF]), vec![-5.0, -4.0, -3.0, 1.0, INF]);
    }

    #[test]
    fn test_both_infinite_grows_from_origin() {
        let mut breakpoints = Breakpoints::new(NEG_INF, INF);
        breakpoints = breakpoints.refine();
        breakpoints = breakpoints.refine();
        assert_eq!(breakpoints.points(), &[NEG_INF, -1.0, 0.0, 1.0, INF]);
        breakpoints = breakpoints.refine();
        assert_eq!(
            breakpoints.points(),
            &[NEG_INF, -2.0, -1.0, -0.5, 0.0, 0.5, 1.0, 2.0, INF]
        );
    }

    #[test]
    fn test_refinement_stays_strictly_increasing() {
        let mut breakpoints = Breakpoints::new(NEG_INF, 3.0);
        for _ in 0..8 {
            breakpoints = breakpoints.refine();
            assert!(Breakpoints::from_points(breakpoints.points().to_vec()).is_ok());
        }
    }

    #[test]
    fn test_panels_skip_infinite_ends() {
        let breakpoints = Breakpoints::from_points(vec![NEG_INF, -2.0, -1.0, 0.0, 1.0, INF]).unwrap();
        let panels: Vec<(f64, f64)> = breakpoints.panels().collect();
        assert_eq!(panels, vec![(-2.0, -1.0), (-1.0, 0.0), (0.0, 1.0)]);
        assert_eq!(breakpoints.panel_count(), 3);
        assert_eq!(breakpoints.finite_span(), Some((-2.0, 1.0)));
    }

    #[test]
    fn test_no_panels_after_doubly_infinite_bootstrap() {
        let breakpoints = Breakpoints::new(NEG_INF, INF).refine();
        assert_eq!(breakpoints.panels().count(), 0);
        assert_eq!(breakpoints.panel_count(), 0);
        assert_eq!(breakpoints.finite_span(), Some((0.0, 0.0)));
    }

    #[test]
    fn test_from_points_rejects_malformed() {
        assert!(Breakpoints::from_points(vec![1.0]).is_err());
        assert!(Breakpoints::from_points(vec![0.0, 0.0]).is_err());
        assert!(Breakpoints::from_points(vec![2.0, 1.0]).is_err());
        assert!(Breakpoints::from_points(vec![0.0, INF, 2.0]).is_err());
        assert!(Breakpoints::from_points(vec![0.0, f64::NAN]).is_err());
    }
}
