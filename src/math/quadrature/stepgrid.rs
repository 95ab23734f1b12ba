use crate::math::quadrature::integrationerror::IntegrationError;

// ─────────────────────────────────────────────────────────────────────────────
// StepGrid
// ─────────────────────────────────────────────────────────────────────────────
//
// Ordered points for fixed-step composite integration.
//
//   [a, b]          a, a+h, a+2h, ..., b          (last gap may be shorter)
//   (-inf, b]       b-o_q, ..., b-o_1, b-o_0, b
//   [a, +inf)       a, a+o_0, a+o_1, ..., a+o_q
//   (-inf, +inf)    (-inf, 0] grid, then [0, +inf) grid without repeating 0
//
// with offsets o_0 = h, o_{k+1} = GROWTH · o_k, stopping at the first offset
// that reaches FAR_FIELD. Regions of interest are better served by splitting
// the call: integrate e^-x over [0, 10] with a fine step and [10, +inf) here.

const FAR_FIELD: f64 = 1e50;
const GROWTH: f64 = 1.1;

#[derive(Clone, Debug, PartialEq)]
pub struct StepGrid {
    points: Vec<f64>,
}

impl StepGrid {
    pub fn new(a: f64, b: f64, step: f64) -> Result<StepGrid, IntegrationError> {
        IntegrationError::check_interval(a, b)?;
        IntegrationError::check_step_width(step)?;

        let points = match (a == f64::NEG_INFINITY, b == f64::INFINITY) {
            (false, false) => Self::finite_points(a, b, step),
            (true, false) => Self::left_tail_points(b, step),
            (false, true) => Self::right_tail_points(a, step),
            (true, true) => {
                let mut points = Self::left_tail_points(0.0, step);
                points.extend(Self::right_tail_points(0.0, step).into_iter().skip(1));
                points
            }
        };
        Ok(StepGrid { points })
    }

    pub fn points(&self) -> &[f64] {
        &self.points
    }

    pub fn panels(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.points.windows(2).map(|pair| (pair[0], pair[1]))
    }

    pub fn panel_count(&self) -> usize {
        self.points.len().saturating_sub(1)
    }

    fn finite_points(a: f64, b: f64, step: f64) -> Vec<f64> {
        let mut points = Vec::new();
        let mut k = 0.0;
        let mut x = a;
        // a + k·h instead of repeated addition keeps the grid free of drift
        while x < b {
            points.push(x);
            k += 1.0;
            x = a + k * step;
        }
        points.push(b);
        points
    }

    /// `o_0, o_1, ..., o_q` for a tail anchored at `anchor`; `o_q` is the
    /// first offset with `|anchor| + o_q >= FAR_FIELD`.
    fn tail_offsets(anchor: f64, step: f64) -> Vec<f64> {
        let mut offsets = vec![step];
        let mut offset = step;
        while anchor.abs() + offset < FAR_FIELD {
            offset *= GROWTH;
            offsets.push(offset);
        }
        offsets
    }

    fn left_tail_points(b: f64, step: f64) -> Vec<f64> {
        let mut points: Vec<f64> = Self::tail_offsets(b, step)
            .into_iter()
            .rev()
            .map(|offset| b - offset)
            .collect();
        points.push(b);
        points
    }

    fn right_tail_points(a: f64, step: f64) -> Vec<f64> {
        let mut points = vec![a];
        points.extend(Self::tail_offsets(a, step).into_iter().map(|offset| a + offset));
        points
    }
}
