use nalgebra::SVector;

// ─────────────────────────────────────────────────────────────────────────────
// PanelRule
// ─────────────────────────────────────────────────────────────────────────────

/// A fixed quadrature stencil applied to one finite panel `[lhs, rhs]`.
///
/// Implementations hold no per-call state, so a rule can be shared freely
/// between threads.
pub trait PanelRule: Send + Sync {
    fn name(&self) -> &str;

    /// Number of integrand evaluations per panel.
    fn nodes(&self) -> usize;

    /// Highest polynomial degree integrated exactly.
    fn exact_degree(&self) -> usize;

    /// Both bounds must be finite.
    fn integrate<F>(&self, f: &F, lhs: f64, rhs: f64) -> f64
    where
        F: Fn(f64) -> f64 + ?Sized;
}

// ─────────────────────────────────────────────────────────────────────────────
// NewtonCotesRule
// ─────────────────────────────────────────────────────────────────────────────
//
// Closed Newton–Cotes formula over N equally spaced nodes:
//
//   ∫_L^R f(x) dx ≈ scale · h · Σ w_i · f(L + i·h),   h = (R - L) / (N - 1)
//
//   Simpson (N = 3): scale = 1/3,  w = [1, 4, 1]
//   Boole   (N = 5): scale = 2/45, w = [7, 32, 12, 32, 7]

#[derive(Clone, Debug)]
pub struct NewtonCotesRule<const N: usize> {
    name: &'static str,
    weights: SVector<f64, N>,
    scale: f64,
    exact_degree: usize,
}

pub type SimpsonRule = NewtonCotesRule<3>;

pub type BooleRule = NewtonCotesRule<5>;

impl NewtonCotesRule<3> {
    pub fn simpson() -> SimpsonRule {
        NewtonCotesRule {
            name: "Simpson",
            weights: SVector::from([1.0, 4.0, 1.0]),
            scale: 1.0 / 3.0,
            exact_degree: 3,
        }
    }
}

impl NewtonCotesRule<5> {
    pub fn boole() -> BooleRule {
        NewtonCotesRule {
            name: "Boole",
            weights: SVector::from([7.0, 32.0, 12.0, 32.0, 7.0]),
            scale: 2.0 / 45.0,
            exact_degree: 5,
        }
    }
}

impl<const N: usize> NewtonCotesRule<N> {
    pub fn weights(&self) -> &SVector<f64, N> {
        &self.weights
    }

    pub fn scale(&self) -> f64 {
        self.scale
    }

    /// Integrand values at the N nodes. The last node is `rhs` itself rather
    /// than `lhs + (N-1)·h`, so adjacent panels share their endpoint exactly.
    fn sample<F>(&self, f: &F, lhs: f64, rhs: f64, h: f64) -> SVector<f64, N>
    where
        F: Fn(f64) -> f64 + ?Sized,
    {
        SVector::from_fn(|i, _| {
            if i + 1 == N {
                f(rhs)
            } else {
                f(lhs + (i as f64) * h)
            }
        })
    }
}

impl<const N: usize> PanelRule for NewtonCotesRule<N> {
    fn name(&self) -> &str {
        self.name
    }

    fn nodes(&self) -> usize {
        N
    }

    fn exact_degree(&self) -> usize {
        self.exact_degree
    }

    fn integrate<F>(&self, f: &F, lhs: f64, rhs: f64) -> f64
    where
        F: Fn(f64) -> f64 + ?Sized,
    {
        let h = (rhs - lhs) / ((N - 1) as f64);
        let values = self.sample(f, lhs, rhs, h);
        self.scale * h * self.weights.dot(&values)
    }
}
