use serde::{Deserialize, Serialize};

use crate::complex::Complex;
use crate::error::CoreError;

/// Bailout on `|z|² > 4`, i.e. `|z| > 2`: past this radius the orbit is
/// guaranteed to diverge.
const ESCAPE_RADIUS_SQ: f64 = 4.0;

/// Count escape-time iterations for `c` under `z ← z² + c`, starting from
/// `z₀ = 0`.
///
/// Returns the number of steps taken before `|z|` exceeded 2, or
/// `max_iterations` if the orbit stayed bounded that long. A return value
/// equal to `max_iterations` means "assumed in the set"; anything smaller
/// means the point escaped.
#[inline]
pub fn iterations(c: Complex, max_iterations: u32) -> u32 {
    let mut z = Complex::ZERO;
    let mut n = 0;
    while n < max_iterations && z.norm_sq() <= ESCAPE_RADIUS_SQ {
        z = z.square() + c;
        n += 1;
    }
    n
}

/// Iteration budget for the escape-time evaluator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EvaluatorConfig {
    pub max_iterations: u32,
}

impl EvaluatorConfig {
    pub const DEFAULT_MAX_ITERATIONS: u32 = 30;

    pub fn new(max_iterations: u32) -> crate::Result<Self> {
        if max_iterations < 1 {
            return Err(CoreError::InvalidMaxIterations(max_iterations));
        }
        Ok(Self { max_iterations })
    }

    /// Evaluate `c` against this budget.
    #[inline]
    pub fn iterations(&self, c: Complex) -> u32 {
        iterations(c, self.max_iterations)
    }

    /// `true` if an iteration count from this budget escaped early.
    #[inline]
    pub fn escapes(&self, n: u32) -> bool {
        n < self.max_iterations
    }

    /// Raise the budget by `step`, saturating at `u32::MAX`.
    pub fn increase_iterations(&mut self, step: u32) {
        self.max_iterations = self.max_iterations.saturating_add(step);
    }
}

impl Default for EvaluatorConfig {
    fn default() -> Self {
        Self {
            max_iterations: Self::DEFAULT_MAX_ITERATIONS,
        }
    }
}
