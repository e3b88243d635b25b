//! Solver settings for the geocentric → geodetic step.

/// Convergence settings for the fixed-point latitude iteration.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SolverConfig {
    /// Stop once successive latitude estimates differ by at most this (radians).
    pub tolerance: f64,
    /// Hard cap on iterations. Exceeding it is reported as non-convergence.
    pub max_iterations: usize,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            tolerance: 1e-8,
            max_iterations: 100,
        }
    }
}

impl SolverConfig {
    pub fn new(tolerance: f64, max_iterations: usize) -> Self {
        Self {
            tolerance,
            max_iterations,
        }
    }
}
