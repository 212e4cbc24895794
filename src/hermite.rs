//! Gauss-Hermite quadrature nodes and weights.
//!
//! Physicists' convention: an n-point rule integrates f against the weight
//! `exp(-x^2)` over the whole real line and is exact for polynomials of
//! degree `2n - 1`.

use std::f64::consts::PI;

const MAX_NEWTON_ITERATIONS: usize = 64;
const NEWTON_TOLERANCE: f64 = 1e-15;

/// Nodes and weights of the n-point Gauss-Hermite rule.
///
/// Nodes come out in +/- pairs, outermost root first; weights sum to
/// `sqrt(pi)`, the integral of `exp(-x^2)`.
///
/// # Example
/// ```
/// use math_cubature::hermite::gauss_hermite;
///
/// let (nodes, weights) = gauss_hermite(2);
/// assert!((nodes[0] - 0.5f64.sqrt()).abs() < 1e-12);
/// assert!((weights.iter().sum::<f64>() - std::f64::consts::PI.sqrt()).abs() < 1e-12);
/// ```
pub fn gauss_hermite(n: usize) -> (Vec<f64>, Vec<f64>) {
    assert!(n >= 1, "rule needs at least one node");

    let mut nodes = vec![0.0; n];
    let mut weights = vec![0.0; n];
    let nf = n as f64;

    let mut z = 0.0;
    for i in 0..n.div_ceil(2) {
        // Stroud & Secrest initial guesses, one root in from the previous
        z = match i {
            0 => (2.0 * nf + 1.0).sqrt() - 1.85575 * (2.0 * nf + 1.0).powf(-1.0 / 6.0),
            1 => z - 1.14 * nf.powf(0.426) / z,
            2 => 1.86 * z - 0.86 * nodes[0],
            3 => 1.91 * z - 0.91 * nodes[1],
            _ => 2.0 * z - nodes[i - 2],
        };

        let mut slope = 0.0;
        for _ in 0..MAX_NEWTON_ITERATIONS {
            let (value, derivative) = hermite_value(n, z);
            slope = derivative;
            let step = value / derivative;
            z -= step;
            if step.abs() <= NEWTON_TOLERANCE {
                break;
            }
        }

        nodes[i] = z;
        nodes[n - 1 - i] = -z;
        weights[i] = 2.0 / (slope * slope);
        weights[n - 1 - i] = weights[i];
    }

    (nodes, weights)
}

/// Orthonormal Hermite polynomial and its derivative at `x`, by the
/// three-term recurrence
///
/// ```text
/// H~_0(x) = pi^(-1/4)
/// H~_{j+1}(x) = x sqrt(2/(j+1)) H~_j(x) - sqrt(j/(j+1)) H~_{j-1}(x)
/// H~_n'(x) = sqrt(2n) H~_{n-1}(x)
/// ```
fn hermite_value(n: usize, x: f64) -> (f64, f64) {
    let mut previous = 0.0;
    let mut current = PI.powf(-0.25);
    for j in 0..n {
        let jf = j as f64;
        let next = x * (2.0 / (jf + 1.0)).sqrt() * current - (jf / (jf + 1.0)).sqrt() * previous;
        previous = current;
        current = next;
    }
    (current, (2.0 * n as f64).sqrt() * previous)
}
