//! Real roots of real-coefficient polynomials.
//!
//! Bracketing solver: the real critical points of p split the line into
//! intervals on which p is monotonic, so each interval holds at most one
//! root, found by bisection wherever p changes sign. Critical points are
//! obtained by applying the same procedure to p', down to the linear case.

const MAX_BISECTION_STEPS: usize = 128;

/// All real roots where p changes sign, plus sign-preserving roots that land
/// exactly on a computed critical point, sorted ascending.
///
/// `coefficients` are given lowest degree first, so `&[c0, c1, c2]` is
/// `c0 + c1 x + c2 x^2`. Repeated roots are reported once; roots of even
/// multiplicity that miss the critical-point grid numerically are not
/// detected. Output order is ascending and deterministic for a fixed input.
pub fn real_roots(coefficients: &[f64]) -> Vec<f64> {
    roots_of(&trimmed(coefficients))
}

fn roots_of(poly: &[f64]) -> Vec<f64> {
    if poly.len() <= 1 {
        // constant polynomial
        return Vec::new();
    }
    if poly.len() == 2 {
        return vec![-poly[0] / poly[1]];
    }

    let bound = root_bound(poly);
    let critical = roots_of(&trimmed(&derivative(poly)));
    let mut edges = Vec::with_capacity(critical.len() + 2);
    edges.push(-bound);
    edges.extend(critical.into_iter().filter(|c| c.abs() < bound));
    edges.push(bound);

    let mut roots = Vec::new();
    for pair in edges.windows(2) {
        let (lo, hi) = (pair[0], pair[1]);
        let (f_lo, f_hi) = (evaluate(poly, lo), evaluate(poly, hi));
        if f_lo == 0.0 {
            // a critical point that is itself a root; shared edges appear in
            // two windows, so report it once
            if roots.last() != Some(&lo) {
                roots.push(lo);
            }
        } else if f_lo * f_hi < 0.0 {
            roots.push(bisect(poly, lo, hi, f_lo));
        }
    }
    roots
}

/// Horner evaluation.
fn evaluate(poly: &[f64], x: f64) -> f64 {
    poly.iter().rev().fold(0.0, |acc, &c| acc * x + c)
}

fn derivative(poly: &[f64]) -> Vec<f64> {
    poly.iter()
        .enumerate()
        .skip(1)
        .map(|(k, &c)| k as f64 * c)
        .collect()
}

fn trimmed(coefficients: &[f64]) -> Vec<f64> {
    let mut poly = coefficients.to_vec();
    while poly.len() > 1 && poly[poly.len() - 1] == 0.0 {
        poly.pop();
    }
    poly
}

/// Cauchy bound: every root lies strictly inside [-bound, bound].
fn root_bound(poly: &[f64]) -> f64 {
    let leading = poly[poly.len() - 1];
    1.0 + poly[..poly.len() - 1]
        .iter()
        .map(|c| (c / leading).abs())
        .fold(0.0, f64::max)
}

fn bisect(poly: &[f64], mut lo: f64, mut hi: f64, mut f_lo: f64) -> f64 {
    for _ in 0..MAX_BISECTION_STEPS {
        let mid = 0.5 * (lo + hi);
        if mid == lo || mid == hi {
            // interval is at floating-point resolution
            break;
        }
        let f_mid = evaluate(poly, mid);
        if f_mid == 0.0 {
            return mid;
        }
        if f_lo * f_mid < 0.0 {
            hi = mid;
        } else {
            lo = mid;
            f_lo = f_mid;
        }
    }
    0.5 * (lo + hi)
}
