//! Moment-exactness validation for the full rule catalogue.
//!
//! A rule of degree d must reproduce the closed-form moments of its weight
//! function for every monomial of total degree <= d, and its advertised
//! point count must match what it materializes.

use std::f64::consts::PI;

use math_cubature::{gaussian_all_space, registry, sphere_surface};
use ndarray::{Array1, Array2};

/// Integral of x^a exp(-x^2) over the real line:
/// sqrt(pi) (a-1)!! / 2^(a/2) for even a, zero for odd a.
fn gaussian_moment_1d(a: usize) -> f64 {
    if a % 2 == 1 {
        return 0.0;
    }
    let mut value = PI.sqrt();
    let mut j = 1;
    while j < a {
        value *= j as f64 / 2.0;
        j += 2;
    }
    value
}

fn gaussian_moment(exponents: &[usize]) -> f64 {
    exponents.iter().map(|&a| gaussian_moment_1d(a)).product()
}

fn double_factorial(k: usize) -> f64 {
    let mut value = 1.0;
    let mut j = k;
    while j > 1 {
        value *= j as f64;
        j -= 2;
    }
    value
}

/// Surface integral of x^a y^b z^c over the unit sphere in R^3:
/// 4 pi (a-1)!! (b-1)!! (c-1)!! / (a+b+c+1)!! for all exponents even,
/// zero otherwise.
fn sphere_moment(exponents: &[usize]) -> f64 {
    if exponents.iter().any(|&a| a % 2 == 1) {
        return 0.0;
    }
    let total: usize = exponents.iter().sum();
    let numerator: f64 = exponents
        .iter()
        .map(|&a| double_factorial(a.saturating_sub(1)))
        .product();
    4.0 * PI * numerator / double_factorial(total + 1)
}

/// Every exponent vector of the given dimension with total degree <= max_total.
fn exponent_vectors(dimension: usize, max_total: usize) -> Vec<Vec<usize>> {
    fn fill(
        out: &mut Vec<Vec<usize>>,
        current: &mut Vec<usize>,
        position: usize,
        remaining: usize,
    ) {
        if position == current.len() {
            out.push(current.clone());
            return;
        }
        for a in 0..=remaining {
            current[position] = a;
            fill(out, current, position + 1, remaining - a);
        }
        current[position] = 0;
    }

    let mut out = Vec::new();
    let mut current = vec![0usize; dimension];
    fill(&mut out, &mut current, 0, max_total);
    out
}

/// Quadrature sum of a monomial, plus a scale bounding the roundoff of the
/// summation (so near-zero moments get an absolute, cancellation-aware bound).
fn quadrature_sum(points: &Array2<f64>, weights: &Array1<f64>, exponents: &[usize]) -> (f64, f64) {
    let mut total = 0.0;
    let mut scale = 1.0;
    for (row, &w) in points.rows().into_iter().zip(weights.iter()) {
        let monomial: f64 = row
            .iter()
            .zip(exponents)
            .map(|(x, &a)| x.powi(a as i32))
            .product();
        let term = w * monomial;
        total += term;
        scale += term.abs();
    }
    (total, scale)
}

fn assert_rule_is_exact(
    points: &Array2<f64>,
    weights: &Array1<f64>,
    degree: usize,
    moment: impl Fn(&[usize]) -> f64,
) {
    for exponents in exponent_vectors(points.ncols(), degree) {
        let (quad, scale) = quadrature_sum(points, weights, &exponents);
        let exact = moment(&exponents);
        assert!(
            (quad - exact).abs() <= 1e-6 * scale,
            "monomial {:?}: quadrature {} vs exact {}",
            exponents,
            quad,
            exact
        );
    }
}

#[test]
fn test_gaussian_rules_are_exact_to_their_degree() {
    let cases: &[(usize, usize, usize)] = &[
        (1, 1, 1),
        (1, 3, 2),
        (1, 5, 3),
        (1, 7, 4),
        (1, 9, 5),
        (1, 11, 6),
        (1, 13, 7),
        (1, 15, 8),
        (2, 7, 12),
        (2, 9, 20),
        (2, 11, 28),
        (2, 13, 37),
        (2, 15, 44),
        (3, 7, 27),
        (3, 9, 77),
        (3, 14, 288),
        (4, 7, 49),
        (4, 9, 193),
        (5, 9, 421),
        (6, 7, 137),
        (6, 9, 825),
        (7, 7, 227),
    ];
    for &(dimension, degree, expected_points) in cases {
        let (points, weights) = gaussian_all_space(dimension, degree)
            .unwrap_or_else(|| panic!("no rule for dimension {} degree {}", dimension, degree));
        assert_eq!(
            points.nrows(),
            expected_points,
            "point count for dimension {} degree {}",
            dimension,
            degree
        );
        assert_eq!(weights.len(), expected_points);
        assert_rule_is_exact(&points, &weights, degree, gaussian_moment);
    }
}

#[test]
fn test_sphere_surface_rule_is_exact_to_degree_14() {
    let (points, weights) = sphere_surface(3, 14).expect("72-point spherical rule");
    assert_eq!(points.nrows(), 72);
    assert_rule_is_exact(&points, &weights, 14, sphere_moment);
}

#[test]
fn test_unsupported_pairs_are_reported_as_none() {
    assert!(gaussian_all_space(9, 7).is_none());
    assert!(gaussian_all_space(8, 9).is_none());
    assert!(gaussian_all_space(2, 5).is_none());
    assert!(gaussian_all_space(2, 8).is_none());
    assert!(sphere_surface(3, 13).is_none());
    assert!(sphere_surface(4, 14).is_none());
}

#[test]
fn test_count_estimate_matches_materialized_length_for_every_rule() {
    for rule in registry().rules() {
        for dimension in 1..=10 {
            for degree in 1..=16 {
                if !rule.is_applicable(dimension, degree) {
                    continue;
                }
                let expected = rule.n_points(dimension, degree).unwrap();
                let (points, weights) = rule.points_weights(dimension, degree).unwrap();
                assert_eq!(
                    points.nrows(),
                    expected,
                    "{} at dimension {} degree {}",
                    rule.name,
                    dimension,
                    degree
                );
                assert_eq!(weights.len(), expected);
                assert_eq!(points.ncols(), dimension);
            }
        }
    }
}
