//! Cubature rules over all of n-space with Gaussian weight `exp(-|x|^2)`.
//!
//! Coefficients are from Stroud, "Approximate Calculation of Multiple
//! Integrals" (Prentice-Hall, 1971); page references on each rule. Each rule
//! stores its generator points and weights; orbit expansion is handled by
//! [`crate::symmetry`].

use std::f64::consts::PI;

use crate::hermite::gauss_hermite;
use crate::rule::{assemble, CubatureRule, DegreeSpec, Region, WeightedOrbit};
use crate::sphere_surface::u_3_14_1_generate;
use crate::symmetry::{full_symmetric_orbit, sign_orbit};

/// The Gaussian all-space catalogue, in registration order.
///
/// Dimension-specific rules come before the general-dimension families so
/// that equal point counts resolve to the specific rule during selection.
pub(crate) fn rules() -> Vec<CubatureRule> {
    vec![
        E_1, E_2_7_1, E_2_9_1, E_2_11_1, E_2_13_1, E_2_15_1, E_3_7_1, E_3_14_1, E_N_7_1, E_N_9_1,
    ]
}

/// Generator point: `leading` coordinates padded with zeros to `dimension`.
fn generator(dimension: usize, leading: &[f64]) -> Vec<f64> {
    let mut point = vec![0.0; dimension];
    point[..leading.len()].copy_from_slice(leading);
    point
}

/// Orbits for a list of 2-D generators `(r_i, s_i)` with weights `b_i`.
fn paired_orbits(b: &[f64], r: &[f64], s: &[f64]) -> Vec<WeightedOrbit> {
    b.iter()
        .zip(r.iter().zip(s))
        .map(|(&weight, (&r_i, &s_i))| {
            WeightedOrbit::new(weight, full_symmetric_orbit(&[r_i, s_i]))
        })
        .collect()
}

// ---------------------------------------------------------------------------
// E1: 1-D Gauss-Hermite, any odd degree
// ---------------------------------------------------------------------------

pub(crate) const E_1: CubatureRule = CubatureRule::new(
    "E1 Gauss-Hermite",
    Region::GaussianAllSpace,
    &[1],
    DegreeSpec::Odd,
    e_1_count,
    e_1_generate,
);

fn e_1_count(_dimension: usize, degree: usize) -> usize {
    (degree + 1) / 2
}

fn e_1_generate(_dimension: usize, degree: usize) -> Vec<WeightedOrbit> {
    let (nodes, weights) = gauss_hermite((degree + 1) / 2);
    nodes
        .into_iter()
        .zip(weights)
        .map(|(x, w)| WeightedOrbit::new(w, vec![vec![x]]))
        .collect()
}

// ---------------------------------------------------------------------------
// E2 7-1, p. 324: 12 points
// ---------------------------------------------------------------------------

pub(crate) const E_2_7_1: CubatureRule = CubatureRule::new(
    "E2 7-1",
    Region::GaussianAllSpace,
    &[2],
    DegreeSpec::OneOf(&[7]),
    e_2_7_1_count,
    e_2_7_1_generate,
);

fn e_2_7_1_count(_dimension: usize, _degree: usize) -> usize {
    12
}

fn e_2_7_1_generate(_dimension: usize, _degree: usize) -> Vec<WeightedOrbit> {
    let sqrt5 = 5.0f64.sqrt();
    let r = 3.0f64.sqrt();
    let s = (0.125 * (9.0 - 3.0 * sqrt5)).sqrt();
    let t = (0.125 * (9.0 + 3.0 * sqrt5)).sqrt();
    let volume = PI;
    let a = volume / 36.0;
    let b = (5.0 + 2.0 * sqrt5) * volume / 45.0;
    let c = (5.0 - 2.0 * sqrt5) * volume / 45.0;
    vec![
        WeightedOrbit::new(a, full_symmetric_orbit(&[r, 0.0])),
        WeightedOrbit::new(b, sign_orbit(&[s, s])),
        WeightedOrbit::new(c, sign_orbit(&[t, t])),
    ]
}

// ---------------------------------------------------------------------------
// E2 9-1, p. 324: 20 points
// ---------------------------------------------------------------------------

pub(crate) const E_2_9_1: CubatureRule = CubatureRule::new(
    "E2 9-1",
    Region::GaussianAllSpace,
    &[2],
    DegreeSpec::OneOf(&[9]),
    e_2_9_1_count,
    e_2_9_1_generate,
);

fn e_2_9_1_count(_dimension: usize, _degree: usize) -> usize {
    20
}

fn e_2_9_1_generate(_dimension: usize, _degree: usize) -> Vec<WeightedOrbit> {
    const R: [f64; 4] = [
        1.538189001320852,
        1.224744871391589,
        0.4817165220011443,
        2.6073498911958554,
    ];
    const S: [f64; 4] = [0.0, R[1], R[2], 0.9663217712794149];
    const B: [f64; 4] = [
        0.1237222328857347,
        0.06544984694978697,
        0.5935280476180875,
        0.001349017971918148,
    ];
    paired_orbits(&B, &R, &S)
}

// ---------------------------------------------------------------------------
// E2 11-1, p. 325: 28 points
// ---------------------------------------------------------------------------

pub(crate) const E_2_11_1: CubatureRule = CubatureRule::new(
    "E2 11-1",
    Region::GaussianAllSpace,
    &[2],
    DegreeSpec::OneOf(&[11]),
    e_2_11_1_count,
    e_2_11_1_generate,
);

fn e_2_11_1_count(_dimension: usize, _degree: usize) -> usize {
    28
}

fn e_2_11_1_generate(_dimension: usize, _degree: usize) -> Vec<WeightedOrbit> {
    const R: [f64; 5] = [
        2.757816396257008,
        1.732050807568877,
        0.5280515301597559,
        1.224744871391589,
        0.7071067811865475,
    ];
    const S: [f64; 5] = [0.0, 0.0, 0.0, 2.121320343559643, 1.224744871391589];
    const B: [f64; 5] = [
        0.8176645817675417e-3,
        0.4363323129985824e-1,
        0.5373255214498174,
        0.363610260832152e-2,
        0.9817477042468103e-1,
    ];
    paired_orbits(&B, &R, &S)
}

// ---------------------------------------------------------------------------
// E2 13-1, p. 325: 37 points
// ---------------------------------------------------------------------------

pub(crate) const E_2_13_1: CubatureRule = CubatureRule::new(
    "E2 13-1",
    Region::GaussianAllSpace,
    &[2],
    DegreeSpec::OneOf(&[13]),
    e_2_13_1_count,
    e_2_13_1_generate,
);

fn e_2_13_1_count(_dimension: usize, _degree: usize) -> usize {
    37
}

fn e_2_13_1_generate(_dimension: usize, _degree: usize) -> Vec<WeightedOrbit> {
    const R: [f64; 7] = [
        2.403151765001966,
        1.298479973315986,
        1.912428205769905,
        0.9478854439698223,
        0.3188824732576547,
        3.325657829663178,
        1.882228401823884,
    ];
    const S: [f64; 7] = [
        0.0,
        0.0,
        R[2],
        R[3],
        R[4],
        1.145527285699371,
        0.8826073082889659,
    ];
    const A: f64 = -0.7482913219380363;
    const B: [f64; 7] = [
        0.3521509661098668e-2,
        0.1650055872539264,
        0.8537825937946404e-3,
        0.1326938806789336,
        0.6447719928481539,
        0.1799266413507747e-4,
        0.1279412775888998e-1,
    ];
    let mut groups = vec![WeightedOrbit::origin(A, 2)];
    groups.extend(paired_orbits(&B, &R, &S));
    groups
}

// ---------------------------------------------------------------------------
// E2 15-1, p. 326: 44 points
// ---------------------------------------------------------------------------

pub(crate) const E_2_15_1: CubatureRule = CubatureRule::new(
    "E2 15-1",
    Region::GaussianAllSpace,
    &[2],
    DegreeSpec::OneOf(&[15]),
    e_2_15_1_count,
    e_2_15_1_generate,
);

fn e_2_15_1_count(_dimension: usize, _degree: usize) -> usize {
    44
}

fn e_2_15_1_generate(_dimension: usize, _degree: usize) -> Vec<WeightedOrbit> {
    const R: [f64; 9] = [
        3.538388728121807,
        2.359676416877929,
        1.312801844620926,
        0.5389559482114205,
        2.300279949805658,
        1.581138830084189,
        0.8418504335819279,
        2.685533581755341,
        1.740847514397403,
    ];
    const S: [f64; 9] = [
        0.0,
        0.0,
        0.0,
        0.0,
        R[4],
        R[5],
        R[6],
        1.112384431771456,
        0.721082650486896,
    ];
    const B: [f64; 9] = [
        0.8006483569659628e-5,
        0.3604577420838264e-2,
        0.1187609330759137,
        0.4372488543791402,
        0.3671735075832989e-4,
        0.5654866776461627e-2,
        0.177777426842424,
        0.273544964785329e-3,
        0.2087984556938594e-1,
    ];
    paired_orbits(&B, &R, &S)
}

// ---------------------------------------------------------------------------
// E3 7-1, p. 319: 27 points
// ---------------------------------------------------------------------------

pub(crate) const E_3_7_1: CubatureRule = CubatureRule::new(
    "E3 7-1",
    Region::GaussianAllSpace,
    &[3],
    DegreeSpec::OneOf(&[7]),
    e_3_7_1_count,
    e_3_7_1_generate,
);

fn e_3_7_1_count(_dimension: usize, _degree: usize) -> usize {
    27
}

fn e_3_7_1_generate(_dimension: usize, _degree: usize) -> Vec<WeightedOrbit> {
    let sqrt15 = 15.0f64.sqrt();
    let volume = PI.powf(1.5);
    let r = (0.25 * (15.0 + sqrt15)).sqrt();
    let s = (0.5 * (6.0 - sqrt15)).sqrt();
    let t = (0.5 * (9.0 + 2.0 * sqrt15)).sqrt();
    let a = ((720.0 + 8.0 * sqrt15) / 2205.0) * volume;
    let b = ((270.0 - 46.0 * sqrt15) / 15435.0) * volume;
    let c = ((162.0 + 41.0 * sqrt15) / 6174.0) * volume;
    let d = ((783.0 - 202.0 * sqrt15) / 24696.0) * volume;
    vec![
        WeightedOrbit::origin(a, 3),
        WeightedOrbit::new(b, full_symmetric_orbit(&[r, 0.0, 0.0])),
        WeightedOrbit::new(c, full_symmetric_orbit(&[s, s, 0.0])),
        WeightedOrbit::new(d, sign_orbit(&[t, t, t])),
    ]
}

// ---------------------------------------------------------------------------
// E3 14-1, p. 321: 288 points; four radial shells times the 72-point
// spherical-surface rule
// ---------------------------------------------------------------------------

pub(crate) const E_3_14_1: CubatureRule = CubatureRule::new(
    "E3 14-1",
    Region::GaussianAllSpace,
    &[3],
    DegreeSpec::OneOf(&[14]),
    e_3_14_1_count,
    e_3_14_1_generate,
);

fn e_3_14_1_count(_dimension: usize, _degree: usize) -> usize {
    288
}

fn e_3_14_1_generate(_dimension: usize, _degree: usize) -> Vec<WeightedOrbit> {
    const RADII: [f64; 4] = [0.7235510187, 1.468553289, 2.266580584, 3.190993201];
    const RADIAL_WEIGHTS: [f64; 4] = [0.2265043732, 0.1908084800, 0.02539731378, 0.0004032955750];

    let (directions, surface_weights) = assemble(u_3_14_1_generate(3, 14), 3);
    let mut groups = Vec::with_capacity(RADII.len() * surface_weights.len());
    for (&radius, &radial_weight) in RADII.iter().zip(&RADIAL_WEIGHTS) {
        for (direction, &surface_weight) in directions.rows().into_iter().zip(surface_weights.iter())
        {
            groups.push(WeightedOrbit::new(
                radial_weight * surface_weight,
                vec![direction.iter().map(|&x| radius * x).collect()],
            ));
        }
    }
    groups
}

// ---------------------------------------------------------------------------
// En 7-1, p. 318: 2^n + 2n^2 + 1 points, dimensions 3, 4, 6, 7
// ---------------------------------------------------------------------------

pub(crate) const E_N_7_1: CubatureRule = CubatureRule::new(
    "En 7-1",
    Region::GaussianAllSpace,
    &[3, 4, 6, 7],
    DegreeSpec::OneOf(&[7]),
    e_n_7_1_count,
    e_n_7_1_generate,
);

fn e_n_7_1_count(dimension: usize, _degree: usize) -> usize {
    (1 << dimension) + 2 * dimension * dimension + 1
}

fn e_n_7_1_generate(dimension: usize, _degree: usize) -> Vec<WeightedOrbit> {
    let n = dimension as f64;
    // Stroud gives two solutions, with every sign of sqrt(3(8-n)) flipped
    // between them; only one is real on each side of n = 5
    let sigma = if dimension < 5 { 1.0 } else { -1.0 };
    let u = (3.0 * (8.0 - n)).sqrt();
    let r = ((3.0 * (8.0 - n) + sigma * (n - 2.0) * u) / (2.0 * (5.0 - n))).sqrt();
    let s = ((3.0 * n + sigma * 2.0 * u) / (2.0 * (3.0 * n - 8.0))).sqrt();
    let t = ((6.0 - sigma * u) / 2.0).sqrt();
    let volume = PI.powf(n / 2.0);
    let b = (8.0 - n) * volume / (8.0 * r.powi(6));
    let c = volume / (2.0f64.powi(dimension as i32 + 3) * s.powi(6));
    let d = volume / (16.0 * t.powi(6));
    let a = volume
        - 2.0 * n * b
        - 2.0f64.powi(dimension as i32) * c
        - 2.0 * n * (n - 1.0) * d;
    vec![
        WeightedOrbit::origin(a, dimension),
        WeightedOrbit::new(b, full_symmetric_orbit(&generator(dimension, &[r]))),
        WeightedOrbit::new(c, full_symmetric_orbit(&vec![s; dimension])),
        WeightedOrbit::new(d, full_symmetric_orbit(&generator(dimension, &[t, t]))),
    ]
}

// ---------------------------------------------------------------------------
// En 9-1, p. 320: dimensions 3 to 6
// ---------------------------------------------------------------------------

pub(crate) const E_N_9_1: CubatureRule = CubatureRule::new(
    "En 9-1",
    Region::GaussianAllSpace,
    &[3, 4, 5, 6],
    DegreeSpec::OneOf(&[9]),
    e_n_9_1_count,
    e_n_9_1_generate,
);

fn e_n_9_1_count(dimension: usize, _degree: usize) -> usize {
    let n = dimension;
    (2 * n.pow(4) - 4 * n.pow(3) + 22 * n * n - 8 * n + 3) / 3
}

fn e_n_9_1_coefficients(dimension: usize) -> &'static [f64] {
    match dimension {
        3 => &[
            0.6764487344299924,
            0.511989106291551e-2,
            0.448595723493744,
            0.235223454595606e-3,
            0.915390713080005e-1,
            0.139208199920793e-1,
            0.235223454595606e-3,
            0.915390713080008e-1,
        ],
        4 => &[
            -0.860452945007048,
            -0.405511998533795e-1,
            0.107026475449715e1,
            0.138974239307092e-3,
            -0.162248779448181,
            0.246740110027234e-1,
            0.138974239307094e-3,
            0.162248779448181,
            0.138974239307094e-3,
        ],
        5 => &[
            -0.827347006200826e1,
            -0.160820174530905,
            0.353499863758467e1,
            0.738976276909564e-3,
            -0.862735421812943,
            0.437335458190621e-1,
            -0.246325425636523e-3,
            0.287578473937648,
            0.246325425636523e-3,
        ],
        6 => &[
            -0.361840434143098e2,
            -0.447936529138517,
            0.112077863004144e2,
            0.392940404320855e-2,
            -0.254859786784158e1,
            0.775156917007496e-1,
            -0.130980134773619e-2,
            0.509719573568315,
            0.436600449245395e-3,
        ],
        _ => unreachable!("validated dimensions are 3..=6"),
    }
}

fn e_n_9_1_generate(dimension: usize, _degree: usize) -> Vec<WeightedOrbit> {
    const U: f64 = 2.02018287045609;
    const V: f64 = 0.958572464613819;
    let b = e_n_9_1_coefficients(dimension);
    let mut groups = vec![
        WeightedOrbit::origin(b[0], dimension),
        WeightedOrbit::new(b[1], full_symmetric_orbit(&generator(dimension, &[U]))),
        WeightedOrbit::new(b[2], full_symmetric_orbit(&generator(dimension, &[V]))),
        WeightedOrbit::new(b[3], full_symmetric_orbit(&generator(dimension, &[U, U]))),
        WeightedOrbit::new(b[4], full_symmetric_orbit(&generator(dimension, &[V, V]))),
        WeightedOrbit::new(b[5], full_symmetric_orbit(&generator(dimension, &[U, V]))),
        WeightedOrbit::new(b[6], full_symmetric_orbit(&generator(dimension, &[U, U, U]))),
        WeightedOrbit::new(b[7], full_symmetric_orbit(&generator(dimension, &[V, V, V]))),
    ];
    if dimension > 3 {
        groups.push(WeightedOrbit::new(
            b[8],
            full_symmetric_orbit(&generator(dimension, &[U, U, U, U])),
        ));
    }
    groups
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counts_match_generated_orbits() {
        let cases: [(CubatureRule, usize, usize); 9] = [
            (E_2_7_1, 2, 7),
            (E_2_9_1, 2, 9),
            (E_2_11_1, 2, 11),
            (E_2_13_1, 2, 13),
            (E_2_15_1, 2, 15),
            (E_3_7_1, 3, 7),
            (E_3_14_1, 3, 14),
            (E_N_7_1, 4, 7),
            (E_N_9_1, 5, 9),
        ];
        for (rule, dimension, degree) in cases {
            let expected = rule.n_points(dimension, degree).unwrap();
            let (points, weights) = rule.points_weights(dimension, degree).unwrap();
            assert_eq!(points.nrows(), expected, "{} points", rule.name);
            assert_eq!(weights.len(), expected, "{} weights", rule.name);
        }
    }

    #[test]
    fn test_e_1_count_tracks_degree() {
        assert_eq!(E_1.n_points(1, 1).unwrap(), 1);
        assert_eq!(E_1.n_points(1, 3).unwrap(), 2);
        assert_eq!(E_1.n_points(1, 15).unwrap(), 8);
        assert!(E_1.n_points(1, 4).is_err());
        assert!(E_1.n_points(2, 3).is_err());
    }

    #[test]
    fn test_e_n_7_1_radii_are_real_in_every_declared_dimension() {
        for dimension in [3, 4, 6, 7] {
            let (points, weights) = E_N_7_1.points_weights(dimension, 7).unwrap();
            assert!(points.iter().all(|x| x.is_finite()), "n = {}", dimension);
            assert!(weights.iter().all(|w| w.is_finite()), "n = {}", dimension);
        }
    }

    #[test]
    fn test_weights_sum_to_gaussian_volume() {
        // the zeroth moment of exp(-|x|^2) is pi^(n/2)
        for (rule, dimension, degree) in [(E_2_7_1, 2, 7), (E_3_7_1, 3, 7), (E_N_7_1, 6, 7)] {
            let (_, weights) = rule.points_weights(dimension, degree).unwrap();
            let total: f64 = weights.iter().sum();
            let volume = PI.powf(dimension as f64 / 2.0);
            assert!(
                (total - volume).abs() < 1e-10 * volume,
                "{}: sum = {}, volume = {}",
                rule.name,
                total,
                volume
            );
        }
    }
}
