//! Cubature rules on the surface of the unit sphere.
//!
//! Coefficients from Stroud, "Approximate Calculation of Multiple Integrals"
//! (Prentice-Hall, 1971).

use std::f64::consts::PI;

use crate::roots::real_roots;
use crate::rule::{CubatureRule, DegreeSpec, Region, WeightedOrbit};
use crate::symmetry::sign_orbit;

pub(crate) fn rules() -> Vec<CubatureRule> {
    vec![U_3_14_1]
}

/// U3 14-1, p. 302: 72 points, degree 14, surface of the unit sphere in R^3.
pub(crate) const U_3_14_1: CubatureRule = CubatureRule::new(
    "U3 14-1",
    Region::SphereSurface,
    &[3],
    DegreeSpec::OneOf(&[14]),
    u_3_14_1_count,
    u_3_14_1_generate,
);

fn u_3_14_1_count(_dimension: usize, _degree: usize) -> usize {
    72
}

pub(crate) fn u_3_14_1_generate(_dimension: usize, _degree: usize) -> Vec<WeightedOrbit> {
    let sqrt5 = 5.0f64.sqrt();
    let r = (0.1 * (5.0 - sqrt5)).sqrt();
    let s = (0.1 * (5.0 + sqrt5)).sqrt();
    let area = 4.0 * PI;
    let b = 125.0 * area / 10080.0;
    let c = 143.0 * area / 10080.0;

    // z_i^2 are the six (ascending) roots of this polynomial
    let z: Vec<f64> = real_roots(&[
        9.0,
        -3562.0,
        115115.0,
        -1043900.0,
        3578575.0,
        -5112250.0,
        2556125.0,
    ])
    .into_iter()
    .map(f64::sqrt)
    .collect();

    let two_s = 2.0 * s;
    let u = [
        (-z[2] + z[3]) / two_s,
        (-z[4] + z[1]) / two_s,
        (-z[1] + z[5]) / two_s,
        (-z[5] + z[2]) / two_s,
        (-z[3] + z[4]) / two_s,
    ];
    let v = [
        (z[4] + z[5]) / two_s,
        (z[5] + z[3]) / two_s,
        (z[2] + z[4]) / two_s,
        (z[3] + z[1]) / two_s,
        (z[1] + z[2]) / two_s,
    ];
    let w = [
        (z[0] + z[1]) / two_s,
        (z[0] + z[2]) / two_s,
        (z[0] + z[3]) / two_s,
        (z[0] + z[4]) / two_s,
        (z[0] + z[5]) / two_s,
    ];

    let mut groups = vec![
        WeightedOrbit::new(b, sign_orbit(&[r, s, 0.0])),
        WeightedOrbit::new(b, sign_orbit(&[0.0, r, s])),
        WeightedOrbit::new(b, sign_orbit(&[s, 0.0, r])),
    ];
    // the 60 remaining points: cyclic rotations of (u, v, w) under the even
    // sign changes
    let rotations = [[&u, &v, &w], [&v, &w, &u], [&w, &u, &v]];
    let signs = [
        [1.0, 1.0, 1.0],
        [1.0, -1.0, -1.0],
        [-1.0, -1.0, 1.0],
        [-1.0, 1.0, -1.0],
    ];
    for [a1, a2, a3] in rotations {
        for [s1, s2, s3] in signs {
            let points = (0..5)
                .map(|i| vec![s1 * a1[i], s2 * a2[i], s3 * a3[i]])
                .collect();
            groups.push(WeightedOrbit::new(c, points));
        }
    }
    groups
}
