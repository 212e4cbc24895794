//! Rule descriptors and orbit assembly.
//!
//! A [`CubatureRule`] wraps one published formula: the (dimension, degree)
//! pairs it is valid for, a closed-form point count, and a generator that
//! produces the formula's weighted orbits. Materializing a rule flattens the
//! orbits into parallel point/weight arrays.

use std::fmt;

use ndarray::{Array1, Array2};

use crate::{CubatureError, Result};

/// Region and weight-function class a rule integrates over.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Region {
    /// All of n-dimensional space with weight `exp(-|x|^2)` (Stroud's E_n^{r^2}).
    GaussianAllSpace,
    /// Surface of the unit sphere (Stroud's U_n).
    SphereSurface,
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Region::GaussianAllSpace => write!(f, "gaussian-all-space"),
            Region::SphereSurface => write!(f, "sphere-surface"),
        }
    }
}

/// Degrees of precision a rule accepts.
#[derive(Debug, Clone, Copy)]
pub enum DegreeSpec {
    /// Exactly the listed degrees.
    OneOf(&'static [usize]),
    /// Any odd degree.
    Odd,
}

/// One symmetry orbit together with the weight shared by its points.
#[derive(Debug, Clone)]
pub struct WeightedOrbit {
    /// Weight attached to every point of the orbit.
    pub weight: f64,
    /// Distinct points of the orbit, each of length = dimension.
    pub points: Vec<Vec<f64>>,
}

impl WeightedOrbit {
    pub fn new(weight: f64, points: Vec<Vec<f64>>) -> Self {
        Self { weight, points }
    }

    /// Orbit containing only the origin of `dimension`-space.
    pub fn origin(weight: f64, dimension: usize) -> Self {
        Self::new(weight, vec![vec![0.0; dimension]])
    }
}

/// Closed-form point count for a valid (dimension, degree) pair.
pub type CountFn = fn(dimension: usize, degree: usize) -> usize;
/// Formula generator: weighted orbits for a valid (dimension, degree) pair.
pub type GenerateFn = fn(dimension: usize, degree: usize) -> Vec<WeightedOrbit>;

/// A named cubature formula.
///
/// The validity domain is plain data; the point count and the generator are
/// supplied per formula. Invariant: for every (dimension, degree) accepted by
/// [`validate`](Self::validate), the count function returns exactly the
/// number of points the generator produces — selection relies on this
/// without materializing any points.
#[derive(Debug, Clone, Copy)]
pub struct CubatureRule {
    /// Literature label, e.g. `"E2 7-1"`.
    pub name: &'static str,
    /// Region family the rule belongs to.
    pub region: Region,
    dimensions: &'static [usize],
    degrees: DegreeSpec,
    n_points: CountFn,
    generate: GenerateFn,
}

impl CubatureRule {
    pub const fn new(
        name: &'static str,
        region: Region,
        dimensions: &'static [usize],
        degrees: DegreeSpec,
        n_points: CountFn,
        generate: GenerateFn,
    ) -> Self {
        Self {
            name,
            region,
            dimensions,
            degrees,
            n_points,
            generate,
        }
    }

    /// Check that this rule covers the requested (dimension, degree).
    pub fn validate(&self, dimension: usize, degree: usize) -> Result<()> {
        if !self.dimensions.contains(&dimension) {
            return Err(CubatureError::UnsupportedDimension {
                dimension,
                supported: format!("{:?}", self.dimensions),
            });
        }
        match self.degrees {
            DegreeSpec::OneOf(degrees) if degrees.contains(&degree) => Ok(()),
            DegreeSpec::Odd if degree % 2 == 1 => Ok(()),
            DegreeSpec::OneOf(degrees) => Err(CubatureError::UnsupportedDegree {
                degree,
                supported: format!("{:?}", degrees),
            }),
            DegreeSpec::Odd => Err(CubatureError::UnsupportedDegree {
                degree,
                supported: "any odd degree".to_string(),
            }),
        }
    }

    /// Whether [`validate`](Self::validate) would succeed.
    pub fn is_applicable(&self, dimension: usize, degree: usize) -> bool {
        self.validate(dimension, degree).is_ok()
    }

    /// Number of points the rule produces, without materializing them.
    pub fn n_points(&self, dimension: usize, degree: usize) -> Result<usize> {
        self.validate(dimension, degree)?;
        Ok((self.n_points)(dimension, degree))
    }

    /// Materialize the rule into parallel point/weight arrays.
    pub fn points_weights(
        &self,
        dimension: usize,
        degree: usize,
    ) -> Result<(Array2<f64>, Array1<f64>)> {
        self.validate(dimension, degree)?;
        Ok(self.materialize(dimension, degree))
    }

    /// Caller must have validated (dimension, degree) first.
    pub(crate) fn materialize(&self, dimension: usize, degree: usize) -> (Array2<f64>, Array1<f64>) {
        assemble((self.generate)(dimension, degree), dimension)
    }
}

/// Flatten weighted orbits into parallel point/weight arrays.
///
/// Groups are ordered by ascending weight before concatenation. The sort is
/// purely for a stable, reproducible output order; it carries no numerical
/// meaning.
pub(crate) fn assemble(
    mut groups: Vec<WeightedOrbit>,
    dimension: usize,
) -> (Array2<f64>, Array1<f64>) {
    groups.sort_by(|a, b| a.weight.total_cmp(&b.weight));
    let total: usize = groups.iter().map(|g| g.points.len()).sum();
    let mut points = Array2::zeros((total, dimension));
    let mut weights = Array1::zeros(total);
    let mut row = 0;
    for group in &groups {
        for point in &group.points {
            debug_assert_eq!(point.len(), dimension);
            for (col, &x) in point.iter().enumerate() {
                points[[row, col]] = x;
            }
            weights[row] = group.weight;
            row += 1;
        }
    }
    (points, weights)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn toy_count(dimension: usize, _degree: usize) -> usize {
        2 * dimension
    }

    fn toy_generate(dimension: usize, _degree: usize) -> Vec<WeightedOrbit> {
        crate::symmetry::full_symmetric_orbit(
            &std::iter::once(1.0)
                .chain(std::iter::repeat(0.0))
                .take(dimension)
                .collect::<Vec<_>>(),
        )
        .into_iter()
        .map(|p| WeightedOrbit::new(0.5, vec![p]))
        .collect()
    }

    const TOY: CubatureRule = CubatureRule::new(
        "toy",
        Region::GaussianAllSpace,
        &[2, 3],
        DegreeSpec::OneOf(&[1]),
        toy_count,
        toy_generate,
    );

    #[test]
    fn test_validate_reports_distinct_error_kinds() {
        assert!(TOY.validate(2, 1).is_ok());
        assert!(matches!(
            TOY.validate(5, 1),
            Err(CubatureError::UnsupportedDimension { dimension: 5, .. })
        ));
        assert!(matches!(
            TOY.validate(2, 3),
            Err(CubatureError::UnsupportedDegree { degree: 3, .. })
        ));
    }

    #[test]
    fn test_dimension_is_checked_before_degree() {
        assert!(matches!(
            TOY.validate(5, 3),
            Err(CubatureError::UnsupportedDimension { .. })
        ));
    }

    #[test]
    fn test_is_applicable_mirrors_validate() {
        assert!(TOY.is_applicable(3, 1));
        assert!(!TOY.is_applicable(3, 2));
        assert!(!TOY.is_applicable(1, 1));
    }

    #[test]
    fn test_n_points_requires_valid_pair() {
        assert_eq!(TOY.n_points(3, 1).unwrap(), 6);
        assert!(TOY.n_points(4, 1).is_err());
    }

    #[test]
    fn test_points_weights_matches_count() {
        let (points, weights) = TOY.points_weights(2, 1).unwrap();
        assert_eq!(points.nrows(), 4);
        assert_eq!(weights.len(), 4);
        assert_eq!(points.ncols(), 2);
    }

    #[test]
    fn test_assemble_orders_groups_by_weight() {
        let groups = vec![
            WeightedOrbit::new(0.5, vec![vec![1.0, 0.0], vec![0.0, 1.0]]),
            WeightedOrbit::new(0.25, vec![vec![2.0, 2.0]]),
        ];
        let (points, weights) = assemble(groups, 2);
        assert_eq!(weights.to_vec(), vec![0.25, 0.5, 0.5]);
        assert_eq!(points.row(0).to_vec(), vec![2.0, 2.0]);
        assert_eq!(points.row(1).to_vec(), vec![1.0, 0.0]);
        assert_eq!(points.row(2).to_vec(), vec![0.0, 1.0]);
    }

    #[test]
    fn test_assemble_pairs_every_point_with_its_group_weight() {
        let groups = vec![
            WeightedOrbit::new(2.0, vec![vec![1.0], vec![-1.0]]),
            WeightedOrbit::new(1.0, vec![vec![0.0]]),
        ];
        let (points, weights) = assemble(groups, 1);
        for (row, &w) in points.rows().into_iter().zip(weights.iter()) {
            let expected = if row[0] == 0.0 { 1.0 } else { 2.0 };
            assert_eq!(w, expected);
        }
    }
}
