//! Stroud-style cubature rules: points and weights for multidimensional
//! integration.
//!
//! A cubature rule approximates an integral against a fixed weight function
//! by a finite weighted sum of point evaluations, exact for every polynomial
//! up to the rule's degree. This crate tabulates fully symmetric rules for
//! two regions:
//!
//! - all of n-dimensional space with Gaussian weight `exp(-|x|^2)`
//!   (Stroud's E_n^{r^2} family), and
//! - the surface of the unit sphere (Stroud's U_n family).
//!
//! Formulas are stored as a handful of generator points each; the engine in
//! [`symmetry`] expands every generator into its full permutation/sign-flip
//! orbit, and the registry picks the cheapest applicable formula for a
//! requested dimension and degree.
//!
//! # Example
//! ```
//! use math_cubature::gaussian_all_space;
//!
//! // two points integrate 1-D Gaussian-weighted polynomials up to degree 3
//! let (points, weights) = gaussian_all_space(1, 3).unwrap();
//! assert_eq!(points.nrows(), 2);
//!
//! let integral: f64 = points
//!     .column(0)
//!     .iter()
//!     .zip(weights.iter())
//!     .map(|(x, w)| x * x * w)
//!     .sum();
//! assert!((integral - std::f64::consts::PI.sqrt() / 2.0).abs() < 1e-12);
//! ```
//!
//! Unsupported (dimension, degree) pairs yield `None` rather than an
//! approximation.

mod all_space;
mod registry;
mod rule;
mod sphere_surface;

pub mod hermite;
pub mod roots;
pub mod symmetry;

pub use registry::{gaussian_all_space, get_rule, registry, sphere_surface, RuleRegistry};
pub use rule::{CubatureRule, DegreeSpec, Region, WeightedOrbit};

/// Errors raised when a formula is asked about a (dimension, degree) pair
/// outside its validity domain.
#[derive(Debug, thiserror::Error)]
pub enum CubatureError {
    #[error("unsupported dimension {dimension}: rule covers dimensions {supported}")]
    UnsupportedDimension { dimension: usize, supported: String },

    #[error("unsupported degree {degree}: rule covers {supported}")]
    UnsupportedDegree { degree: usize, supported: String },
}

/// A specialized `Result` type for rule validation.
pub type Result<T> = std::result::Result<T, CubatureError>;
