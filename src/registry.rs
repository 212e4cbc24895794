//! Rule registry and cheapest-rule selection.
//!
//! The catalogue is built once behind a [`LazyLock`] and never mutated, so
//! concurrent lookups need no locking. Selection filters the registered rules
//! of a region down to the applicable ones and picks the one with the fewest
//! points.

use std::sync::LazyLock;

use ndarray::{Array1, Array2};

use crate::rule::{CubatureRule, Region};

static REGISTRY: LazyLock<RuleRegistry> = LazyLock::new(RuleRegistry::new);

/// Immutable catalogue of every known cubature rule.
pub struct RuleRegistry {
    rules: Vec<CubatureRule>,
}

impl RuleRegistry {
    /// Build the full catalogue.
    ///
    /// Registration order doubles as the tie-break order during selection,
    /// with dimension-specific rules registered ahead of general-dimension
    /// families.
    pub fn new() -> Self {
        let mut rules = Vec::new();
        rules.extend(crate::all_space::rules());
        rules.extend(crate::sphere_surface::rules());
        Self { rules }
    }

    /// Every registered rule, in registration order.
    pub fn rules(&self) -> &[CubatureRule] {
        &self.rules
    }

    /// Registered rules belonging to one region family.
    pub fn rules_for(&self, region: Region) -> impl Iterator<Item = &CubatureRule> {
        self.rules.iter().filter(move |rule| rule.region == region)
    }

    /// Cheapest applicable rule for (dimension, degree), or `None` when the
    /// catalogue has nothing to offer.
    ///
    /// Equal point counts resolve to the earliest registered rule; the
    /// strict `<` below keeps the first minimum found.
    pub fn select(
        &self,
        region: Region,
        dimension: usize,
        degree: usize,
    ) -> Option<&CubatureRule> {
        let mut best: Option<(&CubatureRule, usize)> = None;
        for rule in self.rules_for(region) {
            let Ok(count) = rule.n_points(dimension, degree) else {
                continue;
            };
            if best.map_or(true, |(_, cheapest)| count < cheapest) {
                best = Some((rule, count));
            }
        }
        best.map(|(rule, _)| rule)
    }

    /// Points and weights of the cheapest applicable rule, or `None` when the
    /// (dimension, degree) pair is unsupported for the region.
    pub fn get_rule(
        &self,
        region: Region,
        dimension: usize,
        degree: usize,
    ) -> Option<(Array2<f64>, Array1<f64>)> {
        let rule = self.select(region, dimension, degree)?;
        log::debug!(
            "selected {} for {} dimension {} degree {}",
            rule.name,
            region,
            dimension,
            degree
        );
        Some(rule.materialize(dimension, degree))
    }
}

impl Default for RuleRegistry {
    fn default() -> Self {
        Self::new()
    }
}

/// Shared process-wide registry.
pub fn registry() -> &'static RuleRegistry {
    &REGISTRY
}

/// Points and weights for the cheapest registered rule of `region` that is
/// exact to `degree` in `dimension` dimensions.
///
/// Returns `None` when no registered rule covers the pair; unsupported
/// combinations are an expected outcome for a fixed catalogue, not an error.
pub fn get_rule(
    region: Region,
    dimension: usize,
    degree: usize,
) -> Option<(Array2<f64>, Array1<f64>)> {
    REGISTRY.get_rule(region, dimension, degree)
}

/// Rule for integrating over all of `dimension`-space against the weight
/// `exp(-|x|^2)`.
pub fn gaussian_all_space(dimension: usize, degree: usize) -> Option<(Array2<f64>, Array1<f64>)> {
    get_rule(Region::GaussianAllSpace, dimension, degree)
}

/// Rule for integrating over the surface of the unit sphere.
pub fn sphere_surface(dimension: usize, degree: usize) -> Option<(Array2<f64>, Array1<f64>)> {
    get_rule(Region::SphereSurface, dimension, degree)
}
