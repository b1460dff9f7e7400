//! Field sources: scalar potentials emitted by the goal and the obstacles.
//!
//! Every source is the same unnormalized Gaussian bump centred on its
//! position; only the sign differs. The goal pulls (negative values, deeper
//! near the centre) and obstacles push (positive values, higher near the
//! centre). The navigator sums one attractive and any number of repulsive
//! contributions to score a candidate position.
//!
//! All implementations are pure: same query, same output.

use std::f64::consts::TAU;

use serde::{Deserialize, Serialize};

use crate::color::Srgb;
use crate::draw::{Appearance, Drawable, DEFAULT_DRAW_RADIUS};
use crate::error::{require_finite, require_positive, NavError};
use crate::position::{distance_squared, Position};

/// Default Gaussian spread.
pub const DEFAULT_SIGMA: f64 = 1.0;
/// Default `mu`. Stored with the source but not part of the field formula.
pub const DEFAULT_MU: f64 = 1.0;

/// A scalar potential defined over the whole plane.
pub trait FieldSource: Send + Sync {
    /// Value of the field at `query`.
    fn evaluate(&self, query: Position) -> f64;
}

/// Whether a source attracts or repels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Polarity {
    Attractive,
    Repulsive,
}

impl Polarity {
    /// `-1.0` for attractive sources, `+1.0` for repulsive ones.
    pub fn sign(self) -> f64 {
        match self {
            Polarity::Attractive => -1.0,
            Polarity::Repulsive => 1.0,
        }
    }
}

/// Peak magnitude of the bump, `1 / (sigma * sqrt(2π))`.
pub fn gaussian_peak(sigma: f64) -> f64 {
    1.0 / (sigma * TAU.sqrt())
}

/// Signed Gaussian bump centred on `center` with spread `sigma`, sampled at `query`.
///
/// `sign * (1 / (sigma * sqrt(2π))) * exp(-|center - query|² / (2 sigma²))`.
/// `sigma` must be positive; sources validate this at construction.
pub fn gaussian_bump(center: Position, sigma: f64, sign: f64, query: Position) -> f64 {
    let exponent = -(distance_squared(center, query) / (2.0 * sigma * sigma));
    sign * gaussian_peak(sigma) * exponent.exp()
}

/// A goal or obstacle: a positioned Gaussian potential.
#[derive(Debug, Clone, PartialEq)]
pub struct PotentialSource {
    center: Position,
    sigma: f64,
    mu: f64,
    polarity: Polarity,
    appearance: Appearance,
}

impl PotentialSource {
    /// Creates a source with the given polarity.
    ///
    /// Returns `NavError::InvalidParameter` if `center` has a non-finite
    /// coordinate or `sigma` is not finite and strictly positive. The default appearance is green for attractive
    /// sources and red for repulsive ones.
    pub fn new(polarity: Polarity, center: Position, sigma: f64) -> Result<Self, NavError> {
        let center = require_finite("center", center)?;
        let sigma = require_positive("sigma", sigma)?;
        let color = match polarity {
            Polarity::Attractive => Srgb::GREEN,
            Polarity::Repulsive => Srgb::RED,
        };
        Ok(Self {
            center,
            sigma,
            mu: DEFAULT_MU,
            polarity,
            appearance: Appearance::new(DEFAULT_DRAW_RADIUS, color),
        })
    }

    /// Attractive source (the goal).
    pub fn goal(center: Position, sigma: f64) -> Result<Self, NavError> {
        Self::new(Polarity::Attractive, center, sigma)
    }

    /// Repulsive source (an obstacle).
    pub fn obstacle(center: Position, sigma: f64) -> Result<Self, NavError> {
        Self::new(Polarity::Repulsive, center, sigma)
    }

    /// Returns the source with `mu` replaced.
    pub fn with_mu(mut self, mu: f64) -> Self {
        self.mu = mu;
        self
    }

    /// Returns the source with a custom appearance.
    pub fn with_appearance(mut self, appearance: Appearance) -> Self {
        self.appearance = appearance;
        self
    }

    pub fn center(&self) -> Position {
        self.center
    }

    pub fn sigma(&self) -> f64 {
        self.sigma
    }

    /// Stored for configuration symmetry; [`evaluate`](FieldSource::evaluate) ignores it.
    pub fn mu(&self) -> f64 {
        self.mu
    }

    pub fn polarity(&self) -> Polarity {
        self.polarity
    }
}

impl FieldSource for PotentialSource {
    fn evaluate(&self, query: Position) -> f64 {
        gaussian_bump(self.center, self.sigma, self.polarity.sign(), query)
    }
}

impl Drawable for PotentialSource {
    fn position(&self) -> Position {
        self.center
    }

    fn appearance(&self) -> Appearance {
        self.appearance
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn origin() -> Position {
        Position::new(0.0, 0.0)
    }

    #[test]
    fn goal_at_its_centre_is_negative_peak() {
        let goal = PotentialSource::goal(Position::new(4.0, -2.0), 3.0).unwrap();
        let expected = -1.0 / (3.0 * (2.0 * std::f64::consts::PI).sqrt());
        assert!((goal.evaluate(Position::new(4.0, -2.0)) - expected).abs() < 1e-15);
    }

    #[test]
    fn obstacle_at_its_centre_is_positive_peak() {
        let obstacle = PotentialSource::obstacle(origin(), 5.0).unwrap();
        let expected = 1.0 / (5.0 * (2.0 * std::f64::consts::PI).sqrt());
        assert!((obstacle.evaluate(origin()) - expected).abs() < 1e-15);
    }

    #[test]
    fn goal_and_obstacle_differ_only_by_sign() {
        let goal = PotentialSource::goal(origin(), 2.0).unwrap();
        let obstacle = PotentialSource::obstacle(origin(), 2.0).unwrap();
        for q in [origin(), Position::new(1.0, 1.0), Position::new(-3.5, 0.25)] {
            assert_eq!(goal.evaluate(q), -obstacle.evaluate(q));
        }
    }

    #[test]
    fn value_at_one_sigma_is_peak_times_exp_minus_half() {
        let obstacle = PotentialSource::obstacle(origin(), 2.0).unwrap();
        let at_sigma = obstacle.evaluate(Position::new(2.0, 0.0));
        let expected = gaussian_peak(2.0) * (-0.5_f64).exp();
        assert!((at_sigma - expected).abs() < 1e-15);
    }

    #[test]
    fn goal_deepens_toward_centre() {
        let goal = PotentialSource::goal(origin(), 10.0).unwrap();
        let near = goal.evaluate(Position::new(1.0, 0.0));
        let far = goal.evaluate(Position::new(20.0, 0.0));
        assert!(near < far, "near={near} should be lower than far={far}");
    }

    #[test]
    fn zero_sigma_is_rejected() {
        let result = PotentialSource::goal(origin(), 0.0);
        assert!(matches!(
            result,
            Err(NavError::InvalidParameter { ref name, .. }) if name == "sigma"
        ));
        assert!(PotentialSource::obstacle(origin(), 0.0).is_err());
    }

    #[test]
    fn negative_and_nan_sigma_are_rejected() {
        assert!(PotentialSource::obstacle(origin(), -1.0).is_err());
        assert!(PotentialSource::obstacle(origin(), f64::NAN).is_err());
    }

    #[test]
    fn non_finite_center_is_rejected() {
        let result = PotentialSource::goal(Position::new(f64::NAN, 0.0), 1.0);
        assert!(matches!(
            result,
            Err(NavError::InvalidParameter { ref name, .. }) if name == "center.x"
        ));
        assert!(PotentialSource::obstacle(Position::new(0.0, f64::INFINITY), 1.0).is_err());
    }

    #[test]
    fn mu_is_stored_but_does_not_change_the_field() {
        let plain = PotentialSource::goal(origin(), 4.0).unwrap();
        let shifted = plain.clone().with_mu(42.0);
        assert_eq!(plain.mu(), DEFAULT_MU);
        assert_eq!(shifted.mu(), 42.0);
        let q = Position::new(1.0, 2.0);
        assert_eq!(plain.evaluate(q), shifted.evaluate(q));
    }

    #[test]
    fn default_appearance_depends_on_polarity() {
        let goal = PotentialSource::goal(origin(), 1.0).unwrap();
        let obstacle = PotentialSource::obstacle(origin(), 1.0).unwrap();
        assert_eq!(goal.appearance().color, Srgb::GREEN);
        assert_eq!(obstacle.appearance().color, Srgb::RED);
        assert_eq!(goal.appearance().radius, DEFAULT_DRAW_RADIUS);
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        fn any_coord() -> impl Strategy<Value = f64> {
            -1e4_f64..1e4
        }

        fn any_sigma() -> impl Strategy<Value = f64> {
            0.01_f64..1e6
        }

        proptest! {
            #[test]
            fn values_are_finite_and_bounded_by_peak(
                cx in any_coord(), cy in any_coord(),
                qx in any_coord(), qy in any_coord(),
                sigma in any_sigma(),
            ) {
                let obstacle = PotentialSource::obstacle(Position::new(cx, cy), sigma).unwrap();
                let v = obstacle.evaluate(Position::new(qx, qy));
                prop_assert!(v.is_finite());
                prop_assert!(v >= 0.0);
                prop_assert!(v <= gaussian_peak(sigma) * (1.0 + 1e-12));
            }

            #[test]
            fn attractive_values_are_never_positive(
                qx in any_coord(), qy in any_coord(),
                sigma in any_sigma(),
            ) {
                let goal = PotentialSource::goal(Position::new(0.0, 0.0), sigma).unwrap();
                prop_assert!(goal.evaluate(Position::new(qx, qy)) <= 0.0);
            }

            #[test]
            fn evaluate_is_deterministic(
                qx in any_coord(), qy in any_coord(),
                sigma in any_sigma(),
            ) {
                let a = PotentialSource::goal(Position::new(1.0, 1.0), sigma).unwrap();
                let b = PotentialSource::goal(Position::new(1.0, 1.0), sigma).unwrap();
                let q = Position::new(qx, qy);
                prop_assert_eq!(a.evaluate(q).to_bits(), b.evaluate(q).to_bits());
            }
        }
    }
}
