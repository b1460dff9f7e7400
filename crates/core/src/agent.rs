//! The navigating agent and its ring of candidate moves.

use std::f64::consts::TAU;

use glam::DVec2;

use crate::color::Srgb;
use crate::draw::{Appearance, Drawable, DEFAULT_DRAW_RADIUS};
use crate::error::{require_finite, require_positive, NavError};
use crate::position::Position;

/// Default ring radius (step length).
pub const DEFAULT_SCAN_RADIUS: f64 = 1.0;
/// Default number of evenly spaced candidates per step.
pub const DEFAULT_CANDIDATE_COUNT: usize = 6;

/// A point agent that moves by discrete jumps of `scan_radius`.
///
/// Each step it proposes `candidate_count` positions evenly spaced on a circle
/// around itself; the [`Navigator`](crate::navigator::Navigator) picks one
/// and writes it back with [`Agent::set_position`].
#[derive(Debug, Clone, PartialEq)]
pub struct Agent {
    position: Position,
    scan_radius: f64,
    candidate_count: usize,
    appearance: Appearance,
}

impl Agent {
    /// Creates an agent at `position`.
    ///
    /// Returns `NavError::InvalidParameter` if `position` has a non-finite
    /// coordinate, if `scan_radius` is not finite and positive, or if
    /// `candidate_count` is zero.
    pub fn new(
        position: Position,
        scan_radius: f64,
        candidate_count: usize,
    ) -> Result<Self, NavError> {
        let position = require_finite("position", position)?;
        let scan_radius = require_positive("scan_radius", scan_radius)?;
        if candidate_count == 0 {
            return Err(NavError::invalid_parameter(
                "candidate_count",
                0.0,
                "must be at least 1",
            ));
        }
        Ok(Self {
            position,
            scan_radius,
            candidate_count,
            appearance: Appearance::new(DEFAULT_DRAW_RADIUS, Srgb::BLUE),
        })
    }

    /// Agent with the default scan radius and candidate count.
    pub fn with_defaults(position: Position) -> Result<Self, NavError> {
        Self::new(position, DEFAULT_SCAN_RADIUS, DEFAULT_CANDIDATE_COUNT)
    }

    /// Returns the agent with a custom appearance.
    pub fn with_appearance(mut self, appearance: Appearance) -> Self {
        self.appearance = appearance;
        self
    }

    pub fn position(&self) -> Position {
        self.position
    }

    pub fn set_position(&mut self, position: Position) {
        self.position = position;
    }

    pub fn scan_radius(&self) -> f64 {
        self.scan_radius
    }

    pub fn candidate_count(&self) -> usize {
        self.candidate_count
    }

    /// Candidate positions on the scan ring around the current position.
    ///
    /// Candidate `i` sits at angle `i * 2π / candidate_count` from the positive
    /// x-axis, so the first one is always straight along +x. The order is the
    /// tie-break order used during selection.
    pub fn candidates(&self) -> Vec<Position> {
        let step = TAU / self.candidate_count as f64;
        let center = DVec2::from(self.position);
        (0..self.candidate_count)
            .map(|i| {
                let direction = DVec2::from_angle(i as f64 * step);
                Position::from(direction * self.scan_radius + center)
            })
            .collect()
    }
}

impl Drawable for Agent {
    fn position(&self) -> Position {
        self.position
    }

    fn appearance(&self) -> Appearance {
        self.appearance
    }
}
