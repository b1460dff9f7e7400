//! World configuration and the assembled world.
//!
//! A [`WorldConfig`] is plain serde data describing the agent, the goal, the
//! obstacles and the run limits. [`World::from_config`] validates it and
//! builds the live entities. Only the agent moves afterwards; goal and
//! obstacles are fixed for the whole run.

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::agent::{Agent, DEFAULT_CANDIDATE_COUNT, DEFAULT_SCAN_RADIUS};
use crate::color::Srgb;
use crate::draw::{draw, Appearance, Drawable, Renderer, DEFAULT_DRAW_RADIUS};
use crate::error::NavError;
use crate::field_source::{FieldSource, Polarity, PotentialSource, DEFAULT_MU, DEFAULT_SIGMA};
use crate::params::{param_f64, param_limit, param_usize};
use crate::position::{distance, Position};

/// Default world extent (used by renderers only).
pub const DEFAULT_WIDTH: usize = 640;
pub const DEFAULT_HEIGHT: usize = 480;
/// Default distance to the goal at which a run counts as finished.
pub const DEFAULT_STOP_DISTANCE: f64 = 10.0;

/// Obstacle centres of the demo world, all with spread [`DEMO_OBSTACLE_SIGMA`].
const DEMO_OBSTACLES: [(f64, f64); 6] = [
    (250.0, 180.0),
    (250.0, 280.0),
    (250.0, 380.0),
    (350.0, 180.0),
    (350.0, 280.0),
    (350.0, 380.0),
];
const DEMO_OBSTACLE_SIGMA: f64 = 5.0;

fn default_scan_radius() -> f64 {
    DEFAULT_SCAN_RADIUS
}

fn default_candidate_count() -> usize {
    DEFAULT_CANDIDATE_COUNT
}

fn default_sigma() -> f64 {
    DEFAULT_SIGMA
}

fn default_mu() -> f64 {
    DEFAULT_MU
}

fn default_radius() -> u32 {
    DEFAULT_DRAW_RADIUS
}

/// Agent section of a [`WorldConfig`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AgentConfig {
    pub position: Position,
    #[serde(default = "default_scan_radius")]
    pub scan_radius: f64,
    #[serde(default = "default_candidate_count")]
    pub candidate_count: usize,
    /// Draw radius.
    #[serde(default = "default_radius")]
    pub radius: u32,
    /// Draw color; blue when omitted.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<Srgb>,
}

impl AgentConfig {
    pub fn new(position: Position, scan_radius: f64, candidate_count: usize) -> Self {
        Self {
            position,
            scan_radius,
            candidate_count,
            radius: DEFAULT_DRAW_RADIUS,
            color: None,
        }
    }

    /// Builds and validates the agent.
    pub fn build(&self) -> Result<Agent, NavError> {
        let agent = Agent::new(self.position, self.scan_radius, self.candidate_count)?;
        let color = self.color.unwrap_or(agent.appearance().color);
        Ok(agent.with_appearance(Appearance::new(self.radius, color)))
    }
}

/// Goal or obstacle section of a [`WorldConfig`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SourceConfig {
    pub position: Position,
    #[serde(default = "default_sigma")]
    pub sigma: f64,
    /// Carried through to the source; does not affect the field.
    #[serde(default = "default_mu")]
    pub mu: f64,
    #[serde(default = "default_radius")]
    pub radius: u32,
    /// Draw color; green for the goal and red for obstacles when omitted.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<Srgb>,
}

impl SourceConfig {
    pub fn new(position: Position, sigma: f64) -> Self {
        Self {
            position,
            sigma,
            mu: DEFAULT_MU,
            radius: DEFAULT_DRAW_RADIUS,
            color: None,
        }
    }

    /// Builds and validates a source of the given polarity.
    pub fn build(&self, polarity: Polarity) -> Result<PotentialSource, NavError> {
        let source = PotentialSource::new(polarity, self.position, self.sigma)?.with_mu(self.mu);
        let color = self.color.unwrap_or(source.appearance().color);
        Ok(source.with_appearance(Appearance::new(self.radius, color)))
    }
}

/// Complete description of a navigation run.
///
/// Top-level sections missing from a JSON config fall back to the demo world
/// returned by [`WorldConfig::default`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WorldConfig {
    pub width: usize,
    pub height: usize,
    pub agent: AgentConfig,
    pub goal: SourceConfig,
    pub obstacles: Vec<SourceConfig>,
    pub stop_distance: f64,
    /// Optional step limit. `None` keeps stepping until the goal is reached.
    pub max_steps: Option<usize>,
}

impl Default for WorldConfig {
    /// The demo world: a 640×480 plane, agent at (50, 50) scanning 30
    /// directions 10 units out, goal at (450, 450) with a spread as wide as
    /// the plane's area, and two columns of three tight obstacles in between.
    fn default() -> Self {
        let goal_sigma = (DEFAULT_WIDTH * DEFAULT_HEIGHT) as f64;
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            agent: AgentConfig::new(Position::new(50.0, 50.0), 10.0, 30),
            goal: SourceConfig::new(Position::new(450.0, 450.0), goal_sigma),
            obstacles: DEMO_OBSTACLES
                .iter()
                .map(|&(x, y)| SourceConfig::new(Position::new(x, y), DEMO_OBSTACLE_SIGMA))
                .collect(),
            stop_distance: DEFAULT_STOP_DISTANCE,
            max_steps: None,
        }
    }
}

impl WorldConfig {
    /// Parses a config from JSON.
    ///
    /// Returns `NavError::InvalidConfig` if the JSON does not describe a config.
    /// Value ranges are checked later by [`WorldConfig::validate`].
    pub fn from_json(value: &Value) -> Result<Self, NavError> {
        Self::deserialize(value).map_err(|e| NavError::InvalidConfig(e.to_string()))
    }

    /// Applies flat scalar overrides: `stop_distance`, `scan_radius`,
    /// `candidate_count` and `max_steps` (`null` removes the limit).
    ///
    /// Missing or wrongly typed keys leave the current value untouched.
    pub fn apply_overrides(&mut self, overrides: &Value) {
        self.stop_distance = param_f64(overrides, "stop_distance", self.stop_distance);
        self.agent.scan_radius = param_f64(overrides, "scan_radius", self.agent.scan_radius);
        self.agent.candidate_count =
            param_usize(overrides, "candidate_count", self.agent.candidate_count);
        self.max_steps = param_limit(overrides, "max_steps", self.max_steps);
    }

    /// Current values of the overridable scalars.
    pub fn params(&self) -> Value {
        json!({
            "stop_distance": self.stop_distance,
            "scan_radius": self.agent.scan_radius,
            "candidate_count": self.agent.candidate_count,
            "max_steps": self.max_steps,
        })
    }

    /// Schema of the scalars accepted by [`WorldConfig::apply_overrides`].
    pub fn param_schema() -> Value {
        json!({
            "stop_distance": {
                "type": "number",
                "default": DEFAULT_STOP_DISTANCE,
                "min": 0.0,
                "description": "Distance to the goal at which the run stops"
            },
            "scan_radius": {
                "type": "number",
                "default": DEFAULT_SCAN_RADIUS,
                "min": 0.0,
                "exclusive_min": true,
                "description": "Radius of the candidate ring, i.e. the step length"
            },
            "candidate_count": {
                "type": "integer",
                "default": DEFAULT_CANDIDATE_COUNT,
                "min": 1,
                "description": "Number of evenly spaced candidates per step"
            },
            "max_steps": {
                "type": "integer",
                "default": null,
                "min": 1,
                "description": "Optional step limit; null steps until the goal is reached"
            }
        })
    }

    /// Checks extent and run limits. Entity parameters are checked when built.
    pub fn validate(&self) -> Result<(), NavError> {
        if self.width == 0 || self.height == 0 {
            return Err(NavError::InvalidDimensions);
        }
        self.width
            .checked_mul(self.height)
            .ok_or(NavError::InvalidDimensions)?;
        if !self.stop_distance.is_finite() || self.stop_distance < 0.0 {
            return Err(NavError::invalid_parameter(
                "stop_distance",
                self.stop_distance,
                "must be finite and >= 0",
            ));
        }
        if self.max_steps == Some(0) {
            return Err(NavError::invalid_parameter(
                "max_steps",
                0.0,
                "must be at least 1 when set",
            ));
        }
        Ok(())
    }
}

/// One agent, one goal, and a fixed set of obstacles in a shared plane.
#[derive(Debug, Clone)]
pub struct World {
    agent: Agent,
    goal: PotentialSource,
    obstacles: Vec<PotentialSource>,
}

impl World {
    /// Assembles a world.
    ///
    /// Returns `NavError::InvalidConfig` if the goal is not attractive or any
    /// obstacle is not repulsive.
    pub fn new(
        agent: Agent,
        goal: PotentialSource,
        obstacles: Vec<PotentialSource>,
    ) -> Result<Self, NavError> {
        if goal.polarity() != Polarity::Attractive {
            return Err(NavError::InvalidConfig("goal must be attractive".into()));
        }
        if let Some(i) = obstacles
            .iter()
            .position(|o| o.polarity() != Polarity::Repulsive)
        {
            return Err(NavError::InvalidConfig(format!(
                "obstacle {i} must be repulsive"
            )));
        }
        Ok(Self {
            agent,
            goal,
            obstacles,
        })
    }

    /// Validates `config` and builds every entity. Fails on the first invalid one.
    pub fn from_config(config: &WorldConfig) -> Result<Self, NavError> {
        config.validate()?;
        let agent = config.agent.build()?;
        let goal = config.goal.build(Polarity::Attractive)?;
        let obstacles = config
            .obstacles
            .iter()
            .map(|o| o.build(Polarity::Repulsive))
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(agent, goal, obstacles)
    }

    pub fn agent(&self) -> &Agent {
        &self.agent
    }

    pub fn agent_mut(&mut self) -> &mut Agent {
        &mut self.agent
    }

    pub fn goal(&self) -> &PotentialSource {
        &self.goal
    }

    pub fn obstacles(&self) -> &[PotentialSource] {
        &self.obstacles
    }

    /// Combined potential at `p`: the goal's value plus every obstacle's, added
    /// in obstacle order.
    pub fn score(&self, p: Position) -> f64 {
        self.obstacles
            .iter()
            .fold(self.goal.evaluate(p), |acc, obstacle| acc + obstacle.evaluate(p))
    }

    /// Distance from the agent to the goal centre.
    pub fn distance_to_goal(&self) -> f64 {
        distance(self.agent.position(), self.goal.center())
    }

    /// Draws the agent, the goal, then each obstacle.
    pub fn draw_all<R: Renderer + ?Sized>(&self, renderer: &mut R) {
        draw(renderer, &self.agent);
        draw(renderer, &self.goal);
        for obstacle in &self.obstacles {
            draw(renderer, obstacle);
        }
    }
}
