//! Greedy potential-field control loop.
//!
//! Each step scores every candidate on the agent's scan ring against the
//! combined field and jumps to the lowest one. There is no lookahead or
//! backtracking, so the agent can get caught in a local minimum; callers that
//! need a guaranteed end configure a step limit and receive
//! [`StopReason::Stalled`] when it runs out.

use serde::Serialize;
use tracing::{debug, info, warn};

use crate::error::NavError;
use crate::position::Position;
use crate::world::{World, WorldConfig, DEFAULT_STOP_DISTANCE};

/// Why a run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StopReason {
    /// The agent came within the stop distance of the goal.
    ReachedGoal,
    /// The configured step limit ran out first.
    Stalled,
}

/// One committed step, as seen by observers.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct StepRecord {
    /// 1-based step number.
    pub index: usize,
    pub position: Position,
    pub score: f64,
    pub distance_to_goal: f64,
}

/// Summary of a finished run.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RunOutcome {
    pub reason: StopReason,
    pub steps: usize,
    pub final_position: Position,
    pub final_distance: f64,
}

/// Returns the first candidate with the lowest score, with that score.
///
/// Ties keep the earliest candidate, so the result depends only on the
/// generation order. Returns `None` for an empty candidate list.
pub fn select_best<F>(candidates: &[Position], mut score: F) -> Option<(Position, f64)>
where
    F: FnMut(Position) -> f64,
{
    candidates.iter().fold(None, |best, &candidate| {
        let value = score(candidate);
        match best {
            Some((_, best_value)) if value >= best_value => best,
            _ => Some((candidate, value)),
        }
    })
}

/// Drives a [`World`] toward its goal.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Navigator {
    stop_distance: f64,
    max_steps: Option<usize>,
}

impl Default for Navigator {
    fn default() -> Self {
        Self {
            stop_distance: DEFAULT_STOP_DISTANCE,
            max_steps: None,
        }
    }
}

impl Navigator {
    /// Creates an unbounded navigator.
    ///
    /// Returns `NavError::InvalidParameter` if `stop_distance` is negative or
    /// not finite.
    pub fn new(stop_distance: f64) -> Result<Self, NavError> {
        if !stop_distance.is_finite() || stop_distance < 0.0 {
            return Err(NavError::invalid_parameter(
                "stop_distance",
                stop_distance,
                "must be finite and >= 0",
            ));
        }
        Ok(Self {
            stop_distance,
            max_steps: None,
        })
    }

    /// Limits a run to `max_steps` steps.
    ///
    /// Returns `NavError::InvalidParameter` if `max_steps` is zero.
    pub fn with_max_steps(mut self, max_steps: usize) -> Result<Self, NavError> {
        if max_steps == 0 {
            return Err(NavError::invalid_parameter(
                "max_steps",
                0.0,
                "must be at least 1",
            ));
        }
        self.max_steps = Some(max_steps);
        Ok(self)
    }

    /// Navigator using the run limits of `config`.
    pub fn from_config(config: &WorldConfig) -> Result<Self, NavError> {
        let navigator = Self::new(config.stop_distance)?;
        match config.max_steps {
            Some(limit) => navigator.with_max_steps(limit),
            None => Ok(navigator),
        }
    }

    pub fn stop_distance(&self) -> f64 {
        self.stop_distance
    }

    pub fn max_steps(&self) -> Option<usize> {
        self.max_steps
    }

    /// Whether the agent is already within the stop distance.
    pub fn reached_goal(&self, world: &World) -> bool {
        world.distance_to_goal() <= self.stop_distance
    }

    /// Moves the agent to its best candidate and returns the new position.
    pub fn step(&self, world: &mut World) -> Position {
        self.advance(world).0
    }

    /// Steps until the goal is reached or the step limit runs out.
    pub fn run(&self, world: &mut World) -> RunOutcome {
        self.run_with(world, |_| {})
    }

    /// Like [`Navigator::run`], calling `observer` after every committed step.
    pub fn run_with<F>(&self, world: &mut World, mut observer: F) -> RunOutcome
    where
        F: FnMut(&StepRecord),
    {
        let mut steps = 0;
        let reason = loop {
            if self.reached_goal(world) {
                break StopReason::ReachedGoal;
            }
            if self.max_steps.is_some_and(|limit| steps >= limit) {
                break StopReason::Stalled;
            }
            let (position, score) = self.advance(world);
            steps += 1;
            let record = StepRecord {
                index: steps,
                position,
                score,
                distance_to_goal: world.distance_to_goal(),
            };
            debug!(
                step = record.index,
                x = position.x,
                y = position.y,
                score,
                distance = record.distance_to_goal,
                "agent moved"
            );
            observer(&record);
        };

        let outcome = RunOutcome {
            reason,
            steps,
            final_position: world.agent().position(),
            final_distance: world.distance_to_goal(),
        };
        match reason {
            StopReason::ReachedGoal => info!(
                steps,
                distance = outcome.final_distance,
                "reached goal"
            ),
            StopReason::Stalled => warn!(
                steps,
                distance = outcome.final_distance,
                "step limit reached before the goal"
            ),
        }
        outcome
    }

    fn advance(&self, world: &mut World) -> (Position, f64) {
        let candidates = world.agent().candidates();
        // Agent construction guarantees at least one candidate.
        let (best, score) = select_best(&candidates, |c| world.score(c))
            .unwrap_or_else(|| (world.agent().position(), world.score(world.agent().position())));
        world.agent_mut().set_position(best);
        (best, score)
    }
}
