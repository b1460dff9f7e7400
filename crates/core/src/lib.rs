#![deny(unsafe_code)]
//! Core of the potential-nav system: greedy navigation over Gaussian
//! potential fields.
//!
//! Provides the [`Position`] value type, the [`FieldSource`] trait and its
//! Gaussian [`PotentialSource`] (goal or obstacle), the [`Agent`] with its
//! candidate ring, the [`World`]/[`WorldConfig`] model, the [`Navigator`]
//! control loop, and the [`Drawable`]/[`Renderer`] capability used by external
//! renderers.

pub mod agent;
pub mod color;
pub mod draw;
pub mod error;
pub mod field_source;
pub mod navigator;
pub mod params;
pub mod position;
pub mod world;

pub use agent::Agent;
pub use color::Srgb;
pub use draw::{Appearance, Drawable, Renderer};
pub use error::NavError;
pub use field_source::{FieldSource, Polarity, PotentialSource};
pub use navigator::{Navigator, RunOutcome, StepRecord, StopReason};
pub use position::Position;
pub use world::{AgentConfig, SourceConfig, World, WorldConfig};
