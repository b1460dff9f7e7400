#![deny(unsafe_code)]
//! Raster rendering for potential-nav worlds.
//!
//! [`Canvas`] is a persistent RGB8 image that implements the core's
//! [`Renderer`](potential_nav_core::Renderer): the caller draws the initial
//! frame once, then one agent disk per step, leaving the trail on the canvas.
//! PNG export lives in [`snapshot`] behind the `png` feature (default on).

pub mod canvas;

#[cfg(feature = "png")]
pub mod snapshot;

pub use canvas::Canvas;
