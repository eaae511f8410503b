//! # trazar
//!
//! Interactive terminal plotter for single-variable real functions: pan,
//! zoom, derivative display, and live re-entry of the expression, rendered
//! on a character-grid Cartesian plane.
//!
//! ## Architecture
//!
//! The plane engine is four responsibilities composed in one render loop:
//!
//! - **scale**: the pure affine mapping between math-space and grid-space
//! - **plane**: the viewport (bounds, tick scales, grid size) and its
//!   pan/zoom/restore transforms
//! - **render**: the rasterizer widget drawing axes, ticks, origin, and
//!   sampled curves
//! - **app** / **ui**: session state, key dispatch, and frame composition
//!
//! Expressions are compiled, differentiated, and evaluated by exmex behind
//! the [`eval::Function`] capability trait; the engine itself never inspects
//! expression internals.

#![cfg_attr(test, allow(clippy::unwrap_used))]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_precision_loss)]

/// Session state and key handling.
pub mod app;

/// YAML configuration.
pub mod config;

/// Error types.
pub mod error;

/// The evaluable-function capability and the exmex adapter.
pub mod eval;

/// Key-to-action dispatch.
pub mod input;

/// The viewport and its view transforms.
pub mod plane;

/// The rasterizer widget.
pub mod render;

/// Affine math-space/grid-space mappings.
pub mod scale;

/// Color theme.
pub mod theme;

/// Frame composition.
pub mod ui;

pub use error::{Error, Result};
pub use plane::Plane;
pub use scale::LinearScale;
