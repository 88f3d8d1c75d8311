//! Canvas2D rendering module
//!
//! Draws a [`crate::sim::RenderSnapshot`]: the track ring, the target arc and
//! the ball. Nothing here feeds back into the simulation.

pub mod canvas;

pub use canvas::CanvasRenderer;
