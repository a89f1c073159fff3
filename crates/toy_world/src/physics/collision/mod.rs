//! Collision geometry
//!
//! Shapes are stored in model space and placed into world space only for
//! the duration of a test.
//!
//! # Module Organization
//!
//! - [`primitives`] - World-space circles and rectangles with signed separation
//! - [`shape`] - Model-space [`Shape`] attached to entities and its world-space
//!   counterpart [`WorldShape`], which owns the pairwise narrow-phase table

pub mod primitives;
pub mod shape;

// Re-export commonly used types
pub use primitives::{Circle, RectangleF};
pub use shape::{Shape, WorldShape};
