//! Pure parametric shape generators.
//!
//! Each generator takes its parameters and a [`BoundingRect`] and returns a
//! fresh [`PathCommandSequence`] in the rect's frame (origin top-left, y
//! down). Nothing is cached, so generators can be called from any thread on
//! every parameter change.

mod animatable;
mod arc;
mod checkerboard;
mod command;
mod config;
mod draw_state;
mod error;
mod flower;
mod geom;
mod interop;
mod path;
mod shape;
mod spirograph;
mod trapezoid;
mod triangle;

#[cfg(test)]
mod test_utils;

pub use crate::animatable::{lerp, Animatable, AnimatablePair, Insettable, Interpolate};
pub use crate::arc::{generate_arc, Arc};
pub use crate::checkerboard::{generate_checkerboard, Checkerboard, MAX_CHECKERBOARD_CELLS};
pub use crate::command::{PathCommand, PathCommandSequence};
pub use crate::config::{GeneratorConfig, MAX_PETAL_COUNT};
pub use crate::error::ShapeError;
pub use crate::flower::{generate_flower, generate_flower_with_config, Flower};
pub use crate::path::PathBuilder;
pub use crate::shape::{generate, Shape, ShapeKind};
pub use crate::spirograph::{generate_spirograph, generate_spirograph_with_config, Spirograph};
pub use crate::trapezoid::{generate_trapezoid, Trapezoid};
pub use crate::triangle::{generate_triangle, Triangle};
pub use shared::{BoundingRect, Height, Width};
