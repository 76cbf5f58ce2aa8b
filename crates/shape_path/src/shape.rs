use anyhow::Result;
use serde::{Deserialize, Serialize};
use shared::BoundingRect;
use strum_macros::Display;

use crate::arc::Arc;
use crate::checkerboard::Checkerboard;
use crate::command::PathCommandSequence;
use crate::config::GeneratorConfig;
use crate::flower::Flower;
use crate::spirograph::Spirograph;
use crate::trapezoid::Trapezoid;
use crate::triangle::Triangle;

/// Anything that can describe its outline inside a rect.
///
/// Implementations are pure: the same shape and rect always give the same
/// commands, and nothing is cached between calls.
pub trait Shape {
    fn path(&self, rect: BoundingRect) -> Result<PathCommandSequence>;
}

/// Every built-in shape, for callers that pick the kind at runtime.
#[derive(Debug, Copy, Clone, PartialEq, Display, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum ShapeKind {
    Spirograph(Spirograph),
    Flower(Flower),
    Checkerboard(Checkerboard),
    Triangle,
    Arc(Arc),
    Trapezoid(Trapezoid),
}

impl ShapeKind {
    pub fn path_with_config(
        &self,
        rect: BoundingRect,
        config: &GeneratorConfig,
    ) -> Result<PathCommandSequence> {
        match self {
            ShapeKind::Spirograph(s) => s.path_with_config(rect, config),
            ShapeKind::Flower(f) => f.path_with_config(rect, config),
            other => other.path(rect),
        }
    }
}

impl Shape for ShapeKind {
    fn path(&self, rect: BoundingRect) -> Result<PathCommandSequence> {
        match self {
            ShapeKind::Spirograph(s) => s.path(rect),
            ShapeKind::Flower(f) => f.path(rect),
            ShapeKind::Checkerboard(c) => c.path(rect),
            ShapeKind::Triangle => Triangle.path(rect),
            ShapeKind::Arc(a) => a.path(rect),
            ShapeKind::Trapezoid(t) => t.path(rect),
        }
    }
}

impl From<Spirograph> for ShapeKind {
    fn from(s: Spirograph) -> Self {
        ShapeKind::Spirograph(s)
    }
}

impl From<Flower> for ShapeKind {
    fn from(f: Flower) -> Self {
        ShapeKind::Flower(f)
    }
}

impl From<Checkerboard> for ShapeKind {
    fn from(c: Checkerboard) -> Self {
        ShapeKind::Checkerboard(c)
    }
}

impl From<Triangle> for ShapeKind {
    fn from(_: Triangle) -> Self {
        ShapeKind::Triangle
    }
}

impl From<Arc> for ShapeKind {
    fn from(a: Arc) -> Self {
        ShapeKind::Arc(a)
    }
}

impl From<Trapezoid> for ShapeKind {
    fn from(t: Trapezoid) -> Self {
        ShapeKind::Trapezoid(t)
    }
}

pub fn generate(kind: &ShapeKind, rect: BoundingRect) -> Result<PathCommandSequence> {
    kind.path(rect)
}
