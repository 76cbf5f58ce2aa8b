use anyhow::Result;
use lyon::math::{point, vector, Angle, Box2D, Transform};
use lyon::path::FillRule;
use serde::{Deserialize, Serialize};
use shared::BoundingRect;
use std::f32::consts::TAU;

use crate::animatable::{Animatable, AnimatablePair};
use crate::command::PathCommandSequence;
use crate::config::GeneratorConfig;
use crate::error::{finite, non_negative, validate_rect};
use crate::path::PathBuilder;
use crate::shape::Shape;

/// Ellipse petals fanned around the centre of the rect.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct Flower {
    /// How far each petal sits from the centre along its own axis.
    pub petal_offset: f32,
    pub petal_width: f32,
}

impl Flower {
    /// Petals overlap, so the pattern only shows with even-odd filling.
    pub const FILL_RULE: FillRule = FillRule::EvenOdd;

    pub fn new(petal_offset: f32, petal_width: f32) -> Self {
        Flower {
            petal_offset,
            petal_width,
        }
    }

    pub fn path_with_config(
        &self,
        rect: BoundingRect,
        config: &GeneratorConfig,
    ) -> Result<PathCommandSequence> {
        config.validate()?;
        validate_rect(&rect)?;
        let offset = finite("petal_offset", self.petal_offset)?;
        let width = non_negative("petal_width", self.petal_width)?;

        let petal = Box2D::new(point(offset, 0.0), point(offset + width, rect.width * 0.5));
        let (cx, cy) = rect.center();
        let step = TAU / config.petal_count as f32;

        // Each petal is a move, four curves and a close.
        let mut builder = PathBuilder::with_capacity(config.petal_count as usize * 6);
        for i in 0..config.petal_count {
            let rotation = Transform::rotation(Angle::radians(i as f32 * step));
            let transform = rotation.then_translate(vector(cx, cy));
            builder.ellipse(&petal, &transform)?;
        }
        Ok(builder.build())
    }
}

impl Shape for Flower {
    fn path(&self, rect: BoundingRect) -> Result<PathCommandSequence> {
        self.path_with_config(rect, &GeneratorConfig::default())
    }
}

impl Animatable for Flower {
    type Data = AnimatablePair<f32, f32>;

    fn animatable_data(&self) -> Self::Data {
        AnimatablePair(self.petal_offset, self.petal_width)
    }

    fn with_animatable_data(&self, data: Self::Data) -> Self {
        Flower::new(data.0, data.1)
    }
}

pub fn generate_flower(
    petal_offset: f32,
    petal_width: f32,
    rect: BoundingRect,
) -> Result<PathCommandSequence> {
    Flower::new(petal_offset, petal_width).path(rect)
}

pub fn generate_flower_with_config(
    petal_offset: f32,
    petal_width: f32,
    rect: BoundingRect,
    config: &GeneratorConfig,
) -> Result<PathCommandSequence> {
    Flower::new(petal_offset, petal_width).path_with_config(rect, config)
}
