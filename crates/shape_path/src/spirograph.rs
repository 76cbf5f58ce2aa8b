use anyhow::Result;
use lyon::math::point;
use serde::{Deserialize, Serialize};
use shared::BoundingRect;
use std::f64::consts::TAU;
use tracing::debug;

use crate::command::PathCommandSequence;
use crate::config::GeneratorConfig;
use crate::error::{ensure, non_negative, validate_rect, ShapeError};
use crate::geom::gcd;
use crate::path::PathBuilder;
use crate::shape::Shape;

// Absorbs float error in `end / step` (the step arrives as an f32) so the
// final point is not dropped.
const STEP_EPSILON: f64 = 1e-3;

/// A hypotrochoid: the curve traced by a pen `distance` away from the centre
/// of a circle rolling inside another.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct Spirograph {
    pub inner_radius: i32,
    pub outer_radius: i32,
    pub distance: i32,
    /// Fraction of the full curve to draw. 1.0 closes the figure.
    pub amount: f32,
}

impl Spirograph {
    pub fn new(inner_radius: i32, outer_radius: i32, distance: i32, amount: f32) -> Self {
        Spirograph {
            inner_radius,
            outer_radius,
            distance,
            amount,
        }
    }

    pub fn path_with_config(
        &self,
        rect: BoundingRect,
        config: &GeneratorConfig,
    ) -> Result<PathCommandSequence> {
        config.validate()?;
        validate_rect(&rect)?;
        ensure(
            self.inner_radius > 0,
            "inner_radius",
            self.inner_radius as f32,
            "must be greater than zero",
        )?;
        ensure(
            self.outer_radius > 0,
            "outer_radius",
            self.outer_radius as f32,
            "must be greater than zero",
        )?;
        ensure(
            self.distance >= 0,
            "distance",
            self.distance as f32,
            "must not be negative",
        )?;
        let amount = f64::from(non_negative("amount", self.amount)?);

        let divisor = gcd(self.inner_radius as u32, self.outer_radius as u32);
        let outer = f64::from(self.outer_radius);
        let difference = f64::from(self.inner_radius) - outer;
        let distance = f64::from(self.distance);
        let end_point = (TAU * outer / f64::from(divisor)).ceil() * amount;

        let step = f64::from(config.spirograph_step);
        let last_step = (end_point / step + STEP_EPSILON).floor();
        ensure(
            last_step < f64::from(config.max_spirograph_points),
            "amount",
            self.amount,
            "asks for more points than max_spirograph_points allows",
        )?;
        let steps = last_step as usize;
        let points = steps.checked_add(1).ok_or(ShapeError::InvalidParameter {
            name: "amount",
            value: self.amount,
            reason: "asks for more points than max_spirograph_points allows",
        })?;
        if difference == 0.0 {
            debug!(
                radius = self.inner_radius,
                distance = self.distance,
                "spirograph radii are equal, every point coincides"
            );
        }
        debug!(divisor, end_point, points, "generating spirograph");

        let (cx, cy) = rect.center();
        let ratio = difference / outer;
        let mut builder = PathBuilder::with_capacity(points);
        for i in 0..=steps {
            let theta = i as f64 * step;
            let x = difference * theta.cos() + distance * (ratio * theta).cos();
            let y = difference * theta.sin() - distance * (ratio * theta).sin();
            let p = point(x as f32 + cx, y as f32 + cy);
            if i == 0 {
                builder.move_to(p)?;
            } else {
                builder.line_to(p)?;
            }
        }
        Ok(builder.build())
    }
}

impl Shape for Spirograph {
    fn path(&self, rect: BoundingRect) -> Result<PathCommandSequence> {
        self.path_with_config(rect, &GeneratorConfig::default())
    }
}

pub fn generate_spirograph(
    inner_radius: i32,
    outer_radius: i32,
    distance: i32,
    amount: f32,
    rect: BoundingRect,
) -> Result<PathCommandSequence> {
    Spirograph::new(inner_radius, outer_radius, distance, amount).path(rect)
}

pub fn generate_spirograph_with_config(
    inner_radius: i32,
    outer_radius: i32,
    distance: i32,
    amount: f32,
    rect: BoundingRect,
    config: &GeneratorConfig,
) -> Result<PathCommandSequence> {
    Spirograph::new(inner_radius, outer_radius, distance, amount).path_with_config(rect, config)
}
