use anyhow::Result;
use lyon::math::{point, Angle};
use serde::{Deserialize, Serialize};
use shared::BoundingRect;
use tracing::debug;

use crate::animatable::{Animatable, Insettable};
use crate::command::PathCommandSequence;
use crate::error::{ensure, finite, non_negative, validate_rect};
use crate::geom::point_on_circle;
use crate::path::PathBuilder;
use crate::shape::Shape;

/// An open circular arc centred in the rect, measured like a clock face:
/// angle zero points straight up.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct Arc {
    pub start_angle: Angle,
    pub end_angle: Angle,
    pub clockwise: bool,
    /// Shrinks the radius, which is otherwise half the rect width.
    pub inset_amount: f32,
}

impl Arc {
    pub fn new(start_angle: Angle, end_angle: Angle, clockwise: bool) -> Self {
        Arc {
            start_angle,
            end_angle,
            clockwise,
            inset_amount: 0.0,
        }
    }

    pub fn radius(&self, rect: &BoundingRect) -> f32 {
        rect.width / 2.0 - self.inset_amount
    }
}

impl Shape for Arc {
    fn path(&self, rect: BoundingRect) -> Result<PathCommandSequence> {
        validate_rect(&rect)?;
        finite("start_angle", self.start_angle.radians)?;
        finite("end_angle", self.end_angle.radians)?;
        let inset = non_negative("inset_amount", self.inset_amount)?;
        let radius = self.radius(&rect);
        ensure(
            radius >= 0.0,
            "inset_amount",
            inset,
            "must not exceed half the rect width",
        )?;
        if radius == 0.0 {
            debug!(inset, "arc inset consumes the whole radius");
        }

        // Rotate a quarter turn back so zero is at twelve o'clock.
        let start = self.start_angle - Angle::frac_pi_2();
        let end = self.end_angle - Angle::frac_pi_2();
        let center = point(rect.mid_x(), rect.mid_y());

        let mut builder = PathBuilder::with_capacity(2);
        builder.move_to(point_on_circle(center, radius, start))?;
        builder.arc_to(center, radius, start, end, self.clockwise)?;
        Ok(builder.build())
    }
}

impl Insettable for Arc {
    fn inset(&self, amount: f32) -> Self {
        Arc {
            inset_amount: self.inset_amount + amount,
            ..*self
        }
    }
}

impl Animatable for Arc {
    type Data = f32;

    fn animatable_data(&self) -> Self::Data {
        self.inset_amount
    }

    fn with_animatable_data(&self, data: Self::Data) -> Self {
        Arc {
            inset_amount: data,
            ..*self
        }
    }
}

pub fn generate_arc(
    start_angle: Angle,
    end_angle: Angle,
    clockwise: bool,
    inset_amount: f32,
    rect: BoundingRect,
) -> Result<PathCommandSequence> {
    Arc::new(start_angle, end_angle, clockwise)
        .inset(inset_amount)
        .path(rect)
}
