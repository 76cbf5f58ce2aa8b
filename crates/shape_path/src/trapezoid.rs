use anyhow::Result;
use lyon::math::point;
use serde::{Deserialize, Serialize};
use shared::BoundingRect;

use crate::animatable::Animatable;
use crate::command::PathCommandSequence;
use crate::error::{ensure, non_negative, validate_rect};
use crate::path::PathBuilder;
use crate::shape::Shape;

/// Full-width base with the top edge pulled in by `inset_amount` on each side.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct Trapezoid {
    pub inset_amount: f32,
}

impl Trapezoid {
    pub fn new(inset_amount: f32) -> Self {
        Trapezoid { inset_amount }
    }
}

impl Shape for Trapezoid {
    fn path(&self, rect: BoundingRect) -> Result<PathCommandSequence> {
        validate_rect(&rect)?;
        let inset = non_negative("inset_amount", self.inset_amount)?;
        ensure(
            inset <= rect.mid_x(),
            "inset_amount",
            inset,
            "must not exceed half the rect width",
        )?;

        let bottom_left = point(rect.min_x(), rect.max_y());
        let mut builder = PathBuilder::with_capacity(6);
        builder.move_to(bottom_left)?;
        builder.line_to(point(rect.min_x() + inset, rect.min_y()))?;
        builder.line_to(point(rect.max_x() - inset, rect.min_y()))?;
        builder.line_to(point(rect.max_x(), rect.max_y()))?;
        builder.line_to(bottom_left)?;
        builder.close()?;
        Ok(builder.build())
    }
}

impl Animatable for Trapezoid {
    type Data = f32;

    fn animatable_data(&self) -> Self::Data {
        self.inset_amount
    }

    fn with_animatable_data(&self, data: Self::Data) -> Self {
        Trapezoid::new(data)
    }
}

pub fn generate_trapezoid(inset_amount: f32, rect: BoundingRect) -> Result<PathCommandSequence> {
    Trapezoid::new(inset_amount).path(rect)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ShapeError;
    use crate::test_utils::assert_polyline;

    fn rect() -> BoundingRect {
        BoundingRect::from_size(200.0, 100.0)
    }

    #[test]
    fn test_outline() {
        let path = generate_trapezoid(50.0, rect()).unwrap();
        assert_eq!(path.len(), 6);
        assert_eq!(path.closed_subpath_count(), 1);
        assert_polyline(
            &path,
            &[
                point(0.0, 100.0),
                point(50.0, 0.0),
                point(150.0, 0.0),
                point(200.0, 100.0),
                point(0.0, 100.0),
            ],
        );
    }

    #[test]
    fn test_inset_domain_edges() {
        // Zero inset is a rectangle, half width a triangle.
        assert!(generate_trapezoid(0.0, rect()).is_ok());
        let path = generate_trapezoid(100.0, rect()).unwrap();
        let points = path.end_points();
        assert_eq!(points[1], points[2]);
    }

    #[test]
    fn test_invalid_inset() {
        for inset in [-0.5, 100.5, f32::INFINITY].iter() {
            let err = generate_trapezoid(*inset, rect()).unwrap_err();
            assert!(matches!(
                err.downcast_ref::<ShapeError>(),
                Some(ShapeError::InvalidParameter {
                    name: "inset_amount",
                    ..
                })
            ));
        }
    }

    #[test]
    fn test_interpolated_frames_stay_valid() {
        let from = Trapezoid::new(0.0);
        let to = Trapezoid::new(80.0);
        for i in 0..=20 {
            let frame = from.interpolate(&to, i as f32 / 20.0);
            assert!(frame.path(rect()).is_ok());
        }
        assert_eq!(from.interpolate(&to, 0.5), Trapezoid::new(40.0));
    }
}
