use anyhow::Result;
use lyon::math::point;
use serde::{Deserialize, Serialize};
use shared::BoundingRect;

use crate::command::PathCommandSequence;
use crate::error::validate_rect;
use crate::path::PathBuilder;
use crate::shape::Shape;

/// Apex at the top centre, base along the bottom edge.
#[derive(Debug, Copy, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Triangle;

impl Shape for Triangle {
    fn path(&self, rect: BoundingRect) -> Result<PathCommandSequence> {
        validate_rect(&rect)?;
        let apex = point(rect.mid_x(), rect.min_y());
        let mut builder = PathBuilder::with_capacity(5);
        builder.move_to(apex)?;
        builder.line_to(point(rect.min_x(), rect.max_y()))?;
        builder.line_to(point(rect.max_x(), rect.max_y()))?;
        builder.line_to(apex)?;
        builder.close()?;
        Ok(builder.build())
    }
}

pub fn generate_triangle(rect: BoundingRect) -> Result<PathCommandSequence> {
    Triangle.path(rect)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::assert_polyline;
    use crate::PathCommand;

    #[test]
    fn test_three_segments_closed() {
        let rect = BoundingRect::from_size(200.0, 100.0);
        let path = generate_triangle(rect).unwrap();
        assert_eq!(path.count_where(PathCommand::is_line), 3);
        assert_eq!(path.closed_subpath_count(), 1);
        assert_eq!(path.commands()[0], PathCommand::MoveTo(point(100.0, 0.0)));
        assert!(path.commands().last().unwrap().is_close());
        assert_polyline(
            &path,
            &[
                point(100.0, 0.0),
                point(0.0, 100.0),
                point(200.0, 100.0),
                point(100.0, 0.0),
            ],
        );
    }

    #[test]
    fn test_empty_rect_is_degenerate_not_invalid() {
        let path = generate_triangle(BoundingRect::from_size(0.0, 0.0)).unwrap();
        assert_eq!(path.len(), 5);
        assert!(generate_triangle(BoundingRect::from_size(f32::NAN, 1.0)).is_err());
    }
}
