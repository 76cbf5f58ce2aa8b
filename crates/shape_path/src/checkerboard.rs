use anyhow::Result;
use lyon::math::{point, size};
use serde::{Deserialize, Serialize};
use shared::BoundingRect;
use tracing::debug;

use crate::animatable::{Animatable, AnimatablePair};
use crate::command::PathCommandSequence;
use crate::error::{count, validate_rect, ShapeError};
use crate::path::PathBuilder;
use crate::shape::Shape;

/// Most cells (rows × columns) a checkerboard may have. Larger grids are
/// rejected before anything is allocated.
pub const MAX_CHECKERBOARD_CELLS: u64 = 65_536;

/// Alternating filled cells, starting with the top-left one.
///
/// `rows` and `columns` are reals so an animation can pass through fractional
/// counts; they are truncated when the path is generated.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct Checkerboard {
    pub rows: f32,
    pub columns: f32,
}

impl Checkerboard {
    pub fn new(rows: f32, columns: f32) -> Self {
        Checkerboard { rows, columns }
    }
}

impl Shape for Checkerboard {
    fn path(&self, rect: BoundingRect) -> Result<PathCommandSequence> {
        validate_rect(&rect)?;
        let rows = count("rows", self.rows)?;
        let columns = count("columns", self.columns)?;
        let cells = u64::from(rows)
            .checked_mul(u64::from(columns))
            .filter(|cells| *cells <= MAX_CHECKERBOARD_CELLS)
            .ok_or(ShapeError::InvalidParameter {
                name: "rows",
                value: self.rows,
                reason: "rows × columns exceeds MAX_CHECKERBOARD_CELLS",
            })?;
        debug!(rows, columns, cells, "generating checkerboard");

        let row_size = rect.height / rows as f32;
        let column_size = rect.width / columns as f32;
        let cell = size(column_size, row_size);

        // Each filled cell is a move, three lines and a close.
        let filled = (cells + 1) / 2;
        let mut builder = PathBuilder::with_capacity(filled as usize * 5);
        for row in 0..rows {
            for column in 0..columns {
                if (row + column) % 2 == 0 {
                    let origin = point(column_size * column as f32, row_size * row as f32);
                    builder.rect(origin, cell)?;
                }
            }
        }
        Ok(builder.build())
    }
}

impl Animatable for Checkerboard {
    type Data = AnimatablePair<f32, f32>;

    fn animatable_data(&self) -> Self::Data {
        AnimatablePair(self.rows, self.columns)
    }

    fn with_animatable_data(&self, data: Self::Data) -> Self {
        Checkerboard::new(data.0, data.1)
    }
}

pub fn generate_checkerboard(
    rows: f32,
    columns: f32,
    rect: BoundingRect,
) -> Result<PathCommandSequence> {
    Checkerboard::new(rows, columns).path(rect)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::assert_polyline;

    fn rect() -> BoundingRect {
        BoundingRect::from_size(400.0, 400.0)
    }

    #[test]
    fn test_rectangle_counts() {
        let path = generate_checkerboard(4.0, 4.0, rect()).unwrap();
        assert_eq!(path.closed_subpath_count(), 8);
        assert_eq!(path.len(), 8 * 5);

        let path = generate_checkerboard(8.0, 16.0, rect()).unwrap();
        assert_eq!(path.closed_subpath_count(), 64);

        let path = generate_checkerboard(3.0, 3.0, rect()).unwrap();
        assert_eq!(path.closed_subpath_count(), 5);
    }

    #[test]
    fn test_cell_layout() {
        let path = generate_checkerboard(2.0, 2.0, BoundingRect::from_size(100.0, 50.0)).unwrap();
        assert_polyline(
            &path,
            &[
                // row 0, column 0
                point(0.0, 0.0),
                point(50.0, 0.0),
                point(50.0, 25.0),
                point(0.0, 25.0),
                // row 1, column 1
                point(50.0, 25.0),
                point(100.0, 25.0),
                point(100.0, 50.0),
                point(50.0, 50.0),
            ],
        );
    }

    #[test]
    fn test_fractional_counts_truncate() {
        let exact = generate_checkerboard(4.0, 4.0, rect()).unwrap();
        let fractional = generate_checkerboard(4.7, 4.2, rect()).unwrap();
        assert_eq!(exact, fractional);
    }

    #[test]
    fn test_mid_animation_frames_generate() {
        let from = Checkerboard::new(4.0, 4.0);
        let to = Checkerboard::new(8.0, 16.0);
        for i in 0..=10 {
            let frame = from.interpolate(&to, i as f32 / 10.0);
            assert!(frame.path(rect()).is_ok());
        }
        assert_eq!(from.interpolate(&to, 0.5), Checkerboard::new(6.0, 10.0));
    }

    #[test]
    fn test_cell_limit_boundary() {
        let path = generate_checkerboard(256.0, 256.0, rect()).unwrap();
        assert_eq!(path.closed_subpath_count(), 32_768);
        let path = generate_checkerboard(1.0, 65_536.0, rect()).unwrap();
        assert_eq!(path.closed_subpath_count(), 32_768);

        for (rows, columns) in [(256.0, 257.0), (4.0e9, 4.0e9), (u32::MAX as f32, 1.0)].iter() {
            let err = generate_checkerboard(*rows, *columns, rect()).unwrap_err();
            assert!(matches!(
                err.downcast_ref::<ShapeError>(),
                Some(ShapeError::InvalidParameter { name: "rows", .. })
            ));
        }
    }

    #[test]
    fn test_invalid_counts() {
        for (rows, columns) in [(0.0, 4.0), (4.0, 0.99), (-2.0, 4.0), (f32::INFINITY, 4.0)].iter() {
            let err = generate_checkerboard(*rows, *columns, rect()).unwrap_err();
            assert!(matches!(
                err.downcast_ref::<ShapeError>(),
                Some(ShapeError::InvalidParameter { .. })
            ));
        }
    }
}
