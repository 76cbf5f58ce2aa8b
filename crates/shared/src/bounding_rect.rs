use serde::{Deserialize, Serialize};

use crate::number::non_negative;
use crate::{Height, NumberError, Width};

/// The frame a shape is drawn into.
///
/// The origin sits at the top-left corner and y grows downward, so
/// `min_y` is the top edge and `max_y` the bottom edge.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoundingRect {
    pub width: Width,
    pub height: Height,
}

impl BoundingRect {
    pub fn new(width: Width, height: Height) -> Self {
        BoundingRect { width, height }
    }

    pub fn from_size(width: f32, height: f32) -> Self {
        BoundingRect::new(Width::new(width), Height::new(height))
    }

    /// Rejects sizes that would put NaN or infinities into generated paths.
    pub fn validate(&self) -> Result<(), NumberError> {
        non_negative("rect.width", *self.width)?;
        non_negative("rect.height", *self.height)?;
        Ok(())
    }

    pub fn min_x(&self) -> f32 {
        0.0
    }

    pub fn min_y(&self) -> f32 {
        0.0
    }

    pub fn mid_x(&self) -> f32 {
        self.width / 2.0
    }

    pub fn mid_y(&self) -> f32 {
        self.height / 2.0
    }

    pub fn max_x(&self) -> f32 {
        *self.width
    }

    pub fn max_y(&self) -> f32 {
        *self.height
    }

    pub fn center(&self) -> (f32, f32) {
        (self.mid_x(), self.mid_y())
    }

    pub fn is_empty(&self) -> bool {
        *self.width == 0.0 || *self.height == 0.0
    }
}

#[cfg(test)]
mod test {
    use super::BoundingRect;
    use crate::NumberError;
    use approx::assert_relative_eq;

    #[test]
    fn edges_and_center() {
        let rect = BoundingRect::from_size(300.0, 200.0);
        assert_relative_eq!(rect.min_x(), 0.0);
        assert_relative_eq!(rect.mid_x(), 150.0);
        assert_relative_eq!(rect.max_x(), 300.0);
        assert_relative_eq!(rect.min_y(), 0.0);
        assert_relative_eq!(rect.mid_y(), 100.0);
        assert_relative_eq!(rect.max_y(), 200.0);
        assert_eq!(rect.center(), (150.0, 100.0));
        assert!(!rect.is_empty());
    }

    #[test]
    fn validate() {
        assert!(BoundingRect::from_size(0.0, 0.0).validate().is_ok());
        assert_eq!(
            BoundingRect::from_size(-1.0, 10.0).validate(),
            Err(NumberError::Negative {
                name: "rect.width",
                value: -1.0
            })
        );
        let err = BoundingRect::from_size(10.0, f32::NAN).validate().unwrap_err();
        assert_eq!(err.name(), "rect.height");
    }
}
