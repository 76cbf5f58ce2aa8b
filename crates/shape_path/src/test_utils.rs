use approx::{assert_relative_eq, AbsDiffEq, RelativeEq};
use lyon::math::Point;

use crate::command::PathCommandSequence;
use crate::PathCommand;

pub fn assert_relative_eq_points(left: &[Point], right: &[Point]) {
    assert_relative_eq!(
        AssertablePoints(left.to_vec()),
        AssertablePoints(right.to_vec()),
        epsilon = 1e-4
    )
}

/// Asserts the `MoveTo`/`LineTo` points of `path`, in order.
pub fn assert_polyline(path: &PathCommandSequence, expected: &[Point]) {
    let points: Vec<Point> = path
        .iter()
        .filter_map(|c| match c {
            PathCommand::MoveTo(p) | PathCommand::LineTo(p) => Some(*p),
            _ => None,
        })
        .collect();
    assert_relative_eq_points(&points, expected);
}

#[derive(PartialEq, Debug)]
pub(crate) struct AssertablePoints(pub Vec<Point>);

impl AbsDiffEq for AssertablePoints {
    type Epsilon = f32;

    fn default_epsilon() -> f32 {
        f32::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: f32) -> bool {
        self.0.len() == other.0.len()
            && self.0.iter().zip(other.0.iter()).all(|(me, other)| {
                f32::abs_diff_eq(&me.x, &other.x, epsilon)
                    && f32::abs_diff_eq(&me.y, &other.y, epsilon)
            })
    }
}

impl RelativeEq for AssertablePoints {
    fn default_max_relative() -> f32 {
        f32::default_max_relative()
    }

    fn relative_eq(&self, other: &Self, epsilon: f32, max_relative: f32) -> bool {
        self.0.len() == other.0.len()
            && self.0.iter().zip(other.0.iter()).all(|(me, other)| {
                f32::relative_eq(&me.x, &other.x, epsilon, max_relative)
                    && f32::relative_eq(&me.y, &other.y, epsilon, max_relative)
            })
    }
}
