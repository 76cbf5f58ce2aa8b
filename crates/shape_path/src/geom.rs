use lyon::math::{point, Angle, Box2D, Point, Transform};
use std::f32::consts::TAU;

/// Control point distance for a quarter circle drawn as one cubic Bézier.
pub const KAPPA: f32 = 0.552_284_75;

/// Greatest common divisor, by repeated remainders.
pub fn gcd(a: u32, b: u32) -> u32 {
    let mut a = a;
    let mut b = b;
    while b != 0 {
        let remainder = a % b;
        a = b;
        b = remainder;
    }
    a
}

#[inline]
pub fn point_on_circle(center: Point, radius: f32, angle: Angle) -> Point {
    let (sin, cos) = angle.sin_cos();
    point(center.x + radius * cos, center.y + radius * sin)
}

/// Signed sweep going from `start` to `end` in the requested direction.
///
/// Clockwise (on screen, y down) sweeps are positive and never exceed a full
/// turn. Equal angles sweep nothing; angles a full turn or more apart sweep
/// the whole circle.
pub fn arc_sweep(start: Angle, end: Angle, clockwise: bool) -> Angle {
    let span = (end - start).radians;
    if span.abs() >= TAU - FULL_TURN_EPSILON {
        return Angle::radians(if clockwise { TAU } else { -TAU });
    }
    let delta = span % TAU;
    let sweep = if clockwise && delta < 0.0 {
        delta + TAU
    } else if !clockwise && delta > 0.0 {
        delta - TAU
    } else {
        delta
    };
    Angle::radians(sweep)
}

// Angles shifted by a quarter turn can land a few ulps short of a full turn.
const FULL_TURN_EPSILON: f32 = 1e-4;

pub type CubicPoints = (Point, Point, Point);

/// The ellipse inscribed in `bounds` as a start point and four cubic segments,
/// with every point mapped through `transform`.
///
/// Starts on the right-hand extreme and visits bottom, left, then top.
pub fn ellipse_segments(bounds: &Box2D, transform: &Transform) -> (Point, [CubicPoints; 4]) {
    let c = bounds.center();
    let rx = bounds.width() / 2.0;
    let ry = bounds.height() / 2.0;
    let ox = rx * KAPPA;
    let oy = ry * KAPPA;

    let t = |x: f32, y: f32| transform.transform_point(point(x, y));

    let start = t(c.x + rx, c.y);
    let segments = [
        (t(c.x + rx, c.y + oy), t(c.x + ox, c.y + ry), t(c.x, c.y + ry)),
        (t(c.x - ox, c.y + ry), t(c.x - rx, c.y + oy), t(c.x - rx, c.y)),
        (t(c.x - rx, c.y - oy), t(c.x - ox, c.y - ry), t(c.x, c.y - ry)),
        (t(c.x + ox, c.y - ry), t(c.x + rx, c.y - oy), start),
    ];
    (start, segments)
}
