use lyon::geom::{Arc as GeomArc, CubicBezierSegment};
use lyon::math::{vector, Angle, Box2D, Point};
use lyon::path::Path;

use crate::command::{PathCommand, PathCommandSequence};
use crate::geom::arc_sweep;

fn geom_arc(
    center: Point,
    radius: f32,
    start_angle: Angle,
    end_angle: Angle,
    clockwise: bool,
) -> GeomArc<f32> {
    GeomArc {
        center,
        radii: vector(radius, radius),
        start_angle,
        sweep_angle: arc_sweep(start_angle, end_angle, clockwise),
        x_rotation: Angle::zero(),
    }
}

fn union(acc: Option<Box2D>, other: Box2D) -> Option<Box2D> {
    Some(match acc {
        Some(b) => b.union(&other),
        None => other,
    })
}

impl PathCommandSequence {
    /// Converts into a `lyon` path for tessellation or hit testing.
    ///
    /// Arcs become cubic Béziers. If the pen is not already at an arc's first
    /// point a line is drawn to it.
    pub fn to_lyon_path(&self) -> Path {
        let mut builder = Path::builder();
        let mut open = false;
        let mut current = Point::zero();
        for command in self.iter() {
            match *command {
                PathCommand::MoveTo(p) => {
                    if open {
                        builder.end(false);
                    }
                    builder.begin(p);
                    open = true;
                    current = p;
                }
                PathCommand::LineTo(p) => {
                    builder.line_to(p);
                    current = p;
                }
                PathCommand::CubicTo { ctrl1, ctrl2, to } => {
                    builder.cubic_bezier_to(ctrl1, ctrl2, to);
                    current = to;
                }
                PathCommand::ArcTo {
                    center,
                    radius,
                    start_angle,
                    end_angle,
                    clockwise,
                } => {
                    let arc = geom_arc(center, radius, start_angle, end_angle, clockwise);
                    let from = arc.from();
                    if !open {
                        builder.begin(from);
                        open = true;
                    } else if (from - current).square_length() > 1e-6 {
                        builder.line_to(from);
                    }
                    arc.for_each_cubic_bezier(&mut |segment| {
                        builder.cubic_bezier_to(segment.ctrl1, segment.ctrl2, segment.to);
                    });
                    current = arc.to();
                }
                PathCommand::ClosePath => {
                    if open {
                        builder.end(true);
                        open = false;
                    }
                }
            }
        }
        if open {
            builder.end(false);
        }
        builder.build()
    }

    /// Axis-aligned bounds of everything the sequence draws, including curve
    /// and arc extremes. `None` for an empty sequence.
    pub fn bounding_box(&self) -> Option<Box2D> {
        let mut bounds: Option<Box2D> = None;
        let mut current = Point::zero();
        for command in self.iter() {
            match *command {
                PathCommand::MoveTo(p) | PathCommand::LineTo(p) => {
                    bounds = union(bounds, Box2D::new(p, p));
                    current = p;
                }
                PathCommand::CubicTo { ctrl1, ctrl2, to } => {
                    let segment = CubicBezierSegment {
                        from: current,
                        ctrl1,
                        ctrl2,
                        to,
                    };
                    bounds = union(bounds, segment.bounding_box());
                    current = to;
                }
                PathCommand::ArcTo {
                    center,
                    radius,
                    start_angle,
                    end_angle,
                    clockwise,
                } => {
                    let arc = geom_arc(center, radius, start_angle, end_angle, clockwise);
                    bounds = union(bounds, arc.bounding_box());
                    current = arc.to();
                }
                PathCommand::ClosePath => {}
            }
        }
        bounds
    }
}
