use anyhow::{Ok, Result};
use lyon::math::{point, Angle, Box2D, Point, Size, Transform};

use crate::command::{PathCommand, PathCommandSequence};
use crate::draw_state::DrawState;
use crate::error::{ensure, ShapeError};
use crate::geom::{ellipse_segments, point_on_circle};

/// Accumulates [`PathCommand`]s while checking that the sequence is well formed
/// and free of NaN or infinite coordinates.
#[derive(Debug, Default)]
pub struct PathBuilder {
    commands: Vec<PathCommand>,
    draw_state: DrawState,
}

impl PathBuilder {
    pub fn new() -> Self {
        PathBuilder::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        PathBuilder {
            commands: Vec::with_capacity(capacity),
            draw_state: DrawState::default(),
        }
    }

    pub fn current_point(&self) -> Option<Point> {
        self.draw_state.current_point()
    }

    pub fn move_to(&mut self, to: Point) -> Result<()> {
        finite_check(to, "move_to")?;
        self.draw_state.begin(to);
        self.commands.push(PathCommand::MoveTo(to));
        Ok(())
    }

    pub fn line_to(&mut self, to: Point) -> Result<()> {
        finite_check(to, "line_to")?;
        self.draw_state.segment(to)?;
        self.commands.push(PathCommand::LineTo(to));
        Ok(())
    }

    pub fn cubic_to(&mut self, ctrl1: Point, ctrl2: Point, to: Point) -> Result<()> {
        finite_check(ctrl1, "cubic_to control point")?;
        finite_check(ctrl2, "cubic_to control point")?;
        finite_check(to, "cubic_to")?;
        self.draw_state.segment(to)?;
        self.commands.push(PathCommand::CubicTo { ctrl1, ctrl2, to });
        Ok(())
    }

    /// Appends a circular arc. Starts a sub-path at the arc's first point if
    /// there is no current point.
    pub fn arc_to(
        &mut self,
        center: Point,
        radius: f32,
        start_angle: Angle,
        end_angle: Angle,
        clockwise: bool,
    ) -> Result<()> {
        finite_check(center, "arc center")?;
        if !radius.is_finite() {
            return Err(ShapeError::NonFinite("arc radius").into());
        }
        if !start_angle.radians.is_finite() || !end_angle.radians.is_finite() {
            return Err(ShapeError::NonFinite("arc angle").into());
        }
        ensure(radius >= 0.0, "radius", radius, "must not be negative")?;

        if self.draw_state.current_point().is_none() {
            self.move_to(point_on_circle(center, radius, start_angle))?;
        }
        self.draw_state
            .segment(point_on_circle(center, radius, end_angle))?;
        self.commands.push(PathCommand::ArcTo {
            center,
            radius,
            start_angle,
            end_angle,
            clockwise,
        });
        Ok(())
    }

    /// A closed rectangle walked from `origin` along the top edge first.
    pub fn rect(&mut self, origin: Point, size: Size) -> Result<()> {
        self.move_to(origin)?;
        self.line_to(point(origin.x + size.width, origin.y))?;
        self.line_to(point(origin.x + size.width, origin.y + size.height))?;
        self.line_to(point(origin.x, origin.y + size.height))?;
        self.close()
    }

    /// A closed ellipse inscribed in `bounds`, mapped through `transform`.
    pub fn ellipse(&mut self, bounds: &Box2D, transform: &Transform) -> Result<()> {
        let (start, segments) = ellipse_segments(bounds, transform);
        self.move_to(start)?;
        for (ctrl1, ctrl2, to) in segments.iter() {
            self.cubic_to(*ctrl1, *ctrl2, *to)?;
        }
        self.close()
    }

    pub fn close(&mut self) -> Result<()> {
        self.draw_state.close()?;
        self.commands.push(PathCommand::ClosePath);
        Ok(())
    }

    pub fn build(self) -> PathCommandSequence {
        PathCommandSequence::from_commands(self.commands)
    }
}

fn finite_check(p: Point, what: &'static str) -> Result<()> {
    if p.x.is_finite() && p.y.is_finite() {
        Ok(())
    } else {
        Err(ShapeError::NonFinite(what).into())
    }
}
