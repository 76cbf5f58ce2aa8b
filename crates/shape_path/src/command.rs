use lyon::math::{Angle, Point};
use strum_macros::Display;

use crate::geom::point_on_circle;

/// A single drawing instruction.
///
/// Coordinates live in the frame of the [`BoundingRect`](shared::BoundingRect)
/// the shape was generated for: origin top-left, y downward. Arc angles are
/// radians measured from the positive x axis, and `clockwise` means clockwise
/// as seen on screen (increasing angle).
#[derive(Debug, Copy, Clone, PartialEq, Display)]
pub enum PathCommand {
    MoveTo(Point),
    LineTo(Point),
    ArcTo {
        center: Point,
        radius: f32,
        start_angle: Angle,
        end_angle: Angle,
        clockwise: bool,
    },
    CubicTo {
        ctrl1: Point,
        ctrl2: Point,
        to: Point,
    },
    ClosePath,
}

impl PathCommand {
    /// Where the pen rests after this command, if the command moves it.
    pub fn end_point(&self) -> Option<Point> {
        match *self {
            PathCommand::MoveTo(p) | PathCommand::LineTo(p) => Some(p),
            PathCommand::ArcTo {
                center,
                radius,
                end_angle,
                ..
            } => Some(point_on_circle(center, radius, end_angle)),
            PathCommand::CubicTo { to, .. } => Some(to),
            PathCommand::ClosePath => None,
        }
    }

    pub fn is_move(&self) -> bool {
        matches!(self, PathCommand::MoveTo(_))
    }

    pub fn is_line(&self) -> bool {
        matches!(self, PathCommand::LineTo(_))
    }

    pub fn is_arc(&self) -> bool {
        matches!(self, PathCommand::ArcTo { .. })
    }

    pub fn is_cubic(&self) -> bool {
        matches!(self, PathCommand::CubicTo { .. })
    }

    pub fn is_close(&self) -> bool {
        matches!(self, PathCommand::ClosePath)
    }
}

/// An ordered list of [`PathCommand`]s. Order is draw order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PathCommandSequence {
    commands: Vec<PathCommand>,
}

impl PathCommandSequence {
    pub(crate) fn from_commands(commands: Vec<PathCommand>) -> Self {
        PathCommandSequence { commands }
    }

    pub fn commands(&self) -> &[PathCommand] {
        &self.commands
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, PathCommand> {
        self.commands.iter()
    }

    pub fn count_where<F>(&self, predicate: F) -> usize
    where
        F: Fn(&PathCommand) -> bool,
    {
        self.commands.iter().filter(|c| predicate(*c)).count()
    }

    pub fn subpath_count(&self) -> usize {
        self.count_where(PathCommand::is_move)
    }

    pub fn closed_subpath_count(&self) -> usize {
        self.count_where(PathCommand::is_close)
    }

    /// Splits the sequence at every `MoveTo`.
    pub fn subpaths(&self) -> Vec<&[PathCommand]> {
        let mut starts: Vec<usize> = self
            .commands
            .iter()
            .enumerate()
            .filter(|(_, c)| c.is_move())
            .map(|(i, _)| i)
            .collect();
        starts.push(self.commands.len());
        starts
            .windows(2)
            .map(|w| &self.commands[w[0]..w[1]])
            .collect()
    }

    /// Every point the pen comes to rest at, in draw order.
    pub fn end_points(&self) -> Vec<Point> {
        self.commands.iter().filter_map(PathCommand::end_point).collect()
    }

    pub fn into_commands(self) -> Vec<PathCommand> {
        self.commands
    }
}

impl<'a> IntoIterator for &'a PathCommandSequence {
    type Item = &'a PathCommand;
    type IntoIter = std::slice::Iter<'a, PathCommand>;

    fn into_iter(self) -> Self::IntoIter {
        self.commands.iter()
    }
}

impl IntoIterator for PathCommandSequence {
    type Item = PathCommand;
    type IntoIter = std::vec::IntoIter<PathCommand>;

    fn into_iter(self) -> Self::IntoIter {
        self.commands.into_iter()
    }
}
