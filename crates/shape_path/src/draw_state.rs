use anyhow::{Ok, Result};
use lyon::math::Point;
use strum_macros::Display;
use thiserror::Error;

/// Tracks where the pen is while a sequence is being built.
#[derive(Debug, Copy, Clone, PartialEq)]
pub(crate) struct DrawState(State);

impl Default for DrawState {
    fn default() -> Self {
        DrawState(State::default())
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Display)]
pub(crate) enum State {
    /// No current point. Only `MoveTo` is allowed.
    Inactive,
    /// A `MoveTo` was issued and nothing has been drawn from it yet.
    Active(Active),
    /// At least one segment has been drawn in the current sub-path.
    Segments(Segments),
}

impl Default for State {
    fn default() -> Self {
        State::Inactive
    }
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub(crate) struct Active {
    pub(crate) first: Point,
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub(crate) struct Segments {
    pub(crate) first: Point,
    pub(crate) current: Point,
}

impl DrawState {
    pub fn current_point(&self) -> Option<Point> {
        match self.0 {
            State::Inactive => None,
            State::Active(a) => Some(a.first),
            State::Segments(s) => Some(s.current),
        }
    }

    /// Starts a new sub-path. Any open sub-path is left unclosed.
    pub fn begin(&mut self, at: Point) {
        self.0 = State::Active(Active { first: at });
        debug_assert!(matches!(self.0, State::Active(_)));
    }

    pub fn segment(&mut self, to: Point) -> Result<()> {
        self.0 = match self.0 {
            State::Inactive => return Err(BuildError::NoCurrentPoint.into()),
            State::Active(a) => State::Segments(Segments {
                first: a.first,
                current: to,
            }),
            State::Segments(s) => State::Segments(Segments { current: to, ..s }),
        };
        Ok(())
    }

    /// Closes the current sub-path. A new `MoveTo` is needed afterwards.
    pub fn close(&mut self) -> Result<Point> {
        let first = match self.0 {
            State::Inactive => {
                return Err(BuildError::StateTransition("Inactive", "Closed").into())
            }
            State::Active(a) => a.first,
            State::Segments(s) => s.first,
        };
        self.0 = State::Inactive;
        Ok(first)
    }
}

#[derive(Error, Debug)]
pub(crate) enum BuildError {
    #[error("invalid state transition: tried to convert {0} to {1}")]
    StateTransition(&'static str, &'static str),
    #[error("no current point: a sub-path must start with a move")]
    NoCurrentPoint,
}

#[cfg(test)]
mod tests {
    use lyon::math::point;

    use super::{Active, BuildError, DrawState, Segments, State};

    #[test]
    fn test_draw_state_transitions() {
        let mut state = DrawState::default();
        assert_eq!(state.0, State::Inactive);
        let err = state.segment(point(1.0, 1.0)).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<BuildError>(),
            Some(BuildError::NoCurrentPoint)
        ));
        assert_eq!(state.0, State::Inactive);
        assert!(state.close().is_err());
        assert_eq!(state.current_point(), None);

        state.begin(point(0.0, 0.0));
        assert_eq!(
            state.0,
            State::Active(Active {
                first: point(0.0, 0.0)
            })
        );

        assert!(state.segment(point(1.0, 0.0)).is_ok());
        assert!(state.segment(point(1.0, 1.0)).is_ok());
        assert_eq!(
            state.0,
            State::Segments(Segments {
                first: point(0.0, 0.0),
                current: point(1.0, 1.0),
            })
        );
        assert_eq!(state.current_point(), Some(point(1.0, 1.0)));

        assert_eq!(state.close().unwrap(), point(0.0, 0.0));
        assert_eq!(state.0, State::Inactive);
        assert_eq!(state.0.to_string(), "Inactive");
    }

    #[test]
    fn test_begin_abandons_open_subpath() {
        let mut state = DrawState::default();
        state.begin(point(0.0, 0.0));
        state.segment(point(3.0, 0.0)).unwrap();
        state.begin(point(9.0, 9.0));
        assert_eq!(state.close().unwrap(), point(9.0, 9.0));
    }
}
