//! Continuous interpolation of shape parameters.
//!
//! A parameter that takes part in an animation is stored as a real number even
//! when its resting value is an integer (a row count, say). Generators round
//! or truncate only when they consume it.

use serde::{Deserialize, Serialize};

#[inline]
pub fn lerp(from: f32, to: f32, t: f32) -> f32 {
    from + (to - from) * t
}

/// Values with a linear interpolation between two instances.
pub trait Interpolate: Copy {
    fn interpolate(&self, to: &Self, t: f32) -> Self;
}

impl Interpolate for f32 {
    fn interpolate(&self, to: &Self, t: f32) -> Self {
        lerp(*self, *to, t)
    }
}

/// Two animatable values driven together, e.g. rows and columns.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnimatablePair<A, B>(pub A, pub B);

impl<A: Interpolate, B: Interpolate> Interpolate for AnimatablePair<A, B> {
    fn interpolate(&self, to: &Self, t: f32) -> Self {
        AnimatablePair(self.0.interpolate(&to.0, t), self.1.interpolate(&to.1, t))
    }
}

/// A shape whose parameters an animation driver can tween.
///
/// `t` is not clamped, so easing curves that overshoot still work.
pub trait Animatable: Sized {
    type Data: Interpolate;

    fn animatable_data(&self) -> Self::Data;

    fn with_animatable_data(&self, data: Self::Data) -> Self;

    fn interpolate(&self, to: &Self, t: f32) -> Self {
        let data = self
            .animatable_data()
            .interpolate(&to.animatable_data(), t);
        self.with_animatable_data(data)
    }
}

/// A shape that can shrink its outline inward, so a stroke centred on the
/// outline stays inside the bounding rect.
pub trait Insettable: Sized {
    fn inset(&self, amount: f32) -> Self;
}
