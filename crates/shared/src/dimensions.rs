use derive_more::{Display, From, Into};
use serde::{Deserialize, Serialize};
use std::ops::{Deref, Div, Mul, Sub};

#[derive(Debug, Copy, Clone, PartialEq, PartialOrd, Display, From, Into, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Width(f32);

impl Width {
    pub fn new(v: f32) -> Self {
        Width(v)
    }
}

impl Deref for Width {
    type Target = f32;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl Sub<f32> for Width {
    type Output = f32;

    fn sub(self, other: f32) -> Self::Output {
        self.0 - other
    }
}

impl Mul<f32> for Width {
    type Output = f32;

    fn mul(self, rhs: f32) -> Self::Output {
        self.0 * rhs
    }
}

impl Div<f32> for Width {
    type Output = f32;

    fn div(self, rhs: f32) -> Self::Output {
        self.0 / rhs
    }
}

#[derive(Debug, Copy, Clone, PartialEq, PartialOrd, Display, From, Into, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Height(f32);

impl Height {
    pub fn new(v: f32) -> Self {
        Height(v)
    }
}

impl Deref for Height {
    type Target = f32;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl Sub<f32> for Height {
    type Output = f32;

    fn sub(self, other: f32) -> Self::Output {
        self.0 - other
    }
}

impl Mul<f32> for Height {
    type Output = f32;

    fn mul(self, rhs: f32) -> Self::Output {
        self.0 * rhs
    }
}

impl Div<f32> for Height {
    type Output = f32;

    fn div(self, rhs: f32) -> Self::Output {
        self.0 / rhs
    }
}
