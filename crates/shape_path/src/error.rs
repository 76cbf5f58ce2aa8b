use anyhow::Result;
use shared::NumberError;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ShapeError {
    #[error("invalid parameter `{name}` = {value}: {reason}")]
    InvalidParameter {
        name: &'static str,
        value: f32,
        reason: &'static str,
    },
    #[error("non-finite value produced for {0}")]
    NonFinite(&'static str),
    #[error("invalid generator config: {0}")]
    Config(String),
}

impl From<NumberError> for ShapeError {
    fn from(err: NumberError) -> Self {
        let reason = match err {
            NumberError::NonFinite { .. } => "must be finite",
            NumberError::Negative { .. } => "must not be negative",
            NumberError::InvalidNumberConversion { .. } => {
                "must truncate to a count of at least 1"
            }
        };
        ShapeError::InvalidParameter {
            name: err.name(),
            value: err.value(),
            reason,
        }
    }
}

pub(crate) fn ensure(
    condition: bool,
    name: &'static str,
    value: f32,
    reason: &'static str,
) -> Result<()> {
    if condition {
        Ok(())
    } else {
        Err(ShapeError::InvalidParameter {
            name,
            value,
            reason,
        }
        .into())
    }
}

pub(crate) fn finite(name: &'static str, value: f32) -> Result<f32> {
    Ok(shared::finite(name, value).map_err(ShapeError::from)?)
}

pub(crate) fn non_negative(name: &'static str, value: f32) -> Result<f32> {
    Ok(shared::non_negative(name, value).map_err(ShapeError::from)?)
}

pub(crate) fn count(name: &'static str, value: f32) -> Result<u32> {
    Ok(shared::truncate_count(name, value).map_err(ShapeError::from)?)
}

pub(crate) fn validate_rect(rect: &shared::BoundingRect) -> Result<()> {
    Ok(rect.validate().map_err(ShapeError::from)?)
}
