use thiserror::Error;

#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum NumberError {
    #[error("{name} must be finite but was {value}")]
    NonFinite { name: &'static str, value: f32 },
    #[error("{name} must not be negative but was {value}")]
    Negative { name: &'static str, value: f32 },
    #[error("invalid number conversion: {name} = {value} does not truncate to a count of at least 1")]
    InvalidNumberConversion { name: &'static str, value: f32 },
}

impl NumberError {
    pub fn name(&self) -> &'static str {
        match self {
            NumberError::NonFinite { name, .. }
            | NumberError::Negative { name, .. }
            | NumberError::InvalidNumberConversion { name, .. } => name,
        }
    }

    pub fn value(&self) -> f32 {
        match self {
            NumberError::NonFinite { value, .. }
            | NumberError::Negative { value, .. }
            | NumberError::InvalidNumberConversion { value, .. } => *value,
        }
    }
}
