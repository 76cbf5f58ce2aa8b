use crate::NumberError;

pub fn finite(name: &'static str, value: f32) -> Result<f32, NumberError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(NumberError::NonFinite { name, value })
    }
}

pub fn non_negative(name: &'static str, value: f32) -> Result<f32, NumberError> {
    let value = finite(name, value)?;
    if value < 0.0 {
        return Err(NumberError::Negative { name, value });
    }
    Ok(value)
}

/// Truncates a real-valued count toward zero.
///
/// Counts that are driven by an animation pass through fractional values,
/// so only the integral part is meaningful when the count is consumed.
pub fn truncate_count(name: &'static str, value: f32) -> Result<u32, NumberError> {
    let value = finite(name, value)?;
    let truncated = value.trunc();
    if truncated < 1.0 || truncated > u32::MAX as f32 {
        return Err(NumberError::InvalidNumberConversion { name, value });
    }
    Ok(truncated as u32)
}
