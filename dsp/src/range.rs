//! Conversion between normalized samples and the 16-bit working scale.
//!
//! Peripherals report values in range from 0.0 to 1.0, the rest of the
//! pipeline works on a float representation of `u16`, and the output is
//! truncated back to `u16`.

/// The top of the working scale, equal to `u16::MAX`.
pub const FULL_SCALE: f32 = 65535.0;

/// Scale a normalized sample up to the working range.
///
/// Values outside of 0.0 to 1.0 are clamped. NaN, that may come from a
/// misbehaving converter, is treated as zero.
#[must_use]
pub fn to_working(normalized: f32) -> f32 {
    if normalized.is_nan() {
        return 0.0;
    }
    normalized.clamp(0.0, 1.0) * FULL_SCALE
}

/// Scale a value from the working range down to 0.0 to 1.0.
#[must_use]
pub fn to_normalized(value: f32) -> f32 {
    if value.is_nan() {
        return 0.0;
    }
    (value / FULL_SCALE).clamp(0.0, 1.0)
}

/// Clamp the value into the working range and truncate it to integer.
#[must_use]
pub fn quantize(value: f32) -> u16 {
    if value.is_nan() {
        return 0;
    }
    value.clamp(0.0, FULL_SCALE) as u16
}
