//! Lookup table approximating the exponential response curve.
//!
//! The curve is `(1 - e^(-c * x)) / (1 - e^(-c))` with `x` in range from
//! 0.0 to 1.0. Steepness `c` close to zero approaches linear response, higher
//! values rise faster early on. Evaluating the exponential in every loop
//! iteration would be too slow, so it is sampled once into a table and then
//! linearly interpolated.

use core::fmt;

/// Number of points in the table.
///
/// Linear interpolation error is bound by `c^2 / (8 * SEGMENTS^2)`. With
/// 1024 segments it stays below the output quantization step of 1/65536 for
/// all steepness values up to `MAX_STEEPNESS`.
pub const TABLE_SIZE: usize = 1025;

const SEGMENTS: usize = TABLE_SIZE - 1;

/// The steepest curve the table resolution can approximate accurately.
pub const MAX_STEEPNESS: f32 = 8.0;

/// Steepness was not a finite number within (0.0, `MAX_STEEPNESS`].
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct InvalidSteepness(pub f32);

#[derive(Clone)]
pub struct CurveTable {
    steepness: f32,
    table: [f32; TABLE_SIZE],
}

impl CurveTable {
    /// Sample the curve of given steepness into a new table.
    ///
    /// Besides being positive, the steepness is bound by `MAX_STEEPNESS`.
    /// Steeper curves would still build, but the interpolation error of
    /// `TABLE_SIZE` points would exceed the output quantization step near
    /// zero, so they are rejected on startup together with the rest.
    ///
    /// # Errors
    ///
    /// Fails with `InvalidSteepness` when the steepness is not positive, not
    /// finite, or above `MAX_STEEPNESS`.
    pub fn try_new(steepness: f32) -> Result<Self, InvalidSteepness> {
        if !steepness.is_finite() || steepness <= 0.0 || steepness > MAX_STEEPNESS {
            return Err(InvalidSteepness(steepness));
        }

        let mut table = [0.0; TABLE_SIZE];
        for (i, point) in table.iter_mut().enumerate() {
            let x = i as f64 / SEGMENTS as f64;
            *point = evaluate_f64(steepness as f64, x) as f32;
        }
        // Rounding must not break the normalization.
        table[0] = 0.0;
        table[SEGMENTS] = 1.0;

        Ok(Self { steepness, table })
    }

    /// Approximate the curve at given position through linear interpolation.
    ///
    /// Position is clamped to range from 0.0 to 1.0.
    #[must_use]
    pub fn sample(&self, x: f32) -> f32 {
        let x = if x.is_nan() { 0.0 } else { x.clamp(0.0, 1.0) };

        let position = x * SEGMENTS as f32;
        let index = (position as usize).min(SEGMENTS - 1);
        let remainder = position - index as f32;

        let value = self.table[index];
        let delta_to_next = self.table[index + 1] - value;

        value + delta_to_next * remainder
    }

    #[must_use]
    pub fn steepness(&self) -> f32 {
        self.steepness
    }

    #[must_use]
    pub fn points(&self) -> &[f32] {
        &self.table
    }
}

impl fmt::Debug for CurveTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CurveTable")
            .field("steepness", &self.steepness)
            .finish_non_exhaustive()
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for CurveTable {
    fn format(&self, f: defmt::Formatter) {
        defmt::write!(f, "CurveTable {{ steepness: {} }}", self.steepness);
    }
}

/// Evaluate the exact curve. Too expensive for the control loop.
#[must_use]
pub fn evaluate(steepness: f32, x: f32) -> f32 {
    evaluate_f64(steepness as f64, x as f64) as f32
}

// `expm1` keeps precision for shallow curves, where `1 - e^(-c)` would
// otherwise cancel out to almost nothing.
fn evaluate_f64(steepness: f64, x: f64) -> f64 {
    libm::expm1(-steepness * x) / libm::expm1(-steepness)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn non_positive_steepness_is_rejected() {
        assert_eq!(CurveTable::try_new(0.0).unwrap_err(), InvalidSteepness(0.0));
        assert_eq!(
            CurveTable::try_new(-1.0).unwrap_err(),
            InvalidSteepness(-1.0)
        );
    }

    #[test]
    fn non_finite_or_too_steep_steepness_is_rejected() {
        assert!(CurveTable::try_new(f32::NAN).is_err());
        assert!(CurveTable::try_new(f32::INFINITY).is_err());
        assert!(CurveTable::try_new(MAX_STEEPNESS + 0.1).is_err());
    }

    #[test]
    fn steepness_beyond_table_resolution_is_rejected_with_its_value() {
        assert!(CurveTable::try_new(MAX_STEEPNESS).is_ok());
        assert_eq!(
            CurveTable::try_new(10.0).unwrap_err(),
            InvalidSteepness(10.0)
        );
    }

    #[test]
    fn table_is_normalized() {
        for steepness in [0.001, 0.5, 3.0, MAX_STEEPNESS] {
            let table = CurveTable::try_new(steepness).unwrap();
            assert_eq!(table.points()[0], 0.0);
            assert_eq!(table.points()[TABLE_SIZE - 1], 1.0);
        }
    }

    #[test]
    fn table_is_non_decreasing() {
        let table = CurveTable::try_new(3.0).unwrap();
        for pair in table.points().windows(2) {
            assert!(pair[1] >= pair[0]);
        }
    }

    #[test]
    fn sampling_at_extremes_returns_extremes() {
        let table = CurveTable::try_new(3.0).unwrap();
        assert_eq!(table.sample(0.0), 0.0);
        assert_eq!(table.sample(1.0), 1.0);
        assert_eq!(table.sample(-0.5), 0.0);
        assert_eq!(table.sample(1.5), 1.0);
        assert_eq!(table.sample(f32::NAN), 0.0);
    }

    #[test]
    fn interpolation_error_stays_below_quantization_step() {
        for steepness in [0.5, 3.0, MAX_STEEPNESS] {
            let table = CurveTable::try_new(steepness).unwrap();
            for i in 0..=10_000 {
                let x = i as f32 / 10_000.0;
                let error = (table.sample(x) - evaluate(steepness, x)).abs();
                assert!(error < 1.0 / 65536.0, "x={} error={}", x, error);
            }
        }
    }

    #[test]
    fn shallow_curve_approaches_linear() {
        let table = CurveTable::try_new(0.001).unwrap();
        assert_relative_eq!(table.sample(0.5), 0.5, epsilon = 0.001);
        assert_relative_eq!(table.sample(0.25), 0.25, epsilon = 0.001);
    }

    #[test]
    fn steep_curve_rises_early() {
        let table = CurveTable::try_new(3.0).unwrap();
        assert_relative_eq!(table.sample(0.5), 0.817_574_5, epsilon = 0.00002);
        assert!(table.sample(0.1) > 0.25);
    }
}
