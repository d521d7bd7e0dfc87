//! Exponential moving average smoothening slowly changing controls.
//!
//! The filter is initialized lazily with the first sample it receives, so
//! the output does not ramp up from zero after startup.

/// State of a single filter instance.
#[derive(Default, Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct FilterState {
    pub current_output: f32,
    pub initialized: bool,
}

/// Advance the filter by one sample and return the new output.
///
/// Alpha is expected to be in range (0.0, 1.0]. The closer it is to zero,
/// the smoother and slower the output.
pub fn filter(raw: f32, state: &mut FilterState, alpha: f32) -> f32 {
    if !state.initialized {
        state.current_output = raw;
        state.initialized = true;
        return raw;
    }
    state.current_output += alpha * (raw - state.current_output);
    state.current_output
}

/// Filter instance owning its state and coefficient.
#[derive(Clone, Copy, Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SmoothingFilter {
    state: FilterState,
    alpha: f32,
}

impl SmoothingFilter {
    #[must_use]
    pub fn new(alpha: f32) -> Self {
        Self {
            state: FilterState::default(),
            alpha,
        }
    }

    pub fn tick(&mut self, raw: f32) -> f32 {
        filter(raw, &mut self.state, self.alpha)
    }

    #[must_use]
    pub fn value(&self) -> f32 {
        self.state.current_output
    }

    #[must_use]
    pub fn state(&self) -> FilterState {
        self.state
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_sample_passes_through_and_initializes_state() {
        let mut state = FilterState::default();
        assert_relative_eq!(filter(1234.0, &mut state, 0.06), 1234.0);
        assert!(state.initialized);
        assert_relative_eq!(state.current_output, 1234.0);
    }

    #[test]
    fn second_sample_moves_output_by_alpha_of_difference() {
        let mut state = FilterState::default();
        filter(100.0, &mut state, 0.25);
        assert_relative_eq!(filter(200.0, &mut state, 0.25), 125.0);
    }

    #[test]
    fn when_constant_input_is_written_output_converges_monotonically() {
        let mut filter = SmoothingFilter::new(0.06);
        filter.tick(0.0);

        let mut value = filter.value();
        for _ in 0..1000 {
            let new_value = filter.tick(65535.0);
            assert!(new_value >= value);
            value = new_value;
        }

        assert_relative_eq!(value, 65535.0, epsilon = 0.1);
    }

    #[test]
    fn alpha_of_one_follows_input_immediately() {
        let mut filter = SmoothingFilter::new(1.0);
        filter.tick(10.0);
        assert_relative_eq!(filter.tick(5000.0), 5000.0);
        assert_relative_eq!(filter.tick(3.0), 3.0);
    }
}
