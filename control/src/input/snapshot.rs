//! Structures used to pass the current state of hardware peripherals.

/// The current state of all peripherals.
///
/// `Snapshot` is meant to be passed from the hardware binding to the
/// control package. Analog readings are normalized to range from 0.0 to
/// 1.0, switches are `true` when they select exponential response.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Snapshot {
    pub primary: f32,
    pub position: f32,
    pub center: f32,
    pub left: f32,
    pub right: f32,
    pub left_exponential: bool,
    pub right_exponential: bool,
}
