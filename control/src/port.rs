//! Interface of the peripheral receiving the output.
//!
//! The engine itself does not know where the output goes. Hardware bindings
//! implement this trait, tests and simulations can pass closures.

/// Destination of the final output.
pub trait OutputSink {
    fn write_u16(&mut self, value: u16);
}

impl<F: FnMut(u16)> OutputSink for F {
    fn write_u16(&mut self, value: u16) {
        self(value);
    }
}
