//! Abstraction of raw input readings over time.

pub mod pot;
pub mod snapshot;
pub mod store;
