//! Components of user interface, passing readings to the shaping pipeline
//! and reporting its state back.
//!
//! It is mainly targetted to run in a firmware with a single control loop
//! polling all inputs as fast as possible. However, parts of it may be
//! useful in software as well.
//!
//! Following is the flow of a single iteration:
//!
//! ```text
//!  [CV] [Pots] [Switches]
//!    |     |       |
//!    +-----+-------+
//!          | (Snapshot)
//!          V
//!   [ Engine {Store} ] ----------> [ DAC ]
//!          |             (u16)
//!          | (Status)
//!          V
//!    [ RateMeter ] --> [ Report ] --> [ Log ]
//! ```

#![no_std]
#![allow(clippy::items_after_statements)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_lossless)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::cast_precision_loss)]

#[cfg(test)]
#[macro_use]
extern crate approx;

pub mod config;
pub mod engine;
pub mod input;
mod log;
pub mod port;
pub mod rate;
pub mod report;

pub use config::{Config, ConfigError};
pub use engine::Engine;
pub use input::snapshot::Snapshot;
pub use rate::RateMeter;
pub use report::{Report, Status};
