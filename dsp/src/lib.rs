//! Signal processing shaping the control voltage output.
//!
//! All of the components here are meant to run on every iteration of the
//! control loop, so they avoid allocation and transcendental functions.
//! The only expensive part, sampling of the exponential curve, is done once
//! on startup.
//!
//! ```text
//!  [ primary ]   [ position ] [ center ] [ left ] [ right ]
//!       |              |           |        |        |
//!       |              +------- ewma -------+--------+
//!       |              |           |        |        |
//!       |          [ plateau ]     |        |        |
//!       |              |           |        |        |
//!       +--------> [ resolver ] <--+--------+--------+
//!                      |     A
//!                      |     +---- [ shaping ] <-- [ curve ]
//!                      V
//!                 [ output ]
//! ```

#![no_std]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_lossless)]

#[cfg(test)]
#[macro_use]
extern crate approx;

pub mod curve;
pub mod ewma;
pub mod plateau;
pub mod range;
pub mod resolver;
pub mod shaping;
