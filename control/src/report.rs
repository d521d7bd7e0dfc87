//! Periodic human-readable reporting of the engine state.
//!
//! The engine exposes its state as a plain `Status` value. Once per second
//! the firmware renders it together with the measured loop rate into a
//! single line:
//!
//! ```text
//! CV=624.1/0.03V vol=1373 C=1373/0.02 L=0/0.00 R=0/0.00 Hz=10201
//! ```
//!
//! The same line can be parsed back by tooling collecting the log.

use core::fmt::Write;
use core::str::FromStr;

use heapless::String;

use plateau_dsp::plateau::{PlateauBoundaries, Zone};
use plateau_dsp::range::FULL_SCALE;
use plateau_dsp::resolver::{Modes, Resolution};

/// Reference voltage of the analog inputs.
const VREF: f32 = 3.3;

/// Enough to fit the line with all fields at their maximum.
pub const LINE_CAPACITY: usize = 128;

#[derive(Debug, Default, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Reading {
    pub raw: f32,
    pub filtered: f32,
}

/// Read-only view of the engine after the last iteration.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Status {
    pub primary: f32,
    pub position: Reading,
    pub center: Reading,
    pub left: Reading,
    pub right: Reading,
    pub modes: Modes,
    pub boundaries: PlateauBoundaries,
    pub resolution: Resolution,
}

/// Volume of one zone and the position of the primary sample within it.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ZoneReport {
    pub volume: u16,
    pub ratio: f32,
}

#[derive(Debug, Default, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Report {
    pub cv: f32,
    pub cv_volts: f32,
    pub volume: u16,
    pub center: ZoneReport,
    pub left: ZoneReport,
    pub right: ZoneReport,
    pub rate: u32,
}

impl Report {
    #[must_use]
    pub fn new(status: &Status, rate: u32) -> Self {
        let resolution = &status.resolution;
        let zone_report = |zone: Zone, volume: u16| {
            if resolution.zone == zone {
                ZoneReport {
                    volume,
                    ratio: resolution.ratio,
                }
            } else {
                ZoneReport::default()
            }
        };
        Self {
            cv: status.primary,
            cv_volts: status.primary / FULL_SCALE * VREF,
            volume: resolution.volume,
            center: zone_report(Zone::Center, resolution.volume_center),
            left: zone_report(Zone::Left, resolution.volume_left),
            right: zone_report(Zone::Right, resolution.volume_right),
            rate,
        }
    }

    #[must_use]
    pub fn render(&self) -> String<LINE_CAPACITY> {
        let mut line = String::new();
        // NOTE: The capacity is enough for the longest possible line, so
        // the write cannot fail.
        let _ = write!(
            line,
            "CV={:.1}/{:.2}V vol={} C={}/{:.2} L={}/{:.2} R={}/{:.2} Hz={}",
            self.cv,
            self.cv_volts,
            self.volume,
            self.center.volume,
            self.center.ratio,
            self.left.volume,
            self.left.ratio,
            self.right.volume,
            self.right.ratio,
            self.rate,
        );
        line
    }

    /// Recover a report from a rendered line.
    ///
    /// The line may carry an arbitrary prefix, such as a timestamp of the
    /// logger. Returns `None` if any of the fields is missing or malformed.
    #[must_use]
    pub fn parse(line: &str) -> Option<Self> {
        let start = line.find("CV=")?;
        let mut fields = line[start..].split_whitespace();

        let (cv, cv_volts) = split_pair(field(fields.next()?, "CV=")?.strip_suffix('V')?)?;
        let volume = parse(field(fields.next()?, "vol=")?)?;
        let center = zone_report(field(fields.next()?, "C=")?)?;
        let left = zone_report(field(fields.next()?, "L=")?)?;
        let right = zone_report(field(fields.next()?, "R=")?)?;
        let rate = parse(field(fields.next()?, "Hz=")?)?;

        Some(Self {
            cv,
            cv_volts,
            volume,
            center,
            left,
            right,
            rate,
        })
    }
}

fn field<'a>(token: &'a str, key: &str) -> Option<&'a str> {
    token.strip_prefix(key)
}

fn parse<T: FromStr>(value: &str) -> Option<T> {
    value.parse().ok()
}

fn split_pair<A: FromStr, B: FromStr>(value: &str) -> Option<(A, B)> {
    let (a, b) = value.split_once('/')?;
    Some((parse(a)?, parse(b)?))
}

fn zone_report(value: &str) -> Option<ZoneReport> {
    let (volume, ratio) = split_pair(value)?;
    Some(ZoneReport { volume, ratio })
}
