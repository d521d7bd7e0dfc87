//! The main interface for the control loop.

use plateau_dsp::curve::CurveTable;
use plateau_dsp::plateau::PlateauBoundaries;
use plateau_dsp::resolver::{resolve, Input, Resolution};

use crate::config::{Config, ConfigError};
use crate::input::snapshot::Snapshot;
use crate::input::store::Store;
use crate::log;
use crate::report::{Reading, Status};

/// Shaping engine turning input snapshots into the output value.
///
/// Call `tick` once per iteration of the control loop. Within a tick, pots
/// are smoothened first, then the plateau is placed, and only then the
/// primary sample is resolved, so every stage sees values of the current
/// iteration.
#[derive(Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Engine {
    config: Config,
    half_width: f32,
    table: CurveTable,
    store: Store,
    boundaries: PlateauBoundaries,
    resolution: Resolution,
}

impl Engine {
    /// Validate the configuration and build the curve table.
    ///
    /// # Errors
    ///
    /// Fails when any of the configuration fields is out of range. The
    /// engine cannot be started in that case.
    pub fn try_new(config: Config) -> Result<Self, ConfigError> {
        if let Err(error) = config.validate() {
            log::info!("Rejected configuration: {}", error);
            return Err(error);
        }
        let table = CurveTable::try_new(config.steepness)?;

        log::info!("Starting engine with {}", config);

        Ok(Self {
            config,
            half_width: config.half_width(),
            table,
            store: Store::new(config.alpha),
            boundaries: PlateauBoundaries::default(),
            resolution: Resolution::default(),
        })
    }

    /// Process one iteration and return the output value.
    pub fn tick(&mut self, snapshot: Snapshot) -> u16 {
        self.store.update(snapshot);
        self.boundaries =
            PlateauBoundaries::partition(self.store.position.value(), self.half_width);
        self.resolution = resolve(&self.input(), &self.table, self.config.strategy);
        self.resolution.volume
    }

    /// Resolve the current state again without advancing the filters.
    #[must_use]
    pub fn resolve_frozen(&self) -> Resolution {
        resolve(&self.input(), &self.table, self.config.strategy)
    }

    #[must_use]
    pub fn volume(&self) -> u16 {
        self.resolution.volume
    }

    #[must_use]
    pub fn config(&self) -> &Config {
        &self.config
    }

    #[must_use]
    pub fn boundaries(&self) -> PlateauBoundaries {
        self.boundaries
    }

    /// Read-only snapshot of the state for diagnostics.
    #[must_use]
    pub fn status(&self) -> Status {
        let reading = |pot: &crate::input::pot::Pot| Reading {
            raw: pot.value_raw(),
            filtered: pot.value(),
        };
        Status {
            primary: self.store.primary,
            position: reading(&self.store.position),
            center: reading(&self.store.center),
            left: reading(&self.store.left),
            right: reading(&self.store.right),
            modes: self.store.modes,
            boundaries: self.boundaries,
            resolution: self.resolution,
        }
    }

    fn input(&self) -> Input {
        Input {
            primary: self.store.primary,
            boundaries: self.boundaries,
            levels: self.store.levels(),
            modes: self.store.modes,
        }
    }
}
