mod dac;

pub use self::dac::{Channel as DacChannel, Dac};

pub struct Outputs {
    pub dac: Dac,
}

pub struct Config {
    pub dac: DacChannel,
}

impl Outputs {
    pub(crate) fn new(config: Config) -> Self {
        Self {
            dac: Dac::new(config.dac),
        }
    }
}
