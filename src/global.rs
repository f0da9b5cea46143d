//! Initialize-once generator holder and the process-wide default instance

use once_cell::sync::OnceCell;

use crate::config::SnowflakeConfig;
use crate::error::SnowflakeError;
use crate::generator::SnowflakeGenerator;
use crate::id::Snowflake;

/// Holds at most one [`SnowflakeGenerator`], built on first use.
///
/// Concurrent first callers race on a single construction; every caller then
/// sees the same instance. The configuration of whichever call constructs the
/// generator wins for the holder's lifetime.
#[derive(Debug, Default)]
pub struct GeneratorCell {
    inner: OnceCell<SnowflakeGenerator>,
}

impl GeneratorCell {
    pub const fn new() -> Self {
        Self {
            inner: OnceCell::new(),
        }
    }

    /// Construct the generator from `config` unless one already exists.
    ///
    /// Returns the generator in use, which may carry a different configuration
    /// than the one passed here.
    pub fn initialize(&self, config: SnowflakeConfig) -> &SnowflakeGenerator {
        let mut constructed = false;
        let generator = self.inner.get_or_init(|| {
            constructed = true;
            SnowflakeGenerator::new(config)
        });

        log_initialize(constructed, &config, generator);
        generator
    }

    /// The generator, if already constructed
    pub fn get(&self) -> Option<&SnowflakeGenerator> {
        self.inner.get()
    }

    /// The generator, constructed with the default configuration if needed
    pub fn get_or_default(&self) -> &SnowflakeGenerator {
        match self.inner.get() {
            Some(generator) => generator,
            None => self.initialize(SnowflakeConfig::default()),
        }
    }

    /// Generate from the held generator, see [`SnowflakeGenerator::generate`]
    #[inline]
    pub fn generate(&self) -> Snowflake {
        self.get_or_default().generate()
    }

    /// Generate from the held generator, see [`SnowflakeGenerator::try_generate`]
    #[inline]
    pub fn try_generate(&self) -> Result<Snowflake, SnowflakeError> {
        self.get_or_default().try_generate()
    }
}

#[cfg(feature = "tracing")]
fn log_initialize(constructed: bool, config: &SnowflakeConfig, generator: &SnowflakeGenerator) {
    if constructed {
        tracing::debug!(
            epoch = config.epoch(),
            node_id = config.node_id(),
            "snowflake generator initialized"
        );
    } else if generator.config() != config {
        tracing::warn!(
            epoch = config.epoch(),
            node_id = config.node_id(),
            active_node_id = generator.node_id(),
            "snowflake generator already initialized, ignoring configuration"
        );
    }
}

#[cfg(not(feature = "tracing"))]
#[inline(always)]
fn log_initialize(_: bool, _: &SnowflakeConfig, _: &SnowflakeGenerator) {}

static GLOBAL: GeneratorCell = GeneratorCell::new();

/// Configure the process-wide generator. Only the first call has an effect.
pub fn init(config: SnowflakeConfig) -> &'static SnowflakeGenerator {
    GLOBAL.initialize(config)
}

/// The process-wide generator, default-configured on first use
pub fn global() -> &'static SnowflakeGenerator {
    GLOBAL.get_or_default()
}

/// Generate from the process-wide generator
#[inline]
pub fn generate() -> Snowflake {
    GLOBAL.generate()
}

/// Generate from the process-wide generator, reporting failures
#[inline]
pub fn try_generate() -> Result<Snowflake, SnowflakeError> {
    GLOBAL.try_generate()
}
