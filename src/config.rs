use crate::error::Error;
use crate::hash::KeyHasher;

/// Which built-in hash strategy to use for container assignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HashFunction {
    /// 64-bit FNV-1a (default, fixed constants, stable across runs).
    #[default]
    Fnv1a,
    /// SipHash-1-3 with fixed keys (well-distributed alternative).
    Sip,
    /// Positionally weighted character sum (weak, kept for contrasting skew).
    Positional,
    /// Use fxhash (faster but potentially less distributed).
    #[cfg(feature = "fxhash")]
    Fx,
}

/// User-provided hash strategy. Enables custom distribution experiments.
///
/// Implementations must be pure and deterministic for the lifetime of the
/// process. The returned value may be negative; the distributor normalizes
/// it into `[0, container_count)` with a euclidean remainder.
pub trait HashStrategy: Send + Sync {
    /// Hash the canonical form of a key.
    fn hash_key(&self, canonical: &str) -> i64;
}

/// Strategy selection for container assignment.
#[derive(Default)]
pub enum StrategyConfig {
    /// The built-in strategy chosen by [`Config::hash_function`].
    #[default]
    Builtin,
    /// User-provided strategy (e.g. to prototype a new hash).
    Custom(Box<dyn HashStrategy>),
}

impl std::fmt::Debug for StrategyConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StrategyConfig::Builtin => write!(f, "StrategyConfig::Builtin"),
            StrategyConfig::Custom(_) => write!(f, "StrategyConfig::Custom(...)"),
        }
    }
}

/// Configuration for a Distributor instance.
#[derive(Debug)]
pub struct Config {
    pub(crate) container_count: usize,
    pub(crate) hash_function: HashFunction,
    pub(crate) strategy: StrategyConfig,
}

impl Config {
    /// Create a new config with defaults (16 containers, FNV-1a).
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the number of containers. Must be greater than 0.
    pub fn container_count(mut self, count: usize) -> Result<Self, Error> {
        if count == 0 {
            return Err(Error::InvalidContainerCount);
        }
        self.container_count = count;
        Ok(self)
    }

    /// Set the built-in hash strategy to use.
    pub fn hash_function(mut self, hash_fn: HashFunction) -> Self {
        self.hash_function = hash_fn;
        self
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            container_count: 16,
            hash_function: HashFunction::Fnv1a,
            strategy: StrategyConfig::Builtin,
        }
    }
}

/// Builder for creating a Distributor with custom configuration.
pub struct DistributorBuilder {
    config: Config,
}

impl DistributorBuilder {
    /// Create a new builder with default configuration.
    pub fn new() -> Self {
        Self {
            config: Config::default(),
        }
    }

    /// Set the number of containers. Must be greater than 0.
    pub fn container_count(mut self, count: usize) -> Result<Self, Error> {
        self.config = self.config.container_count(count)?;
        Ok(self)
    }

    /// Set the built-in hash strategy to use.
    pub fn hash_function(mut self, hash_fn: HashFunction) -> Self {
        self.config = self.config.hash_function(hash_fn);
        self
    }

    /// Use a custom hash strategy (overrides the built-in selection).
    pub fn strategy(mut self, strategy: StrategyConfig) -> Self {
        self.config.strategy = strategy;
        self
    }

    /// Build a Distributor with the configured settings.
    pub fn build(self) -> Result<crate::Distributor, Error> {
        crate::Distributor::with_config(self.config)
    }
}

impl Default for DistributorBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Create a hash function instance based on the configuration.
pub(crate) fn create_hasher(hash_fn: HashFunction) -> KeyHasher {
    match hash_fn {
        HashFunction::Fnv1a => KeyHasher::Fnv1a,
        HashFunction::Sip => KeyHasher::Sip,
        HashFunction::Positional => KeyHasher::Positional,
        #[cfg(feature = "fxhash")]
        HashFunction::Fx => KeyHasher::Fx,
    }
}
