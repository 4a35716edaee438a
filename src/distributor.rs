use crate::config::{create_hasher, Config, HashFunction, StrategyConfig};
use crate::distribution::Distribution;
use crate::error::Error;
use crate::hash::KeyHasher;
use crate::key::Key;

/// Assigns keys to containers with a deterministic hash strategy.
///
/// A Distributor holds a container count and a hash strategy; every
/// [`distribute`](Distributor::distribute) call consumes a key sequence and
/// produces a fresh [`Distribution`]. No state is shared or kept across
/// calls, so independent calls from multiple threads are safe without
/// locking.
///
/// # Example
///
/// ```rust
/// use keyspread::Distributor;
///
/// let distributor = Distributor::new(4)?;
/// let dist = distributor.distribute(&["alpha", "beta", "gamma"])?;
/// assert_eq!(dist.total(), 3);
/// # Ok::<(), keyspread::Error>(())
/// ```
pub struct Distributor {
    container_count: usize,
    hasher: KeyHasher,
    strategy: StrategyConfig,
}

impl Distributor {
    /// Create a distributor with the default strategy (FNV-1a).
    pub fn new(container_count: usize) -> Result<Self, Error> {
        Self::with_config(Config::default().container_count(container_count)?)
    }

    /// Create a distributor with custom config.
    pub fn with_config(config: Config) -> Result<Self, Error> {
        if config.container_count == 0 {
            return Err(Error::InvalidContainerCount);
        }

        Ok(Self {
            container_count: config.container_count,
            hasher: create_hasher(config.hash_function),
            strategy: config.strategy,
        })
    }

    /// Number of containers keys are spread across.
    pub fn container_count(&self) -> usize {
        self.container_count
    }

    /// Figure out which container this canonical form belongs to.
    #[inline]
    fn bucket_index(&self, canonical: &str) -> usize {
        let hash = match &self.strategy {
            StrategyConfig::Builtin => self.hasher.hash_canonical(canonical),
            StrategyConfig::Custom(strategy) => strategy.hash_key(canonical),
        };
        // rem_euclid keeps negative hashes in [0, container_count).
        hash.rem_euclid(self.container_count as i64) as usize
    }

    /// Distribute a key sequence across the containers.
    ///
    /// Keys are consumed in input order. Duplicates are not deduplicated;
    /// each occurrence contributes one unit to its bucket. An empty
    /// sequence yields an all-zero distribution. For fixed inputs and a
    /// fixed strategy the output is bit-for-bit reproducible.
    ///
    /// # Example
    ///
    /// ```rust
    /// use keyspread::Distributor;
    ///
    /// let distributor = Distributor::new(2)?;
    /// let dist = distributor.distribute(&["a", "b", "a"])?;
    /// assert_eq!(dist.total(), 3);
    /// assert_eq!(dist.container_count(), 2);
    /// # Ok::<(), keyspread::Error>(())
    /// ```
    pub fn distribute<K: Key>(&self, keys: &[K]) -> Result<Distribution, Error> {
        let mut distribution = Distribution::zeroed(self.container_count);
        for key in keys {
            let canonical = key.canonical()?;
            distribution.increment(self.bucket_index(&canonical));
        }
        Ok(distribution)
    }
}

/// Distribute keys across `container_count` containers with the default
/// FNV-1a strategy.
///
/// # Example
///
/// ```rust
/// let dist = keyspread::distribute(&["a", "b", "c"], 2)?;
/// assert_eq!(dist.total(), 3);
/// # Ok::<(), keyspread::Error>(())
/// ```
pub fn distribute<K: Key>(keys: &[K], container_count: usize) -> Result<Distribution, Error> {
    Distributor::new(container_count)?.distribute(keys)
}

/// Distribute keys with an explicitly chosen built-in strategy.
///
/// # Example
///
/// ```rust
/// use keyspread::HashFunction;
///
/// let dist = keyspread::distribute_with(&["a", "b", "c", "a"], 2, HashFunction::Positional)?;
/// assert_eq!(dist.counts(), &[1, 3]);
/// # Ok::<(), keyspread::Error>(())
/// ```
pub fn distribute_with<K: Key>(
    keys: &[K],
    container_count: usize,
    hash_function: HashFunction,
) -> Result<Distribution, Error> {
    let config = Config::new()
        .container_count(container_count)?
        .hash_function(hash_function);
    Distributor::with_config(config)?.distribute(keys)
}
