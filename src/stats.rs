//! Distribution diagnostics and hash-quality inspection.

use crate::config::{create_hasher, HashFunction};
use crate::distribution::Distribution;
use crate::error::Error;
use crate::key::Key;
use hashbrown::HashMap;

/// Structured load summary for a [`Distribution`].
#[derive(Debug, Clone)]
pub struct Diagnostics {
    /// Total number of keys across all containers.
    pub total_keys: usize,
    /// Number of containers.
    pub container_count: usize,
    /// Smallest per-container count.
    pub min_count: usize,
    /// Largest per-container count.
    pub max_count: usize,
    /// Average load (keys) per container.
    pub mean_load: f64,
    /// Max load / mean load ratio. User interprets (e.g. threshold 2.0 for
    /// imbalance). 0.0 when the distribution holds no keys.
    pub max_load_ratio: f64,
    /// Number of containers that received no keys.
    pub empty_containers: usize,
}

impl Distribution {
    /// Compute a load summary for this distribution.
    pub fn diagnostics(&self) -> Diagnostics {
        let counts = self.counts();
        let total_keys = self.total();
        let container_count = self.container_count();
        let max_count = self.max_count();
        let mean_load = total_keys as f64 / container_count as f64;
        let max_load_ratio = if total_keys == 0 {
            0.0
        } else {
            max_count as f64 / mean_load
        };

        Diagnostics {
            total_keys,
            container_count,
            min_count: counts.iter().copied().min().unwrap_or(0),
            max_count,
            mean_load,
            max_load_ratio,
            empty_containers: counts.iter().filter(|&&count| count == 0).count(),
        }
    }
}

/// Group keys whose hash values collide under a built-in strategy.
///
/// Returns groups of input indices (two or more per group) whose keys hash
/// to the same value, ordered by first occurrence; indices within a group
/// are ascending. A weak strategy shows many groups where a
/// well-distributed one shows none.
pub fn collision_groups<K: Key>(
    keys: &[K],
    hash_function: HashFunction,
) -> Result<Vec<Vec<usize>>, Error> {
    let hasher = create_hasher(hash_function);

    let mut by_hash: HashMap<i64, Vec<usize>> = HashMap::new();
    for (index, key) in keys.iter().enumerate() {
        let hash = hasher.hash_canonical(&key.canonical()?);
        by_hash.entry(hash).or_default().push(index);
    }

    let mut groups: Vec<Vec<usize>> = by_hash
        .into_values()
        .filter(|group| group.len() >= 2)
        .collect();
    groups.sort_by_key(|group| group[0]);
    Ok(groups)
}
