use crate::error::Error;

/// The complete result of one distribute call.
///
/// Holds exactly `container_count` counts, indexed `0..container_count`,
/// with zero counts present rather than elided. A Distribution is created
/// fresh by each distribute call and is immutable thereafter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Distribution {
    counts: Vec<usize>,
}

impl Distribution {
    pub(crate) fn zeroed(container_count: usize) -> Self {
        Self {
            counts: vec![0; container_count],
        }
    }

    pub(crate) fn increment(&mut self, bucket: usize) {
        self.counts[bucket] += 1;
    }

    /// Build a distribution from raw per-container counts.
    ///
    /// Fails with [`Error::InvalidContainerCount`] if `counts` is empty.
    pub fn from_counts(counts: Vec<usize>) -> Result<Self, Error> {
        if counts.is_empty() {
            return Err(Error::InvalidContainerCount);
        }
        Ok(Self { counts })
    }

    /// Number of containers.
    pub fn container_count(&self) -> usize {
        self.counts.len()
    }

    /// Per-container counts, in ascending index order.
    pub fn counts(&self) -> &[usize] {
        &self.counts
    }

    /// The count for one container, if the index is in range.
    pub fn count(&self, index: usize) -> Option<usize> {
        self.counts.get(index).copied()
    }

    /// Total number of keys across all containers.
    pub fn total(&self) -> usize {
        self.counts.iter().sum()
    }

    /// The largest per-container count.
    pub fn max_count(&self) -> usize {
        self.counts.iter().copied().max().unwrap_or(0)
    }

    /// Iterate `(container index, count)` pairs in ascending index order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.counts.iter().copied().enumerate()
    }

    /// Index-wise sum of two distributions over the same container count.
    ///
    /// This is the merge step of the shard-the-keys scale-out strategy:
    /// partial distributions computed over disjoint slices of a key
    /// sequence combine into the distribution of the full sequence.
    pub fn merge(&self, other: &Distribution) -> Result<Distribution, Error> {
        if self.container_count() != other.container_count() {
            return Err(Error::ContainerCountMismatch);
        }
        let counts = self
            .counts
            .iter()
            .zip(&other.counts)
            .map(|(a, b)| a + b)
            .collect();
        Ok(Distribution { counts })
    }
}
