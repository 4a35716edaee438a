//! # KeySpread
//!
//! A hash-based key distribution analyzer with ASCII load visualization.
//!
//! KeySpread assigns each key of a collection to one of N logical
//! containers using a pluggable deterministic hash strategy, then renders
//! the per-container load as an aligned text histogram. Put a strong hash
//! next to a weak one and the skew is visible at a glance, the same way a
//! sharding or partitioning layer would reason about bucket load.
//!
//! ## Features
//!
//! - **Deterministic**: every built-in strategy uses fixed constants, so
//!   the same keys always produce the same distribution across runs
//! - **Pluggable**: choose a built-in strategy or supply your own
//! - **Introspectable**: per-container counts, load diagnostics, and
//!   collision grouping
//! - **Visual**: aligned ASCII histograms sized for a standard terminal
//! - **Thread-Friendly**: stateless call-and-return, safe from multiple
//!   threads without locking
//!
//! ## Example
//!
//! ```rust
//! use keyspread::{distribute, plot};
//!
//! let keys = ["apple", "banana", "cherry", "date", "apple"];
//! let dist = distribute(&keys, 4)?;
//!
//! // Every occurrence lands in a container; duplicates are not deduplicated.
//! assert_eq!(dist.total(), 5);
//!
//! // One line per container: `<index> <bar> (<count>)`.
//! plot(&dist);
//!
//! let diag = dist.diagnostics();
//! println!("max/mean load ratio: {:.2}", diag.max_load_ratio);
//! # Ok::<(), keyspread::Error>(())
//! ```
//!
//! ## Configuration
//!
//! ```rust
//! use keyspread::{DistributorBuilder, HashFunction};
//!
//! let distributor = DistributorBuilder::new()
//!     .container_count(8)?  // Must be greater than 0
//!     .hash_function(HashFunction::Positional)
//!     .build()?;
//! let dist = distributor.distribute(&["a", "b", "c"])?;
//! assert_eq!(dist.total(), 3);
//! # Ok::<(), keyspread::Error>(())
//! ```

#![deny(missing_docs)]
#![warn(clippy::all)]

/// Configuration and builder types.
pub mod config;
/// The Distribution result type.
pub mod distribution;
/// The Distributor and the distribute entry points.
pub mod distributor;
/// Error types.
pub mod error;
/// Hash strategy implementations.
pub mod hash;
/// Key canonicalization.
pub mod key;
/// Histogram rendering.
pub mod plot;
/// Diagnostics and collision inspection.
pub mod stats;

// Re-export main types
pub use config::{Config, DistributorBuilder, HashFunction, HashStrategy, StrategyConfig};
pub use distribution::Distribution;
pub use distributor::{distribute, distribute_with, Distributor};
pub use error::Error;
pub use hash::{fnv1a_hash, positional_hash};
pub use key::Key;
pub use plot::{plot, plot_with, write_plot, write_plot_with, PlotOptions};
pub use stats::{collision_groups, Diagnostics};
