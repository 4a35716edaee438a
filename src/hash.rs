use crate::error::Error;
use crate::key::Key;
use siphasher::sip::SipHasher13;
use std::hash::Hasher;

/// Fixed SipHash-1-3 keys so hashes agree across runs and platforms.
const SIP_KEYS: (u64, u64) = (0x0706_0504_0302_0100, 0x0f0e_0d0c_0b0a_0908);

/// Hash strategy implementation for container assignment.
/// Uses an enum to avoid trait object limitations with generics.
pub enum KeyHasher {
    /// 64-bit FNV-1a (default, fixed constants, stable across runs).
    Fnv1a,
    /// SipHash-1-3 with fixed keys (well-distributed alternative).
    Sip,
    /// Positionally weighted character sum (weak, kept for contrast).
    Positional,
    /// FxHash implementation (faster but potentially less distributed).
    #[cfg(feature = "fxhash")]
    Fx,
}

impl KeyHasher {
    /// Hash the canonical form of a key.
    ///
    /// The 64-bit algorithms reinterpret their output as `i64`, so the
    /// result may be negative; bucket selection normalizes with
    /// `rem_euclid`, never the `%` remainder operator.
    pub fn hash_canonical(&self, canonical: &str) -> i64 {
        match self {
            KeyHasher::Fnv1a => fnv1a(canonical.as_bytes()) as i64,
            KeyHasher::Sip => {
                let mut hasher = SipHasher13::new_with_keys(SIP_KEYS.0, SIP_KEYS.1);
                hasher.write(canonical.as_bytes());
                hasher.finish() as i64
            }
            KeyHasher::Positional => positional(canonical),
            #[cfg(feature = "fxhash")]
            KeyHasher::Fx => {
                let mut hasher = fxhash::FxHasher::default();
                hasher.write(canonical.as_bytes());
                hasher.finish() as i64
            }
        }
    }
}

impl Default for KeyHasher {
    fn default() -> Self {
        KeyHasher::Fnv1a
    }
}

/// 64-bit FNV-1a over a byte slice.
fn fnv1a(data: &[u8]) -> u64 {
    let mut hash: u64 = 0xcbf2_9ce4_8422_2325;
    for &byte in data {
        hash ^= u64::from(byte);
        hash = hash.wrapping_mul(0x0100_0000_01b3);
    }
    hash
}

/// Positionally weighted character sum over a canonical form.
///
/// Drops a leading quote delimiter if present (the trailing one is kept),
/// then sums `position * code_point` over the remaining characters, with
/// 1-based positions and wrapping arithmetic.
fn positional(canonical: &str) -> i64 {
    let rest = canonical
        .strip_prefix('\'')
        .or_else(|| canonical.strip_prefix('"'))
        .unwrap_or(canonical);
    rest.chars().enumerate().fold(0i64, |acc, (i, ch)| {
        acc.wrapping_add((i as i64 + 1).wrapping_mul(ch as i64))
    })
}

/// Hash a key with the default 64-bit FNV-1a strategy.
pub fn fnv1a_hash<K: Key + ?Sized>(key: &K) -> Result<i64, Error> {
    Ok(fnv1a(key.canonical()?.as_bytes()) as i64)
}

/// Hash a key with the positionally weighted strategy.
///
/// Weak by construction (small outputs, frequent collisions), it exists to
/// demonstrate a poor hash next to a good one: `positional_hash(&"a")`
/// yields 175, `&"b"` 176, `&"c"` 177.
pub fn positional_hash<K: Key + ?Sized>(key: &K) -> Result<i64, Error> {
    Ok(positional(&key.canonical()?))
}
