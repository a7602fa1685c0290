// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Composite primary keys.

/// Hash key plus range key.
///
/// ```rust
/// use fluent_dynamo_core::CompoundKey;
///
/// let key = CompoundKey::new("user#42", 1_700_000_000_u64);
/// assert_eq!(key.hash_key, "user#42");
/// let (hash, range) = key.into_parts();
/// assert_eq!((hash, range), ("user#42", 1_700_000_000));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CompoundKey<H, R> {
    /// Partition (hash) key.
    pub hash_key: H,

    /// Sort (range) key.
    pub range_key: R
}

impl<H, R> CompoundKey<H, R> {
    /// Create a key from its two parts.
    pub const fn new(hash_key: H, range_key: R) -> Self {
        Self {
            hash_key,
            range_key
        }
    }

    /// Split into `(hash_key, range_key)`.
    pub fn into_parts(self) -> (H, R) {
        (self.hash_key, self.range_key)
    }
}

impl<H, R> From<(H, R)> for CompoundKey<H, R> {
    fn from((hash_key, range_key): (H, R)) -> Self {
        Self::new(hash_key, range_key)
    }
}
