//! Deterministic hash-based type identity.
//!
//! This module provides [`TypeHash`], a 64-bit hash identifying a loaded type.
//! Unlike sequential IDs handed out by a loader, hashes are computed
//! deterministically from qualified names, enabling:
//!
//! - Identity comparisons without a central registry
//! - No load-order dependencies
//! - Same name = same hash across hosts and calls
//!
//! # Hash Computation
//!
//! Uses XXHash64 over the name segments with domain-specific mixing constants,
//! so type hashes stay distinct from any other hash domain a host runtime
//! introduces later.
//!
//! # Examples
//!
//! ```
//! use typescan::TypeHash;
//!
//! let a = TypeHash::from_name("Game::Player");
//! let b = TypeHash::from_name("Game::Player");
//! assert_eq!(a, b);
//!
//! assert_ne!(TypeHash::from_name("Player"), TypeHash::from_name("Game::Player"));
//! ```

use std::fmt;

use xxhash_rust::xxh64::xxh64;

/// Domain-specific mixing constants for hash computation.
pub mod hash_constants {
    /// Separator constant mixed between qualified-name segments.
    pub const SEP: u64 = 0x6d1f3a94c25be087;

    /// Domain marker for type hashes.
    pub const TYPE: u64 = 0x81c7e52f0d94a36b;
}

/// A deterministic 64-bit hash identifying a loaded type.
///
/// Computed from the type's qualified name. The same name always produces the
/// same hash, so two independently-constructed handles for the same type
/// compare equal.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(transparent)]
pub struct TypeHash(pub u64);

impl TypeHash {
    /// Empty/invalid hash constant.
    pub const EMPTY: TypeHash = TypeHash(0);

    /// Create a type hash from a qualified type name.
    ///
    /// Namespace segments (separated by `::`) are mixed individually so that
    /// `"Game::Player"` and `"GamePlayer"` hash differently even though they
    /// contain the same characters.
    #[inline]
    pub fn from_name(name: &str) -> Self {
        let mut acc = hash_constants::TYPE;
        for segment in name.split("::") {
            acc = acc.rotate_left(17) ^ hash_constants::SEP ^ xxh64(segment.as_bytes(), 0);
        }
        TypeHash(acc)
    }

    /// Whether this is the empty/invalid hash.
    #[inline]
    pub fn is_empty(self) -> bool {
        self == Self::EMPTY
    }
}

impl fmt::Debug for TypeHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TypeHash({:#018x})", self.0)
    }
}

impl fmt::Display for TypeHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#018x}", self.0)
    }
}
