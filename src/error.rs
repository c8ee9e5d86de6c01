//! Error types for assembly type enumeration.
//!
//! The only failure this crate models is partial type-load failure inside a
//! single assembly. Unknown assembly names and empty discovery results are
//! ordinary outcomes, not errors.

use thiserror::Error;

/// Record of a single type that could not be materialized while loading an
/// assembly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeLoadFailure {
    /// Qualified name of the type that failed to load.
    pub type_name: String,
    /// Host-provided reason, e.g. a missing dependency.
    pub reason: String,
}

impl TypeLoadFailure {
    /// Create a failure record.
    pub fn new(type_name: impl Into<String>, reason: impl Into<String>) -> Self {
        TypeLoadFailure {
            type_name: type_name.into(),
            reason: reason.into(),
        }
    }
}

/// Partial failure while enumerating an assembly's defined types.
///
/// Raised by [`ScriptAssembly::defined_types`](crate::ScriptAssembly::defined_types)
/// when at least one type in the assembly failed to load. The types that did
/// load stay reachable through
/// [`ScriptAssembly::loaded_types`](crate::ScriptAssembly::loaded_types), which
/// is how the discovery scan recovers instead of aborting.
#[derive(Debug, Clone, Error)]
#[error("assembly '{assembly}': {} defined types failed to load ({loaded} loaded)", .failures.len())]
pub struct TypeLoadError {
    /// Name of the assembly whose enumeration failed.
    pub assembly: String,
    /// Number of types that loaded successfully.
    pub loaded: usize,
    /// Per-type failure records.
    pub failures: Vec<TypeLoadFailure>,
}
