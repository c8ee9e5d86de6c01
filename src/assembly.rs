//! Loaded assemblies, well-known role classification, and enumeration.
//!
//! A [`ScriptAssembly`] is a named unit of loaded code exposing the types it
//! defines. A handful of assembly names are "well known" to the scripting
//! runtime and map to an [`AssemblyRole`]; everything else is role-less but
//! still visible to the fallback scan in [`crate::discovery`].
//!
//! The host's module registry is abstracted as [`AssemblySource`], so
//! discovery runs against an explicit, read-only snapshot instead of ambient
//! process state. [`AssemblySet`] is the in-memory implementation used by
//! hosts and tests.

use crate::error::{TypeLoadError, TypeLoadFailure};
use crate::typeinfo::TypeInfo;

/// Well-known role of a loaded script assembly.
///
/// Determined purely by exact, case-sensitive assembly name. Not every
/// assembly has a role; unknown names are simply role-less.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AssemblyRole {
    /// The `Assembly-CSharp-firstpass` assembly (early-compiled game code).
    PrimaryFirstPass,
    /// The `Assembly-CSharp-Editor-firstpass` assembly.
    EditorFirstPass,
    /// The `Assembly-CSharp` assembly (main game code).
    Primary,
    /// The `Assembly-CSharp-Editor` assembly.
    Editor,
}

impl AssemblyRole {
    /// Classify an assembly name against the fixed well-known table.
    ///
    /// Exact match only: no normalization, no partial matching. Returns
    /// `None` for any name outside the table, including case variants.
    pub fn of(name: &str) -> Option<AssemblyRole> {
        match name {
            "Assembly-CSharp-firstpass" => Some(AssemblyRole::PrimaryFirstPass),
            "Assembly-CSharp-Editor-firstpass" => Some(AssemblyRole::EditorFirstPass),
            "Assembly-CSharp" => Some(AssemblyRole::Primary),
            "Assembly-CSharp-Editor" => Some(AssemblyRole::Editor),
            _ => None,
        }
    }

    /// The assembly name this role classifies.
    pub fn assembly_name(self) -> &'static str {
        match self {
            AssemblyRole::PrimaryFirstPass => "Assembly-CSharp-firstpass",
            AssemblyRole::EditorFirstPass => "Assembly-CSharp-Editor-firstpass",
            AssemblyRole::Primary => "Assembly-CSharp",
            AssemblyRole::Editor => "Assembly-CSharp-Editor",
        }
    }
}

/// A loaded, named unit of code and the types it defines.
///
/// Type order is insertion order and is observable in discovery results.
/// Types that failed to materialize at load time are kept as
/// [`TypeLoadFailure`] records rather than holes in the type list.
#[derive(Debug, Clone)]
pub struct ScriptAssembly {
    name: String,
    dynamic: bool,
    types: Vec<TypeInfo>,
    failures: Vec<TypeLoadFailure>,
}

impl ScriptAssembly {
    /// Create an empty assembly.
    pub fn new(name: impl Into<String>) -> Self {
        ScriptAssembly {
            name: name.into(),
            dynamic: false,
            types: Vec::new(),
            failures: Vec::new(),
        }
    }

    /// Create an empty dynamically-emitted assembly.
    ///
    /// Dynamic assemblies are never part of the fallback scan.
    pub fn dynamic(name: impl Into<String>) -> Self {
        ScriptAssembly {
            dynamic: true,
            ..Self::new(name)
        }
    }

    /// Add a defined type (chaining).
    pub fn with_type(mut self, ty: TypeInfo) -> Self {
        self.types.push(ty);
        self
    }

    /// Record a type that failed to load (chaining).
    pub fn with_failure(mut self, type_name: &str, reason: &str) -> Self {
        self.failures.push(TypeLoadFailure::new(type_name, reason));
        self
    }

    /// Add a defined type.
    pub fn define_type(&mut self, ty: TypeInfo) {
        self.types.push(ty);
    }

    /// Record a type that failed to load.
    pub fn record_failure(&mut self, failure: TypeLoadFailure) {
        self.failures.push(failure);
    }

    /// The assembly's name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Whether this assembly was emitted at runtime.
    #[inline]
    pub fn is_dynamic(&self) -> bool {
        self.dynamic
    }

    /// The assembly's well-known role, if its name has one.
    pub fn role(&self) -> Option<AssemblyRole> {
        AssemblyRole::of(&self.name)
    }

    /// Strict enumeration of the assembly's defined types.
    ///
    /// Errors if any type in the assembly failed to load; use
    /// [`loaded_types`](Self::loaded_types) to recover the subset that did.
    pub fn defined_types(&self) -> Result<&[TypeInfo], TypeLoadError> {
        if self.failures.is_empty() {
            Ok(&self.types)
        } else {
            Err(TypeLoadError {
                assembly: self.name.clone(),
                loaded: self.types.len(),
                failures: self.failures.clone(),
            })
        }
    }

    /// The successfully-loaded subset of defined types. Always available.
    pub fn loaded_types(&self) -> &[TypeInfo] {
        &self.types
    }
}

/// Injected capability over the host's currently loaded assemblies.
///
/// Implementations hand out a read-only snapshot; enumeration order is the
/// host's load order and carries through to discovery results. Concurrent
/// read safety is the host's concern, not this crate's.
pub trait AssemblySource {
    /// Snapshot of all currently loaded assemblies, in load order.
    fn loaded_assemblies(&self) -> &[ScriptAssembly];
}

/// In-memory [`AssemblySource`] preserving insertion order.
#[derive(Debug, Clone, Default)]
pub struct AssemblySet {
    assemblies: Vec<ScriptAssembly>,
}

impl AssemblySet {
    /// Create an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Load an assembly at the end of the set.
    pub fn load(&mut self, assembly: ScriptAssembly) {
        self.assemblies.push(assembly);
    }

    /// Load an assembly (chaining).
    pub fn with(mut self, assembly: ScriptAssembly) -> Self {
        self.load(assembly);
        self
    }

    /// Number of loaded assemblies.
    pub fn len(&self) -> usize {
        self.assemblies.len()
    }

    /// Whether no assemblies are loaded.
    pub fn is_empty(&self) -> bool {
        self.assemblies.is_empty()
    }
}

impl AssemblySource for AssemblySet {
    fn loaded_assemblies(&self) -> &[ScriptAssembly] {
        &self.assemblies
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_table_exact_names() {
        assert_eq!(
            AssemblyRole::of("Assembly-CSharp-firstpass"),
            Some(AssemblyRole::PrimaryFirstPass)
        );
        assert_eq!(
            AssemblyRole::of("Assembly-CSharp-Editor-firstpass"),
            Some(AssemblyRole::EditorFirstPass)
        );
        assert_eq!(AssemblyRole::of("Assembly-CSharp"), Some(AssemblyRole::Primary));
        assert_eq!(
            AssemblyRole::of("Assembly-CSharp-Editor"),
            Some(AssemblyRole::Editor)
        );
    }

    #[test]
    fn role_table_rejects_near_misses() {
        // Case variants.
        assert_eq!(AssemblyRole::of("assembly-csharp"), None);
        assert_eq!(AssemblyRole::of("ASSEMBLY-CSHARP"), None);
        // Substrings and extensions.
        assert_eq!(AssemblyRole::of("Assembly-CSharp.dll"), None);
        assert_eq!(AssemblyRole::of("Assembly-CSharp-Editor-extra"), None);
        assert_eq!(AssemblyRole::of("CSharp"), None);
        // Whitespace.
        assert_eq!(AssemblyRole::of(" Assembly-CSharp"), None);
        assert_eq!(AssemblyRole::of(""), None);
    }

    #[test]
    fn role_name_round_trips() {
        for role in [
            AssemblyRole::PrimaryFirstPass,
            AssemblyRole::EditorFirstPass,
            AssemblyRole::Primary,
            AssemblyRole::Editor,
        ] {
            assert_eq!(AssemblyRole::of(role.assembly_name()), Some(role));
        }
    }

    #[test]
    fn defined_types_ok_without_failures() {
        let assembly = ScriptAssembly::new("GameLib").with_type(TypeInfo::class("Player"));
        let types = assembly.defined_types().unwrap();
        assert_eq!(types.len(), 1);
        assert_eq!(types[0].name(), "Player");
    }

    #[test]
    fn defined_types_errors_on_partial_failure() {
        let assembly = ScriptAssembly::new("GameLib")
            .with_type(TypeInfo::class("Player"))
            .with_failure("Broken", "missing dependency");

        let err = assembly.defined_types().unwrap_err();
        assert_eq!(err.assembly, "GameLib");
        assert_eq!(err.loaded, 1);
        assert_eq!(err.failures.len(), 1);

        // The loaded subset stays reachable.
        assert_eq!(assembly.loaded_types().len(), 1);
    }

    #[test]
    fn dynamic_flag() {
        assert!(ScriptAssembly::dynamic("Scripts.Emitted").is_dynamic());
        assert!(!ScriptAssembly::new("GameLib").is_dynamic());
    }

    #[test]
    fn set_preserves_load_order() {
        let set = AssemblySet::new()
            .with(ScriptAssembly::new("A"))
            .with(ScriptAssembly::new("B"));
        let names: Vec<_> = set.loaded_assemblies().iter().map(|a| a.name()).collect();
        assert_eq!(names, ["A", "B"]);
        assert_eq!(set.len(), 2);
        assert!(!set.is_empty());
    }
}
