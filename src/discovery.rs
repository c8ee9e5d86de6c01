//! Assembly classification and assignability-based type discovery.
//!
//! This is the crate's core operation: given an interface or base type,
//! find every loaded type assignable to it.
//!
//! # Scan Order
//!
//! 1. Classify loaded assemblies into well-known roles by name.
//! 2. Scan the `Primary` role assembly's types, then `PrimaryFirstPass`.
//! 3. Only if both produced nothing: fall back to scanning every loaded
//!    assembly that is not dynamic and whose name does not contain `editor`
//!    (case-insensitive), in load order.
//!
//! Editor-role assemblies are never scanned. The target type itself is never
//! part of the result. Nothing is cached; every call derives its answer from
//! the snapshot it is handed.
//!
//! # Partial Load Failure
//!
//! An assembly whose strict enumeration fails still contributes its
//! successfully-loaded types. One broken assembly never suppresses matches
//! found elsewhere.
//!
//! # Examples
//!
//! ```
//! use typescan::{AssemblySet, ScriptAssembly, TypeInfo, discover_types};
//!
//! let event = TypeInfo::interface("IEvent");
//! let quit = TypeInfo::class("QuitEvent").implementing(&event);
//!
//! let set = AssemblySet::new()
//!     .with(ScriptAssembly::new("Assembly-CSharp").with_type(quit));
//!
//! let found = discover_types(&set, &event);
//! assert_eq!(found.len(), 1);
//! assert_eq!(found[0].name(), "QuitEvent");
//! ```

use rustc_hash::FxHashMap;

use crate::assembly::{AssemblyRole, AssemblySource, ScriptAssembly};
use crate::typeinfo::TypeInfo;

/// Substring marking an assembly as editor-only during the fallback scan.
const EDITOR_MARKER: &str = "editor";

/// Classify assemblies into well-known roles, keyed by exact name.
///
/// Each classified slot holds the assembly's recovered type list (the loaded
/// subset when strict enumeration fails). When two assemblies share a
/// well-known name, the later one wins the role slot; hosts that load
/// duplicate-named assemblies rely on that, so it is not corrected here.
pub fn classify_assemblies<'a, I>(assemblies: I) -> FxHashMap<AssemblyRole, &'a [TypeInfo]>
where
    I: IntoIterator<Item = &'a ScriptAssembly>,
{
    let mut by_role = FxHashMap::default();
    for assembly in assemblies {
        let Some(role) = AssemblyRole::of(assembly.name()) else {
            continue;
        };
        by_role.insert(role, recovered_types(assembly));
    }
    by_role
}

/// Find every loaded type assignable to `target`, excluding `target` itself.
///
/// Scans the `Primary` and `PrimaryFirstPass` role assemblies; when neither
/// yields a match, widens to all non-dynamic, non-editor assemblies. Result
/// order is assembly scan order, then type definition order within each
/// assembly.
pub fn discover_types<'a, S>(source: &'a S, target: &TypeInfo) -> Vec<&'a TypeInfo>
where
    S: AssemblySource + ?Sized,
{
    let assemblies = source.loaded_assemblies();
    let by_role = classify_assemblies(assemblies);

    let mut found = Vec::new();
    for role in [AssemblyRole::Primary, AssemblyRole::PrimaryFirstPass] {
        if let Some(&types) = by_role.get(&role) {
            collect_assignable(types, target, &mut found);
        }
    }

    if found.is_empty() {
        for assembly in assemblies {
            if assembly.is_dynamic() || is_editor_assembly(assembly.name()) {
                continue;
            }
            collect_assignable(recovered_types(assembly), target, &mut found);
        }
    }

    found
}

/// An assembly's types, tolerating partial load failure.
fn recovered_types(assembly: &ScriptAssembly) -> &[TypeInfo] {
    match assembly.defined_types() {
        Ok(types) => types,
        // Keep whatever did materialize.
        Err(_) => assembly.loaded_types(),
    }
}

fn collect_assignable<'a>(types: &'a [TypeInfo], target: &TypeInfo, out: &mut Vec<&'a TypeInfo>) {
    for ty in types {
        if ty.hash() != target.hash() && target.is_assignable_from(ty) {
            out.push(ty);
        }
    }
}

fn is_editor_assembly(name: &str) -> bool {
    name.to_ascii_lowercase().contains(EDITOR_MARKER)
}
