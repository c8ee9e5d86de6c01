//! Type metadata handles and assignability queries.
//!
//! [`TypeInfo`] is the crate's `Type`-like abstraction: a self-contained
//! metadata record for one loaded type. Ancestry is flattened at construction
//! time, so assignability checks are direct set lookups with no registry or
//! loader round-trips.
//!
//! # Examples
//!
//! ```
//! use typescan::{TypeInfo, TypeTraits};
//!
//! let drawable = TypeInfo::interface("IDrawable");
//! let shape = TypeInfo::class("Shape").implementing(&drawable);
//! let circle = TypeInfo::class("Circle").deriving(&shape);
//!
//! assert!(circle.derives_from(&shape));
//! assert!(circle.implements(&drawable));
//! assert!(drawable.is_assignable_from(&circle));
//! ```

use bitflags::bitflags;
use rustc_hash::FxHashSet;

use crate::type_hash::TypeHash;

bitflags! {
    /// Metadata flags describing a loaded type.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct TypeTraits: u32 {
        /// Interface type; never instantiated directly.
        const INTERFACE = 1 << 0;
        /// Abstract class; instantiable only through a derived type.
        const ABSTRACT = 1 << 1;
        /// Sealed class; cannot be derived from.
        const SEALED = 1 << 2;
        /// Value type.
        const VALUE_TYPE = 1 << 3;
    }
}

/// Metadata handle for one loaded type.
///
/// Carries the type's deterministic hash identity, its traits, and the
/// flattened transitive sets of base classes and implemented interfaces.
/// Parent handles are absorbed when the type is constructed, which is what
/// makes [`is_assignable_from`](TypeInfo::is_assignable_from) a pure lookup.
#[derive(Debug, Clone)]
pub struct TypeInfo {
    hash: TypeHash,
    name: String,
    traits: TypeTraits,
    /// All transitive base classes, by hash.
    bases: FxHashSet<TypeHash>,
    /// All implemented interfaces, by hash, including those inherited
    /// through base classes and super-interfaces.
    interfaces: FxHashSet<TypeHash>,
}

impl TypeInfo {
    /// Create a handle with explicit traits.
    pub fn with_traits(name: impl Into<String>, traits: TypeTraits) -> Self {
        let name = name.into();
        TypeInfo {
            hash: TypeHash::from_name(&name),
            name,
            traits,
            bases: FxHashSet::default(),
            interfaces: FxHashSet::default(),
        }
    }

    /// Create a class handle.
    pub fn class(name: impl Into<String>) -> Self {
        Self::with_traits(name, TypeTraits::empty())
    }

    /// Create an interface handle.
    pub fn interface(name: impl Into<String>) -> Self {
        Self::with_traits(name, TypeTraits::INTERFACE)
    }

    /// Record `base` as this type's base class, absorbing its full ancestry.
    pub fn deriving(mut self, base: &TypeInfo) -> Self {
        self.bases.insert(base.hash);
        self.bases.extend(&base.bases);
        self.interfaces.extend(&base.interfaces);
        self
    }

    /// Record `interface` as implemented, absorbing its super-interfaces.
    ///
    /// Interfaces extend other interfaces through the same call.
    pub fn implementing(mut self, interface: &TypeInfo) -> Self {
        self.interfaces.insert(interface.hash);
        self.interfaces.extend(&interface.interfaces);
        self
    }

    /// The type's hash identity.
    #[inline]
    pub fn hash(&self) -> TypeHash {
        self.hash
    }

    /// The type's qualified name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The type's metadata flags.
    pub fn traits(&self) -> TypeTraits {
        self.traits
    }

    /// Whether this handle describes an interface.
    #[inline]
    pub fn is_interface(&self) -> bool {
        self.traits.contains(TypeTraits::INTERFACE)
    }

    /// Whether this type derives (transitively) from `other`.
    pub fn derives_from(&self, other: &TypeInfo) -> bool {
        self.bases.contains(&other.hash)
    }

    /// Whether this type implements the interface `other`, directly or
    /// through a base class or super-interface.
    pub fn implements(&self, other: &TypeInfo) -> bool {
        other.is_interface() && self.interfaces.contains(&other.hash)
    }

    /// Whether a value of type `other` can be treated as a value of `self`.
    ///
    /// True when the two are the same type, when `other` derives from `self`,
    /// or when `self` is an interface that `other` implements.
    pub fn is_assignable_from(&self, other: &TypeInfo) -> bool {
        if other.hash == self.hash {
            return true;
        }
        if other.derives_from(self) {
            return true;
        }
        if self.is_interface() && other.implements(self) {
            return true;
        }
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn derivation_is_transitive() {
        let grandparent = TypeInfo::class("Grandparent");
        let parent = TypeInfo::class("Parent").deriving(&grandparent);
        let child = TypeInfo::class("Child").deriving(&parent);

        assert!(child.derives_from(&parent));
        assert!(child.derives_from(&grandparent));
        assert!(!grandparent.derives_from(&child));
    }

    #[test]
    fn interfaces_inherited_through_base_class() {
        let drawable = TypeInfo::interface("IDrawable");
        let shape = TypeInfo::class("Shape").implementing(&drawable);
        let circle = TypeInfo::class("Circle").deriving(&shape);

        assert!(circle.implements(&drawable));
        assert!(drawable.is_assignable_from(&circle));
    }

    #[test]
    fn super_interfaces_absorbed() {
        let base_iface = TypeInfo::interface("IEvent");
        let sub_iface = TypeInfo::interface("ICancellableEvent").implementing(&base_iface);
        let handler = TypeInfo::class("QuitEvent").implementing(&sub_iface);

        assert!(handler.implements(&sub_iface));
        assert!(handler.implements(&base_iface));
        assert!(base_iface.is_assignable_from(&handler));
    }

    #[test]
    fn implements_requires_interface_target() {
        let shape = TypeInfo::class("Shape");
        let circle = TypeInfo::class("Circle").deriving(&shape);

        // Class ancestry is not interface implementation.
        assert!(!circle.implements(&shape));
        assert!(shape.is_assignable_from(&circle));
    }

    #[test]
    fn assignable_from_self() {
        let shape = TypeInfo::class("Shape");
        assert!(shape.is_assignable_from(&shape.clone()));
    }

    #[test]
    fn unrelated_types_not_assignable() {
        let shape = TypeInfo::class("Shape");
        let sound = TypeInfo::class("Sound");
        assert!(!shape.is_assignable_from(&sound));
    }

    #[test]
    fn traits_are_preserved() {
        let ty = TypeInfo::with_traits("Vec3", TypeTraits::VALUE_TYPE | TypeTraits::SEALED);
        assert!(ty.traits().contains(TypeTraits::VALUE_TYPE));
        assert!(!ty.is_interface());
    }
}
