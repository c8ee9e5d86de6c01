//! Type discovery for scripting runtimes.
//!
//! Given an interface or base type, find every loaded type assignable to it,
//! scoped to the well-known game-code assemblies and widening to a fallback
//! scan only when the targeted scan comes up empty. Typical consumers are
//! event-bus bootstrapping and service auto-registration, which need "all
//! implementations of this interface" at startup.
//!
//! The host's module registry is injected as an [`AssemblySource`] snapshot,
//! and types are explicit [`TypeInfo`] metadata handles, so discovery is
//! deterministic and testable with synthetic assembly sets.
//!
//! # Example
//!
//! ```
//! use typescan::{AssemblySet, ScriptAssembly, TypeInfo, discover_types};
//!
//! let handler = TypeInfo::interface("IEventHandler");
//! let audio = TypeInfo::class("AudioHandler").implementing(&handler);
//! let input = TypeInfo::class("InputHandler").implementing(&handler);
//!
//! let set = AssemblySet::new().with(
//!     ScriptAssembly::new("Assembly-CSharp")
//!         .with_type(audio)
//!         .with_type(input),
//! );
//!
//! let found = discover_types(&set, &handler);
//! let names: Vec<_> = found.iter().map(|t| t.name()).collect();
//! assert_eq!(names, ["AudioHandler", "InputHandler"]);
//! ```

pub mod assembly;
pub mod discovery;
pub mod error;
pub mod type_hash;
pub mod typeinfo;

pub use assembly::{AssemblyRole, AssemblySet, AssemblySource, ScriptAssembly};
pub use discovery::{classify_assemblies, discover_types};
pub use error::{TypeLoadError, TypeLoadFailure};
pub use type_hash::TypeHash;
pub use typeinfo::{TypeInfo, TypeTraits};
