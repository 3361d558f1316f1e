//! # Lazy Registry
//!
//! In-memory registry mapping string names to constructible type handles.
//! "Lazy" because the registry never instantiates anything: it stores opaque
//! handles and returns them on lookup, and callers decide when (and whether)
//! to instantiate.
//!
//! ## Components
//!
//! - [`Registry`] - The core name-to-handle mapping, with a per-instance
//!   case-sensitivity policy fixed at construction
//! - [`RegistryItem`] - Trait stored items implement to derive their default
//!   registration name
//! - [`SharedRegistry`] - Synchronized wrapper for multi-threaded use
//! - [`RegistryError`] - Duplicate-key and not-found failures

pub mod error;
pub mod registry;
pub mod sync;

pub use error::RegistryError;
pub use registry::{Registry, RegistryItem};
pub use sync::SharedRegistry;
