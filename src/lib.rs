//! Transport-agnostic descriptor registry for Asset Administration Shells
//!
//! This crate provides the core registry logic mapping stable identifiers to
//! network-reachable endpoint descriptors for two entity kinds: shells
//! (top-level digital-twin instances) and submodels (sub-components that may
//! exist standalone or nested inside a shell). It is not coupled to any
//! specific transport (REST, OPC UA, CLI, test harness); transports program
//! against the [`Registry`] trait to expose the store remotely.

pub mod config;
pub mod descriptor;
pub mod provider;
pub mod registry;
pub mod types;

pub use config::{load_config, ConfigError, RegistryConfig};
pub use descriptor::{ShellDescriptor, SubmodelDescriptor};
pub use provider::Registry;
pub use registry::DescriptorRegistry;
pub use types::{Endpoint, Identifier, IdentifierType};

/// Crate version from Cargo.toml
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[derive(Debug, thiserror::Error)]
pub enum RegistryError {
    /// No entry for the identifier in the targeted collection.
    #[error("Descriptor not found: {0}")]
    NotFound(String),

    /// The identifier (or, for nested submodels, the idShort) already
    /// denotes an existing entry in the checked scope.
    #[error("Descriptor already registered: {0}")]
    DuplicateIdentifier(String),

    /// Structurally invalid descriptor, e.g. an empty identifier or an
    /// empty endpoint list.
    #[error("Malformed descriptor: {0}")]
    MalformedDescriptor(String),
}

pub type Result<T> = std::result::Result<T, RegistryError>;
