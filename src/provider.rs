//! Client contract for registry access
//!
//! Transports (HTTP controllers, CLIs, test harnesses) program against the
//! [`Registry`] trait so the store stays decoupled from any particular
//! remote protocol. The trait owns the full operation surface; translating
//! its errors into transport-level status signaling is the transport's job.

use crate::descriptor::{ShellDescriptor, SubmodelDescriptor};
use crate::registry::DescriptorRegistry;
use crate::types::Identifier;
use crate::Result;

/// Operation surface a transport or controller layer invokes against a
/// descriptor registry
///
/// All operations are synchronous request/response; descriptors cross the
/// boundary by value in both directions.
pub trait Registry: Send + Sync {
    /// Register a new top-level shell
    fn register_shell(&self, descriptor: ShellDescriptor) -> Result<()>;

    /// Register a new top-level standalone submodel
    fn register_submodel(&self, descriptor: SubmodelDescriptor) -> Result<()>;

    /// Look up a shell by identifier
    fn lookup_shell(&self, identifier: &Identifier) -> Result<ShellDescriptor>;

    /// Look up a standalone submodel by identifier
    fn lookup_submodel(&self, identifier: &Identifier) -> Result<SubmodelDescriptor>;

    /// Snapshot of all registered shells; order is unspecified
    fn lookup_all_shells(&self) -> Vec<ShellDescriptor>;

    /// Snapshot of all standalone submodels; order is unspecified
    fn lookup_all_submodels(&self) -> Vec<SubmodelDescriptor>;

    /// Replace the shell registered under `identifier` wholesale
    fn update_shell(&self, identifier: &Identifier, descriptor: ShellDescriptor) -> Result<()>;

    /// Replace the standalone submodel registered under `identifier` wholesale
    fn update_submodel(
        &self,
        identifier: &Identifier,
        descriptor: SubmodelDescriptor,
    ) -> Result<()>;

    /// Remove a shell and its entire nested submodel collection
    fn delete_shell(&self, identifier: &Identifier) -> Result<()>;

    /// Remove a standalone submodel
    fn delete_submodel(&self, identifier: &Identifier) -> Result<()>;

    /// Add a submodel to an existing shell's nested collection
    fn register_submodel_for_shell(
        &self,
        shell_identifier: &Identifier,
        descriptor: SubmodelDescriptor,
    ) -> Result<()>;

    /// Look up a nested submodel of a shell
    fn lookup_submodel_for_shell(
        &self,
        shell_identifier: &Identifier,
        submodel_identifier: &Identifier,
    ) -> Result<SubmodelDescriptor>;

    /// Snapshot of a shell's nested submodel collection
    fn lookup_all_submodels_for_shell(
        &self,
        shell_identifier: &Identifier,
    ) -> Result<Vec<SubmodelDescriptor>>;

    /// Replace the nested submodel keyed by the descriptor's identifier
    fn update_submodel_for_shell(
        &self,
        shell_identifier: &Identifier,
        descriptor: SubmodelDescriptor,
    ) -> Result<()>;

    /// Remove a submodel from a shell's nested collection
    fn delete_submodel_from_shell(
        &self,
        shell_identifier: &Identifier,
        submodel_identifier: &Identifier,
    ) -> Result<()>;
}

impl Registry for DescriptorRegistry {
    fn register_shell(&self, descriptor: ShellDescriptor) -> Result<()> {
        DescriptorRegistry::register_shell(self, descriptor)
    }

    fn register_submodel(&self, descriptor: SubmodelDescriptor) -> Result<()> {
        DescriptorRegistry::register_submodel(self, descriptor)
    }

    fn lookup_shell(&self, identifier: &Identifier) -> Result<ShellDescriptor> {
        DescriptorRegistry::lookup_shell(self, identifier)
    }

    fn lookup_submodel(&self, identifier: &Identifier) -> Result<SubmodelDescriptor> {
        DescriptorRegistry::lookup_submodel(self, identifier)
    }

    fn lookup_all_shells(&self) -> Vec<ShellDescriptor> {
        DescriptorRegistry::lookup_all_shells(self)
    }

    fn lookup_all_submodels(&self) -> Vec<SubmodelDescriptor> {
        DescriptorRegistry::lookup_all_submodels(self)
    }

    fn update_shell(&self, identifier: &Identifier, descriptor: ShellDescriptor) -> Result<()> {
        DescriptorRegistry::update_shell(self, identifier, descriptor)
    }

    fn update_submodel(
        &self,
        identifier: &Identifier,
        descriptor: SubmodelDescriptor,
    ) -> Result<()> {
        DescriptorRegistry::update_submodel(self, identifier, descriptor)
    }

    fn delete_shell(&self, identifier: &Identifier) -> Result<()> {
        DescriptorRegistry::delete_shell(self, identifier)
    }

    fn delete_submodel(&self, identifier: &Identifier) -> Result<()> {
        DescriptorRegistry::delete_submodel(self, identifier)
    }

    fn register_submodel_for_shell(
        &self,
        shell_identifier: &Identifier,
        descriptor: SubmodelDescriptor,
    ) -> Result<()> {
        DescriptorRegistry::register_submodel_for_shell(self, shell_identifier, descriptor)
    }

    fn lookup_submodel_for_shell(
        &self,
        shell_identifier: &Identifier,
        submodel_identifier: &Identifier,
    ) -> Result<SubmodelDescriptor> {
        DescriptorRegistry::lookup_submodel_for_shell(self, shell_identifier, submodel_identifier)
    }

    fn lookup_all_submodels_for_shell(
        &self,
        shell_identifier: &Identifier,
    ) -> Result<Vec<SubmodelDescriptor>> {
        DescriptorRegistry::lookup_all_submodels_for_shell(self, shell_identifier)
    }

    fn update_submodel_for_shell(
        &self,
        shell_identifier: &Identifier,
        descriptor: SubmodelDescriptor,
    ) -> Result<()> {
        DescriptorRegistry::update_submodel_for_shell(self, shell_identifier, descriptor)
    }

    fn delete_submodel_from_shell(
        &self,
        shell_identifier: &Identifier,
        submodel_identifier: &Identifier,
    ) -> Result<()> {
        DescriptorRegistry::delete_submodel_from_shell(self, shell_identifier, submodel_identifier)
    }
}
