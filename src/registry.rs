//! Descriptor registry store

use crate::descriptor::{ShellDescriptor, SubmodelDescriptor};
use crate::types::Identifier;
use crate::{RegistryError, Result};
use log::{debug, info, warn};
use std::collections::HashMap;
use std::sync::RwLock;

/// In-memory descriptor store enforcing the registry invariants
///
/// Maintains two disjoint top-level namespaces (shells and standalone
/// submodels) plus each shell's nested submodel collection. Every mutating
/// operation runs its existence/duplicate checks and the mutation under one
/// write lock, so concurrent callers never observe a partially-applied
/// state. Lookups clone entries out; no descriptor is shared by reference
/// with a caller.
pub struct DescriptorRegistry {
    state: RwLock<RegistryState>,
}

#[derive(Default)]
struct RegistryState {
    /// Registered shells (identifier -> descriptor)
    shells: HashMap<Identifier, ShellDescriptor>,

    /// Registered standalone submodels (identifier -> descriptor)
    submodels: HashMap<Identifier, SubmodelDescriptor>,
}

impl RegistryState {
    /// Identifier present in either top-level namespace
    fn contains_identifier(&self, identifier: &Identifier) -> bool {
        self.shells.contains_key(identifier) || self.submodels.contains_key(identifier)
    }
}

impl Default for DescriptorRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl DescriptorRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        debug!("Initializing descriptor registry");
        Self {
            state: RwLock::new(RegistryState::default()),
        }
    }

    /// Register a new top-level shell
    ///
    /// The identifier must not exist in either top-level namespace. A
    /// pre-populated nested submodel collection is taken over verbatim
    /// after its sibling uniqueness and endpoint checks pass.
    pub fn register_shell(&self, descriptor: ShellDescriptor) -> Result<()> {
        debug!("Registration request for shell: {}", descriptor.identifier);
        validate_shell(&descriptor)?;
        validate_nested_submodels(&descriptor)?;

        let mut state = self.state.write().unwrap();

        if state.contains_identifier(&descriptor.identifier) {
            warn!("Identifier already registered: {}", descriptor.identifier);
            return Err(RegistryError::DuplicateIdentifier(
                descriptor.identifier.to_string(),
            ));
        }

        info!(
            "✓ Shell registered: {} (total shells: {})",
            descriptor.identifier,
            state.shells.len() + 1
        );
        state.shells.insert(descriptor.identifier.clone(), descriptor);
        Ok(())
    }

    /// Register a new top-level standalone submodel
    ///
    /// The identifier must not exist in either top-level namespace.
    pub fn register_submodel(&self, descriptor: SubmodelDescriptor) -> Result<()> {
        debug!("Registration request for submodel: {}", descriptor.identifier);
        validate_submodel(&descriptor)?;

        let mut state = self.state.write().unwrap();

        if state.contains_identifier(&descriptor.identifier) {
            warn!("Identifier already registered: {}", descriptor.identifier);
            return Err(RegistryError::DuplicateIdentifier(
                descriptor.identifier.to_string(),
            ));
        }

        info!(
            "✓ Submodel registered: {} (total submodels: {})",
            descriptor.identifier,
            state.submodels.len() + 1
        );
        state.submodels.insert(descriptor.identifier.clone(), descriptor);
        Ok(())
    }

    /// Look up a shell by identifier
    ///
    /// Submodel identifiers are never matched here, even when syntactically
    /// valid for a shell.
    pub fn lookup_shell(&self, identifier: &Identifier) -> Result<ShellDescriptor> {
        let state = self.state.read().unwrap();
        state
            .shells
            .get(identifier)
            .cloned()
            .ok_or_else(|| RegistryError::NotFound(identifier.to_string()))
    }

    /// Look up a standalone submodel by identifier
    pub fn lookup_submodel(&self, identifier: &Identifier) -> Result<SubmodelDescriptor> {
        let state = self.state.read().unwrap();
        state
            .submodels
            .get(identifier)
            .cloned()
            .ok_or_else(|| RegistryError::NotFound(identifier.to_string()))
    }

    /// Snapshot of all registered shells; order is unspecified
    pub fn lookup_all_shells(&self) -> Vec<ShellDescriptor> {
        let state = self.state.read().unwrap();
        state.shells.values().cloned().collect()
    }

    /// Snapshot of all standalone submodels; order is unspecified
    pub fn lookup_all_submodels(&self) -> Vec<SubmodelDescriptor> {
        let state = self.state.read().unwrap();
        state.submodels.values().cloned().collect()
    }

    /// Replace the shell registered under `identifier` wholesale
    ///
    /// The prior entry's nested submodel collection is preserved; updating
    /// a shell never touches its nested submodels. If the new descriptor
    /// carries a different identifier the entry is re-keyed, subject to the
    /// cross-namespace uniqueness check.
    pub fn update_shell(&self, identifier: &Identifier, descriptor: ShellDescriptor) -> Result<()> {
        validate_shell(&descriptor)?;

        let mut state = self.state.write().unwrap();

        if !state.shells.contains_key(identifier) {
            return Err(RegistryError::NotFound(identifier.to_string()));
        }
        if descriptor.identifier != *identifier && state.contains_identifier(&descriptor.identifier)
        {
            warn!(
                "Shell update would collide with existing identifier: {}",
                descriptor.identifier
            );
            return Err(RegistryError::DuplicateIdentifier(
                descriptor.identifier.to_string(),
            ));
        }

        let mut descriptor = descriptor;
        if let Some(previous) = state.shells.remove(identifier) {
            descriptor.submodels = previous.submodels;
        }

        info!("✓ Shell updated: {}", descriptor.identifier);
        state.shells.insert(descriptor.identifier.clone(), descriptor);
        Ok(())
    }

    /// Replace the standalone submodel registered under `identifier` wholesale
    pub fn update_submodel(
        &self,
        identifier: &Identifier,
        descriptor: SubmodelDescriptor,
    ) -> Result<()> {
        validate_submodel(&descriptor)?;

        let mut state = self.state.write().unwrap();

        if !state.submodels.contains_key(identifier) {
            return Err(RegistryError::NotFound(identifier.to_string()));
        }
        if descriptor.identifier != *identifier && state.contains_identifier(&descriptor.identifier)
        {
            warn!(
                "Submodel update would collide with existing identifier: {}",
                descriptor.identifier
            );
            return Err(RegistryError::DuplicateIdentifier(
                descriptor.identifier.to_string(),
            ));
        }

        state.submodels.remove(identifier);
        info!("✓ Submodel updated: {}", descriptor.identifier);
        state.submodels.insert(descriptor.identifier.clone(), descriptor);
        Ok(())
    }

    /// Remove a shell and its entire nested submodel collection
    ///
    /// Standalone submodels are unaffected.
    pub fn delete_shell(&self, identifier: &Identifier) -> Result<()> {
        let mut state = self.state.write().unwrap();

        match state.shells.remove(identifier) {
            Some(shell) => {
                info!(
                    "✓ Shell deleted: {} ({} nested submodels discarded)",
                    identifier,
                    shell.submodels.len()
                );
                Ok(())
            }
            None => Err(RegistryError::NotFound(identifier.to_string())),
        }
    }

    /// Remove a standalone submodel
    pub fn delete_submodel(&self, identifier: &Identifier) -> Result<()> {
        let mut state = self.state.write().unwrap();

        if state.submodels.remove(identifier).is_some() {
            info!("✓ Submodel deleted: {}", identifier);
            Ok(())
        } else {
            Err(RegistryError::NotFound(identifier.to_string()))
        }
    }

    /// Add a submodel to an existing shell's nested collection
    ///
    /// The duplicate check (identifier or idShort) is scoped to the target
    /// shell's siblings only, not the top-level namespaces.
    pub fn register_submodel_for_shell(
        &self,
        shell_identifier: &Identifier,
        descriptor: SubmodelDescriptor,
    ) -> Result<()> {
        validate_submodel(&descriptor)?;

        let mut state = self.state.write().unwrap();

        let shell = state
            .shells
            .get_mut(shell_identifier)
            .ok_or_else(|| RegistryError::NotFound(shell_identifier.to_string()))?;

        let submodel_identifier = descriptor.identifier.clone();
        shell.add_submodel(descriptor)?;

        info!(
            "✓ Submodel {} registered for shell {}",
            submodel_identifier, shell_identifier
        );
        Ok(())
    }

    /// Look up a nested submodel of a shell
    pub fn lookup_submodel_for_shell(
        &self,
        shell_identifier: &Identifier,
        submodel_identifier: &Identifier,
    ) -> Result<SubmodelDescriptor> {
        let state = self.state.read().unwrap();

        let shell = state
            .shells
            .get(shell_identifier)
            .ok_or_else(|| RegistryError::NotFound(shell_identifier.to_string()))?;

        shell
            .submodel(submodel_identifier)
            .cloned()
            .ok_or_else(|| RegistryError::NotFound(submodel_identifier.to_string()))
    }

    /// Snapshot of a shell's nested submodel collection
    pub fn lookup_all_submodels_for_shell(
        &self,
        shell_identifier: &Identifier,
    ) -> Result<Vec<SubmodelDescriptor>> {
        let state = self.state.read().unwrap();

        let shell = state
            .shells
            .get(shell_identifier)
            .ok_or_else(|| RegistryError::NotFound(shell_identifier.to_string()))?;

        Ok(shell.submodels.clone())
    }

    /// Replace the nested submodel keyed by the descriptor's identifier
    ///
    /// Strict semantics: a nested entry with that identifier must already
    /// exist; this operation never inserts.
    pub fn update_submodel_for_shell(
        &self,
        shell_identifier: &Identifier,
        descriptor: SubmodelDescriptor,
    ) -> Result<()> {
        validate_submodel(&descriptor)?;

        let mut state = self.state.write().unwrap();

        let shell = state
            .shells
            .get_mut(shell_identifier)
            .ok_or_else(|| RegistryError::NotFound(shell_identifier.to_string()))?;

        // The replacement must not collide on idShort with a different sibling
        if shell
            .submodels
            .iter()
            .any(|s| s.identifier != descriptor.identifier && s.id_short == descriptor.id_short)
        {
            return Err(RegistryError::DuplicateIdentifier(format!(
                "idShort '{}' already used by another submodel of shell {}",
                descriptor.id_short, shell_identifier
            )));
        }

        let entry = shell
            .submodels
            .iter_mut()
            .find(|s| s.identifier == descriptor.identifier)
            .ok_or_else(|| RegistryError::NotFound(descriptor.identifier.to_string()))?;

        info!(
            "✓ Submodel {} updated for shell {}",
            descriptor.identifier, shell_identifier
        );
        *entry = descriptor;
        Ok(())
    }

    /// Remove a submodel from a shell's nested collection
    pub fn delete_submodel_from_shell(
        &self,
        shell_identifier: &Identifier,
        submodel_identifier: &Identifier,
    ) -> Result<()> {
        let mut state = self.state.write().unwrap();

        let shell = state
            .shells
            .get_mut(shell_identifier)
            .ok_or_else(|| RegistryError::NotFound(shell_identifier.to_string()))?;

        if shell.remove_submodel(submodel_identifier).is_none() {
            return Err(RegistryError::NotFound(submodel_identifier.to_string()));
        }

        info!(
            "✓ Submodel {} deleted from shell {}",
            submodel_identifier, shell_identifier
        );
        Ok(())
    }

    /// Number of registered shells
    pub fn shell_count(&self) -> usize {
        self.state.read().unwrap().shells.len()
    }

    /// Number of registered standalone submodels
    pub fn submodel_count(&self) -> usize {
        self.state.read().unwrap().submodels.len()
    }
}

fn validate_identifier(identifier: &Identifier) -> Result<()> {
    if identifier.id.is_empty() {
        return Err(RegistryError::MalformedDescriptor(
            "identifier must not be empty".to_string(),
        ));
    }
    Ok(())
}

/// Structural checks on a shell descriptor (nested collection excluded)
fn validate_shell(descriptor: &ShellDescriptor) -> Result<()> {
    validate_identifier(&descriptor.identifier)?;
    if descriptor.endpoints.is_empty() {
        return Err(RegistryError::MalformedDescriptor(format!(
            "shell {} has no endpoints",
            descriptor.identifier
        )));
    }
    Ok(())
}

fn validate_submodel(descriptor: &SubmodelDescriptor) -> Result<()> {
    validate_identifier(&descriptor.identifier)?;
    if descriptor.endpoints.is_empty() {
        return Err(RegistryError::MalformedDescriptor(format!(
            "submodel {} has no endpoints",
            descriptor.identifier
        )));
    }
    Ok(())
}

/// Sibling uniqueness and structural checks on an arriving nested collection
fn validate_nested_submodels(descriptor: &ShellDescriptor) -> Result<()> {
    for (index, submodel) in descriptor.submodels.iter().enumerate() {
        validate_submodel(submodel)?;

        let collision = descriptor.submodels[..index]
            .iter()
            .any(|s| s.identifier == submodel.identifier || s.id_short == submodel.id_short);
        if collision {
            return Err(RegistryError::MalformedDescriptor(format!(
                "shell {} arrives with duplicate nested submodel {} (idShort '{}')",
                descriptor.identifier, submodel.identifier, submodel.id_short
            )));
        }
    }
    Ok(())
}
