//! Shell and submodel descriptor records
//!
//! Shells and submodels are modeled as distinct tagged records rather than
//! variants of a shared base type; the registry keeps them in separate
//! top-level collections with disjoint identifier namespaces.

use crate::types::{Endpoint, Identifier};
use crate::{RegistryError, Result};
use serde::{Deserialize, Serialize};

/// Registry record for a submodel, standalone or nested under a shell
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubmodelDescriptor {
    /// Globally-scoped identity of the submodel
    pub identifier: Identifier,

    /// Human-readable short name; unique among nested siblings
    pub id_short: String,

    /// Ordered endpoint list, first entry is canonical
    pub endpoints: Vec<Endpoint>,
}

impl SubmodelDescriptor {
    pub fn new(
        id_short: impl Into<String>,
        identifier: Identifier,
        endpoints: Vec<Endpoint>,
    ) -> Self {
        Self {
            identifier,
            id_short: id_short.into(),
            endpoints,
        }
    }

    /// Canonical endpoint of the submodel
    pub fn first_endpoint(&self) -> Option<&Endpoint> {
        self.endpoints.first()
    }
}

/// Registry record for a shell (top-level digital-twin instance)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShellDescriptor {
    /// Globally-scoped identity of the shell
    pub identifier: Identifier,

    /// Human-readable short name
    pub id_short: String,

    /// Reference to the asset the twin represents
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub global_asset_id: Option<serde_json::Value>,

    /// Supplementary local asset identifiers
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub specific_asset_ids: Vec<serde_json::Value>,

    /// Ordered endpoint list, first entry is canonical
    pub endpoints: Vec<Endpoint>,

    /// Nested submodels; identifiers and idShorts are unique among siblings
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub submodels: Vec<SubmodelDescriptor>,
}

impl ShellDescriptor {
    /// Create a shell descriptor with an empty nested submodel collection
    pub fn new(
        id_short: impl Into<String>,
        identifier: Identifier,
        endpoints: Vec<Endpoint>,
    ) -> Self {
        Self {
            identifier,
            id_short: id_short.into(),
            global_asset_id: None,
            specific_asset_ids: Vec::new(),
            endpoints,
            submodels: Vec::new(),
        }
    }

    /// Attach a global asset reference
    pub fn with_global_asset_id(mut self, global_asset_id: serde_json::Value) -> Self {
        self.global_asset_id = Some(global_asset_id);
        self
    }

    /// Attach supplementary asset identifiers
    pub fn with_specific_asset_ids(mut self, specific_asset_ids: Vec<serde_json::Value>) -> Self {
        self.specific_asset_ids = specific_asset_ids;
        self
    }

    /// Canonical endpoint of the shell
    pub fn first_endpoint(&self) -> Option<&Endpoint> {
        self.endpoints.first()
    }

    /// Nested submodel with the given identifier
    pub fn submodel(&self, identifier: &Identifier) -> Option<&SubmodelDescriptor> {
        self.submodels.iter().find(|s| &s.identifier == identifier)
    }

    /// Nested submodel with the given idShort
    pub fn submodel_by_id_short(&self, id_short: &str) -> Option<&SubmodelDescriptor> {
        self.submodels.iter().find(|s| s.id_short == id_short)
    }

    /// Insert a nested submodel
    ///
    /// Rejects the insertion if the submodel's identifier or idShort
    /// collides with an existing sibling; both checks trigger independently.
    pub fn add_submodel(&mut self, submodel: SubmodelDescriptor) -> Result<()> {
        if let Some(sibling) = self.submodels.iter().find(|s| {
            s.identifier == submodel.identifier || s.id_short == submodel.id_short
        }) {
            return Err(RegistryError::DuplicateIdentifier(format!(
                "submodel {} (idShort '{}') collides with sibling {} (idShort '{}') in shell {}",
                submodel.identifier,
                submodel.id_short,
                sibling.identifier,
                sibling.id_short,
                self.identifier,
            )));
        }

        self.submodels.push(submodel);
        Ok(())
    }

    /// Remove the nested submodel with the given identifier
    pub fn remove_submodel(&mut self, identifier: &Identifier) -> Option<SubmodelDescriptor> {
        let index = self
            .submodels
            .iter()
            .position(|s| &s.identifier == identifier)?;
        Some(self.submodels.remove(index))
    }
}
