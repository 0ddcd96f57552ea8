//! Identifier and endpoint value types

use serde::{Deserialize, Serialize};

/// Scheme tag of a globally-scoped identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IdentifierType {
    /// Free-form identifier chosen by the operator
    Custom,
    /// International Registration Data Identifier (ISO 29002-5)
    Irdi,
    /// Internationalized Resource Identifier
    Iri,
    /// Uniform Resource Identifier
    Uri,
}

/// Globally-scoped identity value used as the registry's primary key
///
/// Two identifiers are equal iff both the id value and the scheme tag match.
/// Identifiers are immutable once constructed and must be non-empty; the
/// registry rejects descriptors carrying an empty id.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Identifier {
    /// Identifier value
    pub id: String,

    /// Scheme the value is drawn from
    pub id_type: IdentifierType,
}

impl Identifier {
    pub fn new(id_type: IdentifierType, id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            id_type,
        }
    }

    /// Custom-scheme identifier
    pub fn custom(id: impl Into<String>) -> Self {
        Self::new(IdentifierType::Custom, id)
    }

    /// IRI identifier (URNs and URLs)
    pub fn iri(id: impl Into<String>) -> Self {
        Self::new(IdentifierType::Iri, id)
    }
}

impl std::fmt::Display for Identifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.id)
    }
}

/// Reachable endpoint at which the described entity's content is served
///
/// Descriptors hold an ordered, non-empty sequence of endpoints; the first
/// entry is the canonical one and insertion order is preserved.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Endpoint {
    /// Endpoint address (URL or transport-specific locator)
    pub address: String,

    /// Transport-specific metadata (interface name, security attributes, etc.)
    #[serde(default, skip_serializing_if = "serde_json::Map::is_empty")]
    pub protocol_information: serde_json::Map<String, serde_json::Value>,
}

impl Endpoint {
    /// Create an endpoint with a bare address
    pub fn new(address: impl Into<String>) -> Self {
        Self {
            address: address.into(),
            protocol_information: serde_json::Map::new(),
        }
    }

    /// Attach a protocol metadata entry
    pub fn with_protocol(
        mut self,
        key: impl Into<String>,
        value: impl Into<serde_json::Value>,
    ) -> Self {
        self.protocol_information.insert(key.into(), value.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_identifier_type_serialization() {
        let custom = IdentifierType::Custom;
        let json = serde_json::to_string(&custom).unwrap();
        assert_eq!(json, "\"custom\"");

        let iri: IdentifierType = serde_json::from_str("\"iri\"").unwrap();
        assert_eq!(iri, IdentifierType::Iri);

        let irdi: IdentifierType = serde_json::from_str("\"irdi\"").unwrap();
        assert_eq!(irdi, IdentifierType::Irdi);
    }

    #[test]
    fn test_identifier_structural_equality() {
        let a = Identifier::iri("urn:example:aas#001");
        let b = Identifier::iri("urn:example:aas#001");
        let c = Identifier::custom("urn:example:aas#001");

        assert_eq!(a, b);
        // Same id value, different scheme tag
        assert_ne!(a, c);
    }

    #[test]
    fn test_identifier_as_map_key() {
        let mut map = HashMap::new();
        map.insert(Identifier::custom("device-1"), 1u32);

        assert_eq!(map.get(&Identifier::custom("device-1")), Some(&1));
        assert_eq!(map.get(&Identifier::iri("device-1")), None);
    }

    #[test]
    fn test_endpoint_builder() {
        let endpoint = Endpoint::new("http://localhost:4000/aas")
            .with_protocol("endpointProtocol", "HTTP")
            .with_protocol("endpointProtocolVersion", "1.1");

        assert_eq!(endpoint.address, "http://localhost:4000/aas");
        assert_eq!(
            endpoint.protocol_information.get("endpointProtocol"),
            Some(&serde_json::json!("HTTP"))
        );
    }

    #[test]
    fn test_endpoint_serialization_skips_empty_metadata() {
        let endpoint = Endpoint::new("http://localhost:4000/aas");
        let json = serde_json::to_string(&endpoint).unwrap();

        assert_eq!(json, "{\"address\":\"http://localhost:4000/aas\"}");

        let parsed: Endpoint = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, endpoint);
    }
}
