//! The Bom aggregate root and its descriptive metadata envelope.

use super::{
    Component, ExternalReference, Hash, LicenseChoice, OrganizationalContact,
    OrganizationalEntity, Property,
};
use crate::error::{BomError, Result};
use chrono::{DateTime, Utc};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;
use uuid::Uuid;

/// A tool that produced or contributed to a BOM
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tool {
    /// Tool vendor
    pub vendor: Option<String>,
    /// Tool name
    pub name: String,
    /// Tool version
    pub version: Option<String>,
    /// Hashes of the tool's distribution
    pub hashes: Vec<Hash>,
}

impl Tool {
    /// Create a tool with just a name
    #[must_use]
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            vendor: None,
            name: name.into(),
            version: None,
            hashes: Vec::new(),
        }
    }

    /// Create a fully identified tool
    #[must_use]
    pub fn new(
        vendor: impl Into<String>,
        name: impl Into<String>,
        version: impl Into<String>,
    ) -> Self {
        Self {
            vendor: Some(vendor.into()),
            name: name.into(),
            version: Some(version.into()),
            hashes: Vec::new(),
        }
    }
}

// Process-wide constant identity of this modeling library, shared so that
// the default-exclusion contract of BomMetaData::with_tools stays testable.
static THIS_TOOL: LazyLock<Tool> = LazyLock::new(|| {
    Tool::new("CycloneDX", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"))
});

/// The self-identifying tool entry included in fresh metadata by default
#[must_use]
pub fn this_tool() -> &'static Tool {
    &THIS_TOOL
}

/// Descriptive envelope for a Bom.
///
/// The timestamp is stamped at construction and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BomMetaData {
    /// Creation timestamp
    pub timestamp: DateTime<Utc>,
    /// Tools that produced the BOM
    pub tools: Vec<Tool>,
    /// Authors
    pub authors: Vec<OrganizationalContact>,
    /// Root component describing the subject of the BOM itself
    pub component: Option<Component>,
    /// Manufacturer of the subject
    pub manufacture: Option<OrganizationalEntity>,
    /// Supplier of the subject
    pub supplier: Option<OrganizationalEntity>,
    /// Licenses covering the BOM document
    pub licenses: Vec<LicenseChoice>,
    /// Document-level properties
    pub properties: Vec<Property>,
}

impl BomMetaData {
    /// Create fresh metadata: current timestamp, the self-identifying tool
    /// as the sole tool entry, everything else empty or absent.
    #[must_use]
    pub fn new() -> Self {
        Self {
            timestamp: Utc::now(),
            tools: vec![this_tool().clone()],
            authors: Vec::new(),
            component: None,
            manufacture: None,
            supplier: None,
            licenses: Vec::new(),
            properties: Vec::new(),
        }
    }

    /// Replace the tool list wholesale.
    ///
    /// An explicit non-empty list excludes the default self-identifying
    /// entry; an empty list means "none supplied" and keeps the default.
    #[must_use]
    pub fn with_tools(mut self, tools: Vec<Tool>) -> Self {
        if !tools.is_empty() {
            self.tools = tools;
        }
        self
    }

    /// Set the authors
    #[must_use]
    pub fn with_authors(mut self, authors: Vec<OrganizationalContact>) -> Self {
        self.authors = authors;
        self
    }

    /// Set the root component describing the subject of the BOM
    #[must_use]
    pub fn with_component(mut self, component: Component) -> Self {
        self.component = Some(component);
        self
    }

    /// Set the manufacturer
    #[must_use]
    pub fn with_manufacture(mut self, manufacture: OrganizationalEntity) -> Self {
        self.manufacture = Some(manufacture);
        self
    }

    /// Set the supplier
    #[must_use]
    pub fn with_supplier(mut self, supplier: OrganizationalEntity) -> Self {
        self.supplier = Some(supplier);
        self
    }

    /// Set the document licenses
    #[must_use]
    pub fn with_licenses(mut self, licenses: Vec<LicenseChoice>) -> Self {
        self.licenses = licenses;
        self
    }

    /// Set the document properties
    #[must_use]
    pub fn with_properties(mut self, properties: Vec<Property>) -> Self {
        self.properties = properties;
        self
    }
}

impl Default for BomMetaData {
    fn default() -> Self {
        Self::new()
    }
}

/// A service recorded in a BOM
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Service {
    /// Service name
    pub name: String,
    /// Service version
    pub version: Option<String>,
    /// Description
    pub description: Option<String>,
    /// Organization providing the service
    pub provider: Option<OrganizationalEntity>,
}

impl Service {
    /// Create a service with just a name
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            version: None,
            description: None,
            provider: None,
        }
    }

    /// Set the version
    #[must_use]
    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.version = Some(version.into());
        self
    }

    /// Identity key within a Bom's service set
    #[must_use]
    pub fn key(&self) -> String {
        match &self.version {
            Some(version) => format!("{}@{}", self.name, version),
            None => self.name.clone(),
        }
    }
}

/// The aggregate root: a uniquely identified, deduplicated collection of
/// components and services plus descriptive metadata.
///
/// The component set never contains two entries with an equal derived purl;
/// adding a duplicate is a silent no-op that keeps the first entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Bom {
    /// Globally unique serial number, generated fresh per instance
    pub serial_number: Uuid,
    /// Descriptive metadata, created fresh per instance
    pub metadata: BomMetaData,
    /// Components keyed by derived purl
    pub components: IndexMap<String, Component>,
    /// Services keyed by name@version
    pub services: IndexMap<String, Service>,
    /// Document-level external references
    pub external_references: Vec<ExternalReference>,
}

impl Bom {
    /// Create an empty Bom with a fresh serial number and metadata
    #[must_use]
    pub fn new() -> Self {
        Self {
            serial_number: Uuid::new_v4(),
            metadata: BomMetaData::new(),
            components: IndexMap::new(),
            services: IndexMap::new(),
            external_references: Vec::new(),
        }
    }

    /// The serial number in URN form, as rendered into documents
    #[must_use]
    pub fn urn(&self) -> String {
        format!("urn:uuid:{}", self.serial_number)
    }

    /// Add a component, keyed by its derived purl.
    ///
    /// Returns `true` if the component was inserted; a duplicate purl is a
    /// no-op with respect to set membership, not an error.
    pub fn add_component(&mut self, component: Component) -> bool {
        let purl = component.purl();
        if self.components.contains_key(&purl) {
            tracing::debug!(
                purl = %purl,
                "duplicate component add ignored, set semantics keep the first entry"
            );
            return false;
        }
        self.components.insert(purl, component);
        true
    }

    /// Add a service, keyed by name@version, with the same set semantics
    /// as components.
    pub fn add_service(&mut self, service: Service) -> bool {
        let key = service.key();
        if self.services.contains_key(&key) {
            tracing::debug!(service = %key, "duplicate service add ignored");
            return false;
        }
        self.services.insert(key, service);
        true
    }

    /// Add a document-level external reference
    pub fn add_external_reference(&mut self, reference: ExternalReference) {
        self.external_references.push(reference);
    }

    /// Is an equal (by derived purl) component already present?
    #[must_use]
    pub fn has_component(&self, component: &Component) -> bool {
        self.components.contains_key(&component.purl())
    }

    /// Look up a component by exact derived-purl match.
    ///
    /// A miss is an absent value, never an error.
    #[must_use]
    pub fn get_component_by_purl(&self, purl: &str) -> Option<&Component> {
        self.components.get(purl)
    }

    /// Total component count
    #[must_use]
    pub fn component_count(&self) -> usize {
        self.components.len()
    }

    /// Does any component carry at least one vulnerability?
    ///
    /// The union covers the top-level component set and the metadata root
    /// component; nested components are not walked.
    #[must_use]
    pub fn has_vulnerabilities(&self) -> bool {
        self.components.values().any(Component::has_vulnerabilities)
            || self
                .metadata
                .component
                .as_ref()
                .is_some_and(Component::has_vulnerabilities)
    }

    /// Check structural consistency, failing with a `Validation` error that
    /// enumerates every violation found. Never repairs data.
    pub fn validate(&self) -> Result<()> {
        let mut violations = Vec::new();

        if (!self.components.is_empty() || !self.services.is_empty())
            && self.metadata.component.is_none()
        {
            violations.push(
                "BOM has components or services but metadata lacks the root component \
                 describing the subject"
                    .to_string(),
            );
        }

        if let Some(root) = &self.metadata.component {
            Self::check_component(root, "metadata root component", &mut violations);
        }
        for component in self.components.values() {
            Self::check_component(component, "component", &mut violations);
        }
        for service in self.services.values() {
            if service.name.is_empty() {
                violations.push("service has an empty name".to_string());
            }
        }

        if violations.is_empty() {
            Ok(())
        } else {
            Err(BomError::validation(violations))
        }
    }

    fn check_component(component: &Component, label: &str, violations: &mut Vec<String>) {
        if component.name.is_empty() {
            violations.push(format!("{label} '{}' has an empty name", component.purl()));
        }
        if component.version.is_empty() {
            violations.push(format!(
                "{label} '{}' has an empty version",
                component.purl()
            ));
        }
    }
}

impl Default for Bom {
    fn default() -> Self {
        Self::new()
    }
}
