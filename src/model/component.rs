//! The central component entity and its package-URL identity.

use super::{Ecosystem, ExternalReference, Hash, HashAlgorithm, LicenseChoice, Vulnerability};
use crate::error::{BomError, Result};
use crate::utils::hash::file_sha1;
use packageurl::PackageUrl;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::hash::Hasher;
use std::path::Path;

/// Component type classification, per the CycloneDX vocabulary
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[non_exhaustive]
pub enum ComponentType {
    Application,
    Container,
    Device,
    File,
    Firmware,
    Framework,
    #[default]
    Library,
    OperatingSystem,
}

impl fmt::Display for ComponentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Application => write!(f, "application"),
            Self::Container => write!(f, "container"),
            Self::Device => write!(f, "device"),
            Self::File => write!(f, "file"),
            Self::Firmware => write!(f, "firmware"),
            Self::Framework => write!(f, "framework"),
            Self::Library => write!(f, "library"),
            Self::OperatingSystem => write!(f, "operating-system"),
        }
    }
}

/// A single software unit recorded in a BOM.
///
/// Identity is defined solely by the derived package URL: two components
/// with the same `pkg:{ecosystem}/{name}@{version}[?{qualifiers}]` string
/// are the same entity regardless of any other field.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Component {
    /// Component type
    pub component_type: ComponentType,
    /// Package ecosystem, used as the package URL type tag
    pub ecosystem: Ecosystem,
    /// Component name
    pub name: String,
    /// Version string
    pub version: String,
    /// Parsed semantic version (if the version string is valid semver)
    pub semver: Option<semver::Version>,
    /// Optional key-value query string appended to the purl
    pub qualifiers: Option<String>,
    /// Declared author
    pub author: Option<String>,
    /// Description
    pub description: Option<String>,
    /// Declared license
    pub license: Option<LicenseChoice>,
    /// Cryptographic hashes pinning this component
    pub hashes: Vec<Hash>,
    /// Known vulnerabilities
    pub vulnerabilities: Vec<Vulnerability>,
    /// External references
    pub external_references: Vec<ExternalReference>,
}

impl Component {
    /// Create a new component with minimal required fields.
    ///
    /// Defaults: type `Library`, ecosystem `pypi`, all collections empty
    /// and owned by this instance.
    #[must_use]
    pub fn new(name: impl Into<String>, version: impl Into<String>) -> Self {
        let version = version.into();
        Self {
            component_type: ComponentType::Library,
            ecosystem: Ecosystem::PyPi,
            name: name.into(),
            semver: semver::Version::parse(&version).ok(),
            version,
            qualifiers: None,
            author: None,
            description: None,
            license: None,
            hashes: Vec::new(),
            vulnerabilities: Vec::new(),
            external_references: Vec::new(),
        }
    }

    /// Create a component representing a local file.
    ///
    /// The file is read in full and SHA-1 hashed; the digest pins the
    /// component (one `SHA-1` hash record) and the first 12 hex chars form
    /// the synthetic version `0.0.0-<prefix>`. The name is `bom_path` when
    /// supplied, else the absolute path. Fails with `FileNotFound` before
    /// any construction if the path does not exist.
    pub fn for_file(absolute_path: &Path, bom_path: Option<&str>) -> Result<Self> {
        if !absolute_path.exists() {
            return Err(BomError::file_not_found(absolute_path));
        }
        let digest = file_sha1(absolute_path)?;

        let name = match bom_path {
            Some(path) => path.to_string(),
            None => absolute_path.display().to_string(),
        };
        let mut component = Self::new(name, format!("0.0.0-{}", &digest[..12]));
        component.component_type = ComponentType::File;
        component.ecosystem = Ecosystem::Generic;
        component.hashes.push(Hash::new(HashAlgorithm::Sha1, digest));
        Ok(component)
    }

    /// Set the component type
    #[must_use]
    pub fn with_type(mut self, component_type: ComponentType) -> Self {
        self.component_type = component_type;
        self
    }

    /// Set the ecosystem
    #[must_use]
    pub fn with_ecosystem(mut self, ecosystem: Ecosystem) -> Self {
        self.ecosystem = ecosystem;
        self
    }

    /// Set the purl qualifiers query string
    #[must_use]
    pub fn with_qualifiers(mut self, qualifiers: impl Into<String>) -> Self {
        self.qualifiers = Some(qualifiers.into());
        self
    }

    /// Set the hashes wholesale
    #[must_use]
    pub fn with_hashes(mut self, hashes: Vec<Hash>) -> Self {
        self.hashes = hashes;
        self
    }

    /// Set the declared license
    #[must_use]
    pub fn with_license(mut self, license: LicenseChoice) -> Self {
        self.license = Some(license);
        self
    }

    /// Add a hash that pins this component
    pub fn add_hash(&mut self, hash: Hash) {
        self.hashes.push(hash);
    }

    /// Add a vulnerability affecting this component
    pub fn add_vulnerability(&mut self, vulnerability: Vulnerability) {
        self.vulnerabilities.push(vulnerability);
    }

    /// Add an external reference
    pub fn add_external_reference(&mut self, reference: ExternalReference) {
        self.external_references.push(reference);
    }

    /// Replace the declared author
    pub fn set_author(&mut self, author: impl Into<String>) {
        self.author = Some(author.into());
    }

    /// Replace the description
    pub fn set_description(&mut self, description: impl Into<String>) {
        self.description = Some(description.into());
    }

    /// Replace the declared license
    pub fn set_license(&mut self, license: LicenseChoice) {
        self.license = Some(license);
    }

    /// Does this component have any vulnerabilities?
    #[must_use]
    pub fn has_vulnerabilities(&self) -> bool {
        !self.vulnerabilities.is_empty()
    }

    /// The derived package URL string identifying this component.
    ///
    /// Deterministic, pure function of ecosystem, name, version and
    /// qualifiers; qualifiers are appended only when non-empty.
    #[must_use]
    pub fn purl(&self) -> String {
        let base = format!("pkg:{}/{}@{}", self.ecosystem, self.name, self.version);
        match self.qualifiers.as_deref().filter(|q| !q.is_empty()) {
            Some(qualifiers) => format!("{base}?{qualifiers}"),
            None => base,
        }
    }

    /// The same identity in the typed package-URL form used by encoders.
    ///
    /// Qualifiers are split into key=value pairs; malformed qualifier
    /// strings surface as `InvalidPurl`.
    pub fn to_package_url(&self) -> Result<PackageUrl<'static>> {
        let mut purl = PackageUrl::new(self.ecosystem.to_string(), self.name.clone())
            .map_err(|e| BomError::invalid_purl(self.purl(), e.to_string()))?;
        purl.with_version(self.version.clone());

        if let Some(qualifiers) = self.qualifiers.as_deref().filter(|q| !q.is_empty()) {
            for pair in qualifiers.split('&') {
                let (key, value) = pair.split_once('=').ok_or_else(|| {
                    BomError::invalid_purl(self.purl(), format!("qualifier '{pair}' is not key=value"))
                })?;
                purl.add_qualifier(key.to_string(), value.to_string())
                    .map_err(|e| BomError::invalid_purl(self.purl(), e.to_string()))?;
            }
        }
        Ok(purl)
    }

    /// The registry landing page for this component, when the ecosystem
    /// has a well-known one.
    #[must_use]
    pub fn registry_url(&self) -> Option<String> {
        self.ecosystem.registry_url(&self.name, &self.version)
    }

    /// Display name with version
    #[must_use]
    pub fn display_name(&self) -> String {
        format!("{}@{}", self.name, self.version)
    }
}

// Identity is the derived purl, symmetric over both operands.
impl PartialEq for Component {
    fn eq(&self, other: &Self) -> bool {
        self.purl() == other.purl()
    }
}

impl Eq for Component {}

impl std::hash::Hash for Component {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.purl().hash(state);
    }
}

impl fmt::Display for Component {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}
