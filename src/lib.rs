//! **An in-memory object model for CycloneDX-style Software Bills of Materials.**
//!
//! `cdx-bom` models components, vulnerabilities, licenses, and organizational
//! metadata, together with the consistency rules that make a BOM coherent:
//! component identity via package URLs, set semantics over the component
//! collection, SHA-1 hashing for file-based components, and an aggregate
//! [`Bom`] container with a validation contract.
//!
//! Wire-format encoders and decoders, schema validation, and CLI tooling are
//! external collaborators: encoders read the model through its public
//! fields and accessors, decoders rebuild it through constructors.
//!
//! ## Getting started
//!
//! ```
//! use cdx_bom::model::{Bom, Component};
//!
//! let mut bom = Bom::new();
//! let component = Component::new("setuptools", "50.3.2");
//! assert_eq!(component.purl(), "pkg:pypi/setuptools@50.3.2");
//!
//! assert!(bom.add_component(component.clone()));
//! // The component set is keyed by purl: a second add is a no-op.
//! assert!(!bom.add_component(component));
//! assert_eq!(bom.component_count(), 1);
//! ```
//!
//! ## File-based components
//!
//! [`Component::for_file`] derives a synthetic identity from local file
//! contents: the file is SHA-1 hashed, the digest pins the component, and
//! its first 12 hex characters form the version `0.0.0-<prefix>`.
//!
//! ## Error handling
//!
//! All fallible operations return [`Result`] with a [`BomError`]; errors
//! propagate synchronously and are never retried or swallowed internally.
//! Duplicate adds and missing optional fields are not errors.

// Lint to discourage unwrap() in production code - prefer explicit error handling
#![warn(clippy::unwrap_used)]

pub mod error;
pub mod model;
pub mod utils;

// Re-export main types for convenience
pub use error::{BomError, Result};
pub use model::{
    Bom, BomMetaData, Component, ComponentType, Ecosystem, ExternalRefType, ExternalReference,
    Hash, HashAlgorithm, License, LicenseChoice, LicenseChoiceFactory, LicenseExpression,
    LicenseFactory, OrganizationalContact, OrganizationalEntity, Property, Service, Severity,
    Tool, Vulnerability, VulnerabilitySource, this_tool,
};
pub use utils::{file_sha1, file_sha256};
