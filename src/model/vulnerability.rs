//! Vulnerability records attachable to components.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A known security issue affecting a component.
///
/// The record is an equality-comparable value; the model only requires that
/// it can be attached to a `Component` and counted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Vulnerability {
    /// Vulnerability id (e.g. CVE-2021-44228)
    pub id: String,
    /// Where this record came from
    pub source: Option<VulnerabilitySource>,
    /// Human-readable description
    pub description: Option<String>,
    /// Remediation advice
    pub recommendation: Option<String>,
    /// Assessed severity
    pub severity: Option<Severity>,
    /// CWE ids
    pub cwes: Vec<u32>,
    /// Advisory URLs
    pub advisories: Vec<String>,
}

impl Vulnerability {
    /// Create a vulnerability with just an id
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            source: None,
            description: None,
            recommendation: None,
            severity: None,
            cwes: Vec::new(),
            advisories: Vec::new(),
        }
    }

    /// Set the severity
    #[must_use]
    pub fn with_severity(mut self, severity: Severity) -> Self {
        self.severity = Some(severity);
        self
    }

    /// Set the source
    #[must_use]
    pub fn with_source(mut self, source: VulnerabilitySource) -> Self {
        self.source = Some(source);
        self
    }
}

/// Origin of a vulnerability record (e.g. NVD, OSV, a vendor advisory feed)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VulnerabilitySource {
    /// Source name
    pub name: String,
    /// Source URL
    pub url: Option<String>,
}

impl VulnerabilitySource {
    /// Create a source with just a name
    #[must_use]
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            url: None,
        }
    }
}

/// Vulnerability severity classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[non_exhaustive]
pub enum Severity {
    Critical,
    High,
    Medium,
    Low,
    Info,
    Unknown,
}

impl Severity {
    /// Severity weight (higher is worse)
    #[must_use]
    pub const fn weight(&self) -> u8 {
        match self {
            Self::Critical => 4,
            Self::High => 3,
            Self::Medium => 2,
            Self::Low => 1,
            Self::Info | Self::Unknown => 0,
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Critical => write!(f, "critical"),
            Self::High => write!(f, "high"),
            Self::Medium => write!(f, "medium"),
            Self::Low => write!(f, "low"),
            Self::Info => write!(f, "info"),
            Self::Unknown => write!(f, "unknown"),
        }
    }
}
