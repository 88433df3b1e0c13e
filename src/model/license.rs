//! License records and SPDX expression handling.
//!
//! Uses the `spdx` crate for license id lookup and expression parsing, with
//! lax parsing so common non-standard spellings are still accepted.

use crate::error::{BomError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// License expression following SPDX license expression syntax
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LicenseExpression {
    /// The raw license expression string
    pub expression: String,
    /// Whether this is a valid SPDX expression
    pub is_valid_spdx: bool,
}

impl LicenseExpression {
    /// Create a new license expression
    #[must_use]
    pub fn new(expression: String) -> Self {
        let is_valid_spdx = Self::validate_spdx(&expression);
        Self {
            expression,
            is_valid_spdx,
        }
    }

    /// Create from an SPDX license ID
    #[must_use]
    pub fn from_spdx_id(id: &str) -> Self {
        Self {
            expression: id.to_string(),
            is_valid_spdx: true,
        }
    }

    /// Validate an SPDX expression using the spdx crate.
    ///
    /// Uses lax parsing mode to accept common non-standard expressions
    /// (e.g., "Apache2" instead of "Apache-2.0", "/" instead of "OR").
    fn validate_spdx(expr: &str) -> bool {
        if expr.is_empty() || expr.contains("NOASSERTION") || expr.contains("NONE") {
            return false;
        }
        spdx::Expression::parse_mode(expr, spdx::ParseMode::LAX).is_ok()
    }

    /// Whether this expression combines more than one license term
    #[must_use]
    pub fn is_compound(&self) -> bool {
        spdx::Expression::parse_mode(&self.expression, spdx::ParseMode::LAX)
            .map(|expr| expr.requirements().count() > 1)
            .unwrap_or(false)
    }
}

impl fmt::Display for LicenseExpression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.expression)
    }
}

/// A single named or SPDX-identified license
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct License {
    /// SPDX license id, when the license is a recognized one
    pub id: Option<String>,
    /// Free-form license name, when no SPDX id applies
    pub name: Option<String>,
    /// URL to the license text
    pub url: Option<String>,
}

impl License {
    /// Create a license from an SPDX id, without checking it
    #[must_use]
    pub fn from_spdx_id(id: impl Into<String>) -> Self {
        Self {
            id: Some(id.into()),
            name: None,
            url: None,
        }
    }

    /// Create a license known only by name
    #[must_use]
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            id: None,
            name: Some(name.into()),
            url: None,
        }
    }

    /// Attach a URL to the license text
    #[must_use]
    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }
}

/// Either a single license or a compound SPDX expression
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum LicenseChoice {
    License(License),
    Expression(LicenseExpression),
}

/// Builds `License` records from raw strings, resolving SPDX ids when possible.
#[derive(Debug, Clone, Default)]
pub struct LicenseFactory;

impl LicenseFactory {
    /// Make a license from an arbitrary string: a recognized SPDX id becomes
    /// an id-based license (canonical spelling), anything else a named one.
    #[must_use]
    pub fn make_from_string(&self, value: &str) -> License {
        match spdx::license_id(value) {
            Some(lic) => License::from_spdx_id(lic.name),
            None => License::named(value),
        }
    }

    /// Make a license from a string that must be a recognized SPDX id.
    pub fn make_with_id(&self, value: &str) -> Result<License> {
        spdx::license_id(value)
            .map(|lic| License::from_spdx_id(lic.name))
            .ok_or_else(|| BomError::InvalidSpdxId(value.to_string()))
    }

    /// Make a license known only by name.
    #[must_use]
    pub fn make_with_name(&self, value: &str) -> License {
        License::named(value)
    }
}

/// Builds `LicenseChoice` values, preferring compound expressions where the
/// input is one.
#[derive(Debug, Clone, Default)]
pub struct LicenseChoiceFactory {
    license_factory: LicenseFactory,
}

impl LicenseChoiceFactory {
    /// Make a choice from an arbitrary string: a valid compound SPDX
    /// expression is kept as an expression, anything else becomes a license.
    #[must_use]
    pub fn make_from_string(&self, value: &str) -> LicenseChoice {
        let expr = LicenseExpression::new(value.to_string());
        if expr.is_valid_spdx && expr.is_compound() {
            LicenseChoice::Expression(expr)
        } else {
            LicenseChoice::License(self.license_factory.make_from_string(value))
        }
    }

    /// Make a choice from a string that must be a valid compound expression.
    pub fn make_with_compound_expression(&self, value: &str) -> Result<LicenseChoice> {
        let expr = LicenseExpression::new(value.to_string());
        if expr.is_valid_spdx && expr.is_compound() {
            Ok(LicenseChoice::Expression(expr))
        } else {
            Err(BomError::InvalidLicenseExpression(value.to_string()))
        }
    }
}
