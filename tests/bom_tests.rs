//! Integration tests for the Bom aggregate and its metadata envelope.

use cdx_bom::model::{
    Bom, BomMetaData, Component, ComponentType, LicenseChoice, LicenseExpression,
    OrganizationalContact, OrganizationalEntity, Property, Service, Tool, Vulnerability,
    this_tool,
};

fn setuptools_simple() -> Component {
    Component::new("setuptools", "50.3.2").with_qualifiers("extension=tar.gz")
}

fn setuptools_different_version() -> Component {
    Component::new("setuptools", "50.3.1")
}

// ============================================================================
// BomMetaData
// ============================================================================

mod metadata_tests {
    use super::*;

    #[test]
    fn test_empty_bom_metadata() {
        let metadata = BomMetaData::new();
        assert!(metadata.authors.is_empty());
        assert!(metadata.component.is_none());
        assert!(metadata.manufacture.is_none());
        assert!(metadata.supplier.is_none());
        assert!(metadata.licenses.is_empty());
        assert!(metadata.properties.is_empty());
        assert_eq!(metadata.tools, vec![this_tool().clone()]);
    }

    #[test]
    fn test_basic_bom_metadata() {
        let tools = vec![Tool::named("tool_1"), Tool::named("tool_2")];
        let authors = vec![
            OrganizationalContact::named("contact_1"),
            OrganizationalContact::named("contact_2"),
        ];
        let component = Component::new("test_component", "1.0.0");
        let manufacture = OrganizationalEntity::named("test_manufacturer");
        let supplier = OrganizationalEntity::named("test_supplier");
        let licenses = vec![
            LicenseChoice::Expression(LicenseExpression::from_spdx_id("MIT")),
            LicenseChoice::Expression(LicenseExpression::from_spdx_id("Apache-2.0")),
        ];
        let properties = vec![
            Property::new("property_1", "value_1"),
            Property::new("property_2", "value_2"),
        ];

        let metadata = BomMetaData::new()
            .with_tools(tools.clone())
            .with_authors(authors.clone())
            .with_component(component.clone())
            .with_manufacture(manufacture.clone())
            .with_supplier(supplier.clone())
            .with_licenses(licenses.clone())
            .with_properties(properties.clone());

        assert_eq!(metadata.authors, authors);
        assert_eq!(metadata.component, Some(component));
        assert_eq!(metadata.manufacture, Some(manufacture));
        assert_eq!(metadata.supplier, Some(supplier));
        assert_eq!(metadata.licenses, licenses);
        assert_eq!(metadata.properties, properties);
        // Explicit tools exclude the default self-identifying entry.
        assert!(!metadata.tools.contains(this_tool()));
        assert_eq!(metadata.tools, tools);
    }

    #[test]
    fn test_this_tool_identity() {
        assert_eq!(this_tool().vendor.as_deref(), Some("CycloneDX"));
        assert_eq!(this_tool().name, "cdx-bom");
        assert_ne!(this_tool().version.as_deref(), Some("UNKNOWN"));
    }

    #[test]
    fn test_metadata_tool_list_can_grow() {
        let mut bom = Bom::new();
        assert_eq!(bom.metadata.tools.len(), 1);
        bom.metadata
            .tools
            .push(Tool::new("TestVendor", "TestTool", "0.0.0"));
        assert_eq!(bom.metadata.tools.len(), 2);
    }

    #[test]
    fn test_metadata_component_assignment() {
        let mut bom = Bom::new();
        assert!(bom.metadata.component.is_none());

        let hextech =
            Component::new("Hextech", "1.0.0").with_type(ComponentType::Library);
        bom.metadata.component = Some(hextech.clone());
        assert_eq!(bom.metadata.component, Some(hextech));
    }
}

// ============================================================================
// Bom
// ============================================================================

mod bom_tests {
    use super::*;

    #[test]
    fn test_empty_bom() {
        let bom = Bom::new();
        assert!(bom.components.is_empty());
        assert!(bom.services.is_empty());
        assert!(bom.external_references.is_empty());
        assert!(!bom.has_vulnerabilities());
    }

    #[test]
    fn test_component_set_deduplicates_by_purl() {
        let mut bom = Bom::new();
        assert!(bom.add_component(setuptools_simple()));
        assert!(!bom.add_component(setuptools_simple()));
        assert_eq!(bom.component_count(), 1);

        // A different version is a different identity.
        assert!(bom.add_component(setuptools_different_version()));
        assert_eq!(bom.component_count(), 2);
    }

    #[test]
    fn test_duplicate_add_keeps_first_entry() {
        let mut bom = Bom::new();
        let mut first = setuptools_simple();
        first.set_author("first author");
        bom.add_component(first);

        let mut second = setuptools_simple();
        second.set_author("second author");
        bom.add_component(second);

        let kept = bom
            .get_component_by_purl("pkg:pypi/setuptools@50.3.2?extension=tar.gz")
            .expect("component present");
        assert_eq!(kept.author.as_deref(), Some("first author"));
    }

    #[test]
    fn test_has_component() {
        let mut bom = Bom::new();
        bom.add_component(setuptools_simple());
        bom.add_component(setuptools_different_version());
        assert_eq!(bom.component_count(), 2);
        assert!(bom.has_component(&setuptools_different_version()));
        assert!(!bom.has_component(&Component::new("requests", "2.28.0")));
    }

    #[test]
    fn test_get_component_by_purl() {
        let mut bom = Bom::new();
        bom.add_component(setuptools_simple());

        let found = bom.get_component_by_purl("pkg:pypi/setuptools@50.3.2?extension=tar.gz");
        assert_eq!(found, Some(&setuptools_simple()));

        // A miss is an absent value, never an error.
        assert!(bom.get_component_by_purl("pkg:pypi/setuptools@50.3.1").is_none());
        assert!(bom.get_component_by_purl("").is_none());
    }

    #[test]
    fn test_bom_with_vulnerable_component() {
        let mut bom = Bom::new();
        let mut component = setuptools_simple();
        component.add_vulnerability(Vulnerability::new("CVE-2022-40897"));
        bom.add_component(component);
        assert!(bom.has_vulnerabilities());
    }

    #[test]
    fn test_vulnerability_union_includes_metadata_root() {
        let mut bom = Bom::new();
        bom.add_component(setuptools_simple());
        assert!(!bom.has_vulnerabilities());

        let mut root = Component::new("my-app", "1.2.3");
        root.add_vulnerability(Vulnerability::new("CVE-2024-0001"));
        bom.metadata.component = Some(root);
        assert!(bom.has_vulnerabilities());
    }

    #[test]
    fn test_validate_passes_with_root_component() {
        let mut bom = Bom::new();
        bom.metadata.component = Some(Component::new("my-app", "1.2.3"));
        bom.add_component(setuptools_simple());
        bom.add_service(Service::new("auth").with_version("2.1"));
        bom.validate().expect("structurally consistent BOM");
    }

    #[test]
    fn test_validate_empty_bom_is_consistent() {
        Bom::new().validate().expect("empty BOM needs no root");
    }

    #[test]
    fn test_validate_requires_root_when_populated() {
        let mut bom = Bom::new();
        bom.add_component(setuptools_simple());

        let err = bom.validate().expect_err("missing root component");
        let violations = err.violations();
        assert_eq!(violations.len(), 1);
        assert!(violations[0].contains("root component"));
    }

    #[test]
    fn test_validate_enumerates_all_violations() {
        let mut bom = Bom::new();
        bom.add_component(Component::new("", ""));

        let err = bom.validate().expect_err("multiple violations");
        // Missing root, empty name, empty version.
        assert_eq!(err.violations().len(), 3);
    }

    #[test]
    fn test_bom_serializes_for_external_encoders() {
        let mut bom = Bom::new();
        bom.metadata.component = Some(Component::new("my-app", "1.2.3"));
        bom.add_component(setuptools_simple());

        let value = serde_json::to_value(&bom).expect("serializable");
        assert_eq!(value["serial_number"], bom.serial_number.to_string());
        assert!(value["components"]["pkg:pypi/setuptools@50.3.2?extension=tar.gz"].is_object());
        assert_eq!(value["metadata"]["component"]["name"], "my-app");
    }
}
