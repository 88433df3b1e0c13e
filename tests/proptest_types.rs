//! Property-based tests for core model types.
//!
//! Ensures purl identity and license handling hold across random inputs
//! without panicking.

use cdx_bom::model::{Bom, Component, LicenseExpression, LicenseFactory};
use proptest::prelude::*;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    #[test]
    fn purl_is_deterministic(
        name in "[a-z][a-z0-9-]{0,30}",
        version in "[0-9]{1,3}\\.[0-9]{1,3}\\.[0-9]{1,3}",
    ) {
        let a = Component::new(name.clone(), version.clone());
        let b = Component::new(name.clone(), version.clone());
        prop_assert_eq!(a.purl(), b.purl());
        prop_assert_eq!(a.purl(), format!("pkg:pypi/{}@{}", name, version));
    }

    #[test]
    fn equal_purl_means_equal_component_and_one_bom_member(
        name in "[a-z][a-z0-9-]{0,30}",
        version in "[0-9]{1,3}\\.[0-9]{1,3}\\.[0-9]{1,3}",
        author in "\\PC{0,40}",
    ) {
        let a = Component::new(name.clone(), version.clone());
        let mut b = Component::new(name, version);
        b.set_author(author);
        prop_assert_eq!(&a, &b);

        let mut bom = Bom::new();
        prop_assert!(bom.add_component(a));
        prop_assert!(!bom.add_component(b));
        prop_assert_eq!(bom.component_count(), 1);
    }

    #[test]
    fn distinct_versions_are_distinct_members(
        name in "[a-z][a-z0-9-]{0,30}",
        major_a in 0u32..100,
        major_b in 100u32..200,
    ) {
        let a = Component::new(name.clone(), format!("{major_a}.0.0"));
        let b = Component::new(name, format!("{major_b}.0.0"));
        prop_assert_ne!(&a, &b);

        let mut bom = Bom::new();
        bom.add_component(a);
        bom.add_component(b);
        prop_assert_eq!(bom.component_count(), 2);
    }

    #[test]
    fn component_construction_doesnt_panic(
        name in "\\PC{0,60}",
        version in "\\PC{0,30}",
    ) {
        let component = Component::new(name, version);
        let _ = component.purl();
        let _ = component.display_name();
        let _ = component.has_vulnerabilities();
        // Typed conversion may fail on odd input but must not panic.
        let _ = component.to_package_url();
    }

    #[test]
    fn license_expression_doesnt_panic(s in "\\PC{0,200}") {
        let expr = LicenseExpression::new(s);
        let _ = expr.is_compound();
        let _ = expr.to_string();
        let _ = expr.is_valid_spdx;
    }

    #[test]
    fn license_factory_total_over_strings(s in "\\PC{1,80}") {
        let factory = LicenseFactory;
        let license = factory.make_from_string(&s);
        // Exactly one of id/name is set.
        prop_assert!(license.id.is_some() ^ license.name.is_some());
    }

    #[test]
    fn known_spdx_ids_resolve(
        id in "(MIT|Apache-2\\.0|GPL-2\\.0-only|BSD-3-Clause|ISC|Unlicense|MPL-2\\.0)",
    ) {
        let factory = LicenseFactory;
        let license = factory.make_with_id(&id).expect("known SPDX id");
        prop_assert_eq!(license.id, Some(id));
    }
}
