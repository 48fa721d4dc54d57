//! Tests for the tag and type registry

use std::collections::HashMap;

use crate::tiff::errors::TiffError;
use crate::tiff::field_type::FieldType;
use crate::tiff::registry::Registry;

#[test]
fn test_standard_registry_loaded() {
    let registry = Registry::standard();

    assert_eq!(registry.type_count(), 13);
    assert!(registry.tag_count() > 50);
    assert_eq!(registry.tag_name(256), "ImageWidth");
    assert_eq!(registry.tag_name(65000), "Unknown");
    assert_eq!(registry.byte_size(5), Some(8));
    assert_eq!(registry.byte_size(14), None);
}

#[test]
fn test_type_sizes_match_field_types() {
    let registry = Registry::standard();
    for field_type in FieldType::all() {
        let descriptor = registry.lookup_type(field_type.code()).unwrap();
        assert_eq!(descriptor.name, field_type.name());
        assert_eq!(descriptor.byte_size, field_type.size());
    }
}

#[test]
fn test_tag_definition_fields() {
    let registry = Registry::standard();

    let width = registry.lookup_tag(256).unwrap();
    assert!(width.allowed_types.contains("SHORT"));
    assert!(width.allowed_types.contains("LONG"));
    assert_eq!(width.expected_cardinality, Some(1));

    let date_time = registry.lookup_tag(306).unwrap();
    assert_eq!(date_time.expected_cardinality, Some(20));

    let strips = registry.lookup_tag(273).unwrap();
    assert_eq!(strips.expected_cardinality, None);
}

#[test]
fn test_unsigned_integer_types_are_interchangeable() {
    let compression = Registry::standard().lookup_tag(259).unwrap();

    assert!(compression.allows(FieldType::Short));
    assert!(compression.allows(FieldType::Long));
    assert!(compression.allows(FieldType::Byte));
    assert!(compression.allows(FieldType::Ifd));
    assert!(!compression.allows(FieldType::Ascii));
    assert!(!compression.allows(FieldType::SShort));
}

#[test]
fn test_ascii_tag_does_not_accept_integers() {
    let software = Registry::standard().lookup_tag(305).unwrap();
    assert!(software.allows(FieldType::Ascii));
    assert!(!software.allows(FieldType::Short));
}

#[test]
fn test_from_maps() {
    let mut types = HashMap::new();
    types.insert("3".to_string(), "SHORT 2".to_string());
    let mut tags = HashMap::new();
    tags.insert("40000".to_string(), "Private\tSHORT\t2".to_string());
    tags.insert("40001".to_string(), "Other\tSHORT".to_string());

    let registry = Registry::from_maps(&tags, &types).unwrap();
    assert_eq!(registry.tag_count(), 2);
    assert_eq!(registry.lookup_tag(40000).unwrap().expected_cardinality, Some(2));
    assert_eq!(registry.lookup_tag(40001).unwrap().expected_cardinality, None);
}

#[test]
fn test_from_maps_rejects_unknown_type_name() {
    let mut types = HashMap::new();
    types.insert("3".to_string(), "SHORT 2".to_string());
    let mut tags = HashMap::new();
    tags.insert("40000".to_string(), "Private\tLONG\t1".to_string());

    let result = Registry::from_maps(&tags, &types);
    assert!(matches!(result, Err(TiffError::ConfigError(_))));
}

#[test]
fn test_from_toml_str_rejects_malformed_lines() {
    let bad_type = "[types]\n3 = \"SHORT\"\n[tags]\n";
    assert!(Registry::from_toml_str(bad_type).is_err());

    let bad_tag = "[types]\n3 = \"SHORT 2\"\n[tags]\nabc = \"Name\\tSHORT\\t1\"\n";
    assert!(Registry::from_toml_str(bad_tag).is_err());

    let bad_count = "[types]\n3 = \"SHORT 2\"\n[tags]\n1 = \"Name\\tSHORT\\tmany\"\n";
    assert!(Registry::from_toml_str(bad_count).is_err());

    let missing = "[types]\n3 = \"SHORT 2\"\n";
    assert!(Registry::from_toml_str(missing).is_err());
}

#[test]
fn test_from_maps_rejects_redefined_standard_type() {
    let tags = HashMap::new();

    let mut types = HashMap::new();
    types.insert("3".to_string(), "SHORT 1".to_string());
    let result = Registry::from_maps(&tags, &types);
    assert!(matches!(result, Err(TiffError::ConfigError(_))));

    let mut types = HashMap::new();
    types.insert("4".to_string(), "SHORT 4".to_string());
    let result = Registry::from_maps(&tags, &types);
    assert!(matches!(result, Err(TiffError::ConfigError(_))));

    // Codes outside the standard range are free
    let mut types = HashMap::new();
    types.insert("16".to_string(), "LONG8 8".to_string());
    let registry = Registry::from_maps(&tags, &types).unwrap();
    assert_eq!(registry.byte_size(16), Some(8));
}
