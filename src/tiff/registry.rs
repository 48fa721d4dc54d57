//! Tag and type definition registry
//!
//! The registry is built from two string tables: tag number to
//! `"Name\tTYPE,TYPE\tcardinality"` and type code to `"NAME size"`. The
//! standard tables ship in `tiff_tags.toml` and are parsed once, on first
//! use, into a shared `Registry`.

use std::collections::{BTreeSet, HashMap};

use lazy_static::lazy_static;
use log::{debug, error};

use crate::tiff::errors::{TiffError, TiffResult};
use crate::tiff::field_type::FieldType;

lazy_static! {
    // Parse the embedded tables on first access
    static ref STANDARD_REGISTRY: Registry = {
        let content = include_str!("../../tiff_tags.toml");
        Registry::from_toml_str(content).unwrap_or_else(|e| {
            error!("Failed to parse standard tag definitions: {}", e);
            Registry::default()
        })
    };
}

/// Definition of a known tag
#[derive(Debug, Clone, PartialEq)]
pub struct TagDefinition {
    pub tag: u16,
    pub name: String,
    /// Type names the tag may be declared with
    pub allowed_types: BTreeSet<String>,
    /// Minimum number of values, when the tag fixes one
    pub expected_cardinality: Option<u32>,
}

impl TagDefinition {
    /// Whether an entry of this tag may be declared with `field_type`
    ///
    /// BYTE, SHORT, LONG and IFD are interchangeable whenever the tag
    /// allows any one of them.
    pub fn allows(&self, field_type: FieldType) -> bool {
        if self.allowed_types.contains(field_type.name()) {
            return true;
        }

        field_type.is_unsigned_integer()
            && FieldType::all()
                .iter()
                .filter(|t| t.is_unsigned_integer())
                .any(|t| self.allowed_types.contains(t.name()))
    }
}

/// Definition of a known field type
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeDescriptor {
    pub name: String,
    pub numeric_id: u16,
    pub byte_size: u32,
}

/// Lookup tables for tags and types
#[derive(Debug, Clone, Default)]
pub struct Registry {
    tags: HashMap<u16, TagDefinition>,
    types: HashMap<u16, TypeDescriptor>,
}

impl Registry {
    /// The registry parsed from the embedded standard tables
    pub fn standard() -> &'static Registry {
        &STANDARD_REGISTRY
    }

    /// Builds a registry from already-parsed tag and type tables
    pub fn from_maps(
        tag_table: &HashMap<String, String>,
        type_table: &HashMap<String, String>,
    ) -> TiffResult<Self> {
        let mut registry = Registry::default();

        for (key, value) in type_table {
            let descriptor = parse_type_line(key, value)?;
            registry.types.insert(descriptor.numeric_id, descriptor);
        }

        for (key, value) in tag_table {
            let definition = parse_tag_line(key, value)?;
            for type_name in &definition.allowed_types {
                if !registry.types.values().any(|t| &t.name == type_name) {
                    return Err(TiffError::ConfigError(format!(
                        "Tag {} ({}) allows unknown type {}",
                        definition.tag, definition.name, type_name
                    )));
                }
            }
            registry.tags.insert(definition.tag, definition);
        }

        debug!(
            "Registry built with {} tags and {} types",
            registry.tags.len(),
            registry.types.len()
        );
        Ok(registry)
    }

    /// Builds a registry from the `[tags]` and `[types]` tables of a TOML document
    pub fn from_toml_str(content: &str) -> TiffResult<Self> {
        let toml_value: toml::Value = content
            .parse()
            .map_err(|e| TiffError::ConfigError(format!("Failed to parse TOML: {}", e)))?;

        Self::from_toml_value(&toml_value)
    }

    pub(crate) fn from_toml_value(toml_value: &toml::Value) -> TiffResult<Self> {
        let tag_table = string_table(toml_value, "tags")?;
        let type_table = string_table(toml_value, "types")?;
        Self::from_maps(&tag_table, &type_table)
    }

    pub fn lookup_tag(&self, tag: u16) -> Option<&TagDefinition> {
        self.tags.get(&tag)
    }

    pub fn lookup_type(&self, type_code: u16) -> Option<&TypeDescriptor> {
        self.types.get(&type_code)
    }

    /// Element size of a type code, if the type is known
    pub fn byte_size(&self, type_code: u16) -> Option<u32> {
        self.types.get(&type_code).map(|t| t.byte_size)
    }

    /// Name of a tag, or "Unknown"
    pub fn tag_name(&self, tag: u16) -> &str {
        self.tags.get(&tag).map_or("Unknown", |d| d.name.as_str())
    }

    pub fn tag_count(&self) -> usize {
        self.tags.len()
    }

    pub fn type_count(&self) -> usize {
        self.types.len()
    }
}

fn string_table(toml_value: &toml::Value, table_name: &str) -> TiffResult<HashMap<String, String>> {
    let table = toml_value
        .get(table_name)
        .and_then(|v| v.as_table())
        .ok_or_else(|| TiffError::ConfigError(format!("Missing [{}] table", table_name)))?;

    let mut map = HashMap::with_capacity(table.len());
    for (key, value) in table {
        let text = value.as_str().ok_or_else(|| {
            TiffError::ConfigError(format!("[{}] entry {} is not a string", table_name, key))
        })?;
        map.insert(key.clone(), text.to_string());
    }
    Ok(map)
}

fn parse_type_line(key: &str, value: &str) -> TiffResult<TypeDescriptor> {
    let numeric_id = key
        .trim()
        .parse::<u16>()
        .map_err(|_| TiffError::ConfigError(format!("Invalid type code: {}", key)))?;

    let mut parts = value.split_whitespace();
    let (name, size) = match (parts.next(), parts.next(), parts.next()) {
        (Some(name), Some(size), None) => (name, size),
        _ => {
            return Err(TiffError::ConfigError(format!(
                "Type {} must be \"NAME size\", got {:?}",
                key, value
            )))
        }
    };

    let byte_size = size
        .parse::<u32>()
        .map_err(|_| TiffError::ConfigError(format!("Invalid size for type {}: {}", key, size)))?;

    // Codes 1..13 must keep their standard name and size
    if let Some(field_type) = FieldType::from_code(numeric_id) {
        if field_type.name() != name || field_type.size() != byte_size {
            return Err(TiffError::ConfigError(format!(
                "Type {} must be \"{} {}\", got {:?}",
                key,
                field_type.name(),
                field_type.size(),
                value
            )));
        }
    }

    Ok(TypeDescriptor {
        name: name.to_string(),
        numeric_id,
        byte_size,
    })
}

fn parse_tag_line(key: &str, value: &str) -> TiffResult<TagDefinition> {
    let tag = key
        .trim()
        .parse::<u16>()
        .map_err(|_| TiffError::ConfigError(format!("Invalid tag number: {}", key)))?;

    let fields: Vec<&str> = value.split('\t').collect();
    if fields.len() < 2 || fields.len() > 3 {
        return Err(TiffError::ConfigError(format!(
            "Tag {} must be \"Name\\tTYPES[\\tcardinality]\", got {:?}",
            key, value
        )));
    }

    let name = fields[0].trim();
    if name.is_empty() {
        return Err(TiffError::ConfigError(format!("Tag {} has an empty name", key)));
    }

    let allowed_types: BTreeSet<String> = fields[1]
        .split(',')
        .map(|t| t.trim().to_string())
        .filter(|t| !t.is_empty())
        .collect();
    if allowed_types.is_empty() {
        return Err(TiffError::ConfigError(format!("Tag {} allows no types", key)));
    }

    // Empty or "N" means the count depends on other tags
    let expected_cardinality = match fields.get(2).map(|c| c.trim()) {
        None | Some("") | Some("N") => None,
        Some(count) => Some(count.parse::<u32>().map_err(|_| {
            TiffError::ConfigError(format!("Invalid cardinality for tag {}: {}", key, count))
        })?),
    };

    Ok(TagDefinition {
        tag,
        name: name.to_string(),
        allowed_types,
        expected_cardinality,
    })
}
