//! Parser for the v1.1 slash/semicolon positional syntax
//!
//! `cpe:/{hardware}/{os}/{application}` with `;`-separated elements per
//! part and `:`-separated positional fields (vendor, product, version)
//! per element.

use crate::name::{CpeName, Element};
use cpename_core::{Attribute, Component, Error, PartKey, Result, Version};
use tracing::debug;

const PREFIX: &str = "cpe:/";

/// Positional field order of a v1.1 element
const FIELD_KEYS: [Attribute; 3] = [Attribute::Vendor, Attribute::Product, Attribute::Version];

/// Parse a v1.1 positional CPE name
pub fn parse(s: &str) -> Result<CpeName> {
    if s.chars().any(char::is_whitespace) {
        return Err(Error::structural("it must not have whitespaces"));
    }

    let data = s
        .strip_prefix(PREFIX)
        .ok_or_else(|| Error::structural(format!("missing '{PREFIX}' prefix: {s}")))?;

    let segments: Vec<&str> = data.split('/').collect();
    if segments.len() > 3 {
        return Err(Error::structural("CPE name with more than three parts"));
    }

    debug!(name = s, segments = segments.len(), "parsing v1.1 name");

    let mut name = CpeName::new(Version::V1_1, s);
    let buckets = [PartKey::Hardware, PartKey::Os, PartKey::Application];

    for (segment, bucket) in segments.iter().zip(buckets) {
        // An empty segment is an empty element list, not an error
        if segment.is_empty() {
            continue;
        }
        for elem_str in segment.split(';') {
            name.push_element(bucket, parse_element(elem_str)?);
        }
    }

    Ok(name)
}

/// Parse one `;`-separated element into its positional fields. Fields
/// the element does not carry are omitted, not set to empty.
fn parse_element(elem_str: &str) -> Result<Element> {
    let fields: Vec<&str> = elem_str.split(':').collect();
    if fields.len() > FIELD_KEYS.len() {
        return Err(Error::structural(format!(
            "element '{elem_str}' has more than three fields"
        )));
    }

    let mut element = Element::new();
    for (field, attribute) in fields.iter().zip(FIELD_KEYS) {
        let component = if field.is_empty() {
            Component::Empty
        } else {
            Component::simple(field, attribute)?
        };
        element.insert(attribute, component);
    }
    Ok(element)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_name_without_parts() {
        let name = parse("cpe:/").unwrap();
        assert!(name.elements(PartKey::Hardware).is_empty());
        assert!(name.elements(PartKey::Os).is_empty());
        assert!(name.elements(PartKey::Application).is_empty());
        assert_eq!(name.raw(), "cpe:/");
    }

    #[test]
    fn test_parse_hardware_elements() {
        let name = parse("cpe:/juniper:m-series:m7i;juniper:es-pic").unwrap();

        let hardware = name.elements(PartKey::Hardware);
        assert_eq!(hardware.len(), 2);

        let first = &hardware[0];
        assert_eq!(first.get(Attribute::Vendor).unwrap().display_value(), "juniper");
        assert_eq!(first.get(Attribute::Product).unwrap().display_value(), "m-series");
        assert_eq!(first.get(Attribute::Version).unwrap().display_value(), "m7i");

        // The second element has no version key at all, not an empty one
        let second = &hardware[1];
        assert_eq!(second.get(Attribute::Vendor).unwrap().display_value(), "juniper");
        assert_eq!(second.get(Attribute::Product).unwrap().display_value(), "es-pic");
        assert!(second.get(Attribute::Version).is_none());

        assert!(name.elements(PartKey::Os).is_empty());
        assert!(name.elements(PartKey::Application).is_empty());
    }

    #[test]
    fn test_parse_empty_segments_and_omitted_fields() {
        let name = parse("cpe:///:product").unwrap();

        assert!(name.elements(PartKey::Hardware).is_empty());
        assert!(name.elements(PartKey::Os).is_empty());

        let apps = name.elements(PartKey::Application);
        assert_eq!(apps.len(), 1);
        assert_eq!(apps[0].get(Attribute::Vendor), Some(&Component::Empty));
        assert_eq!(apps[0].get(Attribute::Product).unwrap().display_value(), "product");
        assert!(apps[0].get(Attribute::Version).is_none());
    }

    #[test]
    fn test_more_than_three_parts_fails() {
        let err = parse("cpe:/h/o/a/x").unwrap_err();
        assert!(matches!(err, Error::Structural(_)));
        assert!(err.to_string().contains("more than three parts"));
    }

    #[test]
    fn test_more_than_three_fields_fails() {
        let err = parse("cpe:/juniper:m-series:m7i:extra").unwrap_err();
        assert!(matches!(err, Error::Structural(_)));
    }

    #[test]
    fn test_whitespace_is_structural_error() {
        let err = parse("cpe:/juniper:m series").unwrap_err();
        assert!(matches!(err, Error::Structural(_)));
        let err = parse("cpe:/juniper\t:m-series").unwrap_err();
        assert!(matches!(err, Error::Structural(_)));
    }

    #[test]
    fn test_invalid_field_value_is_validation_error() {
        let err = parse("cpe:/juniper:m!series").unwrap_err();
        assert_eq!(
            err,
            Error::Validation {
                attribute: "product".to_string(),
                value: "m!series".to_string(),
            }
        );
    }

    #[test]
    fn test_missing_prefix_fails() {
        assert!(matches!(parse("juniper:m-series").unwrap_err(), Error::Structural(_)));
    }
}
