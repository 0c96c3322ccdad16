//! Parser and serializer for the v2.3 bound Well-Formed Name syntax
//!
//! `wfn:[part="a",vendor="microsoft",...]` — quoted values carry the
//! standard (escaped) form; the logical tokens `ANY` and `NA` appear
//! unquoted.

use crate::name::{part_bucket, CpeName, Element};
use cpename_core::{Attribute, Component, Error, Result, Version};
use tracing::debug;

pub(crate) const PREFIX: &str = "wfn:[";
const SUFFIX: char = ']';

/// Parse a v2.3 WFN CPE name
pub fn parse(s: &str) -> Result<CpeName> {
    if s.chars().any(char::is_whitespace) {
        return Err(Error::structural("it must not have whitespaces"));
    }

    let body = s
        .strip_prefix(PREFIX)
        .and_then(|rest| rest.strip_suffix(SUFFIX))
        .ok_or_else(|| Error::structural(format!("WFN must be enclosed in 'wfn:[' and ']': {s}")))?;

    debug!(name = s, "parsing WFN name");

    let mut element = Element::new();
    if !body.is_empty() {
        for pair in body.split(',') {
            let (key, value) = pair
                .split_once('=')
                .ok_or_else(|| Error::structural(format!("expected key=value pair: '{pair}'")))?;
            let attribute: Attribute = key.parse()?;
            if element.get(attribute).is_some() {
                return Err(Error::structural(format!("duplicate attribute '{attribute}'")));
            }
            element.insert(attribute, parse_value(value, attribute)?);
        }
    }
    for attribute in Attribute::CANONICAL {
        if element.get(*attribute).is_none() {
            element.insert(*attribute, Component::Undefined);
        }
    }

    let bucket = part_bucket(element.get(Attribute::Part));
    Ok(CpeName::from_single_element(Version::V2_3Wfn, s, bucket, element))
}

/// Parse one bound value: a quoted (escaped) string or a logical token
fn parse_value(value: &str, attribute: Attribute) -> Result<Component> {
    match value {
        "ANY" => Ok(Component::Any),
        "NA" => Ok(Component::NotApplicable),
        _ => {
            let inner = value
                .strip_prefix('"')
                .and_then(|v| v.strip_suffix('"'))
                .ok_or_else(|| {
                    Error::structural(format!(
                        "value of '{attribute}' must be quoted or a logical token: {value}"
                    ))
                })?;
            if inner.is_empty() {
                return Ok(Component::Empty);
            }
            let raw = unescape(inner)?;
            Component::simple(&raw, attribute)
        }
    }
}

/// Inverse of the component decode: strip the backslash escapes the
/// standard form adds. Any other escape sequence is malformed.
fn unescape(s: &str) -> Result<String> {
    let mut result = String::with_capacity(s.len());
    let mut chars = s.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            result.push(c);
            continue;
        }
        match chars.next() {
            Some(e @ ('.' | '-' | '~' | '%' | '\\')) => result.push(e),
            Some(e) => {
                return Err(Error::structural(format!("unrecognized escape sequence '\\{e}'")))
            }
            None => return Err(Error::structural("trailing escape character")),
        }
    }
    Ok(result)
}

/// Project a parsed name to the canonical WFN string.
///
/// Walks the canonical attribute order over the first element only; WFN
/// has no multi-element concept, so the projection is deliberately lossy
/// for multi-element names. Empty and undefined components are skipped.
pub fn serialize(name: &CpeName) -> Result<String> {
    if !name.version().supports_wfn() {
        return Err(Error::UnsupportedProjection(name.version()));
    }

    let mut pairs = Vec::new();
    if let Some(element) = name.first_element() {
        for attribute in Attribute::CANONICAL {
            let Some(component) = element.get(*attribute) else {
                continue;
            };
            match component {
                Component::Empty | Component::Undefined => continue,
                Component::Any => pairs.push(format!("{attribute}=ANY")),
                Component::NotApplicable => pairs.push(format!("{attribute}=NA")),
                Component::Simple { .. } => {
                    pairs.push(format!("{attribute}=\"{}\"", component.standard_value()))
                }
            }
        }
    }
    Ok(format!("wfn:[{}]", pairs.join(",")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{positional, uri};
    use cpename_core::PartKey;

    #[test]
    fn test_parse_wfn() {
        let name = parse("wfn:[part=\"a\",vendor=\"microsoft\",product=\"internet_explorer\"]")
            .unwrap();

        assert_eq!(name.version(), Version::V2_3Wfn);
        assert_eq!(name.get_part().unwrap(), vec!["a".to_string()]);
        assert_eq!(name.get_vendor().unwrap(), vec!["microsoft".to_string()]);
        assert_eq!(name.get_product().unwrap(), vec!["internet_explorer".to_string()]);
        assert_eq!(name.elements(PartKey::Application).len(), 1);
    }

    #[test]
    fn test_parse_escaped_value() {
        let name = parse("wfn:[part=\"a\",vendor=\"microsoft\",version=\"8\\.0\\.6001\"]").unwrap();
        assert_eq!(name.get_version().unwrap(), vec!["8.0.6001".to_string()]);
    }

    #[test]
    fn test_parse_logical_tokens() {
        let name = parse("wfn:[part=\"a\",vendor=\"microsoft\",version=ANY,update=NA]").unwrap();
        let element = &name.elements(PartKey::Application)[0];
        assert_eq!(element.get(Attribute::Version), Some(&Component::Any));
        assert_eq!(element.get(Attribute::Update), Some(&Component::NotApplicable));
        assert_eq!(name.get_version().unwrap(), vec!["*".to_string()]);
        assert_eq!(name.get_update().unwrap(), vec!["-".to_string()]);
    }

    #[test]
    fn test_parse_empty_value() {
        let name = parse("wfn:[part=\"a\",vendor=\"\"]").unwrap();
        let element = &name.elements(PartKey::Application)[0];
        assert_eq!(element.get(Attribute::Vendor), Some(&Component::Empty));
    }

    #[test]
    fn test_parse_rejects_malformed_input() {
        assert!(matches!(parse("wfn:part=\"a\"").unwrap_err(), Error::Structural(_)));
        assert!(matches!(parse("wfn:[part=\"a\"").unwrap_err(), Error::Structural(_)));
        assert!(matches!(parse("wfn:[part]").unwrap_err(), Error::Structural(_)));
        assert!(matches!(parse("wfn:[part=a]").unwrap_err(), Error::Structural(_)));
        assert!(matches!(
            parse("wfn:[part=\"a\",part=\"o\"]").unwrap_err(),
            Error::Structural(_)
        ));
        assert!(matches!(
            parse("wfn:[part=\"a\", vendor=\"microsoft\"]").unwrap_err(),
            Error::Structural(_)
        ));
    }

    #[test]
    fn test_parse_rejects_unknown_attribute() {
        let err = parse("wfn:[flavour=\"a\"]").unwrap_err();
        assert_eq!(err, Error::InvalidAttribute("flavour".to_string()));
    }

    #[test]
    fn test_parse_rejects_bad_escape() {
        let err = parse("wfn:[vendor=\"a\\b\"]").unwrap_err();
        assert!(matches!(err, Error::Structural(_)));
        let err = parse("wfn:[vendor=\"a\\\"]").unwrap_err();
        assert!(matches!(err, Error::Structural(_)));
    }

    #[test]
    fn test_serialize_skips_empty_and_undefined() {
        let name = uri::parse("cpe:/a:microsoft::8.0").unwrap();
        assert_eq!(
            name.as_wfn().unwrap(),
            "wfn:[part=\"a\",vendor=\"microsoft\",version=\"8\\.0\"]"
        );
    }

    #[test]
    fn test_serialize_escapes_nonstandard_chars() {
        let name = uri::parse("cpe:/a:microsoft:internet_explorer:8.0.6001:beta").unwrap();
        assert_eq!(
            name.as_wfn().unwrap(),
            "wfn:[part=\"a\",vendor=\"microsoft\",product=\"internet_explorer\",version=\"8\\.0\\.6001\",update=\"beta\"]"
        );
    }

    #[test]
    fn test_serialize_logical_tokens_unquoted() {
        let wfn = "wfn:[part=\"a\",vendor=ANY,product=NA]";
        let name = parse(wfn).unwrap();
        assert_eq!(name.as_wfn().unwrap(), wfn);
    }

    #[test]
    fn test_wfn_round_trip_preserves_attribute_values() {
        let original = uri::parse("cpe:/a:microsoft:internet_explorer:8.0.6001:beta").unwrap();
        let reparsed = parse(&original.as_wfn().unwrap()).unwrap();

        for attribute in ["part", "vendor", "product", "version", "update", "edition", "language"] {
            assert_eq!(
                original.get_attribute_values(attribute).unwrap(),
                reparsed.get_attribute_values(attribute).unwrap(),
                "attribute {attribute} did not round-trip"
            );
        }
        assert_eq!(original, reparsed);
    }

    #[test]
    fn test_package_round_trip() {
        let original = crate::package::parse("p-cpe:/a:redhat:openssl-devel").unwrap();
        let wfn = original.as_wfn().unwrap();
        assert_eq!(wfn, "wfn:[part=\"a\",vendor=\"redhat\",package=\"openssl\\-devel\"]");
        let reparsed = parse(&wfn).unwrap();
        assert_eq!(reparsed.get_package().unwrap(), vec!["openssl-devel".to_string()]);
        assert_eq!(original, reparsed);
    }

    #[test]
    fn test_serialize_unsupported_for_v1_1() {
        let name = positional::parse("cpe:/juniper:m-series:m7i").unwrap();
        let err = name.as_wfn().unwrap_err();
        assert_eq!(err, Error::UnsupportedProjection(Version::V1_1));
    }

    #[test]
    fn test_serialize_empty_name() {
        let name = parse("wfn:[]").unwrap();
        assert_eq!(name.as_wfn().unwrap(), "wfn:[]");
    }
}
