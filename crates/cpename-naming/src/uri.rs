//! Parser for the v2.2 colon-delimited URI syntax
//!
//! `cpe:/{part}:{vendor}:{product}:{version}:{update}:{edition}:{language}`
//!
//! One anchored pattern with named captures. Each field also has a
//! segment-marker group so omitted trailing fields (undefined) stay
//! distinct from fields matched zero-width between colons (empty).

use crate::name::{part_bucket, CpeName, Element};
use cpename_core::{Attribute, Component, Error, Result, Version};
use regex::{Captures, Regex};
use std::sync::OnceLock;
use tracing::debug;

fn parts_pattern() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(
            r"^cpe:/(?P<part>[^:]+)?(?P<vendor_m>:(?P<vendor>[^:]+)?)?(?P<product_m>:(?P<product>[^:]+)?)?(?P<version_m>:(?P<version>[^:]+)?)?(?P<update_m>:(?P<update>[^:]+)?)?(?P<edition_m>:(?P<edition>[^:]+)?)?(?P<language_m>:(?P<language>[^:]+)?)?$",
        )
        .unwrap()
    })
}

/// Capture groups of the URI grammar, with their segment markers. The
/// part field has no marker; its absence is always undefined.
const GROUPS: [(Attribute, &str, Option<&str>); 7] = [
    (Attribute::Part, "part", None),
    (Attribute::Vendor, "vendor", Some("vendor_m")),
    (Attribute::Product, "product", Some("product_m")),
    (Attribute::Version, "version", Some("version_m")),
    (Attribute::Update, "update", Some("update_m")),
    (Attribute::Edition, "edition", Some("edition_m")),
    (Attribute::Language, "language", Some("language_m")),
];

/// Parse a v2.2 URI CPE name
pub fn parse(s: &str) -> Result<CpeName> {
    if s.chars().any(char::is_whitespace) {
        return Err(Error::structural("it must not have whitespaces"));
    }

    let caps = parts_pattern()
        .captures(s)
        .ok_or_else(|| Error::structural(format!("validation of parts failed: {s}")))?;

    debug!(name = s, "parsing v2.2 URI name");

    let mut element = Element::new();
    for (attribute, group, marker) in GROUPS {
        element.insert(attribute, capture_component(&caps, attribute, group, marker)?);
    }
    // Extended keys the 2.2 grammar does not capture
    for attribute in Attribute::CANONICAL {
        if element.get(*attribute).is_none() {
            element.insert(*attribute, Component::Undefined);
        }
    }

    let bucket = part_bucket(element.get(Attribute::Part));
    Ok(CpeName::from_single_element(Version::V2_2, s, bucket, element))
}

/// Turn one named capture into a component: captured text is validated as
/// a simple value; an unmatched field with a matched segment marker is
/// empty; everything else is undefined.
pub(crate) fn capture_component(
    caps: &Captures<'_>,
    attribute: Attribute,
    group: &str,
    marker: Option<&str>,
) -> Result<Component> {
    if let Some(m) = caps.name(group) {
        return Component::simple(m.as_str(), attribute);
    }
    match marker {
        Some(marker) if caps.name(marker).is_some() => Ok(Component::Empty),
        _ => Ok(Component::Undefined),
    }
}
