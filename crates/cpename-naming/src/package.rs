//! Parser for the v2.2 "p-cpe" package extension
//!
//! `p-cpe:/{part}:{vendor}:{package}` — the URI structure with the
//! package attribute exposed in place of product, always resolving to a
//! single-part name.

use crate::name::{part_bucket, CpeName, Element};
use crate::uri::capture_component;
use cpename_core::{Attribute, Component, Error, Result, Version};
use regex::Regex;
use std::sync::OnceLock;
use tracing::debug;

pub(crate) const PREFIX: &str = "p-cpe:/";

fn parts_pattern() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(
            r"^p-cpe:/(?P<part>[^:]+)?(?P<vendor_m>:(?P<vendor>[^:]+)?)?(?P<package_m>:(?P<package>[^:]+)?)?$",
        )
        .unwrap()
    })
}

const GROUPS: [(Attribute, &str, Option<&str>); 3] = [
    (Attribute::Part, "part", None),
    (Attribute::Vendor, "vendor", Some("vendor_m")),
    (Attribute::Package, "package", Some("package_m")),
];

/// Parse a p-cpe package CPE name
pub fn parse(s: &str) -> Result<CpeName> {
    if s.chars().any(char::is_whitespace) {
        return Err(Error::structural("it must not have whitespaces"));
    }

    let caps = parts_pattern()
        .captures(s)
        .ok_or_else(|| Error::structural(format!("validation of parts failed: {s}")))?;

    debug!(name = s, "parsing p-cpe name");

    let mut element = Element::new();
    for (attribute, group, marker) in GROUPS {
        element.insert(attribute, capture_component(&caps, attribute, group, marker)?);
    }
    for attribute in Attribute::CANONICAL {
        if element.get(*attribute).is_none() {
            element.insert(*attribute, Component::Undefined);
        }
    }

    let bucket = part_bucket(element.get(Attribute::Part));
    Ok(CpeName::from_single_element(
        Version::V2_2Package,
        s,
        bucket,
        element,
    ))
}
