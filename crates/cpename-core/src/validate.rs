//! Attribute validator registry
//!
//! A fixed mapping from attribute key to a validation predicate over the
//! raw (pre-escape) component value. Queried once per attribute during
//! parse; no mutable state, no I/O.

use crate::attribute::Attribute;
use crate::error::{Error, Result};
use regex::Regex;
use std::collections::HashMap;
use std::sync::OnceLock;
use tracing::debug;

type Validator = fn(&str) -> bool;

/// Registry of per-attribute validation predicates
pub struct ValidatorRegistry {
    validators: HashMap<Attribute, Validator>,
}

impl ValidatorRegistry {
    fn new() -> Self {
        let mut validators: HashMap<Attribute, Validator> = HashMap::new();
        validators.insert(Attribute::Part, is_valid_part);
        validators.insert(Attribute::Language, is_valid_language);
        validators.insert(Attribute::Edition, is_valid_edition);
        // The package extension reuses the generic character class
        validators.insert(Attribute::Package, is_valid_value);
        Self { validators }
    }

    /// Shared read-only registry, built on first use
    pub fn global() -> &'static ValidatorRegistry {
        static REGISTRY: OnceLock<ValidatorRegistry> = OnceLock::new();
        REGISTRY.get_or_init(ValidatorRegistry::new)
    }

    /// Check a raw value against the validator registered for `attribute`.
    ///
    /// Attributes without a dedicated entry use the generic value check.
    pub fn validate(&self, attribute: Attribute, value: &str) -> Result<()> {
        let validator = self
            .validators
            .get(&attribute)
            .copied()
            .unwrap_or(is_valid_value as Validator);

        if validator(value) {
            Ok(())
        } else {
            debug!(attribute = attribute.as_str(), value, "component value rejected");
            Err(Error::validation(attribute.as_str(), value))
        }
    }
}

fn value_pattern() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^[\w.\-~%]+$").unwrap())
}

fn language_pattern() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^[a-z]{2,3}(-([a-z]{2}|[0-9]{3}))?$").unwrap())
}

fn packed_edition_pattern() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    // ~edition~sw_edition~target_sw~target_hw~other, subfields generic-or-empty
    RE.get_or_init(|| Regex::new(r"^(~[\w.\-%]*){5}$").unwrap())
}

/// Generic value check: alphanumerics, underscore, dot, hyphen, tilde, percent
fn is_valid_value(value: &str) -> bool {
    value_pattern().is_match(value)
}

/// Part letter check: exactly one of h, o, a
fn is_valid_part(value: &str) -> bool {
    matches!(value, "h" | "o" | "a")
}

/// Language tag check: primary subtag, optional region subtag
fn is_valid_language(value: &str) -> bool {
    language_pattern().is_match(value)
}

/// Edition check: generic value, or the packed five-subfield WFN form.
/// A value containing the pack delimiter must be a well-formed pack.
fn is_valid_edition(value: &str) -> bool {
    if value.contains('~') {
        packed_edition_pattern().is_match(value)
    } else {
        is_valid_value(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn validate(attribute: Attribute, value: &str) -> Result<()> {
        ValidatorRegistry::global().validate(attribute, value)
    }

    #[test]
    fn test_generic_value() {
        assert!(validate(Attribute::Vendor, "microsoft").is_ok());
        assert!(validate(Attribute::Product, "internet_explorer").is_ok());
        assert!(validate(Attribute::Version, "8.0.6001").is_ok());
        assert!(validate(Attribute::Vendor, "m-series~1%2f").is_ok());
    }

    #[test]
    fn test_generic_value_rejects() {
        assert!(validate(Attribute::Vendor, "").is_err());
        assert!(validate(Attribute::Vendor, "a b").is_err());
        assert!(validate(Attribute::Vendor, "a:b").is_err());
        assert!(validate(Attribute::Vendor, "a!").is_err());
    }

    #[test]
    fn test_part_letters() {
        assert!(validate(Attribute::Part, "h").is_ok());
        assert!(validate(Attribute::Part, "o").is_ok());
        assert!(validate(Attribute::Part, "a").is_ok());
        assert!(validate(Attribute::Part, "x").is_err());
        assert!(validate(Attribute::Part, "ha").is_err());
    }

    #[test]
    fn test_part_error_names_attribute_and_value() {
        let err = validate(Attribute::Part, "x").unwrap_err();
        assert_eq!(
            err,
            Error::Validation {
                attribute: "part".to_string(),
                value: "x".to_string(),
            }
        );
    }

    #[test]
    fn test_language_tags() {
        assert!(validate(Attribute::Language, "en").is_ok());
        assert!(validate(Attribute::Language, "en-us").is_ok());
        assert!(validate(Attribute::Language, "es-419").is_ok());
        assert!(validate(Attribute::Language, "fil").is_ok());
        assert!(validate(Attribute::Language, "english").is_err());
        assert!(validate(Attribute::Language, "en-").is_err());
        assert!(validate(Attribute::Language, "EN").is_err());
    }

    #[test]
    fn test_packed_edition() {
        assert!(validate(Attribute::Edition, "enterprise").is_ok());
        assert!(validate(Attribute::Edition, "~~~~~").is_ok());
        assert!(validate(Attribute::Edition, "~ed~sw~linux~x64~extra").is_ok());
        assert!(validate(Attribute::Edition, "~ed~sw~linux~x64").is_err());
        assert!(validate(Attribute::Edition, "~ed~sw~linux~x64~o~o").is_err());
        assert!(validate(Attribute::Edition, "~ed~s w~linux~x64~o").is_err());
    }

    #[test]
    fn test_package_uses_generic() {
        assert!(validate(Attribute::Package, "openssl-devel").is_ok());
        assert!(validate(Attribute::Package, "openssl devel").is_err());
    }
}
