//! The component value model
//!
//! A component is one attribute's value inside a CPE name element. The
//! original class hierarchy over component kinds is a closed tagged
//! variant here, with exhaustive matches at every consumption site.

use crate::attribute::Attribute;
use crate::error::Result;
use crate::validate::ValidatorRegistry;

/// Characters of the encoded form that the standard (WFN bound) form
/// escapes with a preceding backslash.
const NON_STANDARD_CHARS: [char; 4] = ['.', '-', '~', '%'];

/// One attribute's value
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Component {
    /// A concrete, syntax-encoded value that passed its attribute's
    /// validator. `standard` is the WFN bound form, computed eagerly so
    /// repeated reads never re-validate.
    Simple { encoded: String, standard: String },
    /// Attribute explicitly present but blank
    Empty,
    /// Attribute absent from the source syntax entirely
    Undefined,
    /// WFN wildcard marker (`*`)
    Any,
    /// WFN inapplicability marker (`-`)
    NotApplicable,
}

impl Component {
    /// Construct a concrete component, validating `raw` against the check
    /// registered for `attribute`. Construction is the only mutation point.
    pub fn simple(raw: &str, attribute: Attribute) -> Result<Component> {
        ValidatorRegistry::global().validate(attribute, raw)?;
        Ok(Component::Simple {
            encoded: raw.to_string(),
            standard: decode(raw),
        })
    }

    /// The canonical WFN bound form of the component.
    ///
    /// Sentinel variants map to fixed strings and never pass through the
    /// escaping transform.
    pub fn standard_value(&self) -> &str {
        match self {
            Component::Simple { standard, .. } => standard,
            Component::Empty => "",
            Component::Undefined => "",
            Component::Any => "*",
            Component::NotApplicable => "-",
        }
    }

    /// The display value: the raw encoded string for concrete components,
    /// the literal marker for logical ones, empty for the rest.
    pub fn display_value(&self) -> &str {
        match self {
            Component::Simple { encoded, .. } => encoded,
            Component::Empty => "",
            Component::Undefined => "",
            Component::Any => "*",
            Component::NotApplicable => "-",
        }
    }

    /// True for components the WFN serializer emits
    pub fn is_set(&self) -> bool {
        !matches!(self, Component::Empty | Component::Undefined)
    }

    /// True for the logical ANY / NOT-APPLICABLE markers
    pub fn is_logical(&self) -> bool {
        matches!(self, Component::Any | Component::NotApplicable)
    }
}

impl std::fmt::Display for Component {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_value())
    }
}

/// Convert an encoded component value to the standard (WFN bound) form:
/// one order-preserving pass, escaping each non-standard character with a
/// single preceding backslash.
pub fn decode(encoded: &str) -> String {
    let mut result = String::with_capacity(encoded.len());
    for c in encoded.chars() {
        if NON_STANDARD_CHARS.contains(&c) {
            result.push('\\');
        }
        result.push(c);
    }
    result
}
