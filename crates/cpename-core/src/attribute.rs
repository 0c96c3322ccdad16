//! Attribute keys, platform parts, and CPE syntax versions

use crate::error::Error;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// An attribute of a CPE name component.
///
/// The declaration order is the canonical serialization order; WFN output
/// and the display form walk attributes in exactly this sequence, and the
/// derived `Ord` keeps element maps iterating in it.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Attribute {
    /// Platform category letter (h, o, a)
    Part,
    /// Vendor name
    Vendor,
    /// Product name
    Product,
    /// Package name (p-cpe extension)
    Package,
    /// Version string
    Version,
    /// Update/patch level
    Update,
    /// Edition, plain or packed five-subfield form
    Edition,
    /// Language tag
    Language,
    /// Catch-all attribute of the 2.3 extended set
    Other,
}

impl Attribute {
    /// Canonical attribute order, shared by WFN serialization and display.
    pub const CANONICAL: &'static [Attribute] = &[
        Attribute::Part,
        Attribute::Vendor,
        Attribute::Product,
        Attribute::Package,
        Attribute::Version,
        Attribute::Update,
        Attribute::Edition,
        Attribute::Language,
        Attribute::Other,
    ];

    /// Get the attribute name as used in WFN pairs and queries
    pub fn as_str(&self) -> &'static str {
        match self {
            Attribute::Part => "part",
            Attribute::Vendor => "vendor",
            Attribute::Product => "product",
            Attribute::Package => "package",
            Attribute::Version => "version",
            Attribute::Update => "update",
            Attribute::Edition => "edition",
            Attribute::Language => "language",
            Attribute::Other => "other",
        }
    }
}

impl std::fmt::Display for Attribute {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Attribute {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "part" => Ok(Attribute::Part),
            "vendor" => Ok(Attribute::Vendor),
            "product" => Ok(Attribute::Product),
            "package" => Ok(Attribute::Package),
            "version" => Ok(Attribute::Version),
            "update" => Ok(Attribute::Update),
            "edition" => Ok(Attribute::Edition),
            "language" => Ok(Attribute::Language),
            "other" => Ok(Attribute::Other),
            _ => Err(Error::InvalidAttribute(s.to_string())),
        }
    }
}

/// Platform part bucket of a CPE name.
///
/// `Undefined` holds the element of a single-part name whose part
/// component is not a concrete h/o/a letter.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum PartKey {
    Hardware,
    Os,
    Application,
    Undefined,
}

impl PartKey {
    /// Part bucket iteration order used by accessors and display
    pub const ALL: &'static [PartKey] = &[
        PartKey::Hardware,
        PartKey::Os,
        PartKey::Application,
        PartKey::Undefined,
    ];

    /// Resolve a bucket from a part letter
    pub fn from_letter(letter: &str) -> PartKey {
        match letter {
            "h" => PartKey::Hardware,
            "o" => PartKey::Os,
            "a" => PartKey::Application,
            _ => PartKey::Undefined,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            PartKey::Hardware => "hardware",
            PartKey::Os => "os",
            PartKey::Application => "application",
            PartKey::Undefined => "undefined",
        }
    }
}

impl std::fmt::Display for PartKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// CPE syntax version a name was parsed from
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize,
)]
pub enum Version {
    /// Slash/semicolon positional syntax
    #[serde(rename = "1.1")]
    V1_1,
    /// Colon-delimited URI syntax
    #[serde(rename = "2.2")]
    V2_2,
    /// Package ("p-cpe") extension of the URI syntax
    #[serde(rename = "2.2-package")]
    V2_2Package,
    /// Bound Well-Formed Name syntax
    #[serde(rename = "2.3-wfn")]
    V2_3Wfn,
}

impl Version {
    /// Attribute keys the version's grammar can populate
    pub fn attribute_keys(&self) -> &'static [Attribute] {
        match self {
            Version::V1_1 => &[Attribute::Vendor, Attribute::Product, Attribute::Version],
            Version::V2_2 => &[
                Attribute::Part,
                Attribute::Vendor,
                Attribute::Product,
                Attribute::Version,
                Attribute::Update,
                Attribute::Edition,
                Attribute::Language,
            ],
            Version::V2_2Package => &[Attribute::Part, Attribute::Vendor, Attribute::Package],
            Version::V2_3Wfn => Attribute::CANONICAL,
        }
    }

    /// Attribute keys valid for accessor queries against a parsed name.
    ///
    /// 2.2-family names carry the uncaptured extended keys as undefined
    /// components, so the whole extended set is queryable.
    pub fn extended_keys(&self) -> &'static [Attribute] {
        match self {
            Version::V1_1 => &[Attribute::Vendor, Attribute::Product, Attribute::Version],
            Version::V2_2 | Version::V2_2Package | Version::V2_3Wfn => Attribute::CANONICAL,
        }
    }

    /// The literal syntax prefix of the version
    pub fn prefix(&self) -> &'static str {
        match self {
            Version::V1_1 => "cpe:/",
            Version::V2_2 => "cpe:/",
            Version::V2_2Package => "p-cpe:/",
            Version::V2_3Wfn => "wfn:[",
        }
    }

    /// Whether names of this version project to a WFN string
    pub fn supports_wfn(&self) -> bool {
        !matches!(self, Version::V1_1)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Version::V1_1 => "1.1",
            Version::V2_2 => "2.2",
            Version::V2_2Package => "2.2-package",
            Version::V2_3Wfn => "2.3-wfn",
        }
    }
}

impl std::fmt::Display for Version {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
