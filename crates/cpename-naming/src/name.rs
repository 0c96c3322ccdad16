//! The version-agnostic CPE name aggregate
//!
//! A parsed name holds one ordered element list per platform part. Names
//! are built once by a grammar parser and read through accessors; there
//! is no in-place edit API.

use cpename_core::{Attribute, Component, Error, PartKey, Result, Version};
use serde_json::{json, Map, Value};
use std::collections::BTreeMap;

/// One platform instance description: an ordered mapping from attribute
/// key to component. v1.1 elements omit absent positional fields; the
/// other grammars store every extended key.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Element {
    components: BTreeMap<Attribute, Component>,
}

impl Element {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn insert(&mut self, attribute: Attribute, component: Component) {
        self.components.insert(attribute, component);
    }

    /// Get the component stored for an attribute, if present
    pub fn get(&self, attribute: Attribute) -> Option<&Component> {
        self.components.get(&attribute)
    }

    /// Iterate components in canonical attribute order
    pub fn iter(&self) -> impl Iterator<Item = (Attribute, &Component)> {
        self.components.iter().map(|(k, v)| (*k, v))
    }

    pub fn len(&self) -> usize {
        self.components.len()
    }

    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }
}

/// A parsed CPE name: the syntax version, the original string, and the
/// per-part element lists. All four part buckets are always present so
/// accessors never fail on a valid name.
#[derive(Debug, Clone)]
pub struct CpeName {
    version: Version,
    raw: String,
    parts: BTreeMap<PartKey, Vec<Element>>,
}

impl CpeName {
    pub(crate) fn new(version: Version, raw: &str) -> Self {
        let mut parts = BTreeMap::new();
        for pk in PartKey::ALL {
            parts.insert(*pk, Vec::new());
        }
        Self {
            version,
            raw: raw.to_string(),
            parts,
        }
    }

    pub(crate) fn from_single_element(
        version: Version,
        raw: &str,
        part: PartKey,
        element: Element,
    ) -> Self {
        let mut name = CpeName::new(version, raw);
        name.push_element(part, element);
        name
    }

    pub(crate) fn push_element(&mut self, part: PartKey, element: Element) {
        self.parts.entry(part).or_default().push(element);
    }

    /// The syntax version the name was parsed from
    pub fn version(&self) -> Version {
        self.version
    }

    /// The original input string
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// The elements of one part bucket, in parse order
    pub fn elements(&self, part: PartKey) -> &[Element] {
        self.parts.get(&part).map(Vec::as_slice).unwrap_or(&[])
    }

    /// The first element in part-key iteration order, if any
    pub fn first_element(&self) -> Option<&Element> {
        PartKey::ALL
            .iter()
            .flat_map(|pk| self.elements(*pk))
            .next()
    }

    /// Component count of the name, defined from the original string:
    /// the number of colon-delimited segments after the syntax prefix.
    /// Deliberately literal-string-based, not derived from the parsed
    /// structure.
    pub fn len(&self) -> usize {
        let data = self
            .raw
            .strip_prefix(self.version.prefix())
            .unwrap_or(&self.raw);
        let data = match self.version {
            Version::V2_3Wfn => data.strip_suffix(']').unwrap_or(data),
            _ => data,
        };
        if data.is_empty() {
            0
        } else {
            data.matches(':').count() + 1
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Return the values of one attribute across every element of every
    /// part, in part-key order then element order. Empty, undefined, and
    /// omitted components yield the empty string.
    pub fn get_attribute_values(&self, attribute: &str) -> Result<Vec<String>> {
        let attr: Attribute = attribute.parse()?;
        if !self.version.extended_keys().contains(&attr) {
            return Err(Error::InvalidAttribute(attribute.to_string()));
        }

        let mut values = Vec::new();
        for pk in PartKey::ALL {
            for element in self.elements(*pk) {
                let value = element.get(attr).map(Component::display_value).unwrap_or("");
                values.push(value.to_string());
            }
        }
        Ok(values)
    }

    pub fn get_part(&self) -> Result<Vec<String>> {
        self.get_attribute_values("part")
    }

    pub fn get_vendor(&self) -> Result<Vec<String>> {
        self.get_attribute_values("vendor")
    }

    pub fn get_product(&self) -> Result<Vec<String>> {
        self.get_attribute_values("product")
    }

    pub fn get_package(&self) -> Result<Vec<String>> {
        self.get_attribute_values("package")
    }

    pub fn get_version(&self) -> Result<Vec<String>> {
        self.get_attribute_values("version")
    }

    pub fn get_update(&self) -> Result<Vec<String>> {
        self.get_attribute_values("update")
    }

    pub fn get_edition(&self) -> Result<Vec<String>> {
        self.get_attribute_values("edition")
    }

    pub fn get_language(&self) -> Result<Vec<String>> {
        self.get_attribute_values("language")
    }

    /// Project the name to the canonical WFN string
    pub fn as_wfn(&self) -> Result<String> {
        crate::wfn::serialize(self)
    }

    /// JSON projection of the aggregate: the version tag plus one array
    /// of attribute/value objects per part bucket. Undefined components
    /// are left out.
    pub fn to_json(&self) -> Value {
        let mut root = Map::new();
        root.insert("version".to_string(), json!(self.version.as_str()));
        for pk in PartKey::ALL {
            let elements: Vec<Value> = self
                .elements(*pk)
                .iter()
                .map(|element| {
                    let mut obj = Map::new();
                    for (attribute, component) in element.iter() {
                        if matches!(component, Component::Undefined) {
                            continue;
                        }
                        obj.insert(
                            attribute.as_str().to_string(),
                            json!(component.display_value()),
                        );
                    }
                    Value::Object(obj)
                })
                .collect();
            root.insert(pk.as_str().to_string(), Value::Array(elements));
        }
        Value::Object(root)
    }
}

/// Equality is elementwise, part-by-part, position-by-position; element
/// order is part of a name's identity. The raw string and version tag do
/// not participate, so a name and its re-parsed WFN projection compare
/// equal.
impl PartialEq for CpeName {
    fn eq(&self, other: &Self) -> bool {
        self.parts == other.parts
    }
}

impl Eq for CpeName {}

impl std::fmt::Display for CpeName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut lines = Vec::new();
        for pk in PartKey::ALL {
            let elements = self.elements(*pk);
            if elements.is_empty() {
                lines.push(format!("{pk} []"));
                continue;
            }
            lines.push(pk.to_string());
            lines.push(" [".to_string());
            for element in elements {
                if element.is_empty() {
                    lines.push("  []".to_string());
                    continue;
                }
                lines.push("  [".to_string());
                for (attribute, component) in element.iter() {
                    lines.push(format!("     {attribute} = {component}"));
                }
                lines.push("  ]".to_string());
            }
            lines.push(" ]".to_string());
        }
        write!(f, "{}", lines.join("\n"))
    }
}

/// Resolve the part bucket a single-part name's element belongs to
pub(crate) fn part_bucket(component: Option<&Component>) -> PartKey {
    match component {
        Some(Component::Simple { encoded, .. }) => PartKey::from_letter(encoded),
        _ => PartKey::Undefined,
    }
}
