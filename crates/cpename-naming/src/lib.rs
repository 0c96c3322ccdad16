//! CpeName Naming - Grammar parsers and the CPE name aggregate
//!
//! One parser per supported syntax, all producing the same in-memory
//! `CpeName`:
//! - `positional`: v1.1 slash/semicolon syntax
//! - `uri`: v2.2 colon-delimited URI syntax
//! - `package`: the "p-cpe" package extension of the URI syntax
//! - `wfn`: v2.3 bound Well-Formed Names, parsing and serialization
//!
//! Parsing is synchronous and side-effect-free; the grammar tables are
//! compiled once and shared read-only.

pub mod name;
pub mod package;
pub mod positional;
pub mod uri;
pub mod wfn;

// Re-export commonly used types at crate root
pub use cpename_core::{Attribute, Component, Error, PartKey, Result, Version};
pub use name::{CpeName, Element};

use tracing::debug;

/// Parse a CPE name string, auto-detecting its syntax from the prefix.
///
/// `cpe:/` inputs are tried against the 2.2 URI grammar first and fall
/// back to the 1.1 positional grammar; when both reject, the URI error
/// is reported. Use the per-syntax parsers directly when the version is
/// known.
pub fn parse(s: &str) -> Result<CpeName> {
    if s.starts_with(wfn::PREFIX) {
        wfn::parse(s)
    } else if s.starts_with(package::PREFIX) {
        package::parse(s)
    } else if s.starts_with("cpe:/") {
        match uri::parse(s) {
            Ok(name) => Ok(name),
            Err(uri_err) => {
                debug!(name = s, error = %uri_err, "URI grammar rejected, trying positional");
                positional::parse(s).map_err(|_| uri_err)
            }
        }
    } else {
        Err(Error::structural(format!("unrecognized CPE prefix: {s}")))
    }
}

impl std::str::FromStr for CpeName {
    type Err = Error;

    fn from_str(s: &str) -> Result<CpeName> {
        parse(s)
    }
}
