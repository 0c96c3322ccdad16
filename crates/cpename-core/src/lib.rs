//! CpeName Core - Foundation types for CPE name handling
//!
//! This crate provides the building blocks shared by every CPE syntax:
//! - `Attribute`, `PartKey`, `Version`: the closed key sets and their canonical order
//! - `Component`: the attribute-value model (concrete, empty, undefined, logical)
//! - `ValidatorRegistry`: per-attribute validation checks
//! - `Error`, `Result`: the shared error taxonomy

pub mod attribute;
pub mod component;
pub mod error;
pub mod validate;

// Re-export commonly used types at crate root
pub use attribute::{Attribute, PartKey, Version};
pub use component::Component;
pub use error::{Error, Result};
pub use validate::ValidatorRegistry;
