//! # glossa-registry
//!
//! Per-language translation tables with locale-driven lookup. A
//! [`Registry`] is built by its owner (no process-wide instance), filled at
//! startup from strings files, and queried with [`Registry::get_string`].

mod lookup;
mod registry;

pub use lookup::Lookup;
pub use registry::Registry;
