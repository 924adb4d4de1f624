//! # glossa-core
//!
//! Core types, collaborator traits, configuration, and error handling for
//! glossa.

pub mod config;
pub mod error;
pub mod escape;
pub mod language;
pub mod locale;
pub mod traits;

pub use config::shellexpand;
