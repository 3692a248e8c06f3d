//! Protection rule source
//!
//! The structs provided by this module represent the declared form of
//! the protection rules as read from the configuration source, before
//! any pattern compilation or validation is applied.  Section order is
//! preserved exactly as declared, as it decides rule precedence.

use serde::{Deserialize, Serialize};

/// The ordered sequence of rule sections from one configuration source.
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
pub struct ProtectionSource {
    pub sections: Vec<Section>,
}

/// One rule section: a header string intended as a pattern over
/// property names, with the access entries declared under it.
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
pub struct Section {
    pub header: String,
    pub entries: Vec<Entry>,
}

/// A single `key = value` entry under a section.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct Entry {
    pub key: String,
    pub value: String,
}

mod impls;
