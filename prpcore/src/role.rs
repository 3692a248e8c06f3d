use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// A set of opaque role tokens presented by a caller or granted by a
/// protection rule.  Tokens are compared verbatim and case-sensitively.
#[derive(Clone, Debug, Default, Eq, PartialEq, Deserialize, Serialize)]
#[serde(transparent)]
pub struct Roles(pub BTreeSet<String>);

mod impls;
