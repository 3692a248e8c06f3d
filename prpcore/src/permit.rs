use serde::{Deserialize, Serialize};
use crate::role::Roles;

/// Resolved access for a single operation under one protection rule.
///
/// `Any` is produced by the `@` access token and admits every caller,
/// even one presenting no roles at all.  The `!` access token compiles
/// down to an empty `Roles` permit, which admits nobody; other tokens
/// listed alongside `!` are discarded.
#[derive(Clone, Debug, Eq, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Permit {
    Any,
    Roles(Roles),
}

mod impls;
