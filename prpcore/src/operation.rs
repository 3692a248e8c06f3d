use serde::{Deserialize, Serialize};

/// The closed set of API operations a protection rule may speak for.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Operation {
    Create,
    Read,
    Update,
    Delete,
}

mod impls;
