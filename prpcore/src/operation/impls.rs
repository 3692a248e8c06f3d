use std::{
    fmt,
    str::FromStr,
};
use crate::error::ValueError;
use super::Operation;

impl Operation {
    /// All recognized operations, in the order rule entries are
    /// conventionally written.
    pub const ALL: [Operation; 4] = [
        Operation::Create,
        Operation::Read,
        Operation::Update,
        Operation::Delete,
    ];
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(match self {
            Operation::Create => "create",
            Operation::Read => "read",
            Operation::Update => "update",
            Operation::Delete => "delete",
        })
    }
}

impl FromStr for Operation {
    type Err = ValueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "create" => Ok(Operation::Create),
            "read" => Ok(Operation::Read),
            "update" => Ok(Operation::Update),
            "delete" => Ok(Operation::Delete),
            s => Err(ValueError::Unsupported(s.to_string())),
        }
    }
}
