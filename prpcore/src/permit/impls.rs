use std::str::FromStr;
use crate::{
    error::ValueError,
    role::Roles,
};
use super::Permit;

const ALL_TOKEN: &str = "@";
const NONE_TOKEN: &str = "!";

impl Permit {
    pub fn allows(&self, caller: &Roles) -> bool {
        match self {
            Permit::Any => true,
            Permit::Roles(granted) => granted.intersects(caller),
        }
    }
}

impl Default for Permit {
    // absent entries admit nobody
    fn default() -> Self {
        Permit::Roles(Roles::default())
    }
}

impl FromStr for Permit {
    type Err = ValueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let tokens = s.split(',')
            .map(str::trim)
            .filter(|token| !token.is_empty())
            .collect::<Vec<_>>();
        let all = tokens.iter().any(|token| *token == ALL_TOKEN);
        let none = tokens.iter().any(|token| *token == NONE_TOKEN);
        match (all, none) {
            (true, true) => Err(ValueError::ConflictingAccess),
            (true, false) => Ok(Permit::Any),
            (false, true) => Ok(Permit::default()),
            (false, false) => Ok(Permit::Roles(
                tokens.into_iter().collect()
            )),
        }
    }
}
