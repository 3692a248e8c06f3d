use std::{
    convert::Infallible,
    fmt,
    str::FromStr,
};
use super::Roles;

impl Roles {
    pub fn contains(&self, role: &str) -> bool {
        self.0.contains(role)
    }

    /// True if this set and `other` share at least one role token.
    pub fn intersects(&self, other: &Roles) -> bool {
        !self.0.is_disjoint(&other.0)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }
}

impl fmt::Display for Roles {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let mut tokens = self.0.iter();
        if let Some(token) = tokens.next() {
            f.write_str(token)?;
            for token in tokens {
                write!(f, ",{token}")?;
            }
        }
        Ok(())
    }
}

impl<S: Into<String>> FromIterator<S> for Roles {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self(iter.into_iter()
            .map(Into::into)
            .collect()
        )
    }
}

impl<S: Into<String>> Extend<S> for Roles {
    fn extend<I: IntoIterator<Item = S>>(&mut self, iter: I) {
        self.0.extend(iter.into_iter().map(Into::into))
    }
}

impl FromStr for Roles {
    type Err = Infallible;

    // comma separated tokens; surrounding whitespace insignificant, and
    // empty tokens are dropped rather than kept as the empty role.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(s.split(',')
            .map(str::trim)
            .filter(|token| !token.is_empty())
            .collect()
        )
    }
}

#[cfg(test)]
mod test {
    use std::str::FromStr;
    use super::Roles;

    #[test]
    fn smoke() -> anyhow::Result<()> {
        let roles = Roles::from_str("admin, member")?;
        assert_eq!(roles.len(), 2);
        assert!(roles.contains("admin"));
        assert!(roles.contains("member"));
        // tokens are never normalized beyond whitespace trimming
        assert!(!roles.contains("Admin"));
        assert_eq!(roles.to_string(), "admin,member");

        let empty = Roles::from_str("")?;
        assert!(empty.is_empty());
        Ok(())
    }

    #[test]
    fn whitespace() -> anyhow::Result<()> {
        let roles = Roles::from_str("fake-role,   member ,")?;
        assert_eq!(roles, Roles::from_iter(["fake-role", "member"]));
        Ok(())
    }

    #[test]
    fn intersects() -> anyhow::Result<()> {
        let granted = Roles::from_str("admin,member")?;
        assert!(granted.intersects(&Roles::from_iter(["member"])));
        assert!(!granted.intersects(&Roles::from_iter(["guest"])));
        assert!(!granted.intersects(&Roles::default()));
        // the empty set intersects with nothing, itself included
        assert!(!Roles::default().intersects(&Roles::default()));
        Ok(())
    }

    #[test]
    fn serde() -> anyhow::Result<()> {
        let roles: Roles = serde_json::from_str(r#"["admin", "member"]"#)?;
        assert_eq!(roles, Roles::from_iter(["admin", "member"]));
        Ok(())
    }
}
