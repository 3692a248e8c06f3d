use prpcore::{
    decision::Decision,
    operation::Operation,
    permit::Permit,
    role::Roles,
    traits::Enforcer,
};
use regex::Regex;
use std::{
    collections::HashMap,
    convert::Infallible,
    slice,
};
use super::*;

impl PropertyRule {
    pub(crate) fn new(
        pattern: Regex,
        header: String,
        permits: HashMap<Operation, Permit>,
    ) -> Self {
        Self { pattern, header, permits }
    }

    /// The pattern as declared in the source section header.
    pub fn pattern(&self) -> &str {
        &self.header
    }

    /// Full-string match of the property name against the pattern.
    pub fn matches(&self, property: &str) -> bool {
        self.pattern.is_match(property)
    }

    /// Access granted for the operation; declared entries only, so an
    /// operation the rule never listed resolves to the empty permit.
    pub fn permit(&self, op: Operation) -> Permit {
        self.permits.get(&op)
            .cloned()
            .unwrap_or_default()
    }
}

impl PropertyRules {
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> slice::Iter<'_, PropertyRule> {
        self.0.iter()
    }

    /// The rule governing the named property, i.e. the first rule in
    /// declared order whose pattern matches it.
    pub fn governing(&self, property: &str) -> Option<&PropertyRule> {
        self.0.iter().find(|rule| rule.matches(property))
    }

    /// Decide whether a caller holding `roles` may perform `op` on the
    /// named property.  A property no rule speaks for is denied.
    pub fn decide(
        &self,
        property: &str,
        op: Operation,
        roles: &Roles,
    ) -> Decision {
        match self.governing(property) {
            Some(rule) => rule.permit(op).allows(roles).into(),
            None => Decision::Deny,
        }
    }
}

impl FromIterator<PropertyRule> for PropertyRules {
    fn from_iter<I: IntoIterator<Item = PropertyRule>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl Enforcer for PropertyRules {
    type Error = Infallible;

    fn enforce(
        &self,
        property: &str,
        op: Operation,
        roles: &Roles,
    ) -> Result<Decision, Self::Error> {
        Ok(self.decide(property, op, roles))
    }
}

#[cfg(test)]
mod test {
    use prpcore::{
        decision::Decision,
        operation::Operation,
        role::Roles,
        traits::Enforcer,
    };
    use crate::builder::Builder;

    fn build(text: &str) -> anyhow::Result<crate::rules::PropertyRules> {
        Ok(Builder::new()
            .source(text.parse()?)
            .build()?)
    }

    fn roles(s: &str) -> Roles {
        s.parse().expect("role list parsing is infallible")
    }

    #[test]
    fn first_match_wins() -> anyhow::Result<()> {
        let rules = build("\
[.*]
read = admin
[x_.*]
read = admin,member
")?;
        // the earlier catch-all governs x_foo; the later, more specific
        // rule granting member is never consulted
        assert_eq!(
            rules.decide("x_foo", Operation::Read, &roles("member")),
            Decision::Deny,
        );
        assert_eq!(
            rules.decide("x_foo", Operation::Read, &roles("admin")),
            Decision::Allow,
        );
        Ok(())
    }

    #[test]
    fn fail_closed() -> anyhow::Result<()> {
        let rules = build("[x_.*]\nread = member\n")?;
        assert_eq!(
            rules.decide("zzz", Operation::Read, &roles("member")),
            Decision::Deny,
        );
        // the empty table denies everything
        let rules = build("")?;
        assert!(rules.is_empty());
        assert_eq!(
            rules.decide("zzz", Operation::Read, &roles("admin")),
            Decision::Deny,
        );
        Ok(())
    }

    #[test]
    fn full_match_only() -> anyhow::Result<()> {
        let rules = build("[x_.*]\nread = member\n")?;
        // matching is over the whole property name, not a substring scan
        assert_eq!(
            rules.decide("prefix_x_foo", Operation::Read, &roles("member")),
            Decision::Deny,
        );
        assert_eq!(
            rules.decide("x_foo", Operation::Read, &roles("member")),
            Decision::Allow,
        );
        let rules = build("[spl_read_prop]\nread = member\n")?;
        assert_eq!(
            rules.decide("spl_read_prop_2", Operation::Read, &roles("member")),
            Decision::Deny,
        );
        Ok(())
    }

    #[test]
    fn missing_operation_admits_nobody() -> anyhow::Result<()> {
        let rules = build("[x_.*]\nread = admin,member\n")?;
        for op in [Operation::Create, Operation::Update, Operation::Delete] {
            assert_eq!(
                rules.decide("x_foo", op, &roles("admin")),
                Decision::Deny,
            );
        }
        assert_eq!(
            rules.decide("x_foo", Operation::Read, &roles("admin")),
            Decision::Allow,
        );
        Ok(())
    }

    #[test]
    fn role_intersection() -> anyhow::Result<()> {
        let rules = build("[x_.*]\nread = admin,member\n")?;
        assert_eq!(
            rules.decide("x_foo", Operation::Read, &roles("member")),
            Decision::Allow,
        );
        assert_eq!(
            rules.decide("x_foo", Operation::Read, &roles("guest")),
            Decision::Deny,
        );
        assert_eq!(
            rules.decide("x_foo", Operation::Read, &Roles::default()),
            Decision::Deny,
        );
        Ok(())
    }

    #[test]
    fn wildcard_access_tokens() -> anyhow::Result<()> {
        let rules = build("\
[^x_all_permitted.*]
create = @
read = @
update = @
delete = @
[^x_none_permitted.*]
create = !
read = !
update = !
delete = !
")?;
        for op in Operation::ALL {
            assert_eq!(
                rules.decide("x_all_permitted", op, &Roles::default()),
                Decision::Allow,
            );
            assert_eq!(
                rules.decide("x_none_permitted", op, &roles("admin")),
                Decision::Deny,
            );
        }
        Ok(())
    }

    #[test]
    fn admin_only_catch_all() -> anyhow::Result<()> {
        let rules = build("\
[.*]
create = admin
read = admin
update = admin
delete = admin
")?;
        for property in ["x_foo", "spl_read_prop", "anything at all", ""] {
            for op in Operation::ALL {
                assert_eq!(
                    rules.decide(property, op, &roles("admin")),
                    Decision::Allow,
                );
                assert_eq!(
                    rules.decide(property, op, &roles("member,guest")),
                    Decision::Deny,
                );
                assert_eq!(
                    rules.decide(property, op, &Roles::default()),
                    Decision::Deny,
                );
            }
        }
        Ok(())
    }

    #[test]
    fn deterministic() -> anyhow::Result<()> {
        let rules = build("[x_.*]\nread = member\n")?;
        let decisions = (0..3)
            .map(|_| rules.decide("x_foo", Operation::Read, &roles("member")))
            .collect::<Vec<_>>();
        assert_eq!(decisions, vec![Decision::Allow; 3]);
        Ok(())
    }

    #[test]
    fn enforcer_trait() -> anyhow::Result<()> {
        let rules = build("[x_.*]\nread = member\n")?;
        assert_eq!(
            rules.enforce("x_foo", Operation::Read, &roles("member"))?,
            Decision::Allow,
        );
        Ok(())
    }

    #[test]
    fn send_sync() -> anyhow::Result<()> {
        fn is_send_sync<T: Send + Sync>(_: &T) {}
        let rules = build("[x_.*]\nread = member\n")?;
        is_send_sync(&rules);
        Ok(())
    }
}
