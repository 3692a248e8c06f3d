use crate::{
    decision::Decision,
    operation::Operation,
    role::Roles,
};

/// Decides whether a caller holding `roles` may perform `op` on the
/// named property.  Implementations must be pure with respect to their
/// inputs so repeated checks against the same state agree.
pub trait Enforcer {
    type Error;

    fn enforce(
        &self,
        property: &str,
        op: Operation,
        roles: &Roles,
    ) -> Result<Decision, Self::Error>;
}
