use prpcore::{
    operation::Operation,
    permit::Permit,
};
use regex::Regex;
use std::collections::HashMap;

/// A single compiled protection rule: the property name pattern it
/// speaks for, and the access each operation is granted under it.
#[derive(Clone, Debug)]
pub struct PropertyRule {
    // compiled with implicit full anchoring over the property name
    pattern: Regex,
    // the pattern as declared in the source
    header: String,
    // operations absent from this map are permitted to no one
    permits: HashMap<Operation, Permit>,
}

/// The compiled rule table.  Rules keep their declared order, and the
/// first rule whose pattern matches a property name governs every
/// decision for it; the table is immutable once compiled.
#[derive(Clone, Debug, Default)]
pub struct PropertyRules(Vec<PropertyRule>);

mod impls;
