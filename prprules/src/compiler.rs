use prpcore::{
    operation::Operation,
    permit::Permit,
    protection::{
        Entry,
        ProtectionSource,
        Section,
    },
};
use regex::Regex;
use std::collections::HashMap;

use crate::{
    error::CompileError,
    rules::{
        PropertyRule,
        PropertyRules,
    },
};

// headers that trivially match every property name; used only to warn
// about rules that can never take effect
const UNIVERSAL_PATTERNS: [&str; 4] = [".*", "^.*", ".*$", "^.*$"];

/// Compile the declared source into a rule table, strictly rejecting
/// entries outside the recognized operations.
pub fn compile(source: &ProtectionSource) -> Result<PropertyRules, CompileError> {
    compile_with(source, false)
}

pub(crate) fn compile_with(
    source: &ProtectionSource,
    lenient_keys: bool,
) -> Result<PropertyRules, CompileError> {
    let mut catch_all: Option<&str> = None;
    let rules = source.sections.iter()
        .map(|section| {
            if let Some(header) = catch_all {
                log::warn!(
                    "protection rule {:?} is unreachable: earlier rule \
                    {header:?} matches every property name",
                    section.header,
                );
            } else if UNIVERSAL_PATTERNS.contains(&section.header.trim()) {
                catch_all = Some(section.header.as_str());
            }
            compile_section(section, lenient_keys)
        })
        .collect::<Result<PropertyRules, _>>()?;
    log::debug!("compiled {} protection rules", rules.len());
    Ok(rules)
}

fn compile_section(
    section: &Section,
    lenient_keys: bool,
) -> Result<PropertyRule, CompileError> {
    // anchor the declared pattern so matching covers the whole name
    let pattern = Regex::new(&format!("^(?:{})$", section.header))
        .map_err(|source| CompileError::InvalidPattern {
            pattern: section.header.clone(),
            source,
        })?;
    let mut permits = HashMap::new();
    for Entry { key, value } in section.entries.iter() {
        match key.parse::<Operation>() {
            // a duplicated key resolves to its last occurrence
            Ok(op) => {
                permits.insert(op, value.parse::<Permit>()
                    .map_err(|_| CompileError::ConflictingAccess {
                        header: section.header.clone(),
                        op,
                    })?
                );
            }
            Err(_) if lenient_keys => log::warn!(
                "ignoring unknown operation {key:?} in protection rule {:?}",
                section.header,
            ),
            Err(_) => return Err(CompileError::UnknownOperation {
                header: section.header.clone(),
                key: key.clone(),
            }),
        }
    }
    for op in Operation::ALL {
        if !permits.contains_key(&op) {
            log::warn!(
                "protection rule {:?} does not list operation {op}; \
                no role will be allowed to perform it",
                section.header,
            );
        }
    }
    Ok(PropertyRule::new(pattern, section.header.clone(), permits))
}
