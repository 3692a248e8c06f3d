use arc_swap::ArcSwap;
use parking_lot::Mutex;
use prpcore::{
    decision::Decision,
    operation::Operation,
    protection::ProtectionSource,
    role::Roles,
    traits::Enforcer,
};
use prprules::{
    error::CompileError,
    rules::PropertyRules,
    Builder as RulesBuilder,
};
use std::{
    convert::Infallible,
    fmt,
    path::{Path, PathBuf},
    sync::Arc,
};

use crate::error::Error;
use super::*;

impl Builder {
    pub fn new() -> Self {
        Default::default()
    }

    pub fn source(mut self, val: ProtectionSource) -> Self {
        self.source = Some(val);
        self
    }

    pub fn source_text(mut self, val: impl Into<String>) -> Self {
        self.source_text = Some(val.into());
        self
    }

    pub fn source_file(mut self, val: impl Into<PathBuf>) -> Self {
        self.source_path = Some(val.into());
        self
    }

    pub fn lenient_keys(mut self, val: bool) -> Self {
        self.lenient_keys = val;
        self
    }

    pub fn build(&self) -> Result<Platform, Error> {
        let source = match (&self.source, &self.source_text, &self.source_path) {
            (Some(source), ..) => source.clone(),
            (None, Some(text), _) => text.parse()
                .map_err(CompileError::from)?,
            (None, None, Some(path)) => std::fs::read_to_string(path)?
                .parse()
                .map_err(CompileError::from)?,
            (None, None, None) => return Err(CompileError::SourceRequired.into()),
        };
        let rules = RulesBuilder::new()
            .source(source)
            .lenient_keys(self.lenient_keys)
            .build()?;
        log::debug!("new platform set up with {} protection rules", rules.len());
        Ok(Platform(Arc::new(PlatformInner {
            active: ArcSwap::from_pointee(rules),
            reload_lock: Mutex::new(()),
            lenient_keys: self.lenient_keys,
        })))
    }
}

impl Platform {
    /// The currently active rule table snapshot.  The snapshot stays
    /// valid for as long as it is held, reloads notwithstanding.
    pub fn rules(&self) -> Arc<PropertyRules> {
        self.0.active.load_full()
    }

    /// Compile the new source and replace the active table.  On any
    /// compile failure the previously active table remains in force.
    /// Concurrent reload attempts are serialized; readers are not.
    pub fn reload(&self, source: &ProtectionSource) -> Result<(), Error> {
        let _guard = self.0.reload_lock.lock();
        let rules = RulesBuilder::new()
            .source(source.clone())
            .lenient_keys(self.0.lenient_keys)
            .build()?;
        log::debug!(
            "replacing active table with {} compiled protection rules",
            rules.len(),
        );
        self.0.active.store(Arc::new(rules));
        Ok(())
    }

    pub fn reload_text(&self, text: &str) -> Result<(), Error> {
        self.reload(&text.parse()
            .map_err(CompileError::from)?
        )
    }

    pub fn reload_file(&self, path: impl AsRef<Path>) -> Result<(), Error> {
        self.reload_text(&std::fs::read_to_string(path)?)
    }

    /// Decide against the current snapshot.
    pub fn decide(
        &self,
        property: &str,
        op: Operation,
        roles: &Roles,
    ) -> Decision {
        self.0.active.load().decide(property, op, roles)
    }
}

impl fmt::Debug for Platform {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("Platform")
            .field("rules", &self.0.active.load().len())
            .field("lenient_keys", &self.0.lenient_keys)
            .finish()
    }
}

impl Enforcer for Platform {
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
