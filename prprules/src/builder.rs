use prpcore::protection::ProtectionSource;
use crate::{
    compiler,
    error::CompileError,
    rules::PropertyRules,
};

/// Builds a compiled protection rule table.
///
/// Methods can be chained in order to set the configuration values.
/// The `PropertyRules` is constructed by calling [`build`](Builder::build).
///
/// By default entries outside the recognized operations fail the build;
/// `lenient_keys` restores the legacy behavior of skipping them with a
/// logged warning, which leaves the operation disabled rather than
/// granting anything.
#[derive(Clone, Debug, Default)]
pub struct Builder {
    source: Option<ProtectionSource>,
    lenient_keys: bool,
}

impl Builder {
    pub fn new() -> Self {
        Default::default()
    }

    pub fn source(mut self, val: ProtectionSource) -> Self {
        self.source = Some(val);
        self
    }

    pub fn lenient_keys(mut self, val: bool) -> Self {
        self.lenient_keys = val;
        self
    }

    pub fn build(&self) -> Result<PropertyRules, CompileError> {
        let source = self.source.as_ref()
            .ok_or(CompileError::SourceRequired)?;
        compiler::compile_with(source, self.lenient_keys)
    }
}
