use prpcore::{
    error::SourceError,
    operation::Operation,
};

/// Compilation failures; none of these produce a partial rule table.
#[non_exhaustive]
#[derive(Debug, thiserror::Error)]
pub enum CompileError {
    #[error("malformed protection pattern {pattern:?}: {source}")]
    InvalidPattern {
        pattern: String,
        source: regex::Error,
    },
    #[error("unknown operation {key:?} in protection rule {header:?}")]
    UnknownOperation {
        header: String,
        key: String,
    },
    #[error("protection rule {header:?}, operation {op}: \
        '@' and '!' are mutually exclusive")]
    ConflictingAccess {
        header: String,
        op: Operation,
    },
    #[error(transparent)]
    Source(#[from] SourceError),
    #[error("missing required protection source")]
    SourceRequired,
}
