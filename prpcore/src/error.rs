use thiserror::Error;

#[non_exhaustive]
#[derive(Debug, Error, PartialEq)]
pub enum ValueError {
    #[error("unsupported value: {0}")]
    Unsupported(String),
    /// The access tokens `@` and `!` cannot appear in the same entry.
    #[error("'@' and '!' are mutually exclusive")]
    ConflictingAccess,
}

#[non_exhaustive]
#[derive(Debug, Error, PartialEq)]
pub enum SourceError {
    #[error("line {0}: entry encountered before any section header")]
    MissingSectionHeader(usize),
    #[error("line {0}: malformed entry")]
    MalformedEntry(usize),
}
