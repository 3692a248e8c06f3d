use thiserror::Error;

#[non_exhaustive]
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Compile(#[from] prprules::error::CompileError),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
