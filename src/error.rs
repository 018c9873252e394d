use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum LoadError {
    #[error("destination arguments must be tagged records")]
    InvalidDestination,

    #[error("no destination record has a field matching column: {0}")]
    MissingField(String),

    #[error("type mismatch: {0}")]
    TypeMismatch(String),

    #[error("engine error: {0}")]
    Engine(String),
}

pub type LoadResult<T> = std::result::Result<T, LoadError>;
