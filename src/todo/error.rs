use thiserror::Error;

#[derive(Error, Debug)]
pub enum TodoError {
    #[error("primary item {0:?} already exists")]
    DuplicatePrimary(String),

    #[error("item {0:?}, {1:?} already exists")]
    DuplicateSecondary(String, String),

    #[error("can't delete from empty list")]
    EmptyList,

    #[error("Primary item {0:?} does not exist")]
    UnknownPrimary(String),

    #[error("Secondary item {0:?} does not exist")]
    UnknownSecondary(String),

    #[error("Can't delete primary item that still has secondary items")]
    PrimaryHasChildren,

    #[error("invalid attribute: {0}")]
    InvalidStyleAttribute(String),

    #[error("item name cannot be empty")]
    EmptyName,

    #[error("failed to unmarshal todo list json: {0}")]
    MalformedPersistedState(serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Config error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, TodoError>;
