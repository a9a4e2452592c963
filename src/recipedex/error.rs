use thiserror::Error;
use uuid::Uuid;

#[derive(Error, Debug)]
pub enum RecipedexError {
    #[error("Recipe not found: {0}")]
    RecipeNotFound(Uuid),

    #[error("No recipe is pending deletion")]
    NoPendingDelete,

    #[error("{0}")]
    Validation(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Store error: {0}")]
    Store(String),

    #[error("Api Error: {0}")]
    Api(String),
}

pub type Result<T> = std::result::Result<T, RecipedexError>;
