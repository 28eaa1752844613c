use thiserror::Error;

#[derive(Error, Debug)]
pub enum ArticleError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Article already exists: {0}")]
    DuplicateId(String),

    #[error("Article not found: {0}")]
    NotFound(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, ArticleError>;
