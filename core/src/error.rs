use thiserror::Error;

#[derive(Error, Debug)]
pub enum StateError {
    #[error("Malformed server message: {0}")]
    Malformed(#[from] serde_json::Error),
    #[error("Board shape does not match declared size")]
    InvalidBoardShape,
}

pub type Result<T> = core::result::Result<T, StateError>;
