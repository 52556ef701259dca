use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("input too large: {size} bytes exceeds maximum {max}")]
    InputTooLarge { size: usize, max: usize },

    #[error("internal error: {0}")]
    Internal(String),
}

pub type Result<T> = std::result::Result<T, Error>;
