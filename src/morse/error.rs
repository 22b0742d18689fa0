// src/morse/error.rs  —  Codec errors
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CodecError {
    /// Nothing left to measure after stripping leading/trailing silence
    #[error("empty input: bit string contains no pulses")]
    EmptyInput,
}

pub type Result<T> = std::result::Result<T, CodecError>;
