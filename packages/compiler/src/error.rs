//! Compiler error types.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, CompilerError>;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum CompilerError {
    /// The component script could not be reduced to an options object.
    /// Fatal for the file being converted.
    #[error("failed to resolve component options: {message}")]
    EvalFailure { message: String },

    /// A prop type value has no TypeScript mapping. Fatal for the file.
    #[error("TypeScript type \"{value}\" not supported")]
    UnsupportedType { value: String },

    /// An expression fragment could not be tokenized or parsed.
    #[error("parse error: {message}")]
    ParseError { message: String },
}

impl CompilerError {
    pub fn parse_error(message: impl Into<String>) -> Self {
        CompilerError::ParseError {
            message: message.into(),
        }
    }
}
