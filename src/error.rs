use thiserror::Error;

/// Errors raised by the strict variants of the collection helpers.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CollectionError {
    #[error("{operation} called on an empty sequence")]
    EmptyInput { operation: &'static str },
}

impl CollectionError {
    pub fn empty_input(operation: &'static str) -> Self {
        Self::EmptyInput { operation }
    }
}
