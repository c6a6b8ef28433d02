//! Error types for catalog operations.

use std::error::Error;
use std::fmt;

use crate::media::{ParseEnumError, ValidationError};
use crate::model::ModelError;

/// Error type for catalog service operations.
///
/// "Not found" is not an error: id-keyed operations report absence as
/// `Ok(None)` / `Ok(false)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    /// One or more request fields violate their constraints.
    Validation(Vec<ValidationError>),
    /// A live item already uses this title (compared case-insensitively).
    DuplicateTitle(String),
    /// A filter's enumerated parameter names no enumeration member.
    InvalidFilterValue { field: &'static str, value: String },
    /// The model store failed.
    Store(ModelError),
}

impl fmt::Display for CatalogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CatalogError::Validation(errors) => {
                write!(f, "validation failed: ")?;
                for (i, e) in errors.iter().enumerate() {
                    if i > 0 {
                        write!(f, "; ")?;
                    }
                    write!(f, "{}", e)?;
                }
                Ok(())
            }
            CatalogError::DuplicateTitle(title) => {
                write!(f, "a media item titled {:?} already exists", title)
            }
            CatalogError::InvalidFilterValue { field, value } => {
                write!(f, "invalid {} filter value: {:?}", field, value)
            }
            CatalogError::Store(e) => write!(f, "store error: {}", e),
        }
    }
}

impl Error for CatalogError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            CatalogError::Store(e) => Some(e),
            _ => None,
        }
    }
}

impl From<ModelError> for CatalogError {
    fn from(err: ModelError) -> Self {
        CatalogError::Store(err)
    }
}

impl From<Vec<ValidationError>> for CatalogError {
    fn from(errors: Vec<ValidationError>) -> Self {
        CatalogError::Validation(errors)
    }
}

impl From<ParseEnumError> for CatalogError {
    fn from(err: ParseEnumError) -> Self {
        CatalogError::InvalidFilterValue {
            field: err.kind,
            value: err.value,
        }
    }
}

impl CatalogError {
    /// Map this error to an HTTP-style status code.
    pub fn status_code(&self) -> u16 {
        match self {
            CatalogError::Validation(_) => 400,
            CatalogError::DuplicateTitle(_) => 409,
            CatalogError::InvalidFilterValue { .. } => 400,
            CatalogError::Store(_) => 500,
        }
    }
}
