// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Error types for the API layer.

use freefood_persistence::PersistenceError;
use thiserror::Error;

/// API-level errors.
///
/// These are distinct from persistence errors and represent the API contract.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// A marker creation payload is missing a required key, or is not a
    /// JSON object at all. Nothing was written.
    #[error("Missing required field '{field}'")]
    MissingField {
        /// The first required key that was absent.
        field: String,
    },

    /// A field was present but could not be decoded to its column type.
    #[error("Invalid input: {message}")]
    InvalidInput {
        /// A human-readable description of the decode failure.
        message: String,
    },

    /// The store rejected or failed an operation.
    #[error(transparent)]
    Persistence(#[from] PersistenceError),
}

/// Result alias for API operations.
pub type ApiResult<T> = Result<T, ApiError>;
