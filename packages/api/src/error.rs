//! Errors returned by product operations, on either side of the server boundary.

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq, Eq, Serialize, Deserialize)]
pub enum ApiError {
    #[error("Not signed in")]
    Unauthorized,

    #[error("Products can only be queried for the signed-in user")]
    Forbidden,

    #[error("GraphQL request failed: {0}")]
    Transport(String),

    /// Messages reported in the `errors` array of a GraphQL response.
    #[error("{0}")]
    GraphQL(String),

    #[error("GraphQL response contained no data")]
    MissingData,

    /// Failure reported by a server function call.
    #[error("{0}")]
    Server(String),
}
