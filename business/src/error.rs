use thiserror::Error;

use crate::http::HttpError;

/// Why a collection could not be loaded.
///
/// Every variant is handled the same way by [`CollectionView`](crate::CollectionView):
/// it is logged and kept as `last_error`, never returned to a caller.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchFailure {
    #[error("request failed: {0}")]
    Network(String),

    #[error("API returned status: {0}")]
    Status(u16),

    #[error("failed to parse collection: {0}")]
    Decode(String),
}

impl From<HttpError> for FetchFailure {
    fn from(err: HttpError) -> Self {
        Self::Network(err.message)
    }
}

impl From<serde_json::Error> for FetchFailure {
    fn from(err: serde_json::Error) -> Self {
        Self::Decode(err.to_string())
    }
}
