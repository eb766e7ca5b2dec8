//! Error types for loading the question snapshot.

use thiserror::Error;

/// Why a load ended in the error state. Only logged; the screen shows a
/// single fixed message for every variant.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum TriviaError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("request returned status {0}")]
    HttpStatus(reqwest::StatusCode),
    #[error("payload is not a JSON object")]
    NotAnObject,
    #[error("payload has no `results` field")]
    MissingResults,
    #[error("payload `results` is not an array")]
    ResultsNotArray,
}
