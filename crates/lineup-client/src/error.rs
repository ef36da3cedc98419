//! Client error types.

use thiserror::Error;

/// Failure to turn a file into a transmittable image representation.
#[derive(Error, Debug)]
pub enum EncodeError {
    #[error("failed to read image file: {0}")]
    Io(#[from] std::io::Error),
    #[error("unrecognized image format: {0}")]
    UnknownFormat(#[from] image::ImageError),
}

/// Failure of the classification request itself.
#[derive(Error, Debug)]
pub enum ClientError {
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),
    #[error("classification endpoint returned {status}: {body}")]
    Status {
        status: reqwest::StatusCode,
        body: String,
    },
    #[error("undecodable classification response: {0}")]
    Decode(#[from] serde_json::Error),
}
