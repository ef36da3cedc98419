//! lineup-client — Collaborators around the core: turns a user-selected
//! image file into a data URL and posts it to the remote classification
//! endpoint.

pub mod client;
pub mod encoder;
pub mod error;

pub use client::{ClassifierClient, ClientConfig};
pub use encoder::encode_image;
pub use error::{ClientError, EncodeError};
