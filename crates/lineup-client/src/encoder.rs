//! File → data-URL encoding.
//!
//! The endpoint expects the image embedded in a `data:<mime>;base64,...`
//! string, exactly as a browser `FileReader.readAsDataURL` would produce.

use std::path::Path;

use base64::prelude::BASE64_STANDARD;
use base64::Engine;

use crate::error::EncodeError;

/// Read an image file and encode it as a data URL.
///
/// The MIME type is sniffed from the file's magic bytes, not its extension.
pub fn encode_image(path: &Path) -> Result<String, EncodeError> {
    let bytes = std::fs::read(path)?;
    let format = image::guess_format(&bytes)?;
    let mime = format.to_mime_type();

    let payload = BASE64_STANDARD.encode(&bytes);
    tracing::debug!(path = %path.display(), mime, bytes = bytes.len(), "encoded image");

    Ok(format!("data:{mime};base64,{payload}"))
}
