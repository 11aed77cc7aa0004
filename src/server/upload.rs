//! Multipart image upload parsing.

use axum::body::Bytes;
use axum::extract::Multipart;
use thiserror::Error;

use crate::utils::{accept_attribute, is_accepted_image};

/// Name of the form field carrying the image.
pub const IMAGE_FIELD: &str = "image";

/// An uploaded image, held in memory for one request.
#[derive(Debug, Clone)]
pub struct ImageUpload {
    pub filename: String,
    pub bytes: Bytes,
}

/// Problems with the submitted form, reported before any extraction.
#[derive(Debug, Error)]
pub enum UploadError {
    #[error("Upload an image to begin text extraction.")]
    Missing,

    #[error("The uploaded file is empty.")]
    Empty,

    #[error("Unsupported file type: {0} (accepted: {accepted})", accepted = accept_attribute())]
    UnsupportedType(String),

    #[error("Could not read upload: {0}")]
    Malformed(String),
}

/// Pull the image field out of a multipart form.
///
/// Other fields are skipped. The first image field wins.
pub async fn read_image(mut multipart: Multipart) -> Result<ImageUpload, UploadError> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| UploadError::Malformed(e.to_string()))?
    {
        if field.name() != Some(IMAGE_FIELD) {
            continue;
        }

        let filename = field.file_name().unwrap_or_default().to_string();
        if filename.is_empty() {
            return Err(UploadError::Missing);
        }
        if !is_accepted_image(&filename) {
            return Err(UploadError::UnsupportedType(filename));
        }

        let bytes = field
            .bytes()
            .await
            .map_err(|e| UploadError::Malformed(e.to_string()))?;
        if bytes.is_empty() {
            return Err(UploadError::Empty);
        }

        return Ok(ImageUpload { filename, bytes });
    }

    Err(UploadError::Missing)
}
