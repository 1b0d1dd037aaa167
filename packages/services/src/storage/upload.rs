use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use std::fmt;
use uuid::Uuid;

use super::blob_store::BlobStore;

pub const MAX_UPLOAD_BYTES: usize = 5 * 1024 * 1024;
const UPLOAD_PREFIX: &str = "blog-images";
const DEFAULT_EXTENSION: &str = "jpg";

#[derive(Debug)]
pub enum UploadError {
    Validation(String),
    Storage(String),
}

impl fmt::Display for UploadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UploadError::Validation(m) => f.write_str(m),
            UploadError::Storage(m) => f.write_str(m),
        }
    }
}

#[derive(Debug)]
pub struct UploadedImage {
    pub url: String,
    pub key: String,
}

/// Validates and stores a base64-encoded image: the content type must be an
/// image, the decoded payload must stay under 5 MB and must carry a
/// recognizable image signature. Nothing reaches the blob store otherwise.
pub fn store_image(
    store: &dyn BlobStore,
    filename: &str,
    content_type: &str,
    base64_data: &str,
) -> Result<UploadedImage, UploadError> {
    let mime: mime::Mime = content_type
        .parse()
        .map_err(|_| UploadError::Validation("Invalid content type".to_string()))?;

    if mime.type_() != mime::IMAGE {
        return Err(UploadError::Validation(
            "Only image uploads are accepted".to_string(),
        ));
    }

    let bytes = STANDARD
        .decode(base64_data)
        .map_err(|_| UploadError::Validation("Invalid base64 payload".to_string()))?;

    if bytes.len() > MAX_UPLOAD_BYTES {
        return Err(UploadError::Validation(
            "Image exceeds the 5 MB limit".to_string(),
        ));
    }

    if image::guess_format(&bytes).is_err() {
        return Err(UploadError::Validation(
            "Payload is not a recognizable image".to_string(),
        ));
    }

    let extension = filename
        .rsplit_once('.')
        .map(|(_, ext)| ext.to_ascii_lowercase())
        .filter(|ext| !ext.is_empty())
        .unwrap_or_else(|| DEFAULT_EXTENSION.to_string());

    let key = format!("{}/{}.{}", UPLOAD_PREFIX, Uuid::new_v4(), extension);

    let url = store
        .put(&key, &bytes, content_type)
        .map_err(|e| UploadError::Storage(e.message))?;

    Ok(UploadedImage { url, key })
}
