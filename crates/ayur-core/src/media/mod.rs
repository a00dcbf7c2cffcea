//! Inline media handling.
//!
//! Uploaded images are never stored as external files; they are encoded into
//! portable base64 data URIs and travel inside the record itself.

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct MimeType(pub String);

impl MimeType {
    pub fn image_png() -> Self {
        Self("image/png".into())
    }

    pub fn image_jpeg() -> Self {
        Self("image/jpeg".into())
    }

    /// Whether this mime type denotes an image of any subtype.
    pub fn is_image(&self) -> bool {
        self.0.starts_with("image/")
    }
}

impl fmt::Display for MimeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for MimeType {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

/// A `data:` URI holding base64-encoded content.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DataUri(pub String);

impl DataUri {
    pub fn encode(mime: &MimeType, bytes: &[u8]) -> Self {
        Self(format!("data:{};base64,{}", mime, BASE64.encode(bytes)))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DataUri {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error, Serialize, Deserialize)]
pub enum MediaError {
    #[error("not an image: {mime}")]
    NotAnImage { mime: String },
}

/// A binary file selected for an image field, before encoding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageUpload {
    pub file_name: String,
    pub mime: MimeType,
    pub bytes: Vec<u8>,
}

impl ImageUpload {
    pub fn new(file_name: impl Into<String>, mime: impl Into<MimeType>, bytes: Vec<u8>) -> Self {
        Self {
            file_name: file_name.into(),
            mime: mime.into(),
            bytes,
        }
    }

    /// Encode the upload as an inline data URI.
    ///
    /// Anything that is not `image/*` is rejected; the caller keeps whatever
    /// image it already held.
    pub fn into_data_uri(self) -> Result<DataUri, MediaError> {
        if !self.mime.is_image() {
            return Err(MediaError::NotAnImage {
                mime: self.mime.0,
            });
        }
        Ok(DataUri::encode(&self.mime, &self.bytes))
    }
}
