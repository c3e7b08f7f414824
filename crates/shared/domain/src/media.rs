//! Profile photo uploads.
//!
//! An [`ImageUpload`] is the raw file an operator picked. It is checked for
//! size and MIME type and then embedded as a self-contained
//! `data:<mime>;base64,<payload>` string, which the store keeps opaquely.

use base64::{engine::general_purpose::STANDARD, Engine as _};
use once_cell::sync::Lazy;
use regex::Regex;

use crate::constants::{IMAGE_MIME_PREFIX, MAX_PHOTO_BYTES};
use crate::error::{DomainError, DomainResult};

static IMAGE_DATA_URL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^data:image/[A-Za-z0-9.+-]+;base64,[A-Za-z0-9+/]*={0,2}$")
        .expect("image data URL pattern is valid")
});

/// Raw image upload awaiting conversion.
#[derive(Clone, PartialEq, Eq)]
pub struct ImageUpload {
    mime_type: String,
    bytes: Vec<u8>,
}

// Payloads can be megabytes; keep them out of debug output
impl std::fmt::Debug for ImageUpload {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ImageUpload")
            .field("mime_type", &self.mime_type)
            .field("size", &self.bytes.len())
            .finish()
    }
}

impl ImageUpload {
    pub fn new(mime_type: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            mime_type: mime_type.into(),
            bytes,
        }
    }

    /// Build an upload whose MIME type is inferred from a file extension.
    pub fn with_extension(extension: &str, bytes: Vec<u8>) -> Self {
        Self::new(mime_for_extension(extension), bytes)
    }

    pub fn mime_type(&self) -> &str {
        &self.mime_type
    }

    pub fn size(&self) -> usize {
        self.bytes.len()
    }

    /// Reject oversized payloads and anything that is not an image.
    pub fn check(&self) -> DomainResult<()> {
        if self.bytes.len() > MAX_PHOTO_BYTES {
            return Err(DomainError::media("Image size should be less than 5MB"));
        }
        if !self.mime_type.starts_with(IMAGE_MIME_PREFIX) {
            return Err(DomainError::media("Please upload an image file"));
        }
        Ok(())
    }

    /// Convert into an embedded data URL.
    pub fn to_data_url(&self) -> DomainResult<String> {
        self.check()?;
        Ok(format!(
            "data:{};base64,{}",
            self.mime_type,
            STANDARD.encode(&self.bytes)
        ))
    }
}

/// Check whether a string already is an embedded image data URL.
pub fn is_image_data_url(value: &str) -> bool {
    IMAGE_DATA_URL.is_match(value)
}

/// Best-effort MIME type for a file extension; unknown extensions map to
/// `application/octet-stream`, which [`ImageUpload::check`] rejects.
pub fn mime_for_extension(extension: &str) -> &'static str {
    match extension.to_ascii_lowercase().as_str() {
        "png" => "image/png",
        "jpg" | "jpeg" => "image/jpeg",
        "gif" => "image/gif",
        "webp" => "image/webp",
        "svg" => "image/svg+xml",
        "bmp" => "image/bmp",
        "ico" => "image/x-icon",
        "avif" => "image/avif",
        _ => "application/octet-stream",
    }
}
