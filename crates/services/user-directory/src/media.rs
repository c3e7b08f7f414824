//! Loading profile photos from the filesystem.

use std::fs;
use std::path::Path;

use common::{AppError, AppResult};
use domain::{is_image_data_url, ImageUpload, MAX_PHOTO_BYTES};
use tracing::debug;

/// Where a profile photo comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PhotoSource {
    /// Already an embedded `data:image/...;base64,` string
    Embedded(String),
    /// Raw image still to be checked and converted
    Upload(ImageUpload),
}

impl PhotoSource {
    /// Produce the embedded data URL stored on the record
    pub fn into_data_url(self) -> AppResult<String> {
        match self {
            PhotoSource::Embedded(url) => Ok(url),
            PhotoSource::Upload(upload) => Ok(upload.to_data_url()?),
        }
    }
}

/// Read an image file into an upload, inferring its MIME type from the
/// extension. Files over the size limit are rejected before being read.
pub fn load_image(path: &Path) -> AppResult<ImageUpload> {
    let size = fs::metadata(path)?.len();
    if size > MAX_PHOTO_BYTES as u64 {
        return Err(AppError::Media("Image size should be less than 5MB".to_string()));
    }

    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .unwrap_or_default();
    let bytes = fs::read(path)?;
    debug!("Loaded image {:?} ({} bytes)", path, bytes.len());

    Ok(ImageUpload::with_extension(extension, bytes))
}

/// Resolve a photo argument: an embedded data URL is taken as-is, anything
/// else is treated as a path to an image file.
pub fn resolve_photo(value: &str) -> AppResult<PhotoSource> {
    if is_image_data_url(value) {
        return Ok(PhotoSource::Embedded(value.to_string()));
    }
    Ok(PhotoSource::Upload(load_image(Path::new(value))?))
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn test_embedded_url_passes_through() {
        let url = "data:image/gif;base64,R0lGOA==";
        assert_eq!(
            resolve_photo(url).unwrap().into_data_url().unwrap(),
            url
        );
    }

    #[test]
    fn test_image_file_converts() {
        let mut file = tempfile::Builder::new().suffix(".png").tempfile().unwrap();
        file.write_all(&[0x89, b'P', b'N', b'G']).unwrap();

        let source = resolve_photo(file.path().to_str().unwrap()).unwrap();
        assert_eq!(source.into_data_url().unwrap(), "data:image/png;base64,iVBORw==");
    }

    #[test]
    fn test_non_image_file_rejected() {
        let mut file = tempfile::Builder::new().suffix(".txt").tempfile().unwrap();
        file.write_all(b"hello").unwrap();

        let err = resolve_photo(file.path().to_str().unwrap())
            .unwrap()
            .into_data_url()
            .unwrap_err();
        assert!(matches!(err, AppError::Media(ref m) if m == "Please upload an image file"));
    }

    #[test]
    fn test_missing_file_is_storage_error() {
        let err = resolve_photo("/definitely/not/here.png").unwrap_err();
        assert!(err.is_storage());
    }
}
