use thiserror::Error;

/// Largest picture accepted for upload, in bytes.
pub const MAX_IMAGE_BYTES: u64 = 2_000_000;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ImageRejection {
    #[error("Please select an image.")]
    NotAnImage,
    #[error("Image too large (max {max} bytes, got {size}).")]
    TooLarge { size: u64, max: u64 },
}

/// Decides whether a selected file may become the pending upload.
///
/// `mime` is the browser-reported type of the file and `size` its length in
/// bytes.
pub fn check_image(mime: &str, size: u64) -> Result<(), ImageRejection> {
    if !mime.trim().to_ascii_lowercase().starts_with("image/") {
        return Err(ImageRejection::NotAnImage);
    }
    if size > MAX_IMAGE_BYTES {
        return Err(ImageRejection::TooLarge {
            size,
            max: MAX_IMAGE_BYTES,
        });
    }
    Ok(())
}
