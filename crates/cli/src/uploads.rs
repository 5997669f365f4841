//! Simulated image upload.
//!
//! No file is transferred: the reference is checked, the configured delay
//! elapses, and the reference itself becomes the stored image URL.

use std::time::Duration;

use canteen_core::errors::{CanteenError, CanteenResult};
use tracing::{debug, info};

const JPEG_EXTENSIONS: [&str; 2] = [".jpg", ".jpeg"];
const JPEG_DATA_PREFIX: &str = "data:image/jpeg";

/// Only JPEG images are accepted, by file extension or data URL type.
pub fn validate_image_reference(reference: &str) -> CanteenResult<()> {
    let reference = reference.trim();
    if reference.is_empty() {
        return Err(CanteenError::Validation(
            "Image reference is required".to_string(),
        ));
    }

    let lowered = reference.to_lowercase();
    let path = lowered
        .split(['?', '#'])
        .next()
        .unwrap_or(lowered.as_str());
    let is_jpeg = lowered.starts_with(JPEG_DATA_PREFIX)
        || JPEG_EXTENSIONS.iter().any(|ext| path.ends_with(ext));

    if !is_jpeg {
        return Err(CanteenError::Validation(
            "Please upload only JPG or JPEG images".to_string(),
        ));
    }
    Ok(())
}

/// Waits `delay` and returns the URL to store for `reference`.
pub async fn upload_image(reference: &str, delay: Duration) -> CanteenResult<String> {
    validate_image_reference(reference)?;

    debug!("Uploading image: delay={:?}", delay);
    tokio::time::sleep(delay).await;
    info!("Image uploaded");

    Ok(reference.trim().to_string())
}
