//! User-picked files.

use std::future::Future;

use crate::constants::IMAGE_MEDIA_PREFIX;
use crate::error::AnalysisError;

/// A file chosen in the picker.
pub trait ImageFile: Clone {
    /// Display name of the file.
    fn name(&self) -> String;

    /// Declared media type, e.g. `image/png`. May be empty.
    fn media_type(&self) -> String;

    /// Read the file into a source an `<img>` element can display.
    fn read_preview(&self) -> impl Future<Output = Result<String, AnalysisError>>;
}

/// Check if a media type belongs to the image category.
pub fn is_image_media_type(media_type: &str) -> bool {
    media_type.starts_with(IMAGE_MEDIA_PREFIX)
}

/// Accept only files whose declared media type is an image type.
pub fn validate_image<F: ImageFile>(file: &F) -> Result<(), AnalysisError> {
    let media_type = file.media_type();
    if is_image_media_type(&media_type) {
        Ok(())
    } else {
        Err(AnalysisError::validation(media_type))
    }
}
