use std::path::Path;

use image::DynamicImage;

use crate::shared::frame::Frame;

/// Decodes source images.
///
/// Detection and editing use separate loads: detectors get a plain RGB
/// [`Frame`], while cropping keeps the codec's native [`DynamicImage`] so
/// color mode is only normalized at the very end.
pub trait ImageReader: Send {
    /// Decodes `path` into RGB pixels for face detection.
    fn read_frame(&self, path: &Path) -> Result<Frame, Box<dyn std::error::Error>>;

    /// Decodes `path` into an editable image.
    fn read_image(&self, path: &Path) -> Result<DynamicImage, Box<dyn std::error::Error>>;
}
