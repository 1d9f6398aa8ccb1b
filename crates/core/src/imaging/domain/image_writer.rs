use std::path::Path;

use image::RgbImage;

/// Persists a finished output image.
pub trait ImageWriter: Send {
    fn write(&self, path: &Path, image: &RgbImage) -> Result<(), Box<dyn std::error::Error>>;
}
