use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

use image::codecs::jpeg::JpegEncoder;
use image::RgbImage;

use crate::imaging::domain::image_writer::ImageWriter;

/// Encodes RGB images as baseline JPEG at a fixed quality.
///
/// Writes go straight to the destination; a failed encode can leave a
/// truncated file behind.
pub struct JpegFileWriter {
    quality: u8,
}

impl JpegFileWriter {
    /// `quality` is clamped to the encoder's 1..=100 range.
    pub fn new(quality: u8) -> Self {
        Self {
            quality: quality.clamp(1, 100),
        }
    }

    pub fn quality(&self) -> u8 {
        self.quality
    }
}

impl ImageWriter for JpegFileWriter {
    fn write(&self, path: &Path, image: &RgbImage) -> Result<(), Box<dyn std::error::Error>> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let mut out = BufWriter::new(File::create(path)?);
        JpegEncoder::new_with_quality(&mut out, self.quality).encode_image(image)?;
        out.flush()?;
        Ok(())
    }
}
