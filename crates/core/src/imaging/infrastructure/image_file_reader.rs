use std::fs;
use std::io::Cursor;
use std::path::{Path, PathBuf};

use image::DynamicImage;
use thiserror::Error;

use crate::imaging::domain::image_reader::ImageReader;
use crate::shared::frame::Frame;

#[derive(Error, Debug)]
pub enum ImageIoError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to decode {path}: {source}")]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
    #[error("{path} has zero width or height")]
    Empty { path: PathBuf },
}

/// Decodes image files with the `image` crate.
///
/// The format is sniffed from the file contents, so a misnamed extension
/// still decodes.
pub struct ImageFileReader;

impl ImageFileReader {
    pub fn new() -> Self {
        Self
    }

    fn decode(&self, path: &Path) -> Result<DynamicImage, ImageIoError> {
        let bytes = fs::read(path).map_err(|source| ImageIoError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let image = image::ImageReader::new(Cursor::new(bytes))
            .with_guessed_format()
            .map_err(|source| ImageIoError::Read {
                path: path.to_path_buf(),
                source,
            })?
            .decode()
            .map_err(|source| ImageIoError::Decode {
                path: path.to_path_buf(),
                source,
            })?;

        if image.width() == 0 || image.height() == 0 {
            return Err(ImageIoError::Empty {
                path: path.to_path_buf(),
            });
        }
        Ok(image)
    }
}

impl Default for ImageFileReader {
    fn default() -> Self {
        Self::new()
    }
}

impl ImageReader for ImageFileReader {
    fn read_frame(&self, path: &Path) -> Result<Frame, Box<dyn std::error::Error>> {
        let rgb = self.decode(path)?.into_rgb8();
        let (width, height) = rgb.dimensions();
        Ok(Frame::new(rgb.into_raw(), width, height, 3))
    }

    fn read_image(&self, path: &Path) -> Result<DynamicImage, Box<dyn std::error::Error>> {
        Ok(self.decode(path)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgb, RgbImage, Rgba, RgbaImage};

    fn write_test_image(dir: &Path, name: &str, width: u32, height: u32) -> PathBuf {
        let path = dir.join(name);
        let img = RgbImage::from_pixel(width, height, Rgb([50, 100, 200]));
        img.save(&path).unwrap();
        path
    }

    #[test]
    fn test_read_frame_is_rgb() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_test_image(dir.path(), "test.png", 100, 80);

        let frame = ImageFileReader::new().read_frame(&path).unwrap();
        assert_eq!((frame.width(), frame.height()), (100, 80));
        assert_eq!(frame.channels(), 3);
        assert_eq!(&frame.data()[..3], &[50, 100, 200]);
    }

    #[test]
    fn test_read_frame_drops_alpha() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("alpha.png");
        RgbaImage::from_pixel(4, 4, Rgba([1, 2, 3, 4]))
            .save(&path)
            .unwrap();

        let frame = ImageFileReader::new().read_frame(&path).unwrap();
        assert_eq!(frame.channels(), 3);
        assert_eq!(frame.data().len(), 4 * 4 * 3);
    }

    #[test]
    fn test_read_image_keeps_native_color_type() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("alpha.png");
        RgbaImage::from_pixel(4, 4, Rgba([1, 2, 3, 4]))
            .save(&path)
            .unwrap();

        let img = ImageFileReader::new().read_image(&path).unwrap();
        assert_eq!(img.color(), image::ColorType::Rgba8);
    }

    #[test]
    fn test_both_loads_agree_on_dimensions() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_test_image(dir.path(), "test.bmp", 37, 21);
        let reader = ImageFileReader::new();

        let frame = reader.read_frame(&path).unwrap();
        let img = reader.read_image(&path).unwrap();
        assert_eq!((frame.width(), frame.height()), (img.width(), img.height()));
    }

    #[test]
    fn test_format_sniffed_from_content() {
        let dir = tempfile::tempdir().unwrap();
        let png = write_test_image(dir.path(), "real.png", 10, 10);
        let misnamed = dir.path().join("misnamed.jpg");
        fs::rename(&png, &misnamed).unwrap();

        assert!(ImageFileReader::new().read_image(&misnamed).is_ok());
    }

    #[test]
    fn test_missing_file_is_read_error() {
        let err = ImageFileReader::new()
            .decode(Path::new("/nonexistent/test.png"))
            .unwrap_err();
        assert!(matches!(err, ImageIoError::Read { .. }));
    }

    #[test]
    fn test_corrupt_file_is_decode_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("corrupt.jpg");
        fs::write(&path, b"\xFF\xD8\xFF\xE0 definitely not a jpeg").unwrap();

        let err = ImageFileReader::new().decode(&path).unwrap_err();
        assert!(matches!(err, ImageIoError::Decode { .. }), "{err}");
    }

    #[test]
    fn test_unknown_format_is_decode_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("notes.png");
        fs::write(&path, b"plain text").unwrap();

        assert!(ImageFileReader::new().read_frame(&path).is_err());
    }
}
