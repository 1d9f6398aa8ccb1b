use super::constants::IMAGE_EXTENSIONS;

pub const DEFAULT_TARGET_SIZE: u32 = 800;

/// Padding added on each side of the face, as a fraction of its larger side.
pub const DEFAULT_PADDING: f64 = 0.4;

/// Downward shift of the crop center, as a fraction of the crop size.
pub const DEFAULT_VERTICAL_OFFSET: f64 = 0.05;

pub const DEFAULT_JPEG_QUALITY: u8 = 90;

/// Fixed parameters for one cropping run.
///
/// The CLI always uses [`CropConfig::default`]; other values exist so the
/// planner and writer can be exercised with varied parameters.
#[derive(Clone, Debug, PartialEq)]
pub struct CropConfig {
    pub target_size: u32,
    pub padding: f64,
    pub vertical_offset: f64,
    pub jpeg_quality: u8,
    pub extensions: Vec<String>,
}

impl CropConfig {
    /// Case-insensitive check of a file extension (without the dot).
    pub fn supports_extension(&self, ext: &str) -> bool {
        let ext = ext.to_lowercase();
        self.extensions.iter().any(|e| *e == ext)
    }
}

impl Default for CropConfig {
    fn default() -> Self {
        Self {
            target_size: DEFAULT_TARGET_SIZE,
            padding: DEFAULT_PADDING,
            vertical_offset: DEFAULT_VERTICAL_OFFSET,
            jpeg_quality: DEFAULT_JPEG_QUALITY,
            extensions: IMAGE_EXTENSIONS.iter().map(|e| e.to_string()).collect(),
        }
    }
}
