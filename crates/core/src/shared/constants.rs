pub const YOLO_MODEL_NAME: &str = "yolo11n-pose_widerface.onnx";
pub const YOLO_MODEL_URL: &str =
    "https://github.com/neutrinographics/faceguard/releases/download/v0.1.0/yolo11n-pose_widerface.onnx";

/// Raw avatar photos, relative to the project root.
pub const DEFAULT_INPUT_DIR: &str = "priv/static/images/seeds/avatars/incoming";

/// Output subdirectory created inside the input directory.
pub const CROPPED_SUBDIR: &str = "cropped";

pub const IMAGE_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "webp", "bmp", "tiff"];

pub const OUTPUT_EXTENSION: &str = "jpg";
