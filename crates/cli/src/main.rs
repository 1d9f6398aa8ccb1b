use std::path::{Path, PathBuf};
use std::process;

use clap::Parser;

use avatar_crop_core::detection::domain::face_detector::FaceDetector;
use avatar_crop_core::detection::infrastructure::model_resolver;
use avatar_crop_core::detection::infrastructure::onnx_yolo_detector::{
    OnnxYoloDetector, DEFAULT_CONFIDENCE,
};
use avatar_crop_core::imaging::infrastructure::image_file_reader::ImageFileReader;
use avatar_crop_core::imaging::infrastructure::jpeg_file_writer::JpegFileWriter;
use avatar_crop_core::pipeline::batch_reporter::StdoutBatchReporter;
use avatar_crop_core::pipeline::crop_avatar_use_case::CropAvatarUseCase;
use avatar_crop_core::pipeline::crop_batch_use_case::CropBatchUseCase;
use avatar_crop_core::shared::constants::{
    CROPPED_SUBDIR, DEFAULT_INPUT_DIR, YOLO_MODEL_NAME, YOLO_MODEL_URL,
};
use avatar_crop_core::shared::crop_config::CropConfig;

/// Crop avatar photos to square, face-centered 800x800 JPEGs.
#[derive(Parser, Debug)]
#[command(name = "avatar-crop", version)]
struct Cli {
    /// Directory of raw avatar photos.
    #[arg(long, default_value = DEFAULT_INPUT_DIR)]
    input_dir: PathBuf,

    /// Output directory [default: <INPUT_DIR>/cropped].
    #[arg(long)]
    output_dir: Option<PathBuf>,

    /// Directory holding a pre-downloaded face detection model.
    /// Checked before the user cache.
    #[arg(long)]
    model_dir: Option<PathBuf>,
}

impl Cli {
    fn output_dir(&self) -> PathBuf {
        self.output_dir
            .clone()
            .unwrap_or_else(|| self.input_dir.join(CROPPED_SUBDIR))
    }
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    let detector = match startup(build_detector(cli.model_dir.as_deref())) {
        Ok(detector) => detector,
        Err(code) => process::exit(code),
    };

    if let Err(e) = run(&cli, detector) {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}

fn run(cli: &Cli, detector: Box<dyn FaceDetector>) -> Result<(), Box<dyn std::error::Error>> {
    let config = CropConfig::default();
    let writer = JpegFileWriter::new(config.jpeg_quality);
    let cropper = CropAvatarUseCase::new(
        Box::new(ImageFileReader::new()),
        detector,
        Box::new(writer),
        config,
    );

    let mut use_case = CropBatchUseCase::new(cropper, Box::new(StdoutBatchReporter));
    let summary = use_case.execute(&cli.input_dir, &cli.output_dir())?;
    log::debug!("{summary:?}");
    Ok(())
}

/// Gate the batch on a loaded detector; a missing model maps to exit code 1.
fn startup(
    detector: Result<Box<dyn FaceDetector>, Box<dyn std::error::Error>>,
) -> Result<Box<dyn FaceDetector>, i32> {
    detector.map_err(|e| {
        eprintln!("Missing dependencies: {e}");
        eprintln!("The face detection model could not be loaded; pass --model-dir to use a local copy.");
        1
    })
}

fn build_detector(model_dir: Option<&Path>) -> Result<Box<dyn FaceDetector>, Box<dyn std::error::Error>> {
    log::info!("Resolving model: {YOLO_MODEL_NAME}");
    let model_path = model_resolver::resolve(
        YOLO_MODEL_NAME,
        YOLO_MODEL_URL,
        model_dir,
        Some(Box::new(download_progress)),
    )?;

    let detector = OnnxYoloDetector::new(&model_path, DEFAULT_CONFIDENCE)?;
    Ok(Box::new(detector))
}

fn download_progress(downloaded: u64, total: u64) {
    if total > 0 {
        let pct = (downloaded as f64 / total as f64 * 100.0) as u32;
        eprint!("\rDownloading face detection model... {pct}%");
        if downloaded >= total {
            eprintln!();
        }
    } else {
        eprint!("\rDownloading face detection model... {downloaded} bytes");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_no_arguments_uses_fixed_layout() {
        let cli = Cli::try_parse_from(["avatar-crop"]).unwrap();
        assert_eq!(cli.input_dir, PathBuf::from(DEFAULT_INPUT_DIR));
        assert_eq!(
            cli.output_dir(),
            PathBuf::from(DEFAULT_INPUT_DIR).join("cropped")
        );
        assert!(cli.model_dir.is_none());
    }

    #[test]
    fn test_output_follows_input_override() {
        let cli = Cli::try_parse_from(["avatar-crop", "--input-dir", "/tmp/raw"]).unwrap();
        assert_eq!(cli.output_dir(), PathBuf::from("/tmp/raw/cropped"));
    }

    #[test]
    fn test_explicit_output_dir() {
        let cli =
            Cli::try_parse_from(["avatar-crop", "--output-dir", "/tmp/out"]).unwrap();
        assert_eq!(cli.output_dir(), PathBuf::from("/tmp/out"));
    }

    #[test]
    fn test_positional_arguments_rejected() {
        assert!(Cli::try_parse_from(["avatar-crop", "photo.jpg"]).is_err());
    }

    struct NoFaces;

    impl FaceDetector for NoFaces {
        fn detect(
            &mut self,
            _frame: &avatar_crop_core::shared::frame::Frame,
        ) -> Result<Vec<avatar_crop_core::shared::face_box::FaceBox>, Box<dyn std::error::Error>> {
            Ok(Vec::new())
        }
    }

    #[test]
    fn test_startup_passes_loaded_detector_through() {
        let detector: Box<dyn FaceDetector> = Box::new(NoFaces);
        assert!(startup(Ok(detector)).is_ok());
    }

    #[test]
    fn test_startup_failure_exits_with_one() {
        let result = startup(Err("model not found".into()));
        assert!(matches!(result, Err(1)));
    }

    #[test]
    fn test_unloadable_model_dir_exits_with_one() {
        let tmp = tempfile::TempDir::new().unwrap();
        std::fs::write(tmp.path().join(YOLO_MODEL_NAME), b"not an onnx graph").unwrap();

        let result = startup(build_detector(Some(tmp.path())));
        assert!(matches!(result, Err(1)));
    }
}
