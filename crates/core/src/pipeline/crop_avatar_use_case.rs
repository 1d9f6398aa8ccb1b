use std::path::Path;

use crate::cropping::domain::crop_planner::plan_crop;
use crate::cropping::domain::image_transformer::transform;
use crate::detection::domain::face_detector::FaceDetector;
use crate::imaging::domain::image_reader::ImageReader;
use crate::imaging::domain::image_writer::ImageWriter;
use crate::shared::crop_config::CropConfig;
use crate::shared::crop_region::CropPlan;

/// Single-image pipeline: read → detect → plan → transform → write.
pub struct CropAvatarUseCase {
    reader: Box<dyn ImageReader>,
    detector: Box<dyn FaceDetector>,
    writer: Box<dyn ImageWriter>,
    config: CropConfig,
}

impl CropAvatarUseCase {
    pub fn new(
        reader: Box<dyn ImageReader>,
        detector: Box<dyn FaceDetector>,
        writer: Box<dyn ImageWriter>,
        config: CropConfig,
    ) -> Self {
        Self {
            reader,
            detector,
            writer,
            config,
        }
    }

    pub fn config(&self) -> &CropConfig {
        &self.config
    }

    /// Crops one image and writes the result to `output_path`.
    pub fn execute(
        &mut self,
        input_path: &Path,
        output_path: &Path,
    ) -> Result<CropPlan, Box<dyn std::error::Error>> {
        let frame = self.reader.read_frame(input_path)?;
        let faces = self.detector.detect(&frame)?;
        let detected_size = (frame.width(), frame.height());
        drop(frame);

        let image = self.reader.read_image(input_path)?;
        if (image.width(), image.height()) != detected_size {
            return Err(format!(
                "decoded size {}x{} differs from detection size {}x{}",
                image.width(),
                image.height(),
                detected_size.0,
                detected_size.1
            )
            .into());
        }

        let plan = plan_crop(image.width(), image.height(), &faces, &self.config);
        log::debug!(
            "{}: {} face(s), {} crop {:?}",
            input_path.display(),
            faces.len(),
            plan.method,
            plan.region
        );

        let output = transform(&image, &plan.region, self.config.target_size);
        drop(image);
        self.writer.write(output_path, &output)?;

        Ok(plan)
    }
}
