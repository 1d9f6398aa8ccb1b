use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::shared::crop_region::CropMethod;

use super::batch_reporter::BatchReporter;
use super::crop_avatar_use_case::CropAvatarUseCase;
use super::input_scanner::{file_name, output_collisions, output_name, scan_inputs};

#[derive(Error, Debug)]
pub enum BatchError {
    #[error("failed to create output directory {path}: {source}")]
    CreateOutputDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to list input directory {path}: {source}")]
    ReadInputDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// A file that could not be cropped.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FileError {
    pub file_name: String,
    pub message: String,
}

/// Counters for one batch run.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BatchSummary {
    pub total: usize,
    pub face: usize,
    pub fallback: usize,
    pub errors: Vec<FileError>,
    /// Inputs whose output was overwritten by a later input with the same output name.
    pub output_collisions: usize,
}

/// Crops every supported image in a directory, one file at a time.
///
/// A failing file is recorded and skipped; only setup failures (output
/// directory, input listing) abort the run.
pub struct CropBatchUseCase {
    cropper: CropAvatarUseCase,
    reporter: Box<dyn BatchReporter>,
}

impl CropBatchUseCase {
    pub fn new(cropper: CropAvatarUseCase, reporter: Box<dyn BatchReporter>) -> Self {
        Self { cropper, reporter }
    }

    pub fn execute(&mut self, input_dir: &Path, output_dir: &Path) -> Result<BatchSummary, BatchError> {
        fs::create_dir_all(output_dir).map_err(|source| BatchError::CreateOutputDir {
            path: output_dir.to_path_buf(),
            source,
        })?;

        let inputs =
            scan_inputs(input_dir, self.cropper.config()).map_err(|source| BatchError::ReadInputDir {
                path: input_dir.to_path_buf(),
                source,
            })?;

        if inputs.is_empty() {
            log::info!("No supported images in {}", input_dir.display());
            self.reporter.no_inputs(input_dir);
            return Ok(BatchSummary::default());
        }

        let total = inputs.len();
        self.reporter.start(total, input_dir, output_dir);

        let mut summary = BatchSummary {
            total,
            ..BatchSummary::default()
        };

        for group in output_collisions(&inputs) {
            summary.output_collisions += group.len() - 1;
            let message = format!(
                "{} share output {}; {} will be kept",
                group.join(", "),
                output_name(Path::new(&group[0])),
                group[group.len() - 1]
            );
            log::warn!("{message}");
            self.reporter.warning(&message);
        }

        for (i, input) in inputs.iter().enumerate() {
            let index = i + 1;
            let input_name = file_name(input);
            let out_name = output_name(input);
            let output_path = output_dir.join(&out_name);

            match self.cropper.execute(input, &output_path) {
                Ok(plan) => {
                    match plan.method {
                        CropMethod::Face => summary.face += 1,
                        CropMethod::Fallback => summary.fallback += 1,
                    }
                    self.reporter
                        .file_cropped(index, total, &input_name, &out_name, plan.method);
                }
                Err(e) => {
                    let message = e.to_string();
                    log::warn!("Failed to crop {}: {message}", input.display());
                    self.reporter.file_failed(index, total, &input_name, &message);
                    summary.errors.push(FileError {
                        file_name: input_name,
                        message,
                    });
                }
            }
        }

        log::info!(
            "Cropped {} of {total} images ({} face, {} fallback)",
            summary.face + summary.fallback,
            summary.face,
            summary.fallback
        );
        self.reporter.summary(&summary);
        Ok(summary)
    }
}
