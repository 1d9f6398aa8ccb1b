use std::path::Path;

use crate::shared::crop_region::CropMethod;

use super::crop_batch_use_case::BatchSummary;

const RULE_WIDTH: usize = 50;

/// Observer for batch progress.
///
/// Decouples the batch use case from where its output goes (stdout for the
/// CLI, nowhere for tests).
pub trait BatchReporter: Send {
    /// Processing is about to begin.
    fn start(&mut self, total: usize, input_dir: &Path, output_dir: &Path);

    /// The input directory held no supported images.
    fn no_inputs(&mut self, input_dir: &Path);

    fn warning(&mut self, message: &str);

    fn file_cropped(
        &mut self,
        index: usize,
        total: usize,
        input_name: &str,
        output_name: &str,
        method: CropMethod,
    );

    fn file_failed(&mut self, index: usize, total: usize, input_name: &str, error: &str);

    fn summary(&mut self, summary: &BatchSummary);
}

/// Discards all events.
pub struct NullBatchReporter;

impl BatchReporter for NullBatchReporter {
    fn start(&mut self, _total: usize, _input_dir: &Path, _output_dir: &Path) {}
    fn no_inputs(&mut self, _input_dir: &Path) {}
    fn warning(&mut self, _message: &str) {}
    fn file_cropped(&mut self, _: usize, _: usize, _: &str, _: &str, _: CropMethod) {}
    fn file_failed(&mut self, _: usize, _: usize, _: &str, _: &str) {}
    fn summary(&mut self, _summary: &BatchSummary) {}
}

/// Human-readable progress on stdout.
pub struct StdoutBatchReporter;

impl BatchReporter for StdoutBatchReporter {
    fn start(&mut self, total: usize, input_dir: &Path, output_dir: &Path) {
        println!("Processing {total} images from {}", input_dir.display());
        println!("Output to {}", output_dir.display());
        println!();
    }

    fn no_inputs(&mut self, input_dir: &Path) {
        println!("No images found in {}", input_dir.display());
        println!("Copy your raw avatar photos there and re-run.");
    }

    fn warning(&mut self, message: &str) {
        println!("  ! {message}");
    }

    fn file_cropped(
        &mut self,
        index: usize,
        total: usize,
        input_name: &str,
        output_name: &str,
        method: CropMethod,
    ) {
        println!(
            "{}",
            format_cropped_line(index, total, input_name, output_name, method)
        );
    }

    fn file_failed(&mut self, index: usize, total: usize, input_name: &str, error: &str) {
        println!("{}", format_failed_line(index, total, input_name, error));
    }

    fn summary(&mut self, summary: &BatchSummary) {
        println!();
        println!("{}", format_summary(summary));
    }
}

fn status_label(method: CropMethod) -> &'static str {
    match method {
        CropMethod::Face => "✓ face",
        CropMethod::Fallback => "○ center",
    }
}

pub fn format_cropped_line(
    index: usize,
    total: usize,
    input_name: &str,
    output_name: &str,
    method: CropMethod,
) -> String {
    format!(
        "  [{index:3}/{total}] {}  {input_name} → {output_name}",
        status_label(method)
    )
}

pub fn format_failed_line(index: usize, total: usize, input_name: &str, error: &str) -> String {
    format!("  [{index:3}/{total}] ✗ ERROR  {input_name}: {error}")
}

/// Totals block, followed by the error list and the fallback reminder when
/// they apply.
pub fn format_summary(summary: &BatchSummary) -> String {
    let rule = "=".repeat(RULE_WIDTH);
    let mut lines = vec![
        rule.clone(),
        format!("  Total:    {}", summary.total),
        format!("  Face:     {}", summary.face),
        format!("  Fallback: {}", summary.fallback),
        format!("  Errors:   {}", summary.errors.len()),
        rule,
    ];

    if !summary.errors.is_empty() {
        lines.push(String::new());
        lines.push("Files with errors:".to_string());
        for err in &summary.errors {
            lines.push(format!("  - {}: {}", err.file_name, err.message));
        }
    }

    if summary.fallback > 0 {
        lines.push(String::new());
        lines.push("Review fallback crops: no face was detected in these images.".to_string());
        lines.push("You may want to manually crop or replace them.".to_string());
    }

    lines.join("\n")
}
