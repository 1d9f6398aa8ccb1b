use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use crate::shared::constants::OUTPUT_EXTENSION;
use crate::shared::crop_config::CropConfig;

/// Regular files directly inside `dir` with a supported extension, sorted by
/// file name.
pub fn scan_inputs(dir: &Path, config: &CropConfig) -> std::io::Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        if path.is_file() && has_supported_extension(&path, config) {
            files.push(path);
        }
    }
    files.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
    Ok(files)
}

fn has_supported_extension(path: &Path, config: &CropConfig) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| config.supports_extension(ext))
        .unwrap_or(false)
}

/// Output file name for an input: its stem with a `.jpg` extension.
pub fn output_name(input: &Path) -> String {
    let stem = input
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    format!("{stem}.{OUTPUT_EXTENSION}")
}

/// Display name of an input path.
pub fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

/// Groups of inputs that are written to the same output file.
///
/// Only identical output names count, so `X.png` and `x.png` stay apart.
/// Each group keeps input order, so its last entry is the one that survives.
pub fn output_collisions(inputs: &[PathBuf]) -> Vec<Vec<String>> {
    let mut by_output: BTreeMap<String, Vec<String>> = BTreeMap::new();
    for input in inputs {
        by_output
            .entry(output_name(input))
            .or_default()
            .push(file_name(input));
    }
    by_output.into_values().filter(|g| g.len() > 1).collect()
}
