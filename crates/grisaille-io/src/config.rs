use std::path::{Path, PathBuf};

use grisaille_image::ImageSize;
use serde::{Deserialize, Serialize};

use crate::error::IoError;

/// Parameters of the processing pipeline, persisted as JSON.
///
/// Directories and raw dimensions are explicit configuration handed to the
/// loaders and writers at call time; there are no process-wide defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PipelineConfig {
    /// Directory holding the input images.
    pub data_dir: PathBuf,
    /// Directory where rendered results are written.
    pub output_dir: PathBuf,
    /// Width of headerless raw inputs, in pixels.
    pub raw_width: usize,
    /// Height of headerless raw inputs, in pixels.
    pub raw_height: usize,
    /// Gamma values applied by the enhancement showcase.
    pub gamma: Vec<f64>,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("data"),
            output_dir: PathBuf::from("output"),
            raw_width: 512,
            raw_height: 512,
            gamma: vec![0.5, 1.5, 2.2],
        }
    }
}

impl PipelineConfig {
    /// The configured size of headerless raw inputs.
    pub fn raw_size(&self) -> ImageSize {
        ImageSize {
            width: self.raw_width,
            height: self.raw_height,
        }
    }
}

/// Saves the given configuration to the given file path as pretty-printed
/// JSON.
pub fn save_config(config: &PipelineConfig, file_path: impl AsRef<Path>) -> Result<(), IoError> {
    let file = std::fs::File::create(file_path)?;
    serde_json::to_writer_pretty(file, config)?;

    Ok(())
}

/// Loads a configuration from the given JSON file path.
///
/// # Errors
///
/// Returns an error if the file does not exist or cannot be parsed.
pub fn load_config(file_path: impl AsRef<Path>) -> Result<PipelineConfig, IoError> {
    let file_path = file_path.as_ref();

    if !file_path.exists() {
        return Err(IoError::FileDoesNotExist(file_path.to_path_buf()));
    }

    let file = std::fs::File::open(file_path)?;
    Ok(serde_json::from_reader(file)?)
}
