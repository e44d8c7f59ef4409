//! Loader for RON stage files at startup.

use ron::Options;
use std::fs;
use std::path::Path;

use super::data::*;

/// Stage layouts compiled into the binary, used when the file on disk is unusable.
pub const EMBEDDED_STAGES: &str = include_str!("../../assets/data/stages.ron");

/// Error type for content loading failures.
#[derive(Debug)]
pub struct ContentLoadError {
    pub file: String,
    pub message: String,
}

impl std::fmt::Display for ContentLoadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Failed to load {}: {}", self.file, self.message)
    }
}

/// Create RON options with extensions enabled for more flexible parsing.
fn ron_options() -> Options {
    Options::default().with_default_extension(ron::extensions::Extensions::IMPLICIT_SOME)
}

/// Parse RON text containing a DataFile<T> wrapper.
pub fn parse_data_file<T>(file_name: &str, contents: &str) -> Result<Vec<T>, ContentLoadError>
where
    T: for<'de> serde::Deserialize<'de>,
{
    let data: DataFile<T> = ron_options()
        .from_str(contents)
        .map_err(|e| ContentLoadError {
            file: file_name.to_string(),
            message: format!("Parse error: {}", e),
        })?;

    Ok(data.items)
}

/// Load a RON file containing a DataFile<T> wrapper.
fn load_data_file<T>(path: &Path) -> Result<Vec<T>, ContentLoadError>
where
    T: for<'de> serde::Deserialize<'de>,
{
    let file_name = path.display().to_string();
    let contents = fs::read_to_string(path).map_err(|e| ContentLoadError {
        file: file_name.clone(),
        message: format!("IO error: {}", e),
    })?;

    parse_data_file(&file_name, &contents)
}

/// Load stage definitions from `<base_path>/stages.ron`.
pub fn load_stages(base_path: &Path) -> Result<Vec<StageDef>, ContentLoadError> {
    load_data_file::<StageDef>(&base_path.join("stages.ron"))
}

/// Parse the stage layouts embedded at compile time.
pub fn embedded_stages() -> Result<Vec<StageDef>, ContentLoadError> {
    parse_data_file("<embedded stages.ron>", EMBEDDED_STAGES)
}
