//! Project manifest (shapesmith.yaml) parsing.
//!
//! The manifest names where presets live, where generated documents go,
//! and defaults shared by every generation in the project.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::colour_source::ColourMode;
use crate::error::{Result, ShapeError};

/// Project manifest loaded from shapesmith.yaml.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Manifest {
    /// Directories to scan for `.preset.yaml` files.
    /// Defaults to the project root if empty.
    pub sources: Vec<String>,

    /// Output directory for generated documents.
    pub output: PathBuf,

    /// Seed for random colours; unseeded output differs on every run.
    pub seed: Option<u64>,

    /// Palette file used for GIS fills and nested star layers.
    pub palette: Option<PathBuf>,

    /// Source for unpaletted colours: `random` or `hue-walk`.
    pub colours: ColourMode,

    /// Path fragments to skip during discovery (`*.bak`, `drafts/`).
    pub excludes: Vec<String>,
}

fn default_output() -> PathBuf {
    PathBuf::from("dist")
}

impl Default for Manifest {
    fn default() -> Self {
        Self {
            sources: vec![],
            output: default_output(),
            seed: None,
            palette: None,
            colours: ColourMode::Random,
            excludes: vec![],
        }
    }
}

impl Manifest {
    /// Load manifest from a shapesmith.yaml file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| ShapeError::Io {
            path: path.to_path_buf(),
            message: format!("Failed to read manifest: {}", e),
        })?;

        Self::parse(&content)
    }

    /// Parse manifest from YAML string.
    pub fn parse(content: &str) -> Result<Self> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(content).map_err(|e| ShapeError::Parse {
            message: format!("Invalid manifest: {}", e),
            help: Some("Check shapesmith.yaml syntax".to_string()),
        })
    }

    /// Check whether a path matches any exclude pattern.
    ///
    /// A pattern starting with `*` matches a file-name suffix; any other
    /// pattern matches a substring of the path.
    pub fn is_excluded(&self, path: &Path) -> bool {
        let path_str = path.to_string_lossy();
        self.excludes.iter().any(|pattern| match pattern.strip_prefix('*') {
            Some(suffix) => path_str.ends_with(suffix),
            None => path_str.contains(pattern.as_str()),
        })
    }

    /// Get effective source paths, defaulting to the project root.
    pub fn effective_sources(&self) -> Vec<String> {
        if self.sources.is_empty() {
            vec![".".to_string()]
        } else {
            self.sources.clone()
        }
    }
}
