//! Palette type for ordered colour collections.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Result, ShapeError};

use super::Colour;

/// An ordered, named list of colours.
///
/// Loaded from YAML palette files:
///
/// ```yaml
/// name: sunset
/// colours: ["#FF5E5B", "#D8D8D8", "#FFFFEA"]
/// ```
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Palette {
    /// Palette name
    #[serde(default)]
    pub name: String,

    /// Colours in palette order
    #[serde(default)]
    pub colours: Vec<Colour>,
}

impl Palette {
    /// Create a new palette.
    pub fn new(name: impl Into<String>, colours: Vec<Colour>) -> Self {
        Self {
            name: name.into(),
            colours,
        }
    }

    /// The builtin palette used when nothing else is configured.
    pub fn default_palette() -> Self {
        let colours = ["#264653", "#2A9D8F", "#E9C46A", "#F4A261", "#E76F51"]
            .iter()
            .filter_map(|hex| Colour::from_hex(hex).ok())
            .collect();
        Self::new("default", colours)
    }

    /// Load a palette from a YAML file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| ShapeError::Io {
            path: path.to_path_buf(),
            message: format!("Failed to read palette: {}", e),
        })?;

        Self::parse(&content)
    }

    /// Parse a palette from a YAML string.
    pub fn parse(content: &str) -> Result<Self> {
        serde_yaml::from_str(content).map_err(|e| ShapeError::Parse {
            message: format!("Invalid palette: {}", e),
            help: Some("Expected `name:` and a `colours:` list of hex strings".to_string()),
        })
    }
}
