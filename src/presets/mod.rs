//! Named shape presets and project discovery.
//!
//! A preset is a `ShapeParams` record with a name, stored as YAML in a
//! `*.preset.yaml` file:
//!
//! ```yaml
//! name: nested-heptagram
//! description: Seven-point star with shrinking inner layers
//! family: custom-star
//! noids: 7
//! nested: true
//! ```
//!
//! Builtin presets are always available; a project adds its own through
//! `shapesmith.yaml` or by convention-based scanning.

mod manifest;
mod scanner;

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Result, ShapeError};
use crate::types::{
    CircleParams, Colour, CurvedStarParams, CustomStarParams, FillRule, GisParams, Palette,
    Placement, PolygonParams, ShapeParams, SpiralParams, StarParams, Style, YinYangParams,
};

pub use manifest::Manifest;
pub use scanner::{is_preset_file, scan_directory, scan_sources, PRESET_SUFFIXES};

/// The name of the manifest file.
pub const MANIFEST_FILENAME: &str = "shapesmith.yaml";

/// A named parameter set for one shape family.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Preset {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(flatten)]
    pub shape: ShapeParams,
}

impl Preset {
    pub fn new(name: impl Into<String>, shape: ShapeParams) -> Self {
        Self {
            name: name.into(),
            description: None,
            shape,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Load a preset from a YAML file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| ShapeError::Io {
            path: path.to_path_buf(),
            message: format!("Failed to read preset: {}", e),
        })?;

        Self::parse(&content).map_err(|e| match e {
            ShapeError::Parse { message, help } => ShapeError::Parse {
                message: format!("{}: {}", path.display(), message),
                help,
            },
            other => other,
        })
    }

    /// Parse a preset from a YAML string.
    pub fn parse(content: &str) -> Result<Self> {
        let preset: Self = serde_yaml::from_str(content).map_err(|e| ShapeError::Parse {
            message: format!("Invalid preset: {}", e),
            help: Some(
                "A preset needs `name` and `family` (polygon, star, circle, spiral, \
                 curved-star, custom-star, yin-yang, gis)"
                    .to_string(),
            ),
        })?;
        validate_name(&preset.name)?;
        Ok(preset)
    }

    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self).map_err(|e| ShapeError::Parse {
            message: format!("Failed to serialize preset: {}", e),
            help: None,
        })
    }

    pub fn family(&self) -> &'static str {
        self.shape.family()
    }
}

/// Names become output file stems, so they must be a single path component.
fn validate_name(name: &str) -> Result<()> {
    let bad = name.trim().is_empty()
        || name == "."
        || name == ".."
        || name.contains(['/', '\\'])
        || name.contains('\0');
    if bad {
        return Err(ShapeError::Parse {
            message: format!("Invalid preset name {:?}", name),
            help: Some("Use a plain name without path separators, like `starfish`".to_string()),
        });
    }
    Ok(())
}

/// Presets shipped with the binary.
pub struct BuiltinPresets;

impl BuiltinPresets {
    /// Get all builtin presets.
    pub fn all() -> Vec<Preset> {
        vec![
            Preset::new("pentagon", ShapeParams::Polygon(PolygonParams::default()))
                .with_description("Regular five-sided polygon"),
            Preset::new(
                "starfish",
                ShapeParams::Star(StarParams {
                    edges: 5,
                    size: 100.0,
                    inner_size: 45.0,
                    placement: Placement::new(0.0, 0.0, 90.0),
                    style: Style {
                        fill: Colour::rgb(0xF4, 0xA2, 0x61),
                        ..Style::default()
                    },
                }),
            )
            .with_description("Five-armed star with a wide body"),
            Preset::new("ring", ShapeParams::Circle(CircleParams::default()))
                .with_description("Circle drawn as two half arcs"),
            Preset::new(
                "spiral",
                ShapeParams::Spiral(SpiralParams {
                    style: Style {
                        fill: Colour::rgb(0xFF, 0xFF, 0xFF),
                        ..Style::default()
                    },
                    ..SpiralParams::default()
                }),
            )
            .with_description("Three-turn Archimedean spiral"),
            Preset::new("braid", ShapeParams::CurvedStar(CurvedStarParams::default()))
                .with_description("Eight arcs woven into one outline"),
            Preset::new(
                "twin-lobes",
                ShapeParams::CurvedStar(CurvedStarParams {
                    noids: 10,
                    style: Style {
                        gradient: true,
                        ..Style::default()
                    },
                    ..CurvedStarParams::default()
                }),
            )
            .with_description("Ten arcs split into two interleaved outlines"),
            Preset::new(
                "nested-heptagram",
                ShapeParams::CustomStar(CustomStarParams {
                    nested: true,
                    placement: Placement::new(0.0, 0.0, 90.0),
                    ..CustomStarParams::default()
                }),
            )
            .with_description("Seven-point star with shrinking inner layers"),
            Preset::new(
                "hexagram",
                ShapeParams::CustomStar(CustomStarParams {
                    noids: 6,
                    style: Style {
                        fill_rule: FillRule::EvenOdd,
                        ..Style::default()
                    },
                    ..CustomStarParams::default()
                }),
            )
            .with_description("Two overlapping triangles"),
            Preset::new("yin-yang", ShapeParams::YinYang(YinYangParams::default()))
                .with_description("Classic two-lobe emblem"),
            Preset::new(
                "yin-yang-gradient",
                ShapeParams::YinYang(YinYangParams {
                    noids: 5,
                    base_colour: Colour::rgb(0x26, 0x46, 0x53),
                    use_gradient: true,
                    spin: Some(12.0),
                    ..YinYangParams::default()
                }),
            )
            .with_description("Five spinning lobes on a colour gradient"),
            Preset::new(
                "map-sample",
                ShapeParams::Gis(GisParams {
                    draw_bbox: true,
                    palette: Palette::default_palette().colours,
                    ..GisParams::default()
                }),
            )
            .with_description("Builtin two-feature dataset with its bounding box"),
        ]
    }

    /// Get a builtin preset by name.
    pub fn get(name: &str) -> Option<Preset> {
        Self::all().into_iter().find(|p| p.name == name)
    }
}

/// Where a preset came from.
#[derive(Debug, Clone, PartialEq)]
pub enum PresetOrigin {
    Builtin,
    File(PathBuf),
}

/// A preset together with its origin.
#[derive(Debug, Clone)]
pub struct CatalogEntry {
    pub preset: Preset,
    pub origin: PresetOrigin,
}

/// Result of discovering presets in a project.
#[derive(Debug)]
pub struct Catalog {
    /// The project root directory.
    pub root: PathBuf,

    /// The loaded manifest (default if no shapesmith.yaml was found).
    pub manifest: Manifest,

    /// Whether a shapesmith.yaml manifest was found.
    pub has_manifest: bool,

    /// Builtins first, then project presets in path order.
    pub entries: Vec<CatalogEntry>,

    /// Preset files that failed to load, with the reason.
    pub failures: Vec<(PathBuf, ShapeError)>,
}

impl Catalog {
    /// Find a preset by name. Project presets shadow builtins.
    pub fn get(&self, name: &str) -> Option<&CatalogEntry> {
        self.entries.iter().rev().find(|e| e.preset.name == name)
    }

    pub fn project_presets(&self) -> impl Iterator<Item = &CatalogEntry> {
        self.entries
            .iter()
            .filter(|e| matches!(e.origin, PresetOrigin::File(_)))
    }

    /// Resolve a preset argument: an existing file path, or a preset name.
    pub fn lookup(&self, arg: &str) -> Result<Preset> {
        let path = Path::new(arg);
        if path.is_file() {
            return Preset::load(path);
        }

        self.get(arg)
            .map(|entry| entry.preset.clone())
            .ok_or_else(|| ShapeError::InvalidParameter {
                message: format!("Unknown preset '{}'", arg),
                help: Some("Run `shapesmith list` to see available presets".to_string()),
            })
    }

    /// Resolve a manifest-relative path against the project root.
    pub fn resolve(&self, path: &Path) -> PathBuf {
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.root.join(path)
        }
    }
}

/// Discover presets in a project directory.
///
/// Looks for a `shapesmith.yaml` manifest in `root`. If found, only its
/// sources are scanned; otherwise the whole directory is.
pub fn discover(root: impl AsRef<Path>) -> Result<Catalog> {
    let root = root.as_ref().to_path_buf();

    let manifest_path = root.join(MANIFEST_FILENAME);
    let (manifest, has_manifest) = if manifest_path.exists() {
        (Manifest::load(&manifest_path)?, true)
    } else {
        (Manifest::default(), false)
    };

    let mut entries: Vec<CatalogEntry> = BuiltinPresets::all()
        .into_iter()
        .map(|preset| CatalogEntry {
            preset,
            origin: PresetOrigin::Builtin,
        })
        .collect();
    let mut failures = Vec::new();

    for path in scan_sources(&root, &manifest) {
        match Preset::load(&path) {
            Ok(preset) => entries.push(CatalogEntry {
                preset,
                origin: PresetOrigin::File(path),
            }),
            Err(e) => failures.push((path, e)),
        }
    }

    Ok(Catalog {
        root,
        manifest,
        has_manifest,
        entries,
        failures,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::colour_source::FixedColours;
    use crate::render::render_document;
    use pretty_assertions::assert_eq;
    use tempfile::tempdir;

    #[test]
    fn test_parse_preset() {
        let yaml = r##"
name: inky
description: Dark nested star
family: custom-star
noids: 9
nested: true
min_radius: 5
style:
  fill: "#264653"
"##;
        let preset = Preset::parse(yaml).unwrap();
        assert_eq!(preset.name, "inky");
        assert_eq!(preset.description.as_deref(), Some("Dark nested star"));
        match preset.shape {
            ShapeParams::CustomStar(p) => {
                assert_eq!(p.noids, 9);
                assert!(p.nested);
                assert_eq!(p.min_radius, 5.0);
                assert_eq!(p.radius, 100.0);
                assert_eq!(p.style.fill, Colour::rgb(0x26, 0x46, 0x53));
            }
            other => panic!("expected custom-star, got {}", other.family()),
        }
    }

    #[test]
    fn test_preset_requires_family() {
        let err = Preset::parse("name: nothing\nnoids: 3").unwrap_err();
        assert!(matches!(err, ShapeError::Parse { .. }));
    }

    #[test]
    fn test_unknown_family_rejected() {
        assert!(Preset::parse("name: x\nfamily: hexagon").is_err());
    }

    #[test]
    fn test_names_must_be_plain_file_stems() {
        for name in ["../escape", "a/b", "a\\\\b", "..", ".", "\"\"", "\"  \""] {
            let yaml = format!("name: {}\nfamily: circle\n", name);
            assert!(
                matches!(Preset::parse(&yaml), Err(ShapeError::Parse { .. })),
                "{} should be rejected",
                name
            );
        }
        assert!(Preset::parse("name: tide-pool_2\nfamily: circle\n").is_ok());
    }

    #[test]
    fn test_discovery_fails_presets_with_path_names() {
        let dir = tempdir().unwrap();
        fs::write(
            dir.path().join("sneaky.preset.yaml"),
            "name: ../../escape\nfamily: circle\n",
        )
        .unwrap();

        let catalog = discover(dir.path()).unwrap();
        assert_eq!(catalog.project_presets().count(), 0);
        assert_eq!(catalog.failures.len(), 1);
    }

    #[test]
    fn test_yaml_round_trip() {
        for preset in BuiltinPresets::all() {
            let yaml = preset.to_yaml().unwrap();
            let back = Preset::parse(&yaml).unwrap();
            assert_eq!(back, preset, "round trip of {}", preset.name);
        }
    }

    #[test]
    fn test_builtin_names_unique() {
        let all = BuiltinPresets::all();
        let mut names: Vec<&str> = all.iter().map(|p| p.name.as_str()).collect();
        names.sort();
        names.dedup();
        assert_eq!(names.len(), all.len());
    }

    #[test]
    fn test_builtins_all_render() {
        for preset in BuiltinPresets::all() {
            let mut source = FixedColours::new(vec![Colour::rgb(0x2A, 0x9D, 0x8F)]);
            let svg = render_document(&preset.shape, &mut source)
                .unwrap_or_else(|e| panic!("{} failed: {}", preset.name, e));
            assert!(svg.starts_with("<svg "), "{}", preset.name);
            assert!(svg.trim_end().ends_with("</svg>"), "{}", preset.name);
        }
    }

    #[test]
    fn test_builtin_get() {
        assert_eq!(BuiltinPresets::get("hexagram").unwrap().family(), "custom-star");
        assert!(BuiltinPresets::get("nope").is_none());
    }

    #[test]
    fn test_discover_without_manifest() {
        let dir = tempdir().unwrap();
        fs::write(
            dir.path().join("sun.preset.yaml"),
            "name: sun\nfamily: star\nedges: 12\n",
        )
        .unwrap();
        fs::write(dir.path().join("broken.preset.yaml"), "name: broken\n").unwrap();

        let catalog = discover(dir.path()).unwrap();
        assert!(!catalog.has_manifest);
        assert_eq!(catalog.project_presets().count(), 1);
        assert_eq!(catalog.failures.len(), 1);
        assert_eq!(catalog.get("sun").unwrap().preset.family(), "star");
        assert_eq!(catalog.get("ring").unwrap().origin, PresetOrigin::Builtin);
    }

    #[test]
    fn test_discover_with_manifest_shadows_builtin() {
        let dir = tempdir().unwrap();
        fs::create_dir_all(dir.path().join("presets")).unwrap();
        fs::write(
            dir.path().join(MANIFEST_FILENAME),
            "sources: [presets]\noutput: out\nseed: 3\n",
        )
        .unwrap();
        fs::write(
            dir.path().join("presets").join("ring.preset.yaml"),
            "name: ring\nfamily: circle\nsize: 20\n",
        )
        .unwrap();
        fs::write(
            dir.path().join("outside.preset.yaml"),
            "name: outside\nfamily: circle\n",
        )
        .unwrap();

        let catalog = discover(dir.path()).unwrap();
        assert!(catalog.has_manifest);
        assert_eq!(catalog.manifest.seed, Some(3));
        assert!(catalog.get("outside").is_none());
        assert!(matches!(
            catalog.get("ring").unwrap().origin,
            PresetOrigin::File(_)
        ));
        assert_eq!(catalog.resolve(Path::new("out")), dir.path().join("out"));
    }

    #[test]
    fn test_lookup_by_name_or_path() {
        let dir = tempdir().unwrap();
        let catalog = discover(dir.path()).unwrap();
        assert_eq!(catalog.lookup("braid").unwrap().family(), "curved-star");

        let path = dir.path().join("dot.yaml");
        fs::write(&path, "name: dot\nfamily: circle\nsize: 4\n").unwrap();
        assert_eq!(catalog.lookup(path.to_str().unwrap()).unwrap().name, "dot");

        assert!(matches!(
            catalog.lookup("no-such-preset"),
            Err(ShapeError::InvalidParameter { .. })
        ));
    }
}
