pub mod colour;
pub mod completions;
pub mod generate;
pub mod gis;
pub mod list;
pub mod watch;

use std::fs;
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};

use crate::colour_source::{ColourMode, ColourSource, FixedColours, HueWalk, RandomColours};
use crate::error::{Result, ShapeError};
use crate::output::{display_path, Printer};
use crate::types::Palette;

/// shapesmith - Parametric SVG shape generator
#[derive(Parser, Debug)]
#[command(name = "shapesmith")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate an SVG document from a preset
    Generate(generate::GenerateArgs),

    /// List builtin and project presets
    List(list::ListArgs),

    /// Regenerate a preset file whenever it changes
    Watch(watch::WatchArgs),

    /// Colour helpers (interpolate, lighten, invert)
    Colour(colour::ColourArgs),

    /// Render a GeoJSON map
    Gis(gis::GisArgs),

    /// Generate shell completions
    Completions(completions::CompletionsArgs),
}

/// Colour settings for a run, merged from flags and the manifest.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ColourChoice {
    pub seed: Option<u64>,
    pub palette: Option<PathBuf>,
    pub mode: ColourMode,
}

impl ColourChoice {
    /// Build the colour source for a run.
    ///
    /// A palette wins. Otherwise the hue walk starts at `seed % 360`, and
    /// random colours are seeded when a seed is given or drawn from
    /// entropy when not.
    pub fn source(&self) -> Result<Box<dyn ColourSource>> {
        if let Some(path) = &self.palette {
            let palette = Palette::load(path)?;
            return Ok(Box::new(FixedColours::from_palette(&palette)));
        }

        Ok(match (self.mode, self.seed) {
            (ColourMode::HueWalk, seed) => {
                let start = seed.map_or(0, |s| s % 360);
                Box::new(HueWalk::new(start as f32))
            }
            (ColourMode::Random, Some(seed)) => Box::new(RandomColours::seeded(seed)),
            (ColourMode::Random, None) => Box::new(RandomColours::from_entropy()),
        })
    }
}

/// Pick the hue walk when `hues` is set, else `fallback`.
pub fn colour_mode(hues: bool, fallback: ColourMode) -> ColourMode {
    if hues {
        ColourMode::HueWalk
    } else {
        fallback
    }
}

/// Write generated output to `path`, or to stdout when no path is given.
pub fn write_output(path: Option<&Path>, content: &str, printer: &Printer) -> Result<()> {
    let Some(path) = path else {
        println!("{}", content);
        return Ok(());
    };

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| ShapeError::Io {
            path: parent.to_path_buf(),
            message: format!("Failed to create output directory: {}", e),
        })?;
    }

    fs::write(path, content).map_err(|e| ShapeError::Io {
        path: path.to_path_buf(),
        message: format!("Failed to write output: {}", e),
    })?;

    printer.status("Wrote", &display_path(path));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Colour;
    use tempfile::tempdir;

    #[test]
    fn test_cli_definition_is_valid() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_generate() {
        let cli = Cli::try_parse_from(["shapesmith", "generate", "braid", "--seed", "9"]).unwrap();
        match cli.command {
            Commands::Generate(args) => {
                assert_eq!(args.preset.as_deref(), Some("braid"));
                assert_eq!(args.seed, Some(9));
                assert!(args.output.is_none());
            }
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn test_parse_hues_flag() {
        let cli = Cli::try_parse_from(["shapesmith", "gis", "map.geojson", "--hues"]).unwrap();
        match cli.command {
            Commands::Gis(args) => assert!(args.hues),
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn test_generate_needs_preset_or_all() {
        assert!(Cli::try_parse_from(["shapesmith", "generate"]).is_err());
        assert!(Cli::try_parse_from(["shapesmith", "generate", "--all"]).is_ok());
        assert!(Cli::try_parse_from(["shapesmith", "generate", "ring", "--all"]).is_err());
    }

    #[test]
    fn test_palette_source_wins_over_seed() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("p.yaml");
        fs::write(&path, "name: p\ncolours: [\"#112233\"]\n").unwrap();

        let choice = ColourChoice {
            seed: Some(1),
            palette: Some(path),
            mode: ColourMode::HueWalk,
        };
        let mut source = choice.source().unwrap();
        assert_eq!(source.next_colour(), Colour::rgb(0x11, 0x22, 0x33));
    }

    #[test]
    fn test_seeded_source_repeats() {
        let choice = ColourChoice {
            seed: Some(42),
            ..Default::default()
        };
        let mut a = choice.source().unwrap();
        let mut b = choice.source().unwrap();
        assert_eq!(a.next_colour(), b.next_colour());
    }

    #[test]
    fn test_hue_walk_source_starts_at_seed() {
        let choice = ColourChoice {
            seed: Some(360 + 120),
            mode: ColourMode::HueWalk,
            ..Default::default()
        };
        let mut source = choice.source().unwrap();
        let mut expected = HueWalk::new(120.0);
        for _ in 0..4 {
            assert_eq!(source.next_colour(), expected.next_colour());
        }

        let mut unseeded = ColourChoice {
            mode: ColourMode::HueWalk,
            ..Default::default()
        }
        .source()
        .unwrap();
        assert_eq!(unseeded.next_colour(), HueWalk::default().next_colour());
    }

    #[test]
    fn test_hues_flag_overrides_manifest_mode() {
        assert_eq!(colour_mode(true, ColourMode::Random), ColourMode::HueWalk);
        assert_eq!(colour_mode(false, ColourMode::HueWalk), ColourMode::HueWalk);
        assert_eq!(colour_mode(false, ColourMode::Random), ColourMode::Random);
    }

    #[test]
    fn test_write_output_creates_parent() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("out").join("shape.svg");
        write_output(Some(&path), "<svg/>", &Printer::plain()).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "<svg/>");
    }
}
