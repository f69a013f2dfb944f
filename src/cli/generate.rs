//! Generate command implementation.
//!
//! Resolves a preset by file path or name, renders it, and writes the
//! document to a file or stdout. With `--all`, every project preset is
//! rendered into the manifest's output directory.

use std::path::PathBuf;

use clap::Args;

use crate::error::{Result, ShapeError};
use crate::output::{display_path, plural, Printer};
use crate::presets::{discover, Catalog, Preset};
use crate::render::{generate, Generated};

use super::{colour_mode, ColourChoice};

/// Generate an SVG document from a preset
#[derive(Args, Debug)]
pub struct GenerateArgs {
    /// Preset name or `.preset.yaml` file
    #[arg(required_unless_present = "all", conflicts_with = "all")]
    pub preset: Option<String>,

    /// Render every project preset into the manifest output directory
    #[arg(long, conflicts_with_all = ["output", "path_only"])]
    pub all: bool,

    /// Output file (default: stdout)
    #[arg(long, short)]
    pub output: Option<PathBuf>,

    /// Seed for random colours (default: manifest seed, then entropy)
    #[arg(long)]
    pub seed: Option<u64>,

    /// Palette file to draw colours from instead of random colours
    #[arg(long)]
    pub palette: Option<PathBuf>,

    /// Walk the hue wheel instead of drawing random colours
    #[arg(long)]
    pub hues: bool,

    /// Print only the path data (basic families)
    #[arg(long)]
    pub path_only: bool,

    /// Project directory holding shapesmith.yaml
    #[arg(long, default_value = ".")]
    pub project: PathBuf,
}

pub fn run(args: GenerateArgs, printer: &Printer) -> Result<()> {
    let catalog = discover(&args.project)?;
    let colours = ColourChoice {
        seed: args.seed.or(catalog.manifest.seed),
        palette: args
            .palette
            .clone()
            .or_else(|| catalog.manifest.palette.as_deref().map(|p| catalog.resolve(p))),
        mode: colour_mode(args.hues, catalog.manifest.colours),
    };

    let Some(name) = args.preset.as_deref() else {
        return render_all(&catalog, &colours, printer);
    };
    let preset = catalog.lookup(name)?;

    printer.status(
        "Generating",
        &format!("{} {}", preset.name, printer.dim(&format!("({})", preset.family()))),
    );

    let output = render_preset(&preset, &colours, args.path_only)?;
    super::write_output(args.output.as_deref(), &output, printer)?;

    if let Some(path) = &colours.palette {
        printer.info("Palette", &display_path(path));
    }
    Ok(())
}

/// Render every project preset to `<output>/<name>.svg`.
fn render_all(catalog: &Catalog, colours: &ColourChoice, printer: &Printer) -> Result<()> {
    let out_dir = catalog.resolve(&catalog.manifest.output);
    let mut written = 0;

    for entry in catalog.project_presets() {
        let preset = &entry.preset;
        printer.status("Generating", &preset.name);
        let svg = render_preset(preset, colours, false)?;
        super::write_output(Some(&out_dir.join(format!("{}.svg", preset.name))), &svg, printer)?;
        written += 1;
    }

    for (path, err) in &catalog.failures {
        printer.warning("Skipped", &format!("{}: {}", display_path(path), err));
    }

    printer.status(
        "Finished",
        &format!("{} into {}", plural(written, "document", "documents"), display_path(&out_dir)),
    );
    Ok(())
}

/// Render a preset to markup, or to bare path data when `path_only` is set.
pub fn render_preset(preset: &Preset, colours: &ColourChoice, path_only: bool) -> Result<String> {
    let mut source = colours.source()?;
    let generated = generate(&preset.shape, source.as_mut())?;

    match generated {
        Generated::PathData(d) if path_only => Ok(d),
        Generated::Markup(_) if path_only => Err(ShapeError::InvalidParameter {
            message: format!("'{}' does not produce a single path", preset.family()),
            help: Some("--path-only works with polygon, star, circle and spiral".to_string()),
        }),
        other => Ok(other.into_markup(preset.shape.style())),
    }
}
