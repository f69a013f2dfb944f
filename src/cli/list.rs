//! List command implementation.
//!
//! Prints builtin presets followed by those discovered in a project.

use std::path::PathBuf;

use clap::Args;

use crate::error::Result;
use crate::output::{display_path, plural, Printer};
use crate::presets::{discover, Catalog, CatalogEntry, PresetOrigin};

/// List builtin and project presets
#[derive(Args, Debug)]
pub struct ListArgs {
    /// Project directory to scan (default: current directory)
    #[arg(default_value = ".")]
    pub path: PathBuf,

    /// Only show presets of this family
    #[arg(long)]
    pub family: Option<String>,
}

pub fn run(args: ListArgs, printer: &Printer) -> Result<()> {
    let catalog = discover(&args.path)?;

    let shown: Vec<&CatalogEntry> = catalog
        .entries
        .iter()
        .filter(|e| args.family.as_deref().map_or(true, |f| e.preset.family() == f))
        .collect();

    for entry in &shown {
        printer.info(entry.preset.family(), &describe(entry, printer));
    }

    for (path, err) in &catalog.failures {
        printer.warning("Skipped", &format!("{}: {}", display_path(path), err));
    }

    printer.status("Found", &summary(&catalog, shown.len()));
    Ok(())
}

fn describe(entry: &CatalogEntry, printer: &Printer) -> String {
    let mut line = printer.bold(&entry.preset.name);
    if let Some(description) = &entry.preset.description {
        line.push_str(&format!(" {}", printer.dim(description)));
    }
    if let PresetOrigin::File(path) = &entry.origin {
        line.push_str(&format!(" {}", printer.cyan(&display_path(path))));
    }
    line
}

fn summary(catalog: &Catalog, shown: usize) -> String {
    let project = catalog.project_presets().count();
    let mut text = format!(
        "{} ({} from project)",
        plural(shown, "preset", "presets"),
        project
    );
    if catalog.has_manifest {
        text.push_str(" using shapesmith.yaml");
    }
    text
}
