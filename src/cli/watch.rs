//! Watch command implementation.
//!
//! Regenerates a preset file's document every time the file is saved.
//! The parent directory is watched rather than the file itself, since
//! many editors save by replacing the file.

use std::path::{Path, PathBuf};
use std::sync::mpsc;

use clap::Args;
use notify::{Event, EventKind, RecursiveMode, Watcher};

use crate::colour_source::ColourMode;
use crate::error::{Result, ShapeError};
use crate::output::{display_path, Printer};
use crate::presets::Preset;

use super::generate::render_preset;
use super::ColourChoice;

/// Regenerate a preset file whenever it changes
#[derive(Args, Debug)]
pub struct WatchArgs {
    /// Preset file to watch
    pub file: PathBuf,

    /// Output file, rewritten on every change
    #[arg(long, short)]
    pub output: PathBuf,

    /// Seed for random colours, fixed across regenerations
    #[arg(long)]
    pub seed: Option<u64>,

    /// Palette file to draw colours from
    #[arg(long)]
    pub palette: Option<PathBuf>,

    /// Walk the hue wheel instead of drawing random colours
    #[arg(long)]
    pub hues: bool,
}

impl WatchArgs {
    fn colours(&self) -> ColourChoice {
        ColourChoice {
            seed: self.seed,
            palette: self.palette.clone(),
            mode: super::colour_mode(self.hues, ColourMode::Random),
        }
    }
}

fn watch_error(e: notify::Error) -> ShapeError {
    ShapeError::Watch {
        message: e.to_string(),
    }
}

pub fn run(args: WatchArgs, printer: &Printer) -> Result<()> {
    let file = args.file.canonicalize().map_err(|e| ShapeError::Io {
        path: args.file.clone(),
        message: format!("Cannot watch file: {}", e),
    })?;
    let dir = file.parent().unwrap_or(Path::new(".")).to_path_buf();

    regenerate(&args, printer);

    let (tx, rx) = mpsc::channel::<notify::Result<Event>>();
    let mut watcher = notify::recommended_watcher(tx).map_err(watch_error)?;
    watcher
        .watch(&dir, RecursiveMode::NonRecursive)
        .map_err(watch_error)?;

    printer.info("Watching", &display_path(&file));

    for event in rx {
        handle_event(event, &file, &args, printer);
    }

    Ok(())
}

/// React to one watcher message; errors are reported and the watch goes on.
///
/// Returns whether the output was regenerated.
fn handle_event(
    event: notify::Result<Event>,
    file: &Path,
    args: &WatchArgs,
    printer: &Printer,
) -> bool {
    match event {
        Ok(event) if touches(&event, file) => {
            regenerate(args, printer);
            true
        }
        Ok(_) => false,
        Err(e) => {
            printer.error("Error", &watch_error(e).to_string());
            false
        }
    }
}

/// Whether an event is a write to `file`.
fn touches(event: &Event, file: &Path) -> bool {
    matches!(event.kind, EventKind::Create(_) | EventKind::Modify(_))
        && event
            .paths
            .iter()
            .any(|p| p == file || p.file_name() == file.file_name())
}

/// Rebuild the output, reporting failures without stopping the watch.
fn regenerate(args: &WatchArgs, printer: &Printer) {
    let result = Preset::load(&args.file).and_then(|preset| {
        printer.status("Generating", &preset.name);
        let svg = render_preset(&preset, &args.colours(), false)?;
        super::write_output(Some(&args.output), &svg, printer)
    });

    if let Err(e) = result {
        printer.error("Error", &e.to_string());
    }
}
