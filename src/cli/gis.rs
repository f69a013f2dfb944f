//! GIS command implementation.
//!
//! Renders a GeoJSON file or URL. Local files that fail to parse are
//! errors; a URL that cannot be fetched or rendered still yields a
//! document showing the failure.

use std::fs;
use std::path::PathBuf;

use clap::{Args, ValueEnum};

use crate::colour_source::{ColourMode, ColourSource};
use crate::error::{Result, ShapeError};
use crate::output::Printer;
use crate::render::gis::{error_markup, render_geojson};
use crate::render::{GeoFetcher, HttpFetcher};
use crate::types::{GisParams, Palette, Scaling};

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScalingArg {
    Min,
    Max,
    Width,
    Height,
}

impl From<ScalingArg> for Scaling {
    fn from(arg: ScalingArg) -> Self {
        match arg {
            ScalingArg::Min => Scaling::Min,
            ScalingArg::Max => Scaling::Max,
            ScalingArg::Width => Scaling::Width,
            ScalingArg::Height => Scaling::Height,
        }
    }
}

/// Render a GeoJSON map
#[derive(Args, Debug)]
pub struct GisArgs {
    /// GeoJSON file, or an http(s) URL
    pub source: String,

    /// Output file (default: stdout)
    #[arg(long, short)]
    pub output: Option<PathBuf>,

    /// How the bounding box determines the scale
    #[arg(long, value_enum, default_value = "min")]
    pub scaling: ScalingArg,

    /// Extra multiplier on the fitted scale
    #[arg(long, default_value = "1")]
    pub scale_factor: f64,

    /// Draw the bounding box behind the features
    #[arg(long)]
    pub bbox: bool,

    /// Palette file whose colours fill the features in turn
    #[arg(long)]
    pub palette: Option<PathBuf>,

    /// Seed for random fills when no palette is given
    #[arg(long)]
    pub seed: Option<u64>,

    /// Walk the hue wheel for fills instead of random colours
    #[arg(long)]
    pub hues: bool,
}

pub fn run(args: GisArgs, printer: &Printer) -> Result<()> {
    let params = GisParams {
        scaling: args.scaling.into(),
        scale_factor: args.scale_factor,
        draw_bbox: args.bbox,
        palette: match &args.palette {
            Some(path) => Palette::load(path)?.colours,
            None => Vec::new(),
        },
        ..GisParams::default()
    };

    let mut source = super::ColourChoice {
        seed: args.seed,
        palette: None,
        mode: super::colour_mode(args.hues, ColourMode::Random),
    }
    .source()?;
    let svg = render_source(
        &args.source,
        &params,
        source.as_mut(),
        &HttpFetcher::new(),
        printer,
    )?;
    super::write_output(args.output.as_deref(), &svg, printer)
}

fn is_url(source: &str) -> bool {
    source.starts_with("http://") || source.starts_with("https://")
}

/// Render a GeoJSON source given as a path or URL.
pub fn render_source(
    source: &str,
    params: &GisParams,
    colours: &mut dyn ColourSource,
    fetcher: &dyn GeoFetcher,
    printer: &Printer,
) -> Result<String> {
    if !is_url(source) {
        let path = PathBuf::from(source);
        let text = fs::read_to_string(&path).map_err(|e| ShapeError::Io {
            path,
            message: format!("Failed to read GeoJSON: {}", e),
        })?;
        return render_geojson(&text, params, colours);
    }

    printer.status("Fetching", source);
    let rendered = fetcher
        .fetch(source)
        .and_then(|body| render_geojson(&body, params, colours));

    Ok(match rendered {
        Ok(svg) => svg,
        Err(e) => {
            printer.warning("Failed", &e.to_string());
            error_markup(&e.to_string(), &params.style)
        }
    })
}
