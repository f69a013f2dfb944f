//! Shape generators and the dispatch over shape families.
//!
//! Every generator is a pure function of its parameter record plus, where a
//! family needs fresh colours, an injected `ColourSource`. The only effect
//! anywhere in here is the optional HTTP read for GIS maps given by URL.

pub mod basic;
pub mod curved_star;
pub mod custom_star;
pub mod document;
pub mod gis;
pub mod yin_yang;

use crate::colour_source::ColourSource;
use crate::error::{Result, ShapeError};
use crate::types::{GisData, GisParams, Placement, Point2D, ShapeParams, Style};

pub use basic::{circle_path, polygon_path, spiral_path, star_path};
pub use curved_star::{curved_star, curved_star_paths};
pub use custom_star::{custom_star, custom_star_layers, StarLayer};
pub use document::{Element, SvgDocument};
pub use gis::{
    fetch_and_render, parse_geojson, sample_collection, FeatureCollection, GeoFetcher, HttpFetcher,
};
pub use yin_yang::{yin_yang, yin_yang_lobes};

use document::fill_value;

/// Output of a generation call.
#[derive(Debug, Clone, PartialEq)]
pub enum Generated {
    /// A single path `d` attribute (basic families).
    PathData(String),
    /// A complete SVG document.
    Markup(String),
}

impl Generated {
    /// Wrap path data in a document using `style`; markup passes through.
    pub fn into_markup(self, style: &Style) -> String {
        match self {
            Generated::Markup(markup) => markup,
            Generated::PathData(d) => {
                let mut doc = SvgDocument::styled(style);
                doc.push(
                    Element::new("path")
                        .attr("d", d)
                        .attr("fill", fill_value(style))
                        .stroked(style),
                );
                doc.finish()
            }
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Generated::PathData(s) | Generated::Markup(s) => s,
        }
    }
}

/// Generate the shape described by `params`.
///
/// GIS maps given by URL are fetched with `HttpFetcher`; use
/// `generate_with` to supply another fetcher.
pub fn generate(params: &ShapeParams, source: &mut dyn ColourSource) -> Result<Generated> {
    generate_with(params, source, &HttpFetcher::new())
}

/// Generate with an explicit fetcher for URL-backed GIS maps.
pub fn generate_with(
    params: &ShapeParams,
    source: &mut dyn ColourSource,
    fetcher: &dyn GeoFetcher,
) -> Result<Generated> {
    ensure_style(params.style())?;

    let generated = match params {
        ShapeParams::Polygon(p) => Generated::PathData(polygon_path(p)?.to_string()),
        ShapeParams::Star(p) => Generated::PathData(star_path(p)?.to_string()),
        ShapeParams::Circle(p) => Generated::PathData(circle_path(p)?.to_string()),
        ShapeParams::Spiral(p) => Generated::PathData(spiral_path(p)?.to_string()),
        ShapeParams::CurvedStar(p) => Generated::Markup(curved_star(p)?),
        ShapeParams::CustomStar(p) => Generated::Markup(custom_star(p, source)?),
        ShapeParams::YinYang(p) => Generated::Markup(yin_yang(p)?),
        ShapeParams::Gis(p) => Generated::Markup(generate_gis(p, source, fetcher)?),
    };
    Ok(generated)
}

/// Generate and always return a complete document.
pub fn render_document(params: &ShapeParams, source: &mut dyn ColourSource) -> Result<String> {
    Ok(generate(params, source)?.into_markup(params.style()))
}

fn generate_gis(
    params: &GisParams,
    source: &mut dyn ColourSource,
    fetcher: &dyn GeoFetcher,
) -> Result<String> {
    match &params.data {
        GisData::Sample => gis::render(&sample_collection(), params, source),
        GisData::Inline(value) => {
            gis::render(&FeatureCollection::from_value(value.clone())?, params, source)
        }
        GisData::Url(url) => Ok(fetch_and_render(fetcher, url, params, source)),
    }
}

/// Require a finite value.
pub(crate) fn ensure_finite(name: &str, value: f64) -> Result<()> {
    if !value.is_finite() {
        return Err(ShapeError::InvalidParameter {
            message: format!("{} must be a finite number, got {}", name, value),
            help: None,
        });
    }
    Ok(())
}

/// Require a finite centre offset and rotation.
pub(crate) fn ensure_placement(placement: &Placement) -> Result<()> {
    if !Point2D::new(placement.dx, placement.dy).is_finite() {
        return Err(ShapeError::InvalidParameter {
            message: format!(
                "placement offset must be finite, got ({}, {})",
                placement.dx, placement.dy
            ),
            help: None,
        });
    }
    ensure_finite("placement.angle", placement.angle)
}

/// Require a drawable stroke width and view box.
pub(crate) fn ensure_style(style: &Style) -> Result<()> {
    ensure_finite("stroke_width", style.stroke_width)?;
    if style.stroke_width < 0.0 {
        return Err(ShapeError::invalid(format!(
            "stroke_width must not be negative, got {}",
            style.stroke_width
        )));
    }
    ensure_positive("view_box", style.view_box)
}

/// Require a count of at least `min`.
pub(crate) fn ensure_count(name: &str, value: usize, min: usize) -> Result<()> {
    if value < min {
        return Err(ShapeError::InvalidParameter {
            message: format!("{} must be at least {}, got {}", name, min, value),
            help: None,
        });
    }
    Ok(())
}

/// Require a finite, strictly positive value.
pub(crate) fn ensure_positive(name: &str, value: f64) -> Result<()> {
    if !value.is_finite() || value <= 0.0 {
        return Err(ShapeError::InvalidParameter {
            message: format!("{} must be a positive number, got {}", name, value),
            help: None,
        });
    }
    Ok(())
}
