//! shapesmith - Parametric SVG shape generator
//!
//! A library and CLI for generating vector shapes from small parameter
//! records: regular polygons and stars, circles, spirals, curved stars,
//! nested skip-step stars, generalised yin-yang emblems and GeoJSON maps.
//!
//! ```
//! use shapesmith::{render_document, RandomColours, ShapeParams, StarParams};
//!
//! let params = ShapeParams::Star(StarParams::default());
//! let svg = render_document(&params, &mut RandomColours::seeded(1)).unwrap();
//! assert!(svg.starts_with("<svg "));
//! ```

pub mod cli;
pub mod colour_source;
pub mod error;
pub mod geometry;
pub mod output;
pub mod path;
pub mod presets;
pub mod render;
pub mod types;

pub use colour_source::{ColourMode, ColourSource, FixedColours, HueWalk, RandomColours};
pub use error::{Result, ShapeError};
pub use path::{PathCommand, PathData};
pub use presets::{discover, BuiltinPresets, Catalog, Manifest, Preset};
pub use render::{generate, generate_with, render_document, GeoFetcher, Generated, HttpFetcher};
pub use types::{
    interpolate_colours, round2, CircleParams, Colour, CurvedStarParams, CustomStarParams,
    FillRule, GisData, GisParams, Palette, Placement, Point2D, PolygonParams, Scaling,
    ShapeParams, SpiralParams, StarParams, Style, YinYangParams,
};
