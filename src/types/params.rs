//! Parameter records for every shape family.
//!
//! `ShapeParams` is a tagged union keyed by `family`; each variant carries
//! only the fields that family reads. All records deserialize from YAML or
//! JSON with sensible defaults for every field:
//!
//! ```yaml
//! family: custom-star
//! noids: 7
//! nested: true
//! placement: { angle: 90 }
//! style: { fill: "#E76F51" }
//! ```

use serde::{Deserialize, Serialize};

use super::Colour;

/// Centre offset and initial rotation shared by every family.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Placement {
    /// Horizontal centre offset.
    pub dx: f64,
    /// Vertical centre offset.
    pub dy: f64,
    /// Initial rotation in degrees (counter-clockwise on screen).
    pub angle: f64,
}

impl Placement {
    pub const fn new(dx: f64, dy: f64, angle: f64) -> Self {
        Self { dx, dy, angle }
    }
}

/// SVG fill rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum FillRule {
    #[default]
    #[serde(rename = "nonzero")]
    NonZero,
    #[serde(rename = "evenodd")]
    EvenOdd,
}

impl FillRule {
    pub fn as_str(self) -> &'static str {
        match self {
            FillRule::NonZero => "nonzero",
            FillRule::EvenOdd => "evenodd",
        }
    }
}

/// Presentation attributes applied to generated markup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Style {
    pub stroke: Colour,
    pub stroke_width: f64,
    pub fill: Colour,
    pub fill_rule: FillRule,
    /// Width and height of the square view box, centred on the origin.
    pub view_box: f64,
    /// Fill with a linear gradient from `fill` to a lightened `fill`.
    pub gradient: bool,
    /// Add a soft glow filter.
    pub glow: bool,
}

impl Default for Style {
    fn default() -> Self {
        Self {
            stroke: Colour::BLACK,
            stroke_width: 1.0,
            fill: Colour::rgb(0xE9, 0xC4, 0x6A),
            fill_rule: FillRule::NonZero,
            view_box: 300.0,
            gradient: false,
            glow: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PolygonParams {
    pub edges: usize,
    pub size: f64,
    pub placement: Placement,
    pub style: Style,
}

impl Default for PolygonParams {
    fn default() -> Self {
        Self {
            edges: 5,
            size: 100.0,
            placement: Placement::default(),
            style: Style::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StarParams {
    pub edges: usize,
    pub size: f64,
    pub inner_size: f64,
    pub placement: Placement,
    pub style: Style,
}

impl Default for StarParams {
    fn default() -> Self {
        Self {
            edges: 5,
            size: 100.0,
            inner_size: 40.0,
            placement: Placement::default(),
            style: Style::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CircleParams {
    pub size: f64,
    pub placement: Placement,
    pub style: Style,
}

impl Default for CircleParams {
    fn default() -> Self {
        Self {
            size: 100.0,
            placement: Placement::default(),
            style: Style::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpiralParams {
    pub turns: usize,
    pub size: f64,
    pub placement: Placement,
    pub style: Style,
}

impl Default for SpiralParams {
    fn default() -> Self {
        Self {
            turns: 3,
            size: 100.0,
            placement: Placement::default(),
            style: Style::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CurvedStarParams {
    pub noids: usize,
    pub radius: f64,
    /// Arc radius as a multiple of `radius`.
    pub ray_ratio: f64,
    pub placement: Placement,
    pub style: Style,
}

impl Default for CurvedStarParams {
    fn default() -> Self {
        Self {
            noids: 8,
            radius: 100.0,
            ray_ratio: 1.0,
            placement: Placement::default(),
            style: Style::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CustomStarParams {
    pub noids: usize,
    pub radius: f64,
    /// Nesting stops once a layer's radius falls to this value.
    pub min_radius: f64,
    pub nested: bool,
    /// Vertex whose connecting lines bound the next nested layer.
    pub start_vertex: usize,
    /// Spin period in seconds, if animated.
    pub spin: Option<f64>,
    pub placement: Placement,
    pub style: Style,
}

impl Default for CustomStarParams {
    fn default() -> Self {
        Self {
            noids: 7,
            radius: 100.0,
            min_radius: 10.0,
            nested: false,
            start_vertex: 0,
            spin: None,
            placement: Placement::default(),
            style: Style::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct YinYangParams {
    pub noids: usize,
    pub radius: f64,
    pub base_colour: Colour,
    /// Colour lobes along a gradient from `base_colour` to its inverse.
    pub use_gradient: bool,
    pub spin: Option<f64>,
    pub placement: Placement,
    pub style: Style,
}

impl Default for YinYangParams {
    fn default() -> Self {
        Self {
            noids: 2,
            radius: 100.0,
            base_colour: Colour::BLACK,
            use_gradient: false,
            spin: None,
            placement: Placement::default(),
            style: Style::default(),
        }
    }
}

/// How the GIS renderer derives one uniform scale from the bounding box.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Scaling {
    #[default]
    Min,
    Max,
    Width,
    Height,
}

/// Where the GIS renderer gets its GeoJSON.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GisData {
    /// The builtin two-rectangle dataset.
    #[default]
    Sample,
    /// A GeoJSON document embedded in the parameters.
    Inline(serde_json::Value),
    /// A GeoJSON document fetched over HTTP.
    Url(String),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GisParams {
    pub data: GisData,
    pub scaling: Scaling,
    pub scale_factor: f64,
    pub translate: [f64; 2],
    pub draw_bbox: bool,
    /// Fill colours cycled per feature; empty means colours come from the
    /// colour source.
    pub palette: Vec<Colour>,
    pub style: Style,
}

impl Default for GisParams {
    fn default() -> Self {
        Self {
            data: GisData::Sample,
            scaling: Scaling::Min,
            scale_factor: 1.0,
            translate: [0.0, 0.0],
            draw_bbox: false,
            palette: Vec::new(),
            style: Style::default(),
        }
    }
}

/// Parameters for one generation call, keyed by shape family.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "family", rename_all = "kebab-case")]
pub enum ShapeParams {
    Polygon(PolygonParams),
    Star(StarParams),
    Circle(CircleParams),
    Spiral(SpiralParams),
    CurvedStar(CurvedStarParams),
    CustomStar(CustomStarParams),
    YinYang(YinYangParams),
    Gis(GisParams),
}

impl ShapeParams {
    /// The family name as used in preset files.
    pub fn family(&self) -> &'static str {
        match self {
            ShapeParams::Polygon(_) => "polygon",
            ShapeParams::Star(_) => "star",
            ShapeParams::Circle(_) => "circle",
            ShapeParams::Spiral(_) => "spiral",
            ShapeParams::CurvedStar(_) => "curved-star",
            ShapeParams::CustomStar(_) => "custom-star",
            ShapeParams::YinYang(_) => "yin-yang",
            ShapeParams::Gis(_) => "gis",
        }
    }

    pub fn style(&self) -> &Style {
        match self {
            ShapeParams::Polygon(p) => &p.style,
            ShapeParams::Star(p) => &p.style,
            ShapeParams::Circle(p) => &p.style,
            ShapeParams::Spiral(p) => &p.style,
            ShapeParams::CurvedStar(p) => &p.style,
            ShapeParams::CustomStar(p) => &p.style,
            ShapeParams::YinYang(p) => &p.style,
            ShapeParams::Gis(p) => &p.style,
        }
    }
}
