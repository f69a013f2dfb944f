//! Core domain types for shapesmith.
//!
//! This module contains the value types every generator consumes:
//! - `Point2D` - rounded drawing-space coordinates
//! - `Colour` - RGB colour values and their per-channel arithmetic
//! - `Palette` - ordered colour lists
//! - `ShapeParams` - per-family parameter records

mod colour;
mod palette;
mod params;
mod point;

pub use colour::{interpolate_colours, Colour};
pub use palette::Palette;
pub use params::{
    CircleParams, CurvedStarParams, CustomStarParams, FillRule, GisData, GisParams, Placement,
    PolygonParams, Scaling, ShapeParams, SpiralParams, StarParams, Style, YinYangParams,
};
pub use point::{round2, Point2D};
