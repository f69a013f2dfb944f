//! Yin-yang emblem generalised to any number of lobes.
//!
//! Every lobe runs from one ring point through a point on a half-radius
//! ring rotated by 45 degrees to the next ring point using two half-radius
//! arcs, then returns along the outer circle with a full-radius arc.

use crate::error::Result;
use crate::geometry::points_on_circle;
use crate::path::PathData;
use crate::types::{interpolate_colours, Colour, Point2D, YinYangParams};

use super::document::{spin_group, Element, SvgDocument};
use super::{ensure_count, ensure_placement, ensure_positive};

/// Rotation of the secondary ring relative to the outer ring, in degrees.
const SECONDARY_ROTATION: f64 = 45.0;

/// Dot radius relative to the emblem radius.
const DOT_RATIO: f64 = 0.25;

/// Lobe outlines, one per ring point.
pub fn yin_yang_lobes(params: &YinYangParams) -> Result<Vec<PathData>> {
    ensure_count("noids", params.noids, 2)?;
    ensure_positive("radius", params.radius)?;
    ensure_placement(&params.placement)?;

    let n = params.noids;
    let r = params.radius;
    let p = &params.placement;
    let ring = points_on_circle(n, r, p.dx, p.dy, p.angle)?;
    let secondary = points_on_circle(n, r / 2.0, p.dx, p.dy, p.angle - SECONDARY_ROTATION)?;

    Ok((0..n)
        .map(|i| {
            PathData::new()
                .move_to(ring[i])
                .arc_to(r / 2.0, true, secondary[i])
                .arc_to(r / 2.0, false, ring[(i + 1) % n])
                .arc_to(r, false, ring[i])
                .close()
        })
        .collect())
}

/// Lobe fill colours: a gradient from the base colour to its inverse, or
/// the two alternating.
pub fn lobe_colours(params: &YinYangParams) -> Result<Vec<Colour>> {
    let yang = params.base_colour.invert();
    if params.use_gradient {
        interpolate_colours(params.noids, params.base_colour, yang)
    } else {
        Ok((0..params.noids)
            .map(|i| if i % 2 == 0 { yang } else { params.base_colour })
            .collect())
    }
}

/// Render a yin-yang emblem as a complete document.
pub fn yin_yang(params: &YinYangParams) -> Result<String> {
    if let Some(seconds) = params.spin {
        ensure_positive("spin", seconds)?;
    }

    let lobes = yin_yang_lobes(params)?;
    let colours = lobe_colours(params)?;
    let n = params.noids;
    let r = params.radius;
    let p = &params.placement;
    let style = &params.style;
    let centre = Point2D::new(p.dx, p.dy);
    let ring = points_on_circle(n, r, p.dx, p.dy, p.angle)?;

    let mut elements = vec![Element::circle(p.dx, p.dy, r)
        .attr("fill", params.base_colour)
        .attr("stroke", style.stroke)
        .attr("stroke-width", style.stroke_width)];

    for (lobe, colour) in lobes.iter().zip(&colours) {
        elements.push(Element::path(lobe).attr("fill", colour).stroked(style));
    }

    for (i, point) in ring.iter().enumerate() {
        let dot = point.midpoint(centre);
        elements.push(
            Element::circle(dot.x, dot.y, r * DOT_RATIO).attr("fill", colours[i].invert()),
        );
    }

    let mut doc = SvgDocument::new(style.view_box);
    match params.spin {
        Some(seconds) => doc.push(spin_group(elements, seconds, p.dx, p.dy)),
        None => doc.extend(elements),
    }

    Ok(doc.finish())
}
