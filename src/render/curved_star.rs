//! Curved star: star polygons whose edges are circular arcs.
//!
//! The ring is reordered by the skip-step sequence and consecutive vertices
//! are joined by arcs of radius `ray_ratio * radius`. When `noids % 4 == 2`
//! the skip-step walk cannot reach every vertex, so the even and odd
//! vertices are drawn as two separate interlocking stars instead.

use crate::error::Result;
use crate::geometry::{points_on_circle, skip_sequence};
use crate::path::PathData;
use crate::types::{CurvedStarParams, Point2D};

use super::document::{fill_value, Element, SvgDocument, GLOW_FILTER_ID};
use super::{ensure_count, ensure_placement, ensure_positive};

/// Build the arc paths for a curved star.
pub fn curved_star_paths(params: &CurvedStarParams) -> Result<Vec<PathData>> {
    ensure_count("noids", params.noids, 3)?;
    ensure_positive("radius", params.radius)?;
    ensure_positive("ray_ratio", params.ray_ratio)?;
    ensure_placement(&params.placement)?;

    let p = &params.placement;
    let points = points_on_circle(params.noids, params.radius, p.dx, p.dy, p.angle)?;
    let ray = params.ray_ratio * params.radius;

    if params.noids % 4 == 2 {
        let even: Vec<Point2D> = points.iter().step_by(2).copied().collect();
        let odd: Vec<Point2D> = points.iter().skip(1).step_by(2).copied().collect();
        Ok(vec![
            arc_star(&even, ray, |_| true),
            arc_star(&odd, ray, |_| true),
        ])
    } else {
        // Consecutive arcs bow in opposite directions.
        Ok(vec![arc_star(&points, ray, |j| 1 - (j % 2) == 1)])
    }
}

/// Render a curved star as a complete document.
pub fn curved_star(params: &CurvedStarParams) -> Result<String> {
    let paths = curved_star_paths(params)?;
    let style = &params.style;

    let mut doc = SvgDocument::styled(style);
    for path in &paths {
        let mut element = Element::path(path)
            .attr("fill", fill_value(style))
            .stroked(style);
        if style.glow {
            element = element.attr("filter", format!("url(#{})", GLOW_FILTER_ID));
        }
        doc.push(element);
    }

    Ok(doc.finish())
}

/// Closed arc path visiting `ring` in skip-step order.
fn arc_star(ring: &[Point2D], ray: f64, sweep: impl Fn(usize) -> bool) -> PathData {
    let order = skip_sequence(ring.len());
    let mut path = PathData::new().move_to(ring[order[0]]);
    for j in 0..ring.len() {
        let next = ring[order[(j + 1) % ring.len()]];
        path = path.arc_to(ray, sweep(j), next);
    }
    path.close()
}
