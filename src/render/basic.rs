//! Basic path builders: polygon, two-radius star, circle and spiral.
//!
//! Each returns path data only; the orchestrator wraps it in a document.

use std::f64::consts::PI;

use crate::error::{Result, ShapeError};
use crate::geometry::{points_on_circle, to_radians};
use crate::path::PathData;
use crate::types::{CircleParams, Point2D, PolygonParams, SpiralParams, StarParams};

use super::{ensure_count, ensure_placement, ensure_positive};

/// Samples per spiral turn.
pub const SPIRAL_STEPS_PER_TURN: usize = 20;

/// Regular polygon: `M p0 L p1 ... L p(n-1) Z`.
pub fn polygon_path(params: &PolygonParams) -> Result<PathData> {
    ensure_count("edges", params.edges, 3)?;
    ensure_positive("size", params.size)?;
    ensure_placement(&params.placement)?;

    let p = &params.placement;
    let points = points_on_circle(params.edges, params.size, p.dx, p.dy, p.angle)?;
    Ok(PathData::polyline_closed(&points))
}

/// Two-radius star with `2 * edges` vertices alternating outer and inner.
pub fn star_path(params: &StarParams) -> Result<PathData> {
    ensure_count("edges", params.edges, 2)?;
    ensure_positive("size", params.size)?;
    ensure_positive("inner_size", params.inner_size)?;
    ensure_placement(&params.placement)?;

    let p = &params.placement;
    let start = to_radians(-p.angle);
    let step = PI / params.edges as f64;

    let points: Vec<Point2D> = (0..params.edges * 2)
        .map(|i| {
            let r = if i % 2 == 0 { params.size } else { params.inner_size };
            let theta = start + i as f64 * step;
            Point2D::rounded(p.dx + r * theta.cos(), p.dy + r * theta.sin())
        })
        .collect();

    Ok(PathData::polyline_closed(&points))
}

/// Full circle as two opposing half-circle arcs.
pub fn circle_path(params: &CircleParams) -> Result<PathData> {
    ensure_positive("size", params.size)?;
    ensure_placement(&params.placement)?;

    let p = &params.placement;
    let r = params.size;
    let left = Point2D::rounded(p.dx - r, p.dy);
    let right = Point2D::rounded(p.dx + r, p.dy);

    Ok(PathData::new()
        .move_to(left)
        .large_arc_to(r, true, right)
        .large_arc_to(r, true, left)
        .close())
}

/// Archimedean spiral from the centre out to `size`; never closed.
pub fn spiral_path(params: &SpiralParams) -> Result<PathData> {
    ensure_count("turns", params.turns, 1)?;
    ensure_positive("size", params.size)?;
    ensure_placement(&params.placement)?;

    let p = &params.placement;
    let steps = params
        .turns
        .checked_mul(SPIRAL_STEPS_PER_TURN)
        .ok_or_else(|| ShapeError::invalid(format!("turns {} is too large", params.turns)))?;
    let start = to_radians(-p.angle);
    let sweep = params.turns as f64 * 2.0 * PI;

    let mut path = PathData::new();
    for i in 0..=steps {
        let t = i as f64 / steps as f64;
        let r = t * params.size;
        let theta = start + t * sweep;
        let point = Point2D::rounded(p.dx + r * theta.cos(), p.dy + r * theta.sin());
        path = if i == 0 {
            path.move_to(point)
        } else {
            path.line_to(point)
        };
    }

    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::path::PathCommand;
    use crate::types::Placement;

    #[test]
    fn test_triangle_path() {
        let params = PolygonParams {
            edges: 3,
            size: 10.0,
            ..Default::default()
        };
        let path = polygon_path(&params).unwrap();
        insta::assert_snapshot!(path.to_string(), @"M 10 0 L -5 8.66 L -5 -8.66 Z");

        let commands = path.commands();
        let lines = commands
            .iter()
            .filter(|c| matches!(c, PathCommand::LineTo(_)))
            .count();
        assert_eq!(lines, 2);
        assert_eq!(commands.first(), Some(&PathCommand::MoveTo(Point2D::new(10.0, 0.0))));
        assert_eq!(commands.last(), Some(&PathCommand::Close));
    }

    #[test]
    fn test_polygon_rejects_degenerate() {
        let params = PolygonParams {
            edges: 2,
            ..Default::default()
        };
        assert!(matches!(
            polygon_path(&params),
            Err(ShapeError::InvalidParameter { .. })
        ));

        let params = PolygonParams {
            size: 0.0,
            ..Default::default()
        };
        assert!(polygon_path(&params).is_err());
    }

    #[test]
    fn test_star_alternates_radii() {
        let params = StarParams {
            edges: 5,
            size: 100.0,
            inner_size: 40.0,
            ..Default::default()
        };
        let path = star_path(&params).unwrap();
        let points: Vec<Point2D> = path
            .commands()
            .iter()
            .filter_map(|c| match c {
                PathCommand::MoveTo(p) | PathCommand::LineTo(p) => Some(*p),
                _ => None,
            })
            .collect();
        assert_eq!(points.len(), 10);
        let origin = Point2D::new(0.0, 0.0);
        for (i, p) in points.iter().enumerate() {
            let expected = if i % 2 == 0 { 100.0 } else { 40.0 };
            assert!((p.distance_to(origin) - expected).abs() <= 0.01);
        }
    }

    #[test]
    fn test_circle_path() {
        let params = CircleParams {
            size: 50.0,
            placement: Placement::new(10.0, -10.0, 0.0),
            ..Default::default()
        };
        let path = circle_path(&params).unwrap();
        assert_eq!(
            path.to_string(),
            "M -40 -10 A 50 50 0 1,1 60 -10 A 50 50 0 1,1 -40 -10 Z"
        );
    }

    #[test]
    fn test_spiral_grows_to_size() {
        let params = SpiralParams {
            turns: 2,
            size: 80.0,
            ..Default::default()
        };
        let path = spiral_path(&params).unwrap();
        let commands = path.commands();
        assert_eq!(commands.len(), 41);
        assert_eq!(commands[0], PathCommand::MoveTo(Point2D::new(0.0, 0.0)));
        assert_eq!(commands[40], PathCommand::LineTo(Point2D::new(80.0, 0.0)));
        assert!(!commands.contains(&PathCommand::Close));
    }

    #[test]
    fn test_spiral_zero_turns() {
        let params = SpiralParams {
            turns: 0,
            ..Default::default()
        };
        assert!(spiral_path(&params).is_err());
    }

    #[test]
    fn test_spiral_turn_overflow_rejected() {
        let params = SpiralParams {
            turns: usize::MAX,
            ..Default::default()
        };
        assert!(matches!(
            spiral_path(&params),
            Err(ShapeError::InvalidParameter { .. })
        ));
    }

    #[test]
    fn test_non_finite_placement_rejected() {
        let params = PolygonParams {
            placement: Placement::new(f64::NAN, 0.0, f64::INFINITY),
            ..Default::default()
        };
        assert!(matches!(
            polygon_path(&params),
            Err(ShapeError::InvalidParameter { .. })
        ));
    }
}
