//! Custom star: straight-edged star polygons with optional nesting.
//!
//! Each nested layer is rotated by half a vertex step and sized to the
//! inner self-intersection of the layer before it, so the stars sit exactly
//! inside one another.

use crate::colour_source::ColourSource;
use crate::error::Result;
use crate::geometry::{intersect_through, points_on_circle, skip_sequence, skip_step};
use crate::path::PathData;
use crate::types::{round2, Colour, CustomStarParams, Point2D};

use super::document::{fill_value, spin_group, Element, SvgDocument};
use super::{ensure_count, ensure_placement, ensure_positive};

/// Upper bound on nested layers.
pub const MAX_LAYERS: usize = 64;

/// One drawn layer of a custom star.
#[derive(Debug, Clone, PartialEq)]
pub struct StarLayer {
    /// Circumradius of this layer.
    pub radius: f64,
    pub paths: Vec<PathData>,
    /// Fill colour, or `None` to use the style's fill.
    pub fill: Option<Colour>,
    pub opacity: f64,
}

/// Compute every layer of a custom star.
///
/// Colours are drawn from `source` only when `nested` is set.
pub fn custom_star_layers(
    params: &CustomStarParams,
    source: &mut dyn ColourSource,
) -> Result<Vec<StarLayer>> {
    ensure_count("noids", params.noids, 3)?;
    ensure_positive("radius", params.radius)?;
    if params.nested {
        ensure_positive("min_radius", params.min_radius)?;
    }
    ensure_placement(&params.placement)?;

    let n = params.noids;
    let k = skip_step(n);
    let p = &params.placement;
    let centre = Point2D::new(p.dx, p.dy);

    let mut layers = Vec::new();
    let mut current = params.radius;

    loop {
        let index = layers.len();
        let start_angle = 180.0 * index as f64 / n as f64 - p.angle;
        let ring = points_on_circle(n, current, p.dx, p.dy, -start_angle)?;

        let paths = if n % 4 == 2 {
            let even: Vec<Point2D> = ring.iter().step_by(2).copied().collect();
            let odd: Vec<Point2D> = ring.iter().skip(1).step_by(2).copied().collect();
            vec![straight_star(&even), straight_star(&odd)]
        } else {
            vec![straight_star(&ring)]
        };

        layers.push(StarLayer {
            radius: current,
            paths,
            fill: params.nested.then(|| source.next_colour()),
            opacity: (0.8 + 0.1 * index as f64).min(1.0),
        });

        if !params.nested || n <= 4 || layers.len() >= MAX_LAYERS {
            break;
        }

        // Edge from the start vertex stepping forward, and from its
        // neighbour stepping backward; they cross at the inner vertex.
        let s = params.start_vertex % n;
        let hit = intersect_through(
            ring[s],
            ring[(s + k) % n],
            ring[(s + 1) % n],
            ring[(s + 1 + n - k) % n],
        )?;
        let next = hit.distance_to(centre);

        if next >= current || next <= params.min_radius {
            break;
        }
        current = next;
    }

    Ok(layers)
}

/// Render a custom star as a complete document.
pub fn custom_star(params: &CustomStarParams, source: &mut dyn ColourSource) -> Result<String> {
    if let Some(seconds) = params.spin {
        ensure_positive("spin", seconds)?;
    }

    let layers = custom_star_layers(params, source)?;
    let style = &params.style;

    let elements: Vec<Element> = layers
        .iter()
        .flat_map(|layer| {
            let fill = layer
                .fill
                .map(|c| c.to_string())
                .unwrap_or_else(|| fill_value(style));
            layer.paths.iter().map(move |path| {
                Element::path(path)
                    .attr("fill", fill.clone())
                    .attr("fill-opacity", round2(layer.opacity))
                    .stroked(style)
            })
        })
        .collect();

    let mut doc = SvgDocument::styled(style);
    match params.spin {
        Some(seconds) => doc.push(spin_group(
            elements,
            seconds,
            params.placement.dx,
            params.placement.dy,
        )),
        None => doc.extend(elements),
    }

    Ok(doc.finish())
}

/// Closed straight-edged path visiting `ring` in skip-step order.
fn straight_star(ring: &[Point2D]) -> PathData {
    let ordered: Vec<Point2D> = skip_sequence(ring.len())
        .into_iter()
        .map(|i| ring[i])
        .collect();
    PathData::polyline_closed(&ordered)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::colour_source::FixedColours;
    use crate::error::ShapeError;
    use crate::types::Placement;

    fn palette() -> FixedColours {
        FixedColours::new(vec![
            Colour::rgb(255, 0, 0),
            Colour::rgb(0, 255, 0),
            Colour::rgb(0, 0, 255),
        ])
    }

    #[test]
    fn test_not_nested_draws_one_layer() {
        for min_radius in [0.0, 1.0, 500.0] {
            let params = CustomStarParams {
                noids: 7,
                min_radius,
                nested: false,
                ..Default::default()
            };
            let layers = custom_star_layers(&params, &mut palette()).unwrap();
            assert_eq!(layers.len(), 1);
            assert_eq!(layers[0].fill, None);
            assert_eq!(layers[0].opacity, 0.8);
        }
    }

    #[test]
    fn test_nested_pentagram_shrinks_to_inner_vertices() {
        let params = CustomStarParams {
            noids: 5,
            radius: 100.0,
            min_radius: 10.0,
            nested: true,
            ..Default::default()
        };
        let layers = custom_star_layers(&params, &mut palette()).unwrap();
        assert_eq!(layers.len(), 3);

        // Pentagram inner radius ratio: cos(72deg) / cos(36deg).
        let ratio = (72f64.to_radians()).cos() / (36f64.to_radians()).cos();
        assert!((layers[1].radius - 100.0 * ratio).abs() < 0.05);
        assert!((layers[2].radius - 100.0 * ratio * ratio).abs() < 0.05);

        let opacities: Vec<f64> = layers.iter().map(|l| round2(l.opacity)).collect();
        assert_eq!(opacities, vec![0.8, 0.9, 1.0]);
        assert_eq!(layers[0].fill, Some(Colour::rgb(255, 0, 0)));
        assert_eq!(layers[2].fill, Some(Colour::rgb(0, 0, 255)));
    }

    #[test]
    fn test_nested_hexagram_splits_each_layer() {
        let params = CustomStarParams {
            noids: 6,
            radius: 100.0,
            min_radius: 30.0,
            nested: true,
            start_vertex: 2,
            ..Default::default()
        };
        let layers = custom_star_layers(&params, &mut palette()).unwrap();
        assert_eq!(layers.len(), 3);
        for layer in &layers {
            assert_eq!(layer.paths.len(), 2);
            assert!(layer.radius > 30.0);
        }
        assert!((layers[1].radius - 100.0 / 3f64.sqrt()).abs() < 0.05);
    }

    #[test]
    fn test_four_points_never_nest() {
        let params = CustomStarParams {
            noids: 4,
            nested: true,
            ..Default::default()
        };
        assert_eq!(custom_star_layers(&params, &mut palette()).unwrap().len(), 1);
    }

    #[test]
    fn test_layers_rotate_by_half_step() {
        let params = CustomStarParams {
            noids: 5,
            radius: 100.0,
            nested: true,
            placement: Placement::new(0.0, 0.0, 0.0),
            ..Default::default()
        };
        let layers = custom_star_layers(&params, &mut palette()).unwrap();
        let first = match layers[1].paths[0].commands()[0] {
            crate::path::PathCommand::MoveTo(p) => p,
            ref other => panic!("Expected move, got {:?}", other),
        };
        let angle = first.y.atan2(first.x).to_degrees();
        assert!((angle - 36.0).abs() < 0.1);
    }

    #[test]
    fn test_invalid_parameters() {
        let params = CustomStarParams {
            noids: 2,
            ..Default::default()
        };
        assert!(matches!(
            custom_star_layers(&params, &mut palette()),
            Err(ShapeError::InvalidParameter { .. })
        ));

        let params = CustomStarParams {
            nested: true,
            min_radius: 0.0,
            ..Default::default()
        };
        assert!(custom_star_layers(&params, &mut palette()).is_err());
    }

    #[test]
    fn test_markup_with_spin() {
        let params = CustomStarParams {
            noids: 5,
            nested: true,
            spin: Some(12.0),
            ..Default::default()
        };
        let svg = custom_star(&params, &mut palette()).unwrap();
        assert!(svg.contains("<animateTransform"));
        assert!(svg.contains("dur=\"12s\""));
        assert!(svg.contains("fill=\"#FF0000\" fill-opacity=\"0.8\""));
        assert!(svg.contains("fill=\"#00FF00\" fill-opacity=\"0.9\""));
        assert_eq!(svg.matches("<path ").count(), 3);
    }
}
