//! GeoJSON polygon maps.
//!
//! Feature outlines are projected into drawing space with one uniform
//! scale derived from the bounding box, then translated. Latitude grows
//! upward while screen y grows downward, so the y axis is negated.
//!
//! Only the first ring of each feature's first polygon is drawn.

use serde::Deserialize;
use serde_json::Value;

use crate::colour_source::ColourSource;
use crate::error::{Result, ShapeError};
use crate::types::{round2, GisParams, Point2D, Scaling, Style};

use super::document::{Element, SvgDocument};
use super::{ensure_finite, ensure_style};

/// Half-size of the drawing area the bounding box is fitted to.
pub const DRAWING_EXTENT: f64 = 100.0;

/// Colour of the message drawn when a map cannot be loaded.
const ERROR_COLOUR: &str = "#B00020";

/// Axis-aligned bounding box in source coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    pub min_x: f64,
    pub min_y: f64,
    pub max_x: f64,
    pub max_y: f64,
}

impl BoundingBox {
    pub fn new(min_x: f64, min_y: f64, max_x: f64, max_y: f64) -> Self {
        Self {
            min_x,
            min_y,
            max_x,
            max_y,
        }
    }

    /// Smallest box containing every position, or `None` if there are none.
    pub fn enclosing<'a>(positions: impl IntoIterator<Item = &'a (f64, f64)>) -> Option<Self> {
        positions.into_iter().fold(None, |acc, &(x, y)| {
            Some(match acc {
                None => Self::new(x, y, x, y),
                Some(b) => Self::new(b.min_x.min(x), b.min_y.min(y), b.max_x.max(x), b.max_y.max(y)),
            })
        })
    }

    pub fn centre(&self) -> (f64, f64) {
        ((self.min_x + self.max_x) / 2.0, (self.min_y + self.max_y) / 2.0)
    }

    pub fn half_width(&self) -> f64 {
        (self.max_x - self.min_x) / 2.0
    }

    pub fn half_height(&self) -> f64 {
        (self.max_y - self.min_y) / 2.0
    }
}

/// A feature reduced to the ring that gets drawn.
#[derive(Debug, Clone, PartialEq)]
pub struct GeoFeature {
    /// `(lon, lat)` positions of the outer ring.
    pub ring: Vec<(f64, f64)>,
}

/// A validated GeoJSON feature collection.
#[derive(Debug, Clone, PartialEq)]
pub struct FeatureCollection {
    /// Bounding box supplied by the document, if any.
    pub bbox: Option<BoundingBox>,
    pub features: Vec<GeoFeature>,
}

#[derive(Deserialize)]
struct RawCollection {
    #[serde(rename = "type")]
    kind: String,
    #[serde(default)]
    bbox: Option<Vec<f64>>,
    features: Vec<RawFeature>,
}

#[derive(Deserialize)]
struct RawFeature {
    geometry: RawGeometry,
}

#[derive(Deserialize)]
struct RawGeometry {
    #[serde(rename = "type", default)]
    kind: Option<String>,
    coordinates: Value,
}

impl FeatureCollection {
    /// Validate and extract a feature collection from parsed JSON.
    ///
    /// The document must be a `FeatureCollection` whose features all carry
    /// a `geometry.coordinates` array.
    pub fn from_value(value: Value) -> Result<Self> {
        let raw: RawCollection = serde_json::from_value(value).map_err(|e| {
            ShapeError::MalformedInput {
                message: format!("Invalid GeoJSON: {}", e),
                help: Some("Expected a FeatureCollection with a `features` array".to_string()),
            }
        })?;

        if raw.kind != "FeatureCollection" {
            return Err(ShapeError::MalformedInput {
                message: format!("Expected a FeatureCollection, found `{}`", raw.kind),
                help: None,
            });
        }

        let bbox = match raw.bbox.as_deref() {
            None => None,
            Some([min_x, min_y, max_x, max_y]) => {
                Some(BoundingBox::new(*min_x, *min_y, *max_x, *max_y))
            }
            Some(other) => {
                return Err(ShapeError::malformed(format!(
                    "bbox must have 4 values, found {}",
                    other.len()
                )))
            }
        };

        let features = raw
            .features
            .into_iter()
            .enumerate()
            .map(|(i, f)| extract_ring(i, f.geometry).map(|ring| GeoFeature { ring }))
            .collect::<Result<Vec<_>>>()?;

        Ok(Self { bbox, features })
    }

    /// The supplied bounding box, or one computed from every drawn ring.
    pub fn bounding_box(&self) -> Option<BoundingBox> {
        self.bbox.or_else(|| {
            BoundingBox::enclosing(self.features.iter().flat_map(|f| f.ring.iter()))
        })
    }
}

/// Pull the first ring of the first polygon out of a geometry.
fn extract_ring(index: usize, geometry: RawGeometry) -> Result<Vec<(f64, f64)>> {
    if !geometry.coordinates.is_array() {
        return Err(ShapeError::malformed(format!(
            "feature {} has no coordinates array",
            index
        )));
    }

    let malformed = |e: serde_json::Error| ShapeError::MalformedInput {
        message: format!("feature {} has invalid coordinates: {}", index, e),
        help: None,
    };

    let rings: Vec<Vec<Vec<f64>>> = match geometry.kind.as_deref() {
        Some("Polygon") => serde_json::from_value(geometry.coordinates).map_err(malformed)?,
        _ => {
            let polygons: Vec<Vec<Vec<Vec<f64>>>> =
                serde_json::from_value(geometry.coordinates).map_err(malformed)?;
            polygons.into_iter().next().unwrap_or_default()
        }
    };

    let ring = rings.into_iter().next().unwrap_or_default();
    ring.into_iter()
        .map(|position| match position.as_slice() {
            [lon, lat, ..] => Ok((*lon, *lat)),
            _ => Err(ShapeError::malformed(format!(
                "feature {} has a position with fewer than 2 values",
                index
            ))),
        })
        .collect()
}

/// Parse and validate a GeoJSON document.
pub fn parse_geojson(text: &str) -> Result<FeatureCollection> {
    let value: Value = serde_json::from_str(text).map_err(|e| ShapeError::MalformedInput {
        message: format!("Invalid JSON: {}", e),
        help: None,
    })?;
    FeatureCollection::from_value(value)
}

/// Builtin dataset: two rectangles mirrored about longitude 0.
pub fn sample_collection() -> FeatureCollection {
    let rect = |x0: f64, x1: f64| GeoFeature {
        ring: vec![(x0, -10.0), (x1, -10.0), (x1, 10.0), (x0, 10.0), (x0, -10.0)],
    };
    FeatureCollection {
        bbox: None,
        features: vec![rect(-20.0, -5.0), rect(5.0, 20.0)],
    }
}

/// Linear map from source coordinates to drawing space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Projection {
    pub centre: (f64, f64),
    pub scale: f64,
    pub translate: [f64; 2],
}

impl Projection {
    /// Fit a bounding box to the drawing extent.
    pub fn fit(bbox: &BoundingBox, scaling: Scaling, factor: f64, translate: [f64; 2]) -> Result<Self> {
        let axis_scale = |half: f64| {
            if half > 0.0 {
                DRAWING_EXTENT / half
            } else {
                f64::INFINITY
            }
        };
        let sx = axis_scale(bbox.half_width());
        let sy = axis_scale(bbox.half_height());

        let scale = match scaling {
            Scaling::Min => sx.min(sy),
            Scaling::Max => sx.max(sy),
            Scaling::Width => sx,
            Scaling::Height => sy,
        } * factor;

        if !scale.is_finite() || scale == 0.0 {
            return Err(ShapeError::degenerate(format!(
                "cannot scale a {:?} bounding box of size {} x {}",
                scaling,
                bbox.half_width() * 2.0,
                bbox.half_height() * 2.0
            )));
        }

        Ok(Self {
            centre: bbox.centre(),
            scale,
            translate,
        })
    }

    /// Project one `(lon, lat)` position.
    pub fn project(&self, lon: f64, lat: f64) -> Point2D {
        Point2D::rounded(
            (lon - self.centre.0) * self.scale + self.translate[0],
            -(lat - self.centre.1) * self.scale + self.translate[1],
        )
    }
}

/// Project every feature ring into drawing space.
pub fn project_features(
    collection: &FeatureCollection,
    params: &GisParams,
) -> Result<(Projection, Vec<Vec<Point2D>>)> {
    ensure_finite("scale_factor", params.scale_factor)?;
    if !Point2D::new(params.translate[0], params.translate[1]).is_finite() {
        return Err(ShapeError::invalid(format!(
            "translate must be finite, got [{}, {}]",
            params.translate[0], params.translate[1]
        )));
    }

    let bbox = collection
        .bounding_box()
        .ok_or_else(|| ShapeError::malformed("GeoJSON contains no coordinates"))?;
    let projection = Projection::fit(&bbox, params.scaling, params.scale_factor, params.translate)?;

    let rings = collection
        .features
        .iter()
        .map(|f| f.ring.iter().map(|&(lon, lat)| projection.project(lon, lat)).collect())
        .collect();

    Ok((projection, rings))
}

/// Render a feature collection as a complete document.
pub fn render(
    collection: &FeatureCollection,
    params: &GisParams,
    source: &mut dyn ColourSource,
) -> Result<String> {
    ensure_style(&params.style)?;
    let (projection, rings) = project_features(collection, params)?;
    let style = &params.style;
    let mut doc = SvgDocument::new(style.view_box);

    if params.draw_bbox {
        if let Some(bbox) = collection.bounding_box() {
            let top_left = projection.project(bbox.min_x, bbox.max_y);
            let bottom_right = projection.project(bbox.max_x, bbox.min_y);
            doc.push(
                Element::new("rect")
                    .attr("x", top_left.x)
                    .attr("y", top_left.y)
                    .attr("width", round2(bottom_right.x - top_left.x))
                    .attr("height", round2(bottom_right.y - top_left.y))
                    .attr("fill", "none")
                    .attr("stroke", style.stroke)
                    .attr("stroke-dasharray", "4 2"),
            );
        }
    }

    for (i, ring) in rings.iter().enumerate() {
        let fill = if params.palette.is_empty() {
            source.next_colour()
        } else {
            params.palette[i % params.palette.len()]
        };
        let points = ring
            .iter()
            .map(|p| format!("{},{}", p.x, p.y))
            .collect::<Vec<_>>()
            .join(" ");
        doc.push(
            Element::new("polygon")
                .attr("points", points)
                .attr("fill", fill)
                .stroked(style),
        );
    }

    Ok(doc.finish())
}

/// Parse, validate and render a GeoJSON document.
pub fn render_geojson(text: &str, params: &GisParams, source: &mut dyn ColourSource) -> Result<String> {
    render(&parse_geojson(text)?, params, source)
}

/// Something that can retrieve a GeoJSON document by URL.
pub trait GeoFetcher {
    fn fetch(&self, url: &str) -> Result<String>;
}

/// Fetches over HTTP; non-success statuses are errors.
#[derive(Debug, Clone, Copy, Default)]
pub struct HttpFetcher;

impl HttpFetcher {
    pub fn new() -> Self {
        Self
    }
}

impl GeoFetcher for HttpFetcher {
    fn fetch(&self, url: &str) -> Result<String> {
        let fetch_error = |e: reqwest::Error| ShapeError::Fetch {
            url: url.to_string(),
            message: e.to_string(),
        };

        reqwest::blocking::get(url)
            .and_then(|response| response.error_for_status())
            .and_then(|response| response.text())
            .map_err(fetch_error)
    }
}

/// Fetch a GeoJSON document and render it.
///
/// Never fails: any fetch, parse or render error produces a document that
/// displays the error instead.
pub fn fetch_and_render(
    fetcher: &dyn GeoFetcher,
    url: &str,
    params: &GisParams,
    source: &mut dyn ColourSource,
) -> String {
    match fetcher
        .fetch(url)
        .and_then(|body| render_geojson(&body, params, source))
    {
        Ok(svg) => svg,
        Err(e) => error_markup(&e.to_string(), &params.style),
    }
}

/// A document showing `message` in place of a map.
pub fn error_markup(message: &str, style: &Style) -> String {
    let mut doc = SvgDocument::new(style.view_box);
    doc.push(
        Element::new("text")
            .attr("class", "gis-error")
            .attr("x", 0)
            .attr("y", 0)
            .attr("text-anchor", "middle")
            .attr("font-family", "sans-serif")
            .attr("font-size", 10)
            .attr("fill", ERROR_COLOUR)
            .text(message),
    );
    doc.finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::colour_source::FixedColours;
    use crate::types::Colour;
    use serde_json::json;

    struct StubFetcher(std::result::Result<String, String>);

    impl GeoFetcher for StubFetcher {
        fn fetch(&self, url: &str) -> Result<String> {
            self.0.clone().map_err(|message| ShapeError::Fetch {
                url: url.to_string(),
                message,
            })
        }
    }

    fn red() -> FixedColours {
        FixedColours::new(vec![Colour::rgb(255, 0, 0)])
    }

    #[test]
    fn test_sample_is_mirrored_about_translate_x() {
        let params = GisParams::default();
        let (projection, rings) = project_features(&sample_collection(), &params).unwrap();
        assert_eq!(projection.scale, 5.0);
        assert_eq!(rings.len(), 2);

        for p in &rings[0] {
            let mirrored = Point2D::new(-p.x + 0.0, p.y);
            assert!(rings[1].contains(&mirrored), "missing mirror of {:?}", p);
        }
        assert_eq!(rings[0][0], Point2D::new(-100.0, 50.0));
    }

    #[test]
    fn test_scaling_modes_and_translate() {
        let bbox = BoundingBox::new(-20.0, -10.0, 20.0, 10.0);
        let fit = |s| Projection::fit(&bbox, s, 1.0, [0.0, 0.0]).unwrap().scale;
        assert_eq!(fit(Scaling::Min), 5.0);
        assert_eq!(fit(Scaling::Max), 10.0);
        assert_eq!(fit(Scaling::Width), 5.0);
        assert_eq!(fit(Scaling::Height), 10.0);

        let projection = Projection::fit(&bbox, Scaling::Min, 0.5, [10.0, -10.0]).unwrap();
        assert_eq!(projection.project(20.0, 10.0), Point2D::new(60.0, -35.0));
    }

    #[test]
    fn test_degenerate_bbox() {
        let bbox = BoundingBox::new(3.0, 3.0, 3.0, 3.0);
        assert!(matches!(
            Projection::fit(&bbox, Scaling::Min, 1.0, [0.0, 0.0]),
            Err(ShapeError::ArithmeticDegeneracy { .. })
        ));
    }

    #[test]
    fn test_missing_features_rejected() {
        let value = json!({ "type": "FeatureCollection" });
        assert!(matches!(
            FeatureCollection::from_value(value),
            Err(ShapeError::MalformedInput { .. })
        ));
    }

    #[test]
    fn test_wrong_type_rejected() {
        let value = json!({ "type": "Feature", "features": [] });
        assert!(matches!(
            FeatureCollection::from_value(value),
            Err(ShapeError::MalformedInput { .. })
        ));
    }

    #[test]
    fn test_feature_without_coordinates_rejected() {
        let value = json!({
            "type": "FeatureCollection",
            "features": [{ "geometry": { "type": "MultiPolygon" } }]
        });
        assert!(FeatureCollection::from_value(value).is_err());

        let value = json!({
            "type": "FeatureCollection",
            "features": [{ "geometry": { "coordinates": "nope" } }]
        });
        assert!(FeatureCollection::from_value(value).is_err());
    }

    #[test]
    fn test_parses_multipolygon_and_polygon() {
        let value = json!({
            "type": "FeatureCollection",
            "bbox": [0, 0, 4, 2],
            "features": [
                { "geometry": { "type": "MultiPolygon",
                    "coordinates": [[[[0, 0], [1, 0], [1, 1], [0, 0]]], [[[9, 9], [9, 8], [8, 8]]]] } },
                { "geometry": { "type": "Polygon",
                    "coordinates": [[[2, 0, 100], [3, 0, 100], [3, 2, 100], [2, 0, 100]]] } }
            ]
        });
        let collection = FeatureCollection::from_value(value).unwrap();
        assert_eq!(collection.bbox, Some(BoundingBox::new(0.0, 0.0, 4.0, 2.0)));
        assert_eq!(collection.features[0].ring.len(), 4);
        assert_eq!(collection.features[1].ring[2], (3.0, 2.0));
    }

    #[test]
    fn test_computed_bounding_box() {
        let bbox = sample_collection().bounding_box().unwrap();
        assert_eq!(bbox, BoundingBox::new(-20.0, -10.0, 20.0, 10.0));
        assert_eq!(bbox.centre(), (0.0, 0.0));
    }

    #[test]
    fn test_render_with_bbox_and_palette() {
        let params = GisParams {
            draw_bbox: true,
            palette: vec![Colour::rgb(0, 0, 255), Colour::rgb(0, 255, 0)],
            ..Default::default()
        };
        let svg = render(&sample_collection(), &params, &mut red()).unwrap();
        let rect_at = svg.find("<rect").unwrap();
        let polygon_at = svg.find("<polygon").unwrap();
        assert!(rect_at < polygon_at);
        assert!(svg.contains("x=\"-100\" y=\"-50\" width=\"200\" height=\"100\""));
        assert!(svg.contains("points=\"-100,50 -25,50 -25,-50 -100,-50 -100,50\" fill=\"#0000FF\""));
        assert!(svg.contains("fill=\"#00FF00\""));
        assert!(!svg.contains("#FF0000"));
    }

    #[test]
    fn test_render_uses_colour_source_without_palette() {
        let svg = render(&sample_collection(), &GisParams::default(), &mut red()).unwrap();
        assert_eq!(svg.matches("fill=\"#FF0000\"").count(), 2);
    }

    #[test]
    fn test_fetch_failure_renders_error_markup() {
        let fetcher = StubFetcher(Err("connection refused".to_string()));
        let svg = fetch_and_render(&fetcher, "http://map.test/a.json", &GisParams::default(), &mut red());
        assert!(svg.contains("class=\"gis-error\""));
        assert!(svg.contains("connection refused"));
        assert!(!svg.contains("<polygon"));
    }

    #[test]
    fn test_fetch_malformed_body_renders_error_markup() {
        let fetcher = StubFetcher(Ok("{ not json".to_string()));
        let svg = fetch_and_render(&fetcher, "http://map.test/a.json", &GisParams::default(), &mut red());
        assert!(svg.contains("Invalid JSON"));
    }

    #[test]
    fn test_fetch_success_renders_map() {
        let body = json!({
            "type": "FeatureCollection",
            "features": [{ "geometry": { "coordinates": [[[[0, 0], [2, 0], [2, 2], [0, 0]]]] } }]
        })
        .to_string();
        let fetcher = StubFetcher(Ok(body));
        let svg = fetch_and_render(&fetcher, "http://map.test/a.json", &GisParams::default(), &mut red());
        assert_eq!(svg.matches("<polygon").count(), 1);
    }
}
