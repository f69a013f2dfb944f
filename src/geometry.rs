//! Geometry kernel shared by every generator.
//!
//! Angles are given in degrees and converted with `angle * PI / 180`.
//! Screen convention applies: `y = dy + r * sin(theta)`, so with the y axis
//! pointing down a positive angle turns clockwise on screen.

use std::f64::consts::PI;

use crate::error::{Result, ShapeError};
use crate::types::Point2D;

/// Convert degrees to radians.
pub fn to_radians(degrees: f64) -> f64 {
    degrees * PI / 180.0
}

/// Sample `count` points evenly spaced on a circle.
///
/// The first point sits at `-initial_angle` degrees; each following point
/// advances by `360 / count` degrees. Coordinates are rounded to 2 decimals.
pub fn points_on_circle(
    count: usize,
    radius: f64,
    dx: f64,
    dy: f64,
    initial_angle: f64,
) -> Result<Vec<Point2D>> {
    if count == 0 {
        return Err(ShapeError::InvalidParameter {
            message: "cannot sample zero points on a circle".to_string(),
            help: Some("Use a point count of at least 1".to_string()),
        });
    }

    let step = 360.0 / count as f64;
    Ok((0..count)
        .map(|i| {
            let theta = to_radians(-initial_angle + i as f64 * step);
            Point2D::rounded(dx + radius * theta.cos(), dy + radius * theta.sin())
        })
        .collect())
}

/// Index increment for the star polygon on `n` points.
///
/// Connecting vertex `i` to vertex `(i + k) mod n`, `n` times, and closing
/// back to vertex 0 draws the self-intersecting star.
pub fn skip_step(n: usize) -> usize {
    if n == 0 {
        return 0;
    }
    if n % 2 == 1 {
        (n - n % 2) / 2
    } else {
        (n - 1 - (n - 1) % 2) / 2
    }
}

/// Vertex visiting order for the star polygon on `n` points: `0, k, 2k, ...`
/// modulo `n`, `n` entries long.
pub fn skip_sequence(n: usize) -> Vec<usize> {
    let k = skip_step(n);
    (0..n).map(|j| (j * k) % n).collect()
}

/// A non-vertical line `y = slope * x + intercept`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineEquation {
    pub slope: f64,
    pub intercept: f64,
}

impl LineEquation {
    /// Evaluate `y` at `x`.
    pub fn y_at(&self, x: f64) -> f64 {
        self.slope * x + self.intercept
    }
}

/// Fit the line through two points.
///
/// Vertical lines have no slope-intercept form and are rejected.
pub fn line_equation(p1: Point2D, p2: Point2D) -> Result<LineEquation> {
    if p1.x == p2.x {
        return Err(ShapeError::degenerate(format!(
            "vertical line through ({}) and ({})",
            p1, p2
        )));
    }

    let slope = (p2.y - p1.y) / (p2.x - p1.x);
    Ok(LineEquation {
        slope,
        intercept: p1.y - slope * p1.x,
    })
}

/// Intersect two lines given in slope-intercept form.
pub fn line_intersection(l1: LineEquation, l2: LineEquation) -> Result<Point2D> {
    if l1.slope == l2.slope {
        return Err(ShapeError::degenerate(format!(
            "parallel lines with slope {}",
            l1.slope
        )));
    }

    let x = (l2.intercept - l1.intercept) / (l1.slope - l2.slope);
    Ok(Point2D::rounded(x, l1.y_at(x)))
}

/// Intersect the line through `a1, a2` with the line through `b1, b2`.
///
/// Unlike `line_intersection` this accepts one vertical line. Two vertical
/// lines, parallel lines or coincident defining points are degenerate.
pub fn intersect_through(a1: Point2D, a2: Point2D, b1: Point2D, b2: Point2D) -> Result<Point2D> {
    if a1 == a2 || b1 == b2 {
        return Err(ShapeError::degenerate(
            "line defined by two coincident points",
        ));
    }

    match (a1.x == a2.x, b1.x == b2.x) {
        (true, true) => Err(ShapeError::degenerate(format!(
            "parallel vertical lines at x = {} and x = {}",
            a1.x, b1.x
        ))),
        (true, false) => {
            let line = line_equation(b1, b2)?;
            Ok(Point2D::rounded(a1.x, line.y_at(a1.x)))
        }
        (false, true) => {
            let line = line_equation(a1, a2)?;
            Ok(Point2D::rounded(b1.x, line.y_at(b1.x)))
        }
        (false, false) => line_intersection(line_equation(a1, a2)?, line_equation(b1, b2)?),
    }
}
