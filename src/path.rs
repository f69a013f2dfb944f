//! Path drawing commands and SVG path data.

use std::fmt;

use crate::types::{round2, Point2D};

/// A single path drawing instruction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PathCommand {
    /// `M x y`
    MoveTo(Point2D),
    /// `L x y`
    LineTo(Point2D),
    /// `A r r 0 large,sweep x y` - circular arc to `to`.
    Arc {
        radius: f64,
        large_arc: bool,
        sweep: bool,
        to: Point2D,
    },
    /// `Z`
    Close,
}

impl fmt::Display for PathCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PathCommand::MoveTo(p) => write!(f, "M {}", p),
            PathCommand::LineTo(p) => write!(f, "L {}", p),
            PathCommand::Arc {
                radius,
                large_arc,
                sweep,
                to,
            } => {
                let r = round2(*radius);
                write!(
                    f,
                    "A {} {} 0 {},{} {}",
                    r, r, *large_arc as u8, *sweep as u8, to
                )
            }
            PathCommand::Close => write!(f, "Z"),
        }
    }
}

/// An ordered command list forming one path `d` attribute.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PathData {
    commands: Vec<PathCommand>,
}

impl PathData {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a path at `p`.
    pub fn move_to(mut self, p: Point2D) -> Self {
        self.commands.push(PathCommand::MoveTo(p));
        self
    }

    pub fn line_to(mut self, p: Point2D) -> Self {
        self.commands.push(PathCommand::LineTo(p));
        self
    }

    /// Circular arc of `radius` to `to` (small arc).
    pub fn arc_to(mut self, radius: f64, sweep: bool, to: Point2D) -> Self {
        self.commands.push(PathCommand::Arc {
            radius,
            large_arc: false,
            sweep,
            to,
        });
        self
    }

    /// Circular arc of `radius` to `to` taking the large way round.
    pub fn large_arc_to(mut self, radius: f64, sweep: bool, to: Point2D) -> Self {
        self.commands.push(PathCommand::Arc {
            radius,
            large_arc: true,
            sweep,
            to,
        });
        self
    }

    pub fn close(mut self) -> Self {
        self.commands.push(PathCommand::Close);
        self
    }

    /// Closed straight-edged path through `points` in order.
    pub fn polyline_closed(points: &[Point2D]) -> Self {
        let mut iter = points.iter();
        let mut path = PathData::new();
        if let Some(first) = iter.next() {
            path = path.move_to(*first);
            for p in iter {
                path = path.line_to(*p);
            }
            path = path.close();
        }
        path
    }

    pub fn commands(&self) -> &[PathCommand] {
        &self.commands
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Sweep flags of every arc command in order.
    pub fn sweep_flags(&self) -> Vec<u8> {
        self.commands
            .iter()
            .filter_map(|c| match c {
                PathCommand::Arc { sweep, .. } => Some(*sweep as u8),
                _ => None,
            })
            .collect()
    }
}

impl fmt::Display for PathData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, command) in self.commands.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{}", command)?;
        }
        Ok(())
    }
}
