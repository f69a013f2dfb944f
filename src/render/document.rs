//! SVG markup assembly.
//!
//! Generators build `Element`s and collect them in an `SvgDocument`, which
//! owns the view box and the `<defs>` section.

use std::fmt::Write as _;

use crate::path::PathData;
use crate::types::{round2, Colour, Style};

const SVG_NS: &str = "http://www.w3.org/2000/svg";

/// Id of the gradient emitted by `Style::gradient`.
pub const FILL_GRADIENT_ID: &str = "fill-gradient";

/// Id of the filter emitted by `Style::glow`.
pub const GLOW_FILTER_ID: &str = "glow";

/// A single markup element with attributes and child elements.
#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    name: &'static str,
    attrs: Vec<(&'static str, String)>,
    children: Vec<Element>,
    text: Option<String>,
}

impl Element {
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            attrs: Vec::new(),
            children: Vec::new(),
            text: None,
        }
    }

    /// A `<path>` element for the given path data.
    pub fn path(d: &PathData) -> Self {
        Self::new("path").attr("d", d)
    }

    /// A `<circle>` element; coordinates are rounded to 2 decimals.
    pub fn circle(cx: f64, cy: f64, r: f64) -> Self {
        Self::new("circle")
            .attr("cx", round2(cx))
            .attr("cy", round2(cy))
            .attr("r", round2(r))
    }

    pub fn attr(mut self, key: &'static str, value: impl ToString) -> Self {
        self.attrs.push((key, value.to_string()));
        self
    }

    pub fn child(mut self, child: Element) -> Self {
        self.children.push(child);
        self
    }

    pub fn children(mut self, children: impl IntoIterator<Item = Element>) -> Self {
        self.children.extend(children);
        self
    }

    /// Set escaped text content.
    pub fn text(mut self, text: &str) -> Self {
        self.text = Some(escape(text));
        self
    }

    /// Apply stroke and fill-rule from a style.
    pub fn stroked(self, style: &Style) -> Self {
        self.attr("stroke", style.stroke)
            .attr("stroke-width", style.stroke_width)
            .attr("fill-rule", style.fill_rule.as_str())
    }

    fn write_to(&self, out: &mut String, depth: usize) {
        let indent = "  ".repeat(depth);
        let _ = write!(out, "{}<{}", indent, self.name);
        for (key, value) in &self.attrs {
            let _ = write!(out, " {}=\"{}\"", key, escape(value));
        }

        match (&self.text, self.children.is_empty()) {
            (None, true) => out.push_str("/>\n"),
            (Some(text), true) => {
                let _ = writeln!(out, ">{}</{}>", text, self.name);
            }
            (text, false) => {
                out.push_str(">\n");
                if let Some(text) = text {
                    let _ = writeln!(out, "{}  {}", indent, text);
                }
                for child in &self.children {
                    child.write_to(out, depth + 1);
                }
                let _ = writeln!(out, "{}</{}>", indent, self.name);
            }
        }
    }
}

impl std::fmt::Display for Element {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut out = String::new();
        self.write_to(&mut out, 0);
        f.write_str(out.trim_end())
    }
}

/// A complete SVG document with a square view box centred on the origin.
#[derive(Debug, Clone)]
pub struct SvgDocument {
    view_box: f64,
    defs: Vec<Element>,
    body: Vec<Element>,
}

impl SvgDocument {
    pub fn new(view_box: f64) -> Self {
        Self {
            view_box,
            defs: Vec::new(),
            body: Vec::new(),
        }
    }

    /// Create a document with the defs a style asks for.
    pub fn styled(style: &Style) -> Self {
        let mut doc = Self::new(style.view_box);
        if style.gradient {
            doc.add_def(linear_gradient(
                FILL_GRADIENT_ID,
                style.fill,
                style.fill.lighten(40.0),
            ));
        }
        if style.glow {
            doc.add_def(glow_filter(GLOW_FILTER_ID));
        }
        doc
    }

    pub fn add_def(&mut self, def: Element) {
        self.defs.push(def);
    }

    pub fn push(&mut self, element: Element) {
        self.body.push(element);
    }

    pub fn extend(&mut self, elements: impl IntoIterator<Item = Element>) {
        self.body.extend(elements);
    }

    /// Render the document to markup.
    pub fn finish(self) -> String {
        let half = round2(self.view_box / 2.0);
        let size = round2(self.view_box);
        let mut root = Element::new("svg")
            .attr("xmlns", SVG_NS)
            .attr("viewBox", format!("{} {} {} {}", -half + 0.0, -half + 0.0, size, size))
            .attr("width", size)
            .attr("height", size);

        if !self.defs.is_empty() {
            root = root.child(Element::new("defs").children(self.defs));
        }

        let mut out = String::new();
        root.children(self.body).write_to(&mut out, 0);
        out
    }
}

/// The fill value a style asks for: its colour or the gradient reference.
pub fn fill_value(style: &Style) -> String {
    if style.gradient {
        format!("url(#{})", FILL_GRADIENT_ID)
    } else {
        style.fill.to_string()
    }
}

/// Vertical two-stop linear gradient.
pub fn linear_gradient(id: &str, from: Colour, to: Colour) -> Element {
    Element::new("linearGradient")
        .attr("id", id)
        .attr("x1", "0")
        .attr("y1", "0")
        .attr("x2", "0")
        .attr("y2", "1")
        .child(
            Element::new("stop")
                .attr("offset", "0%")
                .attr("stop-color", from),
        )
        .child(
            Element::new("stop")
                .attr("offset", "100%")
                .attr("stop-color", to),
        )
}

/// Soft glow: blurred copy merged under the source graphic.
pub fn glow_filter(id: &str) -> Element {
    Element::new("filter")
        .attr("id", id)
        .attr("x", "-20%")
        .attr("y", "-20%")
        .attr("width", "140%")
        .attr("height", "140%")
        .child(
            Element::new("feGaussianBlur")
                .attr("stdDeviation", "4")
                .attr("result", "blur"),
        )
        .child(
            Element::new("feMerge")
                .child(Element::new("feMergeNode").attr("in", "blur"))
                .child(Element::new("feMergeNode").attr("in", "SourceGraphic")),
        )
}

/// Wrap elements in a group that rotates continuously about `(cx, cy)`,
/// one full turn every `seconds`.
pub fn spin_group(children: Vec<Element>, seconds: f64, cx: f64, cy: f64) -> Element {
    let (cx, cy) = (round2(cx), round2(cy));
    Element::new("g")
        .child(
            Element::new("animateTransform")
                .attr("attributeName", "transform")
                .attr("type", "rotate")
                .attr("from", format!("0 {} {}", cx, cy))
                .attr("to", format!("360 {} {}", cx, cy))
                .attr("dur", format!("{}s", seconds))
                .attr("repeatCount", "indefinite"),
        )
        .children(children)
}

/// Escape text for use in markup content and attribute values.
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    out
}
