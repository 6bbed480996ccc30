//! Drawing primitives produced by the layout engine.
//!
//! The layout engine does not render anything itself. It emits a flat
//! [`Primitives`] collection of lines, filled polygons and single-line labels,
//! all in absolute diagram coordinates, which an exporter then turns into a
//! concrete format.
//!
//! Rectangles are emitted as four solid lines and multi-line labels as one
//! [`Label`] per line of text, so exporters only ever handle three shapes.

use crate::geometry::Point;

/// Horizontal placement of a label relative to its anchor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HorizontalJustification {
    Left,
    Centre,
    Right,
}

/// Vertical placement of a label relative to its anchor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VerticalJustification {
    Top,
    Centre,
    Bottom,
}

/// A straight line, solid or dashed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Line {
    from: Point,
    to: Point,
    dashed: bool,
}

impl Line {
    /// Creates a line between two points.
    pub fn new(from: Point, to: Point, dashed: bool) -> Self {
        Self { from, to, dashed }
    }

    /// Returns the start point
    pub fn from(&self) -> Point {
        self.from
    }

    /// Returns the end point
    pub fn to(&self) -> Point {
        self.to
    }

    /// Returns true for dashed lines
    pub fn is_dashed(&self) -> bool {
        self.dashed
    }

    /// Returns true if both ends share the same x coordinate.
    pub fn is_vertical(&self) -> bool {
        self.from.x() == self.to.x()
    }
}

/// A closed, filled polygon (used for arrowheads).
#[derive(Debug, Clone, PartialEq)]
pub struct FilledPoly {
    vertices: Vec<Point>,
}

impl FilledPoly {
    pub fn new(vertices: Vec<Point>) -> Self {
        Self { vertices }
    }

    /// Returns the polygon vertices in drawing order
    pub fn vertices(&self) -> &[Point] {
        &self.vertices
    }
}

/// One line of text anchored at a point.
#[derive(Debug, Clone, PartialEq)]
pub struct Label {
    text: String,
    font_height: f32,
    anchor: Point,
    horizontal: HorizontalJustification,
    vertical: VerticalJustification,
}

impl Label {
    /// Creates a label.
    pub fn new(
        text: impl Into<String>,
        font_height: f32,
        anchor: Point,
        horizontal: HorizontalJustification,
        vertical: VerticalJustification,
    ) -> Self {
        Self {
            text: text.into(),
            font_height,
            anchor,
            horizontal,
            vertical,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn font_height(&self) -> f32 {
        self.font_height
    }

    pub fn anchor(&self) -> Point {
        self.anchor
    }

    pub fn horizontal(&self) -> HorizontalJustification {
        self.horizontal
    }

    pub fn vertical(&self) -> VerticalJustification {
        self.vertical
    }
}

/// An ordered collection of drawing primitives.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Primitives {
    lines: Vec<Line>,
    filled_polys: Vec<FilledPoly>,
    labels: Vec<Label>,
}

impl Primitives {
    /// Creates an empty collection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns all lines in insertion order
    pub fn lines(&self) -> &[Line] {
        &self.lines
    }

    /// Returns all filled polygons in insertion order
    pub fn filled_polys(&self) -> &[FilledPoly] {
        &self.filled_polys
    }

    /// Returns all labels in insertion order
    pub fn labels(&self) -> &[Label] {
        &self.labels
    }

    /// Adds a line from `(x1, y1)` to `(x2, y2)`.
    pub fn add_line(&mut self, x1: f32, y1: f32, x2: f32, y2: f32, dashed: bool) {
        self.lines
            .push(Line::new(Point::new(x1, y1), Point::new(x2, y2), dashed));
    }

    /// Adds a filled polygon.
    pub fn add_filled_poly(&mut self, vertices: impl Into<Vec<Point>>) {
        self.filled_polys.push(FilledPoly::new(vertices.into()));
    }

    /// Adds a single label.
    pub fn add_label(&mut self, label: Label) {
        self.labels.push(label);
    }

    /// Adds a rectangle as four solid lines, clockwise from the top-left corner.
    pub fn add_rect(&mut self, left: f32, top: f32, right: f32, bottom: f32) {
        self.add_line(left, top, right, top, false);
        self.add_line(right, top, right, bottom, false);
        self.add_line(right, bottom, left, bottom, false);
        self.add_line(left, bottom, left, top, false);
    }

    /// Adds a multi-line label, one [`Label`] per line, stacked downwards from
    /// `first_row_y` and top-justified.
    pub fn add_rows_of_text(
        &mut self,
        x: f32,
        first_row_y: f32,
        font_height: f32,
        horizontal: HorizontalJustification,
        lines: &[String],
    ) {
        for (row, text) in lines.iter().enumerate() {
            let y = first_row_y + row as f32 * font_height;
            self.add_label(Label::new(
                text.as_str(),
                font_height,
                Point::new(x, y),
                horizontal,
                VerticalJustification::Top,
            ));
        }
    }
}
