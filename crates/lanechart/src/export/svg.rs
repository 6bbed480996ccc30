//! SVG rendering of laid-out diagrams.
//!
//! Every primitive maps onto one SVG element: lines to `<line>` (dashed ones
//! get a `stroke-dasharray` from the diagram's dash measurements), filled
//! polygons to `<polygon>` and labels to `<text>`, with the justification
//! mapped to `text-anchor` and `dominant-baseline`.

use std::io::Write;

use log::{debug, info};
use svg::{Document, node::element as svg_element};

use lanechart_core::draw::{FilledPoly, HorizontalJustification, Label, Line, VerticalJustification};

use super::{Error, Exporter};
use crate::layout::Diagram;

const FONT_FAMILY: &str = "Arial";
const STROKE_COLOR: &str = "black";
const BACKGROUND_COLOR: &str = "white";

/// Stroke width as a fraction of the font height.
const STROKE_WIDTH_RATIO: f32 = 0.08;

/// Writes diagrams as SVG documents to a [`Write`] sink.
///
/// # Examples
///
/// ```rust,no_run
/// use lanechart::{DiagramBuilder, export::{Exporter, svg::SvgExporter}};
///
/// let builder = DiagramBuilder::default();
/// let statements = builder.parse("lane A App").expect("Failed to parse");
/// let diagram = builder.build(&statements).expect("Failed to lay out");
///
/// let mut out = Vec::new();
/// SvgExporter::new(&mut out)
///     .export_diagram(&diagram)
///     .expect("Failed to export");
/// ```
pub struct SvgExporter<W: Write> {
    writer: W,
}

impl<W: Write> SvgExporter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    /// Consumes the exporter and returns the sink.
    pub fn into_inner(self) -> W {
        self.writer
    }

    /// Builds the SVG document for `diagram`.
    fn render_document(diagram: &Diagram) -> Document {
        let width = diagram.width();
        let height = diagram.height();
        let stroke_width = diagram.font_height() * STROKE_WIDTH_RATIO;
        let dash_array = format!("{} {}", diagram.dash_len(), diagram.dash_gap());

        let background = svg_element::Rectangle::new()
            .set("x", 0)
            .set("y", 0)
            .set("width", width)
            .set("height", height)
            .set("fill", BACKGROUND_COLOR);

        let mut lines = svg_element::Group::new()
            .set("id", "lines")
            .set("stroke", STROKE_COLOR)
            .set("stroke-width", stroke_width);
        for line in diagram.primitives().lines() {
            lines = lines.add(render_line(line, &dash_array));
        }

        let mut polys = svg_element::Group::new()
            .set("id", "arrowheads")
            .set("fill", STROKE_COLOR);
        for poly in diagram.primitives().filled_polys() {
            polys = polys.add(render_poly(poly));
        }

        let mut labels = svg_element::Group::new()
            .set("id", "labels")
            .set("font-family", FONT_FAMILY)
            .set("fill", STROKE_COLOR);
        for label in diagram.primitives().labels() {
            labels = labels.add(render_label(label));
        }

        Document::new()
            .set("viewBox", format!("0 0 {width} {height}"))
            .set("width", width)
            .set("height", height)
            .add(background)
            .add(lines)
            .add(polys)
            .add(labels)
    }
}

impl<W: Write> Exporter for SvgExporter<W> {
    fn export_diagram(&mut self, diagram: &Diagram) -> Result<(), Error> {
        info!(
            lines = diagram.primitives().lines().len(),
            polys = diagram.primitives().filled_polys().len(),
            labels = diagram.primitives().labels().len();
            "Exporting diagram to SVG"
        );
        let doc = Self::render_document(diagram);
        svg::write(&mut self.writer, &doc)?;
        debug!("SVG document written");
        Ok(())
    }
}

fn render_line(line: &Line, dash_array: &str) -> svg_element::Line {
    let element = svg_element::Line::new()
        .set("x1", line.from().x())
        .set("y1", line.from().y())
        .set("x2", line.to().x())
        .set("y2", line.to().y());
    if line.is_dashed() {
        element.set("stroke-dasharray", dash_array)
    } else {
        element
    }
}

fn render_poly(poly: &FilledPoly) -> svg_element::Polygon {
    let points = poly
        .vertices()
        .iter()
        .map(|p| format!("{},{}", p.x(), p.y()))
        .collect::<Vec<_>>()
        .join(" ");
    svg_element::Polygon::new().set("points", points)
}

fn render_label(label: &Label) -> svg_element::Text {
    let anchor = match label.horizontal() {
        HorizontalJustification::Left => "start",
        HorizontalJustification::Centre => "middle",
        HorizontalJustification::Right => "end",
    };
    let baseline = match label.vertical() {
        VerticalJustification::Top => "hanging",
        VerticalJustification::Centre => "middle",
        VerticalJustification::Bottom => "text-after-edge",
    };
    svg_element::Text::new(label.text())
        .set("x", label.anchor().x())
        .set("y", label.anchor().y())
        .set("font-size", label.font_height())
        .set("text-anchor", anchor)
        .set("dominant-baseline", baseline)
}

#[cfg(test)]
mod tests {
    use lanechart_core::{
        identifier::Id,
        sizing::{Sizer, SizingConfig},
        statement::Statement,
    };

    use super::*;
    use crate::layout;

    fn export(statements: &[Statement]) -> String {
        let sizer = Sizer::new(1000.0, 10.0, 2, SizingConfig::default());
        let diagram = layout::build(statements, &sizer).unwrap();

        let mut exporter = SvgExporter::new(Vec::new());
        exporter.export_diagram(&diagram).unwrap();
        String::from_utf8(exporter.into_inner()).unwrap()
    }

    #[test]
    fn test_document_is_complete() {
        let svg = export(&[Statement::title(["Checkout"])]);
        assert!(svg.contains("<svg"));
        assert!(svg.contains("</svg>"));
        assert!(svg.contains("viewBox=\"0 0 1000"));
        assert!(svg.contains("Checkout"));
    }

    #[test]
    fn test_dashed_lines_carry_dash_array() {
        let (a, b) = (Id::new("A"), Id::new("B"));
        let svg = export(&[
            Statement::lane(a, ["App"]),
            Statement::lane(b, ["API"]),
            Statement::dash(b, a, ["reply"]),
        ]);
        // dash length 0.5 and gap 0.25 of a 10 unit font
        assert!(svg.contains("stroke-dasharray=\"5 2.5\""));
        assert!(svg.contains("<polygon"));
    }

    #[test]
    fn test_justification_maps_to_text_anchor() {
        let label = Label::new(
            "x",
            10.0,
            lanechart_core::geometry::Point::new(1.0, 2.0),
            HorizontalJustification::Left,
            VerticalJustification::Top,
        );
        let text = render_label(&label).to_string();
        assert!(text.contains("text-anchor=\"start\""));
        assert!(text.contains("dominant-baseline=\"hanging\""));
    }
}
