//! Lanechart - sequence diagrams from a line-oriented script.
//!
//! Parsing, layout, and rendering for Lanechart scripts. A script declares
//! lanes and the interactions between them, one statement per line; the
//! layout engine stacks everything vertically, tracks each lane's activity
//! boxes and cuts the lifelines around whatever crosses them.

pub mod config;
pub mod export;

mod error;
mod layout;

pub use lanechart_core::{draw, geometry, identifier, sizing, statement};

pub use error::LanechartError;
pub use layout::{BoxError, Diagram, LayoutError};

use log::{debug, info, trace};

use lanechart_core::{
    sizing::Sizer,
    statement::{Keyword, Statement},
};

use config::AppConfig;
use export::Exporter;

/// Builder for parsing, laying out and rendering Lanechart diagrams.
///
/// Every call works on fresh state, so one builder can be reused for any
/// number of diagrams.
///
/// # Examples
///
/// ```rust,no_run
/// use lanechart::{DiagramBuilder, config::AppConfig};
///
/// let source = "title Login\nlane A App\nlane B API\nfull AB login()";
///
/// let builder = DiagramBuilder::new(AppConfig::default());
///
/// // Parse source to statements
/// let statements = builder.parse(source)
///     .expect("Failed to parse");
///
/// // Lay out and render
/// let diagram = builder.build(&statements)
///     .expect("Failed to lay out");
/// let svg = builder.render_svg(&diagram)
///     .expect("Failed to render");
/// ```
#[derive(Default)]
pub struct DiagramBuilder {
    config: AppConfig,
}

impl DiagramBuilder {
    /// Create a new diagram builder with the given configuration.
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }

    /// Parse source code into statements.
    ///
    /// # Errors
    ///
    /// Returns [`LanechartError::Parse`] with every problem found in the
    /// script.
    ///
    /// # Examples
    ///
    /// ```rust,no_run
    /// use lanechart::DiagramBuilder;
    ///
    /// let builder = DiagramBuilder::default();
    /// let statements = builder.parse("lane A App\nlane B API\nfull AB call")
    ///     .expect("Failed to parse script");
    /// assert_eq!(statements.len(), 3);
    /// ```
    pub fn parse(&self, source: &str) -> Result<Vec<Statement>, LanechartError> {
        info!("Parsing script");

        let statements = lanechart_parser::parse(source)
            .map_err(|err| LanechartError::new_parse_error(err, source))?;

        debug!(statements = statements.len(); "Script parsed successfully");
        trace!(statements:?; "Parsed statements");

        Ok(statements)
    }

    /// Lay out statements into a [`Diagram`].
    ///
    /// # Errors
    ///
    /// Returns [`LanechartError::Layout`] if the statements break a layout
    /// invariant, such as a `stop` for a lane with no activity box in
    /// progress.
    pub fn build(&self, statements: &[Statement]) -> Result<Diagram, LanechartError> {
        let layout_config = self.config.layout();
        let lane_count = statements
            .iter()
            .filter(|s| s.keyword() == Keyword::Lane)
            .count();

        info!(
            lane_count,
            width = layout_config.width(),
            font_height = layout_config.font_height();
            "Building diagram"
        );
        let sizer = Sizer::new(
            layout_config.width(),
            layout_config.font_height(),
            lane_count,
            self.config.sizing().clone(),
        );

        let diagram = layout::build(statements, &sizer)?;
        debug!(height = diagram.height(); "Diagram built successfully");
        Ok(diagram)
    }

    /// Render a laid-out diagram to an SVG string.
    ///
    /// # Errors
    ///
    /// Returns [`LanechartError::Export`] if rendering fails.
    pub fn render_svg(&self, diagram: &Diagram) -> Result<String, LanechartError> {
        let mut exporter = export::svg::SvgExporter::new(Vec::new());
        exporter.export_diagram(diagram)?;

        let svg_string = String::from_utf8(exporter.into_inner())
            .map_err(|err| export::Error::Render(err.to_string()))?;

        info!("SVG rendered successfully");
        Ok(svg_string)
    }
}
