//! Configuration types for Lanechart diagram layout.
//!
//! All types implement [`serde::Deserialize`] for loading from external
//! sources such as the CLI's TOML config file.
//!
//! # Overview
//!
//! - [`AppConfig`] - Top-level application configuration combining layout and sizing settings.
//! - [`LayoutConfig`] - The diagram's working width and text size.
//! - [`SizingConfig`] - Per-measurement ratio overrides (re-exported from the core).
//!
//! # Example
//!
//! ```
//! # use lanechart::config::AppConfig;
//! let config = AppConfig::default();
//! assert_eq!(config.layout().width(), 2000.0);
//! assert_eq!(config.layout().font_height(), 20.0);
//! ```

use serde::Deserialize;

pub use lanechart_core::sizing::SizingConfig;

/// Top-level application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Layout configuration section.
    #[serde(default)]
    layout: LayoutConfig,

    /// Sizing overrides section.
    #[serde(default)]
    sizing: SizingConfig,
}

impl AppConfig {
    /// Creates a new [`AppConfig`] with the specified layout and sizing configurations.
    pub fn new(layout: LayoutConfig, sizing: SizingConfig) -> Self {
        Self { layout, sizing }
    }

    /// Returns the layout configuration.
    pub fn layout(&self) -> &LayoutConfig {
        &self.layout
    }

    /// Returns the sizing overrides.
    pub fn sizing(&self) -> &SizingConfig {
        &self.sizing
    }
}

/// Dimensions of the coordinate space diagrams are laid out in.
///
/// The width is an arbitrary working width; renderers are free to scale it.
/// The font height, from which every other distance is derived, is
/// `width * text_size_ratio`.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    width: f32,
    text_size_ratio: f32,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            width: 2000.0,
            text_size_ratio: 0.01,
        }
    }
}

impl LayoutConfig {
    /// Creates a new [`LayoutConfig`].
    ///
    /// # Arguments
    ///
    /// * `width` - Working width of the diagram.
    /// * `text_size_ratio` - Font height as a fraction of the width.
    pub fn new(width: f32, text_size_ratio: f32) -> Self {
        Self {
            width,
            text_size_ratio,
        }
    }

    /// Returns the working width.
    pub fn width(&self) -> f32 {
        self.width
    }

    /// Returns the font height as a fraction of the width.
    pub fn text_size_ratio(&self) -> f32 {
        self.text_size_ratio
    }

    /// Returns the font height.
    pub fn font_height(&self) -> f32 {
        self.width * self.text_size_ratio
    }
}
