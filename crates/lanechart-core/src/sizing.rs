//! Named scalar measurements used by the layout engine.
//!
//! Every distance the layout engine uses (paddings, arrow sizes, box widths,
//! the minimum visible lifeline segment, ...) is looked up by name through
//! the [`SizingProvider`] trait. The engine never computes a default itself.
//!
//! [`Sizer`] is the standard provider. Almost every measurement is a ratio of
//! the font height; lane title boxes are sized so that all lanes, the gaps
//! between them and the two side margins exactly fill the diagram width:
//!
//! ```text
//!  k·w   w   k·w   w   k·w   w   k·w        n lanes, gap ratio k
//! |<->|<--->|<->|<--->|<->|<--->|<->|       W = n·w + (n + 1)·k·w
//! ```
//!
//! Ratios can be overridden per measurement through [`SizingConfig`], which
//! deserializes from a table keyed by the snake-case measurement name:
//!
//! ```toml
//! [sizing]
//! arrow_len = 2.0
//! self_loop_height = 4.0
//! ```

use std::collections::HashMap;

use log::debug;
use serde::Deserialize;

/// A named scalar quantity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Measurement {
    /// Height of one line of text; the root of all other sizes.
    FontHeight,
    /// Working width of the whole diagram.
    DiagramWidth,
    DiagramPadT,
    DiagramPadB,
    /// Left/right inset of the outer frame.
    FramePadLR,
    FrameTitleTextPadT,
    FrameTitleTextPadB,
    FrameTitleTextPadL,
    FrameTitleBoxWidth,
    FrameTitleRectPadB,
    FrameInternalPadB,
    /// Width of every lane title box (derived from the lane count).
    TitleBoxWidth,
    /// Gap between title boxes as a fraction of their width.
    TitleBoxGapRatio,
    /// Distance between adjacent lifeline centres (derived).
    LifelinePitch,
    /// Left margin before the first title box (derived).
    FirstTitleBoxPadL,
    TitleBoxTextPadT,
    TitleBoxTextPadB,
    /// Space below the row of title boxes.
    TitleBoxPadB,
    /// Space between an interaction label and its line.
    InteractionLineTextPadB,
    /// Space claimed below an interaction line.
    InteractionLinePadB,
    /// Indent of a self-loop label from the loop's left edge.
    InteractionLineLabelIndent,
    ArrowLen,
    /// Arrowhead width as a fraction of its length.
    ArrowAspectRatio,
    /// Arrowhead width (derived).
    ArrowWidth,
    SelfLoopHeight,
    /// Self-loop width as a fraction of the lifeline pitch.
    SelfLoopWidthFactor,
    ActivityBoxWidth,
    /// How far an activity box starts above the interaction that opens it,
    /// and extends below the last tidemark when closed implicitly.
    ActivityBoxVerticalOverlap,
    /// Space claimed after an explicit `stop`.
    IndividualStoppedBoxPadB,
    /// Space claimed after the implicitly closed activity boxes.
    FinalizedActivityBoxesPadB,
    /// Visible lifeline gaps shorter than this are not drawn.
    MinLifelineSegLength,
    DashLineDashLen,
    DashLineDashGap,
}

impl Measurement {
    /// The ratio used when no override is configured.
    ///
    /// Derived measurements return `0.0`; their value never comes from a ratio.
    pub fn default_ratio(self) -> f32 {
        match self {
            Self::DiagramPadT | Self::DiagramPadB => 1.0,
            Self::FramePadLR => 0.5,
            Self::FrameTitleTextPadT | Self::FrameTitleTextPadB | Self::FrameTitleTextPadL => 0.5,
            Self::FrameTitleBoxWidth => 12.0,
            Self::FrameTitleRectPadB => 1.0,
            Self::FrameInternalPadB => 0.5,
            Self::TitleBoxGapRatio => 0.25,
            Self::TitleBoxTextPadT => 0.25,
            Self::TitleBoxTextPadB => 0.75,
            Self::TitleBoxPadB => 0.5,
            Self::InteractionLineTextPadB => 0.5,
            Self::InteractionLinePadB => 0.5,
            Self::InteractionLineLabelIndent => 0.5,
            Self::ArrowLen => 1.5,
            Self::ArrowAspectRatio => 0.4,
            Self::SelfLoopHeight => 3.0,
            Self::SelfLoopWidthFactor => 0.25,
            Self::ActivityBoxWidth => 1.0,
            Self::ActivityBoxVerticalOverlap => 0.25,
            Self::IndividualStoppedBoxPadB => 0.5,
            Self::FinalizedActivityBoxesPadB => 0.5,
            Self::MinLifelineSegLength => 0.1,
            Self::DashLineDashLen => 0.5,
            Self::DashLineDashGap => 0.25,
            Self::FontHeight
            | Self::DiagramWidth
            | Self::TitleBoxWidth
            | Self::LifelinePitch
            | Self::FirstTitleBoxPadL
            | Self::ArrowWidth => 0.0,
        }
    }
}

/// Read-only lookup of named measurements.
pub trait SizingProvider {
    /// Returns the value of `measurement` in diagram units.
    fn get(&self, measurement: Measurement) -> f32;
}

/// Per-measurement ratio overrides.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(transparent)]
pub struct SizingConfig {
    ratios: HashMap<Measurement, f32>,
}

impl SizingConfig {
    /// Returns a copy of this config with `measurement`'s ratio set to `ratio`.
    pub fn with_ratio(mut self, measurement: Measurement, ratio: f32) -> Self {
        self.ratios.insert(measurement, ratio);
        self
    }

    /// Returns the configured ratio for `measurement`, falling back to its default.
    pub fn ratio(&self, measurement: Measurement) -> f32 {
        self.ratios
            .get(&measurement)
            .copied()
            .unwrap_or_else(|| measurement.default_ratio())
    }
}

/// The standard [`SizingProvider`], proportional to the font height.
#[derive(Debug, Clone)]
pub struct Sizer {
    width: f32,
    font_height: f32,
    lane_count: usize,
    config: SizingConfig,
}

impl Sizer {
    /// Creates a sizer for a diagram of `width` with `lane_count` lanes.
    pub fn new(width: f32, font_height: f32, lane_count: usize, config: SizingConfig) -> Self {
        debug!(width, font_height, lane_count; "Sizer created");
        Self {
            width,
            font_height,
            lane_count,
            config,
        }
    }

    /// Width of each lane title box, so that boxes plus gaps fill the width.
    fn title_box_width(&self) -> f32 {
        let n = self.lane_count.max(1) as f32;
        let k = self.config.ratio(Measurement::TitleBoxGapRatio);
        self.width / (k * (n + 1.0) + n)
    }
}

impl SizingProvider for Sizer {
    fn get(&self, measurement: Measurement) -> f32 {
        match measurement {
            Measurement::FontHeight => self.font_height,
            Measurement::DiagramWidth => self.width,
            Measurement::TitleBoxWidth => self.title_box_width(),
            Measurement::LifelinePitch => {
                self.title_box_width() * (1.0 + self.config.ratio(Measurement::TitleBoxGapRatio))
            }
            Measurement::FirstTitleBoxPadL => {
                self.title_box_width() * self.config.ratio(Measurement::TitleBoxGapRatio)
            }
            Measurement::ArrowWidth => {
                self.get(Measurement::ArrowLen) * self.config.ratio(Measurement::ArrowAspectRatio)
            }
            Measurement::TitleBoxGapRatio
            | Measurement::ArrowAspectRatio
            | Measurement::SelfLoopWidthFactor => self.config.ratio(measurement),
            _ => self.font_height * self.config.ratio(measurement),
        }
    }
}
