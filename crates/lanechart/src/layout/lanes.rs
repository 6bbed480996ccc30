//! Horizontal placement of lanes.
//!
//! Lanes sit side by side in declaration order, each with a title box of the
//! same width and a lifeline running down its centre.

use indexmap::IndexMap;
use log::debug;

use lanechart_core::{
    identifier::Id,
    sizing::{Measurement, SizingProvider},
    statement::{Keyword, Statement},
};

/// Horizontal extent of one lane's title box.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LaneGeometry {
    left: f32,
    centre: f32,
    right: f32,
}

impl LaneGeometry {
    pub fn left(&self) -> f32 {
        self.left
    }

    /// Returns the x coordinate of the lifeline
    pub fn centre(&self) -> f32 {
        self.centre
    }

    pub fn right(&self) -> f32 {
        self.right
    }
}

/// Every declared lane, in declaration order.
#[derive(Debug, Clone, Default)]
pub struct LaneLayout {
    lanes: IndexMap<Id, LaneGeometry>,
    max_label_lines: usize,
}

impl LaneLayout {
    /// Places the lanes declared by the `lane` statements in `statements`.
    ///
    /// A lane declared twice keeps its first position.
    pub fn new(statements: &[Statement], sizing: &dyn SizingProvider) -> Self {
        let box_width = sizing.get(Measurement::TitleBoxWidth);
        let pitch = sizing.get(Measurement::LifelinePitch);
        let first_centre = sizing.get(Measurement::FirstTitleBoxPadL) + 0.5 * box_width;

        let mut lanes = IndexMap::new();
        let mut max_label_lines = 0;
        for statement in statements.iter().filter(|s| s.keyword() == Keyword::Lane) {
            let Some(lane) = statement.lane_at(0) else {
                continue;
            };
            max_label_lines = max_label_lines.max(statement.label_lines().len());

            let index = lanes.len();
            let centre = first_centre + index as f32 * pitch;
            lanes.entry(lane).or_insert(LaneGeometry {
                left: centre - 0.5 * box_width,
                centre,
                right: centre + 0.5 * box_width,
            });
        }

        debug!(lanes = lanes.len(), max_label_lines, pitch; "Lanes placed");
        Self {
            lanes,
            max_label_lines,
        }
    }

    /// Returns the geometry of `lane`, if it was declared.
    pub fn get(&self, lane: Id) -> Option<LaneGeometry> {
        self.lanes.get(&lane).copied()
    }

    /// Returns every lane id in declaration order.
    pub fn ids(&self) -> Vec<Id> {
        self.lanes.keys().copied().collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Id, LaneGeometry)> + '_ {
        self.lanes.iter().map(|(id, geometry)| (*id, *geometry))
    }

    pub fn len(&self) -> usize {
        self.lanes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lanes.is_empty()
    }

    /// Height shared by every title box: enough for the longest label.
    pub fn title_box_height(&self, sizing: &dyn SizingProvider) -> f32 {
        sizing.get(Measurement::TitleBoxTextPadT)
            + sizing.get(Measurement::TitleBoxTextPadB)
            + self.max_label_lines as f32 * sizing.get(Measurement::FontHeight)
    }
}

#[cfg(test)]
mod tests {
    use float_cmp::assert_approx_eq;
    use lanechart_core::sizing::{Sizer, SizingConfig};

    use super::*;

    fn statements() -> Vec<Statement> {
        vec![
            Statement::title(["Checkout"]),
            Statement::lane(Id::new("A"), ["App"]),
            Statement::lane(Id::new("B"), ["Core", "API"]),
            Statement::lane(Id::new("C"), ["Store"]),
            Statement::full(Id::new("A"), Id::new("B"), ["call"]),
        ]
    }

    #[test]
    fn test_lanes_are_evenly_spaced_in_declaration_order() {
        let sizer = Sizer::new(2000.0, 20.0, 3, SizingConfig::default());
        let layout = LaneLayout::new(&statements(), &sizer);

        assert_eq!(layout.len(), 3);
        assert_eq!(layout.ids(), vec![Id::new("A"), Id::new("B"), Id::new("C")]);

        let a = layout.get(Id::new("A")).unwrap();
        let b = layout.get(Id::new("B")).unwrap();
        let c = layout.get(Id::new("C")).unwrap();
        assert!(a.centre() < b.centre() && b.centre() < c.centre());

        let pitch = sizer.get(Measurement::LifelinePitch);
        assert_approx_eq!(f32, b.centre() - a.centre(), pitch, epsilon = 0.001);
        assert_approx_eq!(f32, c.centre() - b.centre(), pitch, epsilon = 0.001);
        assert_approx_eq!(f32, a.left(), sizer.get(Measurement::FirstTitleBoxPadL));
        assert_approx_eq!(
            f32,
            c.right() + sizer.get(Measurement::FirstTitleBoxPadL),
            2000.0,
            epsilon = 0.01
        );
    }

    #[test]
    fn test_title_box_height_fits_longest_label() {
        let sizer = Sizer::new(2000.0, 20.0, 3, SizingConfig::default());
        let layout = LaneLayout::new(&statements(), &sizer);

        // 0.25 + 0.75 padding plus two lines of text
        assert_approx_eq!(f32, layout.title_box_height(&sizer), 60.0);
    }

    #[test]
    fn test_unknown_lane() {
        let sizer = Sizer::new(2000.0, 20.0, 0, SizingConfig::default());
        let layout = LaneLayout::new(&[], &sizer);
        assert!(layout.is_empty());
        assert_eq!(layout.get(Id::new("A")), None);
    }
}
