//! Vertical bands that lifelines must not be drawn through.
//!
//! Interaction labels and lines run horizontally between two lanes. Every
//! lifeline they cross, the two end lanes included, must leave a gap for
//! them. A zone tagged `(A, A)` belongs to a self interaction and only
//! affects lane `A`.

use lanechart_core::{geometry::Segment, identifier::Id};

/// A vertical band claimed by the interaction between two lanes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NoGoZone {
    segment: Segment,
    lane_a: Id,
    lane_b: Id,
}

impl NoGoZone {
    pub fn new(segment: Segment, lane_a: Id, lane_b: Id) -> Self {
        Self {
            segment,
            lane_a,
            lane_b,
        }
    }

    pub fn segment(&self) -> Segment {
        self.segment
    }

    /// Returns the two lanes the zone was registered for, in registration order.
    pub fn lanes(&self) -> (Id, Id) {
        (self.lane_a, self.lane_b)
    }

    /// Returns true if the zone crosses the lane at `index`.
    ///
    /// `lanes` lists every lane in declaration order. A zone whose lanes are
    /// not listed crosses nothing.
    fn crosses(&self, index: usize, lanes: &[Id]) -> bool {
        let position = |lane: Id| lanes.iter().position(|candidate| *candidate == lane);
        match (position(self.lane_a), position(self.lane_b)) {
            (Some(a), Some(b)) => (a.min(b)..=a.max(b)).contains(&index),
            _ => false,
        }
    }
}

/// Append-only registry of the no-go zones of one diagram.
#[derive(Debug, Clone, Default)]
pub struct NoGoZoneRegistry {
    zones: Vec<NoGoZone>,
}

impl NoGoZoneRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records that the interaction between `lane_a` and `lane_b` occupies `segment`.
    pub fn register(&mut self, segment: Segment, lane_a: Id, lane_b: Id) {
        self.zones.push(NoGoZone::new(segment, lane_a, lane_b));
    }

    /// Returns every registered zone
    pub fn zones(&self) -> &[NoGoZone] {
        &self.zones
    }

    /// Returns the segments of the zones that cross `lifeline`.
    ///
    /// `lanes` lists every lane in declaration order; a lifeline missing from
    /// it has no applicable zones.
    pub fn applicable_to(&self, lifeline: Id, lanes: &[Id]) -> Vec<Segment> {
        let Some(index) = lanes.iter().position(|lane| *lane == lifeline) else {
            return Vec::new();
        };
        self.zones
            .iter()
            .filter(|zone| zone.crosses(index, lanes))
            .map(NoGoZone::segment)
            .collect()
    }
}
