//! Visible segments of a lifeline.
//!
//! A lifeline runs from the bottom of its title box to the bottom of the
//! diagram, broken wherever something else occupies it: its own activity
//! boxes and every no-go zone that crosses it. What remains is drawn as a
//! series of dashed segments.
//!
//! ```text
//!  top ┆            ┆ gap
//!      ┆            ┆
//!      ├──────┐     ─ zone (label + line of an interaction)
//!      │      │
//!      ├──────┘
//!      ┆            ┆ gap
//!     ┌┴┐           ─ activity box
//!     │ │
//!     └┬┘
//!      ┆            ┆ gap
//!  bot
//! ```

use log::trace;

use lanechart_core::{geometry::Segment, identifier::Id};

use super::no_go::NoGoZoneRegistry;

/// Computes the visible segments of `lifeline` between `top` and `bottom`.
///
/// The occupied intervals are the no-go zones that cross the lifeline plus
/// its `box_extents`. Gaps shorter than `min_seg_len` are dropped; a gap of
/// exactly `min_seg_len` is kept. The result is in ascending order.
pub fn assemble(
    lifeline: Id,
    top: f32,
    bottom: f32,
    min_seg_len: f32,
    no_go_zones: &NoGoZoneRegistry,
    box_extents: &[Segment],
    lanes: &[Id],
) -> Vec<Segment> {
    let mut occupied = no_go_zones.applicable_to(lifeline, lanes);
    occupied.extend_from_slice(box_extents);

    let segments = visible_gaps(top, bottom, min_seg_len, occupied);
    trace!(lifeline:% = lifeline, segments:? = segments; "Lifeline segments assembled");
    segments
}

/// Returns the gaps of `[top, bottom)` not covered by `occupied`.
fn visible_gaps(top: f32, bottom: f32, min_seg_len: f32, occupied: Vec<Segment>) -> Vec<Segment> {
    let mut gaps = Vec::new();
    let mut cursor = top;

    for interval in merge(occupied) {
        if interval.start() > cursor {
            gaps.extend(Segment::new(cursor, interval.start()).ok());
        }
        cursor = cursor.max(interval.end());
    }
    if bottom > cursor {
        gaps.extend(Segment::new(cursor, bottom).ok());
    }

    gaps.retain(|gap| gap.length() >= min_seg_len);
    gaps
}

/// Sorts `intervals` and merges those that overlap or touch.
fn merge(mut intervals: Vec<Segment>) -> Vec<Segment> {
    intervals.sort_by(Segment::total_cmp);

    let mut merged: Vec<Segment> = Vec::with_capacity(intervals.len());
    for interval in intervals {
        match merged.last_mut() {
            Some(last) if last.reaches(interval) => *last = last.union(interval),
            _ => merged.push(interval),
        }
    }
    merged
}


#[cfg(test)]
mod proptest_tests {
    use proptest::prelude::*;

    use super::*;

    fn interval() -> impl Strategy<Value = Segment> {
        (0.0f32..200.0, 0.0f32..50.0).prop_map(|(start, len)| {
            Segment::new(start, start + len).unwrap()
        })
    }

    fn is_covered(y: f32, intervals: &[Segment]) -> bool {
        intervals.iter().any(|s| s.start() <= y && y < s.end())
    }

    proptest! {
        #[test]
        fn merged_intervals_are_disjoint_and_sorted(intervals in prop::collection::vec(interval(), 0..20)) {
            let merged = merge(intervals.clone());
            for pair in merged.windows(2) {
                prop_assert!(pair[0].end() < pair[1].start());
            }
            // Every input interval lies inside one merged interval.
            for input in &intervals {
                prop_assert!(merged.iter().any(|m| m.start() <= input.start() && input.end() <= m.end()));
            }
        }

        #[test]
        fn gaps_and_occupied_tile_the_extent(
            intervals in prop::collection::vec(interval(), 0..20),
            samples in prop::collection::vec(0.0f32..250.0, 1..20),
        ) {
            let (top, bottom) = (0.0, 250.0);
            let gaps = visible_gaps(top, bottom, 0.0, intervals.clone());

            let mut tiles: Vec<Segment> = merge(intervals.clone())
                .into_iter()
                .filter_map(|m| Segment::new(m.start().max(top), m.end().min(bottom)).ok())
                .chain(gaps.iter().copied())
                .filter(|tile| tile.length() > 0.0)
                .collect();
            tiles.sort_by(Segment::total_cmp);

            prop_assert_eq!(tiles.first().map(|t| t.start()), Some(top));
            prop_assert_eq!(tiles.last().map(|t| t.end()), Some(bottom));
            for pair in tiles.windows(2) {
                prop_assert_eq!(pair[0].end(), pair[1].start());
            }
            let total: f32 = tiles.iter().map(|t| t.length()).sum();
            prop_assert!((total - (bottom - top)).abs() < 1e-3);

            for y in samples {
                if !is_covered(y, &intervals) {
                    prop_assert!(is_covered(y, &gaps), "uncovered {} is in no gap", y);
                }
            }
        }

        #[test]
        fn gaps_do_not_depend_on_input_order(
            intervals in prop::collection::vec(interval(), 0..20).prop_shuffle()
        ) {
            let mut reversed = intervals.clone();
            reversed.reverse();
            prop_assert_eq!(
                visible_gaps(0.0, 250.0, 0.1, intervals),
                visible_gaps(0.0, 250.0, 0.1, reversed)
            );
        }

        #[test]
        fn gaps_avoid_every_occupied_interval(
            intervals in prop::collection::vec(interval(), 0..20),
            min_seg_len in 0.0f32..5.0,
        ) {
            let gaps = visible_gaps(0.0, 250.0, min_seg_len, intervals.clone());
            for gap in &gaps {
                prop_assert!(gap.length() >= min_seg_len);
                prop_assert!(gap.start() >= 0.0 && gap.end() <= 250.0);
                let midpoint = 0.5 * (gap.start() + gap.end());
                prop_assert!(!is_covered(midpoint, &intervals));
            }
            for pair in gaps.windows(2) {
                prop_assert!(pair[0].end() <= pair[1].start());
            }
        }
    }
}
