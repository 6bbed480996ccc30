//! Geometric primitives for sequence diagram layout.
//!
//! # Overview
//!
//! - [`Point`] - A 2D coordinate in diagram space
//! - [`Segment`] - A half-open interval `[start, end)` on the vertical axis
//! - [`InvalidInterval`] - The error for a segment whose end precedes its start
//! - [`arrow_head`] / [`shorten_line_by`] - Helpers for horizontal interaction lines
//!
//! # Coordinate System
//!
//! Lanechart uses the same orientation as SVG:
//!
//! ```text
//!   (0,0) ────────► +X
//!     │
//!     │
//!     ▼
//!    +Y   (the diagram grows downwards as the tidemark advances)
//! ```

use std::cmp::Ordering;

use thiserror::Error;

/// A 2D point in diagram coordinate space.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Point {
    x: f32,
    y: f32,
}

impl Point {
    /// Creates a new point with the specified coordinates
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Returns the x-coordinate of the point
    pub fn x(self) -> f32 {
        self.x
    }

    /// Returns the y-coordinate of the point
    pub fn y(self) -> f32 {
        self.y
    }
}

/// Error returned when a [`Segment`] would end before it starts.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
#[error("invalid interval: end {end} precedes start {start}")]
pub struct InvalidInterval {
    /// The requested start coordinate.
    pub start: f32,
    /// The requested end coordinate.
    pub end: f32,
}

/// A half-open vertical interval `[start, end)`.
///
/// Segments describe both occupied bands (activity boxes, no-go zones) and the
/// visible stretches of a lifeline. A segment always satisfies `start <= end`.
///
/// # Examples
///
/// ```
/// use lanechart_core::geometry::Segment;
///
/// let seg = Segment::new(10.0, 50.0).unwrap();
/// assert_eq!(seg.length(), 40.0);
/// assert!(Segment::new(50.0, 10.0).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    start: f32,
    end: f32,
}

impl Segment {
    /// Creates a segment spanning `[start, end)`.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidInterval`] if `end < start` or either bound is NaN.
    pub fn new(start: f32, end: f32) -> Result<Self, InvalidInterval> {
        if start <= end {
            Ok(Self { start, end })
        } else {
            Err(InvalidInterval { start, end })
        }
    }

    /// Returns the start coordinate
    pub fn start(self) -> f32 {
        self.start
    }

    /// Returns the end coordinate
    pub fn end(self) -> f32 {
        self.end
    }

    /// Returns `end - start`
    pub fn length(self) -> f32 {
        self.end - self.start
    }

    /// Returns true if `other` overlaps or touches this segment.
    ///
    /// Assumes `self.start <= other.start`, which holds when walking a sorted list.
    pub fn reaches(self, other: Segment) -> bool {
        other.start <= self.end
    }

    /// Returns the smallest segment covering both `self` and `other`.
    pub fn union(self, other: Segment) -> Segment {
        Segment {
            start: self.start.min(other.start),
            end: self.end.max(other.end),
        }
    }

    /// Total ordering by start, then by end.
    pub fn total_cmp(&self, other: &Segment) -> Ordering {
        self.start
            .total_cmp(&other.start)
            .then_with(|| self.end.total_cmp(&other.end))
    }
}

/// Moves both ends of a horizontal line towards each other by `delta`.
///
/// Interaction lines start and stop at the edge of the activity boxes rather
/// than at the lifeline centres. Works for either direction of travel.
pub fn shorten_line_by(delta: f32, from_x: f32, to_x: f32) -> (f32, f32) {
    if to_x >= from_x {
        (from_x + delta, to_x - delta)
    } else {
        (from_x - delta, to_x + delta)
    }
}

/// Computes the three vertices of a filled arrowhead.
///
/// The tip sits at `(to_x, y)` and the head points in the direction of travel
/// from `from_x` to `to_x`. `length` is measured along the line and `width` is
/// the full extent across it.
pub fn arrow_head(from_x: f32, to_x: f32, y: f32, length: f32, width: f32) -> [Point; 3] {
    let direction = if to_x >= from_x { 1.0 } else { -1.0 };
    let base_x = to_x - direction * length;
    let half_width = 0.5 * width;
    [
        Point::new(to_x, y),
        Point::new(base_x, y - half_width),
        Point::new(base_x, y + half_width),
    ]
}


#[cfg(test)]
mod proptest_tests {
    use proptest::prelude::*;

    use super::*;

    proptest! {
        #[test]
        fn segment_accepts_exactly_ordered_bounds(a in -1e6f32..1e6, b in -1e6f32..1e6) {
            prop_assert_eq!(Segment::new(a, b).is_ok(), a <= b);
        }

        #[test]
        fn union_covers_both(
            a in 0f32..1000.0, len_a in 0f32..500.0,
            b in 0f32..1000.0, len_b in 0f32..500.0,
        ) {
            let first = Segment::new(a, a + len_a).unwrap();
            let second = Segment::new(b, b + len_b).unwrap();
            let merged = first.union(second);

            prop_assert!(merged.start() <= first.start() && merged.start() <= second.start());
            prop_assert!(merged.end() >= first.end() && merged.end() >= second.end());
            prop_assert!(merged.length() >= first.length().max(second.length()));
        }

        #[test]
        fn shortened_line_keeps_direction(
            from in -1000f32..1000.0,
            to in -1000f32..1000.0,
            delta in 0f32..1.0,
        ) {
            prop_assume!((to - from).abs() > 2.0 * delta + 1.0);
            let (new_from, new_to) = shorten_line_by(delta, from, to);
            prop_assert_eq!(new_to >= new_from, to >= from);
        }
    }
}
