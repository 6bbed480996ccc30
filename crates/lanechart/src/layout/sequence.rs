//! The sequencing pass: statements in, positioned primitives out.
//!
//! Layout walks the statements top to bottom while threading a *tidemark*,
//! the y coordinate below which nothing has been drawn yet. Each statement
//! keyword maps to a fixed list of actions; each action draws what it needs at
//! the current tidemark and returns the tidemark advanced past the space it
//! claimed (or unchanged).
//!
//! Alongside the drawing, the pass records which vertical bands each
//! interaction occupies ([`NoGoZoneRegistry`]) and where each lifeline's
//! activity boxes start and stop ([`BoxTracker`]). Once every statement has
//! been processed the boxes still open are closed, every box is drawn, and
//! each lifeline is drawn as the dashed segments left visible between them.

use indexmap::IndexMap;
use log::{debug, info, trace};

use lanechart_core::{
    draw::{HorizontalJustification, Primitives},
    geometry::{Segment, arrow_head, shorten_line_by},
    identifier::Id,
    sizing::{Measurement, SizingProvider},
    statement::{Keyword, Statement},
};

use super::{
    Diagram, LayoutError,
    activity::BoxTracker,
    frame::{Frame, title_lines},
    lanes::{LaneGeometry, LaneLayout},
    no_go::NoGoZoneRegistry,
    segments,
};

/// One step of the sequencing pass.
///
/// Takes the tidemark, returns it advanced by however much vertical space
/// the step claimed.
type Action = fn(f32, &Statement, &mut BuildState<'_>) -> Result<f32, LayoutError>;

const LANE_ACTIONS: &[Action] = &[lane_title_box, lifeline_top];
const FULL_ACTIONS: &[Action] = &[
    interaction_label,
    potentially_start_from_box,
    potentially_start_to_box,
    interaction_line,
];
const DASH_ACTIONS: &[Action] = &[interaction_label, potentially_start_to_box, interaction_line];
const SELF_ACTIONS: &[Action] = &[potentially_start_from_box, self_loop];
const STOP_ACTIONS: &[Action] = &[end_box];

/// Returns the actions a statement with `keyword` triggers, in order.
///
/// `title` has none; the frame draws it before the pass begins.
fn actions_for(keyword: Keyword) -> &'static [Action] {
    match keyword {
        Keyword::Lane => LANE_ACTIONS,
        Keyword::Full => FULL_ACTIONS,
        Keyword::Dash => DASH_ACTIONS,
        Keyword::SelfCall => SELF_ACTIONS,
        Keyword::Stop => STOP_ACTIONS,
        Keyword::Title => &[],
    }
}

/// Per-lifeline state.
#[derive(Debug, Default)]
struct Lifeline {
    top: Option<f32>,
    boxes: BoxTracker,
}

/// Everything one build owns.
struct BuildState<'a> {
    sizing: &'a dyn SizingProvider,
    lanes: &'a LaneLayout,
    lane_order: Vec<Id>,
    lifelines: IndexMap<Id, Lifeline>,
    no_go_zones: NoGoZoneRegistry,
    /// Vertical extent of the row of lane title boxes, once drawn.
    title_row: Option<Segment>,
    primitives: Primitives,
}

impl<'a> BuildState<'a> {
    fn new(sizing: &'a dyn SizingProvider, lanes: &'a LaneLayout) -> Self {
        let lane_order = lanes.ids();
        let lifelines = lane_order
            .iter()
            .map(|lane| (*lane, Lifeline::default()))
            .collect();
        Self {
            sizing,
            lanes,
            lane_order,
            lifelines,
            no_go_zones: NoGoZoneRegistry::new(),
            title_row: None,
            primitives: Primitives::new(),
        }
    }

    fn measure(&self, measurement: Measurement) -> f32 {
        self.sizing.get(measurement)
    }

    fn geometry(&self, lane: Id, statement: &Statement) -> Result<LaneGeometry, LayoutError> {
        self.lanes.get(lane).ok_or(LayoutError::UnknownLane {
            lane,
            line: statement.source_line(),
        })
    }

    fn lifeline_mut(&mut self, lane: Id, statement: &Statement) -> Result<&mut Lifeline, LayoutError> {
        self.lifelines.get_mut(&lane).ok_or(LayoutError::UnknownLane {
            lane,
            line: statement.source_line(),
        })
    }

    /// Opens a box on `lane` at `y` unless one is already open.
    fn potentially_start_box(
        &mut self,
        lane: Id,
        y: f32,
        statement: &Statement,
    ) -> Result<(), LayoutError> {
        let boxes = &mut self.lifeline_mut(lane, statement)?.boxes;
        if boxes.has_box_in_progress() {
            return Ok(());
        }
        boxes
            .add_starting_at(y)
            .map_err(|err| LayoutError::from_box_error(err, lane, statement.source_line()))?;
        trace!(lane:% = lane, y; "Activity box started");
        Ok(())
    }
}

fn lane_of(statement: &Statement, position: usize) -> Result<Id, LayoutError> {
    statement.lane_at(position).ok_or(LayoutError::MissingLane {
        keyword: statement.keyword(),
        line: statement.source_line(),
    })
}

/// Draws a lane's title box.
///
/// All title boxes share one row, fixed when the first lane is drawn and tall
/// enough for the longest title.
fn lane_title_box(tidemark: f32, s: &Statement, state: &mut BuildState<'_>) -> Result<f32, LayoutError> {
    let lane = lane_of(s, 0)?;
    let geometry = state.geometry(lane, s)?;

    let row = match state.title_row {
        Some(row) => row,
        None => {
            let row = Segment::new(tidemark, tidemark + state.lanes.title_box_height(state.sizing))?;
            state.title_row = Some(row);
            row
        }
    };

    let font_height = state.measure(Measurement::FontHeight);
    let first_row_y = row.end()
        - s.label_lines().len() as f32 * font_height
        - state.measure(Measurement::TitleBoxTextPadB);
    state
        .primitives
        .add_rect(geometry.left(), row.start(), geometry.right(), row.end());
    state.primitives.add_rows_of_text(
        geometry.centre(),
        first_row_y,
        font_height,
        HorizontalJustification::Centre,
        s.label_lines(),
    );

    Ok(tidemark.max(row.end() + state.measure(Measurement::TitleBoxPadB)))
}

/// Records where the lifeline starts; its extent is resolved at finalization.
fn lifeline_top(tidemark: f32, s: &Statement, state: &mut BuildState<'_>) -> Result<f32, LayoutError> {
    let lane = lane_of(s, 0)?;
    let top = state.title_row.map_or(tidemark, |row| row.end());
    state.lifeline_mut(lane, s)?.top = Some(top);
    debug!(lane:% = lane, top; "Lifeline registered");
    Ok(tidemark)
}

/// Draws the label above an interaction line, centred between the two lanes.
fn interaction_label(tidemark: f32, s: &Statement, state: &mut BuildState<'_>) -> Result<f32, LayoutError> {
    let (from, to) = (lane_of(s, 0)?, lane_of(s, 1)?);
    let from_x = state.geometry(from, s)?.centre();
    let to_x = state.geometry(to, s)?.centre();

    let font_height = state.measure(Measurement::FontHeight);
    state.primitives.add_rows_of_text(
        0.5 * (from_x + to_x),
        tidemark,
        font_height,
        HorizontalJustification::Centre,
        s.label_lines(),
    );

    let new_tidemark = tidemark
        + s.label_lines().len() as f32 * font_height
        + state.measure(Measurement::InteractionLineTextPadB);
    state
        .no_go_zones
        .register(Segment::new(tidemark, new_tidemark)?, from, to);
    Ok(new_tidemark)
}

/// Opens the source lane's box, backdated so it starts just above the label.
///
/// Claims no space: the label above already did.
fn potentially_start_from_box(
    tidemark: f32,
    s: &Statement,
    state: &mut BuildState<'_>,
) -> Result<f32, LayoutError> {
    let from = lane_of(s, 0)?;
    let start = tidemark - state.measure(Measurement::ActivityBoxVerticalOverlap);
    state.potentially_start_box(from, start, s)?;
    Ok(tidemark)
}

fn potentially_start_to_box(
    tidemark: f32,
    s: &Statement,
    state: &mut BuildState<'_>,
) -> Result<f32, LayoutError> {
    let to = lane_of(s, 1)?;
    state.potentially_start_box(to, tidemark, s)?;
    Ok(tidemark)
}

/// Draws an interaction line, edge to edge of the activity boxes, with its arrowhead.
fn interaction_line(tidemark: f32, s: &Statement, state: &mut BuildState<'_>) -> Result<f32, LayoutError> {
    let (from, to) = (lane_of(s, 0)?, lane_of(s, 1)?);
    let half_box = 0.5 * state.measure(Measurement::ActivityBoxWidth);
    let (from_x, to_x) = shorten_line_by(
        half_box,
        state.geometry(from, s)?.centre(),
        state.geometry(to, s)?.centre(),
    );

    let y = tidemark;
    let dashed = s.keyword() == Keyword::Dash;
    state.primitives.add_line(from_x, y, to_x, y, dashed);
    state.primitives.add_filled_poly(arrow_head(
        from_x,
        to_x,
        y,
        state.measure(Measurement::ArrowLen),
        state.measure(Measurement::ArrowWidth),
    ));

    let new_tidemark = tidemark + state.measure(Measurement::InteractionLinePadB);
    state
        .no_go_zones
        .register(Segment::new(tidemark, new_tidemark)?, from, to);
    Ok(new_tidemark)
}

/// Draws a self interaction: three sides of a rectangle leaving the right
/// edge of the activity box and returning to it, with the label inside.
///
/// The loop is at least `SelfLoopHeight` tall and grows to fit the label, so
/// nothing is drawn above the incoming tidemark.
fn self_loop(tidemark: f32, s: &Statement, state: &mut BuildState<'_>) -> Result<f32, LayoutError> {
    let lane = lane_of(s, 0)?;
    let centre = state.geometry(lane, s)?.centre();

    let font_height = state.measure(Measurement::FontHeight);
    let text_pad = state.measure(Measurement::InteractionLineTextPadB);
    let label_height = s.label_lines().len() as f32 * font_height;

    let left = centre + 0.5 * state.measure(Measurement::ActivityBoxWidth);
    let right = left
        + state.measure(Measurement::SelfLoopWidthFactor) * state.measure(Measurement::LifelinePitch);
    let top = tidemark;
    let height = state
        .measure(Measurement::SelfLoopHeight)
        .max(label_height + 2.0 * text_pad);
    let bottom = top + height;

    let arrow = arrow_head(
        right,
        left,
        bottom,
        state.measure(Measurement::ArrowLen),
        state.measure(Measurement::ArrowWidth),
    );
    let prims = &mut state.primitives;
    prims.add_line(left, top, right, top, false);
    prims.add_line(right, top, right, bottom, false);
    prims.add_line(right, bottom, left, bottom, false);
    prims.add_filled_poly(arrow);

    let first_row_y = bottom - label_height - text_pad;
    state.primitives.add_rows_of_text(
        left + state.measure(Measurement::InteractionLineLabelIndent),
        first_row_y,
        font_height,
        HorizontalJustification::Left,
        s.label_lines(),
    );

    let new_tidemark = bottom + state.measure(Measurement::InteractionLinePadB);
    state
        .no_go_zones
        .register(Segment::new(top, new_tidemark)?, lane, lane);
    Ok(new_tidemark)
}

/// Closes the lane's box at the tidemark for an explicit `stop`.
fn end_box(tidemark: f32, s: &Statement, state: &mut BuildState<'_>) -> Result<f32, LayoutError> {
    let lane = lane_of(s, 0)?;
    state
        .lifeline_mut(lane, s)?
        .boxes
        .terminate_at(tidemark)
        .map_err(|err| LayoutError::from_box_error(err, lane, s.source_line()))?;
    trace!(lane:% = lane, y = tidemark; "Activity box stopped");
    Ok(tidemark + state.measure(Measurement::IndividualStoppedBoxPadB))
}

/// Runs every statement's actions in order and returns the final tidemark.
fn forward_pass(
    mut tidemark: f32,
    statements: &[Statement],
    state: &mut BuildState<'_>,
) -> Result<f32, LayoutError> {
    for statement in statements {
        debug!(
            keyword = statement.keyword().as_str(),
            line = statement.source_line(),
            tidemark;
            "Dispatching statement"
        );
        for action in actions_for(statement.keyword()) {
            tidemark = action(tidemark, statement, state)?;
            trace!(tidemark; "Tidemark advanced");
        }
    }
    Ok(tidemark)
}

/// Closes the boxes still open, draws every box and every lifeline.
///
/// Returns the tidemark below the lowest box.
fn finalize(tidemark: f32, state: &mut BuildState<'_>) -> Result<f32, LayoutError> {
    let bottom = tidemark + state.measure(Measurement::ActivityBoxVerticalOverlap);
    for (lane, lifeline) in state.lifelines.iter_mut() {
        if lifeline.boxes.has_box_in_progress() {
            lifeline
                .boxes
                .terminate_at(bottom)
                .map_err(|err| LayoutError::from_box_error(err, *lane, 0))?;
            trace!(lane:% = lane, y = bottom; "Activity box closed at end of diagram");
        }
    }
    let tidemark = bottom + state.measure(Measurement::FinalizedActivityBoxesPadB);

    let half_box = 0.5 * state.measure(Measurement::ActivityBoxWidth);
    let min_seg_len = state.measure(Measurement::MinLifelineSegLength);
    for (lane, geometry) in state.lanes.iter() {
        let Some(lifeline) = state.lifelines.get(&lane) else {
            continue;
        };
        let centre = geometry.centre();

        for extent in lifeline.boxes.extents() {
            state.primitives.add_rect(
                centre - half_box,
                extent.start(),
                centre + half_box,
                extent.end(),
            );
        }

        let top = lifeline.top.unwrap_or(tidemark);
        let visible = segments::assemble(
            lane,
            top,
            tidemark,
            min_seg_len,
            &state.no_go_zones,
            lifeline.boxes.extents(),
            &state.lane_order,
        );
        for segment in visible {
            state
                .primitives
                .add_line(centre, segment.start(), centre, segment.end(), true);
        }
    }

    Ok(tidemark)
}

/// Lays out `statements` into a [`Diagram`].
///
/// # Errors
///
/// Returns a [`LayoutError`] when the statements break an invariant the
/// parser is expected to enforce, e.g. a `stop` for a lane with no activity
/// box in progress.
pub fn build(statements: &[Statement], sizing: &dyn SizingProvider) -> Result<Diagram, LayoutError> {
    info!(statements = statements.len(); "Laying out diagram");

    let lanes = LaneLayout::new(statements, sizing);
    let mut state = BuildState::new(sizing, &lanes);

    let tidemark = sizing.get(Measurement::DiagramPadT);
    let (frame, tidemark) = Frame::open(&title_lines(statements), tidemark, sizing, &mut state.primitives);

    let tidemark = forward_pass(tidemark, statements, &mut state)?;
    let tidemark = finalize(tidemark, &mut state)?;
    let tidemark = frame.close(tidemark, sizing, &mut state.primitives);

    let diagram = Diagram {
        width: sizing.get(Measurement::DiagramWidth),
        height: tidemark + sizing.get(Measurement::DiagramPadB),
        font_height: sizing.get(Measurement::FontHeight),
        dash_len: sizing.get(Measurement::DashLineDashLen),
        dash_gap: sizing.get(Measurement::DashLineDashGap),
        primitives: state.primitives,
    };
    info!(
        lanes = lanes.len(),
        zones = state.no_go_zones.zones().len(),
        height = diagram.height;
        "Layout complete"
    );
    Ok(diagram)
}

#[cfg(test)]
mod tests {
    use float_cmp::assert_approx_eq;
    use lanechart_core::sizing::{Sizer, SizingConfig};

    use super::*;
    use crate::layout::activity::BoxError;

    const FONT: f32 = 20.0;

    fn a() -> Id {
        Id::new("A")
    }

    fn b() -> Id {
        Id::new("B")
    }

    fn sizer_for(statements: &[Statement]) -> Sizer {
        let lanes = statements
            .iter()
            .filter(|s| s.keyword() == Keyword::Lane)
            .count();
        Sizer::new(2000.0, FONT, lanes, SizingConfig::default())
    }

    fn two_lanes() -> Vec<Statement> {
        vec![
            Statement::lane(a(), ["App"]).with_source_line(1),
            Statement::lane(b(), ["API"]).with_source_line(2),
        ]
    }

    fn sized(statements: &[Statement]) -> (Sizer, LaneLayout) {
        let sizer = sizer_for(statements);
        let lanes = LaneLayout::new(statements, &sizer);
        (sizer, lanes)
    }

    #[test]
    fn test_table_order() {
        assert_eq!(actions_for(Keyword::Full).len(), 4);
        assert_eq!(actions_for(Keyword::Dash).len(), 3);
        assert_eq!(actions_for(Keyword::SelfCall).len(), 2);
        assert_eq!(actions_for(Keyword::Stop).len(), 1);
        assert!(actions_for(Keyword::Title).is_empty());
    }

    #[test]
    fn test_title_row_is_shared_and_lifelines_start_below_it() {
        let statements = two_lanes();
        let (sizer, lanes) = sized(&statements);
        let mut state = BuildState::new(&sizer, &lanes);

        let tidemark = forward_pass(100.0, &statements, &mut state).unwrap();

        // Row is 0.25 + 0.75 + 1 line = 40 high, then 10 of padding.
        assert_approx_eq!(f32, tidemark, 150.0);
        assert_eq!(state.title_row, Some(Segment::new(100.0, 140.0).unwrap()));
        assert_eq!(state.lifelines[&a()].top, Some(140.0));
        assert_eq!(state.lifelines[&b()].top, Some(140.0));
        assert_eq!(state.primitives.lines().len(), 8);
    }

    #[test]
    fn test_full_interaction_claims_label_and_line_space() {
        let mut statements = two_lanes();
        statements.push(Statement::full(a(), b(), ["get(", "token)"]).with_source_line(3));
        let (sizer, lanes) = sized(&statements);
        let mut state = BuildState::new(&sizer, &lanes);

        let tidemark = forward_pass(0.0, &statements, &mut state).unwrap();

        // Title row ends at 40 (+10 pad = 50). Label: 2 lines + 10 pad = 50.
        // Line: 10 pad.
        assert_approx_eq!(f32, tidemark, 110.0);

        // From box backdated by the overlap, to box at the line.
        assert_eq!(state.lifelines[&a()].boxes.in_progress_start(), Some(95.0));
        assert_eq!(state.lifelines[&b()].boxes.in_progress_start(), Some(100.0));

        let zones = state.no_go_zones.zones();
        assert_eq!(zones.len(), 2);
        assert_eq!(zones[0].segment(), Segment::new(50.0, 100.0).unwrap());
        assert_eq!(zones[1].segment(), Segment::new(100.0, 110.0).unwrap());
        assert_eq!(zones[1].lanes(), (a(), b()));

        let line = state.primitives.lines().last().unwrap();
        assert!(!line.is_dashed());
        assert_approx_eq!(f32, line.from().y(), 100.0);
        let a_centre = lanes.get(a()).unwrap().centre();
        assert_approx_eq!(f32, line.from().x(), a_centre + 10.0);
        assert_eq!(state.primitives.filled_polys().len(), 1);
    }

    #[test]
    fn test_dash_only_opens_the_to_box() {
        let mut statements = two_lanes();
        statements.push(Statement::dash(b(), a(), ["reply"]));
        let (sizer, lanes) = sized(&statements);
        let mut state = BuildState::new(&sizer, &lanes);

        forward_pass(0.0, &statements, &mut state).unwrap();

        assert!(!state.lifelines[&b()].boxes.has_box_in_progress());
        assert!(state.lifelines[&a()].boxes.has_box_in_progress());
        assert!(state.primitives.lines().last().unwrap().is_dashed());
    }

    #[test]
    fn test_starting_a_box_is_idempotent() {
        let mut statements = two_lanes();
        statements.push(Statement::full(a(), b(), ["one"]));
        statements.push(Statement::full(a(), b(), ["two"]));
        let (sizer, lanes) = sized(&statements);
        let mut state = BuildState::new(&sizer, &lanes);

        forward_pass(0.0, &statements, &mut state).unwrap();

        // Both boxes keep the start from the first interaction.
        assert_eq!(state.lifelines[&a()].boxes.in_progress_start(), Some(75.0));
        assert_eq!(state.lifelines[&b()].boxes.in_progress_start(), Some(80.0));
    }

    #[test]
    fn test_self_loop_registers_zone_for_its_lane_only() {
        let mut statements = two_lanes();
        statements.push(Statement::self_call(a(), ["check"]));
        let (sizer, lanes) = sized(&statements);
        let mut state = BuildState::new(&sizer, &lanes);

        let tidemark = forward_pass(0.0, &statements, &mut state).unwrap();

        // Loop is 60 high starting at 50, then 10 of padding.
        assert_approx_eq!(f32, tidemark, 120.0);
        assert_eq!(state.lifelines[&a()].boxes.in_progress_start(), Some(45.0));

        let zones = state.no_go_zones.zones();
        assert_eq!(zones.len(), 1);
        assert_eq!(zones[0].lanes(), (a(), a()));
        assert_eq!(zones[0].segment(), Segment::new(50.0, 120.0).unwrap());

        // Label inside the loop, left-justified, one line above the bottom pad.
        let label = state.primitives.labels().last().unwrap();
        assert_eq!(label.text(), "check");
        assert_eq!(label.horizontal(), HorizontalJustification::Left);
        assert_approx_eq!(f32, label.anchor().y(), 80.0);
    }

    #[test]
    fn test_self_loop_grows_to_fit_a_tall_label() {
        let mut statements = two_lanes();
        statements.push(Statement::full(a(), b(), ["call"]));
        statements.push(Statement::self_call(b(), ["one", "two", "three", "four"]));
        let (sizer, lanes) = sized(&statements);
        let mut state = BuildState::new(&sizer, &lanes);

        let before = forward_pass(0.0, &statements[..3], &mut state).unwrap();
        assert_approx_eq!(f32, before, 90.0);
        let labels_before = state.primitives.labels().len();

        let tidemark = forward_pass(before, &statements[3..], &mut state).unwrap();

        // Four lines of 20 plus 10 of padding above and below: 100 high, +10.
        assert_approx_eq!(f32, tidemark, 200.0);
        let rows = &state.primitives.labels()[labels_before..];
        assert_eq!(rows.len(), 4);
        assert!(rows.iter().all(|row| row.anchor().y() >= before));
        assert_approx_eq!(f32, rows[0].anchor().y(), 100.0);

        let zone = state.no_go_zones.zones().last().unwrap();
        assert_eq!(zone.lanes(), (b(), b()));
        assert_eq!(zone.segment(), Segment::new(90.0, 200.0).unwrap());
    }

    #[test]
    fn test_stop_closes_box_and_pads() {
        let mut statements = two_lanes();
        statements.push(Statement::full(a(), b(), ["call"]));
        statements.push(Statement::stop(b()));
        let (sizer, lanes) = sized(&statements);
        let mut state = BuildState::new(&sizer, &lanes);

        let tidemark = forward_pass(0.0, &statements, &mut state).unwrap();

        // 50 + label 30 + line 10 = 90, stop at 90, +10
        assert_approx_eq!(f32, tidemark, 100.0);
        assert_eq!(
            state.lifelines[&b()].boxes.extents(),
            &[Segment::new(80.0, 90.0).unwrap()]
        );
    }

    #[test]
    fn test_stop_without_open_box_fails() {
        let mut statements = two_lanes();
        statements.push(Statement::stop(b()).with_source_line(3));
        let sizer = sizer_for(&statements);

        let err = build(&statements, &sizer).unwrap_err();
        match err {
            LayoutError::InvalidBoxState { lane, line, source } => {
                assert_eq!(lane, b());
                assert_eq!(line, 3);
                assert_eq!(source, BoxError::NoneInProgress);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_undeclared_lane_is_reported() {
        let mut statements = two_lanes();
        statements.push(Statement::full(a(), Id::new("Q"), ["call"]).with_source_line(3));
        let sizer = sizer_for(&statements);

        let err = build(&statements, &sizer).unwrap_err();
        assert!(matches!(err, LayoutError::UnknownLane { line: 3, .. }));
    }

    #[test]
    fn test_missing_lane_reference_is_reported() {
        let mut statements = two_lanes();
        statements.push(Statement::new(Keyword::Full, vec![a()], vec!["x".to_string()]));
        let sizer = sizer_for(&statements);

        let err = build(&statements, &sizer).unwrap_err();
        assert!(matches!(
            err,
            LayoutError::MissingLane {
                keyword: Keyword::Full,
                ..
            }
        ));
    }

    #[test]
    fn test_finalize_closes_open_boxes_and_draws_lifelines() {
        let mut statements = two_lanes();
        statements.push(Statement::full(a(), b(), ["call"]));
        let (sizer, lanes) = sized(&statements);
        let mut state = BuildState::new(&sizer, &lanes);

        let tidemark = forward_pass(0.0, &statements, &mut state).unwrap();
        assert_approx_eq!(f32, tidemark, 90.0);
        let before = state.primitives.lines().len();

        let tidemark = finalize(tidemark, &mut state).unwrap();
        // Closed at 90 + 5, then 10 of padding.
        assert_approx_eq!(f32, tidemark, 105.0);
        assert_eq!(
            state.lifelines[&a()].boxes.extents(),
            &[Segment::new(75.0, 95.0).unwrap()]
        );

        let new_lines = &state.primitives.lines()[before..];
        let dashed: Vec<_> = new_lines.iter().filter(|l| l.is_dashed()).collect();
        // Lane A: [40, 50) above the label, [95, 105) below its box.
        // Lane B: [40, 50), [95, 105).
        assert_eq!(dashed.len(), 4);
        assert!(dashed.iter().all(|l| l.is_vertical()));
        assert_approx_eq!(f32, dashed[0].from().y(), 40.0);
        assert_approx_eq!(f32, dashed[0].to().y(), 50.0);
        assert_approx_eq!(f32, dashed[1].from().y(), 95.0);

        // Two box rects of four solid lines each.
        assert_eq!(new_lines.iter().filter(|l| !l.is_dashed()).count(), 8);
    }

    #[test]
    fn test_build_sets_diagram_dimensions() {
        let mut statements = vec![Statement::title(["Checkout"])];
        statements.extend(two_lanes());
        statements.push(Statement::full(a(), b(), ["call"]));
        let sizer = sizer_for(&statements);

        let diagram = build(&statements, &sizer).unwrap();

        assert_approx_eq!(f32, diagram.width(), 2000.0);
        assert_approx_eq!(f32, diagram.font_height(), FONT);
        assert_approx_eq!(f32, diagram.dash_len(), 10.0);
        assert_approx_eq!(f32, diagram.dash_gap(), 5.0);
        // Frame title ends at 20 + 40 + 20 = 80. Lanes: 80..120, tidemark 130.
        // Interaction: 130 + 30 + 10 = 170. Finalize: 175 + 10 = 185.
        // Frame close: 195. Bottom pad: 215.
        assert_approx_eq!(f32, diagram.height(), 215.0);
        assert_eq!(diagram.primitives().labels()[0].text(), "Checkout");
    }

    #[test]
    fn test_build_is_repeatable() {
        let mut statements = two_lanes();
        statements.push(Statement::full(a(), b(), ["call"]));
        statements.push(Statement::dash(b(), a(), ["reply"]));
        let sizer = sizer_for(&statements);

        let first = build(&statements, &sizer).unwrap();
        let second = build(&statements, &sizer).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_empty_statement_list_still_draws_frame() {
        let sizer = sizer_for(&[]);
        let diagram = build(&[], &sizer).unwrap();

        assert_eq!(diagram.primitives().labels()[0].text(), "Unknown Title");
        // Title rect and outer frame.
        assert_eq!(diagram.primitives().lines().len(), 8);
        assert!(diagram.height() > 0.0);
    }
}
