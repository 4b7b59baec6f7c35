use barchart_rs::core::gutter::MAX_GUTTER_WIDTH;
use barchart_rs::core::{AxisSide, GutterWidths, Orientation};
use barchart_rs::interaction::{
    EdgeCollisions, GutterDragGesture, GutterResizeKey, TooltipPlacement, keyboard_resize,
    resolve_tooltip_placement,
};

fn widths() -> GutterWidths {
    GutterWidths {
        min: 66.0,
        width: 112.0,
        max: 284.0,
    }
}

#[test]
fn left_anchor_grows_when_pointer_moves_right() {
    let mut gesture = GutterDragGesture::begin(300.0, widths(), AxisSide::Left, 1200.0);
    assert_eq!(gesture.update(340.0), 152.0);
    assert_eq!(gesture.update(260.0), 72.0);
}

#[test]
fn right_anchor_grows_when_pointer_moves_left() {
    let mut gesture = GutterDragGesture::begin(300.0, widths(), AxisSide::Right, 1200.0);
    assert_eq!(gesture.update(260.0), 152.0);
}

#[test]
fn drag_clamps_to_the_minimum_bound() {
    let mut gesture = GutterDragGesture::begin(300.0, widths(), AxisSide::Left, 1200.0);
    assert_eq!(gesture.update(0.0), 66.0);
}

#[test]
fn drag_clamps_to_the_container_adjusted_maximum() {
    // Container too narrow for the full maximum: the effective cap becomes
    // container - MAX_GUTTER_WIDTH.
    let container = 500.0;
    let mut gesture = GutterDragGesture::begin(300.0, widths(), AxisSide::Left, container);
    assert_eq!(gesture.update(5_000.0), container - MAX_GUTTER_WIDTH);
}

#[test]
fn drag_commits_the_last_live_width() {
    let mut gesture = GutterDragGesture::begin(300.0, widths(), AxisSide::Left, 1200.0);
    gesture.update(340.0);
    gesture.update(320.0);
    assert_eq!(gesture.commit(), 132.0);
}

#[test]
fn arrow_keys_step_by_five_percent_based_on_anchor_side() {
    // width 112 of [66, 284] is 21%.
    let grown = keyboard_resize(widths(), GutterResizeKey::ArrowRight, AxisSide::Left)
        .expect("width should change");
    assert_eq!(grown, 218.0 * 26.0 / 100.0 + 66.0);

    let shrunk = keyboard_resize(widths(), GutterResizeKey::ArrowLeft, AxisSide::Left)
        .expect("width should change");
    assert_eq!(shrunk, 218.0 * 16.0 / 100.0 + 66.0);

    // On a right-anchored axis the arrow directions flip.
    let grown_right = keyboard_resize(widths(), GutterResizeKey::ArrowLeft, AxisSide::Right)
        .expect("width should change");
    assert_eq!(grown_right, 218.0 * 26.0 / 100.0 + 66.0);
}

#[test]
fn home_and_end_jump_to_the_bounds() {
    let home = keyboard_resize(widths(), GutterResizeKey::Home, AxisSide::Left)
        .expect("width should change");
    assert_eq!(home, 66.0);

    let end = keyboard_resize(widths(), GutterResizeKey::End, AxisSide::Left)
        .expect("width should change");
    assert_eq!(end, 284.0);
}

#[test]
fn stepping_past_a_boundary_is_a_no_op() {
    let at_min = GutterWidths {
        min: 66.0,
        width: 66.0,
        max: 284.0,
    };
    assert_eq!(
        keyboard_resize(at_min, GutterResizeKey::ArrowLeft, AxisSide::Left),
        None
    );

    let at_max = GutterWidths {
        min: 66.0,
        width: 284.0,
        max: 284.0,
    };
    assert_eq!(
        keyboard_resize(at_max, GutterResizeKey::ArrowRight, AxisSide::Left),
        None
    );
    assert_eq!(
        keyboard_resize(at_max, GutterResizeKey::End, AxisSide::Left),
        None
    );
}

#[test]
fn tooltip_flips_match_orientation_axes() {
    let left_hit = EdgeCollisions {
        left: true,
        ..EdgeCollisions::default()
    };
    assert_eq!(
        resolve_tooltip_placement(Orientation::Vertical, TooltipPlacement::Left, left_hit),
        TooltipPlacement::Right
    );

    let bottom_hit = EdgeCollisions {
        bottom: true,
        ..EdgeCollisions::default()
    };
    assert_eq!(
        resolve_tooltip_placement(Orientation::Horizontal, TooltipPlacement::Bottom, bottom_hit),
        TooltipPlacement::Top
    );

    // No collision: placement passes through.
    assert_eq!(
        resolve_tooltip_placement(
            Orientation::Vertical,
            TooltipPlacement::Right,
            EdgeCollisions::default()
        ),
        TooltipPlacement::Right
    );
}
