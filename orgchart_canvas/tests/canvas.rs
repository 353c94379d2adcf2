// Copyright 2025 the Orgchart Canvas Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tests for the `orgchart_canvas` crate.
//!
//! These exercise `PannableZoomCanvas` through its public input handlers:
//! zoom clamping, cursor-anchored wheel zoom, drag-to-pan and the toolbar
//! actions.

use kurbo::{Point, Vec2};
use orgchart_canvas::trace::{ChangeCause, TraceLog, TraceRecord};
use orgchart_canvas::{
    CanvasInput, GestureState, PannableZoomCanvas, PointerButton, ViewportTransform,
};

fn assert_near(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "expected {expected}, got {actual}"
    );
}

/// Canvas in an arbitrary, non-default state.
fn scrolled_canvas() -> PannableZoomCanvas {
    let mut canvas = PannableZoomCanvas::new();
    for _ in 0..7 {
        let _ = canvas.on_wheel(-120.0, Point::new(311.0, 97.0));
    }
    let _ = canvas.on_pointer_down(PointerButton::Primary, Point::new(0.0, 0.0));
    let _ = canvas.on_pointer_move(Point::new(-83.0, 41.5));
    let _ = canvas.on_pointer_up();
    canvas
}

#[test]
fn zoom_stays_clamped_for_any_input_sequence() {
    let mut canvas = PannableZoomCanvas::new();
    // Small deterministic LCG so the sequence mixes all zoom sources.
    let mut seed: u32 = 0x2545_f491;
    for _ in 0..5_000 {
        seed = seed.wrapping_mul(1_664_525).wrapping_add(1_013_904_223);
        let cursor = Point::new(f64::from(seed % 1024), f64::from((seed >> 10) % 768));
        let _ = match seed >> 29 {
            0 => canvas.zoom_in(),
            1 => canvas.zoom_out(),
            2 | 3 => canvas.on_wheel(1.0, cursor),
            _ => canvas.on_wheel(-1.0, cursor),
        };
        let zoom = canvas.zoom();
        assert!((0.1..=3.0).contains(&zoom), "zoom {zoom} escaped [0.1, 3.0]");
        assert!(canvas.pan().is_finite(), "pan must stay finite");
    }
}

#[test]
fn wheel_zoom_keeps_content_under_cursor() {
    let mut canvas = PannableZoomCanvas::new();
    let response = canvas.on_wheel(-1.0, Point::new(100.0, 50.0));

    assert!(response.changed, "zoom in from 1.0 changes state");
    assert!(response.prevent_default, "wheel is always consumed");
    assert_near(canvas.zoom(), 1.05);
    assert_near(canvas.pan().x, -5.0);
    assert_near(canvas.pan().y, -2.5);

    // The content point that was under the cursor is still there.
    let screen = canvas
        .transform()
        .content_to_screen_point(Point::new(100.0, 50.0));
    assert_near(screen.x, 100.0);
    assert_near(screen.y, 50.0);
}

#[test]
fn wheel_zoom_out_uses_point_nine_five() {
    let mut canvas = PannableZoomCanvas::new();
    let _ = canvas.on_wheel(3.0, Point::new(200.0, 100.0));
    assert_near(canvas.zoom(), 0.95);
    assert_near(canvas.pan().x, 10.0);
    assert_near(canvas.pan().y, 5.0);
}

#[test]
fn wheel_in_then_out_does_not_return_to_start() {
    let mut canvas = PannableZoomCanvas::new();
    let _ = canvas.on_wheel(-1.0, Point::ZERO);
    let _ = canvas.on_wheel(1.0, Point::ZERO);
    // 1.05 * 0.95 = 0.9975: the factors are not inverses.
    assert_near(canvas.zoom(), 0.9975);
}

#[test]
fn cursor_anchor_holds_from_any_transform() {
    let mut canvas = scrolled_canvas();
    let cursor = Point::new(512.0, 384.0);
    let content = canvas.transform().screen_to_content_point(cursor);

    let _ = canvas.on_wheel(1.0, cursor);
    let back = canvas.transform().content_to_screen_point(content);
    assert_near(back.x, cursor.x);
    assert_near(back.y, cursor.y);
}

#[test]
fn wheel_at_zoom_limit_leaves_state_unchanged() {
    let mut canvas = PannableZoomCanvas::new();
    while canvas.can_zoom_in() {
        let _ = canvas.zoom_in();
    }
    let _ = canvas.on_pointer_down(PointerButton::Primary, Point::new(0.0, 0.0));
    let _ = canvas.on_pointer_move(Point::new(12.0, -4.0));
    let _ = canvas.on_pointer_up();
    let before = canvas.view();

    let mut log = TraceLog::new();
    let input = CanvasInput::Wheel {
        delta_y: -1.0,
        cursor: Point::new(400.0, 300.0),
    };
    let response = canvas.handle_with_trace(input, &mut log);

    assert!(!response.changed, "zoom at 3.0 cannot grow");
    assert!(response.prevent_default, "still owned by the canvas");
    assert_eq!(canvas.view(), before);
    assert_eq!(log.records(), &[TraceRecord::Ignored(input)]);
}

#[test]
fn wheel_change_below_threshold_is_dropped() {
    let mut canvas = PannableZoomCanvas::new();
    for _ in 0..200 {
        let _ = canvas.on_wheel(1.0, Point::new(50.0, 50.0));
    }
    assert_eq!(canvas.zoom(), 0.1);
    let before = canvas.transform();
    let response = canvas.on_wheel(1.0, Point::new(50.0, 50.0));
    assert!(!response.changed, "already at the minimum");
    assert_eq!(canvas.transform(), before);
}

#[test]
fn drag_accumulates_pointer_deltas() {
    let mut canvas = PannableZoomCanvas::new();
    let _ = canvas.on_pointer_down(PointerButton::Primary, Point::new(10.0, 10.0));
    let _ = canvas.on_pointer_move(Point::new(15.0, 14.0));
    let _ = canvas.on_pointer_move(Point::new(20.0, 10.0));

    assert_eq!(canvas.pan(), Vec2::new(10.0, 0.0));
    assert_eq!(canvas.last_pointer(), Some(Point::new(20.0, 10.0)));
    assert!(canvas.is_dragging());
    assert_eq!(canvas.zoom(), 1.0);
}

#[test]
fn pan_is_unclamped() {
    let mut canvas = PannableZoomCanvas::new();
    let _ = canvas.on_pointer_down(PointerButton::Primary, Point::new(0.0, 0.0));
    let _ = canvas.on_pointer_move(Point::new(-1.0e6, 5.0e5));
    assert_eq!(canvas.pan(), Vec2::new(-1.0e6, 5.0e5));
}

#[test]
fn leaving_the_canvas_ends_the_drag() {
    let mut canvas = PannableZoomCanvas::new();
    let _ = canvas.on_pointer_down(PointerButton::Primary, Point::new(5.0, 5.0));
    let response = canvas.on_pointer_leave();
    assert!(response.changed, "gesture changed");
    assert!(!canvas.is_dragging());
    assert_eq!(canvas.gesture(), GestureState::Idle);

    let response = canvas.on_pointer_move(Point::new(50.0, 80.0));
    assert!(!response.changed, "move after leave is a no-op");
    assert_eq!(canvas.pan(), Vec2::ZERO);

    // Up and leave while idle are no-ops as well.
    assert!(!canvas.on_pointer_up().changed, "up while idle");
    assert!(!canvas.on_pointer_leave().changed, "leave while idle");
}

#[test]
fn reset_is_idempotent() {
    let mut canvas = scrolled_canvas();
    assert_ne!(canvas.transform(), ViewportTransform::IDENTITY);

    assert!(canvas.reset_view().changed, "first reset changes the view");
    assert_eq!(canvas.zoom(), 1.0);
    assert_eq!(canvas.pan(), Vec2::ZERO);
    let once = canvas.view();

    assert!(!canvas.reset_view().changed, "second reset is a no-op");
    assert_eq!(canvas.view(), once);
}

#[test]
fn reset_does_not_touch_drag_or_grid() {
    let mut canvas = PannableZoomCanvas::new();
    let _ = canvas.toggle_grid();
    let _ = canvas.on_pointer_down(PointerButton::Primary, Point::new(1.0, 1.0));
    let _ = canvas.on_pointer_move(Point::new(9.0, 1.0));
    let _ = canvas.reset_view();

    assert!(canvas.is_dragging());
    assert!(!canvas.show_grid());
    let _ = canvas.on_pointer_move(Point::new(10.0, 3.0));
    assert_eq!(canvas.pan(), Vec2::new(1.0, 2.0));
}

#[test]
fn non_primary_buttons_do_not_start_a_drag() {
    let mut canvas = PannableZoomCanvas::new();
    for button in [
        PointerButton::from_index(2),
        PointerButton::Auxiliary,
        PointerButton::Other(4),
    ] {
        let response = canvas.on_pointer_down(button, Point::new(30.0, 40.0));
        assert!(!response.changed, "{button:?} ignored");
        assert!(!canvas.is_dragging());
        assert_eq!(canvas.last_pointer(), None);
    }

    let _ = canvas.on_pointer_move(Point::new(60.0, 90.0));
    assert_eq!(canvas.pan(), Vec2::ZERO);
}

#[test]
fn toolbar_zoom_keeps_pan() {
    let mut canvas = PannableZoomCanvas::new();
    let _ = canvas.on_pointer_down(PointerButton::Primary, Point::new(0.0, 0.0));
    let _ = canvas.on_pointer_move(Point::new(5.0, 5.0));
    let _ = canvas.on_pointer_up();
    assert_eq!(canvas.transform(), ViewportTransform::new(1.0, Vec2::new(5.0, 5.0)));

    assert!(canvas.zoom_in().changed, "zoom in");
    assert_near(canvas.zoom(), 1.1);
    assert_eq!(canvas.pan(), Vec2::new(5.0, 5.0));

    assert!(canvas.zoom_out().changed, "zoom out");
    assert_near(canvas.zoom(), 1.0);
    assert_eq!(canvas.pan(), Vec2::new(5.0, 5.0));
}

#[test]
fn toolbar_zoom_reports_cause() {
    let mut canvas = PannableZoomCanvas::new();
    let mut log = TraceLog::new();
    let _ = canvas.handle_with_trace(CanvasInput::ZoomOut, &mut log);
    let _ = canvas.handle_with_trace(CanvasInput::ResetView, &mut log);

    let causes: Vec<ChangeCause> = log
        .records()
        .iter()
        .filter_map(|r| match r {
            TraceRecord::Transform { cause, .. } => Some(*cause),
            _ => None,
        })
        .collect();
    assert_eq!(causes, [ChangeCause::ZoomOut, ChangeCause::Reset]);
}

#[test]
fn grid_follows_transform() {
    let mut canvas = PannableZoomCanvas::new();
    let _ = canvas.on_pointer_down(PointerButton::Primary, Point::new(0.0, 0.0));
    let _ = canvas.on_pointer_move(Point::new(47.0, -3.0));
    let _ = canvas.on_pointer_up();
    let _ = canvas.zoom_in();

    let grid = canvas.view().grid().expect("grid is shown by default");
    assert_near(grid.period, 22.0);
    assert_near(grid.offset.x, 47.0 % 22.0);
    assert_near(grid.offset.y, -3.0);

    let _ = canvas.toggle_grid();
    assert_eq!(canvas.view().grid(), None);
}
