// Copyright 2025 the Orgchart Canvas Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Adapter for `ui-events` pointer events.
//!
//! ## Feature
//!
//! Enable with `ui_events_adapter` (on by default).
//!
//! ## Notes
//!
//! Positions are read in logical pixels and shifted by the canvas origin, so
//! the canvas sees coordinates relative to its own top-left corner. Only the
//! sign of the vertical scroll delta is forwarded, so line, page and pixel
//! deltas all behave alike.
//!
//! | `PointerEvent` | `CanvasInput` |
//! |---|---|
//! | `Down` | `PointerDown` |
//! | `Move` | `PointerMove` |
//! | `Up` | `PointerUp` |
//! | `Leave`, `Cancel` | `PointerLeave` |
//! | `Scroll` | `Wheel` |
//! | anything else | ignored |

use ::ui_events::ScrollDelta;
use ::ui_events::pointer::{PointerButton as UiPointerButton, PointerEvent};
use kurbo::{Point, Vec2};

use crate::{CanvasInput, InputResponse, PannableZoomCanvas, PointerButton};

/// Converts window-space pointer events into canvas-local [`CanvasInput`].
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct UiEventsAdapter {
    /// Top-left corner of the canvas in window logical coordinates.
    pub origin: Point,
}

impl UiEventsAdapter {
    /// Creates an adapter for a canvas whose top-left corner is at `origin`.
    #[must_use]
    pub fn new(origin: Point) -> Self {
        Self { origin }
    }

    /// Moves the canvas origin, e.g. after a layout pass.
    pub fn set_origin(&mut self, origin: Point) {
        self.origin = origin;
    }

    /// Converts a window-space point into canvas-local coordinates.
    #[must_use]
    pub fn to_local(&self, window_pt: Point) -> Point {
        (window_pt - self.origin).to_point()
    }

    /// Translates `event`, or returns `None` for events the canvas ignores.
    #[must_use]
    pub fn translate(&self, event: &PointerEvent) -> Option<CanvasInput> {
        match event {
            PointerEvent::Down(e) => Some(CanvasInput::PointerDown {
                button: map_button(e.button),
                pos: self.to_local(e.state.logical_point()),
            }),
            PointerEvent::Move(e) => Some(CanvasInput::PointerMove {
                pos: self.to_local(e.current.logical_point()),
            }),
            PointerEvent::Up(_) => Some(CanvasInput::PointerUp),
            PointerEvent::Leave(_) | PointerEvent::Cancel(_) => Some(CanvasInput::PointerLeave),
            PointerEvent::Scroll(e) => Some(CanvasInput::Wheel {
                delta_y: vertical_delta(&e.delta),
                cursor: self.to_local(e.state.logical_point()),
            }),
            _ => None,
        }
    }

    /// Translates `event` and applies it to `canvas`.
    pub fn dispatch(&self, event: &PointerEvent, canvas: &mut PannableZoomCanvas) -> InputResponse {
        match self.translate(event) {
            Some(input) => canvas.handle(input),
            None => InputResponse::default(),
        }
    }
}

fn map_button(button: Option<UiPointerButton>) -> PointerButton {
    match button {
        Some(UiPointerButton::Primary) => PointerButton::Primary,
        Some(UiPointerButton::Secondary) => PointerButton::Secondary,
        Some(UiPointerButton::Auxiliary) => PointerButton::Auxiliary,
        Some(UiPointerButton::X1) => PointerButton::Other(3),
        Some(UiPointerButton::X2) => PointerButton::Other(4),
        Some(UiPointerButton::PenEraser) => PointerButton::Other(5),
        // B7 and up have no DOM index.
        Some(_) | None => PointerButton::Other(u16::MAX),
    }
}

fn vertical_delta(delta: &ScrollDelta) -> f64 {
    match delta {
        ScrollDelta::PixelDelta(pos) => pos.y,
        ScrollDelta::LineDelta(_, y) | ScrollDelta::PageDelta(_, y) => f64::from(*y),
    }
}

impl From<Vec2> for UiEventsAdapter {
    fn from(origin: Vec2) -> Self {
        Self::new(origin.to_point())
    }
}
