// Copyright 2025 the Orgchart Canvas Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Drag-to-pan tracking: the Idle/Dragging state machine and pointer deltas.
//!
//! ## Usage
//!
//! 1) Call [`DragState::start`] on primary pointer-down.
//! 2) On each move, [`DragState::update`] returns the delta since the previous
//!    position (or `None` while idle).
//! 3) Call [`DragState::end`] on pointer-up or when the pointer leaves the
//!    canvas, so a release outside the surface never leaves a stuck drag.
//!
//! ```
//! use kurbo::{Point, Vec2};
//! use orgchart_canvas::{DragState, GestureState};
//!
//! let mut drag = DragState::default();
//! assert_eq!(drag.gesture(), GestureState::Idle);
//!
//! drag.start(Point::new(10.0, 10.0));
//! assert_eq!(drag.update(Point::new(15.0, 14.0)), Some(Vec2::new(5.0, 4.0)));
//!
//! drag.end();
//! assert_eq!(drag.update(Point::new(40.0, 40.0)), None);
//! ```

use kurbo::{Point, Vec2};

/// The two states of the pan gesture.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum GestureState {
    /// No pan gesture in progress.
    #[default]
    Idle,
    /// A primary-button drag is panning the canvas.
    Dragging,
}

/// Tracks the last pointer position of an active drag.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct DragState {
    last_pos: Option<Point>,
}

impl DragState {
    /// Begins a drag at `pos`, replacing any drag already in progress.
    pub fn start(&mut self, pos: Point) {
        self.last_pos = Some(pos);
    }

    /// Records a new pointer position and returns the delta since the last one.
    ///
    /// Returns `None` when no drag is active.
    pub fn update(&mut self, pos: Point) -> Option<Vec2> {
        let last = self.last_pos.as_mut()?;
        let delta = pos - *last;
        *last = pos;
        Some(delta)
    }

    /// Ends the drag. Returns `true` if a drag was active.
    pub fn end(&mut self) -> bool {
        self.last_pos.take().is_some()
    }

    /// Returns `true` while a drag is active.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.last_pos.is_some()
    }

    /// Last pointer position observed during the active drag.
    #[must_use]
    pub fn last_pos(&self) -> Option<Point> {
        self.last_pos
    }

    /// Current state of the Idle/Dragging machine.
    #[must_use]
    pub fn gesture(&self) -> GestureState {
        if self.is_dragging() {
            GestureState::Dragging
        } else {
            GestureState::Idle
        }
    }
}
