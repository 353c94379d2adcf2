// Copyright 2025 the Orgchart Canvas Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Observation hooks for canvas state changes.
//!
//! The canvas keeps no history. Embedders that want to log interactions,
//! drive an inspector overlay, or assert on transitions in tests pass a
//! [`CanvasTrace`] to
//! [`PannableZoomCanvas::handle_with_trace`](crate::PannableZoomCanvas::handle_with_trace).
//! Hooks fire only for inputs that change state, plus [`CanvasTrace::input_ignored`]
//! for inputs dropped by policy.
//!
//! `()` is the no-op tracer; [`TraceLog`] records every callback.

use alloc::vec::Vec;

use crate::{CanvasInput, GestureState, ViewportTransform};

/// Which operation changed the viewport transform.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ChangeCause {
    /// Cursor-anchored wheel zoom.
    WheelZoom,
    /// Drag-to-pan.
    Pan,
    /// Zoom-in toolbar button.
    ZoomIn,
    /// Zoom-out toolbar button.
    ZoomOut,
    /// Reset-view toolbar button.
    Reset,
}

/// Callback sink for canvas state changes.
pub trait CanvasTrace {
    /// The viewport transform changed from `before` to `after`.
    fn transform_changed(
        &mut self,
        cause: ChangeCause,
        before: ViewportTransform,
        after: ViewportTransform,
    );

    /// The pan gesture moved between Idle and Dragging.
    fn gesture_changed(&mut self, from: GestureState, to: GestureState);

    /// The grid visibility flipped.
    fn grid_toggled(&mut self, show_grid: bool);

    /// The input was dropped without effect (non-primary button, negligible
    /// wheel zoom, disabled toolbar button, non-finite coordinates, or a
    /// pointer event with no drag in progress).
    fn input_ignored(&mut self, input: &CanvasInput) {
        let _ = input;
    }
}

impl CanvasTrace for () {
    fn transform_changed(&mut self, _: ChangeCause, _: ViewportTransform, _: ViewportTransform) {}

    fn gesture_changed(&mut self, _: GestureState, _: GestureState) {}

    fn grid_toggled(&mut self, _: bool) {}
}

/// One recorded [`CanvasTrace`] callback.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum TraceRecord {
    /// See [`CanvasTrace::transform_changed`].
    Transform {
        /// The operation.
        cause: ChangeCause,
        /// Transform before the change.
        before: ViewportTransform,
        /// Transform after the change.
        after: ViewportTransform,
    },
    /// See [`CanvasTrace::gesture_changed`].
    Gesture {
        /// Previous state.
        from: GestureState,
        /// New state.
        to: GestureState,
    },
    /// See [`CanvasTrace::grid_toggled`].
    Grid {
        /// New visibility.
        show_grid: bool,
    },
    /// See [`CanvasTrace::input_ignored`].
    Ignored(CanvasInput),
}

/// Records every callback in order.
#[derive(Clone, Debug, Default)]
pub struct TraceLog {
    records: Vec<TraceRecord>,
}

impl TraceLog {
    /// Creates an empty log.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Recorded callbacks, oldest first.
    #[must_use]
    pub fn records(&self) -> &[TraceRecord] {
        &self.records
    }

    /// Removes all recorded callbacks.
    pub fn clear(&mut self) {
        self.records.clear();
    }

    /// Number of recorded callbacks.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns `true` if nothing was recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl CanvasTrace for TraceLog {
    fn transform_changed(
        &mut self,
        cause: ChangeCause,
        before: ViewportTransform,
        after: ViewportTransform,
    ) {
        self.records.push(TraceRecord::Transform {
            cause,
            before,
            after,
        });
    }

    fn gesture_changed(&mut self, from: GestureState, to: GestureState) {
        self.records.push(TraceRecord::Gesture { from, to });
    }

    fn grid_toggled(&mut self, show_grid: bool) {
        self.records.push(TraceRecord::Grid { show_grid });
    }

    fn input_ignored(&mut self, input: &CanvasInput) {
        self.records.push(TraceRecord::Ignored(*input));
    }
}
