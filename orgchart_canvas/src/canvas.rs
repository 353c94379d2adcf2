// Copyright 2025 the Orgchart Canvas Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Affine, Point, Vec2};

use crate::config::{CanvasConfig, ConfigError};
use crate::drag::{DragState, GestureState};
use crate::grid::GridPattern;
use crate::input::{CanvasInput, InputResponse, PointerButton};
use crate::trace::{CanvasTrace, ChangeCause};
use crate::transform::ViewportTransform;

/// Infinitely pannable, continuously zoomable surface hosting the org chart.
///
/// The canvas owns a [`ViewportTransform`] and turns wheel, pointer and
/// toolbar input into transform updates:
/// - Wheel zoom is anchored at the cursor: the content point under the
///   pointer stays put while the zoom changes.
/// - Primary-button drags pan by the pointer delta.
/// - Zoom-in/zoom-out buttons step the zoom additively and leave the pan
///   alone, so they zoom about the content origin rather than the cursor.
///
/// Zoom always stays within the configured limits; pan is unconstrained.
/// Every input is total: out-of-range requests clamp and irrelevant events are
/// ignored.
#[derive(Clone, Debug)]
pub struct PannableZoomCanvas {
    config: CanvasConfig,
    transform: ViewportTransform,
    drag: DragState,
    show_grid: bool,
}

impl Default for PannableZoomCanvas {
    fn default() -> Self {
        Self::new()
    }
}

impl PannableZoomCanvas {
    /// Creates a canvas with the default configuration.
    ///
    /// Initial state: zoom `1.0`, no pan, idle, grid visible.
    #[must_use]
    pub fn new() -> Self {
        Self {
            config: CanvasConfig::default(),
            transform: ViewportTransform::IDENTITY,
            drag: DragState::default(),
            show_grid: true,
        }
    }

    /// Creates a canvas with a custom configuration.
    pub fn with_config(config: CanvasConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            config,
            ..Self::new()
        })
    }

    /// Returns the configuration.
    #[must_use]
    pub fn config(&self) -> &CanvasConfig {
        &self.config
    }

    /// Returns the current viewport transform.
    #[must_use]
    pub fn transform(&self) -> ViewportTransform {
        self.transform
    }

    /// Returns the current zoom factor.
    #[must_use]
    pub fn zoom(&self) -> f64 {
        self.transform.zoom
    }

    /// Returns the current pan offset in screen pixels.
    #[must_use]
    pub fn pan(&self) -> Vec2 {
        self.transform.pan
    }

    /// Zoom as a percentage, for the toolbar label.
    #[must_use]
    pub fn zoom_percent(&self) -> f64 {
        self.transform.zoom * 100.0
    }

    /// Returns `true` if the grid is shown.
    #[must_use]
    pub fn show_grid(&self) -> bool {
        self.show_grid
    }

    /// Returns the Idle/Dragging state.
    #[must_use]
    pub fn gesture(&self) -> GestureState {
        self.drag.gesture()
    }

    /// Returns `true` while a pan drag is in progress.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.drag.is_dragging()
    }

    /// Last pointer position of the active drag.
    #[must_use]
    pub fn last_pointer(&self) -> Option<Point> {
        self.drag.last_pos()
    }

    /// `false` once zoom has reached the maximum; the zoom-in button should
    /// render disabled.
    #[must_use]
    pub fn can_zoom_in(&self) -> bool {
        self.transform.zoom < self.config.zoom_max
    }

    /// `false` once zoom has reached the minimum; the zoom-out button should
    /// render disabled.
    #[must_use]
    pub fn can_zoom_out(&self) -> bool {
        self.transform.zoom > self.config.zoom_min
    }

    /// Snapshot of everything the rendering layer needs.
    #[must_use]
    pub fn view(&self) -> CanvasView {
        CanvasView {
            transform: self.transform,
            show_grid: self.show_grid,
            gesture: self.drag.gesture(),
            grid_spacing: self.config.grid_spacing,
        }
    }

    /// Wheel or trackpad scroll at `cursor`.
    ///
    /// Zooms out by `wheel_zoom_out` when `delta_y > 0` and in by
    /// `wheel_zoom_in` otherwise, keeping the content point under `cursor`
    /// fixed on screen. Changes of at most `min_zoom_delta` are dropped.
    ///
    /// The response always asks the host to prevent the default action.
    pub fn on_wheel(&mut self, delta_y: f64, cursor: Point) -> InputResponse {
        self.handle(CanvasInput::Wheel { delta_y, cursor })
    }

    /// Pointer pressed at `pos`. Only [`PointerButton::Primary`] starts a pan.
    pub fn on_pointer_down(&mut self, button: PointerButton, pos: Point) -> InputResponse {
        self.handle(CanvasInput::PointerDown { button, pos })
    }

    /// Pointer moved to `pos`. Pans by the delta while dragging.
    pub fn on_pointer_move(&mut self, pos: Point) -> InputResponse {
        self.handle(CanvasInput::PointerMove { pos })
    }

    /// Pointer released. Ends the drag.
    pub fn on_pointer_up(&mut self) -> InputResponse {
        self.handle(CanvasInput::PointerUp)
    }

    /// Pointer left the canvas. Ends the drag exactly like a release.
    pub fn on_pointer_leave(&mut self) -> InputResponse {
        self.handle(CanvasInput::PointerLeave)
    }

    /// Steps zoom up by `zoom_step`, clamped. Pan is left untouched.
    pub fn zoom_in(&mut self) -> InputResponse {
        self.handle(CanvasInput::ZoomIn)
    }

    /// Steps zoom down by `zoom_step`, clamped. Pan is left untouched.
    pub fn zoom_out(&mut self) -> InputResponse {
        self.handle(CanvasInput::ZoomOut)
    }

    /// Restores zoom `1.0` and zero pan.
    pub fn reset_view(&mut self) -> InputResponse {
        self.handle(CanvasInput::ResetView)
    }

    /// Shows or hides the grid.
    pub fn toggle_grid(&mut self) -> InputResponse {
        self.handle(CanvasInput::ToggleGrid)
    }

    /// Applies one input.
    pub fn handle(&mut self, input: CanvasInput) -> InputResponse {
        self.handle_with_trace(input, &mut ())
    }

    /// Applies one input, reporting state changes to `trace`.
    pub fn handle_with_trace<T: CanvasTrace + ?Sized>(
        &mut self,
        input: CanvasInput,
        trace: &mut T,
    ) -> InputResponse {
        let applied = match input {
            CanvasInput::Wheel { delta_y, cursor } => self.wheel(delta_y, cursor, trace),
            CanvasInput::PointerDown { button, pos } => self.pointer_down(button, pos, trace),
            CanvasInput::PointerMove { pos } => self.pointer_move(pos, trace),
            CanvasInput::PointerUp | CanvasInput::PointerLeave => self.end_drag(trace),
            CanvasInput::ZoomIn => self.step_zoom_in(trace),
            CanvasInput::ZoomOut => self.step_zoom_out(trace),
            CanvasInput::ResetView => {
                Some(self.commit(ChangeCause::Reset, ViewportTransform::IDENTITY, trace))
            }
            CanvasInput::ToggleGrid => {
                self.show_grid = !self.show_grid;
                trace.grid_toggled(self.show_grid);
                Some(true)
            }
        };

        let response = match applied {
            Some(changed) => InputResponse::changed(changed),
            None => {
                trace.input_ignored(&input);
                InputResponse::IGNORED
            }
        };
        if matches!(input, CanvasInput::Wheel { .. }) {
            response.consumed()
        } else {
            response
        }
    }

    /// Snapshot of the current state for debugging and inspection.
    #[must_use]
    pub fn debug_info(&self) -> CanvasDebugInfo {
        CanvasDebugInfo {
            transform: self.transform,
            gesture: self.drag.gesture(),
            last_pointer: self.drag.last_pos(),
            show_grid: self.show_grid,
            zoom_min: self.config.zoom_min,
            zoom_max: self.config.zoom_max,
            can_zoom_in: self.can_zoom_in(),
            can_zoom_out: self.can_zoom_out(),
        }
    }

    // Handlers return `None` when the input is ignored by policy, and
    // `Some(changed)` otherwise.

    fn wheel<T: CanvasTrace + ?Sized>(
        &mut self,
        delta_y: f64,
        cursor: Point,
        trace: &mut T,
    ) -> Option<bool> {
        if !(delta_y.is_finite() && cursor.is_finite()) {
            return None;
        }
        let factor = if delta_y > 0.0 {
            self.config.wheel_zoom_out
        } else {
            self.config.wheel_zoom_in
        };
        let zoom = self.transform.zoom;
        let new_zoom = self.clamp_zoom(zoom * factor);
        if (new_zoom - zoom).abs() <= self.config.min_zoom_delta {
            return None;
        }
        let next = self.transform.zoomed_about(cursor, new_zoom);
        if !next.is_finite() {
            return None;
        }
        Some(self.commit(ChangeCause::WheelZoom, next, trace))
    }

    fn pointer_down<T: CanvasTrace + ?Sized>(
        &mut self,
        button: PointerButton,
        pos: Point,
        trace: &mut T,
    ) -> Option<bool> {
        if !button.is_primary() || !pos.is_finite() {
            return None;
        }
        let before = self.drag.gesture();
        self.drag.start(pos);
        let after = self.drag.gesture();
        if before == after {
            return Some(false);
        }
        trace.gesture_changed(before, after);
        Some(true)
    }

    fn pointer_move<T: CanvasTrace + ?Sized>(&mut self, pos: Point, trace: &mut T) -> Option<bool> {
        if !pos.is_finite() {
            return None;
        }
        let last = self.drag.last_pos()?;
        let next = self.transform.panned_by(pos - last);
        // Pan past the f64 range leaves the anchor where it was.
        if !next.is_finite() {
            return None;
        }
        self.drag.update(pos);
        Some(self.commit(ChangeCause::Pan, next, trace))
    }

    fn end_drag<T: CanvasTrace + ?Sized>(&mut self, trace: &mut T) -> Option<bool> {
        if !self.drag.end() {
            return None;
        }
        trace.gesture_changed(GestureState::Dragging, GestureState::Idle);
        Some(true)
    }

    fn step_zoom_in<T: CanvasTrace + ?Sized>(&mut self, trace: &mut T) -> Option<bool> {
        if !self.can_zoom_in() {
            return None;
        }
        let zoom = (self.transform.zoom + self.config.zoom_step).min(self.config.zoom_max);
        let next = self.transform.with_zoom(zoom);
        Some(self.commit(ChangeCause::ZoomIn, next, trace))
    }

    fn step_zoom_out<T: CanvasTrace + ?Sized>(&mut self, trace: &mut T) -> Option<bool> {
        if !self.can_zoom_out() {
            return None;
        }
        let zoom = (self.transform.zoom - self.config.zoom_step).max(self.config.zoom_min);
        let next = self.transform.with_zoom(zoom);
        Some(self.commit(ChangeCause::ZoomOut, next, trace))
    }

    fn clamp_zoom(&self, zoom: f64) -> f64 {
        zoom.clamp(self.config.zoom_min, self.config.zoom_max)
    }

    /// Stores `next` and reports it. Returns `false` if nothing changed.
    fn commit<T: CanvasTrace + ?Sized>(
        &mut self,
        cause: ChangeCause,
        next: ViewportTransform,
        trace: &mut T,
    ) -> bool {
        let before = self.transform;
        if before == next {
            return false;
        }
        self.transform = next;
        trace.transform_changed(cause, before, next);
        true
    }
}

/// Render snapshot of a [`PannableZoomCanvas`].
///
/// The content layer is drawn through [`CanvasView::content_to_screen`]; the
/// background grid, when shown, follows [`CanvasView::grid`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CanvasView {
    /// Current viewport transform.
    pub transform: ViewportTransform,
    /// Whether the grid is visible.
    pub show_grid: bool,
    /// Idle/Dragging state, for cursor styling.
    pub gesture: GestureState,
    /// Grid period in content units.
    pub grid_spacing: f64,
}

impl CanvasView {
    /// Content → screen affine transform for the content layer.
    #[must_use]
    pub fn content_to_screen(&self) -> Affine {
        self.transform.content_to_screen()
    }

    /// Grid pattern to draw, or `None` when the grid is hidden.
    #[must_use]
    pub fn grid(&self) -> Option<GridPattern> {
        self.show_grid
            .then(|| GridPattern::for_transform(&self.transform, self.grid_spacing))
    }
}

/// Debug snapshot of a [`PannableZoomCanvas`] state.
#[derive(Clone, Copy, Debug)]
pub struct CanvasDebugInfo {
    /// Current viewport transform.
    pub transform: ViewportTransform,
    /// Idle/Dragging state.
    pub gesture: GestureState,
    /// Last pointer position of the active drag.
    pub last_pointer: Option<Point>,
    /// Whether the grid is visible.
    pub show_grid: bool,
    /// Minimum zoom factor.
    pub zoom_min: f64,
    /// Maximum zoom factor.
    pub zoom_max: f64,
    /// Whether the zoom-in button is enabled.
    pub can_zoom_in: bool,
    /// Whether the zoom-out button is enabled.
    pub can_zoom_out: bool,
}
