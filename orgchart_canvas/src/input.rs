// Copyright 2025 the Orgchart Canvas Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::Point;

/// Pointer button identifier.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PointerButton {
    /// Left mouse button, pen contact or touch.
    Primary,
    /// Right mouse button.
    Secondary,
    /// Middle mouse button.
    Auxiliary,
    /// Any other button, by its DOM `MouseEvent.button` index.
    Other(u16),
}

impl PointerButton {
    /// Converts a DOM `MouseEvent.button` index.
    #[must_use]
    pub fn from_index(index: u16) -> Self {
        match index {
            0 => Self::Primary,
            1 => Self::Auxiliary,
            2 => Self::Secondary,
            other => Self::Other(other),
        }
    }

    /// Returns `true` for the button that starts a pan.
    #[must_use]
    pub fn is_primary(self) -> bool {
        self == Self::Primary
    }
}

/// One input event or toolbar action, in canvas-local coordinates.
///
/// Positions are relative to the canvas top-left corner. Converting from
/// window or page coordinates is the caller's job (see the
/// `ui_events_adapter` feature for one such conversion).
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum CanvasInput {
    /// Wheel or trackpad scroll. Only the sign of `delta_y` matters.
    Wheel {
        /// Vertical scroll delta; positive scrolls down and zooms out.
        delta_y: f64,
        /// Cursor position.
        cursor: Point,
    },
    /// A pointer button was pressed over the canvas.
    PointerDown {
        /// The pressed button.
        button: PointerButton,
        /// Pointer position.
        pos: Point,
    },
    /// The pointer moved over the canvas.
    PointerMove {
        /// Pointer position.
        pos: Point,
    },
    /// A pointer button was released.
    PointerUp,
    /// The pointer left the canvas surface.
    PointerLeave,
    /// Zoom-in toolbar button.
    ZoomIn,
    /// Zoom-out toolbar button.
    ZoomOut,
    /// Reset-view toolbar button.
    ResetView,
    /// Grid toggle toolbar button.
    ToggleGrid,
}

/// What the canvas did with an input.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct InputResponse {
    /// The render snapshot changed and should be redrawn.
    pub changed: bool,
    /// The host must suppress the platform's default handling of the event
    /// (native scrolling or page zoom).
    pub prevent_default: bool,
}

impl InputResponse {
    pub(crate) const IGNORED: Self = Self {
        changed: false,
        prevent_default: false,
    };

    pub(crate) fn changed(changed: bool) -> Self {
        Self {
            changed,
            prevent_default: false,
        }
    }

    pub(crate) fn consumed(self) -> Self {
        Self {
            prevent_default: true,
            ..self
        }
    }
}
