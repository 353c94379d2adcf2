// Copyright 2025 the Orgchart Canvas Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Orgchart Canvas: a headless pan/zoom model for an org-chart surface.
//!
//! This crate owns the interaction state behind a zoomable, pannable canvas:
//! - A uniform pan+zoom [`ViewportTransform`] from content space to screen space.
//! - Cursor-anchored wheel zoom, keeping the content point under the pointer fixed.
//! - Drag-to-pan with the primary button, ended by release or by leaving the canvas.
//! - Discrete zoom-in, zoom-out and reset actions for toolbar buttons.
//! - A background [`GridPattern`] that scales and scrolls with the content.
//!
//! It does **not** draw anything or talk to a windowing system. Callers are
//! expected to:
//! - Convert window/page coordinates into canvas-local coordinates before
//!   calling the input handlers (the `ui_events_adapter` feature does this for
//!   [`ui-events`](https://docs.rs/ui-events)).
//! - Suppress native scrolling when [`InputResponse::prevent_default`] is set.
//! - Redraw from [`PannableZoomCanvas::view`] when [`InputResponse::changed`] is set.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Point, Vec2};
//! use orgchart_canvas::{PannableZoomCanvas, PointerButton};
//!
//! let mut canvas = PannableZoomCanvas::new();
//!
//! // Scroll up over (100, 50): zoom in by 5%, keeping that point fixed.
//! let response = canvas.on_wheel(-1.0, Point::new(100.0, 50.0));
//! assert!(response.changed && response.prevent_default);
//! assert!((canvas.zoom() - 1.05).abs() < 1e-12);
//! assert!((canvas.pan() - Vec2::new(-5.0, -2.5)).hypot() < 1e-9);
//!
//! // Drag to pan.
//! canvas.on_pointer_down(PointerButton::Primary, Point::new(10.0, 10.0));
//! canvas.on_pointer_move(Point::new(30.0, 10.0));
//! canvas.on_pointer_up();
//! assert!((canvas.pan() - Vec2::new(15.0, -2.5)).hypot() < 1e-9);
//!
//! // Back to the default view.
//! canvas.reset_view();
//! assert_eq!(canvas.zoom(), 1.0);
//! assert_eq!(canvas.pan(), Vec2::ZERO);
//! ```
//!
//! ## Rendering
//!
//! [`CanvasView`] carries what a renderer needs. Content is drawn through
//! [`CanvasView::content_to_screen`], which places content point `(cx, cy)` at
//! `(pan.x + cx * zoom, pan.y + cy * zoom)`. The grid repeats every
//! `grid_spacing * zoom` pixels with an offset of `pan % period`:
//!
//! ```rust
//! use orgchart_canvas::PannableZoomCanvas;
//!
//! let canvas = PannableZoomCanvas::new();
//! let view = canvas.view();
//! if let Some(grid) = view.grid() {
//!     for x in grid.vertical_lines(800.0) {
//!         // draw a vertical line at x
//!         assert!(x < 800.0);
//!     }
//! }
//! ```
//!
//! ## Tracing
//!
//! [`PannableZoomCanvas::handle_with_trace`] reports every state change to a
//! [`trace::CanvasTrace`] sink. See the [`trace`] module.
//!
//! ## Features
//!
//! - `std` (default) / `libm`: forwarded to Kurbo.
//! - `ui_events_adapter` (default): [`adapters::ui_events`] translation layer.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

pub mod adapters;
mod canvas;
mod config;
mod drag;
mod grid;
mod input;
pub mod trace;
mod transform;

pub use canvas::{CanvasDebugInfo, CanvasView, PannableZoomCanvas};
pub use config::{CanvasConfig, ConfigError};
pub use drag::{DragState, GestureState};
pub use grid::{GridLines, GridPattern};
pub use input::{CanvasInput, InputResponse, PointerButton};
pub use transform::ViewportTransform;
