// Copyright 2025 the Orgchart Canvas Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Adapters from input event libraries to [`CanvasInput`](crate::CanvasInput).
//!
//! - [`ui_events`] (`ui_events_adapter` feature): converts
//!   `ui_events::pointer::PointerEvent` into canvas-local input.

#[cfg(feature = "ui_events_adapter")]
pub mod ui_events;
