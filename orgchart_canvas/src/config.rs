// Copyright 2025 the Orgchart Canvas Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Canvas tuning knobs and their validation.

use core::fmt;

/// Tuning parameters for a [`PannableZoomCanvas`](crate::PannableZoomCanvas).
///
/// The defaults reproduce the org chart behavior:
///
/// | Field | Default |
/// |---|---|
/// | `zoom_min` | `0.1` |
/// | `zoom_max` | `3.0` |
/// | `wheel_zoom_in` | `1.05` |
/// | `wheel_zoom_out` | `0.95` |
/// | `zoom_step` | `0.1` |
/// | `min_zoom_delta` | `0.001` |
/// | `grid_spacing` | `20.0` |
///
/// The two wheel factors are not multiplicative inverses of each other, so a
/// zoom-in step followed by a zoom-out step does not land exactly on the
/// starting zoom.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CanvasConfig {
    /// Smallest allowed zoom factor.
    pub zoom_min: f64,
    /// Largest allowed zoom factor.
    pub zoom_max: f64,
    /// Multiplicative factor applied for wheel events with `delta_y <= 0`.
    pub wheel_zoom_in: f64,
    /// Multiplicative factor applied for wheel events with `delta_y > 0`.
    pub wheel_zoom_out: f64,
    /// Additive increment used by the zoom-in/zoom-out buttons.
    pub zoom_step: f64,
    /// Wheel zoom changes at or below this magnitude are dropped.
    pub min_zoom_delta: f64,
    /// Grid period in content units (screen pixels at zoom `1.0`).
    pub grid_spacing: f64,
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            zoom_min: 0.1,
            zoom_max: 3.0,
            wheel_zoom_in: 1.05,
            wheel_zoom_out: 0.95,
            zoom_step: 0.1,
            min_zoom_delta: 0.001,
            grid_spacing: 20.0,
        }
    }
}

impl CanvasConfig {
    /// Returns the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the zoom limits.
    #[must_use]
    pub fn with_zoom_limits(mut self, zoom_min: f64, zoom_max: f64) -> Self {
        self.zoom_min = zoom_min;
        self.zoom_max = zoom_max;
        self
    }

    /// Sets the wheel zoom factors for zooming in and out.
    #[must_use]
    pub fn with_wheel_factors(mut self, zoom_in: f64, zoom_out: f64) -> Self {
        self.wheel_zoom_in = zoom_in;
        self.wheel_zoom_out = zoom_out;
        self
    }

    /// Sets the button zoom increment.
    #[must_use]
    pub fn with_zoom_step(mut self, step: f64) -> Self {
        self.zoom_step = step;
        self
    }

    /// Sets the minimum wheel zoom change that is committed.
    #[must_use]
    pub fn with_min_zoom_delta(mut self, delta: f64) -> Self {
        self.min_zoom_delta = delta;
        self
    }

    /// Sets the grid period in content units.
    #[must_use]
    pub fn with_grid_spacing(mut self, spacing: f64) -> Self {
        self.grid_spacing = spacing;
        self
    }

    /// Checks that every field is usable.
    ///
    /// The reset zoom of `1.0` must lie inside `[zoom_min, zoom_max]`,
    /// otherwise [`reset_view`](crate::PannableZoomCanvas::reset_view) would
    /// break the zoom invariant.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let Self {
            zoom_min,
            zoom_max,
            wheel_zoom_in,
            wheel_zoom_out,
            zoom_step,
            min_zoom_delta,
            grid_spacing,
        } = *self;

        if !(zoom_min.is_finite() && zoom_max.is_finite())
            || zoom_min <= 0.0
            || zoom_min > 1.0
            || zoom_max < 1.0
        {
            return Err(ConfigError::InvalidZoomLimits { zoom_min, zoom_max });
        }
        if !(wheel_zoom_in.is_finite() && wheel_zoom_in > 1.0) {
            return Err(ConfigError::InvalidWheelFactor {
                factor: wheel_zoom_in,
            });
        }
        if !(wheel_zoom_out.is_finite() && wheel_zoom_out > 0.0 && wheel_zoom_out < 1.0) {
            return Err(ConfigError::InvalidWheelFactor {
                factor: wheel_zoom_out,
            });
        }
        if !(zoom_step.is_finite() && zoom_step > 0.0) {
            return Err(ConfigError::InvalidZoomStep { step: zoom_step });
        }
        if !(min_zoom_delta.is_finite() && min_zoom_delta >= 0.0) {
            return Err(ConfigError::InvalidMinZoomDelta {
                delta: min_zoom_delta,
            });
        }
        if !(grid_spacing.is_finite() && grid_spacing > 0.0) {
            return Err(ConfigError::InvalidGridSpacing {
                spacing: grid_spacing,
            });
        }
        Ok(())
    }
}

/// Error returned when a [`CanvasConfig`] fails validation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ConfigError {
    /// Limits are non-finite, non-positive, or do not bracket `1.0`.
    InvalidZoomLimits {
        /// Requested minimum zoom.
        zoom_min: f64,
        /// Requested maximum zoom.
        zoom_max: f64,
    },
    /// A wheel factor points the wrong way or is not finite.
    InvalidWheelFactor {
        /// The offending factor.
        factor: f64,
    },
    /// The button zoom step is not a positive finite number.
    InvalidZoomStep {
        /// The offending step.
        step: f64,
    },
    /// The wheel no-op threshold is negative or not finite.
    InvalidMinZoomDelta {
        /// The offending threshold.
        delta: f64,
    },
    /// The grid spacing is not a positive finite number.
    InvalidGridSpacing {
        /// The offending spacing.
        spacing: f64,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidZoomLimits { zoom_min, zoom_max } => write!(
                f,
                "zoom limits [{zoom_min}, {zoom_max}] must be finite, positive and contain 1.0"
            ),
            Self::InvalidWheelFactor { factor } => write!(
                f,
                "wheel zoom factor {factor} must be finite, above 1.0 to zoom in and in (0, 1) to zoom out"
            ),
            Self::InvalidZoomStep { step } => {
                write!(f, "zoom step {step} must be finite and positive")
            }
            Self::InvalidMinZoomDelta { delta } => {
                write!(f, "minimum zoom delta {delta} must be finite and non-negative")
            }
            Self::InvalidGridSpacing { spacing } => {
                write!(f, "grid spacing {spacing} must be finite and positive")
            }
        }
    }
}

impl core::error::Error for ConfigError {}
