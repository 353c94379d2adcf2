// Copyright 2025 the Orgchart Canvas Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::Vec2;

use crate::ViewportTransform;

/// Screen-space description of the repeating background grid.
///
/// Lines repeat every `period` screen pixels on both axes and are shifted by
/// `offset`, so the grid stays locked to content while panning and zooming.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GridPattern {
    /// Distance between adjacent grid lines in screen pixels.
    pub period: f64,
    /// Offset of the pattern origin in screen pixels.
    ///
    /// Computed with truncated remainder, so it carries the sign of the pan
    /// and lies in `(-period, period)`.
    pub offset: Vec2,
}

impl GridPattern {
    /// Builds the grid for `transform` with `spacing` content units between lines.
    ///
    /// `period = spacing * zoom`, `offset = (pan.x % period, pan.y % period)`.
    #[must_use]
    pub fn for_transform(transform: &ViewportTransform, spacing: f64) -> Self {
        let period = spacing * transform.zoom;
        Self {
            period,
            offset: Vec2::new(transform.pan.x % period, transform.pan.y % period),
        }
    }

    /// Screen x positions of vertical lines in `[0, width)`.
    #[must_use]
    pub fn vertical_lines(&self, width: f64) -> GridLines {
        GridLines::new(self.offset.x, self.period, width)
    }

    /// Screen y positions of horizontal lines in `[0, height)`.
    #[must_use]
    pub fn horizontal_lines(&self, height: f64) -> GridLines {
        GridLines::new(self.offset.y, self.period, height)
    }
}

/// Iterator over grid line positions along one axis.
#[derive(Clone, Debug)]
pub struct GridLines {
    next: f64,
    period: f64,
    end: f64,
}

impl GridLines {
    fn new(offset: f64, period: f64, end: f64) -> Self {
        if !(period.is_finite() && period > 0.0 && offset.is_finite() && end.is_finite()) {
            return Self {
                next: 0.0,
                period: 1.0,
                end: 0.0,
            };
        }
        let mut first = offset % period;
        if first < 0.0 {
            first += period;
        }
        Self {
            next: first,
            period,
            end,
        }
    }
}

impl Iterator for GridLines {
    type Item = f64;

    fn next(&mut self) -> Option<f64> {
        if self.next >= self.end {
            return None;
        }
        let pos = self.next;
        self.next += self.period;
        Some(pos)
    }
}
