// Copyright 2025 the Orgchart Canvas Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Affine, Point, Rect, Size, Vec2};

/// Uniform pan+zoom mapping from content space into canvas screen space.
///
/// A content point `(cx, cy)` lands on screen at
/// `(pan.x + cx * zoom, pan.y + cy * zoom)`: the content is scaled about the
/// canvas top-left corner, then translated by `pan` (in screen pixels).
///
/// `ViewportTransform` is a plain value. It does not enforce zoom limits by
/// itself; [`PannableZoomCanvas`](crate::PannableZoomCanvas) owns the clamping
/// policy and only ever stores in-range transforms.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewportTransform {
    /// Uniform scale applied to content before translation.
    pub zoom: f64,
    /// Translation in screen pixels, applied after scaling.
    pub pan: Vec2,
}

impl Default for ViewportTransform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl ViewportTransform {
    /// The reset view: zoom `1.0`, no pan.
    pub const IDENTITY: Self = Self {
        zoom: 1.0,
        pan: Vec2::ZERO,
    };

    /// Creates a transform from a zoom factor and a pan offset.
    #[must_use]
    pub const fn new(zoom: f64, pan: Vec2) -> Self {
        Self { zoom, pan }
    }

    /// Returns the content → screen affine transform.
    ///
    /// Equivalent to the CSS `translate(panX, panY) scale(zoom)` with the
    /// transform origin at the top-left corner.
    #[must_use]
    pub fn content_to_screen(&self) -> Affine {
        Affine::translate(self.pan) * Affine::scale(self.zoom)
    }

    /// Returns the screen → content affine transform.
    #[must_use]
    pub fn screen_to_content(&self) -> Affine {
        self.content_to_screen().inverse()
    }

    /// Maps a content-space point to screen space.
    #[must_use]
    pub fn content_to_screen_point(&self, pt: Point) -> Point {
        Point::new(
            self.pan.x + pt.x * self.zoom,
            self.pan.y + pt.y * self.zoom,
        )
    }

    /// Maps a screen-space point back into content space.
    #[must_use]
    pub fn screen_to_content_point(&self, pt: Point) -> Point {
        Point::new(
            (pt.x - self.pan.x) / self.zoom,
            (pt.y - self.pan.y) / self.zoom,
        )
    }

    /// Maps a content-space rectangle to screen space.
    #[must_use]
    pub fn content_to_screen_rect(&self, rect: Rect) -> Rect {
        // Zoom is uniform and positive, so the corners keep their order.
        Rect::from_points(
            self.content_to_screen_point(rect.origin()),
            self.content_to_screen_point(Point::new(rect.x1, rect.y1)),
        )
    }

    /// Maps a screen-space rectangle into content space.
    #[must_use]
    pub fn screen_to_content_rect(&self, rect: Rect) -> Rect {
        Rect::from_points(
            self.screen_to_content_point(rect.origin()),
            self.screen_to_content_point(Point::new(rect.x1, rect.y1)),
        )
    }

    /// Returns the content-space rectangle visible through a canvas of
    /// `view_size` pixels.
    ///
    /// Useful for culling org-chart nodes that are panned off-screen.
    #[must_use]
    pub fn visible_content_rect(&self, view_size: Size) -> Rect {
        self.screen_to_content_rect(view_size.to_rect())
    }

    /// Returns the transform that keeps `anchor` (screen space) fixed while
    /// switching to `new_zoom`.
    #[must_use]
    pub fn zoomed_about(&self, anchor: Point, new_zoom: f64) -> Self {
        let content = self.screen_to_content_point(anchor);
        Self {
            zoom: new_zoom,
            pan: Vec2::new(anchor.x - content.x * new_zoom, anchor.y - content.y * new_zoom),
        }
    }

    /// Returns this transform with `delta` added to the pan offset.
    #[must_use]
    pub fn panned_by(&self, delta: Vec2) -> Self {
        Self {
            zoom: self.zoom,
            pan: self.pan + delta,
        }
    }

    /// Returns this transform with a new zoom and the same pan.
    #[must_use]
    pub fn with_zoom(&self, zoom: f64) -> Self {
        Self {
            zoom,
            pan: self.pan,
        }
    }

    /// Returns `true` if zoom and pan are all finite.
    #[must_use]
    pub fn is_finite(&self) -> bool {
        self.zoom.is_finite() && self.pan.is_finite()
    }
}

#[cfg(test)]
mod tests {
    use kurbo::{Point, Rect, Size, Vec2};

    use super::ViewportTransform;

    fn assert_point_near(a: Point, b: Point) {
        assert!(
            (a.x - b.x).abs() < 1e-9 && (a.y - b.y).abs() < 1e-9,
            "{a:?} != {b:?}"
        );
    }

    #[test]
    fn content_screen_roundtrip() {
        let t = ViewportTransform::new(1.75, Vec2::new(-30.0, 12.5));

        let content = Point::new(10.0, -5.0);
        let screen = t.content_to_screen_point(content);
        assert_point_near(screen, Point::new(-30.0 + 17.5, 12.5 - 8.75));
        assert_point_near(t.screen_to_content_point(screen), content);
    }

    #[test]
    fn affine_matches_point_mapping() {
        let t = ViewportTransform::new(0.5, Vec2::new(40.0, 8.0));
        let p = Point::new(120.0, -64.0);
        assert_point_near(t.content_to_screen() * p, t.content_to_screen_point(p));
        assert_point_near(t.screen_to_content() * p, t.screen_to_content_point(p));
    }

    #[test]
    fn zoomed_about_keeps_anchor_fixed() {
        let t = ViewportTransform::new(1.2, Vec2::new(15.0, -7.0));
        let anchor = Point::new(320.0, 240.0);
        let content_before = t.screen_to_content_point(anchor);

        let z = t.zoomed_about(anchor, 2.4);
        assert_eq!(z.zoom, 2.4);
        assert_point_near(z.content_to_screen_point(content_before), anchor);
    }

    #[test]
    fn visible_rect_tracks_pan_and_zoom() {
        let view = Size::new(800.0, 600.0);
        assert_eq!(
            ViewportTransform::IDENTITY.visible_content_rect(view),
            Rect::new(0.0, 0.0, 800.0, 600.0)
        );

        // Zoomed in 2x and panned left by 100px: we see half as much content,
        // starting 50 content units to the right.
        let t = ViewportTransform::new(2.0, Vec2::new(-100.0, 0.0));
        let visible = t.visible_content_rect(view);
        assert!((visible.x0 - 50.0).abs() < 1e-9, "x0 = {}", visible.x0);
        assert!((visible.width() - 400.0).abs() < 1e-9, "width");
        assert!((visible.height() - 300.0).abs() < 1e-9, "height");
    }

    #[test]
    fn rect_mapping_culls_offscreen_nodes() {
        let t = ViewportTransform::new(1.0, Vec2::new(-1_000.0, 0.0));
        let node = Rect::new(0.0, 0.0, 200.0, 80.0);
        let on_screen = t.content_to_screen_rect(node);
        let view = Size::new(800.0, 600.0).to_rect();
        assert!(
            on_screen.intersect(view).area() <= 0.0,
            "node should be panned off-screen"
        );
    }
}
