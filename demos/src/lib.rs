// Copyright 2025 the Orgchart Canvas Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Shared helpers for the `orgchart_canvas` demos.
//!
//! - [`sample_org_chart`]: a small fixed org chart laid out in content space.
//! - [`render_ascii`]: a headless "renderer" that draws a [`CanvasView`] into
//!   a character grid, so the demos can show the effect of each input.

use kurbo::{Rect, Size};
use orgchart_canvas::CanvasView;

/// One org-chart card in content space.
#[derive(Clone, Debug)]
pub struct OrgNode {
    /// Person's name.
    pub name: &'static str,
    /// Job title.
    pub title: &'static str,
    /// Card bounds in content units.
    pub rect: Rect,
}

/// A three-level org chart: one executive, two managers, four reports.
#[must_use]
pub fn sample_org_chart() -> Vec<OrgNode> {
    let card = |name, title, x: f64, y: f64| OrgNode {
        name,
        title,
        rect: Rect::new(x, y, x + 160.0, y + 60.0),
    };
    vec![
        card("Avery Chen", "CEO", 320.0, 20.0),
        card("Jordan Patel", "VP Engineering", 120.0, 140.0),
        card("Sam Rivera", "VP People", 520.0, 140.0),
        card("Riley Okafor", "Staff Engineer", 20.0, 260.0),
        card("Casey Morgan", "Engineering Manager", 220.0, 260.0),
        card("Drew Kim", "Recruiter", 420.0, 260.0),
        card("Quinn Larsen", "HR Partner", 620.0, 260.0),
    ]
}

/// Nodes whose cards intersect the visible part of the canvas.
#[must_use]
pub fn visible_nodes<'a>(view: &CanvasView, size: Size, nodes: &'a [OrgNode]) -> Vec<&'a OrgNode> {
    let visible = view.transform.visible_content_rect(size);
    nodes
        .iter()
        .filter(|n| n.rect.intersect(visible).area() > 0.0)
        .collect()
}

/// Draws `nodes` through `view` into a `cols` x `rows` character grid where
/// each cell covers `cell` screen pixels.
///
/// Grid lines are drawn with `.`, cards with `#`, and the top-left cell of
/// each card with the first letter of the person's name.
#[must_use]
pub fn render_ascii(view: &CanvasView, nodes: &[OrgNode], cols: usize, rows: usize, cell: f64) -> String {
    let mut canvas = vec![vec![' '; cols]; rows];
    let width = cols as f64 * cell;
    let height = rows as f64 * cell;

    if let Some(grid) = view.grid() {
        // Sparse grids only; a dense grid would fill every cell.
        if grid.period >= cell * 2.0 {
            for x in grid.vertical_lines(width) {
                let col = (x / cell) as usize;
                for row in &mut canvas {
                    if let Some(c) = row.get_mut(col) {
                        *c = '.';
                    }
                }
            }
            for y in grid.horizontal_lines(height) {
                if let Some(row) = canvas.get_mut((y / cell) as usize) {
                    row.fill('.');
                }
            }
        }
    }

    let screen = Rect::new(0.0, 0.0, width, height);
    for node in nodes {
        let r = view.transform.content_to_screen_rect(node.rect).intersect(screen);
        if r.area() <= 0.0 {
            continue;
        }
        let (c0, c1) = ((r.x0 / cell) as usize, ((r.x1 / cell) as usize).min(cols));
        let (r0, r1) = ((r.y0 / cell) as usize, ((r.y1 / cell) as usize).min(rows));
        for row in &mut canvas[r0..r1] {
            for c in &mut row[c0..c1] {
                *c = '#';
            }
        }
        if r0 < r1 && c0 < c1 {
            canvas[r0][c0] = node.name.chars().next().unwrap_or('?');
        }
    }

    let mut out = String::with_capacity(rows * (cols + 1));
    for row in canvas {
        out.extend(row);
        out.push('\n');
    }
    out
}
