// Copyright 2025 the Orgchart Canvas Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! ASCII rendering of the canvas.
//!
//! Draw the sample org chart and its grid as text, before and after a
//! cursor-anchored zoom, to show that the card under the cursor stays put
//! and the grid stays locked to the content.
//!
//! Run:
//! - `cargo run -p orgchart_canvas_demos --example ascii_canvas`

use kurbo::Point;
use orgchart_canvas::{PannableZoomCanvas, PointerButton};
use orgchart_canvas_demos::{render_ascii, sample_org_chart};

const COLS: usize = 80;
const ROWS: usize = 32;
const CELL: f64 = 10.0;

fn main() {
    let nodes = sample_org_chart();
    let mut canvas = PannableZoomCanvas::new();

    println!("== Initial view ==");
    print!("{}", render_ascii(&canvas.view(), &nodes, COLS, ROWS, CELL));

    // Zoom in around the middle of the CEO card.
    let cursor = Point::new(400.0, 50.0);
    for _ in 0..8 {
        let _ = canvas.on_wheel(-1.0, cursor);
    }
    println!("== Zoomed to {:.0}% around {cursor:?} ==", canvas.zoom_percent());
    print!("{}", render_ascii(&canvas.view(), &nodes, COLS, ROWS, CELL));

    // Drag the chart up and to the right.
    let _ = canvas.on_pointer_down(PointerButton::Primary, Point::new(200.0, 200.0));
    let _ = canvas.on_pointer_move(Point::new(260.0, 120.0));
    let _ = canvas.on_pointer_up();
    println!("== Panned by (60, -80) ==");
    print!("{}", render_ascii(&canvas.view(), &nodes, COLS, ROWS, CELL));
}
