// Copyright 2025 the Orgchart Canvas Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Org chart canvas session.
//!
//! Replay a scripted sequence of wheel, drag and toolbar input against a
//! `PannableZoomCanvas`, printing every traced state change and the cards
//! that remain on screen.
//!
//! Run:
//! - `cargo run -p orgchart_canvas_demos --example org_chart_session`

use kurbo::{Point, Size};
use orgchart_canvas::trace::{TraceLog, TraceRecord};
use orgchart_canvas::{CanvasInput, PannableZoomCanvas, PointerButton};
use orgchart_canvas_demos::{sample_org_chart, visible_nodes};

fn main() {
    let nodes = sample_org_chart();
    let size = Size::new(800.0, 400.0);
    let mut canvas = PannableZoomCanvas::new();
    let mut log = TraceLog::new();

    let script = [
        // Three notches of zoom-in over the CEO card.
        CanvasInput::Wheel {
            delta_y: -100.0,
            cursor: Point::new(400.0, 50.0),
        },
        CanvasInput::Wheel {
            delta_y: -100.0,
            cursor: Point::new(400.0, 50.0),
        },
        CanvasInput::Wheel {
            delta_y: -100.0,
            cursor: Point::new(400.0, 50.0),
        },
        // A right-click does not start a drag.
        CanvasInput::PointerDown {
            button: PointerButton::Secondary,
            pos: Point::new(100.0, 100.0),
        },
        // Drag the chart to the left, then leave the canvas mid-drag.
        CanvasInput::PointerDown {
            button: PointerButton::Primary,
            pos: Point::new(600.0, 200.0),
        },
        CanvasInput::PointerMove {
            pos: Point::new(450.0, 190.0),
        },
        CanvasInput::PointerMove {
            pos: Point::new(300.0, 180.0),
        },
        CanvasInput::PointerLeave,
        CanvasInput::PointerMove {
            pos: Point::new(0.0, 0.0),
        },
        // Toolbar.
        CanvasInput::ZoomOut,
        CanvasInput::ToggleGrid,
        CanvasInput::ResetView,
    ];

    for input in script {
        log.clear();
        let response = canvas.handle_with_trace(input, &mut log);
        println!("{input:?}");
        for record in log.records() {
            match record {
                TraceRecord::Transform {
                    cause,
                    before,
                    after,
                } => println!(
                    "  {cause:?}: zoom {:.3} -> {:.3}, pan ({:.1}, {:.1}) -> ({:.1}, {:.1})",
                    before.zoom, after.zoom, before.pan.x, before.pan.y, after.pan.x, after.pan.y
                ),
                TraceRecord::Gesture { from, to } => println!("  gesture {from:?} -> {to:?}"),
                TraceRecord::Grid { show_grid } => println!("  grid shown: {show_grid}"),
                TraceRecord::Ignored(_) => println!("  ignored"),
            }
        }
        if response.prevent_default {
            println!("  (native scroll suppressed)");
        }

        let names: Vec<&str> = visible_nodes(&canvas.view(), size, &nodes)
            .iter()
            .map(|n| n.name)
            .collect();
        println!(
            "  zoom {:.0}%, zoom in {}, zoom out {}, visible: {}",
            canvas.zoom_percent(),
            if canvas.can_zoom_in() { "on" } else { "off" },
            if canvas.can_zoom_out() { "on" } else { "off" },
            names.join(", ")
        );
    }

    println!("{:#?}", canvas.debug_info());
}
