// Copyright 2025 the Orgchart Canvas Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Benchmarks for `orgchart_canvas` input handling.

use criterion::{BatchSize, BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use kurbo::{Point, Size};
use orgchart_canvas::trace::TraceLog;
use orgchart_canvas::{CanvasInput, PannableZoomCanvas, PointerButton};

/// A trackpad-like burst: zoom direction flips every 16 wheel events while the
/// cursor drifts, interleaved with drag moves.
fn session(len: usize) -> Vec<CanvasInput> {
    let mut inputs = Vec::with_capacity(len + 2);
    inputs.push(CanvasInput::PointerDown {
        button: PointerButton::Primary,
        pos: Point::new(400.0, 300.0),
    });
    for i in 0..len {
        let t = i as f64;
        inputs.push(if i % 3 == 0 {
            CanvasInput::PointerMove {
                pos: Point::new(400.0 + t.sin() * 50.0, 300.0 + t.cos() * 50.0),
            }
        } else {
            CanvasInput::Wheel {
                delta_y: if (i / 16) % 2 == 0 { -1.0 } else { 1.0 },
                cursor: Point::new(t % 800.0, (t * 0.37) % 600.0),
            }
        });
    }
    inputs.push(CanvasInput::PointerUp);
    inputs
}

fn bench_handle(c: &mut Criterion) {
    let mut group = c.benchmark_group("canvas/handle");

    for len in [64_usize, 1_024, 16_384] {
        let inputs = session(len);

        group.bench_with_input(BenchmarkId::new("untraced", len), &inputs, |b, inputs| {
            b.iter_batched(
                PannableZoomCanvas::new,
                |mut canvas| {
                    for input in inputs {
                        black_box(canvas.handle(*input));
                    }
                    black_box(canvas.transform());
                },
                BatchSize::SmallInput,
            );
        });

        group.bench_with_input(BenchmarkId::new("trace_log", len), &inputs, |b, inputs| {
            b.iter_batched(
                || (PannableZoomCanvas::new(), TraceLog::new()),
                |(mut canvas, mut log)| {
                    for input in inputs {
                        black_box(canvas.handle_with_trace(*input, &mut log));
                    }
                    black_box(log.len());
                },
                BatchSize::SmallInput,
            );
        });
    }

    group.finish();
}

fn bench_grid_lines(c: &mut Criterion) {
    let mut canvas = PannableZoomCanvas::new();
    // Zoomed far out: the densest grid.
    for _ in 0..60 {
        let _ = canvas.on_wheel(1.0, Point::new(10.0, 10.0));
    }
    let view = canvas.view();
    let size = Size::new(3840.0, 2160.0);

    c.bench_function("canvas/grid_lines_4k", |b| {
        b.iter(|| {
            let Some(grid) = black_box(view).grid() else {
                return 0;
            };
            let xs = grid.vertical_lines(size.width).count();
            let ys = grid.horizontal_lines(size.height).count();
            black_box(xs + ys)
        });
    });
}

criterion_group!(benches, bench_handle, bench_grid_lines);
criterion_main!(benches);
