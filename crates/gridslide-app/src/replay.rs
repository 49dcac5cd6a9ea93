//! Headless trace replay.

use gridslide_core::{
    DragController, ElementId, GestureEvent, GestureTrace, PointerKind, RenderSink, TraceError,
};
use kurbo::{Point, Size};
use std::path::Path;

/// Logs every applied offset.
#[derive(Debug, Default)]
struct LogSink {
    applied: usize,
}

impl RenderSink for LogSink {
    fn apply_offset(&mut self, element: ElementId, x: f64, y: f64) {
        self.applied += 1;
        log::info!("element {element}: offset ({x}, {y})");
    }
}

/// Replay the trace at `path` and log the resulting offsets.
pub fn run(path: &Path) -> Result<(), TraceError> {
    let trace = GestureTrace::load(path)?;
    let mut sink = LogSink::default();
    let mut controller = DragController::new(&mut sink);
    trace.replay(&mut controller, &mut sink);
    log::info!(
        "replayed {} events, {} offsets applied, final offset {:?}",
        trace.events.len(),
        sink.applied,
        controller.offset()
    );
    Ok(())
}

/// Write a small diagonal drag across the demo geometry, for trying out
/// `--replay`.
pub fn write_sample_trace(path: &Path) -> Result<(), TraceError> {
    let mut trace = GestureTrace::new(Size::new(960.0, 640.0), Size::new(384.0, 180.0));
    trace.record(GestureEvent::Start {
        kind: PointerKind::Mouse,
        point: Point::new(400.0, 300.0),
    });
    for step in 1..=10 {
        let t = step as f64;
        trace.record(GestureEvent::Move {
            point: Point::new(400.0 - 45.0 * t, 300.0 - 30.0 * t),
        });
    }
    trace.record(GestureEvent::End { point: None });
    trace.save(path)
}
