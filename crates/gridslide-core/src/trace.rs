//! Recording and replay of gesture streams.
//!
//! A trace pins the geometry it was captured against, so replays clamp the
//! same way regardless of the host's current layout. Traces are the
//! regression-fixture and headless-demo format; they are JSON on disk.

use crate::controller::{DragController, RenderSink, StaticLayout};
use crate::input::GestureEvent;
use kurbo::Size;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

/// Trace errors.
#[derive(Debug, Error)]
pub enum TraceError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Malformed trace: {0}")]
    Format(#[from] serde_json::Error),
}

/// A recorded gesture stream plus the geometry it was captured against.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GestureTrace {
    pub container: Size,
    pub element: Size,
    pub events: Vec<GestureEvent>,
}

impl GestureTrace {
    pub fn new(container: Size, element: Size) -> Self {
        Self {
            container,
            element,
            events: Vec::new(),
        }
    }

    /// Append an event produced by an input adapter.
    pub fn record(&mut self, event: GestureEvent) {
        self.events.push(event);
    }

    /// The geometry the trace was captured against.
    pub fn layout(&self) -> StaticLayout {
        StaticLayout::new(self.container, self.element)
    }

    /// Load a trace from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, TraceError> {
        let json = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&json)?)
    }

    /// Save the trace as JSON.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), TraceError> {
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;
        Ok(())
    }

    /// Replay every event through `controller` against the recorded
    /// geometry.
    pub fn replay(&self, controller: &mut DragController, sink: &mut impl RenderSink) {
        log::debug!(
            "replaying {} events against {:?}/{:?}",
            self.events.len(),
            self.container,
            self.element
        );
        let layout = self.layout();
        for event in &self.events {
            controller.handle_event(*event, &layout, sink);
        }
    }
}
