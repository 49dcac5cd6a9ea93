//! GridSlide Core Library
//!
//! Platform-agnostic gesture model for dragging a board panel inside its
//! container: mouse and touch input unify into one canonical gesture stream,
//! a per-session anchor keeps the panel continuous under the pointer, and a
//! pure saturating clamp keeps the panel inside the container's visible
//! bounds. Hosts plug in through two small seams: [`controller::LayoutQuery`]
//! for geometry and [`controller::RenderSink`] for applying offsets.

pub mod bounds;
pub mod controller;
pub mod input;
pub mod session;
pub mod trace;

pub use bounds::{clamp_axis, clamp_offset, round_px};
pub use controller::{DragController, DragPhase, ElementId, LayoutQuery, RenderSink, StaticLayout};
pub use input::{GestureEvent, InputUnifier, MouseAdapter, PointerKind, TouchAdapter};
pub use session::GestureSession;
pub use trace::{GestureTrace, TraceError};
