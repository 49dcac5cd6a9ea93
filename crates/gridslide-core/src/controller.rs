//! The drag state machine: propose, clamp, apply.

use crate::bounds;
use crate::input::{GestureEvent, PointerKind};
use crate::session::GestureSession;
use kurbo::{Point, Size, Vec2};
use uuid::Uuid;

/// Unique identifier for a draggable element.
pub type ElementId = Uuid;

/// Container and element dimensions, read fresh from the host on every
/// event so layout changes between drags are picked up. Implementations
/// must be free of side effects.
pub trait LayoutQuery {
    fn container_size(&self) -> Size;
    fn element_size(&self) -> Size;
}

/// Fixed geometry, for hosts whose layout is known up front and for tests.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StaticLayout {
    pub container: Size,
    pub element: Size,
}

impl StaticLayout {
    pub fn new(container: Size, element: Size) -> Self {
        Self { container, element }
    }
}

impl LayoutQuery for StaticLayout {
    fn container_size(&self) -> Size {
        self.container
    }

    fn element_size(&self) -> Size {
        self.element
    }
}

/// Receiving end of geometry mutations.
///
/// `apply_offset` must update the element's visual translation
/// synchronously; coordinates arrive rounded to two decimal places.
pub trait RenderSink {
    fn apply_offset(&mut self, element: ElementId, x: f64, y: f64);
}

/// Phase of the per-element drag state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DragPhase {
    #[default]
    Idle,
    Dragging,
}

/// Constrained drag controller for one element.
///
/// Converts the canonical gesture stream into clamped offset mutations on
/// the render sink. The offset is owned exclusively by the controller while
/// a session is active; illegal transitions (a move or end with no session)
/// are harmless and ignored.
#[derive(Debug)]
pub struct DragController {
    id: ElementId,
    /// Rest/applied offset. Always clamped and rounded.
    offset: Vec2,
    /// Raw pointer travel accumulated across touch sessions; seeds the
    /// anchor of the next touch session.
    touch_travel: Vec2,
    session: Option<GestureSession>,
    /// Visual marker for mouse sessions.
    active: bool,
}

impl DragController {
    /// Attach a controller to a new element and apply its rest transform.
    pub fn new(sink: &mut impl RenderSink) -> Self {
        let id = Uuid::new_v4();
        sink.apply_offset(id, 0.0, 0.0);
        Self {
            id,
            offset: Vec2::ZERO,
            touch_travel: Vec2::ZERO,
            session: None,
            active: false,
        }
    }

    pub fn id(&self) -> ElementId {
        self.id
    }

    /// The element's current (clamped, rounded) offset.
    pub fn offset(&self) -> Vec2 {
        self.offset
    }

    /// Accumulated raw touch travel across sessions.
    pub fn touch_travel(&self) -> Vec2 {
        self.touch_travel
    }

    pub fn phase(&self) -> DragPhase {
        if self.session.is_some() {
            DragPhase::Dragging
        } else {
            DragPhase::Idle
        }
    }

    /// Whether the mouse visual marker is on. Hosts render it however they
    /// like; touch sessions never set it.
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Feed one gesture event through propose → clamp → apply.
    pub fn handle_event(
        &mut self,
        event: GestureEvent,
        layout: &impl LayoutQuery,
        sink: &mut impl RenderSink,
    ) {
        match event {
            GestureEvent::Start { kind, point } => self.on_start(kind, point),
            GestureEvent::Move { point } => self.on_move(point, layout, sink),
            GestureEvent::End { point } => self.on_end(point, layout, sink),
        }
    }

    /// Force-end any active session without a further sink call.
    ///
    /// Hosts call this when the element is removed; the offset keeps its
    /// last applied value.
    pub fn cancel(&mut self) {
        if self.session.take().is_some() {
            log::debug!("drag cancelled for element {}", self.id);
        }
        self.active = false;
    }

    fn on_start(&mut self, kind: PointerKind, point: Point) {
        if self.session.is_some() {
            // One active session per element.
            return;
        }
        let baseline = match kind {
            PointerKind::Mouse => self.offset,
            PointerKind::Touch => self.touch_travel,
        };
        self.session = Some(GestureSession::begin(kind, point, baseline));
        if kind == PointerKind::Mouse {
            self.active = true;
        }
        log::trace!("drag start ({kind:?}) at {point:?} for element {}", self.id);
    }

    fn on_move(&mut self, point: Point, layout: &impl LayoutQuery, sink: &mut impl RenderSink) {
        let Some(session) = self.session.as_mut() else {
            return;
        };
        let proposed = session.propose(point);
        self.apply(proposed, layout, sink);
    }

    fn on_end(
        &mut self,
        point: Option<Point>,
        layout: &impl LayoutQuery,
        sink: &mut impl RenderSink,
    ) {
        let Some(mut session) = self.session.take() else {
            return;
        };
        if let Some(point) = point {
            // The final contact point is processed as a last move before the
            // session is dropped.
            let proposed = session.propose(point);
            self.apply(proposed, layout, sink);
        }
        if session.kind() == PointerKind::Touch {
            self.touch_travel += session.travel();
        }
        self.active = false;
        log::trace!("drag end at offset {:?} for element {}", self.offset, self.id);
    }

    fn apply(&mut self, proposed: Vec2, layout: &impl LayoutQuery, sink: &mut impl RenderSink) {
        let allowed =
            bounds::clamp_offset(proposed, layout.container_size(), layout.element_size());
        self.offset = Vec2::new(bounds::round_px(allowed.x), bounds::round_px(allowed.y));
        sink.apply_offset(self.id, self.offset.x, self.offset.y);
    }
}
