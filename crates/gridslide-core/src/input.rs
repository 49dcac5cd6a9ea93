//! Unified pointer input for mouse and touch devices.
//!
//! Two thin per-device adapters feed one canonical gesture stream, so
//! everything downstream is written once over [`GestureEvent`]. Within one
//! device kind, events keep their arrival order; a move with no preceding
//! start is discarded at the adapter and ignored again by the controller.

use kurbo::Point;
use serde::{Deserialize, Serialize};

/// Which device kind produced a gesture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PointerKind {
    Mouse,
    Touch,
}

/// Canonical gesture event.
///
/// `End` carries the final contact point when the device reports one
/// (touch); mouse release and leave carry none.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum GestureEvent {
    Start { kind: PointerKind, point: Point },
    Move { point: Point },
    End { point: Option<Point> },
}

/// Mouse-lane adapter.
///
/// Tracks the hover position continuously because a button press on some
/// host toolkits carries no position of its own. `Move` is emitted only
/// while the primary button is held; a leave while pressed ends the gesture
/// so no session is left dangling.
#[derive(Debug, Clone, Default)]
pub struct MouseAdapter {
    position: Point,
    pressed: bool,
}

impl MouseAdapter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Cursor moved over the element.
    pub fn on_move(&mut self, position: Point) -> Option<GestureEvent> {
        self.position = position;
        if !self.pressed {
            return None;
        }
        Some(GestureEvent::Move { point: position })
    }

    /// Primary button pressed at the last known cursor position.
    pub fn on_press(&mut self) -> Option<GestureEvent> {
        if self.pressed {
            return None;
        }
        self.pressed = true;
        Some(GestureEvent::Start {
            kind: PointerKind::Mouse,
            point: self.position,
        })
    }

    /// Primary button released.
    pub fn on_release(&mut self) -> Option<GestureEvent> {
        if !self.pressed {
            return None;
        }
        self.pressed = false;
        Some(GestureEvent::End { point: None })
    }

    /// Cursor left the element. Same transition as a release, so the
    /// session cannot dangle while the button is still down outside.
    pub fn on_leave(&mut self) -> Option<GestureEvent> {
        self.on_release()
    }
}

/// Touch-lane adapter.
///
/// Latches the first contact and ignores other fingers until it lifts.
/// Events missing their contact point no-op and leave prior state
/// untouched.
#[derive(Debug, Clone, Default)]
pub struct TouchAdapter {
    contact: Option<u64>,
}

impl TouchAdapter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn on_start(&mut self, id: u64, point: Option<Point>) -> Option<GestureEvent> {
        if self.contact.is_some() {
            return None;
        }
        let point = point?;
        self.contact = Some(id);
        Some(GestureEvent::Start {
            kind: PointerKind::Touch,
            point,
        })
    }

    pub fn on_move(&mut self, id: u64, point: Option<Point>) -> Option<GestureEvent> {
        if self.contact != Some(id) {
            return None;
        }
        let point = point?;
        Some(GestureEvent::Move { point })
    }

    /// A lifted or cancelled contact. A malformed end (no point) keeps the
    /// contact latched; the next well-formed end still closes it.
    pub fn on_end(&mut self, id: u64, point: Option<Point>) -> Option<GestureEvent> {
        if self.contact != Some(id) {
            return None;
        }
        let point = point?;
        self.contact = None;
        Some(GestureEvent::End { point: Some(point) })
    }
}

/// Facade bundling both adapters behind one gesture stream.
///
/// Hosts own one unifier per draggable element and forward raw toolkit
/// events into the matching lane; every `Some` result is fed to the
/// element's controller.
#[derive(Debug, Clone, Default)]
pub struct InputUnifier {
    mouse: MouseAdapter,
    touch: TouchAdapter,
}

impl InputUnifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mouse_moved(&mut self, position: Point) -> Option<GestureEvent> {
        self.mouse.on_move(position)
    }

    pub fn mouse_pressed(&mut self) -> Option<GestureEvent> {
        self.mouse.on_press()
    }

    pub fn mouse_released(&mut self) -> Option<GestureEvent> {
        self.mouse.on_release()
    }

    pub fn mouse_left(&mut self) -> Option<GestureEvent> {
        self.mouse.on_leave()
    }

    pub fn touch_started(&mut self, id: u64, point: Option<Point>) -> Option<GestureEvent> {
        self.touch.on_start(id, point)
    }

    pub fn touch_moved(&mut self, id: u64, point: Option<Point>) -> Option<GestureEvent> {
        self.touch.on_move(id, point)
    }

    pub fn touch_ended(&mut self, id: u64, point: Option<Point>) -> Option<GestureEvent> {
        self.touch.on_end(id, point)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mouse_move_without_press_is_discarded() {
        let mut mouse = MouseAdapter::new();
        assert!(mouse.on_move(Point::new(10.0, 10.0)).is_none());
    }

    #[test]
    fn test_mouse_press_starts_at_last_cursor_position() {
        let mut mouse = MouseAdapter::new();
        mouse.on_move(Point::new(50.0, 50.0));
        let event = mouse.on_press().unwrap();
        assert_eq!(
            event,
            GestureEvent::Start {
                kind: PointerKind::Mouse,
                point: Point::new(50.0, 50.0),
            }
        );
    }

    #[test]
    fn test_mouse_move_while_pressed_emits_move() {
        let mut mouse = MouseAdapter::new();
        mouse.on_press();
        let event = mouse.on_move(Point::new(30.0, 20.0)).unwrap();
        assert_eq!(
            event,
            GestureEvent::Move {
                point: Point::new(30.0, 20.0),
            }
        );
    }

    #[test]
    fn test_mouse_leave_ends_the_gesture() {
        let mut mouse = MouseAdapter::new();
        mouse.on_press();
        assert_eq!(mouse.on_leave(), Some(GestureEvent::End { point: None }));
        // The gesture ended; further moves are discarded until a new press.
        assert!(mouse.on_move(Point::new(5.0, 5.0)).is_none());
        assert!(mouse.on_release().is_none());
    }

    #[test]
    fn test_mouse_double_press_is_ignored() {
        let mut mouse = MouseAdapter::new();
        assert!(mouse.on_press().is_some());
        assert!(mouse.on_press().is_none());
    }

    #[test]
    fn test_touch_sequence_emits_start_move_end() {
        let mut touch = TouchAdapter::new();
        let start = touch.on_start(7, Some(Point::new(10.0, 10.0))).unwrap();
        assert!(matches!(start, GestureEvent::Start { kind: PointerKind::Touch, .. }));

        let moved = touch.on_move(7, Some(Point::new(20.0, 10.0))).unwrap();
        assert_eq!(
            moved,
            GestureEvent::Move {
                point: Point::new(20.0, 10.0),
            }
        );

        let end = touch.on_end(7, Some(Point::new(30.0, 10.0))).unwrap();
        assert_eq!(
            end,
            GestureEvent::End {
                point: Some(Point::new(30.0, 10.0)),
            }
        );
    }

    #[test]
    fn test_second_finger_is_ignored() {
        let mut touch = TouchAdapter::new();
        touch.on_start(1, Some(Point::new(10.0, 10.0)));
        assert!(touch.on_start(2, Some(Point::new(90.0, 90.0))).is_none());
        assert!(touch.on_move(2, Some(Point::new(95.0, 95.0))).is_none());
        // The latched finger still works.
        assert!(touch.on_move(1, Some(Point::new(15.0, 10.0))).is_some());
        assert!(touch.on_end(2, Some(Point::new(95.0, 95.0))).is_none());
        assert!(touch.on_end(1, Some(Point::new(15.0, 10.0))).is_some());
    }

    #[test]
    fn test_malformed_touch_end_leaves_state_untouched() {
        let mut touch = TouchAdapter::new();
        touch.on_start(1, Some(Point::new(10.0, 10.0)));
        assert!(touch.on_end(1, None).is_none());
        // Contact is still latched; a well-formed end closes it.
        assert!(touch.on_end(1, Some(Point::new(12.0, 10.0))).is_some());
    }

    #[test]
    fn test_touch_move_without_start_is_discarded() {
        let mut touch = TouchAdapter::new();
        assert!(touch.on_move(3, Some(Point::new(10.0, 10.0))).is_none());
        assert!(touch.on_end(3, Some(Point::new(10.0, 10.0))).is_none());
    }
}
