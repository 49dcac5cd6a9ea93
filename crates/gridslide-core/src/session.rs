//! Per-gesture drag session state.

use crate::input::PointerKind;
use kurbo::{Point, Vec2};

/// State for one press-move-release cycle.
///
/// The anchor is the translation that maps pointer positions onto element
/// offsets so the element stays continuous under the pointer at the press
/// instant. It is fixed for the session's lifetime.
#[derive(Debug, Clone)]
pub struct GestureSession {
    kind: PointerKind,
    anchor: Vec2,
    start_point: Point,
    last_point: Point,
}

impl GestureSession {
    /// Begin a session at `point`. `baseline` is the offset the element
    /// currently rests at (for touch sessions, the accumulated travel).
    pub fn begin(kind: PointerKind, point: Point, baseline: Vec2) -> Self {
        Self {
            kind,
            anchor: Vec2::new(baseline.x - point.x, baseline.y - point.y),
            start_point: point,
            last_point: point,
        }
    }

    /// Record a pointer position and return the proposed (unclamped)
    /// offset.
    pub fn propose(&mut self, point: Point) -> Vec2 {
        self.last_point = point;
        Vec2::new(point.x + self.anchor.x, point.y + self.anchor.y)
    }

    /// Raw pointer travel from the press point to the latest position.
    pub fn travel(&self) -> Vec2 {
        self.last_point - self.start_point
    }

    pub fn kind(&self) -> PointerKind {
        self.kind
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_proposal_is_continuous_at_the_press_point() {
        let baseline = Vec2::new(-120.0, -35.5);
        let press = Point::new(48.0, 96.0);
        let mut session = GestureSession::begin(PointerKind::Mouse, press, baseline);
        // A move at the press point itself reproduces the rest offset.
        assert_eq!(session.propose(press), baseline);
    }

    #[test]
    fn test_proposal_tracks_pointer_delta() {
        let mut session =
            GestureSession::begin(PointerKind::Mouse, Point::new(50.0, 50.0), Vec2::ZERO);
        assert_eq!(session.propose(Point::new(10.0, 10.0)), Vec2::new(-40.0, -40.0));
        assert_eq!(session.propose(Point::new(60.0, 45.0)), Vec2::new(10.0, -5.0));
    }

    #[test]
    fn test_travel_spans_start_to_latest() {
        let mut session =
            GestureSession::begin(PointerKind::Touch, Point::new(10.0, 10.0), Vec2::ZERO);
        assert_eq!(session.travel(), Vec2::ZERO);
        session.propose(Point::new(25.0, 5.0));
        session.propose(Point::new(30.0, 10.0));
        assert_eq!(session.travel(), Vec2::new(20.0, 0.0));
    }
}
