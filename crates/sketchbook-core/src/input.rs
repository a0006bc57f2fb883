//! Pointer input as delivered by the host shell, in widget‑local pixels.

use smallvec::SmallVec;

use crate::Vec2;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct PointerId(pub u64);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerKind {
    Mouse,
    Touch,
    Pen,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerButton {
    Primary,   // Left mouse, touch
    Secondary, // Right mouse
    Tertiary,  // Middle mouse
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerEventKind {
    Down(PointerButton),
    Up(PointerButton),
    Move,
    /// Contact lost without a regular lift (window focus loss, system gesture).
    Cancel,
    Enter,
    Leave,
}

#[derive(Clone, Debug, PartialEq)]
pub struct PointerEvent {
    pub id: PointerId,
    pub kind: PointerKind,
    pub event: PointerEventKind,
    pub position: Vec2,
    /// Positions batched by the platform between the previous event and this one,
    /// oldest first. Does not include `position`.
    pub historical: SmallVec<[Vec2; 4]>,
    pub pressure: f32,
}

impl PointerEvent {
    pub fn new(id: PointerId, event: PointerEventKind, position: Vec2) -> Self {
        Self {
            id,
            kind: PointerKind::Touch,
            event,
            position,
            historical: SmallVec::new(),
            pressure: 1.0,
        }
    }

    pub fn down(id: u64, position: Vec2) -> Self {
        Self::new(
            PointerId(id),
            PointerEventKind::Down(PointerButton::Primary),
            position,
        )
    }

    pub fn moved(id: u64, position: Vec2) -> Self {
        Self::new(PointerId(id), PointerEventKind::Move, position)
    }

    pub fn up(id: u64, position: Vec2) -> Self {
        Self::new(
            PointerId(id),
            PointerEventKind::Up(PointerButton::Primary),
            position,
        )
    }

    pub fn cancel(id: u64, position: Vec2) -> Self {
        Self::new(PointerId(id), PointerEventKind::Cancel, position)
    }

    pub fn with_historical(mut self, points: impl IntoIterator<Item = Vec2>) -> Self {
        self.historical.extend(points);
        self
    }
}
