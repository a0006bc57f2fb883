use sketchbook_core::{PointerEvent, PointerEventKind, PointerId, Vec2};

/// What the pointer stream asks the handles to do, one value per event.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum Interaction {
    #[default]
    None,
    Move(Vec2),
    Released,
}

/// Result of feeding one pointer event to the interpreter.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Interpreted {
    pub interaction: Interaction,
    /// The event was claimed; ancestors must not interpret it again.
    pub consumed: bool,
}

impl Interpreted {
    const IGNORED: Interpreted = Interpreted {
        interaction: Interaction::None,
        consumed: false,
    };
}

/// Turns raw pointer events into [`Interaction`]s for a single contact at a time.
///
/// A contact starts with a press and emits `Move` for the press and for every
/// movement, then exactly one `Released` on lift or cancel. Events of other
/// contacts are ignored until the active one ends.
#[derive(Debug, Default)]
pub struct DragInterpreter {
    active: Option<Contact>,
}

#[derive(Clone, Copy, Debug)]
struct Contact {
    id: PointerId,
    last: Vec2,
}

impl DragInterpreter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_dragging(&self) -> bool {
        self.active.is_some()
    }

    pub fn on_pointer(&mut self, event: &PointerEvent) -> Interpreted {
        match (event.event, self.active) {
            (PointerEventKind::Down(_), None) => {
                self.active = Some(Contact {
                    id: event.id,
                    last: event.position,
                });
                Interpreted {
                    interaction: Interaction::Move(event.position),
                    consumed: false,
                }
            }
            (PointerEventKind::Down(_) | PointerEventKind::Move, Some(contact))
                if contact.id == event.id =>
            {
                let moved = contact.last != event.position;
                self.active = Some(Contact {
                    id: contact.id,
                    last: event.position,
                });
                Interpreted {
                    interaction: Interaction::Move(event.position),
                    consumed: moved,
                }
            }
            (PointerEventKind::Up(_) | PointerEventKind::Cancel, Some(contact))
                if contact.id == event.id =>
            {
                self.active = None;
                Interpreted {
                    interaction: Interaction::Released,
                    consumed: false,
                }
            }
            _ => Interpreted::IGNORED,
        }
    }

    /// Ends the active contact as if it had been lifted (e.g. the widget lost its window).
    pub fn cancel(&mut self) -> Interaction {
        match self.active.take() {
            Some(_) => Interaction::Released,
            None => Interaction::None,
        }
    }
}
