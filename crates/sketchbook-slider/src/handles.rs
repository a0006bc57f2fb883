//! Handle positions and the drag state machine that moves them.

use sketchbook_core::Vec2;

use crate::gesture::Interaction;
use crate::layout::LayoutGeometry;
use crate::snap::closest;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum HandleId {
    Lower,
    Upper,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HandleState {
    /// y is pinned to the bar center.
    pub position: Vec2,
    /// Only drives the shadow elevation.
    pub dragged: bool,
}

impl HandleState {
    fn resting(x: f32, y: f32) -> Self {
        Self {
            position: Vec2::new(x, y),
            dragged: false,
        }
    }

    fn x(&self) -> f32 {
        self.position.x
    }

    fn snap(&mut self, geometry: &LayoutGeometry) -> usize {
        let (x, index) = closest(&geometry.step_xs, self.x());
        self.position = self.position.with_x(x);
        self.dragged = false;
        index
    }
}

/// Step indices settled by a release.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Commit {
    pub lower: usize,
    pub upper: usize,
}

/// Both handles. Invariant: `lower.x <= upper.x - spacing`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Handles {
    pub lower: HandleState,
    pub upper: HandleState,
}

impl Handles {
    /// Both handles resting on the given step indices (`lower < upper`).
    pub fn at_steps(geometry: &LayoutGeometry, lower: usize, upper: usize) -> Self {
        debug_assert!(lower < upper && upper < geometry.step_count());
        let y = geometry.bar_y_center;
        Self {
            lower: HandleState::resting(geometry.step_x(lower), y),
            upper: HandleState::resting(geometry.step_x(upper), y),
        }
    }

    pub fn get(&self, id: HandleId) -> &HandleState {
        match id {
            HandleId::Lower => &self.lower,
            HandleId::Upper => &self.upper,
        }
    }

    /// The handle a pointer at `x` takes hold of: the nearer one, lower on a tie.
    pub fn target_for(&self, x: f32) -> HandleId {
        if (x - self.lower.x()).abs() <= (x - self.upper.x()).abs() {
            HandleId::Lower
        } else {
            HandleId::Upper
        }
    }

    /// Applies one interaction. Returns the settled step indices when a drag
    /// that moved a handle is released.
    pub fn apply(&mut self, interaction: Interaction, geometry: &LayoutGeometry) -> Option<Commit> {
        match interaction {
            Interaction::Move(p) => {
                self.drag_to(p.x, geometry);
                None
            }
            Interaction::Released => self.release(geometry),
            Interaction::None => None,
        }
    }

    fn drag_to(&mut self, x: f32, geometry: &LayoutGeometry) {
        let target = self.target_for(x);
        let spacing = geometry.spacing;

        match target {
            HandleId::Lower => {
                // A takeover leaves the other handle mid-air; settle it before clamping against it.
                if self.upper.dragged {
                    let index = self.upper.snap(geometry);
                    log::debug!("upper handle left mid-drag, snapped to step {index}");
                }
                let max = self.upper.x() - spacing;
                let new_x = if x < geometry.first_x() {
                    geometry.first_x()
                } else {
                    x.min(max)
                };
                self.lower.position = self.lower.position.with_x(new_x);
                self.lower.dragged = true;
            }
            HandleId::Upper => {
                if self.lower.dragged {
                    let index = self.lower.snap(geometry);
                    log::debug!("lower handle left mid-drag, snapped to step {index}");
                }
                let min = self.lower.x() + spacing;
                let new_x = if x > geometry.last_x() {
                    geometry.last_x()
                } else {
                    x.max(min)
                };
                self.upper.position = self.upper.position.with_x(new_x);
                self.upper.dragged = true;
            }
        }
        log::trace!(
            "pointer at {x:.1} drags {target:?}: lower={:.1} upper={:.1}",
            self.lower.x(),
            self.upper.x()
        );
    }

    fn release(&mut self, geometry: &LayoutGeometry) -> Option<Commit> {
        if !self.lower.dragged && !self.upper.dragged {
            return None;
        }
        let (_, lower) = closest(&geometry.step_xs, self.lower.x());
        let (_, upper) = closest(&geometry.step_xs, self.upper.x());
        if self.lower.dragged {
            self.lower.snap(geometry);
        }
        if self.upper.dragged {
            self.upper.snap(geometry);
        }
        Some(Commit { lower, upper })
    }
}
