//! One‑shot delayed callbacks on the UI thread.
//!
//! The host shell calls [`run_due_timers`] once per frame. A timer scheduled
//! inside a [`Scope`](crate::Scope) is cancelled when that scope is disposed,
//! so its callback never runs against a torn‑down screen.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use crate::animation::{Duration, Instant, now};
use crate::scope::current_scope;

thread_local! {
    static QUEUE: RefCell<TimerQueue> = RefCell::new(TimerQueue::default());
}

#[derive(Default)]
struct TimerQueue {
    next_id: u64,
    pending: Vec<Pending>,
}

struct Pending {
    id: u64,
    due: Instant,
    task: Box<dyn FnOnce()>,
    state: Rc<Cell<TimerState>>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TimerState {
    Pending,
    Fired,
    Cancelled,
}

/// Handle to a scheduled callback.
#[derive(Clone, Debug)]
pub struct Timer {
    id: u64,
    state: Rc<Cell<TimerState>>,
}

impl Timer {
    pub fn state(&self) -> TimerState {
        self.state.get()
    }

    pub fn is_pending(&self) -> bool {
        self.state() == TimerState::Pending
    }

    pub fn is_cancelled(&self) -> bool {
        self.state() == TimerState::Cancelled
    }

    pub fn has_fired(&self) -> bool {
        self.state() == TimerState::Fired
    }

    /// No-op once fired or cancelled.
    pub fn cancel(&self) {
        if !self.is_pending() {
            return;
        }
        self.state.set(TimerState::Cancelled);
        let id = self.id;
        QUEUE.with(|q| q.borrow_mut().pending.retain(|p| p.id != id));
        log::debug!("timer {id} cancelled");
    }
}

/// Runs `task` once, `delay` from now on the UI clock.
pub fn schedule_once(delay: Duration, task: impl FnOnce() + 'static) -> Timer {
    let state = Rc::new(Cell::new(TimerState::Pending));
    let id = QUEUE.with(|q| {
        let mut q = q.borrow_mut();
        let id = q.next_id;
        q.next_id += 1;
        q.pending.push(Pending {
            id,
            due: now() + delay,
            task: Box::new(task),
            state: state.clone(),
        });
        id
    });
    let timer = Timer { id, state };

    if let Some(scope) = current_scope() {
        let t = timer.clone();
        scope.add_disposer(move || t.cancel());
    }
    timer
}

/// Fires every timer whose deadline has passed, earliest first. Returns how many ran.
pub fn run_due_timers() -> usize {
    let t = now();
    let mut due: Vec<Pending> = QUEUE.with(|q| {
        let mut q = q.borrow_mut();
        let (due, rest) = std::mem::take(&mut q.pending)
            .into_iter()
            .partition(|p| p.due <= t);
        q.pending = rest;
        due
    });
    due.sort_by_key(|p| (p.due, p.id));

    let mut ran = 0;
    for p in due {
        // An earlier task in this batch may have cancelled this one
        if p.state.get() != TimerState::Pending {
            continue;
        }
        p.state.set(TimerState::Fired);
        (p.task)();
        ran += 1;
    }
    ran
}

pub fn pending_timers() -> usize {
    QUEUE.with(|q| q.borrow().pending.len())
}
