use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

thread_local! {
    static ACTIVE: RefCell<Option<Weak<ScopeState>>> = const { RefCell::new(None) };
}

/// Lifetime of a screen (or any other owner of cleanups).
///
/// Disposers registered while the scope is current run exactly once, when the
/// scope is disposed or its last handle is dropped, children first.
#[derive(Clone)]
pub struct Scope {
    state: Rc<ScopeState>,
}

#[derive(Default)]
struct ScopeState {
    disposers: RefCell<Vec<Box<dyn FnOnce()>>>,
    children: RefCell<Vec<Scope>>,
    closed: Cell<bool>,
}

impl Default for Scope {
    fn default() -> Self {
        Self::new()
    }
}

impl Scope {
    pub fn new() -> Self {
        Self {
            state: Rc::new(ScopeState::default()),
        }
    }

    /// Runs `f` with this scope as the current one, so whatever `f` schedules
    /// is torn down with it.
    pub fn run<R>(&self, f: impl FnOnce() -> R) -> R {
        struct Reinstate(Option<Weak<ScopeState>>);
        impl Drop for Reinstate {
            fn drop(&mut self) {
                let outer = self.0.take();
                ACTIVE.with(|a| *a.borrow_mut() = outer);
            }
        }
        let outer = ACTIVE.with(|a| a.replace(Some(Rc::downgrade(&self.state))));
        // reinstated on unwind too
        let _reinstate = Reinstate(outer);
        f()
    }

    pub fn add_disposer(&self, disposer: impl FnOnce() + 'static) {
        if self.state.closed.get() {
            disposer();
        } else {
            self.state.disposers.borrow_mut().push(Box::new(disposer));
        }
    }

    /// A scope disposed together with this one.
    pub fn child(&self) -> Scope {
        let child = Scope::new();
        if self.state.closed.get() {
            child.state.close();
        } else {
            self.state.children.borrow_mut().push(child.clone());
        }
        child
    }

    pub fn is_disposed(&self) -> bool {
        self.state.closed.get()
    }

    pub fn dispose(self) {
        self.state.close();
    }
}

impl ScopeState {
    fn close(&self) {
        if self.closed.replace(true) {
            return;
        }
        for child in self.children.take() {
            child.dispose();
        }
        for disposer in self.disposers.take() {
            disposer();
        }
    }
}

impl Drop for ScopeState {
    fn drop(&mut self) {
        self.close();
    }
}

/// The scope of the innermost enclosing [`Scope::run`], if any.
pub fn current_scope() -> Option<Scope> {
    ACTIVE.with(|a| {
        a.borrow()
            .as_ref()
            .and_then(Weak::upgrade)
            .map(|state| Scope { state })
    })
}
