//! Frame clock and time-based tweens.
//!
//! Everything here reads time through [`now`], which the host backs with the
//! system clock and tests back with a [`TestClock`] they advance by hand.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

pub use web_time::{Duration, Instant};

thread_local! {
    static CLOCK: RefCell<Option<Rc<dyn Clock>>> = const { RefCell::new(None) };
}

/// Current time on the UI thread's clock.
pub fn now() -> Instant {
    CLOCK.with(|c| match c.borrow().as_ref() {
        Some(clock) => clock.now(),
        None => Instant::now(),
    })
}

pub trait Clock: 'static {
    fn now(&self) -> Instant;
}

#[derive(Clone, Copy, Debug, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Instant {
        Instant::now()
    }
}

/// Install the clock used by animations and timers on this thread.
/// The host installs `SystemClock`; tests install a `TestClock`.
pub fn set_clock(clock: impl Clock) {
    CLOCK.with(|c| *c.borrow_mut() = Some(Rc::new(clock)));
}

/// Manually driven clock. Clones share the same time.
#[derive(Clone)]
pub struct TestClock {
    at: Rc<Cell<Instant>>,
}

impl Default for TestClock {
    fn default() -> Self {
        Self::new()
    }
}

impl TestClock {
    pub fn new() -> Self {
        Self {
            at: Rc::new(Cell::new(Instant::now())),
        }
    }

    pub fn advance(&self, by: Duration) {
        self.at.set(self.at.get() + by);
    }

    /// Creates a clock and installs it for the current thread.
    pub fn install() -> Self {
        let clock = Self::new();
        set_clock(clock.clone());
        clock
    }
}

impl Clock for TestClock {
    fn now(&self) -> Instant {
        self.at.get()
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Easing {
    Linear,
    EaseIn,
    EaseOut,
    #[default]
    EaseInOut,
}

impl Easing {
    /// Maps linear progress in `0..=1` to eased progress.
    pub fn apply(self, fraction: f32) -> f32 {
        let t = fraction.clamp(0.0, 1.0);
        match self {
            Easing::Linear => t,
            Easing::EaseIn => t * t,
            Easing::EaseOut => 1.0 - (1.0 - t) * (1.0 - t),
            Easing::EaseInOut if t < 0.5 => 2.0 * t * t,
            Easing::EaseInOut => 1.0 - 2.0 * (1.0 - t) * (1.0 - t),
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RepeatMode {
    #[default]
    Once,
    /// Jump back to the start value and run again, forever.
    Restart,
}

/// Where an animation is at a given time since it started.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Progress {
    Waiting,
    Running(f32),
    Finished,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AnimationSpec {
    pub duration: Duration,
    pub easing: Easing,
    /// Hold the start value this long before moving.
    pub delay: Duration,
    pub repeat: RepeatMode,
}

impl Default for AnimationSpec {
    fn default() -> Self {
        Self::tween(Duration::from_millis(300), Easing::default())
    }
}

impl AnimationSpec {
    pub fn tween(duration: Duration, easing: Easing) -> Self {
        Self {
            duration,
            easing,
            delay: Duration::ZERO,
            repeat: RepeatMode::Once,
        }
    }

    pub fn delayed(self, delay: Duration) -> Self {
        Self { delay, ..self }
    }

    pub fn infinite_repeatable(self) -> Self {
        Self {
            repeat: RepeatMode::Restart,
            ..self
        }
    }

    /// Linear (not yet eased) progress after `elapsed`.
    pub fn progress(&self, elapsed: Duration) -> Progress {
        let Some(active) = elapsed.checked_sub(self.delay) else {
            return Progress::Waiting;
        };
        if self.duration.is_zero() {
            return Progress::Finished;
        }
        let cycles = active.as_secs_f32() / self.duration.as_secs_f32();
        match self.repeat {
            RepeatMode::Once if active >= self.duration => Progress::Finished,
            RepeatMode::Once => Progress::Running(cycles),
            RepeatMode::Restart => Progress::Running(cycles.fract()),
        }
    }
}

/// Values an [`AnimatedValue`] can tween between.
pub trait Lerp: Clone {
    fn lerp(&self, to: &Self, fraction: f32) -> Self;
}

impl Lerp for f32 {
    fn lerp(&self, to: &Self, fraction: f32) -> Self {
        self + (to - self) * fraction
    }
}

/// A value that follows its target over time. Call [`update`](Self::update)
/// once per frame.
pub struct AnimatedValue<T: Lerp> {
    from: T,
    to: T,
    value: T,
    spec: AnimationSpec,
    started: Option<Instant>,
}

impl<T: Lerp> AnimatedValue<T> {
    pub fn new(initial: T, spec: AnimationSpec) -> Self {
        Self {
            from: initial.clone(),
            to: initial.clone(),
            value: initial,
            spec,
            started: None,
        }
    }

    /// Starts moving from the current value towards `target`.
    pub fn set_target(&mut self, target: T) {
        self.from = self.value.clone();
        self.to = target;
        self.started = Some(now());
    }

    /// Catches up with the clock. Returns true while still animating.
    pub fn update(&mut self) -> bool {
        let Some(started) = self.started else {
            return false;
        };
        match self.spec.progress(now().saturating_duration_since(started)) {
            Progress::Waiting => true,
            Progress::Running(fraction) => {
                self.value = self.from.lerp(&self.to, self.spec.easing.apply(fraction));
                true
            }
            Progress::Finished => {
                self.value = self.to.clone();
                self.started = None;
                false
            }
        }
    }

    pub fn get(&self) -> &T {
        &self.value
    }

    pub fn target(&self) -> &T {
        &self.to
    }

    pub fn is_animating(&self) -> bool {
        self.started.is_some()
    }
}
