pub use crate::animation::{
    AnimatedValue, AnimationSpec, Duration, Easing, Instant, RepeatMode, SystemClock, TestClock,
    set_clock,
};
pub use crate::color::{Brush, Color};
pub use crate::geometry::{Rect, Size, Transform, Vec2};
pub use crate::input::{PointerEvent, PointerEventKind, PointerId};
pub use crate::locals::{Density, Dp, Sp, density, with_density};
pub use crate::scope::{Scope, current_scope};
pub use crate::signal::{Signal, signal};
pub use crate::timer::{Timer, run_due_timers, schedule_once};
