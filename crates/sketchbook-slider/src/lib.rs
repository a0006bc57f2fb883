//! # Labeled range slider
//!
//! A bar with one marker and label per step and two draggable handles. The
//! caller supplies the steps (any strictly increasing, printable values) and
//! the initial bounds, and is told about a new range only when a drag ends:
//!
//! ```rust
//! use sketchbook_core::{PointerEvent, Size, Vec2};
//! use sketchbook_slider::LabeledRangeSlider;
//!
//! let steps: Vec<i32> = (0..=100).step_by(10).collect();
//! let mut slider = LabeledRangeSlider::new(10, 90, steps)
//!     .on_range_changed(|lower, upper| println!("{lower}..{upper}"));
//! slider.set_size(Size::new(352.0, 56.0));
//!
//! let x = slider.geometry().unwrap().step_x(5);
//! slider.handle_pointer(&PointerEvent::down(1, Vec2::new(x, 40.0)));
//! slider.handle_pointer(&PointerEvent::up(1, Vec2::new(x, 40.0)));
//! assert_eq!(slider.selection(), (50, 90));
//! ```
//!
//! The pieces are usable on their own: [`compute_geometry`] lays out the
//! steps, [`DragInterpreter`] turns pointer events into [`Interaction`]s,
//! [`Handles::apply`] moves and snaps the handles, and [`SliderPainter`]
//! records the frame.

mod error;
mod gesture;
mod handles;
mod layout;
mod render;
mod snap;
mod style;
mod widget;

pub use error::{Bound, SliderError};
pub use gesture::{DragInterpreter, Interaction, Interpreted};
pub use handles::{Commit, HandleId, HandleState, Handles};
pub use layout::{LayoutGeometry, compute_geometry};
pub use render::{LabelState, SliderPainter, label_state, step_label};
pub use snap::closest;
pub use style::{SliderMetrics, SliderStyle};
pub use widget::{LabeledRangeSlider, RangeCallback};

/// Values a slider can step through.
pub trait StepValue: Copy + PartialOrd + std::fmt::Display + 'static {}

impl<T: Copy + PartialOrd + std::fmt::Display + 'static> StepValue for T {}
