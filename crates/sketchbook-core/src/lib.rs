//! # Core types for Sketchbook screens
//!
//! Everything the demo screens and the range slider share lives here:
//!
//! - geometry (`Vec2`, `Size`, `Rect`, `Transform`) in physical pixels,
//! - `Color` and `Brush`,
//! - pointer input events as delivered by the host shell,
//! - density locals (`Dp`, `Sp`, `with_density`) for dp→px conversion,
//! - `Scope` for tying cleanups to a screen's lifetime,
//! - the animation clock, `AnimatedValue` and one‑shot `Timer`s.
//!
//! ## Density
//!
//! Widgets are configured in density‑independent units and resolved to pixels
//! when they are laid out:
//!
//! ```rust
//! use sketchbook_core::*;
//!
//! let px = with_density(Density::new(2.0), || Dp(16.0).to_px());
//! assert_eq!(px, 32.0);
//! ```
//!
//! ## Scopes and timers
//!
//! A screen runs its setup inside a `Scope`. Anything scheduled there is torn
//! down with the scope, so a delayed callback can never touch a screen that is
//! already gone:
//!
//! ```rust
//! use sketchbook_core::*;
//!
//! let scope = Scope::new();
//! let timer = scope.run(|| schedule_once(Duration::from_millis(1000), || {
//!     println!("never printed");
//! }));
//! scope.dispose();
//! assert!(timer.is_cancelled());
//! ```

pub mod animation;
pub mod color;
pub mod geometry;
pub mod input;
pub mod locals;
pub mod prelude;
pub mod scope;
pub mod signal;
pub mod tests;
pub mod timer;

pub use animation::*;
pub use color::*;
pub use geometry::*;
pub use input::*;
pub use locals::*;
pub use scope::*;
pub use signal::*;
pub use timer::*;
