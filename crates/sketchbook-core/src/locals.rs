//! # Density locals
//!
//! Screens and widgets are configured in density‑independent units:
//!
//! - `Dp` for lengths, scaled by `Density::scale`,
//! - `Sp` for text sizes, scaled by `Density::scale` and `Density::font_scale`.
//!
//! The current density is a thread‑local "composition local". The host shell
//! pushes the real device density with `with_density`; without one, dp == px.

use std::cell::RefCell;

thread_local! {
    static DENSITY_STACK: RefCell<Vec<Density>> = const { RefCell::new(Vec::new()) };
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Density {
    pub scale: f32,      // dp→px multiplier
    pub font_scale: f32, // user text scaling applied on top of `scale` for sp
}

impl Default for Density {
    fn default() -> Self {
        Self {
            scale: 1.0,
            font_scale: 1.0,
        }
    }
}

impl Density {
    pub fn new(scale: f32) -> Self {
        Self {
            scale,
            ..Self::default()
        }
    }
}

/// density‑independent pixels (dp)
#[derive(Clone, Copy, Debug, Default, PartialEq, PartialOrd)]
pub struct Dp(pub f32);

impl Dp {
    /// Converts this dp value into physical pixels using the current Density.
    pub fn to_px(self) -> f32 {
        self.to_px_with(density())
    }

    pub fn to_px_with(self, d: Density) -> f32 {
        self.0 * d.scale
    }
}

impl std::ops::Mul<f32> for Dp {
    type Output = Dp;
    fn mul(self, rhs: f32) -> Dp {
        Dp(self.0 * rhs)
    }
}

impl std::ops::Div<f32> for Dp {
    type Output = Dp;
    fn div(self, rhs: f32) -> Dp {
        Dp(self.0 / rhs)
    }
}

impl std::ops::Add for Dp {
    type Output = Dp;
    fn add(self, rhs: Dp) -> Dp {
        Dp(self.0 + rhs.0)
    }
}

/// scale‑independent pixels (sp), for text
#[derive(Clone, Copy, Debug, Default, PartialEq, PartialOrd)]
pub struct Sp(pub f32);

impl Sp {
    pub fn to_px(self) -> f32 {
        self.to_px_with(density())
    }

    pub fn to_px_with(self, d: Density) -> f32 {
        self.0 * d.scale * d.font_scale
    }

    /// Same numeric value as a length, as layouts do when reserving room for a label.
    pub fn as_dp(self) -> Dp {
        Dp(self.0)
    }
}

pub fn with_density<R>(density: Density, f: impl FnOnce() -> R) -> R {
    // Non-panicking frame guard (ensures pop on unwind)
    struct Guard;
    impl Drop for Guard {
        fn drop(&mut self) {
            DENSITY_STACK.with(|st| {
                st.borrow_mut().pop();
            });
        }
    }
    DENSITY_STACK.with(|st| st.borrow_mut().push(density));
    let _guard = Guard;
    f()
}

pub fn density() -> Density {
    DENSITY_STACK.with(|st| st.borrow().last().copied().unwrap_or_default())
}
