//! Visual configuration. Purely cosmetic: nothing here changes how handles move.

use sketchbook_core::{Color, Density, Dp, Sp};

#[derive(Clone, Debug, PartialEq)]
pub struct SliderStyle {
    pub bar_height: Dp,
    pub bar_radius: Dp,
    pub bar_background_color: Color,
    pub bar_selected_color: Color,
    pub touch_circle_radius: Dp,
    pub touch_circle_color: Color,
    pub label_size: Sp,
    pub label_offset: Dp,
    pub step_marker_color: Color,
    pub step_marker_alpha: f32,
    /// Labels inside the range and under a handle.
    pub label_color: Color,
    /// Labels outside the selected range.
    pub label_dim_color: Color,
    pub shadow_color: Color,
    pub shadow_blur: Dp,
    /// Added to `shadow_blur` while a handle is being dragged.
    pub shadow_drag_extra: Dp,
}

impl Default for SliderStyle {
    fn default() -> Self {
        Self {
            bar_height: Dp(12.0),
            bar_radius: Dp(6.0),
            bar_background_color: Color::LIGHT_GRAY,
            bar_selected_color: Color::CYAN,
            touch_circle_radius: Dp(16.0),
            touch_circle_color: Color::WHITE,
            label_size: Sp(16.0),
            label_offset: Dp(8.0),
            step_marker_color: Color::DARK_GRAY,
            step_marker_alpha: 0.1,
            label_color: Color::BLACK,
            label_dim_color: Color::LIGHT_GRAY,
            shadow_color: Color::DARK_GRAY,
            shadow_blur: Dp(2.0),
            shadow_drag_extra: Dp(1.0),
        }
    }
}

impl SliderStyle {
    pub fn bar_height(mut self, v: Dp) -> Self {
        self.bar_height = v;
        self
    }
    pub fn bar_radius(mut self, v: Dp) -> Self {
        self.bar_radius = v;
        self
    }
    pub fn bar_colors(mut self, background: Color, selected: Color) -> Self {
        self.bar_background_color = background;
        self.bar_selected_color = selected;
        self
    }
    pub fn touch_circle(mut self, radius: Dp, color: Color) -> Self {
        self.touch_circle_radius = radius;
        self.touch_circle_color = color;
        self
    }
    pub fn label(mut self, size: Sp, offset: Dp) -> Self {
        self.label_size = size;
        self.label_offset = offset;
        self
    }
    pub fn step_marker_color(mut self, v: Color) -> Self {
        self.step_marker_color = v;
        self
    }

    /// Room for a handle below a line of labels.
    pub fn preferred_height(&self) -> Dp {
        self.touch_circle_radius * 2.0 + self.label_size.as_dp() + self.label_offset
    }

    pub fn resolve(&self, density: Density) -> SliderMetrics {
        let bar_height = self.bar_height.to_px_with(density);
        SliderMetrics {
            handle_radius: self.touch_circle_radius.to_px_with(density),
            bar_height,
            bar_radius: self.bar_radius.to_px_with(density),
            marker_radius: bar_height / 4.0,
            label_size: self.label_size.to_px_with(density),
            shadow_blur: self.shadow_blur.to_px_with(density),
            shadow_drag_extra: self.shadow_drag_extra.to_px_with(density),
            preferred_height: self.preferred_height().to_px_with(density),
        }
    }
}

/// `SliderStyle` lengths resolved to pixels for one density.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SliderMetrics {
    pub handle_radius: f32,
    pub bar_height: f32,
    pub bar_radius: f32,
    pub marker_radius: f32,
    pub label_size: f32,
    pub shadow_blur: f32,
    pub shadow_drag_extra: f32,
    pub preferred_height: f32,
}
