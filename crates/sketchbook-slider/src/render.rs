use std::fmt::Display;

use sketchbook_canvas::{DrawScope, Shadow, TextStyle};
use sketchbook_core::{Rect, Vec2};

use crate::handles::{HandleState, Handles};
use crate::layout::LayoutGeometry;
use crate::style::{SliderMetrics, SliderStyle};

/// Text shown above a step marker. Values longer than three characters keep
/// only their first two.
pub fn step_label(value: &impl Display) -> String {
    let text = value.to_string();
    if text.chars().count() > 3 {
        text.chars().take(2).collect()
    } else {
        text
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LabelState {
    /// A handle rests on the marker.
    Selected,
    InRange,
    OutOfRange,
}

pub fn label_state(marker_x: f32, marker_radius: f32, handles: &Handles) -> LabelState {
    let under = |h: &HandleState| (h.position.x - marker_x).abs() < marker_radius / 2.0;
    if under(&handles.lower) || under(&handles.upper) {
        LabelState::Selected
    } else if marker_x < handles.lower.position.x || marker_x > handles.upper.position.x {
        LabelState::OutOfRange
    } else {
        LabelState::InRange
    }
}

/// Everything the painter needs for one frame. Borrowed; painting never
/// mutates slider state.
pub struct SliderPainter<'a> {
    pub geometry: &'a LayoutGeometry,
    pub handles: &'a Handles,
    pub labels: &'a [String],
    pub style: &'a SliderStyle,
    pub metrics: &'a SliderMetrics,
}

impl SliderPainter<'_> {
    pub fn paint(&self, ds: &mut DrawScope) {
        let g = self.geometry;
        let style = self.style;

        ds.draw_round_rect(g.bar, style.bar_background_color, self.metrics.bar_radius);

        let lower_x = self.handles.lower.position.x;
        let upper_x = self.handles.upper.position.x;
        ds.draw_rect(
            Rect {
                x: lower_x,
                y: g.bar.y,
                w: upper_x - lower_x,
                h: g.bar.h,
            },
            style.bar_selected_color,
        );

        for (i, &x) in g.step_xs.iter().enumerate() {
            ds.draw_circle_alpha(
                Vec2::new(x, g.bar_y_center),
                g.marker_radius,
                style.step_marker_color,
                style.step_marker_alpha,
            );

            let Some(text) = self.labels.get(i) else {
                continue;
            };
            let text_style = TextStyle::default().with_size(self.metrics.label_size);
            let text_style = match label_state(x, g.marker_radius, self.handles) {
                LabelState::Selected => text_style.with_color(style.label_color).bold(),
                LabelState::OutOfRange => text_style.with_color(style.label_dim_color),
                LabelState::InRange => text_style.with_color(style.label_color),
            };
            let len = text.chars().count() as f32;
            let pos = Vec2::new(x - len * self.metrics.label_size / 3.0, 0.0);
            ds.draw_text(text.as_str(), pos, text_style);
        }

        self.paint_handle(ds, &self.handles.lower);
        self.paint_handle(ds, &self.handles.upper);
    }

    fn paint_handle(&self, ds: &mut DrawScope, handle: &HandleState) {
        let mut blur = self.metrics.shadow_blur;
        if handle.dragged {
            blur += self.metrics.shadow_drag_extra;
        }
        ds.draw_circle_with_shadow(
            handle.position,
            self.metrics.handle_radius,
            self.style.touch_circle_color,
            Shadow {
                blur_radius: blur,
                offset: Vec2::ZERO,
                color: self.style.shadow_color,
            },
        );
    }
}
