use sketchbook_canvas::{DrawCommand, DrawScope};
use sketchbook_core::{Dp, PointerEvent, Signal, Size, Transform};
use sketchbook_slider::LabeledRangeSlider;

/// Inset of the slider inside the page.
pub const PAGE_PADDING: Dp = Dp(8.0);

/// A slider over `0, 10, …, 100` and a line of text echoing its range.
pub struct SliderPage {
    lower: Signal<i32>,
    upper: Signal<i32>,
    slider: LabeledRangeSlider<i32>,
}

impl Default for SliderPage {
    fn default() -> Self {
        Self::new()
    }
}

impl SliderPage {
    pub fn new() -> Self {
        let steps: Vec<i32> = (0..=100).step_by(10).collect();
        let lower = Signal::new(steps[1]);
        let upper = Signal::new(steps[steps.len() - 2]);

        let (l, u) = (lower.clone(), upper.clone());
        let slider = LabeledRangeSlider::new(lower.get(), upper.get(), steps)
            .on_range_changed(move |lower, upper| {
                l.set(lower);
                u.set(upper);
            });

        Self {
            lower,
            upper,
            slider,
        }
    }

    pub fn bounds(&self) -> (i32, i32) {
        (self.lower.get(), self.upper.get())
    }

    pub fn lower_bound(&self) -> &Signal<i32> {
        &self.lower
    }

    pub fn upper_bound(&self) -> &Signal<i32> {
        &self.upper
    }

    pub fn status_text(&self) -> String {
        let (lower, upper) = self.bounds();
        format!("The selected range is {lower}..{upper}")
    }

    pub fn slider(&self) -> &LabeledRangeSlider<i32> {
        &self.slider
    }

    /// Lays the page out in a screen `width` px wide.
    pub fn set_width(&mut self, width: f32) {
        let inset = PAGE_PADDING.to_px();
        let height = self.slider.preferred_height().to_px();
        self.slider.set_size(Size::new(width - 2.0 * inset, height));
    }

    /// `event` in page coordinates.
    pub fn handle_pointer(&mut self, event: &PointerEvent) -> bool {
        let inset = PAGE_PADDING.to_px();
        let mut local = event.clone();
        local.position.x -= inset;
        local.position.y -= inset;
        for p in local.historical.iter_mut() {
            p.x -= inset;
            p.y -= inset;
        }
        self.slider.handle_pointer(&local)
    }

    pub fn draw(&self, ds: &mut DrawScope) {
        let inset = PAGE_PADDING.to_px();
        ds.with_transform(Transform::translate(inset, inset), |ds| self.slider.draw(ds));
    }

    /// The slider's commands in its own coordinates.
    pub fn render_slider(&self) -> Vec<DrawCommand> {
        self.slider.render()
    }
}
