use std::rc::Rc;

use sketchbook_canvas::{DrawCommand, DrawScope, record};
use sketchbook_core::{Density, Dp, PointerEvent, Size, density};

use crate::error::{Bound, SliderError};
use crate::gesture::{DragInterpreter, Interaction};
use crate::handles::Handles;
use crate::layout::{LayoutGeometry, compute_geometry};
use crate::render::{SliderPainter, step_label};
use crate::style::{SliderMetrics, SliderStyle};
use crate::StepValue;

pub type RangeCallback<T> = Rc<dyn Fn(T, T)>;

/// A horizontal bar with one labeled marker per step and two handles that
/// select a sub-range. Handles move freely while dragged and snap to the
/// nearest step on release, which is when the owner hears about it.
pub struct LabeledRangeSlider<T: StepValue> {
    steps: Vec<T>,
    labels: Vec<String>,
    /// Committed (lower, upper) step indices.
    selection: (usize, usize),
    style: SliderStyle,
    on_range_changed: Option<RangeCallback<T>>,

    laid_out: Option<(Size, Density)>,
    metrics: SliderMetrics,
    geometry: Option<LayoutGeometry>,
    handles: Option<Handles>,
    gesture: DragInterpreter,
}

fn validate<T: StepValue>(lower: T, upper: T, steps: &[T]) -> Result<(usize, usize), SliderError> {
    if steps.len() < 3 {
        return Err(SliderError::TooFewSteps { len: steps.len() });
    }
    if let Some(index) = (1..steps.len()).find(|&i| !(steps[i] > steps[i - 1])) {
        return Err(SliderError::StepsNotIncreasing { index });
    }
    let lower_idx = steps
        .iter()
        .position(|s| *s == lower)
        .ok_or(SliderError::BoundNotInSteps { which: Bound::Lower })?;
    let upper_idx = steps
        .iter()
        .position(|s| *s == upper)
        .ok_or(SliderError::BoundNotInSteps { which: Bound::Upper })?;
    if lower_idx >= upper_idx {
        return Err(SliderError::BoundsOutOfOrder);
    }
    Ok((lower_idx, upper_idx))
}

impl<T: StepValue> LabeledRangeSlider<T> {
    /// Slider over `steps` with `lower..upper` selected.
    ///
    /// Fails when there are fewer than three steps, the steps are not
    /// strictly increasing, or a bound is not one of the steps (or the bounds
    /// are not in order).
    pub fn try_new(lower: T, upper: T, steps: impl Into<Vec<T>>) -> Result<Self, SliderError> {
        let steps = steps.into();
        let selection = validate(lower, upper, &steps)?;
        let labels = steps.iter().map(step_label).collect();
        let style = SliderStyle::default();
        Ok(Self {
            steps,
            labels,
            selection,
            metrics: style.resolve(density()),
            style,
            on_range_changed: None,
            laid_out: None,
            geometry: None,
            handles: None,
            gesture: DragInterpreter::new(),
        })
    }

    /// Like [`try_new`](Self::try_new), for statically known configurations.
    ///
    /// # Panics
    ///
    /// Panics with the [`SliderError`] message when the configuration is invalid.
    pub fn new(lower: T, upper: T, steps: impl Into<Vec<T>>) -> Self {
        match Self::try_new(lower, upper, steps) {
            Ok(slider) => slider,
            Err(err) => panic!("{err}"),
        }
    }

    pub fn with_style(mut self, style: SliderStyle) -> Self {
        self.style = style;
        if let Some((size, density)) = self.laid_out {
            self.relayout(size, density);
        }
        self
    }

    pub fn on_range_changed(mut self, f: impl Fn(T, T) + 'static) -> Self {
        self.on_range_changed = Some(Rc::new(f));
        self
    }

    pub fn steps(&self) -> &[T] {
        &self.steps
    }

    pub fn style(&self) -> &SliderStyle {
        &self.style
    }

    pub fn preferred_height(&self) -> Dp {
        self.style.preferred_height()
    }

    /// Last committed bounds.
    pub fn selection(&self) -> (T, T) {
        (self.steps[self.selection.0], self.steps[self.selection.1])
    }

    pub fn selected_indices(&self) -> (usize, usize) {
        self.selection
    }

    pub fn geometry(&self) -> Option<&LayoutGeometry> {
        self.geometry.as_ref()
    }

    pub fn handles(&self) -> Option<&Handles> {
        self.handles.as_ref()
    }

    pub fn is_dragging(&self) -> bool {
        self.gesture.is_dragging()
    }

    /// Replaces the committed bounds, e.g. when the owner's state changed.
    /// Handles are re-seated; no callback fires.
    pub fn set_selection(&mut self, lower: T, upper: T) -> Result<(), SliderError> {
        self.selection = validate(lower, upper, &self.steps)?;
        if let Some(g) = &self.geometry {
            self.handles = Some(Handles::at_steps(g, self.selection.0, self.selection.1));
        }
        Ok(())
    }

    /// Lays the slider out in a container of `size` px at the current density.
    pub fn set_size(&mut self, size: Size) {
        let density = density();
        if self.laid_out == Some((size, density)) {
            return;
        }
        self.relayout(size, density);
    }

    pub fn size(&self) -> Size {
        self.laid_out.map(|(size, _)| size).unwrap_or_default()
    }

    fn relayout(&mut self, size: Size, density: Density) {
        self.laid_out = Some((size, density));
        self.metrics = self.style.resolve(density);
        self.geometry = compute_geometry(size, self.steps.len(), &self.metrics);
        self.handles = match &self.geometry {
            Some(g) => {
                log::debug!(
                    "slider laid out at {}x{}: {} steps, spacing {:.2}",
                    size.width,
                    size.height,
                    g.step_count(),
                    g.spacing
                );
                Some(Handles::at_steps(g, self.selection.0, self.selection.1))
            }
            None => {
                log::warn!(
                    "slider has no room at {}x{}, skipping until resized",
                    size.width,
                    size.height
                );
                None
            }
        };
    }

    /// Feeds one pointer event. Returns whether the event was consumed.
    pub fn handle_pointer(&mut self, event: &PointerEvent) -> bool {
        let out = self.gesture.on_pointer(event);
        self.dispatch(out.interaction);
        out.consumed
    }

    /// Ends a drag whose contact went away without a lift.
    pub fn cancel_gesture(&mut self) -> Option<(T, T)> {
        let interaction = self.gesture.cancel();
        self.dispatch(interaction)
    }

    /// Applies one interaction to the handles. Returns the new bounds when it
    /// committed a drag; the range callback has been invoked by then.
    pub fn dispatch(&mut self, interaction: Interaction) -> Option<(T, T)> {
        let (Some(geometry), Some(handles)) = (&self.geometry, &mut self.handles) else {
            if interaction != Interaction::None {
                log::trace!("slider without geometry ignores {interaction:?}");
            }
            return None;
        };
        let commit = handles.apply(interaction, geometry)?;

        self.selection = (commit.lower, commit.upper);
        let (lower, upper) = self.selection();
        log::debug!("slider committed {lower}..{upper}");
        if let Some(cb) = &self.on_range_changed {
            cb(lower, upper);
        }
        Some((lower, upper))
    }

    /// Paints into `ds`. Nothing is drawn before the first usable layout.
    pub fn draw(&self, ds: &mut DrawScope) {
        let (Some(geometry), Some(handles)) = (&self.geometry, &self.handles) else {
            return;
        };
        SliderPainter {
            geometry,
            handles,
            labels: &self.labels,
            style: &self.style,
            metrics: &self.metrics,
        }
        .paint(ds);
    }

    pub fn render(&self) -> Vec<DrawCommand> {
        record(self.size(), |ds| self.draw(ds))
    }
}

impl<T: StepValue> std::fmt::Debug for LabeledRangeSlider<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let (lower, upper) = self.selection();
        f.debug_struct("LabeledRangeSlider")
            .field("steps", &self.steps.len())
            .field("selection", &format_args!("{lower}..{upper}"))
            .field("size", &self.laid_out.map(|(s, _)| s))
            .field("dragging", &self.gesture.is_dragging())
            .finish()
    }
}
