use smallvec::SmallVec;
use sketchbook_core::{Rect, Size};

use crate::style::SliderMetrics;

/// Size-dependent pixel layout of the slider. Read-only once computed.
#[derive(Clone, Debug, PartialEq)]
pub struct LayoutGeometry {
    /// Full bar extent; `y`/`h` are the bar's top and thickness.
    pub bar: Rect,
    pub bar_y_center: f32,
    pub marker_radius: f32,
    /// One x per step, strictly increasing and evenly spaced.
    pub step_xs: SmallVec<[f32; 16]>,
    /// Distance between adjacent step markers.
    pub spacing: f32,
}

impl LayoutGeometry {
    pub fn step_count(&self) -> usize {
        self.step_xs.len()
    }

    pub fn first_x(&self) -> f32 {
        self.step_xs[0]
    }

    pub fn last_x(&self) -> f32 {
        self.step_xs[self.step_xs.len() - 1]
    }

    pub fn step_x(&self, index: usize) -> f32 {
        self.step_xs[index]
    }
}

/// Lays out `step_count` markers on a bar inset so that handles centred on
/// the outermost steps stay inside `size`.
///
/// Returns `None` when there is nothing to lay out yet: an empty container,
/// one too narrow for a positive step spacing, or fewer than two steps.
pub fn compute_geometry(
    size: Size,
    step_count: usize,
    metrics: &SliderMetrics,
) -> Option<LayoutGeometry> {
    if size.is_empty() || step_count < 2 {
        return None;
    }

    let marker_radius = metrics.marker_radius;
    let bar_x_start = metrics.handle_radius - marker_radius;
    let bar_width = size.width - 2.0 * bar_x_start;
    let spacing = (bar_width - 2.0 * marker_radius) / (step_count - 1) as f32;
    if !(spacing > 0.0) {
        return None;
    }

    let bar_y_center = size.height - metrics.handle_radius;
    let first = bar_x_start + marker_radius;
    let step_xs = (0..step_count)
        .map(|i| first + spacing * i as f32)
        .collect();

    Some(LayoutGeometry {
        bar: Rect {
            x: bar_x_start,
            y: bar_y_center - metrics.bar_height / 2.0,
            w: bar_width,
            h: metrics.bar_height,
        },
        bar_y_center,
        marker_radius,
        step_xs,
        spacing,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::SliderStyle;
    use sketchbook_core::Density;

    fn metrics() -> SliderMetrics {
        SliderStyle::default().resolve(Density::default())
    }

    #[test]
    fn default_layout_matches_hand_computation() {
        // handle 16, bar 12 -> marker 3, bar starts at 13
        let g = compute_geometry(Size::new(326.0, 56.0), 11, &metrics()).unwrap();
        assert_eq!(g.marker_radius, 3.0);
        assert_eq!(g.bar.x, 13.0);
        assert_eq!(g.bar.w, 300.0);
        assert_eq!(g.bar_y_center, 40.0);
        assert_eq!(g.bar.y, 34.0);
        assert_eq!(g.spacing, 29.4);
        assert_eq!(g.first_x(), 16.0);
        assert!((g.last_x() - 310.0).abs() < 1e-4);
    }

    #[test]
    fn steps_are_increasing_and_even() {
        let m = metrics();
        for n in 3..40 {
            for w in [40.0f32, 97.5, 320.0, 1080.0, 4096.0] {
                let g = compute_geometry(Size::new(w, 56.0), n, &m).unwrap();
                assert_eq!(g.step_count(), n);
                for pair in g.step_xs.windows(2) {
                    assert!(pair[1] > pair[0]);
                    assert!((pair[1] - pair[0] - g.spacing).abs() < 1e-4 * w.max(1.0));
                }
                assert!((g.first_x() - (g.bar.x + g.marker_radius)).abs() < 1e-4);
                assert!((g.last_x() - (g.bar.right() - g.marker_radius)).abs() < 1e-4 * w);
            }
        }
    }

    #[test]
    fn degenerate_sizes_have_no_geometry() {
        let m = metrics();
        assert!(compute_geometry(Size::new(0.0, 56.0), 5, &m).is_none());
        assert!(compute_geometry(Size::new(300.0, 0.0), 5, &m).is_none());
        assert!(compute_geometry(Size::new(-10.0, 56.0), 5, &m).is_none());
        // narrower than two handles
        assert!(compute_geometry(Size::new(32.0, 56.0), 5, &m).is_none());
        assert!(compute_geometry(Size::new(300.0, 56.0), 1, &m).is_none());
    }

    #[test]
    fn density_scales_geometry() {
        let m = SliderStyle::default().resolve(Density::new(2.0));
        let g = compute_geometry(Size::new(652.0, 112.0), 11, &m).unwrap();
        assert_eq!(g.bar.x, 26.0);
        assert_eq!(g.bar_y_center, 80.0);
        assert!((g.spacing - 58.8).abs() < 1e-4);
    }
}
