use sketchbook_canvas::{DrawCommand, DrawScope, PaintStyle, Path, record};
use sketchbook_core::{Color, Dp, PointerEvent, PointerEventKind, PointerId, Size, Vec2};

/// Free-hand drawing pad. Every new drag replaces the previous line.
pub struct ScribblePad {
    points: Vec<Vec2>,
    active: Option<PointerId>,
    color: Color,
    line_width: Dp,
}

impl Default for ScribblePad {
    fn default() -> Self {
        Self {
            points: Vec::new(),
            active: None,
            color: Color::GREEN,
            line_width: Dp(1.0),
        }
    }
}

impl ScribblePad {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    pub fn line_width(mut self, width: Dp) -> Self {
        self.line_width = width;
        self
    }

    pub fn points(&self) -> &[Vec2] {
        &self.points
    }

    /// Returns whether the event was consumed.
    pub fn handle_pointer(&mut self, event: &PointerEvent) -> bool {
        match event.event {
            PointerEventKind::Down(_) if self.active.is_none() => {
                self.active = Some(event.id);
                self.points.clear();
                self.points.push(event.position);
                true
            }
            PointerEventKind::Move if self.active == Some(event.id) => {
                self.points.extend(event.historical.iter().copied());
                self.points.push(event.position);
                log::trace!("scribble: {} points", self.points.len());
                true
            }
            PointerEventKind::Up(_) | PointerEventKind::Cancel
                if self.active == Some(event.id) =>
            {
                self.active = None;
                true
            }
            _ => false,
        }
    }

    pub fn draw(&self, ds: &mut DrawScope) {
        if self.points.len() < 2 {
            return;
        }
        ds.draw_path(
            Path::polyline(&self.points),
            self.color,
            PaintStyle::Stroke {
                width: self.line_width.to_px(),
            },
        );
    }

    pub fn render(&self, size: Size) -> Vec<DrawCommand> {
        record(size, |ds| self.draw(ds))
    }
}
