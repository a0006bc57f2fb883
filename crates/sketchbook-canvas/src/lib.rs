//! Immediate‑mode canvas.
//!
//! A [`DrawScope`] records [`DrawCommand`]s in widget‑local pixels. Nothing is
//! rasterized here; the host renderer replays the command list for the node's
//! rect every frame.
//!
//! ```rust
//! use sketchbook_canvas::*;
//! use sketchbook_core::{Color, Size};
//!
//! let commands = record(Size::new(200.0, 100.0), |ds| {
//!     ds.draw_circle(ds.center(), 32.0, Color::GREEN);
//! });
//! assert_eq!(commands.len(), 1);
//! ```

mod path;
#[cfg(test)]
mod tests;

pub use path::{CornerRadii, Path, PathSegment};

use sketchbook_core::{Brush, Color, Rect, Size, Transform, Vec2};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FontWeight {
    #[default]
    Normal,
    Bold,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TextStyle {
    pub color: Color,
    /// px
    pub size: f32,
    pub weight: FontWeight,
}

impl Default for TextStyle {
    fn default() -> Self {
        Self {
            color: Color::BLACK,
            size: 16.0,
            weight: FontWeight::Normal,
        }
    }
}

impl TextStyle {
    pub fn with_color(self, color: Color) -> Self {
        Self { color, ..self }
    }
    pub fn with_size(self, size: f32) -> Self {
        Self { size, ..self }
    }
    pub fn bold(self) -> Self {
        Self {
            weight: FontWeight::Bold,
            ..self
        }
    }
}

/// Drop shadow behind a filled shape.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Shadow {
    pub blur_radius: f32,
    pub offset: Vec2,
    pub color: Color,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PaintStyle {
    Fill,
    Stroke { width: f32 },
}

#[derive(Clone, Debug, PartialEq)]
pub enum DrawCommand {
    Rect {
        rect: Rect,
        brush: Brush,
        radius: f32,
        style: PaintStyle,
    },
    Circle {
        center: Vec2,
        radius: f32,
        color: Color,
        alpha: f32,
        shadow: Option<Shadow>,
    },
    Path {
        path: Path,
        brush: Brush,
        style: PaintStyle,
    },
    Text {
        text: String,
        /// top-left of the text box
        pos: Vec2,
        style: TextStyle,
    },
    PushTransform {
        transform: Transform,
    },
    PopTransform,
}

pub struct DrawScope {
    commands: Vec<DrawCommand>,
    size: Size,
}

impl DrawScope {
    pub fn new(size: Size) -> Self {
        Self {
            commands: Vec::new(),
            size,
        }
    }

    pub fn size(&self) -> Size {
        self.size
    }

    pub fn center(&self) -> Vec2 {
        self.size.center()
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    pub fn into_commands(self) -> Vec<DrawCommand> {
        self.commands
    }

    pub fn draw_rect(&mut self, rect: Rect, brush: impl Into<Brush>) {
        self.draw_round_rect(rect, brush, 0.0);
    }

    pub fn draw_round_rect(&mut self, rect: Rect, brush: impl Into<Brush>, radius: f32) {
        self.commands.push(DrawCommand::Rect {
            rect,
            brush: brush.into(),
            radius: radius.max(0.0),
            style: PaintStyle::Fill,
        });
    }

    pub fn draw_circle(&mut self, center: Vec2, radius: f32, color: Color) {
        self.draw_circle_alpha(center, radius, color, 1.0);
    }

    pub fn draw_circle_alpha(&mut self, center: Vec2, radius: f32, color: Color, alpha: f32) {
        self.commands.push(DrawCommand::Circle {
            center,
            radius: radius.max(0.0),
            color,
            alpha: alpha.clamp(0.0, 1.0),
            shadow: None,
        });
    }

    pub fn draw_circle_with_shadow(
        &mut self,
        center: Vec2,
        radius: f32,
        color: Color,
        shadow: Shadow,
    ) {
        self.commands.push(DrawCommand::Circle {
            center,
            radius: radius.max(0.0),
            color,
            alpha: 1.0,
            shadow: Some(shadow),
        });
    }

    pub fn draw_path(&mut self, path: Path, brush: impl Into<Brush>, style: PaintStyle) {
        if path.is_empty() {
            log::trace!("draw_path: empty path skipped");
            return;
        }
        self.commands.push(DrawCommand::Path {
            path,
            brush: brush.into(),
            style,
        });
    }

    pub fn draw_text(&mut self, text: impl Into<String>, pos: Vec2, style: TextStyle) {
        self.commands.push(DrawCommand::Text {
            text: text.into(),
            pos,
            style,
        });
    }

    /// Records everything drawn in `f` under `transform`.
    pub fn with_transform(&mut self, transform: Transform, f: impl FnOnce(&mut DrawScope)) {
        if transform.is_identity() {
            f(self);
            return;
        }
        self.commands.push(DrawCommand::PushTransform { transform });
        f(self);
        self.commands.push(DrawCommand::PopTransform);
    }

    /// Records a nested canvas of `size` placed at `origin`. Inside `f`,
    /// [`size`](Self::size) and [`center`](Self::center) refer to the child.
    pub fn draw_child(&mut self, origin: Vec2, size: Size, f: impl FnOnce(&mut DrawScope)) {
        let mut child = DrawScope::new(size);
        f(&mut child);
        if child.commands.is_empty() {
            return;
        }
        let translate = Transform::translate(origin.x, origin.y);
        if translate.is_identity() {
            self.commands.append(&mut child.commands);
            return;
        }
        self.commands.push(DrawCommand::PushTransform {
            transform: translate,
        });
        self.commands.append(&mut child.commands);
        self.commands.push(DrawCommand::PopTransform);
    }

    /// Uniform scale about the canvas center.
    pub fn scale(&mut self, factor: f32, f: impl FnOnce(&mut DrawScope)) {
        let pivot = self.center();
        self.with_transform(Transform::scale_about(factor, pivot), f);
    }

    /// Clockwise rotation in degrees about the canvas center.
    pub fn rotate(&mut self, degrees: f32, f: impl FnOnce(&mut DrawScope)) {
        let pivot = self.center();
        self.with_transform(Transform::rotate_degrees_about(degrees, pivot), f);
    }
}

/// Records a canvas of `size` and returns its command list.
pub fn record(size: Size, on_draw: impl FnOnce(&mut DrawScope)) -> Vec<DrawCommand> {
    let mut scope = DrawScope::new(size);
    on_draw(&mut scope);
    scope.into_commands()
}
