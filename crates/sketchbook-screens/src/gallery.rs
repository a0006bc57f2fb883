//! Canvas gallery: one small drawing per canvas feature, top to bottom.

use sketchbook_canvas::{CornerRadii, DrawCommand, DrawScope, PaintStyle, Path, TextStyle, record};
use sketchbook_core::{
    AnimatedValue, AnimationSpec, Brush, Color, Dp, Duration, Easing, Rect, Scope, Signal, Size,
    Sp, Timer, Vec2, schedule_once,
};

/// Height of every gallery canvas.
pub const ITEM_HEIGHT: Dp = Dp(300.0);

const ROTATE_AFTER: Duration = Duration::from_millis(1_000);
const ROTATION_PERIOD: Duration = Duration::from_millis(2_000);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GalleryItem {
    Text,
    SimpleCircle,
    SizedCircle,
    SimpleRect,
    GradientRect,
    RoundedRect,
    PartiallyRoundedRect,
    HourGlass,
    TransformedHourGlass,
}

impl GalleryItem {
    pub const ALL: [GalleryItem; 9] = [
        GalleryItem::Text,
        GalleryItem::SimpleCircle,
        GalleryItem::SizedCircle,
        GalleryItem::SimpleRect,
        GalleryItem::GradientRect,
        GalleryItem::RoundedRect,
        GalleryItem::PartiallyRoundedRect,
        GalleryItem::HourGlass,
        GalleryItem::TransformedHourGlass,
    ];

    pub fn key(self) -> &'static str {
        match self {
            GalleryItem::Text => "Text",
            GalleryItem::SimpleCircle => "Simple circle",
            GalleryItem::SizedCircle => "Sized circle",
            GalleryItem::SimpleRect => "Simple rect",
            GalleryItem::GradientRect => "Rect with a gradient brush coloration",
            GalleryItem::RoundedRect => "Rect with rounded corners",
            GalleryItem::PartiallyRoundedRect => {
                "Using Path to create a rect with partial rounded corners"
            }
            GalleryItem::HourGlass => "Draw an hour glass using a Path",
            GalleryItem::TransformedHourGlass => "Transformation operations on a drawn object",
        }
    }

    /// Draws this item into a canvas; `rotation` (degrees) only affects the
    /// transformed hour glass.
    pub fn draw(self, ds: &mut DrawScope, rotation: f32) {
        let size = ds.size();
        let inner = centered_half(size);
        match self {
            GalleryItem::Text => ds.draw_text(
                "Hello droidcon Lisbon!",
                Vec2::ZERO,
                TextStyle::default()
                    .with_color(Color::LIGHT_GRAY)
                    .with_size(Sp(32.0).to_px()),
            ),
            GalleryItem::SimpleCircle => {
                ds.draw_circle(ds.center(), size.min_dimension() / 2.0, Color::GREEN)
            }
            GalleryItem::SizedCircle => ds.draw_circle(ds.center(), Dp(32.0).to_px(), Color::GREEN),
            GalleryItem::SimpleRect => ds.draw_rect(inner, Color::GREEN),
            GalleryItem::GradientRect => ds.draw_rect(inner, blue_green_blue()),
            GalleryItem::RoundedRect => {
                ds.draw_round_rect(inner, blue_green_blue(), Dp(8.0).to_px())
            }
            GalleryItem::PartiallyRoundedRect => {
                let mut path = Path::new();
                path.add_round_rect(inner, CornerRadii::left(Dp(8.0).to_px()));
                ds.draw_path(path, Color::GREEN, PaintStyle::Fill);
            }
            GalleryItem::HourGlass => {
                ds.draw_path(hour_glass(size), Color::GREEN, hour_glass_stroke());
            }
            GalleryItem::TransformedHourGlass => {
                ds.scale(0.5, |ds| {
                    ds.rotate(rotation, |ds| {
                        ds.draw_path(hour_glass(size), Color::GREEN, hour_glass_stroke());
                    })
                });
            }
        }
    }
}

fn centered_half(size: Size) -> Rect {
    Rect {
        x: size.width / 4.0,
        y: size.height / 4.0,
        w: size.width / 2.0,
        h: size.height / 2.0,
    }
}

fn blue_green_blue() -> Brush {
    Brush::horizontal_gradient(&[Color::BLUE, Color::GREEN, Color::BLUE])
}

fn hour_glass_stroke() -> PaintStyle {
    PaintStyle::Stroke {
        width: Dp(2.0).to_px(),
    }
}

/// Two quadratic sides bulging into the center, closed by a top and bottom edge.
pub fn hour_glass(size: Size) -> Path {
    let (w, h) = (size.width, size.height);
    let (qw, qh) = (w / 4.0, h / 4.0);
    let (cx, cy) = (w / 2.0, h / 2.0);
    let mut path = Path::new();
    path.move_to(qw, qh)
        .line_to(w - qw, qh)
        .quad_to(cx, cy, w - qw, h - qh)
        .line_to(qw, h - qh)
        .quad_to(cx, cy, qw, qh)
        .close();
    path
}

/// The gallery screen. Starts rotating the last item one second after it opens.
pub struct CanvasGallery {
    scope: Scope,
    rotate: Signal<bool>,
    rotation: AnimatedValue<f32>,
    timer: Timer,
}

impl CanvasGallery {
    /// Opens the gallery. Its delayed start is tied to `scope`.
    pub fn open(scope: Scope) -> Self {
        let rotate = Signal::new(false);
        let timer = scope.run(|| {
            let rotate = rotate.clone();
            schedule_once(ROTATE_AFTER, move || {
                log::debug!("gallery: starting rotation");
                rotate.set(true);
            })
        });
        Self {
            scope,
            rotate,
            rotation: AnimatedValue::new(
                0.0,
                AnimationSpec::tween(ROTATION_PERIOD, Easing::Linear).infinite_repeatable(),
            ),
            timer,
        }
    }

    pub fn items(&self) -> &'static [GalleryItem] {
        &GalleryItem::ALL
    }

    pub fn is_rotating(&self) -> bool {
        self.rotate.get()
    }

    pub fn start_timer(&self) -> &Timer {
        &self.timer
    }

    /// Advances the rotation to the clock's current time. Call once per frame.
    pub fn tick(&mut self) -> bool {
        if self.scope.is_disposed() {
            return false;
        }
        let target = if self.rotate.get() { 180.0 } else { 0.0 };
        if *self.rotation.target() != target {
            self.rotation.set_target(target);
        }
        self.rotation.update()
    }

    /// Current rotation in degrees.
    pub fn rotation(&self) -> f32 {
        *self.rotation.get()
    }

    /// Size of one item's canvas for a list of `width` px.
    pub fn item_size(width: f32) -> Size {
        Size::new(width, ITEM_HEIGHT.to_px())
    }

    pub fn render_item(&self, item: GalleryItem, width: f32) -> Vec<DrawCommand> {
        let rotation = self.rotation();
        record(Self::item_size(width), |ds| item.draw(ds, rotation))
    }

    /// Every item, in list order.
    pub fn render(&self, width: f32) -> Vec<Vec<DrawCommand>> {
        self.items()
            .iter()
            .map(|&item| self.render_item(item, width))
            .collect()
    }

    pub fn dispose(self) {
        self.scope.dispose();
    }
}
