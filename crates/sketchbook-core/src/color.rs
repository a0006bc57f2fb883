use smallvec::SmallVec;

use crate::Vec2;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Color(pub u8, pub u8, pub u8, pub u8);

impl Color {
    pub const TRANSPARENT: Color = Color(0, 0, 0, 0);
    pub const BLACK: Color = Color(0, 0, 0, 255);
    pub const WHITE: Color = Color(255, 255, 255, 255);
    pub const LIGHT_GRAY: Color = Color(0xCC, 0xCC, 0xCC, 255);
    pub const DARK_GRAY: Color = Color(0x44, 0x44, 0x44, 255);
    pub const CYAN: Color = Color(0, 0xFF, 0xFF, 255);
    pub const GREEN: Color = Color(0, 0xFF, 0, 255);
    pub const BLUE: Color = Color(0, 0, 0xFF, 255);

    pub fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        Color(r, g, b, 255)
    }
    pub fn from_rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Color(r, g, b, a)
    }
    pub fn from_hex(hex: &str) -> Self {
        let s = hex.trim_start_matches('#');
        let channel = |i: usize, fallback: u8| {
            s.get(i..i + 2)
                .and_then(|c| u8::from_str_radix(c, 16).ok())
                .unwrap_or(fallback)
        };
        match s.len() {
            6 => Color(channel(0, 0), channel(2, 0), channel(4, 0), 255),
            8 => Color(channel(0, 0), channel(2, 0), channel(4, 0), channel(6, 255)),
            _ => Color::BLACK,
        }
    }
    pub fn with_alpha(self, a: u8) -> Self {
        Color(self.0, self.1, self.2, a)
    }

    /// Multiplies the existing alpha by `factor` (clamped to 0..=1).
    pub fn mul_alpha(self, factor: f32) -> Self {
        let a = (self.3 as f32 * factor.clamp(0.0, 1.0)).round() as u8;
        self.with_alpha(a)
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ColorStop {
    /// 0..=1 along the gradient axis
    pub offset: f32,
    pub color: Color,
}

/// Brush for filling shapes.
///
/// Gradients are expressed in the local space of the shape being filled,
/// normalized so that `(0,0)` is its top‑left and `(1,1)` its bottom‑right.
#[derive(Clone, Debug, PartialEq)]
pub enum Brush {
    Solid(Color),
    Linear {
        start: Vec2,
        end: Vec2,
        stops: SmallVec<[ColorStop; 4]>,
    },
}

impl From<Color> for Brush {
    fn from(c: Color) -> Self {
        Brush::Solid(c)
    }
}

impl Brush {
    /// Left‑to‑right gradient with evenly distributed stops.
    pub fn horizontal_gradient(colors: &[Color]) -> Brush {
        Brush::Linear {
            start: Vec2::new(0.0, 0.0),
            end: Vec2::new(1.0, 0.0),
            stops: even_stops(colors),
        }
    }
}

fn even_stops(colors: &[Color]) -> SmallVec<[ColorStop; 4]> {
    let last = colors.len().saturating_sub(1).max(1) as f32;
    colors
        .iter()
        .enumerate()
        .map(|(i, &color)| ColorStop {
            offset: if colors.len() == 1 { 0.0 } else { i as f32 / last },
            color,
        })
        .collect()
}
