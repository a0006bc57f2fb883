use smallvec::SmallVec;
use sketchbook_core::{Rect, Vec2};

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PathSegment {
    MoveTo(Vec2),
    LineTo(Vec2),
    /// control point, end point
    QuadTo(Vec2, Vec2),
    Close,
}

/// Per-corner radii, clockwise from the top-left.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct CornerRadii {
    pub top_left: f32,
    pub top_right: f32,
    pub bottom_right: f32,
    pub bottom_left: f32,
}

impl CornerRadii {
    pub fn uniform(r: f32) -> Self {
        Self {
            top_left: r,
            top_right: r,
            bottom_right: r,
            bottom_left: r,
        }
    }

    pub fn left(r: f32) -> Self {
        Self {
            top_left: r,
            bottom_left: r,
            ..Self::default()
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Path {
    segments: SmallVec<[PathSegment; 8]>,
}

impl Path {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn move_to(&mut self, x: f32, y: f32) -> &mut Self {
        self.segments.push(PathSegment::MoveTo(Vec2::new(x, y)));
        self
    }

    pub fn line_to(&mut self, x: f32, y: f32) -> &mut Self {
        self.segments.push(PathSegment::LineTo(Vec2::new(x, y)));
        self
    }

    pub fn quad_to(&mut self, cx: f32, cy: f32, x: f32, y: f32) -> &mut Self {
        self.segments
            .push(PathSegment::QuadTo(Vec2::new(cx, cy), Vec2::new(x, y)));
        self
    }

    pub fn close(&mut self) -> &mut Self {
        self.segments.push(PathSegment::Close);
        self
    }

    /// Adds a closed rectangle contour; corner radii are capped at half the shorter side.
    pub fn add_round_rect(&mut self, rect: Rect, radii: CornerRadii) -> &mut Self {
        let cap = (rect.w.min(rect.h) / 2.0).max(0.0);
        let r = |v: f32| v.clamp(0.0, cap);
        let (tl, tr, br, bl) = (
            r(radii.top_left),
            r(radii.top_right),
            r(radii.bottom_right),
            r(radii.bottom_left),
        );
        let (left, top, right, bottom) = (rect.x, rect.y, rect.right(), rect.bottom());

        self.move_to(left + tl, top);
        self.line_to(right - tr, top);
        if tr > 0.0 {
            self.quad_to(right, top, right, top + tr);
        }
        self.line_to(right, bottom - br);
        if br > 0.0 {
            self.quad_to(right, bottom, right - br, bottom);
        }
        self.line_to(left + bl, bottom);
        if bl > 0.0 {
            self.quad_to(left, bottom, left, bottom - bl);
        }
        self.line_to(left, top + tl);
        if tl > 0.0 {
            self.quad_to(left, top, left + tl, top);
        }
        self.close()
    }

    /// Open polyline through `points`; empty when there are fewer than two.
    pub fn polyline(points: &[Vec2]) -> Path {
        let mut path = Path::new();
        if let [first, rest @ ..] = points
            && !rest.is_empty()
        {
            path.move_to(first.x, first.y);
            for p in rest {
                path.line_to(p.x, p.y);
            }
        }
        path
    }

    pub fn segments(&self) -> &[PathSegment] {
        &self.segments
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }
}
