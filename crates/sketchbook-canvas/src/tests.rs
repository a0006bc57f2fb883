use sketchbook_core::{Brush, Color, Rect, Size, Transform, Vec2};

use crate::*;

fn canvas() -> DrawScope {
    DrawScope::new(Size::new(200.0, 100.0))
}

#[test]
fn records_in_call_order() {
    let mut ds = canvas();
    ds.draw_round_rect(
        Rect {
            x: 0.0,
            y: 0.0,
            w: 10.0,
            h: 10.0,
        },
        Color::LIGHT_GRAY,
        4.0,
    );
    ds.draw_circle(Vec2::new(5.0, 5.0), 2.0, Color::WHITE);
    ds.draw_text("hi", Vec2::ZERO, TextStyle::default());

    let cmds = ds.into_commands();
    assert!(matches!(cmds[0], DrawCommand::Rect { radius, .. } if radius == 4.0));
    assert!(matches!(cmds[1], DrawCommand::Circle { shadow: None, .. }));
    assert!(matches!(&cmds[2], DrawCommand::Text { text, .. } if text == "hi"));
}

#[test]
fn negative_sizes_are_clamped() {
    let mut ds = canvas();
    ds.draw_circle_alpha(Vec2::ZERO, -3.0, Color::BLACK, 4.0);
    match &ds.commands()[0] {
        DrawCommand::Circle { radius, alpha, .. } => {
            assert_eq!(*radius, 0.0);
            assert_eq!(*alpha, 1.0);
        }
        other => panic!("unexpected command {other:?}"),
    }
}

#[test]
fn circle_with_shadow_keeps_shadow() {
    let mut ds = canvas();
    let shadow = Shadow {
        blur_radius: 3.0,
        offset: Vec2::ZERO,
        color: Color::DARK_GRAY,
    };
    ds.draw_circle_with_shadow(Vec2::new(1.0, 1.0), 16.0, Color::WHITE, shadow);
    assert_eq!(
        ds.commands()[0],
        DrawCommand::Circle {
            center: Vec2::new(1.0, 1.0),
            radius: 16.0,
            color: Color::WHITE,
            alpha: 1.0,
            shadow: Some(shadow),
        }
    );
}

#[test]
fn transforms_wrap_nested_commands() {
    let mut ds = canvas();
    ds.scale(0.5, |ds| {
        ds.rotate(90.0, |ds| {
            ds.draw_circle(Vec2::ZERO, 1.0, Color::GREEN);
        });
    });
    let cmds = ds.into_commands();
    assert_eq!(cmds.len(), 5);
    match &cmds[0] {
        DrawCommand::PushTransform { transform } => {
            assert_eq!(transform.scale_x, 0.5);
            assert_eq!(transform.pivot, Vec2::new(100.0, 50.0));
        }
        other => panic!("unexpected command {other:?}"),
    }
    assert!(matches!(cmds[1], DrawCommand::PushTransform { .. }));
    assert!(matches!(cmds[3], DrawCommand::PopTransform));
    assert!(matches!(cmds[4], DrawCommand::PopTransform));
}

#[test]
fn identity_transform_is_not_recorded() {
    let cmds = record(Size::new(10.0, 10.0), |ds| {
        ds.rotate(0.0, |ds| ds.draw_circle(Vec2::ZERO, 1.0, Color::GREEN));
        ds.with_transform(Transform::identity(), |_| {});
    });
    assert_eq!(cmds.len(), 1);
}

#[test]
fn empty_path_is_skipped() {
    let cmds = record(Size::new(10.0, 10.0), |ds| {
        ds.draw_path(Path::new(), Color::GREEN, PaintStyle::Fill);
        ds.draw_path(
            Path::polyline(&[Vec2::new(1.0, 1.0)]),
            Color::GREEN,
            PaintStyle::Stroke { width: 1.0 },
        );
    });
    assert!(cmds.is_empty());
}

#[test]
fn polyline_visits_every_point() {
    let pts = [Vec2::new(0.0, 0.0), Vec2::new(1.0, 2.0), Vec2::new(3.0, 4.0)];
    let path = Path::polyline(&pts);
    assert_eq!(
        path.segments(),
        &[
            PathSegment::MoveTo(pts[0]),
            PathSegment::LineTo(pts[1]),
            PathSegment::LineTo(pts[2]),
        ]
    );
}

#[test]
fn left_rounded_rect_only_curves_left_corners() {
    let mut path = Path::new();
    path.add_round_rect(
        Rect {
            x: 10.0,
            y: 10.0,
            w: 100.0,
            h: 50.0,
        },
        CornerRadii::left(8.0),
    );
    let quads = path
        .segments()
        .iter()
        .filter(|s| matches!(s, PathSegment::QuadTo(..)))
        .count();
    assert_eq!(quads, 2);
    assert_eq!(path.segments()[0], PathSegment::MoveTo(Vec2::new(18.0, 10.0)));
    assert_eq!(path.segments().last(), Some(&PathSegment::Close));
}

#[test]
fn corner_radii_are_capped() {
    let mut path = Path::new();
    path.add_round_rect(
        Rect {
            x: 0.0,
            y: 0.0,
            w: 10.0,
            h: 4.0,
        },
        CornerRadii::uniform(100.0),
    );
    assert_eq!(path.segments()[0], PathSegment::MoveTo(Vec2::new(2.0, 0.0)));
}

#[test]
fn gradient_brush_is_carried() {
    let brush = Brush::horizontal_gradient(&[Color::BLUE, Color::GREEN, Color::BLUE]);
    let cmds = record(Size::new(10.0, 10.0), |ds| {
        ds.draw_rect(
            Rect {
                x: 0.0,
                y: 0.0,
                w: 5.0,
                h: 5.0,
            },
            brush.clone(),
        );
    });
    assert!(matches!(&cmds[0], DrawCommand::Rect { brush: b, radius, .. } if *b == brush && *radius == 0.0));
}

#[test]
fn child_canvas_has_its_own_size() {
    let mut ds = canvas();
    ds.draw_child(Vec2::new(0.0, 100.0), Size::new(50.0, 30.0), |child| {
        assert_eq!(child.size(), Size::new(50.0, 30.0));
        child.draw_circle(child.center(), 5.0, Color::GREEN);
    });
    // nothing drawn, nothing recorded
    ds.draw_child(Vec2::new(0.0, 200.0), Size::new(50.0, 30.0), |_| {});

    let cmds = ds.into_commands();
    assert_eq!(cmds.len(), 3);
    assert_eq!(
        cmds[0],
        DrawCommand::PushTransform {
            transform: Transform::translate(0.0, 100.0)
        }
    );
    assert!(matches!(cmds[1], DrawCommand::Circle { center, .. } if center == Vec2::new(25.0, 15.0)));
    assert_eq!(cmds[2], DrawCommand::PopTransform);
}
