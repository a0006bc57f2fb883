use anyhow::Context;
use sketchbook_canvas::DrawCommand;
use sketchbook_core::prelude::*;
use sketchbook_screens::{App, Screen};

const PAGE_HEIGHT: f32 = 640.0;

/// One scripted drag in step indices: press over `from`, move in `moves`
/// increments to `to`, lift.
struct Drag {
    from: usize,
    to: usize,
    moves: usize,
}

const SCRIPT: &[Drag] = &[
    Drag { from: 1, to: 5, moves: 8 },
    Drag { from: 9, to: 2, moves: 12 },
    Drag { from: 5, to: 0, moves: 4 },
    Drag { from: 6, to: 10, moves: 6 },
];

fn main() -> anyhow::Result<()> {
    env_logger::init();
    set_clock(SystemClock);

    let width = match std::env::args().nth(1) {
        Some(arg) => arg
            .parse::<f32>()
            .with_context(|| format!("invalid width {arg:?}"))?,
        None => 360.0,
    };
    log::info!("Replaying {} drags at {width}px", SCRIPT.len());

    let mut app = App::new();
    app.select(Screen::LabeledRangeSlider);
    let viewport = Size::new(width, PAGE_HEIGHT);
    app.frame(viewport);

    for (n, drag) in SCRIPT.iter().enumerate() {
        let page = app
            .slider_page()
            .context("slider page is not the current screen")?;
        let geometry = page
            .slider()
            .geometry()
            .with_context(|| format!("{width}px leaves no room for the slider"))?
            .clone();
        let inset = sketchbook_screens::slider_page::PAGE_PADDING.to_px();
        let y = inset + geometry.bar_y_center;
        let start = inset + geometry.step_x(drag.from);
        let end = inset + geometry.step_x(drag.to);

        let id = n as u64 + 1;
        page.handle_pointer(&PointerEvent::down(id, Vec2::new(start, y)));
        for i in 1..=drag.moves {
            let x = start + (end - start) * i as f32 / drag.moves as f32;
            page.handle_pointer(&PointerEvent::moved(id, Vec2::new(x, y)));
        }
        page.handle_pointer(&PointerEvent::up(id, Vec2::new(end, y)));

        println!(
            "drag {} (step {} -> {}): {}",
            n + 1,
            drag.from,
            drag.to,
            page.status_text()
        );
    }

    let frame = app.frame(viewport);
    let texts = frame
        .iter()
        .filter(|c| matches!(c, DrawCommand::Text { .. }))
        .count();
    log::info!("final frame: {} commands, {texts} labels", frame.len());
    Ok(())
}
