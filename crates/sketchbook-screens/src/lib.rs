//! # Sketchbook screens
//!
//! Headless models of the three demo screens and the shell that switches
//! between them. A host feeds pointer events and a frame tick, and replays the
//! recorded draw commands:
//!
//! ```rust
//! use sketchbook_core::Size;
//! use sketchbook_screens::{App, Screen};
//!
//! let mut app = App::new();
//! assert_eq!(app.current(), Screen::Draw);
//!
//! app.select(Screen::LabeledRangeSlider);
//! let frame = app.frame(Size::new(360.0, 640.0));
//! assert!(!frame.is_empty());
//! ```

pub mod gallery;
pub mod scribble;
pub mod slider_page;

pub use gallery::{CanvasGallery, GalleryItem};
pub use scribble::ScribblePad;
pub use slider_page::SliderPage;

use sketchbook_canvas::{DrawCommand, DrawScope};
use sketchbook_core::{PointerEvent, Scope, Size, Vec2, run_due_timers};

/// Entries of the bottom bar.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Screen {
    Draw,
    Scribble,
    LabeledRangeSlider,
}

impl Screen {
    pub const ALL: [Screen; 3] = [Screen::Draw, Screen::Scribble, Screen::LabeledRangeSlider];

    pub fn label(self) -> &'static str {
        match self {
            Screen::Draw => "Drawing",
            Screen::Scribble => "Scribble",
            Screen::LabeledRangeSlider => "Labeled Range Slider",
        }
    }
}

enum Active {
    Draw(CanvasGallery),
    Scribble(ScribblePad),
    LabeledRangeSlider(SliderPage),
}

/// The host shell: one screen at a time, each living in its own [`Scope`].
pub struct App {
    scope: Scope,
    active: Active,
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

impl App {
    /// Starts on the drawing gallery.
    pub fn new() -> Self {
        let scope = Scope::new();
        let active = open(Screen::Draw, &scope);
        Self { scope, active }
    }

    pub fn current(&self) -> Screen {
        match self.active {
            Active::Draw(_) => Screen::Draw,
            Active::Scribble(_) => Screen::Scribble,
            Active::LabeledRangeSlider(_) => Screen::LabeledRangeSlider,
        }
    }

    /// Switches screens. The screen being left is disposed together with
    /// everything it scheduled.
    pub fn select(&mut self, screen: Screen) {
        if screen == self.current() {
            return;
        }
        log::debug!("switching {:?} -> {:?}", self.current(), screen);
        let scope = std::mem::replace(&mut self.scope, Scope::new());
        scope.dispose();
        self.active = open(screen, &self.scope);
    }

    pub fn gallery(&mut self) -> Option<&mut CanvasGallery> {
        match &mut self.active {
            Active::Draw(g) => Some(g),
            _ => None,
        }
    }

    pub fn scribble(&mut self) -> Option<&mut ScribblePad> {
        match &mut self.active {
            Active::Scribble(s) => Some(s),
            _ => None,
        }
    }

    pub fn slider_page(&mut self) -> Option<&mut SliderPage> {
        match &mut self.active {
            Active::LabeledRangeSlider(p) => Some(p),
            _ => None,
        }
    }

    pub fn handle_pointer(&mut self, event: &PointerEvent) -> bool {
        match &mut self.active {
            // the gallery is a plain list
            Active::Draw(_) => false,
            Active::Scribble(pad) => pad.handle_pointer(event),
            Active::LabeledRangeSlider(page) => page.handle_pointer(event),
        }
    }

    /// Fires due timers and advances animations. Returns whether another
    /// frame is needed.
    pub fn tick(&mut self) -> bool {
        let fired = run_due_timers();
        let animating = match &mut self.active {
            Active::Draw(g) => g.tick(),
            _ => false,
        };
        fired > 0 || animating
    }

    /// Records the current screen for a viewport of `size`.
    pub fn frame(&mut self, size: Size) -> Vec<DrawCommand> {
        let mut ds = DrawScope::new(size);
        match &mut self.active {
            Active::Draw(gallery) => {
                let item_size = CanvasGallery::item_size(size.width);
                let rotation = gallery.rotation();
                for (i, item) in gallery.items().iter().enumerate() {
                    let y = i as f32 * item_size.height;
                    if y >= size.height {
                        break;
                    }
                    ds.draw_child(Vec2::new(0.0, y), item_size, |ds| item.draw(ds, rotation));
                }
            }
            Active::Scribble(pad) => pad.draw(&mut ds),
            Active::LabeledRangeSlider(page) => {
                page.set_width(size.width);
                page.draw(&mut ds);
            }
        }
        ds.into_commands()
    }
}

fn open(screen: Screen, scope: &Scope) -> Active {
    log::debug!("opening {}", screen.label());
    match screen {
        Screen::Draw => Active::Draw(CanvasGallery::open(scope.clone())),
        Screen::Scribble => Active::Scribble(ScribblePad::new()),
        Screen::LabeledRangeSlider => Active::LabeledRangeSlider(SliderPage::new()),
    }
}
