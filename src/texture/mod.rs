//! Procedural textures: fake UI screenshots drawn with 2D canvas commands.
//!
//! Drawing goes through the [`Painter`] trait so the same routines paint onto
//! a browser canvas in the wasm build and into a [`Recorder`] in tests.

mod mockup;
mod record;

pub use mockup::{ComponentMockup, WindowMockup};
pub use record::{Command, Recorder};

use crate::color::Rgb;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TextAlign {
    Left,
    Center,
}

impl TextAlign {
    pub fn as_css(self) -> &'static str {
        match self {
            TextAlign::Left => "left",
            TextAlign::Center => "center",
        }
    }
}

/// The subset of the 2D canvas API the mockups need.
pub trait Painter {
    fn set_fill(&mut self, color: Rgb);
    fn set_stroke(&mut self, color: Rgb);
    fn set_line_width(&mut self, width: f64);
    fn set_font(&mut self, font: &str);
    fn set_text_align(&mut self, align: TextAlign);
    fn set_alpha(&mut self, alpha: f64);

    fn fill_rect(&mut self, x: f64, y: f64, w: f64, h: f64);
    fn fill_text(&mut self, text: &str, x: f64, y: f64);

    fn begin_path(&mut self);
    fn move_to(&mut self, x: f64, y: f64);
    fn line_to(&mut self, x: f64, y: f64);
    fn arc_to(&mut self, x1: f64, y1: f64, x2: f64, y2: f64, radius: f64);
    fn arc(&mut self, x: f64, y: f64, radius: f64, start: f64, end: f64);
    fn close_path(&mut self);
    fn fill(&mut self);
    fn stroke(&mut self);

    /// Appends a rounded rectangle to the current path.
    fn round_rect(&mut self, x: f64, y: f64, w: f64, h: f64, radius: f64) {
        self.move_to(x + radius, y);
        self.arc_to(x + w, y, x + w, y + h, radius);
        self.arc_to(x + w, y + h, x, y + h, radius);
        self.arc_to(x, y + h, x, y, radius);
        self.arc_to(x, y, x + w, y, radius);
        self.close_path();
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TextureSize {
    pub width: u32,
    pub height: u32,
}

/// What a procedural texture shows.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Artwork {
    Window(WindowMockup),
    Chrome,
    Component(ComponentMockup),
}

impl Artwork {
    pub fn size(self) -> TextureSize {
        match self {
            Artwork::Window(_) => TextureSize { width: 512, height: 384 },
            Artwork::Chrome => TextureSize { width: 512, height: 30 },
            Artwork::Component(_) => TextureSize { width: 256, height: 256 },
        }
    }

    pub fn draw(self, painter: &mut dyn Painter) {
        let size = self.size();
        match self {
            Artwork::Window(mockup) => (mockup.routine())(painter, size),
            Artwork::Chrome => mockup::browser_chrome(painter, size),
            Artwork::Component(mockup) => (mockup.routine())(painter, size),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_rect_is_a_closed_path() {
        let mut rec = Recorder::default();
        rec.round_rect(50.0, 50.0, 150.0, 60.0, 8.0);
        assert_eq!(rec.commands.first(), Some(&Command::MoveTo(58.0, 50.0)));
        assert_eq!(rec.commands.last(), Some(&Command::ClosePath));
        let corners = rec
            .commands
            .iter()
            .filter(|c| matches!(c, Command::ArcTo { .. }))
            .count();
        assert_eq!(corners, 4);
    }

    #[test]
    fn chrome_is_a_thin_strip() {
        let mut rec = Recorder::default();
        Artwork::Chrome.draw(&mut rec);
        assert_eq!(Artwork::Chrome.size(), TextureSize { width: 512, height: 30 });
        assert!(rec.texts().contains(&"https://myportfolio.com"));
    }
}
