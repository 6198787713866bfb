use crate::color::Rgb;

use super::{Painter, TextAlign};

#[derive(Clone, Debug, PartialEq)]
pub enum Command {
    Fill(Rgb),
    Stroke(Rgb),
    LineWidth(f64),
    Font(String),
    Align(TextAlign),
    Alpha(f64),
    FillRect { x: f64, y: f64, w: f64, h: f64 },
    FillText { text: String, x: f64, y: f64 },
    BeginPath,
    MoveTo(f64, f64),
    LineTo(f64, f64),
    ArcTo { x1: f64, y1: f64, x2: f64, y2: f64, radius: f64 },
    Arc { x: f64, y: f64, radius: f64, start: f64, end: f64 },
    ClosePath,
    FillPath,
    StrokePath,
}

/// A [`Painter`] that keeps the command stream instead of rasterizing it.
#[derive(Clone, Debug, Default)]
pub struct Recorder {
    pub commands: Vec<Command>,
}

impl Recorder {
    pub fn texts(&self) -> Vec<&str> {
        self.commands
            .iter()
            .filter_map(|c| match c {
                Command::FillText { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }
}

impl Painter for Recorder {
    fn set_fill(&mut self, color: Rgb) {
        self.commands.push(Command::Fill(color));
    }

    fn set_stroke(&mut self, color: Rgb) {
        self.commands.push(Command::Stroke(color));
    }

    fn set_line_width(&mut self, width: f64) {
        self.commands.push(Command::LineWidth(width));
    }

    fn set_font(&mut self, font: &str) {
        self.commands.push(Command::Font(font.to_owned()));
    }

    fn set_text_align(&mut self, align: TextAlign) {
        self.commands.push(Command::Align(align));
    }

    fn set_alpha(&mut self, alpha: f64) {
        self.commands.push(Command::Alpha(alpha));
    }

    fn fill_rect(&mut self, x: f64, y: f64, w: f64, h: f64) {
        self.commands.push(Command::FillRect { x, y, w, h });
    }

    fn fill_text(&mut self, text: &str, x: f64, y: f64) {
        self.commands.push(Command::FillText { text: text.to_owned(), x, y });
    }

    fn begin_path(&mut self) {
        self.commands.push(Command::BeginPath);
    }

    fn move_to(&mut self, x: f64, y: f64) {
        self.commands.push(Command::MoveTo(x, y));
    }

    fn line_to(&mut self, x: f64, y: f64) {
        self.commands.push(Command::LineTo(x, y));
    }

    fn arc_to(&mut self, x1: f64, y1: f64, x2: f64, y2: f64, radius: f64) {
        self.commands.push(Command::ArcTo { x1, y1, x2, y2, radius });
    }

    fn arc(&mut self, x: f64, y: f64, radius: f64, start: f64, end: f64) {
        self.commands.push(Command::Arc { x, y, radius, start, end });
    }

    fn close_path(&mut self) {
        self.commands.push(Command::ClosePath);
    }

    fn fill(&mut self) {
        self.commands.push(Command::FillPath);
    }

    fn stroke(&mut self) {
        self.commands.push(Command::StrokePath);
    }
}
