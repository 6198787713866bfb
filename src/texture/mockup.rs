use std::f64::consts::TAU;

use rand::Rng;

use crate::color::Rgb;

use super::{Painter, TextAlign, TextureSize};

type Routine = fn(&mut dyn Painter, TextureSize);

/// Screen contents of a floating browser window.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WindowMockup {
    CodeEditor,
    Website,
    MobileApp,
}

impl WindowMockup {
    pub const ALL: [WindowMockup; 3] = [
        WindowMockup::CodeEditor,
        WindowMockup::Website,
        WindowMockup::MobileApp,
    ];

    pub fn choose<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self::ALL[rng.random_range(0..Self::ALL.len())]
    }

    pub(super) fn routine(self) -> Routine {
        match self {
            WindowMockup::CodeEditor => code_editor,
            WindowMockup::Website => website,
            WindowMockup::MobileApp => mobile_app,
        }
    }
}

/// A lone widget floating in the background.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ComponentMockup {
    Button,
    Card,
    Form,
    Navbar,
}

impl ComponentMockup {
    pub const ALL: [ComponentMockup; 4] = [
        ComponentMockup::Button,
        ComponentMockup::Card,
        ComponentMockup::Form,
        ComponentMockup::Navbar,
    ];

    pub fn choose<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self::ALL[rng.random_range(0..Self::ALL.len())]
    }

    pub(super) fn routine(self) -> Routine {
        match self {
            ComponentMockup::Button => button,
            ComponentMockup::Card => card,
            ComponentMockup::Form => form,
            ComponentMockup::Navbar => navbar,
        }
    }
}

const CODE: [&str; 13] = [
    "import React from \"react\";",
    "",
    "function App() {",
    "  return (",
    "    <div className=\"app\">",
    "      <Header />",
    "      <MainContent />",
    "      <Footer />",
    "    </div>",
    "  );",
    "}",
    "",
    "export default App;",
];

fn code_editor(p: &mut dyn Painter, size: TextureSize) {
    let (w, h) = (size.width as f64, size.height as f64);
    p.set_fill(Rgb(0x1e1e1e));
    p.fill_rect(0.0, 0.0, w, h);

    // tab strip
    p.set_fill(Rgb(0x252526));
    p.fill_rect(0.0, 0.0, w, 30.0);
    p.set_fill(Rgb(0x2d2d2d));
    p.fill_rect(0.0, 30.0, 150.0, 30.0);
    p.set_fill(Rgb(0x1e1e1e));
    p.fill_rect(150.0, 30.0, w - 150.0, 30.0);

    p.set_font("14px Consolas, monospace");
    p.set_fill(Rgb(0xd4d4d4));
    for (i, line) in CODE.iter().enumerate() {
        p.fill_text(line, 20.0, 80.0 + i as f64 * 20.0);
    }

    // keyword highlights painted over the plain text
    p.set_fill(Rgb(0x569cd6));
    p.fill_text("import", 20.0, 80.0);
    p.fill_text("function", 20.0, 120.0);
    p.fill_text("return", 20.0, 140.0);

    p.set_fill(Rgb(0x9cdcfe));
    p.fill_text("React", 65.0, 80.0);
    p.fill_text("App", 95.0, 120.0);

    p.set_fill(Rgb(0xd7ba7d));
    p.fill_text("from", 110.0, 80.0);
    p.fill_text("\"react\"", 150.0, 80.0);
}

fn website(p: &mut dyn Painter, size: TextureSize) {
    let (w, h) = (size.width as f64, size.height as f64);
    p.set_fill(Rgb::WHITE);
    p.fill_rect(0.0, 0.0, w, h);

    p.set_fill(Rgb(0x2c3e50));
    p.fill_rect(0.0, 0.0, w, 60.0);

    p.set_fill(Rgb(0x3498db));
    p.set_font("bold 18px Arial");
    p.fill_text("MyPortfolio", 20.0, 35.0);

    p.set_fill(Rgb(0xecf0f1));
    p.set_font("14px Arial");
    for (label, x) in [("Home", 200.0), ("Projects", 260.0), ("About", 340.0), ("Contact", 400.0)] {
        p.fill_text(label, x, 35.0);
    }

    // hero
    p.set_fill(Rgb(0x3498db));
    p.fill_rect(0.0, 60.0, w, 150.0);
    p.set_fill(Rgb::WHITE);
    p.set_font("bold 24px Arial");
    p.fill_text("Welcome to My Portfolio", 50.0, 120.0);
    p.set_fill(Rgb(0xecf0f1));
    p.set_font("16px Arial");
    p.fill_text("I build amazing web experiences", 50.0, 150.0);

    p.set_fill(Rgb(0xecf0f1));
    for x in [30.0, 180.0, 330.0] {
        p.fill_rect(x, 230.0, 130.0, 120.0);
    }
}

fn mobile_app(p: &mut dyn Painter, size: TextureSize) {
    let (w, h) = (size.width as f64, size.height as f64);
    p.set_fill(Rgb(0x121212));
    p.fill_rect(0.0, 0.0, w, h);

    // status bar and header
    p.set_fill(Rgb::BLACK);
    p.fill_rect(0.0, 0.0, w, 30.0);
    p.set_fill(Rgb(0x1f1f1f));
    p.fill_rect(0.0, 30.0, w, 60.0);

    // back arrow
    p.set_fill(Rgb(0xbb86fc));
    p.begin_path();
    p.move_to(20.0, 60.0);
    p.line_to(40.0, 45.0);
    p.line_to(40.0, 75.0);
    p.close_path();
    p.fill();

    p.set_fill(Rgb::WHITE);
    p.set_font("18px Roboto");
    p.fill_text("Settings", 70.0, 65.0);

    p.set_fill(Rgb(0x1f1f1f));
    for y in [100.0, 160.0, 220.0, 280.0] {
        p.fill_rect(20.0, y, w - 40.0, 50.0);
    }

    p.set_fill(Rgb::WHITE);
    p.set_font("16px Roboto");
    for (label, y) in [("Account", 130.0), ("Notifications", 190.0), ("Privacy", 250.0), ("About", 310.0)] {
        p.fill_text(label, 40.0, y);
    }

    // toggles
    p.set_fill(Rgb(0xbb86fc));
    p.fill_rect(w - 80.0, 125.0, 50.0, 20.0);
    p.fill_rect(w - 80.0, 185.0, 50.0, 20.0);
}

pub(super) fn browser_chrome(p: &mut dyn Painter, size: TextureSize) {
    let (w, h) = (size.width as f64, size.height as f64);
    p.set_fill(Rgb(0xf1f1f1));
    p.fill_rect(0.0, 0.0, w, h);

    // url bar
    p.set_fill(Rgb::WHITE);
    p.fill_rect(50.0, 5.0, w - 150.0, 20.0);
    p.set_fill(Rgb(0x777777));
    p.set_font("12px Arial");
    p.fill_text("https://myportfolio.com", 60.0, 20.0);

    p.set_fill(Rgb(0xe0e0e0));
    for x in [20.0, 40.0] {
        p.begin_path();
        p.arc(x, 15.0, 8.0, 0.0, TAU);
        p.fill();
    }
}

fn button(p: &mut dyn Painter, _: TextureSize) {
    p.set_fill(Rgb(0x3498db));
    p.begin_path();
    p.round_rect(50.0, 50.0, 150.0, 60.0, 8.0);
    p.fill();

    p.set_fill(Rgb::WHITE);
    p.set_font("bold 18px Arial");
    p.set_text_align(TextAlign::Center);
    p.fill_text("Click Me", 125.0, 90.0);

    // hover tint
    p.set_fill(Rgb(0x2980b9));
    p.begin_path();
    p.round_rect(50.0, 50.0, 150.0, 60.0, 8.0);
    p.set_alpha(0.3);
    p.fill();
    p.set_alpha(1.0);
}

fn card(p: &mut dyn Painter, _: TextureSize) {
    p.set_fill(Rgb::WHITE);
    p.begin_path();
    p.round_rect(30.0, 30.0, 200.0, 180.0, 12.0);
    p.fill();

    // image placeholder
    p.set_fill(Rgb(0xecf0f1));
    p.fill_rect(40.0, 40.0, 180.0, 100.0);

    p.set_fill(Rgb(0x2c3e50));
    p.set_font("bold 16px Arial");
    p.set_text_align(TextAlign::Left);
    p.fill_text("Project Title", 40.0, 160.0);

    p.set_fill(Rgb(0x7f8c8d));
    p.set_font("14px Arial");
    p.fill_text("A brief description of this project...", 40.0, 180.0);

    p.set_fill(Rgb(0x3498db));
    p.begin_path();
    p.round_rect(40.0, 190.0, 80.0, 30.0, 6.0);
    p.fill();

    p.set_fill(Rgb::WHITE);
    p.set_font("14px Arial");
    p.set_text_align(TextAlign::Center);
    p.fill_text("View", 80.0, 210.0);
}

fn form(p: &mut dyn Painter, _: TextureSize) {
    p.set_fill(Rgb::WHITE);
    p.begin_path();
    p.round_rect(30.0, 30.0, 200.0, 200.0, 12.0);
    p.fill();

    p.set_fill(Rgb(0x2c3e50));
    p.set_font("bold 18px Arial");
    p.set_text_align(TextAlign::Center);
    p.fill_text("Contact Us", 130.0, 60.0);

    p.set_fill(Rgb(0xf5f5f5));
    for (y, h) in [(80.0, 30.0), (120.0, 30.0), (160.0, 60.0)] {
        p.begin_path();
        p.round_rect(40.0, y, 180.0, h, 4.0);
        p.fill();
    }

    // placeholders
    p.set_fill(Rgb(0x95a5a6));
    p.set_font("14px Arial");
    p.set_text_align(TextAlign::Left);
    for (label, y) in [("Name", 100.0), ("Email", 140.0), ("Message", 180.0)] {
        p.fill_text(label, 45.0, y);
    }

    p.set_fill(Rgb(0x2ecc71));
    p.begin_path();
    p.round_rect(70.0, 230.0, 120.0, 30.0, 6.0);
    p.fill();

    p.set_fill(Rgb::WHITE);
    p.set_font("bold 14px Arial");
    p.set_text_align(TextAlign::Center);
    p.fill_text("Submit", 130.0, 250.0);
}

fn navbar(p: &mut dyn Painter, size: TextureSize) {
    p.set_fill(Rgb(0x2c3e50));
    p.fill_rect(0.0, 0.0, size.width as f64, 60.0);

    p.set_fill(Rgb(0x3498db));
    p.set_font("bold 20px Arial");
    p.set_text_align(TextAlign::Left);
    p.fill_text("LOGO", 20.0, 35.0);

    p.set_fill(Rgb(0xecf0f1));
    p.set_font("16px Arial");
    for (label, x) in [("Home", 120.0), ("About", 190.0), ("Work", 260.0), ("Contact", 320.0)] {
        p.fill_text(label, x, 35.0);
    }

    // active item underline
    p.set_stroke(Rgb(0x3498db));
    p.set_line_width(3.0);
    p.begin_path();
    p.move_to(190.0, 50.0);
    p.line_to(240.0, 50.0);
    p.stroke();
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    use super::super::{Artwork, Command, Recorder};
    use super::*;

    fn record(art: Artwork) -> Recorder {
        let mut rec = Recorder::default();
        art.draw(&mut rec);
        rec
    }

    fn artworks() -> impl Iterator<Item = Artwork> {
        WindowMockup::ALL
            .into_iter()
            .map(Artwork::Window)
            .chain(ComponentMockup::ALL.into_iter().map(Artwork::Component))
            .chain(std::iter::once(Artwork::Chrome))
    }

    #[test]
    fn window_mockups_paint_an_opaque_backdrop_first() {
        for mockup in WindowMockup::ALL {
            let rec = record(Artwork::Window(mockup));
            assert!(matches!(rec.commands[0], Command::Fill(_)), "{mockup:?}");
            assert_eq!(
                rec.commands[1],
                Command::FillRect { x: 0.0, y: 0.0, w: 512.0, h: 384.0 },
                "{mockup:?}"
            );
        }
    }

    #[test]
    fn rectangles_start_inside_the_canvas() {
        for art in artworks() {
            let size = art.size();
            for cmd in record(art).commands {
                if let Command::FillRect { x, y, .. } = cmd {
                    assert!(x >= 0.0 && x < size.width as f64, "{art:?}");
                    assert!(y >= 0.0 && y < size.height as f64, "{art:?}");
                }
            }
        }
    }

    #[test]
    fn every_artwork_writes_text() {
        for art in artworks() {
            assert!(!record(art).texts().is_empty(), "{art:?}");
        }
    }

    #[test]
    fn button_restores_full_opacity() {
        let rec = record(Artwork::Component(ComponentMockup::Button));
        assert_eq!(rec.commands.last(), Some(&Command::Alpha(1.0)));
    }

    #[test]
    fn editor_highlights_keywords_after_the_listing() {
        let texts = record(Artwork::Window(WindowMockup::CodeEditor)).texts().join("\n");
        let listing = texts.find("export default App;").unwrap();
        let keyword = texts.rfind("function").unwrap();
        assert!(keyword > listing);
    }

    #[test]
    fn choice_covers_the_catalog() {
        let mut rng = Pcg32::seed_from_u64(3);
        let picks: Vec<_> = (0..200).map(|_| ComponentMockup::choose(&mut rng)).collect();
        for mockup in ComponentMockup::ALL {
            assert!(picks.contains(&mockup), "{mockup:?} never chosen");
        }
        let picks: Vec<_> = (0..200).map(|_| WindowMockup::choose(&mut rng)).collect();
        for mockup in WindowMockup::ALL {
            assert!(picks.contains(&mockup), "{mockup:?} never chosen");
        }
    }
}
