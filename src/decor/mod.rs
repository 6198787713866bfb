//! The decorations themselves, independent of any display surface.

mod background;
mod hero;
mod particles;
mod preview;
mod profile;

pub use background::{CardField, Motion};
pub use hero::HeroModel;
pub use particles::IcosahedronField;
pub use preview::{PreviewShape, ProjectPreview};
pub use profile::{DragState, ProfileModel, DRAG_SENSITIVITY, IDLE_SPIN};

use rand::Rng;

use crate::camera::Viewport;
use crate::color::Rgb;
use crate::config::{BackgroundConfig, BackgroundVariant};
use crate::frame::Decoration;
use crate::scene::{Material, Transform};

/// Brand purple shared by the models.
pub const ACCENT: Rgb = Rgb(0x6e45e2);
const GLOW: Rgb = Rgb(0x88d3ce);

fn accent_phong(glow: f32) -> Material {
    Material::phong(ACCENT, GLOW, glow, 100.0)
}

// Shared idle motion of the hero knot and the project previews.
fn tumble(t: &mut Transform) {
    t.rotation.x += 0.005;
    t.rotation.y += 0.01;
}

/// Builds whichever background the configuration asks for.
pub fn background<R: Rng + ?Sized>(
    config: &BackgroundConfig,
    viewport: Viewport,
    rng: &mut R,
) -> Box<dyn Decoration> {
    match config.variant {
        BackgroundVariant::Cards => Box::new(CardField::new(config, viewport, rng)),
        BackgroundVariant::Icosahedra => Box::new(IcosahedronField::new(config.particles, viewport, rng)),
    }
}
