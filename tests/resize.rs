use portfolio_decor::camera::Viewport;
use portfolio_decor::config::{BackgroundConfig, BackgroundVariant};
use portfolio_decor::decor::{self, HeroModel, ProfileModel, ProjectPreview};
use portfolio_decor::frame::Decoration;
use rand::SeedableRng;
use rand_pcg::Pcg32;

fn all(viewport: Viewport) -> Vec<Box<dyn Decoration>> {
    let mut rng = Pcg32::seed_from_u64(3);
    let icosahedra = BackgroundConfig {
        variant: BackgroundVariant::Icosahedra,
        ..BackgroundConfig::default()
    };
    vec![
        decor::background(&BackgroundConfig::default(), viewport, &mut rng),
        decor::background(&icosahedra, viewport, &mut rng),
        Box::new(HeroModel::new(viewport)),
        Box::new(ProfileModel::new(viewport)),
        Box::new(ProjectPreview::new(Some("2"), viewport)),
    ]
}

#[test]
fn resizing_twice_matches_resizing_once() {
    let target = Viewport::new(1280, 720);
    for (mut once, mut twice) in all(Viewport::new(800, 600)).into_iter().zip(all(Viewport::new(800, 600))) {
        once.resize(target);
        twice.resize(target);
        twice.resize(target);
        assert_eq!(once.camera(), twice.camera());
        assert!((once.camera().aspect - 1280.0 / 720.0).abs() < 1e-6);
    }
}

#[test]
fn collapsed_viewport_keeps_a_finite_projection() {
    for mut decoration in all(Viewport::new(800, 600)) {
        decoration.resize(Viewport::new(800, 0));
        assert_eq!(decoration.camera().aspect, 1.0);
        assert!(decoration.camera().projection().is_finite());
    }
}
