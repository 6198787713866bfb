//! The page background: floating browser windows and UI widgets.

use std::rc::Rc;

use glam::Vec3;
use rand::Rng;

use crate::camera::{PerspectiveCamera, Viewport};
use crate::color::Rgb;
use crate::config::BackgroundConfig;
use crate::frame::{Decoration, Frame};
use crate::geometry::Geometry;
use crate::scene::{Light, Material, Mesh, Node, NodeId, Scene};
use crate::texture::{Artwork, ComponentMockup, WindowMockup};

/// Per-group motion constants, fixed at creation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Motion {
    /// Radians per frame around Y; X turns at 0.3 of this.
    pub speed: f32,
    /// Angular frequency of the drift, per millisecond.
    pub float_speed: f32,
}

struct Shapes {
    frame: Rc<Geometry>,
    content: Rc<Geometry>,
    chrome: Rc<Geometry>,
    widget: Rc<Geometry>,
}

pub struct CardField {
    scene: Scene,
    camera: PerspectiveCamera,
    drifters: Vec<(NodeId, Motion)>,
}

impl CardField {
    pub fn new<R: Rng + ?Sized>(config: &BackgroundConfig, viewport: Viewport, rng: &mut R) -> Self {
        let mut scene = Scene::default();
        scene.light(Light::Ambient { color: Rgb(0x404040), intensity: 0.5 });
        scene.light(Light::Directional {
            color: Rgb::WHITE,
            intensity: 0.6,
            position: Vec3::ONE,
        });
        scene.light(Light::Directional {
            color: Rgb::WHITE,
            intensity: 0.3,
            position: Vec3::NEG_ONE,
        });

        let shapes = Shapes {
            frame: Rc::new(Geometry::cuboid(4.0, 3.0, 0.1)),
            content: Rc::new(Geometry::plane(3.8, 2.8)),
            chrome: Rc::new(Geometry::plane(4.0, 0.2)),
            widget: Rc::new(Geometry::plane(2.0, 2.0)),
        };

        let mut drifters = Vec::with_capacity(config.windows + config.components);
        for _ in 0..config.windows {
            let mut node = browser_window(&shapes, WindowMockup::choose(rng));
            scatter(&mut node, 0.1, rng);
            let motion = Motion {
                speed: rng.random_range(0.002..0.007),
                float_speed: rng.random_range(0.0005..0.0015),
            };
            drifters.push((scene.add(node), motion));
        }
        for _ in 0..config.components {
            let mut node = ui_component(&shapes, ComponentMockup::choose(rng));
            scatter(&mut node, 0.25, rng);
            let motion = Motion {
                speed: rng.random_range(0.005..0.015),
                float_speed: rng.random_range(0.001..0.002),
            };
            drifters.push((scene.add(node), motion));
        }
        log::debug!("background field with {} groups", drifters.len());

        Self {
            scene,
            camera: PerspectiveCamera::new(75.0, viewport, 0.1, 1000.0).at_z(30.0),
            drifters,
        }
    }

    pub fn drifters(&self) -> &[(NodeId, Motion)] {
        &self.drifters
    }
}

fn browser_window(shapes: &Shapes, mockup: WindowMockup) -> Node {
    let frame = Mesh::new(
        shapes.frame.clone(),
        Material::Phong {
            color: Rgb(0x2c3e50),
            emissive: Rgb(0x1a1a1a),
            emissive_intensity: 1.0,
            specular: Rgb(0x111111),
            shininess: 30.0,
            flat_shading: false,
            opacity: 1.0,
        },
    );
    // both planes sit just proud of the frame's front face
    let content = Mesh::new(shapes.content.clone(), Material::textured(Artwork::Window(mockup), 0.9))
        .placed(Vec3::new(0.0, 0.0, 0.051));
    let chrome = Mesh::new(shapes.chrome.clone(), Material::textured(Artwork::Chrome, 1.0))
        .placed(Vec3::new(0.0, 1.5, 0.051));
    Node::new(vec![frame, content, chrome])
}

fn ui_component(shapes: &Shapes, mockup: ComponentMockup) -> Node {
    Node::single(Mesh::new(
        shapes.widget.clone(),
        Material::textured(Artwork::Component(mockup), 0.9),
    ))
}

fn scatter<R: Rng + ?Sized>(node: &mut Node, tilt: f32, rng: &mut R) {
    let t = &mut node.transform;
    t.position = Vec3::new(
        rng.random_range(-20.0..20.0),
        rng.random_range(-15.0..15.0),
        rng.random_range(-20.0..20.0),
    );
    t.rotation.x = rng.random_range(-tilt..tilt);
    t.rotation.y = rng.random_range(-tilt..tilt);
}

impl Decoration for CardField {
    fn scene(&self) -> &Scene {
        &self.scene
    }

    fn camera(&self) -> &PerspectiveCamera {
        &self.camera
    }

    fn camera_mut(&mut self) -> &mut PerspectiveCamera {
        &mut self.camera
    }

    fn update(&mut self, frame: Frame) {
        for &(id, motion) in &self.drifters {
            let t = &mut self.scene.node_mut(id).transform;
            t.rotation.x += motion.speed * 0.3;
            t.rotation.y += motion.speed;

            let phase = frame.now_ms * motion.float_speed as f64;
            t.position.y += (phase.sin() * 0.01) as f32;
            t.position.x += ((phase * 0.7).cos() * 0.008) as f32;
        }
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    use super::*;

    fn field(seed: u64) -> CardField {
        let mut rng = Pcg32::seed_from_u64(seed);
        CardField::new(&BackgroundConfig::default(), Viewport::new(1280, 720), &mut rng)
    }

    #[test]
    fn populates_windows_then_components() {
        let field = field(1);
        assert_eq!(field.scene().nodes.len(), 15);
        assert_eq!(field.drifters().len(), 15);
        for node in &field.scene().nodes[..5] {
            assert_eq!(node.meshes.len(), 3);
            assert!(matches!(
                node.meshes[1].material,
                Material::Basic { map: Some(Artwork::Window(_)), .. }
            ));
        }
        for node in &field.scene().nodes[5..] {
            assert_eq!(node.meshes.len(), 1);
            assert!(matches!(
                node.meshes[0].material,
                Material::Basic { map: Some(Artwork::Component(_)), .. }
            ));
        }
    }

    #[test]
    fn initial_layout_stays_in_bounds() {
        for seed in 0..20 {
            let field = field(seed);
            for (i, &(id, motion)) in field.drifters().iter().enumerate() {
                let t = field.scene().node(id).transform;
                assert!(t.position.x >= -20.0 && t.position.x < 20.0);
                assert!(t.position.y >= -15.0 && t.position.y < 15.0);
                assert!(t.position.z >= -20.0 && t.position.z < 20.0);
                let (tilt, speed, float) = if i < 5 {
                    (0.1, 0.002..0.007, 0.0005..0.0015)
                } else {
                    (0.25, 0.005..0.015, 0.001..0.002)
                };
                assert!(t.rotation.x.abs() <= tilt && t.rotation.y.abs() <= tilt);
                assert!(speed.contains(&motion.speed));
                assert!(float.contains(&motion.float_speed));
            }
        }
    }

    #[test]
    fn one_frame_applies_spin_and_drift() {
        let mut field = field(9);
        let before: Vec<_> = field.scene().nodes.iter().map(|n| n.transform).collect();
        let now_ms = 1_700_000_000_000.0;
        field.update(Frame { now_ms });
        for (&(id, motion), old) in field.drifters().iter().zip(&before) {
            let new = field.scene().node(id).transform;
            let phase = now_ms * motion.float_speed as f64;
            assert!((new.rotation.x - old.rotation.x - motion.speed * 0.3).abs() < 1e-6);
            assert!((new.rotation.y - old.rotation.y - motion.speed).abs() < 1e-6);
            assert!((new.position.y - old.position.y - (phase.sin() * 0.01) as f32).abs() < 1e-5);
            assert!((new.position.x - old.position.x - ((phase * 0.7).cos() * 0.008) as f32).abs() < 1e-5);
            assert_eq!(new.position.z, old.position.z);
        }
    }

    #[test]
    fn same_seed_same_layout() {
        let a = field(42);
        let b = field(42);
        for (x, y) in a.scene().nodes.iter().zip(&b.scene().nodes) {
            assert_eq!(x.transform, y.transform);
            assert_eq!(x.meshes.last().map(|m| &m.material), y.meshes.last().map(|m| &m.material));
        }
    }
}
