//! The older background: a cloud of wireframe icosahedra.

use std::rc::Rc;

use glam::Vec3;
use rand::Rng;

use crate::camera::{PerspectiveCamera, Viewport};
use crate::frame::{Decoration, Frame};
use crate::geometry::Geometry;
use crate::scene::{Material, Mesh, Node, Scene};

use super::ACCENT;

const SPIN: f32 = 0.001;
const DRIFT: f64 = 0.001;

pub struct IcosahedronField {
    scene: Scene,
    camera: PerspectiveCamera,
}

impl IcosahedronField {
    pub fn new<R: Rng + ?Sized>(count: usize, viewport: Viewport, rng: &mut R) -> Self {
        let geometry = Rc::new(Geometry::icosahedron(1.0));
        let material = Material::Basic {
            color: ACCENT,
            opacity: 0.5,
            map: None,
            wireframe: true,
        };

        let mut scene = Scene::default();
        for _ in 0..count {
            let mut node = Node::single(Mesh::new(geometry.clone(), material.clone()));
            node.transform.position = Vec3::new(
                rng.random_range(-10.0..10.0),
                rng.random_range(-10.0..10.0),
                rng.random_range(-10.0..10.0),
            );
            node.transform.scale = Vec3::splat(rng.random_range(0.5..2.5));
            scene.add(node);
        }

        Self {
            scene,
            camera: PerspectiveCamera::new(75.0, viewport, 0.1, 1000.0).at_z(5.0),
        }
    }
}

impl Decoration for IcosahedronField {
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
        let t = frame.now_ms * 0.001;
        for node in &mut self.scene.nodes {
            let tr = &mut node.transform;
            tr.rotation.x += SPIN;
            tr.rotation.y += SPIN;
            // x drift reads the y that was just moved
            tr.position.y += ((t + tr.position.x as f64).sin() * DRIFT) as f32;
            tr.position.x += ((t + tr.position.y as f64).cos() * DRIFT) as f32;
        }
    }
}
