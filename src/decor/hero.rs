use std::rc::Rc;

use crate::camera::{PerspectiveCamera, Viewport};
use crate::frame::{Decoration, Frame};
use crate::geometry::Geometry;
use crate::scene::{studio_lights, Mesh, Node, NodeId, Scene};

use super::{accent_phong, tumble};

/// Torus knot tumbling in the hero section.
pub struct HeroModel {
    scene: Scene,
    camera: PerspectiveCamera,
    knot: NodeId,
}

impl HeroModel {
    pub fn new(viewport: Viewport) -> Self {
        let mut scene = Scene::default();
        studio_lights(&mut scene);
        let knot = scene.add(Node::single(Mesh::new(
            Rc::new(Geometry::torus_knot(1.0, 0.4, 100, 16, 2, 3)),
            accent_phong(0.2),
        )));
        Self {
            scene,
            camera: PerspectiveCamera::new(100.0, viewport, 1.0, 10000.0).at_z(3.0),
            knot,
        }
    }
}

impl Decoration for HeroModel {
    fn scene(&self) -> &Scene {
        &self.scene
    }

    fn camera(&self) -> &PerspectiveCamera {
        &self.camera
    }

    fn camera_mut(&mut self) -> &mut PerspectiveCamera {
        &mut self.camera
    }

    fn update(&mut self, _: Frame) {
        tumble(&mut self.scene.node_mut(self.knot).transform);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::frame::Stepper;
    use crate::geometry::Primitive;

    #[test]
    fn knot_tumbles_every_frame() {
        let mut hero = HeroModel::new(Viewport::new(400, 400));
        assert_eq!(hero.scene().nodes[0].meshes[0].geometry.primitive, Primitive::TorusKnot);
        Stepper::sixty_hz().run(&mut hero, 10);
        let r = hero.scene().nodes[0].transform.rotation;
        assert!((r.x - 0.05).abs() < 1e-5);
        assert!((r.y - 0.1).abs() < 1e-5);
    }
}
