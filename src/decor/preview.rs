use std::rc::Rc;

use crate::camera::{PerspectiveCamera, Viewport};
use crate::frame::{Decoration, Frame};
use crate::geometry::Geometry;
use crate::scene::{studio_lights, Mesh, Node, NodeId, Scene};

use super::{accent_phong, tumble};

/// Primitive shown on a project card, keyed by the card's project id.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PreviewShape {
    Box,
    Cone,
    Cylinder,
    Sphere,
}

impl PreviewShape {
    /// Unknown or missing ids get the sphere.
    pub fn from_id(id: Option<&str>) -> Self {
        match id {
            Some("1") => PreviewShape::Box,
            Some("2") => PreviewShape::Cone,
            Some("3") => PreviewShape::Cylinder,
            _ => PreviewShape::Sphere,
        }
    }

    pub fn geometry(self) -> Geometry {
        match self {
            PreviewShape::Box => Geometry::cuboid(1.0, 1.0, 1.0),
            PreviewShape::Cone => Geometry::cone(0.8, 1.5, 32),
            PreviewShape::Cylinder => Geometry::cylinder(0.5, 0.5, 1.0, 32),
            PreviewShape::Sphere => Geometry::sphere(0.8, 32, 32),
        }
    }
}

pub struct ProjectPreview {
    scene: Scene,
    camera: PerspectiveCamera,
    shape: PreviewShape,
    mesh: NodeId,
}

impl ProjectPreview {
    pub fn new(project_id: Option<&str>, viewport: Viewport) -> Self {
        let shape = PreviewShape::from_id(project_id);
        let mut scene = Scene::default();
        studio_lights(&mut scene);
        let mesh = scene.add(Node::single(Mesh::new(Rc::new(shape.geometry()), accent_phong(0.1))));
        Self {
            scene,
            camera: PerspectiveCamera::new(75.0, viewport, 0.1, 1000.0).at_z(3.0),
            shape,
            mesh,
        }
    }

    pub fn shape(&self) -> PreviewShape {
        self.shape
    }
}

impl Decoration for ProjectPreview {
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
        tumble(&mut self.scene.node_mut(self.mesh).transform);
    }
}
