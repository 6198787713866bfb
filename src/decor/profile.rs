//! The "avatar": a faceted sphere with two eyes that can be spun by dragging.

use std::rc::Rc;

use glam::Vec3;

use crate::camera::{PerspectiveCamera, Viewport};
use crate::color::Rgb;
use crate::frame::{Decoration, Frame};
use crate::geometry::Geometry;
use crate::scene::{studio_lights, Material, Mesh, Node, NodeId, Scene};

use super::accent_phong;

/// Radians of rotation per pixel of pointer travel.
pub const DRAG_SENSITIVITY: f32 = 0.01;
/// Radians around Y added each frame while idle.
pub const IDLE_SPIN: f32 = 0.002;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum DragState {
    Idle,
    /// Holds the last pointer position seen, in element pixels.
    Dragging { x: f64, y: f64 },
}

pub struct ProfileModel {
    scene: Scene,
    camera: PerspectiveCamera,
    head: NodeId,
    state: DragState,
}

impl ProfileModel {
    pub fn new(viewport: Viewport) -> Self {
        let mut scene = Scene::default();
        studio_lights(&mut scene);

        let mut skin = accent_phong(0.2);
        if let Material::Phong { flat_shading, .. } = &mut skin {
            *flat_shading = true;
        }
        let head = scene.add(Node::single(Mesh::new(Rc::new(Geometry::sphere(1.0, 32, 32)), skin)));

        // the eyes are scene-level, so they stay put while the head turns
        let eye = Rc::new(Geometry::sphere(0.1, 16, 16));
        for x in [-0.3, 0.3] {
            scene.add(Node::single(
                Mesh::new(eye.clone(), Material::basic(Rgb::WHITE)).placed(Vec3::new(x, 0.1, 0.9)),
            ));
        }

        Self {
            scene,
            camera: PerspectiveCamera::new(75.0, viewport, 0.1, 1000.0).at_z(2.5),
            head,
            state: DragState::Idle,
        }
    }

    pub fn state(&self) -> DragState {
        self.state
    }

    pub fn head_rotation(&self) -> Vec3 {
        self.scene.node(self.head).transform.rotation
    }

    pub fn pointer_down(&mut self, x: f64, y: f64) {
        self.state = DragState::Dragging { x, y };
    }

    /// Ignored unless a drag is in progress.
    pub fn pointer_move(&mut self, x: f64, y: f64) {
        if let DragState::Dragging { x: last_x, y: last_y } = self.state {
            let rotation = &mut self.scene.node_mut(self.head).transform.rotation;
            rotation.y += (x - last_x) as f32 * DRAG_SENSITIVITY;
            rotation.x += (y - last_y) as f32 * DRAG_SENSITIVITY;
            self.state = DragState::Dragging { x, y };
        }
    }

    pub fn pointer_up(&mut self) {
        self.state = DragState::Idle;
    }

    pub fn pointer_leave(&mut self) {
        self.state = DragState::Idle;
    }
}

impl Decoration for ProfileModel {
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
        if self.state == DragState::Idle {
            self.scene.node_mut(self.head).transform.rotation.y += IDLE_SPIN;
        }
    }
}
