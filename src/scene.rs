//! A minimal retained scene graph: nodes of meshes plus lights.

use std::rc::Rc;

use glam::{EulerRot, Mat3, Mat4, Quat, Vec3};

use crate::color::Rgb;
use crate::geometry::Geometry;
use crate::texture::Artwork;

/// Position, XYZ euler rotation in radians, and scale.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Transform {
    pub position: Vec3,
    pub rotation: Vec3,
    pub scale: Vec3,
}

impl Default for Transform {
    fn default() -> Self {
        Self {
            position: Vec3::ZERO,
            rotation: Vec3::ZERO,
            scale: Vec3::ONE,
        }
    }
}

impl Transform {
    pub fn at(position: Vec3) -> Self {
        Self {
            position,
            ..Default::default()
        }
    }

    pub fn to_matrix(&self) -> Mat4 {
        let rotation = Quat::from_euler(EulerRot::XYZ, self.rotation.x, self.rotation.y, self.rotation.z);
        Mat4::from_scale_rotation_translation(self.scale, rotation, self.position)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum Material {
    /// Unlit.
    Basic {
        color: Rgb,
        opacity: f32,
        map: Option<Artwork>,
        wireframe: bool,
    },
    /// Lit with ambient + directional lights and a Blinn-Phong highlight.
    Phong {
        color: Rgb,
        emissive: Rgb,
        emissive_intensity: f32,
        specular: Rgb,
        shininess: f32,
        flat_shading: bool,
        opacity: f32,
    },
}

impl Material {
    pub fn basic(color: Rgb) -> Self {
        Material::Basic {
            color,
            opacity: 1.0,
            map: None,
            wireframe: false,
        }
    }

    pub fn textured(map: Artwork, opacity: f32) -> Self {
        Material::Basic {
            color: Rgb::WHITE,
            opacity,
            map: Some(map),
            wireframe: false,
        }
    }

    pub fn phong(color: Rgb, emissive: Rgb, emissive_intensity: f32, shininess: f32) -> Self {
        Material::Phong {
            color,
            emissive,
            emissive_intensity,
            specular: Rgb(0x111111),
            shininess,
            flat_shading: false,
            opacity: 1.0,
        }
    }

    pub fn opacity(&self) -> f32 {
        match self {
            Material::Basic { opacity, .. } | Material::Phong { opacity, .. } => *opacity,
        }
    }

    pub fn is_transparent(&self) -> bool {
        self.opacity() < 1.0
    }
}

#[derive(Clone, Debug)]
pub struct Mesh {
    pub geometry: Rc<Geometry>,
    pub material: Material,
    /// Placement relative to the owning node.
    pub local: Transform,
}

impl Mesh {
    pub fn new(geometry: Rc<Geometry>, material: Material) -> Self {
        Self {
            geometry,
            material,
            local: Transform::default(),
        }
    }

    pub fn placed(mut self, position: Vec3) -> Self {
        self.local.position = position;
        self
    }
}

/// One movable unit: a single mesh or a group of meshes.
#[derive(Clone, Debug)]
pub struct Node {
    pub transform: Transform,
    pub meshes: Vec<Mesh>,
}

impl Node {
    pub fn new(meshes: Vec<Mesh>) -> Self {
        Self {
            transform: Transform::default(),
            meshes,
        }
    }

    pub fn single(mesh: Mesh) -> Self {
        Self::new(vec![mesh])
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Light {
    Ambient { color: Rgb, intensity: f32 },
    /// Shines from `position` towards the origin.
    Directional { color: Rgb, intensity: f32, position: Vec3 },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct NodeId(pub usize);

#[derive(Clone, Debug, Default)]
pub struct Scene {
    pub nodes: Vec<Node>,
    pub lights: Vec<Light>,
}

/// Light contributions folded into what the shader consumes.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct LightRig {
    pub ambient: [f32; 3],
    /// (direction towards the light, colour × intensity)
    pub directional: Vec<([f32; 3], [f32; 3])>,
}

impl Scene {
    pub fn add(&mut self, node: Node) -> NodeId {
        self.nodes.push(node);
        NodeId(self.nodes.len() - 1)
    }

    pub fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id.0]
    }

    pub fn node_mut(&mut self, id: NodeId) -> &mut Node {
        &mut self.nodes[id.0]
    }

    pub fn light(&mut self, light: Light) {
        self.lights.push(light);
    }

    pub fn light_rig(&self) -> LightRig {
        let mut rig = LightRig::default();
        for light in &self.lights {
            match *light {
                Light::Ambient { color, intensity } => {
                    let c = color.to_array(intensity);
                    for (acc, v) in rig.ambient.iter_mut().zip(c) {
                        *acc += v;
                    }
                }
                Light::Directional { color, intensity, position } => {
                    rig.directional
                        .push((position.normalize_or_zero().to_array(), color.to_array(intensity)));
                }
            }
        }
        rig
    }
}

/// Model matrix of `mesh` inside `node`, plus the matching normal matrix.
pub fn world_matrices(node: &Node, mesh: &Mesh) -> (Mat4, Mat3) {
    let model = node.transform.to_matrix() * mesh.local.to_matrix();
    let normal = Mat3::from_mat4(model).inverse().transpose();
    (model, normal)
}

/// White ambient at 0.5 plus a white key light from (1, 1, 1).
pub fn studio_lights(scene: &mut Scene) {
    scene.light(Light::Ambient { color: Rgb::WHITE, intensity: 0.5 });
    scene.light(Light::Directional {
        color: Rgb::WHITE,
        intensity: 0.8,
        position: Vec3::ONE,
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn euler_order_is_x_then_y_then_z() {
        let t = Transform {
            rotation: Vec3::new(0.3, 0.7, 0.0),
            ..Default::default()
        };
        let expected = Mat4::from_rotation_x(0.3) * Mat4::from_rotation_y(0.7);
        assert!(t.to_matrix().abs_diff_eq(expected, 1e-6));
    }

    #[test]
    fn light_rig_sums_ambient_and_normalizes_directions() {
        let mut scene = Scene::default();
        scene.light(Light::Ambient { color: Rgb::WHITE, intensity: 0.25 });
        scene.light(Light::Ambient { color: Rgb(0xff0000), intensity: 0.5 });
        scene.light(Light::Directional {
            color: Rgb::WHITE,
            intensity: 0.3,
            position: Vec3::new(-2.0, 0.0, 0.0),
        });
        let rig = scene.light_rig();
        assert_eq!(rig.ambient, [0.75, 0.25, 0.25]);
        assert_eq!(rig.directional, vec![([-1.0, 0.0, 0.0], [0.3, 0.3, 0.3])]);
    }

    #[test]
    fn child_mesh_follows_its_node() {
        let geo = Rc::new(Geometry::plane(1.0, 1.0));
        let mut node = Node::single(Mesh::new(geo, Material::basic(Rgb::WHITE)).placed(Vec3::new(0.0, 1.5, 0.0)));
        node.transform.position = Vec3::new(10.0, 0.0, 0.0);
        let (model, _) = world_matrices(&node, &node.meshes[0]);
        assert_eq!(model.transform_point3(Vec3::ZERO), Vec3::new(10.0, 1.5, 0.0));
    }

    #[test]
    fn lit_materials_can_be_see_through() {
        let mut glass = Material::phong(Rgb::WHITE, Rgb::BLACK, 0.0, 10.0);
        assert_eq!(glass.opacity(), 1.0);
        assert!(!glass.is_transparent());
        if let Material::Phong { opacity, .. } = &mut glass {
            *opacity = 0.4;
        }
        assert_eq!(glass.opacity(), 0.4);
        assert!(glass.is_transparent());
    }
}
