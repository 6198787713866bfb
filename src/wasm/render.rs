use wasm_bindgen::JsCast;
use web_sys::{
    HtmlCanvasElement, WebGl2RenderingContext as GL, WebGlContextAttributes, WebGlProgram,
    WebGlUniformLocation,
};

use crate::camera::{PerspectiveCamera, Viewport};
use crate::error::{DecorError, Result};
use crate::scene::{world_matrices, Material, Scene};

use super::canvas2d::rasterize;
use super::gl::{link_program, upload_canvas_texture, GpuMesh};
use super::shaders::{self, MAX_LIGHTS};

struct Uniforms {
    model: Option<WebGlUniformLocation>,
    view: Option<WebGlUniformLocation>,
    projection: Option<WebGlUniformLocation>,
    normal_matrix: Option<WebGlUniformLocation>,
    lit: Option<WebGlUniformLocation>,
    flat: Option<WebGlUniformLocation>,
    use_map: Option<WebGlUniformLocation>,
    map: Option<WebGlUniformLocation>,
    color: Option<WebGlUniformLocation>,
    opacity: Option<WebGlUniformLocation>,
    emissive: Option<WebGlUniformLocation>,
    specular: Option<WebGlUniformLocation>,
    shininess: Option<WebGlUniformLocation>,
    camera: Option<WebGlUniformLocation>,
    ambient: Option<WebGlUniformLocation>,
    light_count: Option<WebGlUniformLocation>,
    light_dir: Option<WebGlUniformLocation>,
    light_color: Option<WebGlUniformLocation>,
}

impl Uniforms {
    fn locate(gl: &GL, program: &WebGlProgram) -> Self {
        let at = |name: &str| gl.get_uniform_location(program, name);
        Self {
            model: at("u_model"),
            view: at("u_view"),
            projection: at("u_projection"),
            normal_matrix: at("u_normal_matrix"),
            lit: at("u_lit"),
            flat: at("u_flat"),
            use_map: at("u_use_map"),
            map: at("u_map"),
            color: at("u_color"),
            opacity: at("u_opacity"),
            emissive: at("u_emissive"),
            specular: at("u_specular"),
            shininess: at("u_shininess"),
            camera: at("u_camera"),
            ambient: at("u_ambient"),
            light_count: at("u_light_count"),
            light_dir: at("u_light_dir"),
            light_color: at("u_light_color"),
        }
    }
}

/// Draws one scene into one canvas.
///
/// GPU copies of the scene's meshes (and their painted textures) are built
/// once up front; the scene's node layout must not change afterwards.
pub struct Renderer {
    canvas: HtmlCanvasElement,
    gl: GL,
    program: WebGlProgram,
    uniforms: Uniforms,
    /// Parallel to `scene.nodes[i].meshes[j]`.
    meshes: Vec<Vec<GpuMesh>>,
    size: Option<Viewport>,
}

impl Renderer {
    pub fn new(canvas: &HtmlCanvasElement, scene: &Scene) -> Result<Self> {
        let attributes = WebGlContextAttributes::new();
        attributes.set_alpha(true);
        attributes.set_antialias(true);
        let gl: GL = canvas
            .get_context_with_context_options("webgl2", &attributes)?
            .ok_or(DecorError::Unsupported("WebGL2"))?
            .dyn_into()
            .map_err(|_| DecorError::Unsupported("WebGL2"))?;

        let program = link_program(&gl, shaders::VERTEX, shaders::FRAGMENT)?;
        let uniforms = Uniforms::locate(&gl, &program);

        let document = canvas
            .owner_document()
            .ok_or(DecorError::MissingGlobal("document"))?;
        let mut meshes = Vec::with_capacity(scene.nodes.len());
        for node in &scene.nodes {
            let mut uploaded = Vec::with_capacity(node.meshes.len());
            for mesh in &node.meshes {
                let wireframe = matches!(mesh.material, Material::Basic { wireframe: true, .. });
                let mut gpu = GpuMesh::upload(&gl, &mesh.geometry, wireframe)?;
                if let Material::Basic { map: Some(art), .. } = mesh.material {
                    gpu.texture = Some(upload_canvas_texture(&gl, &rasterize(&document, art)?)?);
                }
                uploaded.push(gpu);
            }
            meshes.push(uploaded);
        }

        gl.enable(GL::DEPTH_TEST);
        gl.enable(GL::CULL_FACE);
        gl.enable(GL::BLEND);
        gl.blend_func_separate(GL::SRC_ALPHA, GL::ONE_MINUS_SRC_ALPHA, GL::ONE, GL::ONE_MINUS_SRC_ALPHA);

        Ok(Self {
            canvas: canvas.clone(),
            gl,
            program,
            uniforms,
            meshes,
            size: None,
        })
    }

    pub fn size(&self) -> Option<Viewport> {
        self.size
    }

    /// Resizes the drawing buffer and the canvas' CSS box together.
    pub fn set_size(&mut self, viewport: Viewport) {
        self.canvas.set_width(viewport.width);
        self.canvas.set_height(viewport.height);
        let style = self.canvas.style();
        for (prop, px) in [("width", viewport.width), ("height", viewport.height)] {
            if let Err(err) = style.set_property(prop, &format!("{px}px")) {
                log::warn!("could not set canvas {prop}: {err:?}");
            }
        }
        self.gl.viewport(0, 0, viewport.width as i32, viewport.height as i32);
        self.size = Some(viewport);
    }

    pub fn render(&self, scene: &Scene, camera: &PerspectiveCamera) {
        let gl = &self.gl;
        let u = &self.uniforms;

        gl.clear_color(0.0, 0.0, 0.0, 0.0);
        gl.clear(GL::COLOR_BUFFER_BIT | GL::DEPTH_BUFFER_BIT);
        gl.use_program(Some(&self.program));

        gl.uniform_matrix4fv_with_f32_array(u.view.as_ref(), false, &camera.view().to_cols_array());
        gl.uniform_matrix4fv_with_f32_array(u.projection.as_ref(), false, &camera.projection().to_cols_array());
        gl.uniform3fv_with_f32_array(u.camera.as_ref(), &camera.position.to_array());

        let rig = scene.light_rig();
        let lights = &rig.directional[..rig.directional.len().min(MAX_LIGHTS)];
        gl.uniform3fv_with_f32_array(u.ambient.as_ref(), &rig.ambient);
        gl.uniform1i(u.light_count.as_ref(), lights.len() as i32);
        if !lights.is_empty() {
            let dirs: Vec<f32> = lights.iter().flat_map(|(d, _)| *d).collect();
            let colors: Vec<f32> = lights.iter().flat_map(|(_, c)| *c).collect();
            gl.uniform3fv_with_f32_array(u.light_dir.as_ref(), &dirs);
            gl.uniform3fv_with_f32_array(u.light_color.as_ref(), &colors);
        }
        gl.uniform1i(u.map.as_ref(), 0);

        // opaque first, then see-through meshes from far to near
        let mut opaque = Vec::new();
        let mut transparent = Vec::new();
        for (i, node) in scene.nodes.iter().enumerate() {
            for (j, mesh) in node.meshes.iter().enumerate() {
                if mesh.material.is_transparent() {
                    let (model, _) = world_matrices(node, mesh);
                    let depth = (camera.view() * model).w_axis.z;
                    transparent.push((depth, i, j));
                } else {
                    opaque.push((i, j));
                }
            }
        }
        transparent.sort_by(|a, b| a.0.total_cmp(&b.0));

        let draws = opaque
            .into_iter()
            .chain(transparent.into_iter().map(|(_, i, j)| (i, j)));
        for (i, j) in draws {
            let Some(gpu) = self.meshes.get(i).and_then(|m| m.get(j)) else {
                continue;
            };
            let node = &scene.nodes[i];
            let mesh = &node.meshes[j];
            let (model, normal) = world_matrices(node, mesh);
            gl.uniform_matrix4fv_with_f32_array(u.model.as_ref(), false, &model.to_cols_array());
            gl.uniform_matrix3fv_with_f32_array(u.normal_matrix.as_ref(), false, &normal.to_cols_array());
            self.bind_material(&mesh.material, gpu);
            gpu.draw(gl);
        }
    }

    fn bind_material(&self, material: &Material, gpu: &GpuMesh) {
        let gl = &self.gl;
        let u = &self.uniforms;
        match *material {
            Material::Basic { color, opacity, .. } => {
                gl.uniform1i(u.lit.as_ref(), 0);
                gl.uniform1i(u.flat.as_ref(), 0);
                gl.uniform3fv_with_f32_array(u.color.as_ref(), &color.to_array(1.0));
                gl.uniform1f(u.opacity.as_ref(), opacity);
            }
            Material::Phong {
                color,
                emissive,
                emissive_intensity,
                specular,
                shininess,
                flat_shading,
                opacity,
            } => {
                gl.uniform1i(u.lit.as_ref(), 1);
                gl.uniform1i(u.flat.as_ref(), flat_shading as i32);
                gl.uniform3fv_with_f32_array(u.color.as_ref(), &color.to_array(1.0));
                gl.uniform1f(u.opacity.as_ref(), opacity);
                gl.uniform3fv_with_f32_array(u.emissive.as_ref(), &emissive.to_array(emissive_intensity));
                gl.uniform3fv_with_f32_array(u.specular.as_ref(), &specular.to_array(1.0));
                gl.uniform1f(u.shininess.as_ref(), shininess);
            }
        }

        gl.active_texture(GL::TEXTURE0);
        match &gpu.texture {
            Some(texture) => {
                gl.uniform1i(u.use_map.as_ref(), 1);
                gl.bind_texture(GL::TEXTURE_2D, Some(texture));
            }
            None => {
                gl.uniform1i(u.use_map.as_ref(), 0);
                gl.bind_texture(GL::TEXTURE_2D, None);
            }
        }
    }
}

impl Drop for Renderer {
    fn drop(&mut self) {
        for mesh in self.meshes.iter().flatten() {
            mesh.delete(&self.gl);
        }
        self.gl.delete_program(Some(&self.program));
    }
}
