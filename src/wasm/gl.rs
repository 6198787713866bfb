//! WebGL2 resource helpers: programs, mesh buffers and textures.

use js_sys::{Float32Array, Uint32Array};
use web_sys::{
    HtmlCanvasElement, WebGl2RenderingContext as GL, WebGlBuffer, WebGlProgram, WebGlShader,
    WebGlTexture, WebGlVertexArrayObject,
};

use crate::error::{DecorError, Result};
use crate::geometry::Geometry;

pub fn link_program(gl: &GL, vertex_src: &str, fragment_src: &str) -> Result<WebGlProgram> {
    let vertex = compile_shader(gl, GL::VERTEX_SHADER, vertex_src)?;
    let fragment = compile_shader(gl, GL::FRAGMENT_SHADER, fragment_src)?;
    let program = gl.create_program().ok_or(DecorError::Create("program"))?;
    gl.attach_shader(&program, &vertex);
    gl.attach_shader(&program, &fragment);
    gl.link_program(&program);

    let linked = gl
        .get_program_parameter(&program, GL::LINK_STATUS)
        .as_bool()
        .unwrap_or(false);
    gl.detach_shader(&program, &vertex);
    gl.detach_shader(&program, &fragment);
    gl.delete_shader(Some(&vertex));
    gl.delete_shader(Some(&fragment));

    if linked {
        Ok(program)
    } else {
        let info = gl
            .get_program_info_log(&program)
            .unwrap_or_else(|| "unknown program error".to_string());
        gl.delete_program(Some(&program));
        Err(DecorError::Link(info))
    }
}

fn compile_shader(gl: &GL, shader_type: u32, source: &str) -> Result<WebGlShader> {
    let shader = gl.create_shader(shader_type).ok_or(DecorError::Create("shader"))?;
    gl.shader_source(&shader, source);
    gl.compile_shader(&shader);
    if gl
        .get_shader_parameter(&shader, GL::COMPILE_STATUS)
        .as_bool()
        .unwrap_or(false)
    {
        Ok(shader)
    } else {
        let info = gl
            .get_shader_info_log(&shader)
            .unwrap_or_else(|| "unknown shader error".to_string());
        gl.delete_shader(Some(&shader));
        Err(DecorError::Compile(info))
    }
}

/// Vertex array plus the buffers it references.
pub struct GpuMesh {
    vao: WebGlVertexArrayObject,
    buffers: Vec<WebGlBuffer>,
    /// `TRIANGLES`, or `LINES` for wireframes.
    mode: u32,
    count: i32,
    pub texture: Option<WebGlTexture>,
}

impl GpuMesh {
    pub fn upload(gl: &GL, geometry: &Geometry, wireframe: bool) -> Result<Self> {
        let vao = gl.create_vertex_array().ok_or(DecorError::Create("vertex array"))?;
        gl.bind_vertex_array(Some(&vao));

        let mut buffers = Vec::with_capacity(4);
        for (location, size, data) in [
            (0, 3, geometry.positions.concat()),
            (1, 3, geometry.normals.concat()),
            (2, 2, geometry.uvs.concat()),
        ] {
            let buffer = gl.create_buffer().ok_or(DecorError::Create("vertex buffer"))?;
            gl.bind_buffer(GL::ARRAY_BUFFER, Some(&buffer));
            gl.buffer_data_with_array_buffer_view(
                GL::ARRAY_BUFFER,
                &Float32Array::from(data.as_slice()),
                GL::STATIC_DRAW,
            );
            gl.vertex_attrib_pointer_with_i32(location, size, GL::FLOAT, false, 0, 0);
            gl.enable_vertex_attrib_array(location);
            buffers.push(buffer);
        }

        let (mode, indices) = if wireframe {
            (GL::LINES, geometry.edges())
        } else {
            (GL::TRIANGLES, geometry.indices.clone())
        };
        let index_buffer = gl.create_buffer().ok_or(DecorError::Create("index buffer"))?;
        gl.bind_buffer(GL::ELEMENT_ARRAY_BUFFER, Some(&index_buffer));
        gl.buffer_data_with_array_buffer_view(
            GL::ELEMENT_ARRAY_BUFFER,
            &Uint32Array::from(indices.as_slice()),
            GL::STATIC_DRAW,
        );
        buffers.push(index_buffer);

        gl.bind_vertex_array(None);

        Ok(Self {
            vao,
            buffers,
            mode,
            count: indices.len() as i32,
            texture: None,
        })
    }

    pub fn draw(&self, gl: &GL) {
        gl.bind_vertex_array(Some(&self.vao));
        gl.draw_elements_with_i32(self.mode, self.count, GL::UNSIGNED_INT, 0);
        gl.bind_vertex_array(None);
    }

    pub fn delete(&self, gl: &GL) {
        for buffer in &self.buffers {
            gl.delete_buffer(Some(buffer));
        }
        gl.delete_vertex_array(Some(&self.vao));
        gl.delete_texture(self.texture.as_ref());
    }
}

/// Uploads a painted canvas as a mipmapped RGBA texture.
pub fn upload_canvas_texture(gl: &GL, source: &HtmlCanvasElement) -> Result<WebGlTexture> {
    let texture = gl.create_texture().ok_or(DecorError::Create("texture"))?;
    gl.bind_texture(GL::TEXTURE_2D, Some(&texture));
    // canvas rows run top-down, texture rows bottom-up
    gl.pixel_storei(GL::UNPACK_FLIP_Y_WEBGL, 1);
    let uploaded = gl.tex_image_2d_with_u32_and_u32_and_html_canvas_element(
        GL::TEXTURE_2D,
        0,
        GL::RGBA as i32,
        GL::RGBA,
        GL::UNSIGNED_BYTE,
        source,
    );
    gl.pixel_storei(GL::UNPACK_FLIP_Y_WEBGL, 0);
    uploaded?;

    gl.generate_mipmap(GL::TEXTURE_2D);
    gl.tex_parameteri(GL::TEXTURE_2D, GL::TEXTURE_MIN_FILTER, GL::LINEAR_MIPMAP_LINEAR as i32);
    gl.tex_parameteri(GL::TEXTURE_2D, GL::TEXTURE_MAG_FILTER, GL::LINEAR as i32);
    gl.tex_parameteri(GL::TEXTURE_2D, GL::TEXTURE_WRAP_S, GL::CLAMP_TO_EDGE as i32);
    gl.tex_parameteri(GL::TEXTURE_2D, GL::TEXTURE_WRAP_T, GL::CLAMP_TO_EDGE as i32);
    gl.bind_texture(GL::TEXTURE_2D, None);
    Ok(texture)
}
