pub const MAX_LIGHTS: usize = 4;

pub const VERTEX: &str = r#"#version 300 es
layout(location = 0) in vec3 a_position;
layout(location = 1) in vec3 a_normal;
layout(location = 2) in vec2 a_uv;

uniform mat4 u_model;
uniform mat4 u_view;
uniform mat4 u_projection;
uniform mat3 u_normal_matrix;

out vec3 v_world;
out vec3 v_normal;
out vec2 v_uv;

void main() {
    vec4 world = u_model * vec4(a_position, 1.0);
    v_world = world.xyz;
    v_normal = u_normal_matrix * a_normal;
    v_uv = a_uv;
    gl_Position = u_projection * u_view * world;
}
"#;

pub const FRAGMENT: &str = r#"#version 300 es
precision highp float;

#define MAX_LIGHTS 4

in vec3 v_world;
in vec3 v_normal;
in vec2 v_uv;

uniform bool u_lit;
uniform bool u_flat;
uniform bool u_use_map;
uniform sampler2D u_map;
uniform vec3 u_color;
uniform float u_opacity;
uniform vec3 u_emissive;
uniform vec3 u_specular;
uniform float u_shininess;
uniform vec3 u_camera;
uniform vec3 u_ambient;
uniform int u_light_count;
uniform vec3 u_light_dir[MAX_LIGHTS];
uniform vec3 u_light_color[MAX_LIGHTS];

out vec4 frag_color;

void main() {
    vec4 base = vec4(u_color, u_opacity);
    if (u_use_map) {
        base *= texture(u_map, v_uv);
    }
    if (!u_lit) {
        frag_color = base;
        return;
    }

    vec3 n = u_flat
        ? normalize(cross(dFdx(v_world), dFdy(v_world)))
        : normalize(v_normal);
    vec3 to_eye = normalize(u_camera - v_world);

    vec3 diffuse = u_ambient;
    vec3 highlight = vec3(0.0);
    for (int i = 0; i < MAX_LIGHTS; i++) {
        if (i >= u_light_count) {
            break;
        }
        vec3 l = normalize(u_light_dir[i]);
        float lambert = max(dot(n, l), 0.0);
        diffuse += u_light_color[i] * lambert;
        if (lambert > 0.0) {
            vec3 h = normalize(l + to_eye);
            highlight += u_light_color[i] * u_specular * pow(max(dot(n, h), 0.0), u_shininess);
        }
    }

    frag_color = vec4(base.rgb * diffuse + highlight + u_emissive, base.a);
}
"#;
