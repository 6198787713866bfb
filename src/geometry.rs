//! Indexed triangle meshes for the primitives the decorations use.
//!
//! Vertex layout and winding follow the usual scene-graph conventions: +Y up,
//! counter-clockwise front faces, UV origin at the bottom-left.

use std::collections::BTreeSet;
use std::f32::consts::{PI, TAU};

use glam::Vec3;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Primitive {
    Box,
    Plane,
    Sphere,
    Cone,
    Cylinder,
    TorusKnot,
    Icosahedron,
}

#[derive(Clone, Debug)]
pub struct Geometry {
    pub primitive: Primitive,
    pub positions: Vec<[f32; 3]>,
    pub normals: Vec<[f32; 3]>,
    pub uvs: Vec<[f32; 2]>,
    pub indices: Vec<u32>,
}

impl Geometry {
    fn empty(primitive: Primitive) -> Self {
        Self {
            primitive,
            positions: Vec::new(),
            normals: Vec::new(),
            uvs: Vec::new(),
            indices: Vec::new(),
        }
    }

    fn push(&mut self, position: Vec3, normal: Vec3, uv: [f32; 2]) {
        self.positions.push(position.to_array());
        self.normals.push(normal.to_array());
        self.uvs.push(uv);
    }

    fn next_index(&self) -> u32 {
        self.positions.len() as u32
    }

    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Unique triangle edges as a line list, for wireframe drawing.
    pub fn edges(&self) -> Vec<u32> {
        let mut seen = BTreeSet::new();
        for tri in self.indices.chunks_exact(3) {
            for (a, b) in [(tri[0], tri[1]), (tri[1], tri[2]), (tri[2], tri[0])] {
                seen.insert((a.min(b), a.max(b)));
            }
        }
        seen.into_iter().flat_map(|(a, b)| [a, b]).collect()
    }

    /// Axis-aligned box centred on the origin, one quad per face.
    pub fn cuboid(width: f32, height: f32, depth: f32) -> Self {
        let mut g = Self::empty(Primitive::Box);
        // (u axis, v axis, w axis, u dir, v dir, u size, v size, w size)
        let faces = [
            (2, 1, 0, -1.0, -1.0, depth, height, width),
            (2, 1, 0, 1.0, -1.0, depth, height, -width),
            (0, 2, 1, 1.0, 1.0, width, depth, height),
            (0, 2, 1, 1.0, -1.0, width, depth, -height),
            (0, 1, 2, 1.0, -1.0, width, height, depth),
            (0, 1, 2, -1.0, -1.0, width, height, -depth),
        ];
        for (u, v, w, udir, vdir, su, sv, sw) in faces {
            let base = g.next_index();
            for iy in 0..2 {
                for ix in 0..2 {
                    let mut p = Vec3::ZERO;
                    p[u] = (ix as f32 - 0.5) * su * udir;
                    p[v] = (iy as f32 - 0.5) * sv * vdir;
                    p[w] = sw / 2.0;
                    let mut n = Vec3::ZERO;
                    n[w] = sw.signum();
                    g.push(p, n, [ix as f32, 1.0 - iy as f32]);
                }
            }
            g.quad(base, 2);
        }
        g
    }

    /// Plane in the XY plane facing +Z.
    pub fn plane(width: f32, height: f32) -> Self {
        let mut g = Self::empty(Primitive::Plane);
        for iy in 0..2 {
            let y = iy as f32 * height - height / 2.0;
            for ix in 0..2 {
                let x = ix as f32 * width - width / 2.0;
                g.push(Vec3::new(x, -y, 0.0), Vec3::Z, [ix as f32, 1.0 - iy as f32]);
            }
        }
        g.quad(0, 2);
        g
    }

    // Two triangles for a 2x2 vertex block laid out row by row.
    fn quad(&mut self, base: u32, row: u32) {
        let a = base;
        let b = base + row;
        let c = base + row + 1;
        let d = base + 1;
        self.indices.extend_from_slice(&[a, b, d, b, c, d]);
    }

    pub fn sphere(radius: f32, width_segments: u32, height_segments: u32) -> Self {
        let mut g = Self::empty(Primitive::Sphere);
        let row = width_segments + 1;
        for iy in 0..=height_segments {
            let v = iy as f32 / height_segments as f32;
            for ix in 0..=width_segments {
                let u = ix as f32 / width_segments as f32;
                let p = Vec3::new(
                    -radius * (u * TAU).cos() * (v * PI).sin(),
                    radius * (v * PI).cos(),
                    radius * (u * TAU).sin() * (v * PI).sin(),
                );
                g.push(p, p.normalize_or_zero(), [u, 1.0 - v]);
            }
        }
        for iy in 0..height_segments {
            for ix in 0..width_segments {
                let a = iy * row + ix + 1;
                let b = iy * row + ix;
                let c = (iy + 1) * row + ix;
                let d = (iy + 1) * row + ix + 1;
                // the poles collapse into single triangles
                if iy != 0 {
                    g.indices.extend_from_slice(&[a, b, d]);
                }
                if iy != height_segments - 1 {
                    g.indices.extend_from_slice(&[b, c, d]);
                }
            }
        }
        g
    }

    pub fn cylinder(radius_top: f32, radius_bottom: f32, height: f32, radial_segments: u32) -> Self {
        let mut g = Self::empty(Primitive::Cylinder);
        g.frustum(radius_top, radius_bottom, height, radial_segments);
        g
    }

    /// A cylinder with a zero top radius; only the base is capped.
    pub fn cone(radius: f32, height: f32, radial_segments: u32) -> Self {
        let mut g = Self::empty(Primitive::Cone);
        g.frustum(0.0, radius, height, radial_segments);
        g
    }

    fn frustum(&mut self, radius_top: f32, radius_bottom: f32, height: f32, radial: u32) {
        let half = height / 2.0;
        let slope = (radius_bottom - radius_top) / height;
        let row = radial + 1;

        for y in 0..=1u32 {
            let v = y as f32;
            let radius = v * (radius_bottom - radius_top) + radius_top;
            for x in 0..=radial {
                let u = x as f32 / radial as f32;
                let (sin, cos) = (u * TAU).sin_cos();
                let p = Vec3::new(radius * sin, -v * height + half, radius * cos);
                let n = Vec3::new(sin, slope, cos).normalize();
                self.push(p, n, [u, 1.0 - v]);
            }
        }
        for x in 0..radial {
            let a = x;
            let b = row + x;
            let c = row + x + 1;
            let d = x + 1;
            if radius_top > 0.0 {
                self.indices.extend_from_slice(&[a, b, d]);
            }
            if radius_bottom > 0.0 {
                self.indices.extend_from_slice(&[b, c, d]);
            }
        }

        if radius_top > 0.0 {
            self.cap(radius_top, half, true, radial);
        }
        if radius_bottom > 0.0 {
            self.cap(radius_bottom, half, false, radial);
        }
    }

    fn cap(&mut self, radius: f32, half: f32, top: bool, radial: u32) {
        let sign = if top { 1.0 } else { -1.0 };
        let normal = Vec3::new(0.0, sign, 0.0);
        let center_start = self.next_index();
        for _ in 0..radial {
            self.push(Vec3::new(0.0, half * sign, 0.0), normal, [0.5, 0.5]);
        }
        let rim_start = self.next_index();
        for x in 0..=radial {
            let (sin, cos) = (x as f32 / radial as f32 * TAU).sin_cos();
            self.push(
                Vec3::new(radius * sin, half * sign, radius * cos),
                normal,
                [cos * 0.5 + 0.5, sin * 0.5 * sign + 0.5],
            );
        }
        for x in 0..radial {
            let c = center_start + x;
            let i = rim_start + x;
            if top {
                self.indices.extend_from_slice(&[i, i + 1, c]);
            } else {
                self.indices.extend_from_slice(&[i + 1, i, c]);
            }
        }
    }

    /// A (p, q) torus knot swept by a circular tube.
    pub fn torus_knot(radius: f32, tube: f32, tubular_segments: u32, radial_segments: u32, p: u32, q: u32) -> Self {
        let mut g = Self::empty(Primitive::TorusKnot);
        let (p, q) = (p as f32, q as f32);
        let curve = |u: f32| {
            let quo = q / p * u;
            let cs = quo.cos();
            Vec3::new(
                radius * (2.0 + cs) * 0.5 * u.cos(),
                radius * (2.0 + cs) * u.sin() * 0.5,
                radius * quo.sin() * 0.5,
            )
        };

        for i in 0..=tubular_segments {
            let u = i as f32 / tubular_segments as f32 * p * TAU;
            let p1 = curve(u);
            let p2 = curve(u + 0.01);
            let t = p2 - p1;
            let b = t.cross(p2 + p1);
            let n = b.cross(t).normalize();
            let b = b.normalize();
            for j in 0..=radial_segments {
                let v = j as f32 / radial_segments as f32 * TAU;
                let cx = -tube * v.cos();
                let cy = tube * v.sin();
                let vertex = p1 + n * cx + b * cy;
                g.push(
                    vertex,
                    (vertex - p1).normalize_or_zero(),
                    [i as f32 / tubular_segments as f32, j as f32 / radial_segments as f32],
                );
            }
        }

        let row = radial_segments + 1;
        for j in 1..=tubular_segments {
            for i in 1..=radial_segments {
                let a = row * (j - 1) + (i - 1);
                let b = row * j + (i - 1);
                let c = row * j + i;
                let d = row * (j - 1) + i;
                g.indices.extend_from_slice(&[a, b, d, b, c, d]);
            }
        }
        g
    }

    /// Regular icosahedron with shared corner vertices.
    pub fn icosahedron(radius: f32) -> Self {
        let t = (1.0 + 5f32.sqrt()) / 2.0;
        let corners = [
            [-1.0, t, 0.0], [1.0, t, 0.0], [-1.0, -t, 0.0], [1.0, -t, 0.0],
            [0.0, -1.0, t], [0.0, 1.0, t], [0.0, -1.0, -t], [0.0, 1.0, -t],
            [t, 0.0, -1.0], [t, 0.0, 1.0], [-t, 0.0, -1.0], [-t, 0.0, 1.0],
        ];
        let mut g = Self::empty(Primitive::Icosahedron);
        for c in corners {
            let n = Vec3::from_array(c).normalize();
            let uv = [n.z.atan2(n.x) / TAU + 0.5, n.y.asin() / PI + 0.5];
            g.push(n * radius, n, uv);
        }
        g.indices = vec![
            0, 11, 5, 0, 5, 1, 0, 1, 7, 0, 7, 10, 0, 10, 11,
            1, 5, 9, 5, 11, 4, 11, 10, 2, 10, 7, 6, 7, 1, 8,
            3, 9, 4, 3, 4, 2, 3, 2, 6, 3, 6, 8, 3, 8, 9,
            4, 9, 5, 2, 4, 11, 6, 2, 10, 8, 6, 7, 9, 8, 1,
        ];
        g
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_indices_in_range(g: &Geometry) {
        let n = g.vertex_count() as u32;
        assert!(g.indices.iter().all(|&i| i < n), "{:?} has an out of range index", g.primitive);
        assert_eq!(g.normals.len(), g.positions.len());
        assert_eq!(g.uvs.len(), g.positions.len());
    }

    #[test]
    fn cuboid_has_four_vertices_per_face() {
        let g = Geometry::cuboid(4.0, 3.0, 0.1);
        assert_eq!(g.vertex_count(), 24);
        assert_eq!(g.triangle_count(), 12);
        assert_indices_in_range(&g);
        let max_x = g.positions.iter().map(|p| p[0]).fold(f32::MIN, f32::max);
        let max_y = g.positions.iter().map(|p| p[1]).fold(f32::MIN, f32::max);
        let max_z = g.positions.iter().map(|p| p[2]).fold(f32::MIN, f32::max);
        assert_eq!((max_x, max_y, max_z), (2.0, 1.5, 0.05));
    }

    #[test]
    fn cuboid_normals_point_outwards() {
        let g = Geometry::cuboid(1.0, 1.0, 1.0);
        for (p, n) in g.positions.iter().zip(&g.normals) {
            let dot = Vec3::from_array(*p).dot(Vec3::from_array(*n));
            assert!(dot > 0.0);
        }
    }

    #[test]
    fn plane_faces_positive_z() {
        let g = Geometry::plane(3.8, 2.8);
        assert_eq!(g.vertex_count(), 4);
        assert_eq!(g.triangle_count(), 2);
        assert!(g.normals.iter().all(|n| *n == [0.0, 0.0, 1.0]));
        // counter-clockwise seen from +Z
        let [a, b, c] = [0, 1, 2].map(|k| Vec3::from_array(g.positions[g.indices[k] as usize]));
        assert!((b - a).cross(c - a).z > 0.0);
    }

    #[test]
    fn sphere_collapses_poles() {
        let g = Geometry::sphere(1.0, 32, 32);
        assert_eq!(g.vertex_count(), 33 * 33);
        assert_eq!(g.triangle_count(), 32 * (2 * 32 - 2));
        assert_indices_in_range(&g);
        for p in &g.positions {
            assert!((Vec3::from_array(*p).length() - 1.0).abs() < 1e-5);
        }
    }

    #[test]
    fn cylinder_has_two_caps() {
        let g = Geometry::cylinder(0.5, 0.5, 1.0, 32);
        assert_eq!(g.vertex_count(), 66 + 2 * (32 + 33));
        assert_eq!(g.triangle_count(), 64 + 2 * 32);
        assert_indices_in_range(&g);
    }

    #[test]
    fn cone_skips_degenerate_apex_triangles() {
        let g = Geometry::cone(0.8, 1.5, 32);
        assert_eq!(g.primitive, Primitive::Cone);
        assert_eq!(g.vertex_count(), 66 + 32 + 33);
        assert_eq!(g.triangle_count(), 32 + 32);
        assert_indices_in_range(&g);
    }

    #[test]
    fn torus_knot_grid() {
        let g = Geometry::torus_knot(1.0, 0.4, 100, 16, 2, 3);
        assert_eq!(g.vertex_count(), 101 * 17);
        assert_eq!(g.indices.len(), 100 * 16 * 6);
        assert_indices_in_range(&g);
    }

    #[test]
    fn icosahedron_wireframe_has_thirty_edges() {
        let g = Geometry::icosahedron(1.0);
        assert_eq!(g.vertex_count(), 12);
        assert_eq!(g.triangle_count(), 20);
        assert_eq!(g.edges().len(), 30 * 2);
    }
}
