//! Star outline as a fan of triangles around the origin.

use super::vertex::Vertex;
use std::f32::consts::{FRAC_PI_2, PI};

/// 5 outer tips plus 5 inner notches.
pub const POINTS: usize = 10;
pub const OUTER_RADIUS: f32 = 0.8;
pub const INNER_RADIUS: f32 = 0.3;
pub const VERTEX_COUNT: usize = POINTS * 3;

const ANGLE_STEP: f32 = 2.0 * PI / POINTS as f32;

/// Radius of point `i`: even indices are tips, odd ones notches.
pub fn radius(i: usize) -> f32 {
    if i % 2 == 0 {
        OUTER_RADIUS
    } else {
        INNER_RADIUS
    }
}

/// Angle of point `i`. Point 0 lies on the negative y axis.
pub fn angle(i: usize) -> f32 {
    i as f32 * ANGLE_STEP - FRAC_PI_2
}

fn point(i: usize) -> Vertex {
    let (r, a) = (radius(i), angle(i));
    Vertex::new(r * a.cos(), r * a.sin())
}

/// One triangle per point: origin, point `i`, point `i + 1`.
pub fn vertices() -> [Vertex; VERTEX_COUNT] {
    let mut vertices = [Vertex::new(0.0, 0.0); VERTEX_COUNT];
    for (i, triangle) in vertices.chunks_exact_mut(3).enumerate() {
        triangle[1] = point(i);
        triangle[2] = point(i + 1);
    }
    vertices
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn length(v: &Vertex) -> f32 {
        v.a_Pos[0].hypot(v.a_Pos[1])
    }

    #[test]
    fn emits_thirty_vertices() {
        let vertices = vertices();
        assert_eq!(vertices.len(), 30);
        assert_eq!(vertices.len() * vertices[0].a_Pos.len(), 60);
    }

    #[test]
    fn every_triangle_starts_at_the_origin() {
        for triangle in vertices().chunks_exact(3) {
            assert_eq!(triangle[0], Vertex::new(0.0, 0.0));
        }
    }

    #[test]
    fn radii_alternate_by_parity() {
        let vertices = vertices();
        for (i, triangle) in vertices.chunks_exact(3).enumerate() {
            let first = if i % 2 == 0 { 0.8 } else { 0.3 };
            let second = if (i + 1) % 2 == 0 { 0.8 } else { 0.3 };
            assert_relative_eq!(length(&triangle[1]), first, epsilon = 1e-6);
            assert_relative_eq!(length(&triangle[2]), second, epsilon = 1e-6);
        }
    }

    #[test]
    fn points_sit_at_their_angles() {
        let vertices = vertices();
        for (i, triangle) in vertices.chunks_exact(3).enumerate() {
            for (k, v) in [(i, triangle[1]), (i + 1, triangle[2])].iter() {
                let r = radius(*k);
                assert_relative_eq!(v.a_Pos[0], r * angle(*k).cos(), epsilon = 1e-6);
                assert_relative_eq!(v.a_Pos[1], r * angle(*k).sin(), epsilon = 1e-6);
            }
        }
    }

    #[test]
    fn first_tip_lies_on_the_vertical_axis() {
        let tip = vertices()[1];
        assert_relative_eq!(tip.a_Pos[0], 0.0, epsilon = 1e-6);
        assert_relative_eq!(tip.a_Pos[1], -OUTER_RADIUS, epsilon = 1e-6);
    }

    #[test]
    fn tips_have_five_fold_symmetry() {
        for i in (0..POINTS).step_by(2) {
            assert_relative_eq!(angle(i + 2) - angle(i), 2.0 * PI / 5.0, epsilon = 1e-5);
        }
    }

    #[test]
    fn fan_closes_on_the_first_point() {
        let vertices = vertices();
        let last = vertices[VERTEX_COUNT - 1];
        let first = vertices[1];
        assert_relative_eq!(last.a_Pos[0], first.a_Pos[0], epsilon = 1e-5);
        assert_relative_eq!(last.a_Pos[1], first.a_Pos[1], epsilon = 1e-5);
    }

    #[test]
    fn regeneration_is_bit_identical() {
        let a = vertices();
        let b = vertices();
        for (x, y) in a.iter().zip(b.iter()) {
            assert_eq!(x.a_Pos[0].to_bits(), y.a_Pos[0].to_bits());
            assert_eq!(x.a_Pos[1].to_bits(), y.a_Pos[1].to_bits());
        }
    }
}
