use std::f32::consts::PI;

use glam::{Vec2, Vec3};

use crate::geometry::{Topology, VertexStream};

const START_COLOR: Vec3 = Vec3::new(1.0, 0.0, 0.0);
const END_COLOR: Vec3 = Vec3::new(0.0, 1.0, 1.0);

/// Archimedean-style spiral: fixed angular step computed once from the
/// revolution count, radius growing with the accumulated angle. The step
/// shrinks as revolutions grow, so the vertex count rises quadratically.
pub fn generate(revolutions: u32) -> VertexStream {
    let max_rotation = 2.0 * revolutions as f32 * PI;
    let ustep = 1.0 / max_rotation;

    let mut stream = VertexStream::with_capacity(
        Topology::LineStrip,
        (max_rotation * max_rotation).ceil() as usize,
    );
    let mut u = 0.0f32;
    while u < max_rotation {
        u += ustep;
        stream.push(
            Vec2::new(ustep * u * u.cos(), ustep * u * u.sin()),
            START_COLOR.lerp(END_COLOR, u / max_rotation),
        );
    }
    stream
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vertex_count_grows_with_revolutions() {
        let mut previous = 0;
        for revolutions in 1..=6 {
            let stream = generate(revolutions);
            assert!(stream.len() > previous);
            assert_eq!(stream.positions.len(), stream.colors.len());
            previous = stream.len();
        }
    }

    #[test]
    fn test_curve_has_no_consecutive_duplicates() {
        let stream = generate(3);
        for pair in stream.positions.windows(2) {
            assert!(pair[0] != pair[1]);
        }
    }

    #[test]
    fn test_colors_interpolate_start_to_end() {
        let stream = generate(2);
        let first = stream.colors[0];
        let last = *stream.colors.last().unwrap();
        assert!((first - START_COLOR).length() < 0.05);
        assert!((last - END_COLOR).length() < 0.05);
        // Red fades while green rises along the curve.
        let mid = stream.colors[stream.len() / 2];
        assert!(mid.x < first.x && mid.x > last.x);
        assert!(mid.y > first.y && mid.y < last.y);
    }

    #[test]
    fn test_topology_is_line_strip() {
        assert_eq!(generate(1).topology, Topology::LineStrip);
    }
}
