//! Barnsley fern: a stochastic iterated function system. Each iteration
//! plots the current state and then jumps through one of four affine maps
//! chosen by a weighted coin flip.

use glam::{Vec2, Vec3};
use rand::Rng;

use crate::geometry::{Topology, VertexStream};

const POINTS_PER_UNIT: usize = 50_000;

pub fn generate(density: u32) -> VertexStream {
    generate_with_rng(density, &mut rand::thread_rng())
}

/// Seedable entry point, so a fixed seed reproduces the exact point cloud.
pub fn generate_with_rng<R: Rng>(density: u32, rng: &mut R) -> VertexStream {
    let count = density as usize * POINTS_PER_UNIT;
    let mut stream = VertexStream::with_capacity(Topology::Points, count);

    let mut x = 0.0f32;
    let mut y = 0.0f32;
    for _ in 0..count {
        stream.push(
            Vec2::new(x * 0.17 - 0.2, y * 0.17 - 0.8),
            Vec3::new(0.8 * (y * 0.17), 1.0, 0.0),
        );

        let p: u32 = rng.gen_range(0..100);
        let (next_x, next_y) = if p <= 1 {
            // Stem.
            (0.0, 0.16 * y)
        } else if p <= 8 {
            // Left leaflet.
            (0.2 * x - 0.26 * y, 0.23 * x + 0.22 * y + 1.6)
        } else if p <= 15 {
            // Right leaflet.
            (-0.15 * x + 0.28 * y, 0.26 * x + 0.24 * y + 0.44)
        } else {
            // Successively smaller leaflets.
            (0.85 * x + 0.04 * y, -0.04 * x + 0.85 * y + 1.6)
        };
        x = next_x;
        y = next_y;
    }
    stream
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_point_count_scales_with_density() {
        for density in [1, 2] {
            let stream = generate(density);
            assert_eq!(stream.positions.len(), density as usize * 50_000);
            assert_eq!(stream.positions.len(), stream.colors.len());
        }
    }

    #[test]
    fn test_first_point_is_the_transformed_origin() {
        let stream = generate_with_rng(1, &mut StdRng::seed_from_u64(0));
        assert!((stream.positions[0] - Vec2::new(-0.2, -0.8)).length() < 1e-6);
        assert!((stream.colors[0] - Vec3::new(0.0, 1.0, 0.0)).length() < 1e-6);
    }

    #[test]
    fn test_identical_seeds_reproduce_the_cloud() {
        let a = generate_with_rng(1, &mut StdRng::seed_from_u64(7));
        let b = generate_with_rng(1, &mut StdRng::seed_from_u64(7));
        assert_eq!(a.positions, b.positions);
        assert_eq!(a.colors, b.colors);
    }

    #[test]
    fn test_colors_stay_in_the_green_family() {
        let stream = generate_with_rng(1, &mut StdRng::seed_from_u64(3));
        for color in &stream.colors {
            assert_eq!(color.y, 1.0);
            assert_eq!(color.z, 0.0);
        }
    }

    #[test]
    fn test_topology_is_points() {
        assert_eq!(generate_with_rng(1, &mut StdRng::seed_from_u64(0)).topology, Topology::Points);
    }
}
