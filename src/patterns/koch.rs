use std::f32::consts::PI;

use glam::{Vec2, Vec3};

use crate::geometry::{Topology, VertexStream};

const WHITE: Vec3 = Vec3::ONE;

/// Koch snowflake built from filled triangles: the seed triangle plus one
/// equilateral bump per edge, each bump spawning four sub-edges.
pub fn generate(depth: u32) -> VertexStream {
    // Bumps per seed edge follow 1 + 4 + 4^2 + ...
    let bumps_per_edge = (4usize.pow(depth) - 1) / 3;
    let mut stream =
        VertexStream::with_capacity(Topology::Triangles, 3 + 9 * bumps_per_edge);

    let left = Vec2::new(-0.4, -0.4);
    let right = Vec2::new(0.4, -0.4);
    let top = Vec2::new(0.0, 0.8 * (PI / 3.0).sin() / 2.0);

    stream.push(left, WHITE);
    stream.push(right, WHITE);
    stream.push(top, WHITE);

    subdivide_edge(&mut stream, right, left, depth);
    subdivide_edge(&mut stream, left, top, depth);
    subdivide_edge(&mut stream, top, right, depth);
    stream
}

fn subdivide_edge(stream: &mut VertexStream, start: Vec2, end: Vec2, depth: u32) {
    if depth == 0 {
        return;
    }

    let third = (end - start) / 3.0;
    // Outward apex: the one-third edge vector rotated by 60 degrees.
    let apex_offset = Vec2::from_angle(PI / 3.0).rotate(third);
    let bump_left = start + third;
    let bump_top = bump_left + apex_offset;
    let bump_right = end - third;

    stream.push(bump_left, WHITE);
    stream.push(bump_right, WHITE);
    stream.push(bump_top, WHITE);

    subdivide_edge(stream, start, bump_left, depth - 1);
    subdivide_edge(stream, bump_left, bump_top, depth - 1);
    subdivide_edge(stream, bump_top, bump_right, depth - 1);
    subdivide_edge(stream, bump_right, end, depth - 1);
}
