use std::f32::consts::PI;

use glam::{Vec2, Vec3};

use crate::geometry::{Topology, VertexStream};

const RED: Vec3 = Vec3::new(1.0, 0.0, 0.0);
const ORANGE: Vec3 = Vec3::new(1.0, 0.5, 0.0);
const BLUE: Vec3 = Vec3::new(0.0, 0.3, 0.7);
const GREEN: Vec3 = Vec3::new(0.0, 1.0, 0.0);
const WHITE: Vec3 = Vec3::ONE;

/// Apex y below this line flips the second vertex color.
const APEX_THRESHOLD: f32 = -0.06;

/// Sierpinski triangle: recursive corner subdivision that never emits the
/// central triangle. Leaf triangles are colored by where they sit (left
/// corner sign, apex height), which shades the three corner regions
/// differently.
pub fn generate(iterations: u32) -> VertexStream {
    let mut stream =
        VertexStream::with_capacity(Topology::Triangles, 3 * 4usize.pow(iterations));
    let left = Vec2::new(-0.9, -0.9);
    let right = Vec2::new(0.9, -0.9);
    let top = Vec2::new(0.0, 1.8 * (PI / 3.0).sin() / 2.0);
    subdivide(&mut stream, left, right, top, iterations);
    stream
}

fn subdivide(stream: &mut VertexStream, left: Vec2, right: Vec2, top: Vec2, iterations: u32) {
    if iterations == 0 {
        stream.push(left, if left.x < 0.0 { RED } else { BLUE });
        stream.push(right, if top.y < APEX_THRESHOLD { ORANGE } else { GREEN });
        stream.push(top, WHITE);
        return;
    }

    let left_mid = left.midpoint(top);
    let right_mid = right.midpoint(top);
    let bottom_mid = left.midpoint(right);

    subdivide(stream, left, bottom_mid, left_mid, iterations - 1);
    subdivide(stream, bottom_mid, right, right_mid, iterations - 1);
    subdivide(stream, left_mid, right_mid, top, iterations - 1);
}
