use glam::{Vec2, Vec3};

use crate::geometry::{Topology, VertexStream};

const SQUARE_COLOR: Vec3 = Vec3::new(0.0, 1.0, 0.0);
const DIAMOND_COLOR: Vec3 = Vec3::new(1.0, 0.0, 1.0);

/// Side half-length of the outermost square.
const SEED_LENGTH: f32 = 0.9;
const BRIGHTNESS_DECAY: f32 = 0.7;

/// Nested squares with inscribed diamonds, one square/diamond pair per
/// level. Drawn as a single line strip, so each loop ends with a seed
/// vertex that walks the pen to where the next loop starts.
pub fn generate(levels: u32) -> VertexStream {
    let mut stream = VertexStream::with_capacity(Topology::LineStrip, 12 * levels as usize);
    emit_level(&mut stream, levels, SEED_LENGTH, 1.0);
    stream
}

fn emit_level(stream: &mut VertexStream, levels: u32, length: f32, brightness: f32) {
    let next_length = length / 2.0;

    // Outer square as a closed loop, then the seed vertex onto the diamond.
    let square = [
        Vec2::new(-length, -length),
        Vec2::new(-length, length),
        Vec2::new(length, length),
        Vec2::new(length, -length),
        Vec2::new(-length, -length),
        Vec2::new(0.0, -length),
    ];
    for position in square {
        stream.push(position, SQUARE_COLOR * brightness);
    }

    // Diamond through the square's edge midpoints, then the seed vertex
    // onto the next level's bottom-left corner.
    let diamond = [
        Vec2::new(0.0, -length),
        Vec2::new(-length, 0.0),
        Vec2::new(0.0, length),
        Vec2::new(length, 0.0),
        Vec2::new(0.0, -length),
        Vec2::new(-next_length, -next_length),
    ];
    for position in diamond {
        stream.push(position, DIAMOND_COLOR * brightness);
    }

    if levels > 1 {
        emit_level(stream, levels - 1, next_length, BRIGHTNESS_DECAY * brightness);
    }
}
