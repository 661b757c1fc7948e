use glam::{Vec2, Vec3};

/// How a flat vertex sequence is assembled into drawable primitives.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Topology {
    Points,
    LineStrip,
    Triangles,
}

/// One frame's drawable geometry: paired position/color sequences plus the
/// topology they should be drawn with. Positions and colors always have the
/// same length; vertex order carries the line-strip adjacency and triangle
/// grouping.
#[derive(Clone, Debug)]
pub struct VertexStream {
    pub positions: Vec<Vec2>,
    pub colors: Vec<Vec3>,
    pub topology: Topology,
}

impl VertexStream {
    pub fn with_capacity(topology: Topology, capacity: usize) -> Self {
        Self {
            positions: Vec::with_capacity(capacity),
            colors: Vec::with_capacity(capacity),
            topology,
        }
    }

    pub fn push(&mut self, position: Vec2, color: Vec3) {
        self.positions.push(position);
        self.colors.push(color);
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }
}
