use crate::geometry::VertexStream;
use crate::patterns::PatternKind;

/// The active pattern, one detail parameter per pattern, and the current
/// vertex stream. Detail parameters persist across pattern switches, so
/// coming back to a pattern restores the detail it was left at.
pub struct Scene {
    active: PatternKind,
    details: [u32; PatternKind::COUNT],
    stream: VertexStream,
}

impl Scene {
    pub fn new() -> Self {
        let details = PatternKind::ALL.map(|pattern| pattern.initial_detail());
        let active = PatternKind::SquaresDiamonds;
        let stream = active.generate(details[active as usize]);
        Self {
            active,
            details,
            stream,
        }
    }

    pub fn active(&self) -> PatternKind {
        self.active
    }

    pub fn detail(&self, pattern: PatternKind) -> u32 {
        self.details[pattern as usize]
    }

    pub fn current_stream(&self) -> &VertexStream {
        &self.stream
    }

    /// Switches the active pattern and regenerates from its stored detail.
    pub fn activate(&mut self, pattern: PatternKind) {
        self.active = pattern;
        self.regenerate();
    }

    /// Raises the active pattern's detail by one, saturating at its upper
    /// bound. Regenerates even when the detail did not move.
    pub fn increment(&mut self) {
        let (min, max) = self.active.detail_range();
        let detail = &mut self.details[self.active as usize];
        *detail = detail.saturating_add(1).clamp(min, max);
        self.regenerate();
    }

    /// Mirror of `increment`, saturating at the lower bound.
    pub fn decrement(&mut self) {
        let (min, max) = self.active.detail_range();
        let detail = &mut self.details[self.active as usize];
        *detail = detail.saturating_sub(1).clamp(min, max);
        self.regenerate();
    }

    fn regenerate(&mut self) {
        self.stream = self.active.generate(self.details[self.active as usize]);
    }
}
