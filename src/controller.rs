use crate::patterns::PatternKind;
use crate::renderer::Renderer;
use crate::scene::Scene;

/// Discrete input commands, one per physical key press.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    /// 1-based pattern slot, matching the digit row.
    SelectPattern(usize),
    Increment,
    Decrement,
    Quit,
}

/// Applies commands to the scene and pushes every regenerated stream to the
/// renderer. Mutation, regeneration, and upload happen synchronously in that
/// order; nothing is deferred.
pub struct Controller {
    scene: Scene,
}

impl Controller {
    pub fn new() -> Self {
        Self {
            scene: Scene::new(),
        }
    }

    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    pub fn handle(&mut self, command: Command, renderer: &mut impl Renderer) {
        match command {
            Command::SelectPattern(index) => {
                let Some(pattern) = PatternKind::from_index(index) else {
                    return;
                };
                self.scene.activate(pattern);
            }
            Command::Increment => self.scene.increment(),
            Command::Decrement => self.scene.decrement(),
            // Shutdown belongs to the event loop, not the scene.
            Command::Quit => return,
        }
        let active = self.scene.active();
        log::debug!(
            "{}: detail {}, {} vertices",
            active.name(),
            self.scene.detail(active),
            self.scene.current_stream().len()
        );
        self.upload(renderer);
    }

    /// Pushes the current stream without mutating. Used for the first frame
    /// and after every `handle`.
    pub fn upload(&self, renderer: &mut impl Renderer) {
        let stream = self.scene.current_stream();
        renderer.set_topology(stream.topology);
        renderer.upload(&stream.positions, &stream.colors);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Topology;
    use glam::{Vec2, Vec3};

    #[derive(Default)]
    struct RecordingRenderer {
        uploads: usize,
        last_len: Option<usize>,
        topology: Option<Topology>,
    }

    impl Renderer for RecordingRenderer {
        fn set_topology(&mut self, topology: Topology) {
            self.topology = Some(topology);
        }

        fn upload(&mut self, positions: &[Vec2], colors: &[Vec3]) {
            assert_eq!(positions.len(), colors.len());
            assert!(self.topology.is_some(), "upload before set_topology");
            self.uploads += 1;
            self.last_len = Some(positions.len());
        }
    }

    #[test]
    fn test_select_pattern_uploads_the_new_stream() {
        let mut controller = Controller::new();
        let mut renderer = RecordingRenderer::default();

        controller.handle(Command::SelectPattern(3), &mut renderer);
        assert_eq!(controller.scene().active(), PatternKind::Sierpinski);
        assert_eq!(renderer.uploads, 1);
        assert_eq!(renderer.topology, Some(Topology::Triangles));
        assert_eq!(renderer.last_len, Some(3));
    }

    #[test]
    fn test_out_of_range_slot_is_ignored() {
        let mut controller = Controller::new();
        let mut renderer = RecordingRenderer::default();

        controller.handle(Command::SelectPattern(9), &mut renderer);
        assert_eq!(controller.scene().active(), PatternKind::SquaresDiamonds);
        assert_eq!(renderer.uploads, 0);
    }

    #[test]
    fn test_quit_reaches_neither_scene_nor_renderer() {
        let mut controller = Controller::new();
        let mut renderer = RecordingRenderer::default();

        controller.handle(Command::Quit, &mut renderer);
        assert_eq!(renderer.uploads, 0);
        assert_eq!(controller.scene().active(), PatternKind::SquaresDiamonds);
    }

    #[test]
    fn test_increment_regenerates_and_uploads() {
        let mut controller = Controller::new();
        let mut renderer = RecordingRenderer::default();

        controller.handle(Command::Increment, &mut renderer);
        assert_eq!(controller.scene().detail(PatternKind::SquaresDiamonds), 2);
        assert_eq!(renderer.last_len, Some(24));
    }

    #[test]
    fn test_saturated_decrement_still_uploads() {
        let mut controller = Controller::new();
        let mut renderer = RecordingRenderer::default();

        controller.handle(Command::Decrement, &mut renderer);
        controller.handle(Command::Decrement, &mut renderer);
        assert_eq!(controller.scene().detail(PatternKind::SquaresDiamonds), 1);
        assert_eq!(renderer.uploads, 2);
        assert_eq!(renderer.last_len, Some(12));
    }

    #[test]
    fn test_detail_survives_a_pattern_round_trip() {
        let mut controller = Controller::new();
        let mut renderer = RecordingRenderer::default();

        controller.handle(Command::SelectPattern(2), &mut renderer);
        controller.handle(Command::Increment, &mut renderer);
        controller.handle(Command::Increment, &mut renderer);
        controller.handle(Command::SelectPattern(1), &mut renderer);
        controller.handle(Command::SelectPattern(2), &mut renderer);
        assert_eq!(controller.scene().detail(PatternKind::Spiral), 4);
    }
}
