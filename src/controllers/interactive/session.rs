use tracing::{error, warn};

use crate::controllers::interactive::data::frame_params::FrameParams;
use crate::controllers::interactive::data::viewer_config::ViewerConfig;
use crate::controllers::interactive::ports::GraphicsPort;
use crate::controllers::interactive::snapshot::{DrainReport, EncodeRegistry, SnapshotPipeline};
use crate::core::evolution::{Evolution, RenderState};
use crate::input::input_state::InputState;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopState {
    Running,
    ShuttingDown,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TickReport {
    pub snapshot_submitted: bool,
    pub presented: bool,
}

/// The per-tick state machine of the viewer.
///
/// A tick is driven by the event loop in this order: [`Session::reap_completed`],
/// input delivery into [`InputState`], then [`Session::tick`]. On exit the
/// owner releases the window and graphics, then calls [`Session::drain`].
pub struct Session {
    state: LoopState,
    evolution: Evolution,
    render_state: RenderState,
    pipeline: SnapshotPipeline,
    registry: EncodeRegistry,
}

impl Session {
    pub fn new(config: &ViewerConfig, pipeline: SnapshotPipeline) -> Self {
        Self {
            state: LoopState::Running,
            evolution: Evolution::new(config.mode, config.orbit, config.pointer_scale),
            render_state: RenderState::new(config.initial_parameter, config.time_step),
            pipeline,
            registry: EncodeRegistry::new(),
        }
    }

    #[must_use]
    pub fn state(&self) -> LoopState {
        self.state
    }

    #[must_use]
    pub fn render_state(&self) -> &RenderState {
        &self.render_state
    }

    #[must_use]
    pub fn pending_snapshots(&self) -> usize {
        self.registry.len()
    }

    /// Drops finished encodes without waiting on unfinished ones.
    pub fn reap_completed(&mut self) -> usize {
        self.registry.reap_completed()
    }

    /// Evolves the parameter, advances time, takes a requested snapshot and
    /// presents the frame. Does nothing once shutdown has begun.
    pub fn tick<G: GraphicsPort>(&mut self, input: &mut InputState, graphics: &mut G) -> TickReport {
        let mut report = TickReport::default();

        if self.state != LoopState::Running {
            return report;
        }

        let parameter = self.evolution.evolve(
            self.render_state.time(),
            self.render_state.parameter(),
            input.pointer(),
        );
        self.render_state.set_parameter(parameter);
        self.render_state.advance();

        let frame = FrameParams {
            aspect_ratio: input.aspect_ratio(),
            parameter,
            time: self.render_state.time(),
        };

        if input.take_capture_request() {
            match self.pipeline.request_snapshot(graphics, &frame) {
                Ok(pending) => {
                    self.registry.insert(pending);
                    report.snapshot_submitted = true;
                }
                Err(e) => error!("Snapshot capture failed: {e}"),
            }
        }

        match graphics.present(&frame) {
            Ok(()) => report.presented = true,
            Err(e) => warn!("{e}"),
        }

        report
    }

    pub fn begin_shutdown(&mut self) {
        self.state = LoopState::ShuttingDown;
    }

    /// Blocks until every snapshot requested so far is written or has failed.
    pub fn drain(mut self) -> DrainReport {
        self.begin_shutdown();
        self.registry.drain_all()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::controllers::interactive::ports::SnapshotSinkPort;
    use crate::controllers::interactive::snapshot::EncodeWorker;
    use crate::controllers::interactive::test_support::{
        FakeGraphics, GatedSink, GraphicsCall, RecordingSink,
    };
    use crate::core::data::{complex::Complex, extent::Extent};
    use crate::core::evolution::EvolutionMode;
    use std::sync::Arc;
    use std::thread;
    use std::time::{Duration, Instant};

    fn session_with(mode: EvolutionMode, sink: Arc<dyn SnapshotSinkPort>) -> Session {
        let config = ViewerConfig {
            mode,
            ..ViewerConfig::default()
        };
        let pipeline = SnapshotPipeline::new(sink, EncodeWorker::new(2).unwrap(), "snap.png");

        Session::new(&config, pipeline)
    }

    fn session(mode: EvolutionMode) -> Session {
        session_with(mode, Arc::new(RecordingSink::default()))
    }

    fn input() -> InputState {
        InputState::new(Extent::new(800, 600).unwrap())
    }

    fn run_ticks(
        session: &mut Session,
        input: &mut InputState,
        graphics: &mut FakeGraphics,
        ticks: usize,
    ) -> Vec<Complex> {
        (0..ticks)
            .map(|_| {
                session.reap_completed();
                session.tick(input, graphics);
                session.render_state().parameter()
            })
            .collect()
    }

    #[test]
    fn time_advances_by_fixed_step_per_tick() {
        let mut session = session(EvolutionMode::Auto);
        let mut input = input();
        let mut graphics = FakeGraphics::new(8, 6);
        let mut expected = 0.0f32;

        for _ in 0..120 {
            session.tick(&mut input, &mut graphics);
            expected += ViewerConfig::default().time_step;
        }

        assert_eq!(session.render_state().time(), expected);
    }

    #[test]
    fn auto_mode_runs_are_deterministic() {
        let mut graphics = FakeGraphics::new(8, 6);

        let first = run_ticks(&mut session(EvolutionMode::Auto), &mut input(), &mut graphics, 50);
        let second = run_ticks(&mut session(EvolutionMode::Auto), &mut input(), &mut graphics, 50);

        assert_eq!(first, second);
    }

    #[test]
    fn interactive_mode_follows_held_pointer_and_holds_on_release() {
        let mut session = session(EvolutionMode::Interactive);
        let mut input = input();
        let mut graphics = FakeGraphics::new(8, 6);

        let initial = run_ticks(&mut session, &mut input, &mut graphics, 3);
        assert!(initial.iter().all(|c| *c == ViewerConfig::default().initial_parameter));

        input.on_pointer_moved(600.0, 150.0);
        input.on_pointer_button(true);
        run_ticks(&mut session, &mut input, &mut graphics, 1);
        assert_eq!(session.render_state().parameter(), Complex::new(1.0, 1.0));

        input.on_pointer_button(false);
        input.on_pointer_moved(0.0, 0.0);
        let released = run_ticks(&mut session, &mut input, &mut graphics, 5);
        assert!(released.iter().all(|c| *c == Complex::new(1.0, 1.0)));
    }

    #[test]
    fn presented_frame_uses_window_aspect_and_advanced_time() {
        let mut session = session(EvolutionMode::Auto);
        let mut input = input();
        let mut graphics = FakeGraphics::new(8, 6);

        let report = session.tick(&mut input, &mut graphics);

        assert!(report.presented);
        let presented = graphics.presented_frames();
        assert_eq!(presented.len(), 1);
        assert_eq!(presented[0].aspect_ratio, input.aspect_ratio());
        assert_eq!(presented[0].time, session.render_state().time());
        assert_eq!(presented[0].parameter, session.render_state().parameter());
    }

    #[test]
    fn capture_request_is_consumed_by_exactly_one_tick() {
        let mut session = session(EvolutionMode::Auto);
        let mut input = input();
        let mut graphics = FakeGraphics::new(8, 6);
        input.request_capture();

        let first = session.tick(&mut input, &mut graphics);
        let second = session.tick(&mut input, &mut graphics);

        assert!(first.snapshot_submitted);
        assert!(!second.snapshot_submitted);
        assert_eq!(graphics.captured_frames().len(), 1);
        session.drain();
    }

    #[test]
    fn snapshot_is_captured_before_present_from_the_same_tick_values() {
        let mut session = session(EvolutionMode::Auto);
        let mut input = input();
        let mut graphics = FakeGraphics::new(16, 8);
        run_ticks(&mut session, &mut input, &mut graphics, 10);
        graphics.calls.clear();

        input.request_capture();
        session.tick(&mut input, &mut graphics);

        let [GraphicsCall::Capture(captured), GraphicsCall::Present(presented)] = graphics.calls.as_slice() else {
            panic!("expected capture then present, got {:?}", graphics.calls);
        };
        assert_eq!(captured.parameter, presented.parameter);
        assert_eq!(captured.time, presented.time);
        assert_eq!(captured.aspect_ratio, 2.0);
        session.drain();
    }

    #[test]
    fn capture_failure_does_not_stop_the_loop() {
        let mut session = session(EvolutionMode::Auto);
        let mut input = input();
        let mut graphics = FakeGraphics::new(8, 6);
        graphics.fail_captures = true;
        input.request_capture();

        let report = session.tick(&mut input, &mut graphics);

        assert!(!report.snapshot_submitted);
        assert!(report.presented);
        assert_eq!(session.pending_snapshots(), 0);
        assert_eq!(session.state(), LoopState::Running);
    }

    #[test]
    fn present_failure_is_reported_without_stopping() {
        let mut session = session(EvolutionMode::Auto);
        let mut input = input();
        let mut graphics = FakeGraphics::new(8, 6);
        graphics.fail_presents = true;

        let report = session.tick(&mut input, &mut graphics);

        assert!(!report.presented);
        assert_eq!(session.state(), LoopState::Running);
    }

    #[test]
    fn two_snapshots_on_consecutive_ticks_do_not_interfere() {
        let sink = Arc::new(RecordingSink::default());
        let mut session = session_with(EvolutionMode::Auto, sink.clone());
        let mut input = input();
        let mut graphics = FakeGraphics::new(32, 16);

        input.request_capture();
        session.tick(&mut input, &mut graphics);
        input.request_capture();
        session.tick(&mut input, &mut graphics);

        let report = session.drain();
        assert_eq!(report.succeeded, 2);

        let mut written = sink.written();
        written.sort_by_key(|(_, frame)| frame.buffer()[0]);
        assert_eq!(written.len(), 2);
        for (index, (_, frame)) in written.iter().enumerate() {
            assert_eq!(frame.extent(), Extent::new(32, 16).unwrap());
            assert_eq!(frame.buffer_size(), 32 * 16 * 4);
            assert!(frame.buffer().iter().all(|&b| b == index as u8 + 1));
        }
    }

    #[test]
    fn drain_waits_for_an_encode_still_running_at_shutdown() {
        let sink = Arc::new(GatedSink::default());
        let mut session = session_with(EvolutionMode::Auto, sink.clone());
        let mut input = input();
        let mut graphics = FakeGraphics::new(8, 6);

        input.request_capture();
        session.tick(&mut input, &mut graphics);
        session.reap_completed();
        assert_eq!(session.pending_snapshots(), 1);

        session.begin_shutdown();
        let opener_sink = Arc::clone(&sink);
        let opener = thread::spawn(move || {
            thread::sleep(Duration::from_millis(100));
            opener_sink.open();
        });

        let start = Instant::now();
        let report = session.drain();

        assert!(start.elapsed() >= Duration::from_millis(50));
        assert_eq!(report.succeeded, 1);
        assert_eq!(sink.inner.written().len(), 1);
        opener.join().unwrap();
    }

    #[test]
    fn tick_after_shutdown_does_nothing() {
        let mut session = session(EvolutionMode::Auto);
        let mut input = input();
        let mut graphics = FakeGraphics::new(8, 6);
        session.begin_shutdown();
        input.request_capture();

        let report = session.tick(&mut input, &mut graphics);

        assert_eq!(report, TickReport::default());
        assert!(graphics.calls.is_empty());
        assert_eq!(session.render_state().time(), 0.0);
    }
}
