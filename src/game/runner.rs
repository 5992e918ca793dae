// Caller-driven run loop
//
// The loop only talks to the outside world through three traits, so the same
// simulation runs against SDL2 in the binary and against scripted fakes in
// tests.

use std::thread;
use std::time::{Duration, Instant};

use crate::error::GameError;

use super::{EndReason, FrameInput, RunOutcome, World};

/// Produces one tick of input.
pub trait InputSource {
    fn poll(&mut self) -> FrameInput;
}

/// Draws a finished frame. Reads the world, never mutates it.
pub trait Presenter {
    fn present(&mut self, world: &World) -> Result<(), GameError>;
}

/// Plays sound effects triggered by the simulation.
pub trait SoundSink {
    fn play_jump(&mut self) -> Result<(), GameError>;
}

/// A missing sound is silent.
impl<S: SoundSink> SoundSink for Option<S> {
    fn play_jump(&mut self) -> Result<(), GameError> {
        match self {
            Some(sink) => sink.play_jump(),
            None => Ok(()),
        }
    }
}

/// Sleeps away whatever is left of each frame's time budget.
pub struct FramePacer {
    frame_time: Option<Duration>,
    frame_start: Instant,
}

impl FramePacer {
    pub fn fixed(fps: u32) -> Self {
        FramePacer {
            frame_time: Some(Duration::from_secs(1) / fps.max(1)),
            frame_start: Instant::now(),
        }
    }

    /// Never sleeps; for headless runs.
    pub fn unpaced() -> Self {
        FramePacer {
            frame_time: None,
            frame_start: Instant::now(),
        }
    }

    pub fn frame_time(&self) -> Option<Duration> {
        self.frame_time
    }

    pub fn wait(&mut self) {
        if let Some(frame_time) = self.frame_time {
            if let Some(remaining) = frame_time.checked_sub(self.frame_start.elapsed()) {
                thread::sleep(remaining);
            }
        }
        self.frame_start = Instant::now();
    }
}

/// Runs frames until the player quits or the game ends.
///
/// Each frame: poll input, update the world, react to its events, draw, then
/// wait for the next tick. A game-over frame is not drawn. Any error from the
/// presenter or the sound sink ends the run.
pub fn run<I, P, S>(
    world: &mut World,
    input: &mut I,
    presenter: &mut P,
    sound: &mut S,
    pacer: &mut FramePacer,
) -> Result<RunOutcome, GameError>
where
    I: InputSource,
    P: Presenter,
    S: SoundSink,
{
    let mut frames: u64 = 0;

    let reason = loop {
        let frame_input = input.poll();
        if frame_input.quit {
            tracing::info!("Quit requested");
            break EndReason::Quit;
        }

        let events = world.update(&frame_input);
        if events.jumped {
            sound.play_jump()?;
        }
        if events.reached_space {
            tracing::info!(
                "Reached space at altitude {:.1} after {} frames",
                world.altitude,
                world.frame
            );
        }
        if events.game_over {
            tracing::info!("Game Over");
            break EndReason::GameOver;
        }

        presenter.present(world)?;
        frames += 1;
        pacer.wait();
    };

    Ok(RunOutcome {
        reason,
        frames,
        altitude: world.altitude,
        max_altitude: world.max_altitude,
        distance: world.distance,
        reached_space: world.reached_space,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameConfig;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::collections::VecDeque;

    /// Replays a fixed input script, then quits.
    struct ScriptedInput {
        script: VecDeque<FrameInput>,
    }

    impl ScriptedInput {
        fn new(script: Vec<FrameInput>) -> Self {
            ScriptedInput {
                script: script.into(),
            }
        }
    }

    impl InputSource for ScriptedInput {
        fn poll(&mut self) -> FrameInput {
            self.script.pop_front().unwrap_or(FrameInput {
                quit: true,
                ..FrameInput::default()
            })
        }
    }

    #[derive(Default)]
    struct CountingPresenter {
        frames: usize,
        fail_on: Option<usize>,
    }

    impl Presenter for CountingPresenter {
        fn present(&mut self, _world: &World) -> Result<(), GameError> {
            self.frames += 1;
            if self.fail_on == Some(self.frames) {
                return Err(GameError::Sdl("lost device".to_string()));
            }
            Ok(())
        }
    }

    #[derive(Default)]
    struct CountingSound {
        jumps: usize,
    }

    impl SoundSink for CountingSound {
        fn play_jump(&mut self) -> Result<(), GameError> {
            self.jumps += 1;
            Ok(())
        }
    }

    fn test_world() -> World {
        World::with_rng(&GameConfig::default(), StdRng::seed_from_u64(3))
    }

    fn idle_frames(n: usize) -> Vec<FrameInput> {
        vec![FrameInput::default(); n]
    }

    #[test]
    fn test_quit_ends_run() {
        let mut world = test_world();
        let mut input = ScriptedInput::new(idle_frames(10));
        let mut presenter = CountingPresenter::default();
        let mut sound = CountingSound::default();

        let outcome = run(
            &mut world,
            &mut input,
            &mut presenter,
            &mut sound,
            &mut FramePacer::unpaced(),
        )
        .unwrap();

        assert_eq!(outcome.reason, EndReason::Quit);
        assert_eq!(outcome.frames, 10);
        assert_eq!(presenter.frames, 10);
        assert_eq!(world.frame, 10);
    }

    #[test]
    fn test_jump_plays_sound_once() {
        let mut world = test_world();
        let mut script = idle_frames(20);
        script.extend(vec![
            FrameInput {
                jump: true,
                ..FrameInput::default()
            };
            10
        ]);
        let mut input = ScriptedInput::new(script);
        let mut sound = CountingSound::default();

        run(
            &mut world,
            &mut input,
            &mut CountingPresenter::default(),
            &mut sound,
            &mut FramePacer::unpaced(),
        )
        .unwrap();

        assert_eq!(sound.jumps, 1);
    }

    #[test]
    fn test_falling_off_ends_in_game_over() {
        let mut world = test_world();
        let walk_left = FrameInput {
            left: true,
            ..FrameInput::default()
        };
        let mut input = ScriptedInput::new(vec![walk_left; 600]);
        let mut presenter = CountingPresenter::default();

        let outcome = run(
            &mut world,
            &mut input,
            &mut presenter,
            &mut None::<CountingSound>,
            &mut FramePacer::unpaced(),
        )
        .unwrap();

        assert_eq!(outcome.reason, EndReason::GameOver);
        assert!(world.game_over);
        // The game-over frame itself is not drawn
        assert_eq!(presenter.frames as u64, outcome.frames);
        assert_eq!(outcome.frames + 1, world.frame);
    }

    #[test]
    fn test_presenter_error_stops_run() {
        let mut world = test_world();
        let mut input = ScriptedInput::new(idle_frames(10));
        let mut presenter = CountingPresenter {
            frames: 0,
            fail_on: Some(3),
        };

        let result = run(
            &mut world,
            &mut input,
            &mut presenter,
            &mut CountingSound::default(),
            &mut FramePacer::unpaced(),
        );

        assert!(matches!(result, Err(GameError::Sdl(_))));
        assert_eq!(presenter.frames, 3);
    }

    #[test]
    fn test_fixed_pacer_frame_time() {
        let pacer = FramePacer::fixed(60);
        assert_eq!(pacer.frame_time(), Some(Duration::from_secs(1) / 60));
        assert_eq!(FramePacer::unpaced().frame_time(), None);
    }
}
