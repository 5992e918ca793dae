// Shared per-frame records passed between the input, simulation and run loop

/// Input state for one tick, already mapped from physical keys.
///
/// Every field is a held state; the player keeps the previous jump state for
/// edge detection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FrameInput {
    pub left: bool,
    pub right: bool,
    pub jump: bool,
    pub reverse_gravity: bool,
    pub quit: bool,
}

/// What happened during one `World::update`.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct FrameEvents {
    pub jumped: bool,
    /// Airborne last tick, standing on a platform now
    pub landed: bool,
    pub spawned_platform: bool,
    pub pruned: usize,
    /// Set only on the tick the space altitude is first reached
    pub reached_space: bool,
    pub game_over: bool,
}

/// Why the run loop stopped
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EndReason {
    Quit,
    GameOver,
}

/// Summary of a finished run
#[derive(Debug, Clone, PartialEq)]
pub struct RunOutcome {
    pub reason: EndReason,
    pub frames: u64,
    pub altitude: f32,
    pub max_altitude: f32,
    pub distance: f32,
    pub reached_space: bool,
}
