// Game module - simulation state and the loop that drives it
//
// This module contains:
// - world.rs: World struct and the per-tick physics/collision step
// - generation.rs: starting layout, platform spawning and pruning
// - types.rs: per-frame input/event records and run outcome
// - runner.rs: caller-driven run loop and its host traits

pub mod generation;
pub mod runner;
pub mod types;
pub mod world;

pub use runner::{FramePacer, InputSource, Presenter, SoundSink};
pub use types::*;
pub use world::World;
