// Procedural platform generation and pruning
//
// Platforms are kept bottom-first in a VecDeque: new ones are only ever pushed
// on top (back) and old ones only ever dropped from below (front), so the
// sequence stays sorted by height without any re-sorting.

use std::collections::VecDeque;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::config::{GameConfig, STARTING_PLATFORM_COUNT};
use crate::platform::Platform;

/// Horizontal offsets of the starting ledges from the centred position
const STARTING_OFFSETS: [f32; STARTING_PLATFORM_COUNT] = [0.0, -100.0, 100.0, -100.0];

/// Builds the fixed starting ledges, lowest first.
pub fn starting_layout(config: &GameConfig) -> VecDeque<Platform> {
    let world = &config.world;
    let base_x = config.screen_width() / 2.0 - world.platform_width / 2.0;
    let base_y = config.screen_height() - world.platform_height - world.character_height;

    STARTING_OFFSETS
        .iter()
        .enumerate()
        .map(|(i, offset)| {
            Platform::new(
                base_x + offset,
                base_y - i as f32 * world.platform_spacing,
                world.platform_width,
                world.platform_height,
            )
        })
        .collect()
}

/// Appends platforms above the player as they climb.
pub struct PlatformGenerator {
    rng: StdRng,
    spacing: f32,
    platform_width: f32,
    platform_height: f32,
    max_x: f32,
    max_platforms: usize,
    /// The player must rise above this y for the next platform to appear
    next_spawn_y: f32,
    cap_reported: bool,
}

impl PlatformGenerator {
    pub fn new(config: &GameConfig) -> Self {
        let rng = match config.world.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self::with_rng(config, rng)
    }

    pub fn with_rng(config: &GameConfig, rng: StdRng) -> Self {
        let world = &config.world;
        PlatformGenerator {
            rng,
            spacing: world.platform_spacing,
            platform_width: world.platform_width,
            platform_height: world.platform_height,
            max_x: (config.screen_width() - world.platform_width).max(0.0),
            max_platforms: world.max_platforms,
            next_spawn_y: config.screen_height() / 2.0,
            cap_reported: false,
        }
    }

    #[cfg(test)]
    pub fn next_spawn_y(&self) -> f32 {
        self.next_spawn_y
    }

    /// Appends one platform if the player has climbed past the spawn line.
    ///
    /// The new platform sits one spacing above the current highest one (or
    /// above `anchor_y` when no platform is left) and the spawn line moves up
    /// by one spacing. While the cap is reached nothing is added and the line
    /// stays put, so the platform appears as soon as pruning frees a slot.
    pub fn spawn_if_needed(
        &mut self,
        player_y: f32,
        anchor_y: f32,
        platforms: &mut VecDeque<Platform>,
    ) -> Option<Platform> {
        if player_y >= self.next_spawn_y {
            return None;
        }

        if platforms.len() >= self.max_platforms {
            if !self.cap_reported {
                tracing::warn!(
                    "Platform cap of {} reached, generation paused",
                    self.max_platforms
                );
                self.cap_reported = true;
            }
            return None;
        }
        self.cap_reported = false;

        let base_y = platforms.back().map_or(anchor_y, |highest| highest.y);
        let platform = Platform::new(
            self.random_x(),
            base_y - self.spacing,
            self.platform_width,
            self.platform_height,
        );
        platforms.push_back(platform);
        self.next_spawn_y -= self.spacing;

        tracing::debug!(
            "Spawned platform at ({:.1}, {:.1}), {} live",
            platform.x,
            platform.y,
            platforms.len()
        );
        Some(platform)
    }

    fn random_x(&mut self) -> f32 {
        if self.max_x > 0.0 {
            self.rng.gen_range(0.0..=self.max_x)
        } else {
            0.0
        }
    }
}

/// Drops platforms whose top is more than `prune_distance` below `camera_bottom`.
///
/// Returns how many were removed.
pub fn prune_below(platforms: &mut VecDeque<Platform>, camera_bottom: f32, prune_distance: f32) -> usize {
    let cutoff = camera_bottom + prune_distance;
    let mut removed = 0;
    while platforms.front().is_some_and(|lowest| lowest.y > cutoff) {
        platforms.pop_front();
        removed += 1;
    }
    removed
}
