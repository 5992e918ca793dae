// World struct and the per-tick simulation
//
// The World owns every piece of gameplay state. The run loop calls `update`
// once per frame and then hands a shared reference to the presenter; nothing
// else mutates it.

use std::collections::VecDeque;

use rand::rngs::StdRng;

use crate::camera::Camera;
use crate::collision::{self, Collidable};
use crate::config::{GameConfig, PhysicsConfig};
use crate::platform::Platform;
use crate::player::Player;

use super::generation::{self, PlatformGenerator};
use super::{FrameEvents, FrameInput};

/// Gap between the player's feet and the lowest ledge at spawn
const SPAWN_DROP: f32 = 50.0;

pub struct World {
    pub player: Player,
    pub platforms: VecDeque<Platform>,
    pub camera: Camera,
    pub altitude: f32,
    pub max_altitude: f32,
    /// Total vertical travel, summed from |velocity_y| every tick
    pub distance: f32,
    pub reached_space: bool,
    pub game_over: bool,
    pub frame: u64,
    physics: PhysicsConfig,
    screen_height: f32,
    space_altitude: f32,
    prune_distance: f32,
    generator: PlatformGenerator,
}

impl World {
    pub fn new(config: &GameConfig) -> Self {
        Self::with_generator(config, PlatformGenerator::new(config))
    }

    /// Builds a world whose platform layout is driven by the given RNG.
    pub fn with_rng(config: &GameConfig, rng: StdRng) -> Self {
        Self::with_generator(config, PlatformGenerator::with_rng(config, rng))
    }

    fn with_generator(config: &GameConfig, generator: PlatformGenerator) -> Self {
        let world = &config.world;
        let screen_height = config.screen_height();

        let mut player = Player::new(
            config.screen_width() / 2.0,
            screen_height - world.character_height - world.platform_height - SPAWN_DROP,
            world.character_width,
            world.character_height,
        );
        player.on_ground = true;

        let mut camera = Camera::new(config.screen_width(), screen_height);
        camera.follow(&player.get_bounds());

        let altitude = screen_height - player.y;

        World {
            player,
            platforms: generation::starting_layout(config),
            camera,
            altitude,
            max_altitude: altitude,
            distance: 0.0,
            reached_space: false,
            game_over: false,
            frame: 0,
            physics: config.physics.clone(),
            screen_height,
            space_altitude: world.space_altitude,
            prune_distance: world.prune_distance,
            generator,
        }
    }

    /// Advances the simulation by one tick.
    ///
    /// Once the game is over the world is frozen and every further call just
    /// reports `game_over` again.
    pub fn update(&mut self, input: &FrameInput) -> FrameEvents {
        let mut events = FrameEvents::default();
        if self.game_over {
            events.game_over = true;
            return events;
        }
        self.frame += 1;

        let gravity = if input.reverse_gravity {
            self.physics.reverse_gravity
        } else {
            self.physics.gravity
        };
        self.player.apply_gravity(gravity);

        if self.player.try_jump(input.jump, self.physics.jump_impulse) {
            events.jumped = true;
            tracing::debug!("Jump at ({:.1}, {:.1})", self.player.x, self.player.y);
        }

        self.player.steer(input.left, input.right, self.physics.move_speed);
        self.player.integrate();

        let was_grounded = self.player.on_ground;
        self.resolve_landing();
        if self.player.on_ground && !was_grounded {
            events.landed = true;
            tracing::debug!("Landed at y={:.1}", self.player.y);
        }

        self.camera.follow(&self.player.get_bounds());

        // Prune first so a freed slot is usable by the spawn in the same tick
        events.pruned =
            generation::prune_below(&mut self.platforms, self.camera.bottom(), self.prune_distance);
        if events.pruned > 0 {
            tracing::debug!("Pruned {} platforms, {} live", events.pruned, self.platforms.len());
        }
        events.spawned_platform = self
            .generator
            .spawn_if_needed(self.player.y, self.player.bottom(), &mut self.platforms)
            .is_some();

        if self.player.y > self.screen_height {
            self.game_over = true;
            events.game_over = true;
            return events;
        }

        self.distance += self.player.velocity_y.abs();
        self.altitude = self.screen_height - self.player.y;
        self.max_altitude = self.max_altitude.max(self.altitude);

        if !self.reached_space && self.altitude >= self.space_altitude {
            self.reached_space = true;
            events.reached_space = true;
        }

        events
    }

    /// Top-edge landing test against every platform; side and bottom
    /// contacts are never resolved.
    fn resolve_landing(&mut self) {
        self.player.on_ground = false;

        let bounds = self.player.get_bounds();
        if let Some((_, surface)) =
            collision::find_landing(&bounds, self.player.velocity_y, &self.platforms)
        {
            self.player.land_on(surface.top());
        }
    }

    /// The highest live platform, if any.
    pub fn highest_platform(&self) -> Option<&Platform> {
        self.platforms.back()
    }

    pub fn space_altitude(&self) -> f32 {
        self.space_altitude
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    fn test_world(config: &GameConfig) -> World {
        World::with_rng(config, StdRng::seed_from_u64(7))
    }

    fn idle() -> FrameInput {
        FrameInput::default()
    }

    fn jump() -> FrameInput {
        FrameInput {
            jump: true,
            ..FrameInput::default()
        }
    }

    /// Lets the player drop onto the lowest starting ledge.
    fn settled_world(config: &GameConfig) -> World {
        let mut world = test_world(config);
        for _ in 0..30 {
            world.update(&idle());
        }
        assert!(world.player.on_ground);
        world
    }

    #[test]
    fn test_initial_state() {
        let config = GameConfig::default();
        let world = test_world(&config);

        assert_eq!((world.player.x, world.player.y), (320.0, 382.0));
        assert!(world.player.on_ground);
        assert_eq!(world.platforms.len(), 4);
        assert_eq!(world.altitude, 98.0);
        assert!(!world.game_over);
        assert!(!world.reached_space);
    }

    #[test]
    fn test_single_tick_example() {
        let config = GameConfig::default();
        let mut world = test_world(&config);
        world.platforms = VecDeque::from(vec![Platform::new(200.0, 450.0, 128.0, 16.0)]);
        world.player.x = 250.0;
        world.player.y = 400.0;
        world.player.velocity_y = 0.0;
        world.player.on_ground = true;

        let events = world.update(&idle());

        assert_eq!(world.player.velocity_y, 0.5);
        assert_eq!(world.player.y, 400.5);
        assert!(!world.player.on_ground);
        assert!(!events.landed);
        assert!(!events.game_over);
    }

    #[test]
    fn test_falls_onto_starting_ledge() {
        let config = GameConfig::default();
        let world = settled_world(&config);

        assert_eq!(world.player.bottom(), 432.0);
        assert_eq!(world.player.velocity_y, 0.0);
    }

    #[test]
    fn test_airborne_velocity_accumulates_gravity() {
        let config = GameConfig::default();
        let mut world = settled_world(&config);

        let events = world.update(&jump());
        assert!(events.jumped);
        assert_eq!(world.player.velocity_y, config.physics.jump_impulse);

        let mut ticks = 0;
        loop {
            let before = world.player.velocity_y;
            world.update(&jump());
            if world.player.on_ground {
                break;
            }
            assert_eq!(world.player.velocity_y, before + config.physics.gravity);
            ticks += 1;
            assert!(ticks < 200, "never landed");
        }
        assert_eq!(world.player.velocity_y, 0.0);
    }

    #[test]
    fn test_holding_jump_does_not_repeat() {
        let config = GameConfig::default();
        let mut world = settled_world(&config);

        let mut jumps = 0;
        for _ in 0..200 {
            if world.update(&jump()).jumped {
                jumps += 1;
            }
        }
        assert_eq!(jumps, 1);
        assert!(world.player.on_ground);

        // Release and press again
        world.update(&idle());
        assert!(world.update(&jump()).jumped);
    }

    #[test]
    fn test_resting_is_idempotent() {
        let config = GameConfig::default();
        let mut world = settled_world(&config);
        let resting_y = world.player.y;

        for _ in 0..10 {
            world.update(&idle());
            assert_eq!(world.player.y, resting_y);
            assert_eq!(world.player.velocity_y, 0.0);
            assert!(world.player.on_ground);
        }
    }

    #[test]
    fn test_jump_passes_up_through_platform() {
        let config = GameConfig::default();
        let mut world = test_world(&config);
        world.platforms = VecDeque::from(vec![
            Platform::new(256.0, 432.0, 128.0, 16.0),
            Platform::new(256.0, 400.0, 128.0, 16.0),
        ]);
        world.player.y = 400.0;
        world.player.on_ground = true;

        world.update(&jump());
        assert!(world.player.velocity_y < 0.0);
        assert!(!world.player.on_ground);
    }

    #[test]
    fn test_walking_off_a_ledge_falls() {
        let config = GameConfig::default();
        let mut world = settled_world(&config);
        let left = FrameInput {
            left: true,
            ..FrameInput::default()
        };

        // Lowest ledge spans x = 256..384; walk well past its left edge
        for _ in 0..30 {
            world.update(&left);
        }
        assert!(world.player.x + world.player.width < 256.0);
        assert!(!world.player.on_ground);
        assert!(world.player.velocity_y > 0.0);
    }

    #[test]
    fn test_reverse_gravity_lifts_player() {
        let config = GameConfig::default();
        let mut world = settled_world(&config);
        let start_y = world.player.y;
        let reverse = FrameInput {
            reverse_gravity: true,
            ..FrameInput::default()
        };

        world.update(&reverse);
        assert_eq!(world.player.velocity_y, config.physics.reverse_gravity);
        assert!(world.player.y < start_y);
        assert!(!world.player.on_ground);
    }

    #[test]
    fn test_game_over_exactly_past_screen_height() {
        let config = GameConfig::default();
        let mut world = test_world(&config);
        world.platforms.clear();
        world.player.on_ground = false;
        world.player.y = 479.0;
        world.player.velocity_y = 0.5; // next tick: vy = 1.0, y = 480.0

        let events = world.update(&idle());
        assert_eq!(world.player.y, 480.0);
        assert!(!events.game_over);
        assert!(!world.game_over);

        let events = world.update(&idle()); // vy = 1.5, y = 481.5
        assert!(events.game_over);
        assert!(world.game_over);

        // Frozen afterwards
        let y = world.player.y;
        assert!(world.update(&idle()).game_over);
        assert_eq!(world.player.y, y);
    }

    #[test]
    fn test_climbing_spawns_platforms_above() {
        let config = GameConfig::default();
        let mut world = test_world(&config);
        let highest_before = world.highest_platform().map(|p| p.y).unwrap();

        world.player.y = 239.0;
        world.player.velocity_y = -5.0;
        world.player.on_ground = false;

        let events = world.update(&idle());
        assert!(events.spawned_platform);
        assert_eq!(world.platforms.len(), 5);
        assert_eq!(world.highest_platform().map(|p| p.y), Some(highest_before - 100.0));
    }

    #[test]
    fn test_flying_high_prunes_old_platforms() {
        let config = GameConfig::default();
        let mut world = test_world(&config);
        world.player.on_ground = false;
        world.player.y = -2000.0;
        world.player.velocity_y = -1.0;

        let events = world.update(&idle());

        // Camera bottom is near y = -1744; every starting ledge is > 480 below it
        assert_eq!(events.pruned, 4);
        assert!(events.spawned_platform);
        assert_eq!(world.platforms.len(), 1);
        assert!(world.platforms.len() <= config.world.max_platforms);
    }

    #[test]
    fn test_reaching_space_latches_once() {
        let mut config = GameConfig::default();
        config.world.space_altitude = 300.0;
        let mut world = test_world(&config);
        world.player.on_ground = false;
        world.player.y = 181.0;
        world.player.velocity_y = -1.5; // after gravity: -1.0, y = 180.0, altitude 300

        let events = world.update(&idle());
        assert!(events.reached_space);
        assert!(world.reached_space);

        let events = world.update(&idle());
        assert!(!events.reached_space);
        assert!(world.reached_space);
    }

    #[test]
    fn test_distance_and_altitude_tracking() {
        let config = GameConfig::default();
        let mut world = test_world(&config);
        world.platforms.clear();
        world.player.on_ground = false;
        world.player.y = 100.0;
        world.player.velocity_y = -2.5;

        world.update(&idle()); // vy = -2.0, y = 98.0
        world.update(&idle()); // vy = -1.5, y = 96.5

        assert_eq!(world.distance, 3.5);
        assert_eq!(world.altitude, 480.0 - 96.5);
        assert_eq!(world.max_altitude, world.altitude);
    }
}
