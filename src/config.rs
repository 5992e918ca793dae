//! Game configuration
//!
//! Tuning values live in a JSON file so the physics can be adjusted without a
//! rebuild. Every field has a default, so a config file only needs to list the
//! values it overrides:
//!
//! ```json
//! { "physics": { "gravity": 0.4, "jump_impulse": -10.0 } }
//! ```
//!
//! Lookup order is the user's config directory, then `assets/config/game.json`,
//! then the built-in defaults.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Bundled config file, relative to the working directory
pub const BUNDLED_CONFIG_PATH: &str = "assets/config/game.json";

/// Number of platforms in the starting layout
pub const STARTING_PLATFORM_COUNT: usize = 4;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid configuration: {0}")]
    Invalid(String),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub title: String,
    pub width: u32,
    pub height: u32,
    pub target_fps: u32,
}

impl Default for WindowConfig {
    fn default() -> Self {
        WindowConfig {
            title: "Reverse Gravity".to_string(),
            width: 640,
            height: 480,
            target_fps: 60,
        }
    }
}

/// Per-tick physics constants. Positive y points down the screen.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PhysicsConfig {
    pub gravity: f32,
    /// Applied instead of `gravity` while the reverse modifier is held
    pub reverse_gravity: f32,
    pub jump_impulse: f32,
    pub move_speed: f32,
}

impl Default for PhysicsConfig {
    fn default() -> Self {
        PhysicsConfig {
            gravity: 0.5,
            reverse_gravity: -0.5,
            jump_impulse: -11.0,
            move_speed: 4.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WorldConfig {
    pub character_width: f32,
    pub character_height: f32,
    pub platform_width: f32,
    pub platform_height: f32,
    pub platform_spacing: f32,
    pub max_platforms: usize,
    /// How far below the camera's bottom edge a platform survives
    pub prune_distance: f32,
    pub space_altitude: f32,
    /// Fixed seed for the platform generator; entropy when absent
    pub seed: Option<u64>,
}

impl Default for WorldConfig {
    fn default() -> Self {
        WorldConfig {
            character_width: 32.0,
            character_height: 32.0,
            platform_width: 128.0,
            platform_height: 16.0,
            platform_spacing: 100.0,
            max_platforms: 50,
            prune_distance: 480.0,
            space_altitude: 10_000.0,
            seed: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AssetConfig {
    pub background: PathBuf,
    pub character: PathBuf,
    pub platform: PathBuf,
    pub jump_sound: Option<PathBuf>,
}

impl Default for AssetConfig {
    fn default() -> Self {
        AssetConfig {
            background: PathBuf::from("assets/images/space_background.png"),
            character: PathBuf::from("assets/images/scientist.png"),
            platform: PathBuf::from("assets/images/platform.png"),
            jump_sound: Some(PathBuf::from("assets/audio/jump.wav")),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub window: WindowConfig,
    pub physics: PhysicsConfig,
    pub world: WorldConfig,
    pub assets: AssetConfig,
}

/// Where the active configuration came from
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigSource {
    File(PathBuf),
    Defaults,
}

impl GameConfig {
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config: GameConfig =
            serde_json::from_str(&contents).map_err(|source| ConfigError::Parse {
                path: path.to_path_buf(),
                source,
            })?;
        config.validate()?;
        Ok(config)
    }

    /// Loads the first candidate file that exists, falling back to defaults.
    ///
    /// A candidate that exists but fails to parse or validate is an error, not
    /// a reason to try the next one.
    pub fn load_first_existing(candidates: &[PathBuf]) -> Result<(Self, ConfigSource), ConfigError> {
        for path in candidates {
            if path.is_file() {
                let config = Self::load_from_file(path)?;
                return Ok((config, ConfigSource::File(path.clone())));
            }
        }
        Ok((GameConfig::default(), ConfigSource::Defaults))
    }

    /// Standard lookup: user config dir, then the bundled file.
    pub fn resolve() -> Result<(Self, ConfigSource), ConfigError> {
        Self::load_first_existing(&Self::candidate_paths())
    }

    pub fn candidate_paths() -> Vec<PathBuf> {
        let mut paths = Vec::new();
        if let Some(dir) = dirs::config_dir() {
            paths.push(dir.join("reverse_gravity").join("config.json"));
        }
        paths.push(PathBuf::from(BUNDLED_CONFIG_PATH));
        paths
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let invalid = |msg: &str| Err(ConfigError::Invalid(msg.to_string()));

        if self.window.width == 0 || self.window.height == 0 {
            return invalid("window size must be non-zero");
        }
        if self.window.target_fps == 0 {
            return invalid("target_fps must be positive");
        }
        if !(self.physics.gravity > 0.0) {
            return invalid("gravity must be positive");
        }
        if !(self.physics.jump_impulse < 0.0) {
            return invalid("jump_impulse must be negative (upward)");
        }
        if !(self.physics.move_speed >= 0.0) {
            return invalid("move_speed must not be negative");
        }
        if !self.physics.reverse_gravity.is_finite() {
            return invalid("reverse_gravity must be finite");
        }

        let world = &self.world;
        if !(world.character_width > 0.0 && world.character_height > 0.0) {
            return invalid("character size must be positive");
        }
        if !(world.platform_width > 0.0 && world.platform_height > 0.0) {
            return invalid("platform size must be positive");
        }
        if world.platform_width > self.window.width as f32 {
            return invalid("platform_width must fit inside the window");
        }
        if !(world.platform_spacing > 0.0) {
            return invalid("platform_spacing must be positive");
        }
        if world.max_platforms < STARTING_PLATFORM_COUNT {
            return invalid("max_platforms must cover the starting layout");
        }
        if !(world.prune_distance >= 0.0) {
            return invalid("prune_distance must not be negative");
        }

        Ok(())
    }

    pub fn screen_width(&self) -> f32 {
        self.window.width as f32
    }

    pub fn screen_height(&self) -> f32 {
        self.window.height as f32
    }
}
