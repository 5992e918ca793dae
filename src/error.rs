//! Error types for Reverse Gravity
//!
//! Every error here is fatal: startup failures abort before the window opens,
//! and an error surfacing from a frame ends the run loop.

use std::path::PathBuf;
use thiserror::Error;

use crate::config::ConfigError;

/// Top-level error returned by startup and the run loop.
#[derive(Debug, Error)]
pub enum GameError {
    /// SDL2 reports failures as plain strings
    #[error("SDL error: {0}")]
    Sdl(String),

    /// An image or sound file could not be loaded
    #[error("failed to load asset {}: {reason}", path.display())]
    Asset { path: PathBuf, reason: String },

    #[error(transparent)]
    Config(#[from] ConfigError),
}

impl GameError {
    pub fn asset(path: impl Into<PathBuf>, reason: impl Into<String>) -> Self {
        GameError::Asset {
            path: path.into(),
            reason: reason.into(),
        }
    }
}

impl From<String> for GameError {
    fn from(message: String) -> Self {
        GameError::Sdl(message)
    }
}

impl From<sdl2::video::WindowBuildError> for GameError {
    fn from(err: sdl2::video::WindowBuildError) -> Self {
        GameError::Sdl(err.to_string())
    }
}

impl From<sdl2::IntegerOrSdlError> for GameError {
    fn from(err: sdl2::IntegerOrSdlError) -> Self {
        GameError::Sdl(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sdl_string_converts() {
        let err: GameError = String::from("no video device").into();
        assert_eq!(err.to_string(), "SDL error: no video device");
    }

    #[test]
    fn test_asset_error_names_path() {
        let err = GameError::asset("assets/images/scientist.png", "file not found");
        assert_eq!(
            err.to_string(),
            "failed to load asset assets/images/scientist.png: file not found"
        );
    }

    #[test]
    fn test_config_error_is_transparent() {
        let err: GameError = ConfigError::Invalid("gravity must be positive".to_string()).into();
        assert_eq!(err.to_string(), "invalid configuration: gravity must be positive");
    }
}
