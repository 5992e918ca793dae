//! Startup asset loading
//!
//! Every image is loaded once before the first frame. A missing or unreadable
//! file is fatal; there are no fallback assets.

use std::path::Path;

use sdl2::image::LoadTexture;
use sdl2::render::{Texture, TextureCreator};
use sdl2::video::WindowContext;

use crate::config::AssetConfig;
use crate::error::GameError;

/// Helper struct to hold all game textures
pub struct GameTextures<'a> {
    pub background: Texture<'a>,
    pub character: Texture<'a>,
    pub platform: Texture<'a>,
}

impl<'a> GameTextures<'a> {
    pub fn load(
        texture_creator: &'a TextureCreator<WindowContext>,
        assets: &AssetConfig,
    ) -> Result<Self, GameError> {
        Ok(GameTextures {
            background: load_texture(texture_creator, &assets.background)?,
            character: load_texture(texture_creator, &assets.character)?,
            platform: load_texture(texture_creator, &assets.platform)?,
        })
    }
}

/// Loads a texture from the given path, naming the file in any error
fn load_texture<'a>(
    texture_creator: &'a TextureCreator<WindowContext>,
    path: &Path,
) -> Result<Texture<'a>, GameError> {
    let texture = texture_creator
        .load_texture(path)
        .map_err(|e| GameError::asset(path, e))?;

    let query = texture.query();
    tracing::info!("Loaded {} ({}x{})", path.display(), query.width, query.height);
    Ok(texture)
}
