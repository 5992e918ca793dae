//! Camera-relative rendering for Reverse Gravity
//!
//! Draw order, back to front:
//! 1. Background image, tiled around the camera
//! 2. Platforms inside the viewport
//! 3. The character sprite
//! 4. HUD text in screen space
//!
//! The renderer holds no gameplay state; every frame is drawn from the
//! `World` it is handed.

use sdl2::pixels::Color;
use sdl2::rect::Rect;
use sdl2::render::Canvas;
use sdl2::video::Window;

use crate::assets::GameTextures;
use crate::camera::Camera;
use crate::collision::{Aabb, Collidable, aabb_intersect};
use crate::error::GameError;
use crate::game::{Presenter, World};
use crate::text::{draw_centered_text, draw_simple_text, text_height};

pub const CONGRATS_TEXT: &str = "CONGRATULATIONS!\nYOU MADE IT TO SPACE!";

const HUD_SCALE: u32 = 2;
const HUD_MARGIN: i32 = 4;
const HUD_COLOR: Color = Color::RGB(255, 255, 255);
const CONGRATS_COLOR: Color = Color::RGB(255, 220, 90);

pub struct SdlRenderer<'a> {
    canvas: Canvas<Window>,
    textures: GameTextures<'a>,
}

impl<'a> SdlRenderer<'a> {
    pub fn new(canvas: Canvas<Window>, textures: GameTextures<'a>) -> Self {
        SdlRenderer { canvas, textures }
    }

    fn draw_background(&mut self, camera: &Camera) -> Result<(), String> {
        for (tile_x, tile_y) in camera.background_tiles() {
            let tile = Aabb::new(tile_x, tile_y, camera.width, camera.height);
            self.canvas
                .copy(&self.textures.background, None, screen_rect(camera, &tile))?;
        }
        Ok(())
    }

    fn draw_platforms(&mut self, world: &World) -> Result<(), String> {
        let view = world.camera.viewport();
        for platform in &world.platforms {
            let bounds = platform.get_bounds();
            if !aabb_intersect(&bounds, &view) {
                continue;
            }
            self.canvas
                .copy(&self.textures.platform, None, screen_rect(&world.camera, &bounds))?;
        }
        Ok(())
    }

    fn draw_player(&mut self, world: &World) -> Result<(), String> {
        let dest = screen_rect(&world.camera, &world.player.get_bounds());
        self.canvas.copy(&self.textures.character, None, dest)
    }

    fn draw_hud(&mut self, world: &World) -> Result<(), String> {
        for (n, line) in hud_lines(world).iter().enumerate() {
            let y = HUD_MARGIN + n as i32 * text_height(line, HUD_SCALE) as i32;
            draw_simple_text(&mut self.canvas, line, HUD_MARGIN, y, HUD_COLOR, HUD_SCALE)?;
        }

        if world.reached_space {
            let (width, height) = self.canvas.logical_size();
            let top = (height / 2) as i32 - (text_height(CONGRATS_TEXT, HUD_SCALE) / 2) as i32;
            draw_centered_text(
                &mut self.canvas,
                CONGRATS_TEXT,
                (width / 2) as i32,
                top,
                CONGRATS_COLOR,
                HUD_SCALE,
            )?;
        }
        Ok(())
    }
}

impl Presenter for SdlRenderer<'_> {
    fn present(&mut self, world: &World) -> Result<(), GameError> {
        self.canvas.set_draw_color(Color::RGB(0, 0, 0));
        self.canvas.clear();

        self.draw_background(&world.camera)?;
        self.draw_platforms(world)?;
        self.draw_player(world)?;
        self.draw_hud(world)?;

        self.canvas.present();
        Ok(())
    }
}

/// Converts world-space bounds to a screen rectangle.
///
/// Positions are floored so sub-pixel motion never leaves a one pixel gap
/// between a resting character and its platform.
pub fn screen_rect(camera: &Camera, bounds: &Aabb) -> Rect {
    let (x, y) = camera.to_screen(bounds.x, bounds.y);
    Rect::new(
        x.floor() as i32,
        y.floor() as i32,
        bounds.width.round().max(1.0) as u32,
        bounds.height.round().max(1.0) as u32,
    )
}

/// HUD lines: current altitude and progress toward space.
pub fn hud_lines(world: &World) -> Vec<String> {
    let progress = (world.max_altitude / world.space_altitude() * 100.0).clamp(0.0, 100.0);
    vec![
        format!("ALTITUDE: {:.1}", world.altitude),
        format!("SPACE: {:.0}%", progress),
    ]
}
