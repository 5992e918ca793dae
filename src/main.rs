mod assets;
mod audio;
mod camera;
mod collision;
mod config;
mod error;
mod game;
mod input_system;
mod platform;
mod player;
mod render;
mod text;

use assets::GameTextures;
use audio::JumpSound;
use config::{ConfigSource, GameConfig};
use error::GameError;
use game::runner;
use game::{EndReason, FramePacer, World};
use input_system::InputSystem;
use render::SdlRenderer;
use tracing_subscriber::EnvFilter;

/// Calculate the best window scale based on monitor size
fn calculate_window_scale(video_subsystem: &sdl2::VideoSubsystem, width: u32, height: u32) -> u32 {
    match video_subsystem.desktop_display_mode(0) {
        Ok(display_mode) => {
            // Leave 10% margin for taskbars/decorations
            let usable_w = (display_mode.w as f32 * 0.9) as i32;
            let usable_h = (display_mode.h as f32 * 0.9) as i32;

            let max_scale_w = usable_w / width as i32;
            let max_scale_h = usable_h / height as i32;

            max_scale_w.min(max_scale_h).clamp(1, 4) as u32
        }
        Err(e) => {
            tracing::warn!("Could not detect monitor size ({}), using 1x scale", e);
            1
        }
    }
}

fn run_game() -> Result<(), GameError> {
    let (config, source) = GameConfig::resolve()?;
    match &source {
        ConfigSource::File(path) => tracing::info!("Loaded config from {}", path.display()),
        ConfigSource::Defaults => tracing::info!("No config file found, using defaults"),
    }

    let sdl_context = sdl2::init()?;
    let video_subsystem = sdl_context.video()?;
    let _image_context = sdl2::image::init(sdl2::image::InitFlag::PNG)?;

    let (game_width, game_height) = (config.window.width, config.window.height);
    let window_scale = calculate_window_scale(&video_subsystem, game_width, game_height);
    let window_width = game_width * window_scale;
    let window_height = game_height * window_scale;
    tracing::info!(
        "Monitor scale: {}x (window: {}x{})",
        window_scale,
        window_width,
        window_height
    );

    let window = video_subsystem
        .window(&config.window.title, window_width, window_height)
        .position_centered()
        .build()?;

    let mut canvas = window.into_canvas().build()?;

    // Set logical size for automatic pixel-perfect scaling
    canvas.set_logical_size(game_width, game_height)?;

    let texture_creator = canvas.texture_creator();
    let textures = GameTextures::load(&texture_creator, &config.assets)?;

    let mut jump_sound = match &config.assets.jump_sound {
        Some(path) => {
            let audio_subsystem = sdl_context.audio()?;
            let sound = JumpSound::load(&audio_subsystem, path)?;
            tracing::info!("Loaded jump sound: {}", path.display());
            Some(sound)
        }
        None => None,
    };

    let mut world = World::new(&config);
    if let Some(top) = world.highest_platform() {
        tracing::info!(
            "World ready: {} platforms, highest at y={:.1}",
            world.platforms.len(),
            top.y
        );
    }

    let mut input = InputSystem::new(sdl_context.event_pump()?);
    let mut renderer = SdlRenderer::new(canvas, textures);
    let mut pacer = FramePacer::fixed(config.window.target_fps);
    if let Some(frame_time) = pacer.frame_time() {
        tracing::debug!("Frame budget: {:?}", frame_time);
    }

    let outcome = runner::run(
        &mut world,
        &mut input,
        &mut renderer,
        &mut jump_sound,
        &mut pacer,
    )?;

    match outcome.reason {
        EndReason::GameOver => tracing::info!(
            "Game Over: altitude {:.1}, best {:.1}, distance {:.1}, {} frames",
            outcome.altitude,
            outcome.max_altitude,
            outcome.distance,
            outcome.frames
        ),
        EndReason::Quit => tracing::info!(
            "Quit: altitude {:.1}, best {:.1}, distance {:.1}, {} frames",
            outcome.altitude,
            outcome.max_altitude,
            outcome.distance,
            outcome.frames
        ),
    }
    if outcome.reached_space {
        tracing::info!("Made it to space");
    }

    Ok(())
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    if let Err(e) = run_game() {
        tracing::error!("{}", e);
        std::process::exit(1);
    }
}
