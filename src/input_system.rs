use sdl2::event::Event;
use sdl2::keyboard::{Keycode, Scancode};
use sdl2::EventPump;

use crate::game::{FrameInput, InputSource};

/// InputSystem turns SDL2 events and keyboard state into a `FrameInput`
///
/// Input processing happens in two phases each tick:
/// 1. Drain the event queue, looking only for quit requests (window close or
///    an Escape key press)
/// 2. Sample the held keys straight from the keyboard state
///
/// Nothing is buffered between ticks.
pub struct InputSystem {
    event_pump: EventPump,
}

impl InputSystem {
    pub fn new(event_pump: EventPump) -> Self {
        InputSystem { event_pump }
    }
}

impl InputSource for InputSystem {
    fn poll(&mut self) -> FrameInput {
        let mut quit = false;
        for event in self.event_pump.poll_iter() {
            if is_quit_event(&event) {
                quit = true;
            }
        }

        let keyboard_state = self.event_pump.keyboard_state();
        let mut input = map_held_keys(|scancode| keyboard_state.is_scancode_pressed(scancode));
        input.quit = quit;
        input
    }
}

/// Window close, or Escape going down (auto-repeat ignored)
pub fn is_quit_event(event: &Event) -> bool {
    match event {
        Event::Quit { .. } => true,
        Event::KeyDown {
            keycode: Some(Keycode::Escape),
            repeat: false,
            ..
        } => true,
        _ => false,
    }
}

/// Maps held physical keys to gameplay input.
///
/// - Left / Right arrows: move
/// - Space: jump
/// - Either Shift: reverse gravity
pub fn map_held_keys(is_pressed: impl Fn(Scancode) -> bool) -> FrameInput {
    FrameInput {
        left: is_pressed(Scancode::Left),
        right: is_pressed(Scancode::Right),
        jump: is_pressed(Scancode::Space),
        reverse_gravity: is_pressed(Scancode::LShift) || is_pressed(Scancode::RShift),
        quit: false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sdl2::keyboard::Mod;

    fn held(keys: &[Scancode]) -> FrameInput {
        map_held_keys(|scancode| keys.contains(&scancode))
    }

    fn key_down(keycode: Keycode, repeat: bool) -> Event {
        Event::KeyDown {
            timestamp: 0,
            window_id: 0,
            keycode: Some(keycode),
            scancode: None,
            keymod: Mod::NOMOD,
            repeat,
        }
    }

    #[test]
    fn test_no_keys_is_idle() {
        assert_eq!(held(&[]), FrameInput::default());
    }

    #[test]
    fn test_movement_and_jump_keys() {
        let input = held(&[Scancode::Left, Scancode::Space]);
        assert!(input.left);
        assert!(!input.right);
        assert!(input.jump);
        assert!(!input.reverse_gravity);
        assert!(!input.quit);
    }

    #[test]
    fn test_either_shift_reverses_gravity() {
        assert!(held(&[Scancode::LShift]).reverse_gravity);
        assert!(held(&[Scancode::RShift]).reverse_gravity);
    }

    #[test]
    fn test_unmapped_keys_ignored() {
        assert_eq!(held(&[Scancode::W, Scancode::A, Scancode::Up]), FrameInput::default());
    }

    #[test]
    fn test_quit_events() {
        assert!(is_quit_event(&Event::Quit { timestamp: 0 }));
        assert!(is_quit_event(&key_down(Keycode::Escape, false)));
        assert!(!is_quit_event(&key_down(Keycode::Escape, true)));
        assert!(!is_quit_event(&key_down(Keycode::Space, false)));
    }
}
