use crate::collision::{Aabb, Collidable};

/// The climbing character.
///
/// Position is the top-left corner of the character box in world space.
/// Velocities are in pixels per tick; negative `velocity_y` moves up.
#[derive(Debug, Clone, PartialEq)]
pub struct Player {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub velocity_x: f32,
    pub velocity_y: f32,
    pub on_ground: bool,
    /// Jump key state from the previous tick, for edge detection
    pub prev_jump_pressed: bool,
}

impl Player {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Player {
            x,
            y,
            width,
            height,
            velocity_x: 0.0,
            velocity_y: 0.0,
            on_ground: false,
            prev_jump_pressed: false,
        }
    }

    pub fn apply_gravity(&mut self, gravity: f32) {
        self.velocity_y += gravity;
    }

    /// Starts a jump on the released-to-pressed transition while grounded.
    ///
    /// Always records `jump_pressed` as the previous state, so holding the key
    /// through a landing does not jump again. Returns true if a jump started.
    pub fn try_jump(&mut self, jump_pressed: bool, impulse: f32) -> bool {
        let just_pressed = jump_pressed && !self.prev_jump_pressed;
        self.prev_jump_pressed = jump_pressed;

        if just_pressed && self.on_ground {
            self.velocity_y = impulse;
            self.on_ground = false;
            true
        } else {
            false
        }
    }

    /// Sets horizontal speed straight from input; opposing keys cancel.
    pub fn steer(&mut self, left: bool, right: bool, speed: f32) {
        self.velocity_x = match (left, right) {
            (true, false) => -speed,
            (false, true) => speed,
            _ => 0.0,
        };
    }

    pub fn integrate(&mut self) {
        self.x += self.velocity_x;
        self.y += self.velocity_y;
    }

    /// Rests the character's feet on a surface whose top edge is `surface_top`.
    pub fn land_on(&mut self, surface_top: f32) {
        self.y = surface_top - self.height;
        self.velocity_y = 0.0;
        self.on_ground = true;
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }
}

impl Collidable for Player {
    fn get_bounds(&self) -> Aabb {
        Aabb::new(self.x, self.y, self.width, self.height)
    }
}
