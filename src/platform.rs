use crate::collision::{Aabb, Collidable};

/// A static ledge the player can land on.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Platform {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Platform {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Platform {
            x,
            y,
            width,
            height,
        }
    }
}

impl Collidable for Platform {
    fn get_bounds(&self) -> Aabb {
        Aabb::new(self.x, self.y, self.width, self.height)
    }
}
