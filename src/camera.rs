use crate::collision::Aabb;

/// Viewport into the world, kept centred on the player.
///
/// `x`/`y` is the world position of the screen's top-left corner.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Camera {
    pub fn new(width: f32, height: f32) -> Self {
        Camera {
            x: 0.0,
            y: 0.0,
            width,
            height,
        }
    }

    /// Moves the viewport so `target`'s centre sits at the screen centre.
    pub fn follow(&mut self, target: &Aabb) {
        let (cx, cy) = target.center();
        self.x = cx - self.width / 2.0;
        self.y = cy - self.height / 2.0;
    }

    pub fn to_screen(&self, world_x: f32, world_y: f32) -> (f32, f32) {
        (world_x - self.x, world_y - self.y)
    }

    pub fn viewport(&self) -> Aabb {
        Aabb::new(self.x, self.y, self.width, self.height)
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    /// World-space origins of the 3x3 block of screen-sized background tiles
    /// around the viewport. Always covers the whole screen.
    pub fn background_tiles(&self) -> [(f32, f32); 9] {
        let tile_col = (self.x / self.width).floor();
        let tile_row = (self.y / self.height).floor();

        let mut tiles = [(0.0, 0.0); 9];
        let mut n = 0;
        for dy in -1..=1 {
            for dx in -1..=1 {
                tiles[n] = (
                    (tile_col + dx as f32) * self.width,
                    (tile_row + dy as f32) * self.height,
                );
                n += 1;
            }
        }
        tiles
    }
}
