//! Collision detection for Reverse Gravity
//!
//! This module provides AABB (Axis-Aligned Bounding Box) types and tests for the
//! player and the platforms. Bounds are in world space with y growing downward.
//!
//! # Architecture
//!
//! - `Aabb`: floating-point rectangle, independent of any rendering host
//! - `Collidable` trait: implemented by everything that has bounds
//! - `aabb_intersect`: general overlap test (used for viewport culling)
//! - `lands_on` / `find_landing`: the one collision case the game models, a
//!   descending character touching a platform's top edge
//!
//! Side and underside contacts are not detected: a character
//! jumping up through a platform passes straight through it.

/// Axis-aligned bounding box, top-left origin.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Aabb {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Aabb { x, y, width, height }
    }

    pub fn left(&self) -> f32 {
        self.x
    }

    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    pub fn top(&self) -> f32 {
        self.y
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    pub fn center(&self) -> (f32, f32) {
        (self.x + self.width / 2.0, self.y + self.height / 2.0)
    }
}

/// Trait for entities that participate in collision detection.
///
/// # Example
///
/// ```rust
/// impl Collidable for Platform {
///     fn get_bounds(&self) -> Aabb {
///         Aabb::new(self.x, self.y, self.width, self.height)
///     }
/// }
/// ```
pub trait Collidable {
    /// Returns the axis-aligned bounding box for this entity in world space.
    fn get_bounds(&self) -> Aabb;
}

/// Checks if two axis-aligned bounding boxes intersect.
///
/// Touching edges do not count as an intersection.
pub fn aabb_intersect(a: &Aabb, b: &Aabb) -> bool {
    let x_overlap = a.left() < b.right() && a.right() > b.left();
    let y_overlap = a.top() < b.bottom() && a.bottom() > b.top();

    x_overlap && y_overlap
}

/// Checks whether a falling box has come down onto the top of a surface.
///
/// Three conditions, all inclusive at the edges:
/// - the mover is descending (`velocity_y > 0`)
/// - the boxes overlap horizontally
/// - the mover's bottom edge lies inside the surface's vertical band
pub fn lands_on(mover: &Aabb, velocity_y: f32, surface: &Aabb) -> bool {
    if velocity_y <= 0.0 {
        return false;
    }

    let x_overlap = mover.right() >= surface.left() && mover.left() <= surface.right();
    let in_top_band = mover.bottom() >= surface.top() && mover.bottom() <= surface.bottom();

    x_overlap && in_top_band
}

/// Finds the first surface a falling box lands on.
///
/// Returns the index of the surface within `surfaces` and its bounds. Order
/// matters: once a landing is resolved the mover's velocity is zero, so no
/// later surface could match in the same tick.
pub fn find_landing<'a, T, I>(mover: &Aabb, velocity_y: f32, surfaces: I) -> Option<(usize, Aabb)>
where
    T: Collidable + 'a,
    I: IntoIterator<Item = &'a T>,
{
    surfaces
        .into_iter()
        .map(Collidable::get_bounds)
        .enumerate()
        .find(|(_, bounds)| lands_on(mover, velocity_y, bounds))
}
