use crate::{Config, Params};
use glam::Vec2;

/// Axis-aligned bounding box
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub min: Vec2,
    pub max: Vec2,
}

impl Aabb {
    pub fn new(min: Vec2, max: Vec2) -> Self {
        Self { min, max }
    }

    /// Box from its top-left corner and size
    pub fn from_pos_size(pos: Vec2, size: Vec2) -> Self {
        Self {
            min: pos,
            max: pos + size,
        }
    }

    pub fn size(&self) -> Vec2 {
        self.max - self.min
    }

    pub fn contains(&self, point: Vec2) -> bool {
        point.x >= self.min.x
            && point.x <= self.max.x
            && point.y >= self.min.y
            && point.y <= self.max.y
    }
}

/// The play field in logical pixels
#[derive(Debug, Clone)]
pub struct GameMap {
    pub width: f32,
    pub height: f32,
}

impl GameMap {
    pub fn new(config: &Config) -> Self {
        Self {
            width: config.logical_width,
            height: config.logical_height,
        }
    }

    /// Whole logical canvas
    pub fn bounds(&self) -> Aabb {
        Aabb::from_pos_size(Vec2::ZERO, Vec2::new(self.width, self.height))
    }

    /// Field outline, offset half a pixel so a 1px stroke lands on whole pixels
    pub fn outline(&self) -> Aabb {
        Aabb::from_pos_size(
            Vec2::new(0.5, 0.5),
            Vec2::new(self.width - 2.0, self.height - 2.0),
        )
    }

    pub fn player_spawn(&self) -> Vec2 {
        Vec2::from(Params::PLAYER_SPAWN)
    }

    pub fn enemy_spawn(&self) -> Vec2 {
        Vec2::from(Params::ENEMY_SPAWN)
    }

    pub fn ball_spawn(&self) -> Vec2 {
        Vec2::from(Params::BALL_SPAWN)
    }
}
