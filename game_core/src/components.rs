use crate::{Aabb, Params};
use glam::Vec2;

/// Identity tag carried by every object on the field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ObjectId {
    Player,
    Enemy,
    Ball,
}

impl ObjectId {
    pub fn as_str(&self) -> &'static str {
        match self {
            ObjectId::Player => "player",
            ObjectId::Enemy => "enemy",
            ObjectId::Ball => "ball",
        }
    }
}

/// Which side a paddle belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaddleSide {
    Player,
    Enemy,
}

impl From<PaddleSide> for ObjectId {
    fn from(side: PaddleSide) -> Self {
        match side {
            PaddleSide::Player => ObjectId::Player,
            PaddleSide::Enemy => ObjectId::Enemy,
        }
    }
}

/// Paddle or ball, positioned by its top-left corner in logical pixels
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GameObject {
    pub pos: Vec2,
    pub size: Vec2,
    pub id: ObjectId,
}

impl GameObject {
    pub const PADDLE_SIZE: Vec2 = Vec2::new(Params::PADDLE_WIDTH, Params::PADDLE_HEIGHT);
    pub const BALL_SIZE: Vec2 = Vec2::new(Params::BALL_SIZE, Params::BALL_SIZE);

    pub fn paddle(x: f32, y: f32, side: PaddleSide) -> Self {
        Self {
            pos: Vec2::new(x, y),
            size: Self::PADDLE_SIZE,
            id: side.into(),
        }
    }

    pub fn ball(x: f32, y: f32) -> Self {
        Self {
            pos: Vec2::new(x, y),
            size: Self::BALL_SIZE,
            id: ObjectId::Ball,
        }
    }

    pub fn bounds(&self) -> Aabb {
        Aabb::from_pos_size(self.pos, self.size)
    }
}

/// Render layering; lower values are drawn first
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct DrawOrder(pub u32);
