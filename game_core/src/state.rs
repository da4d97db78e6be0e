//! Logical game state
//!
//! Host handles (canvas, 2D context, audio) are owned by the client next
//! to this state; nothing here touches the browser.

use crate::{Config, DrawOrder, GameMap, GameObject, ObjectId, PaddleSide};
use hecs::World;

pub struct GameState {
    pub world: World,
    pub width: f32,
    pub height: f32,
    // Fixed at construction; resizing never recomputes it
    aspect_ratio: f64,
    pub map: GameMap,
    pub config: Config,
}

impl GameState {
    /// Build the field with the player paddle, enemy paddle and ball, in that order
    pub fn new(config: &Config) -> Self {
        let map = GameMap::new(config);
        let mut world = World::new();

        let player = map.player_spawn();
        let enemy = map.enemy_spawn();
        let ball = map.ball_spawn();
        let objects = [
            GameObject::paddle(player.x, player.y, PaddleSide::Player),
            GameObject::paddle(enemy.x, enemy.y, PaddleSide::Enemy),
            GameObject::ball(ball.x, ball.y),
        ];
        for (order, object) in objects.into_iter().enumerate() {
            world.spawn((object, DrawOrder(order as u32)));
        }

        log::info!(
            "Game state created: {}x{}, {} objects",
            config.logical_width,
            config.logical_height,
            objects.len()
        );

        Self {
            world,
            width: config.logical_width,
            height: config.logical_height,
            aspect_ratio: config.aspect_ratio(),
            map,
            config: config.clone(),
        }
    }

    pub fn aspect_ratio(&self) -> f64 {
        self.aspect_ratio
    }

    /// All objects, in draw order
    pub fn objects(&self) -> Vec<GameObject> {
        let mut objects: Vec<(DrawOrder, GameObject)> = self
            .world
            .query::<(&GameObject, &DrawOrder)>()
            .iter()
            .map(|(_e, (object, order))| (*order, *object))
            .collect();
        objects.sort_by_key(|(order, _)| *order);
        objects.into_iter().map(|(_, object)| object).collect()
    }

    pub fn object(&self, id: ObjectId) -> Option<GameObject> {
        self.world
            .query::<&GameObject>()
            .iter()
            .map(|(_e, object)| *object)
            .find(|object| object.id == id)
    }

    pub fn len(&self) -> usize {
        self.world.query::<&GameObject>().iter().count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
