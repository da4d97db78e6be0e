//! Field renderer
//!
//! Draws against any [`Surface`]; the browser client backs it with a
//! Canvas2D context. Dimensions always come from the state being drawn.

use crate::{Aabb, GameObject, GameState};

/// Abstract 2D drawing target
pub trait Surface {
    fn fill_rect(&mut self, rect: Aabb, color: &str);
    fn stroke_rect(&mut self, rect: Aabb, color: &str);
}

/// Fill the whole logical canvas with the background color
pub fn clear_screen<S: Surface + ?Sized>(state: &GameState, surface: &mut S) {
    surface.fill_rect(state.map.bounds(), state.config.background_color);
}

/// Stroke the play-area outline in the foreground color
pub fn draw_field_outline<S: Surface + ?Sized>(state: &GameState, surface: &mut S) {
    surface.stroke_rect(state.map.outline(), state.config.foreground_color);
}

pub fn draw_game_object<S: Surface + ?Sized>(
    state: &GameState,
    surface: &mut S,
    object: &GameObject,
) {
    surface.fill_rect(object.bounds(), state.config.foreground_color);
}

/// Draw one frame: clear, outline, then every object in draw order
pub fn draw<S: Surface + ?Sized>(state: &GameState, surface: &mut S) {
    clear_screen(state, surface);
    draw_field_outline(state, surface);
    for object in state.objects() {
        draw_game_object(state, surface, &object);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Config;
    use glam::Vec2;

    #[derive(Debug, Clone, PartialEq)]
    enum Op {
        Fill(Aabb, String),
        Stroke(Aabb, String),
    }

    #[derive(Default)]
    struct RecordingSurface {
        ops: Vec<Op>,
    }

    impl Surface for RecordingSurface {
        fn fill_rect(&mut self, rect: Aabb, color: &str) {
            self.ops.push(Op::Fill(rect, color.to_string()));
        }

        fn stroke_rect(&mut self, rect: Aabb, color: &str) {
            self.ops.push(Op::Stroke(rect, color.to_string()));
        }
    }

    #[test]
    fn test_clear_screen_fills_background() {
        let state = GameState::new(&Config::new());
        let mut surface = RecordingSurface::default();
        clear_screen(&state, &mut surface);
        assert_eq!(
            surface.ops,
            vec![Op::Fill(
                Aabb::new(Vec2::ZERO, Vec2::new(640.0, 360.0)),
                "#000".to_string()
            )]
        );
    }

    #[test]
    fn test_outline_uses_foreground() {
        let state = GameState::new(&Config::new());
        let mut surface = RecordingSurface::default();
        draw_field_outline(&state, &mut surface);
        assert_eq!(
            surface.ops,
            vec![Op::Stroke(state.map.outline(), "#fff".to_string())]
        );
    }

    #[test]
    fn test_draw_sequence() {
        let state = GameState::new(&Config::new());
        let mut surface = RecordingSurface::default();
        draw(&state, &mut surface);

        assert_eq!(surface.ops.len(), 5, "clear + outline + 3 objects");
        assert!(matches!(&surface.ops[0], Op::Fill(_, c) if c == "#000"));
        assert!(matches!(&surface.ops[1], Op::Stroke(_, c) if c == "#fff"));

        let expected = [
            Aabb::new(Vec2::new(10.0, 10.0), Vec2::new(15.0, 60.0)),
            Aabb::new(Vec2::new(625.0, 10.0), Vec2::new(630.0, 60.0)),
            Aabb::new(Vec2::new(320.0, 180.0), Vec2::new(325.0, 185.0)),
        ];
        for (op, rect) in surface.ops[2..].iter().zip(expected) {
            assert_eq!(op, &Op::Fill(rect, "#fff".to_string()));
        }
    }

    #[test]
    fn test_draw_is_repeatable() {
        let state = GameState::new(&Config::new());
        let mut first = RecordingSurface::default();
        let mut second = RecordingSurface::default();
        draw(&state, &mut first);
        draw(&state, &mut second);
        assert_eq!(first.ops, second.ops);
    }

    #[test]
    fn test_custom_colors() {
        let config = Config {
            background_color: "#123",
            foreground_color: "#abc",
            ..Config::new()
        };
        let state = GameState::new(&config);
        let mut surface = RecordingSurface::default();
        draw(&state, &mut surface);
        assert!(matches!(&surface.ops[0], Op::Fill(_, c) if c == "#123"));
        assert!(surface.ops[1..]
            .iter()
            .all(|op| matches!(op, Op::Fill(_, c) | Op::Stroke(_, c) if c == "#abc")));
    }
}
