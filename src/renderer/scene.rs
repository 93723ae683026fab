//! Frame description: which sprites and text to draw for the current mode

use glam::{Vec2, Vec3};

use crate::sim::{Facing, GameMode, GameState};

/// Texture identifiers known to the host resource manager
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Texture {
    MenuBackground,
    LevelOneBackground,
    LevelTwoBackground,
    LevelThreeBackground,
    LevelFourBackground,
    BackdropOne,
    BackdropTwo,
    Player,
    Block,
    BlockSolid,
}

impl Texture {
    pub fn as_str(&self) -> &'static str {
        match self {
            Texture::MenuBackground => "background",
            Texture::LevelOneBackground => "background2",
            Texture::LevelTwoBackground => "background3",
            Texture::LevelThreeBackground => "background4",
            Texture::LevelFourBackground => "background5",
            Texture::BackdropOne => "back1",
            Texture::BackdropTwo => "back2",
            Texture::Player => "player",
            Texture::Block => "block",
            Texture::BlockSolid => "block_solid",
        }
    }

    /// Background layers for a level, back to front
    pub fn backgrounds_for_level(level: usize) -> &'static [Texture] {
        match level {
            1 => &[Texture::LevelOneBackground],
            2 => &[Texture::BackdropTwo, Texture::LevelTwoBackground],
            3 => &[Texture::BackdropOne, Texture::LevelThreeBackground],
            4 => &[Texture::BackdropOne, Texture::LevelFourBackground],
            _ => &[],
        }
    }
}

/// A textured quad
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sprite {
    pub texture: Texture,
    pub pos: Vec2,
    pub size: Vec2,
    pub color: Vec3,
    pub flip_x: bool,
}

impl Sprite {
    fn plain(texture: Texture, pos: Vec2, size: Vec2) -> Self {
        Self {
            texture,
            pos,
            size,
            color: Vec3::ONE,
            flip_x: false,
        }
    }
}

/// Host renderer
pub trait Renderer {
    fn draw_sprite(&mut self, sprite: Sprite);
    fn draw_text(&mut self, text: &str, pos: Vec2, scale: f32, color: Vec3);
}

/// One recorded draw call
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Sprite(Sprite),
    Text {
        text: String,
        pos: Vec2,
        scale: f32,
        color: Vec3,
    },
}

/// Renderer that records draw calls in order
#[derive(Debug, Default, Clone)]
pub struct DrawList {
    pub commands: Vec<DrawCommand>,
}

impl DrawList {
    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.commands.iter().filter_map(|c| match c {
            DrawCommand::Text { text, .. } => Some(text.as_str()),
            DrawCommand::Sprite(_) => None,
        })
    }

    pub fn sprites(&self) -> impl Iterator<Item = &Sprite> {
        self.commands.iter().filter_map(|c| match c {
            DrawCommand::Sprite(s) => Some(s),
            DrawCommand::Text { .. } => None,
        })
    }
}

impl Renderer for DrawList {
    fn draw_sprite(&mut self, sprite: Sprite) {
        self.commands.push(DrawCommand::Sprite(sprite));
    }

    fn draw_text(&mut self, text: &str, pos: Vec2, scale: f32, color: Vec3) {
        self.commands.push(DrawCommand::Text {
            text: text.to_string(),
            pos,
            scale,
            color,
        });
    }
}

/// Describe the current frame to `renderer`. Reads state only.
pub fn render_scene(state: &GameState, renderer: &mut impl Renderer) {
    let view = state.view_size();

    match state.mode {
        GameMode::Menu => {
            renderer.draw_sprite(Sprite::plain(Texture::MenuBackground, Vec2::ZERO, view));
        }
        GameMode::Active => {
            for &texture in Texture::backgrounds_for_level(state.level_index) {
                renderer.draw_sprite(Sprite::plain(texture, Vec2::ZERO, view));
            }

            for brick in state.active_level().remaining() {
                let texture = if brick.is_solid {
                    Texture::BlockSolid
                } else {
                    Texture::Block
                };
                renderer.draw_sprite(Sprite {
                    color: brick.color,
                    ..Sprite::plain(texture, brick.pos, brick.size)
                });
            }

            let actor = &state.actor;
            renderer.draw_sprite(Sprite {
                flip_x: actor.facing == Facing::Left,
                ..Sprite::plain(Texture::Player, actor.pos, actor.size())
            });

            if state.level_index > 0 {
                renderer.draw_text(
                    &format!("Level: {}", state.level_index),
                    Vec2::new(100.0, 5.0),
                    1.5,
                    Vec3::ONE,
                );
            }
            renderer.draw_text(
                &format!("point : {}", state.score),
                Vec2::new(5.0, 300.0),
                1.5,
                Vec3::ONE,
            );
        }
        GameMode::Win => {
            let x = view.x / 2.0 - 150.0;
            let y = view.y / 2.0;
            renderer.draw_text(
                "You WON!!! Thanks for playing",
                Vec2::new(x, y - 20.0),
                1.0,
                Vec3::new(0.0, 1.0, 0.0),
            );
            renderer.draw_text(
                "Press space to RETRY, esc to EXIT",
                Vec2::new(x, y),
                1.0,
                Vec3::new(1.0, 1.0, 0.0),
            );
            renderer.draw_text(
                &format!("Your Point is {}", state.score),
                Vec2::new(x, y + 20.0),
                1.0,
                Vec3::new(1.0, 0.0, 0.0),
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::Settings;
    use crate::sim::Level;

    fn state() -> GameState {
        let level = Level::load("1 2\n0 3\n", 800.0, 600.0).unwrap();
        GameState::new(Settings::default(), vec![level; 5])
    }

    #[test]
    fn test_menu_draws_background_only() {
        let mut list = DrawList::default();
        render_scene(&state(), &mut list);
        assert_eq!(list.commands.len(), 1);
        assert_eq!(
            list.sprites().next().map(|s| s.texture),
            Some(Texture::MenuBackground)
        );
    }

    #[test]
    fn test_active_draws_layers_bricks_player_hud() {
        let mut state = state();
        state.mode = GameMode::Active;
        state.level_index = 2;
        state.score = 4;
        state.levels[2].bricks[1].destroyed = true;
        state.actor.facing = Facing::Left;

        let mut list = DrawList::default();
        render_scene(&state, &mut list);

        let textures: Vec<Texture> = list.sprites().map(|s| s.texture).collect();
        assert_eq!(
            textures,
            vec![
                Texture::BackdropTwo,
                Texture::LevelTwoBackground,
                Texture::BlockSolid,
                Texture::Block,
                Texture::Player,
            ]
        );
        assert!(list.sprites().last().is_some_and(|s| s.flip_x));
        let texts: Vec<&str> = list.texts().collect();
        assert_eq!(texts, vec!["Level: 2", "point : 4"]);
    }

    #[test]
    fn test_win_screen_shows_score() {
        let mut state = state();
        state.mode = GameMode::Win;
        state.level_index = 4;
        state.score = 17;

        let mut list = DrawList::default();
        render_scene(&state, &mut list);

        assert_eq!(list.sprites().count(), 0);
        assert!(list.texts().any(|t| t == "Your Point is 17"));
    }

    #[test]
    fn test_texture_names() {
        assert_eq!(Texture::BlockSolid.as_str(), "block_solid");
        assert_eq!(Texture::LevelFourBackground.as_str(), "background5");
        assert!(Texture::backgrounds_for_level(0).is_empty());
    }
}
