//! Game presenter: the game window and both player presenters

use glam::Vec2;

use super::player::{GraphicPlayer, PlayerHandles};
use crate::consts::{FIELD_X_MAX, FIELD_X_MIN};
use crate::error::RenderError;
use crate::renderer::{Shape, ShapeId, Style, Surface, WindowSpec, WindowSystem};
use crate::sim::Game;

/// The game model drawn into its own window
#[derive(Debug)]
pub struct GraphicGame<W: Surface> {
    game: Game,
    window: W,
    ground: ShapeId,
    /// One entry per model player, same order
    handles: [PlayerHandles; 2],
}

impl<W: Surface> GraphicGame<W> {
    /// Open the "Cannon game" window and draw the field
    pub fn open<S>(windows: &mut S, game: Game) -> Result<Self, RenderError>
    where
        S: WindowSystem<Window = W>,
    {
        let window = windows.open(&WindowSpec::game())?;
        Self::new(window, game)
    }

    /// Draw the field into an already open window
    pub fn new(mut window: W, game: Game) -> Result<Self, RenderError> {
        let ground = window.draw(
            Shape::Line {
                from: Vec2::new(FIELD_X_MIN, 0.0),
                to: Vec2::new(FIELD_X_MAX, 0.0),
            },
            Style::default(),
        )?;

        let cannon_size = game.cannon_size();
        let [left, right] = game.players();
        let handles = [
            PlayerHandles::draw(left, cannon_size, &mut window)?,
            PlayerHandles::draw(right, cannon_size, &mut window)?,
        ];

        log::info!(
            "Game window ready: players at x={} and x={}, wind {:.2}",
            left.x,
            right.x,
            game.current_wind()
        );

        Ok(Self {
            game,
            window,
            ground,
            handles,
        })
    }

    fn view(&mut self, index: usize) -> GraphicPlayer<'_, W> {
        let wind = self.game.current_wind();
        let cannon_size = self.game.cannon_size();
        let ball_size = self.game.ball_size();
        GraphicPlayer {
            index,
            player: &mut self.game.players_mut()[index],
            handles: &mut self.handles[index],
            window: &mut self.window,
            wind,
            cannon_size,
            ball_size,
        }
    }

    /// Player presenter by roster index (0 or 1)
    pub fn player(&mut self, index: usize) -> Option<GraphicPlayer<'_, W>> {
        if index < self.handles.len() {
            Some(self.view(index))
        } else {
            None
        }
    }

    pub fn current_player(&mut self) -> GraphicPlayer<'_, W> {
        let index = self.current_player_number();
        self.view(index)
    }

    /// The player not on turn (`1 - current`; two players only)
    pub fn other_player(&mut self) -> GraphicPlayer<'_, W> {
        let index = self.game.other_player_number();
        self.view(index)
    }

    pub fn current_player_number(&self) -> usize {
        self.game.current_player_number()
    }

    pub fn next_player(&mut self) {
        self.game.next_player();
    }

    pub fn new_round(&mut self) {
        self.game.new_round();
    }

    pub fn current_wind(&self) -> f32 {
        self.game.current_wind()
    }

    pub fn set_current_wind(&mut self, wind: f32) {
        self.game.set_current_wind(wind);
    }

    pub fn cannon_size(&self) -> f32 {
        self.game.cannon_size()
    }

    pub fn ball_size(&self) -> f32 {
        self.game.ball_size()
    }

    /// Scores of both players, in roster order
    pub fn scores(&self) -> [u32; 2] {
        let [left, right] = self.game.players();
        [left.score(), right.score()]
    }

    pub fn model(&self) -> &Game {
        &self.game
    }

    pub fn ground(&self) -> ShapeId {
        self.ground
    }

    pub fn window(&self) -> &W {
        &self.window
    }

    pub fn window_mut(&mut self) -> &mut W {
        &mut self.window
    }
}
