//! Turn loop
//!
//! One turn: ask the current player for an aim, fire, animate the shot until
//! it stops, score a hit against the other player, then pass the turn.

use std::time::{Duration, Instant};

use crate::error::{GameError, RenderError};
use crate::graphics::GraphicGame;
use crate::renderer::{Surface, WindowSystem};
use crate::settings::Settings;
use crate::sim::Game;
use crate::ui::{DialogChoice, InputDialog};

/// How a turn ended
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TurnOutcome {
    /// The shot hit the other cannon; `shooter` scored and a new round began
    Hit { shooter: usize },
    /// The shot landed `distance` away from the other cannon (signed), or
    /// never landed (`None`) before the tick cap ended its flight
    Miss { shooter: usize, distance: Option<f32> },
    /// The player chose Quit or closed the dialog
    Quit,
}

/// Sleeps so that consecutive frames are at least `interval` apart
#[derive(Debug)]
struct FramePacer {
    interval: Option<Duration>,
    last: Option<Instant>,
}

impl FramePacer {
    fn new(interval: Option<Duration>) -> Self {
        Self { interval, last: None }
    }

    fn wait(&mut self) {
        let Some(interval) = self.interval else {
            return;
        };
        if let Some(last) = self.last {
            let elapsed = last.elapsed();
            if elapsed < interval {
                std::thread::sleep(interval - elapsed);
            }
        }
        self.last = Some(Instant::now());
    }
}

/// A running match
pub struct Session<W: Surface> {
    game: GraphicGame<W>,
    settings: Settings,
    pacer: FramePacer,
}

impl<W: Surface> Session<W> {
    /// Create the model from `settings` and open the game window
    pub fn open<S>(windows: &mut S, settings: Settings) -> Result<Self, RenderError>
    where
        S: WindowSystem<Window = W>,
    {
        let seed = settings.effective_seed();
        log::info!("Starting game with seed {seed}");
        let game = Game::new(settings.cannon_size, settings.ball_size, seed);
        Self::with_game(windows, game, settings)
    }

    /// Open the game window for an existing model
    pub fn with_game<S>(windows: &mut S, game: Game, settings: Settings) -> Result<Self, RenderError>
    where
        S: WindowSystem<Window = W>,
    {
        let pacer = FramePacer::new(settings.frame_interval());
        Ok(Self {
            game: GraphicGame::open(windows, game)?,
            settings,
            pacer,
        })
    }

    pub fn game(&self) -> &GraphicGame<W> {
        &self.game
    }

    pub fn game_mut(&mut self) -> &mut GraphicGame<W> {
        &mut self.game
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Ask the current player for (angle, velocity)
    ///
    /// Unparsable input re-opens the dialog with the previous aim. Returns
    /// `None` when the player quits.
    pub fn prompt_aim<S>(&mut self, windows: &mut S) -> Result<Option<(f32, f32)>, GameError>
    where
        S: WindowSystem,
    {
        loop {
            let (angle, velocity) = self.game.current_player().aim();
            let wind = self.game.current_wind();

            let mut dialog = InputDialog::open(windows, angle, velocity, wind)?;
            let choice = dialog.interact();
            let values = match choice {
                DialogChoice::Quit => None,
                DialogChoice::Fire => Some(dialog.values()),
            };
            dialog.close();

            match values {
                None => return Ok(None),
                Some(Ok(aim)) => return Ok(Some(aim)),
                Some(Err(GameError::Parse(e))) => log::warn!("{e}; asking again"),
                Some(Err(e)) => return Err(e),
            }
        }
    }

    /// Fire for the current player and animate until the ball stops
    ///
    /// Returns the signed distance from the landing point to the other
    /// player's cannon, or `None` if the tick cap stopped the animation
    /// while the ball was still flying.
    pub fn fire(&mut self, angle: f32, velocity: f32) -> Result<Option<f32>, RenderError> {
        let dt = self.settings.tick_dt;
        let max_ticks = self.settings.max_ticks_per_shot;
        let pacer = &mut self.pacer;

        let mut shot = self.game.current_player().fire(angle, velocity)?;
        let mut ticks = 0;
        while shot.is_moving() {
            if ticks >= max_ticks {
                log::warn!(
                    "Shot still flying at ({:.2}, {:.2}) after {ticks} ticks, stopping animation",
                    shot.x(),
                    shot.y()
                );
                return Ok(None);
            }
            shot.update(dt)?;
            shot.window_mut().present()?;
            pacer.wait();
            ticks += 1;
        }
        let landed = shot.projectile();
        log::debug!("Shot stopped at ({:.2}, {:.2}) after {ticks} ticks", landed.x(), landed.y());

        Ok(Some(self.game.other_player().projectile_distance(&landed)))
    }

    /// Play one full turn
    pub fn play_turn<S>(&mut self, windows: &mut S) -> Result<TurnOutcome, GameError>
    where
        S: WindowSystem,
    {
        let shooter = self.game.current_player_number();
        let Some((angle, velocity)) = self.prompt_aim(windows)? else {
            log::info!("Player {shooter} quit");
            return Ok(TurnOutcome::Quit);
        };

        let distance = self.fire(angle, velocity)?;
        // Wind only changes after a hit; a miss keeps the round going
        let outcome = if distance == Some(0.0) {
            self.game.current_player().increase_score()?;
            self.game.new_round();
            log::info!(
                "Player {shooter} hit! Scores {:?}, new wind {:.2}",
                self.game.scores(),
                self.game.current_wind()
            );
            TurnOutcome::Hit { shooter }
        } else {
            match distance {
                Some(d) => log::info!("Player {shooter} missed by {d:.2}"),
                None => log::info!("Player {shooter} missed, the shot never landed"),
            }
            TurnOutcome::Miss { shooter, distance }
        };

        self.game.next_player();
        Ok(outcome)
    }

    /// Play turns until someone quits; returns the final scores
    pub fn run<S>(&mut self, windows: &mut S) -> Result<[u32; 2], GameError>
    where
        S: WindowSystem,
    {
        while self.play_turn(windows)? != TurnOutcome::Quit {}
        let scores = self.game.scores();
        log::info!("Game over, final scores {scores:?}");
        Ok(scores)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unpaced_pacer_does_not_sleep() {
        let mut pacer = FramePacer::new(None);
        let start = Instant::now();
        for _ in 0..1000 {
            pacer.wait();
        }
        assert!(start.elapsed() < Duration::from_millis(100));
        assert!(pacer.last.is_none());
    }

    #[test]
    fn test_pacer_spaces_frames() {
        let mut pacer = FramePacer::new(Some(Duration::from_millis(5)));
        let start = Instant::now();
        for _ in 0..4 {
            pacer.wait();
        }
        // First frame is free, the next three wait
        assert!(start.elapsed() >= Duration::from_millis(15));
    }
}
