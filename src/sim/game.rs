//! Game state: the two players, the turn indicator and the wind

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::player::Player;
use crate::consts::*;
use crate::error::SnapshotError;

/// Serializable position in the wind sequence
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RngState {
    pub seed: u64,
    /// Winds drawn so far
    pub draws: u64,
}

impl RngState {
    pub fn new(seed: u64) -> Self {
        Self { seed, draws: 0 }
    }

    /// Rebuild the generator at this position
    pub fn to_rng(&self) -> Pcg32 {
        let mut rng = Pcg32::seed_from_u64(self.seed);
        for _ in 0..self.draws {
            draw_wind(&mut rng);
        }
        rng
    }
}

fn draw_wind(rng: &mut Pcg32) -> f32 {
    rng.random_range(-MAX_WIND..MAX_WIND)
}

/// Complete model state for one match
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "GameSnapshot")]
pub struct Game {
    /// Run seed for reproducible wind
    pub seed: u64,
    rng_state: RngState,
    players: [Player; 2],
    /// Index of the player whose turn it is (0 or 1)
    current: usize,
    wind: f32,
    cannon_size: f32,
    ball_size: f32,
    #[serde(skip)]
    rng: Pcg32,
}

/// Wire form of `Game`, checked before it becomes one
#[derive(Deserialize)]
struct GameSnapshot {
    seed: u64,
    rng_state: RngState,
    players: [Player; 2],
    current: usize,
    wind: f32,
    cannon_size: f32,
    ball_size: f32,
}

impl TryFrom<GameSnapshot> for Game {
    type Error = SnapshotError;

    fn try_from(snapshot: GameSnapshot) -> Result<Self, Self::Error> {
        if snapshot.current >= snapshot.players.len() {
            return Err(SnapshotError::TurnOutOfRange(snapshot.current));
        }
        if snapshot.rng_state.seed != snapshot.seed {
            return Err(SnapshotError::SeedMismatch {
                seed: snapshot.seed,
                rng_seed: snapshot.rng_state.seed,
            });
        }
        Ok(Self {
            seed: snapshot.seed,
            rng_state: snapshot.rng_state,
            players: snapshot.players,
            current: snapshot.current,
            wind: snapshot.wind,
            cannon_size: snapshot.cannon_size,
            ball_size: snapshot.ball_size,
            rng: snapshot.rng_state.to_rng(),
        })
    }
}

impl Game {
    /// Create a new game: blue on the left, red on the right, blue to play
    pub fn new(cannon_size: f32, ball_size: f32, seed: u64) -> Self {
        let mut game = Self {
            seed,
            players: [
                Player::new(LEFT_PLAYER_X, LEFT_PLAYER_COLOR, false),
                Player::new(RIGHT_PLAYER_X, RIGHT_PLAYER_COLOR, true),
            ],
            current: 0,
            wind: 0.0,
            cannon_size,
            ball_size,
            rng_state: RngState::new(seed),
            rng: Pcg32::seed_from_u64(seed),
        };
        game.new_round();
        game
    }

    /// Replace the players (e.g. custom positions or colors)
    pub fn with_players(mut self, players: [Player; 2]) -> Self {
        self.players = players;
        self
    }

    pub fn players(&self) -> &[Player; 2] {
        &self.players
    }

    pub fn players_mut(&mut self) -> &mut [Player; 2] {
        &mut self.players
    }

    pub fn current_player_number(&self) -> usize {
        self.current
    }

    /// Index of the player waiting for their turn
    ///
    /// Only meaningful for exactly two players.
    pub fn other_player_number(&self) -> usize {
        1 - self.current
    }

    pub fn current_player(&self) -> &Player {
        &self.players[self.current]
    }

    pub fn other_player(&self) -> &Player {
        &self.players[self.other_player_number()]
    }

    /// Hand the turn to the other player
    pub fn next_player(&mut self) {
        self.current = self.other_player_number();
    }

    /// Start a new round: draw a fresh wind
    pub fn new_round(&mut self) {
        self.wind = draw_wind(&mut self.rng);
        self.rng_state.draws += 1;
    }

    pub fn current_wind(&self) -> f32 {
        self.wind
    }

    pub fn set_current_wind(&mut self, wind: f32) {
        self.wind = wind;
    }

    pub fn cannon_size(&self) -> f32 {
        self.cannon_size
    }

    pub fn ball_size(&self) -> f32 {
        self.ball_size
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_game_layout() {
        let game = Game::new(10.0, 3.0, 42);
        assert_eq!(game.current_player_number(), 0);
        assert_eq!(game.players()[0].x, LEFT_PLAYER_X);
        assert_eq!(game.players()[0].color, "blue");
        assert!(!game.players()[0].reversed);
        assert_eq!(game.players()[1].x, RIGHT_PLAYER_X);
        assert_eq!(game.players()[1].color, "red");
        assert!(game.players()[1].reversed);
        assert_eq!(game.cannon_size(), 10.0);
        assert_eq!(game.ball_size(), 3.0);
    }

    #[test]
    fn test_turns_alternate() {
        let mut game = Game::new(10.0, 3.0, 42);
        for expected in [1, 0, 1, 0] {
            game.next_player();
            assert_eq!(game.current_player_number(), expected);
            assert_eq!(game.other_player_number(), 1 - expected);
        }
    }

    #[test]
    fn test_wind_in_range_and_seeded() {
        let mut a = Game::new(10.0, 3.0, 7);
        let mut b = Game::new(10.0, 3.0, 7);
        for _ in 0..100 {
            assert_eq!(a.current_wind(), b.current_wind());
            assert!((-MAX_WIND..MAX_WIND).contains(&a.current_wind()));
            a.new_round();
            b.new_round();
        }
    }

    #[test]
    fn test_set_wind() {
        let mut game = Game::new(10.0, 3.0, 1);
        game.set_current_wind(2.5);
        assert_eq!(game.current_wind(), 2.5);
    }

    #[test]
    fn test_serde_snapshot() {
        let mut game = Game::new(10.0, 3.0, 99);
        game.new_round();
        game.next_player();
        let json = serde_json::to_string(&game).unwrap();
        let mut restored: Game = serde_json::from_str(&json).unwrap();
        assert_eq!(restored.players(), game.players());
        assert_eq!(restored.current_player_number(), 1);
        assert_eq!(restored.current_wind(), game.current_wind());

        // The restored game continues the same wind sequence
        for _ in 0..5 {
            game.new_round();
            restored.new_round();
            assert_eq!(restored.current_wind(), game.current_wind());
        }
    }

    #[test]
    fn test_restored_wind_matches_fresh_game() {
        let mut fresh = Game::new(10.0, 3.0, 7);
        let json = serde_json::to_string(&Game::new(10.0, 3.0, 7)).unwrap();
        let mut restored: Game = serde_json::from_str(&json).unwrap();
        fresh.new_round();
        restored.new_round();
        assert_eq!(restored.current_wind(), fresh.current_wind());
    }

    #[test]
    fn test_snapshot_rejects_bad_turn() {
        let mut value = serde_json::to_value(Game::new(10.0, 3.0, 1)).unwrap();
        value["current"] = serde_json::json!(2);
        let err = serde_json::from_value::<Game>(value).unwrap_err();
        assert!(err.to_string().contains("0 or 1"), "{err}");
    }

    #[test]
    fn test_snapshot_rejects_mismatched_seed() {
        let mut value = serde_json::to_value(Game::new(10.0, 3.0, 1)).unwrap();
        value["rng_state"]["seed"] = serde_json::json!(2);
        assert!(serde_json::from_value::<Game>(value).is_err());
    }
}
