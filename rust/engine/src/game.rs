use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::GameError;
use crate::fields::Field;
use crate::game_types::GameType;
use crate::matching;
use crate::moves::Move;
use crate::rules;
use crate::score::Score;

/// Unique identifier for a game.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct GameId(Uuid);

impl GameId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn as_uuid(&self) -> Uuid {
        self.0
    }
}

impl Default for GameId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for GameId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Aggregate root for one running game: the secret code, the recorded moves
/// and the lifecycle flags. The game is open while `end_time` is unset; the
/// transition to closed is one-way and applied only by [`Game::submit_move`].
///
/// The engine performs no I/O and no locking. Callers submitting moves
/// concurrently against the same game must serialize them; different games
/// share no state.
#[derive(Debug, Clone)]
pub struct Game {
    id: GameId,
    game_type: GameType,
    /// The secret code; kept private so it can never leak mid-game
    code: Vec<Field>,
    player_name: String,
    start_time: DateTime<Utc>,
    end_time: Option<DateTime<Utc>>,
    moves: Vec<Move>,
    is_victory: bool,
}

impl Game {
    /// Starts a game over `game_type` with the secret `code` supplied by the
    /// code generator.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::InvalidGuessLength`] or
    /// [`GameError::InvalidGuessValue`] when the supplied code does not fit
    /// the game type, so a game can never hold an unscoreable secret.
    pub fn new(
        game_type: GameType,
        code: Vec<Field>,
        player_name: impl Into<String>,
    ) -> Result<Self, GameError> {
        if code.len() != game_type.holes() {
            return Err(GameError::InvalidGuessLength {
                expected: game_type.holes(),
                actual: code.len(),
            });
        }
        for (position, field) in code.iter().enumerate() {
            if !game_type.is_legal(field) {
                return Err(GameError::InvalidGuessValue {
                    position,
                    value: field.to_string(),
                });
            }
        }
        Ok(Self {
            id: GameId::new(),
            game_type,
            code,
            player_name: player_name.into(),
            start_time: Utc::now(),
            end_time: None,
            moves: Vec::new(),
            is_victory: false,
        })
    }

    pub fn id(&self) -> GameId {
        self.id
    }
    pub fn game_type(&self) -> &GameType {
        &self.game_type
    }
    pub fn player_name(&self) -> &str {
        &self.player_name
    }
    pub fn start_time(&self) -> DateTime<Utc> {
        self.start_time
    }
    pub fn end_time(&self) -> Option<DateTime<Utc>> {
        self.end_time
    }
    pub fn moves(&self) -> &[Move] {
        &self.moves
    }
    pub fn is_victory(&self) -> bool {
        self.is_victory
    }

    pub fn is_open(&self) -> bool {
        self.end_time.is_none()
    }

    pub fn last_move_number(&self) -> u32 {
        self.moves.last().map(|m| m.move_number()).unwrap_or(0)
    }

    pub(crate) fn code(&self) -> &[Field] {
        &self.code
    }

    /// Validates and scores one guess, records the move and applies the
    /// end-of-game transition.
    ///
    /// A validation failure leaves the game completely unmodified: no move is
    /// appended and the lifecycle flags stay as they were. On success the
    /// move is appended with the next move number; a full-win score sets
    /// `end_time` and the victory flag, and reaching the move limit without
    /// a win sets `end_time` alone.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::GameClosed`] for a finished game, otherwise any
    /// error of [`crate::rules::validate_guess`].
    pub fn submit_move(
        &mut self,
        guess: Vec<Field>,
        claimed_move_number: u32,
    ) -> Result<Score, GameError> {
        if !self.is_open() {
            return Err(GameError::GameClosed);
        }
        let move_number = rules::validate_guess(
            &self.game_type,
            &guess,
            self.last_move_number(),
            claimed_move_number,
        )?;

        let score = matching::evaluate(&self.code, &guess, self.game_type.scoring());
        let won = score.is_win(self.game_type.holes());
        self.moves.push(Move::new(move_number, guess, score.clone()));

        if won {
            self.is_victory = true;
            self.end_time = Some(Utc::now());
        } else if self.moves.len() as u32 >= self.game_type.max_moves() {
            self.end_time = Some(Utc::now());
        }
        Ok(score)
    }
}
