use serde::{Deserialize, Serialize};

use crate::fields::Field;
use crate::score::Score;

/// One recorded attempt: the guess as submitted and the score the engine
/// assigned to it. Immutable once appended to a game's move list.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct Move {
    /// 1-based move number, strictly increasing with no gaps
    move_number: u32,
    /// The guessed fields, one per hole
    guess: Vec<Field>,
    /// Engine-assigned score, never set by the caller
    score: Score,
}

impl Move {
    pub(crate) fn new(move_number: u32, guess: Vec<Field>, score: Score) -> Self {
        Self {
            move_number,
            guess,
            score,
        }
    }

    pub fn move_number(&self) -> u32 {
        self.move_number
    }
    pub fn guess(&self) -> &[Field] {
        &self.guess
    }
    pub fn score(&self) -> &Score {
        &self.score
    }
}
