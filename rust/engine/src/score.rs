use serde::{Deserialize, Serialize};

/// Per-hole mark in a positional score.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum SlotMark {
    /// Guess value does not appear among the remaining code values
    Incorrect,
    /// Guess value appears in the code but at another hole
    WrongPosition,
    /// Guess value equals the code value at this hole
    Correct,
}

/// Outcome of scoring one guess against the code, shaped by the game's
/// scoring flavor.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub enum Score {
    /// Folded black/white counts; `correct + wrong_position` never exceeds
    /// the number of holes
    Aggregate { correct: u32, wrong_position: u32 },
    /// One mark per hole, in hole order
    Positional(Vec<SlotMark>),
    /// Dual-attribute counts: full matches, full-value matches at the wrong
    /// hole, and matches on exactly one of the two channels
    SplitAttribute {
        correct: u32,
        wrong_position: u32,
        partial: u32,
    },
}

impl Score {
    /// Whether this score means the guess reproduced the whole code.
    pub fn is_win(&self, holes: usize) -> bool {
        match self {
            Score::Aggregate { correct, .. } => *correct as usize == holes,
            Score::Positional(marks) => {
                marks.len() == holes && marks.iter().all(|m| *m == SlotMark::Correct)
            }
            Score::SplitAttribute { correct, .. } => *correct as usize == holes,
        }
    }

    /// Number of full matches, regardless of flavor.
    pub fn correct(&self) -> u32 {
        match self {
            Score::Aggregate { correct, .. } => *correct,
            Score::Positional(marks) => {
                marks.iter().filter(|m| **m == SlotMark::Correct).count() as u32
            }
            Score::SplitAttribute { correct, .. } => *correct,
        }
    }
}
