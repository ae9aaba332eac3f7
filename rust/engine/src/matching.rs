use std::collections::HashMap;

use crate::fields::{Channel, Field};
use crate::game_types::Scoring;
use crate::score::{Score, SlotMark};

/// Scores `guess` against `code`, producing the [`Score`] shape for `scoring`.
///
/// Both sequences must have the same length; the caller enforces this before
/// scoring. The algorithm is duplicate-aware: a guessed value is credited at
/// most once per remaining occurrence in the code, tracked by an explicit
/// remaining-count multiset rather than set membership.
///
/// Two passes, both strictly left to right so the tie-break between identical
/// values is deterministic (first position wins):
///
/// 1. Full matches: positions where the guess equals the code on every
///    channel are marked and consumed on both sides immediately. Every
///    unmatched code field seeds the multiset.
/// 2. Wrong-position matches: each unmatched guess position is credited iff
///    the multiset still holds a remaining occurrence of its full value, and
///    that occurrence is then spent.
///
/// Split-attribute scoring runs a third pass over the positions and code
/// occurrences the first two passes left untouched, crediting a partial match
/// when exactly one of the two channels still has a remaining occurrence.
pub fn evaluate(code: &[Field], guess: &[Field], scoring: Scoring) -> Score {
    debug_assert_eq!(code.len(), guess.len());
    let holes = code.len();

    let mut marks = vec![SlotMark::Incorrect; holes];
    let mut remaining: HashMap<&Field, u32> = HashMap::new();
    for i in 0..holes {
        if guess[i] == code[i] {
            marks[i] = SlotMark::Correct;
        } else {
            *remaining.entry(&code[i]).or_insert(0) += 1;
        }
    }

    for i in 0..holes {
        if marks[i] == SlotMark::Correct {
            continue;
        }
        if let Some(count) = remaining.get_mut(&guess[i]) {
            if *count > 0 {
                *count -= 1;
                marks[i] = SlotMark::WrongPosition;
            }
        }
    }

    match scoring {
        Scoring::Positional => Score::Positional(marks),
        Scoring::Aggregate => {
            let (correct, wrong_position) = tally(&marks);
            Score::Aggregate {
                correct,
                wrong_position,
            }
        }
        Scoring::SplitAttribute => {
            let (correct, wrong_position) = tally(&marks);
            let partial = partial_matches(guess, &marks, &remaining);
            Score::SplitAttribute {
                correct,
                wrong_position,
                partial,
            }
        }
    }
}

fn tally(marks: &[SlotMark]) -> (u32, u32) {
    let correct = marks.iter().filter(|m| **m == SlotMark::Correct).count() as u32;
    let wrong_position = marks
        .iter()
        .filter(|m| **m == SlotMark::WrongPosition)
        .count() as u32;
    (correct, wrong_position)
}

/// Third pass for dual-attribute fields. The per-channel multisets are built
/// from the code occurrences neither earlier pass consumed; identical full
/// values carry identical channel values, so the leftover counts are enough
/// and no position bookkeeping is needed. A guess position not yet credited
/// earns a partial match iff exactly one channel has a remaining occurrence;
/// both channels available means no credit.
fn partial_matches(guess: &[Field], marks: &[SlotMark], remaining: &HashMap<&Field, u32>) -> u32 {
    let mut shape_left: HashMap<&str, u32> = HashMap::new();
    let mut color_left: HashMap<&str, u32> = HashMap::new();
    for (field, count) in remaining {
        if *count == 0 {
            continue;
        }
        if let Some(shape) = field.value(Channel::Shape) {
            *shape_left.entry(shape).or_insert(0) += count;
        }
        if let Some(color) = field.value(Channel::Color) {
            *color_left.entry(color).or_insert(0) += count;
        }
    }

    let mut partial = 0;
    for (i, mark) in marks.iter().enumerate() {
        if *mark != SlotMark::Incorrect {
            continue;
        }
        let shape = guess[i].value(Channel::Shape);
        let color = guess[i].value(Channel::Color);
        let shape_hit = shape.is_some_and(|s| shape_left.get(s).copied().unwrap_or(0) > 0);
        let color_hit = color.is_some_and(|c| color_left.get(c).copied().unwrap_or(0) > 0);
        if shape_hit == color_hit {
            continue;
        }
        if shape_hit {
            if let Some(s) = shape {
                if let Some(count) = shape_left.get_mut(s) {
                    *count -= 1;
                }
            }
        } else if let Some(c) = color {
            if let Some(count) = color_left.get_mut(c) {
                *count -= 1;
            }
        }
        partial += 1;
    }
    partial
}
