use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use crate::errors::GameError;
use crate::fields::{Channel, Field};

/// Scoring flavor of a game type, deciding which [`crate::score::Score`]
/// shape the matching algorithm produces.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub enum Scoring {
    /// Classic black/white peg counts
    Aggregate,
    /// One mark per hole instead of folded counts
    Positional,
    /// Dual-attribute counts including single-channel partial matches
    SplitAttribute,
}

/// Immutable descriptor of a game variant: code length, move limit, scoring
/// flavor and the legal value tokens per attribute channel.
/// Created once at game start and never mutated.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct GameType {
    /// Display name, passed through to callers and never interpreted
    name: String,
    /// Number of holes in the code and in every guess
    holes: usize,
    /// Maximum number of moves before the game closes as a loss
    max_moves: u32,
    /// Scoring flavor
    scoring: Scoring,
    /// Allowed value tokens per channel
    allowed_values: BTreeMap<Channel, BTreeSet<String>>,
}

impl GameType {
    /// Builds a validated game type.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::InvalidConfiguration`] when `holes` or `max_moves`
    /// is zero, when any allowed set is empty, or when a channel required by
    /// the scoring flavor is missing (split-attribute scoring needs both shape
    /// and color sets, the other flavors need a color set).
    pub fn new(
        name: impl Into<String>,
        holes: usize,
        max_moves: u32,
        scoring: Scoring,
        allowed_values: BTreeMap<Channel, BTreeSet<String>>,
    ) -> Result<Self, GameError> {
        if holes == 0 {
            return Err(GameError::InvalidConfiguration {
                reason: "holes must be positive".to_string(),
            });
        }
        if max_moves == 0 {
            return Err(GameError::InvalidConfiguration {
                reason: "max_moves must be positive".to_string(),
            });
        }
        for (channel, set) in &allowed_values {
            if set.is_empty() {
                return Err(GameError::InvalidConfiguration {
                    reason: format!("allowed set for {:?} channel is empty", channel),
                });
            }
        }
        let required: &[Channel] = match scoring {
            Scoring::SplitAttribute => &[Channel::Shape, Channel::Color],
            _ => &[Channel::Color],
        };
        for channel in required {
            if !allowed_values.contains_key(channel) {
                return Err(GameError::InvalidConfiguration {
                    reason: format!("missing allowed set for {:?} channel", channel),
                });
            }
        }
        Ok(Self {
            name: name.into(),
            holes,
            max_moves,
            scoring,
            allowed_values,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }
    pub fn holes(&self) -> usize {
        self.holes
    }
    pub fn max_moves(&self) -> u32 {
        self.max_moves
    }
    pub fn scoring(&self) -> Scoring {
        self.scoring
    }

    pub fn allowed(&self, channel: Channel) -> Option<&BTreeSet<String>> {
        self.allowed_values.get(&channel)
    }

    /// Checks a field against the allowed sets: every attribute value must be
    /// in the set for its channel, and the field arity must match the scoring
    /// flavor (a single-attribute field is never legal in a split-attribute
    /// game and vice versa).
    pub fn is_legal(&self, field: &Field) -> bool {
        match field {
            Field::Color(color) => {
                self.scoring != Scoring::SplitAttribute && self.in_set(Channel::Color, color)
            }
            Field::ShapeColor { shape, color } => {
                self.scoring == Scoring::SplitAttribute
                    && self.in_set(Channel::Shape, shape)
                    && self.in_set(Channel::Color, color)
            }
        }
    }

    fn in_set(&self, channel: Channel, token: &str) -> bool {
        self.allowed_values
            .get(&channel)
            .is_some_and(|set| set.contains(token))
    }

    /// Classic game: 4 holes, 6 colors, black/white counts, 12 moves.
    pub fn classic_6x4() -> Self {
        Self {
            name: "6x4Game".to_string(),
            holes: 4,
            max_moves: 12,
            scoring: Scoring::Aggregate,
            allowed_values: BTreeMap::from([(
                Channel::Color,
                token_set(&["Red", "Green", "Blue", "Yellow", "Black", "White"]),
            )]),
        }
    }

    /// Large board: 5 holes, 8 colors, per-hole marks, 14 moves.
    pub fn grand_8x5() -> Self {
        Self {
            name: "8x5Game".to_string(),
            holes: 5,
            max_moves: 14,
            scoring: Scoring::Positional,
            allowed_values: BTreeMap::from([(
                Channel::Color,
                token_set(&[
                    "Red", "Green", "Blue", "Yellow", "Black", "White", "Purple", "Orange",
                ]),
            )]),
        }
    }

    /// Dual-attribute game: 4 holes, 5 shapes x 5 colors, split counts, 14 moves.
    pub fn shapes_5x5x4() -> Self {
        Self {
            name: "5x5x4Game".to_string(),
            holes: 4,
            max_moves: 14,
            scoring: Scoring::SplitAttribute,
            allowed_values: BTreeMap::from([
                (
                    Channel::Shape,
                    token_set(&["Circle", "Square", "Triangle", "Star", "Rectangle"]),
                ),
                (
                    Channel::Color,
                    token_set(&["Red", "Green", "Blue", "Yellow", "Purple"]),
                ),
            ]),
        }
    }
}

fn token_set(tokens: &[&str]) -> BTreeSet<String> {
    tokens.iter().map(|t| t.to_string()).collect()
}
