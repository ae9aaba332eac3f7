use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;

use crate::fields::{Channel, Field};
use crate::game_types::{GameType, Scoring};

/// Secret-code generator backed by a ChaCha20 RNG.
///
/// This is the code-generator collaborator: it runs once at game creation and
/// the state machine never calls it. Seeded construction makes codes
/// reproducible for replay and debugging.
#[derive(Debug)]
pub struct CodeGenerator {
    rng: ChaCha20Rng,
}

impl CodeGenerator {
    pub fn new() -> Self {
        Self {
            rng: ChaCha20Rng::from_os_rng(),
        }
    }

    pub fn new_with_seed(seed: u64) -> Self {
        Self {
            rng: ChaCha20Rng::seed_from_u64(seed),
        }
    }

    /// Draws a code of `game_type.holes()` fields, each hole independently
    /// and uniformly from the allowed sets (per channel for dual fields).
    pub fn generate(&mut self, game_type: &GameType) -> Vec<Field> {
        (0..game_type.holes())
            .map(|_| self.draw_field(game_type))
            .collect()
    }

    fn draw_field(&mut self, game_type: &GameType) -> Field {
        match game_type.scoring() {
            Scoring::SplitAttribute => {
                let shape = self.draw_token(game_type, Channel::Shape);
                let color = self.draw_token(game_type, Channel::Color);
                Field::shape_color(shape, color)
            }
            _ => Field::color(self.draw_token(game_type, Channel::Color)),
        }
    }

    fn draw_token(&mut self, game_type: &GameType, channel: Channel) -> String {
        // GameType construction guarantees the channels its flavor needs are
        // present and non-empty
        let tokens: Vec<&String> = game_type.allowed(channel).into_iter().flatten().collect();
        let idx = self.rng.random_range(0..tokens.len());
        tokens[idx].clone()
    }
}

impl Default for CodeGenerator {
    fn default() -> Self {
        Self::new()
    }
}
