use crate::errors::GameError;
use crate::fields::Field;
use crate::game_types::GameType;

/// Validates a guess submission against the game type and move ordering.
///
/// Checks run in order: guess length, field legality, then the claimed move
/// number against `last_move_number + 1`. On success returns the move number
/// to record. This function is pure; whether the game is still open is
/// checked by [`crate::game::Game::submit_move`] before it is called.
///
/// # Errors
///
/// Returns [`GameError`] in the following cases:
/// - [`GameError::InvalidGuessLength`] - guess length differs from the game type's holes
/// - [`GameError::InvalidGuessValue`] - a field is outside the allowed sets
///   (the first offending position is reported)
/// - [`GameError::InvalidMoveNumber`] - the claimed number is not the next one
///
/// # Examples
///
/// ```
/// use mastermind_engine::fields::Field;
/// use mastermind_engine::game_types::GameType;
/// use mastermind_engine::rules::validate_guess;
///
/// let game_type = GameType::classic_6x4();
/// let guess = vec![Field::color("Red"); 4];
///
/// // First move of the game
/// assert_eq!(validate_guess(&game_type, &guess, 0, 1), Ok(1));
/// ```
///
/// ```
/// use mastermind_engine::errors::GameError;
/// use mastermind_engine::fields::Field;
/// use mastermind_engine::game_types::GameType;
/// use mastermind_engine::rules::validate_guess;
///
/// let game_type = GameType::classic_6x4();
/// let guess = vec![Field::color("Red"); 4];
///
/// // Invalid: move 3 claimed when move 2 is expected
/// let err = validate_guess(&game_type, &guess, 1, 3).unwrap_err();
/// assert_eq!(err, GameError::InvalidMoveNumber { received: 3, expected: 2 });
///
/// // Invalid: token outside the allowed color set
/// let bad = vec![Field::color("Pink"); 4];
/// let err = validate_guess(&game_type, &bad, 0, 1).unwrap_err();
/// assert!(matches!(err, GameError::InvalidGuessValue { position: 0, .. }));
/// ```
pub fn validate_guess(
    game_type: &GameType,
    guess: &[Field],
    last_move_number: u32,
    claimed_move_number: u32,
) -> Result<u32, GameError> {
    if guess.len() != game_type.holes() {
        return Err(GameError::InvalidGuessLength {
            expected: game_type.holes(),
            actual: guess.len(),
        });
    }
    for (position, field) in guess.iter().enumerate() {
        if !game_type.is_legal(field) {
            return Err(GameError::InvalidGuessValue {
                position,
                value: field.to_string(),
            });
        }
    }
    let expected = last_move_number + 1;
    if claimed_move_number != expected {
        return Err(GameError::InvalidMoveNumber {
            received: claimed_move_number,
            expected,
        });
    }
    Ok(expected)
}
