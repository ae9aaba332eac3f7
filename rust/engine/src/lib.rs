//! # mastermind-engine: Guess Evaluation Core
//!
//! A deterministic rules engine for Mastermind-family code-breaking games.
//! Provides duplicate-aware guess scoring across three game flavors, the
//! move/game state machine with lifecycle flags, and reproducible secret-code
//! generation for replay and debugging.
//!
//! The engine is synchronous and performs no I/O: transport, persistence and
//! DTO mapping live with the caller. Its whole surface is game-type
//! construction, game construction and [`game::Game::submit_move`].
//!
//! ## Core Modules
//!
//! - [`fields`] - Field representation (Channel, Field) for single- and
//!   dual-attribute pegs
//! - [`game_types`] - Game variant descriptors, legality checks and presets
//! - [`score`] - Score shapes (aggregate counts, per-hole marks, split counts)
//! - [`matching`] - Duplicate-aware multiset comparison of code and guess
//! - [`game`] - Game aggregate, move recording and end-of-game transitions
//! - [`moves`] - Recorded move representation
//! - [`rules`] - Guess validation and move ordering
//! - [`codegen`] - Deterministic secret-code generation with ChaCha20 RNG
//! - [`history`] - Game transcript records and JSONL serialization
//! - [`errors`] - Error types for game operations
//!
//! ## Quick Start
//!
//! ```rust
//! use mastermind_engine::codegen::CodeGenerator;
//! use mastermind_engine::fields::Field;
//! use mastermind_engine::game::Game;
//! use mastermind_engine::game_types::GameType;
//!
//! let game_type = GameType::classic_6x4();
//! let code = CodeGenerator::new_with_seed(42).generate(&game_type);
//! let mut game = Game::new(game_type, code, "alice").unwrap();
//!
//! let guess = vec![
//!     Field::color("Red"),
//!     Field::color("Green"),
//!     Field::color("Blue"),
//!     Field::color("Yellow"),
//! ];
//! let score = game.submit_move(guess, 1).unwrap();
//! println!("scored: {:?}", score);
//! ```
//!
//! ## Deterministic Codes
//!
//! Secret codes are reproducible using seeded RNG:
//!
//! ```rust
//! use mastermind_engine::codegen::CodeGenerator;
//! use mastermind_engine::game_types::GameType;
//!
//! // Same seed produces same code
//! let game_type = GameType::classic_6x4();
//! let a = CodeGenerator::new_with_seed(7).generate(&game_type);
//! let b = CodeGenerator::new_with_seed(7).generate(&game_type);
//! assert_eq!(a, b);
//! ```
//!
//! ## Guess Validation
//!
//! Validate a submission before it is scored:
//!
//! ```rust
//! use mastermind_engine::fields::Field;
//! use mastermind_engine::game_types::GameType;
//! use mastermind_engine::rules::validate_guess;
//!
//! let game_type = GameType::classic_6x4();
//! let guess = vec![Field::color("Red"); 4];
//!
//! match validate_guess(&game_type, &guess, 0, 1) {
//!     Ok(move_number) => println!("recording move {}", move_number),
//!     Err(e) => println!("Invalid guess: {}", e),
//! }
//! ```

pub mod codegen;
pub mod errors;
pub mod fields;
pub mod game;
pub mod game_types;
pub mod history;
pub mod matching;
pub mod moves;
pub mod rules;
pub mod score;
