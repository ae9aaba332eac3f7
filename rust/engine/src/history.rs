use serde::{Deserialize, Serialize};

use crate::fields::Field;
use crate::game::Game;
use crate::score::Score;

/// One attempt inside a [`GameRecord`].
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct MoveRecord {
    /// 1-based move number
    pub move_number: u32,
    /// The guessed fields
    pub guess: Vec<Field>,
    /// The score the engine assigned
    pub score: Score,
}

/// Complete record of a finished game including the revealed code, all moves
/// and the outcome. Serialized to JSONL format for transcript storage and
/// replay.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct GameRecord {
    /// Game identifier
    pub game_id: String,
    /// Name of the game type played
    pub game_type: String,
    /// Player the game was created for
    pub player_name: String,
    /// The secret code, revealed once the game is over
    pub code: Vec<Field>,
    /// Chronological list of all recorded moves
    pub moves: Vec<MoveRecord>,
    /// Whether the player broke the code within the move limit
    pub victory: bool,
    /// Timestamp when the game started (RFC3339 format)
    #[serde(default)]
    pub started: Option<String>,
    /// Timestamp when the game ended (RFC3339 format)
    #[serde(default)]
    pub ended: Option<String>,
    /// Additional metadata (extensible JSON object)
    #[serde(default)]
    pub meta: Option<serde_json::Value>,
}

impl GameRecord {
    pub fn from_game(game: &Game) -> Self {
        Self {
            game_id: game.id().to_string(),
            game_type: game.game_type().name().to_string(),
            player_name: game.player_name().to_string(),
            code: game.code().to_vec(),
            moves: game
                .moves()
                .iter()
                .map(|m| MoveRecord {
                    move_number: m.move_number(),
                    guess: m.guess().to_vec(),
                    score: m.score().clone(),
                })
                .collect(),
            victory: game.is_victory(),
            started: Some(rfc3339(game.start_time())),
            ended: game.end_time().map(rfc3339),
            meta: None,
        }
    }
}

fn rfc3339(ts: chrono::DateTime<chrono::Utc>) -> String {
    ts.to_rfc3339_opts(chrono::SecondsFormat::Secs, true)
}

use std::fs::{create_dir_all, File};
use std::io::{BufWriter, Write};
use std::path::Path;

/// Appends one JSON line per [`GameRecord`] to a transcript file. This is a
/// caller concern layered on top of the engine; nothing in the move path
/// touches it.
pub struct GameLogger {
    writer: BufWriter<File>,
}

impl GameLogger {
    pub fn create<P: AsRef<Path>>(path: P) -> std::io::Result<Self> {
        if let Some(parent) = path.as_ref().parent() {
            if !parent.as_os_str().is_empty() {
                let _ = create_dir_all(parent);
            }
        }
        let f = File::create(path)?;
        Ok(Self {
            writer: BufWriter::new(f),
        })
    }

    pub fn write(&mut self, record: &GameRecord) -> std::io::Result<()> {
        // inject end timestamp if missing
        let mut rec = record.clone();
        if rec.ended.is_none() {
            rec.ended = Some(rfc3339(chrono::Utc::now()));
        }
        let line = serde_json::to_string(&rec).map_err(std::io::Error::other)?;
        self.writer.write_all(line.as_bytes())?;
        self.writer.write_all(b"\n")?;
        self.writer.flush()?;
        Ok(())
    }
}
