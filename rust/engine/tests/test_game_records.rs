use std::fs;

use mastermind_engine::fields::Field;
use mastermind_engine::game::Game;
use mastermind_engine::game_types::GameType;
use mastermind_engine::history::{GameLogger, GameRecord};
use mastermind_engine::score::Score;

fn finished_game() -> Game {
    let code = vec![
        Field::color("Red"),
        Field::color("Green"),
        Field::color("Blue"),
        Field::color("Yellow"),
    ];
    let mut game = Game::new(GameType::classic_6x4(), code.clone(), "alice").unwrap();
    game.submit_move(vec![Field::color("Red"); 4], 1).unwrap();
    game.submit_move(code, 2).unwrap();
    game
}

#[test]
fn record_captures_moves_and_outcome() {
    let game = finished_game();
    let record = GameRecord::from_game(&game);

    assert_eq!(record.game_id, game.id().to_string());
    assert_eq!(record.game_type, "6x4Game");
    assert_eq!(record.player_name, "alice");
    assert_eq!(record.code.len(), 4);
    assert!(record.victory);
    assert!(record.started.is_some());
    assert!(record.ended.is_some());

    assert_eq!(record.moves.len(), 2);
    assert_eq!(record.moves[0].move_number, 1);
    assert_eq!(
        record.moves[0].score,
        Score::Aggregate {
            correct: 1,
            wrong_position: 0
        }
    );
    assert_eq!(
        record.moves[1].score,
        Score::Aggregate {
            correct: 4,
            wrong_position: 0
        }
    );
}

#[test]
fn logger_writes_one_json_line_per_record() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("games.jsonl");

    let record = GameRecord::from_game(&finished_game());
    let mut logger = GameLogger::create(&path).unwrap();
    logger.write(&record).unwrap();
    logger.write(&record).unwrap();

    let contents = fs::read_to_string(&path).unwrap();
    let lines: Vec<&str> = contents.lines().collect();
    assert_eq!(lines.len(), 2);
    for line in lines {
        let parsed: GameRecord = serde_json::from_str(line).unwrap();
        assert_eq!(parsed, record);
    }
}

#[test]
fn optional_record_fields_default_when_absent() {
    let json = r#"{
        "game_id": "g-1",
        "game_type": "6x4Game",
        "player_name": "bob",
        "code": [{"Color": "Red"}],
        "moves": [],
        "victory": false
    }"#;
    let parsed: GameRecord = serde_json::from_str(json).unwrap();
    assert_eq!(parsed.started, None);
    assert_eq!(parsed.ended, None);
    assert_eq!(parsed.meta, None);
}
