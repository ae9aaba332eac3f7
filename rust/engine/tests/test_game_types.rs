use std::collections::{BTreeMap, BTreeSet};

use mastermind_engine::errors::GameError;
use mastermind_engine::fields::{Channel, Field};
use mastermind_engine::game_types::{GameType, Scoring};

fn color_set(tokens: &[&str]) -> BTreeMap<Channel, BTreeSet<String>> {
    BTreeMap::from([(
        Channel::Color,
        tokens.iter().map(|t| t.to_string()).collect(),
    )])
}

#[test]
fn zero_holes_is_rejected() {
    let err = GameType::new("bad", 0, 12, Scoring::Aggregate, color_set(&["Red"])).unwrap_err();
    match err {
        GameError::InvalidConfiguration { reason } => assert!(reason.contains("holes")),
        other => panic!("expected InvalidConfiguration, got {:?}", other),
    }
}

#[test]
fn zero_max_moves_is_rejected() {
    let err = GameType::new("bad", 4, 0, Scoring::Aggregate, color_set(&["Red"])).unwrap_err();
    match err {
        GameError::InvalidConfiguration { reason } => assert!(reason.contains("max_moves")),
        other => panic!("expected InvalidConfiguration, got {:?}", other),
    }
}

#[test]
fn empty_allowed_set_is_rejected() {
    let err = GameType::new("bad", 4, 12, Scoring::Aggregate, color_set(&[])).unwrap_err();
    match err {
        GameError::InvalidConfiguration { reason } => assert!(reason.contains("empty")),
        other => panic!("expected InvalidConfiguration, got {:?}", other),
    }
}

#[test]
fn split_attribute_scoring_requires_a_shape_channel() {
    let err = GameType::new(
        "bad",
        4,
        12,
        Scoring::SplitAttribute,
        color_set(&["Red", "Green"]),
    )
    .unwrap_err();
    match err {
        GameError::InvalidConfiguration { reason } => assert!(reason.contains("Shape")),
        other => panic!("expected InvalidConfiguration, got {:?}", other),
    }
}

#[test]
fn presets_describe_the_shipped_variants() {
    let classic = GameType::classic_6x4();
    assert_eq!(classic.holes(), 4);
    assert_eq!(classic.max_moves(), 12);
    assert_eq!(classic.scoring(), Scoring::Aggregate);
    assert_eq!(classic.allowed(Channel::Color).unwrap().len(), 6);
    assert!(classic.allowed(Channel::Shape).is_none());

    let grand = GameType::grand_8x5();
    assert_eq!(grand.holes(), 5);
    assert_eq!(grand.scoring(), Scoring::Positional);
    assert_eq!(grand.allowed(Channel::Color).unwrap().len(), 8);

    let shapes = GameType::shapes_5x5x4();
    assert_eq!(shapes.holes(), 4);
    assert_eq!(shapes.scoring(), Scoring::SplitAttribute);
    assert_eq!(shapes.allowed(Channel::Shape).unwrap().len(), 5);
    assert_eq!(shapes.allowed(Channel::Color).unwrap().len(), 5);
}

#[test]
fn legality_checks_membership_and_arity() {
    let classic = GameType::classic_6x4();
    assert!(classic.is_legal(&Field::color("Red")));
    assert!(!classic.is_legal(&Field::color("Pink")));
    assert!(!classic.is_legal(&Field::shape_color("Circle", "Red")));

    let shapes = GameType::shapes_5x5x4();
    assert!(shapes.is_legal(&Field::shape_color("Circle", "Red")));
    // both channels must be legal independently
    assert!(!shapes.is_legal(&Field::shape_color("Hexagon", "Red")));
    assert!(!shapes.is_legal(&Field::shape_color("Circle", "Black")));
    assert!(!shapes.is_legal(&Field::color("Red")));
}
