//! Session integration tests.
//!
//! Configuration file → symbol directory → deck → full games.

use cobble::cards::{SymbolPool, PATH_ATTRIBUTE};
use cobble::{catalogue, EndReason, Error, GameConfig, Phase, Pick, Session};

fn symbol_dir(count: usize) -> tempfile::TempDir {
    let dir = tempfile::tempdir().unwrap();
    for i in 0..count {
        std::fs::write(dir.path().join(format!("symbol{i:02}.png")), b"").unwrap();
    }
    dir
}

#[test]
fn test_config_file_to_cleared_deck() {
    let images = symbol_dir(13);
    let config_dir = tempfile::tempdir().unwrap();
    let config_path = config_dir.path().join("cobble.json");

    GameConfig::new(4)
        .with_symbol_dir(images.path())
        .save(&config_path)
        .unwrap();
    let config = GameConfig::load(&config_path).unwrap();

    let symbols = catalogue::scan(config.symbol_dir.as_deref().unwrap()).unwrap();
    assert_eq!(symbols.len(), 13);
    assert!(symbols.iter().all(|s| s.attributes.get_text(PATH_ATTRIBUTE).is_some()));

    let mut session = Session::new(&config, &SymbolPool::new(symbols), 7).unwrap();
    session.start().unwrap();
    assert_eq!(session.left_card().unwrap().len(), 4);

    while session.phase().is_playing() {
        let answer = session.answer().unwrap().name.clone();
        assert_eq!(session.pick(&answer).unwrap(), Pick::Correct);
    }

    assert_eq!(session.phase(), Phase::Outro(EndReason::DeckCleared));
    assert_eq!(session.score(), 12);
    assert_eq!(session.remaining_cards(), 0);
}

#[test]
fn test_too_few_images() {
    let images = symbol_dir(10);
    let config = GameConfig::new(4).with_symbol_dir(images.path());

    let symbols = catalogue::scan(images.path()).unwrap();
    let err = Session::new(&config, &SymbolPool::new(symbols), 1).unwrap_err();
    assert!(matches!(
        err,
        Error::InsufficientSymbols {
            required: 13,
            available: 10,
            ..
        }
    ));
}

#[test]
fn test_each_round_has_a_fresh_answer_on_both_cards() {
    let config = GameConfig::new(6).with_lives(10);
    let pool = SymbolPool::new(catalogue::generated(config.required_symbols()));
    let mut session = Session::new(&config, &pool, 3).unwrap();
    session.start().unwrap();

    for _ in 0..10 {
        let left = session.left_card().unwrap().clone();
        let right = session.right_card().unwrap().clone();
        let answer = session.answer().unwrap().name.clone();

        assert_ne!(left.id(), right.id());
        assert!(left.contains(&answer) && right.contains(&answer));

        session.pick(&answer).unwrap();
        assert_eq!(session.right_card().unwrap().id(), left.id());
    }
    assert_eq!(session.score(), 10);
}

#[test]
fn test_games_in_one_session_are_shuffled_differently() {
    let config = GameConfig::new(8).with_time_limit_ms(10);
    let pool = SymbolPool::new(catalogue::generated(config.required_symbols()));
    let mut session = Session::new(&config, &pool, 11).unwrap();

    let mut deals = Vec::new();
    for _ in 0..3 {
        session.start().unwrap();
        deals.push((
            session.left_card().unwrap().id(),
            session.right_card().unwrap().id(),
        ));
        assert_eq!(session.tick(10), Phase::Outro(EndReason::TimeUp));
    }

    assert!(deals[0] != deals[1] || deals[1] != deals[2]);
}
