//! Session table integration tests.

use bjcore::{
    ActionError, DealError, DeckError, GameOptions, Phase, RoundRules, SessionError, Table,
    TiePolicy,
};

#[test]
fn sessions_are_independent() {
    let table = Table::new(GameOptions::default());
    let first = table.open(1).unwrap();
    let second = table.open(2).unwrap();
    assert_ne!(first, second);
    assert_eq!(table.session_count(), 2);

    let before = table.with_session(second, |round| round.cards_remaining());

    // Play the first session to the end.
    while table.with_session(first, |round| round.phase()) == Some(Phase::PlayerTurn) {
        if table.with_session(first, |round| round.player_value()) < Some(14) {
            table.hit(first).unwrap();
        } else {
            table.resolve(first).unwrap();
        }
    }

    assert!(table.with_session(first, |round| round.outcome()).flatten().is_some());
    assert_eq!(
        table.with_session(second, |round| round.cards_remaining()),
        before
    );
}

#[test]
fn resolved_session_rejects_actions_until_restart() {
    let table = Table::new(GameOptions::default());
    let id = table.open(3).unwrap();

    if table.with_session(id, |round| round.phase()) == Some(Phase::PlayerTurn) {
        table.resolve(id).unwrap();
    }

    assert_eq!(
        table.hit(id).unwrap_err(),
        SessionError::Action(ActionError::InvalidState)
    );
    assert_eq!(
        table.resolve(id).unwrap_err(),
        SessionError::Action(ActionError::InvalidState)
    );

    table.restart(id).unwrap();
    assert_eq!(
        table.with_session(id, |round| {
            round.phase() == Phase::PlayerTurn || round.player_hand().is_bust()
        }),
        Some(true)
    );
    assert_eq!(
        table.with_session(id, |round| round.cards_remaining()),
        Some(52 - 4)
    );
}

#[test]
fn unknown_session_is_not_found() {
    let table = Table::new(GameOptions::default());
    assert_eq!(table.hit(9).unwrap_err(), SessionError::NotFound);
    assert_eq!(table.resolve(9).unwrap_err(), SessionError::NotFound);
    assert_eq!(table.restart(9).unwrap_err(), SessionError::NotFound);
    assert_eq!(table.with_session(9, |round| round.phase()), None);
    assert!(!table.close(9));
}

#[test]
fn close_removes_session() {
    let table = Table::new(GameOptions::default());
    let id = table.open(4).unwrap();

    assert!(table.close(id));
    assert_eq!(table.session_count(), 0);
    assert_eq!(table.hit(id).unwrap_err(), SessionError::NotFound);
}

#[test]
fn zero_decks_cannot_open_session() {
    let table = Table::new(GameOptions::default().with_decks(0));
    assert_eq!(
        table.open(1).unwrap_err(),
        SessionError::Deck(DeckError::InvalidConfiguration)
    );
    assert_eq!(table.session_count(), 0);
}

#[test]
fn sessions_use_configured_deck_count_and_rules() {
    let options = GameOptions::default()
        .with_decks(6)
        .with_tie_policy(TiePolicy::Push);
    let table = Table::new(options);
    let id = table.open(5).unwrap();

    assert_eq!(
        table.with_session(id, |round| (round.shoe().decks(), round.shoe().len())),
        Some((6, 6 * 52))
    );
    assert_eq!(
        table.with_session(id, |round| *round.rules()),
        Some(RoundRules::default().with_tie_policy(TiePolicy::Push))
    );
}

#[test]
fn invalid_dealer_threshold_cannot_open_session() {
    let table = Table::new(GameOptions::default().with_dealer_stands_on(0));
    assert_eq!(
        table.open(1).unwrap_err(),
        SessionError::Deal(DealError::InvalidDealerThreshold)
    );
    assert_eq!(table.session_count(), 0);
}

#[test]
fn exhausted_ids_do_not_replace_live_sessions() {
    let table = Table::with_first_id(GameOptions::default(), u32::MAX - 1);
    let last = table.open(1).unwrap();
    assert_eq!(last, u32::MAX - 1);

    assert_eq!(table.open(2).unwrap_err(), SessionError::IdsExhausted);
    assert_eq!(table.open(3).unwrap_err(), SessionError::IdsExhausted);
    assert_eq!(table.session_count(), 1);
    assert!(table.with_session(last, |round| round.phase()).is_some());
}
