//! Deck integration tests.

use std::collections::HashMap;

use bjcore::{Card, DECK_SIZE, Deck, DeckError, Face};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

fn tally(cards: &[Card]) -> HashMap<Card, usize> {
    let mut counts = HashMap::new();
    for &card in cards {
        *counts.entry(card).or_insert(0) += 1;
    }
    counts
}

#[test]
fn zero_decks_is_rejected() {
    assert_eq!(Deck::new(0, 1).unwrap_err(), DeckError::InvalidConfiguration);
}

#[test]
fn composition_has_four_families_per_deck() {
    for decks in 1..=4_u8 {
        let deck = Deck::new(decks, 3).unwrap();
        let size = DECK_SIZE * decks as usize;

        assert_eq!(deck.decks(), decks);
        assert_eq!(deck.len(), size);
        assert_eq!(deck.remaining(), size);

        let counts = tally(deck.composition());
        assert_eq!(counts.len(), 13);
        for rank in 1..=10 {
            assert_eq!(counts[&Card::Numeric(rank)], 4 * decks as usize);
        }
        for face in Face::ALL {
            assert_eq!(counts[&Card::Face(face)], 4 * decks as usize);
        }

        assert_eq!(tally(deck.pile()), counts);
    }
}

#[test]
fn draws_remove_one_card_each_until_empty() {
    let mut deck = Deck::new(1, 9).unwrap();
    let mut drawn = Vec::new();

    for expected in (0..DECK_SIZE).rev() {
        drawn.push(deck.draw().unwrap());
        assert_eq!(deck.remaining(), expected);
    }

    assert_eq!(deck.draw().unwrap_err(), DeckError::Empty);
    assert_eq!(tally(&drawn), tally(deck.composition()));
}

#[test]
fn draw_takes_from_end_of_pile() {
    let mut deck = Deck::new(1, 11).unwrap();
    let last = *deck.pile().last().unwrap();
    assert_eq!(deck.draw().unwrap(), last);
}

#[test]
fn reset_restores_full_composition() {
    let mut deck = Deck::new(2, 5).unwrap();
    for _ in 0..30 {
        deck.draw().unwrap();
    }
    assert_eq!(deck.remaining(), 2 * DECK_SIZE - 30);

    deck.reset();
    assert_eq!(deck.remaining(), 2 * DECK_SIZE);
    assert_eq!(tally(deck.pile()), tally(deck.composition()));
}

#[test]
fn same_seed_gives_same_shuffle() {
    let a = Deck::new(1, 42).unwrap();
    let b = Deck::new(1, 42).unwrap();
    let c = Deck::new(1, 43).unwrap();

    assert_eq!(a.pile(), b.pile());
    assert_ne!(a.pile(), c.pile());
}

#[test]
fn injected_rng_drives_the_shuffle() {
    let seeded = Deck::new(1, 8).unwrap();
    let injected = Deck::with_rng(1, ChaCha8Rng::seed_from_u64(8)).unwrap();
    assert_eq!(seeded.pile(), injected.pile());

    let mut deck = Deck::with_rng(1, ChaCha8Rng::seed_from_u64(8)).unwrap();
    let first = deck.pile().to_vec();
    deck.reset();
    assert_ne!(deck.pile(), first.as_slice());
}
