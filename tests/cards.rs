//! Card, hand evaluation and deck tests.

use std::collections::HashSet;

use bjsim::{
    Card, DECK_SIZE, DealerHand, Deck, DeckError, Hand, RESHUFFLE_THRESHOLD, Rank, Suit,
    best_total, is_blackjack, is_soft,
};

fn cards(ranks: &[Rank]) -> Vec<Card> {
    ranks
        .iter()
        .zip(Suit::ALL.iter().cycle())
        .map(|(&rank, &suit)| Card::new(rank, suit))
        .collect()
}

/// Tries every Ace assignment and keeps the best total.
fn brute_force_total(hand: &[Card]) -> u8 {
    let aces = hand.iter().filter(|card| card.is_ace()).count();
    let base: u8 = hand.iter().map(Card::value).sum();
    let totals = (0..=aces).map(|upgraded| base + 10 * upgraded as u8);
    totals
        .clone()
        .filter(|&total| total <= 21)
        .max()
        .unwrap_or_else(|| totals.min().unwrap_or(0))
}

#[test]
fn rank_values() {
    assert_eq!(Rank::Ace.value(), 1);
    assert_eq!(Rank::Two.value(), 2);
    assert_eq!(Rank::Nine.value(), 9);
    for rank in [Rank::Ten, Rank::Jack, Rank::Queen, Rank::King] {
        assert_eq!(rank.value(), 10);
    }
}

#[test]
fn best_total_examples() {
    assert_eq!(best_total(&cards(&[Rank::Ace, Rank::Ace, Rank::Nine])), 21);
    assert_eq!(
        best_total(&cards(&[Rank::Ace, Rank::Ace, Rank::Ace, Rank::Eight])),
        21
    );
    assert_eq!(best_total(&cards(&[Rank::King, Rank::Queen])), 20);
    assert_eq!(best_total(&cards(&[Rank::King, Rank::Queen, Rank::Ace])), 21);
    assert_eq!(best_total(&[]), 0);
}

#[test]
fn best_total_counts_aces_low_when_every_choice_busts() {
    let hand = cards(&[Rank::King, Rank::Queen, Rank::Ace, Rank::Ace]);
    assert_eq!(best_total(&hand), 22);
    assert!(!is_soft(&hand));

    let hand = cards(&[Rank::Nine, Rank::Eight, Rank::Seven]);
    assert_eq!(best_total(&hand), 24);
}

#[test]
fn best_total_matches_every_ace_assignment() {
    for a in Rank::ALL {
        for b in Rank::ALL {
            for c in Rank::ALL {
                let three = cards(&[a, b, c]);
                assert_eq!(best_total(&three), brute_force_total(&three), "{three:?}");
                for d in [Rank::Ace, Rank::Five, Rank::King] {
                    let four = cards(&[a, b, c, d]);
                    assert_eq!(best_total(&four), brute_force_total(&four), "{four:?}");
                }
            }
        }
    }
}

#[test]
fn soft_and_blackjack_flags() {
    let soft_seventeen = cards(&[Rank::Ace, Rank::Six]);
    assert!(is_soft(&soft_seventeen));
    assert_eq!(best_total(&soft_seventeen), 17);

    let hard_seventeen = cards(&[Rank::Ten, Rank::Seven]);
    assert!(!is_soft(&hard_seventeen));

    assert!(is_blackjack(&cards(&[Rank::Ace, Rank::Jack])));
    assert!(!is_blackjack(&cards(&[Rank::Seven, Rank::Seven, Rank::Seven])));
    assert!(!is_blackjack(&cards(&[Rank::Ace, Rank::Nine])));
}

#[test]
fn hand_tracks_deal_order_and_value() {
    let mut hand = Hand::new();
    assert!(hand.is_empty());

    for card in cards(&[Rank::Ace, Rank::Five, Rank::King]) {
        hand.add_card(card);
    }
    assert_eq!(hand.len(), 3);
    assert_eq!(hand.cards()[0].rank, Rank::Ace);
    assert_eq!(hand.value(), 16);
    assert!(!hand.is_bust());

    hand.add_card(Card::new(Rank::Seven, Suit::Clubs));
    assert!(hand.is_bust());

    hand.clear();
    assert_eq!(hand.value(), 0);
}

#[test]
fn dealer_hand_visibility_and_values() {
    let mut dealer = DealerHand::new();
    dealer.add_card(Card::new(Rank::Ace, Suit::Hearts));
    dealer.add_card(Card::new(Rank::Six, Suit::Clubs));

    assert!(!dealer.is_hole_revealed());
    assert_eq!(dealer.visible_value(), 11);
    assert_eq!(
        dealer.visible_cards(),
        vec![Some(Card::new(Rank::Ace, Suit::Hearts)), None]
    );

    dealer.reveal_hole();
    assert!(dealer.is_hole_revealed());
    assert_eq!(dealer.visible_value(), 17);
    assert!(dealer.is_soft());

    dealer.clear();
    assert!(dealer.is_empty());
    assert!(!dealer.is_hole_revealed());
}

#[test]
fn new_deck_holds_every_card_once() {
    let deck = Deck::new(11);
    assert_eq!(deck.len(), DECK_SIZE);

    let unique: HashSet<Card> = deck.cards().iter().copied().collect();
    assert_eq!(unique.len(), DECK_SIZE);
}

#[test]
fn dealing_empties_the_deck() {
    let mut deck = Deck::new(5);
    let mut seen = HashSet::new();
    for _ in 0..DECK_SIZE {
        assert!(seen.insert(deck.deal().unwrap()));
    }

    assert!(deck.is_empty());
    assert_eq!(deck.deal().unwrap_err(), DeckError::Empty);
}

#[test]
fn populate_requires_an_empty_deck() {
    let mut deck = Deck::new(2);
    assert_eq!(deck.populate().unwrap_err(), DeckError::NotEmpty);

    deck.clear();
    deck.populate().unwrap();
    assert_eq!(deck.len(), DECK_SIZE);
    assert_eq!(deck.cards()[0], Card::new(Rank::Ace, Suit::Hearts));
    assert_eq!(deck.cards()[DECK_SIZE - 1], Card::new(Rank::King, Suit::Spades));

    deck.shuffle();
    let unique: HashSet<Card> = deck.cards().iter().copied().collect();
    assert_eq!(unique.len(), DECK_SIZE);
}

#[test]
fn reset_threshold_is_half_the_deck() {
    let mut deck = Deck::new(8);
    for _ in 0..(DECK_SIZE - RESHUFFLE_THRESHOLD - 1) {
        deck.deal().unwrap();
    }
    assert_eq!(deck.len(), RESHUFFLE_THRESHOLD + 1);
    assert!(!deck.needs_reset());

    deck.deal().unwrap();
    assert!(deck.needs_reset());

    deck.reset();
    assert_eq!(deck.len(), DECK_SIZE);
    let unique: HashSet<Card> = deck.cards().iter().copied().collect();
    assert_eq!(unique.len(), DECK_SIZE);
}

#[test]
fn stacked_deck_deals_last_card_first() {
    let mut deck = Deck::new(1);
    deck.stack([
        Card::new(Rank::Two, Suit::Clubs),
        Card::new(Rank::King, Suit::Hearts),
    ]);

    assert_eq!(deck.deal().unwrap().rank, Rank::King);
    assert_eq!(deck.deal().unwrap().rank, Rank::Two);
    assert!(deck.is_empty());
}

#[test]
fn different_seeds_shuffle_differently() {
    let a = Deck::new(1);
    let b = Deck::new(2);
    assert_ne!(a.cards(), b.cards());
}
