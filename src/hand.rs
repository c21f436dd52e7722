//! Hand representation and scoring.

extern crate alloc;

use alloc::vec::Vec;

use crate::card::Card;

/// Scores a sequence of cards.
///
/// Non-ace cards are summed first. Each ace is then valued in hand order:
/// 1 if 11 would bust the total, 1 if 11 would land exactly on 21 while the
/// hand holds more than one ace, and 11 otherwise.
fn evaluate_cards(cards: &[Card]) -> u16 {
    let mut total: u16 = cards.iter().filter_map(|card| card.rank.points()).sum();
    let aces = cards.iter().filter(|card| card.rank.is_ace()).count();

    for _ in 0..aces {
        let soft = total + 11;
        if soft > 21 || (soft == 21 && aces > 1) {
            total += 1;
        } else {
            total += 11;
        }
    }

    total
}

/// The cards held by one participant, player or dealer.
///
/// A hand only grows: [`Hand::with_card`] returns a new hand with one more card.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Hand {
    cards: Vec<Card>,
}

impl Hand {
    /// Creates a new empty hand.
    #[must_use]
    pub const fn new() -> Self {
        Self { cards: Vec::new() }
    }

    /// Returns a copy of this hand with `card` appended.
    #[must_use]
    pub fn with_card(&self, card: Card) -> Self {
        let mut cards = Vec::with_capacity(self.cards.len() + 1);
        cards.extend_from_slice(&self.cards);
        cards.push(card);
        Self { cards }
    }

    /// Returns the cards in the hand.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Calculates the value of the hand.
    ///
    /// Values above 21 are returned as-is.
    #[must_use]
    pub fn score(&self) -> u16 {
        evaluate_cards(&self.cards)
    }

    /// Returns whether the hand holds exactly two cards.
    ///
    /// The value is not checked here; callers combine this with a score of 21
    /// wherever a natural matters.
    #[must_use]
    pub fn is_blackjack(&self) -> bool {
        self.cards.len() == 2
    }

    /// Returns whether the hand is bust (over 21).
    #[must_use]
    pub fn is_bust(&self) -> bool {
        self.score() > 21
    }

    /// Returns the number of cards in the hand.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the hand is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

impl From<Vec<Card>> for Hand {
    fn from(cards: Vec<Card>) -> Self {
        Self { cards }
    }
}

impl FromIterator<Card> for Hand {
    fn from_iter<I: IntoIterator<Item = Card>>(iter: I) -> Self {
        Self {
            cards: iter.into_iter().collect(),
        }
    }
}

/// Calculates the value of a hand. See [`Hand::score`].
#[must_use]
pub fn score(hand: &Hand) -> u16 {
    hand.score()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card::{Rank, Suit};

    fn hand(ranks: &[Rank]) -> Hand {
        let suits = Suit::ALL.into_iter().cycle();
        ranks
            .iter()
            .zip(suits)
            .map(|(&rank, suit)| Card::new(suit, rank))
            .collect()
    }

    #[test]
    fn face_cards_count_ten() {
        assert_eq!(hand(&[Rank::Jack, Rank::Queen]).score(), 20);
        assert_eq!(hand(&[Rank::King, Rank::Nine]).score(), 19);
        assert_eq!(hand(&[Rank::Two, Rank::Three, Rank::Four]).score(), 9);
    }

    #[test]
    fn ace_with_king_is_twenty_one() {
        assert_eq!(hand(&[Rank::Ace, Rank::King]).score(), 21);
        assert_eq!(hand(&[Rank::King, Rank::Ace]).score(), 21);
    }

    #[test]
    fn pair_of_aces_is_twelve() {
        assert_eq!(hand(&[Rank::Ace, Rank::Ace]).score(), 12);
    }

    #[test]
    fn two_aces_and_nine_is_twenty_one() {
        assert_eq!(hand(&[Rank::Ace, Rank::Ace, Rank::Nine]).score(), 21);
    }

    #[test]
    fn ace_drops_to_one_when_eleven_busts() {
        assert_eq!(hand(&[Rank::Ten, Rank::Five, Rank::Ace]).score(), 16);
        assert_eq!(hand(&[Rank::Ace, Rank::Ace, Rank::Ace]).score(), 13);
    }

    #[test]
    fn lone_ace_reaching_twenty_one_counts_eleven() {
        assert_eq!(hand(&[Rank::Five, Rank::Five, Rank::Ace]).score(), 21);
    }

    #[test]
    fn second_ace_reserves_flexibility_at_twenty_one() {
        // 10 + A would make 21, but with two aces in hand the first counts 1.
        assert_eq!(hand(&[Rank::Ten, Rank::Ace, Rank::Ace]).score(), 12);
    }

    #[test]
    fn bust_value_is_not_clamped() {
        let bust = hand(&[Rank::Ten, Rank::Ten, Rank::Five]);
        assert_eq!(bust.score(), 25);
        assert!(bust.is_bust());
        assert_eq!(score(&bust), 25);
    }

    #[test]
    fn blackjack_only_checks_card_count() {
        assert!(hand(&[Rank::Ace, Rank::King]).is_blackjack());
        assert!(hand(&[Rank::Two, Rank::Three]).is_blackjack());
        assert!(!hand(&[Rank::Seven, Rank::Seven, Rank::Seven]).is_blackjack());
        assert!(!hand(&[Rank::Ace]).is_blackjack());
    }

    #[test]
    fn with_card_leaves_original_untouched() {
        let original = hand(&[Rank::Two, Rank::Three]);
        let grown = original.with_card(Card::new(Suit::Clubs, Rank::Four));
        assert_eq!(original.len(), 2);
        assert_eq!(grown.len(), 3);
        assert_eq!(grown.cards()[..2], *original.cards());
    }

    #[test]
    fn empty_hand_scores_zero() {
        assert_eq!(Hand::new().score(), 0);
        assert!(Hand::new().is_empty());
    }
}
