//! Deck construction, shuffling, and drawing.

extern crate alloc;

use alloc::vec::Vec;

use rand::Rng;
use rand::seq::SliceRandom;

use crate::card::{Card, DECK_SIZE, Rank, Suit};
use crate::error::DeckError;

/// An ordered stack of cards.
///
/// Cards are drawn from the end of the sequence. Every operation returns a new
/// deck and leaves the original untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// Creates a full 52-card deck in a fixed order.
    ///
    /// All ranks of hearts come first, then diamonds, clubs, and spades.
    #[must_use]
    pub fn new() -> Self {
        let mut cards = Vec::with_capacity(DECK_SIZE);

        for suit in Suit::ALL {
            for rank in Rank::ALL {
                cards.push(Card::new(suit, rank));
            }
        }

        Self { cards }
    }

    /// Creates a full deck whose next draws are `draws`, in that order.
    ///
    /// The remaining cards follow in [`Deck::new`] order beneath them. A card
    /// listed more than once is only placed at its first position.
    ///
    /// # Example
    ///
    /// ```
    /// use bjrules::{Card, Deck, Rank, Suit};
    ///
    /// let ace = Card::new(Suit::Spades, Rank::Ace);
    /// let deck = Deck::stacked(&[ace]);
    /// let (drawn, rest) = deck.take_card().unwrap();
    /// assert_eq!(drawn, ace);
    /// assert_eq!(rest.len(), 51);
    /// ```
    #[must_use]
    pub fn stacked(draws: &[Card]) -> Self {
        let mut top: Vec<Card> = Vec::with_capacity(draws.len());
        for &card in draws {
            if !top.contains(&card) {
                top.push(card);
            }
        }

        let mut cards: Vec<Card> = Self::new()
            .cards
            .into_iter()
            .filter(|card| !top.contains(card))
            .collect();
        cards.extend(top.into_iter().rev());

        Self { cards }
    }

    /// Returns a uniformly shuffled copy of this deck.
    ///
    /// Uses a Fisher-Yates shuffle driven by the given random source.
    #[must_use]
    pub fn shuffle<R: Rng + ?Sized>(&self, rng: &mut R) -> Self {
        let mut cards = self.cards.clone();
        cards.shuffle(rng);
        Self { cards }
    }

    /// Draws the top card, returning it together with the remaining deck.
    ///
    /// # Errors
    ///
    /// Returns [`DeckError::DeckExhausted`] if the deck is empty.
    pub fn take_card(&self) -> Result<(Card, Self), DeckError> {
        let (&card, rest) = self.cards.split_last().ok_or(DeckError::DeckExhausted)?;
        log::trace!("drew {card}, {} cards left", rest.len());
        Ok((card, Self { cards: rest.to_vec() }))
    }

    /// Splits off up to `count` cards from the top, returned in deck order.
    pub(crate) fn split_top(&self, count: usize) -> (Vec<Card>, Self) {
        let split = self.cards.len().saturating_sub(count);
        let (rest, top) = self.cards.split_at(split);
        (top.to_vec(), Self { cards: rest.to_vec() })
    }

    /// Returns the cards in the deck, bottom first.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns whether the deck holds the given card.
    #[must_use]
    pub fn contains(&self, card: &Card) -> bool {
        self.cards.contains(card)
    }

    /// Returns the number of cards in the deck.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the deck is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

impl Default for Deck {
    fn default() -> Self {
        Self::new()
    }
}

/// Creates a full 52-card deck in a fixed order. See [`Deck::new`].
#[must_use]
pub fn new_deck() -> Deck {
    Deck::new()
}
