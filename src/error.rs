//! Error types for game operations.

use thiserror::Error;

/// Errors that can occur while drawing from a deck.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DeckError {
    /// No cards left to draw.
    ///
    /// This is fatal to the current game; the caller must reset.
    #[error("no cards left in the deck")]
    DeckExhausted,
    /// A game can only be dealt from a complete deck.
    #[error("cannot deal from a deck of {0} cards")]
    IncompleteDeck(usize),
}

/// Errors that can occur while constructing or parsing cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CardError {
    /// Rank is outside the thirteen standard ranks.
    #[error("invalid card rank")]
    InvalidRank,
    /// Suit is outside the four standard suits.
    #[error("invalid card suit")]
    InvalidSuit,
}
