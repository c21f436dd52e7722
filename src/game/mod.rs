//! Dealing, turn progression, and the game session.

extern crate alloc;

use alloc::vec::Vec;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::card::{Card, DECK_SIZE};
use crate::deck::Deck;
use crate::error::DeckError;
use crate::hand::Hand;
use crate::options::GameOptions;
use crate::result::{GameResult, resolve};

mod actions;
mod dealer;
pub mod state;

pub use state::{GameStatus, Turn};

/// A snapshot of one game: both hands, the remaining deck, and the turn.
///
/// Every transition returns a new value, so an old snapshot stays valid after
/// an action. Across all transitions the two hands and the deck together hold
/// exactly [`DECK_SIZE`] cards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    player_hand: Hand,
    dealer_hand: Hand,
    deck: Deck,
    turn: Turn,
}

impl GameState {
    /// Deals a game from a complete `deck`.
    ///
    /// The last two cards of the deck go to the player and the two before
    /// them to the dealer. The rest stays as the deck and it is the player's
    /// turn.
    ///
    /// # Errors
    ///
    /// Returns [`DeckError::IncompleteDeck`] unless the deck holds all
    /// [`DECK_SIZE`] cards.
    pub fn deal(deck: &Deck) -> Result<Self, DeckError> {
        if deck.len() != DECK_SIZE {
            return Err(DeckError::IncompleteDeck(deck.len()));
        }
        Ok(Self::deal_unchecked(deck))
    }

    /// Deals from `deck` without checking that it is complete.
    fn deal_unchecked(deck: &Deck) -> Self {
        let (top, deck) = deck.split_top(4);
        let (dealer, player) = top.split_at(top.len().min(2));

        let state = Self {
            player_hand: Hand::from(player.to_vec()),
            dealer_hand: Hand::from(dealer.to_vec()),
            deck,
            turn: Turn::PlayerTurn,
        };
        log::debug!(
            "dealt player {} and dealer {}, {} cards left",
            state.player_hand.score(),
            state.dealer_hand.score(),
            state.deck.len()
        );

        state
    }

    /// Shuffles a fresh deck with `rng` and deals a game from it.
    #[must_use]
    pub fn setup<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self::deal_unchecked(&Deck::new().shuffle(rng))
    }

    /// Returns the player's hand.
    #[must_use]
    pub const fn player_hand(&self) -> &Hand {
        &self.player_hand
    }

    /// Returns the dealer's hand.
    #[must_use]
    pub const fn dealer_hand(&self) -> &Hand {
        &self.dealer_hand
    }

    /// Returns the remaining deck.
    #[must_use]
    pub const fn deck(&self) -> &Deck {
        &self.deck
    }

    /// Returns whose turn it is.
    #[must_use]
    pub const fn turn(&self) -> Turn {
        self.turn
    }

    /// Returns the number of cards left in the deck.
    #[must_use]
    pub fn cards_remaining(&self) -> usize {
        self.deck.len()
    }

    /// Returns whether the player may still hit or stand.
    #[must_use]
    pub fn can_act(&self) -> bool {
        self.turn == Turn::PlayerTurn
    }

    /// Returns the dealer cards that are face up.
    ///
    /// During the player's turn the dealer's first card is the hole card and
    /// stays hidden.
    #[must_use]
    pub fn visible_dealer_cards(&self) -> &[Card] {
        let cards = self.dealer_hand.cards();
        match self.turn {
            Turn::PlayerTurn => cards.get(1..).unwrap_or_default(),
            Turn::DealerTurn => cards,
        }
    }

    /// Returns the dealer's score once the hole card is revealed.
    #[must_use]
    pub fn visible_dealer_score(&self) -> Option<u16> {
        match self.turn {
            Turn::PlayerTurn => None,
            Turn::DealerTurn => Some(self.dealer_hand.score()),
        }
    }

    /// Resolves the current hands. See [`resolve`].
    ///
    /// This can be called in any turn, but the result is only final once it
    /// is the dealer's turn.
    #[must_use]
    pub fn result(&self, options: &GameOptions) -> GameResult {
        resolve(&self.player_hand, &self.dealer_hand, options)
    }

    /// Returns the status to show: the result once the dealer's turn has
    /// produced a decision, the current turn otherwise.
    #[must_use]
    pub fn status(&self, options: &GameOptions) -> GameStatus {
        match self.turn {
            Turn::DealerTurn => match self.result(options) {
                GameResult::NoResult => GameStatus::InProgress(self.turn),
                result => GameStatus::Decided(result),
            },
            Turn::PlayerTurn => GameStatus::InProgress(self.turn),
        }
    }

    /// Returns the number of cards across both hands and the deck.
    #[must_use]
    pub fn total_cards(&self) -> usize {
        self.player_hand.len() + self.dealer_hand.len() + self.deck.len()
    }
}

/// Deals a new game from a freshly shuffled deck using the thread-local RNG.
///
/// Use [`GameState::setup`] or [`Game`] for reproducible shuffles.
#[cfg(feature = "std")]
#[must_use]
pub fn setup_game() -> GameState {
    GameState::setup(&mut rand::rng())
}

/// A single-player game session.
///
/// The session owns the current [`GameState`], the options, and a seeded
/// random number generator used for every reset.
#[derive(Debug, Clone)]
pub struct Game {
    /// Game options.
    options: GameOptions,
    /// Current game state.
    state: GameState,
    /// Random number generator.
    rng: ChaCha8Rng,
}

impl Game {
    /// Creates a new session with the given seed and deals the first game.
    ///
    /// # Example
    ///
    /// ```
    /// use bjrules::{Game, GameOptions, Turn};
    ///
    /// let game = Game::new(GameOptions::default(), 42);
    /// assert_eq!(game.state().turn(), Turn::PlayerTurn);
    /// assert_eq!(game.cards_remaining(), 48);
    /// ```
    #[must_use]
    pub fn new(options: GameOptions, seed: u64) -> Self {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let state = GameState::setup(&mut rng);

        Self {
            options,
            state,
            rng,
        }
    }

    /// Creates a new session whose first game is dealt from `deck`.
    ///
    /// Later resets shuffle fresh decks from `seed`.
    ///
    /// # Errors
    ///
    /// Returns [`DeckError::IncompleteDeck`] unless the deck holds all
    /// [`DECK_SIZE`] cards.
    pub fn from_deck(options: GameOptions, seed: u64, deck: &Deck) -> Result<Self, DeckError> {
        Ok(Self {
            options,
            state: GameState::deal(deck)?,
            rng: ChaCha8Rng::seed_from_u64(seed),
        })
    }

    /// Throws away the current game and deals a new one from a fresh deck.
    pub fn reset(&mut self) {
        self.state = GameState::setup(&mut self.rng);
        log::debug!("game reset");
    }

    /// Returns the current game state.
    #[must_use]
    pub const fn state(&self) -> &GameState {
        &self.state
    }

    /// Returns the game options.
    #[must_use]
    pub const fn options(&self) -> &GameOptions {
        &self.options
    }

    /// Resolves the current hands.
    #[must_use]
    pub fn result(&self) -> GameResult {
        self.state.result(&self.options)
    }

    /// Returns the status to show for the current game.
    #[must_use]
    pub fn status(&self) -> GameStatus {
        self.state.status(&self.options)
    }

    /// Returns the number of cards left in the deck.
    #[must_use]
    pub fn cards_remaining(&self) -> usize {
        self.state.cards_remaining()
    }

    /// Returns whether the player may still hit or stand.
    #[must_use]
    pub fn can_act(&self) -> bool {
        self.state.can_act()
    }

    /// Player action: Hit (draw a card).
    ///
    /// # Errors
    ///
    /// Returns [`DeckError::DeckExhausted`] if the deck is empty. The current
    /// game is left unchanged.
    pub fn hit(&mut self) -> Result<Card, DeckError> {
        let (card, next) = self.state.draw_for_player()?;
        self.state = next;
        Ok(card)
    }

    /// Player action: Stand (end the player's turn).
    ///
    /// Returns the cards the dealer drew in response.
    ///
    /// # Errors
    ///
    /// Returns [`DeckError::DeckExhausted`] if the dealer must draw from an
    /// empty deck. The current game is left unchanged.
    pub fn stand(&mut self) -> Result<Vec<Card>, DeckError> {
        let before = self.state.dealer_hand.len();
        let next = self.state.player_stands(&self.options)?;
        let drawn = next.dealer_hand.cards()[before..].to_vec();
        self.state = next;
        Ok(drawn)
    }
}
