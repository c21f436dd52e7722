use crate::deck::Deck;
use crate::error::DeckError;
use crate::hand::Hand;
use crate::options::{DealerDrawRule, GameOptions};

use super::GameState;

impl GameState {
    /// Plays the dealer's hand when the player stands.
    ///
    /// The dealer draws while its score is at or below
    /// [`GameOptions::dealer_hits_on`]. Under [`DealerDrawRule::Single`] it
    /// stops after the first card regardless of the new score.
    ///
    /// Returns the dealer's final hand and the remaining deck.
    pub(super) fn dealer_draws(&self, options: &GameOptions) -> Result<(Hand, Deck), DeckError> {
        let mut hand = self.dealer_hand.clone();
        let mut deck = self.deck.clone();

        while hand.score() <= options.dealer_hits_on {
            let (card, rest) = deck.take_card()?;
            hand = hand.with_card(card);
            deck = rest;
            log::trace!("dealer draws {card}, score {}", hand.score());

            match options.dealer_draw {
                DealerDrawRule::Single => break,
                DealerDrawRule::UntilStanding => {}
            }
        }

        Ok((hand, deck))
    }
}
