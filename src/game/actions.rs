use crate::card::Card;
use crate::error::DeckError;
use crate::options::GameOptions;

use super::{GameState, Turn};

impl GameState {
    /// Draws one card for the player, returning it with the new state.
    pub(super) fn draw_for_player(&self) -> Result<(Card, Self), DeckError> {
        let (card, deck) = self.deck.take_card()?;
        let player_hand = self.player_hand.with_card(card);
        log::debug!("player hits {card}, score {}", player_hand.score());

        let next = Self {
            player_hand,
            dealer_hand: self.dealer_hand.clone(),
            deck,
            turn: self.turn,
        };
        Ok((card, next))
    }

    /// Player action: Hit (draw a card).
    ///
    /// The turn is not checked; callers disable the action once
    /// [`can_act`](Self::can_act) is false.
    ///
    /// # Errors
    ///
    /// Returns [`DeckError::DeckExhausted`] if the deck is empty.
    pub fn player_hits(&self) -> Result<Self, DeckError> {
        self.draw_for_player().map(|(_, next)| next)
    }

    /// Player action: Stand (pass play to the dealer).
    ///
    /// The dealer draws according to [`GameOptions::dealer_draw`] before the
    /// turn moves to [`Turn::DealerTurn`].
    ///
    /// # Errors
    ///
    /// Returns [`DeckError::DeckExhausted`] if the dealer must draw from an
    /// empty deck.
    pub fn player_stands(&self, options: &GameOptions) -> Result<Self, DeckError> {
        let (dealer_hand, deck) = self.dealer_draws(options)?;
        log::debug!(
            "player stands on {}, dealer finishes on {}",
            self.player_hand.score(),
            dealer_hand.score()
        );

        Ok(Self {
            player_hand: self.player_hand.clone(),
            dealer_hand,
            deck,
            turn: Turn::DealerTurn,
        })
    }
}

#[cfg(test)]
mod tests {
    use crate::card::{Rank, Suit};
    use crate::deck::Deck;
    use crate::options::DealerDrawRule;

    use super::*;

    fn card(suit: Suit, rank: Rank) -> Card {
        Card::new(suit, rank)
    }

    /// Deals from a deck whose first draws are, in order: player, player,
    /// dealer, dealer, then `rest`.
    fn stacked_state(player: [Card; 2], dealer: [Card; 2], rest: &[Card]) -> GameState {
        let mut draws = alloc::vec![player[1], player[0], dealer[1], dealer[0]];
        draws.extend_from_slice(rest);
        GameState::deal(&Deck::stacked(&draws)).unwrap()
    }

    #[test]
    fn hit_grows_player_hand_by_one() {
        let state = stacked_state(
            [card(Suit::Hearts, Rank::Five), card(Suit::Clubs, Rank::Six)],
            [card(Suit::Spades, Rank::Ten), card(Suit::Diamonds, Rank::Nine)],
            &[card(Suit::Hearts, Rank::Four)],
        );

        let next = state.player_hits().unwrap();
        assert_eq!(next.player_hand().len(), 3);
        assert_eq!(next.player_hand().cards()[2], card(Suit::Hearts, Rank::Four));
        assert_eq!(next.cards_remaining(), state.cards_remaining() - 1);
        assert_eq!(next.turn(), Turn::PlayerTurn);
        assert_eq!(next.dealer_hand(), state.dealer_hand());
        assert_eq!(state.player_hand().len(), 2);
    }

    #[test]
    fn stand_draws_once_for_dealer_at_sixteen() {
        let state = stacked_state(
            [card(Suit::Hearts, Rank::Ten), card(Suit::Clubs, Rank::Eight)],
            [card(Suit::Spades, Rank::Ten), card(Suit::Diamonds, Rank::Six)],
            &[card(Suit::Hearts, Rank::Two), card(Suit::Clubs, Rank::Three)],
        );

        let next = state.player_stands(&GameOptions::default()).unwrap();
        assert_eq!(next.turn(), Turn::DealerTurn);
        assert_eq!(next.dealer_hand().len(), 3);
        assert_eq!(next.dealer_hand().score(), 18);
        assert_eq!(next.cards_remaining(), state.cards_remaining() - 1);
    }

    #[test]
    fn single_draw_can_leave_dealer_below_seventeen() {
        let state = stacked_state(
            [card(Suit::Hearts, Rank::Ten), card(Suit::Clubs, Rank::Eight)],
            [card(Suit::Spades, Rank::Two), card(Suit::Diamonds, Rank::Three)],
            &[card(Suit::Hearts, Rank::Four), card(Suit::Clubs, Rank::Ten)],
        );

        let next = state.player_stands(&GameOptions::default()).unwrap();
        assert_eq!(next.dealer_hand().len(), 3);
        assert_eq!(next.dealer_hand().score(), 9);
    }

    #[test]
    fn stand_without_draw_above_threshold() {
        let state = stacked_state(
            [card(Suit::Hearts, Rank::Ten), card(Suit::Clubs, Rank::Eight)],
            [card(Suit::Spades, Rank::Ten), card(Suit::Diamonds, Rank::Seven)],
            &[],
        );

        let next = state.player_stands(&GameOptions::default()).unwrap();
        assert_eq!(next.turn(), Turn::DealerTurn);
        assert_eq!(next.dealer_hand(), state.dealer_hand());
        assert_eq!(next.deck(), state.deck());
    }

    #[test]
    fn until_standing_keeps_drawing_past_threshold() {
        let state = stacked_state(
            [card(Suit::Hearts, Rank::Ten), card(Suit::Clubs, Rank::Eight)],
            [card(Suit::Spades, Rank::Two), card(Suit::Diamonds, Rank::Three)],
            &[
                card(Suit::Hearts, Rank::Four),
                card(Suit::Clubs, Rank::Five),
                card(Suit::Clubs, Rank::Ten),
            ],
        );
        let options = GameOptions::default().with_dealer_draw(DealerDrawRule::UntilStanding);

        let next = state.player_stands(&options).unwrap();
        assert_eq!(next.dealer_hand().len(), 5);
        assert_eq!(next.dealer_hand().score(), 24);
        assert_eq!(next.total_cards(), 52);
    }
}
