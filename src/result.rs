//! Outcome resolution.

use core::fmt;

use crate::hand::Hand;
use crate::options::{GameOptions, TieAt21};

/// Outcome of comparing the player's hand with the dealer's.
///
/// This is never stored; it is recomputed from the hands whenever asked for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameResult {
    /// The player wins.
    PlayerWin,
    /// The dealer wins.
    DealerWin,
    /// Both hands tie.
    Draw,
    /// No decision (both bust, or an unresolved tie).
    NoResult,
}

impl GameResult {
    /// Returns whether a decision has been reached.
    #[must_use]
    pub const fn is_decided(self) -> bool {
        !matches!(self, Self::NoResult)
    }
}

impl fmt::Display for GameResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::PlayerWin => "player_win",
            Self::DealerWin => "dealer_win",
            Self::Draw => "draw",
            Self::NoResult => "no_result",
        };
        f.write_str(label)
    }
}

/// Resolves the outcome of a player hand against a dealer hand.
///
/// Rules are applied in order, the first match wins:
///
/// 1. Both bust: no result.
/// 2. Player bust, or dealer higher without busting: dealer wins.
/// 3. Dealer bust, or player higher without busting: player wins.
/// 4. Equal scores below 21 draw. At 21 a two-card hand beats a longer one
///    and two two-card hands draw; two longer hands fall back to
///    [`GameOptions::multi_card_21_tie`].
#[must_use]
pub fn resolve(player: &Hand, dealer: &Hand, options: &GameOptions) -> GameResult {
    let player_total = player.score();
    let dealer_total = dealer.score();

    if player_total > 21 && dealer_total > 21 {
        return GameResult::NoResult;
    }

    if player_total > 21 || (dealer_total > player_total && dealer_total <= 21) {
        return GameResult::DealerWin;
    }

    if dealer_total > 21 || (player_total > dealer_total && player_total <= 21) {
        return GameResult::PlayerWin;
    }

    if player_total != dealer_total {
        return GameResult::NoResult;
    }

    if player_total != 21 {
        return GameResult::Draw;
    }

    match (player.is_blackjack(), dealer.is_blackjack()) {
        (true, true) => GameResult::Draw,
        (true, false) => GameResult::PlayerWin,
        (false, true) => GameResult::DealerWin,
        (false, false) => match options.multi_card_21_tie {
            TieAt21::NoResult => GameResult::NoResult,
            TieAt21::Draw => GameResult::Draw,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card::{Card, Rank, Suit};

    fn hand(ranks: &[Rank]) -> Hand {
        ranks
            .iter()
            .map(|&rank| Card::new(Suit::Clubs, rank))
            .collect()
    }

    fn resolve_default(player: &[Rank], dealer: &[Rank]) -> GameResult {
        resolve(&hand(player), &hand(dealer), &GameOptions::default())
    }

    #[test]
    fn dealer_bust_gives_player_win() {
        let result = resolve_default(&[Rank::King, Rank::Queen], &[Rank::Ten, Rank::Six, Rank::Six]);
        assert_eq!(result, GameResult::PlayerWin);
    }

    #[test]
    fn player_bust_gives_dealer_win() {
        let result = resolve_default(&[Rank::Ten, Rank::Six, Rank::Six], &[Rank::Ten, Rank::Eight]);
        assert_eq!(result, GameResult::DealerWin);
    }

    #[test]
    fn both_bust_has_no_result() {
        let result = resolve_default(
            &[Rank::Ten, Rank::Six, Rank::Six],
            &[Rank::Ten, Rank::Five, Rank::Nine],
        );
        assert_eq!(result, GameResult::NoResult);
    }

    #[test]
    fn higher_total_wins() {
        assert_eq!(
            resolve_default(&[Rank::Ten, Rank::Nine], &[Rank::Ten, Rank::Seven]),
            GameResult::PlayerWin
        );
        assert_eq!(
            resolve_default(&[Rank::Ten, Rank::Seven], &[Rank::Ten, Rank::Nine]),
            GameResult::DealerWin
        );
    }

    #[test]
    fn equal_totals_below_twenty_one_draw() {
        let result = resolve_default(&[Rank::Ten, Rank::Nine], &[Rank::Nine, Rank::Jack]);
        assert_eq!(result, GameResult::Draw);
    }

    #[test]
    fn two_blackjacks_draw() {
        let result = resolve_default(&[Rank::Ace, Rank::King], &[Rank::Queen, Rank::Ace]);
        assert_eq!(result, GameResult::Draw);
    }

    #[test]
    fn blackjack_beats_three_card_twenty_one() {
        assert_eq!(
            resolve_default(&[Rank::Ace, Rank::King], &[Rank::Seven, Rank::Seven, Rank::Seven]),
            GameResult::PlayerWin
        );
        assert_eq!(
            resolve_default(&[Rank::Seven, Rank::Seven, Rank::Seven], &[Rank::Ace, Rank::Jack]),
            GameResult::DealerWin
        );
    }

    #[test]
    fn multi_card_twenty_one_tie_follows_option() {
        let player = hand(&[Rank::Seven, Rank::Seven, Rank::Seven]);
        let dealer = hand(&[Rank::Five, Rank::Six, Rank::Ten]);

        assert_eq!(
            resolve(&player, &dealer, &GameOptions::default()),
            GameResult::NoResult
        );

        let options = GameOptions::default().with_multi_card_21_tie(TieAt21::Draw);
        assert_eq!(resolve(&player, &dealer, &options), GameResult::Draw);
    }

    #[test]
    fn labels_use_snake_case_names() {
        assert_eq!(alloc::format!("{}", GameResult::PlayerWin), "player_win");
        assert_eq!(alloc::format!("{}", GameResult::NoResult), "no_result");
        assert!(GameResult::Draw.is_decided());
        assert!(!GameResult::NoResult.is_decided());
    }
}
