//! Game configuration options.

/// How the dealer draws when the player stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[non_exhaustive]
pub enum DealerDrawRule {
    /// The dealer draws at most one card, and only at or below the threshold.
    #[default]
    Single,
    /// The dealer keeps drawing while at or below the threshold.
    UntilStanding,
}

/// Outcome of a tie at 21 where neither hand is a two-card hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[non_exhaustive]
pub enum TieAt21 {
    /// The tie is left undecided.
    #[default]
    NoResult,
    /// The tie is a draw.
    Draw,
}

/// Configuration options for a game.
///
/// The defaults reproduce the base rules. Use the builder methods to
/// customize them:
///
/// ```
/// use bjrules::{DealerDrawRule, GameOptions, TieAt21};
///
/// let options = GameOptions::default()
///     .with_dealer_draw(DealerDrawRule::UntilStanding)
///     .with_multi_card_21_tie(TieAt21::Draw);
/// assert_eq!(options.dealer_hits_on, 16);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GameOptions {
    /// Highest dealer score at which the dealer still draws.
    pub dealer_hits_on: u16,
    /// How many cards the dealer may draw when the player stands.
    pub dealer_draw: DealerDrawRule,
    /// Result of a 21-all tie between hands of three or more cards.
    pub multi_card_21_tie: TieAt21,
}

impl Default for GameOptions {
    fn default() -> Self {
        Self {
            dealer_hits_on: 16,
            dealer_draw: DealerDrawRule::Single,
            multi_card_21_tie: TieAt21::NoResult,
        }
    }
}

impl GameOptions {
    /// Sets the highest dealer score at which the dealer draws.
    ///
    /// # Example
    ///
    /// ```
    /// use bjrules::GameOptions;
    ///
    /// let options = GameOptions::default().with_dealer_hits_on(17);
    /// assert_eq!(options.dealer_hits_on, 17);
    /// ```
    #[must_use]
    pub const fn with_dealer_hits_on(mut self, score: u16) -> Self {
        self.dealer_hits_on = score;
        self
    }

    /// Sets the dealer draw rule.
    ///
    /// # Example
    ///
    /// ```
    /// use bjrules::{DealerDrawRule, GameOptions};
    ///
    /// let options = GameOptions::default().with_dealer_draw(DealerDrawRule::UntilStanding);
    /// assert_eq!(options.dealer_draw, DealerDrawRule::UntilStanding);
    /// ```
    #[must_use]
    pub const fn with_dealer_draw(mut self, rule: DealerDrawRule) -> Self {
        self.dealer_draw = rule;
        self
    }

    /// Sets the result of a 21-all tie without a two-card hand.
    ///
    /// # Example
    ///
    /// ```
    /// use bjrules::{GameOptions, TieAt21};
    ///
    /// let options = GameOptions::default().with_multi_card_21_tie(TieAt21::Draw);
    /// assert_eq!(options.multi_card_21_tie, TieAt21::Draw);
    /// ```
    #[must_use]
    pub const fn with_multi_card_21_tie(mut self, tie: TieAt21) -> Self {
        self.multi_card_21_tie = tie;
        self
    }
}
