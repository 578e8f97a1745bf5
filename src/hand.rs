//! Five-card poker hands.

use core::cmp::Ordering;
use core::fmt;
use core::str::FromStr;

use log::debug;

use crate::card::Card;
use crate::deck::Deck;
use crate::error::{DealError, HandError};
use crate::eval::{self, Category};
use crate::score::{self, Score};

/// Number of cards in a hand.
pub const HAND_SIZE: usize = 5;

/// A five-card poker hand.
///
/// The cards are always kept sorted by descending game value, equal values in
/// suit order, and the hand's category is worked out whenever the cards
/// change. Two hands holding the same five cards are therefore equal.
///
/// # Example
///
/// ```
/// use fivecard::{Category, Hand};
///
/// let hand: Hand = "4D 4C 3S 3H 2D".parse().unwrap();
/// assert_eq!(hand.category(), Category::TwoPair);
/// assert_eq!(hand.score().value(), 300_000_000 + 4 * 225 + 3 * 15 + 2);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hand {
    /// Cards sorted by descending game value.
    cards: [Card; HAND_SIZE],
    /// Category of `cards`.
    category: Category,
}

impl Hand {
    /// Deals a hand from the deck.
    ///
    /// All five cards are drawn under one deck lock, so hands dealt from
    /// several threads at once each receive a consecutive block of cards.
    ///
    /// # Errors
    ///
    /// Returns an error if fewer than five cards are left or the deck lock is
    /// poisoned.
    pub fn deal(deck: &Deck) -> Result<Self, DealError> {
        let cards = deck.deal_hand()?.ok_or(DealError::NotEnoughCards)?;
        let hand = Self::from_cards(cards);
        debug!("dealt {hand}: {}", hand.category);
        Ok(hand)
    }

    /// Creates a hand from five explicit cards, without a deck.
    #[must_use]
    pub fn from_cards(cards: [Card; HAND_SIZE]) -> Self {
        let mut hand = Self {
            cards,
            category: Category::HighCard,
        };
        hand.refresh();
        hand
    }

    /// Replaces all five cards, re-sorting and re-classifying the hand.
    pub fn set_cards(&mut self, cards: [Card; HAND_SIZE]) {
        self.cards = cards;
        self.refresh();
    }

    /// Discards the card at `index` (in sorted order) and draws a
    /// replacement from `deck`.
    ///
    /// The draw and the return happen together in [`Deck::exchange`], so the
    /// same card is never drawn straight back. Returns the discarded card.
    ///
    /// # Errors
    ///
    /// Returns an error if the deck is empty or its lock is poisoned. The
    /// hand and the deck keep their cards in that case.
    ///
    /// # Panics
    ///
    /// Panics if `index` is not below [`HAND_SIZE`], or if the discarded card
    /// was not dealt from `deck`. Nothing is drawn before panicking.
    pub fn replace(&mut self, index: usize, deck: &Deck) -> Result<Card, DealError> {
        assert!(index < HAND_SIZE, "card index {index} out of range");

        let discarded = self.cards[index];
        let drawn = deck
            .exchange(discarded)?
            .ok_or(DealError::NotEnoughCards)?;
        self.cards[index] = drawn;
        self.refresh();

        debug!("replaced {discarded} with {drawn}, now {}", self.category);
        Ok(discarded)
    }

    fn refresh(&mut self) {
        self.cards.sort_by(|a, b| {
            b.game_value()
                .cmp(&a.game_value())
                .then_with(|| a.suit.cmp(&b.suit))
        });
        self.category = eval::classify(&self.cards);
    }

    /// Returns the cards, highest game value first.
    #[must_use]
    pub const fn cards(&self) -> &[Card; HAND_SIZE] {
        &self.cards
    }

    /// Returns the hand's category.
    #[must_use]
    pub const fn category(&self) -> Category {
        self.category
    }

    /// Returns the hand's score.
    #[must_use]
    pub fn score(&self) -> Score {
        score::score(&self.cards, self.category)
    }

    /// Compares the strength of two hands.
    ///
    /// Hands that differ only in suits compare equal.
    #[must_use]
    pub fn compare(&self, other: &Self) -> Ordering {
        self.score().cmp(&other.score())
    }

    /// Returns whether this is a royal flush.
    #[must_use]
    pub fn is_royal_flush(&self) -> bool {
        self.category == Category::RoyalFlush
    }

    /// Returns whether this is a straight flush other than a royal flush.
    #[must_use]
    pub fn is_straight_flush(&self) -> bool {
        self.category == Category::StraightFlush
    }

    /// Returns whether this is four of a kind.
    #[must_use]
    pub fn is_four_of_a_kind(&self) -> bool {
        self.category == Category::FourOfAKind
    }

    /// Returns whether this is a full house.
    #[must_use]
    pub fn is_full_house(&self) -> bool {
        self.category == Category::FullHouse
    }

    /// Returns whether this is a flush that is not a straight.
    #[must_use]
    pub fn is_flush(&self) -> bool {
        self.category == Category::Flush
    }

    /// Returns whether this is a straight of mixed suits.
    #[must_use]
    pub fn is_straight(&self) -> bool {
        self.category == Category::Straight
    }

    /// Returns whether this is three of a kind without a pair.
    #[must_use]
    pub fn is_three_of_a_kind(&self) -> bool {
        self.category == Category::ThreeOfAKind
    }

    /// Returns whether this is two pair.
    #[must_use]
    pub fn is_two_pair(&self) -> bool {
        self.category == Category::TwoPair
    }

    /// Returns whether this is exactly one pair.
    #[must_use]
    pub fn is_one_pair(&self) -> bool {
        self.category == Category::OnePair
    }

    /// Returns whether this hand is only a high card.
    #[must_use]
    pub fn is_high_card(&self) -> bool {
        self.category == Category::HighCard
    }
}

impl fmt::Display for Hand {
    /// Each card followed by its game value, e.g. `AS(14) KS(13) ...`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, card) in self.cards.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{card}({})", card.game_value())?;
        }
        Ok(())
    }
}

impl TryFrom<&[Card]> for Hand {
    type Error = HandError;

    fn try_from(cards: &[Card]) -> Result<Self, Self::Error> {
        let cards: [Card; HAND_SIZE] = cards
            .try_into()
            .map_err(|_| HandError::WrongSize(cards.len()))?;

        for (i, card) in cards.iter().enumerate() {
            if cards[..i].contains(card) {
                return Err(HandError::DuplicateCard(*card));
            }
        }

        Ok(Self::from_cards(cards))
    }
}

impl FromStr for Hand {
    type Err = HandError;

    /// Parses five whitespace separated cards, e.g. `"AS KS QS JS 10S"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut cards = [Card::from_index(0); HAND_SIZE];
        let mut count = 0;
        for token in s.split_whitespace() {
            let card = token.parse::<Card>()?;
            if let Some(slot) = cards.get_mut(count) {
                *slot = card;
            }
            count += 1;
        }

        if count != HAND_SIZE {
            return Err(HandError::WrongSize(count));
        }
        Self::try_from(&cards[..])
    }
}
