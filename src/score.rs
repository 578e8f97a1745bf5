//! Scoring of classified hands.
//!
//! A score is the category's base plus a tie-break term that weighs the
//! deciding card values in base 15. Game values never exceed 14, so no
//! weighted position can carry into the next one, and the largest tie-break
//! term (`14 * 15^4 + … + 14`, under 760 000) stays far below the `10^8` gap
//! between category bases.

use core::fmt;

use crate::card::Card;
use crate::eval::{Category, has_ace_low_sequence, segment_sort};
use crate::hand::HAND_SIZE;

/// Positional weight base for tie-break values.
const BASE: u32 = 15;

/// A hand's strength. Higher scores beat lower ones and equal scores tie.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Score(u32);

impl Score {
    /// The raw score value.
    #[must_use]
    pub const fn value(self) -> u32 {
        self.0
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl From<Score> for u32 {
    fn from(score: Score) -> Self {
        score.0
    }
}

/// Scores sorted `cards` already classified as `category`.
///
/// # Panics
///
/// Panics if `category` is not the category of `cards`.
#[must_use]
pub fn score(cards: &[Card; HAND_SIZE], category: Category) -> Score {
    let tie_break = match category {
        Category::RoyalFlush => 0,
        Category::StraightFlush | Category::Straight => u32::from(straight_high(cards)),
        Category::FourOfAKind => {
            let sorted = run_first(cards, 4);
            weigh(&[sorted[0], sorted[4]])
        }
        Category::FullHouse | Category::ThreeOfAKind => {
            u32::from(run_first(cards, 3)[0].game_value())
        }
        Category::Flush | Category::HighCard => weigh(cards),
        Category::TwoPair => {
            let (high, low, kicker) = two_pair_parts(cards);
            weigh(&[high, low, kicker])
        }
        Category::OnePair => {
            let sorted = run_first(cards, 2);
            weigh(&[sorted[0], sorted[2], sorted[3], sorted[4]])
        }
    };

    Score(category.base_score() + tie_break)
}

/// Top card of a straight; the wheel plays its ace low, so its five counts.
fn straight_high(cards: &[Card; HAND_SIZE]) -> u8 {
    if has_ace_low_sequence(cards) {
        cards[1].game_value()
    } else {
        cards[0].game_value()
    }
}

/// Game values weighted as base 15 digits, most significant first.
fn weigh(cards: &[Card]) -> u32 {
    cards
        .iter()
        .fold(0, |acc, card| acc * BASE + u32::from(card.game_value()))
}

fn run_first(cards: &[Card; HAND_SIZE], len: usize) -> [Card; HAND_SIZE] {
    segment_sort(cards, len)
        .unwrap_or_else(|| panic!("scored hand has no run of {len}: {cards:?}"))
}

/// High pair, low pair and kicker of a two pair hand.
///
/// The kicker sits at the front, in the middle or at the end of the sorted
/// cards.
fn two_pair_parts(cards: &[Card; HAND_SIZE]) -> (Card, Card, Card) {
    let value = |i: usize| cards[i].game_value();
    if value(0) != value(1) {
        (cards[1], cards[3], cards[0])
    } else if value(2) != value(3) {
        (cards[0], cards[3], cards[2])
    } else {
        (cards[0], cards[2], cards[4])
    }
}
