//! Hand categories and the classifier that detects them.
//!
//! Every function here expects the five cards sorted by descending game
//! value, the order [`Hand`](crate::Hand) always keeps them in.

use core::fmt;

use log::trace;

use crate::card::Card;
use crate::hand::HAND_SIZE;

/// One of the ten poker hand categories, ordered from weakest to strongest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Category {
    /// No other category matches.
    HighCard,
    /// Exactly one pair.
    OnePair,
    /// Two pairs of different ranks.
    TwoPair,
    /// Three cards of one rank, the other two unmatched.
    ThreeOfAKind,
    /// Five ranks in sequence, mixed suits.
    Straight,
    /// Five cards of one suit, not in sequence.
    Flush,
    /// Three of one rank and a pair of another.
    FullHouse,
    /// Four cards of one rank.
    FourOfAKind,
    /// Five ranks in sequence, one suit, not ace high.
    StraightFlush,
    /// Ace, king, queen, jack and ten of one suit.
    RoyalFlush,
}

impl Category {
    /// All categories, strongest first: the order they are tested in.
    pub const BY_PRIORITY: [Self; 10] = [
        Self::RoyalFlush,
        Self::StraightFlush,
        Self::FourOfAKind,
        Self::FullHouse,
        Self::Flush,
        Self::Straight,
        Self::ThreeOfAKind,
        Self::TwoPair,
        Self::OnePair,
        Self::HighCard,
    ];

    /// The score every hand of this category starts from.
    ///
    /// Bases are `10^8` apart, far more than any tie-break term adds.
    #[must_use]
    pub const fn base_score(self) -> u32 {
        (self as u32 + 1) * 100_000_000
    }

    /// Human readable name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::HighCard => "High Hand",
            Self::OnePair => "One Pair",
            Self::TwoPair => "Two Pair",
            Self::ThreeOfAKind => "Three Of A Kind",
            Self::Straight => "Straight",
            Self::Flush => "Flush",
            Self::FullHouse => "Full House",
            Self::FourOfAKind => "Four Of A Kind",
            Self::StraightFlush => "Straight Flush",
            Self::RoyalFlush => "Royal Flush",
        }
    }

    /// Tests whether sorted `cards` belong to this category.
    ///
    /// Each test rules out every stronger category, so exactly one category
    /// matches any hand.
    #[must_use]
    pub fn matches(self, cards: &[Card; HAND_SIZE]) -> bool {
        match self {
            Self::RoyalFlush => is_royal_flush(cards),
            Self::StraightFlush => is_straight_flush(cards),
            Self::FourOfAKind => is_four_of_a_kind(cards),
            Self::FullHouse => is_full_house(cards),
            Self::Flush => is_flush(cards),
            Self::Straight => is_straight(cards),
            Self::ThreeOfAKind => is_three_of_a_kind(cards),
            Self::TwoPair => is_two_pair(cards),
            Self::OnePair => is_one_pair(cards),
            Self::HighCard => is_high_card(cards),
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Returns the category of sorted `cards`.
#[must_use]
pub fn classify(cards: &[Card; HAND_SIZE]) -> Category {
    let category = Category::BY_PRIORITY
        .into_iter()
        .find(|category| category.matches(cards))
        .unwrap_or(Category::HighCard);
    trace!("classified {cards:?} as {category}");
    category
}

/// Each game value is one below the previous, or the cards are the wheel.
#[must_use]
pub fn has_sequential_order(cards: &[Card; HAND_SIZE]) -> bool {
    cards
        .windows(2)
        .all(|pair| pair[1].game_value() + 1 == pair[0].game_value())
        || has_ace_low_sequence(cards)
}

/// The cards are A, 5, 4, 3, 2 by face value.
///
/// Sorted by game value the ace comes first, so walking the hand as a ring
/// every face value must be one below the next: 1→5 wraps, then 5→4 … 2→1.
#[must_use]
pub fn has_ace_low_sequence(cards: &[Card; HAND_SIZE]) -> bool {
    (0..HAND_SIZE).all(|i| {
        let next = &cards[(i + 1) % HAND_SIZE];
        let expected = if cards[i].face_value() == 1 {
            5
        } else {
            cards[i].face_value() - 1
        };
        next.face_value() == expected
    })
}

/// All five cards share one suit.
#[must_use]
pub fn has_all_same_suit(cards: &[Card; HAND_SIZE]) -> bool {
    cards.iter().all(|card| card.suit == cards[0].suit)
}

/// Runs of equal game value, in hand order.
fn runs(cards: &[Card]) -> impl Iterator<Item = &[Card]> {
    cards.chunk_by(|a, b| a.game_value() == b.game_value())
}

/// There is a run of exactly `len` cards of equal game value.
///
/// Runs are maximal, so a three of a kind never counts as a pair and a pair
/// never counts as three of a kind.
#[must_use]
pub fn segment_match(cards: &[Card; HAND_SIZE], len: usize) -> bool {
    runs(cards).any(|run| run.len() == len)
}

/// Moves the first run of exactly `len` equal cards to the front, keeping
/// the others in their descending order behind it.
///
/// Returns `None` when there is no such run.
#[must_use]
pub fn segment_sort(cards: &[Card; HAND_SIZE], len: usize) -> Option<[Card; HAND_SIZE]> {
    let mut start = 0;
    for run in runs(cards) {
        if run.len() == len {
            let mut sorted = *cards;
            sorted[..start + len].rotate_right(len);
            return Some(sorted);
        }
        start += run.len();
    }
    None
}

fn is_royal_flush(cards: &[Card; HAND_SIZE]) -> bool {
    cards[0].game_value() == 14
        && has_sequential_order(cards)
        && has_all_same_suit(cards)
        && !has_ace_low_sequence(cards)
}

fn is_straight_flush(cards: &[Card; HAND_SIZE]) -> bool {
    !is_royal_flush(cards) && has_sequential_order(cards) && has_all_same_suit(cards)
}

fn is_four_of_a_kind(cards: &[Card; HAND_SIZE]) -> bool {
    segment_match(cards, 4)
}

fn is_full_house(cards: &[Card; HAND_SIZE]) -> bool {
    segment_match(cards, 3) && segment_match(cards, 2)
}

fn is_flush(cards: &[Card; HAND_SIZE]) -> bool {
    !is_royal_flush(cards) && !is_straight_flush(cards) && has_all_same_suit(cards)
}

fn is_straight(cards: &[Card; HAND_SIZE]) -> bool {
    !is_royal_flush(cards) && !is_straight_flush(cards) && has_sequential_order(cards)
}

fn is_three_of_a_kind(cards: &[Card; HAND_SIZE]) -> bool {
    !is_full_house(cards) && segment_match(cards, 3)
}

fn is_two_pair(cards: &[Card; HAND_SIZE]) -> bool {
    !is_full_house(cards)
        && !is_four_of_a_kind(cards)
        && runs(cards).filter(|run| run.len() == 2).count() == 2
}

fn is_one_pair(cards: &[Card; HAND_SIZE]) -> bool {
    !is_two_pair(cards) && !is_full_house(cards) && segment_match(cards, 2)
}

fn is_high_card(cards: &[Card; HAND_SIZE]) -> bool {
    Category::BY_PRIORITY[..Category::BY_PRIORITY.len() - 1]
        .iter()
        .all(|category| !category.matches(cards))
}
