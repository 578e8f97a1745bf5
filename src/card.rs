//! Card types and the standard 52-card pack.

use core::fmt;
use core::str::FromStr;

use crate::error::ParseCardError;

/// Card suit.
///
/// Suits never rank against each other in play; they only matter for
/// flushes. The derived ordering just fixes a canonical card order in hands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Suit {
    /// Hearts.
    Hearts,
    /// Diamonds.
    Diamonds,
    /// Clubs.
    Clubs,
    /// Spades.
    Spades,
}

impl Suit {
    /// All suits in canonical pack order.
    pub const ALL: [Self; 4] = [Self::Hearts, Self::Diamonds, Self::Clubs, Self::Spades];

    /// Returns the suit for a canonical index in `0..4`.
    ///
    /// # Panics
    ///
    /// Panics if `index` is 4 or more.
    #[must_use]
    pub const fn from_index(index: usize) -> Self {
        Self::ALL[index]
    }

    /// The single letter used in a card's display string.
    #[must_use]
    pub const fn letter(self) -> char {
        match self {
            Self::Hearts => 'H',
            Self::Diamonds => 'D',
            Self::Clubs => 'C',
            Self::Spades => 'S',
        }
    }

    /// The unicode pip for this suit.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Hearts => '♥',
            Self::Diamonds => '♦',
            Self::Clubs => '♣',
            Self::Spades => '♠',
        }
    }

    const fn from_letter(letter: char) -> Option<Self> {
        match letter.to_ascii_uppercase() {
            'H' => Some(Self::Hearts),
            'D' => Some(Self::Diamonds),
            'C' => Some(Self::Clubs),
            'S' => Some(Self::Spades),
            _ => None,
        }
    }
}

/// Card rank, ordered by its canonical pack index (ace first).
///
/// The discriminant is the canonical index `0..13` that both the face value
/// and the game value are derived from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rank {
    /// Ace.
    Ace = 0,
    /// Two.
    Two,
    /// Three.
    Three,
    /// Four.
    Four,
    /// Five.
    Five,
    /// Six.
    Six,
    /// Seven.
    Seven,
    /// Eight.
    Eight,
    /// Nine.
    Nine,
    /// Ten.
    Ten,
    /// Jack.
    Jack,
    /// Queen.
    Queen,
    /// King.
    King,
}

impl Rank {
    /// All ranks in canonical pack order.
    pub const ALL: [Self; 13] = [
        Self::Ace,
        Self::Two,
        Self::Three,
        Self::Four,
        Self::Five,
        Self::Six,
        Self::Seven,
        Self::Eight,
        Self::Nine,
        Self::Ten,
        Self::Jack,
        Self::Queen,
        Self::King,
    ];

    /// Returns the rank for a canonical index in `0..13`.
    ///
    /// # Panics
    ///
    /// Panics if `index` is 13 or more.
    #[must_use]
    pub const fn from_index(index: usize) -> Self {
        Self::ALL[index]
    }

    /// The canonical index of this rank.
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Face value, 1 (ace) to 13 (king).
    #[must_use]
    pub const fn face_value(self) -> u8 {
        self as u8 + 1
    }

    /// Game value, 2 to 14 with the ace highest.
    #[must_use]
    pub const fn game_value(self) -> u8 {
        match self {
            Self::Ace => 14,
            _ => self.face_value(),
        }
    }

    /// The rank label used in a card's display string.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Ace => "A",
            Self::Two => "2",
            Self::Three => "3",
            Self::Four => "4",
            Self::Five => "5",
            Self::Six => "6",
            Self::Seven => "7",
            Self::Eight => "8",
            Self::Nine => "9",
            Self::Ten => "10",
            Self::Jack => "J",
            Self::Queen => "Q",
            Self::King => "K",
        }
    }

    fn from_label(label: &str) -> Option<Self> {
        let rank = match label {
            "A" | "a" => Self::Ace,
            "2" => Self::Two,
            "3" => Self::Three,
            "4" => Self::Four,
            "5" => Self::Five,
            "6" => Self::Six,
            "7" => Self::Seven,
            "8" => Self::Eight,
            "9" => Self::Nine,
            "10" | "T" | "t" => Self::Ten,
            "J" | "j" => Self::Jack,
            "Q" | "q" => Self::Queen,
            "K" | "k" => Self::King,
            _ => return None,
        };
        Some(rank)
    }
}

/// A playing card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Card {
    /// The rank of the card.
    pub rank: Rank,
    /// The suit of the card.
    pub suit: Suit,
}

impl Card {
    /// Creates a new card.
    #[must_use]
    pub const fn new(rank: Rank, suit: Suit) -> Self {
        Self { rank, suit }
    }

    /// Returns the card at position `index` of a canonical pack, sorted by
    /// suit then rank.
    ///
    /// # Panics
    ///
    /// Panics if `index` is not below [`DECK_SIZE`].
    #[must_use]
    pub const fn from_index(index: usize) -> Self {
        assert!(index < DECK_SIZE, "card index out of range");
        Self::new(Rank::from_index(index % 13), Suit::from_index(index / 13))
    }

    /// Face value, 1 (ace) to 13 (king).
    #[must_use]
    pub const fn face_value(&self) -> u8 {
        self.rank.face_value()
    }

    /// Game value, 2 to 14 with the ace highest.
    #[must_use]
    pub const fn game_value(&self) -> u8 {
        self.rank.game_value()
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rank.label(), self.suit.letter())
    }
}

impl FromStr for Card {
    type Err = ParseCardError;

    /// Parses the display form, e.g. `"10S"`, `"AD"` or `"td"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let mut chars = s.chars();
        let letter = chars.next_back().ok_or(ParseCardError::Empty)?;
        let label = chars.as_str();
        if label.is_empty() {
            return Err(ParseCardError::MissingRank);
        }

        let rank = Rank::from_label(label).ok_or(ParseCardError::InvalidRank)?;
        let suit = Suit::from_letter(letter).ok_or(ParseCardError::InvalidSuit)?;
        Ok(Self::new(rank, suit))
    }
}

/// Number of cards per deck.
pub const DECK_SIZE: usize = 52;

/// Returns a full pack in canonical order: hearts, diamonds, clubs, spades,
/// each from ace to king.
#[must_use]
pub fn full_pack() -> [Card; DECK_SIZE] {
    core::array::from_fn(Card::from_index)
}
