//! Error types for deck and hand operations.

use thiserror::Error;

use crate::card::Card;

/// Errors that can occur while accessing the deck.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DeckError {
    /// Another thread panicked while holding the deck lock.
    #[error("deck lock poisoned by a panicked dealer")]
    Poisoned,
}

/// Errors that can occur while dealing a hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DealError {
    /// Not enough cards left in the deck for a full hand.
    #[error("not enough cards left in the deck")]
    NotEnoughCards,
    /// The deck could not be accessed.
    #[error(transparent)]
    Deck(#[from] DeckError),
}

/// Errors that can occur while building a hand from loose cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum HandError {
    /// A hand needs exactly five cards.
    #[error("a hand holds exactly 5 cards, got {0}")]
    WrongSize(usize),
    /// The same card appears twice.
    #[error("card {0} appears more than once")]
    DuplicateCard(Card),
    /// One of the cards could not be parsed.
    #[error(transparent)]
    Card(#[from] ParseCardError),
}

/// Errors that can occur while parsing a card string such as `"10S"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ParseCardError {
    /// The input was empty.
    #[error("empty card string")]
    Empty,
    /// Only a suit letter was given.
    #[error("missing card rank")]
    MissingRank,
    /// The rank label is not one of A, 2-10, J, Q, K.
    #[error("invalid card rank")]
    InvalidRank,
    /// The suit letter is not one of H, D, C, S.
    #[error("invalid card suit")]
    InvalidSuit,
}
