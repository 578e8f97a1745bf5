//! A five-card poker hand evaluator with optional `no_std` support.
//!
//! The crate provides a thread-safe [`Deck`] to deal from and a [`Hand`]
//! type that classifies five cards into a [`Category`] and gives them a
//! [`Score`]. Scores order every pair of hands by the official rules: suits
//! never rank, kickers break ties and the ace plays low in the A-5-4-3-2
//! straight.
//!
//! # Example
//!
//! ```
//! use fivecard::{Category, Deck, DeckOptions, Hand};
//!
//! let deck = Deck::new(DeckOptions::default(), 42);
//! let dealt = Hand::deal(&deck).unwrap();
//! let _ = dealt.score();
//!
//! let royal: Hand = "AS KS QS JS 10S".parse().unwrap();
//! let steel_wheel: Hand = "5H 4H 3H 2H AH".parse().unwrap();
//! assert_eq!(royal.category(), Category::RoyalFlush);
//! assert_eq!(steel_wheel.category(), Category::StraightFlush);
//! assert!(royal.score() > steel_wheel.score());
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

pub mod card;
pub mod deck;
pub mod error;
pub mod eval;
pub mod hand;
pub mod options;
pub mod score;
mod sync;

// Re-export main types
pub use card::{Card, DECK_SIZE, Rank, Suit, full_pack};
pub use deck::Deck;
pub use error::{DealError, DeckError, HandError, ParseCardError};
pub use eval::Category;
pub use hand::{HAND_SIZE, Hand};
pub use options::{DeckOptions, ShuffleMethod};
pub use score::Score;
