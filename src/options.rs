//! Deck configuration options.

use crate::card::DECK_SIZE;

/// How a deck permutes its cards when shuffled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[non_exhaustive]
pub enum ShuffleMethod {
    /// A single Fisher-Yates pass, every permutation equally likely.
    #[default]
    Uniform,
    /// Repeatedly swaps two distinct random positions.
    PairSwaps {
        /// Number of swaps performed per shuffle.
        rounds: usize,
    },
}

impl ShuffleMethod {
    /// Pair swapping with one swap per ordered pair of positions (52²).
    #[must_use]
    pub const fn pair_swaps() -> Self {
        Self::PairSwaps {
            rounds: DECK_SIZE * DECK_SIZE,
        }
    }
}

/// Configuration options for a deck.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use fivecard::{DeckOptions, ShuffleMethod};
///
/// let options = DeckOptions::default()
///     .with_shuffle(ShuffleMethod::pair_swaps())
///     .with_shuffle_on_new(false);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeckOptions {
    /// Shuffle algorithm.
    pub shuffle: ShuffleMethod,
    /// Whether a new deck is shuffled before first use.
    ///
    /// When disabled the deck starts in canonical order (hearts, diamonds,
    /// clubs, spades, each from ace to king).
    pub shuffle_on_new: bool,
}

impl Default for DeckOptions {
    fn default() -> Self {
        Self {
            shuffle: ShuffleMethod::Uniform,
            shuffle_on_new: true,
        }
    }
}

impl DeckOptions {
    /// Sets the shuffle algorithm.
    ///
    /// # Example
    ///
    /// ```
    /// use fivecard::{DeckOptions, ShuffleMethod};
    ///
    /// let options = DeckOptions::default().with_shuffle(ShuffleMethod::PairSwaps { rounds: 100 });
    /// assert_eq!(options.shuffle, ShuffleMethod::PairSwaps { rounds: 100 });
    /// ```
    #[must_use]
    pub const fn with_shuffle(mut self, shuffle: ShuffleMethod) -> Self {
        self.shuffle = shuffle;
        self
    }

    /// Sets whether a new deck is shuffled.
    ///
    /// # Example
    ///
    /// ```
    /// use fivecard::DeckOptions;
    ///
    /// let options = DeckOptions::default().with_shuffle_on_new(false);
    /// assert!(!options.shuffle_on_new);
    /// ```
    #[must_use]
    pub const fn with_shuffle_on_new(mut self, shuffle: bool) -> Self {
        self.shuffle_on_new = shuffle;
        self
    }
}
