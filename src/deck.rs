//! A shuffled 52-card deck that can be dealt from several threads.

use log::{debug, trace};
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::card::{Card, DECK_SIZE, full_pack};
use crate::error::DeckError;
use crate::hand::HAND_SIZE;
use crate::options::{DeckOptions, ShuffleMethod};
use crate::sync::Mutex;

/// Card order, deal cursor and random source, always locked together.
struct DeckState {
    /// Cards in `[0, dealt)` are out, the rest are still available.
    cards: [Card; DECK_SIZE],
    dealt: usize,
    rng: ChaCha8Rng,
}

impl DeckState {
    fn shuffle(&mut self, method: ShuffleMethod) {
        match method {
            ShuffleMethod::Uniform => self.cards.shuffle(&mut self.rng),
            ShuffleMethod::PairSwaps { rounds } => {
                for _ in 0..rounds {
                    let first = self.rng.random_range(0..DECK_SIZE);
                    let mut second = self.rng.random_range(0..DECK_SIZE);
                    while second == first {
                        second = self.rng.random_range(0..DECK_SIZE);
                    }
                    self.cards.swap(first, second);
                }
            }
        }
    }

    fn deal(&mut self) -> Option<Card> {
        let card = *self.cards.get(self.dealt)?;
        self.dealt += 1;
        Some(card)
    }

    const fn remaining(&self) -> usize {
        DECK_SIZE - self.dealt
    }
}

/// A standard 52-card deck with a deal cursor.
///
/// Every operation takes the deck's single lock, so a `Deck` can be shared
/// by reference between threads and dealt from concurrently without two
/// callers ever receiving the same card.
///
/// # Example
///
/// ```
/// use fivecard::{Deck, DeckOptions};
///
/// let deck = Deck::new(DeckOptions::default(), 42);
/// let first = deck.deal_next().unwrap();
/// assert!(first.is_some());
/// assert_eq!(deck.remaining().unwrap(), 51);
/// ```
pub struct Deck {
    state: Mutex<DeckState>,
    options: DeckOptions,
}

impl Deck {
    /// Creates a deck in canonical order, shuffles it (unless disabled in
    /// `options`) and sets the cursor to the top.
    #[must_use]
    pub fn new(options: DeckOptions, seed: u64) -> Self {
        let mut state = DeckState {
            cards: full_pack(),
            dealt: 0,
            rng: ChaCha8Rng::seed_from_u64(seed),
        };

        if options.shuffle_on_new {
            state.shuffle(options.shuffle);
        }
        debug!("new deck, seed {seed}, shuffled {}", options.shuffle_on_new);

        Self {
            state: Mutex::new(state),
            options,
        }
    }

    /// Returns the options this deck was built with.
    #[must_use]
    pub const fn options(&self) -> &DeckOptions {
        &self.options
    }

    /// Shuffles all 52 cards.
    ///
    /// The cursor is left where it is; call [`Deck::reset`] first when dealt
    /// cards are still held, otherwise which cards count as dealt is
    /// meaningless after the shuffle.
    ///
    /// # Errors
    ///
    /// Returns an error if the deck lock is poisoned.
    pub fn shuffle(&self) -> Result<(), DeckError> {
        let mut state = self.state.lock()?;
        state.shuffle(self.options.shuffle);
        debug!("deck shuffled with {} cards dealt", state.dealt);
        Ok(())
    }

    /// Deals the card at the cursor.
    ///
    /// Returns `None` once all 52 cards are out.
    ///
    /// # Errors
    ///
    /// Returns an error if the deck lock is poisoned.
    pub fn deal_next(&self) -> Result<Option<Card>, DeckError> {
        let mut state = self.state.lock()?;
        let card = state.deal();
        trace!("dealt {card:?}, {} left", state.remaining());
        Ok(card)
    }

    /// Deals a full hand under one lock, so concurrent dealers can't
    /// interleave their draws.
    ///
    /// Returns `None` without dealing anything if fewer than five cards are
    /// left.
    ///
    /// # Errors
    ///
    /// Returns an error if the deck lock is poisoned.
    pub fn deal_hand(&self) -> Result<Option<[Card; HAND_SIZE]>, DeckError> {
        let mut state = self.state.lock()?;
        if state.remaining() < HAND_SIZE {
            debug!("cannot deal a hand, {} cards left", state.remaining());
            return Ok(None);
        }

        let start = state.dealt;
        state.dealt += HAND_SIZE;
        let cards: [Card; HAND_SIZE] = core::array::from_fn(|i| state.cards[start + i]);
        drop(state);

        debug!("dealt hand starting at position {start}");
        Ok(Some(cards))
    }

    /// Puts a dealt card back at the bottom of the deck.
    ///
    /// The card is taken out of the dealt part of the deck, everything after
    /// it moves up one place, the card goes to the last position and the
    /// cursor steps back by one. Returned cards are dealt again only after
    /// every card that was still in the deck.
    ///
    /// # Errors
    ///
    /// Returns an error if the deck lock is poisoned.
    ///
    /// # Panics
    ///
    /// Panics if `card` is not currently dealt. The deck is left untouched.
    pub fn return_card(&self, card: Card) -> Result<(), DeckError> {
        let mut state = self.state.lock()?;
        let dealt = state.dealt;
        let found = state.cards[..dealt].iter().position(|c| *c == card);
        let Some(index) = found else {
            drop(state);
            panic!("returned card {card} was not dealt from this deck");
        };

        state.cards[index..].rotate_left(1);
        state.dealt -= 1;
        trace!("returned {card}, {} left", state.remaining());
        drop(state);

        Ok(())
    }

    /// Deals the card at the cursor and puts `discard` back at the bottom,
    /// both under one lock.
    ///
    /// The replacement is drawn first, so the discard is never dealt straight
    /// back. Returns `None` and leaves the deck untouched if no card is left
    /// to draw.
    ///
    /// # Errors
    ///
    /// Returns an error if the deck lock is poisoned.
    ///
    /// # Panics
    ///
    /// Panics if `discard` is not currently dealt. Nothing is drawn in that
    /// case.
    pub fn exchange(&self, discard: Card) -> Result<Option<Card>, DeckError> {
        let mut state = self.state.lock()?;
        let dealt = state.dealt;
        let found = state.cards[..dealt].iter().position(|c| *c == discard);
        let Some(index) = found else {
            drop(state);
            panic!("returned card {discard} was not dealt from this deck");
        };

        let Some(drawn) = state.deal() else {
            debug!("cannot exchange {discard}, deck is empty");
            return Ok(None);
        };
        state.cards[index..].rotate_left(1);
        state.dealt -= 1;
        trace!("exchanged {discard} for {drawn}, {} left", state.remaining());
        drop(state);

        Ok(Some(drawn))
    }

    /// Moves the cursor back to the top without changing the card order.
    ///
    /// # Errors
    ///
    /// Returns an error if the deck lock is poisoned.
    pub fn reset(&self) -> Result<(), DeckError> {
        self.state.lock()?.dealt = 0;
        debug!("deck reset");
        Ok(())
    }

    /// Returns the number of cards left to deal.
    ///
    /// # Errors
    ///
    /// Returns an error if the deck lock is poisoned.
    pub fn remaining(&self) -> Result<usize, DeckError> {
        Ok(self.state.lock()?.remaining())
    }

    /// Returns the number of cards dealt since the last reset.
    ///
    /// # Errors
    ///
    /// Returns an error if the deck lock is poisoned.
    pub fn dealt(&self) -> Result<usize, DeckError> {
        Ok(self.state.lock()?.dealt)
    }

    /// Returns a copy of the current card order, dealt cards first.
    ///
    /// # Errors
    ///
    /// Returns an error if the deck lock is poisoned.
    pub fn cards(&self) -> Result<[Card; DECK_SIZE], DeckError> {
        Ok(self.state.lock()?.cards)
    }
}

impl core::fmt::Debug for Deck {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Deck")
            .field("options", &self.options)
            .finish_non_exhaustive()
    }
}
