//! The ordered deck and shuffled copies of it.

use alloc::vec::Vec;
use rand::Rng;
use rand::seq::SliceRandom;
use tracing::debug;

use crate::card::{Card, DECK_SIZE, Rank, Suit};

/// An ordered stack of cards. The top of the deck is the last element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// Builds the standard 52-card deck, suit by suit, Ace through King.
    #[must_use]
    pub fn standard() -> Self {
        let mut cards = Vec::with_capacity(DECK_SIZE);

        for suit in Suit::ALL {
            for rank in Rank::ALL {
                cards.push(Card::new(rank, suit));
            }
        }

        Self { cards }
    }

    /// Builds a deck from an explicit stack. The last card is drawn first.
    #[must_use]
    pub const fn from_cards(cards: Vec<Card>) -> Self {
        Self { cards }
    }

    /// Returns a uniformly shuffled copy of this deck.
    ///
    /// The original deck is left untouched, so the same ordered deck can seed
    /// any number of games.
    ///
    /// # Example
    ///
    /// ```
    /// use hilo_bank::Deck;
    /// use rand::SeedableRng;
    /// use rand_chacha::ChaCha8Rng;
    ///
    /// let deck = Deck::standard();
    /// let mut rng = ChaCha8Rng::seed_from_u64(7);
    /// let shuffled = deck.shuffled(&mut rng);
    /// assert_eq!(shuffled.len(), deck.len());
    /// assert_eq!(deck, Deck::standard());
    /// ```
    #[must_use]
    pub fn shuffled<R: Rng + ?Sized>(&self, rng: &mut R) -> Self {
        let mut cards = self.cards.clone();
        cards.shuffle(rng);
        debug!(cards = cards.len(), "shuffled deck");
        Self { cards }
    }

    /// Removes and returns the top card.
    pub fn draw(&mut self) -> Option<Card> {
        self.cards.pop()
    }

    /// Returns the cards, bottom first.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the number of cards left.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the deck is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

impl Default for Deck {
    fn default() -> Self {
        Self::standard()
    }
}
