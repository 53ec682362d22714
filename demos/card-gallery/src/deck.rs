//! Card deck loading
//!
//! A deck is a JSON array of card inputs in the host's camelCase shape.

use std::fmt;
use std::io;
use std::path::{Path, PathBuf};

use teaser_card::CardInput;

/// The four showcase cards, one per layout.
pub const SAMPLE_DECK: &str = include_str!("cards.json");

#[derive(Debug)]
pub enum DeckError {
    /// The deck file could not be read
    Read { path: PathBuf, source: io::Error },
    /// The deck is not a JSON array of cards
    Parse(serde_json::Error),
    /// The deck contains no cards
    Empty,
}

impl fmt::Display for DeckError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DeckError::Read { path, source } => {
                write!(f, "could not read deck {}: {}", path.display(), source)
            }
            DeckError::Parse(e) => write!(f, "invalid deck: {}", e),
            DeckError::Empty => write!(f, "deck has no cards"),
        }
    }
}

impl std::error::Error for DeckError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            DeckError::Read { source, .. } => Some(source),
            DeckError::Parse(e) => Some(e),
            DeckError::Empty => None,
        }
    }
}

impl From<serde_json::Error> for DeckError {
    fn from(e: serde_json::Error) -> Self {
        DeckError::Parse(e)
    }
}

/// Parse a deck from JSON.
pub fn parse_deck(json: &str) -> Result<Vec<CardInput>, DeckError> {
    let deck: Vec<CardInput> = serde_json::from_str(json)?;
    if deck.is_empty() {
        return Err(DeckError::Empty);
    }
    Ok(deck)
}

/// Load the deck at `path`, or the sample deck when no path is given.
pub fn load_deck(path: Option<&Path>) -> Result<Vec<CardInput>, DeckError> {
    let Some(path) = path else {
        return parse_deck(SAMPLE_DECK);
    };
    let json = std::fs::read_to_string(path).map_err(|source| DeckError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let deck = parse_deck(&json)?;
    tracing::info!(path = %path.display(), cards = deck.len(), "Deck loaded");
    Ok(deck)
}
