pub mod runner;

pub use self::runner::{GeneratorOptions, PuzzleGenerator};

use crate::error::{WfResult, WordForgeError};
use crate::grapheme::{self, Grapheme};
use crate::grid::{Grid, Position};
use serde::{Deserialize, Serialize};

/// An input word after whitespace stripping and segmentation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Word {
    pub text: String,
    pub graphemes: Vec<Grapheme>,
}

impl Word {
    pub fn new(raw: &str) -> Self {
        let text = grapheme::strip_whitespace(raw);
        let graphemes = grapheme::segment(&text);
        Self { text, graphemes }
    }

    pub fn len(&self) -> usize {
        self.graphemes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.graphemes.is_empty()
    }
}

/// A placed word and the cells it covers, in write order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordPosition {
    pub word: String,
    pub positions: Vec<Position>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Puzzle {
    pub grid: Grid,
    /// Accepted words in input order.
    pub words: Vec<String>,
    /// One entry per word, in placement (longest-first) order.
    pub word_positions: Vec<WordPosition>,
    pub attempts: usize,
}

/// Placeable words, in input order.
pub fn accept_words<S: AsRef<str>>(raw: &[S], grid_size: usize) -> Vec<Word> {
    raw.iter()
        .map(|w| Word::new(w.as_ref()))
        .filter(|w| !w.is_empty() && w.len() <= grid_size)
        .collect()
}

/// Strips, segments and filters raw input, returning the placeable words
/// longest first. Equal lengths keep input order.
pub fn prepare_words<S: AsRef<str>>(raw: &[S], grid_size: usize) -> WfResult<Vec<Word>> {
    let mut words = accept_words(raw, grid_size);

    if words.is_empty() {
        return Err(WordForgeError::NoValidWords);
    }

    words.sort_by(|a, b| b.len().cmp(&a.len()));
    Ok(words)
}
