//! Grapheme-cluster segmentation.
//!
//! All counting, comparison and placement goes through [`segment`] so that a
//! word's logical length always equals the number of grid cells it covers.

use unicode_segmentation::UnicodeSegmentation;

/// A single user-perceived character. May span several code points.
pub type Grapheme = String;

pub fn segment(text: &str) -> Vec<Grapheme> {
    text.graphemes(true).map(str::to_owned).collect()
}

pub fn count(text: &str) -> usize {
    text.graphemes(true).count()
}

/// Removes every Unicode whitespace character, including interior ones.
pub fn strip_whitespace(text: &str) -> String {
    text.chars().filter(|c| !c.is_whitespace()).collect()
}
