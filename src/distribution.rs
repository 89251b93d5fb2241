//! Weighted decoy sampler built from the accepted words' grapheme frequencies.

use crate::generator::Word;
use crate::grapheme::Grapheme;
use std::collections::HashMap;

#[derive(Debug, Clone, PartialEq)]
pub struct CharDistribution {
    /// `(grapheme, cumulative frequency)`, strictly increasing, ending near 1.0.
    entries: Vec<(Grapheme, f64)>,
}

impl CharDistribution {
    /// Early attempts weight filler towards the most common graphemes; by the
    /// last attempt the ranking is fully mirrored so rare graphemes dominate.
    pub fn build(words: &[Word], attempt_index: usize, max_attempts: usize) -> Self {
        let mut order: Vec<&str> = Vec::new();
        let mut counts: HashMap<&str, usize> = HashMap::new();
        let mut total = 0usize;

        for word in words {
            for g in &word.graphemes {
                let entry = counts.entry(g.as_str()).or_insert_with(|| {
                    order.push(g.as_str());
                    0
                });
                *entry += 1;
                total += 1;
            }
        }

        // Stable: ties keep first-appearance order
        let mut ranked: Vec<(&str, usize)> = order.iter().map(|g| (*g, counts[g])).collect();
        ranked.sort_by(|a, b| b.1.cmp(&a.1));

        let t = if max_attempts > 1 {
            (attempt_index as f64 / (max_attempts - 1) as f64).clamp(0.0, 1.0)
        } else {
            0.0
        };

        let n = ranked.len();
        let mut cumulative = 0.0;
        let entries = ranked
            .iter()
            .enumerate()
            .map(|(k, (g, freq))| {
                let mirror = ranked[n - 1 - k].1;
                let blended = *freq as f64 * (1.0 - t) + mirror as f64 * t;
                cumulative += blended / total as f64;
                (g.to_string(), cumulative)
            })
            .collect();

        Self { entries }
    }

    /// First entry whose cumulative frequency reaches `draw`; the last entry
    /// if float drift leaves none. `None` only for an empty distribution.
    pub fn sample(&self, draw: f64) -> Option<&str> {
        self.entries
            .iter()
            .find(|(_, cum)| *cum >= draw)
            .or_else(|| self.entries.last())
            .map(|(g, _)| g.as_str())
    }

    pub fn entries(&self) -> &[(Grapheme, f64)] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
