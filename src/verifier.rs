use crate::direction::Direction;
use crate::generator::{Word, WordPosition};
use crate::grapheme::Grapheme;
use crate::grid::{Grid, Position};
use crate::placement::anchor_range;
use std::collections::HashSet;
use tracing::debug;

/// Candidate outcome of one attempt.
#[derive(Debug, Clone)]
pub struct PuzzleResult {
    pub grid: Grid,
    pub word_positions: Vec<WordPosition>,
    pub is_valid: bool,
}

/// Cells covered if `graphemes` reads exactly at `pos` along `direction`.
fn reads_at(
    graphemes: &[Grapheme],
    grid: &Grid,
    pos: Position,
    direction: Direction,
) -> Option<Vec<Position>> {
    let size = grid.size();
    let ordered: Vec<&Grapheme> = if direction.is_backward {
        graphemes.iter().rev().collect()
    } else {
        graphemes.iter().collect()
    };

    let mut cells = Vec::with_capacity(ordered.len());
    for (i, g) in ordered.into_iter().enumerate() {
        let cell = pos.offset(direction.d_row(), direction.d_col(), i, size)?;
        if grid.get(cell) != g.as_str() {
            return None;
        }
        cells.push(cell);
    }
    Some(cells)
}

/// Counts distinct occurrences of a word over all 8 directions. Two readings
/// covering the same set of cells (a palindrome, or a one-grapheme word) are
/// the same occurrence.
pub fn count_occurrences(grid: &Grid, graphemes: &[Grapheme]) -> usize {
    let mut seen: HashSet<Vec<Position>> = HashSet::new();

    for direction in Direction::all() {
        let Some((rows, cols)) = anchor_range(graphemes.len(), grid.size(), direction) else {
            continue;
        };
        for r in rows {
            for c in cols.clone() {
                if let Some(mut cells) = reads_at(graphemes, grid, Position::new(r, c), direction) {
                    cells.sort();
                    seen.insert(cells);
                }
            }
        }
    }

    seen.len()
}

/// True if some complete reading of the word passes through `pos`.
pub fn occurs_through(grid: &Grid, graphemes: &[Grapheme], pos: Position) -> bool {
    for direction in Direction::all() {
        for k in 0..graphemes.len() {
            let r = pos.row as isize - direction.d_row() * k as isize;
            let c = pos.col as isize - direction.d_col() * k as isize;
            if r < 0 || c < 0 {
                continue;
            }
            let anchor = Position::new(r as usize, c as usize);
            if reads_at(graphemes, grid, anchor, direction).is_some() {
                return true;
            }
        }
    }
    false
}

/// Re-scans a fully filled grid. Valid iff every word occurs exactly once.
pub fn verify(grid: Grid, words: &[Word], word_positions: Vec<WordPosition>) -> PuzzleResult {
    let mut is_valid = word_positions.len() == words.len();

    for word in words {
        let n = count_occurrences(&grid, &word.graphemes);
        if n != 1 {
            debug!("Word '{}' occurs {} times", word.text, n);
            is_valid = false;
        }
    }

    PuzzleResult {
        grid,
        word_positions,
        is_valid,
    }
}
