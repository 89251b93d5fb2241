use crate::grapheme::Grapheme;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Cell reached after `i` steps of `(d_row, d_col)`, or `None` once it
    /// leaves a `size x size` grid.
    pub fn offset(&self, d_row: isize, d_col: isize, i: usize, size: usize) -> Option<Position> {
        let r = self.row as isize + d_row * i as isize;
        let c = self.col as isize + d_col * i as isize;
        if r < 0 || c < 0 || r >= size as isize || c >= size as isize {
            return None;
        }
        Some(Position::new(r as usize, c as usize))
    }
}

/// Square matrix of graphemes. An empty string marks an unfilled cell.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Grid {
    size: usize,
    // Row-major
    cells: Vec<Grapheme>,
}

impl Grid {
    pub fn new(size: usize) -> Self {
        Self {
            size,
            cells: vec![String::new(); size * size],
        }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn get(&self, pos: Position) -> &str {
        &self.cells[pos.row * self.size + pos.col]
    }

    pub fn set(&mut self, pos: Position, value: &str) {
        let idx = pos.row * self.size + pos.col;
        self.cells[idx] = value.to_owned();
    }

    pub fn is_blank(&self, pos: Position) -> bool {
        self.get(pos).is_empty()
    }

    pub fn blank_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_empty()).count()
    }

    pub fn positions(&self) -> impl Iterator<Item = Position> + '_ {
        (0..self.size).flat_map(move |r| (0..self.size).map(move |c| Position::new(r, c)))
    }

    pub fn rows(&self) -> impl Iterator<Item = &[Grapheme]> {
        self.cells.chunks(self.size.max(1))
    }

    pub fn to_rows(&self) -> Vec<Vec<Grapheme>> {
        self.rows().map(|r| r.to_vec()).collect()
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.rows() {
            let line: Vec<&str> = row
                .iter()
                .map(|c| if c.is_empty() { "." } else { c.as_str() })
                .collect();
            writeln!(f, "{}", line.join(" "))?;
        }
        Ok(())
    }
}
