use crate::direction::Direction;
use crate::grapheme::Grapheme;
use crate::grid::{Grid, Position};
use crate::random::RandomSource;
use std::ops::RangeInclusive;

/// Graphemes in the order they are written along the ray.
fn write_order<'a>(
    graphemes: &'a [Grapheme],
    direction: Direction,
) -> Box<dyn Iterator<Item = &'a Grapheme> + 'a> {
    if direction.is_backward {
        Box::new(graphemes.iter().rev())
    } else {
        Box::new(graphemes.iter())
    }
}

/// Checks bounds and cell compatibility without touching the grid. A cell is
/// compatible when blank or already holding the grapheme to be written there.
pub fn can_place(graphemes: &[Grapheme], grid: &Grid, pos: Position, direction: Direction) -> bool {
    let size = grid.size();
    for (i, g) in write_order(graphemes, direction).enumerate() {
        let Some(cell) = pos.offset(direction.d_row(), direction.d_col(), i, size) else {
            return false;
        };
        let existing = grid.get(cell);
        if !existing.is_empty() && existing != g.as_str() {
            return false;
        }
    }
    true
}

/// Legal anchor values along one axis for a step of `delta` (-1, 0 or 1).
/// Empty when the word cannot fit.
fn axis_range(delta: isize, len: usize, size: usize) -> Option<RangeInclusive<usize>> {
    if len == 0 || len > size {
        return None;
    }
    Some(match delta {
        1 => 0..=size - len,
        -1 => len - 1..=size - 1,
        _ => 0..=size - 1,
    })
}

/// Row and column ranges from which a word of `len` graphemes stays in bounds.
pub fn anchor_range(
    len: usize,
    size: usize,
    direction: Direction,
) -> Option<(RangeInclusive<usize>, RangeInclusive<usize>)> {
    let rows = axis_range(direction.d_row(), len, size)?;
    let cols = axis_range(direction.d_col(), len, size)?;
    Some((rows, cols))
}

/// Enumerates every legal anchor for `direction` and picks one uniformly.
pub fn find_position<R: RandomSource + ?Sized>(
    graphemes: &[Grapheme],
    grid: &Grid,
    direction: Direction,
    rng: &mut R,
) -> Option<Position> {
    let (rows, cols) = anchor_range(graphemes.len(), grid.size(), direction)?;

    let candidates: Vec<Position> = rows
        .flat_map(|r| cols.clone().map(move |c| Position::new(r, c)))
        .filter(|&p| can_place(graphemes, grid, p, direction))
        .collect();

    if candidates.is_empty() {
        return None;
    }
    Some(candidates[rng.index(candidates.len())])
}

/// Writes the word and returns the covered cells in write order. `pos` must
/// already have passed [`can_place`].
pub fn place(graphemes: &[Grapheme], grid: &mut Grid, pos: Position, direction: Direction) -> Vec<Position> {
    let size = grid.size();
    let mut written = Vec::with_capacity(graphemes.len());
    for (i, g) in write_order(graphemes, direction).enumerate() {
        if let Some(cell) = pos.offset(direction.d_row(), direction.d_col(), i, size) {
            grid.set(cell, g);
            written.push(cell);
        }
    }
    written
}
