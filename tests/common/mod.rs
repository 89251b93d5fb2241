#![allow(dead_code)]

use std::collections::HashSet;
use wordforge::grapheme;
use wordforge::grid::{Grid, Position};

/// Independent scan over the 8 compass vectors. Readings covering the same
/// cells count once.
pub fn occurrences(grid: &Grid, word: &str) -> usize {
    let target = grapheme::segment(word);
    let n = grid.size() as isize;
    let mut seen = HashSet::new();

    for r in 0..n {
        for c in 0..n {
            for dr in -1..=1isize {
                for dc in -1..=1isize {
                    if dr == 0 && dc == 0 {
                        continue;
                    }
                    let mut cells = Vec::new();
                    for (i, g) in target.iter().enumerate() {
                        let rr = r + dr * i as isize;
                        let cc = c + dc * i as isize;
                        if rr < 0 || cc < 0 || rr >= n || cc >= n {
                            break;
                        }
                        let pos = Position::new(rr as usize, cc as usize);
                        if grid.get(pos) != g.as_str() {
                            break;
                        }
                        cells.push(pos);
                    }
                    if cells.len() == target.len() {
                        cells.sort();
                        seen.insert(cells);
                    }
                }
            }
        }
    }
    seen.len()
}

/// Small LCG so tests can drive the engine from a plain closure.
pub fn lcg(seed: u64) -> impl FnMut() -> f64 {
    let mut state = seed;
    move || {
        state = state
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        (state >> 11) as f64 / (1u64 << 53) as f64
    }
}
