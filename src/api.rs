use crate::error::WfResult;
use crate::generator::{GeneratorOptions, Puzzle, PuzzleGenerator, WordPosition};
use crate::grapheme::Grapheme;
use crate::random::{self, RandomSource};
use serde::{Deserialize, Serialize};

/// Generates with the system RNG and default attempt cap.
pub fn generate<S: AsRef<str>>(
    words: &[S],
    grid_size: usize,
    allow_backwards: bool,
) -> WfResult<Puzzle> {
    let mut rng = fastrand::Rng::new();
    generate_with(words, grid_size, allow_backwards, &mut rng)
}

pub fn generate_seeded<S: AsRef<str>>(
    words: &[S],
    grid_size: usize,
    allow_backwards: bool,
    seed: u64,
) -> WfResult<Puzzle> {
    let mut rng = random::seeded(Some(seed));
    generate_with(words, grid_size, allow_backwards, &mut rng)
}

pub fn generate_with<S, R>(
    words: &[S],
    grid_size: usize,
    allow_backwards: bool,
    rng: &mut R,
) -> WfResult<Puzzle>
where
    S: AsRef<str>,
    R: RandomSource + ?Sized,
{
    let options = GeneratorOptions {
        grid_size,
        allow_backwards,
        ..Default::default()
    };
    PuzzleGenerator::new(options).generate(words, rng)
}

/// What a rendering or export layer consumes.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PuzzleExport {
    pub grid: Vec<Vec<Grapheme>>,
    pub words: Vec<String>,
    pub word_positions: Vec<WordPosition>,
}

impl From<&Puzzle> for PuzzleExport {
    fn from(puzzle: &Puzzle) -> Self {
        Self {
            grid: puzzle.grid.to_rows(),
            words: puzzle.words.clone(),
            word_positions: puzzle.word_positions.clone(),
        }
    }
}

impl PuzzleExport {
    pub fn to_json(&self) -> WfResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
