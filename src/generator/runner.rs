use crate::config::GeneratorConfig;
use crate::direction::Direction;
use crate::distribution::CharDistribution;
use crate::error::{WfResult, WordForgeError};
use crate::generator::{accept_words, prepare_words, Puzzle, Word, WordPosition};
use crate::grid::{Grid, Position};
use crate::placement;
use crate::random::{self, RandomSource};
use crate::verifier::{self, PuzzleResult};
use std::time::{Duration, Instant};
use tracing::{debug, info, warn};

pub const DEFAULT_MAX_ATTEMPTS: usize = 10;
pub const DEFAULT_GRID_SIZE: usize = 12;
pub const DEFAULT_DECOY_DRAWS: usize = 8;

#[derive(Debug, Clone, PartialEq)]
pub struct GeneratorOptions {
    pub grid_size: usize,
    pub allow_backwards: bool,
    pub max_attempts: usize,
    /// Draws per blank cell before keeping a decoy that completes a word.
    /// `1` is plain weighted sampling.
    pub decoy_draws: usize,
    /// Wall-clock budget, checked only between attempts.
    pub max_time: Option<Duration>,
}

impl Default for GeneratorOptions {
    fn default() -> Self {
        Self {
            grid_size: DEFAULT_GRID_SIZE,
            allow_backwards: false,
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            decoy_draws: DEFAULT_DECOY_DRAWS,
            max_time: None,
        }
    }
}

impl From<&GeneratorConfig> for GeneratorOptions {
    fn from(cfg: &GeneratorConfig) -> Self {
        Self {
            grid_size: cfg.grid_size,
            allow_backwards: cfg.allow_backwards,
            max_attempts: cfg.max_attempts,
            decoy_draws: cfg.decoy_draws,
            max_time: cfg.max_time_ms.map(Duration::from_millis),
        }
    }
}

enum AttemptState {
    Preparing,
    Placing {
        grid: Grid,
        distribution: CharDistribution,
    },
    Filling {
        grid: Grid,
        distribution: CharDistribution,
        word_positions: Vec<WordPosition>,
    },
    Validating {
        grid: Grid,
        word_positions: Vec<WordPosition>,
    },
    Accepted(PuzzleResult),
    Retrying,
    Exhausted,
}

pub struct PuzzleGenerator {
    options: GeneratorOptions,
}

impl PuzzleGenerator {
    pub fn new(options: GeneratorOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &GeneratorOptions {
        &self.options
    }

    /// Runs whole-grid attempts until one validates or the budget runs out.
    ///
    /// Fails with [`WordForgeError::NoValidWords`] before any attempt if no
    /// word fits, and with [`WordForgeError::GenerationExhausted`] once the
    /// attempt cap (or time budget) is spent.
    pub fn generate<S, R>(&self, raw: &[S], rng: &mut R) -> WfResult<Puzzle>
    where
        S: AsRef<str>,
        R: RandomSource + ?Sized,
    {
        let opts = &self.options;
        if opts.grid_size == 0 {
            return Err(WordForgeError::Config("grid size must be greater than zero".into()));
        }
        if opts.max_attempts == 0 {
            return Err(WordForgeError::Config("max attempts must be greater than zero".into()));
        }

        let words = prepare_words(raw, opts.grid_size)?;
        let accepted: Vec<String> = accept_words(raw, opts.grid_size)
            .into_iter()
            .map(|w| w.text)
            .collect();

        debug!(
            "Generating {}x{} puzzle for {} words (backwards: {})",
            opts.grid_size,
            opts.grid_size,
            words.len(),
            opts.allow_backwards
        );

        let start_time = Instant::now();
        let mut attempt = 0;
        let mut state = AttemptState::Preparing;

        loop {
            state = match state {
                AttemptState::Preparing => AttemptState::Placing {
                    grid: Grid::new(opts.grid_size),
                    distribution: CharDistribution::build(&words, attempt, opts.max_attempts),
                },

                AttemptState::Placing { mut grid, distribution } => {
                    match self.place_all(&words, &mut grid, rng) {
                        Some(word_positions) => AttemptState::Filling {
                            grid,
                            distribution,
                            word_positions,
                        },
                        None => AttemptState::Retrying,
                    }
                }

                AttemptState::Filling {
                    mut grid,
                    distribution,
                    word_positions,
                } => match fill_blanks(&mut grid, &distribution, &words, opts.decoy_draws, rng) {
                    Ok(()) => AttemptState::Validating {
                        grid,
                        word_positions,
                    },
                    Err(e) => {
                        warn!("Attempt {} discarded: {}", attempt + 1, e);
                        AttemptState::Retrying
                    }
                },

                AttemptState::Validating {
                    grid,
                    word_positions,
                } => {
                    let result = verifier::verify(grid, &words, word_positions);
                    if result.is_valid {
                        AttemptState::Accepted(result)
                    } else {
                        debug!("Attempt {} rejected: duplicate or missing word", attempt + 1);
                        AttemptState::Retrying
                    }
                }

                AttemptState::Accepted(result) => {
                    info!("Puzzle accepted after {} attempt(s)", attempt + 1);
                    return Ok(Puzzle {
                        grid: result.grid,
                        words: accepted,
                        word_positions: result.word_positions,
                        attempts: attempt + 1,
                    });
                }

                AttemptState::Retrying => {
                    attempt += 1;
                    let out_of_time = opts
                        .max_time
                        .is_some_and(|limit| start_time.elapsed() >= limit);
                    if attempt >= opts.max_attempts || out_of_time {
                        AttemptState::Exhausted
                    } else {
                        AttemptState::Preparing
                    }
                }

                AttemptState::Exhausted => {
                    warn!("Giving up after {} attempt(s)", attempt);
                    return Err(WordForgeError::GenerationExhausted { attempts: attempt });
                }
            };
        }
    }

    /// Places every word or gives up on the first one with no legal spot.
    fn place_all<R: RandomSource + ?Sized>(
        &self,
        words: &[Word],
        grid: &mut Grid,
        rng: &mut R,
    ) -> Option<Vec<WordPosition>> {
        let mut placed = Vec::with_capacity(words.len());

        for word in words {
            let mut directions = Direction::catalog(self.options.allow_backwards);
            random::shuffle(rng, &mut directions);

            let mut found = None;
            for direction in directions {
                if let Some(pos) = placement::find_position(&word.graphemes, grid, direction, rng) {
                    found = Some((pos, direction));
                    break;
                }
            }

            let Some((pos, direction)) = found else {
                debug!("No legal placement for '{}'", word.text);
                return None;
            };

            let positions = placement::place(&word.graphemes, grid, pos, direction);
            placed.push(WordPosition {
                word: word.text.clone(),
                positions,
            });
        }

        Some(placed)
    }
}

/// Fills every blank cell from the distribution. A decoy that would complete
/// a word through its cell is redrawn, up to `draws` times; the last draw is
/// kept regardless and left for validation to judge.
fn fill_blanks<R: RandomSource + ?Sized>(
    grid: &mut Grid,
    distribution: &CharDistribution,
    words: &[Word],
    draws: usize,
    rng: &mut R,
) -> WfResult<()> {
    let blanks: Vec<Position> = grid.positions().filter(|&p| grid.is_blank(p)).collect();
    for pos in blanks {
        for _ in 0..draws.max(1) {
            let decoy = distribution
                .sample(rng.next_f64())
                .ok_or_else(|| WordForgeError::Attempt("empty character distribution".into()))?;
            grid.set(pos, decoy);

            let completes_word = words.iter().any(|w| {
                w.graphemes.iter().any(|g| g.as_str() == decoy)
                    && verifier::occurs_through(grid, &w.graphemes, pos)
            });
            if !completes_word {
                break;
            }
        }
    }
    Ok(())
}
