use crate::reports;
use clap::Args;
use std::fs;
use std::path::PathBuf;
use tracing::info;
use wordforge::config::GeneratorConfig;
use wordforge::random;
use wordforge::{GeneratorOptions, PuzzleExport, PuzzleGenerator, WfResult};

#[derive(Args, Debug, Clone)]
pub struct GenerateArgs {
    #[command(flatten)]
    pub config: GeneratorConfig,

    /// Words to hide in the grid
    pub words: Vec<String>,

    /// Read additional words from a file, one per line
    #[arg(short = 'f', long)]
    pub words_file: Option<PathBuf>,

    #[arg(short = 'S', long)]
    pub seed: Option<u64>,

    /// Print the puzzle as JSON instead of tables
    #[arg(long, default_value_t = false)]
    pub json: bool,

    /// Highlight placed words and list their cells
    #[arg(short = 'a', long, default_value_t = false)]
    pub answers: bool,
}

pub fn run(args: GenerateArgs, config: GeneratorConfig) -> WfResult<()> {
    let mut words = args.words.clone();
    if let Some(path) = &args.words_file {
        info!("📂 Loading words from {}", path.display());
        let content = fs::read_to_string(path)?;
        words.extend(
            content
                .lines()
                .map(str::trim)
                .filter(|l| !l.is_empty())
                .map(String::from),
        );
    }

    let generator = PuzzleGenerator::new(GeneratorOptions::from(&config));
    let mut rng = random::seeded(args.seed);
    let puzzle = generator.generate(&words, &mut rng)?;

    if args.json {
        println!("{}", PuzzleExport::from(&puzzle).to_json()?);
        return Ok(());
    }

    let highlight = args.answers.then_some(puzzle.word_positions.as_slice());
    reports::print_grid(&puzzle.grid, highlight);
    reports::print_word_list(&puzzle.words);
    if args.answers {
        reports::print_answers(&puzzle.word_positions);
    }
    Ok(())
}
