pub mod api;
pub mod config;
pub mod direction;
pub mod distribution;
pub mod error;
pub mod generator;
pub mod grapheme;
pub mod grid;
pub mod placement;
pub mod random;
pub mod verifier;
// cmd and reports belong to the binary (main.rs).

pub use api::{generate, generate_seeded, generate_with, PuzzleExport};
pub use error::{WfResult, WordForgeError};
pub use generator::{GeneratorOptions, Puzzle, PuzzleGenerator, WordPosition};
