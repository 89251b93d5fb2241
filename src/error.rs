use thiserror::Error;

#[derive(Error, Debug)]
pub enum WordForgeError {
    #[error("IO Error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON Parsing Error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration Error: {0}")]
    Config(String),

    #[error("No valid words: every word is empty or longer than the grid. Shorten the words or enlarge the grid.")]
    NoValidWords,

    #[error("Unable to generate a valid puzzle after {attempts} attempts. Try fewer or shorter words, or a larger grid.")]
    GenerationExhausted { attempts: usize },

    #[error("Attempt failed: {0}")]
    Attempt(String),
}

pub type WfResult<T> = Result<T, WordForgeError>;
