//! Parses the comma-separated decimal program format into machine words.

use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

pub type LoadResult<T> = Result<T, LoadError>;

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("program text is empty")]
    Empty,
    #[error("malformed program word {index}: '{token}' is not an integer")]
    Malformed { index: usize, token: String },
    #[error("failed to read program '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub fn parse_program(text: &str) -> LoadResult<Vec<i64>> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(LoadError::Empty);
    }
    trimmed
        .split(',')
        .enumerate()
        .map(|(index, token)| {
            let token = token.trim();
            token.parse::<i64>().map_err(|_| LoadError::Malformed {
                index,
                token: token.to_string(),
            })
        })
        .collect()
}

pub fn load_program<P: AsRef<Path>>(path: P) -> LoadResult<Vec<i64>> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_program(&text)
}
