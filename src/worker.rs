use crate::token::Token;
use crate::tokenizer::tokenize;
use thiserror::Error;
use tokio::task::JoinError;

#[derive(Debug, Error)]
pub enum WorkerError {
    #[error("Analysis task failed: {0}")]
    Join(#[from] JoinError),
}

pub type Error = WorkerError;
pub type Result<T> = std::result::Result<T, WorkerError>;

/// Tokenizes `source` on the blocking pool so the calling task stays
/// responsive. Each call yields a complete, independent token list.
pub async fn analyze_in_background(source: String) -> Result<Vec<Token>> {
    let tokens = tokio::task::spawn_blocking(move || tokenize(&source)).await?;
    Ok(tokens)
}
