use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while loading a corpus, building a model or querying it.
///
/// A query that matches nothing is not an error: it yields a zero count,
/// an empty candidate list and no prediction.
#[derive(Error, Debug)]
pub enum PredictError {
	/// The corpus could not be opened, read or decoded as UTF-8.
	#[error("IO error: {0}")]
	Io(#[from] io::Error),

	#[error("n-gram order must be >= 1, got {0}")]
	InvalidOrder(usize),

	#[error("Query phrase is empty")]
	EmptyQuery,

	#[error("Order mismatch: model expects {expected} words, query has {found}")]
	OrderMismatch { expected: usize, found: usize },

	#[error("No corpus files found in {}", .0.display())]
	EmptyCorpus(PathBuf),
}

pub type Result<T> = std::result::Result<T, PredictError>;
