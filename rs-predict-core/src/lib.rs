//! N-gram-based next-word prediction library.
//!
//! This crate builds a word-level n-gram frequency model from a text corpus
//! and predicts the word most likely to follow a phrase:
//! - Corpus normalization into word tokens
//! - Synchronized n-gram and (n+1)-gram frequency tables
//! - Conditional probability lookup for a query phrase
//! - Next-word selection with an injectable random tie-break
//!
//! Corpus loading helpers are kept internal; callers go through
//! [`model::tokenizer::tokenize_file`].

/// Error type shared by every fallible operation of the crate.
pub mod error;

/// Core n-gram model, matching and prediction logic.
pub mod model;

/// I/O utilities (corpus file and folder loading).
///
/// Not exposed
pub(crate) mod io;

pub use error::{PredictError, Result};
pub use model::matcher::{Candidate, MatchSet, match_phrase};
pub use model::ngram::{FrequencyTable, NGram};
pub use model::ngram_model::NGramModel;
pub use model::predictor::Predictor;
pub use model::report::{Report, query};
pub use model::tokenizer::{tokenize, tokenize_file, tokenize_query};
