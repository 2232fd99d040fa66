//! Top-level module for the next-word prediction system.
//!
//! The pipeline runs in one direction:
//! raw text → tokens → frequency tables → match set → prediction → report.
//!
//! - Normalization of corpus text and query phrases (`tokenizer`)
//! - N-gram keys and frequency tables (`ngram`)
//! - Synchronized n-gram / (n+1)-gram counting (`ngram_model`)
//! - Candidate lookup with conditional probabilities (`matcher`)
//! - Tie-breaking next-word selection (`predictor`)
//! - Diagnostic output of a query (`report`)

/// Corpus and query normalization into word tokens.
pub mod tokenizer;

/// `NGram` keys and immutable `FrequencyTable`s.
pub mod ngram;

/// Fixed-order model owning the n-gram and (n+1)-gram tables.
///
/// Both tables are filled by a single sliding-window scan.
pub mod ngram_model;

/// Exact-count lookup and (n+1)-gram candidate collection for a phrase.
pub mod matcher;

/// Selection of the most probable next word.
///
/// Ties are broken by an injected random number generator.
pub mod predictor;

/// Printable and serializable result of a single query.
pub mod report;
