use std::fmt;

use rand::Rng;
use serde::Serialize;

use super::matcher::{Candidate, MatchSet, match_phrase};
use super::ngram::NGram;
use super::ngram_model::NGramModel;
use super::predictor::Predictor;
use crate::error::Result;

/// Outcome of one query: the match set and the predicted word.
///
/// `Display` renders the diagnostic text output; `Serialize` gives the same
/// data to JSON consumers.
#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct Report {
	pub phrase: NGram,
	pub exact_count: usize,
	pub candidates: Vec<Candidate>,
	pub prediction: Option<String>,
}

impl Report {
	pub fn new(matches: MatchSet, prediction: Option<String>) -> Self {
		let phrase = matches.phrase().clone();
		let exact_count = matches.exact_count();
		Self { phrase, exact_count, candidates: matches.into_candidates(), prediction }
	}
}

impl fmt::Display for Report {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		writeln!(f, "Exact N-Gram Match Count: {}", self.exact_count)?;
		writeln!(f, "Matching N+1-Grams ({} found):", self.candidates.len())?;
		for candidate in &self.candidates {
			writeln!(
				f,
				"{} -> Count: {}, Probability: {:.4}",
				candidate.gram, candidate.count, candidate.probability
			)?;
		}
		write!(f, "Predicted Next Word: {}", self.prediction.as_deref().unwrap_or("None"))
	}
}

/// Runs the matcher and the predictor for `phrase`.
///
/// # Errors
/// Fails only if the phrase is empty or its word count differs from the
/// model order.
pub fn query<R: Rng>(model: &NGramModel, phrase: &str, predictor: &mut Predictor<R>) -> Result<Report> {
	let matches = match_phrase(model, phrase)?;
	let prediction = predictor.predict(&matches);
	Ok(Report::new(matches, prediction))
}
