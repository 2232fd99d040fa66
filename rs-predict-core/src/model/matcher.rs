use log::debug;
use serde::Serialize;

use super::ngram::NGram;
use super::ngram_model::NGramModel;
use super::tokenizer::tokenize_query;
use crate::error::{PredictError, Result};

/// An (n+1)-gram whose leading n tokens equal the query phrase.
#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct Candidate {
	/// The full (n+1)-gram.
	pub gram: NGram,
	/// Occurrences of the (n+1)-gram in the corpus.
	pub count: usize,
	/// `count` divided by the exact count of the phrase, 0 if the phrase never occurred.
	pub probability: f64,
}

impl Candidate {
	/// The word following the matched phrase.
	pub fn next_word(&self) -> Option<&str> {
		self.gram.last()
	}
}

/// Result of looking a phrase up in an [`NGramModel`].
#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct MatchSet {
	phrase: NGram,
	exact_count: usize,
	candidates: Vec<Candidate>,
}

impl MatchSet {
	/// The normalized query phrase.
	pub fn phrase(&self) -> &NGram {
		&self.phrase
	}

	/// Occurrences of the phrase as an n-gram.
	pub fn exact_count(&self) -> usize {
		self.exact_count
	}

	/// Matching (n+1)-grams, by decreasing count then lexicographically.
	///
	/// The ordering is a presentation choice; nothing depends on it.
	pub fn candidates(&self) -> &[Candidate] {
		&self.candidates
	}

	pub fn is_empty(&self) -> bool {
		self.candidates.is_empty()
	}

	/// Highest candidate probability, `None` if there is no candidate.
	pub fn max_probability(&self) -> Option<f64> {
		self.candidates.iter().map(|c| c.probability).reduce(f64::max)
	}

	/// Returns every distinct next word reaching the maximum probability.
	///
	/// Probabilities are compared with exact equality. Words keep the
	/// candidate order.
	pub fn top_words(&self) -> Vec<&str> {
		let Some(max) = self.max_probability() else {
			return Vec::new();
		};

		let mut words: Vec<&str> = Vec::new();
		for candidate in self.candidates.iter().filter(|c| c.probability == max) {
			if let Some(word) = candidate.next_word() {
				if !words.contains(&word) {
					words.push(word);
				}
			}
		}
		words
	}

	pub fn into_candidates(self) -> Vec<Candidate> {
		self.candidates
	}
}

/// Looks a query phrase up in the model.
///
/// The phrase is only lowercased and split on whitespace. Its exact n-gram
/// count is read from the n-gram table, then every (n+1)-gram is scanned
/// and those starting with the phrase become candidates with probability
/// `count / exact_count`.
///
/// The scan is linear in the number of distinct (n+1)-grams.
///
/// # Errors
/// - `PredictError::EmptyQuery` if the phrase has no words.
/// - `PredictError::OrderMismatch` if its word count differs from the model order.
pub fn match_phrase(model: &NGramModel, phrase: &str) -> Result<MatchSet> {
	let words = tokenize_query(phrase);
	if words.is_empty() {
		return Err(PredictError::EmptyQuery);
	}
	if words.len() != model.order() {
		return Err(PredictError::OrderMismatch { expected: model.order(), found: words.len() });
	}

	let exact_count = model.ngrams().get(&words);

	let mut candidates: Vec<Candidate> = model
		.next_grams()
		.iter()
		.filter(|(gram, _)| gram.starts_with(&words))
		.map(|(gram, count)| {
			let probability = if exact_count > 0 { count as f64 / exact_count as f64 } else { 0.0 };
			Candidate { gram: gram.clone(), count, probability }
		})
		.collect();

	candidates.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.gram.cmp(&b.gram)));

	debug!("Phrase \"{}\": exact count {}, {} candidates", words.join(" "), exact_count, candidates.len());

	Ok(MatchSet { phrase: NGram::new(words), exact_count, candidates })
}
