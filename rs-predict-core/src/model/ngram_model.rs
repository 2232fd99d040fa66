use log::debug;

use super::ngram::FrequencyTable;
use super::tokenizer::tokenize_query;
use crate::error::{PredictError, Result};

/// Represents a word-level n-gram model of a corpus.
///
/// The `NGramModel` stores how often every n-gram and every (n+1)-gram
/// occurs in a token sequence. It is the input of the matcher: the ratio of
/// an (n+1)-gram count to the count of its leading n-gram is the conditional
/// probability of its last word.
///
/// # Responsibilities
/// - Count n-grams and (n+1)-grams in one synchronized sliding-window scan
/// - Expose both tables read-only
///
/// # Invariants
/// - `n` is always >= 1
/// - Both tables are filled from the identical set of start positions,
///   so their totals are equal
/// - The model is never mutated after construction
#[derive(Clone, Debug)]
pub struct NGramModel {
	/// The order of the model (number of words in the query phrase)
	n: usize,

	/// Counts of windows of `n` tokens
	ngrams: FrequencyTable,

	/// Counts of windows of `n + 1` tokens
	next_grams: FrequencyTable,
}

impl NGramModel {
	/// Builds a model of order `n` from a token sequence.
	///
	/// Start positions `0..tokens.len() - n` are scanned; at each position
	/// the n-window and the (n+1)-window are counted together. The last
	/// n-gram of the sequence (start `tokens.len() - n`) has no following
	/// word and is therefore not counted. Sequences of `n` tokens or fewer
	/// produce empty tables.
	///
	/// # Errors
	/// Returns `PredictError::InvalidOrder` if `n < 1` or `n + 1` overflows.
	pub fn new(tokens: &[String], n: usize) -> Result<Self> {
		if n < 1 {
			return Err(PredictError::InvalidOrder(n));
		}
		let next_n = n.checked_add(1).ok_or(PredictError::InvalidOrder(n))?;

		let mut ngrams = FrequencyTable::new(n);
		let mut next_grams = FrequencyTable::new(next_n);

		// One (n+1)-window per start position, its n-prefix counted alongside
		for window in tokens.windows(next_n) {
			ngrams.increment(&window[..n]);
			next_grams.increment(window);
		}

		debug!(
			"Built {}-gram model from {} tokens: {} distinct {}-grams, {} distinct {}-grams",
			n,
			tokens.len(),
			ngrams.len(),
			n,
			next_grams.len(),
			next_n
		);

		Ok(Self { n, ngrams, next_grams })
	}

	/// Builds a model whose order is the word count of `phrase`.
	///
	/// # Errors
	/// Returns `PredictError::EmptyQuery` if the phrase has no words.
	pub fn for_phrase(tokens: &[String], phrase: &str) -> Result<Self> {
		let n = tokenize_query(phrase).len();
		if n == 0 {
			return Err(PredictError::EmptyQuery);
		}
		Self::new(tokens, n)
	}

	/// The order `n` of the model.
	pub fn order(&self) -> usize {
		self.n
	}

	/// Table of n-gram counts.
	pub fn ngrams(&self) -> &FrequencyTable {
		&self.ngrams
	}

	/// Table of (n+1)-gram counts.
	pub fn next_grams(&self) -> &FrequencyTable {
		&self.next_grams
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::model::tokenizer::tokenize;

	fn words(s: &str) -> Vec<String> {
		s.split_whitespace().map(str::to_owned).collect()
	}

	#[test]
	fn order_zero_is_rejected() {
		assert!(matches!(NGramModel::new(&words("a b c"), 0), Err(PredictError::InvalidOrder(0))));
	}

	#[test]
	fn overflowing_order_is_rejected() {
		assert!(matches!(
			NGramModel::new(&words("a"), usize::MAX),
			Err(PredictError::InvalidOrder(usize::MAX))
		));
	}

	#[test]
	fn empty_phrase_is_rejected() {
		assert!(matches!(NGramModel::for_phrase(&words("a b c"), " \t"), Err(PredictError::EmptyQuery)));
	}

	#[test]
	fn order_follows_phrase_word_count() {
		let model = NGramModel::for_phrase(&words("a b c d"), "The Son of").unwrap();
		assert_eq!(model.order(), 3);
		assert_eq!(model.ngrams().order(), 3);
		assert_eq!(model.next_grams().order(), 4);
	}

	#[test]
	fn last_ngram_position_is_not_counted() {
		let model = NGramModel::new(&words("a b c a b"), 2).unwrap();

		// Start positions 0..3: "a b", "b c", "c a"; the trailing "a b" is skipped
		assert_eq!(model.ngrams().get(&words("a b")), 1);
		assert_eq!(model.ngrams().get(&words("b c")), 1);
		assert_eq!(model.ngrams().get(&words("c a")), 1);
		assert_eq!(model.ngrams().total(), 3);

		assert_eq!(model.next_grams().get(&words("a b c")), 1);
		assert_eq!(model.next_grams().get(&words("c a b")), 1);
		assert_eq!(model.next_grams().total(), 3);
	}

	#[test]
	fn short_sequences_give_empty_tables() {
		for tokens in [words(""), words("a"), words("a b")] {
			let model = NGramModel::new(&tokens, 2).unwrap();
			assert!(model.ngrams().is_empty());
			assert!(model.next_grams().is_empty());
		}
	}

	#[test]
	fn table_totals_are_equal() {
		let tokens = tokenize(
			"It was the best of times, it was the worst of times, it was the age of wisdom, \
			 it was the age of foolishness, it was the epoch of belief",
		);
		for n in 1..=6 {
			let model = NGramModel::new(&tokens, n).unwrap();
			assert_eq!(model.ngrams().total(), model.next_grams().total(), "n = {n}");
			assert_eq!(model.ngrams().total(), tokens.len().saturating_sub(n));
		}
	}

	#[test]
	fn every_next_gram_prefix_is_counted() {
		let tokens = tokenize("a rose is a rose is a rose");
		let model = NGramModel::new(&tokens, 2).unwrap();
		for (gram, count) in model.next_grams().iter() {
			let prefix = &gram.tokens()[..2];
			assert!(model.ngrams().get(prefix) >= count);
		}
	}
}
