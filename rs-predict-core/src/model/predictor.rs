use rand::Rng;
use rand::SeedableRng;
use rand::rngs::{StdRng, ThreadRng};
use rand::seq::IndexedRandom;

use super::matcher::MatchSet;

/// Picks the next word from a [`MatchSet`].
///
/// The candidate(s) with the highest probability win, see
/// [`MatchSet::top_words`]. When several distinct words share that
/// probability, one is drawn uniformly with the predictor's random number
/// generator: this is the only non-deterministic step of the pipeline.
/// Seed it with [`Predictor::seeded`] to make the tie-break reproducible.
#[derive(Debug)]
pub struct Predictor<R = ThreadRng> {
	rng: R,
}

impl Predictor<ThreadRng> {
	/// Creates a predictor drawing ties from the thread-local generator.
	pub fn new() -> Self {
		Self { rng: rand::rng() }
	}
}

impl Default for Predictor<ThreadRng> {
	fn default() -> Self {
		Self::new()
	}
}

impl Predictor<StdRng> {
	/// Creates a predictor with a reproducible tie-break.
	pub fn seeded(seed: u64) -> Self {
		Self { rng: StdRng::seed_from_u64(seed) }
	}
}

impl<R: Rng> Predictor<R> {
	/// Creates a predictor from any random number generator.
	pub fn with_rng(rng: R) -> Self {
		Self { rng }
	}

	/// Predicts the next word.
	///
	/// Returns `None` if the match set has no candidate.
	pub fn predict(&mut self, matches: &MatchSet) -> Option<String> {
		matches.top_words().choose(&mut self.rng).map(|word| (*word).to_owned())
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::model::matcher::match_phrase;
	use crate::model::ngram_model::NGramModel;
	use crate::model::tokenizer::tokenize;

	fn matches(text: &str, phrase: &str) -> MatchSet {
		let model = NGramModel::for_phrase(&tokenize(text), phrase).unwrap();
		match_phrase(&model, phrase).unwrap()
	}

	#[test]
	fn no_candidate_means_no_prediction() {
		let set = matches("the son of pandu", "the daughter");
		assert_eq!(Predictor::new().predict(&set), None);
	}

	#[test]
	fn unique_maximum_wins() {
		let set = matches("the cat sat the cat sat the cat ran the", "the cat");
		assert_eq!(set.top_words(), vec!["sat"]);
		for seed in 0..20 {
			assert_eq!(Predictor::seeded(seed).predict(&set).as_deref(), Some("sat"));
		}
	}

	#[test]
	fn ties_are_all_reachable() {
		let set = matches("the son of pandu was the son of kunti", "the son of");
		let mut top = set.top_words();
		top.sort_unstable();
		assert_eq!(top, vec!["kunti", "pandu"]);

		let mut seen = Vec::new();
		for seed in 0..64 {
			let word = Predictor::seeded(seed).predict(&set).unwrap();
			assert!(word == "pandu" || word == "kunti");
			if !seen.contains(&word) {
				seen.push(word);
			}
		}
		assert_eq!(seen.len(), 2);
	}

	#[test]
	fn same_seed_same_word() {
		let set = matches("a x a y a z a", "a");
		let first = Predictor::seeded(7).predict(&set);
		let second = Predictor::seeded(7).predict(&set);
		assert_eq!(first, second);
	}
}
