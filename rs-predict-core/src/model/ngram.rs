use std::borrow::Borrow;
use std::collections::HashMap;
use std::fmt;

use serde::Serialize;

/// An ordered sequence of consecutive tokens.
///
/// Equality and hashing are structural over the token sequence, so an
/// `NGram` can be looked up in a table with a plain `&[String]` window.
#[derive(Serialize, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(transparent)]
pub struct NGram(Vec<String>);

impl NGram {
	/// Creates an n-gram from owned tokens.
	pub fn new(tokens: Vec<String>) -> Self {
		Self(tokens)
	}

	/// Number of tokens (the `n` of the n-gram).
	pub fn len(&self) -> usize {
		self.0.len()
	}

	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}

	pub fn tokens(&self) -> &[String] {
		&self.0
	}

	/// Returns `true` if the first tokens equal `prefix` exactly.
	pub fn starts_with(&self, prefix: &[String]) -> bool {
		self.0.starts_with(prefix)
	}

	/// Final token, i.e. the word that follows the leading prefix.
	pub fn last(&self) -> Option<&str> {
		self.0.last().map(String::as_str)
	}
}

impl Borrow<[String]> for NGram {
	fn borrow(&self) -> &[String] {
		&self.0
	}
}

impl From<&[String]> for NGram {
	fn from(tokens: &[String]) -> Self {
		Self(tokens.to_vec())
	}
}

impl<S: AsRef<str>> FromIterator<S> for NGram {
	fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
		Self(iter.into_iter().map(|s| s.as_ref().to_owned()).collect())
	}
}

impl fmt::Display for NGram {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.0.join(" "))
	}
}

/// Occurrence counts of all n-grams of a single order.
///
/// Built once by [`NGramModel`](super::ngram_model::NGramModel) and
/// read-only afterwards: no public method mutates it.
///
/// # Invariants
/// - Every key has exactly `order` tokens
/// - Every stored count is >= 1
#[derive(Clone, Debug)]
pub struct FrequencyTable {
	order: usize,
	counts: HashMap<NGram, usize>,
}

impl FrequencyTable {
	pub(crate) fn new(order: usize) -> Self {
		Self { order, counts: HashMap::new() }
	}

	/// Records one occurrence of `window`.
	///
	/// The key is only allocated the first time a window is seen.
	pub(crate) fn increment(&mut self, window: &[String]) {
		debug_assert_eq!(window.len(), self.order);
		match self.counts.get_mut(window) {
			Some(count) => *count += 1,
			None => {
				self.counts.insert(NGram::from(window), 1);
			}
		}
	}

	/// Number of tokens per key.
	pub fn order(&self) -> usize {
		self.order
	}

	/// Occurrence count of `tokens`, 0 if never seen.
	pub fn get(&self, tokens: &[String]) -> usize {
		self.counts.get(tokens).copied().unwrap_or(0)
	}

	/// Number of distinct n-grams.
	pub fn len(&self) -> usize {
		self.counts.len()
	}

	pub fn is_empty(&self) -> bool {
		self.counts.is_empty()
	}

	/// Sum of all counts, i.e. the number of windows scanned.
	pub fn total(&self) -> usize {
		self.counts.values().sum()
	}

	/// Iterates over `(n-gram, count)` pairs in unspecified order.
	pub fn iter(&self) -> impl Iterator<Item = (&NGram, usize)> {
		self.counts.iter().map(|(gram, count)| (gram, *count))
	}
}
