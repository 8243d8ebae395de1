use super::state::State;
use crate::text::tokenize;
use indexmap::IndexMap;
use rand::Rng;

/// Represents a word-level bigram model.
///
/// The `BigramModel` stores one state per predecessor word and counts
/// how often every successor word followed it.
///
/// # Responsibilities
/// - Build the table from free text, one adjacent word pair at a time
/// - Answer count and successor queries for a predecessor
/// - Draw a word from the global successor pool
///
/// # Invariants
/// - Each state in `states` corresponds to a unique normalized word
/// - A state is only present once it has at least one transition
/// - All state transitions have occurrence counts >= 1
/// - Predecessors iterate in first-insertion order
#[derive(Clone, Debug, Default)]
pub struct BigramModel {
	/// Mapping from a predecessor word to its corresponding state
	states: IndexMap<String, State>,
}

impl BigramModel {
	/// Creates a new empty bigram model.
	pub fn new() -> Self {
		Self { states: IndexMap::new() }
	}

	/// Adds a sentence, word, or short phrase to the model.
	///
	/// Tokenizes the input and records every adjacent pair
	/// (sliding window of two, left to right, no wraparound).
	/// Returns the number of pairs recorded.
	///
	/// # Notes
	/// - Inputs with fewer than two tokens record nothing.
	/// - Additive only: existing counts are never decreased.
	pub fn add_sentence(&mut self, sentence: &str) -> usize {
		let words = tokenize(sentence);

		for pair in words.windows(2) {
			let (word, next_word) = (&pair[0], &pair[1]);
			let state = self.states.entry(word.clone()).or_insert_with(|| State::new(word));
			state.add_transition(next_word);
		}

		words.len().saturating_sub(1)
	}

	/// Removes every state.
	pub fn clear(&mut self) {
		self.states.clear();
	}

	/// Number of distinct predecessor words.
	pub fn len(&self) -> usize {
		self.states.len()
	}

	pub fn is_empty(&self) -> bool {
		self.states.is_empty()
	}

	/// Number of times `next_word` followed `word`.
	///
	/// # Notes
	/// - Converts both words to lowercase to match stored states.
	pub fn count(&self, word: &str, next_word: &str) -> usize {
		self.states
			.get(&word.to_lowercase())
			.map_or(0, |state| state.count(&next_word.to_lowercase()))
	}

	/// Total number of times `word` was followed by another word.
	pub fn total(&self, word: &str) -> usize {
		self.states.get(&word.to_lowercase()).map_or(0, State::total)
	}

	/// Returns the `(successor, count)` pairs recorded after `word`,
	/// in first-insertion order.
	pub fn successors(&self, word: &str) -> Vec<(&str, usize)> {
		match self.states.get(&word.to_lowercase()) {
			Some(state) => state.transitions().collect(),
			None => Vec::new(),
		}
	}

	/// Returns the state of a normalized predecessor word.
	pub(crate) fn state(&self, word: &str) -> Option<&State> {
		self.states.get(word)
	}

	/// Size of the global successor pool.
	///
	/// A word that follows `k` distinct predecessors counts `k` times.
	pub fn pool_size(&self) -> usize {
		self.states.values().map(State::len).sum()
	}

	/// Picks uniformly from the global successor pool.
	///
	/// The pool is every successor of every predecessor, flattened in
	/// first-insertion order. Returns `None` if the model is empty.
	pub fn random_successor<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<&str> {
		let pool_size = self.pool_size();
		if pool_size == 0 {
			return None;
		}

		let mut index = rng.random_range(0..pool_size);
		for state in self.states.values() {
			if index < state.len() {
				return state.next_word(index);
			}
			index -= state.len();
		}

		// Unreachable: index < pool_size
		None
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rand::SeedableRng;
	use rand::rngs::StdRng;

	#[test]
	fn records_every_adjacent_pair() {
		let mut model = BigramModel::new();
		assert_eq!(model.add_sentence("The sun is bright. The sun is warm."), 7);

		assert_eq!(model.count("the", "sun"), 2);
		assert_eq!(model.count("sun", "is"), 2);
		assert_eq!(model.count("is", "bright"), 1);
		assert_eq!(model.count("bright", "the"), 1);
		assert_eq!(model.count("is", "warm"), 1);
		assert_eq!(model.total("is"), 2);
		// "warm" ends the text, nothing follows it
		assert_eq!(model.total("warm"), 0);
		assert_eq!(model.len(), 4);
	}

	#[test]
	fn short_inputs_record_nothing() {
		let mut model = BigramModel::new();
		assert_eq!(model.add_sentence(""), 0);
		assert_eq!(model.add_sentence("hello"), 0);
		assert_eq!(model.add_sentence("!!! ..."), 0);
		assert!(model.is_empty());
	}

	#[test]
	fn lookups_are_case_insensitive() {
		let mut model = BigramModel::new();
		model.add_sentence("Good Morning");
		assert_eq!(model.count("GOOD", "morning"), 1);
		assert_eq!(model.successors("Good"), vec![("morning", 1)]);
		assert!(model.successors("evening").is_empty());
	}

	#[test]
	fn clear_empties_the_table() {
		let mut model = BigramModel::new();
		model.add_sentence("one two three");
		model.clear();
		assert!(model.is_empty());
		assert_eq!(model.pool_size(), 0);
	}

	#[test]
	fn pool_counts_a_word_once_per_predecessor() {
		let mut model = BigramModel::new();
		model.add_sentence("a x b x a x");
		// a -> x, x -> b, b -> x, x -> a
		assert_eq!(model.pool_size(), 4);
	}

	#[test]
	fn random_successor_draws_from_the_pool() {
		let mut rng = StdRng::seed_from_u64(3);
		let mut model = BigramModel::new();
		assert_eq!(model.random_successor(&mut rng), None);

		model.add_sentence("red green blue");
		for _ in 0..50 {
			let word = model.random_successor(&mut rng).unwrap();
			assert!(word == "green" || word == "blue", "unexpected {word}");
		}
	}
}
