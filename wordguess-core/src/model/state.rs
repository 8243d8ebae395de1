use indexmap::IndexMap;

use rand::Rng;
use rand::seq::IndexedRandom;


/// Represents a state in the bigram model.
///
/// A `State` corresponds to one predecessor word (`key`) and stores every
/// observed successor word with its number of observations.
///
/// Conceptually, this is a node in a Markov chain where outgoing edges
/// are weighted by their number of observations.
///
/// ## Responsibilities:
/// - Accumulate transition occurrences during training
/// - Rank successors for the medium and hard prediction policies
/// - Give positional access to successors for the global fallback pool
///
/// ## Invariants
/// - All transitions belong to the same `key`
/// - Each transition occurrence count is strictly positive
/// - Transitions iterate in first-insertion order, which is the tie-break
///   order for both ranking policies
#[derive(Clone, Debug)]
pub(crate) struct State {
	/// The predecessor word.
	key: String,
	/// Outgoing transitions indexed by the next word, in first-seen order.
	/// Example: { "shining" => 3, "rising" => 1 }
	transitions: IndexMap<String, usize>,
}

impl State {
	/// Creates a new empty state for the given predecessor.
	pub fn new(key: &str) -> Self {
		Self {
			key: key.to_owned(),
			transitions: IndexMap::new(),
		}
	}

	pub fn key(&self) -> &str {
		&self.key
	}

	/// Records an occurrence of a transition toward `next_word`.
	///
	/// - If the transition already exists, its occurrence count is increased.
	/// - Otherwise, a new transition is appended with an initial count of 1.
	pub fn add_transition(&mut self, next_word: &str) {
		match self.transitions.get_mut(next_word) {
			Some(occurrence) => *occurrence += 1,
			None => {
				self.transitions.insert(next_word.to_owned(), 1);
			}
		}
	}

	/// Number of times `next_word` was seen after this state's key.
	pub fn count(&self, next_word: &str) -> usize {
		self.transitions.get(next_word).copied().unwrap_or(0)
	}

	/// Sum of all occurrence counts.
	pub fn total(&self) -> usize {
		self.transitions.values().sum()
	}

	/// Number of distinct successors.
	pub fn len(&self) -> usize {
		self.transitions.len()
	}

	pub fn is_empty(&self) -> bool {
		self.transitions.is_empty()
	}

	/// Successor at position `index` in first-insertion order.
	pub fn next_word(&self, index: usize) -> Option<&str> {
		self.transitions.get_index(index).map(|(word, _)| word.as_str())
	}

	/// Iterates `(successor, count)` pairs in first-insertion order.
	pub fn transitions(&self) -> impl Iterator<Item = (&str, usize)> {
		self.transitions.iter().map(|(word, occurrence)| (word.as_str(), *occurrence))
	}

	/// Returns the successor with the strictly highest count.
	///
	/// The first maximum encountered wins: a later successor with an equal
	/// count does not replace it.
	/// Returns `None` if the state has no transitions.
	pub fn strongest(&self) -> Option<&str> {
		let mut best: Option<(&str, usize)> = None;
		for (next_word, occurrence) in self.transitions() {
			match best {
				Some((_, max)) if occurrence <= max => (),
				_ => best = Some((next_word, occurrence)),
			}
		}
		best.map(|(next_word, _)| next_word)
	}

	/// Returns at most `k` successors ranked by descending count.
	///
	/// The sort is stable, so equal counts keep first-insertion order.
	pub fn top(&self, k: usize) -> Vec<&str> {
		let mut ranked: Vec<(&str, usize)> = self.transitions().collect();
		ranked.sort_by(|a, b| b.1.cmp(&a.1));
		ranked.truncate(k);
		ranked.into_iter().map(|(next_word, _)| next_word).collect()
	}

	/// Picks uniformly among the `k` best ranked successors.
	///
	/// Returns `None` if the state has no transitions.
	pub fn predict_among_top<R: Rng + ?Sized>(&self, k: usize, rng: &mut R) -> Option<&str> {
		self.top(k).choose(rng).copied()
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rand::SeedableRng;
	use rand::rngs::StdRng;

	fn state_with(key: &str, words: &[&str]) -> State {
		let mut state = State::new(key);
		for word in words {
			state.add_transition(word);
		}
		state
	}

	#[test]
	fn counts_accumulate_per_successor() {
		let state = state_with("is", &["shining", "rising", "shining"]);
		assert_eq!(state.key(), "is");
		assert_eq!(state.count("shining"), 2);
		assert_eq!(state.count("rising"), 1);
		assert_eq!(state.count("falling"), 0);
		assert_eq!(state.total(), 3);
		assert_eq!(state.len(), 2);
	}

	#[test]
	fn transitions_keep_first_insertion_order() {
		let state = state_with("the", &["sun", "moon", "sun", "sky"]);
		assert_eq!(state.next_word(0), Some("sun"));
		assert_eq!(state.next_word(1), Some("moon"));
		assert_eq!(state.next_word(2), Some("sky"));
		assert_eq!(state.next_word(3), None);
	}

	#[test]
	fn strongest_keeps_first_maximum_on_ties() {
		let state = state_with("a", &["x", "y", "y", "x"]);
		assert_eq!(state.strongest(), Some("x"));

		let state = state_with("a", &["x", "y", "y"]);
		assert_eq!(state.strongest(), Some("y"));

		assert_eq!(State::new("a").strongest(), None);
	}

	#[test]
	fn top_ranks_by_count_then_insertion_order() {
		let state = state_with("k", &["d", "a", "a", "b", "a", "c", "b", "a", "a", "b"]);
		// a:5 b:3 d:1 c:1
		assert_eq!(state.top(3), vec!["a", "b", "d"]);
		assert_eq!(state.top(10), vec!["a", "b", "d", "c"]);
	}

	#[test]
	fn predict_among_top_never_leaves_the_slice() {
		let state = state_with("k", &["a", "a", "a", "b", "b", "c", "c", "d"]);
		let mut rng = StdRng::seed_from_u64(7);
		for _ in 0..200 {
			let word = state.predict_among_top(3, &mut rng).unwrap();
			assert!(["a", "b", "c"].contains(&word), "unexpected {word}");
		}
		assert_eq!(State::new("k").predict_among_top(3, &mut rng), None);
	}
}
