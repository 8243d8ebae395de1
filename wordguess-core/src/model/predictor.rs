use log::{debug, trace};
use rand::Rng;
use rand::rngs::ThreadRng;
use rand::seq::IndexedRandom;

use super::bigram_model::BigramModel;
use super::settings::{Category, Difficulty};
use crate::text::tokenize;

/// Returned when the phrase contains no word at all.
pub const DEFAULT_WORD: &str = "the";

/// Returned by the global fallback when the table is empty.
pub const EMPTY_MODEL_WORD: &str = "beautiful";

/// Vocabulary of the easy policy.
pub const COMMON_WORDS: [&str; 8] = ["good", "great", "beautiful", "amazing", "wonderful", "nice", "fun", "happy"];

/// Number of ranked successors the medium policy picks from.
const MEDIUM_TOP_K: usize = 3;

/// Next-word predictor trained on a category corpus and on player input.
///
/// # Responsibilities
/// - Own the bigram table (no other component writes it)
/// - Train on the seed corpus at construction and on every category switch
/// - Predict the next word according to the current `Difficulty`
/// - Learn from player rounds through `add_user_input`
///
/// # Notes
/// - Every operation is total: prediction always yields a non-empty word.
/// - The random source `R` is injected so that callers (tests in particular)
///   can use a seeded generator. It is drawn from on every call.
/// - `predict` takes `&mut self` only to advance `R`; it never touches the table.
#[derive(Debug)]
pub struct PredictiveTextModel<R = ThreadRng> {
	bigrams: BigramModel,
	difficulty: Difficulty,
	category: Category,
	rng: R,
}

impl PredictiveTextModel<ThreadRng> {
	/// Creates a model drawing from the thread-local random generator.
	pub fn new(difficulty: Difficulty, category: Category) -> Self {
		Self::with_rng(difficulty, category, rand::rng())
	}
}

impl<R: Rng> PredictiveTextModel<R> {
	/// Creates a model drawing from `rng`, trained on `category`'s corpus.
	pub fn with_rng(difficulty: Difficulty, category: Category, rng: R) -> Self {
		let mut model = Self {
			bigrams: BigramModel::new(),
			difficulty,
			category,
			rng,
		};
		model.train(category.corpus());
		model
	}

	pub fn difficulty(&self) -> Difficulty {
		self.difficulty
	}

	pub fn category(&self) -> Category {
		self.category
	}

	/// Read-only view of the bigram table.
	pub fn bigrams(&self) -> &BigramModel {
		&self.bigrams
	}

	/// Records every adjacent word pair of `text`.
	///
	/// Training the same text twice doubles its counts.
	pub fn train(&mut self, text: &str) {
		let pairs = self.bigrams.add_sentence(text);
		debug!("trained on {} pair(s), {} predecessor(s) known", pairs, self.bigrams.len());
	}

	/// Predicts the word following `phrase`.
	///
	/// - No word in `phrase`: `DEFAULT_WORD`.
	/// - `Easy`: a uniform pick from `COMMON_WORDS`, whatever the table holds.
	/// - Last word unknown: the global fallback (see `fallback_prediction`).
	/// - `Medium`: a uniform pick among the three most frequent successors.
	/// - `Hard`: the most frequent successor, first seen wins ties.
	pub fn predict(&mut self, phrase: &str) -> String {
		let words = tokenize(phrase);
		let Some(last_word) = words.last() else {
			return DEFAULT_WORD.to_owned();
		};

		if self.difficulty == Difficulty::Easy {
			return self.random_prediction();
		}

		let prediction = match self.bigrams.state(last_word) {
			Some(state) if !state.is_empty() => {
				trace!("ranking {} successor(s) of '{}'", state.len(), state.key());
				let word = match self.difficulty {
					Difficulty::Medium => state.predict_among_top(MEDIUM_TOP_K, &mut self.rng),
					Difficulty::Easy | Difficulty::Hard => state.strongest(),
				};
				word.map(str::to_owned)
			}
			_ => None,
		};

		match prediction {
			Some(word) => {
				trace!("{} prediction after '{}': '{}'", self.difficulty, last_word, word);
				word
			}
			None => {
				trace!("no successor known for '{}', using fallback", last_word);
				self.fallback_prediction()
			}
		}
	}

	/// Uniform pick from `COMMON_WORDS`.
	fn random_prediction(&mut self) -> String {
		COMMON_WORDS.choose(&mut self.rng).copied().unwrap_or(EMPTY_MODEL_WORD).to_owned()
	}

	/// Uniform pick from every successor recorded in the table,
	/// or `EMPTY_MODEL_WORD` if the table is empty.
	fn fallback_prediction(&mut self) -> String {
		self.bigrams.random_successor(&mut self.rng).unwrap_or(EMPTY_MODEL_WORD).to_owned()
	}

	/// Changes the prediction policy. The table is left untouched.
	pub fn set_difficulty(&mut self, difficulty: Difficulty) {
		self.difficulty = difficulty;
	}

	/// Discards the whole table, including anything learned from players,
	/// and retrains on `category`'s corpus.
	pub fn set_category(&mut self, category: Category) {
		debug!("switching category {} -> {}, dropping {} predecessor(s)", self.category, category, self.bigrams.len());
		self.category = category;
		self.bigrams.clear();
		self.train(category.corpus());
	}

	/// Learns from a played round.
	///
	/// Callers pass the phrase followed by the revealed prediction, so the
	/// transition just predicted gets reinforced.
	pub fn add_user_input(&mut self, phrase: &str) {
		self.train(phrase);
	}
}
