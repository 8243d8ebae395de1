use std::collections::HashSet;
use std::fmt;

use log::debug;
use rand::Rng;
use rand::rngs::ThreadRng;
use thiserror::Error;

use crate::model::{Category, Difficulty, PredictiveTextModel};

/// Points a hint costs, and the minimum score needed to buy one.
pub const HINT_COST: u32 = 5;

/// Actions refused by a `GameSession`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
	#[error("type a phrase first")]
	EmptyPhrase,
	#[error("type a guess first")]
	EmptyGuess,
	#[error("a prediction is waiting for a guess")]
	RoundInProgress,
	#[error("no prediction to guess")]
	NoPrediction,
	#[error("you need at least 5 points to use a hint (you have {0})")]
	NotEnoughPoints(u32),
	#[error("this hint was already revealed")]
	HintAlreadyUsed,
}

/// Kind of clue a player can buy about the hidden prediction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HintKind {
	FirstLetter,
	LastLetter,
	WordLength,
}

/// A revealed clue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Hint {
	FirstLetter(char),
	LastLetter(char),
	WordLength(usize),
}

impl fmt::Display for Hint {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Hint::FirstLetter(c) => write!(f, "first letter: {c}"),
			Hint::LastLetter(c) => write!(f, "last letter: {c}"),
			Hint::WordLength(n) => write!(f, "word length: {n} letters"),
		}
	}
}

/// Result of a guess.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuessOutcome {
	pub correct: bool,
	pub prediction: String,
}

/// One phrase/prediction/guess exchange.
#[derive(Debug, Default)]
struct Round {
	phrase: String,
	prediction: String,
	revealed: bool,
	hints_used: HashSet<HintKind>,
}

/// A player's game against a `PredictiveTextModel`.
///
/// # Responsibilities
/// - Ask the model for a prediction, keep it hidden until the guess
/// - Score guesses (trimmed, case-insensitive comparison)
/// - Feed every played round back into the model
/// - Sell hints about the hidden word
///
/// The model is only driven through its public operations.
#[derive(Debug)]
pub struct GameSession<R = ThreadRng> {
	model: PredictiveTextModel<R>,
	round: Option<Round>,
	score: u32,
	rounds: u32,
}

impl<R: Rng> GameSession<R> {
	pub fn new(model: PredictiveTextModel<R>) -> Self {
		Self { model, round: None, score: 0, rounds: 0 }
	}

	pub fn model(&self) -> &PredictiveTextModel<R> {
		&self.model
	}

	pub fn score(&self) -> u32 {
		self.score
	}

	pub fn rounds(&self) -> u32 {
		self.rounds
	}

	/// Share of correct guesses, in rounded percent. 0 before the first round.
	pub fn accuracy(&self) -> u32 {
		if self.rounds == 0 {
			return 0;
		}
		(f64::from(self.score) / f64::from(self.rounds) * 100.0).round() as u32
	}

	/// The prediction of the current round, revealed or not.
	pub fn prediction(&self) -> Option<&str> {
		self.round.as_ref().map(|round| round.prediction.as_str())
	}

	/// Returns `true` while a prediction waits for a guess.
	pub fn awaiting_guess(&self) -> bool {
		self.round.as_ref().is_some_and(|round| !round.revealed)
	}

	/// Asks the model to predict the word following `phrase`.
	///
	/// Starts a new round if the previous one was already revealed.
	///
	/// # Errors
	/// - `EmptyPhrase` if `phrase` is blank
	/// - `RoundInProgress` if the current prediction was not guessed yet
	pub fn ask(&mut self, phrase: &str) -> Result<&str, GameError> {
		if phrase.trim().is_empty() {
			return Err(GameError::EmptyPhrase);
		}
		if self.awaiting_guess() {
			return Err(GameError::RoundInProgress);
		}

		let prediction = self.model.predict(phrase);
		debug!("round {}: predicted '{}'", self.rounds + 1, prediction);
		let round = self.round.insert(Round {
			phrase: phrase.to_owned(),
			prediction,
			..Round::default()
		});
		Ok(round.prediction.as_str())
	}

	/// Scores `guess` against the hidden prediction and reveals it.
	///
	/// The phrase followed by the prediction is then fed back to the model.
	///
	/// # Errors
	/// - `EmptyGuess` if `guess` is blank
	/// - `NoPrediction` if there is no unrevealed prediction
	pub fn guess(&mut self, guess: &str) -> Result<GuessOutcome, GameError> {
		if guess.trim().is_empty() {
			return Err(GameError::EmptyGuess);
		}
		let round = match self.round.as_mut() {
			Some(round) if !round.revealed => round,
			_ => return Err(GameError::NoPrediction),
		};

		let correct = guess.trim().to_lowercase() == round.prediction.trim().to_lowercase();
		round.revealed = true;
		self.rounds += 1;
		if correct {
			self.score += 1;
		}

		self.model.add_user_input(&format!("{} {}", round.phrase, round.prediction));

		Ok(GuessOutcome { correct, prediction: round.prediction.clone() })
	}

	/// Reveals a clue about the hidden prediction for `HINT_COST` points.
	///
	/// # Errors
	/// - `NoPrediction` if there is no unrevealed prediction
	/// - `NotEnoughPoints` if the score is below `HINT_COST`
	/// - `HintAlreadyUsed` if this kind was already bought this round
	pub fn use_hint(&mut self, kind: HintKind) -> Result<Hint, GameError> {
		let round = match self.round.as_mut() {
			Some(round) if !round.revealed => round,
			_ => return Err(GameError::NoPrediction),
		};
		if self.score < HINT_COST {
			return Err(GameError::NotEnoughPoints(self.score));
		}
		if round.hints_used.contains(&kind) {
			return Err(GameError::HintAlreadyUsed);
		}

		let word = &round.prediction;
		let hint = match kind {
			HintKind::FirstLetter => Hint::FirstLetter(uppercase(word.chars().next())),
			HintKind::LastLetter => Hint::LastLetter(uppercase(word.chars().next_back())),
			HintKind::WordLength => Hint::WordLength(word.chars().count()),
		};

		round.hints_used.insert(kind);
		self.score -= HINT_COST;
		Ok(hint)
	}

	/// Drops the current round; score and round count are kept.
	pub fn new_round(&mut self) {
		self.round = None;
	}

	/// Starts over: drops the current round and zeroes score and rounds.
	///
	/// What the model learned is kept.
	pub fn reset(&mut self) {
		self.new_round();
		self.score = 0;
		self.rounds = 0;
	}

	pub fn set_difficulty(&mut self, difficulty: Difficulty) {
		self.model.set_difficulty(difficulty);
	}

	/// Switches the model to `category` and drops the current round.
	pub fn set_category(&mut self, category: Category) {
		self.model.set_category(category);
		self.new_round();
	}
}

fn uppercase(c: Option<char>) -> char {
	c.and_then(|c| c.to_uppercase().next()).unwrap_or(' ')
}

#[cfg(test)]
mod tests {
	use super::*;
	use rand::SeedableRng;
	use rand::rngs::StdRng;

	fn session(difficulty: Difficulty) -> GameSession<StdRng> {
		let model = PredictiveTextModel::with_rng(difficulty, Category::Nature, StdRng::seed_from_u64(1));
		GameSession::new(model)
	}

	/// Plays `n` rounds guessing right every time.
	fn win_rounds(session: &mut GameSession<StdRng>, n: usize) {
		for _ in 0..n {
			let prediction = session.ask("the sun is").unwrap().to_owned();
			assert!(session.guess(&prediction).unwrap().correct);
		}
	}

	#[test]
	fn blank_inputs_are_refused() {
		let mut session = session(Difficulty::Hard);
		assert_eq!(session.ask("   "), Err(GameError::EmptyPhrase));
		assert_eq!(session.guess("word"), Err(GameError::NoPrediction));
		session.ask("the sun").unwrap();
		assert_eq!(session.guess(" "), Err(GameError::EmptyGuess));
	}

	#[test]
	fn guess_is_trimmed_and_case_insensitive() {
		let mut session = session(Difficulty::Hard);
		let prediction = session.ask("the sun").unwrap().to_owned();
		let outcome = session.guess(&format!("  {}  ", prediction.to_uppercase())).unwrap();
		assert!(outcome.correct);
		assert_eq!(outcome.prediction, prediction);
		assert_eq!((session.score(), session.rounds()), (1, 1));
	}

	#[test]
	fn wrong_guess_counts_a_round_without_points() {
		let mut session = session(Difficulty::Hard);
		session.ask("the sun").unwrap();
		let outcome = session.guess("xylophone").unwrap();
		assert!(!outcome.correct);
		assert_eq!((session.score(), session.rounds()), (0, 1));
		assert_eq!(session.accuracy(), 0);
	}

	#[test]
	fn a_round_accepts_a_single_guess() {
		let mut session = session(Difficulty::Hard);
		session.ask("the sun").unwrap();
		assert_eq!(session.ask("the moon"), Err(GameError::RoundInProgress));
		session.guess("is").unwrap();
		assert_eq!(session.guess("is"), Err(GameError::NoPrediction));
		assert!(session.ask("the moon").is_ok());
	}

	#[test]
	fn played_rounds_are_fed_back_to_the_model() {
		let mut session = session(Difficulty::Hard);
		let before = session.model().bigrams().count("sun", "is");
		let prediction = session.ask("the sun").unwrap().to_owned();
		assert_eq!(prediction, "is");
		session.guess("nope").unwrap();
		assert_eq!(session.model().bigrams().count("sun", "is"), before + 1);
	}

	#[test]
	fn hints_cost_points_and_are_sold_once() {
		let mut session = session(Difficulty::Hard);
		session.ask("the sun").unwrap();
		assert_eq!(session.use_hint(HintKind::FirstLetter), Err(GameError::NotEnoughPoints(0)));
		session.guess("is").unwrap();

		win_rounds(&mut session, 9);
		assert_eq!(session.score(), 10);

		let prediction = session.ask("the sun").unwrap().to_owned();
		assert_eq!(prediction, "is");
		assert_eq!(session.use_hint(HintKind::FirstLetter), Ok(Hint::FirstLetter('I')));
		assert_eq!(session.use_hint(HintKind::FirstLetter), Err(GameError::HintAlreadyUsed));
		assert_eq!(session.use_hint(HintKind::WordLength), Ok(Hint::WordLength(2)));
		assert_eq!(session.score(), 0);
		assert_eq!(session.use_hint(HintKind::LastLetter), Err(GameError::NotEnoughPoints(0)));
	}

	#[test]
	fn hints_reset_with_each_round() {
		let mut session = session(Difficulty::Hard);
		win_rounds(&mut session, 10);
		session.ask("the sun").unwrap();
		assert_eq!(session.use_hint(HintKind::LastLetter), Ok(Hint::LastLetter('S')));
		session.guess("is").unwrap();
		assert_eq!(session.use_hint(HintKind::LastLetter), Err(GameError::NoPrediction));

		session.ask("the sun").unwrap();
		assert_eq!(session.use_hint(HintKind::LastLetter), Ok(Hint::LastLetter('S')));
	}

	#[test]
	fn accuracy_is_a_rounded_percentage() {
		let mut session = session(Difficulty::Hard);
		assert_eq!(session.accuracy(), 0);
		win_rounds(&mut session, 2);
		session.ask("the sun").unwrap();
		session.guess("wrong").unwrap();
		assert_eq!(session.accuracy(), 67);
	}

	#[test]
	fn reset_zeroes_score_but_keeps_learning() {
		let mut session = session(Difficulty::Hard);
		win_rounds(&mut session, 3);
		let learned = session.model().bigrams().count("is", "shining");
		session.ask("the moon").unwrap();
		session.reset();
		assert_eq!((session.score(), session.rounds()), (0, 0));
		assert_eq!(session.prediction(), None);
		assert_eq!(session.model().bigrams().count("is", "shining"), learned);
	}

	#[test]
	fn category_switch_drops_the_pending_round() {
		let mut session = session(Difficulty::Medium);
		session.ask("the sun").unwrap();
		session.set_category(Category::Food);
		assert!(!session.awaiting_guess());
		assert_eq!(session.model().category(), Category::Food);
		session.set_difficulty(Difficulty::Easy);
		assert_eq!(session.model().difficulty(), Difficulty::Easy);
	}
}
