use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::corpus;

/// Error returned when text does not name a known difficulty or category.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseSettingError {
	#[error("unknown difficulty '{0}', expected one of: easy, medium, hard")]
	Difficulty(String),
	#[error("unknown category '{0}', expected one of: nature, technology, emotions, food")]
	Category(String),
}

/// Prediction policy of the model.
///
/// # Variants
/// - `Easy`: a random word from a small generic list, ignoring training.
/// - `Medium`: a random pick among the three most frequent successors.
/// - `Hard`: the single most frequent successor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
	Easy,
	#[default]
	Medium,
	Hard,
}

impl Difficulty {
	/// Every difficulty, in display order.
	pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

	pub fn as_str(&self) -> &'static str {
		match self {
			Difficulty::Easy => "easy",
			Difficulty::Medium => "medium",
			Difficulty::Hard => "hard",
		}
	}

	/// One-line explanation shown to players.
	pub fn description(&self) -> &'static str {
		match self {
			Difficulty::Easy => "Random predictions",
			Difficulty::Medium => "Smart AI predictions",
			Difficulty::Hard => "Most likely predictions",
		}
	}
}

impl fmt::Display for Difficulty {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

impl FromStr for Difficulty {
	type Err = ParseSettingError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		Difficulty::ALL
			.into_iter()
			.find(|difficulty| difficulty.as_str().eq_ignore_ascii_case(s.trim()))
			.ok_or_else(|| ParseSettingError::Difficulty(s.to_owned()))
	}
}

/// Topic whose seed corpus the model is trained on.
///
/// Categories have disjoint vocabularies: switching category discards
/// everything the model learned so far.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
	#[default]
	Nature,
	Technology,
	Emotions,
	Food,
}

impl Category {
	/// Every category, in display order.
	pub const ALL: [Category; 4] = [Category::Nature, Category::Technology, Category::Emotions, Category::Food];

	pub fn as_str(&self) -> &'static str {
		match self {
			Category::Nature => "nature",
			Category::Technology => "technology",
			Category::Emotions => "emotions",
			Category::Food => "food",
		}
	}

	pub fn label(&self) -> &'static str {
		match self {
			Category::Nature => "Nature",
			Category::Technology => "Technology",
			Category::Emotions => "Emotions",
			Category::Food => "Food",
		}
	}

	pub fn description(&self) -> &'static str {
		match self {
			Category::Nature => "Trees, weather, animals, seasons",
			Category::Technology => "Computers, AI, internet, innovation",
			Category::Emotions => "Feelings, mood, relationships",
			Category::Food => "Meals, ingredients, cooking",
		}
	}

	/// Seed corpus trained on when this category is selected.
	pub fn corpus(&self) -> &'static str {
		corpus::seed_text(*self)
	}
}

impl fmt::Display for Category {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

impl FromStr for Category {
	type Err = ParseSettingError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		Category::ALL
			.into_iter()
			.find(|category| category.as_str().eq_ignore_ascii_case(s.trim()))
			.ok_or_else(|| ParseSettingError::Category(s.to_owned()))
	}
}
