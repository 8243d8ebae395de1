//! Seed texts the model is trained on when a category is selected.
//!
//! Each corpus is a block of short sentences around the category vocabulary,
//! with enough repeated word pairs that medium and hard predictions have
//! something to rank.

use crate::model::settings::Category;

pub const NATURE: &str = include_str!("../data/nature.txt");
pub const TECHNOLOGY: &str = include_str!("../data/technology.txt");
pub const EMOTIONS: &str = include_str!("../data/emotions.txt");
pub const FOOD: &str = include_str!("../data/food.txt");

/// Returns the seed corpus for `category`.
pub fn seed_text(category: Category) -> &'static str {
	match category {
		Category::Nature => NATURE,
		Category::Technology => TECHNOLOGY,
		Category::Emotions => EMOTIONS,
		Category::Food => FOOD,
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::text::tokenize;

	#[test]
	fn every_category_has_a_non_trivial_corpus() {
		for category in Category::ALL {
			let tokens = tokenize(seed_text(category));
			assert!(tokens.len() > 100, "{category} corpus too small: {}", tokens.len());
		}
	}

	#[test]
	fn corpora_are_distinct() {
		assert_ne!(NATURE, TECHNOLOGY);
		assert_ne!(EMOTIONS, FOOD);
		assert_ne!(NATURE, FOOD);
	}
}
