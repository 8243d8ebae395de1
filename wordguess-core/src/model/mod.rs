//! Top-level module for the next-word prediction model.
//!
//! This module provides:
//! - The word-level bigram table (`BigramModel`)
//! - Internal per-word state (`State`)
//! - Difficulty and category settings
//! - The predictor facade used by games (`PredictiveTextModel`)

/// High-level predictor owning a bigram table.
///
/// Exposes training, difficulty-tiered prediction, and category switching.
pub mod predictor;

/// Word-level bigram table.
///
/// Handles text ingestion, transition counting and the global
/// successor pool used as a fallback.
pub mod bigram_model;

/// Internal representation of a single predecessor word.
///
/// Tracks outgoing transitions in first-seen order and ranks them.
/// This module is not exposed publicly.
mod state;

/// Difficulty and category enumerations, with parsing and display names.
pub mod settings;

pub use predictor::PredictiveTextModel;
pub use settings::{Category, Difficulty, ParseSettingError};
