//! Next-word prediction library for a "guess what the machine guesses" game.
//!
//! This crate provides:
//! - A bigram (word-level 2-gram) model trained online from free text
//! - Difficulty-tiered prediction policies with fallbacks under sparse data
//! - Fixed per-category seed corpora
//! - A game session tracking rounds, score and hints
//!
//! The bigram table itself is never exposed for writing: every mutation goes
//! through `PredictiveTextModel`.

/// Predictive text model, bigram table and game settings.
pub mod model;

/// Round/score/hint bookkeeping around a `PredictiveTextModel`.
pub mod session;

/// Game configuration (difficulty, category, random seed).
pub mod config;

/// Static seed corpora, one per category.
pub mod corpus;

/// Text normalization into tokens.
pub mod text;
