//! Boggle Engine
//!
//! Board generation, dictionary lookup, word validation and scoring for the
//! Boggle word-search game.
//!
//! # Quick Start
//!
//! ```rust
//! use boggle_engine::core::{Board, Dimension, Lexicon};
//! use boggle_engine::game::GameSession;
//!
//! let lexicon: Lexicon = ["cat", "act"].into_iter().collect();
//! let board = Board::from_letters(Dimension::Standard, "catx axxx xxxx xxxx").unwrap();
//!
//! let mut game = GameSession::with_board(&lexicon, board, 180);
//! let outcome = game.submit_typed("cat").unwrap();
//! assert!(outcome.valid);
//! assert_eq!(game.score(), 1);
//! ```

// Core domain types
pub mod core;

// Game rules and sessions
pub mod game;

// Dictionaries
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;

// Logger setup
pub mod log;
