//! quiz-core: record parsing, answer sources and the quiz engine.
//!
//! This crate holds everything the `quiz` binary needs except terminal
//! output and argument parsing.

pub mod config;
pub mod engine;
pub mod error;
pub mod mock;
pub mod model;
pub mod parser;
pub mod stdin;
pub mod traits;
