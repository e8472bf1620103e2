//! Lexical analysis for the relational-algebra language.
//!
//! This module turns a raw statement into classified tokens:
//!
//! - `rules` - the ordered table of named regex patterns
//! - `lexer` - leftmost-match scanning across every rule
//! - `classifier` - semantic names for brackets, operators and the rest
//! - `tokens` - token records with running offsets and shared positions
//!
//! Nothing here fails on bad input; unrecognised text becomes `undefined`.

pub mod classifier;
pub mod lexer;
pub mod rules;
pub mod tokens;
