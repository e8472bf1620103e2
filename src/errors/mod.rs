//! Error types for rule table construction.
//!
//! Scanning never fails: unrecognised text degrades to `undefined` tokens.
//! The only failure path is building a rule table from patterns that are
//! malformed or could stall the scanner, which is reported here together
//! with the offending rule name and a suggestion.

pub mod errors;

#[cfg(test)]
mod tests;
