#![allow(clippy::module_inception)]

use std::sync::Once;

use crate::lexer::{lexer::tokenize, tokens::Token};

pub mod display;
pub mod errors;
pub mod lexer;
pub mod macros;

extern crate regex;

static TRACING_INIT: Once = Once::new();

/// Initialize tracing for debug output.
///
/// Safe to call multiple times. Enable with `RUST_LOG=ra_lexer=debug` or
/// `RUST_LOG=ra_lexer=trace` to see every match the scanner emits.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_ok() {
            tracing_subscriber::registry()
                .with(fmt::layer().with_target(true).with_level(true))
                .with(EnvFilter::from_default_env())
                .init();
        }
    });
}

/// Runs the whole pipeline on `source` with the built-in rules.
pub fn analyze(source: &str) -> Vec<Token> {
    tokenize(source)
}
