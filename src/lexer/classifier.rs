use lazy_static::lazy_static;
use regex::Regex;

use super::rules::{Category, Rule, BRACKETS, OPERATORS, SYMBOLS, UNDEFINED};

lazy_static! {
    static ref BRACKET_NAMES: Vec<(&'static str, Regex)> = anchored(BRACKETS.iter().copied());
    static ref OPERATOR_NAMES: Vec<(&'static str, Regex)> = anchored(
        OPERATORS
            .iter()
            .flat_map(|(_, operators)| operators.iter().copied())
    );
    static ref SYMBOL_NAMES: Vec<(&'static str, Regex)> = anchored(SYMBOLS.iter().copied());
}

fn anchored(
    named: impl Iterator<Item = (&'static str, &'static str)>,
) -> Vec<(&'static str, Regex)> {
    named
        .map(|(name, pattern)| {
            let regex = Regex::new(&format!("^(?:{})", pattern))
                .expect("built-in sub-pattern is valid");
            (name, regex)
        })
        .collect()
}

fn first_named(names: &[(&'static str, Regex)], value: &str) -> String {
    names
        .iter()
        .find(|(_, regex)| regex.is_match(value))
        .map_or(UNDEFINED, |(name, _)| *name)
        .to_string()
}

/// Derives the semantic name of a lexeme from the rule that matched it.
///
/// Brackets, operators and punctuation are re-tested against their named
/// sub-patterns and take the first one that matches at the start of the
/// lexeme; operators are looked up across every family. Other rules name
/// the lexeme after themselves, provided the rule actually matches it.
/// A missing rule, or a lexeme no sub-pattern accepts, is `undefined`.
pub fn classify(rule: Option<&Rule>, value: &str) -> String {
    let Some(rule) = rule else {
        return UNDEFINED.to_string();
    };

    match rule.category() {
        Category::Bracket => first_named(&BRACKET_NAMES, value),
        Category::Operator => first_named(&OPERATOR_NAMES, value),
        Category::Punctuation => first_named(&SYMBOL_NAMES, value),
        Category::Keyword | Category::Identifier | Category::Literal => {
            if rule.regex().is_match(value) {
                rule.name().to_string()
            } else {
                UNDEFINED.to_string()
            }
        }
    }
}
