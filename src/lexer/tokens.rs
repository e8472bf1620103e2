use std::{collections::HashMap, fmt::Display};

use crate::MK_TOKEN;

use super::{
    classifier::classify,
    rules::{Category, Rule, UNDEFINED},
};

/// One scanning step: the rule that recognised `lexeme`, or `None` for an
/// undefined fragment.
#[derive(Debug, Clone)]
pub struct Match<'r> {
    pub rule: Option<&'r Rule>,
    pub lexeme: String,
}

impl<'r> Match<'r> {
    pub fn new(rule: &'r Rule, lexeme: impl Into<String>) -> Self {
        Match {
            rule: Some(rule),
            lexeme: lexeme.into(),
        }
    }

    pub fn undefined(lexeme: impl Into<String>) -> Self {
        Match {
            rule: None,
            lexeme: lexeme.into(),
        }
    }

    pub fn rule_name(&self) -> &str {
        self.rule.map_or(UNDEFINED, Rule::name)
    }

    pub fn category(&self) -> Option<Category> {
        self.rule.map(Rule::category)
    }

    pub fn is_undefined(&self) -> bool {
        self.rule.is_none()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// Name of the rule that matched, or `undefined`.
    pub kind: String,
    pub name: String,
    pub value: String,
    /// Running offset over emitted lexemes only, starting at 1. Skipped
    /// whitespace does not advance it.
    pub start: usize,
    pub length: usize,
    /// Shared by every token with the same value, numbered from 1 in order
    /// of first occurrence.
    pub position: usize,
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "token_type:\t{}\tname:\t{}\tvalue:\t{}\tstart:\t{}\tlength:\t{}\tposition:\t{}",
            self.kind, self.name, self.value, self.start, self.length, self.position
        )
    }
}

impl Token {
    pub fn is_undefined(&self) -> bool {
        self.kind == UNDEFINED
    }
}

/// Semantic name of a match. Keywords and identifiers are named by their
/// own text; everything else goes through the classifier.
pub fn token_name(m: &Match) -> String {
    match m.category() {
        Some(Category::Keyword) | Some(Category::Identifier) => m.lexeme.clone(),
        _ => classify(m.rule, &m.lexeme),
    }
}

pub fn build_tokens(matches: &[Match]) -> Vec<Token> {
    let mut tokens = Vec::with_capacity(matches.len());
    let mut positions: HashMap<&str, usize> = HashMap::new();
    let mut start = 1;
    let mut next_position = 1;

    for m in matches {
        let position = *positions.entry(m.lexeme.as_str()).or_insert_with(|| {
            next_position += 1;
            next_position - 1
        });

        let token = MK_TOKEN!(
            m.rule_name().to_string(),
            token_name(m),
            m.lexeme.clone(),
            start,
            position
        );
        start += token.length;
        tokens.push(token);
    }

    tokens
}
