use tracing::{debug, trace};

use super::{
    rules::{Rule, RuleTable, RULES},
    tokens::{build_tokens, Match, Token},
};

/// Scanning state for one input: the text not yet consumed and the matches
/// emitted so far.
#[derive(Clone)]
pub struct Lexer<'r, 's> {
    table: &'r RuleTable,
    matches: Vec<Match<'r>>,
    remaining: &'s str,
}

impl<'r, 's> Lexer<'r, 's> {
    pub fn new(table: &'r RuleTable, source: &'s str) -> Lexer<'r, 's> {
        Lexer {
            table,
            matches: vec![],
            remaining: source,
        }
    }

    pub fn advance_n(&mut self, n: usize) {
        self.remaining = &self.remaining[n..];
    }

    pub fn push(&mut self, m: Match<'r>) {
        self.matches.push(m);
    }

    pub fn at_eof(&self) -> bool {
        self.remaining.is_empty()
    }

    /// The rule whose first occurrence starts earliest in the remaining
    /// text. On equal starts the rule listed first keeps its place.
    fn leftmost(&self) -> Option<(&'r Rule, regex::Match<'s>)> {
        let remaining = self.remaining;
        let mut best: Option<(&'r Rule, regex::Match<'s>)> = None;

        for rule in self.table.iter() {
            let Some(found) = rule.find_in(remaining) else {
                continue;
            };

            match best {
                Some((_, current)) if found.start() >= current.start() => {}
                _ => best = Some((rule, found)),
            }
        }

        best
    }

    fn push_undefined(&mut self, text: &str) {
        for chunk in text.split_whitespace() {
            trace!(lexeme = chunk, "undefined");
            self.push(Match::undefined(chunk));
        }
    }

    /// Consumes the next token along with any unrecognised text before it.
    /// Returns false once the input is exhausted.
    pub fn step(&mut self) -> bool {
        if self.at_eof() {
            return false;
        }

        match self.leftmost() {
            Some((rule, found)) => {
                let remaining = self.remaining;
                self.push_undefined(&remaining[..found.start()]);

                trace!(
                    rule = rule.name(),
                    lexeme = found.as_str(),
                    offset = found.start(),
                    "match"
                );
                self.push(Match::new(rule, found.as_str()));
                self.advance_n(found.end());
            }
            None => {
                let remaining = self.remaining;
                self.push_undefined(remaining);
                self.advance_n(remaining.len());
            }
        }

        true
    }

    pub fn into_matches(self) -> Vec<Match<'r>> {
        self.matches
    }
}

/// Splits `source` into matches using `table`. Never fails: text no rule
/// recognises comes back as whitespace-separated undefined fragments.
pub fn scan<'r>(table: &'r RuleTable, source: &str) -> Vec<Match<'r>> {
    let mut lex = Lexer::new(table, source);

    while lex.step() {}

    lex.into_matches()
}

pub fn tokenize_with(table: &RuleTable, source: &str) -> Vec<Token> {
    let matches = scan(table, source);
    let tokens = build_tokens(&matches);

    debug!(
        tokens = tokens.len(),
        undefined = tokens.iter().filter(|token| token.is_undefined()).count(),
        "tokenized"
    );
    tokens
}

/// Tokenizes `source` with the built-in relational-algebra rules.
pub fn tokenize(source: &str) -> Vec<Token> {
    tokenize_with(&RULES, source)
}
