use std::collections::HashSet;

use lazy_static::lazy_static;
use regex::Regex;
use tracing::debug;

use crate::{
    errors::errors::{Error, ErrorImpl},
    MK_ALTERNATION,
};

/// Rule name given to fragments no rule recognises.
pub const UNDEFINED: &str = "undefined";

pub const RESERVED_WORDS: &[&str] = &[
    "UNION", "INTERSECT", "TIMES", "JOIN", "WHERE", "DIVIDE BY", "RENAME", "Semijoin",
    "Semiminus", "SUMMARIZE", "INNER", "LEFT", "RIGHT", "CREATE", "TABLE", "DROP", "ALTER",
    "ADD", "INSERT", "VALUES", "INTO", "UPDATE", "DELETE", "BeginRA", "EndRA",
];

pub const TYPE_NAMES: &[&str] = &["INTEGER", "TEXT"];

pub const ID3_PATTERN: &str = r"[a-zA-Z]+_[a-zA-Z]+\d*";
pub const ID2_PATTERN: &str = r"[a-zA-Z]+_\w*";
pub const NUMBER_PATTERN: &str = r"[-+]?(?:\d+(?:\.\d*)?|\.\d+)(?:[eE][-+]?\d+)?";
pub const SINGLE_QUOTED_PATTERN: &str = "'.*'";
pub const DOUBLE_QUOTED_PATTERN: &str = "\".*\"";

/// Operator families, each compiled into one rule. Within a family the
/// longer operators precede their prefixes.
pub const OPERATORS: &[(&str, &[(&str, &str)])] = &[
    ("assignment", &[("walrus", ":="), ("assignment", "=")]),
    (
        "comparison",
        &[
            ("equals", "=="),
            ("not equals", "!="),
            ("greater or equals", ">="),
            ("less or equals", "<="),
            ("greater than", ">"),
            ("less than", "<"),
        ],
    ),
    (
        "mathematical",
        &[
            ("plus", r"\+"),
            ("minus", "-"),
            ("multiply", r"\*"),
            ("divide", "/"),
        ],
    ),
];

pub const BRACKETS: &[(&str, &str)] = &[
    ("square opening", r"\["),
    ("square closing", r"\]"),
    ("round opening", r"\("),
    ("round closing", r"\)"),
    ("curly opening", r"\{"),
    ("curly closing", r"\}"),
];

pub const SYMBOLS: &[(&str, &str)] = &[
    ("comma", ","),
    ("point", r"\."),
    ("semicolon", ";"),
];

/// How a rule's lexemes are named once matched.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum Category {
    Keyword,
    Identifier,
    /// Numbers, quoted strings and any other rule named after itself.
    Literal,
    Operator,
    Bracket,
    Punctuation,
}

#[derive(Debug, Clone)]
pub struct Rule {
    name: String,
    category: Category,
    regex: Regex,
}

impl Rule {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn category(&self) -> Category {
        self.category
    }

    pub fn regex(&self) -> &Regex {
        &self.regex
    }

    /// Earliest non-empty occurrence of the rule anywhere in `text`.
    pub fn find_in<'s>(&self, text: &'s str) -> Option<regex::Match<'s>> {
        self.regex.find_iter(text).find(|m| !m.is_empty())
    }
}

/// Ordered, immutable set of rules. Order only matters when two rules
/// match at the same leftmost index: the earlier rule wins.
#[derive(Debug, Clone)]
pub struct RuleTable {
    rules: Vec<Rule>,
}

impl RuleTable {
    pub fn builder() -> RuleTableBuilder {
        RuleTableBuilder::default()
    }

    /// The rule table of the relational-algebra language.
    pub fn relational_algebra() -> Result<RuleTable, Error> {
        let keywords = RESERVED_WORDS
            .iter()
            .chain(TYPE_NAMES)
            .map(|word| regex::escape(word))
            .chain(TYPE_NAMES.iter().map(|name| regex::escape(&name.to_lowercase())));

        let mut builder = RuleTable::builder()
            .rule("keyword", Category::Keyword, MK_ALTERNATION!(keywords))
            .rule("id3", Category::Identifier, ID3_PATTERN)
            .rule("id2", Category::Identifier, ID2_PATTERN)
            .rule("number", Category::Literal, NUMBER_PATTERN)
            .rule("simple_quoters", Category::Literal, SINGLE_QUOTED_PATTERN)
            .rule("double_quoters", Category::Literal, DOUBLE_QUOTED_PATTERN);

        for (family, operators) in OPERATORS {
            builder = builder.rule(
                *family,
                Category::Operator,
                MK_ALTERNATION!(operators.iter().map(|(_, pattern)| *pattern)),
            );
        }

        builder
            .rule("bracket", Category::Bracket, character_class(BRACKETS))
            .rule("symbol", Category::Punctuation, character_class(SYMBOLS))
            .build()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Rule> {
        self.rules.iter()
    }

    pub fn get(&self, name: &str) -> Option<&Rule> {
        self.rules.iter().find(|rule| rule.name == name)
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

fn character_class(members: &[(&str, &str)]) -> String {
    format!(
        "[{}]",
        members.iter().map(|(_, pattern)| *pattern).collect::<String>()
    )
}

/// Collects rules in order and validates them all at once in `build`.
#[derive(Debug, Default, Clone)]
pub struct RuleTableBuilder {
    entries: Vec<(String, Category, String)>,
}

impl RuleTableBuilder {
    pub fn rule(
        mut self,
        name: impl Into<String>,
        category: Category,
        pattern: impl Into<String>,
    ) -> Self {
        self.entries.push((name.into(), category, pattern.into()));
        self
    }

    pub fn build(self) -> Result<RuleTable, Error> {
        let mut seen = HashSet::new();
        let mut rules = Vec::with_capacity(self.entries.len());

        for (name, category, pattern) in self.entries {
            if name == UNDEFINED {
                return Err(Error::new(ErrorImpl::ReservedRuleName, name));
            }

            if !seen.insert(name.clone()) {
                return Err(Error::new(ErrorImpl::DuplicateRule, name));
            }

            let regex = Regex::new(&pattern).map_err(|err| {
                Error::new(
                    ErrorImpl::InvalidPattern {
                        message: err.to_string(),
                    },
                    name.clone(),
                )
            })?;

            if regex.is_match("") {
                return Err(Error::new(ErrorImpl::EmptyMatch { pattern }, name));
            }

            rules.push(Rule {
                name,
                category,
                regex,
            });
        }

        debug!(rules = rules.len(), "built rule table");
        Ok(RuleTable { rules })
    }
}

lazy_static! {
    /// The built-in relational-algebra rule table, shared by every scan.
    pub static ref RULES: RuleTable =
        RuleTable::relational_algebra().expect("built-in rule table is valid");
}
