//! # Scene query syntax
//!
//! `scene-syntax` compiles the single-line filter language typed into the
//! scene browser into a small tree of predicates. The tree is evaluated
//! elsewhere (see the `scene-catalog` crate); this crate only knows how the
//! text is shaped.
//!
//! Words separated by spaces must all hold, `or ` separates alternatives,
//! parentheses group and a leading `!` negates the following word or group:
//!
//! ```
//! use scene_syntax::{parse_query, ComparisonOp, NumericField, Predicate};
//!
//! let query = parse_query("outdoor numgirls>=2 or !(year<2000 or ^vintage)");
//! let root = &query.root;
//! assert_eq!(root.branches.len(), 2);
//!
//! let first = &root.branches[0];
//! assert_eq!(first.atoms[0].predicate, Predicate::Tag("outdoor".into()));
//! assert!(matches!(
//!     &first.atoms[1].predicate,
//!     Predicate::Compare { field: NumericField::NumGirls, op: ComparisonOp::Gte, value, .. } if *value == 2.0
//! ));
//!
//! let second = &root.branches[1];
//! assert!(second.atoms.is_empty());
//! assert!(second.groups[0].negated);
//! assert!(query.warnings.is_empty());
//! ```
//!
//! Parsing never fails. Input the grammar cannot make sense of degrades to a
//! less restrictive tree and is reported through [`Query::warnings`].

mod display;
mod duration;

pub use duration::{duration_to_seconds, numeric_value};

use std::fmt;
use tracing::warn;

/// Separator between alternatives. The trailing space is part of the keyword.
pub const OR_KEYWORD: &str = "or ";

/// Parses a filter query. Never fails; see [`ParseWarning`].
pub fn parse_query(input: &str) -> Query {
    Parser::new(input).parse()
}

/// A compiled query together with the problems found while compiling it.
#[derive(Debug, Clone, PartialEq)]
pub struct Query {
    pub root: Disjunction,
    /// At most one entry per kind of problem: an unclosed group is reported
    /// once, at the innermost `(` left open.
    pub warnings: Vec<ParseWarning>,
}

impl Query {
    /// `true` when the query places no restriction at all (blank input).
    ///
    /// ```
    /// use scene_syntax::parse_query;
    /// assert!(parse_query("   ").is_empty());
    /// assert!(!parse_query("beach").is_empty());
    /// ```
    pub fn is_empty(&self) -> bool {
        !self.root.negated && matches!(self.root.branches.as_slice(), [only] if only.is_empty())
    }
}

/// Alternatives separated by `or `. Holds when any branch holds, inverted
/// when the group was written as `!( ... )`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Disjunction {
    pub negated: bool,
    pub branches: Vec<Conjunction>,
}

/// Space separated units. Holds when every atom and every nested group holds,
/// so an empty conjunction always holds.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Conjunction {
    pub atoms: Vec<Atom>,
    pub groups: Vec<Disjunction>,
}

impl Conjunction {
    pub fn is_empty(&self) -> bool {
        self.atoms.is_empty() && self.groups.is_empty()
    }
}

/// A single word compiled into a predicate, possibly negated by a leading `!`.
#[derive(Debug, Clone, PartialEq)]
pub struct Atom {
    pub negated: bool,
    pub predicate: Predicate,
}

/// What a single word checks.
#[derive(Debug, Clone, PartialEq)]
pub enum Predicate {
    /// Holds for every scene. Produced by `^`, by unknown `field:value`
    /// words and by words whose operator is not understood.
    ///
    /// ```
    /// use scene_syntax::{parse_query, Predicate};
    /// let query = parse_query("rating>=4");
    /// assert_eq!(query.root.branches[0].atoms[0].predicate, Predicate::AlwaysTrue);
    /// ```
    AlwaysTrue,
    /// The scene carries exactly this tag.
    ///
    /// ```
    /// use scene_syntax::{parse_query, Predicate};
    /// let query = parse_query("beach");
    /// assert_eq!(query.root.branches[0].atoms[0].predicate, Predicate::Tag("beach".into()));
    /// ```
    Tag(String),
    /// Some tag of the scene contains this fragment (`^frag`).
    ///
    /// ```
    /// use scene_syntax::{parse_query, Predicate};
    /// let query = parse_query("^pack");
    /// assert_eq!(query.root.branches[0].atoms[0].predicate, Predicate::PartialTag("pack".into()));
    /// ```
    PartialTag(String),
    /// `actor:`, `website:` or `file:` substring search.
    ///
    /// ```
    /// use scene_syntax::{parse_query, Predicate, TextField};
    /// let query = parse_query("website:example");
    /// assert_eq!(
    ///     query.root.branches[0].atoms[0].predicate,
    ///     Predicate::Substring { field: TextField::Website, needle: "example".into() }
    /// );
    /// ```
    Substring { field: TextField, needle: String },
    /// Numeric comparison such as `score>=3` or `length<10:00`.
    ///
    /// `value` is already converted (durations to seconds); `raw` keeps the
    /// text as typed. An unparseable operand is `NaN` and never matches.
    ///
    /// ```
    /// use scene_syntax::{parse_query, ComparisonOp, NumericField, Predicate};
    /// let query = parse_query("length<10:00");
    /// let Predicate::Compare { field, op, value, raw } = &query.root.branches[0].atoms[0].predicate else {
    ///     panic!()
    /// };
    /// assert_eq!((*field, *op, *value, raw.as_str()), (NumericField::Length, ComparisonOp::Lt, 600.0, "10:00"));
    /// ```
    Compare {
        field: NumericField,
        op: ComparisonOp,
        value: f64,
        raw: String,
    },
}

/// Free-text fields searched by substring.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextField {
    Actor,
    Website,
    /// Matches against the file name or the directory.
    File,
}

impl TextField {
    pub fn keyword(self) -> &'static str {
        match self {
            TextField::Actor => "actor",
            TextField::Website => "website",
            TextField::File => "file",
        }
    }
}

/// Integer fields reachable through comparisons.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NumericField {
    NumGirls,
    NumBoys,
    /// Compared against the scene's effective duration, in seconds.
    Length,
    /// Never matches scenes without a year.
    Year,
    Score,
}

impl NumericField {
    pub fn keyword(self) -> &'static str {
        match self {
            NumericField::NumGirls => "numgirls",
            NumericField::NumBoys => "numboys",
            NumericField::Length => "length",
            NumericField::Year => "year",
            NumericField::Score => "score",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComparisonOp {
    Lt,
    Lte,
    Gt,
    Gte,
    /// Written either `=` or `:`.
    Eq,
}

impl ComparisonOp {
    pub fn symbol(self) -> &'static str {
        match self {
            ComparisonOp::Lt => "<",
            ComparisonOp::Lte => "<=",
            ComparisonOp::Gt => ">",
            ComparisonOp::Gte => ">=",
            ComparisonOp::Eq => "=",
        }
    }

    /// Applies the comparison. Any `NaN` operand yields `false`.
    pub fn compare(self, lhs: f64, rhs: f64) -> bool {
        match self {
            ComparisonOp::Lt => lhs < rhs,
            ComparisonOp::Lte => lhs <= rhs,
            ComparisonOp::Gt => lhs > rhs,
            ComparisonOp::Gte => lhs >= rhs,
            ComparisonOp::Eq => lhs == rhs,
        }
    }
}

/// Something in the query that was dropped or ignored while compiling it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseWarning {
    pub message: String,
    pub position: usize,
}

impl fmt::Display for ParseWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (at byte {})", self.message, self.position)
    }
}

impl std::error::Error for ParseWarning {}

const TEXT_FIELDS: [(&str, TextField); 3] = [
    ("actor:", TextField::Actor),
    ("website:", TextField::Website),
    ("file:", TextField::File),
];

const NUMERIC_FIELDS: [(&str, NumericField); 5] = [
    ("numgirls", NumericField::NumGirls),
    ("numboys", NumericField::NumBoys),
    ("length", NumericField::Length),
    ("year", NumericField::Year),
    ("score", NumericField::Score),
];

// Two character operators first so `>=` is not read as `>` followed by `=2`.
const OPERATORS: [(&str, ComparisonOp); 6] = [
    (">=", ComparisonOp::Gte),
    (">", ComparisonOp::Gt),
    ("<=", ComparisonOp::Lte),
    ("<", ComparisonOp::Lt),
    ("=", ComparisonOp::Eq),
    (":", ComparisonOp::Eq),
];

/// Recursive-descent parser over the raw query. Each layer consumes what it
/// understands and leaves the rest at `pos` for its caller.
struct Parser<'a> {
    input: &'a str,
    pos: usize,
    abandoned: bool,
    warnings: Vec<ParseWarning>,
}

impl<'a> Parser<'a> {
    fn new(input: &'a str) -> Self {
        Self {
            input,
            pos: 0,
            abandoned: false,
            warnings: Vec::new(),
        }
    }

    fn parse(mut self) -> Query {
        self.skip_ws();
        let root = self.parse_disjunction(false);
        self.skip_ws();
        if !self.eof() {
            // Only a stray `)` stops the root disjunction early.
            self.report("unexpected ')', ignoring the rest of the query");
        }
        Query {
            root,
            warnings: self.warnings,
        }
    }

    fn parse_disjunction(&mut self, negated: bool) -> Disjunction {
        let mut branches = Vec::new();
        loop {
            branches.push(self.parse_conjunction());
            self.skip_ws();
            if !self.consume_or_keyword() {
                break;
            }
        }
        Disjunction { negated, branches }
    }

    fn parse_conjunction(&mut self) -> Conjunction {
        let mut conjunction = Conjunction::default();
        loop {
            self.skip_ws();
            if self.at_conjunction_end() {
                break;
            }

            let negated = self.peek_char() == Some('!');
            if negated {
                self.advance_char();
                self.skip_ws();
            }

            if self.peek_char() != Some('(') {
                conjunction.atoms.push(self.parse_atom(negated));
                continue;
            }

            let open = self.pos;
            self.advance_char();
            let group = self.parse_disjunction(negated);
            self.skip_ws();
            if self.peek_char() == Some(')') {
                self.advance_char();
                conjunction.groups.push(group);
            } else {
                self.abandon(open);
                break;
            }
        }
        conjunction
    }

    fn parse_atom(&mut self, negated: bool) -> Atom {
        let rest = self.remaining();
        if rest.is_empty() || rest.starts_with(')') || rest.starts_with(OR_KEYWORD) {
            return Atom {
                negated,
                predicate: Predicate::AlwaysTrue,
            };
        }

        let len = rest.find([' ', '(', ')']).unwrap_or(rest.len());
        let word = &rest[..len];
        self.pos += len;
        Atom {
            negated,
            predicate: compile_word(word),
        }
    }

    // An unterminated group ends the whole parse: everything after the `(`
    // that could not be closed is dropped, together with the group itself.
    fn abandon(&mut self, open: usize) {
        if !self.abandoned {
            let message = "missing ')', ignoring the rest of the query";
            warn!(query = self.input, position = open, "{message}");
            self.warnings.push(ParseWarning {
                message: message.into(),
                position: open,
            });
        }
        self.abandoned = true;
        self.pos = self.input.len();
    }

    fn report(&mut self, message: &str) {
        warn!(query = self.input, position = self.pos, "{message}");
        self.warnings.push(ParseWarning {
            message: message.into(),
            position: self.pos,
        });
    }

    fn at_conjunction_end(&self) -> bool {
        let rest = self.remaining();
        rest.is_empty() || rest.starts_with(')') || rest.starts_with(OR_KEYWORD)
    }

    fn consume_or_keyword(&mut self) -> bool {
        if self.remaining().starts_with(OR_KEYWORD) {
            self.pos += OR_KEYWORD.len();
            true
        } else {
            false
        }
    }

    fn skip_ws(&mut self) {
        while let Some(ch) = self.peek_char() {
            if ch.is_whitespace() {
                self.advance_char();
            } else {
                break;
            }
        }
    }

    fn remaining(&self) -> &'a str {
        &self.input[self.pos..]
    }

    fn peek_char(&self) -> Option<char> {
        self.remaining().chars().next()
    }

    fn advance_char(&mut self) {
        if let Some(ch) = self.peek_char() {
            self.pos += ch.len_utf8();
        }
    }

    fn eof(&self) -> bool {
        self.pos >= self.input.len()
    }
}

/// Compiles one word. Field expressions win over tags as soon as the word
/// contains any of `:<>=`.
fn compile_word(word: &str) -> Predicate {
    if word.contains([':', '<', '>', '=']) {
        return compile_field(word);
    }

    if let Some(fragment) = word.strip_prefix('^') {
        if fragment.is_empty() {
            return Predicate::AlwaysTrue;
        }
        return Predicate::PartialTag(fragment.to_string());
    }

    Predicate::Tag(word.to_string())
}

fn compile_field(word: &str) -> Predicate {
    for (prefix, field) in TEXT_FIELDS {
        if let Some(needle) = word.strip_prefix(prefix) {
            return Predicate::Substring {
                field,
                needle: needle.to_string(),
            };
        }
    }

    for (name, field) in NUMERIC_FIELDS {
        let Some(rest) = word.strip_prefix(name) else {
            continue;
        };
        let Some((op, raw)) = split_comparison(rest) else {
            return Predicate::AlwaysTrue;
        };
        let value = match field {
            NumericField::Length => duration_to_seconds(raw),
            _ => numeric_value(raw),
        };
        return Predicate::Compare {
            field,
            op,
            value,
            raw: raw.to_string(),
        };
    }

    Predicate::AlwaysTrue
}

fn split_comparison(rest: &str) -> Option<(ComparisonOp, &str)> {
    OPERATORS
        .iter()
        .find_map(|&(symbol, op)| rest.strip_prefix(symbol).map(|value| (op, value)))
}
