use crate::{
    EqualsModifier, Identifier, ParenModifier, QuoteModifier, ReverseModifier, separated_by,
};
use std::{
    borrow::Cow,
    fmt::{self, Display},
};

/// One syntactic unit of a statement. Clauses render independently and are
/// joined with single spaces by [`sql`]; a clause whose rendering is empty
/// disappears from the statement entirely.
///
/// [`sql`]: crate::sql
#[derive(Clone, Debug)]
pub enum Clause<'a> {
    /// Fixed text, rendered verbatim.
    Static(Cow<'a, str>),
    /// A bare keyword, optionally quoted.
    Keyword {
        key: Cow<'a, str>,
        quotes: QuoteModifier,
    },
    /// `KEY name` or `KEY = name`; the name is fully qualified when the
    /// identifier carries scopes, double-quoted otherwise.
    Identifier {
        key: &'static str,
        value: &'a Identifier,
        equals: EqualsModifier,
    },
    /// `KEY = value` by default; `value KEY` under the reverse modifier.
    Parameter {
        key: &'static str,
        value: Cow<'a, str>,
        quotes: QuoteModifier,
        equals: EqualsModifier,
        reverse: ReverseModifier,
    },
    /// Sub-clauses joined by a separator, optionally parenthesized. Empty
    /// lists render as nothing, not as `()`.
    List {
        clauses: Vec<Clause<'a>>,
        separator: &'static str,
        parentheses: ParenModifier,
    },
}

impl Clause<'_> {
    pub fn write(&self, out: &mut String) {
        match self {
            Clause::Static(text) => out.push_str(text),
            Clause::Keyword { key, quotes } => quotes.modify(out, key),
            Clause::Identifier { key, value, equals } => {
                if !key.is_empty() {
                    equals.modify(out, key);
                }
                value.write_name(out);
            }
            Clause::Parameter {
                key,
                value,
                quotes,
                equals,
                reverse,
            } => {
                if *reverse == ReverseModifier::Reverse {
                    let mut quoted = String::with_capacity(value.len() + 2);
                    quotes.modify(&mut quoted, value);
                    reverse.modify(out, [key, &quoted]);
                } else {
                    equals.modify(out, key);
                    quotes.modify(out, value);
                }
            }
            Clause::List {
                clauses,
                separator,
                parentheses,
            } => {
                let mut joined = String::with_capacity(32);
                separated_by(&mut joined, clauses, |out, c| c.write(out), separator);
                // an all-empty list vanishes instead of rendering ()
                if !joined.is_empty() {
                    parentheses.modify(out, |out| out.push_str(&joined));
                }
            }
        }
    }

    pub fn render(&self) -> String {
        let mut out = String::with_capacity(32);
        self.write(&mut out);
        out
    }
}

impl Display for Clause<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}
