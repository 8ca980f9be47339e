use crate::write_escaped;

/// Quoting applied to a rendered value. The quote character itself is escaped
/// inside the value: `"` is doubled, `'` becomes `\'` (string-literal rules of
/// the target dialect).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum QuoteModifier {
    #[default]
    NoQuotes,
    DoubleQuotes,
    SingleQuotes,
}

impl QuoteModifier {
    pub fn modify(&self, out: &mut String, value: &str) {
        match self {
            QuoteModifier::NoQuotes => out.push_str(value),
            QuoteModifier::DoubleQuotes => {
                out.push('"');
                write_escaped(out, value, '"', "\"\"");
                out.push('"');
            }
            QuoteModifier::SingleQuotes => {
                out.push('\'');
                write_escaped(out, value, '\'', "\\'");
                out.push('\'');
            }
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ParenModifier {
    #[default]
    NoParentheses,
    Parentheses,
}

impl ParenModifier {
    /// Renders `f` into `out`, wrapped in parentheses when requested.
    pub fn modify(&self, out: &mut String, f: impl FnOnce(&mut String)) {
        if *self == ParenModifier::Parentheses {
            out.push('(');
            f(out);
            out.push(')');
        } else {
            f(out);
        }
    }
}

/// Renders the key side of a key/value pair, either `KEY = ` or `KEY `.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum EqualsModifier {
    Equals,
    #[default]
    NoEquals,
}

impl EqualsModifier {
    pub fn modify(&self, out: &mut String, key: &str) {
        out.push_str(key);
        match self {
            EqualsModifier::Equals => out.push_str(if key.is_empty() { "= " } else { " = " }),
            EqualsModifier::NoEquals => {
                if !key.is_empty() {
                    out.push(' ');
                }
            }
        }
    }
}

/// Emission order of a (key, value) pair joined by a single space. `Reverse`
/// is mutually exclusive with [`EqualsModifier::Equals`]; the derive rejects
/// that combination.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ReverseModifier {
    #[default]
    NoReverse,
    Reverse,
}

impl ReverseModifier {
    pub fn modify(&self, out: &mut String, [first, second]: [&str; 2]) {
        let (first, second) = match self {
            ReverseModifier::NoReverse => (first, second),
            ReverseModifier::Reverse => (second, first),
        };
        out.push_str(first);
        out.push(' ');
        out.push_str(second);
    }
}
