use crate::QuoteModifier;
use std::fmt::{self, Display};

/// Names a database object. `Bare` carries just a name and renders as a
/// double-quoted word; `Qualified` additionally carries the enclosing scopes
/// (database, schema, ...) and renders as a dot-separated path with each part
/// double-quoted.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Identifier {
    Bare { name: String },
    Qualified { scopes: Vec<String>, name: String },
}

impl Identifier {
    /// An account-level object such as a database, role, user or share.
    pub fn account_object(name: impl Into<String>) -> Self {
        Identifier::Bare { name: name.into() }
    }

    /// A schema inside a database: renders as `"db"."schema"`.
    pub fn schema(database: impl Into<String>, schema: impl Into<String>) -> Self {
        Identifier::Qualified {
            scopes: vec![database.into()],
            name: schema.into(),
        }
    }

    /// An object inside a schema: renders as `"db"."schema"."name"`.
    pub fn schema_object(
        database: impl Into<String>,
        schema: impl Into<String>,
        name: impl Into<String>,
    ) -> Self {
        Identifier::Qualified {
            scopes: vec![database.into(), schema.into()],
            name: name.into(),
        }
    }

    /// The object's own (unqualified) name.
    pub fn name(&self) -> &str {
        match self {
            Identifier::Bare { name } | Identifier::Qualified { name, .. } => name,
        }
    }

    pub fn scopes(&self) -> &[String] {
        match self {
            Identifier::Bare { .. } => &[],
            Identifier::Qualified { scopes, .. } => scopes,
        }
    }

    pub fn write_name(&self, out: &mut String) {
        for scope in self.scopes() {
            QuoteModifier::DoubleQuotes.modify(out, scope);
            out.push('.');
        }
        QuoteModifier::DoubleQuotes.modify(out, self.name());
    }

    pub fn fully_qualified_name(&self) -> String {
        let mut out = String::with_capacity(self.name().len() + 2);
        self.write_name(&mut out);
        out
    }
}

impl Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.fully_qualified_name())
    }
}
