use syn::{Field, Ident, LitStr, Token, ext::IdentExt};

#[derive(Clone, Copy, PartialEq, Eq)]
pub(crate) enum Kind {
    Static,
    Keyword,
    Identifier,
    Parameter,
    List,
    Ignored,
}

impl Kind {
    pub(crate) fn variant(&self) -> &'static str {
        match self {
            Kind::Static => "Static",
            Kind::Keyword => "Keyword",
            Kind::Identifier => "Identifier",
            Kind::Parameter => "Parameter",
            Kind::List => "List",
            Kind::Ignored => unreachable!("ignored fields produce no table entry"),
        }
    }
}

pub(crate) struct FieldMetadata {
    pub(crate) ident: Ident,
    pub(crate) kind: Kind,
    pub(crate) name: String,
    pub(crate) quotes: &'static str,
    pub(crate) parentheses: &'static str,
    pub(crate) equals: &'static str,
    pub(crate) reverse: &'static str,
}

/// Decodes one field's `#[ddl(...)]` attribute into its rendering metadata.
/// Returns `None` for fields with no attribute or tagged `ignored`: they
/// contribute nothing to the statement.
pub(crate) fn decode_field(field: &Field) -> Option<FieldMetadata> {
    let attr = field
        .attrs
        .iter()
        .find(|attr| attr.meta.path().is_ident("ddl"))?;
    let ident = field
        .ident
        .clone()
        .expect("Field is expected to have a name");

    let mut kind = None;
    let mut name = None;
    let mut quotes = None;
    let mut parentheses = None;
    let mut equals = None;
    let mut reverse = None;
    // `static` is a Rust keyword, so the kind and modifier tokens are read
    // with `parse_any` instead of going through `syn::Path`.
    let parsed = attr.parse_args_with(|input: syn::parse::ParseStream| {
        let first = input.call(Ident::parse_any)?;
        kind = Some(match first.to_string().as_str() {
            "static" => Kind::Static,
            "keyword" => Kind::Keyword,
            "identifier" => Kind::Identifier,
            "parameter" => Kind::Parameter,
            "list" => Kind::List,
            "ignored" => Kind::Ignored,
            other => panic!(
                "Unknown ddl kind `{}`, expected one of: static, keyword, identifier, parameter, list, ignored",
                other
            ),
        });
        while input.peek(Token![,]) {
            input.parse::<Token![,]>()?;
            let token = input.call(Ident::parse_any)?;
            if token == "name" {
                input.parse::<Token![=]>()?;
                name = Some(input.parse::<LitStr>()?.value());
                continue;
            }
            match token.to_string().as_str() {
                "no_quotes" => quotes = Some("NoQuotes"),
                "double_quotes" => quotes = Some("DoubleQuotes"),
                "single_quotes" => quotes = Some("SingleQuotes"),
                "no_parentheses" => parentheses = Some("NoParentheses"),
                "parentheses" => parentheses = Some("Parentheses"),
                "equals" => equals = Some("Equals"),
                "no_equals" => equals = Some("NoEquals"),
                "no_reverse" => reverse = Some("NoReverse"),
                "reverse" => reverse = Some("Reverse"),
                other => panic!(
                    "Unknown ddl modifier `{}` on field `{}`, use it like: `#[ddl(parameter, name = \"KEY\", single_quotes)]`",
                    other, ident
                ),
            }
        }
        Ok(())
    });
    if parsed.is_err() {
        panic!(
            "Error while parsing `ddl` on field `{}`, use it like: `#[ddl(keyword, name = \"ON\")]`",
            ident
        );
    }
    let kind = kind.expect("The ddl kind is parsed above");
    if kind == Kind::Ignored {
        return None;
    }
    if equals == Some("Equals") && reverse == Some("Reverse") {
        panic!(
            "Field `{}` cannot combine `equals` with `reverse`: the pair renders as `value key` without an equals sign",
            ident
        );
    }
    Some(FieldMetadata {
        ident,
        kind,
        name: name.unwrap_or_default(),
        quotes: quotes.unwrap_or("NoQuotes"),
        parentheses: parentheses.unwrap_or("NoParentheses"),
        // parameters render `KEY = value` unless told otherwise
        equals: equals.unwrap_or(if kind == Kind::Parameter {
            "Equals"
        } else {
            "NoEquals"
        }),
        reverse: reverse.unwrap_or("NoReverse"),
    })
}
