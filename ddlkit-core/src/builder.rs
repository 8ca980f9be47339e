use crate::{AnnotatedField, Clause, Error, FieldKind, FieldValue, Result, SqlStruct, Validate};
use std::borrow::Cow;

/// Encodes an annotated value into one SQL statement.
pub fn struct_to_sql(value: &dyn SqlStruct) -> Result<String> {
    let clauses = parse_struct(value)?;
    let statement = sql(&clauses);
    log::debug!("generated statement: {}", statement);
    Ok(statement)
}

/// Validates, then encodes. No SQL is ever produced for an invalid options
/// value.
pub fn validated_sql<T: SqlStruct + Validate>(options: &T) -> Result<String> {
    options.validate()?;
    struct_to_sql(options)
}

/// Joins the clauses' renderings with single spaces, dropping empty fragments
/// and trimming the final text. This is the only place a full statement is
/// materialized; all escaping happened earlier, in the modifiers.
pub fn sql(clauses: &[Clause]) -> String {
    let mut out = String::with_capacity(64);
    for clause in clauses {
        let rendered = clause.render();
        if rendered.is_empty() {
            continue;
        }
        if !out.is_empty() {
            out.push(' ');
        }
        out.push_str(&rendered);
    }
    // A clause's own text may carry an outer space, e.g. a value-less `KEY = `.
    let trimmed = out.trim();
    if trimmed.len() < out.len() {
        trimmed.to_string()
    } else {
        out
    }
}

/// Walks the value's field table in declaration order and returns the
/// clauses it produces. Errors from nested values propagate unchanged.
/// Clauses that render empty are dropped later, by [`sql`] and by the
/// separator logic inside [`Clause::List`], so nothing is rendered twice.
pub fn parse_struct<'a>(value: &'a dyn SqlStruct) -> Result<Vec<Clause<'a>>> {
    let mut clauses = Vec::new();
    for field in value.fields() {
        let clause = match field.value {
            FieldValue::Absent => continue,
            FieldValue::List(..) => parse_field_list(field)?,
            FieldValue::Struct(..) => parse_field_struct(field)?,
            _ => parse_field(field)?,
        };
        if let Some(clause) = clause {
            clauses.push(clause);
        }
    }
    Ok(clauses)
}

/// Pre-renders a clause group into a single fixed fragment, so that a nested
/// value occupies exactly one slot in an enclosing list.
fn prerendered<'a>(clauses: &[Clause]) -> Clause<'a> {
    Clause::Static(Cow::Owned(sql(clauses)))
}

fn parse_field_struct<'a>(field: AnnotatedField<'a>) -> Result<Option<Clause<'a>>> {
    let AnnotatedField {
        field: name,
        spec,
        value,
    } = field;
    let shape = value.shape();
    let FieldValue::Struct(inner) = value else {
        return Err(Error::InvalidInputShape { found: shape });
    };
    match spec.kind {
        // Identifiers are atomic references, never descended into; a nested
        // struct here means the options type broke the contract.
        FieldKind::Identifier => Err(Error::IdentifierCast { field: name }),
        FieldKind::List => {
            let mut clauses = Vec::new();
            if !spec.name.is_empty() {
                clauses.push(Clause::Static(Cow::Borrowed(spec.name)));
            }
            clauses.push(Clause::List {
                clauses: parse_struct(inner)?,
                separator: ",",
                parentheses: spec.parentheses,
            });
            Ok(Some(prerendered(&clauses)))
        }
        // A named keyword prefixes the nested clauses; an empty name (or any
        // other kind) flattens them into the current statement.
        _ => {
            let mut clauses = Vec::new();
            if spec.kind == FieldKind::Keyword && !spec.name.is_empty() {
                clauses.push(Clause::Keyword {
                    key: Cow::Borrowed(spec.name),
                    quotes: spec.quotes,
                });
            }
            clauses.extend(parse_struct(inner)?);
            Ok(Some(prerendered(&clauses)))
        }
    }
}

fn parse_field_list<'a>(field: AnnotatedField<'a>) -> Result<Option<Clause<'a>>> {
    let AnnotatedField { spec, value, .. } = field;
    let shape = value.shape();
    let FieldValue::List(items) = value else {
        return Err(Error::InvalidInputShape { found: shape });
    };
    let mut list_clauses = Vec::new();
    for item in items {
        match item {
            FieldValue::Absent => continue,
            FieldValue::Identifier(value) => list_clauses.push(Clause::Identifier {
                key: "",
                value,
                equals: spec.equals,
            }),
            // Each element is pre-rendered before the commas are added.
            FieldValue::Struct(inner) => list_clauses.push(prerendered(&parse_struct(inner)?)),
            FieldValue::List(..) => {
                return Err(Error::InvalidInputShape { found: "list" });
            }
            scalar => {
                let mut text = String::new();
                scalar.write_text(&mut text);
                list_clauses.push(Clause::Static(Cow::Owned(text)));
            }
        }
    }
    // "collection present but empty" renders nothing, same as "field absent"
    if list_clauses.is_empty() {
        return Ok(None);
    }
    let list = Clause::List {
        clauses: list_clauses,
        separator: ",",
        parentheses: spec.parentheses,
    };
    Ok(Some(match spec.kind {
        FieldKind::Parameter => Clause::Parameter {
            key: spec.name,
            value: Cow::Owned(list.render()),
            quotes: spec.quotes,
            equals: spec.equals,
            reverse: spec.reverse,
        },
        FieldKind::Keyword => {
            let keyword = Clause::Keyword {
                key: Cow::Borrowed(spec.name),
                quotes: spec.quotes,
            };
            prerendered(&[keyword, list])
        }
        _ => prerendered(&[list]),
    }))
}

fn parse_field<'a>(field: AnnotatedField<'a>) -> Result<Option<Clause<'a>>> {
    let AnnotatedField {
        field: name,
        spec,
        value,
    } = field;
    // static renders no matter what the value is
    if spec.kind == FieldKind::Static {
        return Ok(Some(Clause::Static(Cow::Borrowed(spec.name))));
    }
    Ok(match spec.kind {
        FieldKind::Keyword => match value {
            FieldValue::Bool(true) => Some(Clause::Keyword {
                key: Cow::Borrowed(spec.name),
                quotes: spec.quotes,
            }),
            FieldValue::Bool(false) => None,
            FieldValue::Text(text) => Some(Clause::Keyword {
                key: text,
                quotes: spec.quotes,
            }),
            other => {
                let mut text = String::new();
                other.write_text(&mut text);
                Some(Clause::Keyword {
                    key: Cow::Owned(text),
                    quotes: spec.quotes,
                })
            }
        },
        FieldKind::Identifier => match value {
            FieldValue::Identifier(id) if id.name().is_empty() => None,
            FieldValue::Identifier(id) => Some(Clause::Identifier {
                key: spec.name,
                value: id,
                equals: spec.equals,
            }),
            _ => return Err(Error::IdentifierCast { field: name }),
        },
        FieldKind::Parameter => {
            let text = match value {
                FieldValue::Text(text) => text,
                other => {
                    let mut text = String::new();
                    other.write_text(&mut text);
                    Cow::Owned(text)
                }
            };
            Some(Clause::Parameter {
                key: spec.name,
                value: text,
                quotes: spec.quotes,
                equals: spec.equals,
                reverse: spec.reverse,
            })
        }
        _ => None,
    })
}
