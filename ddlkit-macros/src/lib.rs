mod decode_field;
mod from_row;

use decode_field::decode_field;
use from_row::from_row_impl;
use proc_macro::TokenStream;
use proc_macro2::Span;
use quote::quote;
use syn::{Ident, ItemStruct, parse_macro_input};

/// Implements `SqlStruct` (and `AsFieldValue`, so annotated types nest) from
/// per-field `#[ddl(...)]` annotations.
///
/// ```ignore
/// #[derive(SqlStruct)]
/// struct GrantPrivilegeToShareOptions {
///     #[ddl(static, name = "GRANT")]
///     grant: bool,
///     #[ddl(keyword)]
///     object_privilege: String,
///     #[ddl(identifier, name = "TO SHARE")]
///     to: Identifier,
/// }
/// ```
#[proc_macro_derive(SqlStruct, attributes(ddl))]
pub fn derive_sql_struct(input: TokenStream) -> TokenStream {
    let item: ItemStruct = parse_macro_input!(input as ItemStruct);
    let name = &item.ident;
    let entries = item
        .fields
        .iter()
        .filter_map(decode_field)
        .map(|metadata| {
            let ident = &metadata.ident;
            let field = ident.to_string();
            let sql_name = &metadata.name;
            let kind = Ident::new(metadata.kind.variant(), Span::call_site());
            let quotes = Ident::new(metadata.quotes, Span::call_site());
            let parentheses = Ident::new(metadata.parentheses, Span::call_site());
            let equals = Ident::new(metadata.equals, Span::call_site());
            let reverse = Ident::new(metadata.reverse, Span::call_site());
            quote! {
                ::ddlkit::AnnotatedField {
                    field: #field,
                    spec: ::ddlkit::FieldSpec {
                        kind: ::ddlkit::FieldKind::#kind,
                        name: #sql_name,
                        quotes: ::ddlkit::QuoteModifier::#quotes,
                        parentheses: ::ddlkit::ParenModifier::#parentheses,
                        equals: ::ddlkit::EqualsModifier::#equals,
                        reverse: ::ddlkit::ReverseModifier::#reverse,
                    },
                    value: ::ddlkit::AsFieldValue::as_field_value(&self.#ident),
                }
            }
        })
        .collect::<Vec<_>>();
    quote! {
        impl ::ddlkit::SqlStruct for #name {
            fn fields(&self) -> ::std::vec::Vec<::ddlkit::AnnotatedField<'_>> {
                ::std::vec![#(#entries),*]
            }
        }
        impl ::ddlkit::AsFieldValue for #name {
            fn as_field_value(&self) -> ::ddlkit::FieldValue<'_> {
                ::ddlkit::FieldValue::Struct(self)
            }
        }
        impl ::ddlkit::ValueSet for #name {
            fn is_set(&self) -> bool {
                true
            }
        }
    }
    .into()
}

/// Implements `FromRow` by binding each field to the result column named by
/// `#[col(name = "...")]`, defaulting to the field's own name (with one
/// leading `_` stripped).
#[proc_macro_derive(FromRow, attributes(col))]
pub fn derive_from_row(input: TokenStream) -> TokenStream {
    let item: ItemStruct = parse_macro_input!(input as ItemStruct);
    from_row_impl(&item).into()
}
