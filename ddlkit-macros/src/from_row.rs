use proc_macro2::TokenStream;
use quote::quote;
use syn::{Field, ItemStruct, LitStr, parse::ParseBuffer};

fn column_name(field: &Field) -> String {
    let ident = field
        .ident
        .as_ref()
        .expect("Field is expected to have a name");
    let mut name = ident.to_string();
    if name.starts_with('_') {
        name.remove(0);
    }
    for attr in &field.attrs {
        let meta = &attr.meta;
        if meta.path().is_ident("col") {
            let Ok(list) = meta.require_list() else {
                panic!("Error while parsing `col`, use it like: `#[col(name = \"{}\")]`", name);
            };
            let _ = list.parse_nested_meta(|arg| {
                if arg.path.is_ident("name") {
                    let Ok(v) = arg.value().and_then(ParseBuffer::parse::<LitStr>) else {
                        panic!("Error while parsing `name`, use it like: `#[col(name = \"my_column\")]`");
                    };
                    name = v.value();
                } else {
                    panic!(
                        "Unknown attribute `{}` inside col macro",
                        arg.path.get_ident().map(ToString::to_string).unwrap_or_default()
                    );
                }
                Ok(())
            });
        }
    }
    name
}

pub(crate) fn from_row_impl(item: &ItemStruct) -> TokenStream {
    let name = &item.ident;
    let bindings = item.fields.iter().map(|field| {
        let ident = field.ident.as_ref().expect("Field is expected to have a name");
        let column = column_name(field);
        quote! {
            #ident: ::ddlkit::ColumnDecode::decode_column(#column, ::ddlkit::Row::get(row, #column))?
        }
    });
    quote! {
        impl ::ddlkit::FromRow for #name {
            fn from_row(row: &::ddlkit::Row) -> ::ddlkit::Result<Self> {
                Ok(Self {
                    #(#bindings,)*
                })
            }
        }
    }
}
