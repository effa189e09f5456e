//! Code generation for `#[derive(Listable)]`.

use std::collections::HashSet;

use proc_macro2::TokenStream;
use quote::{format_ident, quote};
use syn::{spanned::Spanned, Data, DeriveInput, Error, Fields, Result};

use super::attrs::{parse_list_attrs, FieldKind};

/// Expand `#[derive(Listable)]` on a struct with named fields.
///
/// Only fields carrying a kind in `#[list(...)]` are exposed. Each exposed
/// field gets a name constant, an entry in `Listable::FIELDS` and an arm in
/// `Listable::field_value`.
pub fn listable_derive_impl(input: DeriveInput) -> Result<TokenStream> {
    let ident = &input.ident;
    let named = match &input.data {
        Data::Struct(data) => match &data.fields {
            Fields::Named(named) => &named.named,
            _ => {
                return Err(Error::new(
                    input.span(),
                    "Listable needs a struct with named fields",
                ))
            }
        },
        _ => return Err(Error::new(input.span(), "Listable can only be derived for structs")),
    };

    let mut seen = HashSet::new();
    let mut names = Vec::new();
    let mut consts = Vec::new();
    let mut arms = Vec::new();

    for field in named {
        let member = field
            .ident
            .as_ref()
            .ok_or_else(|| Error::new(field.span(), "expected a named field"))?;
        let attr = parse_list_attrs(&field.attrs)?;
        let kind = match attr.kind {
            Some(kind) if !attr.skip => kind,
            _ => continue,
        };

        let name = attr.rename.unwrap_or_else(|| member.to_string());
        if !seen.insert(name.clone()) {
            return Err(Error::new(
                field.span(),
                format!("list field name '{}' is used twice", name),
            ));
        }

        let const_ident = format_ident!("{}", screaming_snake(&name));
        consts.push(quote! {
            #[doc = concat!("List field name `", #name, "`.")]
            pub const #const_ident: &'static str = #name;
        });

        let value = match kind {
            FieldKind::String => quote! {
                ::roomdesk_list::Value::String(&self.#member)
            },
            FieldKind::Number => quote! {
                ::roomdesk_list::Value::Number(::roomdesk_list::Number::from(self.#member))
            },
            FieldKind::Timestamp => quote! {
                ::roomdesk_list::Value::Timestamp(
                    ::roomdesk_list::ListTimestamp::list_timestamp(&self.#member)
                )
            },
            FieldKind::Enum => quote! {
                ::roomdesk_list::Value::Enum(
                    ::roomdesk_list::ListEnum::list_discriminant(&self.#member)
                )
            },
            FieldKind::Bool => quote! {
                ::roomdesk_list::Value::Bool(self.#member)
            },
        };
        arms.push(quote! { #name => #value, });
        names.push(name);
    }

    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    Ok(quote! {
        impl #impl_generics #ident #ty_generics #where_clause {
            #(#consts)*
        }

        impl #impl_generics ::roomdesk_list::Listable for #ident #ty_generics #where_clause {
            const FIELDS: &'static [&'static str] = &[#(#names),*];

            fn field_value(&self, field: &str) -> ::roomdesk_list::Value<'_> {
                match field {
                    #(#arms)*
                    _ => ::roomdesk_list::Value::None,
                }
            }
        }
    })
}

/// `roomNumber`, `room_number` and `room-number` all become `ROOM_NUMBER`.
fn screaming_snake(name: &str) -> String {
    let mut out = String::with_capacity(name.len() + 4);
    let mut after_lower = false;
    for c in name.chars() {
        match c {
            '_' | '-' => {
                out.push('_');
                after_lower = false;
            }
            c if c.is_uppercase() => {
                if after_lower {
                    out.push('_');
                }
                out.push(c);
                after_lower = false;
            }
            c => {
                out.push(c.to_ascii_uppercase());
                after_lower = c.is_lowercase() || c.is_ascii_digit();
            }
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn screaming_snake_names() {
        assert_eq!(screaming_snake("price"), "PRICE");
        assert_eq!(screaming_snake("room_number"), "ROOM_NUMBER");
        assert_eq!(screaming_snake("roomNumber"), "ROOM_NUMBER");
        assert_eq!(screaming_snake("check-in"), "CHECK_IN");
        assert_eq!(screaming_snake("floor2Rooms"), "FLOOR2_ROOMS");
    }

    #[test]
    fn rejects_tuple_structs_and_enums() {
        let tuple: DeriveInput = syn::parse_quote! { struct Room(u32); };
        assert!(listable_derive_impl(tuple).is_err());

        let en: DeriveInput = syn::parse_quote! { enum Kind { Single, Double } };
        assert!(listable_derive_impl(en).is_err());
    }

    #[test]
    fn rejects_duplicate_names() {
        let input: DeriveInput = syn::parse_quote! {
            struct Room {
                #[list(String)]
                number: String,
                #[list(String, rename = "number")]
                label: String,
            }
        };
        let err = listable_derive_impl(input).unwrap_err();
        assert!(err.to_string().contains("used twice"));
    }

    #[test]
    fn only_annotated_fields_are_listed() {
        let input: DeriveInput = syn::parse_quote! {
            struct Room {
                #[list(String)]
                room_number: String,
                #[list(skip)]
                secret: String,
                notes: String,
            }
        };
        let tokens = listable_derive_impl(input).unwrap().to_string();
        assert!(tokens.contains("ROOM_NUMBER"));
        assert!(!tokens.contains("SECRET"));
        assert!(!tokens.contains("NOTES"));
    }
}
