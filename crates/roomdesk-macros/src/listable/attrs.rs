//! Parsing of `#[list(...)]` field attributes.

use proc_macro2::Span;
use syn::{
    parse::{Parse, ParseStream},
    punctuated::Punctuated,
    spanned::Spanned,
    Attribute, Error, Expr, ExprLit, Lit, LitStr, Meta, Result, Token,
};

const KINDS: &str = "String, Number, Timestamp, Enum, Bool";

/// How a field is exposed to sorting and search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    String,
    Number,
    Timestamp,
    Enum,
    Bool,
}

impl FieldKind {
    /// Accepts the capitalized names and their lowercase spellings.
    /// `bool` and `enum` are keywords, so `ty = "..."` is the only way to
    /// write those two in lowercase.
    fn parse(name: &str, span: Span) -> Result<Self> {
        Ok(match name {
            "String" | "string" => FieldKind::String,
            "Number" | "number" => FieldKind::Number,
            "Timestamp" | "timestamp" => FieldKind::Timestamp,
            "Enum" | "enum" => FieldKind::Enum,
            "Bool" | "bool" | "boolean" => FieldKind::Bool,
            other => {
                return Err(Error::new(
                    span,
                    format!("unknown list field kind '{}', expected one of: {}", other, KINDS),
                ))
            }
        })
    }
}

/// Everything `#[list(...)]` can say about one field.
#[derive(Debug, Clone, Default)]
pub struct ListAttr {
    pub kind: Option<FieldKind>,
    pub rename: Option<String>,
    pub skip: bool,
}

fn string_value(expr: &Expr, key: &str) -> Result<LitStr> {
    match expr {
        Expr::Lit(ExprLit {
            lit: Lit::Str(s), ..
        }) => Ok(s.clone()),
        other => Err(Error::new(
            other.span(),
            format!("`{}` takes a string literal", key),
        )),
    }
}

impl Parse for ListAttr {
    fn parse(input: ParseStream) -> Result<Self> {
        let mut attr = ListAttr::default();
        let items: Punctuated<Meta, Token![,]> = Punctuated::parse_terminated(input)?;

        for item in items {
            match item {
                Meta::Path(path) if path.is_ident("skip") => attr.skip = true,
                Meta::Path(path) => {
                    let ident = path.get_ident().ok_or_else(|| {
                        Error::new(path.span(), format!("expected {} or skip", KINDS))
                    })?;
                    attr.kind = Some(FieldKind::parse(&ident.to_string(), ident.span())?);
                }
                Meta::NameValue(nv) if nv.path.is_ident("rename") => {
                    attr.rename = Some(string_value(&nv.value, "rename")?.value());
                }
                Meta::NameValue(nv) if nv.path.is_ident("ty") => {
                    let lit = string_value(&nv.value, "ty")?;
                    attr.kind = Some(FieldKind::parse(&lit.value(), lit.span())?);
                }
                other => {
                    return Err(Error::new(
                        other.span(),
                        "unsupported list attribute, expected a field kind, skip, rename = \"..\" or ty = \"..\"",
                    ))
                }
            }
        }

        if attr.skip && (attr.kind.is_some() || attr.rename.is_some()) {
            return Err(Error::new(
                input.span(),
                "`skip` cannot be combined with other list attributes",
            ));
        }
        Ok(attr)
    }
}

/// The `#[list(...)]` attribute of a field, or the default when absent.
pub fn parse_list_attrs(attrs: &[Attribute]) -> Result<ListAttr> {
    match attrs.iter().find(|a| a.path().is_ident("list")) {
        Some(attr) => attr.parse_args(),
        None => Ok(ListAttr::default()),
    }
}
