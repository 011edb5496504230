//! Parsing utilities for record and field attributes
//!
//! This module handles the parsing of `#[tabular]` and `#[field]` attributes
//! and resolves each field's type tag at expansion time.

use quote::quote;
use syn::{
    ext::IdentExt, parse::Parse, parse::ParseStream, Attribute, Data, Error, Fields, Ident,
    Meta, Result, Token,
};
use type_mapping::{is_optional_type, rust_type_to_type_tag, TypeTag};

#[derive(Debug)]
struct FieldOptions {
    options: Vec<Ident>,
}

impl Parse for FieldOptions {
    fn parse(input: ParseStream) -> Result<Self> {
        let mut options = Vec::new();

        while !input.is_empty() {
            let option: Ident = input.parse()?;
            options.push(option);

            if input.peek(Token![,]) {
                let _: Token![,] = input.parse()?;
            }
        }

        Ok(FieldOptions { options })
    }
}

#[derive(Debug)]
pub struct RecordInfo {
    pub name: String,
}

#[derive(Debug)]
pub struct FieldSpec {
    pub ident: Ident,
    pub name: String,
    pub rust_type: String,
    pub type_tag: TypeTag,
    pub is_optional: bool,
    pub use_display: bool,
}

#[derive(Debug)]
pub struct FieldInfo {
    pub fields: Vec<FieldSpec>, // declaration order
}

pub fn parse_record_attributes(attrs: &[Attribute], ident: &Ident) -> Result<RecordInfo> {
    let mut record_name = None;

    for attr in attrs {
        if attr.path().is_ident("tabular") {
            if let Meta::List(meta_list) = &attr.meta {
                // Parse nested tokens manually: tabular(name = "...")
                let mut tokens = meta_list.tokens.clone().into_iter().peekable();

                while let Some(token) = tokens.next() {
                    if let proc_macro2::TokenTree::Ident(key) = token {
                        let key_str = key.to_string();

                        // Expect '=' after key
                        if let Some(proc_macro2::TokenTree::Punct(punct)) = tokens.peek() {
                            if punct.as_char() == '=' {
                                tokens.next(); // consume '='

                                if let Some(proc_macro2::TokenTree::Literal(lit)) = tokens.next() {
                                    let value = lit.to_string().trim_matches('"').to_string();

                                    match key_str.as_str() {
                                        "name" => record_name = Some(value),
                                        _ => {
                                            return Err(Error::new(
                                                key.span(),
                                                format!("unknown tabular option '{}'", key_str),
                                            ))
                                        }
                                    }
                                }
                            }
                        }

                        // Skip comma if present
                        if let Some(proc_macro2::TokenTree::Punct(punct)) = tokens.peek() {
                            if punct.as_char() == ',' {
                                tokens.next();
                            }
                        }
                    }
                }
            }
        }
    }

    let name = record_name.unwrap_or_else(|| ident.unraw().to_string());
    if name.is_empty() {
        return Err(Error::new(ident.span(), "tabular name cannot be empty"));
    }

    Ok(RecordInfo { name })
}

pub fn parse_field_attributes(data: &Data) -> Result<FieldInfo> {
    if let Data::Struct(data_struct) = data {
        if let Fields::Named(fields_named) = &data_struct.fields {
            let mut fields = Vec::new();

            for field in &fields_named.named {
                let field_ident = field
                    .ident
                    .as_ref()
                    .ok_or_else(|| Error::new_spanned(field, "Field must have a name"))?;

                let options = parse_field_options(&field.attrs)?;
                if options.iter().any(|o| o == "skip") {
                    continue;
                }

                let ty = &field.ty;
                let type_string = quote!(#ty).to_string();
                // Normalize type string by removing all whitespace for consistent matching
                let normalized_type_string = type_string.replace(' ', "");

                fields.push(FieldSpec {
                    ident: field_ident.clone(),
                    name: field_ident.unraw().to_string(),
                    type_tag: rust_type_to_type_tag(&normalized_type_string),
                    is_optional: is_optional_type(&normalized_type_string),
                    rust_type: normalized_type_string,
                    use_display: options.iter().any(|o| o == "display"),
                });
            }

            return Ok(FieldInfo { fields });
        }
    }

    Err(Error::new(
        proc_macro2::Span::call_site(),
        "Tabular can only be derived for structs with named fields",
    ))
}

/// Collect `#[field(...)]` options, rejecting unknown ones
fn parse_field_options(attrs: &[Attribute]) -> Result<Vec<String>> {
    let mut options = Vec::new();

    for attr in attrs {
        if !attr.path().is_ident("field") {
            continue;
        }

        match &attr.meta {
            Meta::List(meta_list) => {
                let parsed = meta_list.parse_args::<FieldOptions>()?;
                for ident in parsed.options {
                    match ident.to_string().as_str() {
                        "skip" | "display" => options.push(ident.to_string()),
                        other => {
                            return Err(Error::new(
                                ident.span(),
                                format!("unknown field option '{}': expected skip or display", other),
                            ))
                        }
                    }
                }
            }
            _ => {
                return Err(Error::new_spanned(
                    attr,
                    "field attribute expects a list, e.g. #[field(skip)]",
                ))
            }
        }
    }

    Ok(options)
}
