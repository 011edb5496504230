//! Procedural macros for generating tabular record accessors
//!
//! This crate provides the `#[record]` macro and `Tabular` derive, which generate
//! field enumeration plus get/set-by-name for struct types so that records can be
//! written to and read from tabular documents without runtime reflection.

use proc_macro::TokenStream;
use syn::{parse_macro_input, DeriveInput};

mod accessor_generation;
mod parsing;
mod record_macro;

use accessor_generation::generate_tabular_record_impl;
use parsing::{parse_field_attributes, parse_record_attributes};
use record_macro::record_attribute;

/// Derive macro for the TabularRecord trait
///
/// Note: It's recommended to use the `#[record]` attribute macro instead,
/// which automatically includes this derive along with `Default`.
///
/// Manual usage:
/// ```rust,ignore
/// #[derive(Debug, Clone, Default, Tabular)]
/// #[tabular(name = "Brands")]
/// pub struct Brand {
///     pub id: i64,
///     pub name: String,
///
///     #[field(skip)]
///     pub cached_rank: u32,
///
///     #[field(display)]
///     pub extra: serde_json::Value,
/// }
/// ```
#[proc_macro_derive(Tabular, attributes(tabular, field))]
pub fn derive_tabular(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    let name = &input.ident;

    // Parse record attributes - handle errors properly
    let record_info = match parse_record_attributes(&input.attrs, name) {
        Ok(info) => info,
        Err(e) => return e.to_compile_error().into(),
    };

    // Parse field attributes - handle errors properly
    let field_info = match parse_field_attributes(&input.data) {
        Ok(info) => info,
        Err(e) => return e.to_compile_error().into(),
    };

    let expanded =
        generate_tabular_record_impl(name, &input.generics, &record_info, &field_info);

    TokenStream::from(expanded)
}

/// Convenience attribute macro that adds all necessary derives for a tabular record
///
/// Usage:
/// ```rust,ignore
/// use sheethaus::prelude::*;
///
/// #[record]
/// #[tabular(name = "Goods")]
/// pub struct Goods {
///     pub goods_name: String,
///     pub price: f64,
///     pub created_at: NaiveDateTime,
/// }
/// ```
#[proc_macro_attribute]
pub fn record(_attr: TokenStream, item: TokenStream) -> TokenStream {
    record_attribute(_attr, item)
}
