use proc_macro::TokenStream;
use quote::quote;
use syn::{parse_macro_input, Data, DeriveInput, Error};

/// Convenience attribute macro that adds all necessary derives for a tabular record
///
/// Usage:
/// ```rust,ignore
/// #[record]
/// pub struct Brand {
///     pub name: String,
///     pub first_char: String,
/// }
/// ```
pub fn record_attribute(_attr: TokenStream, item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as DeriveInput);

    let name = &input.ident;
    let attrs = &input.attrs;
    let vis = &input.vis;
    let generics = &input.generics;
    let where_clause = &generics.where_clause;

    // Extract fields from the struct
    let fields = match &input.data {
        Data::Struct(data) => &data.fields,
        _ => {
            return Error::new_spanned(name, "record can only be used on structs")
                .to_compile_error()
                .into()
        }
    };

    // Tuple and unit structs are rejected by the derive itself with a proper span
    let body = match fields {
        syn::Fields::Named(_) => quote! { #where_clause #fields },
        _ => quote! { #fields #where_clause ; },
    };

    // Add all the necessary derives to the struct
    let expanded = quote! {
        #[derive(Debug, Clone, Default, PartialEq, sheet_object::Tabular)]
        #(#attrs)*
        #vis struct #name #generics #body
    };

    TokenStream::from(expanded)
}
