//! Accessor code generation
//!
//! This module generates the `TabularRecord` implementation: field descriptors
//! plus get/set-by-name over the parsed field metadata.

use proc_macro2::TokenStream;
use quote::{format_ident, quote};
use syn::{Generics, Ident};
use type_mapping::TypeTag;

use crate::parsing::{FieldInfo, FieldSpec, RecordInfo};

fn type_tag_tokens(tag: TypeTag) -> TokenStream {
    let variant = format_ident!("{}", tag.as_str());
    quote! { sheet_object::type_mapping::TypeTag::#variant }
}

/// Getter expression for one field, yielding a FieldValue
fn getter_tokens(field: &FieldSpec) -> TokenStream {
    let ident = &field.ident;

    if field.type_tag != TypeTag::Other {
        return quote! {
            sheet_object::type_mapping::ToFieldValue::to_field_value(&self.#ident)
        };
    }

    // Unregistered types are rendered best-effort through Debug or Display
    let render = if field.use_display {
        quote! { sheet_object::type_mapping::FieldValue::other_display }
    } else {
        quote! { sheet_object::type_mapping::FieldValue::other_debug }
    };

    if field.is_optional {
        quote! {
            match &self.#ident {
                Some(inner) => #render(inner),
                None => sheet_object::type_mapping::FieldValue::Null,
            }
        }
    } else {
        quote! { #render(&self.#ident) }
    }
}

/// Setter block for one field, consuming `value`
fn setter_tokens(field: &FieldSpec) -> TokenStream {
    let ident = &field.ident;

    if field.type_tag == TypeTag::Other {
        let tag = type_tag_tokens(TypeTag::Other);
        return quote! {
            let _ = value;
            Err(sheet_object::type_mapping::CoercionError::Unsupported { type_tag: #tag })
        };
    }

    quote! {
        self.#ident = sheet_object::type_mapping::FromFieldValue::from_field_value(value)?;
        Ok(())
    }
}

pub fn generate_tabular_record_impl(
    name: &Ident,
    generics: &Generics,
    record_info: &RecordInfo,
    field_info: &FieldInfo,
) -> TokenStream {
    let (impl_generics, ty_generics, where_clause) = generics.split_for_impl();
    let record_name = &record_info.name;

    let descriptors: Vec<_> = field_info
        .fields
        .iter()
        .map(|field| {
            let field_name = &field.name;
            let rust_type = &field.rust_type;
            let tag = type_tag_tokens(field.type_tag);
            quote! {
                sheet_object::FieldDescriptor::new(#field_name, #tag, #rust_type)
            }
        })
        .collect();

    let getter_arms: Vec<_> = field_info
        .fields
        .iter()
        .map(|field| {
            let field_name = &field.name;
            let getter = getter_tokens(field);
            quote! { #field_name => Some(#getter), }
        })
        .collect();

    let setter_arms: Vec<_> = field_info
        .fields
        .iter()
        .map(|field| {
            let field_name = &field.name;
            let setter = setter_tokens(field);
            quote! { #field_name => { #setter } }
        })
        .collect();

    quote! {
        impl #impl_generics sheet_object::TabularRecord for #name #ty_generics #where_clause {
            fn record_name() -> &'static str {
                #record_name
            }

            fn describe_fields() -> Vec<sheet_object::FieldDescriptor> {
                vec![#(#descriptors),*]
            }

            fn get_field(&self, name: &str) -> Option<sheet_object::type_mapping::FieldValue> {
                match name {
                    #(#getter_arms)*
                    _ => None,
                }
            }

            #[allow(unused_variables)]
            fn set_field(
                &mut self,
                name: &str,
                value: sheet_object::type_mapping::FieldValue,
            ) -> Result<(), sheet_object::type_mapping::CoercionError> {
                match name {
                    #(#setter_arms)*
                    _ => Err(sheet_object::type_mapping::CoercionError::UnknownField(
                        name.to_string(),
                    )),
                }
            }
        }
    }
}
