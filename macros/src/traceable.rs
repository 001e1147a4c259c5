use crate::variant::{LevelledEnum, LevelledVariant};
use proc_macro::TokenStream;
use quote::quote;
use syn::parse_macro_input;

// Variants keep their source error as a rendered `err: String` unless marked
// `#[no_source]`, so every generated enum stays `Clone`.
fn carries_source(variant: &LevelledVariant) -> bool {
    !variant.no_source
}

pub fn traceable_impl(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as LevelledEnum);

    let enum_name = &input.name;

    let variants = input.variants.iter().map(|variant| {
        let docs = &variant.docs;
        let message = &variant.message;
        let name = &variant.name;
        let mut fields: Vec<_> = variant
            .fields
            .iter()
            .map(|(field, ty)| quote! { #field: #ty })
            .collect();
        if carries_source(variant) {
            fields.push(quote! { err: String });
        }

        if fields.is_empty() {
            quote! {
                #(#docs)*
                #[error(#message)]
                #name
            }
        } else {
            quote! {
                #(#docs)*
                #[error(#message)]
                #name { #(#fields,)* }
            }
        }
    });

    let level_fn =
        input.level_fn(|variant| carries_source(variant) || !variant.fields.is_empty());

    let constructors = input
        .variants
        .iter()
        .filter(|variant| carries_source(variant) || !variant.fields.is_empty())
        .map(|variant| {
            let name = &variant.name;
            let constructor = variant.constructor_name();

            let mut params: Vec<_> = variant
                .fields
                .iter()
                .map(|(field, ty)| quote! { #field: impl Into<#ty> })
                .collect();
            let mut assignments: Vec<_> = variant
                .field_names()
                .map(|field| quote! { #field: #field.into() })
                .collect();

            if carries_source(variant) {
                params.push(quote! { err: impl std::fmt::Display });
                assignments.push(quote! { err: err.to_string() });
            }

            quote! {
                #[allow(dead_code)]
                pub fn #constructor(#(#params),*) -> Self {
                    Self::#name {
                        #(#assignments,)*
                    }
                }
            }
        });

    quote! {
        #[allow(dead_code)]
        #[derive(Debug, Clone, thiserror::Error)]
        pub enum #enum_name {
            #(#variants,)*
        }

        impl #enum_name {
            #level_fn

            #(#constructors)*
        }
    }
    .into()
}
