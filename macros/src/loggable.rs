use crate::variant::LevelledEnum;
use proc_macro::TokenStream;
use quote::quote;
use syn::parse_macro_input;

pub fn loggable_impl(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as LevelledEnum);

    let enum_name = &input.name;

    let variants = input.variants.iter().map(|variant| {
        let docs = &variant.docs;
        let message = &variant.message;
        let name = &variant.name;
        let fields = variant.fields.iter().map(|(field, ty)| quote! { #field: #ty });

        if variant.fields.is_empty() {
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

    let level_fn = input.level_fn(|variant| !variant.fields.is_empty());

    quote! {
        #[allow(dead_code)]
        #[derive(Debug, Clone, thiserror::Error)]
        pub enum #enum_name {
            #(#variants,)*
        }

        impl #enum_name {
            #level_fn
        }
    }
    .into()
}
