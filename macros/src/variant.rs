use proc_macro2::{Span, TokenStream};
use quote::quote;
use syn::parse::{Parse, ParseStream};
use syn::{braced, Attribute, Error, Expr, Ident, LitStr, Result, Token, Type};

/// An enum whose variants each carry a display message and a `tracing::Level`.
pub struct LevelledEnum {
    pub name: Ident,
    pub variants: Vec<LevelledVariant>,
}

pub struct LevelledVariant {
    pub docs: Vec<Attribute>,
    pub message: LitStr,
    pub no_source: bool,
    pub name: Ident,
    pub fields: Vec<(Ident, Type)>,
    pub level: Expr,
}

impl Parse for LevelledEnum {
    fn parse(input: ParseStream) -> Result<Self> {
        let name = input.parse::<Ident>()?;

        let content;
        braced!(content in input);

        let mut variants = Vec::new();
        while !content.is_empty() {
            variants.push(content.parse::<LevelledVariant>()?);
            if content.peek(Token![,]) {
                content.parse::<Token![,]>()?;
            }
        }

        Ok(Self { name, variants })
    }
}

impl Parse for LevelledVariant {
    fn parse(input: ParseStream) -> Result<Self> {
        let mut docs = Vec::new();
        let mut message = None;
        let mut no_source = false;

        for attribute in input.call(Attribute::parse_outer)? {
            if attribute.path().is_ident("error") {
                message = Some(attribute.parse_args::<LitStr>()?);
            } else if attribute.path().is_ident("no_source") {
                no_source = true;
            } else if attribute.path().is_ident("doc") {
                docs.push(attribute);
            } else {
                return Err(Error::new_spanned(attribute, "Unsupported attribute"));
            }
        }

        let name = input.parse::<Ident>()?;
        let message =
            message.ok_or_else(|| Error::new(name.span(), "Missing #[error(...)] attribute"))?;

        let mut fields = Vec::new();
        if input.peek(syn::token::Brace) {
            let content;
            braced!(content in input);
            while !content.is_empty() {
                let field_name = content.parse::<Ident>()?;
                content.parse::<Token![:]>()?;
                let field_type = content.parse::<Type>()?;
                fields.push((field_name, field_type));
                if content.peek(Token![,]) {
                    content.parse::<Token![,]>()?;
                }
            }
        }

        input.parse::<Token![=>]>()?;
        let level = input.parse::<Expr>()?;

        Ok(Self {
            docs,
            message,
            no_source,
            name,
            fields,
            level,
        })
    }
}

impl LevelledVariant {
    pub fn field_names(&self) -> impl Iterator<Item = &Ident> {
        self.fields.iter().map(|(name, _)| name)
    }

    /// `{ .. }` for struct variants, nothing for unit variants.
    pub fn wildcard_pattern(&self, has_fields: bool) -> TokenStream {
        if has_fields {
            quote! { { .. } }
        } else {
            quote! {}
        }
    }

    /// `ReadFileFailed` -> `read_file_failed`
    pub fn constructor_name(&self) -> Ident {
        let mut snake = String::new();
        for (index, character) in self.name.to_string().chars().enumerate() {
            if character.is_uppercase() {
                if index != 0 {
                    snake.push('_');
                }
                snake.extend(character.to_lowercase());
            } else {
                snake.push(character);
            }
        }
        Ident::new(&snake, Span::call_site())
    }
}

impl LevelledEnum {
    /// `pub fn level(&self) -> tracing::Level` over every variant.
    pub fn level_fn(&self, has_fields: impl Fn(&LevelledVariant) -> bool) -> TokenStream {
        let arms = self.variants.iter().map(|variant| {
            let name = &variant.name;
            let level = &variant.level;
            let pattern = variant.wildcard_pattern(has_fields(variant));
            quote! { Self::#name #pattern => #level }
        });

        quote! {
            #[allow(dead_code)]
            pub fn level(&self) -> tracing::Level {
                match self {
                    #(#arms,)*
                }
            }
        }
    }
}
