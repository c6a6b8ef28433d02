use proc_macro::TokenStream;
use quote::quote;
use syn::{Data, DeriveInput, LitStr};

pub fn derive_model(input: TokenStream) -> TokenStream {
    let input = syn::parse_macro_input!(input as DeriveInput);
    let name = &input.ident;

    if !matches!(input.data, Data::Struct(_)) {
        return syn::Error::new_spanned(name, "Model derive: only structs can be stored as models")
            .to_compile_error()
            .into();
    }

    let collection = match extract_collection(&input) {
        Ok(collection) => collection,
        Err(err) => return err.to_compile_error().into(),
    };

    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    let expanded = quote! {
        impl #impl_generics ::mediahub::Model for #name #ty_generics #where_clause {
            const COLLECTION: &'static str = #collection;
        }
    };

    TokenStream::from(expanded)
}

/// Reads `#[model(collection = "...")]`, falling back to the snake_case
/// plural of the struct name.
fn extract_collection(input: &DeriveInput) -> syn::Result<String> {
    for attr in &input.attrs {
        if !attr.path().is_ident("model") {
            continue;
        }

        let mut collection = None;
        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("collection") {
                let value: LitStr = meta.value()?.parse()?;
                collection = Some(value.value());
                Ok(())
            } else {
                Err(meta.error("unsupported model attribute, expected `collection`"))
            }
        })?;

        if let Some(c) = collection {
            if c.is_empty() {
                return Err(syn::Error::new_spanned(attr, "model collection must not be empty"));
            }
            return Ok(c);
        }
    }

    let name = input.ident.to_string();
    Ok(format!("{}s", to_snake_case(&name)))
}

fn to_snake_case(s: &str) -> String {
    let mut result = String::new();
    for (i, ch) in s.chars().enumerate() {
        if ch.is_uppercase() {
            if i > 0 {
                result.push('_');
            }
            result.extend(ch.to_lowercase());
        } else {
            result.push(ch);
        }
    }
    result
}
