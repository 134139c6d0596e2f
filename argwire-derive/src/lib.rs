//! # argwire Derive
//!
//! Procedural macros for argwire record types.
//!
//! This crate provides `#[derive(Serializable)]`, which implements the
//! record trait by encoding fields in declaration order and threading the
//! decode offset through them.

use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::{Data, DeriveInput, Fields, GenericParam, Index, LitStr, Path, parse_macro_input};

/// Derives `Serializable` for a struct whose fields are all `Serializable`.
///
/// Named, tuple and unit structs are supported. Type parameters get a
/// `Serializable` bound. The generated code refers to `::argwire` unless
/// overridden with `#[argwire(crate = "...")]`.
///
/// # Example
/// ```ignore
/// #[derive(Debug, Default, PartialEq, Serializable)]
/// struct Quote {
///     instrument_id: u32,
///     bid: i64,
///     ask: i64,
///     levels: Vec<u16>,
/// }
/// ```
#[proc_macro_derive(Serializable, attributes(argwire))]
pub fn derive_serializable(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    expand(&input)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}

fn crate_path(input: &DeriveInput) -> syn::Result<Path> {
    let mut path: Path = syn::parse_quote!(::argwire);
    for attr in &input.attrs {
        if !attr.path().is_ident("argwire") {
            continue;
        }
        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("crate") {
                let lit: LitStr = meta.value()?.parse()?;
                path = lit.parse()?;
                Ok(())
            } else {
                Err(meta.error("unsupported argwire attribute, expected `crate`"))
            }
        })?;
    }
    Ok(path)
}

fn expand(input: &DeriveInput) -> syn::Result<TokenStream2> {
    let krate = crate_path(input)?;
    let name = &input.ident;

    let members: Vec<TokenStream2> = match &input.data {
        Data::Struct(data) => match &data.fields {
            Fields::Named(fields) => fields
                .named
                .iter()
                .filter_map(|f| f.ident.as_ref())
                .map(|ident| quote!(#ident))
                .collect(),
            Fields::Unnamed(fields) => (0..fields.unnamed.len())
                .map(|i| {
                    let index = Index::from(i);
                    quote!(#index)
                })
                .collect(),
            Fields::Unit => Vec::new(),
        },
        Data::Enum(data) => {
            return Err(syn::Error::new(
                data.enum_token.span,
                "Serializable can only be derived for structs",
            ));
        }
        Data::Union(data) => {
            return Err(syn::Error::new(
                data.union_token.span,
                "Serializable can only be derived for structs",
            ));
        }
    };

    let mut generics = input.generics.clone();
    for param in &mut generics.params {
        if let GenericParam::Type(ty) = param {
            ty.bounds.push(syn::parse_quote!(#krate::Serializable));
        }
    }
    let (impl_generics, ty_generics, where_clause) = generics.split_for_impl();

    Ok(quote! {
        impl #impl_generics #krate::Serializable for #name #ty_generics #where_clause {
            #[allow(unused_variables)]
            fn serialize_into(&self, out: &mut ::std::vec::Vec<u8>) -> #krate::Result<()> {
                #( #krate::Serializable::serialize_into(&self.#members, out)?; )*
                ::core::result::Result::Ok(())
            }

            #[allow(unused_variables)]
            fn deserialize(&mut self, data: &[u8], offset: usize) -> #krate::Result<usize> {
                #( let offset = #krate::Serializable::deserialize(&mut self.#members, data, offset)?; )*
                ::core::result::Result::Ok(offset)
            }
        }
    })
}
