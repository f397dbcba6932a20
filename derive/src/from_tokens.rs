use std::collections::HashSet;

use proc_macro::TokenStream;
use quote::quote;
use syn::{
    Data, DeriveInput, Error, Field, Fields, Ident, Lifetime, LitInt, Result,
    parse::{Parse, ParseStream},
    parse_quote,
};

pub(crate) fn expand_from_tokens(input: &DeriveInput) -> Result<TokenStream> {
    let Data::Struct(data) = &input.data else {
        Err(Error::new_spanned(
            input,
            "`FromTokens` may only be derived on structs.",
        ))?
    };

    let Fields::Named(fields) = &data.fields else {
        Err(Error::new_spanned(
            input,
            "`FromTokens` may only be derived on structs with named fields.",
        ))?
    };

    let fields = fields
        .named
        .iter()
        .map(FieldMetadata::parse)
        .map(Result::transpose)
        .flatten() // Skip fields without an attribute.
        .collect::<Result<Vec<_>>>()?;

    let mut indices = HashSet::new();

    for field in &fields {
        if !indices.insert(field.index.base10_parse::<usize>()?) {
            Err(Error::new_spanned(
                &field.index,
                "Token indices must be unique.",
            ))?
        }
    }

    let cases = fields.iter().map(|FieldMetadata { name, index }| {
        quote! {
            #index => ::core::option::Option::Some(::strsepf::IntoSlot::as_slot(&mut self.#name)),
        }
    });

    // Tokens borrow the buffer for the first lifetime of the struct, or for
    // any lifetime if it has none.
    let mut generics = input.generics.clone();
    let buffer: Lifetime = match input.generics.lifetimes().next() {
        Some(param) => param.lifetime.clone(),
        None => {
            let buffer: Lifetime = parse_quote!('__strsepf_buffer);
            generics.params.insert(0, parse_quote!(#buffer));
            buffer
        }
    };

    let (impl_generics, _, where_clause) = generics.split_for_impl();
    let (_, ty_generics, _) = input.generics.split_for_impl();

    let name = &input.ident;

    let expanded = quote! {
        impl #impl_generics ::strsepf::FromTokens<#buffer> for #name #ty_generics #where_clause {
            fn slot(&mut self, index: usize) -> ::core::option::Option<::strsepf::Slot<'_, #buffer>> {
                match index {
                    #(#cases)*
                    _ => ::core::option::Option::None,
                }
            }
        }
    };

    Ok(expanded.into())
}

#[derive(Debug)]
struct FieldMetadata {
    name: Ident,
    index: LitInt,
}

impl FieldMetadata {
    fn parse(field: &Field) -> Result<Option<Self>> {
        let Some(name) = field.ident.clone() else {
            Err(Error::new_spanned(field, "Field must be named."))?
        };

        let Some(attr) = field.attrs.iter().find(|a| a.path().is_ident("token")) else {
            return Ok(None);
        };

        let TokenAttribute { index } = attr.meta.require_list()?.parse_args()?;

        Ok(Some(Self { name, index }))
    }
}

#[derive(Debug)]
struct TokenAttribute {
    index: LitInt,
}

impl Parse for TokenAttribute {
    fn parse(input: ParseStream) -> Result<Self> {
        let index = input.parse::<LitInt>()?;
        Ok(Self { index })
    }
}
