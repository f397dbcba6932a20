use proc_macro::TokenStream;
use syn::{DeriveInput, parse_macro_input};

mod from_tokens;

#[proc_macro_derive(FromTokens, attributes(token))]
pub fn derive_from_tokens(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    match from_tokens::expand_from_tokens(&input) {
        Ok(tokens) => tokens,
        Err(err) => err.to_compile_error().into(),
    }
}
