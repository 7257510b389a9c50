use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::Ident;

use crate::derive_routable::RouteModel;
use crate::path_display::{parse_segments, RouteSegment};

/* -------------------------------------------------------------------------------------------------
 * FromStr
 * -----------------------------------------------------------------------------------------------*/
/// Path recognition: candidates are tried in declaration order, first match
/// wins. A param segment whose field fails to parse lets later routes try.
pub(crate) fn generate_from_str_impl(enum_ident: &Ident, models: &[RouteModel]) -> TokenStream2 {
    let mut match_blocks = Vec::new();

    for model in models {
        let variant_ident = &model.ident;
        let segments = parse_segments(&model.path_str());
        let segment_count = segments.len();

        let mut static_checks = Vec::new();
        let mut param_idents = Vec::new();
        let mut param_indices = Vec::new();
        for (i, seg) in segments.iter().enumerate() {
            let idx = syn::Index::from(i);
            match seg {
                RouteSegment::Static(text) => {
                    static_checks.push(quote! { path_segments[#idx] == #text });
                }
                RouteSegment::Param(name) => {
                    param_idents.push(Ident::new(name, variant_ident.span()));
                    param_indices.push(idx);
                }
            }
        }

        let guard = quote! { path_segments.len() == #segment_count #( && #static_checks )* };

        let block = if param_idents.is_empty() {
            quote! {
                if #guard {
                    return Ok(#enum_ident::#variant_ident);
                }
            }
        } else {
            quote! {
                if #guard {
                    if let (#( Ok(#param_idents), )*) = (#( path_segments[#param_indices].parse(), )*) {
                        return Ok(#enum_ident::#variant_ident { #( #param_idents ),* });
                    }
                }
            }
        };
        match_blocks.push(block);
    }

    quote! {
        impl ::std::str::FromStr for #enum_ident {
            type Err = ::leptos_routemap::MatchError;

            fn from_str(input: &str) -> Result<Self, Self::Err> {
                let path = match input.find(|c| c == '?' || c == '#') {
                    Some(idx) => &input[..idx],
                    None => input,
                };
                let path_segments: Vec<&str> = path
                    .trim_start_matches('/')
                    .split('/')
                    .filter(|s| !s.is_empty())
                    .collect();

                #(#match_blocks)*

                Err(::leptos_routemap::MatchError::NoMatch(input.to_string()))
            }
        }
    }
}

/* -------------------------------------------------------------------------------------------------
 * From<AsRef<str>> with fallback
 * -----------------------------------------------------------------------------------------------*/
pub(crate) fn generate_from_asref_impl(
    enum_ident: &Ident,
    fallback_ident: &Ident,
) -> TokenStream2 {
    quote! {
        impl<T: AsRef<str>> From<T> for #enum_ident {
            fn from(value: T) -> Self {
                match <#enum_ident as ::std::str::FromStr>::from_str(value.as_ref()) {
                    Ok(route) => route,
                    Err(_) => #enum_ident::#fallback_ident,
                }
            }
        }
    }
}
