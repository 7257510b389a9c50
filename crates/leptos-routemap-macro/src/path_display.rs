use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::{spanned::Spanned, Error, Fields, Ident};

use crate::derive_routable::RouteModel;

/* -------------------------------------------------------------------------------------------------
 * Path segments
 * -----------------------------------------------------------------------------------------------*/
#[derive(Debug, Clone)]
pub(crate) enum RouteSegment {
    Static(String),
    Param(String),
}

pub(crate) fn parse_segments(route: &str) -> Vec<RouteSegment> {
    route
        .split('/')
        .filter(|s| !s.is_empty())
        .map(|seg| match seg.strip_prefix(':') {
            Some(name) => RouteSegment::Param(name.to_string()),
            None => RouteSegment::Static(seg.to_string()),
        })
        .collect()
}

/* -------------------------------------------------------------------------------------------------
 * Validation
 * -----------------------------------------------------------------------------------------------*/
/// Every `:param` needs a matching named field and every field must appear
/// in the pattern; tuple variants have no place to put params.
pub(crate) fn validate_path_and_fields(
    path_str: &str,
    fields: &Fields,
    variant_ident: &Ident,
) -> syn::Result<()> {
    let segments = parse_segments(path_str);
    let params: Vec<&String> = segments
        .iter()
        .filter_map(|seg| match seg {
            RouteSegment::Param(name) => Some(name),
            RouteSegment::Static(_) => None,
        })
        .collect();

    match fields {
        Fields::Unit => {
            if let Some(param) = params.first() {
                return Err(Error::new(
                    variant_ident.span(),
                    format!(
                        "Path param `:{}` has no matching field in `{}`.",
                        param, variant_ident
                    ),
                ));
            }
            Ok(())
        }
        Fields::Named(named) => {
            for param in &params {
                let known = named
                    .named
                    .iter()
                    .any(|f| f.ident.as_ref().is_some_and(|id| id == param.as_str()));
                if !known {
                    return Err(Error::new(
                        variant_ident.span(),
                        format!("Path param `:{}` not found in `{}`.", param, variant_ident),
                    ));
                }
            }
            for field in &named.named {
                let Some(field_ident) = field.ident.as_ref() else {
                    continue;
                };
                if !params.iter().any(|p| field_ident == p.as_str()) {
                    return Err(Error::new(
                        field.span(),
                        format!(
                            "Field `{}` does not appear in the path pattern of `{}`.",
                            field_ident, variant_ident
                        ),
                    ));
                }
            }
            Ok(())
        }
        Fields::Unnamed(unnamed) => Err(Error::new(
            unnamed.span(),
            format!(
                "Variant `{}` has tuple fields; use named fields for path params.",
                variant_ident
            ),
        )),
    }
}

/* -------------------------------------------------------------------------------------------------
 * Display
 * -----------------------------------------------------------------------------------------------*/
/// `Display` renders a value back into its path, embedding fields into any
/// `:param` segments.
pub(crate) fn generate_display_impl(
    enum_ident: &Ident,
    models: &[RouteModel],
) -> syn::Result<TokenStream2> {
    let mut arms = Vec::new();
    for model in models {
        let pattern = build_variant_pattern(enum_ident, &model.ident, &model.fields)?;
        let builder = generate_path_builder(&model.path_str());
        arms.push(quote! { #pattern => { #builder } });
    }

    Ok(quote! {
        impl ::std::fmt::Display for #enum_ident {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                let rendered = match self {
                    #( #arms, )*
                };
                f.write_str(&rendered)
            }
        }
    })
}

fn build_variant_pattern(
    enum_ident: &Ident,
    variant_ident: &Ident,
    fields: &Fields,
) -> syn::Result<TokenStream2> {
    match fields {
        Fields::Unit => Ok(quote!( #enum_ident::#variant_ident )),
        Fields::Named(named) => {
            let field_names: Vec<&Ident> =
                named.named.iter().filter_map(|f| f.ident.as_ref()).collect();
            Ok(quote!( #enum_ident::#variant_ident { #( #field_names ),* } ))
        }
        Fields::Unnamed(unnamed) => Err(Error::new(
            unnamed.span(),
            format!("Variant `{}` has tuple fields.", variant_ident),
        )),
    }
}

fn generate_path_builder(route: &str) -> TokenStream2 {
    let segment_stmts: Vec<_> = parse_segments(route)
        .into_iter()
        .map(|seg| match seg {
            RouteSegment::Static(txt) => quote! {
                path.push('/');
                path.push_str(#txt);
            },
            RouteSegment::Param(name) => {
                let field_ident = Ident::new(&name, proc_macro2::Span::call_site());
                quote! {
                    path.push('/');
                    path.push_str(&#field_ident.to_string());
                }
            }
        })
        .collect();

    quote! {
        let mut path = String::new();
        #(#segment_stmts)*

        if path.is_empty() {
            path.push('/');
        }
        path
    }
}
