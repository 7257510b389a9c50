use proc_macro2::TokenStream as TokenStream2;
use prettyplease::unparse;
use syn::{parse2, File, Ident};

/// Builds the hidden wrapper-component name for a deferred route, of the
/// form `"__DEFERRED_{Enum}_{Variant}"`.
pub(crate) fn build_deferred_view_name(enum_ident: &Ident, variant_ident: &Ident) -> Ident {
    let full_name = format!("__DEFERRED_{}_{}", enum_ident, variant_ident);
    Ident::new(&full_name, variant_ident.span())
}

/// Default symbolic route name for a variant: its snake_case rendering.
pub(crate) fn to_snake_case(s: &str) -> String {
    let mut result = String::new();
    let mut prev_upper = false;

    for (i, c) in s.chars().enumerate() {
        if c.is_uppercase() {
            if i > 0 && !prev_upper {
                result.push('_');
            }
            for lowered in c.to_lowercase() {
                result.push(lowered);
            }
            prev_upper = true;
        } else {
            result.push(c);
            prev_upper = false;
        }
    }

    result
}

/// Attempts to format the provided token stream as well-formed Rust code.
pub(crate) fn format_generated_code(expanded: TokenStream2) -> TokenStream2 {
    match parse2::<File>(expanded.clone()) {
        Ok(file) => {
            let formatted_code = unparse(&file);
            formatted_code.parse().unwrap_or(expanded)
        }
        Err(_) => expanded,
    }
}
