use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::{
    parse_macro_input, spanned::Spanned,
    Data::{Enum, Struct, Union},
    DeriveInput, Fields, Ident, LitStr,
};
use darling::{FromDeriveInput, FromVariant};

/* -------------------------------------------------------------------------------------------------
 * `#[routes(...)]` configuration
 * -----------------------------------------------------------------------------------------------*/
#[derive(FromDeriveInput, std::fmt::Debug)]
#[darling(attributes(routes), supports(enum_any))]
pub(crate) struct RoutableConfiguration {
    ident: Ident,

    #[darling(default)]
    pub(crate) transition: bool,

    #[darling(default)]
    pub(crate) view_prefix: String,

    #[darling(default = "default_view_suffix")]
    pub(crate) view_suffix: String,
}

fn default_view_suffix() -> String {
    "View".to_string()
}

/* -------------------------------------------------------------------------------------------------
 * `#[route(...)]` variant attribute
 * -----------------------------------------------------------------------------------------------*/
#[derive(std::fmt::Debug, FromVariant)]
#[darling(attributes(route), forward_attrs)]
struct RouteVariant {
    ident: Ident,
    attrs: Vec<syn::Attribute>,
    #[allow(unused)]
    fields: darling::ast::Fields<syn::Type>,

    // Arguments
    path: LitStr,
    #[darling(default)]
    name: Option<LitStr>,
    #[darling(default)]
    lazy: Option<LitStr>,
}

/// One parsed variant, shared by the table, matcher and `Display`
/// generators.
pub(crate) struct RouteModel {
    pub(crate) ident: Ident,
    pub(crate) fields: Fields,
    pub(crate) path: LitStr,
    pub(crate) name: String,
    pub(crate) lazy: Option<syn::Path>,
    pub(crate) is_fallback: bool,
}

impl RouteModel {
    pub(crate) fn path_str(&self) -> String {
        self.path.value()
    }
}

fn parse_variant(variant: &syn::Variant) -> darling::Result<RouteModel> {
    let parsed = RouteVariant::from_variant(variant)?;

    let path_value = parsed.path.value();
    if !path_value.starts_with('/') {
        return Err(darling::Error::custom(format!(
            "Route path `{}` must begin with `/`.",
            path_value
        ))
        .with_span(&parsed.path));
    }

    let name = match &parsed.name {
        Some(lit) => lit.value(),
        None => crate::utils::to_snake_case(&parsed.ident.to_string()),
    };

    let lazy = match &parsed.lazy {
        Some(lit) => {
            if !matches!(variant.fields, Fields::Unit) {
                return Err(darling::Error::custom(format!(
                    "Deferred route `{}` cannot carry path params.",
                    parsed.ident
                ))
                .with_span(&parsed.ident));
            }
            let loader: syn::Path = lit.parse().map_err(darling::Error::from)?;
            Some(loader)
        }
        None => None,
    };

    let is_fallback = parsed
        .attrs
        .iter()
        .any(|attr| attr.path().is_ident("fallback"));

    Ok(RouteModel {
        ident: parsed.ident,
        fields: variant.fields.clone(),
        path: parsed.path,
        name,
        lazy,
        is_fallback,
    })
}

/* -------------------------------------------------------------------------------------------------
 * `#[derive(Routable)]` implementation
 * -----------------------------------------------------------------------------------------------*/
pub fn derive_routable_impl(input: TokenStream) -> TokenStream {
    let input_ast = parse_macro_input!(input as DeriveInput);
    let config = match RoutableConfiguration::from_derive_input(&input_ast) {
        Ok(config) => config,
        Err(err) => return err.write_errors().into(),
    };
    let data = match input_ast.data {
        Enum(ref e) => e,
        Struct(_) | Union(_) => {
            return syn::Error::new(
                input_ast.span(),
                "`#[derive(Routable)]` can only be used on enums.",
            )
            .to_compile_error()
            .into();
        }
    };

    let mut models = Vec::new();
    for variant in &data.variants {
        match parse_variant(variant) {
            Ok(model) => models.push(model),
            Err(err) => return err.write_errors().into(),
        }
    }

    for model in &models {
        if let Err(err) = crate::path_display::validate_path_and_fields(
            &model.path_str(),
            &model.fields,
            &model.ident,
        ) {
            return err.to_compile_error().into();
        }
    }

    if let Err(err) = validate_uniqueness(&models) {
        return err.to_compile_error().into();
    }

    let fallback_ident = match validate_fallback(&input_ast, &models) {
        Ok(ident) => ident,
        Err(err) => return err.to_compile_error().into(),
    };

    let enum_ident = &config.ident;

    let view_idents: Vec<Ident> = models
        .iter()
        .map(|model| view_ident_for(&config, model))
        .collect();

    let fallback_view = models
        .iter()
        .zip(&view_idents)
        .find(|(model, _)| model.is_fallback)
        .map(|(_, view)| view.clone())
        .unwrap_or_else(|| view_idents[0].clone());

    let descriptors = models.iter().map(|model| {
        let path = &model.path;
        let name = &model.name;
        if model.lazy.is_some() {
            quote! { ::leptos_routemap::RouteDescriptor::deferred(#path, #name) }
        } else {
            quote! { ::leptos_routemap::RouteDescriptor::new(#path, #name) }
        }
    });

    let children: Vec<TokenStream2> = models
        .iter()
        .zip(&view_idents)
        .map(|(model, view)| {
            let path = &model.path;
            quote! {
                ::leptos_router::components::Route(
                    ::leptos_router::components::RouteProps::builder()
                        .path(::leptos_router::path!(#path))
                        .view(#view)
                        .build())
            }
        })
        .collect();

    let deferred_wrappers = models
        .iter()
        .zip(&view_idents)
        .filter_map(|(model, view)| {
            model.lazy.as_ref().map(|loader| {
                quote! {
                    #[allow(non_snake_case, non_camel_case_types)]
                    #[::leptos::component]
                    fn #view() -> impl ::leptos::IntoView {
                        ::std::thread_local! {
                            static SOURCE: ::leptos_routemap::lazy::LazyView<
                                ::leptos_routemap::outlet::ViewCtor,
                            > = ::leptos_routemap::lazy::LazyView::new(|| #loader());
                        }
                        let source = SOURCE.with(::std::clone::Clone::clone);
                        ::leptos_routemap::outlet::Deferred(
                            ::leptos_routemap::outlet::DeferredProps::builder()
                                .source(source)
                                .build(),
                        )
                    }
                }
            })
        });

    let descriptor_arms = models.iter().enumerate().map(|(i, model)| {
        let variant_ident = &model.ident;
        let idx = syn::Index::from(i);
        let pattern = match &model.fields {
            Fields::Unit => quote!( #enum_ident::#variant_ident ),
            _ => quote!( #enum_ident::#variant_ident { .. } ),
        };
        quote! {
            #pattern => &<#enum_ident as ::leptos_routemap::Routable>::ROUTES[#idx]
        }
    });

    let transition = config.transition;

    let routable_impl = quote! {
        impl ::leptos_routemap::Routable for #enum_ident {
            const ROUTES: &'static [::leptos_routemap::RouteDescriptor] = &[
                #( #descriptors ),*
            ];

            fn routes() -> impl ::leptos::IntoView {
                ::leptos_router::components::Routes(
                    ::leptos_router::components::RoutesProps::builder()
                        .transition(#transition)
                        .fallback(#fallback_view)
                        .children(
                            ::leptos::children::ToChildren::to_children(move || {
                                (#(#children),*)
                            })
                        )
                        .build()
                )
            }

            fn flat_routes() -> impl ::leptos::IntoView {
                ::leptos_router::components::FlatRoutes(
                    ::leptos_router::components::FlatRoutesProps::builder()
                        .transition(#transition)
                        .fallback(#fallback_view)
                        .children(
                            ::leptos::children::ToChildren::to_children(move || {
                                (#(#children),*)
                            })
                        )
                        .build()
                )
            }

            fn fallback() -> impl ::leptos::IntoView {
                #fallback_view
            }

            fn descriptor(&self) -> &'static ::leptos_routemap::RouteDescriptor {
                match self {
                    #( #descriptor_arms, )*
                }
            }
        }
    };

    let display_impl = match crate::path_display::generate_display_impl(enum_ident, &models) {
        Ok(ts) => ts,
        Err(e) => return e.to_compile_error().into(),
    };

    let from_str_impl = crate::route_match::generate_from_str_impl(enum_ident, &models);
    let from_asref_impl = crate::route_match::generate_from_asref_impl(enum_ident, &fallback_ident);

    let expanded = quote! {
        #(#deferred_wrappers)*
        #routable_impl
        #display_impl
        #from_str_impl
        #from_asref_impl
    };
    crate::utils::format_generated_code(expanded).into()
}

/* -------------------------------------------------------------------------------------------------
 * Validation helpers
 * -----------------------------------------------------------------------------------------------*/
fn view_ident_for(config: &RoutableConfiguration, model: &RouteModel) -> Ident {
    if model.lazy.is_some() {
        crate::utils::build_deferred_view_name(&config.ident, &model.ident)
    } else {
        let name = format!("{}{}{}", config.view_prefix, model.ident, config.view_suffix);
        Ident::new(&name, model.ident.span())
    }
}

fn validate_uniqueness(models: &[RouteModel]) -> syn::Result<()> {
    for (i, model) in models.iter().enumerate() {
        for earlier in &models[..i] {
            if earlier.path_str() == model.path_str() {
                return Err(syn::Error::new(
                    model.ident.span(),
                    format!("Duplicate route path `{}`.", model.path_str()),
                ));
            }
            if earlier.name == model.name {
                return Err(syn::Error::new(
                    model.ident.span(),
                    format!("Duplicate route name `{}`.", model.name),
                ));
            }
        }
    }
    Ok(())
}

fn validate_fallback(input_ast: &DeriveInput, models: &[RouteModel]) -> syn::Result<Ident> {
    let mut fallback = None;
    for model in models {
        if !model.is_fallback {
            continue;
        }
        if fallback.is_some() {
            return Err(syn::Error::new(
                model.ident.span(),
                "Only one variant may be marked with `#[fallback]`.",
            ));
        }
        if !matches!(model.fields, Fields::Unit) {
            return Err(syn::Error::new(
                model.ident.span(),
                "The `#[fallback]` variant cannot carry fields.",
            ));
        }
        fallback = Some(model.ident.clone());
    }
    fallback.ok_or_else(|| {
        syn::Error::new(
            input_ast.span(),
            "No variant is marked with `#[fallback]`. Exactly one is required.",
        )
    })
}
