//! Leptos bindings for rendering deferred route views.

use std::rc::Rc;

use leptos::children::ViewFn;
use leptos::prelude::*;

use crate::lazy::{LazyView, LoadError};

/// A loaded view constructor: the "component definition" a deferred route
/// resolves to. Invoked on every render of the route.
pub type ViewCtor = Rc<dyn Fn() -> AnyView>;

/// Wraps any zero-argument component function as a [`ViewCtor`].
pub fn view_ctor<F, V>(f: F) -> ViewCtor
where
    F: Fn() -> V + 'static,
    V: IntoView + 'static,
{
    Rc::new(move || f().into_any())
}

/// Renders a deferred view binding.
///
/// While the load is in flight the optional `pending` view is shown. A
/// rejected load renders an inline notice; the failure itself is cached by
/// the [`LazyView`], so revisiting the route does not retry.
#[component]
pub fn Deferred(
    source: LazyView<ViewCtor>,
    #[prop(optional, into)] pending: ViewFn,
) -> impl IntoView {
    let state = RwSignal::new_local(source.peek().map(Ok::<ViewCtor, LoadError>));
    if state.get_untracked().is_none() {
        let source = source.clone();
        leptos::task::spawn_local(async move {
            state.set(Some(source.load().await));
        });
    }
    move || match state.get() {
        None => pending.run(),
        Some(Ok(ctor)) => ctor(),
        Some(Err(_)) => view! {
            <p class="deferred-load-error">"This view failed to load."</p>
        }
        .into_any(),
    }
}
